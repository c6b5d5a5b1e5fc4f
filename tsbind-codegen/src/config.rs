//! Generator configuration.

use serde::{Deserialize, Serialize};

/// How member names are spelled in the generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberNaming {
    /// Upper-case the first letter (`prop1` becomes `Prop1`).
    #[default]
    PascalCase,
    /// Keep the source spelling.
    Preserve,
}

/// How properties whose type is a function type are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionMemberStyle {
    /// Property typed as `Action<..>` / `Func<..>`.
    #[default]
    Property,
    /// Method whose parameters come from the function type.
    Method,
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Member name casing.
    pub member_naming: MemberNaming,
    /// Rendering of function-typed properties.
    pub function_members: FunctionMemberStyle,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member naming.
    #[must_use]
    pub fn member_naming(mut self, naming: MemberNaming) -> Self {
        self.member_naming = naming;
        self
    }

    /// Sets the function member style.
    #[must_use]
    pub fn function_members(mut self, style: FunctionMemberStyle) -> Self {
        self.function_members = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.member_naming, MemberNaming::PascalCase);
        assert_eq!(config.function_members, FunctionMemberStyle::Property);
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .member_naming(MemberNaming::Preserve)
            .function_members(FunctionMemberStyle::Method);
        assert_eq!(config.member_naming, MemberNaming::Preserve);
        assert_eq!(config.function_members, FunctionMemberStyle::Method);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"memberNaming":"preserve"}"#).expect("Failed to parse");
        assert_eq!(config.member_naming, MemberNaming::Preserve);
        assert_eq!(config.function_members, FunctionMemberStyle::Property);
    }
}
