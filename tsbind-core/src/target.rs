//! Target declaration model.
//!
//! The generator assembles these values; a serializer turns them into
//! source text.

use crate::descriptor::TypeDescriptor;
use serde::Serialize;

/// Kind of a generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// `public partial interface`.
    Interface,
    /// `public partial class`.
    Class,
}

impl TargetKind {
    /// Returns the C# keyword for the declaration kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
        }
    }
}

/// Base type listed in a declaration's heritage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseType {
    /// Mapped base type.
    pub ty: TypeDescriptor,
    /// Unit the base declaration was found in, if it could be resolved.
    pub resolved_in: Option<String>,
}

/// Body of a generated method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodBody {
    /// Signature only.
    None,
    /// Body that throws `NotImplementedException`.
    NotImplemented,
}

/// Generated method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetParameter {
    /// Identifier as emitted, escaped if needed.
    pub name: String,
    /// Name in the source declaration.
    pub source_name: String,
    /// Mapped type.
    pub ty: TypeDescriptor,
}

/// Generated property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProperty {
    /// Identifier as emitted.
    pub name: String,
    /// Name in the source declaration.
    pub source_name: String,
    /// Mapped type.
    pub ty: TypeDescriptor,
    /// Documentation lines.
    pub doc: Vec<String>,
}

/// Generated method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMethod {
    /// Identifier as emitted.
    pub name: String,
    /// Name in the source declaration.
    pub source_name: String,
    /// Mapped return type.
    pub return_type: TypeDescriptor,
    /// Parameters in declaration order.
    pub parameters: Vec<TargetParameter>,
    /// Documentation lines.
    pub doc: Vec<String>,
    /// Method body.
    pub body: MethodBody,
}

/// Generated member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum TargetMember {
    /// Property with getter and setter.
    Property(TargetProperty),
    /// Method.
    Method(TargetMethod),
}

impl TargetMember {
    /// Returns the emitted member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Returns the property, if this member is one.
    #[must_use]
    pub fn as_property(&self) -> Option<&TargetProperty> {
        match self {
            Self::Property(p) => Some(p),
            Self::Method(_) => None,
        }
    }

    /// Returns the method, if this member is one.
    #[must_use]
    pub fn as_method(&self) -> Option<&TargetMethod> {
        match self {
            Self::Method(m) => Some(m),
            Self::Property(_) => None,
        }
    }
}

/// Generated interface or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDeclaration {
    /// Declaration kind.
    pub kind: TargetKind,
    /// Declaration name.
    pub name: String,
    /// Unit the source declaration came from.
    pub origin_unit: String,
    /// Documentation lines.
    pub doc: Vec<String>,
    /// Base types in heritage order.
    pub base_types: Vec<BaseType>,
    /// Members in source order.
    pub members: Vec<TargetMember>,
}

impl TargetDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(kind: TargetKind, name: impl Into<String>, origin_unit: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            origin_unit: origin_unit.into(),
            doc: Vec::new(),
            base_types: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Looks up a member by its emitted name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&TargetMember> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Iterates over the properties.
    pub fn properties(&self) -> impl Iterator<Item = &TargetProperty> {
        self.members.iter().filter_map(TargetMember::as_property)
    }

    /// Iterates over the methods.
    pub fn methods(&self) -> impl Iterator<Item = &TargetMethod> {
        self.members.iter().filter_map(TargetMember::as_method)
    }
}

/// Result of one generation run: declarations wrapped in a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputUnit {
    /// Wrapper namespace name.
    pub namespace: String,
    /// Declarations, requested declaration first.
    pub declarations: Vec<TargetDeclaration>,
}

impl OutputUnit {
    /// Creates an empty output unit.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            declarations: Vec::new(),
        }
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TargetDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Returns the declaration names in output order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
