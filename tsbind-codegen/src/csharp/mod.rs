//! C# source rendering.

pub mod declarations;
pub mod types;

pub use declarations::DeclarationGenerator;
pub use types::type_name;

use tsbind_core::OutputUnit;

/// Renders an output unit as a C# compilation unit.
///
/// Declarations are wrapped in a block-scoped namespace and emitted in
/// output order.
#[must_use]
pub fn render(unit: &OutputUnit) -> String {
    let mut output = String::new();

    output.push_str(&format!("namespace {}\n{{\n", unit.namespace));
    for (i, declaration) in unit.declarations.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&DeclarationGenerator::new(declaration).generate());
    }
    output.push_str("}\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsbind_core::{TargetDeclaration, TargetKind};

    #[test]
    fn test_render_empty_namespace() {
        let output = render(&OutputUnit::new("Test"));
        assert_eq!(output, "namespace Test\n{\n}\n");
    }

    #[test]
    fn test_render_declarations_in_order() {
        let mut unit = OutputUnit::new("My.Code");
        unit.declarations
            .push(TargetDeclaration::new(TargetKind::Interface, "IFirst", "tsd"));
        unit.declarations
            .push(TargetDeclaration::new(TargetKind::Class, "Second", "tsd"));

        let output = render(&unit);
        assert!(output.starts_with("namespace My.Code\n{\n"));
        let first = output
            .find("public partial interface IFirst")
            .expect("IFirst missing");
        let second = output
            .find("public partial class Second")
            .expect("Second missing");
        assert!(first < second);
        assert!(output.ends_with("}\n"));
    }
}
