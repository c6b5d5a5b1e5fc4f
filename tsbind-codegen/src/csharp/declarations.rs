//! Interface and class rendering.

use super::types::type_name;
use tsbind_core::{MethodBody, TargetDeclaration, TargetMember, TargetMethod, TargetProperty};

const INDENT: &str = "    ";

/// Generator for a single interface or class declaration.
pub struct DeclarationGenerator<'a> {
    declaration: &'a TargetDeclaration,
}

impl<'a> DeclarationGenerator<'a> {
    /// Creates a new declaration generator.
    #[must_use]
    pub fn new(declaration: &'a TargetDeclaration) -> Self {
        Self { declaration }
    }

    /// Generates the declaration, indented one level for the namespace.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let decl = self.declaration;

        push_doc(&mut output, INDENT, &decl.doc);
        output.push_str(&format!(
            "{}public partial {} {}",
            INDENT,
            decl.kind.keyword(),
            decl.name
        ));
        if !decl.base_types.is_empty() {
            let bases: Vec<String> = decl.base_types.iter().map(|b| type_name(&b.ty)).collect();
            output.push_str(&format!(" : {}", bases.join(", ")));
        }
        output.push('\n');
        output.push_str(&format!("{}{{\n", INDENT));

        let member_indent = format!("{INDENT}{INDENT}");
        for (i, member) in decl.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            match member {
                TargetMember::Property(p) => self.generate_property(&mut output, &member_indent, p),
                TargetMember::Method(m) => self.generate_method(&mut output, &member_indent, m),
            }
        }

        output.push_str(&format!("{}}}\n", INDENT));
        output
    }

    fn generate_property(&self, output: &mut String, indent: &str, property: &TargetProperty) {
        push_doc(output, indent, &property.doc);
        output.push_str(&format!(
            "{}public {} {} {{ get; set; }}\n",
            indent,
            type_name(&property.ty),
            property.name
        ));
    }

    fn generate_method(&self, output: &mut String, indent: &str, method: &TargetMethod) {
        push_doc(output, indent, &method.doc);

        let parameters: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", type_name(&p.ty), p.name))
            .collect();
        let signature = format!(
            "{}public {} {}({})",
            indent,
            type_name(&method.return_type),
            method.name,
            parameters.join(", ")
        );

        match method.body {
            MethodBody::None => {
                output.push_str(&signature);
                output.push_str(";\n");
            }
            MethodBody::NotImplemented => {
                output.push_str(&signature);
                output.push('\n');
                output.push_str(&format!("{}{{\n", indent));
                output.push_str(&format!(
                    "{}{}throw new System.NotImplementedException();\n",
                    indent, INDENT
                ));
                output.push_str(&format!("{}}}\n", indent));
            }
        }
    }
}

fn push_doc(output: &mut String, indent: &str, doc: &[String]) {
    if doc.is_empty() {
        return;
    }
    output.push_str(&format!("{}/// <summary>\n", indent));
    for line in doc {
        output.push_str(&format!("{}/// {}\n", indent, line));
    }
    output.push_str(&format!("{}/// </summary>\n", indent));
}
