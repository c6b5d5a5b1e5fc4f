//! C# spelling of mapped types.

use tsbind_core::TypeDescriptor;

/// Returns the C# spelling of `ty`.
///
/// Delegates and dictionaries are fully qualified so the generated file
/// needs no `using` directives.
#[must_use]
pub fn type_name(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive { primitive } => primitive.csharp_name().to_string(),
        TypeDescriptor::Array { element } => format!("{}[]", type_name(element)),
        TypeDescriptor::Nominal {
            name,
            type_arguments,
        } => {
            if type_arguments.is_empty() {
                name.clone()
            } else {
                format!("{}<{}>", name, type_list(type_arguments))
            }
        }
        TypeDescriptor::Action { parameters } => {
            if parameters.is_empty() {
                "System.Action".to_string()
            } else {
                format!("System.Action<{}>", type_list(parameters))
            }
        }
        TypeDescriptor::Func {
            parameters,
            returns,
        } => {
            let mut arguments: Vec<String> = parameters.iter().map(type_name).collect();
            arguments.push(type_name(returns));
            format!("System.Func<{}>", arguments.join(", "))
        }
        TypeDescriptor::Dictionary { key, value } => format!(
            "System.Collections.Generic.Dictionary<{}, {}>",
            type_name(key),
            type_name(value)
        ),
        TypeDescriptor::Nullable { inner } => format!("{}?", type_name(inner)),
        TypeDescriptor::Unknown => "object".to_string(),
    }
}

fn type_list(types: &[TypeDescriptor]) -> String {
    types.iter().map(type_name).collect::<Vec<_>>().join(", ")
}
