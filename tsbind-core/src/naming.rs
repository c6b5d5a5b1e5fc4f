//! Identifier conversion for generated C# declarations.

/// C# reserved keywords. Contextual keywords are valid identifiers and are
/// not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "base",
    "bool",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "checked",
    "class",
    "const",
    "continue",
    "decimal",
    "default",
    "delegate",
    "do",
    "double",
    "else",
    "enum",
    "event",
    "explicit",
    "extern",
    "false",
    "finally",
    "fixed",
    "float",
    "for",
    "foreach",
    "goto",
    "if",
    "implicit",
    "in",
    "int",
    "interface",
    "internal",
    "is",
    "lock",
    "long",
    "namespace",
    "new",
    "null",
    "object",
    "operator",
    "out",
    "override",
    "params",
    "private",
    "protected",
    "public",
    "readonly",
    "ref",
    "return",
    "sbyte",
    "sealed",
    "short",
    "sizeof",
    "stackalloc",
    "static",
    "string",
    "struct",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "uint",
    "ulong",
    "unchecked",
    "unsafe",
    "ushort",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
];

/// Returns true if `name` is a C# reserved keyword.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    CSHARP_KEYWORDS.binary_search(&name).is_ok()
}

/// Escapes a reserved keyword with the verbatim `@` prefix.
///
/// Names that are not keywords are returned unchanged.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    if is_reserved_word(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Replaces characters that cannot appear in a C# identifier.
///
/// `$` and any other non-alphanumeric character become `_`, and a leading
/// digit gets a `_` prefix.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result.push('_');
    }
    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    result
}

/// Converts a member name to PascalCase.
///
/// The first character and every character following a `-` or whitespace
/// are upper-cased; separators are dropped. Underscores are kept as-is.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '-' || c.is_whitespace() {
            capitalize_next = true;
        } else if capitalize_next && c != '_' {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
