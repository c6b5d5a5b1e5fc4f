//! Source type annotations.
//!
//! This module contains the data structures a declaration parser produces
//! for TypeScript type annotations. Only the shapes the generator maps are
//! modelled in detail; everything else is carried as an unsupported shape.

/// Keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `string`.
    String,
    /// `number`.
    Number,
    /// `boolean`.
    Boolean,
    /// `any`.
    Any,
    /// `void`.
    Void,
    /// `null`.
    Null,
    /// `undefined`.
    Undefined,
    /// `unknown`.
    Unknown,
    /// `object`.
    Object,
    /// `never`.
    Never,
}

impl Keyword {
    /// Returns the source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Void => "void",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Object => "object",
            Self::Never => "never",
        }
    }
}

/// Parameter of a function type, method or index signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type. Untyped parameters are `any`.
    pub ty: TypeNode,
    /// Whether the parameter carries the `?` modifier.
    pub optional: bool,
}

impl Parameter {
    /// Creates a required parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Creates an optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }
}

/// Member of a type literal (`{ ... }` in type position).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeLiteralMember {
    /// `[key: K]: V`.
    IndexSignature {
        /// Key parameter name.
        key_name: String,
        /// Key type.
        key: TypeNode,
        /// Value type.
        value: TypeNode,
    },
    /// `name?: T`.
    Property {
        /// Property name.
        name: String,
        /// Property type.
        ty: TypeNode,
        /// Whether the property is optional.
        optional: bool,
    },
    /// `name(params): R`.
    Method {
        /// Method name.
        name: String,
        /// Parameters.
        parameters: Vec<Parameter>,
        /// Return type.
        return_type: TypeNode,
    },
}

/// Type annotation node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// Keyword type such as `string`.
    Keyword(Keyword),
    /// `T[]`.
    Array(Box<TypeNode>),
    /// `Name` or `Name<Args>`.
    Reference {
        /// Referenced name.
        name: String,
        /// Generic arguments, possibly empty.
        type_arguments: Vec<TypeNode>,
    },
    /// `(params) => R`.
    Function {
        /// Parameters.
        parameters: Vec<Parameter>,
        /// Return type.
        return_type: Box<TypeNode>,
    },
    /// `{ ... }`.
    TypeLiteral(Vec<TypeLiteralMember>),
    /// `A | B`.
    Union(Vec<TypeNode>),
    /// `A & B`.
    Intersection(Vec<TypeNode>),
    /// `[A, B]`.
    Tuple(Vec<TypeNode>),
    /// Literal type such as `'click'` or `42`.
    Literal(String),
    /// Any other construct, kept as source text.
    Unrecognized(String),
}

impl TypeNode {
    /// `string`.
    #[must_use]
    pub const fn string() -> Self {
        Self::Keyword(Keyword::String)
    }

    /// `number`.
    #[must_use]
    pub const fn number() -> Self {
        Self::Keyword(Keyword::Number)
    }

    /// `boolean`.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Keyword(Keyword::Boolean)
    }

    /// `any`.
    #[must_use]
    pub const fn any() -> Self {
        Self::Keyword(Keyword::Any)
    }

    /// `void`.
    #[must_use]
    pub const fn void() -> Self {
        Self::Keyword(Keyword::Void)
    }

    /// `T[]`.
    #[must_use]
    pub fn array(element: TypeNode) -> Self {
        Self::Array(Box::new(element))
    }

    /// Reference without generic arguments.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Reference with generic arguments.
    #[must_use]
    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeNode>) -> Self {
        Self::Reference {
            name: name.into(),
            type_arguments,
        }
    }

    /// Function type.
    #[must_use]
    pub fn function(parameters: Vec<Parameter>, return_type: TypeNode) -> Self {
        Self::Function {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    /// `{ [key_name: key]: value }`.
    #[must_use]
    pub fn index_signature(key_name: impl Into<String>, key: TypeNode, value: TypeNode) -> Self {
        Self::TypeLiteral(vec![TypeLiteralMember::IndexSignature {
            key_name: key_name.into(),
            key,
            value,
        }])
    }

    /// Returns a short description of the node shape, used in diagnostics.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Array(_) => "array",
            Self::Reference { .. } => "reference",
            Self::Function { .. } => "function",
            Self::TypeLiteral(_) => "type literal",
            Self::Union(_) => "union",
            Self::Intersection(_) => "intersection",
            Self::Tuple(_) => "tuple",
            Self::Literal(_) => "literal",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}
