//! Target-side type descriptors.
//!
//! A [`TypeDescriptor`] is what every source type annotation becomes after
//! mapping. It is data only: rendering it as C# syntax is the job of a
//! serializer.

use serde::Serialize;

/// Primitive target types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    /// UTF-16 string.
    String,
    /// Double-precision floating point number.
    Double,
    /// Boolean.
    Boolean,
    /// No value. Only meaningful as a return type.
    Void,
    /// The `null` literal type.
    Null,
    /// Platform date/time value.
    DateTime,
}

impl PrimitiveKind {
    /// Returns the C# spelling of the primitive.
    #[must_use]
    pub const fn csharp_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Double => "double",
            Self::Boolean => "bool",
            Self::Void => "void",
            Self::Null => "object",
            Self::DateTime => "System.DateTime",
        }
    }
}

/// Mapped target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// Built-in primitive.
    Primitive {
        /// Primitive kind.
        primitive: PrimitiveKind,
    },
    /// Single-dimension array.
    Array {
        /// Element type.
        element: Box<TypeDescriptor>,
    },
    /// Reference to a declaration by name.
    Nominal {
        /// Declaration name.
        name: String,
        /// Mapped generic arguments, possibly empty.
        type_arguments: Vec<TypeDescriptor>,
    },
    /// Delegate without a return value.
    Action {
        /// Parameter types in declaration order.
        parameters: Vec<TypeDescriptor>,
    },
    /// Delegate with a return value.
    Func {
        /// Parameter types in declaration order.
        parameters: Vec<TypeDescriptor>,
        /// Return type.
        returns: Box<TypeDescriptor>,
    },
    /// Homogeneous key/value map.
    Dictionary {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// Value that may be absent.
    Nullable {
        /// Wrapped type. Never `Nullable` and never void.
        inner: Box<TypeDescriptor>,
    },
    /// Universal fallback type.
    Unknown,
}

impl TypeDescriptor {
    /// Creates a primitive descriptor.
    #[must_use]
    pub const fn primitive(primitive: PrimitiveKind) -> Self {
        Self::Primitive { primitive }
    }

    /// Creates the void primitive.
    #[must_use]
    pub const fn void() -> Self {
        Self::primitive(PrimitiveKind::Void)
    }

    /// Creates an array descriptor.
    #[must_use]
    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Creates a nominal descriptor without generic arguments.
    #[must_use]
    pub fn nominal(name: impl Into<String>) -> Self {
        Self::Nominal {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Creates a dictionary descriptor.
    #[must_use]
    pub fn dictionary(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Creates a delegate descriptor.
    ///
    /// A void `returns` yields [`TypeDescriptor::Action`], anything else a
    /// [`TypeDescriptor::Func`].
    #[must_use]
    pub fn delegate(parameters: Vec<TypeDescriptor>, returns: TypeDescriptor) -> Self {
        if returns.is_void() {
            Self::Action { parameters }
        } else {
            Self::Func {
                parameters,
                returns: Box::new(returns),
            }
        }
    }

    /// Wraps the descriptor in [`TypeDescriptor::Nullable`].
    ///
    /// Void and already-nullable descriptors are returned unchanged.
    #[must_use]
    pub fn into_nullable(self) -> Self {
        match self {
            Self::Nullable { .. } => self,
            _ if self.is_void() => self,
            other => Self::Nullable {
                inner: Box::new(other),
            },
        }
    }

    /// Returns true for the void primitive.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(
            self,
            Self::Primitive {
                primitive: PrimitiveKind::Void
            }
        )
    }

    /// Returns true for nullable descriptors.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable { .. })
    }
}
