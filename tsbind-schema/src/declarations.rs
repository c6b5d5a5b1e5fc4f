//! Interface and class declarations.
//!
//! This module contains the data structures representing a parsed
//! declaration together with its members and heritage clauses.

use crate::types::{Parameter, TypeNode};
use serde::{Deserialize, Serialize};

/// Kind of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `interface`.
    Interface,
    /// `class`.
    Class,
    /// `type X = ...`.
    #[serde(rename = "type", alias = "typealias")]
    TypeAlias,
    /// `enum`.
    Enum,
    /// `function`.
    Function,
}

impl DeclarationKind {
    /// Returns the keyword for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
            Self::TypeAlias => "type",
            Self::Enum => "enum",
            Self::Function => "function",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property member (`name?: T`).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    /// Property name.
    pub name: String,
    /// Declared type.
    pub ty: TypeNode,
    /// Whether the property carries the `?` modifier.
    pub optional: bool,
    /// Documentation text.
    pub documentation: Option<String>,
}

impl PropertyMember {
    /// Creates a required property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            documentation: None,
        }
    }

    /// Marks the property optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// Method member (`name?(params): R`).
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Return type. Methods without an annotation return `any`.
    pub return_type: TypeNode,
    /// Whether the method carries the `?` modifier.
    pub optional: bool,
    /// Documentation text.
    pub documentation: Option<String>,
}

impl MethodMember {
    /// Creates a required method without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: TypeNode) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            optional: false,
            documentation: None,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Marks the method optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// Declaration member.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Property signature or declaration.
    Property(PropertyMember),
    /// Method signature or declaration.
    Method(MethodMember),
    /// Index signature declared directly on the declaration.
    IndexSignature {
        /// Key type.
        key: TypeNode,
        /// Value type.
        value: TypeNode,
    },
}

impl Member {
    /// Returns the member name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Property(p) => Some(&p.name),
            Self::Method(m) => Some(&m.name),
            Self::IndexSignature { .. } => None,
        }
    }
}

impl From<PropertyMember> for Member {
    fn from(value: PropertyMember) -> Self {
        Self::Property(value)
    }
}

impl From<MethodMember> for Member {
    fn from(value: MethodMember) -> Self {
        Self::Method(value)
    }
}

/// Interface or class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Declaration kind. Only `Interface` and `Class` are stored as
    /// declarations; other kinds are kept as plain statements.
    pub kind: DeclarationKind,
    /// Declaration name.
    pub name: String,
    /// Documentation text.
    pub documentation: Option<String>,
    /// Members in source order.
    pub members: Vec<Member>,
    /// Heritage references (`extends` / `implements`), each a reference
    /// type node.
    pub heritage: Vec<TypeNode>,
}

impl Declaration {
    /// Creates an empty interface declaration.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(DeclarationKind::Interface, name)
    }

    /// Creates an empty class declaration.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(DeclarationKind::Class, name)
    }

    fn with_kind(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            documentation: None,
            members: Vec::new(),
            heritage: Vec::new(),
        }
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Appends a heritage reference.
    #[must_use]
    pub fn extends(mut self, base: TypeNode) -> Self {
        self.heritage.push(base);
        self
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: impl Into<Member>) {
        self.members.push(member.into());
    }

    /// Returns true if this is an interface.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }

    /// Returns true if this is a class.
    #[must_use]
    pub fn is_class(&self) -> bool {
        self.kind == DeclarationKind::Class
    }
}
