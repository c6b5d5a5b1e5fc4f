//! # tsbind Core
//!
//! Target-side data model shared by the tsbind crates.
//!
//! This crate provides:
//! - [`TypeDescriptor`], the mapped form of a source type annotation
//! - The generated declaration model ([`TargetDeclaration`], [`OutputUnit`])
//! - C# identifier helpers (reserved-word escaping, PascalCase)

pub mod descriptor;
pub mod naming;
pub mod target;

pub use descriptor::{PrimitiveKind, TypeDescriptor};
pub use naming::{escape_identifier, is_reserved_word, sanitize_identifier, to_pascal_case};
pub use target::{
    BaseType, MethodBody, OutputUnit, TargetDeclaration, TargetKind, TargetMember, TargetMethod,
    TargetParameter, TargetProperty,
};
