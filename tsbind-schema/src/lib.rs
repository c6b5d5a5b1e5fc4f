//! # tsbind Schema
//!
//! Source declaration model and declaration store.
//!
//! This crate provides:
//! - Type annotation nodes produced by a TypeScript declaration parser
//! - Interface and class declarations with their members
//! - Parsed units with import statements
//! - A store that resolves symbols across units by following imports

pub mod declarations;
pub mod error;
pub mod store;
pub mod types;
pub mod unit;

pub use declarations::{Declaration, DeclarationKind, Member, MethodMember, PropertyMember};
pub use error::StoreError;
pub use store::{DeclarationStore, Resolved};
pub use types::{Keyword, Parameter, TypeLiteralMember, TypeNode};
pub use unit::{ImportDecl, ImportSpecifier, Statement, Unit, unit_name_from_path};
