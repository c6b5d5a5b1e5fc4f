//! # tsbind
//!
//! Generates C# interop declarations from TypeScript declaration files.
//!
//! Given a set of parsed units and a root interface or class, tsbind emits
//! the root plus every declaration it references, following imports across
//! units, as `public partial` C# interfaces and classes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tsbind::prelude::*;
//!
//! let mut generator = Generator::new();
//! generator.register_unit("tsd", unit)?;
//!
//! let request = GenerationRequest::new("tsd", "SomeType", DeclarationKind::Interface, "My.Code");
//! let source = generator.generate_csharp(&request)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Target type descriptors and generated declaration model
//! - [`schema`] - Source declaration model and cross-unit symbol store
//! - [`codegen`] - Type mapping, transitive generation and C# rendering

pub mod prelude;

/// Target type descriptors and generated declarations.
pub mod core {
    pub use tsbind_core::*;
}

/// Source declarations and the declaration store.
pub mod schema {
    pub use tsbind_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use tsbind_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tsbind_codegen::{
    CodegenError, GenerationRequest, Generator, GeneratorConfig, csharp::render, generate,
};
pub use tsbind_core::OutputUnit;
pub use tsbind_schema::{DeclarationKind, DeclarationStore, Unit};
