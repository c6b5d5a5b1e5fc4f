//! # tsbind Codegen
//!
//! Generation of C# declarations from TypeScript declarations.
//!
//! This crate provides:
//! - Type mapping from source annotations to target descriptors
//! - Interface and class emission with member naming rules
//! - Transitive generation of every referenced declaration
//! - A C# renderer for the generated output

pub mod closure;
pub mod config;
pub mod csharp;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod mapper;

pub use closure::{ClosureDriver, ClosureState, PendingQueue, PendingRequest};
pub use config::{FunctionMemberStyle, GeneratorConfig, MemberNaming};
pub use emitter::DeclarationEmitter;
pub use error::CodegenError;
pub use generator::{GenerationRequest, Generator, generate, generate_with_config};
pub use mapper::{ReferenceSink, TypeMapper};
