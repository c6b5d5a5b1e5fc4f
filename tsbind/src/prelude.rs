//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tsbind::prelude::*;
//! ```

// Source model
pub use tsbind_schema::{
    Declaration, DeclarationKind, DeclarationStore, ImportDecl, ImportSpecifier, Keyword, Member,
    MethodMember, Parameter, PropertyMember, Statement, StoreError, TypeNode, Unit,
    unit_name_from_path,
};

// Target model
pub use tsbind_core::{
    OutputUnit, PrimitiveKind, TargetDeclaration, TargetKind, TargetMember, TypeDescriptor,
};

// Generation
pub use tsbind_codegen::csharp::render;
pub use tsbind_codegen::{
    ClosureDriver, ClosureState, CodegenError, FunctionMemberStyle, GenerationRequest, Generator,
    GeneratorConfig, MemberNaming, PendingRequest, generate, generate_with_config,
};
