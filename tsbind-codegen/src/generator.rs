//! Generation entry points.

use crate::closure::{ClosureDriver, PendingRequest};
use crate::config::GeneratorConfig;
use crate::csharp;
use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use tsbind_core::OutputUnit;
use tsbind_schema::{DeclarationKind, DeclarationStore, Unit};

/// Generates the requested declaration and everything it transitively
/// references, using the default configuration.
///
/// # Arguments
/// * `requested_unit` - Unit the root symbol is looked up in
/// * `requested_symbol` - Root symbol name
/// * `kind` - Root declaration kind, interface or class
/// * `output_namespace` - Namespace wrapping the generated declarations
/// * `store` - Populated declaration store
///
/// # Errors
/// Returns [`CodegenError::UnsupportedDeclarationKind`] if `kind` is not an
/// interface or class, and [`CodegenError::SymbolNotFound`] if the root
/// cannot be resolved. Unresolvable transitive references are skipped.
pub fn generate(
    requested_unit: &str,
    requested_symbol: &str,
    kind: DeclarationKind,
    output_namespace: &str,
    store: &DeclarationStore,
) -> Result<OutputUnit, CodegenError> {
    generate_with_config(
        requested_unit,
        requested_symbol,
        kind,
        output_namespace,
        store,
        &GeneratorConfig::default(),
    )
}

/// Same as [`generate`] with an explicit configuration.
///
/// # Errors
/// See [`generate`].
pub fn generate_with_config(
    requested_unit: &str,
    requested_symbol: &str,
    kind: DeclarationKind,
    output_namespace: &str,
    store: &DeclarationStore,
    config: &GeneratorConfig,
) -> Result<OutputUnit, CodegenError> {
    if !matches!(kind, DeclarationKind::Interface | DeclarationKind::Class) {
        return Err(CodegenError::UnsupportedDeclarationKind { kind });
    }

    let root = store
        .resolve(requested_unit, requested_symbol, kind)
        .map_err(|e| {
            tracing::debug!("Root lookup failed: {}", e);
            CodegenError::symbol_not_found(requested_unit, requested_symbol, kind)
        })?;
    tracing::debug!(
        "Resolved root {} '{}' in unit '{}'",
        kind,
        requested_symbol,
        root.unit
    );

    let mut driver = ClosureDriver::new(store, config);
    driver.seed(PendingRequest::new(requested_unit, requested_symbol), kind);
    driver.run();

    let output = driver.finish(output_namespace);
    tracing::debug!(
        "Generated {} declarations into namespace '{}'",
        output.len(),
        output.namespace
    );
    Ok(output)
}

/// A generation request as supplied by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Unit the root symbol is looked up in.
    pub unit: String,
    /// Root symbol name.
    pub symbol: String,
    /// Root declaration kind.
    pub kind: DeclarationKind,
    /// Output namespace.
    pub namespace: String,
}

impl GenerationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        unit: impl Into<String>,
        symbol: impl Into<String>,
        kind: DeclarationKind,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            unit: unit.into(),
            symbol: symbol.into(),
            kind,
            namespace: namespace.into(),
        }
    }
}

/// Owns a declaration store and a configuration.
#[derive(Debug, Default)]
pub struct Generator {
    store: DeclarationStore,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a parsed unit.
    ///
    /// # Errors
    /// Returns an error if a unit with the same name is already registered.
    pub fn register_unit(&mut self, name: impl Into<String>, unit: Unit) -> Result<(), CodegenError> {
        self.store.register(name, unit)?;
        Ok(())
    }

    /// Returns the declaration store.
    #[must_use]
    pub fn store(&self) -> &DeclarationStore {
        &self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs a generation request.
    ///
    /// # Errors
    /// See [`generate`].
    pub fn generate(&self, request: &GenerationRequest) -> Result<OutputUnit, CodegenError> {
        generate_with_config(
            &request.unit,
            &request.symbol,
            request.kind,
            &request.namespace,
            &self.store,
            &self.config,
        )
    }

    /// Runs a generation request and renders the result as C# source.
    ///
    /// # Errors
    /// See [`generate`].
    pub fn generate_csharp(&self, request: &GenerationRequest) -> Result<String, CodegenError> {
        let output = self.generate(request)?;
        Ok(csharp::render(&output))
    }
}
