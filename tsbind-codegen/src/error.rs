//! Error types for code generation.

use thiserror::Error;
use tsbind_schema::{DeclarationKind, StoreError};

/// Error type for code generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Declaration store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The requested root symbol could not be resolved.
    #[error("{kind} '{symbol}' not found in unit '{unit}'")]
    SymbolNotFound {
        /// Requested unit.
        unit: String,
        /// Requested symbol.
        symbol: String,
        /// Requested declaration kind.
        kind: DeclarationKind,
    },

    /// The requested declaration kind cannot be generated.
    #[error("declaration kind '{kind}' is not supported")]
    UnsupportedDeclarationKind {
        /// Requested kind.
        kind: DeclarationKind,
    },
}

impl CodegenError {
    /// Creates a symbol not found error.
    pub fn symbol_not_found(
        unit: impl Into<String>,
        symbol: impl Into<String>,
        kind: DeclarationKind,
    ) -> Self {
        Self::SymbolNotFound {
            unit: unit.into(),
            symbol: symbol.into(),
            kind,
        }
    }
}
