//! Error types for the declaration store.

use crate::declarations::DeclarationKind;
use thiserror::Error;

/// Error type for declaration store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unit with the same name is already registered.
    #[error("unit '{unit}' is already registered")]
    DuplicateUnit {
        /// Unit name.
        unit: String,
    },

    /// The symbol could not be resolved.
    #[error("{kind} '{symbol}' not found in unit '{unit}'")]
    NotFound {
        /// Unit the lookup started in.
        unit: String,
        /// Requested symbol.
        symbol: String,
        /// Requested declaration kind.
        kind: DeclarationKind,
    },
}

impl StoreError {
    /// Creates a duplicate unit error.
    pub fn duplicate(unit: impl Into<String>) -> Self {
        Self::DuplicateUnit { unit: unit.into() }
    }

    /// Creates a not found error.
    pub fn not_found(
        unit: impl Into<String>,
        symbol: impl Into<String>,
        kind: DeclarationKind,
    ) -> Self {
        Self::NotFound {
            unit: unit.into(),
            symbol: symbol.into(),
            kind,
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
