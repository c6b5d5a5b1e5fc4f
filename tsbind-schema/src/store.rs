//! Registry of parsed units with symbol resolution.
//!
//! Lookups follow named imports across units: a symbol that a unit imports
//! from `'@scope/other'` is resolved in the unit registered as `other`.

use crate::declarations::{Declaration, DeclarationKind};
use crate::error::StoreError;
use crate::unit::Unit;
use std::collections::{BTreeMap, HashSet};

/// Declaration found by [`DeclarationStore::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    /// Unit that owns the declaration. Type references inside the
    /// declaration are resolved relative to this unit.
    pub unit: &'a str,
    /// The declaration.
    pub declaration: &'a Declaration,
}

/// In-memory registry of parsed units keyed by unit name.
#[derive(Debug, Clone, Default)]
pub struct DeclarationStore {
    units: BTreeMap<String, Unit>,
}

impl DeclarationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parsed unit.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateUnit`] if `name` is already taken.
    pub fn register(&mut self, name: impl Into<String>, unit: Unit) -> Result<(), StoreError> {
        let name = name.into();
        if self.units.contains_key(&name) {
            return Err(StoreError::duplicate(name));
        }
        tracing::debug!(
            "Registered unit '{}' with {} statements",
            name,
            unit.statements.len()
        );
        self.units.insert(name, unit);
        Ok(())
    }

    /// Returns true if a unit with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Gets a unit by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Returns the registered unit names in sorted order.
    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    /// Returns the number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if no units are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Resolves `symbol` of the given kind starting in `unit`.
    ///
    /// A local declaration wins over an import of the same name. Imports
    /// are followed through any number of units; a chain that loops back
    /// on itself resolves to nothing.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the unit is unknown or the
    /// symbol is neither declared nor imported there.
    pub fn resolve(
        &self,
        unit: &str,
        symbol: &str,
        kind: DeclarationKind,
    ) -> Result<Resolved<'_>, StoreError> {
        let mut visited = HashSet::new();
        self.resolve_in(unit, symbol, kind, &mut visited)
            .ok_or_else(|| StoreError::not_found(unit, symbol, kind))
    }

    /// Resolves `symbol` as an interface, then as a class.
    #[must_use]
    pub fn resolve_any(&self, unit: &str, symbol: &str) -> Option<Resolved<'_>> {
        [DeclarationKind::Interface, DeclarationKind::Class]
            .into_iter()
            .find_map(|kind| self.resolve(unit, symbol, kind).ok())
    }

    fn resolve_in<'a>(
        &'a self,
        unit: &str,
        symbol: &str,
        kind: DeclarationKind,
        visited: &mut HashSet<(String, String)>,
    ) -> Option<Resolved<'a>> {
        if !visited.insert((unit.to_string(), symbol.to_string())) {
            tracing::debug!("Import cycle while resolving '{}' in '{}'", symbol, unit);
            return None;
        }

        let (unit_name, source) = self.units.get_key_value(unit)?;

        if let Some(declaration) = source.find_declaration(symbol, kind) {
            return Some(Resolved {
                unit: unit_name,
                declaration,
            });
        }

        let (import, binding) = source.find_import(symbol)?;
        tracing::trace!(
            "Following import of '{}' from '{}' to unit '{}'",
            symbol,
            unit_name,
            import.target_unit()
        );
        self.resolve_in(import.target_unit(), binding.imported_name(), kind, visited)
    }
}
