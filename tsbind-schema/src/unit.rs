//! Parsed source units.
//!
//! A [`Unit`] holds the top-level statements of one parsed declaration file
//! or package.

use crate::declarations::{Declaration, DeclarationKind};

/// One binding of a named import (`A` or `A as B`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Local binding name.
    pub name: String,
    /// Exported name in the source module when renamed with `as`.
    pub property_name: Option<String>,
}

impl ImportSpecifier {
    /// Creates a plain binding.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_name: None,
        }
    }

    /// Creates a renamed binding (`imported as local`).
    #[must_use]
    pub fn renamed(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            name: local.into(),
            property_name: Some(imported.into()),
        }
    }

    /// Returns the name the binding has in the module it comes from.
    #[must_use]
    pub fn imported_name(&self) -> &str {
        self.property_name.as_deref().unwrap_or(&self.name)
    }
}

/// `import { ... } from 'specifier'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Named bindings.
    pub specifiers: Vec<ImportSpecifier>,
    /// Module specifier text, without quotes.
    pub module_specifier: String,
}

impl ImportDecl {
    /// Creates an import of plain bindings.
    #[must_use]
    pub fn named<I, S>(names: I, module_specifier: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            specifiers: names.into_iter().map(ImportSpecifier::new).collect(),
            module_specifier: module_specifier.into(),
        }
    }

    /// Creates an import from explicit specifiers.
    #[must_use]
    pub fn new(specifiers: Vec<ImportSpecifier>, module_specifier: impl Into<String>) -> Self {
        Self {
            specifiers,
            module_specifier: module_specifier.into(),
        }
    }

    /// Returns the binding whose local name is `name`.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&ImportSpecifier> {
        self.specifiers.iter().find(|s| s.name == name)
    }

    /// Returns the unit name the module specifier refers to.
    ///
    /// This is the final path segment (`'@scope/tsd2'` gives `tsd2`), or
    /// the whole specifier if it has no `/`.
    #[must_use]
    pub fn target_unit(&self) -> &str {
        match self.module_specifier.rfind('/') {
            Some(idx) => &self.module_specifier[idx + 1..],
            None => &self.module_specifier,
        }
    }
}

/// Top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Interface or class declaration.
    Declaration(Declaration),
    /// Import statement.
    Import(ImportDecl),
    /// Declaration the generator does not translate (type alias, enum,
    /// function).
    Other {
        /// Declaration kind.
        kind: DeclarationKind,
        /// Declared name.
        name: String,
    },
}

/// Parsed source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Unit {
    /// Creates an empty unit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.statements.push(Statement::Declaration(declaration));
        self
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: ImportDecl) -> Self {
        self.statements.push(Statement::Import(import));
        self
    }

    /// Appends an arbitrary statement.
    #[must_use]
    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Adds a statement.
    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Iterates over interface and class declarations.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Declaration(d) => Some(d),
            _ => None,
        })
    }

    /// Iterates over import statements.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Import(i) => Some(i),
            _ => None,
        })
    }

    /// Finds the first declaration of `kind` named `name`.
    #[must_use]
    pub fn find_declaration(&self, name: &str, kind: DeclarationKind) -> Option<&Declaration> {
        self.declarations()
            .find(|d| d.kind == kind && d.name == name)
    }

    /// Finds the first import binding `name` locally.
    #[must_use]
    pub fn find_import(&self, name: &str) -> Option<(&ImportDecl, &ImportSpecifier)> {
        self.imports()
            .find_map(|import| import.binding(name).map(|binding| (import, binding)))
    }
}

/// Derives a unit registration name from a file path or package name.
///
/// Directories and declaration-file extensions are stripped:
/// `defs/TSD1.d.ts` gives `TSD1`.
#[must_use]
pub fn unit_name_from_path(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    [".d.ts", ".d.mts", ".d.cts", ".ts"]
        .iter()
        .find_map(|ext| file.strip_suffix(ext))
        .unwrap_or(file)
}
