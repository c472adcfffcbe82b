//! Import statement model and per-item classification
//!
//! An import statement is lifted into [`ImportStatement`] once, with relative
//! `from` imports already made absolute, so every later step dispatches on a
//! single enum instead of re-inspecting the syntax node.

use anyhow::Result;
use log::trace;
use ruff_python_ast::{Alias, Stmt, StmtImportFrom};

use crate::{error::TransformError, resolver::ModuleResolution};

/// The name used by `from module import *`
pub const WILDCARD: &str = "*";

/// One `name [as alias]` entry of an import statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

impl From<&Alias> for ImportedName {
    fn from(alias: &Alias) -> Self {
        Self {
            name: alias.name.to_string(),
            alias: alias.asname.as_ref().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatement {
    /// `import a.b.c [as x], d`
    Plain { names: Vec<ImportedName> },
    /// `from module import name [as alias], ...` with `module` absolute
    From {
        module: String,
        names: Vec<ImportedName>,
    },
}

impl ImportStatement {
    /// Lift an import statement; `Ok(None)` for any other statement
    pub fn from_stmt(stmt: &Stmt, context: &ModuleContext) -> Result<Option<Self>> {
        let statement = match stmt {
            Stmt::Import(import) => Self::Plain {
                names: import.names.iter().map(ImportedName::from).collect(),
            },
            Stmt::ImportFrom(import_from) => Self::From {
                module: context.absolute_module(import_from)?,
                names: import_from.names.iter().map(ImportedName::from).collect(),
            },
            _ => return Ok(None),
        };
        Ok(Some(statement))
    }

    /// The module whose location decides whether the statement is transformed
    pub fn base_module(&self) -> &str {
        match self {
            Self::Plain { names } => names.first().map_or("", |imported| imported.name.as_str()),
            Self::From { module, .. } => module,
        }
    }

    pub fn names(&self) -> &[ImportedName] {
        match self {
            Self::Plain { names } | Self::From { names, .. } => names,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain { .. })
    }
}

/// Which module a statement lives in, for resolving relative imports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleContext {
    /// Dotted name of the module, unknown for scripts outside the index
    pub name: Option<String>,
    /// Whether the module is a package (`__init__.py`)
    pub is_package: bool,
}

impl ModuleContext {
    pub fn new(name: Option<String>, is_package: bool) -> Self {
        Self { name, is_package }
    }

    /// Absolute module path of a from-import
    pub fn absolute_module(&self, import_from: &StmtImportFrom) -> Result<String> {
        let module = import_from.module.as_ref().map(|module| module.as_str());
        if import_from.level == 0 {
            return Ok(module.unwrap_or_default().to_owned());
        }

        let invalid = || TransformError::InvalidRelativeImport {
            import: format!(
                "{}{}",
                ".".repeat(import_from.level as usize),
                module.unwrap_or_default()
            ),
            module: self.name.clone(),
        };

        let name = self.name.as_deref().ok_or_else(invalid)?;
        let mut package: Vec<&str> = name.split('.').collect();
        if !self.is_package {
            package.pop();
        }

        // One dot is the current package, every further dot climbs a level
        let climb = import_from.level as usize - 1;
        if package.len() <= climb {
            return Err(invalid().into());
        }
        package.truncate(package.len() - climb);

        let mut absolute = package.join(".");
        if let Some(module) = module {
            absolute.push('.');
            absolute.push_str(module);
        }
        trace!("Relative import in {name} resolved to '{absolute}'");
        Ok(absolute)
    }
}

/// An imported name after deciding whether it is a submodule or an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub requested_name: String,
    pub alias: Option<String>,
    /// Module whose source has to be embedded for this item
    pub resolved_path: String,
    pub is_module: bool,
}

impl ResolvedItem {
    pub fn is_wildcard(&self) -> bool {
        self.requested_name == WILDCARD
    }

    /// The name the item binds in the importing scope
    pub fn binding_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.requested_name)
    }
}

/// Classify every imported name, preserving declaration order
///
/// For from-imports a failed submodule lookup is the expected signal that the
/// name is an object defined inside the base module. For plain imports every
/// name must be a module.
pub fn classify(
    statement: &ImportStatement,
    resolver: &dyn ModuleResolution,
) -> Result<Vec<ResolvedItem>> {
    match statement {
        ImportStatement::Plain { names } => names
            .iter()
            .map(|imported| {
                if resolver.resolve(&imported.name).is_none() {
                    return Err(TransformError::ModuleNotFound(imported.name.clone()).into());
                }
                Ok(ResolvedItem {
                    requested_name: imported.name.clone(),
                    alias: imported.alias.clone(),
                    resolved_path: imported.name.clone(),
                    is_module: true,
                })
            })
            .collect(),
        ImportStatement::From { module, names } => Ok(names
            .iter()
            .map(|imported| {
                let candidate = format!("{module}.{}", imported.name);
                let is_module = imported.name != WILDCARD && resolver.resolve(&candidate).is_some();
                trace!(
                    "'{candidate}' is {}",
                    if is_module { "a submodule" } else { "an object" }
                );
                ResolvedItem {
                    requested_name: imported.name.clone(),
                    alias: imported.alias.clone(),
                    resolved_path: if is_module { candidate } else { module.clone() },
                    is_module,
                }
            })
            .collect()),
    }
}
