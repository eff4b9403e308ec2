use super::id::{AndroidResourceId, ResourceKind};
use super::symbol_table::ResourceSymbolTable;
use once_cell::sync::Lazy;
use regex::Regex;
use style_annotations::ResourceValue;
use thiserror::Error;

/// Shape of a qualified resource symbol: `R.<type>.<entry>`, where the entry
/// may contain `$` for inner-class-derived names.
static R_SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^R\.([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_$]*)$")
        .expect("invalid resource symbol regex")
});

/// Why a symbolic resource reference did not resolve. Every variant carries
/// a human-readable cause; callers turn these into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("resource constant {0} does not exist in the resource symbol table")]
    NotFound(String),

    #[error("{code} resolves to kind `{found}`, expected kind `{expected}`")]
    WrongKind {
        code: String,
        expected: ResourceKind,
        found: ResourceKind,
    },

    #[error("malformed resource reference `{0}`")]
    Malformed(String),
}

/// Resolves the symbolic references embedded in annotation fields against
/// the compilation's resource symbol table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceResolver<'a> {
    table: &'a ResourceSymbolTable,
}

impl<'a> ResourceResolver<'a> {
    pub fn new(table: &'a ResourceSymbolTable) -> Self {
        ResourceResolver { table }
    }

    /// Resolve a reference that must name a styleable attribute slot.
    pub fn resolve_styleable_attr(
        &self,
        value: &ResourceValue,
    ) -> Result<AndroidResourceId, ResolveError> {
        let id = self.resolve_any(value)?;
        if id.kind != ResourceKind::Styleable {
            return Err(ResolveError::WrongKind {
                code: id.code,
                expected: ResourceKind::Styleable,
                found: id.kind,
            });
        }
        Ok(id)
    }

    /// Resolve a reference to a resource of any kind.
    pub fn resolve_any(&self, value: &ResourceValue) -> Result<AndroidResourceId, ResolveError> {
        match value {
            ResourceValue::Constant(v) => self
                .table
                .lookup_value(*v)
                .cloned()
                .ok_or_else(|| ResolveError::NotFound(format!("0x{:x}", v))),
            ResourceValue::Symbol(code) => {
                if !R_SYMBOL.is_match(code) {
                    return Err(ResolveError::Malformed(code.clone()));
                }
                self.table
                    .lookup_name(code)
                    .cloned()
                    .ok_or_else(|| ResolveError::NotFound(code.clone()))
            }
        }
    }
}
