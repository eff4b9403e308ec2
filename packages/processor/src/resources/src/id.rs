use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of resource a constant names, as far as the extractor cares:
/// styleable slots and attrs are meaningful on their own, everything else
/// keeps its namespace (`dimen`, `string`, ...) for diagnostics and the
/// emitter but is only ever resolved as "any resource".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Styleable,
    Attr,
    Other(String),
}

impl ResourceKind {
    /// Kind for a resource type namespace as it appears in an `R` symbol.
    pub fn from_namespace(namespace: &str) -> Self {
        match namespace {
            "styleable" => ResourceKind::Styleable,
            "attr" => ResourceKind::Attr,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Styleable => f.write_str("styleable"),
            ResourceKind::Attr => f.write_str("attr"),
            ResourceKind::Other(namespace) => f.write_str(namespace),
        }
    }
}

/// A resolved resource identifier, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AndroidResourceId {
    pub kind: ResourceKind,
    /// The numeric constant as compiled into the resource table.
    pub value: i64,
    /// The qualified symbol the emitter writes out, e.g.
    /// `R.styleable.MyRow_titleText`.
    pub code: String,
}

impl AndroidResourceId {
    pub fn new(kind: ResourceKind, value: i64, code: impl Into<String>) -> Self {
        AndroidResourceId {
            kind,
            value,
            code: code.into(),
        }
    }
}

impl fmt::Display for AndroidResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
