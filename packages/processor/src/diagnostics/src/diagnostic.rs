use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a diagnostic points: the annotated element it was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementLocation {
    /// Qualified name of the enclosing type.
    pub enclosing_type: String,
    /// Simple name of the element itself.
    pub name: String,
}

impl ElementLocation {
    pub fn new(enclosing_type: impl Into<String>, name: impl Into<String>) -> Self {
        ElementLocation {
            enclosing_type: enclosing_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ElementLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.enclosing_type, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// One user-facing message produced by the extraction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: ElementLocation,
    pub message: String,
    pub level: DiagnosticLevel,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.location, self.message)
    }
}
