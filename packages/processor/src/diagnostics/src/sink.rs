use super::diagnostic::{Diagnostic, DiagnosticLevel, ElementLocation};
use std::sync::Mutex;

/// Append-only collector for the diagnostics of one extraction pass.
///
/// Appends go through a lock so the pass may run extractions in parallel;
/// nothing is ever removed except through [`DiagnosticSink::drain`].
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    pub fn error(&self, location: ElementLocation, message: impl Into<String>) {
        self.push(Diagnostic {
            location,
            message: message.into(),
            level: DiagnosticLevel::Error,
        });
    }

    pub fn warn(&self, location: ElementLocation, message: impl Into<String>) {
        self.push(Diagnostic {
            location,
            message: message.into(),
            level: DiagnosticLevel::Warning,
        });
    }

    fn push(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .expect("diagnostic sink lock poisoned")
            .push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("diagnostic sink lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .lock()
            .expect("diagnostic sink lock poisoned")
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }

    /// Snapshot of the collected entries, in append order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .expect("diagnostic sink lock poisoned")
            .clone()
    }

    /// Take all collected entries, leaving the sink empty.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .entries
                .lock()
                .expect("diagnostic sink lock poisoned"),
        )
    }
}
