use super::diagnostic::ElementLocation;
use std::error::Error;
use std::fmt;

/// A contract violation between processor components.
///
/// Unlike a [`Diagnostic`](super::diagnostic::Diagnostic), which reports a
/// problem in the code under analysis and lets the pass continue, a
/// `FatalProcessError` means the processor itself is in a state it promised
/// never to reach (a required annotation vanished after detection, for
/// example). It aborts the whole pass.
#[derive(Debug)]
pub struct FatalProcessError {
    pub message: String,
    pub location: Option<ElementLocation>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl FatalProcessError {
    pub fn new(message: impl Into<String>) -> Self {
        FatalProcessError {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    pub fn at(mut self, location: ElementLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for FatalProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "internal error at {}: {}", location, self.message),
            None => write!(f, "internal error: {}", self.message),
        }
    }
}

impl Error for FatalProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn Error + 'static))
    }
}
