#![deny(clippy::all)]

//! Metadata-extraction front end of the style attribute code generator.
//!
//! Inspects setter methods annotated with `@Attr` through one uniform
//! element model, regardless of which analysis backend discovered them,
//! validates each one, resolves the resource references, and produces the
//! immutable [`AttrInfo`] IR consumed by the code emitter.

pub mod abstractions;
pub mod diagnostics;
pub mod format;
pub mod logging;
pub mod models;
pub mod processor;
pub mod resources;

// Re-exports of the main surface
pub use abstractions::{Element, MethodElement, Modifiers, TypeDescriptor};
pub use diagnostics::{Diagnostic, DiagnosticSink, ElementLocation, FatalProcessError};
pub use format::{classify, Format, FormatHint};
pub use models::{AttrInfo, AttrInfoExtractor, ExtractorOptions};
pub use processor::{ProcessOutput, Processor};
pub use resources::{AndroidResourceId, ResourceKind, ResourceResolver, ResourceSymbolTable};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
