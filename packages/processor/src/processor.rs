//! The extraction pass: one sweep over the discovered methods of a
//! compilation unit.

use crate::abstractions::MethodElement;
use crate::diagnostics::{DiagnosticSink, FatalProcessError};
use crate::logging::Logger;
use crate::models::{AttrInfo, AttrInfoExtractor, ExtractorOptions};
use crate::resources::ResourceSymbolTable;
use indexmap::IndexMap;
use rayon::prelude::*;
use style_annotations::{AnnotationBox, AttrAnnotation};

/// Everything one pass produced: the extracted attributes, grouped by
/// enclosing type in first-occurrence order.
#[derive(Debug, Default)]
pub struct ProcessOutput {
    pub attrs_by_owner: IndexMap<String, Vec<AttrInfo>>,
}

impl ProcessOutput {
    pub fn total(&self) -> usize {
        self.attrs_by_owner.values().map(Vec::len).sum()
    }
}

/// Drives [`AttrInfoExtractor`] over every `@Attr`-annotated method.
///
/// A user error on one element leaves a diagnostic and skips that element;
/// the pass only halts on a [`FatalProcessError`].
pub struct Processor<'a> {
    extractor: AttrInfoExtractor<'a>,
    logger: &'a dyn Logger,
}

impl<'a> Processor<'a> {
    pub fn new(
        table: &'a ResourceSymbolTable,
        sink: &'a DiagnosticSink,
        logger: &'a dyn Logger,
    ) -> Self {
        Self::with_options(table, sink, logger, ExtractorOptions::default())
    }

    pub fn with_options(
        table: &'a ResourceSymbolTable,
        sink: &'a DiagnosticSink,
        logger: &'a dyn Logger,
        options: ExtractorOptions,
    ) -> Self {
        Processor {
            extractor: AttrInfoExtractor::with_options(table, sink, options),
            logger,
        }
    }

    /// Run the pass sequentially.
    pub fn process(
        &self,
        methods: &[MethodElement],
    ) -> Result<ProcessOutput, FatalProcessError> {
        let extracted = methods
            .iter()
            .map(|method| self.extract_if_annotated(method))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.group(methods, extracted))
    }

    /// Run the pass with extractions spread across a thread pool.
    ///
    /// Extractions are independent of each other and the sink supports
    /// concurrent append, so the output is identical to [`Self::process`]
    /// up to diagnostic ordering.
    pub fn process_parallel(
        &self,
        methods: &[MethodElement],
    ) -> Result<ProcessOutput, FatalProcessError> {
        let extracted = methods
            .par_iter()
            .map(|method| self.extract_if_annotated(method))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.group(methods, extracted))
    }

    fn extract_if_annotated(
        &self,
        method: &MethodElement,
    ) -> Result<Option<AttrInfo>, FatalProcessError> {
        if !method.element().has_annotation(AttrAnnotation::QUALIFIED_NAME) {
            return Ok(None);
        }
        self.extractor.extract(method)
    }

    fn group(&self, methods: &[MethodElement], extracted: Vec<Option<AttrInfo>>) -> ProcessOutput {
        let mut attrs_by_owner: IndexMap<String, Vec<AttrInfo>> = IndexMap::new();
        for (method, info) in methods.iter().zip(extracted) {
            if let Some(info) = info {
                attrs_by_owner
                    .entry(method.enclosing_type().to_string())
                    .or_default()
                    .push(info);
            }
        }
        let output = ProcessOutput { attrs_by_owner };
        self.logger.debug(&format!(
            "extracted {} attr(s) across {} type(s) from {} method(s)",
            output.total(),
            output.attrs_by_owner.len(),
            methods.len()
        ));
        output
    }
}
