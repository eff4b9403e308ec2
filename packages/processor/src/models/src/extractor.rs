//! Extraction of [`AttrInfo`] from one annotated method.

use super::attr_info::AttrInfo;
use super::code_refs::{JavaCodeRef, KotlinCodeRef};
use crate::abstractions::{Element, MethodElement};
use crate::diagnostics::{DiagnosticSink, FatalProcessError};
use crate::format::{classify, FormatHint};
use crate::resources::{ResourceResolver, ResourceSymbolTable};
use style_annotations::{
    AnnotationBox, AttrAnnotation, RequiresApiAnnotation, ANY_RES_ANNOTATION,
    COLOR_INT_ANNOTATION, FRACTION_ANNOTATION, INT_DEF_ANNOTATION, LAYOUT_DIMENSION_ANNOTATION,
    NON_RESOURCE_ANNOTATION, PX_ANNOTATION,
};

/// Extraction configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExtractorOptions {
    /// Lowest platform version the target supports; attributes without a
    /// version gate default to it.
    pub api_floor: i64,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        ExtractorOptions { api_floor: 1 }
    }
}

/// Turns one `@Attr`-annotated method into an [`AttrInfo`], or records
/// exactly one diagnostic and yields nothing.
///
/// Validation short-circuits on the first failure; a failure never produces
/// a partial result. `Err` is reserved for internal contract violations and
/// aborts the whole pass.
pub struct AttrInfoExtractor<'a> {
    resolver: ResourceResolver<'a>,
    sink: &'a DiagnosticSink,
    options: ExtractorOptions,
}

impl<'a> AttrInfoExtractor<'a> {
    pub fn new(table: &'a ResourceSymbolTable, sink: &'a DiagnosticSink) -> Self {
        Self::with_options(table, sink, ExtractorOptions::default())
    }

    pub fn with_options(
        table: &'a ResourceSymbolTable,
        sink: &'a DiagnosticSink,
        options: ExtractorOptions,
    ) -> Self {
        AttrInfoExtractor {
            resolver: ResourceResolver::new(table),
            sink,
            options,
        }
    }

    pub fn extract(
        &self,
        method: &MethodElement,
    ) -> Result<Option<AttrInfo>, FatalProcessError> {
        let element = method.element();
        let location = element.location();

        if element.modifiers().is_private() || element.modifiers().is_protected() {
            self.sink.error(
                location,
                "Methods annotated with @Attr can't be private or protected.",
            );
            return Ok(None);
        }

        // Callers only hand over methods already detected as carrying @Attr;
        // its absence here is a broken contract, not a user error.
        let attr: AttrAnnotation = match element.annotation_box::<AttrAnnotation>() {
            Some(Ok(attr)) => attr,
            Some(Err(cause)) => {
                self.sink
                    .error(location, format!("Malformed @Attr annotation. ({})", cause));
                return Ok(None);
            }
            None => {
                return Err(
                    FatalProcessError::new("@Attr annotation not found on element")
                        .at(location),
                )
            }
        };

        let target_type = match method.parameters() {
            [ty] => ty,
            _ => {
                self.sink.error(
                    location,
                    "Methods annotated with @Attr must declare a single parameter.",
                );
                return Ok(None);
            }
        };

        let target_format = match classify(target_type, format_hint(element)) {
            Ok(format) => format,
            Err(cause) => {
                self.sink.error(location, cause.to_string());
                return Ok(None);
            }
        };

        let styleable_res_id = match self.resolver.resolve_styleable_attr(&attr.value) {
            Ok(id) => id,
            Err(cause) => {
                self.sink.error(
                    location,
                    format!("Incorrectly typed @Attr value parameter. ({})", cause),
                );
                return Ok(None);
            }
        };

        let default_value_res_id = if attr.has_default_value() {
            match self.resolver.resolve_any(&attr.default_value) {
                Ok(id) => Some(id),
                Err(cause) => {
                    self.sink.error(
                        location,
                        format!(
                            "Incorrectly typed @Attr defaultValue parameter. (This usually \
                             happens when an R value doesn't exist.) ({})",
                            cause
                        ),
                    );
                    return Ok(None);
                }
            }
        } else {
            None
        };

        let requires_api = match element.annotation_box::<RequiresApiAnnotation>() {
            // `value` is an alias of `api`, so `api` wins only when it was
            // raised above the floor.
            Some(Ok(gate)) => {
                if gate.api > self.options.api_floor {
                    gate.api
                } else {
                    gate.value
                }
            }
            Some(Err(cause)) => {
                self.sink.error(
                    location,
                    format!("Malformed @RequiresApi annotation. ({})", cause),
                );
                return Ok(None);
            }
            None => {
                // Cross-module gating annotations may be visible by short
                // name only; the gate cannot be honored then.
                if element.has_annotation_by_simple_name(RequiresApiAnnotation::simple_name()) {
                    self.sink.warn(
                        location,
                        format!(
                            "@RequiresApi could not be resolved; assuming API {}.",
                            self.options.api_floor
                        ),
                    );
                }
                self.options.api_floor
            }
        };

        let javadoc =
            JavaCodeRef::see_method(element.enclosing_type(), element.name(), target_type);
        let kdoc = KotlinCodeRef::see_method(element.enclosing_type(), element.name());

        Ok(Some(AttrInfo {
            element: element.location(),
            target_type: target_type.clone(),
            target_format,
            styleable_res_id,
            default_value_res_id,
            javadoc,
            kdoc,
            requires_api,
        }))
    }
}

fn format_hint(element: &Element) -> Option<FormatHint> {
    if element.has_annotation(LAYOUT_DIMENSION_ANNOTATION) {
        Some(FormatHint::LayoutDimension)
    } else if element.has_annotation(FRACTION_ANNOTATION) {
        Some(FormatHint::Fraction)
    } else if element.has_annotation(NON_RESOURCE_ANNOTATION) {
        Some(FormatHint::NonResource)
    } else if element.has_annotation(COLOR_INT_ANNOTATION) {
        Some(FormatHint::ColorInt)
    } else if element.has_annotation(PX_ANNOTATION) {
        Some(FormatHint::Px)
    } else if element.has_annotation(INT_DEF_ANNOTATION) {
        Some(FormatHint::IntDef)
    } else if element.has_annotation(ANY_RES_ANNOTATION) {
        Some(FormatHint::AnyRes)
    } else {
        None
    }
}
