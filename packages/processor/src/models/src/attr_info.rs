use super::code_refs::{JavaCodeRef, KotlinCodeRef};
use crate::abstractions::TypeDescriptor;
use crate::diagnostics::ElementLocation;
use crate::format::Format;
use crate::resources::AndroidResourceId;
use serde::{Deserialize, Serialize};

/// The IR node for one attribute-bound setter.
///
/// Built exactly once per valid annotated method and never mutated; a failed
/// extraction produces no `AttrInfo` at all, never a partial one. The
/// downstream aggregator owns the collected instances, grouped by enclosing
/// type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrInfo {
    /// Provenance: the annotated method this was extracted from.
    pub element: ElementLocation,
    /// The setter's single parameter type.
    pub target_type: TypeDescriptor,
    pub target_format: Format,
    /// The styleable attribute slot this setter binds to.
    pub styleable_res_id: AndroidResourceId,
    /// Fallback resource, present only when an explicit default was
    /// declared.
    pub default_value_res_id: Option<AndroidResourceId>,
    pub javadoc: JavaCodeRef,
    pub kdoc: KotlinCodeRef,
    /// Minimum platform version gating this attribute.
    pub requires_api: i64,
}
