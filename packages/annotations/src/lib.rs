//! Annotation wire format for the style attribute processor.
//!
//! The processor recognizes a fixed, closed vocabulary of annotations. Their
//! field names and sentinel values are compatibility surface: existing
//! annotated sources depend on them, so the shapes here must be matched
//! exactly by both analysis backends.

mod boxes;
mod records;

pub use boxes::{
    AnnotationBox, AttrAnnotation, RequiresApiAnnotation, StyleableChildAnnotation,
};
pub use records::{AnnotationError, AnnotationRecord, AnnotationValue, ResourceValue};

/// Sentinel for an `@Attr` with no declared default value.
pub const DEFAULT_VALUE_NONE: i64 = -1;

/// Marker annotations that override format classification for the target
/// parameter.
pub const LAYOUT_DIMENSION_ANNOTATION: &str = "com.airbnb.paris.annotations.LayoutDimension";
pub const FRACTION_ANNOTATION: &str = "com.airbnb.paris.annotations.Fraction";
pub const NON_RESOURCE_ANNOTATION: &str = "com.airbnb.paris.annotations.NonResource";
pub const COLOR_INT_ANNOTATION: &str = "androidx.annotation.ColorInt";
pub const PX_ANNOTATION: &str = "androidx.annotation.Px";
pub const INT_DEF_ANNOTATION: &str = "androidx.annotation.IntDef";
pub const ANY_RES_ANNOTATION: &str = "androidx.annotation.AnyRes";
