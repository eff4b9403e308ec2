//! Value-decoding format classification.
//!
//! Every generated setter decodes its raw resource value through exactly one
//! strategy, determined by the setter parameter's declared type plus any
//! format-override marker annotation on the element.

use crate::abstractions::TypeDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of value-decoding strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Boolean,
    Charsequence,
    CharsequenceArray,
    Color,
    ColorStateList,
    Dimension,
    Drawable,
    /// Enum-of-int: an int constrained to a closed constant set.
    Enum,
    Float,
    Fraction,
    Int,
    /// Boxed integer, decoded through the nullable getter.
    Integer,
    LayoutDimension,
    /// The raw value is used directly instead of being resolved as a
    /// resource.
    NonResource,
    ResourceId,
    String,
    StringArray,
    /// A sub-style slot target.
    StyleableRes,
}

impl Format {
    /// Name of the typed-array getter the emitter calls for this format.
    pub fn resource_method_name(&self) -> &'static str {
        match self {
            Format::Boolean => "getBoolean",
            Format::Charsequence => "getText",
            Format::CharsequenceArray => "getTextArray",
            Format::Color => "getColor",
            Format::ColorStateList => "getColorStateList",
            Format::Dimension => "getDimensionPixelSize",
            Format::Drawable => "getDrawable",
            Format::Enum => "getInt",
            Format::Float => "getFloat",
            Format::Fraction => "getFraction",
            Format::Int => "getInt",
            Format::Integer => "getInteger",
            Format::LayoutDimension => "getLayoutDimension",
            Format::NonResource => "getNonResource",
            Format::ResourceId => "getResourceId",
            Format::String => "getString",
            Format::StringArray => "getStringArray",
            Format::StyleableRes => "getStyle",
        }
    }
}

/// Format override declared through a marker annotation on the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    /// `@LayoutDimension`: the int is a layout dimension, not a plain int.
    LayoutDimension,
    /// `@Fraction`: the value is a fraction resource.
    Fraction,
    /// `@ColorInt`: the int is a packed color.
    ColorInt,
    /// `@Px`: the int is a pixel dimension.
    Px,
    /// `@IntDef`: the int belongs to a closed constant set.
    IntDef,
    /// `@AnyRes`: the int is a resource identifier of any kind.
    AnyRes,
    /// `@NonResource`: the raw value is passed through unresolved.
    NonResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("unsupported attribute target type `{0}`")]
    UnsupportedType(String),

    #[error("format hint {hint:?} does not apply to type `{type_name}`")]
    InapplicableHint { hint: FormatHint, type_name: String },
}

/// Classify a target type into its decoding format.
///
/// Deterministic: the same type and hint always yield the same format, and
/// every supported combination yields exactly one.
pub fn classify(ty: &TypeDescriptor, hint: Option<FormatHint>) -> Result<Format, ClassifyError> {
    let base = base_format(ty)?;
    match hint {
        None => Ok(base),
        Some(hint) => {
            let int_like = matches!(base, Format::Int | Format::Integer);
            let overridden = match hint {
                FormatHint::LayoutDimension if int_like => Some(Format::LayoutDimension),
                FormatHint::ColorInt if int_like => Some(Format::Color),
                FormatHint::Px if int_like => Some(Format::Dimension),
                FormatHint::IntDef if int_like => Some(Format::Enum),
                FormatHint::AnyRes if int_like => Some(Format::ResourceId),
                FormatHint::Fraction if int_like || base == Format::Float => {
                    Some(Format::Fraction)
                }
                // Any resolvable target type may take its value verbatim.
                FormatHint::NonResource => Some(Format::NonResource),
                _ => None,
            };
            overridden.ok_or_else(|| ClassifyError::InapplicableHint {
                hint,
                type_name: ty.qualified_name().to_string(),
            })
        }
    }
}

fn base_format(ty: &TypeDescriptor) -> Result<Format, ClassifyError> {
    let format = match ty.qualified_name() {
        "boolean" | "java.lang.Boolean" | "kotlin.Boolean" => Format::Boolean,
        "java.lang.CharSequence" => Format::Charsequence,
        "java.lang.CharSequence[]" => Format::CharsequenceArray,
        "android.content.res.ColorStateList" => Format::ColorStateList,
        "android.graphics.drawable.Drawable" => Format::Drawable,
        "float" | "java.lang.Float" | "kotlin.Float" => Format::Float,
        "int" | "kotlin.Int" => Format::Int,
        "java.lang.Integer" => Format::Integer,
        "java.lang.String" | "kotlin.String" => Format::String,
        "java.lang.String[]" => Format::StringArray,
        "com.airbnb.paris.styles.Style" => Format::StyleableRes,
        other => return Err(ClassifyError::UnsupportedType(other.to_string())),
    };
    Ok(format)
}
