//! Typed views over annotation records.
//!
//! An [`AnnotationBox`] decodes the untyped record of one known annotation
//! into a struct with the annotation-declared defaults filled in. Decoding
//! is the only place the closed field vocabulary is spelled out.

use crate::records::{AnnotationError, AnnotationRecord, ResourceValue};
use crate::DEFAULT_VALUE_NONE;

/// A known annotation shape that can be decoded from a raw record.
pub trait AnnotationBox: Sized {
    /// Qualified name of the annotation type this box decodes.
    const QUALIFIED_NAME: &'static str;

    fn from_record(record: &AnnotationRecord) -> Result<Self, AnnotationError>;

    /// Last segment of [`Self::QUALIFIED_NAME`].
    fn simple_name() -> &'static str {
        Self::QUALIFIED_NAME
            .rsplit('.')
            .next()
            .unwrap_or(Self::QUALIFIED_NAME)
    }
}

fn check_record(
    record: &AnnotationRecord,
    qualified_name: &'static str,
) -> Result<(), AnnotationError> {
    if record.qualified_name != qualified_name {
        return Err(AnnotationError::WrongAnnotation {
            expected: qualified_name.to_string(),
            found: record.qualified_name.clone(),
        });
    }
    Ok(())
}

fn int_field(
    record: &AnnotationRecord,
    field: &str,
    default: i64,
) -> Result<i64, AnnotationError> {
    match record.get(field) {
        Some(value) => value
            .as_int()
            .ok_or_else(|| AnnotationError::WrongValueKind {
                annotation: record.simple_name().to_string(),
                field: field.to_string(),
                expected: "int",
                found: value.kind_name(),
            }),
        None => Ok(default),
    }
}

/// `@Attr(value = ..., defaultValue = ...)`: binds a setter to a styleable
/// attribute slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrAnnotation {
    /// Required: the styleable attribute slot the setter binds to.
    pub value: ResourceValue,
    /// Optional fallback resource, `-1` when undeclared.
    pub default_value: ResourceValue,
}

impl AttrAnnotation {
    /// Whether an explicit default was declared, i.e. the field differs from
    /// the `-1` sentinel.
    pub fn has_default_value(&self) -> bool {
        self.default_value != ResourceValue::Constant(DEFAULT_VALUE_NONE)
    }
}

impl AnnotationBox for AttrAnnotation {
    const QUALIFIED_NAME: &'static str = "com.airbnb.paris.annotations.Attr";

    fn from_record(record: &AnnotationRecord) -> Result<Self, AnnotationError> {
        check_record(record, Self::QUALIFIED_NAME)?;
        Ok(AttrAnnotation {
            value: ResourceValue::from_field(record, "value", None)?,
            default_value: ResourceValue::from_field(
                record,
                "defaultValue",
                Some(DEFAULT_VALUE_NONE),
            )?,
        })
    }
}

/// `@StyleableChild(value = ..., defaultValue = ...)`: marks a sub-style
/// slot. Same record shape as `@Attr`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleableChildAnnotation {
    pub value: ResourceValue,
    pub default_value: ResourceValue,
}

impl StyleableChildAnnotation {
    pub fn has_default_value(&self) -> bool {
        self.default_value != ResourceValue::Constant(DEFAULT_VALUE_NONE)
    }
}

impl AnnotationBox for StyleableChildAnnotation {
    const QUALIFIED_NAME: &'static str = "com.airbnb.paris.annotations.StyleableChild";

    fn from_record(record: &AnnotationRecord) -> Result<Self, AnnotationError> {
        check_record(record, Self::QUALIFIED_NAME)?;
        Ok(StyleableChildAnnotation {
            value: ResourceValue::from_field(record, "value", None)?,
            default_value: ResourceValue::from_field(
                record,
                "defaultValue",
                Some(DEFAULT_VALUE_NONE),
            )?,
        })
    }
}

/// `@RequiresApi(api = ..., value = ...)`: platform version gate.
///
/// `value` is an alias of `api`; both default to `1`, the lowest supported
/// platform version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiresApiAnnotation {
    pub api: i64,
    pub value: i64,
}

impl AnnotationBox for RequiresApiAnnotation {
    const QUALIFIED_NAME: &'static str = "androidx.annotation.RequiresApi";

    fn from_record(record: &AnnotationRecord) -> Result<Self, AnnotationError> {
        check_record(record, Self::QUALIFIED_NAME)?;
        Ok(RequiresApiAnnotation {
            api: int_field(record, "api", 1)?,
            value: int_field(record, "value", 1)?,
        })
    }
}
