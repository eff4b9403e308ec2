//! Untyped annotation records as the analysis backends hand them over.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single annotation field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    Int(i64),
    Str(String),
    Bool(bool),
    /// A class literal, stored as the qualified type name.
    Type(String),
    List(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short description of the value kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnnotationValue::Int(_) => "int",
            AnnotationValue::Str(_) => "string",
            AnnotationValue::Bool(_) => "boolean",
            AnnotationValue::Type(_) => "class",
            AnnotationValue::List(_) => "array",
        }
    }
}

/// One annotation instance: the annotation's qualified type name plus the
/// explicitly declared field values, in declaration order.
///
/// Fields left at their annotation-declared defaults are absent from
/// `values`; the typed boxes fill the defaults back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub qualified_name: String,
    pub values: IndexMap<String, AnnotationValue>,
}

impl AnnotationRecord {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        AnnotationRecord {
            qualified_name: qualified_name.into(),
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&AnnotationValue> {
        self.values.get(field)
    }

    /// Last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Everything before the last segment, or `""` for an unqualified name.
    pub fn package_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map(|(pkg, _)| pkg)
            .unwrap_or("")
    }
}

/// A symbolic resource pointer as written in an annotation field: either the
/// numeric constant the compiler inlined, or the qualified `R` symbol when
/// the constant was not yet resolvable at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceValue {
    Constant(i64),
    Symbol(String),
}

impl ResourceValue {
    fn from_annotation_value(value: &AnnotationValue) -> Option<ResourceValue> {
        match value {
            AnnotationValue::Int(v) => Some(ResourceValue::Constant(*v)),
            AnnotationValue::Str(s) => Some(ResourceValue::Symbol(s.clone())),
            _ => None,
        }
    }

    /// Decode an annotation field into a resource pointer.
    ///
    /// Absent fields take `default`; present fields must be an int constant
    /// or a symbol string.
    pub fn from_field(
        record: &AnnotationRecord,
        field: &str,
        default: Option<i64>,
    ) -> Result<ResourceValue, AnnotationError> {
        match record.get(field) {
            Some(value) => ResourceValue::from_annotation_value(value).ok_or_else(|| {
                AnnotationError::WrongValueKind {
                    annotation: record.simple_name().to_string(),
                    field: field.to_string(),
                    expected: "int or resource symbol",
                    found: value.kind_name(),
                }
            }),
            None => match default {
                Some(v) => Ok(ResourceValue::Constant(v)),
                None => Err(AnnotationError::MissingField {
                    annotation: record.simple_name().to_string(),
                    field: field.to_string(),
                }),
            },
        }
    }
}

/// A malformed annotation: the record does not satisfy the closed shape the
/// typed box expects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    #[error("missing required field `{field}` on @{annotation}")]
    MissingField { annotation: String, field: String },

    #[error(
        "field `{field}` on @{annotation} has the wrong value kind \
         (expected {expected}, found {found})"
    )]
    WrongValueKind {
        annotation: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected @{expected} but the record is @{found}")]
    WrongAnnotation { expected: String, found: String },
}
