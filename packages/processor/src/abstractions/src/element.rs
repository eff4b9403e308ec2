//! The element abstraction layer.
//!
//! Two analysis backends can discover annotated program elements: a
//! tree-walking backend that sees full annotation mirrors with qualified
//! type names, and a symbol-table backend whose annotation entries carry a
//! short name and, when the defining type is linkable, a resolved record.
//! [`Element`] presents one capability set over both so everything above
//! this module stays backend-agnostic.

use super::modifiers::Modifiers;
use crate::diagnostics::ElementLocation;
use style_annotations::{AnnotationBox, AnnotationError, AnnotationRecord};

/// An element as produced by the tree-walking backend: every annotation is a
/// fully resolved mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeElement {
    pub name: String,
    pub enclosing_type: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<AnnotationRecord>,
}

/// One annotation entry of the symbol-table backend. The short name is
/// always present; the record is absent when the annotation's defining type
/// is not linkable from the current module.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolAnnotation {
    pub short_name: String,
    pub resolved: Option<AnnotationRecord>,
}

impl SymbolAnnotation {
    pub fn resolved(record: AnnotationRecord) -> Self {
        SymbolAnnotation {
            short_name: record.simple_name().to_string(),
            resolved: Some(record),
        }
    }

    pub fn unresolved(short_name: impl Into<String>) -> Self {
        SymbolAnnotation {
            short_name: short_name.into(),
            resolved: None,
        }
    }
}

/// An element as produced by the symbol-table backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolElement {
    pub name: String,
    pub enclosing_type: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<SymbolAnnotation>,
}

/// A program element, polymorphic over the two backends.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Tree(TreeElement),
    Symbol(SymbolElement),
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Tree(el) => &el.name,
            Element::Symbol(el) => &el.name,
        }
    }

    pub fn enclosing_type(&self) -> &str {
        match self {
            Element::Tree(el) => &el.enclosing_type,
            Element::Symbol(el) => &el.enclosing_type,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Element::Tree(el) => el.modifiers,
            Element::Symbol(el) => el.modifiers,
        }
    }

    pub fn location(&self) -> ElementLocation {
        ElementLocation::new(self.enclosing_type(), self.name())
    }

    /// Whether this element carries an annotation of the given qualified
    /// type name. Consistent across backends: a symbol-backend annotation
    /// counts only once its record is resolved, since the qualified name is
    /// unknowable otherwise.
    pub fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotation_record(qualified_name).is_some()
    }

    /// Whether any annotation on this element is declared in the given
    /// package.
    pub fn has_annotation_with_package(&self, package: &str) -> bool {
        match self {
            Element::Tree(el) => el
                .annotations
                .iter()
                .any(|record| record.package_name() == package),
            Element::Symbol(el) => el
                .annotations
                .iter()
                .filter_map(|a| a.resolved.as_ref())
                .any(|record| record.package_name() == package),
        }
    }

    pub fn has_any_of(&self, qualified_names: &[&str]) -> bool {
        qualified_names.iter().any(|name| self.has_annotation(name))
    }

    /// The raw record of the given annotation, if present and resolved.
    pub fn annotation_record(&self, qualified_name: &str) -> Option<&AnnotationRecord> {
        match self {
            Element::Tree(el) => el
                .annotations
                .iter()
                .find(|record| record.qualified_name == qualified_name),
            Element::Symbol(el) => el
                .annotations
                .iter()
                .filter_map(|a| a.resolved.as_ref())
                .find(|record| record.qualified_name == qualified_name),
        }
    }

    /// Typed view of the given annotation.
    ///
    /// `None` means the annotation is absent; `Some(Err(..))` means it is
    /// present but malformed, which the caller reports as a diagnostic.
    pub fn annotation_box<A: AnnotationBox>(&self) -> Option<Result<A, AnnotationError>> {
        self.annotation_record(A::QUALIFIED_NAME).map(A::from_record)
    }

    /// Fallback lookup by simple name only, for annotations whose defining
    /// type is not directly linkable. This match is the single point where
    /// backend-specific annotation storage leaks through; keep it that way.
    pub fn has_annotation_by_simple_name(&self, simple_name: &str) -> bool {
        match self {
            Element::Tree(el) => el
                .annotations
                .iter()
                .any(|record| record.simple_name() == simple_name),
            Element::Symbol(el) => el
                .annotations
                .iter()
                .any(|a| a.short_name == simple_name),
        }
    }

    pub fn has_any_annotation_by_simple_name<'a>(
        &self,
        simple_names: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        simple_names
            .into_iter()
            .any(|name| self.has_annotation_by_simple_name(name))
    }
}
