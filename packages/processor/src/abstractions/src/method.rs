use super::element::Element;
use super::modifiers::Modifiers;
use super::types::TypeDescriptor;
use crate::diagnostics::ElementLocation;
use smallvec::SmallVec;

/// An [`Element`] known to be a method.
///
/// The element data is owned by the backend and treated as a read-only
/// snapshot for the duration of the extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodElement {
    element: Element,
    parameters: SmallVec<[TypeDescriptor; 1]>,
    return_type: TypeDescriptor,
}

impl MethodElement {
    pub fn new(
        element: Element,
        parameters: impl IntoIterator<Item = TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        MethodElement {
            element,
            parameters: parameters.into_iter().collect(),
            return_type,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Declared parameter types, in declaration order.
    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    /// Return type; present for completeness, ignored by extraction.
    pub fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        self.element.name()
    }

    pub fn enclosing_type(&self) -> &str {
        self.element.enclosing_type()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.element.modifiers()
    }

    pub fn location(&self) -> ElementLocation {
        self.element.location()
    }
}
