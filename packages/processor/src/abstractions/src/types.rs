use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque reference to a declared type.
///
/// Carries just enough to classify the type into a decoding format and to
/// render a qualified name in generated documentation. Two descriptors are
/// equal iff their underlying type names are.
#[derive(Debug, Clone, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    qualified_name: String,
}

impl TypeDescriptor {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        TypeDescriptor {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Last dot-separated segment, e.g. `CharSequence` for
    /// `java.lang.CharSequence`. Primitives have no package and are returned
    /// unchanged.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}
