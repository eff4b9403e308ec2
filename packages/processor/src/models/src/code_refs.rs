//! Documentation references back at the annotated method, one per generated
//! output language.

use crate::abstractions::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Javadoc `@see` reference embedded in the generated Java sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaCodeRef(String);

impl JavaCodeRef {
    /// `@see Type#name(ParamType)`, with the method name kept verbatim.
    pub fn see_method(enclosing_type: &str, name: &str, param: &TypeDescriptor) -> Self {
        JavaCodeRef(format!(
            "@see {}#{}({})\n",
            enclosing_type,
            name,
            param.qualified_name()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JavaCodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// KDoc `@see` reference embedded in the generated Kotlin sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinCodeRef(String);

impl KotlinCodeRef {
    /// `@see Type.name`.
    ///
    /// Internal functions have a `$` in their name which creates a KDoc
    /// error. The part after the `$` is an obfuscation artifact anyway, so
    /// it is dropped rather than escaped.
    pub fn see_method(enclosing_type: &str, name: &str) -> Self {
        let doc_name = name.split('$').next().unwrap_or(name);
        KotlinCodeRef(format!("@see {}.{}\n", enclosing_type, doc_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KotlinCodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
