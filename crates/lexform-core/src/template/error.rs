//! Template error types

use std::fmt;

/// Scanning and substitution errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template bytes are not valid UTF-8
    NotUtf8 {
        /// Byte offset of the first invalid sequence
        offset: usize,
    },

    /// One or more placeholders had no value
    Unresolved {
        /// Every unresolved identifier, in order of first occurrence
        names: Vec<String>,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NotUtf8 { offset } => {
                write!(f, "Template is not valid UTF-8 (invalid byte at offset {})", offset)
            }
            TemplateError::Unresolved { names } => {
                write!(f, "Missing params: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for TemplateError {}
