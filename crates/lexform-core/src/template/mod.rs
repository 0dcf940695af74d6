//! Template module - placeholder discovery and substitution
//!
//! Templates are plain text (usually Markdown) containing placeholder markers:
//!
//! - Variables: `{{Consultant}}` or `{{ Consultant }}` (spaces optional)
//! - Exhibit labels: `{{exhibit.services}}` renders as `Exhibit N`, where N is
//!   the position of `services` among exhibits in order of first reference
//! - Exhibit bodies: `{{exhibit.services.value}}` renders the exhibit text
//! - Signature fields: `{{sign.image}}`
//!
//! Delimiters and namespace markers come from [`PlaceholderSyntax`]; nothing
//! here relies on global state.
//!
//! Markers that do not form a valid placeholder (unclosed delimiters, empty or
//! illegal identifiers) are left in the text untouched.
//!
//! [`PlaceholderSyntax`]: crate::syntax::PlaceholderSyntax

pub mod error;
pub mod render;
pub mod scan;
pub(crate) mod tokenize;

#[cfg(test)]
mod tests;

pub use error::TemplateError;
pub use render::{substitute, substitute_str, Substitution, UNRESOLVED_SENTINEL};
pub use scan::{scan, scan_template, ScanResult};

/// Decode template bytes, rejecting anything that is not UTF-8
pub fn decode(bytes: &[u8]) -> Result<&str, TemplateError> {
    std::str::from_utf8(bytes).map_err(|e| TemplateError::NotUtf8 {
        offset: e.valid_up_to(),
    })
}
