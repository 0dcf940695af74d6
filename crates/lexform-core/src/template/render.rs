//! Substitution engine
//!
//! Rendering is a single pass over the template text: every marker is
//! resolved on its own and written to a fresh output buffer, so a value that
//! happens to contain `{{...}}` is never re-scanned and repeated references
//! always resolve the same way.

use super::decode;
use super::error::TemplateError;
use super::scan::{append_new, scan, ScanResult};
use super::tokenize::TokenStream;
use crate::params::{Namespace, ParameterStore};
use crate::syntax::{Placeholder, PlaceholderSyntax};

/// Written in place of every placeholder that has no value
pub const UNRESOLVED_SENTINEL: &str = "----";

/// Output of a substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Rendered text; unresolved placeholders appear as [`UNRESOLVED_SENTINEL`]
    pub output: String,
    /// Raw identifiers without a value, deduplicated in first-occurrence order
    pub unresolved: Vec<String>,
}

impl Substitution {
    /// True when every placeholder received a value
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Rendered text, or every unresolved name at once
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unresolved`] listing all missing names.
    pub fn into_resolved(self) -> Result<String, TemplateError> {
        if self.unresolved.is_empty() {
            Ok(self.output)
        } else {
            Err(TemplateError::Unresolved {
                names: self.unresolved,
            })
        }
    }
}

/// Substitute parameters into decoded template text
pub fn substitute_str(
    text: &str,
    store: &ParameterStore,
    syntax: &PlaceholderSyntax,
) -> Substitution {
    // Phase 1: exhibit numbering comes from the template, not from the store
    let exhibits = scan(text, syntax);

    // Phase 2: resolve every occurrence independently
    let mut output = String::with_capacity(text.len());
    let mut unresolved = Vec::new();
    let mut copied_to = 0;

    for token in TokenStream::new(text, syntax) {
        output.push_str(&text[copied_to..token.start]);
        copied_to = token.end();

        match resolve(&syntax.classify(token.ident), &exhibits, store) {
            Some(value) => output.push_str(&value),
            None => {
                tracing::debug!(
                    placeholder = token.ident,
                    line = token.line,
                    "no value for placeholder"
                );
                append_new(&mut unresolved, token.ident.to_string());
                output.push_str(UNRESOLVED_SENTINEL);
            }
        }
    }
    output.push_str(&text[copied_to..]);

    Substitution { output, unresolved }
}

/// Substitute parameters into raw template bytes
///
/// Unresolved placeholders do not make this fail; check
/// [`Substitution::unresolved`] or call [`Substitution::into_resolved`]
/// before writing the output anywhere.
///
/// # Errors
///
/// Returns [`TemplateError::NotUtf8`] if the template is not UTF-8.
pub fn substitute(
    bytes: &[u8],
    store: &ParameterStore,
    syntax: &PlaceholderSyntax,
) -> Result<Substitution, TemplateError> {
    Ok(substitute_str(decode(bytes)?, store, syntax))
}

fn resolve(placeholder: &Placeholder, exhibits: &ScanResult, store: &ParameterStore) -> Option<String> {
    match placeholder {
        Placeholder::ExhibitLabel(name) => exhibits
            .exhibit_number(name)
            .map(|n| format!("Exhibit {}", n)),
        Placeholder::ExhibitValue(name) => non_empty(store.get(Namespace::Exhibit, name)),
        Placeholder::Signature(name) => non_empty(store.get(Namespace::Sign, name)),
        Placeholder::Variable(name) => non_empty(store.get(Namespace::Var, name)),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
