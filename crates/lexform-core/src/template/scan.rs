//! Placeholder scanner

use super::decode;
use super::error::TemplateError;
use super::tokenize::TokenStream;
use crate::syntax::{Placeholder, PlaceholderSyntax};
use serde::Serialize;

/// Placeholders discovered in a template, grouped by kind
///
/// Each list is deduplicated and keeps the order of first appearance.
/// Exhibit order is significant: it defines the exhibit numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub variables: Vec<String>,
    pub exhibits: Vec<String>,
    pub signatures: Vec<String>,
}

impl ScanResult {
    /// 1-based exhibit number of `name`, if the template references it
    pub fn exhibit_number(&self, name: &str) -> Option<usize> {
        self.exhibits.iter().position(|e| e == name).map(|i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.exhibits.is_empty() && self.signatures.is_empty()
    }

    fn register(&mut self, placeholder: Placeholder) {
        let (list, name) = match placeholder {
            Placeholder::Variable(name) => (&mut self.variables, name),
            Placeholder::ExhibitLabel(name) => (&mut self.exhibits, name),
            Placeholder::Signature(name) => (&mut self.signatures, name),
            // Body references never number an exhibit or add a schema entry
            Placeholder::ExhibitValue(_) => return,
        };
        append_new(list, name);
    }
}

/// Scan decoded template text
pub fn scan(text: &str, syntax: &PlaceholderSyntax) -> ScanResult {
    let mut result = ScanResult::default();
    for token in TokenStream::new(text, syntax) {
        result.register(syntax.classify(token.ident));
    }
    result
}

/// Scan raw template bytes
///
/// # Errors
///
/// Returns [`TemplateError::NotUtf8`] if the template is not UTF-8.
pub fn scan_template(bytes: &[u8], syntax: &PlaceholderSyntax) -> Result<ScanResult, TemplateError> {
    Ok(scan(decode(bytes)?, syntax))
}

/// Push `name` unless already present
pub(crate) fn append_new(list: &mut Vec<String>, name: String) {
    if !list.contains(&name) {
        list.push(name);
    }
}
