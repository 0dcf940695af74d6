//! Placeholder syntax and classification
//!
//! A [`PlaceholderSyntax`] describes how placeholders are written in a template:
//! the delimiter pair wrapping an identifier, the namespace prefixes that select
//! exhibits and signature fields, and the suffix that turns an exhibit reference
//! into a reference to the exhibit's body text.
//!
//! Both the scanner and the substitution engine classify identifiers through
//! [`PlaceholderSyntax::classify`], so the two passes always agree on what a
//! token means.

use serde::{Deserialize, Serialize};

/// A classified placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{{name}}`
    Variable(String),
    /// `{{exhibit.name}}`, rendered as "Exhibit N"
    ExhibitLabel(String),
    /// `{{exhibit.name.value}}`, rendered as the exhibit body
    ExhibitValue(String),
    /// `{{sign.name}}`
    Signature(String),
}

impl Placeholder {
    /// Name without namespace prefix or value suffix
    pub fn name(&self) -> &str {
        match self {
            Placeholder::Variable(name)
            | Placeholder::ExhibitLabel(name)
            | Placeholder::ExhibitValue(name)
            | Placeholder::Signature(name) => name,
        }
    }
}

/// Delimiters and namespace markers for placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderSyntax {
    pub open: String,
    pub close: String,
    pub exhibit_prefix: String,
    pub signature_prefix: String,
    pub value_suffix: String,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
            exhibit_prefix: "exhibit.".to_string(),
            signature_prefix: "sign.".to_string(),
            value_suffix: ".value".to_string(),
        }
    }
}

impl PlaceholderSyntax {
    /// Classify a raw identifier (the text between the delimiters, trimmed)
    ///
    /// A namespace prefix that leaves nothing behind (`exhibit.`) does not
    /// select a namespace; the identifier is then a plain variable.
    ///
    /// Anything ending in the value suffix is a value reference, even with an
    /// empty exhibit name (`exhibit..value`). Such a reference is never
    /// numbered and only resolves if the store has a value under `""`.
    pub fn classify(&self, ident: &str) -> Placeholder {
        if let Some(rest) = strip_nonempty_prefix(ident, &self.exhibit_prefix) {
            return match rest.strip_suffix(self.value_suffix.as_str()) {
                Some(name) if !self.value_suffix.is_empty() => {
                    Placeholder::ExhibitValue(name.to_string())
                }
                _ => Placeholder::ExhibitLabel(rest.to_string()),
            };
        }

        if let Some(rest) = strip_nonempty_prefix(ident, &self.signature_prefix) {
            return Placeholder::Signature(rest.to_string());
        }

        Placeholder::Variable(ident.to_string())
    }

    /// Check that the delimiters can actually delimit something
    pub fn validate(&self) -> Result<(), String> {
        if self.open.is_empty() || self.close.is_empty() {
            return Err("placeholder delimiters must not be empty".to_string());
        }
        if self.open.bytes().any(is_ident_byte) || self.close.bytes().any(is_ident_byte) {
            return Err(format!(
                "delimiters '{}' / '{}' must not contain identifier characters",
                self.open, self.close
            ));
        }
        Ok(())
    }
}

fn strip_nonempty_prefix<'a>(ident: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    ident.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

/// Bytes allowed inside a placeholder identifier: `[A-Za-z0-9_.-]`
pub(crate) fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_variable() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("Consultant"),
            Placeholder::Variable("Consultant".to_string())
        );
    }

    #[test]
    fn test_classify_dotted_variable() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("party.name"),
            Placeholder::Variable("party.name".to_string())
        );
    }

    #[test]
    fn test_classify_exhibit_label_and_value() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("exhibit.services"),
            Placeholder::ExhibitLabel("services".to_string())
        );
        assert_eq!(
            syntax.classify("exhibit.services.value"),
            Placeholder::ExhibitValue("services".to_string())
        );
    }

    #[test]
    fn test_classify_signature() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("sign.image"),
            Placeholder::Signature("image".to_string())
        );
    }

    #[test]
    fn test_bare_prefix_is_a_variable() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("exhibit."),
            Placeholder::Variable("exhibit.".to_string())
        );
        assert_eq!(
            syntax.classify("sign."),
            Placeholder::Variable("sign.".to_string())
        );
    }

    #[test]
    fn test_exhibit_named_value() {
        // "exhibit.value" has no ".value" suffix after the prefix is removed
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("exhibit.value"),
            Placeholder::ExhibitLabel("value".to_string())
        );
    }

    #[test]
    fn test_empty_exhibit_name_is_still_a_value_reference() {
        let syntax = PlaceholderSyntax::default();
        assert_eq!(
            syntax.classify("exhibit..value"),
            Placeholder::ExhibitValue(String::new())
        );
    }

    #[test]
    fn test_custom_prefixes() {
        let syntax = PlaceholderSyntax {
            exhibit_prefix: "ex-".to_string(),
            signature_prefix: "sig-".to_string(),
            value_suffix: "-body".to_string(),
            ..PlaceholderSyntax::default()
        };
        assert_eq!(
            syntax.classify("ex-fees-body"),
            Placeholder::ExhibitValue("fees".to_string())
        );
        assert_eq!(
            syntax.classify("sig-ceo"),
            Placeholder::Signature("ceo".to_string())
        );
        assert_eq!(syntax.classify("ex-fees").name(), "fees");
    }

    #[test]
    fn test_validate_rejects_identifier_delimiters() {
        let syntax = PlaceholderSyntax {
            open: "a".to_string(),
            ..PlaceholderSyntax::default()
        };
        assert!(syntax.validate().is_err());
        assert!(PlaceholderSyntax::default().validate().is_ok());
    }
}
