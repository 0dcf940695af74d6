//! Shared test helpers for template tests

use crate::fingerprint::Fingerprint;
use crate::params::{Namespace, ParameterStore};
use crate::syntax::PlaceholderSyntax;

pub(super) fn syntax() -> PlaceholderSyntax {
    PlaceholderSyntax::default()
}

/// Store bound to an arbitrary fingerprint, with no values
pub(super) fn empty_store() -> ParameterStore {
    ParameterStore::new(Fingerprint::of(b"template"))
}

/// Store with a few variables, exhibits and signature fields filled in
pub(super) fn filled_store() -> ParameterStore {
    empty_store()
        .with(Namespace::Var, "Date", "2017-05-04")
        .with(Namespace::Var, "Consultant", "John Smith")
        .with(Namespace::Exhibit, "services", "Software Development")
        .with(Namespace::Exhibit, "compensation", "$100/hr")
        .with(Namespace::Exhibit, "expenses", "$200/month")
        .with(Namespace::Sign, "image", "franklin.png")
}
