//! Exhibit numbering and exhibit body tests

use super::helpers::{empty_store, filled_store, syntax};
use super::*;
use crate::params::Namespace;

#[test]
fn test_exhibits_numbered_by_first_reference() {
    let text = "See {{exhibit.services}}, {{exhibit.compensation}} and {{exhibit.expenses}}.";
    let result = substitute_str(text, &filled_store(), &syntax());
    assert_eq!(result.output, "See Exhibit 1, Exhibit 2 and Exhibit 3.");
}

#[test]
fn test_numbering_ignores_parameter_order() {
    // Filled in reverse order of reference
    let store = empty_store()
        .with(Namespace::Exhibit, "expenses", "E")
        .with(Namespace::Exhibit, "compensation", "C")
        .with(Namespace::Exhibit, "services", "S");
    let text = "{{exhibit.services}} {{exhibit.compensation}} {{exhibit.expenses}}";
    let result = substitute_str(text, &store, &syntax());
    assert_eq!(result.output, "Exhibit 1 Exhibit 2 Exhibit 3");
}

#[test]
fn test_labels_do_not_need_values() {
    let result = substitute_str("{{exhibit.services}}", &empty_store(), &syntax());
    assert_eq!(result.output, "Exhibit 1");
    assert!(result.is_complete());
}

#[test]
fn test_repeated_label_keeps_its_number() {
    let text = "{{exhibit.a}} {{exhibit.b}} {{exhibit.a}} {{exhibit.b}}";
    let result = substitute_str(text, &empty_store(), &syntax());
    assert_eq!(result.output, "Exhibit 1 Exhibit 2 Exhibit 1 Exhibit 2");
}

#[test]
fn test_value_reference_renders_body() {
    let text = "# {{exhibit.services}}\n\n{{exhibit.services.value}}\n";
    let result = substitute_str(text, &filled_store(), &syntax());
    assert_eq!(result.output, "# Exhibit 1\n\nSoftware Development\n");
}

#[test]
fn test_value_reference_before_label_does_not_shift_numbering() {
    let text = "{{exhibit.expenses.value}} {{exhibit.services}} {{exhibit.expenses}}";
    let result = substitute_str(text, &filled_store(), &syntax());
    assert_eq!(result.output, "$200/month Exhibit 1 Exhibit 2");
}

#[test]
fn test_scenario_date_label_and_missing_body() {
    let text = "{{date}} {{exhibit.services}} {{exhibit.services.value}}";
    let store = empty_store().with(Namespace::Var, "date", "2024-01-01");
    let result = substitute_str(text, &store, &syntax());
    assert_eq!(result.output, "2024-01-01 Exhibit 1 ----");
    assert_eq!(result.unresolved, vec!["exhibit.services.value"]);
}

#[test]
fn test_scenario_with_body_supplied() {
    let text = "{{date}} {{exhibit.services}} {{exhibit.services.value}}";
    let store = empty_store()
        .with(Namespace::Var, "date", "2024-01-01")
        .with(Namespace::Exhibit, "services", "Widgets");
    let result = substitute_str(text, &store, &syntax());
    assert_eq!(result.output, "2024-01-01 Exhibit 1 Widgets");
    assert!(result.is_complete());
}

#[test]
fn test_value_reference_without_label_renders_body() {
    let result = substitute_str("{{exhibit.services.value}}", &filled_store(), &syntax());
    assert_eq!(result.output, "Software Development");
    assert!(result.is_complete());
    assert!(scan("{{exhibit.services.value}}", &syntax()).exhibits.is_empty());
}

#[test]
fn test_value_reference_without_label_or_value_is_unresolved() {
    let result = substitute_str("{{exhibit.services.value}}", &empty_store(), &syntax());
    assert_eq!(result.output, "----");
    assert_eq!(result.unresolved, vec!["exhibit.services.value"]);
}

#[test]
fn test_empty_exhibit_value_reference_is_unresolved() {
    let text = "{{exhibit..value}} {{exhibit.services}}";
    let result = substitute_str(text, &filled_store(), &syntax());
    assert_eq!(result.output, "---- Exhibit 1");
    assert_eq!(result.unresolved, vec!["exhibit..value"]);
}
