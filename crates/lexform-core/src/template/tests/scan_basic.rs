//! Scanner tests

use super::helpers::syntax;
use super::*;

#[test]
fn test_scan_classifies_by_namespace() {
    let result = scan(
        "{{Date}} {{exhibit.services}} {{sign.image}} {{Consultant}}",
        &syntax(),
    );
    assert_eq!(result.variables, vec!["Date", "Consultant"]);
    assert_eq!(result.exhibits, vec!["services"]);
    assert_eq!(result.signatures, vec!["image"]);
}

#[test]
fn test_scan_deduplicates_in_first_seen_order() {
    let result = scan(
        "{{b}} {{a}} {{b}} {{ a }} {{c}} {{exhibit.y}} {{exhibit.x}} {{exhibit.y}}",
        &syntax(),
    );
    assert_eq!(result.variables, vec!["b", "a", "c"]);
    assert_eq!(result.exhibits, vec!["y", "x"]);
}

#[test]
fn test_value_references_do_not_register_exhibits() {
    let result = scan(
        "{{exhibit.fees.value}} {{exhibit.services}} {{exhibit.fees}}",
        &syntax(),
    );
    // fees is numbered by its first bare reference, after services
    assert_eq!(result.exhibits, vec!["services", "fees"]);
    assert_eq!(result.exhibit_number("services"), Some(1));
    assert_eq!(result.exhibit_number("fees"), Some(2));
    assert_eq!(result.exhibit_number("expenses"), None);
}

#[test]
fn test_value_only_exhibit_is_not_in_scan() {
    let result = scan("{{exhibit.orphan.value}}", &syntax());
    assert!(result.is_empty());
}

#[test]
fn test_empty_value_reference_is_not_numbered() {
    let result = scan("{{exhibit..value}} {{exhibit.fees}}", &syntax());
    assert_eq!(result.exhibits, vec!["fees"]);
    assert_eq!(result.exhibit_number("fees"), Some(1));
}

#[test]
fn test_scan_is_deterministic() {
    let text = "{{z}} {{exhibit.b}} {{y}} {{sign.s}} {{exhibit.a}} {{x}}";
    assert_eq!(scan(text, &syntax()), scan(text, &syntax()));
}

#[test]
fn test_scan_ignores_malformed_markers() {
    let result = scan("{{}} {{ broken name }} {{ok}} {{unclosed", &syntax());
    assert_eq!(result.variables, vec!["ok"]);
}

#[test]
fn test_scan_template_rejects_invalid_utf8() {
    let err = scan_template(b"abc \xFF {{x}}", &syntax()).unwrap_err();
    assert_eq!(err, TemplateError::NotUtf8 { offset: 4 });
}

#[test]
fn test_scan_template_bytes() {
    let result = scan_template("{{x}}".as_bytes(), &syntax()).unwrap();
    assert_eq!(result.variables, vec!["x"]);
}
