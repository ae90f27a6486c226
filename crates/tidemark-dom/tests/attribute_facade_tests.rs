//! Tests for the element attribute facade: every accessor is a view over the
//! same ordered occurrence list.

use tidemark_dom::{AttributeOccurrence, ElementData, EmbeddedFragment, FragmentLanguage};

fn anchor_with_duplicate_href() -> ElementData {
    ElementData::with_attrs(
        "a",
        vec![
            AttributeOccurrence::new("HREF", "first"),
            AttributeOccurrence::bare("download"),
            AttributeOccurrence::new("href", "second"),
        ],
    )
}

#[test]
fn test_get_attribute_returns_first_occurrence() {
    let a = anchor_with_duplicate_href();
    assert_eq!(a.get_attribute("href"), Some("first"));
    assert_eq!(a.get_attribute("download"), Some(""));
    assert_eq!(a.get_attribute("title"), None);
    assert!(a.has_attribute("Href"));
}

#[test]
fn test_set_attribute_overwrites_first_or_appends() {
    let mut a = anchor_with_duplicate_href();
    a.set_attribute("href", "replaced");
    assert_eq!(a.attrs[0].value.as_deref(), Some("replaced"));
    assert_eq!(a.attrs[2].value.as_deref(), Some("second"));

    a.set_attribute("title", "t");
    assert_eq!(a.attrs.len(), 4);
    assert_eq!(a.attrs[3].name, "title");
}

#[test]
fn test_remove_attribute_removes_only_first() {
    let mut a = anchor_with_duplicate_href();
    let removed = a.remove_attribute("href").expect("href present");
    assert_eq!(removed.value.as_deref(), Some("first"));
    assert_eq!(a.get_attribute("href"), Some("second"));
    assert!(a.remove_attribute("missing").is_none());
}

#[test]
fn test_attribute_names_keep_duplicates_in_order() {
    let a = anchor_with_duplicate_href();
    let names: Vec<&str> = a.attribute_names().collect();
    assert_eq!(names, vec!["HREF", "download", "href"]);
}

#[test]
fn test_occurrence_helpers() {
    let bare = AttributeOccurrence::bare("ismap");
    assert!(!bare.has_value());
    assert!(!AttributeOccurrence::new("alt", "").has_value());

    let templated = AttributeOccurrence::new("onclick", "")
        .with_fragment(EmbeddedFragment::new(FragmentLanguage::Php, "echo $x;"));
    assert!(templated.has_fragment());
    assert!(templated.is_named("ONCLICK"));
}
