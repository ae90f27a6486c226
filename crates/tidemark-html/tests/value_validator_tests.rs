//! Tests for attribute value checkers, driven through single elements.

use tidemark_dom::{AttributeOccurrence, ElementData, EmbeddedFragment, FragmentLanguage};
use tidemark_html::{
    ConformanceOptions, Diagnostic, DiagnosticKind, Dictionary, DocumentConformanceState,
    Validator, VersionMask,
};

/// Validate one element and return it with the state and diagnostics.
fn check(
    tag: &str,
    attrs: Vec<AttributeOccurrence>,
    options: ConformanceOptions,
) -> (ElementData, DocumentConformanceState, Vec<Diagnostic>) {
    let mut element = ElementData::with_attrs(tag, attrs);
    let mut state = DocumentConformanceState::new(options);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    Validator::new(Dictionary::shared()).validate_element(&mut element, &mut state, &mut diagnostics);
    (element, state, diagnostics)
}

fn kinds(diagnostics: &[Diagnostic]) -> Vec<DiagnosticKind> {
    diagnostics.iter().map(|d| d.kind).collect()
}

fn attr(name: &str, value: &str) -> AttributeOccurrence {
    AttributeOccurrence::new(name, value)
}

// URL

#[test]
fn test_url_backslashes_rewritten_when_enabled() {
    let options = ConformanceOptions::default().with_url_backslash_fix();
    let (a, _, diagnostics) = check("a", vec![attr("href", "a\\b\\c")], options);
    assert_eq!(a.get_attribute("href"), Some("a/b/c"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_url_backslashes_kept_by_default() {
    let (a, _, diagnostics) = check("a", vec![attr("href", "a\\b")], ConformanceOptions::default());
    assert_eq!(a.get_attribute("href"), Some("a\\b"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_url_without_value() {
    let (_, _, diagnostics) = check(
        "a",
        vec![AttributeOccurrence::bare("href")],
        ConformanceOptions::default(),
    );
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::MissingAttributeValue]);
    assert_eq!(diagnostics[0].attribute.as_deref(), Some("href"));
    assert_eq!(diagnostics[0].value, None);
}

// Align and valign

#[test]
fn test_align_on_block_elements() {
    for value in ["left", "CENTER", "right", "justify"] {
        let (_, _, diagnostics) = check("p", vec![attr("align", value)], ConformanceOptions::default());
        assert!(diagnostics.is_empty(), "align={value}");
    }

    let (p, _, diagnostics) = check("p", vec![attr("align", "middle")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);
    assert_eq!(p.get_attribute("align"), Some("middle"));

    let (_, _, diagnostics) = check(
        "p",
        vec![AttributeOccurrence::bare("align")],
        ConformanceOptions::default(),
    );
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::MissingAttributeValue]);
}

#[test]
fn test_align_on_images_is_positional() {
    for value in ["left", "right", "top", "middle", "bottom", "baseline"] {
        let (_, _, diagnostics) = check(
            "img",
            vec![attr("src", "x.png"), attr("alt", ""), attr("align", value)],
            ConformanceOptions::default(),
        );
        assert!(diagnostics.is_empty(), "align={value}");
    }

    let (_, _, diagnostics) = check(
        "img",
        vec![attr("src", "x.png"), attr("alt", ""), attr("align", "justify")],
        ConformanceOptions::default(),
    );
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);
}

#[test]
fn test_valign_left_only_on_images() {
    let (_, _, diagnostics) = check("td", vec![attr("valign", "left")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);

    let (_, _, diagnostics) = check("td", vec![attr("valign", "baseline")], ConformanceOptions::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_proprietary_valign_narrows_to_vendor_dialects() {
    let (_, state, diagnostics) = check(
        "img",
        vec![attr("src", "x.png"), attr("alt", ""), attr("align", "absmiddle")],
        ConformanceOptions::default(),
    );
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::ProprietaryAttributeValue]);
    assert!(state.versions().is_subset_of(VersionMask::PROPRIETARY));
}

// Numbers, lengths and colors

#[test]
fn test_lengths() {
    for value in ["10", "50%", "*", "3*"] {
        let (_, _, diagnostics) = check("td", vec![attr("width", value)], ConformanceOptions::default());
        assert!(diagnostics.is_empty(), "width={value}");
    }
    for value in ["", "10px", "%", "-1"] {
        let (_, _, diagnostics) = check("td", vec![attr("width", value)], ConformanceOptions::default());
        assert_eq!(
            kinds(&diagnostics),
            vec![DiagnosticKind::BadAttributeValue],
            "width={value}"
        );
    }
}

#[test]
fn test_numbers() {
    let (_, _, diagnostics) = check("font", vec![attr("size", "3")], ConformanceOptions::default());
    assert!(diagnostics.is_empty());

    let (_, _, diagnostics) = check("font", vec![attr("size", "big")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);
}

#[test]
fn test_colors() {
    for value in ["#fff", "#00FF00", "navy", "Silver"] {
        let (_, _, diagnostics) = check("font", vec![attr("color", value)], ConformanceOptions::default());
        assert!(diagnostics.is_empty(), "color={value}");
    }

    let (_, _, diagnostics) = check("font", vec![attr("color", "#12345")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);

    let (_, _, diagnostics) = check("font", vec![attr("color", "chartreuse")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);
}

#[test]
fn test_bare_hex_color_gets_hash() {
    let (font, _, diagnostics) = check("font", vec![attr("color", "ff8800")], ConformanceOptions::default());
    assert_eq!(font.get_attribute("color"), Some("#ff8800"));
    assert!(diagnostics.is_empty());
}

// Keywords

#[test]
fn test_keyword_checkers() {
    let cases = [
        ("th", "scope", "colgroup", "cell"),
        ("area", "shape", "poly", "triangle"),
        ("p", "dir", "RTL", "up"),
        ("br", "clear", "all", "both"),
        ("table", "frame", "hsides", "all"),
        ("table", "rules", "groups", "some"),
    ];
    for (tag, name, good, bad) in cases {
        let (_, _, diagnostics) = check(tag, vec![attr(name, good)], ConformanceOptions::default());
        assert!(
            !kinds(&diagnostics).contains(&DiagnosticKind::BadAttributeValue),
            "{tag} {name}={good}"
        );
        let (_, _, diagnostics) = check(tag, vec![attr(name, bad)], ConformanceOptions::default());
        assert!(
            kinds(&diagnostics).contains(&DiagnosticKind::BadAttributeValue),
            "{tag} {name}={bad}"
        );
    }
}

#[test]
fn test_targets() {
    for value in ["_blank", "_top", "content"] {
        let (_, _, diagnostics) = check(
            "a",
            vec![attr("href", "x"), attr("target", value)],
            ConformanceOptions::default(),
        );
        assert!(diagnostics.is_empty(), "target={value}");
    }
    let (_, _, diagnostics) = check(
        "a",
        vec![attr("href", "x"), attr("target", "_new")],
        ConformanceOptions::default(),
    );
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BadAttributeValue]);
}

// Opaque values

#[test]
fn test_script_and_boolean_values_are_not_inspected() {
    let (_, _, diagnostics) = check(
        "p",
        vec![attr("onclick", "if (a < b) { go() }")],
        ConformanceOptions::default(),
    );
    assert!(diagnostics.is_empty());

    let (_, _, diagnostics) = check(
        "img",
        vec![attr("src", "x"), attr("alt", ""), attr("usemap", "#m"), AttributeOccurrence::bare("ismap")],
        ConformanceOptions::default(),
    );
    assert!(diagnostics.is_empty());
}

// Name resolution

#[test]
fn test_unknown_attribute_reported() {
    let (_, _, diagnostics) = check("p", vec![attr("frobnicate", "1")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::UnknownAttribute]);
    assert_eq!(diagnostics[0].attribute.as_deref(), Some("frobnicate"));
}

#[test]
fn test_unknown_attribute_exemptions() {
    // XML tags mode.
    let options = ConformanceOptions::default().with_xml_tags();
    let (_, _, diagnostics) = check("p", vec![attr("frobnicate", "1")], options);
    assert!(diagnostics.is_empty());

    // Unknown element.
    let (_, _, diagnostics) = check("x-widget", vec![attr("frobnicate", "1")], ConformanceOptions::default());
    assert!(diagnostics.is_empty());

    // Proprietary element.
    let (_, _, diagnostics) = check("marquee", vec![attr("frobnicate", "1")], ConformanceOptions::default());
    assert!(diagnostics.is_empty());

    // Templated attribute.
    let templated = attr("<?php echo $k ?>", "v")
        .with_fragment(EmbeddedFragment::new(FragmentLanguage::Php, "echo $k"));
    let (_, _, diagnostics) = check("p", vec![templated], ConformanceOptions::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_xml_attribute_outside_xml_mode() {
    let (_, state, diagnostics) = check("p", vec![attr("xml:lang", "en")], ConformanceOptions::default());
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::XmlAttributeMisuse]);
    assert_eq!(state.versions(), VersionMask::EVERYTHING);

    let options = ConformanceOptions::default().with_xml_output();
    let (_, state, diagnostics) = check("p", vec![attr("xml:lang", "en")], options);
    assert!(diagnostics.is_empty());
    assert_eq!(state.versions(), VersionMask::EVERYTHING);
}

#[test]
fn test_descriptor_versions_narrow_the_document() {
    let (_, state, _) = check("p", vec![attr("class", "note")], ConformanceOptions::default());
    assert_eq!(state.versions(), VersionMask::FROM40);
}

#[test]
fn test_title_on_links_is_legal_everywhere() {
    let (_, state, diagnostics) = check(
        "a",
        vec![attr("href", "x"), attr("title", "t")],
        ConformanceOptions::default(),
    );
    assert!(diagnostics.is_empty());
    assert_eq!(state.versions(), VersionMask::ALL);

    let (_, state, _) = check("p", vec![attr("title", "t")], ConformanceOptions::default());
    assert_eq!(state.versions(), VersionMask::FROM40);
}
