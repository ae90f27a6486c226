//! Tests for the attribute and tag dictionaries.

use tidemark_html::{
    AttrId, ContentModel, Dictionary, ElementValidator, HtmlVersion, TagId, ValueValidator,
    VersionMask,
};

#[test]
fn test_attribute_ids_index_their_own_descriptor() {
    let dict = Dictionary::shared();
    for descriptor in dict.attributes.iter() {
        assert_eq!(dict.attributes.get(descriptor.id).id, descriptor.id);
        assert_eq!(
            dict.attributes.find(descriptor.name).map(|d| d.id),
            Some(descriptor.id),
            "lookup of {} resolved elsewhere",
            descriptor.name
        );
    }
}

#[test]
fn test_tag_ids_index_their_own_descriptor() {
    let dict = Dictionary::shared();
    for descriptor in dict.tags.iter() {
        assert_eq!(dict.tags.get(descriptor.id).id, descriptor.id);
        assert_eq!(
            dict.tags.find(descriptor.name).map(|d| d.id),
            Some(descriptor.id)
        );
    }
}

#[test]
fn test_names_are_canonical_lowercase() {
    let dict = Dictionary::shared();
    for descriptor in dict.attributes.iter() {
        assert_eq!(descriptor.name, descriptor.name.to_ascii_lowercase());
    }
    for descriptor in dict.tags.iter() {
        assert_eq!(descriptor.name, descriptor.name.to_ascii_lowercase());
    }
}

#[test]
fn test_lookup_ignores_ascii_case() {
    let dict = Dictionary::shared();
    let upper = dict.attributes.find("HREF").map(|d| d.id);
    let mixed = dict.attributes.find("hRef").map(|d| d.id);
    assert_eq!(upper, Some(AttrId::Href));
    assert_eq!(mixed, Some(AttrId::Href));

    assert_eq!(dict.tags.find("IMG").map(|d| d.id), Some(TagId::Img));
    assert_eq!(dict.tags.find("Caption").map(|d| d.id), Some(TagId::Caption));
}

#[test]
fn test_unknown_names_are_not_found() {
    let dict = Dictionary::shared();
    assert!(dict.attributes.find("data-made-up").is_none());
    assert!(dict.attributes.find("").is_none());
    assert!(dict.tags.find("custom-element").is_none());
}

#[test]
fn test_separate_dictionaries_agree() {
    let own = Dictionary::html();
    let shared = Dictionary::shared();
    assert_eq!(own.attributes.len(), shared.attributes.len());
    assert_eq!(own.tags.len(), shared.tags.len());
    assert_eq!(own.attributes.find("src"), shared.attributes.find("src"));
}

#[test]
fn test_well_known_attribute_rows() {
    let dict = Dictionary::shared();

    let href = dict.attributes.get(AttrId::Href);
    assert_eq!(href.checker, Some(ValueValidator::Url));
    assert_eq!(href.versions, VersionMask::ALL);
    assert!(href.nowrap);

    let xml_lang = dict.attributes.get(AttrId::XmlLang);
    assert!(xml_lang.versions.permits(HtmlVersion::Xml));

    let onclick = dict.attributes.get(AttrId::Onclick);
    assert_eq!(onclick.checker, Some(ValueValidator::Script));
    assert!(onclick.literal);

    assert_eq!(dict.attributes.get(AttrId::Alt).checker, None);
}

#[test]
fn test_well_known_tag_rows() {
    let dict = Dictionary::shared();

    let img = dict.tags.get(TagId::Img);
    assert_eq!(img.checker, ElementValidator::Img);
    assert!(img.model.has_model(ContentModel::IMG));
    assert!(img.model.has_model(ContentModel::EMPTY));
    assert!(img.parser.is_none());

    assert_eq!(dict.tags.get(TagId::Td).checker, ElementValidator::TableCell);
    assert_eq!(dict.tags.get(TagId::Th).checker, ElementValidator::TableCell);
    assert_eq!(dict.tags.get(TagId::Caption).checker, ElementValidator::Caption);
    assert!(
        dict.tags
            .get(TagId::Marquee)
            .model
            .has_model(ContentModel::PROPRIETARY)
    );
    assert_eq!(dict.tags.get(TagId::Iframe).versions, VersionMask::IFRAME);
}
