//! Attribute occurrences and the element-level attribute facade.
//!
//! An element owns its attributes as an ordered list. Order is insertion
//! order and it is significant: when a name is repeated, the first
//! occurrence is the canonical one and later ones are duplicates. Nothing in
//! this module merges or drops duplicates on its own.

use serde::{Deserialize, Serialize};

/// Template language of a fragment embedded in an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentLanguage {
    /// `<% ... %>` server pages.
    Asp,
    /// `<?php ... ?>` blocks.
    Php,
    /// `<# ... #>` JSTE templates.
    Jste,
}

/// Server-side or template code that appeared inside an attribute.
///
/// Occurrences carrying a fragment are produced by templating engines and
/// are exempt from duplicate and unknown-attribute reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedFragment {
    /// Which template language the fragment is written in.
    pub language: FragmentLanguage,
    /// The raw fragment text, delimiters excluded.
    pub source: String,
}

impl EmbeddedFragment {
    /// Create a fragment of the given language.
    #[must_use]
    pub fn new(language: FragmentLanguage, source: impl Into<String>) -> Self {
        Self {
            language,
            source: source.into(),
        }
    }
}

const fn default_delimiter() -> char {
    '"'
}

/// One attribute as it appears on one element instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOccurrence {
    /// Attribute name as written in the source.
    pub name: String,
    /// Attribute value. `None` for a bare attribute such as `<td nowrap>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Quote character the value was written with. Cosmetic only.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Template code tied to this attribute, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedFragment>,
}

impl AttributeOccurrence {
    /// Create an occurrence with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            delimiter: default_delimiter(),
            embedded: None,
        }
    }

    /// Create a bare occurrence that has no value.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            delimiter: default_delimiter(),
            embedded: None,
        }
    }

    /// Attach an embedded template fragment.
    #[must_use]
    pub fn with_fragment(mut self, fragment: EmbeddedFragment) -> Self {
        self.embedded = Some(fragment);
        self
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Whether this occurrence carries an embedded template fragment.
    #[must_use]
    pub const fn has_fragment(&self) -> bool {
        self.embedded.is_some()
    }

    /// Whether a non-empty value is present.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// The value as a string slice, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// "An element has an associated attribute list"
///
/// The facade methods below are linear scans over [`ElementData::attrs`];
/// they keep no state of their own, so whatever the validators mutate is
/// exactly what the facade observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// The ordered attribute list.
    pub attrs: Vec<AttributeOccurrence>,
}

impl ElementData {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Vec::new(),
        }
    }

    /// Create an element from an ordered attribute list.
    #[must_use]
    pub fn with_attrs(tag_name: impl Into<String>, attrs: Vec<AttributeOccurrence>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
        }
    }

    /// Position of the first occurrence named `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.attrs.iter().position(|a| a.is_named(name))
    }

    /// [§ 4.9 getAttributeNode](https://dom.spec.whatwg.org/#dom-element-getattributenode)
    ///
    /// Returns the first occurrence named `name`.
    #[must_use]
    pub fn get_attribute_node(&self, name: &str) -> Option<&AttributeOccurrence> {
        self.attrs.iter().find(|a| a.is_named(name))
    }

    /// Mutable access to the first occurrence named `name`.
    pub fn get_attribute_node_mut(&mut self, name: &str) -> Option<&mut AttributeOccurrence> {
        self.attrs.iter_mut().find(|a| a.is_named(name))
    }

    /// [§ 4.9 getAttribute](https://dom.spec.whatwg.org/#dom-element-getattribute)
    ///
    /// Value of the first occurrence named `name`. A bare attribute yields
    /// `Some("")`, an absent one `None`.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_attribute_node(name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    /// [§ 4.9 hasAttribute](https://dom.spec.whatwg.org/#dom-element-hasattribute)
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// [§ 4.9 setAttribute](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// Overwrites the first occurrence named `name`, or appends a new one.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.get_attribute_node_mut(name) {
            attr.value = Some(value.to_string());
        } else {
            self.attrs.push(AttributeOccurrence::new(name, value));
        }
    }

    /// [§ 4.9 removeAttribute](https://dom.spec.whatwg.org/#dom-element-removeattribute)
    ///
    /// Removes the first occurrence named `name` and returns it.
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeOccurrence> {
        self.position_of(name).map(|pos| self.attrs.remove(pos))
    }

    /// Names of all occurrences, duplicates included, in list order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|a| a.name.as_str())
    }

    /// The element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }
}
