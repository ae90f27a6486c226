//! Element descriptors (the tag dictionary).
//!
//! Each known element name maps to one [`ElementDescriptor`]: the versions
//! that define the element, its content model, the tree-builder routine that
//! parses its content, and the [`ElementValidator`] that checks its attribute
//! set as a whole.

mod element;
mod table;

use std::collections::HashMap;

pub use element::ElementValidator;
pub use table::TagId;

use crate::model::ContentModel;
use crate::version::VersionMask;

/// Which tree-builder routine parses an element's content.
///
/// The validator never calls these; they are carried for the tree builder
/// that shares the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentParser {
    /// `html`.
    Html,
    /// `head`.
    Head,
    /// `title`.
    Title,
    /// `body`.
    Body,
    /// `frameset`.
    Frameset,
    /// `noframes`.
    NoFrames,
    /// Block containers.
    Block,
    /// Inline containers.
    Inline,
    /// `ul`, `ol`, `dir`, `menu`.
    List,
    /// `dl`.
    DefList,
    /// `pre` and friends.
    Pre,
    /// `table`.
    Table,
    /// `thead`, `tbody`, `tfoot`.
    RowGroup,
    /// `tr`.
    Row,
    /// `colgroup`.
    ColGroup,
    /// `select`.
    Select,
    /// `optgroup`.
    OptGroup,
    /// Plain text content (`option`, `textarea`).
    Text,
    /// Raw script or style content.
    Script,
}

/// Immutable rule for one element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// Identity of the element.
    pub id: TagId,
    /// Canonical (lowercase) name.
    pub name: &'static str,
    /// Versions that define the element.
    pub versions: VersionMask,
    /// Structural category.
    pub model: ContentModel,
    /// Content parsing routine; `None` for empty elements.
    pub parser: Option<ContentParser>,
    /// Attribute-set validator.
    pub checker: ElementValidator,
}

/// Name-to-descriptor dictionary for elements.
#[derive(Debug)]
pub struct TagTable {
    descriptors: &'static [ElementDescriptor],
    by_name: HashMap<&'static str, usize>,
}

impl TagTable {
    /// The HTML tag dictionary.
    #[must_use]
    pub fn html() -> Self {
        let descriptors = table::TAGS;
        let by_name = descriptors
            .iter()
            .enumerate()
            .map(|(index, d)| (d.name, index))
            .collect();
        Self {
            descriptors,
            by_name,
        }
    }

    /// Look an element up by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ElementDescriptor> {
        let index = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.by_name.get(name.to_ascii_lowercase().as_str())
        } else {
            self.by_name.get(name)
        };
        index.map(|&i| &self.descriptors[i])
    }

    /// The descriptor for a known element.
    #[must_use]
    pub fn get(&self, id: TagId) -> &ElementDescriptor {
        &self.descriptors[id as usize]
    }

    /// Every descriptor, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.descriptors.iter()
    }

    /// Number of known elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
