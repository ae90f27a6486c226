//! Attribute descriptors and the attribute dictionary.
//!
//! Every attribute name the checker knows about has exactly one
//! [`AttributeDescriptor`]: the HTML versions that permit it, two
//! pretty-printer hints, and the [`ValueValidator`] that checks its value.
//! Descriptors are identified by their [`AttrId`], compared by value.

mod table;
mod value;

use std::collections::HashMap;

pub use table::AttrId;
pub use value::ValueValidator;

use crate::version::VersionMask;

/// Immutable rule for one attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Identity of the attribute.
    pub id: AttrId,
    /// Canonical (lowercase) name.
    pub name: &'static str,
    /// Versions in which the attribute is legal.
    pub versions: VersionMask,
    /// The value is opaque text (script, style) and must be passed through
    /// untouched.
    pub literal: bool,
    /// The value must not be wrapped or have whitespace collapsed.
    pub nowrap: bool,
    /// Value checker, if the attribute has one.
    pub checker: Option<ValueValidator>,
}

/// Name-to-descriptor dictionary for attributes.
///
/// Built once and read thereafter. [`AttributeTable::get`] and
/// [`AttributeTable::find`] always hand out the same descriptor for the same
/// attribute.
#[derive(Debug)]
pub struct AttributeTable {
    descriptors: &'static [AttributeDescriptor],
    by_name: HashMap<&'static str, usize>,
}

impl AttributeTable {
    /// The HTML attribute dictionary.
    #[must_use]
    pub fn html() -> Self {
        let descriptors = table::ATTRIBUTES;
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

    /// Look an attribute up by name, ignoring ASCII case.
    ///
    /// `None` is an ordinary outcome: proprietary and made-up attributes are
    /// not in the table.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&AttributeDescriptor> {
        let index = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.by_name.get(name.to_ascii_lowercase().as_str())
        } else {
            self.by_name.get(name)
        };
        index.map(|&i| &self.descriptors[i])
    }

    /// The descriptor for a known attribute.
    #[must_use]
    pub fn get(&self, id: AttrId) -> &AttributeDescriptor {
        &self.descriptors[id as usize]
    }

    /// Every descriptor, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.descriptors.iter()
    }

    /// Number of known attributes.
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
