//! The combined attribute and tag dictionary.

use std::sync::LazyLock;

use crate::attrs::AttributeTable;
use crate::tags::TagTable;

static SHARED: LazyLock<Dictionary> = LazyLock::new(Dictionary::html);

/// Attribute and element descriptor tables, looked up together.
///
/// Checkers receive the dictionary by reference. [`Dictionary::shared`]
/// hands out a process-wide read-only instance for callers that do not need
/// their own.
#[derive(Debug)]
pub struct Dictionary {
    /// Attribute descriptors.
    pub attributes: AttributeTable,
    /// Element descriptors.
    pub tags: TagTable,
}

impl Dictionary {
    /// Build the HTML dictionary.
    #[must_use]
    pub fn html() -> Self {
        Self {
            attributes: AttributeTable::html(),
            tags: TagTable::html(),
        }
    }

    /// The process-wide HTML dictionary, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::html()
    }
}
