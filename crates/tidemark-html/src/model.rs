//! Content-model flags for elements and accessibility defect flags for
//! documents. Both are plain bit sets with named predicates.

use core::fmt;
use core::ops::BitOr;

/// Structural category of an element.
///
/// Consumed mostly by collaborators outside the validator (tree building,
/// pretty printing). The validator itself only asks about [`ContentModel::IMG`]
/// and [`ContentModel::PROPRIETARY`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentModel(u32);

impl ContentModel {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Has no content and no end tag.
    pub const EMPTY: Self = Self(1);
    /// The `html` element's own children.
    pub const HTML: Self = Self(1 << 1);
    /// Allowed in `head`.
    pub const HEAD: Self = Self(1 << 2);
    /// Block-level.
    pub const BLOCK: Self = Self(1 << 3);
    /// Inline / phrasing.
    pub const INLINE: Self = Self(1 << 4);
    /// List item container content.
    pub const LIST: Self = Self(1 << 5);
    /// Definition list content.
    pub const DEFLIST: Self = Self(1 << 6);
    /// Table structure.
    pub const TABLE: Self = Self(1 << 7);
    /// `thead`/`tbody`/`tfoot`.
    pub const ROWGRP: Self = Self(1 << 8);
    /// Row content (cells).
    pub const ROW: Self = Self(1 << 9);
    /// Form field.
    pub const FIELD: Self = Self(1 << 10);
    /// Embedded object.
    pub const OBJECT: Self = Self(1 << 11);
    /// Accepts `param` children.
    pub const PARAM: Self = Self(1 << 12);
    /// Frames.
    pub const FRAMES: Self = Self(1 << 13);
    /// `h1`..`h6`.
    pub const HEADING: Self = Self(1 << 14);
    /// End tag is optional.
    pub const OPT: Self = Self(1 << 15);
    /// Image-like: `align` is positional rather than textual.
    pub const IMG: Self = Self(1 << 16);
    /// Allowed both in head and body.
    pub const MIXED: Self = Self(1 << 17);
    /// Start tag is optional.
    pub const OMITST: Self = Self(1 << 18);
    /// Obsolete element.
    pub const OBSOLETE: Self = Self(1 << 19);
    /// Vendor-specific element.
    pub const PROPRIETARY: Self = Self(1 << 20);

    /// Whether every flag in `flag` is set.
    #[must_use]
    pub const fn has_model(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Union, usable in `const` tables.
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for ContentModel {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl fmt::Debug for ContentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentModel({:#x})", self.0)
    }
}

/// Checklist-style accessibility shortfalls found in a document.
///
/// Independent of version legality. Flags are only ever added.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessibilityDefects(u8);

impl AccessibilityDefects {
    /// No defects.
    pub const NONE: Self = Self(0);
    /// A `table` has no `summary`.
    pub const MISSING_SUMMARY: Self = Self(1);
    /// An `img` has no `alt`.
    pub const MISSING_IMAGE_ALT: Self = Self(1 << 1);
    /// An `img` uses a server-side map (`ismap`) without `usemap`.
    pub const MISSING_IMAGE_MAP: Self = Self(1 << 2);
    /// An `area` has no `alt`.
    pub const MISSING_LINK_ALT: Self = Self(1 << 3);

    /// Whether every flag in `defect` is set.
    #[must_use]
    pub const fn contains(self, defect: Self) -> bool {
        self.0 & defect.0 == defect.0
    }

    /// Whether no defect is recorded.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union with `defect`.
    #[must_use]
    pub const fn with(self, defect: Self) -> Self {
        Self(self.0 | defect.0)
    }
}

impl fmt::Debug for AccessibilityDefects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::MISSING_SUMMARY, "MISSING_SUMMARY"),
            (Self::MISSING_IMAGE_ALT, "MISSING_IMAGE_ALT"),
            (Self::MISSING_IMAGE_MAP, "MISSING_IMAGE_MAP"),
            (Self::MISSING_LINK_ALT, "MISSING_LINK_ALT"),
        ];
        f.debug_set()
            .entries(
                names
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, name)| name),
            )
            .finish()
    }
}
