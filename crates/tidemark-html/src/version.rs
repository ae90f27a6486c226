//! HTML version algebra.
//!
//! A [`VersionMask`] is the set of HTML variants a construct (or a whole
//! document) is compatible with. Validation only ever intersects masks, so a
//! document's mask can shrink over a pass but never grow.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One HTML specification variant. Each variant is a single bit of a
/// [`VersionMask`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum HtmlVersion {
    /// HTML 2.0 (RFC 1866).
    #[strum(serialize = "html20", to_string = "HTML 2.0")]
    Html20,
    /// HTML 3.2.
    #[strum(serialize = "html32", to_string = "HTML 3.2")]
    Html32,
    /// HTML 4.01 Strict.
    #[strum(serialize = "html40-strict", to_string = "HTML 4.01 Strict")]
    Html40Strict,
    /// HTML 4.01 Transitional.
    #[strum(serialize = "html40-loose", to_string = "HTML 4.01 Transitional")]
    Html40Loose,
    /// HTML 4.01 Frameset.
    #[strum(serialize = "frameset", to_string = "HTML 4.01 Frameset")]
    Frameset,
    /// Generic XML / XHTML serialization.
    #[strum(serialize = "xml", to_string = "XML")]
    Xml,
    /// Netscape extensions.
    #[strum(serialize = "netscape", to_string = "Netscape extensions")]
    Netscape,
    /// Microsoft extensions.
    #[strum(serialize = "microsoft", to_string = "Microsoft extensions")]
    Microsoft,
    /// Sun extensions.
    #[strum(serialize = "sun", to_string = "Sun extensions")]
    Sun,
    /// Not valid under any published variant.
    #[strum(serialize = "malformed", to_string = "malformed HTML")]
    Malformed,
    /// XHTML 1.1.
    #[strum(serialize = "xhtml11", to_string = "XHTML 1.1")]
    Xhtml11,
}

impl HtmlVersion {
    /// The single-bit mask for this version.
    #[must_use]
    pub const fn mask(self) -> VersionMask {
        VersionMask(1 << self as u16)
    }
}

/// A set of [`HtmlVersion`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionMask(u16);

impl VersionMask {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// HTML 2.0.
    pub const HTML20: Self = HtmlVersion::Html20.mask();
    /// HTML 3.2.
    pub const HTML32: Self = HtmlVersion::Html32.mask();
    /// HTML 4.01 Strict.
    pub const HTML40_STRICT: Self = HtmlVersion::Html40Strict.mask();
    /// HTML 4.01 Transitional.
    pub const HTML40_LOOSE: Self = HtmlVersion::Html40Loose.mask();
    /// HTML 4.01 Frameset.
    pub const FRAMESET: Self = HtmlVersion::Frameset.mask();
    /// XML-only constructs.
    pub const XML: Self = HtmlVersion::Xml.mask();
    /// Netscape extensions.
    pub const NETSCAPE: Self = HtmlVersion::Netscape.mask();
    /// Microsoft extensions.
    pub const MICROSOFT: Self = HtmlVersion::Microsoft.mask();
    /// Sun extensions.
    pub const SUN: Self = HtmlVersion::Sun.mask();
    /// Malformed markup.
    pub const MALFORMED: Self = HtmlVersion::Malformed.mask();
    /// XHTML 1.1.
    pub const XHTML11: Self = HtmlVersion::Xhtml11.mask();

    /// The HTML 4.01 family.
    pub const HTML40: Self = Self(Self::HTML40_STRICT.0 | Self::HTML40_LOOSE.0 | Self::FRAMESET.0);
    /// Transitional and Frameset, where `iframe` and `target` live.
    pub const IFRAME: Self = Self(Self::HTML40_LOOSE.0 | Self::FRAMESET.0);
    /// Everything except the strict variants.
    pub const LOOSE: Self = Self(Self::HTML20.0 | Self::HTML32.0 | Self::IFRAME.0);
    /// HTML 4.01 and XHTML 1.1.
    pub const FROM40: Self = Self(Self::HTML40.0 | Self::XHTML11.0);
    /// HTML 3.2 onward.
    pub const FROM32: Self = Self(Self::HTML32.0 | Self::FROM40.0);
    /// Every published, non-proprietary HTML variant.
    pub const ALL: Self = Self(Self::HTML20.0 | Self::FROM32.0);
    /// Vendor extensions.
    pub const PROPRIETARY: Self = Self(Self::NETSCAPE.0 | Self::MICROSOFT.0 | Self::SUN.0);
    /// Every known bit. A fresh document starts here.
    pub const EVERYTHING: Self = Self((1 << 11) - 1);

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether `version` is in the set.
    #[must_use]
    pub const fn permits(self, version: HtmlVersion) -> bool {
        self.0 & version.mask().0 != 0
    }

    /// Whether the two sets share at least one version.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every version in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Intersection with `other`.
    #[must_use]
    pub const fn narrowed(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Union with `other`. Usable in `const` tables, unlike `|`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The set minus `other`.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// The complement within [`VersionMask::EVERYTHING`].
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::EVERYTHING.0)
    }

    /// The versions in the set, in declaration order.
    pub fn versions(self) -> impl Iterator<Item = HtmlVersion> {
        HtmlVersion::iter().filter(move |v| self.permits(*v))
    }
}

impl BitAnd for VersionMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.narrowed(rhs)
    }
}

impl BitOr for VersionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for VersionMask {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl From<HtmlVersion> for VersionMask {
    fn from(version: HtmlVersion) -> Self {
        version.mask()
    }
}

impl fmt::Debug for VersionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.versions()).finish()
    }
}
