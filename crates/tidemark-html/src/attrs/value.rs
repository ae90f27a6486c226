//! Attribute value checkers.
//!
//! A [`ValueValidator`] looks at one occurrence's value in the context of
//! the element that carries it. It may repair the value in place, narrow the
//! document's version mask, or raise diagnostics. It never removes the
//! occurrence.

use tidemark_dom::AttributeOccurrence;

use crate::check::{CheckContext, OwnerTag};
use crate::diagnostics::DiagnosticKind;
use crate::version::VersionMask;

/// The named colors HTML 3.2 and 4.01 accept for color-valued attributes.
const NAMED_COLORS: &[&str] = &[
    "black", "silver", "gray", "white", "maroon", "red", "purple", "fuchsia", "green", "lime",
    "olive", "yellow", "navy", "blue", "teal", "aqua",
];

/// Value checking strategy attached to an attribute descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueValidator {
    /// URL; backslashes may be normalized.
    Url,
    /// Event handler script. Opaque.
    Script,
    /// Text alignment, or positional alignment on image-like elements.
    Align,
    /// Vertical / positional alignment.
    Valign,
    /// Boolean attribute. Presence is what matters.
    Bool,
    /// `id`. Accepted as is.
    Id,
    /// `name`. Accepted as is.
    Name,
    /// Integer, optionally negative.
    Number,
    /// Pixel count, percentage or relative (`*`) length.
    Length,
    /// `#rgb`, `#rrggbb`, or a named color.
    Color,
    /// Frame target name or one of the reserved `_` names.
    Target,
    /// Table cell scope.
    Scope,
    /// Image-map area shape.
    Shape,
    /// Text direction.
    TextDir,
    /// Frame scrolling.
    Scroll,
    /// `br` clearing.
    Clear,
    /// `param` value type.
    Valuetype,
    /// Table outer frame.
    FsFrame,
    /// Table inner rules.
    FsRules,
}

impl ValueValidator {
    /// Check `attr` as carried by `owner`.
    pub fn check(self, cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &mut AttributeOccurrence) {
        match self {
            Self::Url => check_url(cx, owner, attr),
            Self::Script | Self::Bool | Self::Id | Self::Name => {}
            Self::Align => check_align(cx, owner, attr),
            Self::Valign => check_valign(cx, owner, attr),
            Self::Number => check_number(cx, owner, attr),
            Self::Length => check_length(cx, owner, attr),
            Self::Color => check_color(cx, owner, attr),
            Self::Target => check_target(cx, owner, attr),
            Self::Scope => check_keyword(cx, owner, attr, &["row", "col", "rowgroup", "colgroup"]),
            Self::Shape => check_keyword(cx, owner, attr, &["rect", "circle", "poly", "default"]),
            Self::TextDir => check_keyword(cx, owner, attr, &["ltr", "rtl"]),
            Self::Scroll => check_keyword(cx, owner, attr, &["yes", "no", "auto"]),
            Self::Clear => check_keyword(cx, owner, attr, &["none", "left", "right", "all"]),
            Self::Valuetype => check_keyword(cx, owner, attr, &["data", "ref", "object"]),
            Self::FsFrame => check_keyword(
                cx,
                owner,
                attr,
                &[
                    "void", "above", "below", "hsides", "lhs", "rhs", "vsides", "box", "border",
                ],
            ),
            Self::FsRules => {
                check_keyword(cx, owner, attr, &["none", "groups", "rows", "cols", "all"]);
            }
        }
    }
}

/// Reports a missing value and returns `None`, or returns the value.
fn required_value<'v>(
    cx: &mut CheckContext<'_>,
    owner: OwnerTag<'_>,
    attr: &'v AttributeOccurrence,
) -> Option<&'v str> {
    let value = attr.value.as_deref();
    if value.is_none() {
        cx.report(DiagnosticKind::MissingAttributeValue, owner, attr);
    }
    value
}

fn check_url(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &mut AttributeOccurrence) {
    if required_value(cx, owner, attr).is_none() {
        return;
    }
    if cx.state.options().normalize_url_backslashes
        && let Some(value) = attr.value.as_mut()
        && value.contains('\\')
    {
        *value = value.replace('\\', "/");
    }
}

fn check_align(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
    // On images, applets and the like `align` positions the box.
    if owner.is_image_like() {
        check_valign(cx, owner, attr);
        return;
    }
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    if !is_one_of(value, &["left", "center", "right", "justify"]) {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_valign(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    if is_one_of(value, &["top", "middle", "bottom", "baseline"]) {
        return;
    }
    if is_one_of(value, &["left", "right"]) {
        if !owner.is_image_like() {
            cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
        }
    } else if is_one_of(value, &["texttop", "absmiddle", "absbottom", "textbottom"]) {
        cx.state.narrow(VersionMask::PROPRIETARY);
        cx.report(DiagnosticKind::ProprietaryAttributeValue, owner, attr);
    } else {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_number(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_length(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    let digits = value
        .strip_suffix('%')
        .or_else(|| value.strip_suffix('*'))
        .unwrap_or(value);
    // A bare "*" is a valid relative length ("one share").
    let valid = if digits.is_empty() {
        value == "*"
    } else {
        digits.bytes().all(|b| b.is_ascii_digit())
    };
    if !valid {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_color(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &mut AttributeOccurrence) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    let is_hex = |s: &str| s.bytes().all(|b| b.is_ascii_hexdigit());
    if let Some(hex) = value.strip_prefix('#') {
        if !(matches!(hex.len(), 3 | 6) && is_hex(hex)) {
            cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
        }
    } else if value.len() == 6 && is_hex(value) {
        let repaired = format!("#{value}");
        attr.value = Some(repaired);
    } else if !is_one_of(value, NAMED_COLORS) {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_target(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    if value.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return;
    }
    if !is_one_of(value, &["_blank", "_self", "_parent", "_top"]) {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn check_keyword(
    cx: &mut CheckContext<'_>,
    owner: OwnerTag<'_>,
    attr: &AttributeOccurrence,
    keywords: &[&str],
) {
    let Some(value) = required_value(cx, owner, attr) else {
        return;
    };
    if !is_one_of(value, keywords) {
        cx.report(DiagnosticKind::BadAttributeValue, owner, attr);
    }
}

fn is_one_of(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}
