//! Element-level attribute checks.
//!
//! An [`ElementValidator`] checks an element's attribute set as a whole:
//! required attributes, attributes that imply each other, element-specific
//! version constraints, and insertion of attributes that can be inferred.
//!
//! Every strategy first scans the whole list for repeated names, then checks
//! each occurrence, then applies its own rule. At most one attribute is
//! inserted per visit and inserted attributes satisfy the rule that added
//! them, so a second pass over a repaired element changes nothing.

use tidemark_dom::{AttributeOccurrence, ElementData};

use crate::attrs::AttrId;
use crate::check::{CheckContext, OwnerTag};
use crate::diagnostics::DiagnosticKind;
use crate::model::AccessibilityDefects;
use crate::tags::ElementDescriptor;
use crate::version::{HtmlVersion, VersionMask};

/// Attribute-set validation strategy attached to an element descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementValidator {
    /// `html`: notices `xmlns`.
    Html,
    /// `script`: requires and infers `type`.
    Script,
    /// `table`: wants `summary`; fixes bare `border` for XHTML.
    Table,
    /// `caption`: `align` decides the version.
    Caption,
    /// `hr`: has no image source.
    Hr,
    /// `img`: `alt`, `src` and image maps.
    Img,
    /// `area`: `alt` and `href`.
    Area,
    /// `a`: id repair.
    Anchor,
    /// `map`: id repair.
    Map,
    /// `style`: requires and infers `type`.
    Style,
    /// `td`, `th`: sizes rule out Strict.
    TableCell,
    /// `link`: style sheets need a `type`.
    Link,
    /// Attribute checks only.
    Default,
}

impl ElementValidator {
    /// Validate `element`. `descriptor` is `None` when the element name is
    /// not in the dictionary; only [`ElementValidator::Default`] is used then.
    pub fn check(
        self,
        cx: &mut CheckContext<'_>,
        element: &mut ElementData,
        descriptor: Option<&ElementDescriptor>,
    ) {
        let owner = OwnerTag::new(&element.tag_name, descriptor);
        cx.check_all_unique(owner, &element.attrs);

        match self {
            Self::Html => check_html(cx, owner, &mut element.attrs),
            Self::Script => check_script(cx, owner, &mut element.attrs),
            Self::Table => check_table(cx, owner, &mut element.attrs),
            Self::Caption => check_caption(cx, owner, &mut element.attrs),
            Self::Hr => {
                let seen = cx.check_attributes(owner, &mut element.attrs, None);
                if seen.has(AttrId::Src)
                    && let Some(src) = element.attrs.iter().find(|a| a.is_named("src"))
                {
                    cx.report(DiagnosticKind::ProprietaryAttributeValue, owner, src);
                }
            }
            Self::Img => check_img(cx, owner, &mut element.attrs),
            Self::Area => check_area(cx, owner, &mut element.attrs),
            Self::Anchor | Self::Map => {
                let _ = cx.check_attributes(owner, &mut element.attrs, None);
                let hook = cx.id_repair;
                // The hook takes the whole element, so the owner needs its own name.
                let name = element.tag_name.clone();
                hook.repair_id(cx, OwnerTag::new(&name, descriptor), element);
            }
            Self::Style => {
                let seen = cx.check_attributes(owner, &mut element.attrs, None);
                if !seen.has(AttrId::Type) {
                    cx.report_missing(owner, "type");
                    element
                        .attrs
                        .push(AttributeOccurrence::new("type", "text/css"));
                }
            }
            Self::TableCell => {
                let seen = cx.check_attributes(owner, &mut element.attrs, None);
                if seen.has(AttrId::Width) || seen.has(AttrId::Height) {
                    cx.state
                        .narrow(VersionMask::EVERYTHING.without(VersionMask::HTML40_STRICT));
                }
            }
            Self::Link => check_link(cx, owner, &mut element.attrs),
            Self::Default => {
                let _ = cx.check_attributes(owner, &mut element.attrs, None);
            }
        }
    }
}

fn check_html(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attrs: &mut [AttributeOccurrence]) {
    for attr in attrs.iter_mut() {
        let descriptor = cx.check_attribute_value(owner, attr);
        if descriptor.is_some_and(|d| d.id == AttrId::Xmlns) {
            cx.state.mark_xhtml();
        }
    }
}

fn check_script(
    cx: &mut CheckContext<'_>,
    owner: OwnerTag<'_>,
    attrs: &mut Vec<AttributeOccurrence>,
) {
    let seen = cx.check_attributes(owner, attrs, None);
    if seen.has(AttrId::Type) {
        return;
    }
    cx.report_missing(owner, "type");

    let infer_javascript = match attrs.iter().find(|a| a.is_named("language")) {
        None => true,
        Some(language) => language.value.as_deref().is_some_and(|lang| {
            let head = language_head(lang);
            head.eq_ignore_ascii_case("javascript") || head.eq_ignore_ascii_case("jscript")
        }),
    };
    if infer_javascript {
        attrs.push(AttributeOccurrence::new("type", "text/javascript"));
    }
}

fn check_table(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attrs: &mut [AttributeOccurrence]) {
    let seen = cx.check_attributes(owner, attrs, None);

    let pre_summary_doctype = matches!(
        cx.state.options().doctype,
        Some(HtmlVersion::Html20 | HtmlVersion::Html32)
    );
    if !seen.has(AttrId::Summary) && !pre_summary_doctype {
        cx.state.flag_defect(AccessibilityDefects::MISSING_SUMMARY);
        cx.report_missing(owner, "summary");
    }

    if cx.state.options().xml_output
        && let Some(border) = attrs.iter_mut().find(|a| a.is_named("border"))
        && border.value.is_none()
    {
        border.value = Some("1".to_string());
    }
}

fn check_caption(
    cx: &mut CheckContext<'_>,
    owner: OwnerTag<'_>,
    attrs: &mut [AttributeOccurrence],
) {
    let _ = cx.check_attributes(owner, attrs, Some(AttrId::Align));

    // Only the first `align` counts; repeats were reported above.
    let Some(align) = attrs.iter().find(|a| a.is_named("align")) else {
        return;
    };
    let Some(value) = align.value.as_deref() else {
        cx.report(DiagnosticKind::MissingAttributeValue, owner, align);
        return;
    };
    if value.eq_ignore_ascii_case("left") || value.eq_ignore_ascii_case("right") {
        cx.state.narrow(VersionMask::IFRAME);
    } else if value.eq_ignore_ascii_case("top") || value.eq_ignore_ascii_case("bottom") {
        cx.state.narrow(VersionMask::FROM32);
    } else {
        cx.report(DiagnosticKind::BadAttributeValue, owner, align);
    }
}

fn check_img(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attrs: &mut Vec<AttributeOccurrence>) {
    let seen = cx.check_attributes(owner, attrs, None);

    if seen.has(AttrId::Width) || seen.has(AttrId::Height) {
        cx.state
            .narrow(VersionMask::EVERYTHING.without(VersionMask::HTML20));
    }

    if !seen.has(AttrId::Alt) {
        cx.state.flag_defect(AccessibilityDefects::MISSING_IMAGE_ALT);
        cx.report_missing(owner, "alt");
        if let Some(text) = &cx.state.options().fallback_alt_text {
            attrs.push(AttributeOccurrence::new("alt", text.clone()));
        }
    }

    if !seen.has(AttrId::Src) && !seen.has(AttrId::Datafld) {
        cx.report_missing(owner, "src");
    }

    if seen.has(AttrId::Ismap) && !seen.has(AttrId::Usemap) {
        cx.state.flag_defect(AccessibilityDefects::MISSING_IMAGE_MAP);
        cx.report_element(DiagnosticKind::MissingImagemap, owner);
    }
}

fn check_area(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attrs: &mut [AttributeOccurrence]) {
    let seen = cx.check_attributes(owner, attrs, None);

    if !seen.has(AttrId::Alt) {
        cx.state.flag_defect(AccessibilityDefects::MISSING_LINK_ALT);
        cx.report_missing(owner, "alt");
    }
    if !seen.has(AttrId::Href) {
        cx.report_missing(owner, "href");
    }
}

fn check_link(cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, attrs: &mut Vec<AttributeOccurrence>) {
    let seen = cx.check_attributes(owner, attrs, None);

    let is_stylesheet = attrs
        .iter()
        .find(|a| a.is_named("rel"))
        .is_some_and(|rel| rel.value.as_deref() == Some("stylesheet"));
    if is_stylesheet && !seen.has(AttrId::Type) {
        cx.report_missing(owner, "type");
        attrs.push(AttributeOccurrence::new("type", "text/css"));
    }
}

/// At most the first ten characters of a `language` value, so
/// `JavaScript1.2` reads as `JavaScript` while `JScript.Encode` does not
/// read as `JScript`.
fn language_head(lang: &str) -> &str {
    lang.char_indices().nth(10).map_or(lang, |(end, _)| &lang[..end])
}
