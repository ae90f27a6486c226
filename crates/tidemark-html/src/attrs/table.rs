//! The attribute dictionary proper.
//!
//! One row per attribute: identity, canonical name, legal versions, value
//! checker, and pretty-printer hints. [`AttrId`] and [`ATTRIBUTES`] are
//! generated from the same list, so `ATTRIBUTES[id as usize].id == id`.

use super::{AttributeDescriptor, ValueValidator as V};
use crate::version::VersionMask;

const ALL: VersionMask = VersionMask::ALL;
const FROM32: VersionMask = VersionMask::FROM32;
const FROM40: VersionMask = VersionMask::FROM40;
const LOOSE: VersionMask = VersionMask::LOOSE;
const IFRAME: VersionMask = VersionMask::IFRAME;
const FRAMESET: VersionMask = VersionMask::FRAMESET;
const TRANSITIONAL: VersionMask = VersionMask::HTML40_LOOSE;
const XHTML11: VersionMask = VersionMask::XHTML11;
const XML: VersionMask = VersionMask::XML;
const NETSCAPE: VersionMask = VersionMask::NETSCAPE;
const MICROSOFT: VersionMask = VersionMask::MICROSOFT;
const PROPRIETARY: VersionMask = VersionMask::PROPRIETARY;

// (literal, nowrap)
const PLAIN: (bool, bool) = (false, false);
const TEXT: (bool, bool) = (true, false);
const LINK: (bool, bool) = (false, true);
const CODE: (bool, bool) = (true, true);

macro_rules! attributes {
    ($($id:ident => $name:literal, $versions:expr, $checker:expr, $hints:expr;)*) => {
        /// Identity of a known attribute.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AttrId {
            $(
                #[doc = $name]
                $id,
            )*
        }

        pub(super) static ATTRIBUTES: &[AttributeDescriptor] = &[
            $(
                AttributeDescriptor {
                    id: AttrId::$id,
                    name: $name,
                    versions: $versions,
                    literal: $hints.0,
                    nowrap: $hints.1,
                    checker: $checker,
                },
            )*
        ];
    };
}

attributes! {
    Abbr => "abbr", FROM40, None, TEXT;
    Accept => "accept", ALL, None, PLAIN;
    AcceptCharset => "accept-charset", FROM40, None, PLAIN;
    Accesskey => "accesskey", FROM40, None, PLAIN;
    Action => "action", ALL, Some(V::Url), LINK;
    AddDate => "add_date", NETSCAPE, None, PLAIN;
    Align => "align", ALL, Some(V::Align), PLAIN;
    Alink => "alink", LOOSE, Some(V::Color), PLAIN;
    Alt => "alt", ALL, None, TEXT;
    Archive => "archive", FROM40, Some(V::Url), LINK;
    Axis => "axis", FROM40, None, PLAIN;
    Background => "background", LOOSE, Some(V::Url), LINK;
    Bgcolor => "bgcolor", LOOSE, Some(V::Color), PLAIN;
    Bgproperties => "bgproperties", PROPRIETARY, None, PLAIN;
    Border => "border", ALL, Some(V::Bool), PLAIN;
    Bordercolor => "bordercolor", MICROSOFT, Some(V::Color), PLAIN;
    Bottommargin => "bottommargin", MICROSOFT, Some(V::Number), PLAIN;
    Cellpadding => "cellpadding", FROM32, Some(V::Length), PLAIN;
    Cellspacing => "cellspacing", FROM32, Some(V::Length), PLAIN;
    Char => "char", FROM40, None, PLAIN;
    Charoff => "charoff", FROM40, Some(V::Length), PLAIN;
    Charset => "charset", FROM40, None, PLAIN;
    Checked => "checked", ALL, Some(V::Bool), PLAIN;
    Cite => "cite", FROM40, Some(V::Url), LINK;
    Class => "class", FROM40, None, PLAIN;
    Classid => "classid", FROM40, Some(V::Url), LINK;
    Clear => "clear", LOOSE, Some(V::Clear), PLAIN;
    Code => "code", LOOSE, None, PLAIN;
    Codebase => "codebase", FROM40, Some(V::Url), LINK;
    Codetype => "codetype", FROM40, None, PLAIN;
    Color => "color", LOOSE, Some(V::Color), PLAIN;
    Cols => "cols", ALL, None, PLAIN;
    Colspan => "colspan", FROM32, Some(V::Number), PLAIN;
    Compact => "compact", ALL, Some(V::Bool), PLAIN;
    Content => "content", ALL, None, TEXT;
    Coords => "coords", FROM32, None, PLAIN;
    Data => "data", FROM40, Some(V::Url), LINK;
    Datafld => "datafld", MICROSOFT, None, PLAIN;
    Dataformatas => "dataformatas", MICROSOFT, None, PLAIN;
    Datapagesize => "datapagesize", MICROSOFT, Some(V::Number), PLAIN;
    Datasrc => "datasrc", MICROSOFT, Some(V::Url), LINK;
    Datetime => "datetime", FROM40, None, PLAIN;
    Declare => "declare", FROM40, Some(V::Bool), PLAIN;
    Defer => "defer", FROM40, Some(V::Bool), PLAIN;
    Dir => "dir", FROM40, Some(V::TextDir), PLAIN;
    Disabled => "disabled", FROM40, Some(V::Bool), PLAIN;
    Enctype => "enctype", ALL, None, PLAIN;
    Event => "event", FROM40, None, PLAIN;
    Face => "face", LOOSE, None, PLAIN;
    For => "for", FROM40, None, PLAIN;
    Frame => "frame", FROM40, Some(V::FsFrame), PLAIN;
    Frameborder => "frameborder", FRAMESET, None, PLAIN;
    Framespacing => "framespacing", PROPRIETARY, Some(V::Number), PLAIN;
    Gridx => "gridx", PROPRIETARY, Some(V::Number), PLAIN;
    Gridy => "gridy", PROPRIETARY, Some(V::Number), PLAIN;
    Headers => "headers", FROM40, None, PLAIN;
    Height => "height", ALL, Some(V::Length), PLAIN;
    Href => "href", ALL, Some(V::Url), LINK;
    Hreflang => "hreflang", FROM40, None, PLAIN;
    Hspace => "hspace", ALL, Some(V::Number), PLAIN;
    HttpEquiv => "http-equiv", ALL, None, PLAIN;
    Id => "id", FROM40, Some(V::Id), PLAIN;
    Ismap => "ismap", ALL, Some(V::Bool), PLAIN;
    Label => "label", FROM40, None, TEXT;
    Lang => "lang", FROM40, None, PLAIN;
    Language => "language", LOOSE, None, PLAIN;
    LastModified => "last_modified", NETSCAPE, None, PLAIN;
    LastVisit => "last_visit", NETSCAPE, None, PLAIN;
    Leftmargin => "leftmargin", MICROSOFT, Some(V::Number), PLAIN;
    Link => "link", LOOSE, Some(V::Color), PLAIN;
    Longdesc => "longdesc", FROM40, Some(V::Url), LINK;
    Lowsrc => "lowsrc", PROPRIETARY, Some(V::Url), LINK;
    Marginheight => "marginheight", IFRAME, Some(V::Number), PLAIN;
    Marginwidth => "marginwidth", IFRAME, Some(V::Number), PLAIN;
    Maxlength => "maxlength", ALL, Some(V::Number), PLAIN;
    Media => "media", FROM40, None, PLAIN;
    Method => "method", ALL, None, PLAIN;
    Multiple => "multiple", ALL, Some(V::Bool), PLAIN;
    Name => "name", ALL, Some(V::Name), PLAIN;
    Nohref => "nohref", FROM32, Some(V::Bool), PLAIN;
    Noresize => "noresize", FRAMESET, Some(V::Bool), PLAIN;
    Noshade => "noshade", LOOSE, Some(V::Bool), PLAIN;
    Nowrap => "nowrap", LOOSE, Some(V::Bool), PLAIN;
    Object => "object", TRANSITIONAL, None, PLAIN;
    Onafterupdate => "onafterupdate", MICROSOFT, Some(V::Script), CODE;
    Onbeforeunload => "onbeforeunload", MICROSOFT, Some(V::Script), CODE;
    Onbeforeupdate => "onbeforeupdate", MICROSOFT, Some(V::Script), CODE;
    Onblur => "onblur", FROM40, Some(V::Script), CODE;
    Onchange => "onchange", FROM40, Some(V::Script), CODE;
    Onclick => "onclick", FROM40, Some(V::Script), CODE;
    Ondataavailable => "ondataavailable", MICROSOFT, Some(V::Script), CODE;
    Ondatasetchanged => "ondatasetchanged", MICROSOFT, Some(V::Script), CODE;
    Ondatasetcomplete => "ondatasetcomplete", MICROSOFT, Some(V::Script), CODE;
    Ondblclick => "ondblclick", FROM40, Some(V::Script), CODE;
    Onerrorupdate => "onerrorupdate", MICROSOFT, Some(V::Script), CODE;
    Onfocus => "onfocus", FROM40, Some(V::Script), CODE;
    Onkeydown => "onkeydown", FROM40, Some(V::Script), CODE;
    Onkeypress => "onkeypress", FROM40, Some(V::Script), CODE;
    Onkeyup => "onkeyup", FROM40, Some(V::Script), CODE;
    Onload => "onload", FROM40, Some(V::Script), CODE;
    Onmousedown => "onmousedown", FROM40, Some(V::Script), CODE;
    Onmousemove => "onmousemove", FROM40, Some(V::Script), CODE;
    Onmouseout => "onmouseout", FROM40, Some(V::Script), CODE;
    Onmouseover => "onmouseover", FROM40, Some(V::Script), CODE;
    Onmouseup => "onmouseup", FROM40, Some(V::Script), CODE;
    Onreset => "onreset", FROM40, Some(V::Script), CODE;
    Onrowenter => "onrowenter", MICROSOFT, Some(V::Script), CODE;
    Onrowexit => "onrowexit", MICROSOFT, Some(V::Script), CODE;
    Onselect => "onselect", FROM40, Some(V::Script), CODE;
    Onsubmit => "onsubmit", FROM40, Some(V::Script), CODE;
    Onunload => "onunload", FROM40, Some(V::Script), CODE;
    Profile => "profile", FROM40, Some(V::Url), LINK;
    Prompt => "prompt", LOOSE, None, TEXT;
    Rbspan => "rbspan", XHTML11, Some(V::Number), PLAIN;
    Readonly => "readonly", FROM40, Some(V::Bool), PLAIN;
    Rel => "rel", ALL, None, PLAIN;
    Rev => "rev", ALL, None, PLAIN;
    Rightmargin => "rightmargin", MICROSOFT, Some(V::Number), PLAIN;
    Rows => "rows", ALL, None, PLAIN;
    Rowspan => "rowspan", ALL, Some(V::Number), PLAIN;
    Rules => "rules", FROM40, Some(V::FsRules), PLAIN;
    Scheme => "scheme", FROM40, None, PLAIN;
    Scope => "scope", FROM40, Some(V::Scope), PLAIN;
    Scrolling => "scrolling", IFRAME, Some(V::Scroll), PLAIN;
    Selected => "selected", ALL, Some(V::Bool), PLAIN;
    Shape => "shape", FROM32, Some(V::Shape), PLAIN;
    Showgrid => "showgrid", PROPRIETARY, Some(V::Bool), PLAIN;
    Showgridx => "showgridx", PROPRIETARY, Some(V::Bool), PLAIN;
    Showgridy => "showgridy", PROPRIETARY, Some(V::Bool), PLAIN;
    Size => "size", LOOSE, Some(V::Number), PLAIN;
    Span => "span", FROM40, Some(V::Number), PLAIN;
    Src => "src", ALL, Some(V::Url), LINK;
    Standby => "standby", FROM40, None, TEXT;
    Start => "start", ALL, Some(V::Number), PLAIN;
    Style => "style", FROM40, None, CODE;
    Summary => "summary", FROM40, None, TEXT;
    Tabindex => "tabindex", FROM40, Some(V::Number), PLAIN;
    Target => "target", IFRAME, Some(V::Target), PLAIN;
    Text => "text", LOOSE, Some(V::Color), PLAIN;
    Title => "title", FROM40, None, TEXT;
    Topmargin => "topmargin", MICROSOFT, Some(V::Number), PLAIN;
    Type => "type", ALL, None, PLAIN;
    Usemap => "usemap", ALL, Some(V::Url), LINK;
    Valign => "valign", FROM32, Some(V::Valign), PLAIN;
    Value => "value", ALL, None, TEXT;
    Valuetype => "valuetype", FROM40, Some(V::Valuetype), PLAIN;
    Version => "version", ALL, None, PLAIN;
    Vlink => "vlink", LOOSE, Some(V::Color), PLAIN;
    Vspace => "vspace", LOOSE, Some(V::Number), PLAIN;
    Width => "width", ALL, Some(V::Length), PLAIN;
    Wrap => "wrap", NETSCAPE, None, PLAIN;
    XmlLang => "xml:lang", XML, None, PLAIN;
    XmlSpace => "xml:space", XML, None, PLAIN;
    Xmlns => "xmlns", ALL, None, LINK;
}
