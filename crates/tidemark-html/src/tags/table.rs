//! The tag dictionary proper.

use super::{ContentParser as P, ElementDescriptor, ElementValidator as E};
use crate::model::ContentModel;
use crate::version::VersionMask;

const ALL: VersionMask = VersionMask::ALL;
const FROM32: VersionMask = VersionMask::FROM32;
const FROM40: VersionMask = VersionMask::FROM40;
const LOOSE: VersionMask = VersionMask::LOOSE;
const IFRAME: VersionMask = VersionMask::IFRAME;
const FRAMESET: VersionMask = VersionMask::FRAMESET;
const XHTML11: VersionMask = VersionMask::XHTML11;
const NETSCAPE: VersionMask = VersionMask::NETSCAPE;
const MICROSOFT: VersionMask = VersionMask::MICROSOFT;
const PROPRIETARY: VersionMask = VersionMask::PROPRIETARY;
const EARLY: VersionMask = VersionMask::HTML20.union(VersionMask::HTML32);
const EMBED: VersionMask = VersionMask::NETSCAPE.union(VersionMask::MICROSOFT);

const EMPTY: ContentModel = ContentModel::EMPTY;
const HTML: ContentModel = ContentModel::HTML;
const HEAD: ContentModel = ContentModel::HEAD;
const BLOCK: ContentModel = ContentModel::BLOCK;
const INLINE: ContentModel = ContentModel::INLINE;
const LIST: ContentModel = ContentModel::LIST;
const DEFLIST: ContentModel = ContentModel::DEFLIST;
const TABLE: ContentModel = ContentModel::TABLE;
const ROWGRP: ContentModel = ContentModel::ROWGRP;
const ROW: ContentModel = ContentModel::ROW;
const FIELD: ContentModel = ContentModel::FIELD;
const OBJECT: ContentModel = ContentModel::OBJECT;
const PARAM: ContentModel = ContentModel::PARAM;
const FRAMES: ContentModel = ContentModel::FRAMES;
const HEADING: ContentModel = ContentModel::HEADING;
const OPT: ContentModel = ContentModel::OPT;
const IMG: ContentModel = ContentModel::IMG;
const MIXED: ContentModel = ContentModel::MIXED;
const OMITST: ContentModel = ContentModel::OMITST;
const OBSOLETE: ContentModel = ContentModel::OBSOLETE;
const VENDOR: ContentModel = ContentModel::PROPRIETARY;

const fn model(flags: &[ContentModel]) -> ContentModel {
    let mut out = ContentModel::NONE;
    let mut i = 0;
    while i < flags.len() {
        out = out.with(flags[i]);
        i += 1;
    }
    out
}

macro_rules! tags {
    ($($id:ident => $name:literal, $versions:expr, [$($flag:ident),*], $parser:expr, $checker:ident;)*) => {
        /// Identity of a known element.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TagId {
            $(
                #[doc = $name]
                $id,
            )*
        }

        pub(super) static TAGS: &[ElementDescriptor] = &[
            $(
                ElementDescriptor {
                    id: TagId::$id,
                    name: $name,
                    versions: $versions,
                    model: model(&[$($flag),*]),
                    parser: $parser,
                    checker: E::$checker,
                },
            )*
        ];
    };
}

tags! {
    A => "a", ALL, [INLINE], Some(P::Inline), Anchor;
    Abbr => "abbr", FROM40, [INLINE], Some(P::Inline), Default;
    Acronym => "acronym", FROM40, [INLINE], Some(P::Inline), Default;
    Address => "address", ALL, [BLOCK], Some(P::Block), Default;
    Applet => "applet", LOOSE, [OBJECT, IMG, INLINE, PARAM], Some(P::Block), Default;
    Area => "area", FROM32, [BLOCK, EMPTY], None, Area;
    B => "b", ALL, [INLINE], Some(P::Inline), Default;
    Base => "base", ALL, [HEAD, EMPTY], None, Default;
    Basefont => "basefont", LOOSE, [INLINE, EMPTY], None, Default;
    Bdo => "bdo", FROM40, [INLINE], Some(P::Inline), Default;
    Bgsound => "bgsound", MICROSOFT, [HEAD, EMPTY, VENDOR], None, Default;
    Big => "big", FROM32, [INLINE], Some(P::Inline), Default;
    Blink => "blink", PROPRIETARY, [INLINE, VENDOR], Some(P::Inline), Default;
    Blockquote => "blockquote", ALL, [BLOCK], Some(P::Block), Default;
    Body => "body", ALL, [HTML, OPT, OMITST], Some(P::Body), Default;
    Br => "br", ALL, [INLINE, EMPTY], None, Default;
    Button => "button", FROM40, [INLINE], Some(P::Block), Default;
    Caption => "caption", FROM32, [TABLE], Some(P::Inline), Caption;
    Center => "center", LOOSE, [BLOCK], Some(P::Block), Default;
    Cite => "cite", ALL, [INLINE], Some(P::Inline), Default;
    Code => "code", ALL, [INLINE], Some(P::Inline), Default;
    Col => "col", FROM40, [TABLE, EMPTY], None, Default;
    Colgroup => "colgroup", FROM40, [TABLE, OPT], Some(P::ColGroup), Default;
    Comment => "comment", MICROSOFT, [INLINE, VENDOR], Some(P::Inline), Default;
    Dd => "dd", ALL, [DEFLIST, OPT], Some(P::Block), Default;
    Del => "del", FROM40, [INLINE, BLOCK, MIXED], Some(P::Inline), Default;
    Dfn => "dfn", ALL, [INLINE], Some(P::Inline), Default;
    Dir => "dir", LOOSE, [BLOCK, OBSOLETE], Some(P::List), Default;
    Div => "div", FROM32, [BLOCK], Some(P::Block), Default;
    Dl => "dl", ALL, [BLOCK], Some(P::DefList), Default;
    Dt => "dt", ALL, [DEFLIST, OPT], Some(P::Inline), Default;
    Em => "em", ALL, [INLINE], Some(P::Inline), Default;
    Embed => "embed", EMBED, [INLINE, IMG, EMPTY, VENDOR], None, Default;
    Fieldset => "fieldset", FROM40, [BLOCK], Some(P::Block), Default;
    Font => "font", LOOSE, [INLINE], Some(P::Inline), Default;
    Form => "form", ALL, [BLOCK], Some(P::Block), Default;
    Frame => "frame", FRAMESET, [FRAMES, EMPTY], None, Default;
    Frameset => "frameset", FRAMESET, [HTML, FRAMES], Some(P::Frameset), Default;
    H1 => "h1", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    H2 => "h2", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    H3 => "h3", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    H4 => "h4", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    H5 => "h5", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    H6 => "h6", ALL, [BLOCK, HEADING], Some(P::Inline), Default;
    Head => "head", ALL, [HTML, OPT, OMITST], Some(P::Head), Default;
    Hr => "hr", ALL, [BLOCK, EMPTY], None, Hr;
    Html => "html", ALL, [HTML, OPT, OMITST], Some(P::Html), Html;
    I => "i", ALL, [INLINE], Some(P::Inline), Default;
    Iframe => "iframe", IFRAME, [INLINE], Some(P::Block), Default;
    Ilayer => "ilayer", NETSCAPE, [INLINE, VENDOR], Some(P::Inline), Default;
    Img => "img", ALL, [INLINE, IMG, EMPTY], None, Img;
    Input => "input", ALL, [INLINE, IMG, EMPTY], None, Default;
    Ins => "ins", FROM40, [INLINE, BLOCK, MIXED], Some(P::Inline), Default;
    Isindex => "isindex", LOOSE, [BLOCK, EMPTY], None, Default;
    Kbd => "kbd", ALL, [INLINE], Some(P::Inline), Default;
    Label => "label", FROM40, [INLINE], Some(P::Inline), Default;
    Layer => "layer", NETSCAPE, [BLOCK, VENDOR], Some(P::Block), Default;
    Legend => "legend", FROM40, [INLINE], Some(P::Inline), Default;
    Li => "li", ALL, [LIST, OPT], Some(P::Block), Default;
    Link => "link", ALL, [HEAD, EMPTY], None, Link;
    Listing => "listing", EARLY, [BLOCK, OBSOLETE], Some(P::Pre), Default;
    Map => "map", FROM32, [INLINE], Some(P::Block), Map;
    Marquee => "marquee", MICROSOFT, [INLINE, OPT, VENDOR], Some(P::Inline), Default;
    Menu => "menu", LOOSE, [BLOCK, OBSOLETE], Some(P::List), Default;
    Meta => "meta", ALL, [HEAD, EMPTY], None, Default;
    Multicol => "multicol", NETSCAPE, [BLOCK, VENDOR], Some(P::Block), Default;
    Nextid => "nextid", VersionMask::HTML20, [HEAD, EMPTY, OBSOLETE], None, Default;
    Nobr => "nobr", PROPRIETARY, [INLINE, VENDOR], Some(P::Inline), Default;
    Noembed => "noembed", NETSCAPE, [INLINE, VENDOR], Some(P::Inline), Default;
    Noframes => "noframes", IFRAME, [BLOCK, FRAMES], Some(P::NoFrames), Default;
    Nolayer => "nolayer", NETSCAPE, [BLOCK, INLINE, MIXED, VENDOR], Some(P::Block), Default;
    Noscript => "noscript", FROM40, [BLOCK, INLINE, MIXED], Some(P::Block), Default;
    Object => "object", FROM40, [OBJECT, HEAD, IMG, INLINE, PARAM], Some(P::Block), Default;
    Ol => "ol", ALL, [BLOCK], Some(P::List), Default;
    Optgroup => "optgroup", FROM40, [FIELD, OPT], Some(P::OptGroup), Default;
    Option => "option", ALL, [FIELD, OPT], Some(P::Text), Default;
    P => "p", ALL, [BLOCK, OPT], Some(P::Inline), Default;
    Param => "param", FROM32, [INLINE, EMPTY], None, Default;
    Plaintext => "plaintext", EARLY, [BLOCK, OBSOLETE], Some(P::Pre), Default;
    Pre => "pre", ALL, [BLOCK], Some(P::Pre), Default;
    Q => "q", FROM40, [INLINE], Some(P::Inline), Default;
    Rb => "rb", XHTML11, [INLINE], Some(P::Inline), Default;
    Rbc => "rbc", XHTML11, [INLINE], Some(P::Inline), Default;
    Rp => "rp", XHTML11, [INLINE], Some(P::Inline), Default;
    Rt => "rt", XHTML11, [INLINE], Some(P::Inline), Default;
    Rtc => "rtc", XHTML11, [INLINE], Some(P::Inline), Default;
    Ruby => "ruby", XHTML11, [INLINE], Some(P::Inline), Default;
    S => "s", LOOSE, [INLINE], Some(P::Inline), Default;
    Samp => "samp", ALL, [INLINE], Some(P::Inline), Default;
    Script => "script", FROM32, [HEAD, MIXED, BLOCK, INLINE], Some(P::Script), Script;
    Select => "select", ALL, [INLINE, FIELD], Some(P::Select), Default;
    Server => "server", NETSCAPE, [HEAD, MIXED, BLOCK, INLINE, VENDOR], Some(P::Script), Default;
    Small => "small", FROM32, [INLINE], Some(P::Inline), Default;
    Spacer => "spacer", NETSCAPE, [INLINE, EMPTY, VENDOR], None, Default;
    Span => "span", FROM40, [INLINE], Some(P::Inline), Default;
    Strike => "strike", LOOSE, [INLINE], Some(P::Inline), Default;
    Strong => "strong", ALL, [INLINE], Some(P::Inline), Default;
    Style => "style", FROM32, [HEAD], Some(P::Script), Style;
    Sub => "sub", FROM32, [INLINE], Some(P::Inline), Default;
    Sup => "sup", FROM32, [INLINE], Some(P::Inline), Default;
    Table => "table", FROM32, [BLOCK], Some(P::Table), Table;
    Tbody => "tbody", FROM40, [TABLE, ROWGRP, OPT], Some(P::RowGroup), Default;
    Td => "td", FROM32, [ROW, OPT], Some(P::Block), TableCell;
    Textarea => "textarea", ALL, [INLINE, FIELD], Some(P::Text), Default;
    Tfoot => "tfoot", FROM40, [TABLE, ROWGRP, OPT], Some(P::RowGroup), Default;
    Th => "th", FROM32, [ROW, OPT], Some(P::Block), TableCell;
    Thead => "thead", FROM40, [TABLE, ROWGRP, OPT], Some(P::RowGroup), Default;
    Title => "title", ALL, [HEAD], Some(P::Title), Default;
    Tr => "tr", FROM32, [TABLE, OPT], Some(P::Row), Default;
    Tt => "tt", ALL, [INLINE], Some(P::Inline), Default;
    U => "u", LOOSE, [INLINE], Some(P::Inline), Default;
    Ul => "ul", ALL, [BLOCK], Some(P::List), Default;
    Var => "var", ALL, [INLINE], Some(P::Inline), Default;
    Wbr => "wbr", PROPRIETARY, [INLINE, EMPTY, VENDOR], None, Default;
    Xmp => "xmp", EARLY, [BLOCK, OBSOLETE], Some(P::Pre), Default;
}
