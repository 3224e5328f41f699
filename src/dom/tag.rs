// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The element taxonomy: a tagged enum rather than a class hierarchy, per
//! this crate's node representation (one `NodeData::Element` carries an
//! `ElementKind` rather than a distinct Rust type per tag).

use string_cache::Atom;

/// Which HTML element a node is. Structural/table/form elements the tree
/// constructor treats specially each get their own variant so tree-builder
/// code can match on them directly (`ElementKind::Table`, not
/// `ElementKind::Generic(atom!("table"))`); everything else recognized as a
/// standard HTML element collapses to `Generic`, and anything not
/// recognized at all -- custom elements, typos, foreign markup -- becomes
/// `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Html,
    Head,
    Body,
    Title,
    Base,
    Link,
    Meta,
    Style,
    Script,
    Noscript,
    Template,
    Address,
    Article,
    Aside,
    Footer,
    Header,
    Hgroup,
    Main,
    Nav,
    Section,
    BlockQuote,
    Dd,
    Dir,
    Div,
    Dl,
    Dt,
    FigCaption,
    Figure,
    Hr,
    Li,
    Listing,
    Menu,
    Ol,
    P,
    Pre,
    Ul,
    Heading(u8),
    A,
    B,
    Big,
    Code,
    Em,
    Font,
    I,
    Nobr,
    S,
    Small,
    Strike,
    Strong,
    Tt,
    U,
    Area,
    Br,
    Embed,
    Img,
    Input,
    Keygen,
    Param,
    Source,
    Track,
    Wbr,
    Applet,
    Iframe,
    Marquee,
    Object,
    Noembed,
    Noframes,
    Bgsound,
    Basefont,
    Button,
    Fieldset,
    Form,
    Label,
    Legend,
    Meter,
    Optgroup,
    Option,
    Output,
    Progress,
    Select,
    Textarea,
    Table,
    Caption,
    Col,
    ColGroup,
    Tbody,
    Td,
    Tfoot,
    Th,
    Thead,
    Tr,
    Frame,
    Frameset,
    Plaintext,
    Xmp,

    /// A recognized HTML element this crate does not model with a
    /// dedicated variant (e.g. `<span>`, `<canvas>`).
    Generic(Atom),

    /// Not a known HTML element name at all.
    Unknown(Atom),
}

impl ElementKind {
    pub fn from_name(name: &Atom) -> ElementKind {
        use ElementKind::*;
        match &name[..] {
            "html" => Html,
            "head" => Head,
            "body" => Body,
            "title" => Title,
            "base" => Base,
            "link" => Link,
            "meta" => Meta,
            "style" => Style,
            "script" => Script,
            "noscript" => Noscript,
            "template" => Template,
            "address" => Address,
            "article" => Article,
            "aside" => Aside,
            "footer" => Footer,
            "header" => Header,
            "hgroup" => Hgroup,
            "main" => Main,
            "nav" => Nav,
            "section" => Section,
            "blockquote" => BlockQuote,
            "dd" => Dd,
            "dir" => Dir,
            "div" => Div,
            "dl" => Dl,
            "dt" => Dt,
            "figcaption" => FigCaption,
            "figure" => Figure,
            "hr" => Hr,
            "li" => Li,
            "listing" => Listing,
            "menu" => Menu,
            "ol" => Ol,
            "p" => P,
            "pre" => Pre,
            "ul" => Ul,
            "h1" => Heading(1),
            "h2" => Heading(2),
            "h3" => Heading(3),
            "h4" => Heading(4),
            "h5" => Heading(5),
            "h6" => Heading(6),
            "a" => A,
            "b" => B,
            "big" => Big,
            "code" => Code,
            "em" => Em,
            "font" => Font,
            "i" => I,
            "nobr" => Nobr,
            "s" => S,
            "small" => Small,
            "strike" => Strike,
            "strong" => Strong,
            "tt" => Tt,
            "u" => U,
            "area" => Area,
            "br" => Br,
            "embed" => Embed,
            "img" => Img,
            "input" => Input,
            "keygen" => Keygen,
            "param" => Param,
            "source" => Source,
            "track" => Track,
            "wbr" => Wbr,
            "applet" => Applet,
            "iframe" => Iframe,
            "marquee" => Marquee,
            "object" => Object,
            "noembed" => Noembed,
            "noframes" => Noframes,
            "bgsound" => Bgsound,
            "basefont" => Basefont,
            "button" => Button,
            "fieldset" => Fieldset,
            "form" => Form,
            "label" => Label,
            "legend" => Legend,
            "meter" => Meter,
            "optgroup" => Optgroup,
            "option" => Option,
            "output" => Output,
            "progress" => Progress,
            "select" => Select,
            "textarea" => Textarea,
            "table" => Table,
            "caption" => Caption,
            "col" => Col,
            "colgroup" => ColGroup,
            "tbody" => Tbody,
            "td" => Td,
            "tfoot" => Tfoot,
            "th" => Th,
            "thead" => Thead,
            "tr" => Tr,
            "frame" => Frame,
            "frameset" => Frameset,
            "plaintext" => Plaintext,
            "xmp" => Xmp,
            "span" | "canvas" | "video" | "audio" | "picture" | "summary" | "details" | "dialog"
            | "center" | "ins" | "del" | "mark" | "sub" | "sup" | "ruby" | "rb" | "rt" | "rp" | "rtc" => {
                Generic(name.clone())
            }
            _ => Unknown(name.clone()),
        }
    }

    /// A rough box-model layout stub: the tree builder and DOM never call
    /// this themselves, it exists for downstream consumers that want a
    /// placeholder size before wiring in a real layout engine.
    pub fn layout(&self, max_width: u32) -> (u32, u32) {
        match self {
            ElementKind::Script | ElementKind::Style => (0, 0),
            _ => (max_width, 0),
        }
    }
}
