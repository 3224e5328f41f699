// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The named element sets HTML5 §13.2 tree construction refers to
//! repeatedly: "special", the formatting elements, and the per-scope-kind
//! boundary sets used by `has_element_in_*_scope`.

/// HTML5 §13.2.4.2 "special" category (HTML-namespace subset; MathML/SVG
/// specials are out of scope -- foreign content is a non-goal here).
pub fn is_special(name: &str) -> bool {
    matches!(
        name,
        "address"
            | "applet"
            | "area"
            | "article"
            | "aside"
            | "base"
            | "basefont"
            | "bgsound"
            | "blockquote"
            | "body"
            | "br"
            | "button"
            | "caption"
            | "center"
            | "col"
            | "colgroup"
            | "dd"
            | "details"
            | "dir"
            | "div"
            | "dl"
            | "dt"
            | "embed"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "frame"
            | "frameset"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "head"
            | "header"
            | "hgroup"
            | "hr"
            | "html"
            | "iframe"
            | "img"
            | "input"
            | "li"
            | "link"
            | "listing"
            | "main"
            | "marquee"
            | "menu"
            | "meta"
            | "nav"
            | "noembed"
            | "noframes"
            | "noscript"
            | "object"
            | "ol"
            | "p"
            | "param"
            | "plaintext"
            | "pre"
            | "script"
            | "section"
            | "select"
            | "source"
            | "style"
            | "summary"
            | "table"
            | "tbody"
            | "td"
            | "template"
            | "textarea"
            | "tfoot"
            | "th"
            | "thead"
            | "title"
            | "tr"
            | "track"
            | "ul"
            | "wbr"
            | "xmp"
    )
}

/// §13.2.4.3 "the list of active formatting elements" membership.
pub fn is_formatting(name: &str) -> bool {
    matches!(
        name,
        "a" | "b"
            | "big"
            | "code"
            | "em"
            | "font"
            | "i"
            | "nobr"
            | "s"
            | "small"
            | "strike"
            | "strong"
            | "tt"
            | "u"
    )
}

/// Base scope boundary list shared by every `has_element_in_*_scope` variant
/// (§13.2.4.2 "has an element in the specific scope").
pub fn default_scope(name: &str) -> bool {
    matches!(
        name,
        "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object" | "template"
    )
}

pub fn list_item_scope(name: &str) -> bool {
    default_scope(name) || matches!(name, "ol" | "ul")
}

pub fn button_scope(name: &str) -> bool {
    default_scope(name) || name == "button"
}

pub fn table_scope(name: &str) -> bool {
    matches!(name, "html" | "table")
}

pub fn select_scope(name: &str) -> bool {
    !matches!(name, "optgroup" | "option")
}

/// §13.2.4.2 "generate implied end tags": elements popped automatically
/// unless excluded.
pub fn implied_end_tag(name: &str) -> bool {
    matches!(
        name,
        "dd" | "dt"
            | "li"
            | "optgroup"
            | "option"
            | "p"
            | "rb"
            | "rp"
            | "rt"
            | "rtc"
    )
}

/// The thorough variant used at the end of the adoption agency algorithm
/// and before popping `</body>`/`</html>`, which also implies `<tbody>`
/// family and caption/colgroup closings.
pub fn implied_end_tag_thorough(name: &str) -> bool {
    implied_end_tag(name) || matches!(name, "caption" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr" | "body")
}

pub fn heading_tag(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

pub fn table_section_tag(name: &str) -> bool {
    matches!(name, "tbody" | "tfoot" | "thead")
}

pub fn table_cell_tag(name: &str) -> bool {
    matches!(name, "td" | "th")
}
