// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! DOCTYPE handling for the `Initial` insertion mode.
//!
//! HTML5 §13.2.6.4.1 sniffs quirks mode from the DOCTYPE's public/system
//! identifiers (a long table of legacy strings). That sniffing is out of
//! scope here; we only honor the tokenizer's `force_quirks` flag and the
//! presence of a non-`html` name, which covers the structural invariant
//! (some DOCTYPE, possibly malformed, was seen) without reimplementing the
//! identifier table.

use super::interface::QuirksMode;
use crate::tokenizer::Doctype;

/// Returns `(is_parse_error, quirks_mode)`.
pub fn doctype_error_and_quirks(doctype: &Doctype, _iframe_srcdoc: bool) -> (bool, QuirksMode) {
    let name_is_html = matches!(doctype.name.as_deref(), Some("html"));

    if doctype.force_quirks || !name_is_html {
        (true, QuirksMode::Quirks)
    } else if doctype.public_id.is_some() || doctype.system_id.is_some() {
        (false, QuirksMode::NoQuirks)
    } else {
        (false, QuirksMode::NoQuirks)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn html_doctype_is_no_quirks() {
        let dt = Doctype {
            name: Some("html".to_string()),
            public_id: None,
            system_id: None,
            force_quirks: false,
        };
        assert_eq!(doctype_error_and_quirks(&dt, false), (false, QuirksMode::NoQuirks));
    }

    #[test]
    fn force_quirks_wins() {
        let mut dt = Doctype::new();
        dt.name = Some("html".to_string());
        dt.force_quirks = true;
        assert_eq!(doctype_error_and_quirks(&dt, false), (true, QuirksMode::Quirks));
    }

    #[test]
    fn non_html_name_is_quirks_and_error() {
        let mut dt = Doctype::new();
        dt.name = Some("nonsense".to_string());
        assert_eq!(doctype_error_and_quirks(&dt, false), (true, QuirksMode::Quirks));
    }
}
