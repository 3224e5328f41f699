// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree constructor (HTML5 §13.2.5-§13.2.6): drives the 22 insertion
//! modes over the token stream the tokenizer produces, maintaining the
//! stack of open elements and the list of active formatting elements, and
//! emitting DOM mutations through a `TreeSink`.

pub mod actions;
pub mod data;
pub mod interface;
pub mod rules;
pub mod tag_sets;
pub mod types;

use tracing::trace;

use crate::tokenizer::states::State as TokenizerState;
use crate::tokenizer::{Doctype, TokenSink};

pub use self::interface::{NodeOrText, QuirksMode, TreeSink};
pub use self::types::InsertionMode;

use self::rules::TreeBuilderStep;
use self::types::FormatEntry;
use self::types::{
    CharacterTokens, CommentToken, InsertionMode::*, NotSplit, NotWhitespace,
    NullCharacterToken, Token, TreeEOFToken, TreeTagToken, Whitespace,
};
use self::types::{Done, DoneAckSelfClosing, Reprocess, SplitWhitespace};

/// Configuration for [`TreeBuilder`], mirroring the tokenizer's own
/// `TokenizerOpts` in spirit: a handful of booleans the caller sets once up
/// front, defaulting to whatever a plain document parse needs.
#[derive(Clone)]
pub struct TreeBuilderOpts {
    /// Produce the exact parse-error text HTML5 §13.2 uses, rather than a
    /// shorter paraphrase. Mirrors `TokenizerOpts::exact_errors`.
    pub exact_errors: bool,

    /// Whether `<script>` elements should be treated as ready to execute.
    /// This crate never executes scripts (inline script execution is out
    /// of scope); the flag only affects `frameset_ok` bookkeeping.
    pub scripting_enabled: bool,

    /// Parsing the contents of an `<iframe srcdoc>` relaxes a handful of
    /// quirks-mode rules. Threaded through to `data::doctype_error_and_quirks`.
    pub iframe_srcdoc: bool,

    /// Parse as a document fragment rooted at a given context element.
    /// Fragment parsing is out of scope here; setting this is a
    /// configuration error that's logged rather than silently dropped.
    pub fragment: bool,

    /// Discard any DOCTYPE token rather than appending it to the document.
    pub drop_doctype: bool,
}

impl Default for TreeBuilderOpts {
    fn default() -> TreeBuilderOpts {
        TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: true,
            iframe_srcdoc: false,
            fragment: false,
            drop_doctype: false,
        }
    }
}

/// The tree constructor itself. Generic over the sink so that callers can
/// plug in their own DOM representation; this crate's own `dom::ArenaSink`
/// is one such implementation.
pub struct TreeBuilder<Sink: TreeSink> {
    opts: TreeBuilderOpts,
    sink: Sink,

    mode: InsertionMode,
    orig_mode: Option<InsertionMode>,

    /// Pending character tokens buffered in `InTableText`, per §13.2.6.4.9,
    /// along with whether each run is known to be pure whitespace.
    pending_table_text: Vec<(types::SplitStatus, String)>,

    quirks_mode: QuirksMode,

    doc_handle: Sink::Handle,
    head_elem: Option<Sink::Handle>,
    form_elem: Option<Sink::Handle>,

    open_elems: Vec<Sink::Handle>,
    active_formatting: Vec<FormatEntry<Sink::Handle>>,

    /// Set by a rule that wants the tokenizer to switch state (e.g.
    /// entering `<textarea>` or `<script>`); drained by `query_state_change`.
    next_tokenizer_state: Option<TokenizerState>,

    frameset_ok: bool,
    ignore_lf: bool,
    foster_parenting: bool,
    stopped: bool,
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    pub fn new(mut sink: Sink, opts: TreeBuilderOpts) -> TreeBuilder<Sink> {
        if opts.fragment {
            tracing::error!("fragment parsing was requested but is not supported; parsing as a full document");
        }

        let doc_handle = sink.get_document();
        TreeBuilder {
            opts,
            sink,
            mode: Initial,
            orig_mode: None,
            pending_table_text: Vec::new(),
            quirks_mode: QuirksMode::NoQuirks,
            doc_handle,
            head_elem: None,
            form_elem: None,
            open_elems: Vec::new(),
            active_formatting: Vec::new(),
            next_tokenizer_state: None,
            frameset_ok: true,
            ignore_lf: false,
            foster_parenting: false,
            stopped: false,
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut Sink {
        &mut self.sink
    }

    pub fn unwrap(self) -> Sink {
        self.sink
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    fn process_doctype(&mut self, doctype: Doctype) {
        if self.mode != Initial {
            self.sink
                .parse_error(std::borrow::Cow::Borrowed("DOCTYPE not at the start of the document"));
            return;
        }
        if self.opts.drop_doctype {
            self.mode = BeforeHtml;
            return;
        }
        let (is_error, quirks_mode) = data::doctype_error_and_quirks(&doctype, self.opts.iframe_srcdoc);
        if is_error {
            self.sink.parse_error(std::borrow::Cow::Borrowed("Bogus DOCTYPE"));
        }
        let Doctype {
            name,
            public_id,
            system_id,
            ..
        } = doctype;
        self.sink.append_doctype_to_document(
            name.unwrap_or_default(),
            public_id.unwrap_or_default(),
            system_id.unwrap_or_default(),
        );
        self.sink.set_quirks_mode(quirks_mode);
        self.quirks_mode = quirks_mode;
        self.mode = BeforeHtml;
    }

    fn process_to_completion(&mut self, mut token: Token) {
        loop {
            trace!(mode = ?self.mode, "tree builder step");
            match TreeBuilderStep::step(self, self.mode, token) {
                Done => return,
                DoneAckSelfClosing => return,
                Reprocess(mode, new_token) => {
                    self.mode = mode;
                    token = new_token;
                }
                SplitWhitespace(buf) => {
                    use crate::util::str::{char_run, is_ascii_whitespace};
                    match char_run(is_ascii_whitespace, &buf) {
                        Some((len, _)) if len > 0 => {
                            let (ws, rest) = buf.split_at(len);
                            let ws = ws.to_string();
                            let rest = rest.to_string();
                            if let Reprocess(mode, _) =
                                TreeBuilderStep::step(self, self.mode, CharacterTokens(Whitespace, ws))
                            {
                                self.mode = mode;
                            }
                            if rest.is_empty() {
                                return;
                            }
                            token = CharacterTokens(NotWhitespace, rest);
                        }
                        _ => token = CharacterTokens(NotWhitespace, buf),
                    }
                }
            }
        }
    }
}

impl<Sink: TreeSink> TokenSink for TreeBuilder<Sink> {
    fn process_token(&mut self, token: crate::tokenizer::Token) {
        use crate::tokenizer::Token as TokToken;

        match token {
            TokToken::ParseError(msg) => self.sink.parse_error(msg),
            TokToken::DoctypeToken(doctype) => self.process_doctype(doctype),
            TokToken::TagToken(tag) => self.process_to_completion(TreeTagToken(tag)),
            TokToken::CommentToken(text) => self.process_to_completion(CommentToken(text)),
            TokToken::NullCharacterToken => self.process_to_completion(NullCharacterToken),
            TokToken::EOFToken => self.process_to_completion(TreeEOFToken),
            TokToken::CharacterTokens(mut text) => {
                if self.ignore_lf {
                    self.ignore_lf = false;
                    if text.starts_with('\n') {
                        text.remove(0);
                    }
                }
                if text.is_empty() {
                    return;
                }
                self.process_to_completion(CharacterTokens(NotSplit, text));
            }
        }
    }

    fn query_state_change(&mut self) -> Option<TokenizerState> {
        self.next_tokenizer_state.take()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_opts_are_permissive() {
        let opts = TreeBuilderOpts::default();
        assert!(!opts.exact_errors);
        assert!(opts.scripting_enabled);
        assert!(!opts.fragment);
    }
}
