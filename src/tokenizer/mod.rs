// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tokenizer (§13.2.5): a 68-state machine turning preprocessed
//! code points into tokens for the tree builder.

pub mod states;
mod buffer_queue;
mod char_ref;
mod interface;

pub use self::buffer_queue::{BufferQueue, FromSet, NotFromSet, SetResult};
pub use self::interface::{
    AttrName, Attribute, CharacterTokens, CommentToken, Doctype, DoctypeToken, EOFToken, EndTag,
    NullCharacterToken, ParseError, ParseErrorMsg, StartTag, Tag, TagKind, TagToken, Token,
    TokenSink,
};

use std::borrow::Cow;
use std::mem::replace;

use string_cache::Atom;
use tracing::trace;

use self::char_ref::{CharRefStep, CharRefTokenizer};
use self::states::{
    AttrValueKind::{DoubleQuoted, SingleQuoted, Unquoted},
    DoctypeIdKind::{self, Public, System},
    RawKind::{self, Rawtext, Rcdata, ScriptData, ScriptDataEscaped},
    ScriptEscapeKind::{DoubleEscaped, Escaped},
    State,
};
use crate::util::smallcharset::small_char_set;
use crate::util::str::{lower_ascii, lower_ascii_letter};

fn option_push_char(opt_str: &mut Option<String>, c: char) {
    match opt_str {
        Some(s) => s.push(c),
        None => *opt_str = Some(c.to_string()),
    }
}

fn append_strings(lhs: &mut String, rhs: &str) {
    lhs.push_str(rhs);
}

/// Tokenizer options, with an impl for `Default`.
#[derive(Clone)]
pub struct TokenizerOpts {
    /// Report all parse errors described in the spec, at some performance
    /// penalty? Default: false.
    pub exact_errors: bool,

    /// Discard a `U+FEFF BYTE ORDER MARK` if we see one at the beginning of
    /// the stream? Default: true.
    pub discard_bom: bool,

    /// Initial state override. Only a test runner should use a non-`None`
    /// value!
    pub initial_state: Option<State>,

    /// Last start tag, used to decide whether a `RawData` end tag is the
    /// "appropriate" one. Only a test runner should use a non-`None` value!
    pub last_start_tag_name: Option<String>,
}

impl Default for TokenizerOpts {
    fn default() -> TokenizerOpts {
        TokenizerOpts {
            exact_errors: false,
            discard_bom: true,
            initial_state: None,
            last_start_tag_name: None,
        }
    }
}

/// The HTML tokenizer.
pub struct Tokenizer<Sink> {
    opts: TokenizerOpts,
    sink: Sink,
    state: State,
    input_buffers: BufferQueue,
    wait_for: Option<usize>,
    at_eof: bool,
    char_ref_tokenizer: Option<Box<CharRefTokenizer>>,
    current_char: char,
    reconsume: bool,
    ignore_lf: bool,
    discard_bom: bool,
    current_tag_kind: TagKind,
    current_tag_name: String,
    current_tag_self_closing: bool,
    current_tag_attrs: Vec<Attribute>,
    current_attr_name: String,
    current_attr_value: String,
    current_comment: String,
    current_doctype: Doctype,
    last_start_tag_name: Option<Atom>,
    temp_buf: String,
}

impl<Sink: TokenSink> Tokenizer<Sink> {
    /// Create a new tokenizer which feeds tokens to a particular `TokenSink`.
    pub fn new(sink: Sink, mut opts: TokenizerOpts) -> Tokenizer<Sink> {
        let start_tag_name = opts.last_start_tag_name.take().map(|s| Atom::from(s));
        let state = opts.initial_state.unwrap_or(State::Data);
        let discard_bom = opts.discard_bom;
        Tokenizer {
            opts,
            sink,
            state,
            wait_for: None,
            char_ref_tokenizer: None,
            input_buffers: BufferQueue::new(),
            at_eof: false,
            current_char: '\0',
            reconsume: false,
            ignore_lf: false,
            discard_bom,
            current_tag_kind: StartTag,
            current_tag_name: String::new(),
            current_tag_self_closing: false,
            current_tag_attrs: vec![],
            current_attr_name: String::new(),
            current_attr_value: String::new(),
            current_comment: String::new(),
            current_doctype: Doctype::new(),
            last_start_tag_name: start_tag_name,
            temp_buf: String::new(),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut Sink {
        &mut self.sink
    }

    /// Tear down the tokenizer and hand its sink back to the caller.
    pub fn unwrap(self) -> Sink {
        self.sink
    }

    /// Feed a chunk of already-decoded, already-preprocessed code points
    /// into the tokenizer.
    pub fn feed<I: IntoIterator<Item = char>>(&mut self, input: I) {
        let mut iter = input.into_iter().peekable();

        if self.discard_bom {
            self.discard_bom = false;
            if iter.peek() == Some(&'\u{feff}') {
                iter.next();
            }
        }

        self.input_buffers.push_back(iter);
        self.run();
    }

    fn process_token(&mut self, token: Token) {
        self.sink.process_token(token);
    }

    //§ preprocessing-the-input-stream
    fn get_preprocessed_char(&mut self, mut c: char) -> Option<char> {
        if self.ignore_lf {
            self.ignore_lf = false;
            if c == '\n' {
                c = self.input_buffers.next()?;
            }
        }

        if c == '\r' {
            self.ignore_lf = true;
            c = '\n';
        }

        if self.opts.exact_errors && is_invalid_control_char(c) {
            let msg = Cow::Owned(format!("Bad character {:?}", c));
            self.emit_error(msg);
        }

        trace!(?c, "tokenizer: next character");
        self.current_char = c;
        Some(c)
    }

    //§ tokenization
    fn get_char(&mut self) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
            Some(self.current_char)
        } else {
            self.input_buffers
                .next()
                .and_then(|c| self.get_preprocessed_char(c))
        }
    }

    fn pop_except_from(&mut self, set: crate::util::smallcharset::SmallCharSet) -> Option<SetResult> {
        if self.opts.exact_errors || self.reconsume || self.ignore_lf {
            return self.get_char().map(FromSet);
        }

        let d = self.input_buffers.pop_except_from(set);
        match d {
            Some(FromSet(c)) => self.get_preprocessed_char(c).map(FromSet),
            other => other,
        }
    }

    fn lookahead_and_consume<P: Fn(&str) -> bool>(&mut self, n: usize, p: P) -> Option<bool> {
        match self.input_buffers.pop_front(n) {
            None if self.at_eof => Some(false),
            None => {
                self.wait_for = Some(n);
                None
            }
            Some(s) => {
                if p(&s) {
                    Some(true)
                } else {
                    self.unconsume(s.chars().collect());
                    Some(false)
                }
            }
        }
    }

    fn run(&mut self) {
        while self.step() {}
    }

    fn bad_char_error(&mut self) {
        let msg = if self.opts.exact_errors {
            Cow::Owned(format!("Saw {:?} in state {:?}", self.current_char, self.state))
        } else {
            Cow::Borrowed("Bad character")
        };
        self.emit_error(msg);
    }

    fn bad_eof_error(&mut self) {
        let msg = if self.opts.exact_errors {
            Cow::Owned(format!("Saw EOF in state {:?}", self.state))
        } else {
            Cow::Borrowed("Unexpected EOF")
        };
        self.emit_error(msg);
    }

    fn emit_char(&mut self, c: char) {
        self.process_token(match c {
            '\0' => NullCharacterToken,
            _ => CharacterTokens(c.to_string()),
        });
    }

    fn emit_chars(&mut self, b: String) {
        self.process_token(CharacterTokens(b));
    }

    fn emit_current_tag(&mut self) {
        self.finish_attribute();

        let name = replace(&mut self.current_tag_name, String::new());
        let name = Atom::from(name);

        match self.current_tag_kind {
            StartTag => {
                self.last_start_tag_name = Some(name.clone());
            }
            EndTag => {
                if !self.current_tag_attrs.is_empty() {
                    self.emit_error(Cow::Borrowed("Attributes on an end tag"));
                }
                if self.current_tag_self_closing {
                    self.emit_error(Cow::Borrowed("Self-closing end tag"));
                }
            }
        }

        let token = TagToken(Tag {
            kind: self.current_tag_kind,
            name,
            self_closing: self.current_tag_self_closing,
            attrs: replace(&mut self.current_tag_attrs, vec![]),
        });
        self.process_token(token);

        if self.current_tag_kind == StartTag {
            if let Some(s) = self.sink.query_state_change() {
                self.state = s;
            }
        }
    }

    fn emit_temp_buf(&mut self) {
        let buf = replace(&mut self.temp_buf, String::new());
        self.emit_chars(buf);
    }

    fn clear_temp_buf(&mut self) {
        self.temp_buf.truncate(0);
    }

    fn emit_current_comment(&mut self) {
        let comment = replace(&mut self.current_comment, String::new());
        self.process_token(CommentToken(comment));
    }

    fn discard_tag(&mut self) {
        self.current_tag_name = String::new();
        self.current_tag_self_closing = false;
        self.current_tag_attrs = vec![];
    }

    fn create_tag(&mut self, kind: TagKind, c: char) {
        self.discard_tag();
        self.current_tag_name.push(c);
        self.current_tag_kind = kind;
    }

    fn have_appropriate_end_tag(&self) -> bool {
        match self.last_start_tag_name.as_ref() {
            Some(last) => {
                (self.current_tag_kind == EndTag) && (self.current_tag_name.as_str() == &last[..])
            }
            None => false,
        }
    }

    fn create_attribute(&mut self, c: char) {
        self.finish_attribute();
        self.current_attr_name.push(c);
    }

    fn finish_attribute(&mut self) {
        if self.current_attr_name.is_empty() {
            return;
        }

        let dup = {
            let name = self.current_attr_name.as_str();
            self.current_tag_attrs
                .iter()
                .any(|a| &a.name.local[..] == name)
        };

        if dup {
            self.emit_error(Cow::Borrowed("Duplicate attribute"));
            self.current_attr_name.truncate(0);
            self.current_attr_value.truncate(0);
        } else {
            let name = replace(&mut self.current_attr_name, String::new());
            self.current_tag_attrs.push(Attribute {
                name: AttrName::new(Atom::from(name)),
                value: replace(&mut self.current_attr_value, String::new()),
            });
        }
    }

    fn emit_current_doctype(&mut self) {
        let doctype = replace(&mut self.current_doctype, Doctype::new());
        self.process_token(DoctypeToken(doctype));
    }

    fn doctype_id(&mut self, kind: DoctypeIdKind) -> &mut Option<String> {
        match kind {
            Public => &mut self.current_doctype.public_id,
            System => &mut self.current_doctype.system_id,
        }
    }

    fn clear_doctype_id(&mut self, kind: DoctypeIdKind) {
        let id = self.doctype_id(kind);
        match id {
            Some(s) => s.truncate(0),
            None => *id = Some(String::new()),
        }
    }

    fn consume_char_ref(&mut self, addnl_allowed: Option<char>) {
        self.char_ref_tokenizer = Some(Box::new(CharRefTokenizer::new(addnl_allowed)));
    }

    fn emit_eof(&mut self) {
        self.process_token(EOFToken);
    }

    fn peek(&mut self) -> Option<char> {
        if self.reconsume {
            Some(self.current_char)
        } else {
            self.input_buffers.peek()
        }
    }

    fn discard_char(&mut self) {
        let c = self.get_char();
        debug_assert!(c.is_some());
    }

    fn unconsume(&mut self, buf: Vec<char>) {
        self.input_buffers.push_front(buf);
    }

    fn emit_error(&mut self, error: ParseErrorMsg) {
        tracing::warn!(%error, "html5 parse error");
        self.process_token(ParseError(error));
    }
}

fn is_invalid_control_char(c: char) -> bool {
    matches!(c as u32,
        0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F..=0x9F | 0xFDD0..=0xFDEF)
        || (c as u32 & 0xFFFE) == 0xFFFE
}

// Shorthand for common state machine behaviors.
macro_rules! shorthand (
    ( $me:ident : emit $c:expr                    ) => ( $me.emit_char($c);                                   );
    ( $me:ident : create_tag $kind:expr, $c:expr  ) => ( $me.create_tag($kind, $c);                           );
    ( $me:ident : push_tag $c:expr                ) => ( $me.current_tag_name.push($c);                       );
    ( $me:ident : discard_tag                     ) => ( $me.discard_tag();                                   );
    ( $me:ident : push_temp $c:expr               ) => ( $me.temp_buf.push($c);                               );
    ( $me:ident : emit_temp                       ) => ( $me.emit_temp_buf();                                 );
    ( $me:ident : clear_temp                      ) => ( $me.clear_temp_buf();                                );
    ( $me:ident : create_attr $c:expr             ) => ( $me.create_attribute($c);                            );
    ( $me:ident : push_name $c:expr               ) => ( $me.current_attr_name.push($c);                      );
    ( $me:ident : push_value $c:expr              ) => ( $me.current_attr_value.push($c);                     );
    ( $me:ident : append_value $c:expr            ) => ( append_strings(&mut $me.current_attr_value, &$c);    );
    ( $me:ident : push_comment $c:expr            ) => ( $me.current_comment.push($c);                        );
    ( $me:ident : append_comment $c:expr          ) => ( $me.current_comment.push_str($c);                    );
    ( $me:ident : emit_comment                    ) => ( $me.emit_current_comment();                          );
    ( $me:ident : clear_comment                   ) => ( $me.current_comment.truncate(0);                     );
    ( $me:ident : create_doctype                  ) => ( $me.current_doctype = Doctype::new();                );
    ( $me:ident : push_doctype_name $c:expr       ) => ( option_push_char(&mut $me.current_doctype.name, $c); );
    ( $me:ident : push_doctype_id $k:expr, $c:expr) => ( option_push_char($me.doctype_id($k), $c);            );
    ( $me:ident : clear_doctype_id $k:expr        ) => ( $me.clear_doctype_id($k);                            );
    ( $me:ident : force_quirks                    ) => ( $me.current_doctype.force_quirks = true;             );
    ( $me:ident : emit_doctype                    ) => ( $me.emit_current_doctype();                          );
    ( $me:ident : error                           ) => ( $me.bad_char_error();                                );
    ( $me:ident : error_eof                       ) => ( $me.bad_eof_error();                                  );
);

// A little DSL for sequencing shorthand actions.
macro_rules! go (
    ( $me:ident : $a:tt                   ; $($rest:tt)* ) => ({ shorthand!($me: $a);          go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt             ; $($rest:tt)* ) => ({ shorthand!($me: $a $b);       go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt, $c:tt       ; $($rest:tt)* ) => ({ shorthand!($me: $a $b, $c);    go!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt, $c:tt $d:tt ; $($rest:tt)* ) => ({ shorthand!($me: $a $b, $c $d); go!($me: $($rest)*); });

    ( $me:ident : to $s:ident                   ) => ({ $me.state = State::$s; return true;           });
    ( $me:ident : to $s:ident $k1:expr          ) => ({ $me.state = State::$s($k1); return true;      });
    ( $me:ident : to $s:ident $k1:expr, $k2:expr ) => ({ $me.state = State::$s($k1($k2)); return true; });

    ( $me:ident : reconsume $s:ident                   ) => ({ $me.reconsume = true; go!($me: to $s);         });
    ( $me:ident : reconsume $s:ident $k1:expr          ) => ({ $me.reconsume = true; go!($me: to $s $k1);     });
    ( $me:ident : reconsume $s:ident $k1:expr, $k2:expr ) => ({ $me.reconsume = true; go!($me: to $s $k1, $k2); });

    ( $me:ident : consume_char_ref             ) => ({ $me.consume_char_ref(None); return true;         });
    ( $me:ident : consume_char_ref $addnl:expr ) => ({ $me.consume_char_ref(Some($addnl)); return true; });

    ( $me:ident : emit_tag $s:ident ) => ({
        $me.state = State::$s;
        $me.emit_current_tag();
        return true;
    });

    ( $me:ident : eof ) => ({ $me.emit_eof(); return false; });

    ( $me:ident : $($cmd:tt)+ ) => ( shorthand!($me: $($cmd)+); );

    ($me:ident : ) => (());
);

macro_rules! go_match (
    ( $me:ident : $x:expr, $($pats:pat)|+ => $($cmds:tt)* ) => (
        match $x {
            $($pats)|+ => go!($me: $($cmds)*),
            _ => (),
        }
    );
);

macro_rules! get_char (
    ($me:expr) => (
        match $me.get_char() {
            Some(c) => c,
            None => return false,
        }
    );
);

macro_rules! pop_except_from (
    ($me:expr, $set:expr) => (
        match $me.pop_except_from($set) {
            Some(r) => r,
            None => return false,
        }
    );
);

macro_rules! lookahead_and_consume (
    ($me:expr, $n:expr, $pred:expr) => (
        match $me.lookahead_and_consume($n, $pred) {
            None => return true,
            Some(r) => r,
        }
    );
);

impl<Sink: TokenSink> Tokenizer<Sink> {
    // Run the state machine for a while. Returns true if we should be
    // immediately re-invoked.
    fn step(&mut self) -> bool {
        if self.char_ref_tokenizer.is_some() {
            return self.step_char_ref_tokenizer();
        }

        match self.wait_for {
            Some(n) if !self.input_buffers.has(n) => return false,
            Some(_) => self.wait_for = None,
            None => (),
        }

        match self.state {
            //§ data-state
            State::Data => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '&' '<')) {
                    FromSet('\0') => go!(self: error; emit '\0'),
                    FromSet('&') => go!(self: consume_char_ref),
                    FromSet('<') => go!(self: to TagOpen),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ rcdata-state
            State::RawData(Rcdata) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '&' '<')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet('&') => go!(self: consume_char_ref),
                    FromSet('<') => go!(self: to RawLessThanSign Rcdata),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ rawtext-state
            State::RawData(Rawtext) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '<')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet('<') => go!(self: to RawLessThanSign Rawtext),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ script-data-state
            State::RawData(ScriptData) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '<')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet('<') => go!(self: to RawLessThanSign ScriptData),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ script-data-escaped-state
            State::RawData(RawKind::ScriptDataEscaped(Escaped)) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '-' '<')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet('-') => go!(self: emit '-'; to ScriptDataEscapedDash Escaped),
                    FromSet('<') => go!(self: to RawLessThanSign ScriptDataEscaped, Escaped),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ script-data-double-escaped-state
            State::RawData(RawKind::ScriptDataEscaped(DoubleEscaped)) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0' '-' '<')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet('-') => go!(self: emit '-'; to ScriptDataEscapedDash DoubleEscaped),
                    FromSet('<') => go!(self: emit '<'; to RawLessThanSign ScriptDataEscaped, DoubleEscaped),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ plaintext-state
            State::Plaintext => loop {
                match pop_except_from!(self, small_char_set!('\r' '\0')) {
                    FromSet('\0') => go!(self: error; emit '\u{fffd}'),
                    FromSet(c) => go!(self: emit c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            //§ tag-open-state
            State::TagOpen => loop {
                match get_char!(self) {
                    '!' => go!(self: to MarkupDeclarationOpen),
                    '/' => go!(self: to EndTagOpen),
                    '?' => go!(self: error; clear_comment; push_comment '?'; to BogusComment),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_tag StartTag, cl; to TagName),
                        None => go!(self: error; emit '<'; reconsume Data),
                    },
                }
            },

            //§ end-tag-open-state
            State::EndTagOpen => loop {
                match get_char!(self) {
                    '>' => go!(self: error; to Data),
                    '\0' => go!(self: error; clear_comment; push_comment '\u{fffd}'; to BogusComment),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_tag EndTag, cl; to TagName),
                        None => go!(self: error; clear_comment; push_comment c; to BogusComment),
                    },
                }
            },

            //§ tag-name-state
            State::TagName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error; push_tag '\u{fffd}'),
                    c => go!(self: push_tag (lower_ascii(c))),
                }
            },

            //§ script-data-escaped-less-than-sign-state
            State::RawLessThanSign(RawKind::ScriptDataEscaped(Escaped)) => loop {
                match get_char!(self) {
                    '/' => go!(self: clear_temp; to RawEndTagOpen ScriptDataEscaped, Escaped),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: clear_temp; push_temp cl; emit '<'; emit c;
                                        to ScriptDataEscapeStart DoubleEscaped),
                        None => go!(self: emit '<'; reconsume RawData ScriptDataEscaped, Escaped),
                    },
                }
            },

            //§ script-data-double-escaped-less-than-sign-state
            State::RawLessThanSign(RawKind::ScriptDataEscaped(DoubleEscaped)) => loop {
                match get_char!(self) {
                    '/' => go!(self: clear_temp; emit '/'; to ScriptDataDoubleEscapeEnd),
                    _ => go!(self: reconsume RawData ScriptDataEscaped, DoubleEscaped),
                }
            },

            //§ rcdata/rawtext/script-data less-than-sign states
            State::RawLessThanSign(kind) => loop {
                match get_char!(self) {
                    '/' => go!(self: clear_temp; to RawEndTagOpen kind),
                    '!' if kind == ScriptData => {
                        go!(self: emit '<'; emit '!'; to ScriptDataEscapeStart Escaped)
                    }
                    _ => go!(self: emit '<'; reconsume RawData kind),
                }
            },

            //§ rcdata/rawtext/script-data end-tag-open states
            State::RawEndTagOpen(kind) => loop {
                let c = get_char!(self);
                match lower_ascii_letter(c) {
                    Some(_) => go!(self: create_tag EndTag, c; push_temp c; to RawEndTagName kind),
                    None => go!(self: emit '<'; emit '/'; reconsume RawData kind),
                }
            },

            //§ rcdata/rawtext/script-data end-tag-name states
            State::RawEndTagName(kind) => loop {
                let c = get_char!(self);
                if self.have_appropriate_end_tag() {
                    match c {
                        '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                        '/' => go!(self: to SelfClosingStartTag),
                        '>' => go!(self: emit_tag Data),
                        _ => (),
                    }
                }

                match lower_ascii_letter(c) {
                    Some(cl) => go!(self: push_tag cl; push_temp c),
                    None => go!(self: discard_tag; emit '<'; emit '/'; emit_temp; reconsume RawData kind),
                }
            },

            //§ script-data-double-escape-start-state
            State::ScriptDataEscapeStart(DoubleEscaped) => loop {
                let c = get_char!(self);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let esc = if self.temp_buf == "script" { DoubleEscaped } else { Escaped };
                        go!(self: emit c; to RawData ScriptDataEscaped, esc);
                    }
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_temp cl; emit c),
                        None => go!(self: reconsume RawData ScriptDataEscaped, Escaped),
                    },
                }
            },

            //§ script-data-escape-start-state
            State::ScriptDataEscapeStart(Escaped) => loop {
                match get_char!(self) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapeStartDash),
                    _ => go!(self: reconsume RawData ScriptData),
                }
            },

            //§ script-data-escape-start-dash-state
            State::ScriptDataEscapeStartDash => loop {
                match get_char!(self) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDashDash Escaped),
                    _ => go!(self: reconsume RawData ScriptData),
                }
            },

            //§ script-data-escaped-dash-state(s)
            State::ScriptDataEscapedDash(kind) => loop {
                match get_char!(self) {
                    '-' => go!(self: emit '-'; to ScriptDataEscapedDashDash kind),
                    '<' => {
                        if kind == DoubleEscaped {
                            go!(self: emit '<');
                        }
                        go!(self: to RawLessThanSign ScriptDataEscaped, kind);
                    }
                    '\0' => go!(self: error; emit '\u{fffd}'; to RawData ScriptDataEscaped, kind),
                    c => go!(self: emit c; to RawData ScriptDataEscaped, kind),
                }
            },

            //§ script-data-escaped-dash-dash-state(s)
            State::ScriptDataEscapedDashDash(kind) => loop {
                match get_char!(self) {
                    '-' => go!(self: emit '-'),
                    '<' => {
                        if kind == DoubleEscaped {
                            go!(self: emit '<');
                        }
                        go!(self: to RawLessThanSign ScriptDataEscaped, kind);
                    }
                    '>' => go!(self: emit '>'; to RawData ScriptData),
                    '\0' => go!(self: error; emit '\u{fffd}'; to RawData ScriptDataEscaped, kind),
                    c => go!(self: emit c; to RawData ScriptDataEscaped, kind),
                }
            },

            //§ script-data-double-escape-end-state
            State::ScriptDataDoubleEscapeEnd => loop {
                let c = get_char!(self);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let esc = if self.temp_buf == "script" { Escaped } else { DoubleEscaped };
                        go!(self: emit c; to RawData ScriptDataEscaped, esc);
                    }
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_temp cl; emit c),
                        None => go!(self: reconsume RawData ScriptDataEscaped, DoubleEscaped),
                    },
                }
            },

            //§ before-attribute-name-state
            State::BeforeAttributeName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error; create_attr '\u{fffd}'; to AttributeName),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_attr cl; to AttributeName),
                        None => {
                            go_match!(self: c, '"' | '\'' | '<' | '=' => error);
                            go!(self: create_attr c; to AttributeName);
                        }
                    },
                }
            },

            //§ attribute-name-state
            State::AttributeName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to AfterAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '=' => go!(self: to BeforeAttributeValue),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error; push_name '\u{fffd}'),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: push_name cl),
                        None => {
                            go_match!(self: c, '"' | '\'' | '<' => error);
                            go!(self: push_name c);
                        }
                    },
                }
            },

            //§ after-attribute-name-state
            State::AfterAttributeName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => go!(self: to SelfClosingStartTag),
                    '=' => go!(self: to BeforeAttributeValue),
                    '>' => go!(self: emit_tag Data),
                    '\0' => go!(self: error; create_attr '\u{fffd}'; to AttributeName),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => go!(self: create_attr cl; to AttributeName),
                        None => {
                            go_match!(self: c, '"' | '\'' | '<' => error);
                            go!(self: create_attr c; to AttributeName);
                        }
                    },
                }
            },

            //§ before-attribute-value-state
            State::BeforeAttributeValue => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '"' => go!(self: to AttributeValue DoubleQuoted),
                    '&' => go!(self: reconsume AttributeValue Unquoted),
                    '\'' => go!(self: to AttributeValue SingleQuoted),
                    '\0' => go!(self: error; push_value '\u{fffd}'; to AttributeValue Unquoted),
                    '>' => go!(self: error; emit_tag Data),
                    c => {
                        go_match!(self: c, '<' | '=' | '`' => error);
                        go!(self: push_value c; to AttributeValue Unquoted);
                    }
                }
            },

            //§ attribute-value-(double-quoted)-state
            State::AttributeValue(DoubleQuoted) => loop {
                match pop_except_from!(self, small_char_set!('\r' '"' '&' '\0')) {
                    FromSet('"') => go!(self: to AfterAttributeValueQuoted),
                    FromSet('&') => go!(self: consume_char_ref '"'),
                    FromSet('\0') => go!(self: error; push_value '\u{fffd}'),
                    FromSet(c) => go!(self: push_value c),
                    NotFromSet(b) => go!(self: append_value b),
                }
            },

            //§ attribute-value-(single-quoted)-state
            State::AttributeValue(SingleQuoted) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\'' '&' '\0')) {
                    FromSet('\'') => go!(self: to AfterAttributeValueQuoted),
                    FromSet('&') => go!(self: consume_char_ref '\''),
                    FromSet('\0') => go!(self: error; push_value '\u{fffd}'),
                    FromSet(c) => go!(self: push_value c),
                    NotFromSet(b) => go!(self: append_value b),
                }
            },

            //§ attribute-value-(unquoted)-state
            State::AttributeValue(Unquoted) => loop {
                match pop_except_from!(self, small_char_set!('\r' '\t' '\n' '\x0C' ' ' '&' '>' '\0')) {
                    FromSet('\t') | FromSet('\n') | FromSet('\x0C') | FromSet(' ') => {
                        go!(self: to BeforeAttributeName)
                    }
                    FromSet('&') => go!(self: consume_char_ref '>'),
                    FromSet('>') => go!(self: emit_tag Data),
                    FromSet('\0') => go!(self: error; push_value '\u{fffd}'),
                    FromSet(c) => {
                        go_match!(self: c, '"' | '\'' | '<' | '=' | '`' => error);
                        go!(self: push_value c);
                    }
                    NotFromSet(b) => go!(self: append_value b),
                }
            },

            //§ after-attribute-value-(quoted)-state
            State::AfterAttributeValueQuoted => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeAttributeName),
                    '/' => go!(self: to SelfClosingStartTag),
                    '>' => go!(self: emit_tag Data),
                    _ => go!(self: error; reconsume BeforeAttributeName),
                }
            },

            //§ self-closing-start-tag-state
            State::SelfClosingStartTag => loop {
                match get_char!(self) {
                    '>' => {
                        self.current_tag_self_closing = true;
                        go!(self: emit_tag Data);
                    }
                    _ => go!(self: error; reconsume BeforeAttributeName),
                }
            },

            //§ comment-start-state
            State::CommentStart => loop {
                match get_char!(self) {
                    '-' => go!(self: to CommentStartDash),
                    '\0' => go!(self: error; push_comment '\u{fffd}'; to Comment),
                    '>' => go!(self: error; emit_comment; to Data),
                    c => go!(self: push_comment c; to Comment),
                }
            },

            //§ comment-start-dash-state
            State::CommentStartDash => loop {
                match get_char!(self) {
                    '-' => go!(self: to CommentEnd),
                    '\0' => go!(self: error; append_comment "-\u{fffd}"; to Comment),
                    '>' => go!(self: error; emit_comment; to Data),
                    c => go!(self: push_comment '-'; push_comment c; to Comment),
                }
            },

            //§ comment-state
            State::Comment => loop {
                match get_char!(self) {
                    '-' => go!(self: to CommentEndDash),
                    '\0' => go!(self: error; push_comment '\u{fffd}'),
                    c => go!(self: push_comment c),
                }
            },

            //§ comment-end-dash-state
            State::CommentEndDash => loop {
                match get_char!(self) {
                    '-' => go!(self: to CommentEnd),
                    '\0' => go!(self: error; append_comment "-\u{fffd}"; to Comment),
                    c => go!(self: push_comment '-'; push_comment c; to Comment),
                }
            },

            //§ comment-end-state
            State::CommentEnd => loop {
                match get_char!(self) {
                    '>' => go!(self: emit_comment; to Data),
                    '\0' => go!(self: error; append_comment "--\u{fffd}"; to Comment),
                    '!' => go!(self: error; to CommentEndBang),
                    '-' => go!(self: error; push_comment '-'),
                    c => go!(self: error; append_comment "--"; push_comment c; to Comment),
                }
            },

            //§ comment-end-bang-state
            State::CommentEndBang => loop {
                match get_char!(self) {
                    '-' => go!(self: append_comment "--!"; to CommentEndDash),
                    '>' => go!(self: emit_comment; to Data),
                    '\0' => go!(self: error; append_comment "--!\u{fffd}"; to Comment),
                    c => go!(self: append_comment "--!"; push_comment c; to Comment),
                }
            },

            //§ doctype-state
            State::Doctype => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeDoctypeName),
                    _ => go!(self: error; reconsume BeforeDoctypeName),
                }
            },

            //§ before-doctype-name-state
            State::BeforeDoctypeName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '\0' => go!(self: error; create_doctype; push_doctype_name '\u{fffd}'; to DoctypeName),
                    '>' => go!(self: error; create_doctype; force_quirks; emit_doctype; to Data),
                    c => go!(self: create_doctype; push_doctype_name (lower_ascii(c)); to DoctypeName),
                }
            },

            //§ doctype-name-state
            State::DoctypeName => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to AfterDoctypeName),
                    '>' => go!(self: emit_doctype; to Data),
                    '\0' => go!(self: error; push_doctype_name '\u{fffd}'),
                    c => go!(self: push_doctype_name (lower_ascii(c))),
                }
            },

            //§ after-doctype-name-state
            State::AfterDoctypeName => loop {
                if lookahead_and_consume!(self, 6, |s: &str| s.eq_ignore_ascii_case("public")) {
                    go!(self: to AfterDoctypeKeyword Public);
                } else if lookahead_and_consume!(self, 6, |s: &str| s.eq_ignore_ascii_case("system")) {
                    go!(self: to AfterDoctypeKeyword System);
                } else {
                    match get_char!(self) {
                        '\t' | '\n' | '\x0C' | ' ' => (),
                        '>' => go!(self: emit_doctype; to Data),
                        _ => go!(self: error; force_quirks; to BogusDoctype),
                    }
                }
            },

            //§ after-doctype-public/system-keyword-state
            State::AfterDoctypeKeyword(kind) => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BeforeDoctypeIdentifier kind),
                    '"' => go!(self: error; clear_doctype_id kind; to DoctypeIdentifierDoubleQuoted kind),
                    '\'' => go!(self: error; clear_doctype_id kind; to DoctypeIdentifierSingleQuoted kind),
                    '>' => go!(self: error; force_quirks; emit_doctype; to Data),
                    _ => go!(self: error; force_quirks; to BogusDoctype),
                }
            },

            //§ before-doctype-public/system-identifier-state
            State::BeforeDoctypeIdentifier(kind) => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '"' => go!(self: clear_doctype_id kind; to DoctypeIdentifierDoubleQuoted kind),
                    '\'' => go!(self: clear_doctype_id kind; to DoctypeIdentifierSingleQuoted kind),
                    '>' => go!(self: error; force_quirks; emit_doctype; to Data),
                    _ => go!(self: error; force_quirks; to BogusDoctype),
                }
            },

            //§ doctype-public/system-identifier-(double-quoted)-state
            State::DoctypeIdentifierDoubleQuoted(kind) => loop {
                match get_char!(self) {
                    '"' => go!(self: to AfterDoctypeIdentifier kind),
                    '\0' => go!(self: error; push_doctype_id kind, '\u{fffd}'),
                    '>' => go!(self: error; force_quirks; emit_doctype; to Data),
                    c => go!(self: push_doctype_id kind, c),
                }
            },

            //§ doctype-public/system-identifier-(single-quoted)-state
            State::DoctypeIdentifierSingleQuoted(kind) => loop {
                match get_char!(self) {
                    '\'' => go!(self: to AfterDoctypeIdentifier kind),
                    '\0' => go!(self: error; push_doctype_id kind, '\u{fffd}'),
                    '>' => go!(self: error; force_quirks; emit_doctype; to Data),
                    c => go!(self: push_doctype_id kind, c),
                }
            },

            //§ after-doctype-public-identifier-state
            State::AfterDoctypeIdentifier(Public) => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => go!(self: to BetweenDoctypePublicAndSystemIdentifiers),
                    '>' => go!(self: emit_doctype; to Data),
                    '"' => go!(self: error; clear_doctype_id System; to DoctypeIdentifierDoubleQuoted System),
                    '\'' => go!(self: error; clear_doctype_id System; to DoctypeIdentifierSingleQuoted System),
                    _ => go!(self: error; force_quirks; to BogusDoctype),
                }
            },

            //§ after-doctype-system-identifier-state
            State::AfterDoctypeIdentifier(System) => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => go!(self: emit_doctype; to Data),
                    _ => go!(self: error; to BogusDoctype),
                }
            },

            //§ between-doctype-public-and-system-identifiers-state
            State::BetweenDoctypePublicAndSystemIdentifiers => loop {
                match get_char!(self) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => go!(self: emit_doctype; to Data),
                    '"' => go!(self: clear_doctype_id System; to DoctypeIdentifierDoubleQuoted System),
                    '\'' => go!(self: clear_doctype_id System; to DoctypeIdentifierSingleQuoted System),
                    _ => go!(self: error; force_quirks; to BogusDoctype),
                }
            },

            //§ bogus-doctype-state
            State::BogusDoctype => loop {
                match get_char!(self) {
                    '>' => go!(self: emit_doctype; to Data),
                    _ => (),
                }
            },

            //§ bogus-comment-state
            State::BogusComment => loop {
                match get_char!(self) {
                    '>' => go!(self: emit_comment; to Data),
                    '\0' => go!(self: push_comment '\u{fffd}'),
                    c => go!(self: push_comment c),
                }
            },

            //§ markup-declaration-open-state
            State::MarkupDeclarationOpen => loop {
                if lookahead_and_consume!(self, 2, |s: &str| s == "--") {
                    go!(self: clear_comment; to CommentStart);
                } else if lookahead_and_consume!(self, 7, |s: &str| s.eq_ignore_ascii_case("doctype")) {
                    go!(self: to Doctype);
                } else {
                    // CDATA sections require the adjusted current node from
                    // the tree builder, which this crate does not track
                    // (foreign content is out of scope); always bogus-comment.
                    go!(self: error; to BogusComment);
                }
            },

            //§ cdata-section-state
            State::CdataSection => {
                self.emit_error(Cow::Borrowed("CDATA sections are not supported"));
                self.state = State::BogusComment;
                true
            }
        }
    }

    fn step_char_ref_tokenizer(&mut self) -> bool {
        let mut tok = self.char_ref_tokenizer.take().unwrap();
        let outcome = tok.step(self);

        let progress = match outcome {
            CharRefStep::Done => {
                self.process_char_ref(tok.get_result());
                return true;
            }
            CharRefStep::Stuck => false,
            CharRefStep::Progress => true,
        };

        self.char_ref_tokenizer = Some(tok);
        progress
    }

    fn process_char_ref(&mut self, char_ref: CharRef) {
        let CharRef { chars, mut num_chars } = char_ref;
        let mut chars = chars;

        if num_chars == 0 {
            chars[0] = '&';
            num_chars = 1;
        }

        for &c in &chars[..num_chars as usize] {
            match self.state {
                State::Data | State::RawData(Rcdata) => go!(self: emit c),
                State::AttributeValue(_) => go!(self: push_value c),
                _ => unreachable!("char ref should only run in Data/RCDATA/AttributeValue"),
            }
        }
    }

    /// Indicate that we have reached the end of the input.
    pub fn end(&mut self) {
        if let Some(mut tok) = self.char_ref_tokenizer.take() {
            tok.end_of_file(self);
            self.process_char_ref(tok.get_result());
        }

        self.wait_for = None;
        self.at_eof = true;
        self.run();

        while self.eof_step() {}
    }

    fn eof_step(&mut self) -> bool {
        match self.state {
            State::Data
            | State::RawData(Rcdata)
            | State::RawData(Rawtext)
            | State::RawData(ScriptData)
            | State::Plaintext => go!(self: eof),

            State::TagName
            | State::RawData(RawKind::ScriptDataEscaped(_))
            | State::BeforeAttributeName
            | State::AttributeName
            | State::AfterAttributeName
            | State::BeforeAttributeValue
            | State::AttributeValue(_)
            | State::AfterAttributeValueQuoted
            | State::SelfClosingStartTag
            | State::ScriptDataEscapedDash(_)
            | State::ScriptDataEscapedDashDash(_) => go!(self: error_eof; to Data),

            State::TagOpen => go!(self: error_eof; emit '<'; to Data),

            State::EndTagOpen => go!(self: error_eof; emit '<'; emit '/'; to Data),

            State::RawLessThanSign(RawKind::ScriptDataEscaped(DoubleEscaped)) => {
                go!(self: to RawData ScriptDataEscaped, DoubleEscaped)
            }

            State::RawLessThanSign(kind) => go!(self: emit '<'; to RawData kind),

            State::RawEndTagOpen(kind) => go!(self: emit '<'; emit '/'; to RawData kind),

            State::RawEndTagName(kind) => go!(self: emit '<'; emit '/'; emit_temp; to RawData kind),

            State::ScriptDataEscapeStart(kind) => go!(self: to RawData ScriptDataEscaped, kind),

            State::ScriptDataEscapeStartDash => go!(self: to RawData ScriptData),

            State::ScriptDataDoubleEscapeEnd => go!(self: to RawData ScriptDataEscaped, DoubleEscaped),

            State::CommentStart
            | State::CommentStartDash
            | State::Comment
            | State::CommentEndDash
            | State::CommentEnd
            | State::CommentEndBang => go!(self: error_eof; emit_comment; to Data),

            State::Doctype | State::BeforeDoctypeName => {
                go!(self: error_eof; create_doctype; force_quirks; emit_doctype; to Data)
            }

            State::DoctypeName
            | State::AfterDoctypeName
            | State::AfterDoctypeKeyword(_)
            | State::BeforeDoctypeIdentifier(_)
            | State::DoctypeIdentifierDoubleQuoted(_)
            | State::DoctypeIdentifierSingleQuoted(_)
            | State::AfterDoctypeIdentifier(_)
            | State::BetweenDoctypePublicAndSystemIdentifiers => {
                go!(self: error_eof; force_quirks; emit_doctype; to Data)
            }

            State::BogusDoctype => go!(self: emit_doctype; to Data),

            State::BogusComment => go!(self: emit_comment; to Data),

            State::MarkupDeclarationOpen => go!(self: error; to BogusComment),

            State::CdataSection => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{append_strings, option_push_char};

    #[test]
    fn push_to_none_gives_singleton() {
        let mut s: Option<String> = None;
        option_push_char(&mut s, 'x');
        assert_eq!(s, Some("x".to_string()));
    }

    #[test]
    fn push_to_empty_appends() {
        let mut s: Option<String> = Some(String::new());
        option_push_char(&mut s, 'x');
        assert_eq!(s, Some("x".to_string()));
    }

    #[test]
    fn push_to_nonempty_appends() {
        let mut s: Option<String> = Some("y".to_string());
        option_push_char(&mut s, 'x');
        assert_eq!(s, Some("yx".to_string()));
    }

    #[test]
    fn append_appends() {
        let mut s = "foo".to_string();
        append_strings(&mut s, "bar");
        assert_eq!(s, "foobar".to_string());
    }
}
