// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tokens produced by the tokenizer, and the sink that receives them.

use std::borrow::Cow;

use string_cache::Atom;

use super::states::State;

/// A parse error, delivered as a diagnostic string rather than a `Result`
/// failure -- the tokenizer never aborts on one.
pub type ParseErrorMsg = Cow<'static, str>;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TagKind {
    StartTag,
    EndTag,
}

pub use TagKind::{EndTag, StartTag};

/// A non-namespaced attribute name. Kept as its own type (rather than a
/// bare `Atom`) so foreign-content namespacing can be added at this seam
/// later without touching every call site.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct AttrName {
    pub local: Atom,
}

impl AttrName {
    pub fn new(local: Atom) -> AttrName {
        AttrName { local }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Attribute {
    pub name: AttrName,
    pub value: String,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: Atom,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    /// Are `self` and `other` the same kind of tag with the same name? The
    /// tree builder uses this to check "does this end tag match the
    /// element we expect to close".
    pub fn equiv_modulo_attrs(&self, other: &Tag) -> bool {
        self.kind == other.kind && self.name == other.name
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<String>,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
    pub force_quirks: bool,
}

impl Doctype {
    pub fn new() -> Doctype {
        Doctype::default()
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Token {
    DoctypeToken(Doctype),
    TagToken(Tag),
    CommentToken(String),
    CharacterTokens(String),
    NullCharacterToken,
    ParseError(ParseErrorMsg),
    EOFToken,
}

pub use Token::{
    CharacterTokens, CommentToken, DoctypeToken, EOFToken, NullCharacterToken, ParseError,
    TagToken,
};

/// Receives tokens from the tokenizer. The tree builder is the only
/// implementation in this crate, but the trait boundary lets a caller
/// observe the raw token stream (for diagnostics, testing, or a different
/// consumer entirely) without re-implementing tokenization.
pub trait TokenSink {
    fn process_token(&mut self, token: Token);

    /// After a start tag is emitted, the sink may want to switch the
    /// tokenizer into RCDATA/RAWTEXT/script-data/PLAINTEXT mode (e.g. on
    /// seeing `<title>` or `<script>`). Returning `Some` overrides the
    /// tokenizer's default next state.
    fn query_state_change(&mut self) -> Option<State> {
        None
    }
}
