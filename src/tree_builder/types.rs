// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Internal types shared by `actions.rs` and `rules.rs`: insertion modes,
//! the tree builder's own token representation, and active-formatting-list
//! entries.

use crate::tokenizer::Tag;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum InsertionMode {
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    InHeadNoscript,
    AfterHead,
    InBody,
    Text,
    InTable,
    InTableText,
    InCaption,
    InColumnGroup,
    InTableBody,
    InRow,
    InCell,
    InSelect,
    InSelectInTable,
    AfterBody,
    InFrameset,
    AfterFrameset,
    AfterAfterBody,
    AfterAfterFrameset,
}

pub use InsertionMode::*;

/// Whether a run of character tokens is known to be pure whitespace. Some
/// insertion modes (table contexts) treat non-whitespace character tokens
/// specially, so the tokenizer's single `CharacterTokens` variant is split
/// here on first use.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum SplitStatus {
    NotSplit,
    Whitespace,
    NotWhitespace,
}

pub use SplitStatus::{NotSplit, NotWhitespace, Whitespace};

/// The tree builder's view of a token. `DoctypeToken` and `ParseError`
/// never reach this type -- they're handled directly in `process_token`.
#[derive(Debug)]
pub enum Token {
    TagToken(Tag),
    CommentToken(String),
    CharacterTokens(SplitStatus, String),
    NullCharacterToken,
    EOFToken,
}

pub use Token::{
    CharacterTokens, CommentToken, NullCharacterToken, TagToken as TreeTagToken, EOFToken as TreeEOFToken,
};

/// An entry in the list of active formatting elements (HTML5 §13.2.4.3).
pub enum FormatEntry<Handle> {
    Element(Handle, Tag),
    Marker,
}

/// What a single `step` call accomplished, and what the caller
/// (`process_to_completion`) should do next.
pub enum ProcessResult {
    Done,
    DoneAckSelfClosing,
    Reprocess(InsertionMode, Token),
    SplitWhitespace(String),
}

pub use ProcessResult::{Done, DoneAckSelfClosing, Reprocess, SplitWhitespace};
