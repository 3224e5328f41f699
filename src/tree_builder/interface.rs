// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree builder's output interface: a `TreeSink` the tree constructor
//! drives, parameterized over an opaque node handle.

use std::borrow::Cow;

use string_cache::Atom;

use crate::tokenizer::Attribute;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}

pub use QuirksMode::{LimitedQuirks, NoQuirks, Quirks};

/// Something to append to a node: either an already-created element/comment
/// handle, or a run of text (which the sink may merge into a preceding text
/// node).
pub enum NodeOrText<Handle> {
    AppendNode(Handle),
    AppendText(String),
}

pub use NodeOrText::{AppendNode, AppendText};

/// Receives the tree-construction operations the tree builder drives. The
/// tree builder never touches node storage directly -- it only calls
/// through this trait, so a consumer can substitute its own DOM (or none at
/// all, for a validate-only parse).
pub trait TreeSink {
    type Handle: Clone;

    /// The `Document` node, created once up front.
    fn get_document(&mut self) -> Self::Handle;

    /// Record a parse error. Never fatal.
    fn parse_error(&mut self, msg: Cow<'static, str>);

    fn set_quirks_mode(&mut self, mode: QuirksMode);

    /// Do the two handles refer to the same underlying node?
    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool;

    /// The local name of an element (e.g. `"div"`).
    fn elem_name(&self, target: &Self::Handle) -> Atom;

    fn create_element(&mut self, name: Atom, attrs: Vec<Attribute>) -> Self::Handle;

    fn create_comment(&mut self, text: String) -> Self::Handle;

    /// Append a node or text to `parent`'s children.
    fn append(&mut self, parent: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Append a node or text immediately before `sibling`, inside its
    /// parent. Used for foster parenting and adoption agency.
    fn append_before_sibling(&mut self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>);

    fn append_doctype_to_document(&mut self, name: String, public_id: String, system_id: String);

    /// Add attributes whose names don't already appear on `target` (used
    /// when a duplicate `<html>`/`<body>` start tag is seen).
    fn add_attrs_if_missing(&mut self, target: &Self::Handle, attrs: Vec<Attribute>);

    fn remove_from_parent(&mut self, target: &Self::Handle);

    /// Move all of `node`'s children to be children of `new_parent`
    /// (used by the adoption agency algorithm).
    fn reparent_children(&mut self, node: &Self::Handle, new_parent: &Self::Handle);

    /// Does `target` have a parent at all? Used by foster parenting to
    /// decide whether the table itself is in the document.
    fn has_parent_node(&self, target: &Self::Handle) -> bool;
}
