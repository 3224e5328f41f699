// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal DOM: an arena of nodes addressed by [`NodeId`], and
//! [`ArenaSink`], the `TreeSink` implementation the tree constructor drives
//! by default.

pub mod document;
pub mod node;
pub mod tag;

use std::borrow::Cow;

use string_cache::Atom;

use crate::tokenizer::Attribute;
use crate::tree_builder::interface::{AppendNode, AppendText};
use crate::tree_builder::{NodeOrText, QuirksMode, TreeSink};

pub use self::document::Document;
pub use self::node::{Node, NodeData, NodeObserver, NodeId};
pub use self::tag::ElementKind;

/// The default `TreeSink`: owns a [`Document`] arena and forwards every
/// tree-construction call into it. Parse errors and the resolved quirks
/// mode are recorded for the caller to inspect after parsing.
pub struct ArenaSink {
    document: Document,
    quirks_mode: QuirksMode,
    errors: Vec<Cow<'static, str>>,
}

impl ArenaSink {
    pub fn new() -> ArenaSink {
        ArenaSink {
            document: Document::new(),
            quirks_mode: QuirksMode::NoQuirks,
            errors: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn quirks_mode(&self) -> QuirksMode {
        self.quirks_mode
    }

    pub fn errors(&self) -> &[Cow<'static, str>] {
        &self.errors
    }
}

impl Default for ArenaSink {
    fn default() -> ArenaSink {
        ArenaSink::new()
    }
}

impl TreeSink for ArenaSink {
    type Handle = NodeId;

    fn get_document(&mut self) -> NodeId {
        self.document.document_id()
    }

    fn parse_error(&mut self, msg: Cow<'static, str>) {
        tracing::debug!(%msg, "parse error");
        self.errors.push(msg);
    }

    fn set_quirks_mode(&mut self, mode: QuirksMode) {
        self.quirks_mode = mode;
    }

    fn same_node(&self, x: &NodeId, y: &NodeId) -> bool {
        x == y
    }

    fn elem_name(&self, target: &NodeId) -> Atom {
        self.document.elem_name(*target)
    }

    fn create_element(&mut self, name: Atom, attrs: Vec<Attribute>) -> NodeId {
        self.document.create_element(name, attrs)
    }

    fn create_comment(&mut self, text: String) -> NodeId {
        self.document.create_comment(text)
    }

    fn append(&mut self, parent: &NodeId, child: NodeOrText<NodeId>) {
        let result = match child {
            AppendNode(node) => self.document.append(*parent, node),
            AppendText(text) => self.document.append_text(*parent, text),
        };
        if let Err(err) = result {
            tracing::warn!(?err, "append failed");
        }
    }

    fn append_before_sibling(&mut self, sibling: &NodeId, new_node: NodeOrText<NodeId>) {
        let result = match new_node {
            AppendNode(node) => self.document.insert_before(*sibling, node),
            AppendText(text) => self.document.insert_text_before(*sibling, text),
        };
        if let Err(err) = result {
            tracing::warn!(?err, "append_before_sibling failed");
        }
    }

    fn append_doctype_to_document(&mut self, name: String, public_id: String, system_id: String) {
        let doctype = self.document.create_doctype(name, public_id, system_id);
        let doc_id = self.document.document_id();
        if let Err(err) = self.document.append(doc_id, doctype) {
            tracing::warn!(?err, "append_doctype_to_document failed");
        }
    }

    fn add_attrs_if_missing(&mut self, target: &NodeId, attrs: Vec<Attribute>) {
        self.document.add_attrs_if_missing(*target, attrs);
    }

    fn remove_from_parent(&mut self, target: &NodeId) {
        self.document.detach(*target);
    }

    fn reparent_children(&mut self, node: &NodeId, new_parent: &NodeId) {
        self.document.reparent_children(*node, *new_parent);
    }

    fn has_parent_node(&self, target: &NodeId) -> bool {
        self.document.parent_of(*target).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sink_roundtrips_a_single_element() {
        let mut sink = ArenaSink::new();
        let doc = sink.get_document();
        let html = sink.create_element(Atom::from("html"), vec![]);
        sink.append(&doc, AppendNode(html));
        assert_eq!(sink.elem_name(&html), Atom::from("html"));
        assert!(sink.has_parent_node(&html));
        assert!(!sink.has_parent_node(&doc));
    }

    #[test]
    fn parse_errors_are_recorded() {
        let mut sink = ArenaSink::new();
        sink.parse_error(Cow::Borrowed("bogus comment"));
        assert_eq!(sink.errors().len(), 1);
    }
}
