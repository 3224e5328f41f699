// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The arena itself: a flat `Vec<Node>` addressed by `NodeId`, with the
//! handful of mutation primitives `ArenaSink` drives the tree constructor
//! through.

use string_cache::Atom;

use crate::error::{DomException, DomResult};
use crate::tokenizer::Attribute;

use super::node::{Node, NodeData, NodeId};
use super::tag::ElementKind;

/// The document node always lives at index 0.
const DOCUMENT_ID: NodeId = NodeId(0);

pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Document {
        Document {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    pub fn document_id(&self) -> NodeId {
        DOCUMENT_ID
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    pub fn create_element(&mut self, name: Atom, attrs: Vec<Attribute>) -> NodeId {
        let kind = ElementKind::from_name(&name);
        self.alloc(NodeData::Element { kind, name, attrs })
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Comment(text))
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Text(text))
    }

    pub fn create_doctype(&mut self, name: String, public_id: String, system_id: String) -> NodeId {
        self.alloc(NodeData::Doctype {
            name,
            public_id,
            system_id,
        })
    }

    pub fn elem_name(&self, id: NodeId) -> Atom {
        match &self.node(id).data {
            NodeData::Element { name, .. } => name.clone(),
            _ => Atom::from(""),
        }
    }

    fn is_ancestor_of(&self, maybe_ancestor: NodeId, target: NodeId) -> bool {
        let mut cur = Some(target);
        while let Some(id) = cur {
            if id == maybe_ancestor {
                return true;
            }
            cur = self.parent_of(id);
        }
        false
    }

    /// Detach `child` from its current parent, if any, firing observers.
    pub fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent_of(child) else {
            return;
        };
        self.node_mut(parent).children.retain(|&c| c != child);
        self.node_mut(child).parent = None;
        self.dispatch_removed(child, parent);
        self.dispatch_child_removed(parent, child);
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if parent == child || self.is_ancestor_of(child, parent) {
            return Err(DomException::HierarchyRequest);
        }
        self.detach(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        self.dispatch_inserted(child, parent);
        self.dispatch_child_added(parent, child);
        Ok(())
    }

    /// Append text to `parent`, merging into a trailing text node if one is
    /// already the last child (as most DOM implementations do to avoid a
    /// new node per character-token chunk).
    pub fn append_text(&mut self, parent: NodeId, text: String) -> DomResult<()> {
        if let Some(&last) = self.children_of(parent).last() {
            if let NodeData::Text(existing) = &mut self.node_mut(last).data {
                existing.push_str(&text);
                return Ok(());
            }
        }
        let node = self.create_text(text);
        self.append(parent, node)
    }

    /// Insert `new_node` immediately before `sibling`, under `sibling`'s
    /// current parent.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) -> DomResult<()> {
        let parent = self.parent_of(sibling).ok_or(DomException::NotFound)?;
        if parent == new_node || self.is_ancestor_of(new_node, parent) {
            return Err(DomException::HierarchyRequest);
        }
        self.detach(new_node);
        let pos = self.children_of(parent).iter().position(|&c| c == sibling).ok_or(DomException::NotFound)?;
        self.node_mut(parent).children.insert(pos, new_node);
        self.node_mut(new_node).parent = Some(parent);
        self.dispatch_inserted(new_node, parent);
        self.dispatch_child_added(parent, new_node);
        Ok(())
    }

    pub fn insert_text_before(&mut self, sibling: NodeId, text: String) -> DomResult<()> {
        let parent = self.parent_of(sibling).ok_or(DomException::NotFound)?;
        if let Some(pos) = self.children_of(parent).iter().position(|&c| c == sibling) {
            if pos > 0 {
                let prev = self.children_of(parent)[pos - 1];
                if let NodeData::Text(existing) = &mut self.node_mut(prev).data {
                    existing.push_str(&text);
                    return Ok(());
                }
            }
        }
        let node = self.create_text(text);
        self.insert_before(sibling, node)
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.parent_of(child) != Some(parent) {
            return Err(DomException::NotFound);
        }
        self.detach(child);
        Ok(())
    }

    /// Move all of `node`'s children to be children of `new_parent`,
    /// preserving order. Used by the adoption agency algorithm.
    pub fn reparent_children(&mut self, node: NodeId, new_parent: NodeId) {
        let children: Vec<NodeId> = self.node(node).children.clone();
        for child in children {
            let _ = self.append(new_parent, child);
        }
    }

    pub fn add_attrs_if_missing(&mut self, target: NodeId, attrs: Vec<Attribute>) {
        if let NodeData::Element { attrs: existing, .. } = &mut self.node_mut(target).data {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(attr);
                }
            }
        }
    }

    pub fn set_attribute(&mut self, target: NodeId, name: Atom, value: String) -> DomResult<()> {
        if name.is_empty() {
            return Err(DomException::InvalidCharacter);
        }
        match &mut self.node_mut(target).data {
            NodeData::Element { attrs, .. } => {
                let local = crate::tokenizer::AttrName::new(name);
                if let Some(existing) = attrs.iter_mut().find(|a| a.name == local) {
                    existing.value = value;
                } else {
                    attrs.push(Attribute { name: local, value });
                }
                Ok(())
            }
            _ => Err(DomException::NotSupported),
        }
    }

    fn dispatch_inserted(&mut self, node: NodeId, parent: NodeId) {
        let mut observers = std::mem::take(&mut self.node_mut(node).observers);
        for obs in observers.iter_mut() {
            obs.on_inserted_to(node, parent);
        }
        self.node_mut(node).observers = observers;
    }

    fn dispatch_removed(&mut self, node: NodeId, parent: NodeId) {
        let mut observers = std::mem::take(&mut self.node_mut(node).observers);
        for obs in observers.iter_mut() {
            obs.on_removed_from(node, parent);
        }
        self.node_mut(node).observers = observers;
    }

    fn dispatch_child_added(&mut self, parent: NodeId, child: NodeId) {
        let mut observers = std::mem::take(&mut self.node_mut(parent).observers);
        for obs in observers.iter_mut() {
            obs.on_child_added(parent, child);
        }
        self.node_mut(parent).observers = observers;
    }

    fn dispatch_child_removed(&mut self, parent: NodeId, child: NodeId) {
        let mut observers = std::mem::take(&mut self.node_mut(parent).observers);
        for obs in observers.iter_mut() {
            obs.on_child_removed(parent, child);
        }
        self.node_mut(parent).observers = observers;
    }
}

impl Default for Document {
    fn default() -> Document {
        Document::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_creates_parent_link() {
        let mut doc = Document::new();
        let html = doc.create_element(Atom::from("html"), vec![]);
        doc.append(doc.document_id(), html).unwrap();
        assert_eq!(doc.parent_of(html), Some(doc.document_id()));
        assert_eq!(doc.children_of(doc.document_id()), &[html]);
    }

    #[test]
    fn append_text_merges_adjacent_runs() {
        let mut doc = Document::new();
        let body = doc.create_element(Atom::from("body"), vec![]);
        doc.append(doc.document_id(), body).unwrap();
        doc.append_text(body, "hello ".to_string()).unwrap();
        doc.append_text(body, "world".to_string()).unwrap();
        assert_eq!(doc.children_of(body).len(), 1);
        let text_id = doc.children_of(body)[0];
        match &doc.node(text_id).data {
            NodeData::Text(s) => assert_eq!(s, "hello world"),
            _ => panic!("expected text node"),
        }
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = Document::new();
        let a = doc.create_element(Atom::from("div"), vec![]);
        let b = doc.create_element(Atom::from("div"), vec![]);
        doc.append(doc.document_id(), a).unwrap();
        doc.append(a, b).unwrap();
        assert_eq!(doc.append(b, a), Err(DomException::HierarchyRequest));
    }

    #[test]
    fn remove_child_requires_correct_parent() {
        let mut doc = Document::new();
        let a = doc.create_element(Atom::from("div"), vec![]);
        let b = doc.create_element(Atom::from("span"), vec![]);
        doc.append(doc.document_id(), a).unwrap();
        assert_eq!(doc.remove_child(b, a), Err(DomException::NotFound));
        assert!(doc.remove_child(doc.document_id(), a).is_ok());
        assert!(doc.children_of(doc.document_id()).is_empty());
    }
}
