// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared primitives the per-mode rules in `rules.rs` build on: inserting
//! nodes, the active formatting list and its reconstruction, the scope
//! predicates, implied end tags, and the adoption agency algorithm
//! (§13.2.4.2-§13.2.4.4, `treeconstructor.hpp`'s `active_formatting`
//! struct and scope-predicate family).

use std::borrow::Cow;

use string_cache::Atom;

use super::interface::{AppendNode, AppendText, NodeOrText, TreeSink};
use super::tag_sets;
use super::types::FormatEntry;
use super::TreeBuilder;

use crate::tokenizer::{Attribute, Tag, TagKind};

pub trait TreeBuilderActions<Sink: TreeSink> {
    fn current_node(&self) -> Sink::Handle;
    fn current_node_name(&self) -> Atom;
    fn open_elems_contains_named(&self, name: &str) -> bool;

    fn append_text(&mut self, text: String);
    fn append_comment(&mut self, text: String);
    fn append_comment_to_doc(&mut self, text: String);
    fn append_comment_to_html(&mut self, text: String);
    fn insert_appropriately(&mut self, child: NodeOrText<Sink::Handle>);

    fn insert_element_for(&mut self, tag: Tag) -> Sink::Handle;
    fn insert_phantom(&mut self, name: &str) -> Sink::Handle;
    fn insert_and_pop_element_for(&mut self, tag: Tag) -> Sink::Handle;

    fn push_formatting_marker(&mut self);
    fn push_formatting_element(&mut self, handle: Sink::Handle, tag: Tag);
    fn clear_active_formatting_to_marker(&mut self);
    fn reconstruct_active_formatting(&mut self);
    fn remove_from_active_formatting_by_handle(&mut self, target: &Sink::Handle);

    fn has_element_in_specific_scope(&self, target: &str, pred: fn(&str) -> bool) -> bool;
    fn has_element_in_scope(&self, target: &str) -> bool;
    fn has_element_in_button_scope(&self, target: &str) -> bool;
    fn has_element_in_list_item_scope(&self, target: &str) -> bool;
    fn has_element_in_table_scope(&self, target: &str) -> bool;
    fn has_element_in_select_scope(&self, target: &str) -> bool;

    fn generate_implied_end_tags(&mut self, except: Option<&str>);
    fn generate_implied_end_tags_thorough(&mut self, except: Option<&str>);
    fn close_p_element(&mut self);
    fn pop(&mut self) -> Sink::Handle;
    fn pop_until_named(&mut self, name: &str);
    fn pop_until<P: Fn(&str) -> bool>(&mut self, pred: P);

    fn reset_insertion_mode(&mut self) -> super::types::InsertionMode;
    fn adoption_agency(&mut self, subject: &str);
    fn stop_parsing(&mut self);
}

impl<Sink: TreeSink> TreeBuilderActions<Sink> for TreeBuilder<Sink> {
    fn current_node(&self) -> Sink::Handle {
        self.open_elems
            .last()
            .cloned()
            .unwrap_or_else(|| self.doc_handle.clone())
    }

    fn current_node_name(&self) -> Atom {
        self.sink.elem_name(&self.current_node())
    }

    fn open_elems_contains_named(&self, name: &str) -> bool {
        self.open_elems
            .iter()
            .any(|h| &self.sink.elem_name(h)[..] == name)
    }

    fn append_text(&mut self, text: String) {
        let target = self.current_node();
        self.insert_appropriately(AppendText(text));
        let _ = target;
    }

    fn append_comment(&mut self, text: String) {
        let comment = self.sink.create_comment(text);
        self.insert_appropriately(AppendNode(comment));
    }

    fn append_comment_to_doc(&mut self, text: String) {
        let comment = self.sink.create_comment(text);
        let doc = self.doc_handle.clone();
        self.sink.append(&doc, AppendNode(comment));
    }

    fn append_comment_to_html(&mut self, text: String) {
        let comment = self.sink.create_comment(text);
        let html = self.open_elems[0].clone();
        self.sink.append(&html, AppendNode(comment));
    }

    fn insert_appropriately(&mut self, child: NodeOrText<Sink::Handle>) {
        let target = self.current_node();
        self.insert_appropriately_at(&target, child);
    }

    fn insert_element_for(&mut self, tag: Tag) -> Sink::Handle {
        let handle = self.sink.create_element(tag.name.clone(), tag.attrs.clone());
        self.insert_appropriately(AppendNode(handle.clone()));
        self.open_elems.push(handle.clone());
        handle
    }

    fn insert_phantom(&mut self, name: &str) -> Sink::Handle {
        self.insert_element_for(Tag {
            kind: TagKind::StartTag,
            name: Atom::from(name),
            self_closing: false,
            attrs: vec![],
        })
    }

    fn insert_and_pop_element_for(&mut self, tag: Tag) -> Sink::Handle {
        let handle = self.sink.create_element(tag.name.clone(), tag.attrs.clone());
        self.insert_appropriately(AppendNode(handle.clone()));
        handle
    }

    fn push_formatting_marker(&mut self) {
        self.active_formatting.push(FormatEntry::Marker);
    }

    fn push_formatting_element(&mut self, handle: Sink::Handle, tag: Tag) {
        // §13.2.4.3 Noah's Ark clause: at most 3 identical entries
        // (same name, same attrs) since the last marker.
        let mut matches = 0;
        let mut remove_at = None;
        for (i, entry) in self.active_formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => break,
                FormatEntry::Element(_, t) => {
                    if t.equiv_modulo_attrs(&tag) && t.attrs == tag.attrs {
                        matches += 1;
                        if matches == 3 {
                            remove_at = Some(i);
                        }
                    }
                }
            }
        }
        if let Some(i) = remove_at {
            self.active_formatting.remove(i);
        }
        self.active_formatting.push(FormatEntry::Element(handle, tag));
    }

    fn clear_active_formatting_to_marker(&mut self) {
        while let Some(entry) = self.active_formatting.pop() {
            if matches!(entry, FormatEntry::Marker) {
                break;
            }
        }
    }

    fn reconstruct_active_formatting(&mut self) {
        if self.active_formatting.is_empty() {
            return;
        }
        // Find the last entry that's already open on the stack, or a
        // marker; reconstruct everything after that point, in order.
        let last_idx = self.active_formatting.len() - 1;
        let already_open = |h: &Sink::Handle, open: &[Sink::Handle]| open.iter().any(|o| self.sink.same_node(o, h));

        match &self.active_formatting[last_idx] {
            FormatEntry::Marker => return,
            FormatEntry::Element(h, _) if already_open(h, &self.open_elems) => return,
            _ => (),
        }

        let mut start = last_idx;
        loop {
            if start == 0 {
                break;
            }
            match &self.active_formatting[start - 1] {
                FormatEntry::Marker => break,
                FormatEntry::Element(h, _) if already_open(h, &self.open_elems) => break,
                _ => start -= 1,
            }
        }

        for i in start..=last_idx {
            let tag = match &self.active_formatting[i] {
                FormatEntry::Element(_, tag) => tag.clone(),
                FormatEntry::Marker => unreachable!(),
            };
            let new_handle = self.insert_element_for(tag.clone());
            self.active_formatting[i] = FormatEntry::Element(new_handle, tag);
        }
    }

    fn remove_from_active_formatting_by_handle(&mut self, target: &Sink::Handle) {
        if let Some(pos) = self.active_formatting.iter().position(|e| match e {
            FormatEntry::Element(h, _) => self.sink.same_node(h, target),
            FormatEntry::Marker => false,
        }) {
            self.active_formatting.remove(pos);
        }
    }

    fn has_element_in_specific_scope(&self, target: &str, pred: fn(&str) -> bool) -> bool {
        for h in self.open_elems.iter().rev() {
            let name = self.sink.elem_name(h);
            if &name[..] == target {
                return true;
            }
            if pred(&name) {
                return false;
            }
        }
        false
    }

    fn has_element_in_scope(&self, target: &str) -> bool {
        self.has_element_in_specific_scope(target, tag_sets::default_scope)
    }

    fn has_element_in_button_scope(&self, target: &str) -> bool {
        self.has_element_in_specific_scope(target, tag_sets::button_scope)
    }

    fn has_element_in_list_item_scope(&self, target: &str) -> bool {
        self.has_element_in_specific_scope(target, tag_sets::list_item_scope)
    }

    fn has_element_in_table_scope(&self, target: &str) -> bool {
        self.has_element_in_specific_scope(target, tag_sets::table_scope)
    }

    fn has_element_in_select_scope(&self, target: &str) -> bool {
        self.has_element_in_specific_scope(target, tag_sets::select_scope)
    }

    fn generate_implied_end_tags(&mut self, except: Option<&str>) {
        loop {
            let name = self.current_node_name();
            if Some(&name[..]) == except {
                return;
            }
            if tag_sets::implied_end_tag(&name) {
                self.pop();
            } else {
                return;
            }
        }
    }

    fn generate_implied_end_tags_thorough(&mut self, except: Option<&str>) {
        loop {
            let name = self.current_node_name();
            if Some(&name[..]) == except {
                return;
            }
            if tag_sets::implied_end_tag_thorough(&name) {
                self.pop();
            } else {
                return;
            }
        }
    }

    fn close_p_element(&mut self) {
        self.generate_implied_end_tags(Some("p"));
        if self.current_node_name() != Atom::from("p") {
            self.sink.parse_error(Cow::Borrowed("Expected to close a <p> element"));
        }
        self.pop_until_named("p");
    }

    fn pop(&mut self) -> Sink::Handle {
        let popped = self.open_elems.pop().expect("pop on empty element stack");
        self.remove_from_active_formatting_by_handle(&popped);
        popped
    }

    fn pop_until_named(&mut self, name: &str) {
        self.pop_until(|n| n == name);
    }

    fn pop_until<P: Fn(&str) -> bool>(&mut self, pred: P) {
        loop {
            let name = self.current_node_name();
            let done = pred(&name);
            self.open_elems.pop();
            if done {
                return;
            }
            if self.open_elems.is_empty() {
                return;
            }
        }
    }

    fn reset_insertion_mode(&mut self) -> super::types::InsertionMode {
        use super::types::InsertionMode::*;

        for (i, handle) in self.open_elems.iter().enumerate().rev() {
            let last = i == 0;
            let name = self.sink.elem_name(handle);
            match &name[..] {
                "select" => return InSelect,
                "td" | "th" if !last => return InCell,
                "tr" => return InRow,
                "tbody" | "thead" | "tfoot" => return InTableBody,
                "caption" => return InCaption,
                "colgroup" => return InColumnGroup,
                "table" => return InTable,
                "head" if !last => return InHead,
                "body" => return InBody,
                "frameset" => return InFrameset,
                "html" => {
                    return if self.head_elem.is_none() { BeforeHead } else { AfterHead };
                }
                _ if last => return InBody,
                _ => continue,
            }
        }
        InBody
    }

    /// §13.2.4.4's adoption agency algorithm, literally: an outer loop of
    /// at most 8 iterations, and for each, an inner loop that walks back
    /// down the stack of open elements from the furthest block to the
    /// formatting element, cloning and relocating every node it passes
    /// (other than the formatting element and furthest block themselves,
    /// which are handled after the inner loop) rather than only
    /// relocating the two endpoints.
    fn adoption_agency(&mut self, subject: &str) {
        // Step 1: if the current node is itself the subject and it's
        // fallen out of the active formatting list, a plain pop suffices.
        if &self.current_node_name()[..] == subject && self.position_in_active_formatting(&self.current_node()).is_none() {
            self.pop();
            return;
        }

        for _ in 0..8 {
            // Step 5: the last (innermost) active formatting entry named
            // `subject`, searching back from the end to the last marker.
            let fmt_pos = {
                let mut found = None;
                for (i, entry) in self.active_formatting.iter().enumerate().rev() {
                    match entry {
                        FormatEntry::Marker => break,
                        FormatEntry::Element(h, _) if &self.sink.elem_name(h)[..] == subject => {
                            found = Some(i);
                            break;
                        }
                        FormatEntry::Element(..) => {}
                    }
                }
                found
            };

            let (fmt_handle, fmt_tag) = match fmt_pos {
                None => return,
                Some(pos) => match &self.active_formatting[pos] {
                    FormatEntry::Element(h, t) => (h.clone(), t.clone()),
                    FormatEntry::Marker => unreachable!(),
                },
            };

            // Step 6: not on the stack of open elements at all.
            let fmt_stack_pos = match self.open_elems.iter().position(|h| self.sink.same_node(h, &fmt_handle)) {
                None => {
                    self.sink.parse_error(Cow::Borrowed("Formatting element not open"));
                    self.active_formatting.remove(fmt_pos.unwrap());
                    return;
                }
                Some(pos) => pos,
            };

            // Step 7.
            if !self.has_element_in_scope(&fmt_tag.name) {
                self.sink.parse_error(Cow::Borrowed("Formatting element not in scope"));
                return;
            }

            // Step 8 (a parse error with no other action).
            if !self.sink.same_node(&self.current_node(), &fmt_handle) {
                self.sink.parse_error(Cow::Borrowed("Formatting element not current node"));
            }

            // Step 9: the furthest block, the topmost special element
            // above the formatting element on the stack.
            let furthest_block = self.open_elems[fmt_stack_pos + 1..]
                .iter()
                .position(|h| tag_sets::is_special(&self.sink.elem_name(h)))
                .map(|i| fmt_stack_pos + 1 + i);

            let furthest_block = match furthest_block {
                None => {
                    // Step 10: no furthest block -- pop the stack up to
                    // and including the formatting element, but only the
                    // formatting element itself leaves the active
                    // formatting list. Any other formatting element
                    // popped along the way (e.g. one still open above it)
                    // stays active and gets reconstructed later.
                    while self.open_elems.len() > fmt_stack_pos {
                        self.open_elems.pop();
                    }
                    self.remove_from_active_formatting_by_handle(&fmt_handle);
                    return;
                }
                Some(i) => i,
            };
            let furthest_block_handle = self.open_elems[furthest_block].clone();

            // Step 11.
            let common_ancestor = self.open_elems[fmt_stack_pos - 1].clone();

            // Step 12.
            let mut bookmark = Bookmark::Replace(fmt_handle.clone());

            // Step 13: walk from the furthest block back towards (but not
            // including) the formatting element, cloning and relocating
            // every node found along the way.
            let mut node_index = furthest_block;
            let mut last_node = furthest_block_handle.clone();
            let mut inner_counter = 0;

            loop {
                inner_counter += 1;
                node_index -= 1;
                let node = self.open_elems[node_index].clone();

                if self.sink.same_node(&node, &fmt_handle) {
                    break;
                }

                if inner_counter > 3 {
                    if let Some(pos) = self.position_in_active_formatting(&node) {
                        self.active_formatting.remove(pos);
                    }
                    self.open_elems.remove(node_index);
                    continue;
                }

                let node_fmt_pos = match self.position_in_active_formatting(&node) {
                    None => {
                        self.open_elems.remove(node_index);
                        continue;
                    }
                    Some(pos) => pos,
                };

                let tag = match &self.active_formatting[node_fmt_pos] {
                    FormatEntry::Element(_, t) => t.clone(),
                    FormatEntry::Marker => unreachable!(),
                };
                let new_node = self.sink.create_element(tag.name.clone(), tag.attrs.clone());
                self.open_elems[node_index] = new_node.clone();
                self.active_formatting[node_fmt_pos] = FormatEntry::Element(new_node.clone(), tag);

                if self.sink.same_node(&last_node, &furthest_block_handle) {
                    bookmark = Bookmark::InsertAfter(new_node.clone());
                }

                self.sink.remove_from_parent(&last_node);
                self.sink.append(&new_node, AppendNode(last_node.clone()));
                last_node = new_node;
            }

            // Step 14: relocate `last_node` under the common ancestor,
            // foster-parenting if required.
            self.sink.remove_from_parent(&last_node);
            self.insert_appropriately_at(&common_ancestor, AppendNode(last_node));

            // Steps 15-17: a clone of the formatting element adopts all
            // of the furthest block's children, then becomes a child of
            // the furthest block itself.
            let clone_handle = self.sink.create_element(fmt_tag.name.clone(), fmt_tag.attrs.clone());
            self.sink.reparent_children(&furthest_block_handle, &clone_handle);
            self.sink.append(&furthest_block_handle, AppendNode(clone_handle.clone()));

            // Step 18: splice the clone into the active formatting list
            // where the bookmark indicates, removing the original entry.
            match bookmark {
                Bookmark::Replace(to_replace) => {
                    let pos = self
                        .position_in_active_formatting(&to_replace)
                        .expect("bookmark not found in active formatting elements");
                    self.active_formatting[pos] = FormatEntry::Element(clone_handle.clone(), fmt_tag);
                }
                Bookmark::InsertAfter(after) => {
                    let pos = self
                        .position_in_active_formatting(&after)
                        .expect("bookmark not found in active formatting elements")
                        + 1;
                    self.active_formatting
                        .insert(pos, FormatEntry::Element(clone_handle.clone(), fmt_tag));
                    let old_pos = self
                        .position_in_active_formatting(&fmt_handle)
                        .expect("formatting element missing from active formatting elements");
                    self.active_formatting.remove(old_pos);
                }
            }

            // Step 19: move the formatting element out of the stack of
            // open elements, replaced by the clone just after the
            // furthest block.
            self.open_elems.remove(fmt_stack_pos);
            let furthest_idx = self
                .open_elems
                .iter()
                .position(|h| self.sink.same_node(h, &furthest_block_handle))
                .unwrap();
            self.open_elems.insert(furthest_idx + 1, clone_handle);
        }
    }

    fn stop_parsing(&mut self) {
        self.stopped = true;
    }
}

/// Where a clone produced by the adoption agency's inner loop should be
/// spliced back into the active formatting list once the loop finishes.
enum Bookmark<Handle> {
    Replace(Handle),
    InsertAfter(Handle),
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    /// Insert at the "appropriate place for inserting a node" (§13.2.6.1),
    /// using `override_target` in place of the current node -- the
    /// adoption agency algorithm needs to foster-parent relative to a
    /// common ancestor rather than whatever element happens to be open.
    fn insert_appropriately_at(&mut self, override_target: &Sink::Handle, child: NodeOrText<Sink::Handle>) {
        if !self.foster_parenting
            || !matches!(&self.sink.elem_name(override_target)[..], "table" | "tbody" | "tfoot" | "thead" | "tr")
        {
            self.sink.append(override_target, child);
            return;
        }

        // Foster parenting: insert before the table, in the table's own
        // parent, if the table is in the tree; otherwise just before the
        // last table ancestor, falling back to appending under the
        // element below it when that ancestor has no parent.
        let table_pos = self
            .open_elems
            .iter()
            .rposition(|h| &self.sink.elem_name(h)[..] == "table");

        match table_pos {
            Some(pos) => {
                let table = self.open_elems[pos].clone();
                if self.sink.has_parent_node(&table) {
                    self.sink.append_before_sibling(&table, child);
                } else {
                    let foster_parent = self.open_elems[pos.saturating_sub(1)].clone();
                    self.sink.append(&foster_parent, child);
                }
            }
            None => {
                self.sink.append(override_target, child);
            }
        }
    }

    fn position_in_active_formatting(&self, target: &Sink::Handle) -> Option<usize> {
        self.active_formatting.iter().position(|e| match e {
            FormatEntry::Element(h, _) => self.sink.same_node(h, target),
            FormatEntry::Marker => false,
        })
    }
}
