// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The per-insertion-mode rules (HTML5 §13.2.6), dispatched from
//! `TreeBuilder::process_to_completion`.

use std::borrow::Cow;

use string_cache::Atom;

use super::actions::TreeBuilderActions;
use super::interface::{AppendNode, NodeOrText, TreeSink};
use super::tag_sets;
use super::types::{
    InsertionMode::{self, *},
    NotSplit, NotWhitespace, Whitespace,
};
use super::types::{CharacterTokens, CommentToken, NullCharacterToken, Token, TreeEOFToken, TreeTagToken};
use super::types::{Done, DoneAckSelfClosing, ProcessResult, Reprocess, SplitWhitespace};
use super::TreeBuilder;

use crate::tokenizer::states::State;
use crate::tokenizer::{Tag, TagKind};

macro_rules! tag_name {
    ($tag:expr) => {
        &$tag.name[..]
    };
}

pub trait TreeBuilderStep<Sink: TreeSink> {
    fn step(&mut self, mode: InsertionMode, token: Token) -> ProcessResult;
}

impl<Sink: TreeSink> TreeBuilderStep<Sink> for TreeBuilder<Sink> {
    fn step(&mut self, mode: InsertionMode, token: Token) -> ProcessResult {
        match mode {
            Initial => self.step_initial(token),
            BeforeHtml => self.step_before_html(token),
            BeforeHead => self.step_before_head(token),
            InHead => self.step_in_head(token),
            InHeadNoscript => self.step_in_head_noscript(token),
            AfterHead => self.step_after_head(token),
            InBody => self.step_in_body(token),
            Text => self.step_text(token),
            InTable => self.step_in_table(token),
            InTableText => self.step_in_table_text(token),
            InCaption => self.step_in_caption(token),
            InColumnGroup => self.step_in_column_group(token),
            InTableBody => self.step_in_table_body(token),
            InRow => self.step_in_row(token),
            InCell => self.step_in_cell(token),
            InSelect => self.step_in_select(token),
            InSelectInTable => self.step_in_select_in_table(token),
            AfterBody => self.step_after_body(token),
            InFrameset => self.step_in_frameset(token),
            AfterFrameset => self.step_after_frameset(token),
            AfterAfterBody => self.step_after_after_body(token),
            AfterAfterFrameset => self.step_after_after_frameset(token),
        }
    }
}

/// Is this character token made only of ASCII whitespace? Splits off a
/// leading whitespace run if not, so table-context modes can special-case
/// the whitespace half and reprocess the rest.
fn split_whitespace(buf: &str) -> ProcessResult {
    use crate::util::str::{char_run, is_ascii_whitespace};
    match char_run(is_ascii_whitespace, buf) {
        None => Done,
        Some((len, _)) if len == buf.len() => Done,
        Some(_) => SplitWhitespace(buf.to_string()),
    }
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    fn error(&mut self, msg: &'static str) {
        self.sink.parse_error(Cow::Borrowed(msg));
    }

    fn step_initial(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => Done,
            CommentToken(text) => {
                self.append_comment_to_doc(text);
                Done
            }
            _ => Reprocess(BeforeHtml, token),
        }
    }

    fn step_before_html(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => Done,
            CommentToken(text) => {
                self.append_comment_to_doc(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                let handle = self.sink.create_element(tag.name.clone(), tag.attrs.clone());
                let doc = self.doc_handle.clone();
                self.sink.append(&doc, AppendNode(handle.clone()));
                self.open_elems.push(handle);
                self.to_mode(BeforeHead)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && !matches!(tag_name!(tag), "head" | "body" | "html" | "br") =>
            {
                self.error("Unexpected end tag before <html>");
                Done
            }
            _ => {
                self.create_root_html();
                Reprocess(BeforeHead, token)
            }
        }
    }

    fn step_before_head(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => Done,
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                self.add_attrs_if_missing_to_html(tag.attrs.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "head" => {
                let handle = self.insert_element_for(tag.clone());
                self.head_elem = Some(handle);
                self.to_mode(InHead)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && !matches!(tag_name!(tag), "head" | "body" | "html" | "br") =>
            {
                self.error("Unexpected end tag before <head>");
                Done
            }
            _ => {
                let handle = self.insert_phantom("head");
                self.head_elem = Some(handle);
                Reprocess(InHead, token)
            }
        }
    }

    fn step_in_head(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => {
                self.append_text(s.clone());
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                self.add_attrs_if_missing_to_html(tag.attrs.clone());
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "base" | "basefont" | "bgsound" | "link" | "meta") =>
            {
                self.insert_and_pop_element_for(tag.clone());
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "title" => {
                self.parse_raw_text(tag.clone(), State::RawData(crate::tokenizer::states::RawKind::Rcdata));
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "noframes" | "style") =>
            {
                self.parse_raw_text(tag.clone(), State::RawData(crate::tokenizer::states::RawKind::Rawtext));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "noscript" => {
                self.insert_element_for(tag.clone());
                self.to_mode(InHeadNoscript)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "script" => {
                self.parse_raw_text(tag.clone(), State::RawData(crate::tokenizer::states::RawKind::ScriptData));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "head" => {
                self.pop();
                self.to_mode(AfterHead)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && !matches!(tag_name!(tag), "body" | "html" | "br") =>
            {
                self.error("Unexpected end tag in <head>");
                Done
            }
            _ => {
                self.pop();
                Reprocess(AfterHead, token)
            }
        }
    }

    fn step_in_head_noscript(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                self.step_in_body(token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "noscript" => {
                self.pop();
                self.to_mode(InHead)
            }
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => self.step_in_head(token),
            CommentToken(_) => self.step_in_head(token),
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style") =>
            {
                self.step_in_head(token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "br" => {
                self.error("Unexpected </br> in <head><noscript>");
                self.pop();
                Reprocess(InHead, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "head" | "noscript") => {
                self.error("Unexpected tag in <head><noscript>");
                Done
            }
            _ => {
                self.error("Unexpected token in <head><noscript>");
                self.pop();
                Reprocess(InHead, token)
            }
        }
    }

    fn step_after_head(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => {
                self.append_text(s.clone());
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                self.add_attrs_if_missing_to_html(tag.attrs.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "body" => {
                self.insert_element_for(tag.clone());
                self.frameset_ok = false;
                self.to_mode(InBody)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "frameset" => {
                self.insert_element_for(tag.clone());
                self.to_mode(InFrameset)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(
                        tag_name!(tag),
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script" | "style" | "title"
                    ) =>
            {
                self.error("Unexpected head content after </head>");
                let head = self.head_elem.clone().expect("head element pointer unset");
                self.open_elems.push(head);
                let result = self.step_in_head(token);
                self.open_elems.retain(|h| !self.sink.same_node(h, self.head_elem.as_ref().unwrap()));
                result
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && !matches!(tag_name!(tag), "body" | "html" | "br") =>
            {
                self.error("Unexpected end tag after </head>");
                Done
            }
            _ => {
                self.insert_phantom("body");
                self.frameset_ok = true;
                Reprocess(InBody, token)
            }
        }
    }

    fn step_text(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, text) => {
                self.append_text(text);
                Done
            }
            NullCharacterToken => Done,
            TreeEOFToken => {
                self.error("EOF inside raw-text element");
                self.pop();
                Reprocess(self.orig_mode.take().unwrap_or(InBody), TreeEOFToken)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag => {
                self.pop();
                let mode = self.orig_mode.take().unwrap_or(InBody);
                self.to_mode(mode)
            }
            _ => Done,
        }
    }

    fn step_in_body(&mut self, token: Token) -> ProcessResult {
        match token {
            NullCharacterToken => {
                self.error("Null character in <body>");
                Done
            }
            CharacterTokens(NotSplit, text) => split_whitespace(&text),
            CharacterTokens(_, text) => {
                self.reconstruct_active_formatting();
                if !text.chars().all(|c| c.is_ascii_whitespace()) {
                    self.frameset_ok = false;
                }
                self.append_text(text);
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => {
                self.add_attrs_if_missing_to_html(tag.attrs.clone());
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(
                        tag_name!(tag),
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script" | "style" | "title"
                    ) =>
            {
                self.step_in_head(token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "body" => {
                self.error("Unexpected <body> in <body>");
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "frameset" => {
                if !self.frameset_ok || self.open_elems.len() < 2 {
                    self.error("Unexpected <frameset>");
                    return Done;
                }
                self.error("Unexpected <frameset>");
                Done
            }
            TreeEOFToken => Done,
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "body" => {
                if !self.has_element_in_scope("body") {
                    self.error("Unexpected </body>");
                    return Done;
                }
                self.to_mode(AfterBody)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "html" => {
                if !self.has_element_in_scope("body") {
                    self.error("Unexpected </html>");
                    return Done;
                }
                Reprocess(AfterBody, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(
                        tag_name!(tag),
                        "address" | "article" | "aside" | "blockquote" | "center" | "details" | "dialog" | "dir"
                            | "div" | "dl" | "fieldset" | "figcaption" | "figure" | "footer" | "header" | "hgroup"
                            | "main" | "menu" | "nav" | "ol" | "p" | "section" | "summary" | "ul"
                    ) =>
            {
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_sets::heading_tag(tag_name!(tag)) => {
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                if tag_sets::heading_tag(&self.current_node_name()) {
                    self.error("Nested heading elements");
                    self.pop();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "pre" | "listing") =>
            {
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_element_for(tag.clone());
                self.ignore_lf = true;
                self.frameset_ok = false;
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "form" => {
                if self.form_elem.is_some() {
                    self.error("Nested forms");
                    return Done;
                }
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                let handle = self.insert_element_for(tag.clone());
                self.form_elem = Some(handle);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "li" => {
                self.frameset_ok = false;
                if self.has_element_in_list_item_scope("li") {
                    self.generate_implied_end_tags(Some("li"));
                    self.pop_until_named("li");
                }
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "dd" | "dt") => {
                self.frameset_ok = false;
                if self.has_element_in_list_item_scope(tag_name!(tag)) {
                    self.generate_implied_end_tags(Some(tag_name!(tag)));
                    self.pop_until_named(tag_name!(tag));
                }
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "button" => {
                if self.has_element_in_scope("button") {
                    self.error("Nested <button>");
                    self.generate_implied_end_tags(None);
                    self.pop_until_named("button");
                }
                self.reconstruct_active_formatting();
                self.insert_element_for(tag.clone());
                self.frameset_ok = false;
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(
                        tag_name!(tag),
                        "address" | "article" | "aside" | "blockquote" | "button" | "center" | "details" | "dialog"
                            | "dir" | "div" | "dl" | "fieldset" | "figcaption" | "figure" | "footer" | "header"
                            | "hgroup" | "listing" | "main" | "menu" | "nav" | "ol" | "pre" | "section" | "summary" | "ul"
                    ) =>
            {
                if !self.has_element_in_scope(tag_name!(tag)) {
                    self.error("Unmatched end tag");
                    return Done;
                }
                self.generate_implied_end_tags(None);
                if self.current_node_name() != tag.name {
                    self.error("End tag does not match current node");
                }
                self.pop_until_named(tag_name!(tag));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "form" => {
                let form = self.form_elem.take();
                match form {
                    Some(form) if self.open_elems.iter().any(|h| self.sink.same_node(h, &form)) => {
                        self.generate_implied_end_tags(None);
                        let idx = self.open_elems.iter().position(|h| self.sink.same_node(h, &form));
                        if let Some(idx) = idx {
                            self.open_elems.remove(idx);
                        }
                    }
                    _ => self.error("Unmatched </form>"),
                }
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "p" => {
                if !self.has_element_in_button_scope("p") {
                    self.error("Unmatched </p>");
                    self.insert_phantom("p");
                }
                self.close_p_element();
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "li" => {
                if !self.has_element_in_list_item_scope("li") {
                    self.error("Unmatched </li>");
                    return Done;
                }
                self.generate_implied_end_tags(Some("li"));
                self.pop_until_named("li");
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && matches!(tag_name!(tag), "dd" | "dt") => {
                if !self.has_element_in_scope(tag_name!(tag)) {
                    self.error("Unmatched end tag");
                    return Done;
                }
                self.generate_implied_end_tags(Some(tag_name!(tag)));
                self.pop_until_named(tag_name!(tag));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_sets::heading_tag(tag_name!(tag)) => {
                if !matches!(
                    self.open_elems.iter().rev().find_map(|h| {
                        let n = self.sink.elem_name(h);
                        if tag_sets::heading_tag(&n) { Some(true) } else { None }
                    }),
                    Some(true)
                ) {
                    self.error("Unmatched heading end tag");
                    return Done;
                }
                self.generate_implied_end_tags(None);
                self.pop_until(tag_sets::heading_tag);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_sets::is_formatting(tag_name!(tag)) => {
                self.reconstruct_active_formatting();
                let handle = self.insert_element_for(tag.clone());
                self.push_formatting_element(handle, tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_sets::is_formatting(tag_name!(tag)) => {
                self.adoption_agency(tag_name!(tag));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "applet" | "marquee" | "object") => {
                self.reconstruct_active_formatting();
                self.insert_element_for(tag.clone());
                self.push_formatting_marker();
                self.frameset_ok = false;
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && matches!(tag_name!(tag), "applet" | "marquee" | "object") => {
                if !self.has_element_in_scope(tag_name!(tag)) {
                    self.error("Unmatched end tag");
                    return Done;
                }
                self.generate_implied_end_tags(None);
                self.pop_until_named(tag_name!(tag));
                self.clear_active_formatting_to_marker();
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "table" => {
                if self.quirks_mode() != super::interface::QuirksMode::Quirks && self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_element_for(tag.clone());
                self.frameset_ok = false;
                self.to_mode(InTable)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "area" | "br" | "embed" | "img" | "keygen" | "wbr") =>
            {
                self.reconstruct_active_formatting();
                self.insert_and_pop_element_for(tag.clone());
                self.frameset_ok = false;
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "input" => {
                self.reconstruct_active_formatting();
                self.insert_and_pop_element_for(tag.clone());
                let is_hidden = tag
                    .attrs
                    .iter()
                    .any(|a| &a.name.local[..] == "type" && a.value.eq_ignore_ascii_case("hidden"));
                if !is_hidden {
                    self.frameset_ok = false;
                }
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "param" | "source" | "track") =>
            {
                self.insert_and_pop_element_for(tag.clone());
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "hr" => {
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.insert_and_pop_element_for(tag.clone());
                self.frameset_ok = false;
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "image" => {
                self.error("<image> should be <img>");
                let mut renamed = tag.clone();
                renamed.name = Atom::from("img");
                Reprocess(InBody, TreeTagToken(renamed))
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "textarea") =>
            {
                self.insert_element_for(tag.clone());
                self.ignore_lf = true;
                self.frameset_ok = false;
                self.parse_raw_text_already_inserted(State::RawData(crate::tokenizer::states::RawKind::Rcdata));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "xmp" => {
                if self.has_element_in_button_scope("p") {
                    self.close_p_element();
                }
                self.reconstruct_active_formatting();
                self.frameset_ok = false;
                self.insert_element_for(tag.clone());
                self.parse_raw_text_already_inserted(State::RawData(crate::tokenizer::states::RawKind::Rawtext));
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "iframe" | "noembed") => {
                self.frameset_ok = false;
                self.insert_element_for(tag.clone());
                self.parse_raw_text_already_inserted(State::RawData(crate::tokenizer::states::RawKind::Rawtext));
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "select" | "optgroup" | "option") =>
            {
                self.reconstruct_active_formatting();
                self.insert_element_for(tag.clone());
                if tag_name!(tag) == "select" {
                    self.frameset_ok = false;
                    let mode = if matches!(
                        self.mode_context_is_table(),
                        true
                    ) {
                        InSelectInTable
                    } else {
                        InSelect
                    };
                    self.to_mode(mode)
                } else {
                    Done
                }
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "br" => {
                self.error("Unexpected </br>, treating as <br>");
                self.reconstruct_active_formatting();
                self.insert_and_pop_element_for(Tag {
                    kind: TagKind::StartTag,
                    name: Atom::from("br"),
                    self_closing: false,
                    attrs: vec![],
                });
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag => {
                self.reconstruct_active_formatting();
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag => {
                // "Any other end tag": walk the stack looking for a match,
                // popping as we go (§13.2.6.4.7 step "any other end tag").
                for i in (0..self.open_elems.len()).rev() {
                    let name = self.sink.elem_name(&self.open_elems[i]);
                    if &name[..] == tag_name!(tag) {
                        self.generate_implied_end_tags(Some(tag_name!(tag)));
                        while self.open_elems.len() > i {
                            self.pop();
                        }
                        break;
                    }
                    if tag_sets::is_special(&name) {
                        self.error("Unmatched end tag for non-special element");
                        break;
                    }
                }
                Done
            }
            _ => Done,
        }
    }

    fn step_in_table(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(..) if self.open_elems_contains_named("table")
                || self.open_elems_contains_named("tbody")
                || self.open_elems_contains_named("tfoot")
                || self.open_elems_contains_named("thead")
                || self.open_elems_contains_named("tr") =>
            {
                self.pending_table_text.clear();
                self.orig_mode = Some(InTable);
                Reprocess(InTableText, token)
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "caption" => {
                self.clear_stack_back_to_table_context();
                self.push_formatting_marker();
                self.insert_element_for(tag.clone());
                self.to_mode(InCaption)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "colgroup" => {
                self.clear_stack_back_to_table_context();
                self.insert_element_for(tag.clone());
                self.to_mode(InColumnGroup)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "col" => {
                self.clear_stack_back_to_table_context();
                self.insert_phantom("colgroup");
                Reprocess(InColumnGroup, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_sets::table_section_tag(tag_name!(tag)) => {
                self.clear_stack_back_to_table_context();
                self.insert_element_for(tag.clone());
                self.to_mode(InTableBody)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && (tag_sets::table_cell_tag(tag_name!(tag)) || tag_name!(tag) == "tr") =>
            {
                self.clear_stack_back_to_table_context();
                self.insert_phantom("tbody");
                Reprocess(InTableBody, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "table" => {
                self.error("Nested <table>");
                if !self.has_element_in_table_scope("table") {
                    return Done;
                }
                self.pop_until_named("table");
                let mode = self.reset_insertion_mode();
                Reprocess(mode, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "table" => {
                if !self.has_element_in_table_scope("table") {
                    self.error("Unmatched </table>");
                    return Done;
                }
                self.pop_until_named("table");
                let mode = self.reset_insertion_mode();
                self.to_mode(mode)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(
                        tag_name!(tag),
                        "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                    ) =>
            {
                self.error("Unexpected end tag in <table>");
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "style" | "script") =>
            {
                self.step_in_head(token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "input" => {
                let is_hidden = tag
                    .attrs
                    .iter()
                    .any(|a| &a.name.local[..] == "type" && a.value.eq_ignore_ascii_case("hidden"));
                if !is_hidden {
                    self.error("Unexpected <input> in <table>");
                    self.foster_parenting = true;
                    let r = self.step_in_body(token);
                    self.foster_parenting = false;
                    r
                } else {
                    self.insert_and_pop_element_for(tag.clone());
                    DoneAckSelfClosing
                }
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "form" => {
                self.error("Unexpected <form> in <table>");
                if self.form_elem.is_some() {
                    return Done;
                }
                let handle = self.insert_and_pop_element_for(tag.clone());
                self.form_elem = Some(handle);
                Done
            }
            TreeEOFToken => self.step_in_body(token),
            _ => {
                self.error("Unexpected content in <table>, foster parenting");
                self.foster_parenting = true;
                let r = self.step_in_body(token);
                self.foster_parenting = false;
                r
            }
        }
    }

    fn step_in_table_text(&mut self, token: Token) -> ProcessResult {
        match token {
            NullCharacterToken => {
                self.error("Null character in table text");
                Done
            }
            CharacterTokens(split, text) => {
                self.pending_table_text.push((split, text));
                Done
            }
            _ => {
                let all_ws = self
                    .pending_table_text
                    .iter()
                    .all(|(_, t)| t.chars().all(|c| c.is_ascii_whitespace()));
                let combined: String = self.pending_table_text.drain(..).map(|(_, t)| t).collect();
                if !all_ws {
                    self.error("Non-whitespace character data in table context");
                    self.foster_parenting = true;
                    self.append_text(combined);
                    self.foster_parenting = false;
                } else if !combined.is_empty() {
                    self.append_text(combined);
                }
                let mode = self.orig_mode.take().unwrap_or(InTable);
                Reprocess(mode, token)
            }
        }
    }

    fn step_in_caption(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "caption" => {
                if !self.has_element_in_table_scope("caption") {
                    self.error("Unmatched </caption>");
                    return Done;
                }
                self.generate_implied_end_tags(None);
                self.pop_until_named("caption");
                self.clear_active_formatting_to_marker();
                self.to_mode(InTable)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(
                        tag_name!(tag),
                        "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                    ) =>
            {
                if !self.has_element_in_table_scope("caption") {
                    return Done;
                }
                self.pop_until_named("caption");
                self.clear_active_formatting_to_marker();
                Reprocess(InTable, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && matches!(tag_name!(tag), "table" | "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr") => {
                if tag_name!(tag) != "table" {
                    self.error("Unexpected end tag in <caption>");
                    return Done;
                }
                if !self.has_element_in_table_scope("caption") {
                    return Done;
                }
                self.pop_until_named("caption");
                self.clear_active_formatting_to_marker();
                Reprocess(InTable, token)
            }
            _ => self.step_in_body(token),
        }
    }

    fn step_in_column_group(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => {
                self.append_text(s.clone());
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "col" => {
                self.insert_and_pop_element_for(tag.clone());
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "colgroup" => {
                if self.current_node_name() != Atom::from("colgroup") {
                    self.error("Unmatched </colgroup>");
                    return Done;
                }
                self.pop();
                self.to_mode(InTable)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "col" => {
                self.error("Unmatched </col>");
                Done
            }
            TreeEOFToken => self.step_in_body(token),
            _ => {
                if self.current_node_name() != Atom::from("colgroup") {
                    return Done;
                }
                self.pop();
                Reprocess(InTable, token)
            }
        }
    }

    fn step_in_table_body(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "tr" => {
                self.clear_stack_back_to_table_body_context();
                self.insert_element_for(tag.clone());
                self.to_mode(InRow)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_sets::table_cell_tag(tag_name!(tag)) => {
                self.error("Table cell directly in table section");
                self.clear_stack_back_to_table_body_context();
                self.insert_phantom("tr");
                Reprocess(InRow, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && tag_sets::table_section_tag(tag_name!(tag)) =>
            {
                if !self.open_elems_contains_named(tag_name!(tag)) {
                    self.error("Unmatched table section end tag");
                    return Done;
                }
                self.clear_stack_back_to_table_body_context();
                self.pop();
                self.to_mode(InTable)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead") =>
            {
                if !self.open_elems_contains_named("tbody")
                    && !self.open_elems_contains_named("thead")
                    && !self.open_elems_contains_named("tfoot")
                {
                    return Done;
                }
                self.clear_stack_back_to_table_body_context();
                self.pop();
                Reprocess(InTable, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(tag_name!(tag), "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr") =>
            {
                self.error("Unexpected end tag in table section");
                Done
            }
            _ => self.step_in_table(token),
        }
    }

    fn step_in_row(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_sets::table_cell_tag(tag_name!(tag)) => {
                self.clear_stack_back_to_row_context();
                self.insert_element_for(tag.clone());
                self.push_formatting_marker();
                self.to_mode(InCell)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "tr" => {
                if !self.open_elems_contains_named("tr") {
                    self.error("Unmatched </tr>");
                    return Done;
                }
                self.clear_stack_back_to_row_context();
                self.pop();
                self.to_mode(InTableBody)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && (tag_sets::table_section_tag(tag_name!(tag)) || tag_name!(tag) == "tr") =>
            {
                if !self.open_elems_contains_named("tr") {
                    return Done;
                }
                self.clear_stack_back_to_row_context();
                self.pop();
                Reprocess(InTableBody, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && matches!(tag_name!(tag), "table") =>
            {
                if !self.open_elems_contains_named("tr") {
                    return Done;
                }
                self.clear_stack_back_to_row_context();
                self.pop();
                Reprocess(InTableBody, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && tag_sets::table_section_tag(tag_name!(tag)) =>
            {
                if !self.open_elems_contains_named(tag_name!(tag)) || !self.open_elems_contains_named("tr") {
                    return Done;
                }
                self.clear_stack_back_to_row_context();
                self.pop();
                Reprocess(InTableBody, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(tag_name!(tag), "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th") =>
            {
                self.error("Unexpected end tag in <tr>");
                Done
            }
            _ => self.step_in_table(token),
        }
    }

    fn step_in_cell(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_sets::table_cell_tag(tag_name!(tag)) => {
                if !self.has_element_in_table_scope(tag_name!(tag)) {
                    self.error("Unmatched table cell end tag");
                    return Done;
                }
                self.generate_implied_end_tags(None);
                self.pop_until_named(tag_name!(tag));
                self.clear_active_formatting_to_marker();
                self.to_mode(InRow)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(
                        tag_name!(tag),
                        "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
                    ) =>
            {
                if !self.has_element_in_table_scope("td") && !self.has_element_in_table_scope("th") {
                    return Done;
                }
                self.close_current_cell();
                Reprocess(InRow, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag && matches!(tag_name!(tag), "body" | "caption" | "col" | "colgroup" | "html") =>
            {
                self.error("Unexpected end tag in table cell");
                Done
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(tag_name!(tag), "table" | "tbody" | "tfoot" | "thead" | "tr") =>
            {
                if !self.open_elems_contains_named(tag_name!(tag)) {
                    return Done;
                }
                self.close_current_cell();
                Reprocess(InRow, token)
            }
            _ => self.step_in_body(token),
        }
    }

    fn step_in_select(&mut self, token: Token) -> ProcessResult {
        match token {
            NullCharacterToken => {
                self.error("Null character in <select>");
                Done
            }
            CharacterTokens(_, text) => {
                self.append_text(text);
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeEOFToken => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "option" => {
                if self.current_node_name() == Atom::from("option") {
                    self.pop();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "optgroup" => {
                if self.current_node_name() == Atom::from("option") {
                    self.pop();
                }
                if self.current_node_name() == Atom::from("optgroup") {
                    self.pop();
                }
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "optgroup" => {
                if self.current_node_name() == Atom::from("option")
                    && self
                        .open_elems
                        .len()
                        .checked_sub(2)
                        .and_then(|i| self.open_elems.get(i))
                        .map(|h| &self.sink.elem_name(h)[..] == "optgroup")
                        .unwrap_or(false)
                {
                    self.pop();
                }
                if self.current_node_name() == Atom::from("optgroup") {
                    self.pop();
                } else {
                    self.error("Unmatched </optgroup>");
                }
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "option" => {
                if self.current_node_name() == Atom::from("option") {
                    self.pop();
                } else {
                    self.error("Unmatched </option>");
                }
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "select" => {
                if !self.has_element_in_select_scope("select") {
                    self.error("Unmatched </select>");
                    return Done;
                }
                self.pop_until_named("select");
                let mode = self.reset_insertion_mode();
                self.to_mode(mode)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "select" => {
                self.error("Nested <select>");
                if !self.has_element_in_select_scope("select") {
                    return Done;
                }
                self.pop_until_named("select");
                let mode = self.reset_insertion_mode();
                self.to_mode(mode)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag && matches!(tag_name!(tag), "input" | "keygen" | "textarea") =>
            {
                self.error("Unexpected form control in <select>");
                if !self.has_element_in_select_scope("select") {
                    return Done;
                }
                self.pop_until_named("select");
                let mode = self.reset_insertion_mode();
                Reprocess(mode, token)
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "script" => {
                self.step_in_head(token)
            }
            _ => {
                self.error("Unexpected token in <select>");
                Done
            }
        }
    }

    fn step_in_select_in_table(&mut self, token: Token) -> ProcessResult {
        match token {
            TreeTagToken(ref tag)
                if tag.kind == TagKind::StartTag
                    && matches!(tag_name!(tag), "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th") =>
            {
                self.error("Table content inside <select>");
                self.pop_until_named("select");
                let mode = self.reset_insertion_mode();
                Reprocess(mode, token)
            }
            TreeTagToken(ref tag)
                if tag.kind == TagKind::EndTag
                    && matches!(tag_name!(tag), "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th") =>
            {
                if !self.open_elems_contains_named(tag_name!(tag)) {
                    return Done;
                }
                self.pop_until_named("select");
                let mode = self.reset_insertion_mode();
                Reprocess(mode, token)
            }
            _ => self.step_in_select(token),
        }
    }

    fn step_after_body(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => self.step_in_body(token),
            CommentToken(text) => {
                self.append_comment_to_html(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "html" => self.to_mode(AfterAfterBody),
            TreeEOFToken => {
                self.stop_parsing();
                Done
            }
            _ => {
                self.error("Unexpected content after </body>");
                Reprocess(InBody, token)
            }
        }
    }

    fn step_in_frameset(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => {
                self.append_text(s.clone());
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "frameset" => {
                self.insert_element_for(tag.clone());
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "frameset" => {
                if self.open_elems.len() == 1 {
                    self.error("Unmatched </frameset> on root");
                    return Done;
                }
                self.pop();
                if self.current_node_name() != Atom::from("frameset") {
                    self.to_mode(AfterFrameset)
                } else {
                    Done
                }
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "frame" => {
                self.insert_and_pop_element_for(tag.clone());
                DoneAckSelfClosing
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "noframes" => self.step_in_head(token),
            TreeEOFToken => {
                if self.open_elems.len() != 1 {
                    self.error("EOF inside <frameset>");
                }
                self.stop_parsing();
                Done
            }
            _ => {
                self.error("Unexpected content in <frameset>");
                Done
            }
        }
    }

    fn step_after_frameset(&mut self, token: Token) -> ProcessResult {
        match token {
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => {
                self.append_text(s.clone());
                Done
            }
            CommentToken(text) => {
                self.append_comment(text);
                Done
            }
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::EndTag && tag_name!(tag) == "html" => self.to_mode(AfterAfterFrameset),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "noframes" => self.step_in_head(token),
            TreeEOFToken => {
                self.stop_parsing();
                Done
            }
            _ => {
                self.error("Unexpected content after <frameset>");
                Done
            }
        }
    }

    fn step_after_after_body(&mut self, token: Token) -> ProcessResult {
        match token {
            CommentToken(text) => {
                self.append_comment_to_doc(text);
                Done
            }
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeEOFToken => {
                self.stop_parsing();
                Done
            }
            _ => {
                self.error("Unexpected content after </html>");
                Reprocess(InBody, token)
            }
        }
    }

    fn step_after_after_frameset(&mut self, token: Token) -> ProcessResult {
        match token {
            CommentToken(text) => {
                self.append_comment_to_doc(text);
                Done
            }
            CharacterTokens(_, ref s) if s.chars().all(|c| c.is_ascii_whitespace()) => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "html" => self.step_in_body(token),
            TreeTagToken(ref tag) if tag.kind == TagKind::StartTag && tag_name!(tag) == "noframes" => self.step_in_head(token),
            TreeEOFToken => {
                self.stop_parsing();
                Done
            }
            _ => {
                self.error("Unexpected content after </frameset>");
                Done
            }
        }
    }

    // --- helpers shared by several modes ---

    fn to_mode(&mut self, mode: InsertionMode) -> ProcessResult {
        self.mode = mode;
        Done
    }

    fn quirks_mode(&self) -> super::interface::QuirksMode {
        self.quirks_mode
    }

    fn create_root_html(&mut self) {
        let handle = self.sink.create_element(Atom::from("html"), vec![]);
        let doc = self.doc_handle.clone();
        self.sink.append(&doc, AppendNode(handle.clone()));
        self.open_elems.push(handle);
    }

    fn add_attrs_if_missing_to_html(&mut self, attrs: Vec<crate::tokenizer::Attribute>) {
        if let Some(html) = self.open_elems.first().cloned() {
            self.sink.add_attrs_if_missing(&html, attrs);
        }
    }

    fn parse_raw_text(&mut self, tag: Tag, state: State) {
        self.insert_element_for(tag);
        self.next_tokenizer_state = Some(state);
        self.orig_mode = Some(self.mode);
        self.mode = Text;
    }

    fn parse_raw_text_already_inserted(&mut self, state: State) {
        self.next_tokenizer_state = Some(state);
        self.orig_mode = Some(self.mode);
        self.mode = Text;
    }

    fn close_current_cell(&mut self) {
        self.generate_implied_end_tags(None);
        self.pop_until(tag_sets::table_cell_tag);
        self.clear_active_formatting_to_marker();
        self.mode = InRow;
    }

    fn clear_stack_back_to_table_context(&mut self) {
        while !matches!(&self.current_node_name()[..], "table" | "html") {
            self.pop();
        }
    }

    fn clear_stack_back_to_table_body_context(&mut self) {
        while !matches!(&self.current_node_name()[..], "tbody" | "tfoot" | "thead" | "html") {
            self.pop();
        }
    }

    fn clear_stack_back_to_row_context(&mut self) {
        while !matches!(&self.current_node_name()[..], "tr" | "html") {
            self.pop();
        }
    }

    fn mode_context_is_table(&self) -> bool {
        matches!(
            self.mode,
            InTable | InCaption | InTableBody | InRow | InCell
        )
    }
}
