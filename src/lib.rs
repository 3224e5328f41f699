// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An HTML5 parser core: byte decoding, input preprocessing, tokenization
//! and tree construction, feeding a small arena-based DOM.
//!
//! The pipeline mirrors HTML5 §8.2.2-§8.2.5: [`decoder::Utf8Decoder`] turns
//! bytes into Unicode scalar values, [`preprocessor::InputPreprocessor`]
//! normalizes newlines and a leading BOM, [`tokenizer::Tokenizer`] turns
//! code points into tokens, and [`tree_builder::TreeBuilder`] drives a
//! [`tree_builder::TreeSink`] (by default [`dom::ArenaSink`]) to build a
//! tree. [`Parser`] wires all four stages together for the common case of
//! parsing a complete document.

pub mod decoder;
pub mod dom;
pub mod entity;
pub mod error;
pub mod preprocessor;
pub mod tokenizer;
pub mod tree_builder;
pub mod util;

use tracing::trace;

use decoder::Utf8Decoder;
use dom::ArenaSink;
use preprocessor::InputPreprocessor;
use tokenizer::{Tokenizer, TokenizerOpts};
use tree_builder::{TreeBuilder, TreeBuilderOpts, TreeSink};

/// Options for the whole pipeline: the tokenizer's own options plus the
/// tree builder's.
#[derive(Clone, Default)]
pub struct ParserOpts {
    pub tokenizer: TokenizerOpts,
    pub tree_builder: TreeBuilderOpts,
}

/// Drives bytes through decode -> preprocess -> tokenize -> tree-construct,
/// incrementally or in one shot, into a caller-supplied [`TreeSink`].
pub struct Parser<Sink: TreeSink> {
    decoder: Utf8Decoder,
    preprocessor: InputPreprocessor,
    tokenizer: Tokenizer<TreeBuilder<Sink>>,
}

impl<Sink: TreeSink> Parser<Sink> {
    pub fn new(sink: Sink, opts: ParserOpts) -> Parser<Sink> {
        let tree_builder = TreeBuilder::new(sink, opts.tree_builder);
        Parser {
            decoder: Utf8Decoder::new(),
            preprocessor: InputPreprocessor::new(),
            tokenizer: Tokenizer::new(tree_builder, opts.tokenizer),
        }
    }

    /// Feed a chunk of raw bytes. Can be called repeatedly as more of the
    /// document arrives over the network.
    pub fn feed(&mut self, bytes: &[u8]) {
        let code_points = self.decoder.feed(bytes);
        let normalized = self.preprocessor.feed(&code_points);
        trace!(bytes = bytes.len(), code_points = normalized.len(), "parser fed chunk");
        self.tokenizer
            .feed(normalized.into_iter().filter_map(char::from_u32));
    }

    /// Signal end-of-file, flush any buffered state, and hand back the
    /// sink the tree builder was driving.
    pub fn finish(mut self) -> Sink {
        let tail = self.decoder.feed(&[]);
        let normalized = self.preprocessor.feed(&tail);
        self.tokenizer
            .feed(normalized.into_iter().filter_map(char::from_u32));
        self.tokenizer.end();
        self.tokenizer.unwrap().unwrap()
    }

    pub fn stopped(&self) -> bool {
        self.tokenizer.sink().stopped()
    }
}

/// Parse a complete, in-memory document and return the built DOM.
pub fn parse_document(bytes: &[u8], opts: ParserOpts) -> ArenaSink {
    let mut parser = Parser::new(ArenaSink::new(), opts);
    parser.feed(bytes);
    parser.finish()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dom::NodeData;

    #[test]
    fn parses_a_minimal_document() {
        let sink = parse_document(b"<!doctype html><html><body>hi</body></html>", ParserOpts::default());
        let doc = sink.document();
        let html = doc.children_of(doc.document_id())
            .iter()
            .copied()
            .find(|&id| matches!(&doc.node(id).data, NodeData::Element { .. }))
            .expect("an <html> element");
        assert_eq!(doc.elem_name(html), string_cache::Atom::from("html"));
    }

    #[test]
    fn feed_can_be_called_incrementally() {
        let mut parser = Parser::new(ArenaSink::new(), ParserOpts::default());
        parser.feed(b"<htm");
        parser.feed(b"l><body>");
        parser.feed("ok".as_bytes());
        parser.feed(b"</body></html>");
        let sink = parser.finish();
        assert!(sink.errors().is_empty());
    }
}
