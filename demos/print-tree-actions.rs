// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parses a document from stdin (or a file named on the command line) and
//! prints the resulting tree, indented one level per depth, along with any
//! parse errors and the resolved quirks mode.

use std::env;
use std::fs;
use std::io::{self, Read};

use html5_core::dom::{Document, NodeData, NodeId};
use html5_core::{parse_document, ParserOpts};

fn print_tree(doc: &Document, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    match &doc.node(id).data {
        NodeData::Document => println!("{indent}#document"),
        NodeData::Doctype { name, .. } => println!("{indent}<!DOCTYPE {name}>"),
        NodeData::Text(text) => println!("{indent}\"{}\"", text.escape_default()),
        NodeData::Comment(text) => println!("{indent}<!-- {} -->", text.escape_default()),
        NodeData::Element { name, attrs, .. } => {
            let attrs: String = attrs
                .iter()
                .map(|a| format!(" {}=\"{}\"", &a.name.local[..], a.value.escape_default()))
                .collect();
            println!("{indent}<{name}{attrs}>");
        }
    }
    for &child in doc.children_of(id) {
        print_tree(doc, child, depth + 1);
    }
}

fn main() {
    let input = match env::args().nth(1) {
        Some(path) => fs::read(path).expect("failed to read input file"),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).expect("failed to read stdin");
            buf
        }
    };

    let sink = parse_document(&input, ParserOpts::default());

    println!("Quirks mode: {:?}", sink.quirks_mode());
    for err in sink.errors() {
        println!("Parse error: {err}");
    }

    let doc = sink.document();
    print_tree(doc, doc.document_id(), 0);
}
