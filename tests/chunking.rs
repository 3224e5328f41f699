//! Property: however a document's bytes are split across `Parser::feed`
//! calls, the resulting DOM is the same. This is the whole reason each
//! pipeline stage is written to buffer partial state across `feed` calls
//! rather than assume it sees a document in one shot.

use quickcheck_macros::quickcheck;

use html5_core::dom::NodeData;
use html5_core::{parse_document, Parser, ParserOpts};
use html5_core::dom::ArenaSink;

const SAMPLE_DOCS: &[&str] = &[
    "<!doctype html><html><head><title>t</title></head><body><p>one<p>two</body></html>",
    "<table><tr><td>a</td><td>b</td></tr></table>",
    "<div><b>bold <i>both</i></b> plain</div>",
    "<ul><li>x<li>y</ul>text after",
    "héllo &amp; wörld 🎉",
];

fn flatten(sink: &ArenaSink) -> Vec<String> {
    let doc = sink.document();
    let mut out = Vec::new();
    fn walk(doc: &html5_core::dom::Document, id: html5_core::dom::NodeId, out: &mut Vec<String>) {
        out.push(match &doc.node(id).data {
            NodeData::Document => "#doc".to_string(),
            NodeData::Doctype { name, .. } => format!("!{name}"),
            NodeData::Text(t) => format!("\"{t}\""),
            NodeData::Comment(t) => format!("<!--{t}-->"),
            NodeData::Element { name, .. } => format!("<{name}>"),
        });
        for &child in doc.children_of(id) {
            walk(doc, child, out);
        }
    }
    walk(doc, doc.document_id(), &mut out);
    out
}

#[quickcheck]
fn chunk_split_does_not_change_the_tree(split_a: u8, split_b: u8, which: u8) -> bool {
    let html = SAMPLE_DOCS[which as usize % SAMPLE_DOCS.len()];
    let bytes = html.as_bytes();
    if bytes.is_empty() {
        return true;
    }

    let whole = parse_document(bytes, ParserOpts::default());
    let whole_shape = flatten(&whole);

    let mut cuts = [split_a as usize % (bytes.len() + 1), split_b as usize % (bytes.len() + 1)];
    cuts.sort_unstable();
    let [first, second] = cuts;

    let mut parser = Parser::new(ArenaSink::new(), ParserOpts::default());
    parser.feed(&bytes[..first]);
    parser.feed(&bytes[first..second]);
    parser.feed(&bytes[second..]);
    let chunked = parser.finish();

    flatten(&chunked) == whole_shape
}
