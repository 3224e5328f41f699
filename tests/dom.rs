//! Exercises the arena DOM directly, independent of the parser: mutation
//! primitives, hierarchy validation, and the observer channel.

use std::sync::{Arc, Mutex};

use html5_core::dom::document::Document;
use html5_core::dom::{NodeData, NodeId, NodeObserver};
use html5_core::error::DomException;
use string_cache::Atom;

#[test]
fn insert_before_rejects_a_sibling_with_no_parent() {
    let mut doc = Document::new();
    let a = doc.create_element(Atom::from("div"), vec![]);
    let b = doc.create_element(Atom::from("span"), vec![]);
    assert_eq!(doc.insert_before(a, b), Err(DomException::NotFound));
}

#[test]
fn insert_before_places_the_node_at_the_right_position() {
    let mut doc = Document::new();
    let parent = doc.create_element(Atom::from("ul"), vec![]);
    doc.append(doc.document_id(), parent).unwrap();
    let first = doc.create_element(Atom::from("li"), vec![]);
    let third = doc.create_element(Atom::from("li"), vec![]);
    doc.append(parent, first).unwrap();
    doc.append(parent, third).unwrap();
    let second = doc.create_element(Atom::from("li"), vec![]);
    doc.insert_before(third, second).unwrap();
    assert_eq!(doc.children_of(parent), &[first, second, third]);
}

#[test]
fn append_moves_a_node_already_attached_elsewhere() {
    let mut doc = Document::new();
    let a = doc.create_element(Atom::from("div"), vec![]);
    let b = doc.create_element(Atom::from("div"), vec![]);
    let child = doc.create_element(Atom::from("span"), vec![]);
    doc.append(doc.document_id(), a).unwrap();
    doc.append(doc.document_id(), b).unwrap();
    doc.append(a, child).unwrap();
    assert_eq!(doc.children_of(a), &[child]);
    doc.append(b, child).unwrap();
    assert!(doc.children_of(a).is_empty());
    assert_eq!(doc.children_of(b), &[child]);
}

#[test]
fn set_attribute_rejects_an_empty_name() {
    let mut doc = Document::new();
    let el = doc.create_element(Atom::from("div"), vec![]);
    assert_eq!(
        doc.set_attribute(el, Atom::from(""), "x".to_string()),
        Err(DomException::InvalidCharacter)
    );
}

#[test]
fn set_attribute_on_a_non_element_is_unsupported() {
    let mut doc = Document::new();
    let text = doc.create_text("hi".to_string());
    assert_eq!(
        doc.set_attribute(text, Atom::from("class"), "x".to_string()),
        Err(DomException::NotSupported)
    );
}

#[derive(Default)]
struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

impl NodeObserver for Recorder {
    fn on_inserted_to(&mut self, node: NodeId, parent: NodeId) {
        self.log.lock().unwrap().push(format!("inserted {:?} into {:?}", node, parent));
    }

    fn on_removed_from(&mut self, node: NodeId, parent: NodeId) {
        self.log.lock().unwrap().push(format!("removed {:?} from {:?}", node, parent));
    }
}

#[test]
fn observers_fire_synchronously_on_insert_and_remove() {
    let mut doc = Document::new();
    let parent = doc.create_element(Atom::from("div"), vec![]);
    doc.append(doc.document_id(), parent).unwrap();

    let child = doc.create_element(Atom::from("span"), vec![]);
    let log = Arc::new(Mutex::new(Vec::new()));
    doc.node_mut(child).observers.push(Box::new(Recorder { log: log.clone() }));

    doc.append(parent, child).unwrap();
    doc.remove_child(parent, child).unwrap();

    let entries = log.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("inserted"));
    assert!(entries[1].starts_with("removed"));
}

#[test]
fn doctype_node_carries_its_three_identifiers() {
    let mut doc = Document::new();
    let doctype = doc.create_doctype("html".to_string(), "".to_string(), "".to_string());
    doc.append(doc.document_id(), doctype).unwrap();
    match &doc.node(doctype).data {
        NodeData::Doctype { name, public_id, system_id } => {
            assert_eq!(name, "html");
            assert_eq!(public_id, "");
            assert_eq!(system_id, "");
        }
        _ => panic!("expected a doctype node"),
    }
}
