//! The named character reference table and its incremental searcher.

use html5_core::entity::{lookup_exact, EntitySearcher};

#[test]
fn exact_lookup_finds_a_two_codepoint_entity() {
    let e = lookup_exact("NotEqualTilde;").expect("should be a known entity");
    assert!(e.codepoints.1.is_some());
}

#[test]
fn exact_lookup_rejects_an_unknown_name() {
    assert!(lookup_exact("NotARealEntity;").is_none());
}

#[test]
fn searcher_finds_the_longest_prefix_match() {
    // The legacy, semicolon-less "amp" and the modern "amp;" are both
    // valid entities sharing a prefix: the searcher's longest match should
    // grow from one to the other as more input arrives.
    let mut searcher = EntitySearcher::new('a');
    searcher.next('m');
    assert!(searcher.last_match().is_none());

    searcher.next('p');
    let after_amp = searcher.last_match().map(|e| e.name);
    assert_eq!(after_amp, Some("amp"));

    searcher.next(';');
    let after_amp_semi = searcher.last_match().map(|e| e.name);
    assert_eq!(after_amp_semi, Some("amp;"));
}

#[test]
fn searcher_gives_up_on_an_impossible_prefix() {
    let mut searcher = EntitySearcher::new('z');
    searcher.next('z');
    searcher.next('z');
    assert!(!searcher.need_more_input());
    assert!(searcher.last_match().is_none());
}
