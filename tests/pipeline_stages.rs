//! The decoder and preprocessor composed together, as `Parser::feed` uses
//! them, independent of tokenization.

use html5_core::decoder::Utf8Decoder;
use html5_core::preprocessor::InputPreprocessor;

fn decode_and_normalize(chunks: &[&[u8]]) -> String {
    let mut decoder = Utf8Decoder::new();
    let mut preprocessor = InputPreprocessor::new();
    let mut out = String::new();
    for chunk in chunks {
        let code_points = decoder.feed(chunk);
        for cp in preprocessor.feed(&code_points) {
            out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
        }
    }
    let tail = decoder.feed(&[]);
    for cp in preprocessor.feed(&tail) {
        out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
    }
    out
}

#[test]
fn crlf_is_normalized_across_a_multibyte_chunk_boundary() {
    let input = "line one\r\nline two".as_bytes();
    for split in 0..=input.len() {
        let (a, b) = input.split_at(split);
        assert_eq!(decode_and_normalize(&[a, b]), "line one\nline two");
    }
}

#[test]
fn a_bom_split_across_chunks_is_still_stripped() {
    let bom_and_text = "\u{feff}hello".as_bytes();
    assert_eq!(decode_and_normalize(&[&bom_and_text[..1], &bom_and_text[1..]]), "hello");
}

#[test]
fn invalid_utf8_becomes_a_replacement_character() {
    assert_eq!(decode_and_normalize(&[&[0xFF]]), "\u{FFFD}");
}

#[test]
fn multibyte_characters_split_mid_sequence_still_decode() {
    let bytes = "日本語".as_bytes();
    for split in 1..bytes.len() {
        let (a, b) = bytes.split_at(split);
        assert_eq!(decode_and_normalize(&[a, b]), "日本語");
    }
}
