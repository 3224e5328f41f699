// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! HTML5 §2.4 "Character encodings": the byte decoder.
//!
//! Encoding sniffing is out of scope (UTF-8 is assumed); this module
//! implements the error-recovery rules of the UTF-8 decoding algorithm
//! byte-for-byte, including overlong and surrogate rejection.

use tracing::trace;

const REPLACEMENT_CHAR: u32 = 0xFFFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Begin,
    Continuation,
}

/// Decodes a byte stream into Unicode scalar values, one chunk at a time.
///
/// An empty chunk passed to [`Utf8Decoder::feed`] means end-of-file: any
/// incomplete sequence still buffered is replaced by a single U+FFFD.
pub struct Utf8Decoder {
    state: DecodeState,
    bytes_left: u8,
    multibyte_size: u8,
    incomplete: u32,
    out: Vec<u32>,
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Utf8Decoder::new()
    }
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Utf8Decoder {
            state: DecodeState::Begin,
            bytes_left: 0,
            multibyte_size: 0,
            incomplete: 0,
            out: Vec::new(),
        }
    }

    /// Feed a chunk of bytes. An empty slice signals end-of-file.
    ///
    /// Returns the scalar values (and internal-sentinel replacements)
    /// produced from this chunk; any partial multi-byte sequence remains
    /// buffered across calls.
    pub fn feed(&mut self, input: &[u8]) -> Vec<u32> {
        for &b in input {
            self.process_one(b);
        }

        if input.is_empty() && self.state == DecodeState::Continuation {
            trace!("utf8 decoder: eof with incomplete sequence, emitting U+FFFD");
            self.out.push(REPLACEMENT_CHAR);
            self.state = DecodeState::Begin;
        }

        std::mem::take(&mut self.out)
    }

    fn process_one(&mut self, b: u8) {
        match self.state {
            DecodeState::Begin => self.process_begin(b),
            DecodeState::Continuation => self.process_continuation(b),
        }
    }

    fn process_begin(&mut self, b: u8) {
        if b & 0x80 == 0x00 {
            self.out.push(b as u32);
            return;
        }

        if b & 0xE0 == 0xC0 {
            self.state = DecodeState::Continuation;
            self.bytes_left = 1;
            self.multibyte_size = 2;
            self.incomplete = ((b & 0x1F) as u32) << 6;
            return;
        }

        if b & 0xF0 == 0xE0 {
            self.state = DecodeState::Continuation;
            self.bytes_left = 2;
            self.multibyte_size = 3;
            self.incomplete = ((b & 0x0F) as u32) << 12;
            return;
        }

        if b & 0xF8 == 0xF0 {
            self.state = DecodeState::Continuation;
            self.bytes_left = 3;
            self.multibyte_size = 4;
            self.incomplete = ((b & 0x07) as u32) << 18;
            return;
        }

        if b & 0xFC == 0xF8 {
            // Five-byte lead byte: always invalid, but we still have to
            // consume its continuation bytes before recovering.
            self.state = DecodeState::Continuation;
            self.bytes_left = 4;
            self.multibyte_size = 5;
            self.incomplete = 0;
            return;
        }

        if b & 0xFE == 0xFC {
            self.state = DecodeState::Continuation;
            self.bytes_left = 5;
            self.multibyte_size = 6;
            self.incomplete = 0;
            return;
        }

        // 0x80-0xBF with no lead byte, or 0xFE/0xFF.
        self.out.push(REPLACEMENT_CHAR);
    }

    fn process_continuation(&mut self, b: u8) {
        if b & 0xC0 == 0x80 {
            self.bytes_left -= 1;
            self.incomplete |= ((b & 0x3F) as u32) << (self.bytes_left as u32 * 6);

            if self.bytes_left == 0 {
                let valid = self.incomplete <= 0x10FFFF
                    && !(0xD800..=0xDFFF).contains(&self.incomplete)
                    && !matches!(self.multibyte_size, 5 | 6)
                    && self.in_shortest_form_range();

                self.out.push(if valid { self.incomplete } else { REPLACEMENT_CHAR });
                self.state = DecodeState::Begin;
            }
            return;
        }

        // Not a continuation byte: the partial sequence is replaced by
        // one U+FFFD and this byte is reprocessed from the start state.
        self.state = DecodeState::Begin;
        self.out.push(REPLACEMENT_CHAR);
        self.process_one(b);
    }

    fn in_shortest_form_range(&self) -> bool {
        let (min, max) = match self.multibyte_size {
            2 => (0x0080, 0x07FF),
            3 => (0x0800, 0xFFFF),
            4 => (0x10000, 0x1F_FFFF),
            _ => return false,
        };
        self.incomplete >= min && self.incomplete <= max
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<u32> {
        let mut d = Utf8Decoder::new();
        let mut out = d.feed(bytes);
        out.extend(d.feed(&[]));
        out
    }

    #[test]
    fn ascii_roundtrip() {
        assert_eq!(decode(b"foo"), vec!['f' as u32, 'o' as u32, 'o' as u32]);
    }

    #[test]
    fn multi_byte_roundtrip() {
        assert_eq!(decode("héllo".as_bytes()), "héllo".chars().map(|c| c as u32).collect::<Vec<_>>());
    }

    #[test]
    fn overlong_two_byte_is_replaced() {
        // 0xC0 0xAF is an overlong encoding of '/'.
        assert_eq!(decode(&[0xC0, 0xAF]), vec![0xFFFD]);
    }

    #[test]
    fn lone_continuation_byte_is_replaced() {
        assert_eq!(decode(&[0x80]), vec![0xFFFD]);
    }

    #[test]
    fn surrogate_is_replaced() {
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), vec![0xFFFD]);
    }

    #[test]
    fn truncated_sequence_at_eof() {
        assert_eq!(decode(&[0xE2, 0x82]), vec![0xFFFD]);
    }

    #[test]
    fn five_byte_lead_is_replaced() {
        assert_eq!(decode(&[0xF8, 0x80, 0x80, 0x80, 0x80]), vec![0xFFFD]);
    }

    #[test]
    fn chunk_invariance() {
        let input = "a<b>η&amp;🎉".as_bytes();
        let mut whole = Utf8Decoder::new();
        let mut one_shot = whole.feed(input);
        one_shot.extend(whole.feed(&[]));

        for split in 0..=input.len() {
            let (a, b) = input.split_at(split);
            let mut d = Utf8Decoder::new();
            let mut out = d.feed(a);
            out.extend(d.feed(b));
            out.extend(d.feed(&[]));
            assert_eq!(out, one_shot, "split at {split} produced different output");
        }
    }
}
