// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! HTML5 §8.2.2.4 "Preprocessing the input stream".
//!
//! A leading U+FEFF is dropped (only at stream position zero); CR is
//! normalized to LF; an LF that immediately follows a CR is dropped.

const BOM: u32 = 0xFEFF;
const CR: u32 = 0x000D;
const LF: u32 = 0x000A;

/// One-pass newline/BOM normalization over a code point stream.
pub struct InputPreprocessor {
    beginning: bool,
    prev_was_cr: bool,
}

impl Default for InputPreprocessor {
    fn default() -> Self {
        InputPreprocessor::new()
    }
}

impl InputPreprocessor {
    pub fn new() -> Self {
        InputPreprocessor {
            beginning: true,
            prev_was_cr: false,
        }
    }

    /// Process a chunk of code points, in order. Does not accept an
    /// explicit EOF marker: there is no buffered state to flush at EOF.
    pub fn feed(&mut self, input: &[u32]) -> Vec<u32> {
        let mut out = Vec::with_capacity(input.len());
        for &uc in input {
            self.process_one(uc, &mut out);
        }
        out
    }

    fn process_one(&mut self, mut uc: u32, out: &mut Vec<u32>) {
        let was_begin = self.beginning;
        self.beginning = false;

        if was_begin && uc == BOM {
            return;
        }

        if self.prev_was_cr && uc == LF {
            self.prev_was_cr = false;
            return;
        }

        self.prev_was_cr = uc == CR;
        if uc == CR {
            uc = LF;
        }

        out.push(uc);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(chunks: &[&[u32]]) -> Vec<u32> {
        let mut p = InputPreprocessor::new();
        let mut out = Vec::new();
        for chunk in chunks {
            out.extend(p.feed(chunk));
        }
        out
    }

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn strips_leading_bom() {
        let input = [BOM, 'a' as u32];
        assert_eq!(run(&[&input]), cps("a"));
    }

    #[test]
    fn bom_only_stripped_at_start() {
        let input = ['a' as u32, BOM, 'b' as u32];
        assert_eq!(run(&[&input]), vec!['a' as u32, BOM, 'b' as u32]);
    }

    #[test]
    fn cr_becomes_lf() {
        assert_eq!(run(&[&[CR]]), vec![LF]);
    }

    #[test]
    fn crlf_becomes_single_lf() {
        assert_eq!(run(&[&[CR, LF]]), vec![LF]);
    }

    #[test]
    fn crlf_across_chunk_boundary() {
        assert_eq!(run(&[&[CR], &[LF]]), vec![LF]);
    }

    #[test]
    fn lone_lf_preserved() {
        assert_eq!(run(&[&[LF]]), vec![LF]);
    }

    #[test]
    fn chunk_invariance() {
        let input = cps("a\r\nb\rc\nd");
        let whole = run(&[&input]);
        for split in 0..=input.len() {
            let (a, b) = input.split_at(split);
            assert_eq!(run(&[a, b]), whole, "split at {split}");
        }
    }
}
