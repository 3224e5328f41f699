// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! HTML5 §13.2.5.73 "Character reference state" and its numeric/named
//! sub-states, as a re-entrant sub-tokenizer that the main tokenizer steps
//! alongside its own state machine (so it can pause mid-reference if input
//! runs out, same as every other state).

use std::borrow::Cow;

use crate::entity::EntitySearcher;

use super::{Tokenizer, TokenSink};

/// Windows-1252 maps C1 control bytes 0x80-0x9F onto these code points when
/// used as a numeric character reference (HTML5 §13.2.5.80, step 4).
const C1_REPLACEMENTS: [u32; 32] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160,
    0x2039, 0x0152, 0x008D, 0x017D, 0x008F, 0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022,
    0x2013, 0x2014, 0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178,
];

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
enum CrState {
    Begin,
    Octothorpe,
    Numeric(u32), // radix: 10 or 16
    NumericSemicolon,
    Named,
    BogusName,
}

/// What a single `step` call accomplished.
pub enum CharRefStep {
    /// Made progress; call `step` again immediately.
    Progress,
    /// Not enough input to continue right now.
    Stuck,
    /// Finished; `get_result()` has the answer.
    Done,
}

/// The result of tokenizing a character reference: zero (bare `&`), one,
/// or two resulting code points.
pub struct CharRef {
    pub chars: [char; 2],
    pub num_chars: u8,
}

impl CharRef {
    fn none() -> CharRef {
        CharRef {
            chars: ['\0', '\0'],
            num_chars: 0,
        }
    }

    fn one(c: char) -> CharRef {
        CharRef {
            chars: [c, '\0'],
            num_chars: 1,
        }
    }

    fn two(a: char, b: char) -> CharRef {
        CharRef {
            chars: [a, b],
            num_chars: 2,
        }
    }
}

pub struct CharRefTokenizer {
    state: CrState,
    addnl_allowed: Option<char>,
    num: u32,
    num_too_big: bool,
    seen_digit: bool,
    hex_marker_consumed: bool,
    name_buf: String,
    searcher: Option<EntitySearcher>,
    result: Option<CharRef>,
}

impl CharRefTokenizer {
    pub fn new(addnl_allowed: Option<char>) -> CharRefTokenizer {
        CharRefTokenizer {
            state: CrState::Begin,
            addnl_allowed,
            num: 0,
            num_too_big: false,
            seen_digit: false,
            hex_marker_consumed: false,
            name_buf: String::new(),
            searcher: None,
            result: None,
        }
    }

    pub fn get_result(&mut self) -> CharRef {
        self.result.take().unwrap_or_else(CharRef::none)
    }

    pub fn step<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        if self.result.is_some() {
            return CharRefStep::Done;
        }

        match self.state {
            CrState::Begin => self.do_begin(tok),
            CrState::Octothorpe => self.do_octothorpe(tok),
            CrState::Numeric(radix) => self.do_numeric(tok, radix),
            CrState::NumericSemicolon => self.do_numeric_semicolon(tok),
            CrState::Named => self.do_named(tok),
            CrState::BogusName => self.do_bogus_name(tok),
        }
    }

    fn do_begin<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        match tok.peek() {
            None => CharRefStep::Stuck,
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') | Some('<') | Some('&') => {
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
            Some(c) if Some(c) == self.addnl_allowed => {
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
            Some('#') => {
                tok.discard_char();
                self.state = CrState::Octothorpe;
                CharRefStep::Progress
            }
            Some(_) => {
                self.state = CrState::Named;
                CharRefStep::Progress
            }
        }
    }

    fn do_octothorpe<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        match tok.peek() {
            None => CharRefStep::Stuck,
            Some('x') | Some('X') => {
                tok.discard_char();
                self.state = CrState::Numeric(16);
                CharRefStep::Progress
            }
            _ => {
                self.state = CrState::Numeric(10);
                CharRefStep::Progress
            }
        }
    }

    fn do_numeric<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>, radix: u32) -> CharRefStep {
        match tok.peek() {
            Some(c) if c.is_digit(radix) => {
                tok.discard_char();
                self.seen_digit = true;
                if !self.num_too_big {
                    match self.num.checked_mul(radix).and_then(|n| n.checked_add(c.to_digit(radix).unwrap())) {
                        Some(n) => self.num = n,
                        None => self.num_too_big = true,
                    }
                }
                CharRefStep::Progress
            }
            _ if !self.seen_digit => {
                tok.emit_error(Cow::Borrowed("numeric character reference with no digits"));
                tok.unconsume(vec!['#']);
                if radix == 16 {
                    tok.unconsume(vec!['x']);
                }
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
            None => CharRefStep::Stuck,
            _ => {
                self.state = CrState::NumericSemicolon;
                CharRefStep::Progress
            }
        }
    }

    fn do_numeric_semicolon<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        match tok.peek() {
            None => CharRefStep::Stuck,
            Some(';') => {
                tok.discard_char();
                self.finish_numeric(tok);
                CharRefStep::Done
            }
            _ => {
                tok.emit_error(Cow::Borrowed("numeric character reference without a trailing semicolon"));
                self.finish_numeric(tok);
                CharRefStep::Done
            }
        }
    }

    fn finish_numeric<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) {
        let n = self.num;
        let resolved = if self.num_too_big {
            tok.emit_error(Cow::Borrowed("numeric character reference outside Unicode range"));
            0xFFFD
        } else if (0x80..=0x9F).contains(&n) {
            tok.emit_error(Cow::Borrowed("numeric character reference maps to a Windows-1252 control"));
            C1_REPLACEMENTS[(n - 0x80) as usize]
        } else if n == 0 || n > 0x10FFFF || (0xD800..=0xDFFF).contains(&n) {
            tok.emit_error(Cow::Borrowed("numeric character reference outside Unicode range"));
            0xFFFD
        } else {
            n
        };

        let c = char::from_u32(resolved).unwrap_or('\u{FFFD}');
        self.result = Some(CharRef::one(c));
    }

    fn do_named<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        if self.searcher.is_none() {
            let c = match tok.peek() {
                None => return CharRefStep::Stuck,
                Some(c) => c,
            };
            if !(c.is_ascii_alphanumeric()) {
                self.state = CrState::BogusName;
                return CharRefStep::Progress;
            }
            tok.discard_char();
            self.name_buf.push(c);
            self.searcher = Some(EntitySearcher::new(c));
            return CharRefStep::Progress;
        }

        let searcher = self.searcher.as_ref().unwrap();
        if !searcher.need_more_input() {
            return self.finish_named(tok);
        }

        match tok.peek() {
            None => CharRefStep::Stuck,
            Some(c) => {
                tok.discard_char();
                self.name_buf.push(c);
                self.searcher.as_mut().unwrap().next(c);
                CharRefStep::Progress
            }
        }
    }

    fn finish_named<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        let searcher = self.searcher.take().unwrap();
        match searcher.last_match() {
            None => {
                tok.emit_error(Cow::Borrowed("unknown named character reference"));
                tok.unconsume(self.name_buf.chars().collect());
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
            Some(entity) => {
                let matched_len = entity.name.len();
                if matched_len < self.name_buf.len() {
                    // Unconsume the characters that weren't part of the match.
                    let leftover: Vec<char> = self.name_buf.chars().skip(matched_len).collect();
                    tok.unconsume(leftover);
                }

                let in_attribute = self.addnl_allowed.is_some();
                let matched_no_semicolon = !entity.name.ends_with(';');
                if in_attribute && matched_no_semicolon {
                    // "ambiguous ampersand": in an attribute value, a
                    // legacy no-semicolon name followed by '=' or an
                    // alphanumeric is left alone (HTML5 §13.2.5.73).
                    let next = tok.peek();
                    let ambiguous = match next {
                        Some('=') => true,
                        Some(c) => c.is_ascii_alphanumeric(),
                        None => false,
                    };
                    if ambiguous {
                        tok.unconsume(entity.name.chars().collect());
                        self.result = Some(CharRef::none());
                        return CharRefStep::Done;
                    }
                }
                if matched_no_semicolon {
                    tok.emit_error(Cow::Borrowed(
                        "named character reference missing trailing semicolon",
                    ));
                }

                self.result = Some(match entity.codepoints {
                    (a, None) => CharRef::one(char::from_u32(a).unwrap_or('\u{FFFD}')),
                    (a, Some(b)) => CharRef::two(
                        char::from_u32(a).unwrap_or('\u{FFFD}'),
                        char::from_u32(b).unwrap_or('\u{FFFD}'),
                    ),
                });
                CharRefStep::Done
            }
        }
    }

    fn do_bogus_name<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) -> CharRefStep {
        match tok.peek() {
            None => CharRefStep::Stuck,
            Some(c) if c.is_ascii_alphanumeric() => {
                tok.discard_char();
                self.name_buf.push(c);
                CharRefStep::Progress
            }
            Some(';') => {
                tok.discard_char();
                tok.emit_error(Cow::Borrowed("unknown named character reference"));
                tok.unconsume(self.name_buf.chars().collect());
                tok.unconsume(vec![';']);
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
            _ => {
                tok.unconsume(self.name_buf.chars().collect());
                self.result = Some(CharRef::none());
                CharRefStep::Done
            }
        }
    }

    pub fn end_of_file<Sink: TokenSink>(&mut self, tok: &mut Tokenizer<Sink>) {
        loop {
            match self.step(tok) {
                CharRefStep::Done => return,
                CharRefStep::Progress => continue,
                CharRefStep::Stuck => {
                    // EOF reached mid-reference: treat as "no match" per state.
                    match self.state {
                        CrState::Numeric(_) | CrState::NumericSemicolon if self.seen_digit => {
                            self.finish_numeric(tok);
                        }
                        CrState::Named if self.searcher.is_some() => {
                            self.finish_named(tok);
                        }
                        _ => {
                            tok.unconsume(self.name_buf.chars().collect());
                            self.result = Some(CharRef::none());
                        }
                    }
                    return;
                }
            }
        }
    }
}
