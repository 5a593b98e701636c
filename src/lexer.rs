// lexer.rs - MIT License
//  MIT License
//  Copyright (c) 2018 Tyler Laing (ZerothLaw)
//
//  Permission is hereby granted, free of charge, to any person obtaining a copy
//  of this software and associated documentation files (the "Software"), to deal
//  in the Software without restriction, including without limitation the rights
//  to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//  copies of the Software, and to permit persons to whom the Software is
//  furnished to do so, subject to the following conditions:
//
//  The above copyright notice and this permission notice shall be included in all
//  copies or substantial portions of the Software.
//
//  THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//  IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//  FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//  AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//  LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//  OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//  SOFTWARE.

//! # Lexer
//!
//! Priority-ordered tokenization: non-ignored tokens are tried in
//! registration order and the first match wins, with ignored-token skipping
//! and per-offset memoization layered on top. Registration order is the
//! only tie-break — this crate does not hunt for the longest match across
//! distinct tokens.
//!
//! The lexer owns its input outright (no borrowed `&str`) so that
//! [`crate::context::ParsingContext`] and everything built on top of it only
//! ever need a single lifetime parameter.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

use crate::token::{RegisteredToken, Token, TokenMatch};

/// Tokenizes on demand against a fixed, registered set of terminals.
pub struct Lexer {
    input: String,
    tokens: Rc<Vec<RegisteredToken>>,
    cache: RefCell<HashMap<usize, Option<TokenMatch>>>,
}

impl Lexer {
    pub(crate) fn new(input: String, tokens: Rc<Vec<RegisteredToken>>) -> Lexer {
        Lexer {
            input,
            tokens,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// The full source text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text a [`TokenMatch`] covers, sliced out of this lexer's own copy
    /// of the input.
    pub fn text(&self, tm: &TokenMatch) -> &str {
        &self.input[tm.offset..tm.offset + tm.length]
    }

    /// Finds the next surfaced (non-ignored) token at or after `offset`,
    /// skipping any run of ignored tokens first. Returns `Token::EOF` once
    /// skipping lands at `|input|`.
    ///
    /// Memoizes by the offset *after* ignored-token skipping, since that is
    /// the only offset `find_match` is ever asked about more than once
    /// (`try_parse` always restores to a previously-visited position).
    pub fn find_match(&self, offset: usize) -> Option<TokenMatch> {
        let start = self.skip_ignored(offset);

        if let Some(cached) = self.cache.borrow().get(&start) {
            return cached.clone();
        }

        let result = if start >= self.input.len() {
            Some(TokenMatch {
                token: Token::EOF,
                offset: start,
                length: 0,
            })
        } else {
            self.find_at(start)
        };

        trace!("lexer: offset {} -> {:?}", start, result);
        self.cache.borrow_mut().insert(start, result.clone());
        result
    }

    /// Repeatedly consumes the longest ignored-token match starting at
    /// `offset`, returning the first offset that is either end-of-input or
    /// not the start of any ignored token's match.
    fn skip_ignored(&self, offset: usize) -> usize {
        let mut pos = offset;
        loop {
            if pos >= self.input.len() {
                return pos;
            }
            let skip = self
                .tokens
                .iter()
                .filter(|rt| rt.ignored)
                .filter_map(|rt| rt.try_match(&self.input, pos))
                .max();
            match skip {
                Some(len) if len > 0 => pos += len,
                _ => return pos,
            }
        }
    }

    /// Finds the surfaced match at `offset`, trying non-ignored tokens in
    /// registration order and taking the first that matches. Registration
    /// order is the priority order; this crate does not define longest-match
    /// across distinct tokens the way the ignored-token skip loop does.
    fn find_at(&self, offset: usize) -> Option<TokenMatch> {
        self.tokens
            .iter()
            .filter(|rt| !rt.ignored)
            .find_map(|rt| rt.try_match(&self.input, offset).map(|length| (rt.id, length)))
            .map(|(id, length)| TokenMatch {
                token: Token::from_id(id),
                offset,
                length,
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::TokenSpec;

    fn registered(specs: Vec<TokenSpec>) -> Rc<Vec<RegisteredToken>> {
        Rc::new(
            specs
                .into_iter()
                .enumerate()
                .map(|(id, spec)| spec.into_registered(id))
                .collect(),
        )
    }

    #[test]
    fn registration_order_wins_even_over_a_longer_later_match() {
        // "=" is registered first and matches at offset 0 just as well as
        // "==" does; registration order is the priority order, so the
        // shorter, earlier token wins regardless of the longer token also
        // matching here. The lexer does not hunt for the longest match
        // across distinct tokens.
        let tokens = registered(vec![TokenSpec::literal("="), TokenSpec::literal("==")]);
        let lexer = Lexer::new("==x".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert_eq!(m.length, 1);
        assert_eq!(m.token, Token::from_id(0));
    }

    #[test]
    fn equal_length_matches_prefer_earlier_registration() {
        let tokens = registered(vec![
            TokenSpec::literal("if"),
            TokenSpec::regex(r"[a-z]+").unwrap(),
        ]);
        let lexer = Lexer::new("if".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert_eq!(m.token, Token::from_id(0));
    }

    #[test]
    fn a_later_token_still_wins_when_earlier_tokens_do_not_match_here() {
        let tokens = registered(vec![TokenSpec::literal("=="), TokenSpec::literal("=")]);
        let lexer = Lexer::new("=x".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert_eq!(m.length, 1);
        assert_eq!(m.token, Token::from_id(1));
    }

    #[test]
    fn ignored_tokens_are_skipped_transparently() {
        let tokens = registered(vec![
            TokenSpec::literal("x"),
            TokenSpec::regex(r"\s+").unwrap().ignored(),
        ]);
        let lexer = Lexer::new("   x".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert_eq!(m.token, Token::from_id(0));
        assert_eq!(m.offset, 3);
    }

    #[test]
    fn end_of_input_after_skipping_ignored_is_eof() {
        let tokens = registered(vec![TokenSpec::regex(r"\s+").unwrap().ignored()]);
        let lexer = Lexer::new("   ".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert!(m.token.is_eof());
        assert_eq!(m.offset, 3);
    }

    #[test]
    fn no_match_returns_none_when_not_at_eof() {
        let tokens = registered(vec![TokenSpec::literal("x")]);
        let lexer = Lexer::new("y".to_string(), tokens);
        assert!(lexer.find_match(0).is_none());
    }

    #[test]
    fn text_reads_back_the_matched_slice() {
        let tokens = registered(vec![TokenSpec::regex(r"\d+").unwrap()]);
        let lexer = Lexer::new("42".to_string(), tokens);
        let m = lexer.find_match(0).unwrap();
        assert_eq!(lexer.text(&m), "42");
    }

    #[test]
    fn repeated_queries_at_the_same_offset_agree() {
        let tokens = registered(vec![TokenSpec::regex(r"\d+").unwrap()]);
        let lexer = Lexer::new("42 43".to_string(), tokens);
        let first = lexer.find_match(0);
        let second = lexer.find_match(0);
        assert_eq!(first, second);
    }
}
