// scope.rs - MIT License
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

//! # ParsingScope
//!
//! The capability set a [`crate::parser::Parser`] body is handed. It is
//! deliberately small: `run`, `try_parse`, `try_token`, `fail`, plus the
//! read-only queries `current_offset`, `current_token`, `skip`, and
//! `check_present`. Every combinator in [`crate::combinators`] is written
//! purely in terms of these eight methods.
//!
//! `try_parse` is the one that matters: it snapshots the engine's position,
//! runs a parser body as a single native call, and restores the snapshot on
//! failure. No continuation is captured and no heap allocation happens per
//! backtrack; the only cost is an integer copy.

use log::trace;

use crate::context::ParsingContext;
use crate::errors::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::{Token, TokenMatch};

/// Borrowed handle into a [`ParsingContext`] for the duration of one
/// `Parser` invocation.
pub struct ParsingScope<'a> {
    ctx: &'a mut ParsingContext,
}

impl<'a> ParsingScope<'a> {
    pub(crate) fn new(ctx: &'a mut ParsingContext) -> ParsingScope<'a> {
        ParsingScope { ctx }
    }

    /// Runs `parser` against this scope directly, propagating failure. Use
    /// this for a sub-parser that must succeed for the caller to succeed —
    /// if it fails, position is left wherever it failed (the caller's own
    /// `try_parse`, if any, is what rewinds).
    pub fn run<R>(&mut self, parser: &Parser<R>) -> ParseResult<R> {
        let mut inner = ParsingScope::new(self.ctx);
        parser.invoke(&mut inner)
    }

    /// Runs `parser` as a backtracking unit: on success, position advances
    /// normally; on failure, position is restored to exactly its value at
    /// entry and the error is returned for the caller to inspect or ignore.
    ///
    /// This is the engine's only backtrack primitive. It costs one saved
    /// `usize` and one native call — no matter how deep `parser` itself
    /// recurses.
    pub fn try_parse<R>(&mut self, parser: &Parser<R>) -> ParseResult<R> {
        let saved = self.ctx.position;
        self.ctx.backtrack_depth += 1;
        let result = {
            let mut inner = ParsingScope::new(self.ctx);
            parser.invoke(&mut inner)
        };
        self.ctx.backtrack_depth -= 1;
        if result.is_err() {
            trace!(
                "try_parse: restoring position {} -> {}",
                self.ctx.position, saved
            );
            self.ctx.position = saved;
        }
        result
    }

    /// Consumes exactly `token` at the current position, or fails with
    /// [`ParseError::UnmatchedToken`]/[`ParseError::MismatchedToken`] without
    /// moving position.
    pub fn try_token(&mut self, token: Token) -> ParseResult<TokenMatch> {
        let offset = self.ctx.position;
        let found = self
            .ctx
            .lexer
            .find_match(offset)
            .ok_or(ParseError::UnmatchedToken { token, offset })?;
        if found.token == token {
            self.ctx.position = found.offset + found.length;
            Ok(found)
        } else {
            Err(ParseError::MismatchedToken {
                expected: token,
                actual: found,
            })
        }
    }

    /// Fails unconditionally with `error`, consuming nothing. A plain `Err`
    /// return from a closure works just as well; this exists so combinator
    /// code reads like the other seven scope operations.
    pub fn fail<R>(&mut self, error: ParseError) -> ParseResult<R> {
        Err(error)
    }

    /// The engine's current offset into the input.
    pub fn current_offset(&self) -> usize {
        self.ctx.position
    }

    /// The next surfaced token without consuming it, or `None` if no token
    /// matches at the current position (distinct from EOF, which is itself
    /// a token).
    pub fn current_token(&self) -> Option<TokenMatch> {
        self.ctx.lexer.find_match(self.ctx.position)
    }

    /// Advances over `token` if it matches at the current position, without
    /// failing when it does not. Returns whether a skip happened.
    pub fn skip(&mut self, token: Token) -> bool {
        match self.ctx.lexer.find_match(self.ctx.position) {
            Some(tm) if tm.token == token => {
                self.ctx.position = tm.offset + tm.length;
                true
            }
            _ => false,
        }
    }

    /// True if `token` matches at the current position, without consuming.
    pub fn check_present(&self, token: Token) -> bool {
        self.current_token()
            .map(|tm| tm.token == token)
            .unwrap_or(false)
    }

    /// The text a [`TokenMatch`] covers, read from this session's own input.
    pub fn text_of(&self, tm: &TokenMatch) -> &str {
        self.ctx.lexer.text(tm)
    }

    /// True if the current position is at end of input (modulo any ignored
    /// tokens still left to skip).
    pub fn at_eof(&self) -> bool {
        self.current_token().map(|tm| tm.token.is_eof()).unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::context::ParsingContext;
    use crate::lexer::Lexer;
    use crate::token::TokenSpec;
    use std::rc::Rc;

    fn context_with(input: &str, specs: Vec<TokenSpec>) -> ParsingContext {
        let tokens = Rc::new(
            specs
                .into_iter()
                .enumerate()
                .map(|(id, s)| s.into_registered(id))
                .collect::<Vec<_>>(),
        );
        ParsingContext::new(Lexer::new(input.to_string(), tokens))
    }

    #[test]
    fn try_parse_restores_position_on_failure() {
        let mut ctx = context_with("ab", vec![TokenSpec::literal("x")]);
        let mut scope = ParsingScope::new(&mut ctx);
        let p: Parser<()> = Parser::new(|s| s.try_token(Token::from_id(0)).map(|_| ()));
        assert!(scope.try_parse(&p).is_err());
        assert_eq!(scope.current_offset(), 0);
    }

    #[test]
    fn try_token_advances_position_on_success() {
        let mut ctx = context_with("ab", vec![TokenSpec::literal("ab")]);
        let mut scope = ParsingScope::new(&mut ctx);
        assert!(scope.try_token(Token::from_id(0)).is_ok());
        assert_eq!(scope.current_offset(), 2);
    }

    #[test]
    fn try_token_does_not_move_position_on_mismatch() {
        let mut ctx = context_with("ab", vec![TokenSpec::literal("ab"), TokenSpec::literal("x")]);
        let mut scope = ParsingScope::new(&mut ctx);
        let err = scope.try_token(Token::from_id(1));
        match err {
            Err(ParseError::MismatchedToken { expected, .. }) => {
                assert_eq!(expected, Token::from_id(1));
            }
            other => panic!("expected MismatchedToken, got {:?}", other),
        }
        assert_eq!(scope.current_offset(), 0);
    }

    #[test]
    fn try_token_reports_unmatched_when_the_lexer_finds_nothing_at_all() {
        // No registered token matches "z" anywhere, unlike the mismatch
        // case above where a different token matches. This must produce
        // UnmatchedToken, not NoMatchingToken (that variant is reserved for
        // callers that don't name an expected token, like `current_token`).
        let mut ctx = context_with("z", vec![TokenSpec::literal("x")]);
        let mut scope = ParsingScope::new(&mut ctx);
        match scope.try_token(Token::from_id(0)) {
            Err(ParseError::UnmatchedToken { token, offset }) => {
                assert_eq!(token, Token::from_id(0));
                assert_eq!(offset, 0);
            }
            other => panic!("expected UnmatchedToken, got {:?}", other),
        }
        assert_eq!(scope.current_offset(), 0);
    }

    #[test]
    fn skip_advances_only_on_match() {
        let mut ctx = context_with("xy", vec![TokenSpec::literal("x")]);
        let mut scope = ParsingScope::new(&mut ctx);
        assert!(scope.skip(Token::from_id(0)));
        assert_eq!(scope.current_offset(), 1);
        assert!(!scope.skip(Token::from_id(0)));
        assert_eq!(scope.current_offset(), 1);
    }

    #[test]
    fn check_present_does_not_consume() {
        let mut ctx = context_with("x", vec![TokenSpec::literal("x")]);
        let scope = ParsingScope::new(&mut ctx);
        assert!(scope.check_present(Token::from_id(0)));
        assert_eq!(scope.current_offset(), 0);
    }

    #[test]
    fn at_eof_is_true_on_empty_input() {
        let mut ctx = context_with("", vec![]);
        let scope = ParsingScope::new(&mut ctx);
        assert!(scope.at_eof());
    }
}
