// grammar.rs - MIT License
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

//! # Grammar
//!
//! The public entry point. A `Grammar<V>` pairs a root [`crate::parser::Parser<V>`]
//! with a token table that starts open (tokens can still be registered) and
//! is frozen on first parse. Freezing swaps the table for an `Rc`, so every
//! [`crate::lexer::Lexer`] built for a subsequent `parse` call shares it
//! without copying.

use std::rc::Rc;

use crate::context::ParsingContext;
use crate::errors::ParseError;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::{RegisteredToken, Token, TokenSpec};

/// Wraps `parser` so that, after it succeeds, the engine also demands
/// `Token::EOF` at the resulting position. Trailing unconsumed input
/// therefore surfaces as an ordinary `MismatchedToken`/`UnmatchedToken`
/// error at the offset just past the consumed prefix, rather than a
/// special-cased length check.
fn terminated<T: 'static>(parser: &Parser<T>) -> Parser<T> {
    let parser = parser.clone();
    Parser::new(move |scope| {
        let value = scope.run(&parser)?;
        scope.try_token(Token::EOF)?;
        Ok(value)
    })
}

enum Registry {
    Open(Vec<RegisteredToken>),
    Frozen(Rc<Vec<RegisteredToken>>),
}

/// Errors that arise from building and driving a [`Grammar`], as distinct
/// from [`ParseError`], which arises from a specific parse attempt.
#[derive(Debug, Fail)]
pub enum GrammarError {
    #[fail(display = "cannot register a token after the grammar has been frozen")]
    Frozen,

    #[fail(display = "invalid token pattern: {}", _0)]
    InvalidPattern(#[fail(cause)] regex::Error),
}

impl From<regex::Error> for GrammarError {
    fn from(e: regex::Error) -> GrammarError {
        GrammarError::InvalidPattern(e)
    }
}

/// A parser tree plus the token table it is built against.
///
/// Tokens must be handed to the root parser before registration, since a
/// [`Parser`] is built once and closes over its [`Token`] handles. The usual
/// pattern is a throwaway `scratch` grammar to mint handles, then a real
/// grammar built from them, registering the identical specs in the same
/// order so the ids line up:
///
/// ```rust
/// use trample::combinators::{map, token};
/// use trample::grammar::Grammar;
/// use trample::parser::Parser;
/// use trample::token::TokenSpec;
///
/// let mut scratch = Grammar::new(Parser::pure(()));
/// let x = scratch.register(TokenSpec::literal("x")).unwrap();
///
/// let mut grammar = Grammar::new(map(token(x), |_| ()));
/// grammar.register(TokenSpec::literal("x")).unwrap();
/// assert!(grammar.parse("x").is_ok());
/// ```
pub struct Grammar<V> {
    registry: Registry,
    root: Parser<V>,
}

impl<V: 'static> Grammar<V> {
    /// Builds a grammar with an empty, still-open token table.
    pub fn new(root: Parser<V>) -> Grammar<V> {
        Grammar {
            registry: Registry::Open(Vec::new()),
            root,
        }
    }

    /// Registers a token definition, returning the stable handle a parser
    /// closes over. Fails once the grammar has been frozen by a prior parse.
    pub fn register(&mut self, spec: TokenSpec) -> Result<Token, GrammarError> {
        match &mut self.registry {
            Registry::Open(tokens) => {
                let id = tokens.len();
                tokens.push(spec.into_registered(id));
                Ok(Token::from_id(id))
            }
            Registry::Frozen(_) => Err(GrammarError::Frozen),
        }
    }

    /// Freezes the token table, sharing it via `Rc` for every future parse.
    /// Idempotent: parsing repeatedly after the first call reuses the same
    /// frozen table rather than re-freezing.
    fn freeze(&mut self) -> Rc<Vec<RegisteredToken>> {
        let frozen = match &mut self.registry {
            Registry::Open(tokens) => Rc::new(std::mem::take(tokens)),
            Registry::Frozen(tokens) => return Rc::clone(tokens),
        };
        self.registry = Registry::Frozen(Rc::clone(&frozen));
        frozen
    }

    /// Parses `input` against an arbitrary `parser`, sharing this grammar's
    /// (frozen on first use) token table. Fails if `parser` fails, or if it
    /// succeeds without consuming the entire input.
    pub fn parse_with<T: 'static>(&mut self, parser: &Parser<T>, input: &str) -> Result<T, ParseError> {
        let tokens = self.freeze();
        let lexer = Lexer::new(input.to_string(), tokens);
        let mut ctx = ParsingContext::new(lexer);
        ctx.run_parser(&terminated(parser))
    }

    /// Parses `input` against the root parser. Shorthand for
    /// `parse_with(&root, input)`.
    pub fn parse(&mut self, input: &str) -> Result<V, ParseError> {
        let root = self.root.clone();
        self.parse_with(&root, input)
    }

    /// Identical to [`Grammar::parse`] under the name the source interface
    /// uses. Rust has no exceptions, so "throwing" here just means returning
    /// `Err` for the caller's own `?` — callers who truly want a panic on
    /// failure should reach for `ParseResultExt::expect_value` themselves.
    pub fn parse_or_throw(&mut self, input: &str) -> Result<V, ParseError> {
        self.parse(input)
    }

    /// Parses, discarding the error on failure.
    pub fn parse_or_none(&mut self, input: &str) -> Option<V> {
        self.parse(input).ok()
    }

    /// Parses, falling back to `default` on failure.
    pub fn parse_or_else<F>(&mut self, input: &str, default: F) -> V
    where
        F: FnOnce(ParseError) -> V,
    {
        match self.parse(input) {
            Ok(value) => value,
            Err(e) => default(e),
        }
    }
}
