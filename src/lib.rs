// lib.rs - MIT License
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

//! # Introduction
//!
//! This crate implements a general-purpose backtracking parser-combinator
//! engine together with the lexer it depends on.
//!
//! A grammar is a set of registered [`token::Token`]s plus a tree of
//! [`parser::Parser`]s built out of a handful of primitives exposed through
//! [`scope::ParsingScope`]: `run`, `try_parse`, `try_token`, and `fail`.
//! Everything else — `map`, `or`, `many`, `separated`, `left_associative`,
//! `recursive` — is a thin wrapper over those primitives, found in
//! [`combinators`].
//!
//! The hard part is the backtracking engine in [`context`] and [`scope`]:
//! `try_parse` installs a backtrack point in O(1) and rolls position back
//! exactly to its value at entry on failure, and the `or` combinator chains
//! any number of alternatives without growing native stack per alternative.
//! See `SPEC_FULL.md` in the repository root for the full design rationale.
//!
//! ## Example
//!
//! ```rust
//! use trample::combinators::{left_associative, map, token};
//! use trample::grammar::Grammar;
//! use trample::parser::Parser;
//! use trample::token::TokenSpec;
//!
//! // Tokens first, so the parser tree below can close over their handles.
//! let mut scratch = Grammar::new(Parser::pure(()));
//! let int_tok = scratch.register(TokenSpec::regex(r"\d+").unwrap()).unwrap();
//! let plus_tok = scratch.register(TokenSpec::literal("+")).unwrap();
//! scratch.register(TokenSpec::regex(r"\s+").unwrap().ignored()).unwrap();
//!
//! let number = map(token(int_tok), |tm| {
//!     // real bodies read `tm` back through `ParsingScope::text_of`
//!     tm.length as i64
//! });
//! let root = left_associative(number, token(plus_tok), |l, _, r| l + r);
//!
//! let mut grammar = Grammar::new(root);
//! grammar.register(TokenSpec::regex(r"\d+").unwrap()).unwrap();
//! grammar.register(TokenSpec::literal("+")).unwrap();
//! grammar.register(TokenSpec::regex(r"\s+").unwrap().ignored()).unwrap();
//! assert!(grammar.parse("1 + 2").is_ok());
//! ```
//!
//! See `demos/sum_grammar.rs` for the full worked example, including reading
//! matched text back out through the lexer to parse real integers.

#[macro_use]
extern crate failure;

pub mod combinators;
pub mod context;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod token;
