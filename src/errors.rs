// errors.rs - MIT License
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

//! # Errors module
//!
//! Contains the `ParseError` enum that wraps exactly what went wrong during
//! parsing. Parser bodies generally shouldn't hand-construct most of these
//! themselves — `ParsingScope::try_token` and the combinators in
//! [`crate::combinators`] return them where they make the best sense.
//!
//! Every variant carries an offset, reachable uniformly through
//! [`ParseError::offset`].

use crate::token::{Token, TokenMatch};

/// The outcome of parsing: either a value or a [`ParseError`]. This is the
/// Rust rendering of the source's `ParsedValue(value) | ParseError` sum type.
pub type ParseResult<R> = Result<R, ParseError>;

//Deriving Fail implies implementation of std::error::Error trait.
#[derive(Clone, Debug, Fail)]
pub enum ParseError {
    #[fail(display = "no token matched the input at offset {}", offset)]
    NoMatchingToken { offset: usize },

    #[fail(display = "expected token {:?} but found {:?}", expected, actual)]
    MismatchedToken { expected: Token, actual: TokenMatch },

    #[fail(display = "token {:?} did not match at offset {}", token, offset)]
    UnmatchedToken { token: Token, offset: usize },

    #[fail(
        display = "expected at least {} repetitions, found {} at offset {}",
        expected, actual, offset
    )]
    NotEnoughRepetition {
        expected: usize,
        actual: usize,
        offset: usize,
    },

    #[fail(display = "no viable alternative at offset {}", offset)]
    NoViableAlternative {
        offset: usize,
        causes: Vec<ParseError>,
    },
}

impl ParseError {
    /// The offset every variant carries, per the engine's invariant that no
    /// error is ever reported without a position.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::NoMatchingToken { offset } => *offset,
            ParseError::MismatchedToken { actual, .. } => actual.offset,
            ParseError::UnmatchedToken { offset, .. } => *offset,
            ParseError::NotEnoughRepetition { offset, .. } => *offset,
            ParseError::NoViableAlternative { offset, .. } => *offset,
        }
    }
}

/// Extension trait providing the `getOrThrow` analogue for [`ParseResult`].
pub trait ParseResultExt<R> {
    /// Unwraps a successful parse, panicking with the error's `Display` text
    /// otherwise. Intended for examples, tests, and REPL-style callers that
    /// already know the grammar should accept the input.
    fn expect_value(self) -> R;
}

impl<R> ParseResultExt<R> for ParseResult<R> {
    fn expect_value(self) -> R {
        match self {
            Ok(value) => value,
            Err(err) => panic!("parse failed: {}", err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset_is_exposed_for_every_variant() {
        let errs = vec![
            ParseError::NoMatchingToken { offset: 1 },
            ParseError::MismatchedToken {
                expected: Token::from_id(0),
                actual: TokenMatch {
                    token: Token::from_id(1),
                    offset: 2,
                    length: 1,
                },
            },
            ParseError::UnmatchedToken {
                token: Token::from_id(0),
                offset: 3,
            },
            ParseError::NotEnoughRepetition {
                expected: 2,
                actual: 1,
                offset: 4,
            },
            ParseError::NoViableAlternative {
                offset: 5,
                causes: vec![],
            },
        ];
        let offsets: Vec<usize> = errs.iter().map(ParseError::offset).collect();
        assert_eq!(offsets, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn expect_value_returns_ok_payload() {
        let res: ParseResult<i32> = Ok(42);
        assert_eq!(res.expect_value(), 42);
    }

    #[test]
    #[should_panic(expected = "parse failed")]
    fn expect_value_panics_on_error() {
        let res: ParseResult<i32> = Err(ParseError::NoMatchingToken { offset: 0 });
        res.expect_value();
    }

    // Catch Send/Sync changes, matching the teacher's own boilerplate.
    #[test]
    fn test_parseerror_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ParseError>();
    }

    #[test]
    fn test_parseerror_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<ParseError>();
    }
}
