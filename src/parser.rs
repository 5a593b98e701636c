// parser.rs - MIT License
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

//! # Parser
//!
//! A `Parser<R>` is a reference-counted closure from a [`crate::scope::ParsingScope`]
//! to a [`crate::errors::ParseResult<R>`]. It is the unit every combinator in
//! [`crate::combinators`] builds and consumes; a `Grammar` is just a `Parser`
//! plus a frozen token table.
//!
//! `Parser` is cheap to clone (an `Rc` bump) so the same sub-parser can be
//! shared across many places in a grammar tree, which is what makes
//! `recursive()` possible without duplicating the parser it closes over.

use std::rc::Rc;

use crate::errors::ParseResult;
use crate::scope::ParsingScope;

/// A parsing rule: given a [`ParsingScope`], produce a value or fail.
pub struct Parser<R>(Rc<dyn for<'a> Fn(&mut ParsingScope<'a>) -> ParseResult<R>>);

impl<R> Clone for Parser<R> {
    fn clone(&self) -> Parser<R> {
        Parser(Rc::clone(&self.0))
    }
}

impl<R> Parser<R> {
    /// Builds a parser out of its raw body.
    pub fn new<F>(body: F) -> Parser<R>
    where
        F: for<'a> Fn(&mut ParsingScope<'a>) -> ParseResult<R> + 'static,
    {
        Parser(Rc::new(body))
    }

    pub(crate) fn invoke<'a>(&self, scope: &mut ParsingScope<'a>) -> ParseResult<R> {
        (self.0)(scope)
    }
}

impl<R: Clone + 'static> Parser<R> {
    /// A parser that always succeeds with `value`, consuming no input.
    pub fn pure(value: R) -> Parser<R> {
        Parser::new(move |_scope| Ok(value.clone()))
    }
}
