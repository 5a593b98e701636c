// combinators.rs - MIT License
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

//! # Combinators
//!
//! Everything here is built purely out of [`crate::scope::ParsingScope`]'s
//! eight primitives. None of it needs to reach into [`crate::context`] or
//! [`crate::lexer`] directly.
//!
//! `or` and `left_associative` are both written as a flat loop over a
//! `Vec<Parser<R>>`/repeated application rather than nested recursive calls,
//! so chaining any number of alternatives or left-associative operators
//! costs one native stack frame, not one per element.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::ParseError;
use crate::parser::Parser;
use crate::token::{Token, TokenMatch};

/// Consumes exactly `token`, yielding the [`TokenMatch`].
pub fn token(token: Token) -> Parser<TokenMatch> {
    Parser::new(move |scope| scope.try_token(token))
}

/// Transforms a successful parse's value, leaving failure untouched.
pub fn map<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    Parser::new(move |scope| scope.run(&parser).map(&f))
}

/// Tries each alternative in order, committing to the first that succeeds.
/// Each attempt runs under its own backtrack point, so an earlier
/// alternative's partial consumption never leaks into the next one.
///
/// Failure aggregates every alternative's error into
/// [`ParseError::NoViableAlternative`], reporting the offset of whichever
/// alternative got furthest before failing (the most informative failure,
/// per the usual "furthest error wins" heuristic).
pub fn or<R: 'static>(alternatives: Vec<Parser<R>>) -> Parser<R> {
    Parser::new(move |scope| {
        let start = scope.current_offset();
        let mut causes = Vec::with_capacity(alternatives.len());
        for alt in &alternatives {
            match scope.try_parse(alt) {
                Ok(value) => return Ok(value),
                Err(e) => causes.push(e),
            }
        }
        let offset = causes.iter().map(ParseError::offset).max().unwrap_or(start);
        Err(ParseError::NoViableAlternative { offset, causes })
    })
}

/// Applies `parser` zero or more times, collecting successes into a `Vec`.
/// Stops (without failing) at the first attempt that does not consume any
/// input, guaranteeing termination even if `parser` can match empty.
pub fn many<R: 'static>(parser: Parser<R>) -> Parser<Vec<R>> {
    Parser::new(move |scope| {
        let mut results = Vec::new();
        loop {
            let before = scope.current_offset();
            match scope.try_parse(&parser) {
                Ok(value) => {
                    results.push(value);
                    if scope.current_offset() == before {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok(results)
    })
}

/// Applies `parser` at least `min` times, failing with
/// [`ParseError::NotEnoughRepetition`] if fewer are found.
pub fn repeated<R: 'static>(parser: Parser<R>, min: usize) -> Parser<Vec<R>> {
    Parser::new(move |scope| {
        let offset = scope.current_offset();
        let mut results = Vec::new();
        loop {
            let before = scope.current_offset();
            match scope.try_parse(&parser) {
                Ok(value) => {
                    results.push(value);
                    if scope.current_offset() == before {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        if results.len() < min {
            return Err(ParseError::NotEnoughRepetition {
                expected: min,
                actual: results.len(),
                offset,
            });
        }
        Ok(results)
    })
}

/// Applies `item`, then `(separator, item)` repeatedly, requiring at least
/// one `item`. Collects only the items, discarding separators.
pub fn separated<R: 'static, S: 'static>(item: Parser<R>, separator: Parser<S>) -> Parser<Vec<R>> {
    Parser::new(move |scope| {
        let mut results = vec![scope.run(&item)?];
        loop {
            let before = scope.current_offset();
            let rest = scope.try_parse(&Parser::new({
                let item = item.clone();
                let separator = separator.clone();
                move |scope| {
                    scope.run(&separator)?;
                    scope.run(&item)
                }
            }));
            match rest {
                Ok(value) => {
                    results.push(value);
                    if scope.current_offset() == before {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok(results)
    })
}

/// Left-associative fold: one `left`, then zero or more `(op, right)` pairs,
/// combined with `combine` as they're found. The canonical shape for
/// arithmetic-style grammars (`1 + 2 + 3` as `((1 + 2) + 3)`), expressed as
/// a flat loop so an arbitrarily long chain of operators costs one call
/// into this parser, not one recursive descent per operator.
pub fn left_associative<L, O, C>(
    left: Parser<L>,
    op: Parser<O>,
    combine: C,
) -> Parser<L>
where
    L: 'static,
    O: 'static,
    C: Fn(L, O, L) -> L + 'static,
{
    Parser::new(move |scope| {
        let mut acc = scope.run(&left)?;
        loop {
            let before = scope.current_offset();
            let step = scope.try_parse(&Parser::new({
                let op = op.clone();
                let left = left.clone();
                move |scope| {
                    let o = scope.run(&op)?;
                    let r = scope.run(&left)?;
                    Ok((o, r))
                }
            }));
            match step {
                Ok((o, r)) => {
                    acc = combine(acc, o, r);
                    if scope.current_offset() == before {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok(acc)
    })
}

/// A parser that always succeeds and consumes nothing at end of input,
/// failing with [`ParseError::NoMatchingToken`] otherwise.
pub fn eof() -> Parser<()> {
    Parser::new(|scope| {
        if scope.at_eof() {
            Ok(())
        } else {
            Err(ParseError::NoMatchingToken {
                offset: scope.current_offset(),
            })
        }
    })
}

/// Ties the knot for a self-referential grammar rule.
///
/// `build` receives a handle to the parser being defined, before its body
/// exists, so it can be closed over by recursive productions; `build`'s
/// return value becomes that body.
///
/// ```rust
/// use trample::combinators::{map, or, recursive, token};
/// use trample::grammar::Grammar;
/// use trample::parser::Parser;
/// use trample::token::TokenSpec;
///
/// let mut scratch = Grammar::new(Parser::pure(()));
/// let open = scratch.register(TokenSpec::literal("(")).unwrap();
/// let close = scratch.register(TokenSpec::literal(")")).unwrap();
/// let atom = scratch.register(TokenSpec::literal("x")).unwrap();
///
/// // balanced parens around a single atom: "x", "(x)", "((x))", ...
/// let expr = recursive(move |expr| {
///     or(vec![
///         map(token(atom), |_| ()),
///         Parser::new(move |scope| {
///             scope.run(&token(open))?;
///             scope.run(expr)?;
///             scope.run(&token(close))?;
///             Ok(())
///         }),
///     ])
/// });
///
/// let mut grammar = Grammar::new(expr);
/// grammar.register(TokenSpec::literal("(")).unwrap();
/// grammar.register(TokenSpec::literal(")")).unwrap();
/// grammar.register(TokenSpec::literal("x")).unwrap();
/// assert!(grammar.parse("((x))").is_ok());
/// ```
pub fn recursive<R, F>(build: F) -> Parser<R>
where
    R: 'static,
    F: FnOnce(&Parser<R>) -> Parser<R>,
{
    let slot: Rc<RefCell<Option<Parser<R>>>> = Rc::new(RefCell::new(None));
    let handle = Parser::new({
        let slot = Rc::clone(&slot);
        move |scope| {
            let inner = slot
                .borrow()
                .clone()
                .expect("recursive: body accessed before it was installed");
            scope.run(&inner)
        }
    });
    let body = build(&handle);
    *slot.borrow_mut() = Some(body.clone());
    body
}
