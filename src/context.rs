// context.rs - MIT License
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

//! # ParsingContext
//!
//! The engine's mutable state for a single parse session: the [`Lexer`] and
//! the current position. Everything a [`crate::scope::ParsingScope`] does is
//! ultimately a read or write against one of these two fields.

use log::debug;

use crate::errors::ParseResult;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::scope::ParsingScope;

pub struct ParsingContext {
    pub(crate) lexer: Lexer,
    pub(crate) position: usize,
    pub(crate) backtrack_depth: usize,
}

impl ParsingContext {
    pub(crate) fn new(lexer: Lexer) -> ParsingContext {
        ParsingContext {
            lexer,
            position: 0,
            backtrack_depth: 0,
        }
    }

    /// Drives `parser` over this context's entire session, from position 0.
    pub(crate) fn run_parser<R>(&mut self, parser: &Parser<R>) -> ParseResult<R> {
        debug!("parsing session starting over {} bytes", self.lexer.input().len());
        let mut scope = ParsingScope::new(self);
        let result = scope.run(parser);
        match &result {
            Ok(_) => debug!("parsing session succeeded"),
            Err(e) => debug!("parsing session failed: {}", e),
        }
        result
    }

    /// Position where the session stopped, success or failure.
    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::TokenSpec;
    use std::rc::Rc;

    #[test]
    fn fresh_context_starts_at_position_zero() {
        let tokens = Rc::new(Vec::new());
        let ctx = ParsingContext::new(Lexer::new("abc".to_string(), tokens));
        assert_eq!(ctx.position(), 0);
    }

    #[test]
    fn run_parser_reports_final_position() {
        let spec = TokenSpec::literal("abc");
        let tokens = Rc::new(vec![spec.into_registered(0)]);
        let mut ctx = ParsingContext::new(Lexer::new("abc".to_string(), tokens));
        let p: Parser<()> = Parser::new(|s| {
            s.try_token(crate::token::Token::from_id(0)).map(|_| ())
        });
        assert!(ctx.run_parser(&p).is_ok());
        assert_eq!(ctx.position(), 3);
    }
}
