//! Arbitrarily nested braced groups around a single atom, e.g. `{{{x}}}`.
//!
//! Demonstrates `recursive` tying the knot for a self-referential grammar
//! rule, and `or` choosing between the base case and the recursive case.

use trample::combinators::{map, or, recursive, token};
use trample::grammar::Grammar;
use trample::parser::Parser;
use trample::token::TokenSpec;

fn main() {
    let mut scratch = Grammar::new(Parser::pure(()));
    let open = scratch.register(TokenSpec::literal("{")).unwrap();
    let close = scratch.register(TokenSpec::literal("}")).unwrap();
    let atom = scratch.register(TokenSpec::literal("x")).unwrap();
    scratch
        .register(TokenSpec::regex(r"\s+").unwrap().ignored())
        .unwrap();

    // depth of nesting around the atom, e.g. "{{x}}" -> 2
    let expr = recursive(move |expr| {
        or(vec![
            map(token(atom), |_| 0usize),
            Parser::new(move |scope| {
                scope.run(&token(open))?;
                let inner = scope.run(expr)?;
                scope.run(&token(close))?;
                Ok(inner + 1)
            }),
        ])
    });

    let mut grammar = Grammar::new(expr);
    grammar.register(TokenSpec::literal("{")).unwrap();
    grammar.register(TokenSpec::literal("}")).unwrap();
    grammar.register(TokenSpec::literal("x")).unwrap();
    grammar
        .register(TokenSpec::regex(r"\s+").unwrap().ignored())
        .unwrap();

    for input in ["x", "{x}", "{ { {x} } }", "{x"] {
        match grammar.parse(input) {
            Ok(depth) => println!("{:?} -> depth {}", input, depth),
            Err(e) => println!("{:?} failed: {}", input, e),
        }
    }
}
