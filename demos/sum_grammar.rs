//! A left-associative sum of integers: `1 + 2 + 3`.
//!
//! Demonstrates the two-phase token registration pattern (a `scratch`
//! grammar to mint handles, a real grammar to hold the root parser that
//! closes over them) and reading matched text back through
//! `ParsingScope::text_of` to parse an actual integer.

use trample::combinators::{left_associative, token};
use trample::grammar::Grammar;
use trample::parser::Parser;
use trample::token::TokenSpec;

fn main() {
    let mut scratch = Grammar::new(Parser::pure(()));
    let int_tok = scratch.register(TokenSpec::regex(r"\d+").unwrap()).unwrap();
    let plus_tok = scratch.register(TokenSpec::literal("+")).unwrap();
    scratch
        .register(TokenSpec::regex(r"\s+").unwrap().ignored())
        .unwrap();

    let number = Parser::new(move |scope| {
        let tm = scope.try_token(int_tok)?;
        Ok(scope.text_of(&tm).parse::<i64>().expect("regex guarantees digits"))
    });
    let root = left_associative(number, token(plus_tok), |l, _op, r| l + r);

    let mut grammar = Grammar::new(root);
    grammar.register(TokenSpec::regex(r"\d+").unwrap()).unwrap();
    grammar.register(TokenSpec::literal("+")).unwrap();
    grammar
        .register(TokenSpec::regex(r"\s+").unwrap().ignored())
        .unwrap();

    for input in ["1", "1 + 2", "1 + 2 + 3 + 4"] {
        match grammar.parse(input) {
            Ok(value) => println!("{} = {}", input, value),
            Err(e) => println!("{} failed: {}", input, e),
        }
    }
}
