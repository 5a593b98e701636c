//! A small C-like token set: identifiers, numbers, the four arithmetic
//! operators, and parens, with whitespace ignored.
//!
//! Builds a root parser that just drains the input token by token, to show
//! off registration-order priority (each literal operator is tried before
//! `ident`, so a keyword-style token registered earlier would always win
//! over a looser identifier regex matching the same text) and ignored-token
//! skipping, without a full expression grammar on top — see
//! `sum_grammar.rs` and `braced_grammar.rs` for that.

use trample::combinators::{many, or, token};
use trample::grammar::Grammar;
use trample::parser::Parser;
use trample::token::{Token, TokenSpec};

fn named(label: &'static str, tok: Token) -> Parser<(&'static str, String)> {
    Parser::new(move |scope| {
        let tm = scope.try_token(tok)?;
        Ok((label, scope.text_of(&tm).to_string()))
    })
}

fn main() {
    let mut scratch = Grammar::new(Parser::pure(()));
    let ident = scratch
        .register(TokenSpec::regex(r"[A-Za-z_][A-Za-z0-9_]*").unwrap())
        .unwrap();
    let number = scratch.register(TokenSpec::regex(r"[0-9]+").unwrap()).unwrap();
    let add = scratch.register(TokenSpec::literal("+")).unwrap();
    let sub = scratch.register(TokenSpec::literal("-")).unwrap();
    let mul = scratch.register(TokenSpec::literal("*")).unwrap();
    let div = scratch.register(TokenSpec::literal("/")).unwrap();
    let lparen = scratch.register(TokenSpec::literal("(")).unwrap();
    let rparen = scratch.register(TokenSpec::literal(")")).unwrap();

    let root = many(or(vec![
        named("ident", ident),
        named("number", number),
        named("add", add),
        named("sub", sub),
        named("mul", mul),
        named("div", div),
        named("lparen", lparen),
        named("rparen", rparen),
    ]));

    let mut grammar = Grammar::new(root);
    grammar.register(TokenSpec::regex(r"[A-Za-z_][A-Za-z0-9_]*").unwrap()).unwrap();
    grammar.register(TokenSpec::regex(r"[0-9]+").unwrap()).unwrap();
    grammar.register(TokenSpec::literal("+")).unwrap();
    grammar.register(TokenSpec::literal("-")).unwrap();
    grammar.register(TokenSpec::literal("*")).unwrap();
    grammar.register(TokenSpec::literal("/")).unwrap();
    grammar.register(TokenSpec::literal("(")).unwrap();
    grammar.register(TokenSpec::literal(")")).unwrap();
    grammar
        .register(TokenSpec::regex(r"\s+").unwrap().ignored())
        .unwrap();

    let input = "x + (y * 42) / count - 1";
    match grammar.parse(input) {
        Ok(tokens) => {
            for (label, text) in tokens {
                println!("{:>6}: {}", label, text);
            }
        }
        Err(e) => println!("failed to tokenize {:?}: {}", input, e),
    }
}
