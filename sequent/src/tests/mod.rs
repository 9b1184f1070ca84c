mod deduction;
mod expression;
mod graph;
mod pointer;
mod serializers;
mod sym;

use crate::expression::Expression;
use crate::parser::FormulaParser;

/// Parses a formula, panicking with the offending text on failure.
fn parse(parser: &mut FormulaParser, text: &str) -> Expression {
    match parser.parse(text) {
        Ok(expression) => expression,
        Err(error) => panic!("failed to parse '{}': {}", text, error),
    }
}
