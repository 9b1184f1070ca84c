//! Textual presentation of symbols and the formula printer.
//!
//! Presentation is kept apart from identity: expressions only carry ids,
//! and rendering consults a presentation table, normally the one kept by
//! the parser that minted the symbols.

use crate::expression::Expression;
use crate::primitives::{
    BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, EXISTENTIAL_QUANTIFIER, NEGATION,
    UNIVERSAL_QUANTIFIER,
};
use crate::sym::{Kind, Sym};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Prefix,
    Infix,
}

/// How one symbol is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymPresentation {
    pub text: String,
    pub placement: Placement,
}

impl SymPresentation {
    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: Placement::Prefix,
        }
    }

    pub fn infix(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: Placement::Infix,
        }
    }
}

/// Presentations of the primitive symbols, keyed by id.
pub fn primitive_presentations() -> HashMap<u32, SymPresentation> {
    [
        (NEGATION.id, SymPresentation::prefix("~")),
        (CONJUNCTION.id, SymPresentation::infix("&")),
        (DISJUNCTION.id, SymPresentation::infix("|")),
        (CONDITIONAL.id, SymPresentation::infix("->")),
        (BICONDITIONAL.id, SymPresentation::infix("<->")),
        (UNIVERSAL_QUANTIFIER.id, SymPresentation::prefix("A")),
        (EXISTENTIAL_QUANTIFIER.id, SymPresentation::prefix("E")),
    ]
    .into_iter()
    .collect()
}

fn text_of(sym: Sym, presentations: &HashMap<u32, SymPresentation>) -> String {
    presentations
        .get(&sym.id)
        .map(|presentation| presentation.text.clone())
        .unwrap_or_else(|| sym.to_string())
}

fn is_infix(sym: Sym, presentations: &HashMap<u32, SymPresentation>) -> bool {
    presentations
        .get(&sym.id)
        .map_or(false, |presentation| presentation.placement == Placement::Infix)
}

fn wrapped(child: &Expression, presentations: &HashMap<u32, SymPresentation>) -> String {
    let rendered = format_expression(child, presentations);
    if is_infix(child.sym, presentations) {
        format!("({})", rendered)
    } else {
        rendered
    }
}

/// Renders an expression in the notation the parser reads back.
pub fn format_expression(
    expression: &Expression,
    presentations: &HashMap<u32, SymPresentation>,
) -> String {
    let text = text_of(expression.sym, presentations);

    if let Some(bound) = expression.bound_sym {
        let body = match expression.children.first() {
            Some(child) => wrapped(child, presentations),
            None => return text,
        };
        return format!("{}{} {}", text, text_of(bound, presentations), body);
    }

    if expression.children.is_empty() {
        return text;
    }

    if is_infix(expression.sym, presentations) && expression.children.len() == 2 {
        return format!(
            "{} {} {}",
            wrapped(&expression.children[0], presentations),
            text,
            wrapped(&expression.children[1], presentations)
        );
    }

    if expression.sym.argument_kind == Kind::Term {
        // Predications and function terms: compact when every argument is
        // a bare symbol, parenthesized otherwise.
        let atomic = expression.children.iter().all(|child| child.children.is_empty());
        let rendered: Vec<String> = expression
            .children
            .iter()
            .map(|child| format_expression(child, presentations))
            .collect();
        if atomic && expression.sym.kind == Kind::Formula {
            return format!("{}{}", text, rendered.concat());
        }
        return format!("{}({})", text, rendered.join(", "));
    }

    // Prefix formula operator, negation-like.
    format!(
        "{}{}",
        text,
        wrapped(&expression.children[0], presentations)
    )
}
