//! Symbolic logic expressions and checked natural deduction.
//!
//! The engine is built around three layers:
//!
//! - **Expressions**: immutable trees of [`Sym`]s with binding-aware
//!   traversals, capture-avoiding substitution, alpha-conversion and a
//!   canonical normal form ([`expression`], [`pointer`]).
//! - **Deductions**: append-only proofs in a Suppes-style natural deduction
//!   system, with assumption tracking and a global term dependency graph
//!   enforcing the eigenvariable condition ([`deduction`],
//!   [`term_dependency_graph`]).
//! - **Interfaces**: a select-steps / choose-rule / apply workflow that only
//!   offers rules the selected steps admit ([`interface`]).
//!
//! Formulas are parsed from a compact notation (`Ax (Fx -> Gx)`) by
//! [`FormulaParser`], which mints symbol ids on first sight and keeps their
//! presentations for printing.
//!
//! ```
//! use sequent::{start_deduction, FormulaParser, Rule, RuleInterface};
//!
//! let mut parser = FormulaParser::new();
//! let formula = parser.parse("p -> p").unwrap();
//!
//! let interface = start_deduction(None);
//! let rules = interface.select_steps(&[]).unwrap();
//! let interface = match rules.choose_rule(Rule::Premise).unwrap() {
//!     RuleInterface::Premise(premise) => premise.apply(formula).unwrap(),
//!     _ => unreachable!(),
//! };
//! assert_eq!(interface.deduction().size(), 1);
//! ```

pub mod deduction;
pub mod error;
pub mod expression;
pub mod interface;
pub mod parser;
pub mod pointer;
pub mod presentation;
pub mod primitives;
pub mod propositional;
pub mod rule;
pub mod serializers;
pub mod sym;
pub mod term_dependency_graph;

pub use deduction::{Deduction, RuleApplicationSpec, RuleApplicationSummary, Step};
pub use error::SequentError;
pub use expression::{Expression, Position};
pub use interface::{start_deduction, DeductionInterface, RuleInterface, RulesInterface};
pub use parser::{FormulaParser, SymbolTable};
pub use pointer::ExpressionPointer;
pub use presentation::{format_expression, Placement, SymPresentation};
pub use rule::{Rule, Side};
pub use sym::{Category, Kind, Sym};
pub use term_dependency_graph::{TermDependencies, TermDependencyGraph};

pub type SequentResult<T> = Result<T, SequentError>;

#[cfg(test)]
mod tests;
