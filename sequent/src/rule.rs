//! The natural deduction rule set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule of the natural deduction system.
///
/// `Premise` and `Theorem` introduce formulas without premises; every other
/// rule derives its conclusion from one to three earlier steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    Premise,
    Theorem,
    Repetition,
    ConditionalIntroduction,
    ConditionalElimination,
    ConjunctionIntroduction,
    ConjunctionElimination,
    DisjunctionIntroduction,
    DisjunctionElimination,
    BiconditionalIntroduction,
    BiconditionalElimination,
    NegationIntroduction,
    NegationElimination,
    Explosion,
    UniversalInstantiation,
    UniversalGeneralization,
    ExistentialInstantiation,
    ExistentialGeneralization,
    TautologicalImplication,
}

impl Rule {
    pub const ALL: [Rule; 19] = [
        Rule::Premise,
        Rule::Theorem,
        Rule::Repetition,
        Rule::ConditionalIntroduction,
        Rule::ConditionalElimination,
        Rule::ConjunctionIntroduction,
        Rule::ConjunctionElimination,
        Rule::DisjunctionIntroduction,
        Rule::DisjunctionElimination,
        Rule::BiconditionalIntroduction,
        Rule::BiconditionalElimination,
        Rule::NegationIntroduction,
        Rule::NegationElimination,
        Rule::Explosion,
        Rule::UniversalInstantiation,
        Rule::UniversalGeneralization,
        Rule::ExistentialInstantiation,
        Rule::ExistentialGeneralization,
        Rule::TautologicalImplication,
    ];

    /// Short justification label used in rendered proofs.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Rule::Premise => "P",
            Rule::Theorem => "T",
            Rule::Repetition => "R",
            Rule::ConditionalIntroduction => "D",
            Rule::ConditionalElimination => "MP",
            Rule::ConjunctionIntroduction => "CI",
            Rule::ConjunctionElimination => "CE",
            Rule::DisjunctionIntroduction => "DI",
            Rule::DisjunctionElimination => "DE",
            Rule::BiconditionalIntroduction => "BI",
            Rule::BiconditionalElimination => "BE",
            Rule::NegationIntroduction => "NI",
            Rule::NegationElimination => "NE",
            Rule::Explosion => "X",
            Rule::UniversalInstantiation => "UI",
            Rule::UniversalGeneralization => "UG",
            Rule::ExistentialInstantiation => "EI",
            Rule::ExistentialGeneralization => "EG",
            Rule::TautologicalImplication => "TI",
        }
    }

    pub fn from_abbreviation(abbreviation: &str) -> Option<Rule> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.abbreviation() == abbreviation)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Premise => "premise",
            Rule::Theorem => "theorem",
            Rule::Repetition => "repetition",
            Rule::ConditionalIntroduction => "conditional introduction",
            Rule::ConditionalElimination => "conditional elimination",
            Rule::ConjunctionIntroduction => "conjunction introduction",
            Rule::ConjunctionElimination => "conjunction elimination",
            Rule::DisjunctionIntroduction => "disjunction introduction",
            Rule::DisjunctionElimination => "disjunction elimination",
            Rule::BiconditionalIntroduction => "biconditional introduction",
            Rule::BiconditionalElimination => "biconditional elimination",
            Rule::NegationIntroduction => "negation introduction",
            Rule::NegationElimination => "negation elimination",
            Rule::Explosion => "explosion",
            Rule::UniversalInstantiation => "universal instantiation",
            Rule::UniversalGeneralization => "universal generalization",
            Rule::ExistentialInstantiation => "existential instantiation",
            Rule::ExistentialGeneralization => "existential generalization",
            Rule::TautologicalImplication => "tautological implication",
        };
        write!(f, "{}", name)
    }
}

/// Which operand of a binary formula a rule acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}
