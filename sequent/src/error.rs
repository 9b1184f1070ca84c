use crate::rule::Rule;
use crate::sym::{Kind, Sym};
use std::fmt;

/// Error type for the sequent engine.
///
/// Every failure is synchronous and non-retryable. Variants carry the
/// offending symbol, position or rule so callers can produce precise
/// diagnostics; formatting beyond `Display` is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequentError {
    /// Formula text could not be parsed.
    Parse {
        message: String,
        line: usize,
        col: usize,
    },

    /// A symbol was used with a different arity than it was minted with.
    InvalidArity {
        text: String,
        expected: u32,
        actual: u32,
    },

    /// A symbol was used in a position requiring a different kind.
    InvalidSymbolKind {
        text: String,
        expected: Kind,
        actual: Kind,
    },

    /// A binder's bound symbol must be a nullary term.
    InvalidBoundSymbol { text: String },

    /// A position addressed a child index that doesn't exist.
    PositionOutOfRange { position: Vec<usize>, index: usize },

    /// Bound-occurrence query on an expression without a bound symbol.
    ExpressionDoesntBind,

    /// The root of an expression has no parent.
    CantGetParentOfRoot,

    /// `connect_with_binary_sym` needs at least two expressions.
    NotEnoughExpressions { actual: usize },

    /// A step ordinal fell outside `1..=size`.
    StepOrdinalOutOfRange { ordinal: usize, size: usize },

    /// A step index fell outside the deduction.
    StepIndexOutOfRange { index: usize, size: usize },

    /// The chosen rule is not applicable to the selected steps.
    RuleNotAllowed { rule: Rule },

    /// Instantiating a non-vacuous quantification requires an explicit term.
    TermNotProvidedForNonVacuousQuantification,

    /// The chosen instance term would be captured by a binder in the result.
    InstanceTermBecomesIllegallyBound { term: Sym },

    /// The generalized term already occurs free in the premise.
    GeneralizedTermIllegallyBinds { term: Sym },

    /// The generalized term is bound over a free occurrence of the old term.
    GeneralizedTermBecomesIllegallyBound { term: Sym },

    /// Merging these term dependencies would close a dependency cycle.
    TermDependencyConflict { dependent: u32, dependency: u32 },

    /// The conclusion is not a truth-functional consequence of the premises.
    InvalidTautologicalImplication,

    /// Serialization boundary failure.
    Serialization(String),
}

impl fmt::Display for SequentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequentError::Parse { message, line, col } => {
                write!(f, "Parse error at {}:{}: {}", line, col, message)
            }
            SequentError::InvalidArity {
                text,
                expected,
                actual,
            } => write!(
                f,
                "Symbol '{}' has arity {} but was used with {} argument(s)",
                text, expected, actual
            ),
            SequentError::InvalidSymbolKind {
                text,
                expected,
                actual,
            } => write!(
                f,
                "Symbol '{}' is a {} but was used where a {} is required",
                text, actual, expected
            ),
            SequentError::InvalidBoundSymbol { text } => {
                write!(f, "Symbol '{}' cannot be bound: only nullary terms can", text)
            }
            SequentError::PositionOutOfRange { position, index } => write!(
                f,
                "Position {:?} is invalid: no child at index {}",
                position, index
            ),
            SequentError::ExpressionDoesntBind => {
                write!(f, "Expression doesn't bind")
            }
            SequentError::CantGetParentOfRoot => {
                write!(f, "Can't get parent of root")
            }
            SequentError::NotEnoughExpressions { actual } => write!(
                f,
                "At least two expressions are required to connect, got {}",
                actual
            ),
            SequentError::StepOrdinalOutOfRange { ordinal, size } => write!(
                f,
                "Step ordinal {} is out of range for a deduction of {} step(s)",
                ordinal, size
            ),
            SequentError::StepIndexOutOfRange { index, size } => write!(
                f,
                "Step index {} is out of range for a deduction of {} step(s)",
                index, size
            ),
            SequentError::RuleNotAllowed { rule } => {
                write!(f, "Rule {} is not allowed for the selected steps", rule)
            }
            SequentError::TermNotProvidedForNonVacuousQuantification => write!(
                f,
                "An instance term must be provided for a non-vacuous quantification"
            ),
            SequentError::InstanceTermBecomesIllegallyBound { term } => write!(
                f,
                "Instance term {} would become illegally bound in the result",
                term
            ),
            SequentError::GeneralizedTermIllegallyBinds { term } => write!(
                f,
                "Generalized term {} already occurs free in the premise and would illegally bind",
                term
            ),
            SequentError::GeneralizedTermBecomesIllegallyBound { term } => write!(
                f,
                "Generalized term {} would become illegally bound at an occurrence of the instance term",
                term
            ),
            SequentError::TermDependencyConflict {
                dependent,
                dependency,
            } => write!(
                f,
                "Term dependency conflict: {} cannot depend on {}",
                dependent, dependency
            ),
            SequentError::InvalidTautologicalImplication => write!(
                f,
                "Conclusion is not a tautological consequence of the premises"
            ),
            SequentError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SequentError {}
