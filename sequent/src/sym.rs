//! Symbols, the atoms from which expressions are built.
//!
//! A `Sym` carries no textual name. Identity is the numeric id; everything
//! presentational lives in the parser's symbol table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The role an expression plays: a formula (truth-apt) or a term (denoting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Formula,
    Term,
}

/// Classification of a symbol by its `kind` and `argument_kind`.
///
/// `F` is for formula, `T` for term; the first letter is the kind of the
/// expression the symbol heads, the second the kind of its children.
/// `FF` covers propositional variables (arity 0) and connectives, `FT`
/// predicates, `TT` individual variables/constants and function symbols.
/// `TF` is reserved for term-forming operators over formulas, such as
/// definite description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    FF,
    FT,
    TF,
    TT,
}

impl Category {
    /// The two component kinds of this category, in (kind, argument_kind) order.
    pub fn kinds(self) -> (Kind, Kind) {
        match self {
            Category::FF => (Kind::Formula, Kind::Formula),
            Category::FT => (Kind::Formula, Kind::Term),
            Category::TF => (Kind::Term, Kind::Formula),
            Category::TT => (Kind::Term, Kind::Term),
        }
    }
}

/// A symbol: the main ingredient of expressions.
///
/// The id must stay the same throughout all of a symbol's occurrences in one
/// context (an expression, a deduction, a parser table). Nullary symbols
/// must have `kind == argument_kind`, so their category is FF or TT, never
/// FT nor TF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sym {
    pub id: u32,
    /// Which role an expression headed by this symbol has.
    pub kind: Kind,
    /// Which kind of expressions are accepted as children.
    pub argument_kind: Kind,
    /// How many children an expression headed by this symbol must have.
    pub arity: u32,
    /// Whether an expression headed by this symbol also carries a bound
    /// symbol. True for quantifiers.
    pub binds: bool,
}

impl Sym {
    pub fn from_category(category: Category, id: u32, arity: u32, binds: bool) -> Self {
        let (kind, argument_kind) = category.kinds();
        Self {
            id,
            kind,
            argument_kind,
            arity,
            binds,
        }
    }

    /// Nullary FF symbol: a propositional variable.
    pub fn ff(id: u32) -> Self {
        Self::from_category(Category::FF, id, 0, false)
    }

    /// FT symbol of the given arity: a predicate.
    pub fn ft(id: u32, arity: u32) -> Self {
        Self::from_category(Category::FT, id, arity, false)
    }

    /// TF symbol of the given arity.
    pub fn tf(id: u32, arity: u32) -> Self {
        Self::from_category(Category::TF, id, arity, false)
    }

    /// Nullary TT symbol: an individual variable or constant.
    pub fn tt(id: u32) -> Self {
        Self::from_category(Category::TT, id, 0, false)
    }

    pub fn category(&self) -> Category {
        match (self.kind, self.argument_kind) {
            (Kind::Formula, Kind::Formula) => Category::FF,
            (Kind::Formula, Kind::Term) => Category::FT,
            (Kind::Term, Kind::Formula) => Category::TF,
            (Kind::Term, Kind::Term) => Category::TT,
        }
    }

    /// Only nullary terms can be bound by a binder.
    pub fn is_bindable(&self) -> bool {
        self.category() == Category::TT && self.arity == 0
    }

    pub fn with_arity(mut self, arity: u32) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_binds(mut self, binds: bool) -> Self {
        self.binds = binds;
        self
    }

    /// Identity carrier. Two symbols are the same symbol iff their ids match.
    pub fn same(&self, other: &Sym) -> bool {
        self.id == other.id
    }
}

impl PartialOrd for Sym {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sym {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.id)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Formula => write!(f, "formula"),
            Kind::Term => write!(f, "term"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::FF => write!(f, "FF"),
            Category::FT => write!(f, "FT"),
            Category::TF => write!(f, "TF"),
            Category::TT => write!(f, "TT"),
        }
    }
}
