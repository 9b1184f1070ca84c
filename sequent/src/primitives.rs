//! The primitive logical symbols with their fixed ids.
//!
//! These ids are part of the wire format: serialized expressions and
//! deductions refer to connectives and quantifiers by them.

use crate::sym::{Kind, Sym};
use std::collections::HashMap;

pub const NEGATION: Sym = Sym {
    id: 0,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 1,
    binds: false,
};

pub const CONJUNCTION: Sym = Sym {
    id: 1,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 2,
    binds: false,
};

pub const DISJUNCTION: Sym = Sym {
    id: 2,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 2,
    binds: false,
};

pub const CONDITIONAL: Sym = Sym {
    id: 3,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 2,
    binds: false,
};

pub const BICONDITIONAL: Sym = Sym {
    id: 4,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 2,
    binds: false,
};

pub const UNIVERSAL_QUANTIFIER: Sym = Sym {
    id: 5,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 1,
    binds: true,
};

pub const EXISTENTIAL_QUANTIFIER: Sym = Sym {
    id: 6,
    kind: Kind::Formula,
    argument_kind: Kind::Formula,
    arity: 1,
    binds: true,
};

pub const MAX_PRIMITIVE_ID: u32 = 6;

/// All primitive symbols keyed by id, e.g. as a seed for normalization
/// tables and parser symbol tables.
pub fn primitive_syms() -> HashMap<u32, Sym> {
    [
        NEGATION,
        CONJUNCTION,
        DISJUNCTION,
        CONDITIONAL,
        BICONDITIONAL,
        UNIVERSAL_QUANTIFIER,
        EXISTENTIAL_QUANTIFIER,
    ]
    .into_iter()
    .map(|sym| (sym.id, sym))
    .collect()
}

/// Whether `id` refers to one of the primitive logical symbols.
pub fn is_primitive_id(id: u32) -> bool {
    id <= MAX_PRIMITIVE_ID
}
