//! Truth-functional analysis of formulas.
//!
//! Quantified and atomic-predicate subformulas are abstracted into fresh
//! propositional atoms, after which tautology, satisfiability and
//! tautological implication are decided by truth-table enumeration.

use crate::expression::Expression;
use crate::primitives::{
    self, BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, NEGATION,
};
use crate::sym::{Category, Sym};
use std::collections::{BTreeSet, HashMap};

/// Replaces every non-truth-functional subformula by a propositional atom.
///
/// Primitive connectives are kept and descended into; nullary FF symbols
/// are already atoms. Everything else (quantifications, predications) is
/// abstracted, with structurally equal subformulas sharing one atom. Fresh
/// atom ids start above every id occurring in the formula.
pub fn reduce_to_truth_functional(expression: &Expression) -> Expression {
    let max_id = expression.get_syms().keys().copied().max().unwrap_or(0);
    let mut state = Abstraction {
        atoms: HashMap::new(),
        next_id: max_id + 1,
    };
    reduce(expression, &mut state)
}

struct Abstraction {
    atoms: HashMap<Expression, Sym>,
    next_id: u32,
}

fn reduce(expression: &Expression, state: &mut Abstraction) -> Expression {
    let sym = expression.sym;
    if sym.category() == Category::FF && !sym.binds {
        if sym.arity == 0 {
            return expression.clone();
        }
        if primitives::is_primitive_id(sym.id) {
            return Expression {
                sym,
                bound_sym: None,
                children: expression
                    .children
                    .iter()
                    .map(|child| reduce(child, state))
                    .collect(),
            };
        }
    }
    let atom = match state.atoms.get(expression) {
        Some(&atom) => atom,
        None => {
            let atom = Sym::ff(state.next_id);
            state.next_id += 1;
            state.atoms.insert(expression.clone(), atom);
            atom
        }
    };
    Expression::atomic(atom)
}

fn collect_atom_ids(expression: &Expression, out: &mut BTreeSet<u32>) {
    if expression.sym.arity == 0 {
        out.insert(expression.sym.id);
    }
    for child in &expression.children {
        collect_atom_ids(child, out);
    }
}

fn evaluate(expression: &Expression, valuation: &HashMap<u32, bool>) -> bool {
    let id = expression.sym.id;
    let child = |index: usize| evaluate(&expression.children[index], valuation);
    if expression.sym.arity > 0 && primitives::is_primitive_id(id) {
        if id == NEGATION.id {
            return !child(0);
        }
        if id == CONJUNCTION.id {
            return child(0) && child(1);
        }
        if id == DISJUNCTION.id {
            return child(0) || child(1);
        }
        if id == CONDITIONAL.id {
            return !child(0) || child(1);
        }
        if id == BICONDITIONAL.id {
            return child(0) == child(1);
        }
    }
    valuation.get(&id).copied().unwrap_or(false)
}

fn holds_in_every_valuation(expression: &Expression, expected: bool) -> bool {
    let mut atoms = BTreeSet::new();
    collect_atom_ids(expression, &mut atoms);
    let atoms: Vec<u32> = atoms.into_iter().collect();
    for row in 0u64..(1u64 << atoms.len()) {
        let valuation: HashMap<u32, bool> = atoms
            .iter()
            .enumerate()
            .map(|(bit, &id)| (id, row & (1 << bit) != 0))
            .collect();
        if evaluate(expression, &valuation) != expected {
            return false;
        }
    }
    true
}

/// True in every valuation, after truth-functional reduction.
pub fn is_tautology(expression: &Expression) -> bool {
    holds_in_every_valuation(&reduce_to_truth_functional(expression), true)
}

/// False in every valuation.
pub fn is_contradiction(expression: &Expression) -> bool {
    holds_in_every_valuation(&reduce_to_truth_functional(expression), false)
}

/// True in at least one valuation.
pub fn is_satisfiable(expression: &Expression) -> bool {
    !is_contradiction(expression)
}

/// False in at least one valuation.
pub fn is_falsifiable(expression: &Expression) -> bool {
    !is_tautology(expression)
}

/// Neither a tautology nor a contradiction.
pub fn is_contingent(expression: &Expression) -> bool {
    is_satisfiable(expression) && is_falsifiable(expression)
}

/// Whether the conclusion follows truth-functionally from the premises.
///
/// The premises and the conclusion are combined into one conditional before
/// reduction, so identical non-truth-functional subformulas on both sides
/// abstract to the same atom.
pub fn is_tautological_implication(premises: &[Expression], conclusion: &Expression) -> bool {
    let combined = match premises.len() {
        0 => conclusion.clone(),
        _ => {
            let antecedent = premises
                .iter()
                .skip(1)
                .fold(premises[0].clone(), |left, right| Expression {
                    sym: CONJUNCTION,
                    bound_sym: None,
                    children: vec![left, right.clone()],
                });
            Expression {
                sym: CONDITIONAL,
                bound_sym: None,
                children: vec![antecedent, conclusion.clone()],
            }
        }
    };
    is_tautology(&combined)
}

/// `candidate` is exactly the negation of `formula`.
pub fn is_negation_of(candidate: &Expression, formula: &Expression) -> bool {
    candidate.sym.id == NEGATION.id
        && candidate.children.first().map_or(false, |child| child == formula)
}

/// `formula` has the shape `~~x`.
pub fn is_double_negation(formula: &Expression) -> bool {
    formula.sym.id == NEGATION.id
        && formula
            .children
            .first()
            .map_or(false, |child| child.sym.id == NEGATION.id)
}

/// The operands of `formula` when its main symbol is `sym`.
pub fn binary_parts(formula: &Expression, sym: Sym) -> Option<(&Expression, &Expression)> {
    if formula.sym.id == sym.id && formula.children.len() == 2 {
        Some((&formula.children[0], &formula.children[1]))
    } else {
        None
    }
}

/// `formula` is a conditional with the given antecedent.
pub fn is_conditional_from(formula: &Expression, antecedent: &Expression) -> bool {
    binary_parts(formula, CONDITIONAL).map_or(false, |(from, _)| from == antecedent)
}

/// `formula` is a conditional with the given consequent.
pub fn is_conditional_to(formula: &Expression, consequent: &Expression) -> bool {
    binary_parts(formula, CONDITIONAL).map_or(false, |(_, to)| to == consequent)
}
