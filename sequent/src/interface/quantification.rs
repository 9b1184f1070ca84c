//! Typed interfaces for the quantifier rules.
//!
//! These carry the eigenvariable condition: local capture checks here, plus
//! the dependencies recorded into the deduction's term dependency graph,
//! which globally rejects illegal quantifier swaps.

use super::DeductionInterface;
use crate::deduction::{Deduction, RuleApplicationSpec};
use crate::error::SequentError;
use crate::expression::Expression;
use crate::primitives::{EXISTENTIAL_QUANTIFIER, UNIVERSAL_QUANTIFIER};
use crate::rule::Rule;
use crate::sym::Sym;
use crate::term_dependency_graph::TermDependencies;
use crate::SequentResult;

fn extend(deduction: &Deduction, spec: RuleApplicationSpec) -> SequentResult<DeductionInterface> {
    Ok(DeductionInterface::new(deduction.apply_rule(spec)?))
}

fn require_bindable(term: Sym) -> SequentResult<()> {
    if !term.is_bindable() {
        return Err(SequentError::InvalidBoundSymbol {
            text: term.to_string(),
        });
    }
    Ok(())
}

fn quantifier_parts(
    formula: &Expression,
    quantifier: Sym,
    rule: Rule,
) -> SequentResult<(Sym, &Expression)> {
    match (formula.bound_sym, formula.children.first()) {
        (Some(bound), Some(body)) if formula.sym.id == quantifier.id => Ok((bound, body)),
        _ => Err(SequentError::RuleNotAllowed { rule }),
    }
}

/// Substitution used by the quantifier rules. The callers' capture checks
/// guarantee no alpha-renaming is ever needed, and `new` is nullary and
/// non-binding, so the fresh-symbol sources are never consulted.
fn substitute(body: &Expression, old: Sym, new: Sym) -> Expression {
    if old.id == new.id {
        return body.clone();
    }
    let mut fresh_bound = || new;
    let mut fresh_child = || Expression::atomic(new);
    body.replace_free_occurrences(old, new, &mut fresh_bound, &mut fresh_child)
}

fn instantiate(
    formula: &Expression,
    quantifier: Sym,
    rule: Rule,
    term: Option<Sym>,
) -> SequentResult<Expression> {
    let (bound, body) = quantifier_parts(formula, quantifier, rule)?;
    match term {
        None => {
            if !body.find_free_occurrences(bound).is_empty() {
                return Err(SequentError::TermNotProvidedForNonVacuousQuantification);
            }
            Ok(body.clone())
        }
        Some(term) => {
            require_bindable(term)?;
            if term.id != bound.id
                && body
                    .find_bound_syms_at_free_occurrences_of_sym(bound)
                    .contains_key(&term.id)
            {
                return Err(SequentError::InstanceTermBecomesIllegallyBound { term });
            }
            Ok(substitute(body, bound, term))
        }
    }
}

fn generalize(
    premise: &Expression,
    quantifier: Sym,
    new_term: Sym,
    old_term: Option<Sym>,
) -> SequentResult<Expression> {
    require_bindable(new_term)?;
    let substituting = old_term.map_or(true, |old| old.id != new_term.id);
    if substituting && premise.get_free_syms().contains_key(&new_term.id) {
        return Err(SequentError::GeneralizedTermIllegallyBinds { term: new_term });
    }
    if let Some(old) = old_term {
        if old.id != new_term.id
            && premise
                .find_bound_syms_at_free_occurrences_of_sym(old)
                .contains_key(&new_term.id)
        {
            return Err(SequentError::GeneralizedTermBecomesIllegallyBound { term: new_term });
        }
    }
    let body = match old_term {
        None => premise.clone(),
        Some(old) => substitute(premise, old, new_term),
    };
    Ok(Expression {
        sym: quantifier,
        bound_sym: Some(new_term),
        children: vec![body],
    })
}

fn free_terms_except(formula: &Expression, excluded: u32) -> Vec<u32> {
    formula
        .get_free_terms()
        .keys()
        .copied()
        .filter(|&id| id != excluded)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniversalInstantiationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> UniversalInstantiationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// Instantiates `Ax φ` to `φ[x := term]`. The term may be omitted only
    /// for a vacuous quantification.
    pub fn apply(&self, term: Option<Sym>) -> SequentResult<DeductionInterface> {
        let formula = &self.deduction.get_step(self.step)?.formula;
        let conclusion = instantiate(
            formula,
            UNIVERSAL_QUANTIFIER,
            Rule::UniversalInstantiation,
            term,
        )?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::UniversalInstantiation,
                vec![self.step],
                conclusion,
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistentialInstantiationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> ExistentialInstantiationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// Instantiates `Ex φ` to `φ[x := term]`. The witnessing term comes to
    /// depend on every other free term of the conclusion.
    pub fn apply(&self, term: Option<Sym>) -> SequentResult<DeductionInterface> {
        let formula = &self.deduction.get_step(self.step)?.formula;
        let conclusion = instantiate(
            formula,
            EXISTENTIAL_QUANTIFIER,
            Rule::ExistentialInstantiation,
            term,
        )?;
        let mut spec = RuleApplicationSpec::regular(
            Rule::ExistentialInstantiation,
            vec![self.step],
            conclusion.clone(),
        );
        if let Some(term) = term {
            spec = spec.with_term_dependencies(TermDependencies::new(
                term.id,
                free_terms_except(&conclusion, term.id),
            ));
        }
        extend(self.deduction, spec)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniversalGeneralizationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> UniversalGeneralizationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// Generalizes `φ` to `Ax φ[old := x]`. The generalized term comes to
    /// depend on every other free term of the premise; omitting `old_term`
    /// quantifies vacuously.
    pub fn apply(
        &self,
        new_term: Sym,
        old_term: Option<Sym>,
    ) -> SequentResult<DeductionInterface> {
        let premise = &self.deduction.get_step(self.step)?.formula;
        let conclusion = generalize(premise, UNIVERSAL_QUANTIFIER, new_term, old_term)?;
        let mut spec = RuleApplicationSpec::regular(
            Rule::UniversalGeneralization,
            vec![self.step],
            conclusion,
        );
        if let Some(old) = old_term {
            spec = spec.with_term_dependencies(TermDependencies::new(
                old.id,
                free_terms_except(premise, old.id),
            ));
        }
        extend(self.deduction, spec)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistentialGeneralizationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> ExistentialGeneralizationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// Generalizes `φ[old]` to `Ex φ[old := x]`. Always sound, so no
    /// dependencies are recorded.
    pub fn apply(
        &self,
        new_term: Sym,
        old_term: Option<Sym>,
    ) -> SequentResult<DeductionInterface> {
        let premise = &self.deduction.get_step(self.step)?.formula;
        let conclusion = generalize(premise, EXISTENTIAL_QUANTIFIER, new_term, old_term)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::ExistentialGeneralization,
                vec![self.step],
                conclusion,
            ),
        )
    }
}
