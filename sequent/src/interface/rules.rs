//! Typed interfaces for the propositional rules.

use super::DeductionInterface;
use crate::deduction::{Deduction, RuleApplicationSpec};
use crate::error::SequentError;
use crate::expression::Expression;
use crate::primitives::{BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, NEGATION};
use crate::propositional::{binary_parts, is_tautological_implication};
use crate::rule::{Rule, Side};
use crate::sym::{Kind, Sym};
use crate::SequentResult;

fn extend(deduction: &Deduction, spec: RuleApplicationSpec) -> SequentResult<DeductionInterface> {
    Ok(DeductionInterface::new(deduction.apply_rule(spec)?))
}

fn require_formula(expression: &Expression) -> SequentResult<()> {
    if expression.kind() != Kind::Formula {
        return Err(SequentError::InvalidSymbolKind {
            text: expression.sym.to_string(),
            expected: Kind::Formula,
            actual: expression.kind(),
        });
    }
    Ok(())
}

fn parts<'e>(
    formula: &'e Expression,
    sym: Sym,
    rule: Rule,
) -> SequentResult<(&'e Expression, &'e Expression)> {
    binary_parts(formula, sym).ok_or(SequentError::RuleNotAllowed { rule })
}

fn binary(sym: Sym, left: Expression, right: Expression) -> Expression {
    Expression {
        sym,
        bound_sym: None,
        children: vec![left, right],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PremiseInterface<'a> {
    deduction: &'a Deduction,
}

impl<'a> PremiseInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction) -> Self {
        Self { deduction }
    }

    /// Adds `formula` as a premise. The new step assumes itself.
    pub fn apply(&self, formula: Expression) -> SequentResult<DeductionInterface> {
        require_formula(&formula)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(Rule::Premise, Vec::new(), formula),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TheoremInterface<'a> {
    deduction: &'a Deduction,
}

impl<'a> TheoremInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction) -> Self {
        Self { deduction }
    }

    /// Cites a previously established theorem. The step has no assumptions.
    pub fn apply(
        &self,
        theorem_id: impl Into<String>,
        theorem: Expression,
    ) -> SequentResult<DeductionInterface> {
        require_formula(&theorem)?;
        extend(
            self.deduction,
            RuleApplicationSpec::theorem(theorem_id, theorem),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepetitionInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> RepetitionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let formula = self.deduction.get_step(self.step)?.formula.clone();
        extend(
            self.deduction,
            RuleApplicationSpec::regular(Rule::Repetition, vec![self.step], formula),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalIntroductionInterface<'a> {
    deduction: &'a Deduction,
    premise_step: usize,
    conclusion_step: usize,
}

impl<'a> ConditionalIntroductionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, premise_step: usize, conclusion_step: usize) -> Self {
        Self {
            deduction,
            premise_step,
            conclusion_step,
        }
    }

    /// Discharges the premise: from a premise `p` and a conclusion `q`
    /// resting on it, derives `p -> q` no longer assuming `p`.
    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let antecedent = self.deduction.get_step(self.premise_step)?.formula.clone();
        let consequent = self
            .deduction
            .get_step(self.conclusion_step)?
            .formula
            .clone();
        let spec = RuleApplicationSpec::regular(
            Rule::ConditionalIntroduction,
            vec![self.premise_step, self.conclusion_step],
            binary(CONDITIONAL, antecedent, consequent),
        )
        .with_assumption_to_remove(self.premise_step);
        extend(self.deduction, spec)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalEliminationInterface<'a> {
    deduction: &'a Deduction,
    conditional_step: usize,
    antecedent_step: usize,
}

impl<'a> ConditionalEliminationInterface<'a> {
    pub(super) fn new(
        deduction: &'a Deduction,
        conditional_step: usize,
        antecedent_step: usize,
    ) -> Self {
        Self {
            deduction,
            conditional_step,
            antecedent_step,
        }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let conditional = &self.deduction.get_step(self.conditional_step)?.formula;
        let (_, consequent) = parts(conditional, CONDITIONAL, Rule::ConditionalElimination)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::ConditionalElimination,
                vec![self.conditional_step, self.antecedent_step],
                consequent.clone(),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionIntroductionInterface<'a> {
    deduction: &'a Deduction,
    left_step: usize,
    right_step: usize,
}

impl<'a> ConjunctionIntroductionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, left_step: usize, right_step: usize) -> Self {
        Self {
            deduction,
            left_step,
            right_step,
        }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let left = self.deduction.get_step(self.left_step)?.formula.clone();
        let right = self.deduction.get_step(self.right_step)?.formula.clone();
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::ConjunctionIntroduction,
                vec![self.left_step, self.right_step],
                binary(CONJUNCTION, left, right),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionEliminationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> ConjunctionEliminationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    pub fn apply(&self, side: Side) -> SequentResult<DeductionInterface> {
        let conjunction = &self.deduction.get_step(self.step)?.formula;
        let (left, right) = parts(conjunction, CONJUNCTION, Rule::ConjunctionElimination)?;
        let conclusion = match side {
            Side::Left => left.clone(),
            Side::Right => right.clone(),
        };
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::ConjunctionElimination,
                vec![self.step],
                conclusion,
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisjunctionIntroductionInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> DisjunctionIntroductionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// Weakens the step's formula into a disjunction with `other`. `side`
    /// is the side of the conclusion the existing formula occupies.
    pub fn apply(&self, other: Expression, side: Side) -> SequentResult<DeductionInterface> {
        require_formula(&other)?;
        let known = self.deduction.get_step(self.step)?.formula.clone();
        let conclusion = match side {
            Side::Left => binary(DISJUNCTION, known, other),
            Side::Right => binary(DISJUNCTION, other, known),
        };
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::DisjunctionIntroduction,
                vec![self.step],
                conclusion,
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisjunctionEliminationInterface<'a> {
    deduction: &'a Deduction,
    disjunction_step: usize,
    left_conditional_step: usize,
    right_conditional_step: usize,
}

impl<'a> DisjunctionEliminationInterface<'a> {
    pub(super) fn new(
        deduction: &'a Deduction,
        disjunction_step: usize,
        left_conditional_step: usize,
        right_conditional_step: usize,
    ) -> Self {
        Self {
            deduction,
            disjunction_step,
            left_conditional_step,
            right_conditional_step,
        }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let left_conditional = &self.deduction.get_step(self.left_conditional_step)?.formula;
        let (_, consequent) = parts(left_conditional, CONDITIONAL, Rule::DisjunctionElimination)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::DisjunctionElimination,
                vec![
                    self.disjunction_step,
                    self.left_conditional_step,
                    self.right_conditional_step,
                ],
                consequent.clone(),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiconditionalIntroductionInterface<'a> {
    deduction: &'a Deduction,
    forward_step: usize,
    backward_step: usize,
}

impl<'a> BiconditionalIntroductionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, forward_step: usize, backward_step: usize) -> Self {
        Self {
            deduction,
            forward_step,
            backward_step,
        }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let forward = &self.deduction.get_step(self.forward_step)?.formula;
        let (antecedent, consequent) =
            parts(forward, CONDITIONAL, Rule::BiconditionalIntroduction)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::BiconditionalIntroduction,
                vec![self.forward_step, self.backward_step],
                binary(BICONDITIONAL, antecedent.clone(), consequent.clone()),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiconditionalEliminationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> BiconditionalEliminationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    /// `Side::Left` yields the left-to-right conditional, `Side::Right` the
    /// converse.
    pub fn apply(&self, side: Side) -> SequentResult<DeductionInterface> {
        let biconditional = &self.deduction.get_step(self.step)?.formula;
        let (left, right) = parts(biconditional, BICONDITIONAL, Rule::BiconditionalElimination)?;
        let conclusion = match side {
            Side::Left => binary(CONDITIONAL, left.clone(), right.clone()),
            Side::Right => binary(CONDITIONAL, right.clone(), left.clone()),
        };
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::BiconditionalElimination,
                vec![self.step],
                conclusion,
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NegationIntroductionInterface<'a> {
    deduction: &'a Deduction,
    premise_step: usize,
    conclusion_step: usize,
    negated_conclusion_step: usize,
}

impl<'a> NegationIntroductionInterface<'a> {
    pub(super) fn new(
        deduction: &'a Deduction,
        premise_step: usize,
        conclusion_step: usize,
        negated_conclusion_step: usize,
    ) -> Self {
        Self {
            deduction,
            premise_step,
            conclusion_step,
            negated_conclusion_step,
        }
    }

    /// Reductio: a premise leading to both `q` and `~q` is discharged into
    /// its negation.
    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let premise = self.deduction.get_step(self.premise_step)?.formula.clone();
        let spec = RuleApplicationSpec::regular(
            Rule::NegationIntroduction,
            vec![
                self.premise_step,
                self.conclusion_step,
                self.negated_conclusion_step,
            ],
            Expression {
                sym: NEGATION,
                bound_sym: None,
                children: vec![premise],
            },
        )
        .with_assumption_to_remove(self.premise_step);
        extend(self.deduction, spec)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NegationEliminationInterface<'a> {
    deduction: &'a Deduction,
    step: usize,
}

impl<'a> NegationEliminationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, step: usize) -> Self {
        Self { deduction, step }
    }

    pub fn apply(&self) -> SequentResult<DeductionInterface> {
        let formula = &self.deduction.get_step(self.step)?.formula;
        let inner = formula
            .children
            .first()
            .filter(|_| formula.sym.id == NEGATION.id)
            .and_then(|negated| {
                negated
                    .children
                    .first()
                    .filter(|_| negated.sym.id == NEGATION.id)
            })
            .ok_or(SequentError::RuleNotAllowed {
                rule: Rule::NegationElimination,
            })?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::NegationElimination,
                vec![self.step],
                inner.clone(),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionInterface<'a> {
    deduction: &'a Deduction,
    formula_step: usize,
    negation_step: usize,
}

impl<'a> ExplosionInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, formula_step: usize, negation_step: usize) -> Self {
        Self {
            deduction,
            formula_step,
            negation_step,
        }
    }

    /// From a contradiction, any formula follows.
    pub fn apply(&self, conclusion: Expression) -> SequentResult<DeductionInterface> {
        require_formula(&conclusion)?;
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::Explosion,
                vec![self.formula_step, self.negation_step],
                conclusion,
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TautologicalImplicationInterface<'a> {
    deduction: &'a Deduction,
    steps: Vec<usize>,
}

impl<'a> TautologicalImplicationInterface<'a> {
    pub(super) fn new(deduction: &'a Deduction, steps: Vec<usize>) -> Self {
        Self { deduction, steps }
    }

    /// Accepts any conclusion that follows truth-functionally from the
    /// selected steps.
    pub fn apply(&self, conclusion: Expression) -> SequentResult<DeductionInterface> {
        require_formula(&conclusion)?;
        let mut premises = Vec::with_capacity(self.steps.len());
        for &step in &self.steps {
            premises.push(self.deduction.get_step(step)?.formula.clone());
        }
        if !is_tautological_implication(&premises, &conclusion) {
            return Err(SequentError::InvalidTautologicalImplication);
        }
        extend(
            self.deduction,
            RuleApplicationSpec::regular(
                Rule::TautologicalImplication,
                self.steps.clone(),
                conclusion,
            ),
        )
    }
}
