//! The step-selection workflow for building deductions.
//!
//! A `DeductionInterface` wraps a deduction; selecting step ordinals yields
//! a `RulesInterface`, which knows which rules the selection admits;
//! choosing a rule yields a typed per-rule interface whose `apply` takes
//! exactly the extra inputs that rule needs and returns the extended
//! deduction.

mod quantification;
mod rules;

pub use quantification::{
    ExistentialGeneralizationInterface, ExistentialInstantiationInterface,
    UniversalGeneralizationInterface, UniversalInstantiationInterface,
};
pub use rules::{
    BiconditionalEliminationInterface, BiconditionalIntroductionInterface,
    ConditionalEliminationInterface, ConditionalIntroductionInterface,
    ConjunctionEliminationInterface, ConjunctionIntroductionInterface,
    DisjunctionEliminationInterface, DisjunctionIntroductionInterface, ExplosionInterface,
    NegationEliminationInterface, NegationIntroductionInterface, PremiseInterface,
    RepetitionInterface, TautologicalImplicationInterface, TheoremInterface,
};

use crate::deduction::Deduction;
use crate::error::SequentError;
use crate::expression::Expression;
use crate::primitives::{
    BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, EXISTENTIAL_QUANTIFIER,
    UNIVERSAL_QUANTIFIER,
};
use crate::propositional::{binary_parts, is_double_negation, is_negation_of};
use crate::rule::Rule;
use crate::SequentResult;

/// Starts (or resumes) building a deduction.
pub fn start_deduction(deduction: Option<Deduction>) -> DeductionInterface {
    DeductionInterface::new(deduction.unwrap_or_default())
}

/// A deduction in the selecting-steps state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionInterface {
    deduction: Deduction,
}

impl DeductionInterface {
    pub fn new(deduction: Deduction) -> Self {
        Self { deduction }
    }

    pub fn deduction(&self) -> &Deduction {
        &self.deduction
    }

    pub fn into_deduction(self) -> Deduction {
        self.deduction
    }

    /// Selects steps by their 1-based ordinals, in the order given. The
    /// order fixes the role each step plays in the rule chosen next.
    pub fn select_steps(&self, ordinals: &[usize]) -> SequentResult<RulesInterface<'_>> {
        let size = self.deduction.size();
        let mut steps = Vec::with_capacity(ordinals.len());
        for &ordinal in ordinals {
            if ordinal == 0 || ordinal > size {
                return Err(SequentError::StepOrdinalOutOfRange { ordinal, size });
            }
            steps.push(ordinal - 1);
        }
        Ok(RulesInterface {
            deduction: &self.deduction,
            steps,
        })
    }
}

/// A selection of steps, ready to have a rule chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesInterface<'a> {
    deduction: &'a Deduction,
    steps: Vec<usize>,
}

impl<'a> RulesInterface<'a> {
    pub fn selected_steps(&self) -> &[usize] {
        &self.steps
    }

    fn formula(&self, selection: usize) -> &'a Expression {
        &self.deduction.steps()[self.steps[selection]].formula
    }

    /// The rules this selection admits, by shape of the selected formulas.
    pub fn allowed_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|&rule| self.is_allowed(rule))
            .collect()
    }

    pub fn is_allowed(&self, rule: Rule) -> bool {
        let count = self.steps.len();
        match rule {
            Rule::Premise | Rule::Theorem => count == 0,
            Rule::Repetition
            | Rule::DisjunctionIntroduction
            | Rule::UniversalGeneralization
            | Rule::ExistentialGeneralization => count == 1,
            Rule::ConjunctionIntroduction => count == 2,
            Rule::TautologicalImplication => true,
            Rule::ConditionalIntroduction => {
                count == 2
                    && self.deduction.steps()[self.steps[0]]
                        .rule_application_summary
                        .rule
                        == Rule::Premise
                    && self.deduction.steps()[self.steps[1]]
                        .assumptions
                        .contains(&self.steps[0])
            }
            Rule::ConditionalElimination => {
                count == 2
                    && binary_parts(self.formula(0), CONDITIONAL)
                        .map_or(false, |(antecedent, _)| antecedent == self.formula(1))
            }
            Rule::ConjunctionElimination => {
                count == 1 && binary_parts(self.formula(0), CONJUNCTION).is_some()
            }
            Rule::DisjunctionElimination => {
                count == 3
                    && match (
                        binary_parts(self.formula(0), DISJUNCTION),
                        binary_parts(self.formula(1), CONDITIONAL),
                        binary_parts(self.formula(2), CONDITIONAL),
                    ) {
                        (Some((left, right)), Some((from1, to1)), Some((from2, to2))) => {
                            left == from1 && right == from2 && to1 == to2
                        }
                        _ => false,
                    }
            }
            Rule::BiconditionalIntroduction => {
                count == 2
                    && match (
                        binary_parts(self.formula(0), CONDITIONAL),
                        binary_parts(self.formula(1), CONDITIONAL),
                    ) {
                        (Some((from1, to1)), Some((from2, to2))) => {
                            from1 == to2 && to1 == from2
                        }
                        _ => false,
                    }
            }
            Rule::BiconditionalElimination => {
                count == 1 && binary_parts(self.formula(0), BICONDITIONAL).is_some()
            }
            Rule::NegationIntroduction => {
                count == 3
                    && self.deduction.steps()[self.steps[0]]
                        .rule_application_summary
                        .rule
                        == Rule::Premise
                    && self.deduction.steps()[self.steps[1]]
                        .assumptions
                        .contains(&self.steps[0])
                    && self.deduction.steps()[self.steps[2]]
                        .assumptions
                        .contains(&self.steps[0])
                    && is_negation_of(self.formula(2), self.formula(1))
            }
            Rule::NegationElimination => count == 1 && is_double_negation(self.formula(0)),
            Rule::Explosion => {
                count == 2
                    && (is_negation_of(self.formula(1), self.formula(0))
                        || is_negation_of(self.formula(0), self.formula(1)))
            }
            Rule::UniversalInstantiation => {
                count == 1 && self.formula(0).sym.id == UNIVERSAL_QUANTIFIER.id
            }
            Rule::ExistentialInstantiation => {
                count == 1 && self.formula(0).sym.id == EXISTENTIAL_QUANTIFIER.id
            }
        }
    }

    /// Commits to a rule, producing its typed interface. Fails with
    /// `RuleNotAllowed` when the selection doesn't fit the rule.
    pub fn choose_rule(&self, rule: Rule) -> SequentResult<RuleInterface<'a>> {
        if !self.is_allowed(rule) {
            return Err(SequentError::RuleNotAllowed { rule });
        }
        let deduction = self.deduction;
        let interface = match rule {
            Rule::Premise => RuleInterface::Premise(PremiseInterface::new(deduction)),
            Rule::Theorem => RuleInterface::Theorem(TheoremInterface::new(deduction)),
            Rule::Repetition => {
                RuleInterface::Repetition(RepetitionInterface::new(deduction, self.steps[0]))
            }
            Rule::ConditionalIntroduction => RuleInterface::ConditionalIntroduction(
                ConditionalIntroductionInterface::new(deduction, self.steps[0], self.steps[1]),
            ),
            Rule::ConditionalElimination => RuleInterface::ConditionalElimination(
                ConditionalEliminationInterface::new(deduction, self.steps[0], self.steps[1]),
            ),
            Rule::ConjunctionIntroduction => RuleInterface::ConjunctionIntroduction(
                ConjunctionIntroductionInterface::new(deduction, self.steps[0], self.steps[1]),
            ),
            Rule::ConjunctionElimination => RuleInterface::ConjunctionElimination(
                ConjunctionEliminationInterface::new(deduction, self.steps[0]),
            ),
            Rule::DisjunctionIntroduction => RuleInterface::DisjunctionIntroduction(
                DisjunctionIntroductionInterface::new(deduction, self.steps[0]),
            ),
            Rule::DisjunctionElimination => {
                RuleInterface::DisjunctionElimination(DisjunctionEliminationInterface::new(
                    deduction,
                    self.steps[0],
                    self.steps[1],
                    self.steps[2],
                ))
            }
            Rule::BiconditionalIntroduction => RuleInterface::BiconditionalIntroduction(
                BiconditionalIntroductionInterface::new(deduction, self.steps[0], self.steps[1]),
            ),
            Rule::BiconditionalElimination => RuleInterface::BiconditionalElimination(
                BiconditionalEliminationInterface::new(deduction, self.steps[0]),
            ),
            Rule::NegationIntroduction => {
                RuleInterface::NegationIntroduction(NegationIntroductionInterface::new(
                    deduction,
                    self.steps[0],
                    self.steps[1],
                    self.steps[2],
                ))
            }
            Rule::NegationElimination => RuleInterface::NegationElimination(
                NegationEliminationInterface::new(deduction, self.steps[0]),
            ),
            Rule::Explosion => RuleInterface::Explosion(ExplosionInterface::new(
                deduction,
                self.steps[0],
                self.steps[1],
            )),
            Rule::UniversalInstantiation => RuleInterface::UniversalInstantiation(
                UniversalInstantiationInterface::new(deduction, self.steps[0]),
            ),
            Rule::UniversalGeneralization => RuleInterface::UniversalGeneralization(
                UniversalGeneralizationInterface::new(deduction, self.steps[0]),
            ),
            Rule::ExistentialInstantiation => RuleInterface::ExistentialInstantiation(
                ExistentialInstantiationInterface::new(deduction, self.steps[0]),
            ),
            Rule::ExistentialGeneralization => RuleInterface::ExistentialGeneralization(
                ExistentialGeneralizationInterface::new(deduction, self.steps[0]),
            ),
            Rule::TautologicalImplication => RuleInterface::TautologicalImplication(
                TautologicalImplicationInterface::new(deduction, self.steps.clone()),
            ),
        };
        Ok(interface)
    }
}

/// The rule-chosen state: one typed interface per rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleInterface<'a> {
    Premise(PremiseInterface<'a>),
    Theorem(TheoremInterface<'a>),
    Repetition(RepetitionInterface<'a>),
    ConditionalIntroduction(ConditionalIntroductionInterface<'a>),
    ConditionalElimination(ConditionalEliminationInterface<'a>),
    ConjunctionIntroduction(ConjunctionIntroductionInterface<'a>),
    ConjunctionElimination(ConjunctionEliminationInterface<'a>),
    DisjunctionIntroduction(DisjunctionIntroductionInterface<'a>),
    DisjunctionElimination(DisjunctionEliminationInterface<'a>),
    BiconditionalIntroduction(BiconditionalIntroductionInterface<'a>),
    BiconditionalElimination(BiconditionalEliminationInterface<'a>),
    NegationIntroduction(NegationIntroductionInterface<'a>),
    NegationElimination(NegationEliminationInterface<'a>),
    Explosion(ExplosionInterface<'a>),
    UniversalInstantiation(UniversalInstantiationInterface<'a>),
    UniversalGeneralization(UniversalGeneralizationInterface<'a>),
    ExistentialInstantiation(ExistentialInstantiationInterface<'a>),
    ExistentialGeneralization(ExistentialGeneralizationInterface<'a>),
    TautologicalImplication(TautologicalImplicationInterface<'a>),
}
