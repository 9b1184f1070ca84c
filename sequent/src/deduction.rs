//! Deductions: append-only sequences of checked proof steps.

use crate::error::SequentError;
use crate::expression::Expression;
use crate::rule::Rule;
use crate::term_dependency_graph::{TermDependencies, TermDependencyGraph};
use crate::SequentResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a step was derived: its rule, the indices of the steps it used, and
/// any eigenvariable dependencies or theorem reference it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleApplicationSummary {
    pub rule: Rule,
    pub premises: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub term_dependencies: Option<TermDependencies>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theorem_id: Option<String>,
}

/// One line of a deduction. Assumptions are the indices of the premise
/// steps the formula still rests on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub formula: Expression,
    pub assumptions: BTreeSet<usize>,
    pub rule_application_summary: RuleApplicationSummary,
}

/// A fully specified rule application, ready to be checked against a
/// deduction. Produced by the rule interfaces; `Deduction::apply_rule`
/// consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleApplicationSpec {
    Regular {
        rule: Rule,
        premises: Vec<usize>,
        conclusion: Expression,
        term_dependencies: Option<TermDependencies>,
        assumption_to_remove: Option<usize>,
    },
    Theorem {
        theorem_id: String,
        theorem: Expression,
    },
}

impl RuleApplicationSpec {
    pub fn regular(rule: Rule, premises: Vec<usize>, conclusion: Expression) -> Self {
        Self::Regular {
            rule,
            premises,
            conclusion,
            term_dependencies: None,
            assumption_to_remove: None,
        }
    }

    pub fn theorem(theorem_id: impl Into<String>, theorem: Expression) -> Self {
        Self::Theorem {
            theorem_id: theorem_id.into(),
            theorem,
        }
    }

    pub fn with_term_dependencies(mut self, dependencies: TermDependencies) -> Self {
        if let Self::Regular {
            term_dependencies, ..
        } = &mut self
        {
            *term_dependencies = Some(dependencies);
        }
        self
    }

    pub fn with_assumption_to_remove(mut self, premise_index: usize) -> Self {
        if let Self::Regular {
            assumption_to_remove,
            ..
        } = &mut self
        {
            *assumption_to_remove = Some(premise_index);
        }
        self
    }
}

/// An append-only proof. Applying a rule never mutates: it yields a new
/// deduction extended by one step, so earlier snapshots stay valid and undo
/// is just keeping the previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    steps: Vec<Step>,
    term_dependency_graph: TermDependencyGraph,
}

impl Deduction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn term_dependency_graph(&self) -> &TermDependencyGraph {
        &self.term_dependency_graph
    }

    pub fn get_step(&self, index: usize) -> SequentResult<&Step> {
        self.steps
            .get(index)
            .ok_or(SequentError::StepIndexOutOfRange {
                index,
                size: self.steps.len(),
            })
    }

    pub fn get_last_step(&self) -> SequentResult<&Step> {
        match self.steps.last() {
            Some(step) => Ok(step),
            None => Err(SequentError::StepIndexOutOfRange {
                index: 0,
                size: 0,
            }),
        }
    }

    /// Checks and applies a rule application, returning the extended
    /// deduction.
    ///
    /// Term dependencies are merged into the graph before the step is
    /// added, so a dependency conflict rejects the whole application.
    pub fn apply_rule(&self, spec: RuleApplicationSpec) -> SequentResult<Deduction> {
        match spec {
            RuleApplicationSpec::Regular {
                rule,
                premises,
                conclusion,
                term_dependencies,
                assumption_to_remove,
            } => self.apply_regular(
                rule,
                premises,
                conclusion,
                term_dependencies,
                assumption_to_remove,
            ),
            RuleApplicationSpec::Theorem {
                theorem_id,
                theorem,
            } => {
                let mut next = self.clone();
                next.steps.push(Step {
                    formula: theorem,
                    assumptions: BTreeSet::new(),
                    rule_application_summary: RuleApplicationSummary {
                        rule: Rule::Theorem,
                        premises: Vec::new(),
                        term_dependencies: None,
                        theorem_id: Some(theorem_id),
                    },
                });
                Ok(next)
            }
        }
    }

    fn apply_regular(
        &self,
        rule: Rule,
        premises: Vec<usize>,
        conclusion: Expression,
        term_dependencies: Option<TermDependencies>,
        assumption_to_remove: Option<usize>,
    ) -> SequentResult<Deduction> {
        for &premise in &premises {
            if premise >= self.steps.len() {
                return Err(SequentError::StepIndexOutOfRange {
                    index: premise,
                    size: self.steps.len(),
                });
            }
        }

        let mut graph = self.term_dependency_graph.clone();
        if let Some(dependencies) = &term_dependencies {
            graph.add_dependencies(dependencies)?;
        }

        let mut assumptions = BTreeSet::new();
        for &premise in &premises {
            assumptions.extend(self.steps[premise].assumptions.iter().copied());
        }
        if let Some(discharged) = assumption_to_remove {
            assumptions.remove(&discharged);
        }
        if rule == Rule::Premise {
            assumptions.insert(self.steps.len());
        }

        let mut next = self.clone();
        next.term_dependency_graph = graph;
        next.steps.push(Step {
            formula: conclusion,
            assumptions,
            rule_application_summary: RuleApplicationSummary {
                rule,
                premises,
                term_dependencies,
                theorem_id: None,
            },
        });
        Ok(next)
    }
}
