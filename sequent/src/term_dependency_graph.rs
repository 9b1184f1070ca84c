//! Global eigenvariable bookkeeping for a deduction.
//!
//! Instantiating an existential mints a term that depends on the other free
//! terms of the conclusion; generalizing a term universally makes it depend
//! on the other free terms of the premise. A cycle among these dependencies
//! is exactly an illegal quantifier swap, so the graph rejects any addition
//! that would close one.

use crate::error::SequentError;
use crate::SequentResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The dependencies one rule application contributes: `dependent` comes to
/// depend on every id in `dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDependencies {
    pub dependent: u32,
    pub dependencies: BTreeSet<u32>,
}

impl TermDependencies {
    pub fn new(dependent: u32, dependencies: impl IntoIterator<Item = u32>) -> Self {
        Self {
            dependent,
            dependencies: dependencies.into_iter().collect(),
        }
    }
}

/// Directed dependency graph over term ids, kept acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDependencyGraph {
    edges: BTreeMap<u32, BTreeSet<u32>>,
}

impl TermDependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The direct dependencies of `id`, if it has any.
    pub fn dependencies_of(&self, id: u32) -> Option<&BTreeSet<u32>> {
        self.edges.get(&id)
    }

    /// Whether `dependent` depends on `dependency`, directly or
    /// transitively.
    pub fn depends_on(&self, dependent: u32, dependency: u32) -> bool {
        let mut visited = BTreeSet::new();
        let mut stack = vec![dependent];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(direct) = self.edges.get(&current) {
                if direct.contains(&dependency) {
                    return true;
                }
                stack.extend(direct.iter().copied());
            }
        }
        false
    }

    /// Merges one rule application's dependencies into the graph.
    ///
    /// Rejected when any new edge would be a self-loop or close a cycle;
    /// on rejection the graph is left unchanged.
    pub fn add_dependencies(&mut self, added: &TermDependencies) -> SequentResult<()> {
        for &dependency in &added.dependencies {
            if dependency == added.dependent || self.depends_on(dependency, added.dependent) {
                return Err(SequentError::TermDependencyConflict {
                    dependent: added.dependent,
                    dependency,
                });
            }
        }
        self.edges
            .entry(added.dependent)
            .or_default()
            .extend(added.dependencies.iter().copied());
        Ok(())
    }
}
