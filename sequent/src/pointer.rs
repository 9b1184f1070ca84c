//! Pointers into expression trees.
//!
//! An `ExpressionPointer` pairs a borrowed root expression with a validated
//! position, so subexpression-relative queries (binding occurrences, scopes)
//! can be asked without re-walking or re-validating the path.

use crate::error::SequentError;
use crate::expression::{Expression, Position};
use crate::sym::Sym;
use crate::SequentResult;
use std::collections::HashMap;

/// A validated position inside a borrowed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionPointer<'a> {
    expression: &'a Expression,
    position: Position,
}

impl<'a> ExpressionPointer<'a> {
    /// Points into `expression` at `position`. Fails when the position
    /// doesn't address a subexpression.
    pub fn new(expression: &'a Expression, position: Position) -> SequentResult<Self> {
        expression.get_subexpression(&position)?;
        Ok(Self {
            expression,
            position,
        })
    }

    /// Points at the root of `expression`.
    pub fn root(expression: &'a Expression) -> Self {
        Self {
            expression,
            position: Vec::new(),
        }
    }

    pub fn expression(&self) -> &'a Expression {
        self.expression
    }

    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// The addressed subexpression. Infallible: the position was validated
    /// at construction and the tree is immutable.
    pub fn target(&self) -> &'a Expression {
        let mut current = self.expression;
        for &index in &self.position {
            current = &current.children[index];
        }
        current
    }

    pub fn is_root(&self) -> bool {
        self.position.is_empty()
    }

    /// A pointer at the immediately enclosing expression.
    pub fn parent(&self) -> SequentResult<ExpressionPointer<'a>> {
        if self.is_root() {
            return Err(SequentError::CantGetParentOfRoot);
        }
        let mut position = self.position.clone();
        position.pop();
        Ok(ExpressionPointer {
            expression: self.expression,
            position,
        })
    }

    /// The inclusive chain of subexpressions from the root down to the
    /// target.
    pub fn get_subexpressions_on_path(&self) -> Vec<&'a Expression> {
        let mut chain = vec![self.expression];
        let mut current = self.expression;
        for &index in &self.position {
            current = &current.children[index];
            chain.push(current);
        }
        chain
    }

    /// The position of the binder whose scope captures the target's
    /// occurrence of `sym`, or `None` when the occurrence is free in the
    /// whole expression. Defaults to the target's own main symbol.
    pub fn find_binding_occurrence(&self, sym: Option<Sym>) -> Option<Position> {
        let sym = sym.unwrap_or(self.target().sym);
        let chain = self.get_subexpressions_on_path();
        // Nearest enclosing binder over the id is the binding one.
        for depth in (0..self.position.len()).rev() {
            if chain[depth].bound_sym.is_some_and(|bound| bound.id == sym.id) {
                return Some(self.position[..depth].to_vec());
            }
        }
        None
    }

    /// The bound symbols of every binder strictly above the target, keyed
    /// by id and including vacuous ones.
    pub fn get_bound_syms(&self) -> HashMap<u32, Sym> {
        let chain = self.get_subexpressions_on_path();
        chain[..self.position.len()]
            .iter()
            .filter_map(|ancestor| ancestor.bound_sym)
            .map(|bound| (bound.id, bound))
            .collect()
    }

    /// Free occurrences of `sym` within the target, as positions relative
    /// to the root.
    pub fn find_free_occurrences(&self, sym: Sym) -> Vec<Position> {
        self.target()
            .find_free_occurrences(sym)
            .into_iter()
            .map(|occurrence| self.prefixed(occurrence))
            .collect()
    }

    /// Occurrences bound by the target's own binder, as positions relative
    /// to the root.
    pub fn find_bound_occurrences(&self) -> SequentResult<Vec<Position>> {
        Ok(self
            .target()
            .find_bound_occurrences()?
            .into_iter()
            .map(|occurrence| self.prefixed(occurrence))
            .collect())
    }

    fn prefixed(&self, occurrence: Position) -> Position {
        let mut position = Vec::with_capacity(self.position.len() + occurrence.len());
        position.extend_from_slice(&self.position);
        position.extend(occurrence);
        position
    }
}
