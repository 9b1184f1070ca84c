//! Immutable expression trees and the traversals and transforms over them.
//!
//! An `Expression` is a tree of symbols. Every transform returns a new owned
//! value; nothing is mutated in place, so older references stay valid and
//! structural equality is the only equality.

use crate::error::SequentError;
use crate::sym::{Kind, Sym};
use crate::SequentResult;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A path of child indices addressing a subexpression.
pub type Position = Vec<usize>;

/// A tree of symbols: a formula or a term, depending on the main symbol's
/// kind.
///
/// Invariants: `children.len()` equals the main symbol's arity, every child's
/// kind equals the main symbol's argument kind, and `bound_sym` is present
/// exactly when the main symbol binds (and is then a nullary term). The
/// checked constructors enforce these; transforms preserve them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    pub sym: Sym,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bound_sym: Option<Sym>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Expression>,
}

impl Expression {
    /// An expression consisting of a single nullary symbol.
    pub fn atomic(sym: Sym) -> Self {
        Self {
            sym,
            bound_sym: None,
            children: Vec::new(),
        }
    }

    /// Checked construction: validates arity, child kinds and the bound
    /// symbol against the main symbol.
    pub fn new(
        sym: Sym,
        bound_sym: Option<Sym>,
        children: Vec<Expression>,
    ) -> SequentResult<Self> {
        if children.len() != sym.arity as usize {
            return Err(SequentError::InvalidArity {
                text: sym.to_string(),
                expected: sym.arity,
                actual: children.len() as u32,
            });
        }
        for child in &children {
            if child.sym.kind != sym.argument_kind {
                return Err(SequentError::InvalidSymbolKind {
                    text: child.sym.to_string(),
                    expected: sym.argument_kind,
                    actual: child.sym.kind,
                });
            }
        }
        match (sym.binds, bound_sym) {
            (true, Some(bound)) if !bound.is_bindable() => {
                return Err(SequentError::InvalidBoundSymbol {
                    text: bound.to_string(),
                })
            }
            (true, None) | (false, Some(_)) => {
                return Err(SequentError::InvalidBoundSymbol {
                    text: sym.to_string(),
                })
            }
            _ => {}
        }
        Ok(Self {
            sym,
            bound_sym,
            children,
        })
    }

    /// The kind of this expression, determined by its main symbol.
    pub fn kind(&self) -> Kind {
        self.sym.kind
    }

    /// Follows a child-index path to the addressed subexpression.
    pub fn get_subexpression(&self, position: &[usize]) -> SequentResult<&Expression> {
        let mut current = self;
        for &index in position {
            current =
                current
                    .children
                    .get(index)
                    .ok_or_else(|| SequentError::PositionOutOfRange {
                        position: position.to_vec(),
                        index,
                    })?;
        }
        Ok(current)
    }

    /// The inclusive chain of subexpressions from the root down to the
    /// addressed subexpression.
    pub fn get_subexpressions_on_path(
        &self,
        position: &[usize],
    ) -> SequentResult<Vec<&Expression>> {
        let mut chain = vec![self];
        let mut current = self;
        for &index in position {
            current =
                current
                    .children
                    .get(index)
                    .ok_or_else(|| SequentError::PositionOutOfRange {
                        position: position.to_vec(),
                        index,
                    })?;
            chain.push(current);
        }
        Ok(chain)
    }

    /// Positions, in pre-order, where `sym` occurs free: not inside the
    /// scope of a binder with the same id. A match at the root is `[]`.
    pub fn find_free_occurrences(&self, sym: Sym) -> Vec<Position> {
        let mut occurrences = Vec::new();
        self.collect_free_occurrences(sym, &mut Vec::new(), &mut occurrences);
        occurrences
    }

    fn collect_free_occurrences(
        &self,
        sym: Sym,
        position: &mut Position,
        out: &mut Vec<Position>,
    ) {
        if self.sym.id == sym.id {
            out.push(position.clone());
        }
        // A binder over the same id shadows everything beneath it.
        if self.bound_sym.is_some_and(|bound| bound.id == sym.id) {
            return;
        }
        for (index, child) in self.children.iter().enumerate() {
            position.push(index);
            child.collect_free_occurrences(sym, position, out);
            position.pop();
        }
    }

    /// Positions within the children where this expression's own bound
    /// symbol occurs free (not re-shadowed by a nested binder). Fails when
    /// the expression doesn't bind.
    pub fn find_bound_occurrences(&self) -> SequentResult<Vec<Position>> {
        let bound = self.bound_sym.ok_or(SequentError::ExpressionDoesntBind)?;
        let mut occurrences = Vec::new();
        for (index, child) in self.children.iter().enumerate() {
            for occurrence in child.find_free_occurrences(bound) {
                let mut position = Vec::with_capacity(occurrence.len() + 1);
                position.push(index);
                position.extend(occurrence);
                occurrences.push(position);
            }
        }
        Ok(occurrences)
    }

    /// Every symbol in the tree, including bound symbols, keyed by id.
    pub fn get_syms(&self) -> HashMap<u32, Sym> {
        let mut syms = HashMap::new();
        self.collect_syms(&mut syms);
        syms
    }

    fn collect_syms(&self, out: &mut HashMap<u32, Sym>) {
        out.insert(self.sym.id, self.sym);
        if let Some(bound) = self.bound_sym {
            out.insert(bound.id, bound);
        }
        for child in &self.children {
            child.collect_syms(out);
        }
    }

    /// Every symbol with at least one free occurrence in the tree, keyed by
    /// id. Binders themselves count; their bound symbols don't.
    pub fn get_free_syms(&self) -> HashMap<u32, Sym> {
        let mut syms = HashMap::new();
        self.collect_free_syms(&mut HashSet::new(), &mut syms);
        syms
    }

    fn collect_free_syms(&self, bound: &mut HashSet<u32>, out: &mut HashMap<u32, Sym>) {
        if !bound.contains(&self.sym.id) {
            out.insert(self.sym.id, self.sym);
        }
        let entered_scope = match self.bound_sym {
            Some(sym) => bound.insert(sym.id),
            None => false,
        };
        for child in &self.children {
            child.collect_free_syms(bound, out);
        }
        if entered_scope {
            if let Some(sym) = self.bound_sym {
                bound.remove(&sym.id);
            }
        }
    }

    /// Free symbols of kind term, keyed by id.
    pub fn get_free_terms(&self) -> HashMap<u32, Sym> {
        self.get_free_syms()
            .into_iter()
            .filter(|(_, sym)| sym.kind == Kind::Term)
            .collect()
    }

    /// For every free occurrence of `sym`, the binder symbols whose scope
    /// contains that occurrence, keyed by id. Used to detect would-be
    /// capture before substituting.
    pub fn find_bound_syms_at_free_occurrences_of_sym(&self, sym: Sym) -> HashMap<u32, Sym> {
        let mut syms = HashMap::new();
        self.collect_bound_syms_at(sym, &mut Vec::new(), &mut syms);
        syms
    }

    fn collect_bound_syms_at(
        &self,
        sym: Sym,
        binders: &mut Vec<Sym>,
        out: &mut HashMap<u32, Sym>,
    ) {
        if self.sym.id == sym.id {
            for binder in binders.iter() {
                out.insert(binder.id, *binder);
            }
        }
        if self.bound_sym.is_some_and(|bound| bound.id == sym.id) {
            return;
        }
        if let Some(bound) = self.bound_sym {
            binders.push(bound);
        }
        for child in &self.children {
            child.collect_bound_syms_at(sym, binders, out);
        }
        if self.bound_sym.is_some() {
            binders.pop();
        }
    }

    /// Capture-avoiding substitution of every free occurrence of `old_sym`
    /// by `new_sym`.
    ///
    /// A binder whose bound symbol has `new_sym`'s id and whose scope
    /// contains a free occurrence of `old_sym` is alpha-renamed with a fresh
    /// symbol from `get_bound_sym` before descending, so the substituted
    /// symbol is never accidentally captured. A binder whose bound symbol is
    /// `old_sym` shadows its scope and is left untouched.
    ///
    /// When a replaced occurrence needs more children than the original had
    /// (`new_sym.arity > old_sym.arity`), the missing children come from
    /// `get_child`; surplus children are dropped. A binding `new_sym` takes
    /// its bound symbol from `get_bound_sym`.
    pub fn replace_free_occurrences<B, C>(
        &self,
        old_sym: Sym,
        new_sym: Sym,
        get_bound_sym: &mut B,
        get_child: &mut C,
    ) -> Expression
    where
        B: FnMut() -> Sym,
        C: FnMut() -> Expression,
    {
        if self.bound_sym.is_some_and(|bound| bound.id == old_sym.id) {
            return self.clone();
        }

        if self.bound_sym.is_some_and(|bound| bound.id == new_sym.id)
            && !self.find_free_occurrences(old_sym).is_empty()
        {
            let fresh = get_bound_sym();
            return self
                .rename_bound(fresh)
                .replace_free_occurrences(old_sym, new_sym, get_bound_sym, get_child);
        }

        if self.sym.id == old_sym.id {
            let mut children: Vec<Expression> = self
                .children
                .iter()
                .take(new_sym.arity as usize)
                .map(|child| {
                    child.replace_free_occurrences(old_sym, new_sym, get_bound_sym, get_child)
                })
                .collect();
            while children.len() < new_sym.arity as usize {
                children.push(get_child());
            }
            let bound_sym = if new_sym.binds {
                Some(get_bound_sym())
            } else {
                None
            };
            return Expression {
                sym: new_sym,
                bound_sym,
                children,
            };
        }

        Expression {
            sym: self.sym,
            bound_sym: self.bound_sym,
            children: self
                .children
                .iter()
                .map(|child| {
                    child.replace_free_occurrences(old_sym, new_sym, get_bound_sym, get_child)
                })
                .collect(),
        }
    }

    /// Pure alpha-conversion: renames this binder's bound symbol to
    /// `new_sym`, consistently across its scope. Other free symbols are
    /// never touched. Fails when the expression doesn't bind.
    pub fn replace_bound_occurrences(&self, new_sym: Sym) -> SequentResult<Expression> {
        if self.bound_sym.is_none() {
            return Err(SequentError::ExpressionDoesntBind);
        }
        Ok(self.rename_bound(new_sym))
    }

    /// Alpha-converts the binder addressed by `position`, rebuilding the
    /// ancestors persistently.
    pub fn replace_bound_occurrences_at(
        &self,
        position: &[usize],
        new_sym: Sym,
    ) -> SequentResult<Expression> {
        match position.split_first() {
            None => self.replace_bound_occurrences(new_sym),
            Some((&index, rest)) => {
                let child = self.children.get(index).ok_or_else(|| {
                    SequentError::PositionOutOfRange {
                        position: position.to_vec(),
                        index,
                    }
                })?;
                let replaced = child.replace_bound_occurrences_at(rest, new_sym)?;
                let mut children = self.children.clone();
                children[index] = replaced;
                Ok(Expression {
                    sym: self.sym,
                    bound_sym: self.bound_sym,
                    children,
                })
            }
        }
    }

    fn rename_bound(&self, fresh: Sym) -> Expression {
        let old = match self.bound_sym {
            Some(bound) => bound,
            None => return self.clone(),
        };
        Expression {
            sym: self.sym,
            bound_sym: Some(fresh),
            children: self
                .children
                .iter()
                .map(|child| child.rename_free(old, fresh))
                .collect(),
        }
    }

    fn rename_free(&self, old: Sym, new: Sym) -> Expression {
        if self.bound_sym.is_some_and(|bound| bound.id == old.id) {
            return self.clone();
        }
        let sym = if self.sym.id == old.id { new } else { self.sym };
        Expression {
            sym,
            bound_sym: self.bound_sym,
            children: self
                .children
                .iter()
                .map(|child| child.rename_free(old, new))
                .collect(),
        }
    }

    /// Left-folds two or more expressions into a left-associated tree under
    /// a binary symbol.
    pub fn connect_with_binary_sym(
        expressions: Vec<Expression>,
        sym: Sym,
    ) -> SequentResult<Expression> {
        let actual = expressions.len();
        let mut iter = expressions.into_iter();
        let first = match iter.next() {
            Some(first) if actual >= 2 => first,
            _ => return Err(SequentError::NotEnoughExpressions { actual }),
        };
        Ok(iter.fold(first, |left, right| Expression {
            sym,
            bound_sym: None,
            children: vec![left, right],
        }))
    }

    /// Canonical alpha-equivalence-quotiented copy.
    ///
    /// Every distinct symbol encountered in prefix order is renumbered to
    /// the smallest unused id. Ids pre-assigned in `table` stay stable.
    /// Bound symbols are renamed scope-locally and their renamings are not
    /// recorded in the returned table, which is what quotients away
    /// alpha-variance: two expressions differing only in bound-symbol
    /// naming normalize to the same tree.
    pub fn normalize(&self, table: &HashMap<u32, Sym>) -> (Expression, HashMap<u32, Sym>) {
        let mut state = NormalizeState {
            used: table.values().map(|sym| sym.id).collect(),
            table: table.clone(),
        };
        let normalized = self.normalize_with(&mut state, &mut Vec::new());
        (normalized, state.table)
    }

    fn normalize_with(
        &self,
        state: &mut NormalizeState,
        scope: &mut Vec<(u32, Sym)>,
    ) -> Expression {
        let sym = if let Some((_, mapped)) = scope
            .iter()
            .rev()
            .find(|(old_id, _)| *old_id == self.sym.id)
        {
            *mapped
        } else if let Some(mapped) = state.table.get(&self.sym.id) {
            Sym {
                id: mapped.id,
                ..self.sym
            }
        } else {
            state.assign(self.sym)
        };

        let (bound_sym, entered_scope) = match self.bound_sym {
            Some(bound) => {
                let fresh = Sym {
                    id: state.claim_unused(),
                    ..bound
                };
                scope.push((bound.id, fresh));
                (Some(fresh), true)
            }
            None => (None, false),
        };

        let children = self
            .children
            .iter()
            .map(|child| child.normalize_with(state, scope))
            .collect();

        if entered_scope {
            scope.pop();
        }

        Expression {
            sym,
            bound_sym,
            children,
        }
    }
}

struct NormalizeState {
    table: HashMap<u32, Sym>,
    used: HashSet<u32>,
}

impl NormalizeState {
    fn claim_unused(&mut self) -> u32 {
        let mut id = 0;
        while self.used.contains(&id) {
            id += 1;
        }
        self.used.insert(id);
        id
    }

    fn assign(&mut self, sym: Sym) -> Sym {
        let fresh = Sym {
            id: self.claim_unused(),
            ..sym
        };
        self.table.insert(sym.id, fresh);
        fresh
    }
}
