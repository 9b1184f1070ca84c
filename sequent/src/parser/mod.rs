//! Formula parser and symbol table.
//!
//! Symbols are minted on first sight and identified by text thereafter, so
//! every occurrence of a name within one parser's lifetime resolves to the
//! same id. Uppercase letters in formula position are predicates, lowercase
//! single letters are propositional variables or terms depending on
//! position; `A` and `E` are the quantifiers.

use crate::error::SequentError;
use crate::expression::Expression;
use crate::presentation::{primitive_presentations, Placement, SymPresentation};
use crate::primitives::{
    self, BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, EXISTENTIAL_QUANTIFIER, NEGATION,
    UNIVERSAL_QUANTIFIER,
};
use crate::sym::{Kind, Sym};
use crate::SequentResult;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::collections::HashMap;

#[derive(Parser)]
#[grammar = "src/parser/formula.pest"]
struct PestFormulaParser;

/// Names, ids and presentations of the symbols seen by one parser.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    syms: HashMap<u32, Sym>,
    presentations: HashMap<u32, SymPresentation>,
    text_to_sym: HashMap<String, Sym>,
    max_sym_id: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        let syms = primitives::primitive_syms();
        let presentations = primitive_presentations();
        let text_to_sym = presentations
            .iter()
            .filter_map(|(id, presentation)| {
                syms.get(id).map(|&sym| (presentation.text.clone(), sym))
            })
            .collect();
        Self {
            syms,
            presentations,
            text_to_sym,
            max_sym_id: primitives::MAX_PRIMITIVE_ID,
        }
    }

    pub fn syms(&self) -> &HashMap<u32, Sym> {
        &self.syms
    }

    pub fn presentations(&self) -> &HashMap<u32, SymPresentation> {
        &self.presentations
    }

    /// The symbol a name resolves to, if it has been seen.
    pub fn get_sym(&self, text: &str) -> Option<Sym> {
        self.text_to_sym.get(text).copied()
    }

    fn intern(
        &mut self,
        text: &str,
        kind: Kind,
        argument_kind: Kind,
        arity: u32,
    ) -> SequentResult<Sym> {
        if let Some(&sym) = self.text_to_sym.get(text) {
            if sym.kind != kind {
                return Err(SequentError::InvalidSymbolKind {
                    text: text.to_string(),
                    expected: kind,
                    actual: sym.kind,
                });
            }
            if sym.arity != arity {
                return Err(SequentError::InvalidArity {
                    text: text.to_string(),
                    expected: sym.arity,
                    actual: arity,
                });
            }
            return Ok(sym);
        }
        self.max_sym_id += 1;
        let sym = Sym {
            id: self.max_sym_id,
            kind,
            argument_kind,
            arity,
            binds: false,
        };
        self.syms.insert(sym.id, sym);
        self.text_to_sym.insert(text.to_string(), sym);
        self.presentations.insert(
            sym.id,
            SymPresentation {
                text: text.to_string(),
                placement: Placement::Prefix,
            },
        );
        Ok(sym)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses formulas, accumulating minted symbols across calls.
#[derive(Debug, Clone, Default)]
pub struct FormulaParser {
    table: SymbolTable,
}

impl FormulaParser {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn get_sym(&self, text: &str) -> Option<Sym> {
        self.table.get_sym(text)
    }

    pub fn parse(&mut self, input: &str) -> SequentResult<Expression> {
        let mut pairs =
            PestFormulaParser::parse(Rule::input, input).map_err(|error| {
                let (line, col) = match error.line_col {
                    LineColLocation::Pos((line, col)) => (line, col),
                    LineColLocation::Span((line, col), _) => (line, col),
                };
                SequentError::Parse {
                    message: error.variant.message().into_owned(),
                    line,
                    col,
                }
            })?;
        let formula = pairs.next().ok_or_else(empty_production)?;
        self.build_formula(formula)
    }

    /// Interns a name as a nullary term, e.g. for the term arguments of
    /// quantifier rules.
    pub fn parse_term_symbol(&mut self, text: &str) -> SequentResult<Sym> {
        self.table.intern(text, Kind::Term, Kind::Term, 0)
    }

    fn build_formula(&mut self, pair: Pair<Rule>) -> SequentResult<Expression> {
        match pair.as_rule() {
            Rule::formula | Rule::unary | Rule::atom | Rule::grouped => {
                let inner = pair.into_inner().next().ok_or_else(empty_production)?;
                self.build_formula(inner)
            }
            Rule::biconditional => self.fold_left(pair, BICONDITIONAL),
            Rule::conditional => self.fold_right(pair, CONDITIONAL),
            Rule::disjunction => self.fold_left(pair, DISJUNCTION),
            Rule::conjunction => self.fold_left(pair, CONJUNCTION),
            Rule::negation => {
                let inner = pair.into_inner().next().ok_or_else(empty_production)?;
                Ok(Expression {
                    sym: NEGATION,
                    bound_sym: None,
                    children: vec![self.build_formula(inner)?],
                })
            }
            Rule::quantification => self.build_quantification(pair),
            Rule::predicate_paren | Rule::predicate_compact => self.build_predication(pair),
            Rule::proposition => {
                let sym =
                    self.table
                        .intern(pair.as_str(), Kind::Formula, Kind::Formula, 0)?;
                Ok(Expression::atomic(sym))
            }
            _ => Err(empty_production()),
        }
    }

    fn build_quantification(&mut self, pair: Pair<Rule>) -> SequentResult<Expression> {
        let mut inner = pair.into_inner();
        let quantifier = inner.next().ok_or_else(empty_production)?;
        let bound_variable = inner.next().ok_or_else(empty_production)?;
        let body = inner.next().ok_or_else(empty_production)?;

        let sym = match quantifier.as_str() {
            "A" => UNIVERSAL_QUANTIFIER,
            _ => EXISTENTIAL_QUANTIFIER,
        };
        let variable = bound_variable
            .into_inner()
            .next()
            .ok_or_else(empty_production)?;
        let bound = self.build_term_symbol(variable.as_str())?;
        if !bound.is_bindable() {
            return Err(SequentError::InvalidBoundSymbol {
                text: bound.to_string(),
            });
        }
        Ok(Expression {
            sym,
            bound_sym: Some(bound),
            children: vec![self.build_formula(body)?],
        })
    }

    fn build_predication(&mut self, pair: Pair<Rule>) -> SequentResult<Expression> {
        let mut inner = pair.into_inner();
        let name = inner.next().ok_or_else(empty_production)?;
        let mut children = Vec::new();
        for argument in inner {
            children.push(self.build_term(argument)?);
        }
        let sym = self.table.intern(
            name.as_str(),
            Kind::Formula,
            Kind::Term,
            children.len() as u32,
        )?;
        Ok(Expression {
            sym,
            bound_sym: None,
            children,
        })
    }

    fn build_term(&mut self, pair: Pair<Rule>) -> SequentResult<Expression> {
        match pair.as_rule() {
            Rule::term => {
                let inner = pair.into_inner().next().ok_or_else(empty_production)?;
                self.build_term(inner)
            }
            Rule::function_term => {
                let mut inner = pair.into_inner();
                let name = inner.next().ok_or_else(empty_production)?;
                let mut children = Vec::new();
                for argument in inner {
                    children.push(self.build_term(argument)?);
                }
                let sym = self.table.intern(
                    name.as_str(),
                    Kind::Term,
                    Kind::Term,
                    children.len() as u32,
                )?;
                Ok(Expression {
                    sym,
                    bound_sym: None,
                    children,
                })
            }
            Rule::variable => {
                let sym = self.build_term_symbol(pair.as_str())?;
                Ok(Expression::atomic(sym))
            }
            _ => Err(empty_production()),
        }
    }

    fn build_term_symbol(&mut self, text: &str) -> SequentResult<Sym> {
        self.table.intern(text, Kind::Term, Kind::Term, 0)
    }

    fn fold_left(&mut self, pair: Pair<Rule>, sym: Sym) -> SequentResult<Expression> {
        let mut inner = pair.into_inner();
        let first = inner.next().ok_or_else(empty_production)?;
        let mut result = self.build_formula(first)?;
        for next in inner {
            result = Expression {
                sym,
                bound_sym: None,
                children: vec![result, self.build_formula(next)?],
            };
        }
        Ok(result)
    }

    fn fold_right(&mut self, pair: Pair<Rule>, sym: Sym) -> SequentResult<Expression> {
        let mut operands = Vec::new();
        for inner in pair.into_inner() {
            operands.push(self.build_formula(inner)?);
        }
        let mut result = operands.pop().ok_or_else(empty_production)?;
        while let Some(previous) = operands.pop() {
            result = Expression {
                sym,
                bound_sym: None,
                children: vec![previous, result],
            };
        }
        Ok(result)
    }
}

fn empty_production() -> SequentError {
    SequentError::Parse {
        message: "unexpected empty production".to_string(),
        line: 0,
        col: 0,
    }
}
