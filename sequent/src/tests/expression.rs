use super::parse;
use crate::error::SequentError;
use crate::expression::Expression;
use crate::parser::FormulaParser;
use crate::primitives::{CONDITIONAL, CONJUNCTION, UNIVERSAL_QUANTIFIER};
use crate::sym::Sym;

#[test]
fn checked_construction_validates_arity_and_kinds() {
    let p = Expression::atomic(Sym::ff(9));
    let x = Expression::atomic(Sym::tt(10));

    assert!(Expression::new(CONJUNCTION, None, vec![p.clone(), p.clone()]).is_ok());
    assert!(matches!(
        Expression::new(CONJUNCTION, None, vec![p.clone()]),
        Err(SequentError::InvalidArity { .. })
    ));
    assert!(matches!(
        Expression::new(CONJUNCTION, None, vec![p.clone(), x.clone()]),
        Err(SequentError::InvalidSymbolKind { .. })
    ));
    assert!(matches!(
        Expression::new(UNIVERSAL_QUANTIFIER, None, vec![p.clone()]),
        Err(SequentError::InvalidBoundSymbol { .. })
    ));
    assert!(Expression::new(UNIVERSAL_QUANTIFIER, Some(Sym::tt(10)), vec![p]).is_ok());
}

#[test]
fn subexpressions_are_addressed_by_position() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Ex (Fxy -> Fyx)");

    let conditional = formula.get_subexpression(&[0, 0]).unwrap();
    assert_eq!(conditional.children.len(), 2);

    let root = formula.get_subexpression(&[]).unwrap();
    assert_eq!(root, &formula);

    assert!(matches!(
        formula.get_subexpression(&[2]),
        Err(SequentError::PositionOutOfRange { index: 2, .. })
    ));

    let chain = formula.get_subexpressions_on_path(&[0, 0]).unwrap();
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0], &formula);
    assert_eq!(chain[2], conditional);
}

#[test]
fn free_occurrences_respect_binders() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Fx & Fy");
    let x = parser.get_sym("x").unwrap();
    let f = parser.get_sym("F").unwrap();

    assert_eq!(formula.find_free_occurrences(x), vec![vec![0, 0]]);
    assert_eq!(formula.find_free_occurrences(f), vec![vec![0], vec![1]]);

    let shadowed = parse(&mut parser, "Ax Fx");
    assert!(shadowed.find_free_occurrences(x).is_empty());

    let atom = parse(&mut parser, "p");
    let p = parser.get_sym("p").unwrap();
    assert_eq!(atom.find_free_occurrences(p), vec![Vec::<usize>::new()]);
}

#[test]
fn bound_occurrences_are_relative_to_the_binder() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Fx");
    assert_eq!(formula.find_bound_occurrences().unwrap(), vec![vec![0, 0]]);

    let vacuous = parse(&mut parser, "Ay Fx");
    assert!(vacuous.find_bound_occurrences().unwrap().is_empty());

    let atom = parse(&mut parser, "p");
    assert!(matches!(
        atom.find_bound_occurrences(),
        Err(SequentError::ExpressionDoesntBind)
    ));

    // A nested binder over the same symbol re-shadows it.
    let shadowing = parse(&mut parser, "Ax (Fx & Ax Fx)");
    assert_eq!(shadowing.find_bound_occurrences().unwrap(), vec![vec![0, 0, 0]]);
}

#[test]
fn free_syms_exclude_shadowed_symbols() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Fxy");
    let x = parser.get_sym("x").unwrap();
    let f = parser.get_sym("F").unwrap();
    let y = parser.get_sym("y").unwrap();

    let all = formula.get_syms();
    assert!(all.contains_key(&x.id));

    let free = formula.get_free_syms();
    assert!(!free.contains_key(&x.id));
    assert!(free.contains_key(&f.id));
    assert!(free.contains_key(&y.id));
    assert!(free.contains_key(&UNIVERSAL_QUANTIFIER.id));

    let free_terms = formula.get_free_terms();
    assert_eq!(free_terms.len(), 1);
    assert!(free_terms.contains_key(&y.id));
}

#[test]
fn binders_over_free_occurrences_are_collected() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Fzx & Ey Fzy");
    let x = parser.get_sym("x").unwrap();
    let y = parser.get_sym("y").unwrap();
    let z = parser.get_sym("z").unwrap();

    let binders = formula.find_bound_syms_at_free_occurrences_of_sym(z);
    assert_eq!(binders.len(), 2);
    assert!(binders.contains_key(&x.id));
    assert!(binders.contains_key(&y.id));

    // No free occurrence, no binders.
    let shadowed = parse(&mut parser, "Ax Fzx");
    assert!(shadowed.find_bound_syms_at_free_occurrences_of_sym(x).is_empty());
}

#[test]
fn substitution_replaces_free_occurrences_only() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Fx & Ax Fx");
    let x = parser.get_sym("x").unwrap();
    let y = parser.parse_term_symbol("y").unwrap();

    let replaced = formula.replace_free_occurrences(
        x,
        y,
        &mut || panic!("no fresh bound sym needed"),
        &mut || panic!("no fresh child needed"),
    );
    assert_eq!(replaced, parse(&mut parser, "Fy & Ax Fx"));
}

#[test]
fn substitution_alpha_renames_capturing_binders() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ay Fx");
    let x = parser.get_sym("x").unwrap();
    let y = parser.get_sym("y").unwrap();
    let z = parser.parse_term_symbol("z").unwrap();

    let replaced = formula.replace_free_occurrences(
        x,
        y,
        &mut || z,
        &mut || panic!("no fresh child needed"),
    );
    assert_eq!(replaced, parse(&mut parser, "Az Fy"));
}

#[test]
fn substitution_adjusts_children_to_the_new_arity() {
    let mut parser = FormulaParser::new();

    // Growing arity pulls the missing child from the source.
    let p = parse(&mut parser, "p");
    let p_sym = parser.get_sym("p").unwrap();
    let x = parser.parse_term_symbol("x").unwrap();
    let q = parse(&mut parser, "q");
    let grown = p.replace_free_occurrences(
        p_sym,
        UNIVERSAL_QUANTIFIER,
        &mut || x,
        &mut || q.clone(),
    );
    assert_eq!(grown, parse(&mut parser, "Ax q"));

    // Shrinking arity drops the surplus children.
    let conditional = parse(&mut parser, "p -> q");
    let shrunk = conditional.replace_free_occurrences(
        CONDITIONAL,
        UNIVERSAL_QUANTIFIER,
        &mut || x,
        &mut || panic!("no fresh child needed"),
    );
    assert_eq!(shrunk, parse(&mut parser, "Ax p"));
}

#[test]
fn alpha_conversion_renames_consistently() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax (Ex Fx -> Fx)");
    let y = parser.parse_term_symbol("y").unwrap();

    let renamed = formula.replace_bound_occurrences(y).unwrap();
    assert_eq!(renamed, parse(&mut parser, "Ay (Ex Fx -> Fy)"));

    // Renaming to the symbol already bound is the identity.
    let x = parser.get_sym("x").unwrap();
    assert_eq!(formula.replace_bound_occurrences(x).unwrap(), formula);

    let atom = parse(&mut parser, "p");
    assert!(matches!(
        atom.replace_bound_occurrences(y),
        Err(SequentError::ExpressionDoesntBind)
    ));
}

#[test]
fn alpha_conversion_at_a_position_rebuilds_the_path() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "p & Ax Fx");
    let y = parser.parse_term_symbol("y").unwrap();

    let renamed = formula.replace_bound_occurrences_at(&[1], y).unwrap();
    assert_eq!(renamed, parse(&mut parser, "p & Ay Fy"));

    assert!(matches!(
        formula.replace_bound_occurrences_at(&[4], y),
        Err(SequentError::PositionOutOfRange { .. })
    ));
}

#[test]
fn connecting_folds_left() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let q = parse(&mut parser, "q");
    let r = parse(&mut parser, "r");

    let connected =
        Expression::connect_with_binary_sym(vec![p.clone(), q, r], CONJUNCTION).unwrap();
    assert_eq!(connected, parse(&mut parser, "p & q & r"));

    assert!(matches!(
        Expression::connect_with_binary_sym(vec![p], CONJUNCTION),
        Err(SequentError::NotEnoughExpressions { actual: 1 })
    ));
    assert!(matches!(
        Expression::connect_with_binary_sym(vec![], CONJUNCTION),
        Err(SequentError::NotEnoughExpressions { actual: 0 })
    ));
}
