use super::parse;
use crate::error::SequentError;
use crate::parser::FormulaParser;
use crate::pointer::ExpressionPointer;

#[test]
fn construction_validates_the_position() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "p & q");

    assert!(ExpressionPointer::new(&formula, vec![0]).is_ok());
    assert!(matches!(
        ExpressionPointer::new(&formula, vec![0, 3]),
        Err(SequentError::PositionOutOfRange { .. })
    ));
}

#[test]
fn target_and_parent_walk_the_tree() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Ex (Fxy -> Fyx)");
    let p = parser.get_sym("p");
    assert!(p.is_none());

    let pointer = ExpressionPointer::new(&formula, vec![0, 0]).unwrap();
    assert_eq!(pointer.target().children.len(), 2);
    assert!(!pointer.is_root());

    let parent = pointer.parent().unwrap();
    assert_eq!(parent.position(), &[0]);

    let root = ExpressionPointer::root(&formula);
    assert!(root.is_root());
    assert_eq!(root.target(), &formula);
    assert!(matches!(
        root.parent(),
        Err(SequentError::CantGetParentOfRoot)
    ));
}

#[test]
fn binding_occurrence_is_the_nearest_enclosing_binder() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Ex (Fxy -> Fyx)");
    let y = parser.get_sym("y").unwrap();

    // The x inside Fxy: bound by the inner quantifier.
    let pointer = ExpressionPointer::new(&formula, vec![0, 0, 0, 0]).unwrap();
    assert_eq!(pointer.find_binding_occurrence(None), Some(vec![0]));

    // y is never bound here.
    assert_eq!(pointer.find_binding_occurrence(Some(y)), None);
}

#[test]
fn bound_syms_of_ancestors_include_vacuous_binders() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Ey Fx");
    let x = parser.get_sym("x").unwrap();
    let y = parser.get_sym("y").unwrap();

    let pointer = ExpressionPointer::new(&formula, vec![0, 0]).unwrap();
    let bound = pointer.get_bound_syms();
    assert_eq!(bound.len(), 2);
    assert!(bound.contains_key(&x.id));
    assert!(bound.contains_key(&y.id));

    // The target itself doesn't contribute its own binder.
    let at_quantifier = ExpressionPointer::new(&formula, vec![0]).unwrap();
    assert_eq!(at_quantifier.get_bound_syms().len(), 1);

    // Nested binders over the same symbol collapse to one entry.
    let shadowing = parse(&mut parser, "Ax Ax Fx");
    let inner = ExpressionPointer::new(&shadowing, vec![0, 0]).unwrap();
    let bound = inner.get_bound_syms();
    assert_eq!(bound.len(), 1);
    assert!(bound.contains_key(&x.id));
}

#[test]
fn delegated_queries_prefix_the_position() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "Ax Ex (Fxy -> Fyx)");
    let y = parser.get_sym("y").unwrap();

    let pointer = ExpressionPointer::new(&formula, vec![0]).unwrap();
    assert_eq!(
        pointer.find_free_occurrences(y),
        vec![vec![0, 0, 0, 1], vec![0, 0, 1, 0]]
    );

    let occurrences = pointer.find_bound_occurrences().unwrap();
    assert_eq!(occurrences, vec![vec![0, 0, 0, 0], vec![0, 0, 1, 1]]);
}

#[test]
fn path_chain_is_inclusive() {
    let mut parser = FormulaParser::new();
    let formula = parse(&mut parser, "p & (q | r)");
    let pointer = ExpressionPointer::new(&formula, vec![1, 0]).unwrap();

    let chain = pointer.get_subexpressions_on_path();
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0], &formula);
    assert_eq!(chain[2], pointer.target());
}
