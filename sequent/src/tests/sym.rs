use crate::primitives::{CONJUNCTION, NEGATION, UNIVERSAL_QUANTIFIER};
use crate::sym::{Category, Kind, Sym};

#[test]
fn constructors_assign_kinds_by_category() {
    let proposition = Sym::ff(9);
    assert_eq!(proposition.kind, Kind::Formula);
    assert_eq!(proposition.argument_kind, Kind::Formula);
    assert_eq!(proposition.arity, 0);
    assert_eq!(proposition.category(), Category::FF);

    let predicate = Sym::ft(10, 2);
    assert_eq!(predicate.kind, Kind::Formula);
    assert_eq!(predicate.argument_kind, Kind::Term);
    assert_eq!(predicate.arity, 2);
    assert_eq!(predicate.category(), Category::FT);

    let variable = Sym::tt(11);
    assert_eq!(variable.category(), Category::TT);

    let description = Sym::tf(12, 1);
    assert_eq!(description.category(), Category::TF);
}

#[test]
fn only_nullary_terms_are_bindable() {
    assert!(Sym::tt(9).is_bindable());
    assert!(!Sym::ff(9).is_bindable());
    assert!(!Sym::ft(9, 1).is_bindable());
    assert!(!Sym::tt(9).with_arity(1).is_bindable());
}

#[test]
fn builders_override_fields() {
    let sym = Sym::ff(9).with_arity(1).with_binds(true);
    assert_eq!(sym.arity, 1);
    assert!(sym.binds);
}

#[test]
fn identity_is_the_id() {
    assert!(Sym::ff(9).same(&Sym::tt(9)));
    assert!(!Sym::ff(9).same(&Sym::ff(10)));
}

#[test]
fn ordering_follows_ids() {
    let mut syms = vec![Sym::ff(9), Sym::tt(3), Sym::ft(7, 1)];
    syms.sort();
    let ids: Vec<u32> = syms.iter().map(|sym| sym.id).collect();
    assert_eq!(ids, vec![3, 7, 9]);
}

#[test]
fn primitives_have_expected_shapes() {
    assert_eq!(NEGATION.arity, 1);
    assert!(!NEGATION.binds);
    assert_eq!(CONJUNCTION.arity, 2);
    assert!(UNIVERSAL_QUANTIFIER.binds);
    assert_eq!(UNIVERSAL_QUANTIFIER.arity, 1);
    assert_eq!(UNIVERSAL_QUANTIFIER.category(), Category::FF);
}
