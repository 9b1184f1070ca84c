use super::parse;
use crate::deduction::{Deduction, RuleApplicationSpec};
use crate::error::SequentError;
use crate::parser::FormulaParser;
use crate::rule::Rule;
use crate::term_dependency_graph::TermDependencies;

#[test]
fn premise_steps_assume_themselves() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let q = parse(&mut parser, "q");

    let deduction = Deduction::new()
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], p))
        .unwrap()
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], q))
        .unwrap();

    assert_eq!(deduction.size(), 2);
    assert!(deduction.get_step(0).unwrap().assumptions.contains(&0));
    assert!(deduction.get_step(1).unwrap().assumptions.contains(&1));
    assert!(!deduction.get_step(1).unwrap().assumptions.contains(&0));
}

#[test]
fn derived_steps_union_their_premises_assumptions() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let q = parse(&mut parser, "q");
    let conjunction = parse(&mut parser, "p & q");

    let deduction = Deduction::new()
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], p))
        .unwrap()
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], q))
        .unwrap()
        .apply_rule(RuleApplicationSpec::regular(
            Rule::ConjunctionIntroduction,
            vec![0, 1],
            conjunction,
        ))
        .unwrap();

    let step = deduction.get_last_step().unwrap();
    assert_eq!(step.assumptions.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(step.rule_application_summary.premises, vec![0, 1]);
}

#[test]
fn discharged_assumptions_are_removed() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let conditional = parse(&mut parser, "p -> p");

    let deduction = Deduction::new()
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], p))
        .unwrap()
        .apply_rule(
            RuleApplicationSpec::regular(
                Rule::ConditionalIntroduction,
                vec![0, 0],
                conditional,
            )
            .with_assumption_to_remove(0),
        )
        .unwrap();

    assert!(deduction.get_last_step().unwrap().assumptions.is_empty());
}

#[test]
fn theorem_steps_carry_no_assumptions() {
    let mut parser = FormulaParser::new();
    let excluded_middle = parse(&mut parser, "p | ~p");

    let deduction = Deduction::new()
        .apply_rule(RuleApplicationSpec::theorem("excluded-middle", excluded_middle))
        .unwrap();

    let step = deduction.get_last_step().unwrap();
    assert!(step.assumptions.is_empty());
    assert_eq!(step.rule_application_summary.rule, Rule::Theorem);
    assert_eq!(
        step.rule_application_summary.theorem_id.as_deref(),
        Some("excluded-middle")
    );
}

#[test]
fn out_of_range_premises_are_rejected() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");

    let result = Deduction::new().apply_rule(RuleApplicationSpec::regular(
        Rule::Repetition,
        vec![5],
        p,
    ));
    assert!(matches!(
        result,
        Err(SequentError::StepIndexOutOfRange { index: 5, size: 0 })
    ));

    assert!(matches!(
        Deduction::new().get_last_step(),
        Err(SequentError::StepIndexOutOfRange { .. })
    ));
}

#[test]
fn applying_a_rule_leaves_the_original_untouched() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");

    let original = Deduction::new();
    let extended = original
        .apply_rule(RuleApplicationSpec::regular(Rule::Premise, vec![], p))
        .unwrap();

    assert!(original.is_empty());
    assert_eq!(extended.size(), 1);
}

#[test]
fn conflicting_dependencies_reject_the_whole_application() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let q = parse(&mut parser, "q");

    let deduction = Deduction::new()
        .apply_rule(
            RuleApplicationSpec::regular(Rule::ExistentialInstantiation, vec![], p)
                .with_term_dependencies(TermDependencies::new(8, [9])),
        )
        .unwrap();

    let result = deduction.apply_rule(
        RuleApplicationSpec::regular(Rule::UniversalGeneralization, vec![], q)
            .with_term_dependencies(TermDependencies::new(9, [8])),
    );
    assert!(matches!(
        result,
        Err(SequentError::TermDependencyConflict { .. })
    ));
    // The failed application added no step.
    assert_eq!(deduction.size(), 1);
}
