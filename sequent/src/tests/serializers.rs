use super::parse;
use crate::error::SequentError;
use crate::expression::Expression;
use crate::interface::{start_deduction, RuleInterface};
use crate::parser::FormulaParser;
use crate::rule::Rule;
use crate::serializers::json;

#[test]
fn expressions_round_trip_structurally() {
    let mut parser = FormulaParser::new();
    for text in ["p", "~(p & q)", "Ax Ey (Fxy -> Fyx)", "G(f(a))"] {
        let formula = parse(&mut parser, text);
        let serialized = json::expression_to_json(&formula).unwrap();
        let inflated = json::expression_from_json(&serialized).unwrap();
        assert_eq!(inflated, formula, "round trip of '{}'", text);
    }
}

#[test]
fn deductions_round_trip_with_graph_and_assumptions() {
    let mut parser = FormulaParser::new();
    let interface = start_deduction(None);
    let formula = parse(&mut parser, "Ex Fxy");
    let interface = match interface
        .select_steps(&[])
        .unwrap()
        .choose_rule(Rule::Premise)
        .unwrap()
    {
        RuleInterface::Premise(premise) => premise.apply(formula).unwrap(),
        other => panic!("unexpected rule interface: {:?}", other),
    };
    let b = parser.parse_term_symbol("b").unwrap();
    let interface = match interface
        .select_steps(&[1])
        .unwrap()
        .choose_rule(Rule::ExistentialInstantiation)
        .unwrap()
    {
        RuleInterface::ExistentialInstantiation(instantiation) => {
            instantiation.apply(Some(b)).unwrap()
        }
        other => panic!("unexpected rule interface: {:?}", other),
    };

    let deduction = interface.into_deduction();
    assert!(!deduction.term_dependency_graph().is_empty());

    let serialized = json::deduction_to_json(&deduction).unwrap();
    let inflated = json::deduction_from_json(&serialized).unwrap();
    assert_eq!(inflated, deduction);
}

#[test]
fn resumed_deductions_extend_like_the_original() {
    let mut parser = FormulaParser::new();
    let p = parse(&mut parser, "p");
    let interface = match start_deduction(None)
        .select_steps(&[])
        .unwrap()
        .choose_rule(Rule::Premise)
        .unwrap()
    {
        RuleInterface::Premise(premise) => premise.apply(p).unwrap(),
        other => panic!("unexpected rule interface: {:?}", other),
    };

    let serialized = json::deduction_to_json(interface.deduction()).unwrap();
    let resumed = start_deduction(Some(json::deduction_from_json(&serialized).unwrap()));

    let resumed = match resumed
        .select_steps(&[1])
        .unwrap()
        .choose_rule(Rule::Repetition)
        .unwrap()
    {
        RuleInterface::Repetition(repetition) => repetition.apply().unwrap(),
        other => panic!("unexpected rule interface: {:?}", other),
    };
    assert_eq!(resumed.deduction().size(), 2);
}

#[test]
fn malformed_json_reports_a_serialization_error() {
    assert!(matches!(
        json::expression_from_json("{"),
        Err(SequentError::Serialization(_))
    ));
}

#[test]
fn serialized_expressions_omit_empty_fields() {
    let mut parser = FormulaParser::new();
    let atom = parse(&mut parser, "p");
    let serialized = json::expression_to_json(&atom).unwrap();
    assert!(!serialized.contains("bound_sym"));
    assert!(!serialized.contains("children"));

    let quantified = parse(&mut parser, "Ax Fx");
    let serialized = json::expression_to_json(&quantified).unwrap();
    assert!(serialized.contains("bound_sym"));

    let _: Expression = json::expression_from_json(&serialized).unwrap();
}
