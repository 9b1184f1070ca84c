use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use sequent::presentation::format_expression;
use sequent::{Deduction, SymPresentation};
use std::collections::HashMap;

/// Renders a deduction as a proof table, one row per step: the assumptions
/// the step rests on, its ordinal, its formula and its justification.
pub fn render_deduction(
    deduction: &Deduction,
    presentations: &HashMap<u32, SymPresentation>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["assumptions", "#", "formula", "justification"]);

    for (index, step) in deduction.steps().iter().enumerate() {
        let assumptions = ordinals(step.assumptions.iter().copied());
        let formula = format_expression(&step.formula, presentations);
        let summary = &step.rule_application_summary;

        let mut justification = ordinals(summary.premises.iter().copied());
        if !justification.is_empty() {
            justification.push(' ');
        }
        justification.push_str(summary.rule.abbreviation());
        if let Some(theorem_id) = &summary.theorem_id {
            justification.push_str(" (");
            justification.push_str(theorem_id);
            justification.push(')');
        }

        table.add_row(vec![
            assumptions,
            (index + 1).to_string(),
            formula,
            justification,
        ]);
    }
    table
}

fn ordinals(indices: impl Iterator<Item = usize>) -> String {
    indices
        .map(|index| (index + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
