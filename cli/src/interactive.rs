use crate::formatter::render_deduction;
use anyhow::{anyhow, bail, Result};
use sequent::serializers::json;
use sequent::{start_deduction, Deduction, FormulaParser, Rule, RuleInterface, Side, Sym};
use std::fs;
use std::io::{self, BufRead, Write};

/// Line-oriented proof session. Every applied rule pushes a snapshot, so
/// `undo` is just dropping the latest one.
pub fn run() -> Result<()> {
    let mut parser = FormulaParser::new();
    let mut history: Vec<Deduction> = vec![Deduction::new()];
    let mut selection: Vec<usize> = Vec::new();

    println!("sequent {} - type 'help' for commands", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        if matches!(command, "quit" | "exit") {
            break;
        }

        let current = history.last().cloned().unwrap_or_default();
        let outcome = dispatch(
            command,
            rest,
            &mut parser,
            &current,
            &mut history,
            &mut selection,
        );
        match outcome {
            Ok(Some(next)) => {
                history.push(next);
                selection.clear();
            }
            Ok(None) => {}
            Err(error) => println!("error: {}", error),
        }
    }
    Ok(())
}

fn dispatch(
    command: &str,
    rest: &str,
    parser: &mut FormulaParser,
    current: &Deduction,
    history: &mut Vec<Deduction>,
    selection: &mut Vec<usize>,
) -> Result<Option<Deduction>> {
    match command {
        "help" => {
            print_help();
            Ok(None)
        }
        "show" => {
            println!("{}", render_deduction(current, parser.table().presentations()));
            Ok(None)
        }
        "undo" => {
            if history.len() > 1 {
                history.pop();
            }
            selection.clear();
            Ok(None)
        }
        "select" => {
            let mut ordinals = Vec::new();
            for token in rest.split_whitespace() {
                ordinals.push(
                    token
                        .parse::<usize>()
                        .map_err(|_| anyhow!("not a step ordinal: {}", token))?,
                );
            }
            // Validate against the current deduction before committing.
            start_deduction(Some(current.clone())).select_steps(&ordinals)?;
            *selection = ordinals;
            Ok(None)
        }
        "rules" => {
            let interface = start_deduction(Some(current.clone()));
            let rules = interface.select_steps(selection)?;
            for rule in rules.allowed_rules() {
                println!("{:<4} {}", rule.abbreviation(), rule);
            }
            Ok(None)
        }
        "assume" => apply_rule(parser, current, &[], Rule::Premise, rest),
        "apply" => {
            let (abbreviation, args) = rest.split_once(' ').unwrap_or((rest, ""));
            let rule = Rule::from_abbreviation(abbreviation)
                .ok_or_else(|| anyhow!("unknown rule: {}", abbreviation))?;
            apply_rule(parser, current, selection, rule, args.trim())
        }
        "save" => {
            fs::write(rest, json::deduction_to_json(current)?)?;
            println!("saved {} step(s) to {}", current.size(), rest);
            Ok(None)
        }
        "load" => {
            let loaded = json::deduction_from_json(&fs::read_to_string(rest)?)?;
            println!("loaded {} step(s) from {}", loaded.size(), rest);
            Ok(Some(loaded))
        }
        _ => Err(anyhow!("unknown command: {} (try 'help')", command)),
    }
}

fn apply_rule(
    parser: &mut FormulaParser,
    deduction: &Deduction,
    selection: &[usize],
    rule: Rule,
    args: &str,
) -> Result<Option<Deduction>> {
    let interface = start_deduction(Some(deduction.clone()));
    let rules = interface.select_steps(selection)?;
    let next = match rules.choose_rule(rule)? {
        RuleInterface::Premise(premise) => premise.apply(parser.parse(args)?)?,
        RuleInterface::Theorem(theorem) => {
            let (id, formula) = args
                .split_once(' ')
                .ok_or_else(|| anyhow!("usage: apply T <id> <formula>"))?;
            theorem.apply(id, parser.parse(formula.trim())?)?
        }
        RuleInterface::Repetition(repetition) => repetition.apply()?,
        RuleInterface::ConditionalIntroduction(conditional) => conditional.apply()?,
        RuleInterface::ConditionalElimination(conditional) => conditional.apply()?,
        RuleInterface::ConjunctionIntroduction(conjunction) => conjunction.apply()?,
        RuleInterface::ConjunctionElimination(conjunction) => {
            conjunction.apply(parse_side(args)?)?
        }
        RuleInterface::DisjunctionIntroduction(disjunction) => {
            let (side, formula) = args
                .split_once(' ')
                .ok_or_else(|| anyhow!("usage: apply DI <left|right> <formula>"))?;
            disjunction.apply(parser.parse(formula.trim())?, parse_side(side)?)?
        }
        RuleInterface::DisjunctionElimination(disjunction) => disjunction.apply()?,
        RuleInterface::BiconditionalIntroduction(biconditional) => biconditional.apply()?,
        RuleInterface::BiconditionalElimination(biconditional) => {
            biconditional.apply(parse_side(args)?)?
        }
        RuleInterface::NegationIntroduction(negation) => negation.apply()?,
        RuleInterface::NegationElimination(negation) => negation.apply()?,
        RuleInterface::Explosion(explosion) => explosion.apply(parser.parse(args)?)?,
        RuleInterface::UniversalInstantiation(instantiation) => {
            instantiation.apply(optional_term(parser, args)?)?
        }
        RuleInterface::ExistentialInstantiation(instantiation) => {
            instantiation.apply(optional_term(parser, args)?)?
        }
        RuleInterface::UniversalGeneralization(generalization) => {
            let (new_term, old_term) = term_pair(parser, args)?;
            generalization.apply(new_term, old_term)?
        }
        RuleInterface::ExistentialGeneralization(generalization) => {
            let (new_term, old_term) = term_pair(parser, args)?;
            generalization.apply(new_term, old_term)?
        }
        RuleInterface::TautologicalImplication(implication) => {
            implication.apply(parser.parse(args)?)?
        }
    };
    Ok(Some(next.into_deduction()))
}

fn parse_side(text: &str) -> Result<Side> {
    match text.trim() {
        "left" => Ok(Side::Left),
        "right" => Ok(Side::Right),
        other => bail!("expected 'left' or 'right', got '{}'", other),
    }
}

fn optional_term(parser: &mut FormulaParser, args: &str) -> Result<Option<Sym>> {
    if args.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parser.parse_term_symbol(args)?))
    }
}

fn term_pair(parser: &mut FormulaParser, args: &str) -> Result<(Sym, Option<Sym>)> {
    let mut tokens = args.split_whitespace();
    let new_term = tokens
        .next()
        .ok_or_else(|| anyhow!("usage: apply UG/EG <new term> [old term]"))?;
    let new_term = parser.parse_term_symbol(new_term)?;
    let old_term = match tokens.next() {
        Some(token) => Some(parser.parse_term_symbol(token)?),
        None => None,
    };
    Ok((new_term, old_term))
}

fn print_help() {
    println!("commands:");
    println!("  assume <formula>           add a premise");
    println!("  select <ordinals...>       select steps for the next rule");
    println!("  rules                      list rules the selection admits");
    println!("  apply <rule> [args...]     apply a rule to the selection");
    println!("  show                       print the proof so far");
    println!("  undo                       drop the last step");
    println!("  save <path> / load <path>  store or resume a deduction");
    println!("  quit");
}
