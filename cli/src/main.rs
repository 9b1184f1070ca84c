mod formatter;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sequent::{propositional, FormulaParser};

#[derive(Parser)]
#[command(name = "sequent", version, about = "Natural deduction proof assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a deduction interactively
    Repl,
    /// Check whether a formula is a tautology
    Tauto {
        /// Formula in compact notation, e.g. "p | ~p"
        formula: String,
    },
    /// Classify a formula truth-functionally
    Sat {
        /// Formula in compact notation
        formula: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => interactive::run(),
        Command::Tauto { formula } => {
            let parsed = FormulaParser::new().parse(&formula)?;
            if propositional::is_tautology(&parsed) {
                println!("tautology");
            } else {
                println!("not a tautology");
            }
            Ok(())
        }
        Command::Sat { formula } => {
            let parsed = FormulaParser::new().parse(&formula)?;
            let verdict = if propositional::is_tautology(&parsed) {
                "tautology"
            } else if propositional::is_contradiction(&parsed) {
                "contradiction"
            } else {
                "contingent"
            };
            println!("{}", verdict);
            Ok(())
        }
    }
}
