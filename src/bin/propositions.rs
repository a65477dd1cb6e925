//! Propositions - Command Line Interface
//!
//! Normalises formulas, checks tautologies and evaluates arguments.

use clap::{Parser, ValueEnum};
use propositions::{parse_assignment, Argument, Checker, Formula, LogicError, NormalFormConfig};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Print the negation normal form of each formula
    Nnf,
    /// Print the conjunctive normal form of each formula
    Cnf,
    /// Decide whether each formula is a tautology (default)
    Valid,
    /// Decide whether the premises entail the conclusion (last formula)
    Argument,
    /// Decide whether the argument is valid and its premises hold under --assign
    Sound,
}

#[derive(Parser, Debug)]
#[command(name = "propositions")]
#[command(about = "Propositional normal forms and tautology checking", long_about = None)]
#[command(version)]
struct Args {
    /// Formulas, e.g. "(p -> q) * p -> q"
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,

    /// Operation to perform
    #[arg(short = 'D', long = "do", value_enum, default_value = "valid")]
    command: Command,

    /// Argument file: one premise per line, conclusion prefixed by `therefore`
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Truth assignment for `sound`, e.g. "p=true,q=false" (repeatable)
    #[arg(short = 'a', long = "assign")]
    assign: Vec<String>,

    /// Recursion depth limit for the transforms
    #[arg(long = "max-depth")]
    max_depth: Option<usize>,

    /// Node limit for CNF conversion
    #[arg(long = "max-nodes")]
    max_nodes: Option<usize>,

    /// Print a summary of each step to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), LogicError> {
    let mut config = NormalFormConfig::default();
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }
    if let Some(max_nodes) = args.max_nodes {
        config = config.with_max_nodes(max_nodes);
    }
    let checker = Checker::with_config(config);

    match args.command {
        Command::Nnf | Command::Cnf | Command::Valid => {
            for formula in parse_formulas(&args.formulas)? {
                let output = match args.command {
                    Command::Nnf => checker.to_nnf(&formula)?.to_string(),
                    Command::Cnf => checker.normalize(&formula)?.to_string(),
                    _ => verdict(checker.is_valid(&formula)?, "valid", "not valid"),
                };
                if args.summary {
                    eprintln!(
                        "{} ({} atoms, {} nodes)",
                        formula,
                        formula.atoms().len(),
                        formula.node_count()
                    );
                }
                println!("{}", output);
            }
        }
        Command::Argument | Command::Sound => {
            let argument = load_argument(args)?;
            if args.summary {
                for premise in argument.premises() {
                    eprintln!("premise:    {}", premise);
                }
                eprintln!("conclusion: {}", argument.conclusion());
            }

            let answer = match args.command {
                Command::Argument => verdict(checker.check(&argument)?, "valid", "invalid"),
                _ => {
                    let mut assignment = propositions::Assignment::new();
                    for text in &args.assign {
                        assignment.extend(parse_assignment(text)?);
                    }
                    let sound =
                        checker.is_sound(argument.premises(), argument.conclusion(), &assignment)?;
                    verdict(sound, "sound", "unsound")
                }
            };
            println!("{}", answer);
        }
    }

    Ok(())
}

fn parse_formulas(texts: &[String]) -> Result<Vec<Formula>, LogicError> {
    if texts.is_empty() {
        return Err(LogicError::Malformed {
            operation: "propositions",
            reason: "no formulas given".to_string(),
        });
    }
    texts
        .iter()
        .map(|text| Formula::parse(text).map_err(LogicError::from))
        .collect()
}

/// Argument from --file, or from the positional formulas (last one is the conclusion)
fn load_argument(args: &Args) -> Result<Argument, LogicError> {
    if let Some(path) = &args.file {
        return Argument::from_file(path);
    }

    let mut formulas = parse_formulas(&args.formulas)?;
    let conclusion = formulas.pop().ok_or_else(|| LogicError::Malformed {
        operation: "propositions",
        reason: "an argument needs a conclusion".to_string(),
    })?;
    Ok(Argument::new(formulas, conclusion))
}

fn verdict(answer: bool, yes: &str, no: &str) -> String {
    let word = if answer { yes } else { no };
    word.to_string()
}
