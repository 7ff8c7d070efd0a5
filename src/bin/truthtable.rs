//! Truth table generator - Command Line Interface
//!
//! ```text
//! truthtable "(A+B)&(C+~D)+D"        # print the full truth table
//! truthtable "(A+B)&(C+~D)+D" 0010   # A, B and D are 0, C is 1
//! ```

use clap::{Parser, ValueEnum};
use truthtable::{evaluate_bits, Expr, Formula, Limits, Rule, SomeRule, TruthTable};

const USAGE: &str = "Not enough parameters.
 OR: +
 AND: &
 NOT: ~
 Group: ( )
 Valid symbols: A-Z, a-z
 Example usage:  truthtable \"(A&B) + ~C\"
 Specify values for symbols: truthtable \"(A&B) + ~C\" 010";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    /// Substitute values in the text and reduce it (default)
    Reduce,
    /// Parse an expression tree once and evaluate it
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "truthtable")]
#[command(about = "Simple truth table generator", long_about = None)]
#[command(version)]
struct Args {
    /// Boolean expression, for example "(A&B) + ~C"
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Values of the symbols in order of appearance, for example 010
    #[arg(value_name = "BITS")]
    values: Option<String>,

    /// Evaluation engine
    #[arg(short = 'e', long = "engine", value_enum, default_value = "reduce")]
    engine: Engine,

    /// Print the reduction steps on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        match args.verbose {
            true => simplelog::LevelFilter::Debug,
            false => simplelog::LevelFilter::Warn,
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let expression = match &args.expression {
        Some(e) => e,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let limits = Limits::default();
    let rule: SomeRule = match args.engine {
        Engine::Reduce => Formula::with_limits(expression, limits)?.into(),
        Engine::Tree => Expr::parse_with_limits(expression, &limits)?.into(),
    };
    let symbols = rule.get_symbols(&limits)?;

    match &args.values {
        None => {
            println!("Evaluating: {}", expression);
            print!("{}", TruthTable::build(&rule, symbols)?);
        }
        Some(bits) => {
            let row = evaluate_bits(&rule, symbols, bits)?;
            println!("{:x}", row.result() as u8);
        }
    }
    Ok(())
}
