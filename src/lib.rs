//! Evaluate Boolean expressions over single-letter variables and enumerate their truth tables.
//!
//! Expressions combine [symbols](Symbol) (single letters, ```A-Z``` and ```a-z```, case-sensitive) and the
//! literals ```0``` and ```1``` with the operators ```+``` (OR), ```&``` (AND) and ```~``` (NOT).
//! Parentheses group sub-expressions. The order of evaluation is: parentheses, NOT, AND, OR.
//! Whitespace is ignored.
//!
//! The [symbols](SymbolTable) of an expression are recorded in the order of their first appearance.
//! This order defines the columns of a [truth table](TruthTable) and the mapping between the rows of the table
//! and the bits of an integer counter: the first symbol is the least significant bit.
//!
//! ```
//! # use truthtable::TruthError;
//! # fn main() -> Result<(), TruthError> {
//!
//! let table = truthtable::truth_table("(A+B)&(C+~D)+D")?;
//! assert_eq!(table.len(), 16);
//!
//! // A=0, B=1, C=0, D=0
//! assert_eq!(truthtable::evaluate("(A+B)&(C+~D)+D", "0100")?, true);
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation engines
//!
//! Two implementations of the [Rule trait](Rule) are available:
//!
//! * A [Formula] keeps the expression as text. For each assignment, the symbols are [substituted](formula::substitute)
//!   by the literal of their value, then the literal expression is [reduced](reduce::reduce) in place until
//!   a single literal remains.
//! * An [expression tree](Expr) is parsed once and evaluated directly for each assignment.
//!
//! Both engines give the same results. Rules can be evaluated for a single assignment or for all of them:
//!
//! ```
//! use truthtable::{evaluate_bits, Expr, Limits, Rule, TruthTable};
//! # use truthtable::TruthError;
//! # fn main() -> Result<(), TruthError> {
//!
//! let expr: Expr = "(A & B) + ~C".parse()?;
//! let symbols = expr.get_symbols(&Limits::default())?;
//!
//! let row = evaluate_bits(&expr, symbols.clone(), "010")?;
//! let table = TruthTable::build(&expr, symbols)?;
//! assert_eq!(table.row(2), Some(&row));
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! Expressions are bounded: by default they use at most 10 distinct symbols and 128 characters.
//! Larger inputs are rejected with an explicit [error](TruthError), see [Limits] to change these bounds.

mod assignment;
mod error;
mod expr;
pub mod formula;
mod limits;
mod parse;
pub mod reduce;
mod rules;
mod symbols;
mod table;
pub mod tools;
mod variable;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use assignment::Assignment;
pub use error::TruthError;
pub use expr::{Expr, ExprNode, Operator};
pub use formula::Formula;
pub use limits::Limits;
pub use rules::{Rule, SomeRule};
pub use symbols::SymbolTable;
pub use table::{evaluate_bits, Row, TruthTable};
pub use variable::{Symbol, Variable};

/// Compute the truth table of an expression with the default limits
pub fn truth_table(expr: &str) -> Result<TruthTable, TruthError> {
    let formula = Formula::new(expr)?;
    TruthTable::build(&formula, formula.symbols()?)
}

/// Evaluate an expression once, with values given positionally to its symbols
pub fn evaluate(expr: &str, bits: &str) -> Result<bool, TruthError> {
    let formula = Formula::new(expr)?;
    evaluate_bits(&formula, formula.symbols()?, bits).map(|row| row.result())
}
