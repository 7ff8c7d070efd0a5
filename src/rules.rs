use crate::{Expr, Formula, Limits, SymbolTable, TruthError};
use std::fmt;
use std::fmt::Formatter;

/// Common API for all Boolean rules.
///
/// This trait defines the API to evaluate a rule for the current values of a [SymbolTable]
/// and to list the symbols it uses.
pub trait Rule {
    /// Evaluate the rule with the values recorded in the symbol table
    fn eval(&self, symbols: &SymbolTable) -> Result<bool, TruthError>;

    /// Add all symbols used by this rule to the table, in order of appearance
    fn collect_symbols(&self, symbols: &mut SymbolTable) -> Result<(), TruthError>;

    /// Construct the table of symbols
    fn get_symbols(&self, limits: &Limits) -> Result<SymbolTable, TruthError> {
        let mut symbols = SymbolTable::with_capacity(limits.max_variables);
        self.collect_symbols(&mut symbols)?;
        Ok(symbols)
    }
}

/// A rule evaluated with one of the available engines.
#[derive(Clone, Debug)]
pub enum SomeRule {
    /// Textual expression evaluated by substitution and reduction
    Formula(Formula),

    /// Expression tree
    Expr(Expr),
}

impl SomeRule {
    fn inner_rule(&self) -> &dyn Rule {
        match self {
            SomeRule::Formula(f) => f,
            SomeRule::Expr(e) => e,
        }
    }
}

impl From<Formula> for SomeRule {
    fn from(f: Formula) -> Self {
        SomeRule::Formula(f)
    }
}

impl From<Expr> for SomeRule {
    fn from(e: Expr) -> Self {
        SomeRule::Expr(e)
    }
}

impl Rule for SomeRule {
    fn eval(&self, symbols: &SymbolTable) -> Result<bool, TruthError> {
        self.inner_rule().eval(symbols)
    }

    fn collect_symbols(&self, symbols: &mut SymbolTable) -> Result<(), TruthError> {
        self.inner_rule().collect_symbols(symbols)
    }
}

impl fmt::Display for SomeRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SomeRule::Formula(v) => write!(f, "{}", v),
            SomeRule::Expr(v) => write!(f, "{}", v),
        }
    }
}
