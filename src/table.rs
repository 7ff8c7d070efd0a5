//! Enumeration of assignments and truth tables

use crate::{Assignment, Limits, Rule, Symbol, SymbolTable, TruthError};

use itertools::Itertools;
use log::debug;
use std::fmt;
use std::iter::once;

/// The result of a rule for one assignment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    assignment: Assignment,
    result: bool,
}

impl Row {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn result(&self) -> bool {
        self.result
    }
}

/// The complete truth table of a rule.
///
/// The table has one row for each of the ```2^n``` assignments of its ```n``` symbols. Rows are ordered
/// by increasing counter: the value of the symbol at index ```a``` is bit ```a``` of the counter, so the
/// first discovered symbol is the least significant one.
///
/// ```
/// use truthtable::{Formula, TruthTable};
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let formula = Formula::new("A & ~B")?;
/// let table = TruthTable::build(&formula, formula.symbols()?)?;
///
/// let results: Vec<bool> = table.rows().iter().map(|r| r.result()).collect();
/// assert_eq!(results, vec![false, true, false, false]);
/// assert_eq!(table.to_string(), "A\tB\tR\n\n0\t0\t0\n1\t0\t1\n0\t1\t0\n1\t1\t0\n");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    symbols: Vec<Symbol>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluate a rule for all assignments of the given symbols.
    ///
    /// Tables over more than [Limits::MAX_TABLE_VARIABLES] symbols are rejected before any allocation.
    pub fn build(rule: &dyn Rule, mut symbols: SymbolTable) -> Result<Self, TruthError> {
        if symbols.len() > Limits::MAX_TABLE_VARIABLES {
            return Err(TruthError::TooManyVariables {
                max: Limits::MAX_TABLE_VARIABLES,
            });
        }
        let count = 1usize << symbols.len();

        let mut rows = Vec::with_capacity(count);
        for counter in 0..count {
            symbols.assign_counter(counter);
            let result = rule.eval(&symbols)?;
            debug!("row {}: {} -> {}", counter, symbols.assignment(), result as u8);
            rows.push(Row {
                assignment: symbols.assignment(),
                result,
            });
        }

        Ok(Self {
            symbols: symbols.symbols(),
            rows,
        })
    }

    /// Symbols in column order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Rows in increasing counter order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row of a given counter value
    pub fn row(&self, counter: usize) -> Option<&Row> {
        self.rows.get(counter)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Evaluate a rule once, with values assigned positionally from a string of bits.
///
/// The characters of the string are given to the symbols in discovery order:
/// ```'0'``` is false and any other character is true.
/// Symbols beyond the end of the string are false and extra characters are ignored.
pub fn evaluate_bits(rule: &dyn Rule, mut symbols: SymbolTable, bits: &str) -> Result<Row, TruthError> {
    symbols.assign_bits(bits);
    let result = rule.eval(&symbols)?;
    Ok(Row {
        assignment: symbols.assignment(),
        result,
    })
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .assignment
            .values()
            .chain(once(self.result))
            .map(|b| format!("{:x}", b as u8))
            .join("\t");
        write!(f, "{}", cells)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self
            .symbols
            .iter()
            .map(Symbol::to_string)
            .chain(once("R".to_string()))
            .join("\t");
        writeln!(f, "{}", header)?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use itertools::Itertools;

    use test_log::test;

    #[test]
    fn enumeration_order() -> Result<(), TruthError> {
        let formula = Formula::new("A + B & C")?;
        let table = TruthTable::build(&formula, formula.symbols()?)?;
        assert_eq!(table.len(), 8);
        assert_eq!(table.symbols().iter().join(""), "ABC");

        for (counter, row) in table.rows().iter().enumerate() {
            let a = row.assignment().value(0);
            let b = row.assignment().value(1);
            let c = row.assignment().value(2);
            assert_eq!(row.assignment().counter(), counter);
            assert_eq!(row.result(), a || (b && c));
        }
        Ok(())
    }

    #[test]
    fn constant_expression() -> Result<(), TruthError> {
        let formula = Formula::new("1 & ~(0 + 0)")?;
        let table = TruthTable::build(&formula, formula.symbols()?)?;
        assert_eq!(table.len(), 1);
        assert!(table.row(0).map_or(false, Row::result));
        assert_eq!(table.to_string(), "R\n\n1\n");
        Ok(())
    }

    #[test]
    fn single_assignment() -> Result<(), TruthError> {
        let expr: Expr = "(A&B)+~C".parse()?;
        let symbols = expr.get_symbols(&Limits::default())?;

        let row = evaluate_bits(&expr, symbols.clone(), "010")?;
        let table = TruthTable::build(&expr, symbols.clone())?;
        assert_eq!(Some(&row), table.row(0b010));
        assert_eq!(row.to_string(), "0\t1\t0\t1");

        let row = evaluate_bits(&expr, symbols, "111")?;
        assert!(row.result());
        Ok(())
    }

    #[test]
    fn oversized_tables_are_rejected() -> Result<(), TruthError> {
        let limits = Limits::new(40, 256);
        let letters: String = ('a'..='u').collect();
        let formula = Formula::with_limits(&letters.chars().join("&"), limits)?;
        let symbols = SymbolTable::discover_with_limits(&letters, &limits)?;
        assert_eq!(symbols.len(), 21);
        assert_eq!(
            TruthTable::build(&formula, symbols),
            Err(TruthError::TooManyVariables { max: 20 })
        );

        // a single row is still fine
        let symbols = SymbolTable::discover_with_limits(&letters, &limits)?;
        assert!(evaluate_bits(&formula, symbols, &"1".repeat(21))?.result());
        Ok(())
    }

    #[test]
    fn errors_abort_the_table() -> Result<(), TruthError> {
        let formula = Formula::new("A & B")?;
        let symbols = SymbolTable::discover("A")?;
        assert_eq!(
            TruthTable::build(&formula, symbols),
            Err(TruthError::UnknownSymbol('B'))
        );
        Ok(())
    }
}
