use crate::{Assignment, Limits, Symbol, TruthError, Variable};

use delegate::delegate;
use log::warn;
use std::fmt;

/// The ordered collection of variables used by an expression.
///
/// Variables are recorded in the order of their first appearance in the expression and each symbol is
/// recorded only once. This order is significant: the variable at index ```a``` takes the value of
/// bit ```a``` of the counter used to enumerate assignments, and defines the column ```a``` of a truth table.
///
/// The table has a bounded capacity (10 variables by default) and refuses to grow beyond it.
///
/// ```
/// use truthtable::SymbolTable;
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let mut symbols = SymbolTable::discover("C & A + ~C & B")?;
/// assert_eq!(symbols.to_string(), "CAB");
///
/// // Assign the values of the counter 0b101: C=1, A=0, B=1
/// symbols.assign_counter(0b101);
/// assert_eq!(symbols.value_of('B')?, true);
/// assert!(symbols.value_of('D').is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    /// The list of variables, in discovery order
    variables: Vec<Variable>,

    /// Maximal number of variables
    capacity: usize,
}

impl SymbolTable {
    /// Create an empty table accepting up to ```capacity``` variables
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            variables: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record all symbols of an expression with the default limits
    pub fn discover(expr: &str) -> Result<Self, TruthError> {
        Self::discover_with_limits(expr, &Limits::default())
    }

    /// Scan an expression once, left to right, and record each new symbol.
    ///
    /// Characters which are not ASCII letters are ignored.
    pub fn discover_with_limits(expr: &str, limits: &Limits) -> Result<Self, TruthError> {
        let mut table = Self::with_capacity(limits.max_variables);
        for c in expr.chars().filter(|c| Symbol::is_symbol(*c)) {
            table.insert(Symbol::try_from(c)?)?;
        }
        Ok(table)
    }

    delegate! {
        to self.variables {
            /// Number of distinct variables
            pub fn len(&self) -> usize;

            /// Return whether no variable is recorded
            pub fn is_empty(&self) -> bool;

            /// Iterate over the variables in discovery order
            pub fn iter(&self) -> std::slice::Iter<'_, Variable>;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retrieve the index of a symbol or record it if needed.
    ///
    /// Returns an error if the table is full, in this case the table is not modified.
    pub fn insert(&mut self, symbol: Symbol) -> Result<usize, TruthError> {
        if let Some(idx) = self.index_of(symbol) {
            return Ok(idx);
        }
        if self.variables.len() >= self.capacity {
            return Err(TruthError::TooManyVariables { max: self.capacity });
        }
        self.variables.push(Variable::from(symbol));
        Ok(self.variables.len() - 1)
    }

    /// Find the index of a recorded symbol
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.variables.iter().position(|v| v.symbol() == symbol)
    }

    /// Get the symbol at a given index
    pub fn symbol(&self, idx: usize) -> Option<Symbol> {
        self.variables.get(idx).map(Variable::symbol)
    }

    /// List all symbols in discovery order
    pub fn symbols(&self) -> Vec<Symbol> {
        self.variables.iter().map(Variable::symbol).collect()
    }

    /// Current value of the variable named by a character.
    ///
    /// Fails for characters which are not recorded in the table, they never default to ```false```.
    pub fn value_of(&self, c: char) -> Result<bool, TruthError> {
        self.variables
            .iter()
            .find(|v| v.symbol().as_char() == c)
            .map(Variable::value)
            .ok_or(TruthError::UnknownSymbol(c))
    }

    /// Change the value of the variable at the given index
    pub fn set_value(&mut self, idx: usize, value: bool) -> Result<(), TruthError> {
        let len = self.variables.len();
        match self.variables.get_mut(idx) {
            Some(var) => {
                var.set_value(value);
                Ok(())
            }
            None => Err(TruthError::malformed(format!(
                "no variable at index {} in a table of {}",
                idx, len
            ))),
        }
    }

    /// Give to each variable the value of the matching bit of an integer counter
    pub fn assign_counter(&mut self, counter: usize) {
        self.assign(&Assignment::from_counter(counter, self.len()));
    }

    /// Apply a complete assignment: variables beyond its length are set to ```false```
    pub fn assign(&mut self, assignment: &Assignment) {
        for (idx, var) in self.variables.iter_mut().enumerate() {
            var.set_value(assignment.value(idx));
        }
    }

    /// Assign values positionally from a string of bits.
    ///
    /// The character ```'0'``` stands for ```false```, any other character for ```true```.
    /// Variables beyond the length of the string are set to ```false```,
    /// extra characters are ignored.
    pub fn assign_bits(&mut self, bits: &str) {
        let extra = bits.chars().count().saturating_sub(self.len());
        if extra > 0 {
            warn!(
                "Ignoring {} extra value(s) in '{}' for {} variable(s)",
                extra,
                bits,
                self.len()
            );
        }
        let mut values = bits.chars().map(|c| c != '0');
        for var in self.variables.iter_mut() {
            var.set_value(values.next().unwrap_or(false));
        }
    }

    /// Snapshot of the current values
    pub fn assignment(&self) -> Assignment {
        self.variables.iter().map(Variable::value).collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_capacity(Limits::MAX_VARIABLES)
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{}", var.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    use test_log::test;

    #[test]
    fn discovery_order() -> Result<(), TruthError> {
        let symbols = SymbolTable::discover("C A C B")?;
        assert_eq!(symbols.len(), 3);
        assert_eq!(format!("{}", symbols), "CAB");
        assert_eq!(symbols.index_of(Symbol::try_from('A')?), Some(1));
        assert_eq!(symbols.symbol(2), Some(Symbol::try_from('B')?));
        assert_eq!(symbols.symbol(3), None);

        // operators, literals and parentheses are not symbols
        let symbols = SymbolTable::discover("~(1&x)+0+(Y)")?;
        assert_eq!(format!("{}", symbols), "xY");

        assert!(SymbolTable::discover("1 & (0 + ~1)")?.is_empty());
        Ok(())
    }

    #[test]
    fn case_sensitive() -> Result<(), TruthError> {
        let symbols = SymbolTable::discover("A & a + A")?;
        assert_eq!(symbols.symbols().len(), 2);
        assert_eq!(format!("{}", symbols), "Aa");
        Ok(())
    }

    #[test]
    fn capacity() -> Result<(), TruthError> {
        assert_eq!(
            SymbolTable::discover("A+B+C+D+E+F+G+H+I+J")?.len(),
            Limits::MAX_VARIABLES
        );
        assert_eq!(
            SymbolTable::discover("A+B+C+D+E+F+G+H+I+J+K"),
            Err(TruthError::TooManyVariables { max: 10 })
        );

        // repeated symbols do not count
        let limits = Limits::new(2, 128);
        assert_eq!(
            SymbolTable::discover_with_limits("A&B+B&A+~A", &limits)?.len(),
            2
        );

        let mut table = SymbolTable::with_capacity(1);
        table.insert(Symbol::try_from('x')?)?;
        assert!(table.insert(Symbol::try_from('y')?).is_err());
        assert_eq!(table.len(), 1);
        Ok(())
    }

    #[test]
    fn values() -> Result<(), TruthError> {
        let mut symbols = SymbolTable::discover("A+B+C")?;
        assert_eq!(symbols.value_of('A')?, false);
        assert_eq!(symbols.value_of('Z'), Err(TruthError::UnknownSymbol('Z')));

        symbols.assign_counter(0b110);
        assert_eq!(symbols.value_of('A')?, false);
        assert_eq!(symbols.value_of('B')?, true);
        assert_eq!(symbols.value_of('C')?, true);
        assert_eq!(symbols.assignment().counter(), 0b110);

        symbols.set_value(0, true)?;
        assert_eq!(symbols.value_of('A')?, true);
        assert!(symbols.set_value(3, true).is_err());
        Ok(())
    }

    #[test]
    fn positional_bits() -> Result<(), TruthError> {
        let mut symbols = SymbolTable::discover("(A&B)+~C")?;
        symbols.assign_bits("010");
        assert_eq!(symbols.assignment().counter(), 0b010);

        // anything but '0' is true
        symbols.assign_bits("0x0");
        assert_eq!(symbols.value_of('B')?, true);

        // missing values are false, extra values are ignored
        symbols.assign_bits("1");
        assert_eq!(symbols.assignment().counter(), 0b001);
        symbols.assign_bits("111111");
        assert_eq!(symbols.assignment().counter(), 0b111);
        Ok(())
    }
}
