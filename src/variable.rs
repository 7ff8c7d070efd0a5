//! Implementation for variables and their symbols in expressions

use crate::TruthError;

use std::fmt;
use std::str::FromStr;

/// The single-letter name of a Boolean variable.
///
/// Symbols are ASCII letters and are case-sensitive: ```A``` and ```a``` are distinct variables.
///
/// ```
/// use truthtable::Symbol;
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let upper = Symbol::try_from('A')?;
/// let lower: Symbol = "a".parse()?;
/// assert_ne!(upper, lower);
/// assert!(Symbol::try_from('3').is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Symbol(char);

impl Symbol {
    /// Test if a character can be used as a symbol
    pub fn is_symbol(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    /// Return the underlying character
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = TruthError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match Self::is_symbol(c) {
            true => Ok(Self(c)),
            false => Err(TruthError::InvalidSymbol(c)),
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = TruthError;

    fn try_from(c: u8) -> Result<Self, Self::Error> {
        Self::try_from(char::from(c))
    }
}

impl FromStr for Symbol {
    type Err = TruthError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            (Some(_), Some(c)) => Err(TruthError::InvalidSymbol(c)),
            (None, _) => Err(TruthError::malformed("empty symbol name")),
        }
    }
}

impl From<Symbol> for char {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Boolean variable: a symbol with its current value.
///
/// The value is ```false``` until an assignment is applied by the [symbol table](crate::SymbolTable).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Variable {
    symbol: Symbol,
    value: bool,
}

impl Variable {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            value: false,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl From<Symbol> for Variable {
    fn from(symbol: Symbol) -> Self {
        Self::new(symbol)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.symbol, self.value as u8)
    }
}
