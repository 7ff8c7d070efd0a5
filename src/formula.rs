//! Boolean rules kept as text and evaluated by substitution and reduction

use crate::reduce::{reduce, Buffer};
use crate::tools::{literal, strip_whitespace};
use crate::{Limits, Rule, Symbol, SymbolTable, TruthError};

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static RE_ALPHABET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z01+&~()]+$").unwrap());

/// A Boolean expression evaluated on its textual form.
///
/// For each evaluation, the symbols are replaced by the literal of their current value
/// (see [substitute]) and the resulting literal expression is [reduced](crate::reduce::reduce) to a single value.
///
/// Whitespace is removed when the formula is created. The raw input must respect the length limit
/// and only use symbols, literals, operators and parentheses.
///
/// ```
/// use truthtable::{Formula, Rule};
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let formula = Formula::new("(A+B) & C")?;
/// let mut symbols = formula.symbols()?;
///
/// symbols.assign_bits("100");
/// assert_eq!(formula.eval(&symbols)?, false);
/// symbols.assign_bits("101");
/// assert_eq!(formula.eval(&symbols)?, true);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    /// The expression without whitespace
    text: String,
    limits: Limits,
}

impl Formula {
    /// Load an expression with the default limits
    pub fn new(raw: &str) -> Result<Self, TruthError> {
        Self::with_limits(raw, Limits::default())
    }

    pub fn with_limits(raw: &str, limits: Limits) -> Result<Self, TruthError> {
        limits.check_length(raw)?;
        let text = strip_whitespace(raw);
        if text.is_empty() {
            return Err(TruthError::malformed("empty expression"));
        }
        if !RE_ALPHABET.is_match(&text) {
            let c = text
                .chars()
                .find(|c| !Symbol::is_symbol(*c) && !"01+&~()".contains(*c))
                .unwrap_or(' ');
            return Err(TruthError::malformed(format!(
                "unexpected character '{}' in '{}'",
                c, raw
            )));
        }
        Ok(Self { text, limits })
    }

    /// The expression, without whitespace
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Discover the symbols of this formula in order of appearance
    pub fn symbols(&self) -> Result<SymbolTable, TruthError> {
        SymbolTable::discover_with_limits(&self.text, &self.limits)
    }

    /// Replace the symbols with the literals of their current value
    pub fn substitute(&self, symbols: &SymbolTable) -> Result<Buffer, TruthError> {
        substitute(&self.text, symbols)
    }
}

/// Rewrite an expression into a literal expression.
///
/// Each symbol is replaced by the literal of its value in the table (```1``` or ```0```).
/// If a symbol is directly preceded by a NOT operator, the operator is consumed and the symbol is
/// replaced by the literal of the complement of its value. Whitespace is dropped.
///
/// Fails if a symbol is not recorded in the table: the result never contains a symbol.
///
/// ```
/// use truthtable::{formula::substitute, SymbolTable};
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let mut symbols = SymbolTable::discover("AB")?;
/// symbols.assign_bits("10");
/// assert_eq!(substitute("~A & (B + ~B)", &symbols)?.to_string(), "0&(0+1)");
/// # Ok(())
/// # }
/// ```
pub fn substitute(expr: &str, symbols: &SymbolTable) -> Result<Buffer, TruthError> {
    let mut buffer = Buffer::new();
    for c in expr.chars() {
        if Symbol::is_symbol(c) {
            let value = symbols.value_of(c)?;
            if buffer.last() == Some(b'~') {
                buffer.pop();
                buffer.push(literal(!value));
            } else {
                buffer.push(literal(value));
            }
        } else if c.is_whitespace() {
            continue;
        } else if c.is_ascii() {
            buffer.push(c as u8);
        } else {
            return Err(TruthError::malformed(format!(
                "unexpected character '{}' in '{}'",
                c, expr
            )));
        }
    }
    trace!("Setting values in: {} is now: {}", expr, buffer);
    Ok(buffer)
}

impl FromStr for Formula {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Rule for Formula {
    fn eval(&self, symbols: &SymbolTable) -> Result<bool, TruthError> {
        let mut buffer = self.substitute(symbols)?;
        reduce(&mut buffer)
    }

    fn collect_symbols(&self, symbols: &mut SymbolTable) -> Result<(), TruthError> {
        for c in self.text.chars().filter(|c| Symbol::is_symbol(*c)) {
            symbols.insert(Symbol::try_from(c)?)?;
        }
        Ok(())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use crate::formula::substitute;
    use crate::*;

    use test_log::test;

    fn eval_bits(s: &str, bits: &str) -> Result<bool, TruthError> {
        let formula = Formula::new(s)?;
        let mut symbols = formula.symbols()?;
        symbols.assign_bits(bits);
        formula.eval(&symbols)
    }

    #[test]
    fn substitution() -> Result<(), TruthError> {
        let mut symbols = SymbolTable::discover("ABC")?;
        symbols.assign_bits("101");

        assert_eq!(substitute("A&B+C", &symbols)?.to_string(), "1&0+1");
        assert_eq!(substitute("~A&~B", &symbols)?.to_string(), "0&1");
        assert_eq!(substitute("~~A", &symbols)?.to_string(), "~0");
        assert_eq!(substitute("~(A)", &symbols)?.to_string(), "~(1)");
        assert_eq!(substitute(" ~ C ", &symbols)?.to_string(), "0");

        assert_eq!(
            substitute("A&D", &symbols),
            Err(TruthError::UnknownSymbol('D'))
        );
        Ok(())
    }

    #[test]
    fn loading() -> Result<(), TruthError> {
        let formula = Formula::new(" ( A + b )\t& ~C ")?;
        assert_eq!(formula.text(), "(A+b)&~C");
        assert_eq!(formula.to_string(), "(A+b)&~C");
        assert_eq!(formula.symbols()?.to_string(), "AbC");

        assert!(matches!(
            Formula::new("   "),
            Err(TruthError::MalformedExpression(_))
        ));
        assert!(matches!(
            Formula::new("A | B"),
            Err(TruthError::MalformedExpression(_))
        ));
        assert!(matches!(
            Formula::new("A & é"),
            Err(TruthError::MalformedExpression(_))
        ));
        assert_eq!(
            Formula::new(&"A".repeat(200)),
            Err(TruthError::ExpressionTooLong { len: 200, max: 128 })
        );
        assert_eq!(
            Formula::new("A+B+C+D+E+F+G+H+I+J+K")?.symbols(),
            Err(TruthError::TooManyVariables { max: 10 })
        );
        Ok(())
    }

    #[test]
    fn evaluation() -> Result<(), TruthError> {
        assert_eq!(eval_bits("~A", "1")?, false);
        assert_eq!(eval_bits("~A", "0")?, true);
        assert_eq!(eval_bits("~(A&B)", "11")?, false);
        assert_eq!(eval_bits("~(A&B)", "10")?, true);
        assert_eq!(eval_bits("(A+B)&C", "100")?, false);
        assert_eq!(eval_bits("(A+B)&C", "101")?, true);
        assert_eq!(eval_bits("A & 1 + 0", "1")?, true);
        assert_eq!(eval_bits("A & a", "10")?, false);
        assert_eq!(eval_bits("A & a", "11")?, true);
        Ok(())
    }

    #[test]
    fn malformed() {
        for s in ["(A+B", "A+B)", "A+", "&A", "A&&B", "AB", "()", "~", "A~"] {
            assert!(
                matches!(eval_bits(s, "11"), Err(TruthError::MalformedExpression(_))),
                "{}",
                s
            );
        }
    }
}
