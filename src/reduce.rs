//! Reduction of literal expressions by repeated in-place rewriting.
//!
//! A literal expression only contains the Boolean literals ```0``` and ```1```, the operators
//! ```+``` (OR), ```&``` (AND) and ```~``` (NOT), and parentheses. It is reduced on a mutable [Buffer]
//! until a single literal remains, with the usual precedence: parentheses first, then NOT, then AND, then OR.
//!
//! ```
//! use truthtable::reduce::{reduce, Buffer};
//! # use truthtable::TruthError;
//! # fn main() -> Result<(), TruthError> {
//!
//! let mut buffer = Buffer::from("0+1&~(1+0)");
//! assert_eq!(reduce(&mut buffer)?, false);
//! assert_eq!(buffer.to_string(), "0");
//! # Ok(())
//! # }
//! ```

use crate::tools::{is_literal, literal};
use crate::{Operator, TruthError};

use log::debug;
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// A mutable sequence of characters holding an expression under reduction.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the character at a given position
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.0.get(idx).copied()
    }

    pub fn last(&self) -> Option<u8> {
        self.0.last().copied()
    }

    pub fn push(&mut self, c: u8) {
        self.0.push(c);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    /// Overwrite the character at a given position
    pub fn replace(&mut self, idx: usize, c: u8) {
        self.0[idx] = c;
    }

    /// Remove a range of characters, following characters are shifted back
    pub fn remove(&mut self, range: Range<usize>) {
        self.0.drain(range);
    }

    /// Replace a range of characters with a single one
    pub fn splice(&mut self, range: RangeInclusive<usize>, c: u8) {
        self.0.splice(range, [c]);
    }

    /// Copy a part of the buffer
    pub fn extract(&self, range: Range<usize>) -> Self {
        Self(self.0[range].to_vec())
    }

    /// The value of the buffer if it is reduced to a single literal
    pub fn literal(&self) -> Option<bool> {
        match self.0.as_slice() {
            [b'0'] => Some(false),
            [b'1'] => Some(true),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Reduce a literal expression to a single Boolean value.
///
/// Runs the AND pass then the OR pass and requires the buffer to be a single literal after them.
/// A buffer which is already a single literal is left unchanged.
pub fn reduce(buffer: &mut Buffer) -> Result<bool, TruthError> {
    resolve(buffer, Operator::And)?;
    resolve(buffer, Operator::Or)?;
    buffer.literal().ok_or_else(|| {
        TruthError::malformed(format!(
            "'{}' does not reduce to a single value",
            buffer
        ))
    })
}

/// Apply a single reduction pass for the given operator.
///
/// The buffer is scanned from left to right:
/// * parenthesized groups are fully reduced and replaced by their value,
/// * a NOT operator applied on a literal is replaced by the complement of the literal,
/// * the selected operator is applied when both of its operands are literals.
///
/// An operator followed by a group or by a NOT is skipped and revisited after its operand is resolved.
/// Other characters are left for later passes.
pub fn resolve(buffer: &mut Buffer, op: Operator) -> Result<(), TruthError> {
    let target = op.symbol() as u8;
    let mut i = 0;
    while let Some(c) = buffer.get(i) {
        match c {
            b'(' => {
                let close = matching_parenthesis(buffer, i)?;
                let mut group = buffer.extract(i + 1..close);
                debug!("found parenthesis, re-running with {}", group);
                let value = reduce(&mut group)?;
                buffer.splice(i..=close, literal(value));

                // revisit an operator or a negation waiting for this group
                i = i.saturating_sub(2);
            }
            b')' => {
                return Err(TruthError::malformed(format!(
                    "unbalanced ')' in '{}'",
                    buffer
                )))
            }
            b'~' => match buffer.get(i + 1) {
                Some(b'(') => i += 1,
                Some(b'~') => {
                    buffer.remove(i..i + 2);
                    i = i.saturating_sub(1);
                }
                Some(next) if is_literal(next) => {
                    buffer.replace(i, literal(next == b'0'));
                    buffer.remove(i + 1..i + 2);
                    i = i.saturating_sub(1);
                }
                _ => {
                    return Err(TruthError::malformed(format!(
                        "'~' without operand in '{}'",
                        buffer
                    )))
                }
            },
            c if c == target => match buffer.get(i + 1) {
                Some(b'(') | Some(b'~') => i += 1,
                Some(rhs) if is_literal(rhs) && i > 0 && buffer.get(i - 1).map_or(false, is_literal) => {
                    let lhs = buffer.get(i - 1) == Some(b'1');
                    let value = op.apply(lhs, rhs == b'1');
                    debug!("found {}", op);
                    buffer.replace(i - 1, literal(value));
                    buffer.remove(i..i + 2);
                }
                _ => {
                    return Err(TruthError::malformed(format!(
                        "'{}' without two operands in '{}'",
                        op, buffer
                    )))
                }
            },
            b'0' | b'1' | b'&' | b'+' => i += 1,
            c => {
                return Err(TruthError::malformed(format!(
                    "unexpected character '{}' in '{}'",
                    char::from(c),
                    buffer
                )))
            }
        }
        debug!("now {} [{}]", buffer, i);
    }
    Ok(())
}

/// Find the position of the parenthesis closing the one at ```open```
fn matching_parenthesis(buffer: &Buffer, open: usize) -> Result<usize, TruthError> {
    let mut depth = 0usize;
    for (idx, c) in buffer.as_bytes().iter().enumerate().skip(open) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => (),
        }
    }
    Err(TruthError::malformed(format!(
        "unbalanced '(' in '{}'",
        buffer
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn reduced(s: &str) -> Result<bool, TruthError> {
        reduce(&mut Buffer::from(s))
    }

    fn is_malformed(s: &str) -> bool {
        matches!(reduced(s), Err(TruthError::MalformedExpression(_)))
    }

    #[test]
    fn single_literal() -> Result<(), TruthError> {
        for s in ["0", "1"] {
            let mut buffer = Buffer::from(s);
            resolve(&mut buffer, Operator::And)?;
            resolve(&mut buffer, Operator::Or)?;
            assert_eq!(buffer.to_string(), s);
            assert_eq!(reduce(&mut buffer)?, s == "1");
            assert_eq!(buffer.to_string(), s);
        }
        Ok(())
    }

    #[test]
    fn operators() -> Result<(), TruthError> {
        assert_eq!(reduced("0&0")?, false);
        assert_eq!(reduced("0&1")?, false);
        assert_eq!(reduced("1&1")?, true);
        assert_eq!(reduced("0+0")?, false);
        assert_eq!(reduced("0+1")?, true);
        assert_eq!(reduced("1+1")?, true);
        assert_eq!(reduced("~0")?, true);
        assert_eq!(reduced("~1")?, false);
        assert_eq!(reduced("~~1")?, true);
        assert_eq!(reduced("1&1&1&0")?, false);
        assert_eq!(reduced("0+0+0+1")?, true);
        Ok(())
    }

    #[test]
    fn precedence() -> Result<(), TruthError> {
        // AND binds tighter than OR
        assert_eq!(reduced("1+0&0")?, true);
        assert_eq!(reduced("0&0+1")?, true);
        assert_eq!(reduced("0+1&0")?, false);

        // NOT binds tighter than AND
        assert_eq!(reduced("~0&0")?, false);
        assert_eq!(reduced("1&~0")?, true);
        assert_eq!(reduced("0+~0&~1")?, false);
        Ok(())
    }

    #[test]
    fn parenthesis() -> Result<(), TruthError> {
        assert_eq!(reduced("(1)")?, true);
        assert_eq!(reduced("(1+0)&0")?, false);
        assert_eq!(reduced("(1+0)&1")?, true);
        assert_eq!(reduced("0&(0+1)")?, false);
        assert_eq!(reduced("1&(0)&(1)")?, false);
        assert_eq!(reduced("~(1&1)")?, false);
        assert_eq!(reduced("~(1&0)")?, true);
        assert_eq!(reduced("1&~(0+0)")?, true);
        assert_eq!(reduced("~~(0)")?, false);
        assert_eq!(reduced("~(~(1))")?, true);
        Ok(())
    }

    #[test]
    fn nested_parenthesis() -> Result<(), TruthError> {
        assert_eq!(reduced("((1))")?, true);
        assert_eq!(reduced("(0+(1&(1+0)))&1")?, true);
        assert_eq!(reduced("((0+0)+(1&0))+0")?, false);
        assert_eq!(reduced("(1&(0+~(0&1)))&~((0))")?, true);
        Ok(())
    }

    #[test]
    fn partial_pass() -> Result<(), TruthError> {
        let mut buffer = Buffer::from("0+1&0+1");
        resolve(&mut buffer, Operator::And)?;
        assert_eq!(buffer.to_string(), "0+0+1");

        // a second pass is a fixed point
        resolve(&mut buffer, Operator::And)?;
        assert_eq!(buffer.to_string(), "0+0+1");

        resolve(&mut buffer, Operator::Or)?;
        assert_eq!(buffer.to_string(), "1");
        Ok(())
    }

    #[test]
    fn malformed() {
        assert!(is_malformed(""));
        assert!(is_malformed("()"));
        assert!(is_malformed("(1"));
        assert!(is_malformed("1)"));
        assert!(is_malformed("(1+0))&1"));
        assert!(is_malformed("&1"));
        assert!(is_malformed("1+"));
        assert!(is_malformed("1&&0"));
        assert!(is_malformed("1+&0"));
        assert!(is_malformed("~"));
        assert!(is_malformed("1~"));
        assert!(is_malformed("~+1"));
        assert!(is_malformed("10"));
        assert!(is_malformed("1(0)"));
        assert!(is_malformed("A&1"));
        assert!(is_malformed("1 & 0"));
    }
}
