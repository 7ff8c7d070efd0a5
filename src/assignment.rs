use crate::tools::bit;
use crate::TruthError;

use bit_set::BitSet;
use std::fmt;
use std::str::FromStr;

/// One complete mapping of Boolean values to the variables of a [symbol table](crate::SymbolTable).
///
/// The assignment is defined by the set of indices associated to the ```true``` value (using a bit-set internally)
/// and by the number of variables: all other variables are implicitly ```false```.
///
/// An assignment can be derived from an integer counter, where bit ```a``` gives the value of the variable
/// at index ```a```, or parsed from a string of bits in index order.
///
/// ```
/// use truthtable::Assignment;
///
/// let assignment = Assignment::from_counter(0b011, 3);
/// assert!( assignment.value(0));
/// assert!( assignment.value(1));
/// assert!(!assignment.value(2));
/// assert_eq!(assignment.to_string(), "110");
///
/// let parsed: Assignment = "110".parse().unwrap();
/// assert_eq!(parsed, assignment);
/// assert_eq!(parsed.counter(), 3);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Assignment {
    active: BitSet,
    len: usize,
}

impl Assignment {
    /// Build the assignment of ```len``` variables matching the bits of a counter
    pub fn from_counter(counter: usize, len: usize) -> Self {
        (0..len).map(|idx| bit(counter, idx)).collect()
    }

    /// Value of the variable at the given index
    pub fn value(&self, idx: usize) -> bool {
        self.active.contains(idx)
    }

    /// Number of variables covered by this assignment
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the values in index order
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|idx| self.value(idx))
    }

    /// Recover the counter from which this assignment is derived
    pub fn counter(&self) -> usize {
        self.active.iter().fold(0, |acc, idx| acc | (1 << idx))
    }
}

impl FromIterator<bool> for Assignment {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut assignment = Self::default();
        for (idx, value) in iter.into_iter().enumerate() {
            if value {
                assignment.active.insert(idx);
            }
            assignment.len = idx + 1;
        }
        assignment
    }
}

impl FromStr for Assignment {
    type Err = TruthError;

    /// Parse a string of bits, ```'0'``` is false and any other character (including whitespace) is true.
    fn from_str(descr: &str) -> Result<Self, TruthError> {
        Ok(descr.chars().map(|c| c != '0').collect())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.values() {
            write!(f, "{}", value as u8)?;
        }
        Ok(())
    }
}
