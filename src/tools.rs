//! Some helper functions

/// Remove all whitespace from a string.
///
/// ```
/// # use truthtable::tools::strip_whitespace;
/// assert_eq!(strip_whitespace(" (A & B)\t+ ~C "), "(A&B)+~C");
/// ```
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Extract the value of a single bit in an integer counter.
///
/// This defines the mapping between the iteration counter of a truth table
/// and the values of the variables: variable ```a``` takes the value of bit ```a```.
///
/// ```
/// # use truthtable::tools::bit;
/// assert!( bit(0b0100, 2));
/// assert!(!bit(0b0100, 1));
/// ```
pub fn bit(counter: usize, index: usize) -> bool {
    index < usize::BITS as usize && (counter >> index) & 1 == 1
}

/// Test if a character is an ASCII Boolean literal (```0``` or ```1```)
pub fn is_literal(c: u8) -> bool {
    c == b'0' || c == b'1'
}

/// Character of the Boolean literal for a value
pub fn literal(value: bool) -> u8 {
    match value {
        true => b'1',
        false => b'0',
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace("   "), "");
        assert_eq!(strip_whitespace("A+B"), "A+B");
        assert_eq!(strip_whitespace(" ~ A\n&\r\nB "), "~A&B");
    }

    #[test]
    fn test_bits() {
        let counter = 0b1011;
        let bits: Vec<bool> = (0..5).map(|i| bit(counter, i)).collect();
        assert_eq!(bits, vec![true, true, false, true, false]);
        assert!(!bit(usize::MAX, 200));
    }

    #[test]
    fn test_literals() {
        assert!(is_literal(b'0'));
        assert!(is_literal(b'1'));
        assert!(!is_literal(b'2'));
        assert!(!is_literal(b'A'));
        assert_eq!(literal(true), b'1');
        assert_eq!(literal(false), b'0');
    }
}
