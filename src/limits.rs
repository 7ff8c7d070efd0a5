//! Static bounds applied to the input expressions

use crate::TruthError;

/// Resource bounds checked when an expression enters the system.
///
/// The default values allow 10 distinct symbols (a table of 1024 rows)
/// and 128 characters of raw expression text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximal number of distinct symbols in an expression
    pub max_variables: usize,
    /// Maximal length of the raw expression, whitespace included
    pub max_expression_len: usize,
}

impl Limits {
    pub const MAX_VARIABLES: usize = 10;
    pub const MAX_EXPRESSION_LEN: usize = 128;
    /// Hard ceiling on the symbols of an enumerated table, whatever the configured limits
    pub const MAX_TABLE_VARIABLES: usize = 20;

    pub fn new(max_variables: usize, max_expression_len: usize) -> Self {
        Self {
            max_variables,
            max_expression_len,
        }
    }

    /// Reject raw expressions longer than the configured bound
    pub fn check_length(&self, raw: &str) -> Result<(), TruthError> {
        let len = raw.chars().count();
        if len > self.max_expression_len {
            return Err(TruthError::ExpressionTooLong {
                len,
                max: self.max_expression_len,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::MAX_VARIABLES, Self::MAX_EXPRESSION_LEN)
    }
}
