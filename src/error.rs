use thiserror::Error;

/// Errors raised while discovering, substituting or reducing an expression.
///
/// All of them are fatal for the evaluation in progress: there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TruthError {
    /// The expression uses more distinct symbols than allowed
    #[error("Too many variables: at most {max} distinct symbols are supported")]
    TooManyVariables { max: usize },

    /// The raw expression is longer than allowed
    #[error("The expression is too long ({len} characters, at most {max} are supported)")]
    ExpressionTooLong { len: usize, max: usize },

    /// No value is recorded for this symbol
    #[error("There is no variable named '{0}'")]
    UnknownSymbol(char),

    /// The character can not be used as a variable name
    #[error("'{0}' is not a valid symbol, use a single letter in A-Z or a-z")]
    InvalidSymbol(char),

    /// The expression is invalid
    #[error("Not a valid expression: {0}")]
    MalformedExpression(String),
}

impl TruthError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedExpression(reason.into())
    }
}
