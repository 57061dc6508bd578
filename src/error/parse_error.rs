use crate::error::ErrorKind;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant records the byte offset in the expression text at which the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The expression was empty or contained only blanks.
    #[error("Invalid expression: the expression is empty.")]
    Empty,
    /// The expression is structurally malformed.
    #[error("Error at position {position}: Invalid expression: {details}.")]
    InvalidExpression {
        /// What was wrong.
        details:  String,
        /// Byte offset where the error was detected.
        position: usize,
    },
    /// Brackets are unbalanced, mismatched or missing.
    #[error("Error at position {position}: Invalid brackets: {details}.")]
    InvalidBrackets {
        /// What was wrong.
        details:  String,
        /// Byte offset where the error was detected.
        position: usize,
    },
    /// A character that is not part of the language.
    #[error("Error at position {position}: Unknown operator '{operator}'.")]
    UnknownOperator {
        /// The offending text.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A built-in function was called with the wrong number of arguments.
    #[error("Error at position {position}: '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCount {
        /// The built-in's name.
        name:     String,
        /// Arity of the built-in.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
}

impl ParseError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty | Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::InvalidBrackets { .. } => ErrorKind::InvalidBrackets,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::ArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
        }
    }

    pub(crate) fn invalid_expression(details: impl Into<String>, position: usize) -> Self {
        Self::InvalidExpression { details: details.into(),
                                  position }
    }

    pub(crate) fn invalid_brackets(details: impl Into<String>, position: usize) -> Self {
        Self::InvalidBrackets { details: details.into(),
                                position }
    }
}
