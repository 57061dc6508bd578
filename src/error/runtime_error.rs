use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Called a function that is neither built in nor defined.
    #[error("Unknown function or constant '{name}'.")]
    UnknownFunction {
        /// The name that was called.
        name: String,
    },
    /// A user-defined function received the wrong number of arguments.
    #[error("'{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The function's name.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A value had an unexpected kind or was outside an operation's domain.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the mismatch.
        details: String,
    },
    /// `head` or `tail` was applied to an empty sequence.
    #[error("Type error: {operation}() on an empty sequence.")]
    EmptySequence {
        /// The operation that needed an element.
        operation: &'static str,
    },
    /// Tried to append to a sequence that never ends.
    #[error("Type error: cannot concatenate onto an unbounded sequence.")]
    UnboundedConcat,
    /// A finite sequence was requested with more elements than can be
    /// materialized.
    #[error("Type error: a sequence of {requested} elements exceeds the limit of {limit}.")]
    SequenceTooLong {
        /// The requested number of elements.
        requested: usize,
        /// The largest length that may be materialized.
        limit:     usize,
    },
    /// A parameter reference named an argument the call does not have.
    #[error("Index out of range: parameter #{index} requested, but the call has {arity} argument(s).")]
    IndexOutOfRange {
        /// The requested parameter index.
        index: usize,
        /// Number of arguments bound in the active call.
        arity: usize,
    },
    /// A parameter reference was evaluated outside of a function body.
    #[error("Parameter #{index} used outside of a function body.")]
    NoActiveFrame {
        /// The requested parameter index.
        index: usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The nesting of user-function calls exceeded the configured limit.
    #[error("Recursion limit of {limit} nested calls exceeded.")]
    RecursionLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
    /// `read()` could not produce a number.
    #[error("Input error: {details}.")]
    Input {
        /// Why reading failed.
        details: String,
    },
}

impl RuntimeError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunctionOrConstant,
            Self::ArgumentCountMismatch { .. } => ErrorKind::InvalidArgumentCount,
            Self::TypeError { .. }
            | Self::EmptySequence { .. }
            | Self::UnboundedConcat
            | Self::SequenceTooLong { .. } => {
                ErrorKind::InvalidArgumentType
            },
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::NoActiveFrame { .. } => ErrorKind::NoActiveFrame,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
            Self::Input { .. } => ErrorKind::Input,
        }
    }

    pub(crate) fn type_error(details: impl Into<String>) -> Self {
        Self::TypeError { details: details.into() }
    }
}
