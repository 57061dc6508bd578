/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: malformed literals, unbalanced brackets, unknown operator
/// characters and built-in calls with the wrong number of arguments.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as type mismatches, operations on empty sequences,
/// division by zero or exceeding the recursion limit.
pub mod runtime_error;
/// Definition errors.
///
/// Errors raised by the definition registry and by the session front end
/// when a `name -> body` definition cannot be accepted.
pub mod definition_error;

pub use definition_error::DefinitionError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while defining or evaluating code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A definition was rejected.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

/// Coarse classification of an [`Error`].
///
/// Front ends and tests match on the kind rather than on the concrete
/// variant, which carries positions and details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty input, leftover operands or a malformed literal.
    InvalidExpression,
    /// Unmatched, mismatched or missing grouping symbols.
    InvalidBrackets,
    /// A character that is not a known operator.
    UnknownOperator,
    /// A call to a name that is neither built in nor defined.
    UnknownFunctionOrConstant,
    /// A call with the wrong number of arguments.
    InvalidArgumentCount,
    /// An operand of the wrong kind or outside the operation's domain.
    InvalidArgumentType,
    /// A parameter reference beyond the arity of the active call.
    IndexOutOfRange,
    /// A parameter reference outside of a function body.
    NoActiveFrame,
    /// Division or modulo by zero.
    DivisionByZero,
    /// Too many nested user-function calls.
    RecursionLimitExceeded,
    /// `read()` could not obtain a number.
    Input,
    /// The registry rejected a definition or lookup.
    Definition,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
            Self::Definition(_) => ErrorKind::Definition,
        }
    }
}
