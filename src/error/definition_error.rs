use crate::error::ParseError;

/// Errors raised when registering or looking up user definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The name belongs to a built-in operator, function or constant.
    #[error("'{name}' is a reserved identifier.")]
    Reserved {
        /// The rejected name.
        name: String,
    },
    /// The name is not a valid identifier.
    #[error("'{name}' is not a valid function name.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// No definition is bound to the name.
    #[error("'{name}' is not defined.")]
    Unbound {
        /// The missing name.
        name: String,
    },
    /// The body of a definition does not parse.
    #[error("Invalid body for '{name}': {source}")]
    InvalidBody {
        /// The function being defined.
        name:   String,
        /// Why the body was rejected.
        source: ParseError,
    },
    /// A `#` in a definition body is not followed by a parameter index.
    #[error("Invalid parameter in '{body}': '#' must be followed by digits.")]
    InvalidParameter {
        /// The body containing the stray `#`.
        body: String,
    },
    /// The definition line itself is malformed.
    #[error("Invalid function definition: {details}.")]
    Malformed {
        /// What was wrong with the line.
        details: String,
    },
}
