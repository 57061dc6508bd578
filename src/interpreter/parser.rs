/// Parser entry point and the token-driven main loop.
///
/// Walks the token stream once, feeding operands and operators into the
/// shunting-yard stacks, and decides which `+` and `-` are unary.
pub mod core;

/// The operator and operand stacks.
///
/// Implements precedence-driven reduction, bracket grouping, and the two
/// meanings of the comma.
pub mod operator;

/// Call targets.
///
/// Resolves a function name to a builtin, a special form or a user-defined
/// function, and builds the call node when its parenthesis closes.
pub mod call;

/// List literal parsing.
pub mod list;
