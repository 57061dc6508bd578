/// The builtin table and function-call dispatch.
///
/// Declares every builtin with its arity, and evaluates calls to both
/// builtin and user-defined functions.
pub mod core;
/// Numeric builtins: arithmetic, comparison, `int` and `sqrt`.
pub mod builtin;
/// Sequence builtins: construction, `head`, `tail`, `length` and `concat`.
pub mod sequence;
/// The `read` and `write` builtins.
pub mod io;
