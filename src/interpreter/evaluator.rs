/// Binary operator evaluation logic.
///
/// Arithmetic on scalars, shared by the infix operators and the `add`,
/// `sub`, `mul`, `div` and `mod` builtins.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree-walking evaluator, its configuration and the recursion
/// depth accounting.
pub mod core;

/// The short-circuiting `if` and `nand` forms.
pub mod control;

/// Activation records for user-defined function calls.
pub mod frame;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
