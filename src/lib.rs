//! # seqfn
//!
//! seqfn is an interpreter for a small functional expression language written
//! in Rust. Expressions combine numbers and sequences with arithmetic,
//! built-in functions and user-defined functions whose parameters are written
//! `#0`, `#1`, and so on. Sequences may be unbounded and are generated lazily.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        console::StdConsole,
        evaluator::{core::Evaluator, frame::CallFrame},
        registry::Registry,
        value::core::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and walked by the
/// evaluator. Calls to built-ins are already resolved in the tree, so the
/// evaluator never looks a built-in up by name.
pub mod ast;
/// Provides unified error types for parsing, definition and evaluation.
///
/// This module defines every error that can be raised while tokenizing,
/// parsing, registering or evaluating code, and a coarse `ErrorKind` that
/// front ends and tests can match on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions to parse errors.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation, values, the
/// registry of user-defined functions, console I/O and the line-oriented
/// session front end.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses and evaluates a single expression.
///
/// User-function calls resolve against `registry`, and parameter references
/// against `frame`. `read` and `write` use the process's standard streams.
///
/// # Errors
/// Returns an error if the expression does not parse or fails to evaluate.
///
/// # Examples
/// ```
/// use seqfn::{evaluate, interpreter::{registry::Registry, value::core::Value}};
///
/// let mut registry = Registry::new();
/// registry.define("sum", 1, "if(#0, head(#0) + sum(tail(#0)), 0)").unwrap();
///
/// let value = evaluate("sum([1, 2, 3])", &registry, None).unwrap();
/// assert_eq!(value, Value::Scalar(6.0));
///
/// // Parameters only exist inside a function body.
/// assert!(evaluate("#0", &registry, None).is_err());
/// ```
pub fn evaluate(source: &str,
                registry: &Registry,
                frame: Option<&CallFrame<'_>>)
                -> Result<Value, Error> {
    let mut console = StdConsole::new();
    Evaluator::new(registry, &mut console).evaluate_source(source, frame)
}
