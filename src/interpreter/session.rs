use std::{collections::BTreeSet, fs, io, path::Path};

use crate::{
    error::{DefinitionError, Error},
    interpreter::{
        console::{Console, StdConsole},
        evaluator::core::{EvalConfig, Evaluator},
        registry::Registry,
        value::core::Value,
    },
};

/// Token separating a function name from its body.
pub const DEFINITION_ARROW: &str = "->";
/// Command that ends a session.
pub const EXIT_COMMAND: &str = "exit";

/// What a line of input amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank or a comment.
    Skipped,
    /// The line opened or continued a definition whose brackets are still
    /// open; more lines are needed.
    Pending,
    /// The exit command was entered.
    Exit,
    /// A function was defined.
    Defined {
        /// The function's name.
        name:   String,
        /// `true` if the name was previously unbound.
        is_new: bool,
    },
    /// An expression was evaluated.
    Value(Value),
}

/// A definition waiting for the rest of its body.
#[derive(Debug)]
struct PendingDefinition {
    name: String,
    body: String,
}

/// A line-oriented front end over a registry and a console.
///
/// Each line is either a comment, the exit command, a definition
/// `name -> body`, or an expression to evaluate. A failed line leaves the
/// session usable, and definitions made before the failure stay in place.
///
/// # Example
/// ```
/// use seqfn::interpreter::{
///     console::BufferConsole,
///     session::{Outcome, Session},
///     value::core::Value,
/// };
///
/// let mut session = Session::new(BufferConsole::default());
///
/// session.feed_line("len -> if(#0, len(tail(#0)) + 1, 0)").unwrap();
/// let outcome = session.feed_line("len(list(1, 1, 25))").unwrap();
///
/// assert_eq!(outcome, Outcome::Value(Value::Scalar(25.0)));
/// ```
#[derive(Debug)]
pub struct Session<C: Console> {
    registry: Registry,
    console:  C,
    config:   EvalConfig,
    pending:  Option<PendingDefinition>,
}

impl Session<StdConsole> {
    /// Creates a session over the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(StdConsole::new())
    }
}

impl<C: Console> Session<C> {
    /// Creates a session with an empty registry.
    pub fn new(console: C) -> Self {
        Self { registry: Registry::new(),
               console,
               config: EvalConfig::default(),
               pending: None }
    }

    /// Replaces the evaluation limits.
    #[must_use]
    pub const fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// The functions defined so far.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The console used by `read` and `write`.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Returns `true` while a multi-line definition is incomplete.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluates an expression against the session's definitions.
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Error> {
        Evaluator::new(&self.registry, &mut self.console).with_config(self.config)
                                                          .evaluate_source(source, None)
    }

    /// Processes one line of input.
    ///
    /// # Errors
    /// Returns the parse, evaluation or definition error the line caused. An
    /// incomplete definition is discarded when it fails.
    pub fn feed_line(&mut self, line: &str) -> Result<Outcome, Error> {
        if let Some(mut pending) = self.pending.take() {
            pending.body.push(' ');
            pending.body.push_str(line);
            return self.continue_definition(pending);
        }

        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") {
            return Ok(Outcome::Skipped);
        }
        if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Ok(Outcome::Exit);
        }

        if let Some((name, body)) = trimmed.split_once(DEFINITION_ARROW) {
            return self.continue_definition(PendingDefinition { name: name.trim().to_string(),
                                                                body: body.to_string() });
        }

        self.evaluate(trimmed).map(Outcome::Value)
    }

    /// Feeds every line of a definition file through the session.
    ///
    /// Errors are collected with their one-based line numbers instead of
    /// stopping the load. A definition still open at the end of the file is
    /// reported against its last line.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load_file(&mut self, path: &Path) -> io::Result<Vec<(usize, Error)>> {
        let text = fs::read_to_string(path)?;
        let mut errors = Vec::new();
        let mut last_line = 0;

        for (index, line) in text.lines().enumerate() {
            last_line = index + 1;
            match self.feed_line(line) {
                Ok(Outcome::Exit) => break,
                Ok(_) => {},
                Err(e) => errors.push((last_line, e)),
            }
        }

        if let Some(pending) = self.pending.take() {
            let details = format!("definition of '{}' never closes its brackets", pending.name);
            errors.push((last_line, DefinitionError::Malformed { details }.into()));
        }

        tracing::debug!(path = %path.display(),
                        defined = self.registry.len(),
                        errors = errors.len(),
                        "loaded definition file");

        Ok(errors)
    }

    fn continue_definition(&mut self, pending: PendingDefinition) -> Result<Outcome, Error> {
        let depth = bracket_depth(&pending.body);

        if depth < 0 {
            return Err(DefinitionError::Malformed { details: format!("unbalanced brackets in \
                                                                      the body of '{}'",
                                                                     pending.name) }.into());
        }
        if depth > 0 || pending.body.trim().is_empty() {
            self.pending = Some(pending);
            return Ok(Outcome::Pending);
        }

        let arity = parameter_count(&pending.body)?;
        let is_new = self.registry.define(&pending.name, arity, &pending.body)?;

        Ok(Outcome::Defined { name: pending.name,
                              is_new })
    }
}

/// Opening minus closing brackets, or `-1` as soon as a closing bracket has
/// no opening partner.
fn bracket_depth(text: &str) -> isize {
    let mut depth = 0;

    for c in text.chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return -1;
                }
            },
            _ => {},
        }
    }

    depth
}

/// Number of distinct parameters `#N` a body refers to.
fn parameter_count(body: &str) -> Result<usize, DefinitionError> {
    let mut parameters = BTreeSet::new();
    let mut rest = body;

    while let Some(at) = rest.find('#') {
        rest = &rest[at + 1..];
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());

        if digits == 0 {
            return Err(DefinitionError::InvalidParameter { body: body.trim().to_string() });
        }

        parameters.insert(rest[..digits].trim_start_matches('0').to_string());
        rest = &rest[digits..];
    }

    Ok(parameters.len())
}
