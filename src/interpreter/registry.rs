use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::DefinitionError,
    interpreter::{evaluator::utils::is_reserved_identifier, parser::core::parse},
};

/// A user-defined function: its arity, its body text and the parsed body.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    arity: usize,
    body:  String,
    expr:  Expr,
}

impl Definition {
    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The body as it was written.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed body.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }
}

/// Maps names to user-defined functions.
///
/// Names of builtins, special forms and constants are reserved: they can be
/// neither defined nor queried. The registry is only mutated between
/// evaluations; evaluators borrow it immutably.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: HashMap<String, Definition>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a function of `arity` arguments with the given body,
    /// replacing any previous binding.
    ///
    /// The body is parsed immediately, so a malformed body is rejected here
    /// rather than when the function is first called.
    ///
    /// Returns `true` if the name was previously unbound.
    ///
    /// # Errors
    /// - `Reserved` if `name` belongs to the language.
    /// - `InvalidName` if `name` is not a letter followed by letters and
    ///   digits.
    /// - `InvalidBody` if the body does not parse.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::registry::Registry;
    ///
    /// let mut registry = Registry::new();
    ///
    /// assert_eq!(registry.define("twice", 1, "#0 * 2"), Ok(true));
    /// assert_eq!(registry.define("twice", 1, "#0 + #0"), Ok(false));
    /// assert!(registry.define("head", 1, "#0").is_err());
    /// ```
    pub fn define(&mut self, name: &str, arity: usize, body: &str) -> Result<bool, DefinitionError> {
        Self::check_name(name)?;

        let expr = parse(body).map_err(|source| DefinitionError::InvalidBody { name: name.to_string(),
                                                                               source })?;
        let definition = Definition { arity,
                                      body: body.trim().to_string(),
                                      expr };

        let is_new = self.definitions
                         .insert(name.to_string(), definition)
                         .is_none();
        tracing::debug!(name, arity, is_new, "registered definition");

        Ok(is_new)
    }

    /// Returns the definition bound to `name`.
    ///
    /// # Errors
    /// `Reserved` or `InvalidName` for names that can never be defined,
    /// `Unbound` if nothing is bound to `name`.
    pub fn lookup(&self, name: &str) -> Result<&Definition, DefinitionError> {
        Self::check_name(name)?;

        self.definitions
            .get(name)
            .ok_or_else(|| DefinitionError::Unbound { name: name.to_string() })
    }

    /// Returns `true` if a function is bound to `name`.
    ///
    /// # Errors
    /// `Reserved` or `InvalidName` for names that can never be defined.
    pub fn contains(&self, name: &str) -> Result<bool, DefinitionError> {
        Self::check_name(name)?;

        Ok(self.definitions.contains_key(name))
    }

    /// Defined names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of defined functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn check_name(name: &str) -> Result<(), DefinitionError> {
        if is_reserved_identifier(name) {
            return Err(DefinitionError::Reserved { name: name.to_string() });
        }

        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                    && chars.all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(DefinitionError::InvalidName { name: name.to_string() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reserved_names_are_rejected_everywhere() {
        let mut registry = Registry::new();

        for name in ["if", "list3", "E"] {
            assert_eq!(registry.define(name, 0, "1"),
                       Err(DefinitionError::Reserved { name: name.to_string() }));
            assert!(registry.contains(name).is_err());
            assert!(registry.lookup(name).is_err());
        }
    }

    #[test]
    fn names_must_be_identifiers() {
        let mut registry = Registry::new();

        assert!(matches!(registry.define("2f", 0, "1"), Err(DefinitionError::InvalidName { .. })));
        assert!(matches!(registry.define("my f", 0, "1"),
                         Err(DefinitionError::InvalidName { .. })));
        assert!(matches!(registry.define("", 0, "1"), Err(DefinitionError::InvalidName { .. })));
    }

    #[test]
    fn bodies_are_parsed_when_defined() {
        let mut registry = Registry::new();
        let Err(DefinitionError::InvalidBody { source, .. }) = registry.define("f", 1, "#0 +") else {
            panic!("expected an invalid body");
        };

        assert_eq!(source.kind(), ErrorKind::InvalidExpression);
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_returns_arity_and_text() {
        let mut registry = Registry::new();
        registry.define("len", 1, " if(#0, len(tail(#0)) + 1, 0) ").unwrap();

        let definition = registry.lookup("len").unwrap();
        assert_eq!(definition.arity(), 1);
        assert_eq!(definition.body(), "if(#0, len(tail(#0)) + 1, 0)");
        assert_eq!(registry.contains("len"), Ok(true));
        assert_eq!(registry.contains("other"), Ok(false));
        assert!(matches!(registry.lookup("other"), Err(DefinitionError::Unbound { .. })));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = Registry::new();
        registry.define("b", 0, "1").unwrap();
        registry.define("a", 0, "2").unwrap();

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }
}
