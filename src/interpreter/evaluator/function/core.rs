use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        console::Console,
        evaluator::{
            core::{EvalResult, Evaluator},
            frame::CallFrame,
            function::{builtin, io, sequence},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated arguments, already checked against its
/// arity, and the console used by `read` and `write`.
pub type BuiltinFn = fn(&[Value], &mut dyn Console) -> EvalResult<Value>;

/// A function provided by the interpreter.
#[derive(Debug)]
pub struct Builtin {
    /// The name the function is called by.
    pub name:  &'static str,
    /// The exact number of arguments the function takes.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name, an arity and a function pointer
/// implementing the builtin. The macro produces `BUILTIN_TABLE` (the static
/// table used for lookup) and `BUILTIN_FUNCTIONS` (the public list of
/// builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "eq"     => { arity: 2, func: builtin::eq },
    "le"     => { arity: 2, func: builtin::le },
    "int"    => { arity: 1, func: builtin::int },
    "sqrt"   => { arity: 1, func: builtin::sqrt },
    "add"    => { arity: 2, func: builtin::add },
    "sub"    => { arity: 2, func: builtin::sub },
    "mul"    => { arity: 2, func: builtin::mul },
    "div"    => { arity: 2, func: builtin::div },
    "mod"    => { arity: 2, func: builtin::modulo },
    "length" => { arity: 1, func: sequence::length },
    "head"   => { arity: 1, func: sequence::head },
    "tail"   => { arity: 1, func: sequence::tail },
    "list"   => { arity: 1, func: sequence::list },
    "list2"  => { arity: 2, func: sequence::list2 },
    "list3"  => { arity: 3, func: sequence::list3 },
    "concat" => { arity: 2, func: sequence::concat },
    "read"   => { arity: 0, func: io::read },
    "write"  => { arity: 1, func: io::write },
}

/// Functions that do not evaluate all of their arguments. They are parsed
/// into dedicated expression nodes instead of table lookups.
pub const SPECIAL_FORMS: &[&str] = &["if", "nand"];

/// Named numeric constants, substituted while parsing.
pub const CONSTANTS: &[(&str, f64)] = &[("PI", std::f64::consts::PI), ("E", std::f64::consts::E)];

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use seqfn::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("head").map(|b| b.arity), Some(1));
/// assert!(lookup_builtin("if").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Looks up a named constant.
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| *value)
}

impl Evaluator<'_> {
    /// Evaluates a builtin call.
    ///
    /// Arguments are evaluated left to right before the builtin runs.
    pub(crate) fn eval_builtin(&mut self,
                               builtin: &Builtin,
                               arguments: &[Expr],
                               frame: Option<&CallFrame<'_>>)
                               -> EvalResult<Value> {
        if arguments.len() != builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:     builtin.name.to_string(),
                                                             expected: builtin.arity,
                                                             found:    arguments.len(), });
        }

        let values = self.eval_arguments(arguments, frame)?;
        (builtin.func)(&values, self.console())
    }

    /// Executes a user-defined function.
    ///
    /// The function is looked up in the registry when the call is evaluated,
    /// so a body may call functions that are defined after it. The arguments
    /// are evaluated in the caller's frame, then the body runs in a fresh
    /// frame holding them.
    ///
    /// # Errors
    /// - `UnknownFunction` if nothing is registered under `name`.
    /// - `ArgumentCountMismatch` if the definition takes a different number
    ///   of arguments.
    /// - `RecursionLimitExceeded` if the call would nest deeper than the
    ///   configured limit.
    #[tracing::instrument(level = "trace", skip(self, arguments, frame))]
    pub(crate) fn call_user_function(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     frame: Option<&CallFrame<'_>>)
                                     -> EvalResult<Value> {
        let registry = self.registry();
        let definition = registry.lookup(name)
                                 .map_err(|_| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if arguments.len() != definition.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: definition.arity(),
                                                             found:    arguments.len(), });
        }

        let values = self.eval_arguments(arguments, frame)?;
        let callee = CallFrame::new(name, values, definition.expr());

        self.enter_call()?;
        let result = callee.run(self);
        self.leave_call();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        for (i, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[i + 1..].contains(name), "duplicate builtin {name}");
        }
    }

    #[test]
    fn special_forms_and_constants_are_not_table_entries() {
        for name in SPECIAL_FORMS.iter().chain(CONSTANTS.iter().map(|(name, _)| name)) {
            assert!(lookup_builtin(name).is_none());
        }
    }

    #[test]
    fn constants_resolve() {
        assert_eq!(lookup_constant("PI"), Some(std::f64::consts::PI));
        assert_eq!(lookup_constant("pi"), None);
    }
}
