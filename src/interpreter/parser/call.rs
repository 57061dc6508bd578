use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::function::core::{Builtin, lookup_builtin},
        parser::core::ParseResult,
    },
};

/// What an open call parenthesis will turn into once it closes.
#[derive(Debug)]
pub(crate) enum CallTarget {
    Builtin(&'static Builtin),
    /// `list`, whose concrete variant depends on the argument count.
    List,
    If,
    Nand,
    /// A user-defined function, resolved when the call is evaluated.
    User(String),
}

impl CallTarget {
    pub(crate) fn resolve(name: &str) -> Self {
        match name {
            "list" => Self::List,
            "if" => Self::If,
            "nand" => Self::Nand,
            _ => lookup_builtin(name).map_or_else(|| Self::User(name.to_string()), Self::Builtin),
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Builtin(builtin) => builtin.name,
            Self::List => "list",
            Self::If => "if",
            Self::Nand => "nand",
            Self::User(name) => name,
        }
    }

    /// Builds the call node from the parsed arguments, checking the argument
    /// count of everything but user-defined functions.
    pub(crate) fn finish(self, arguments: Vec<Expr>, position: usize) -> ParseResult<Expr> {
        let count_error = |name: &str, expected: usize, found: usize| {
            ParseError::ArgumentCount { name: name.to_string(),
                                        expected,
                                        found,
                                        position }
        };

        match self {
            Self::Builtin(builtin) => {
                if arguments.len() != builtin.arity {
                    return Err(count_error(builtin.name, builtin.arity, arguments.len()));
                }
                Ok(Expr::Builtin { builtin,
                                   arguments })
            },
            Self::List => {
                let variant = match arguments.len() {
                    1 => "list",
                    2 => "list2",
                    3 => "list3",
                    found => return Err(count_error("list", 1, found)),
                };
                let builtin = lookup_builtin(variant).ok_or_else(|| {
                                                         count_error("list", 1, arguments.len())
                                                     })?;
                Ok(Expr::Builtin { builtin,
                                   arguments })
            },
            Self::If => {
                let [condition, then_branch, else_branch] =
                    <[Expr; 3]>::try_from(arguments).map_err(|a| count_error("if", 3, a.len()))?;
                Ok(Expr::If { condition:   Box::new(condition),
                              then_branch: Box::new(then_branch),
                              else_branch: Box::new(else_branch), })
            },
            Self::Nand => {
                let [left, right] =
                    <[Expr; 2]>::try_from(arguments).map_err(|a| count_error("nand", 2, a.len()))?;
                Ok(Expr::Nand { left:  Box::new(left),
                                right: Box::new(right), })
            },
            Self::User(name) => Ok(Expr::Call { name,
                                                arguments }),
        }
    }
}
