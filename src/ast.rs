use crate::interpreter::evaluator::function::core::Builtin;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every construct of the language is an expression. Built-in functions are
/// resolved while parsing, so a [`Expr::Builtin`] node already carries the
/// function it calls; calls to user-defined functions keep the name and are
/// resolved against the registry when they are evaluated. The two special
/// forms `if` and `nand` get their own variants because they do not evaluate
/// all of their operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, or a named constant substituted during parsing.
    Number(f64),
    /// A bracketed list literal such as `[1, 2, head(#0)]`.
    List(Vec<Self>),
    /// A reference to an argument of the active call frame (`#N`).
    Parameter {
        /// Zero-based index of the argument.
        index:    usize,
        /// Byte offset of the reference in the expression text.
        position: usize,
    },
    /// A prefix `+` or `-`.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An arithmetic operation on two scalars.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// The sequencing comma: evaluates `first`, discards it, and yields
    /// `then`.
    Sequence {
        /// Expression evaluated for its effects only.
        first: Box<Self>,
        /// Expression whose value is the result.
        then:  Box<Self>,
    },
    /// A call to a built-in function.
    Builtin {
        /// The resolved function.
        builtin:   &'static Builtin,
        /// Argument expressions, exactly `builtin.arity` of them.
        arguments: Vec<Self>,
    },
    /// A call to a user-defined function.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// `if(condition, then, else)`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        then_branch: Box<Self>,
        /// Evaluated otherwise.
        else_branch: Box<Self>,
    },
    /// `nand(left, right)`, which skips `right` when `left` is falsy.
    Nand {
        /// First operand.
        left:  Box<Self>,
        /// Second operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Pow => 4,
        }
    }

    /// Only `^` groups from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl UnaryOperator {
    /// Unary operators bind tighter than every binary operator.
    pub const PRECEDENCE: u8 = 6;
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
