use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::sequence::Sequence},
};

/// Absolute tolerance used when comparing scalars for equality.
pub const EQ_TOLERANCE: f64 = 1e-5;

/// Represents a runtime value in the interpreter.
///
/// The language has exactly two kinds of values. Both are owned: a value
/// lives in exactly one place (an evaluation result, an argument list or a
/// call frame), and cloning it yields an independent copy. Sequences share
/// their storage until one of the copies is modified.
#[derive(Debug, Clone)]
pub enum Value {
    /// A real number (double precision floating-point).
    Scalar(f64),
    /// An ordered, possibly unbounded collection of values.
    Sequence(Sequence),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Scalar(if v { 1.0 } else { 0.0 })
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Self::Sequence(s)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(Sequence::from_values(v))
    }
}

impl Value {
    /// Returns a short name for the kind of this value, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "number",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Returns the number held by a scalar.
    ///
    /// Sequences are never converted implicitly, not even one-element ones.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar().unwrap(), 2.5);
    /// assert!(Value::from(vec![Value::Scalar(1.0)]).as_scalar().is_err());
    /// ```
    pub fn as_scalar(&self) -> EvalResult<f64> {
        match self {
            Self::Scalar(x) => Ok(*x),
            Self::Sequence(_) => {
                Err(RuntimeError::type_error(format!("expected a number, actual type is {}",
                                                     self.kind_name())))
            },
        }
    }

    /// Returns the sequence held by this value.
    pub fn as_sequence(&self) -> EvalResult<&Sequence> {
        match self {
            Self::Sequence(s) => Ok(s),
            Self::Scalar(_) => {
                Err(RuntimeError::type_error(format!("expected a sequence, actual type is {}",
                                                     self.kind_name())))
            },
        }
    }

    /// Consumes the value and returns it as a sequence.
    ///
    /// Unlike [`Value::as_sequence`], a scalar is promoted to a one-element
    /// sequence. Used by operations that treat a number as the list holding
    /// it, such as `eq` and `concat`.
    #[must_use]
    pub fn into_sequence(self) -> Sequence {
        match self {
            Self::Sequence(s) => s,
            Self::Scalar(x) => Sequence::from_values([Self::Scalar(x)]),
        }
    }

    /// Interprets the value as a condition.
    ///
    /// A scalar is true when its magnitude is at least [`EQ_TOLERANCE`]; a
    /// sequence is true when it has at least one element.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(x) => x.abs() >= EQ_TOLERANCE,
            Self::Sequence(s) => !s.is_empty(),
        }
    }

    /// Returns the first element of a sequence.
    pub fn head(&self) -> EvalResult<Self> {
        self.as_sequence()?.head().cloned()
    }

    /// Returns a sequence without its first element.
    pub fn tail(self) -> EvalResult<Self> {
        match self {
            Self::Sequence(s) => Ok(Self::Sequence(s.tail()?)),
            Self::Scalar(_) => Err(RuntimeError::type_error("tail() of a number")),
        }
    }

    /// Returns the declared length of a sequence, or `None` if it is
    /// unbounded.
    pub fn length(&self) -> EvalResult<Option<usize>> {
        Ok(self.as_sequence()?.length())
    }

    /// Appends the elements of `other` to this value.
    ///
    /// Scalars on either side are promoted to one-element sequences.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::value::core::Value;
    ///
    /// let joined = Value::Scalar(1.0).concat(Value::from(vec![Value::Scalar(2.0)])).unwrap();
    /// assert_eq!(joined.to_string(), "[1 2]");
    /// ```
    pub fn concat(self, other: Self) -> EvalResult<Self> {
        Ok(Self::Sequence(self.into_sequence().concat(other.into_sequence())?))
    }
}

impl PartialEq for Value {
    /// Compares values the way the `eq` built-in does.
    ///
    /// Scalars are equal within [`EQ_TOLERANCE`]. A scalar equals a sequence
    /// holding exactly that one element. Sequences are equal when they have
    /// the same length and pairwise equal elements.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => (a - b).abs() < EQ_TOLERANCE,
            (Self::Scalar(x), Self::Sequence(s)) | (Self::Sequence(s), Self::Scalar(x)) => {
                s.length() == Some(1) && s.head().is_ok_and(|only| *only == Self::Scalar(*x))
            },
            (Self::Sequence(a), Self::Sequence(b)) => a.equals(b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{x}"),
            Self::Sequence(s) => write!(f, "{s}"),
        }
    }
}
