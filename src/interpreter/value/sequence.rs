use std::{borrow::Cow, collections::VecDeque, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{EQ_TOLERANCE, Value},
    },
};

/// Number of elements materialized up front for an unbounded sequence.
pub const UNBOUNDED_PREFIX: usize = 10;
/// Longest finite progression that may be materialized at once.
pub const MAX_PROGRESSION_LENGTH: usize = 1 << 24;

/// An ordered collection of values, possibly without end.
///
/// The stored elements are always a prefix of the sequence's logical
/// content. A finite sequence stores all of its elements. An unbounded
/// sequence stores a prefix and continues as an arithmetic progression:
/// every element past the prefix is the previous one plus `step`.
///
/// Storage is reference counted and copied on write, so cloning a sequence
/// is cheap and modifying one clone never affects another.
#[derive(Debug, Clone)]
pub struct Sequence {
    items:   Rc<VecDeque<Value>>,
    step:    f64,
    bounded: bool,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl Sequence {
    /// Creates the empty sequence `[]`.
    #[must_use]
    pub fn empty() -> Self {
        Self { items:   Rc::default(),
               step:    0.0,
               bounded: true, }
    }

    /// Creates a finite sequence holding the given values in order.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self { items:   Rc::new(values.into_iter().collect()),
               step:    1.0,
               bounded: true, }
    }

    /// Creates the finite progression `start, start + step, ...` with `count`
    /// elements.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::value::sequence::Sequence;
    ///
    /// let s = Sequence::progression(2.0, 1.0, 3).unwrap();
    /// assert_eq!(s.to_string(), "[2 3 4]");
    /// assert_eq!(s.length(), Some(3));
    /// ```
    ///
    /// # Errors
    /// `SequenceTooLong` if `count` exceeds [`MAX_PROGRESSION_LENGTH`] or the
    /// elements cannot be allocated.
    pub fn progression(start: f64, step: f64, count: usize) -> EvalResult<Self> {
        let too_long = || RuntimeError::SequenceTooLong { requested: count,
                                                          limit:     MAX_PROGRESSION_LENGTH, };
        if count > MAX_PROGRESSION_LENGTH {
            return Err(too_long());
        }

        let mut items = VecDeque::new();
        items.try_reserve_exact(count).map_err(|_| too_long())?;
        Self::fill(&mut items, start, step, count);

        Ok(Self { items: Rc::new(items),
                  step,
                  bounded: true })
    }

    /// Creates the unbounded progression `start, start + step, ...`.
    ///
    /// The first [`UNBOUNDED_PREFIX`] elements are materialized immediately.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::value::sequence::Sequence;
    ///
    /// let s = Sequence::unbounded(5.0, 1.0);
    /// assert_eq!(s.length(), None);
    /// assert_eq!(s.to_string(), "[5 6 7 8 9 10 11 12 13 14 ...]");
    /// ```
    #[must_use]
    pub fn unbounded(start: f64, step: f64) -> Self {
        let mut items = VecDeque::with_capacity(UNBOUNDED_PREFIX);
        Self::fill(&mut items, start, step, UNBOUNDED_PREFIX);

        Self { items: Rc::new(items),
               step,
               bounded: false }
    }

    fn fill(items: &mut VecDeque<Value>, start: f64, step: f64, count: usize) {
        let mut current = start;

        for _ in 0..count {
            items.push_back(Value::Scalar(current));
            current += step;
        }
    }

    /// Returns the number of elements, or `None` for an unbounded sequence.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        self.bounded.then(|| self.items.len())
    }

    /// Returns `true` if the sequence never ends.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        !self.bounded
    }

    /// Returns `true` if the sequence has no elements.
    ///
    /// Unbounded sequences are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The difference between consecutive generated elements.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Iterates over the materialized prefix.
    pub fn materialized(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Returns the first element.
    pub fn head(&self) -> EvalResult<&Value> {
        self.items
            .front()
            .ok_or(RuntimeError::EmptySequence { operation: "head" })
    }

    /// Returns the sequence without its first element.
    ///
    /// For an unbounded sequence the next element of the progression is
    /// generated and appended, so the materialized prefix keeps its size.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::value::sequence::Sequence;
    ///
    /// let rest = Sequence::unbounded(1.0, 2.0).tail().unwrap();
    /// assert_eq!(rest.to_string(), "[3 5 7 9 11 13 15 17 19 21 ...]");
    /// ```
    pub fn tail(mut self) -> EvalResult<Self> {
        if self.items.is_empty() {
            return Err(RuntimeError::EmptySequence { operation: "tail" });
        }

        let next = if self.bounded { None } else { Some(self.next_generated()?) };

        let items = Rc::make_mut(&mut self.items);
        items.pop_front();
        if let Some(next) = next {
            items.push_back(Value::Scalar(next));
        }

        Ok(self)
    }

    /// Appends the elements of `other`.
    ///
    /// Fails if this sequence is unbounded, because its end is never reached.
    /// The result is unbounded exactly when `other` is, and then continues
    /// with `other`'s step.
    pub fn concat(mut self, other: Self) -> EvalResult<Self> {
        if !self.bounded {
            return Err(RuntimeError::UnboundedConcat);
        }

        Rc::make_mut(&mut self.items).extend(other.items.iter().cloned());

        if !other.bounded {
            self.bounded = false;
            self.step = other.step;
        }

        Ok(self)
    }

    /// The element following the materialized prefix of an unbounded
    /// sequence.
    fn next_generated(&self) -> EvalResult<f64> {
        let last = self.items
                       .back()
                       .ok_or(RuntimeError::EmptySequence { operation: "tail" })?;

        Ok(last.as_scalar()? + self.step)
    }

    /// Returns the element at `index` of the logical content, generating it
    /// if it lies beyond the materialized prefix of an unbounded sequence.
    fn element_at(&self, index: usize) -> Option<Cow<'_, Value>> {
        if let Some(value) = self.items.get(index) {
            return Some(Cow::Borrowed(value));
        }
        if self.bounded {
            return None;
        }

        let last = self.items.back()?.as_scalar().ok()?;
        let ahead = crate::util::num::count_to_f64(index + 1 - self.items.len());

        Some(Cow::Owned(Value::Scalar(last + ahead * self.step)))
    }

    /// Structural equality between two sequences.
    ///
    /// Finite sequences must have the same length and pairwise equal
    /// elements. Two unbounded sequences are equal when their steps agree and
    /// their elements agree up to the longer of the two materialized
    /// prefixes; past that point both are progressions with the same step,
    /// so they agree forever.
    pub(crate) fn equals(&self, other: &Self) -> bool {
        if self.length() != other.length() {
            return false;
        }

        if self.bounded {
            return self.items.iter().zip(other.items.iter()).all(|(a, b)| a == b);
        }

        if (self.step - other.step).abs() >= EQ_TOLERANCE {
            return false;
        }

        let compared = self.items.len().max(other.items.len());
        (0..compared).all(|i| match (self.element_at(i), other.element_at(i)) {
                         (Some(a), Some(b)) => *a == *b,
                         _ => false,
                     })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (index, value) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{value}")?;
        }

        if self.bounded { write!(f, "]") } else { write!(f, " ...]") }
    }
}
