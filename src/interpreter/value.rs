/// Sequence representation.
///
/// Defines the `Sequence` type used by `Value::Sequence`: an ordered,
/// partially materialized collection of values with an arithmetic step that
/// may be unbounded. Unbounded sequences generate further elements on demand
/// when their tail is taken.
pub mod sequence;

pub mod core;
