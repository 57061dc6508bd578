/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the language's
/// double-precision scalars and the integers needed for counts, indices and
/// modulo arithmetic. A scalar is only treated as an integer when it lies
/// within a small tolerance of one and is exactly representable.
pub mod num;
