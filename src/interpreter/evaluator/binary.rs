/// Dispatch from an operator to its implementation.
pub mod core;

/// Arithmetic on integers and floats.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;
