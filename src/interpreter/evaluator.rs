/// Core evaluation logic.
///
/// Contains the evaluator type, its result alias, and the dispatch over
/// syntax tree variants.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix identity and negation operators.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked addition, subtraction, multiplication and truncating
/// division.
pub mod binary;
