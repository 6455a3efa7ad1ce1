/// Core evaluation logic.
///
/// Contains the tier-climbing evaluator, the split search and error
/// propagation.
pub mod core;

/// Bracket span helpers.
///
/// Finds matching brackets in either scan direction and detects slices wrapped
/// in a single pair.
pub mod grouping;

/// Operator application.
///
/// Maps each operator type to its arithmetic, including factorial.
pub mod operation;
