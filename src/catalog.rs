/// The catalog container and the shared standard instance.
///
/// Bundles the operator and grouping tables that drive both tokenization and
/// evaluation, and tracks the highest declared precedence tier.
pub mod core;
/// Bracket pair definitions.
///
/// Declares grouping types, the `Grouping` record and the default parentheses.
pub mod grouping;
/// Operator definitions.
///
/// Declares operator types, notation, associativity, context-match patterns
/// and the default operator table.
///
/// # Responsibilities
/// - Describes every operator as plain data: syntax, tier, arity, placement.
/// - Decides which preceding symbols allow an operator to be lexed.
/// - Rejects arity/notation combinations the evaluator cannot apply.
pub mod operator;

pub use self::core::{Catalog, STANDARD_CATALOG};
