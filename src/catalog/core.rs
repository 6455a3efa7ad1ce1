use std::sync::LazyLock;

use crate::{
    catalog::{
        grouping::{Grouping, STANDARD_GROUPINGS},
        operator::{Operator, STANDARD_OPERATORS},
    },
    interpreter::evaluator::core::ExprResult,
};

/// The standard catalog, built on first use and shared for the rest of the
/// process.
pub static STANDARD_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// The operator and grouping definitions consulted by the tokenizer and the
/// evaluator.
///
/// A catalog is read-only once built. Symbols lexed against it borrow its
/// entries, so it must outlive every token sequence it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    operators:          Vec<Operator>,
    groupings:          Vec<Grouping>,
    highest_precedence: usize,
}

impl Catalog {
    /// Builds a catalog from explicit definitions.
    ///
    /// Declaration order is significant: when syntaxes or contexts overlap,
    /// earlier entries win.
    #[must_use]
    pub fn new(operators: Vec<Operator>, groupings: Vec<Grouping>) -> Self {
        let highest_precedence = operators.iter().map(|op| op.precedence).max().unwrap_or(0);
        Self { operators,
               groupings,
               highest_precedence }
    }

    /// Builds the default catalog: `+ - * / ^ !`, prefix `-`, and parentheses.
    ///
    /// # Example
    /// ```
    /// use tiercalc::catalog::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.operators().len(), 7);
    /// assert_eq!(catalog.highest_precedence(), 3);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_OPERATORS.to_vec(), STANDARD_GROUPINGS.to_vec())
    }

    /// Operators in declaration order.
    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Bracket pairs in declaration order.
    #[must_use]
    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }

    /// The tightest declared precedence tier, or 0 for an empty catalog.
    #[must_use]
    pub const fn highest_precedence(&self) -> usize {
        self.highest_precedence
    }

    /// Operators of one tier, in declaration order.
    pub fn operators_at(&self, tier: usize) -> impl Iterator<Item = &Operator> {
        self.operators.iter().filter(move |op| op.precedence == tier)
    }

    /// Reports the first operator whose arity and notation the evaluator
    /// cannot apply.
    ///
    /// The evaluator performs the same check lazily when it splits on an
    /// operator; this catches a broken catalog before any input is seen.
    pub fn validate(&self) -> ExprResult<()> {
        self.operators.iter().try_for_each(Operator::check_shape)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
