use tracing::{debug, trace};

use crate::{
    catalog::{
        Catalog,
        operator::{Notation, Operator},
    },
    error::EvalError,
    interpreter::evaluator::{
        grouping::{Direction, enclosed, matching_bracket},
        operation::{Operands, apply},
    },
    symbol::{Symbol, render, strip_sentinels},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type ExprResult<T> = Result<T, EvalError>;

/// Evaluates a symbol sequence produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// Evaluation starts at precedence tier 0 on the whole sequence. The sequence
/// is only read; evaluating it twice gives the same value.
///
/// # Errors
/// - [`EvalError::UnexpectedSymbol`] when a lone non-number symbol remains.
/// - [`EvalError::UnmatchedSymbols`] when no operator resolves a slice, e.g.
///   unbalanced brackets or a missing operand.
/// - [`EvalError::InvalidNotation`] / [`EvalError::InvalidArity`] for a
///   misconfigured catalog.
/// - [`EvalError::NegativeFactorial`] for factorial outside its domain.
///
/// # Stack use
/// Evaluation recurses into every bracket level and split remainder, so stack
/// depth grows linearly with nesting and chain length. No limit is enforced;
/// callers handling untrusted input must bound its nesting depth themselves.
///
/// # Example
/// ```
/// use tiercalc::{catalog::Catalog, interpreter::evaluator::core::evaluate, tokenize};
///
/// let catalog = Catalog::standard();
/// let symbols = tokenize("2*4+3*8^7-4/2", &catalog).unwrap();
/// assert_eq!(evaluate(&symbols, &catalog), Ok(6_291_462.0));
/// ```
pub fn evaluate(symbols: &[Symbol<'_>], catalog: &Catalog) -> ExprResult<f64> {
    debug!(symbols = symbols.len(), "evaluating");
    let value = Evaluator::new(catalog).evaluate_at(symbols, 0)?;
    debug!(value, "evaluated");
    Ok(value)
}

/// Reduces symbol slices to numbers by precedence-tier splitting.
///
/// A slice is searched for an operator of the current tier; the first
/// occurrence found becomes the outermost operation, and its operands are
/// evaluated recursively at the same tier. When no operator of the tier
/// occurs, the next tighter tier is tried on the same slice.
///
/// ## Usage
///
/// The evaluator only borrows its catalog and keeps no other state, so one
/// instance can evaluate any number of sequences.
#[derive(Debug, Copy, Clone)]
pub struct Evaluator<'c> {
    catalog: &'c Catalog,
}

impl<'c> Evaluator<'c> {
    /// Creates an evaluator over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Evaluates `symbols`, trying tiers from `tier` upward.
    ///
    /// Sequence sentinels at the slice boundaries are ignored. A slice wrapped
    /// in one bracket pair is unwrapped and restarts at tier 0, so grouping
    /// resets precedence the way it does in ordinary notation.
    pub fn evaluate_at(&self, symbols: &[Symbol<'_>], tier: usize) -> ExprResult<f64> {
        let symbols = strip_sentinels(symbols);

        if let Some(inner) = enclosed(symbols) {
            trace!(slice = %render(symbols), "unwrapping group");
            return self.evaluate_at(inner, 0);
        }

        if let [symbol] = symbols {
            return match symbol {
                Symbol::Number { value, .. } => Ok(*value),
                other => Err(EvalError::UnexpectedSymbol { symbol: other.to_string() }),
            };
        }

        for tier in tier..=self.catalog.highest_precedence() {
            for operator in self.catalog.operators_at(tier) {
                if let Some(value) = self.split(symbols, operator, tier)? {
                    return Ok(value);
                }
            }
        }

        debug!(slice = %render(symbols), "no operator resolves slice");
        Err(EvalError::UnmatchedSymbols { symbols: render(symbols) })
    }

    /// Searches `symbols` for `operator` and evaluates around the first usable
    /// occurrence.
    ///
    /// Binary left-associative operators are searched right to left, all
    /// others left to right. Bracketed spans are skipped whole.
    fn split(&self,
             symbols: &[Symbol<'_>],
             operator: &Operator,
             tier: usize)
             -> ExprResult<Option<f64>> {
        let direction = if operator.is_left_associative_binary() {
            Direction::Backward
        } else {
            Direction::Forward
        };

        let len = symbols.len();
        let mut step = 0;
        while step < len {
            let index = direction.index(step, len);

            if let Some(close) = matching_bracket(symbols, index, direction) {
                step += close.abs_diff(index) + 1;
                continue;
            }

            if let Symbol::Operation { operator: found, .. } = symbols[index]
               && found.kind == operator.kind
            {
                let (left, right) = (&symbols[..index], &symbols[index + 1..]);
                if let Some(value) = self.apply_at(operator, left, right, tier)? {
                    return Ok(Some(value));
                }
            }

            step += 1;
        }

        Ok(None)
    }

    /// Evaluates the operands on either side of a split point and applies
    /// `operator` to them.
    ///
    /// Returns `Ok(None)` when a unary operator has symbols on the side where
    /// it takes no operand, so the caller keeps scanning.
    fn apply_at(&self,
                operator: &Operator,
                left: &[Symbol<'_>],
                right: &[Symbol<'_>],
                tier: usize)
                -> ExprResult<Option<f64>> {
        operator.check_shape()?;

        let operands = match operator.notation {
            Notation::Postfix => {
                if !right.is_empty() {
                    return Ok(None);
                }
                Operands::Unary(self.evaluate_at(left, tier)?)
            },
            Notation::Prefix => {
                if !left.is_empty() {
                    return Ok(None);
                }
                Operands::Unary(self.evaluate_at(right, tier)?)
            },
            Notation::Infix => {
                Operands::Binary(self.evaluate_at(left, tier)?, self.evaluate_at(right, tier)?)
            },
        };

        trace!(tier,
               operator = operator.name,
               left = %render(left),
               right = %render(right),
               "split");
        apply(operator, operands).map(Some)
    }
}
