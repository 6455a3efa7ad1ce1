use crate::{
    catalog::operator::{Operator, OperatorType},
    error::EvalError,
    interpreter::evaluator::core::ExprResult,
};

/// Largest operand whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;

/// Evaluated operands handed to an operator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operands {
    /// The single operand of a prefix or postfix operator.
    Unary(f64),
    /// The left and right operands of an infix operator.
    Binary(f64, f64),
}

impl Operands {
    /// Number of operands carried.
    #[must_use]
    pub const fn count(&self) -> u8 {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(..) => 2,
        }
    }
}

/// Applies `operator` to already evaluated operands.
///
/// Dispatch is keyed by the operator's type tag. Arithmetic follows `f64`
/// semantics, so dividing by zero yields an infinity or NaN rather than an
/// error.
///
/// # Errors
/// - [`EvalError::InvalidArity`] when the operand count does not fit the
///   operator type, e.g. a catalog declaring `add` as unary.
/// - [`EvalError::NegativeFactorial`] from [`factorial`].
///
/// # Example
/// ```
/// use tiercalc::{
///     catalog::Catalog,
///     interpreter::evaluator::operation::{Operands, apply},
/// };
///
/// let catalog = Catalog::standard();
/// let exponentiate = &catalog.operators()[5];
/// assert_eq!(apply(exponentiate, Operands::Binary(2.0, 10.0)), Ok(1024.0));
/// assert!(apply(exponentiate, Operands::Unary(2.0)).is_err());
/// ```
pub fn apply(operator: &Operator, operands: Operands) -> ExprResult<f64> {
    use OperatorType::{Add, Divide, Exponentiate, Factorial, Multiply, Negate, Subtract};

    match (operator.kind, operands) {
        (Add, Operands::Binary(left, right)) => Ok(left + right),
        (Subtract, Operands::Binary(left, right)) => Ok(left - right),
        (Multiply, Operands::Binary(left, right)) => Ok(left * right),
        (Divide, Operands::Binary(left, right)) => Ok(left / right),
        (Exponentiate, Operands::Binary(base, exponent)) => Ok(base.powf(exponent)),
        (Negate, Operands::Unary(value)) => Ok(-value),
        (Factorial, Operands::Unary(value)) => factorial(value),
        (_, operands) => Err(EvalError::InvalidArity { operator: operator.name.to_string(),
                                                       arity:    operands.count(), }),
    }
}

/// Computes `n!` by the recursive definition `0! = 1! = 1`, `n! = n * (n-1)!`.
///
/// Any operand from which that recursion would reach a negative number fails,
/// which covers negative operands and non-integers alike. Operands above
/// [`MAX_FACTORIAL_OPERAND`] overflow to `+inf`; NaN propagates.
///
/// # Errors
/// Returns [`EvalError::NegativeFactorial`] for negative or fractional
/// operands.
///
/// # Example
/// ```
/// use tiercalc::{error::EvalError, interpreter::evaluator::operation::factorial};
///
/// assert_eq!(factorial(5.0), Ok(120.0));
/// assert_eq!(factorial(0.0), Ok(1.0));
/// assert_eq!(factorial(-1.0), Err(EvalError::NegativeFactorial));
/// ```
pub fn factorial(value: f64) -> ExprResult<f64> {
    if value.is_nan() {
        return Ok(f64::NAN);
    }
    if value.is_infinite() && value.is_sign_positive() {
        return Ok(f64::INFINITY);
    }
    if value < 0.0 || value.fract() != 0.0 {
        return Err(EvalError::NegativeFactorial);
    }
    if value > MAX_FACTORIAL_OPERAND {
        return Ok(f64::INFINITY);
    }

    let mut result = 1.0;
    let mut current = value;
    while current > 1.0 {
        result *= current;
        current -= 1.0;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn operator(name: &str) -> Operator {
        Catalog::standard().operators()
                           .iter()
                           .find(|op| op.name == name)
                           .cloned()
                           .unwrap()
    }

    #[test]
    fn arithmetic_follows_f64_semantics() {
        assert_eq!(apply(&operator("add"), Operands::Binary(1.0, 2.0)), Ok(3.0));
        assert_eq!(apply(&operator("subtract"), Operands::Binary(1.0, 2.0)), Ok(-1.0));
        assert_eq!(apply(&operator("multiply"), Operands::Binary(3.0, 4.0)), Ok(12.0));
        assert_eq!(apply(&operator("divide"), Operands::Binary(7.0, 2.0)), Ok(3.5));
        assert_eq!(apply(&operator("divide"), Operands::Binary(1.0, 0.0)), Ok(f64::INFINITY));
        assert_eq!(apply(&operator("negate"), Operands::Unary(4.0)), Ok(-4.0));
    }

    #[test]
    fn mismatched_operands_are_an_arity_error() {
        assert_eq!(apply(&operator("negate"), Operands::Binary(1.0, 2.0)),
                   Err(EvalError::InvalidArity { operator: "negate".to_string(),
                                                 arity:    2, }));
        assert_eq!(apply(&operator("add"), Operands::Unary(1.0)),
                   Err(EvalError::InvalidArity { operator: "add".to_string(),
                                                 arity:    1, }));
    }

    #[test]
    fn factorial_domain() {
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(4.0), Ok(24.0));
        assert_eq!(factorial(2.5), Err(EvalError::NegativeFactorial));
        assert_eq!(factorial(f64::NEG_INFINITY), Err(EvalError::NegativeFactorial));
        assert_eq!(factorial(171.0), Ok(f64::INFINITY));
        assert!(factorial(170.0).unwrap().is_finite());
        assert!(factorial(f64::NAN).unwrap().is_nan());
    }
}
