use crate::catalog::operator::Notation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A lone symbol left after splitting is not a number.
    UnexpectedSymbol {
        /// The offending symbol, rendered as syntax.
        symbol: String,
    },
    /// Every precedence tier was tried without resolving the slice.
    UnmatchedSymbols {
        /// The unresolved slice, rendered as syntax.
        symbols: String,
    },
    /// A catalog operator declares a notation its arity cannot use.
    InvalidNotation {
        /// Name of the operator.
        operator: String,
        /// The declared notation.
        notation: Notation,
    },
    /// A catalog operator declares an arity the evaluator cannot apply.
    InvalidArity {
        /// Name of the operator.
        operator: String,
        /// The declared arity.
        arity:    u8,
    },
    /// Factorial applied to a value whose recursion reaches a negative number.
    NegativeFactorial,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedSymbol { symbol } => write!(f, "Unexpected symbol: {symbol}"),
            Self::UnmatchedSymbols { symbols } => write!(f, "Unmatched symbols: '{symbols}'"),
            Self::InvalidNotation { operator, notation } => write!(f,
                                                                   "Invalid notation: {notation} for operation: {operator}"),
            Self::InvalidArity { operator, arity } => {
                write!(f, "Operation: {operator} has invalid arity: {arity}")
            },
            Self::NegativeFactorial => write!(f, "Negative factorial not allowed"),
        }
    }
}

impl std::error::Error for EvalError {}
