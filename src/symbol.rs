use crate::catalog::{grouping::Grouping, operator::Operator};

/// Marks which side of a bracket pair a grouping symbol stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// The opening bracket, such as `(`.
    Start,
    /// The closing bracket, such as `)`.
    End,
}

/// One classified unit of input produced by the tokenizer.
///
/// Every sequence produced by [`crate::interpreter::lexer::tokenize`] has the
/// shape `[Start, t1, ..., tn, End]`. Operator and grouping symbols borrow
/// their definition from the catalog that lexed them, so a sequence can never
/// outlive its catalog.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Symbol<'c> {
    /// Sentinel opening every token sequence.
    Start,
    /// Sentinel closing every token sequence.
    End,
    /// A non-negative integer literal.
    Number {
        /// The literal's value.
        value:  f64,
        /// Number of input bytes consumed.
        length: usize,
    },
    /// An operator taken from the catalog.
    Operation {
        /// The catalog entry this symbol was lexed as.
        operator: &'c Operator,
        /// Number of input bytes consumed.
        length:   usize,
    },
    /// One side of a bracket pair taken from the catalog.
    Grouping {
        /// The catalog entry this symbol was lexed as.
        grouping: &'c Grouping,
        /// Whether this symbol opened or closed the pair.
        sentinel: Sentinel,
        /// Number of input bytes consumed.
        length:   usize,
    },
}

impl Symbol<'_> {
    /// Returns the number of input bytes this symbol consumed.
    ///
    /// Sentinels consume nothing.
    ///
    /// # Example
    /// ```
    /// use tiercalc::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::Start.length(), 0);
    /// assert_eq!(Symbol::Number { value: 1.0, length: 3 }.length(), 3);
    /// ```
    #[must_use]
    pub const fn length(&self) -> usize {
        match self {
            Self::Start | Self::End => 0,
            Self::Number { length, .. }
            | Self::Operation { length, .. }
            | Self::Grouping { length, .. } => *length,
        }
    }

    /// Short name of the symbol's variant, used when listing token sequences.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Number { .. } => "number",
            Self::Operation { .. } => "operation",
            Self::Grouping { .. } => "grouping",
        }
    }
}

impl std::fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "<start>"),
            Self::End => write!(f, "<end>"),
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Operation { operator, .. } => write!(f, "{}", operator.syntax),
            Self::Grouping { grouping, sentinel, .. } => {
                write!(f, "{}", grouping.syntax(*sentinel))
            },
        }
    }
}

/// Joins a slice of symbols back into surface syntax for diagnostics.
///
/// # Example
/// ```
/// use tiercalc::{catalog::Catalog, interpreter::lexer::tokenize, symbol::render};
///
/// let catalog = Catalog::standard();
/// let symbols = tokenize("(1+2)!", &catalog).unwrap();
/// assert_eq!(render(&symbols[1..symbols.len() - 1]), "(1+2)!");
/// ```
#[must_use]
pub fn render(symbols: &[Symbol<'_>]) -> String {
    symbols.iter().map(ToString::to_string).collect()
}

/// Removes the leading [`Symbol::Start`] and trailing [`Symbol::End`]
/// sentinels when present.
///
/// Only the slice boundaries are inspected; the returned slice is a view of the
/// input.
#[must_use]
pub fn strip_sentinels<'a, 'c>(symbols: &'a [Symbol<'c>]) -> &'a [Symbol<'c>] {
    let symbols = match symbols {
        [Symbol::Start, rest @ ..] => rest,
        _ => symbols,
    };
    match symbols {
        [rest @ .., Symbol::End] => rest,
        _ => symbols,
    }
}
