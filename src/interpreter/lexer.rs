use logos::Logos;
use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    error::LexError,
    symbol::{Sentinel, Symbol},
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Literal tokens recognized independently of the catalog.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Literal {
    /// Decimal digit runs, such as `42` or `007`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
}

/// Parses a digit run from the current token slice.
///
/// Leading zeros are accepted and ignored; runs too long for an exact `f64`
/// round to the nearest representable value.
fn parse_number(lex: &logos::Lexer<Literal>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Removes every whitespace character from `source`.
///
/// The tokenizer treats whitespace as unexpected syntax, so free-form input
/// should pass through here first.
///
/// # Example
/// ```
/// use tiercalc::interpreter::lexer::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 2 *\t(1 + 1)\n"), "2*(1+1)");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Turns `source` into a classified symbol sequence.
///
/// The result always starts with [`Symbol::Start`] and ends with
/// [`Symbol::End`]. At each position an operator, a number and a grouping
/// match are attempted independently; exactly one kind must succeed.
///
/// Operators are tried in catalog order and must be permitted by the symbol
/// lexed just before them, which is how `-` becomes subtraction after a number
/// and negation anywhere else.
///
/// # Errors
/// - [`LexError::UnexpectedSyntax`] when nothing matches, including unstripped
///   whitespace.
/// - [`LexError::AmbiguousSyntax`] when two kinds of token match at the same
///   position.
///
/// # Example
/// ```
/// use tiercalc::{
///     catalog::{Catalog, operator::OperatorType},
///     interpreter::lexer::tokenize,
///     symbol::Symbol,
/// };
///
/// let catalog = Catalog::standard();
/// let symbols = tokenize("7--9", &catalog).unwrap();
/// let kinds: Vec<_> = symbols.iter()
///                            .filter_map(|s| match s {
///                                Symbol::Operation { operator, .. } => Some(operator.kind),
///                                _ => None,
///                            })
///                            .collect();
/// assert_eq!(kinds, [OperatorType::Subtract, OperatorType::Negate]);
/// ```
pub fn tokenize<'c>(source: &str, catalog: &'c Catalog) -> LexResult<Vec<Symbol<'c>>> {
    debug!(bytes = source.len(), "tokenizing");

    let mut symbols = vec![Symbol::Start];
    let mut position = 0;

    while position < source.len() {
        let remaining = &source[position..];
        let previous = symbols.last().copied().unwrap_or(Symbol::Start);

        let mut matches = [lex_operation(remaining, &previous, catalog),
                           lex_number(remaining),
                           lex_grouping(remaining, catalog)].into_iter()
                                                             .flatten();

        let symbol = match (matches.next(), matches.next()) {
            (Some(symbol), None) => symbol,
            (None, _) => {
                debug!(position, "no token matches");
                return Err(LexError::UnexpectedSyntax { remaining: remaining.to_string(),
                                                        position });
            },
            (Some(_), Some(_)) => {
                debug!(position, "several token kinds match");
                return Err(LexError::AmbiguousSyntax { remaining: remaining.to_string(),
                                                       position });
            },
        };

        trace!(position, kind = symbol.kind_name(), %symbol, "lexed symbol");
        position += symbol.length();
        symbols.push(symbol);
    }

    symbols.push(Symbol::End);
    debug!(symbols = symbols.len(), "tokenized");
    Ok(symbols)
}

/// Finds the first catalog operator spelled at the start of `remaining` that
/// may follow `previous`.
fn lex_operation<'c>(remaining: &str,
                     previous: &Symbol<'_>,
                     catalog: &'c Catalog)
                     -> Option<Symbol<'c>> {
    catalog.operators()
           .iter()
           .find(|op| {
               !op.syntax.is_empty() && remaining.starts_with(op.syntax) && op.permits(previous)
           })
           .map(|operator| Symbol::Operation { operator,
                                               length: operator.syntax.len() })
}

/// Matches a decimal digit run at the start of `remaining`.
fn lex_number<'c>(remaining: &str) -> Option<Symbol<'c>> {
    let mut lexer = Literal::lexer(remaining);
    match lexer.next() {
        Some(Ok(Literal::Number(value))) if lexer.span().start == 0 => {
            Some(Symbol::Number { value,
                                  length: lexer.span().len() })
        },
        _ => None,
    }
}

/// Matches the first catalog bracket, opening side before closing side,
/// spelled at the start of `remaining`.
fn lex_grouping<'c>(remaining: &str, catalog: &'c Catalog) -> Option<Symbol<'c>> {
    catalog.groupings().iter().find_map(|grouping| {
                                  [Sentinel::Start, Sentinel::End].into_iter().find_map(|sentinel| {
                                      let syntax = grouping.syntax(sentinel);
                                      (!syntax.is_empty() && remaining.starts_with(syntax))
                                          .then_some(Symbol::Grouping { grouping,
                                                                        sentinel,
                                                                        length: syntax.len() })
                                  })
                              })
}
