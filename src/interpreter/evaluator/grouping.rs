use crate::symbol::{Sentinel, Symbol};

/// Order in which a slice is searched for a split point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Forward,
    /// Right to left.
    Backward,
}

impl Direction {
    /// The bracket side that opens a span when scanning in this direction.
    #[must_use]
    pub const fn opening(self) -> Sentinel {
        match self {
            Self::Forward => Sentinel::Start,
            Self::Backward => Sentinel::End,
        }
    }

    /// Maps the `step`-th visited position to an index into a slice of `len`
    /// symbols.
    #[must_use]
    pub const fn index(self, step: usize, len: usize) -> usize {
        match self {
            Self::Forward => step,
            Self::Backward => len - 1 - step,
        }
    }
}

/// Finds the bracket closing the span opened at `index`, scanning in
/// `direction`.
///
/// Returns `None` when `index` does not open a span in that direction, or when
/// the span is never closed. Only brackets of the same grouping type affect the
/// depth.
///
/// # Example
/// ```
/// use tiercalc::{
///     catalog::Catalog,
///     interpreter::{
///         evaluator::grouping::{Direction, matching_bracket},
///         lexer::tokenize,
///     },
/// };
///
/// let catalog = Catalog::standard();
/// let symbols = tokenize("(1+(2))*3", &catalog).unwrap();
/// let body = &symbols[1..symbols.len() - 1];
///
/// assert_eq!(matching_bracket(body, 0, Direction::Forward), Some(6));
/// assert_eq!(matching_bracket(body, 6, Direction::Backward), Some(0));
/// assert_eq!(matching_bracket(body, 7, Direction::Forward), None);
/// ```
#[must_use]
pub fn matching_bracket(symbols: &[Symbol<'_>], index: usize, direction: Direction) -> Option<usize> {
    let Some(Symbol::Grouping { grouping: opener,
                                sentinel,
                                .. }) = symbols.get(index)
    else {
        return None;
    };
    if *sentinel != direction.opening() {
        return None;
    }

    let mut depth = 0usize;
    let len = symbols.len();
    let start = match direction {
        Direction::Forward => index,
        Direction::Backward => len - 1 - index,
    };

    for step in start + 1..len {
        let position = direction.index(step, len);
        if let Symbol::Grouping { grouping, sentinel, .. } = &symbols[position]
           && grouping.kind == opener.kind
        {
            if *sentinel == direction.opening() {
                depth += 1;
            } else if depth == 0 {
                return Some(position);
            } else {
                depth -= 1;
            }
        }
    }

    None
}

/// Returns the inside of `symbols` when its first and last symbols are the two
/// sides of one bracket pair.
///
/// `(1)+(2)` is not enclosed: its first bracket closes before the end.
#[must_use]
pub fn enclosed<'a, 'c>(symbols: &'a [Symbol<'c>]) -> Option<&'a [Symbol<'c>]> {
    let last = symbols.len().checked_sub(1)?;
    (last > 0 && matching_bracket(symbols, 0, Direction::Forward) == Some(last))
        .then(|| &symbols[1..last])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, interpreter::lexer::tokenize, symbol::strip_sentinels};

    fn with_body<T>(source: &str, check: impl FnOnce(&[Symbol<'_>]) -> T) -> T {
        let catalog = Catalog::standard();
        let symbols = tokenize(source, &catalog).unwrap();
        check(strip_sentinels(&symbols))
    }

    #[test]
    fn enclosed_requires_a_single_spanning_pair() {
        assert_eq!(with_body("(1+1)", |s| enclosed(s).map(<[_]>::len)), Some(3));
        assert_eq!(with_body("((1))", |s| enclosed(s).map(<[_]>::len)), Some(3));
        assert!(!with_body("(1)+(2)", |s| enclosed(s).is_some()));
        assert!(!with_body("((1)", |s| enclosed(s).is_some()));
        assert_eq!(with_body("()", |s| enclosed(s).map(<[_]>::len)), Some(0));
        assert!(!with_body("1", |s| enclosed(s).is_some()));
    }

    #[test]
    fn unbalanced_spans_have_no_match() {
        with_body("(1+2", |s| assert_eq!(matching_bracket(s, 0, Direction::Forward), None));
        with_body("1+2)", |s| assert_eq!(matching_bracket(s, 3, Direction::Backward), None));
    }

    #[test]
    fn closing_bracket_does_not_open_forward_span() {
        with_body("(1)", |s| assert_eq!(matching_bracket(s, 2, Direction::Forward), None));
        with_body("(1)", |s| assert_eq!(matching_bracket(s, 0, Direction::Backward), None));
    }

    #[test]
    fn backward_index_mirrors_forward() {
        assert_eq!(Direction::Backward.index(0, 5), 4);
        assert_eq!(Direction::Backward.index(4, 5), 0);
        assert_eq!(Direction::Forward.index(2, 5), 2);
    }
}
