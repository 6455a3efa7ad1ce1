use crate::symbol::Sentinel;

/// Identifies a bracket pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GroupingType {
    /// `(` and `)`.
    Parenthesis,
}

/// An immutable bracket pair definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    /// Type tag; brackets only pair up with brackets of the same type.
    pub kind:         GroupingType,
    /// Human readable name used in diagnostics.
    pub name:         &'static str,
    /// Syntax opening the pair.
    pub start_syntax: &'static str,
    /// Syntax closing the pair.
    pub end_syntax:   &'static str,
}

impl Grouping {
    /// Returns the syntax for one side of the pair.
    #[must_use]
    pub const fn syntax(&self, sentinel: Sentinel) -> &'static str {
        match sentinel {
            Sentinel::Start => self.start_syntax,
            Sentinel::End => self.end_syntax,
        }
    }
}

/// The default bracket pairs, in declaration order.
pub static STANDARD_GROUPINGS: &[Grouping] = &[Grouping { kind:         GroupingType::Parenthesis,
                                                          name:         "parenthesis",
                                                          start_syntax: "(",
                                                          end_syntax:   ")", }];
