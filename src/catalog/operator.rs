use crate::{
    catalog::grouping::GroupingType,
    error::EvalError,
    interpreter::evaluator::core::ExprResult,
    symbol::{Sentinel, Symbol},
};

/// Identifies an operator's behaviour.
///
/// The set is closed: the evaluation function for each tag is fixed, and a
/// catalog can only change how an operator is spelled, ranked and placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorType {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `-a`
    Negate,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a ^ b`
    Exponentiate,
    /// `a!`
    Factorial,
}

/// Where an operator's syntax sits relative to its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Before its single operand.
    Prefix,
    /// Between its two operands.
    Infix,
    /// After its single operand.
    Postfix,
}

/// Which side absorbs repeated same-tier applications of a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
    /// Not applicable (unary operators).
    None,
}

/// A rule describing which symbol may immediately precede an operator.
///
/// `None` payloads act as wildcards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContextPattern {
    /// The start-of-sequence sentinel.
    Start,
    /// Any number literal.
    Number,
    /// An operator, optionally of one type only.
    Operation(Option<OperatorType>),
    /// A bracket, optionally restricted by type and side.
    Grouping {
        /// Required grouping type.
        kind:     Option<GroupingType>,
        /// Required side of the pair.
        sentinel: Option<Sentinel>,
    },
}

impl ContextPattern {
    /// Tests whether `previous` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, previous: &Symbol<'_>) -> bool {
        match (self, previous) {
            (Self::Start, Symbol::Start) | (Self::Number, Symbol::Number { .. }) => true,
            (Self::Operation(kind), Symbol::Operation { operator, .. }) => {
                kind.is_none_or(|kind| kind == operator.kind)
            },
            (Self::Grouping { kind, sentinel },
             Symbol::Grouping { grouping,
                                sentinel: found,
                                .. }) => {
                kind.is_none_or(|kind| kind == grouping.kind)
                && sentinel.is_none_or(|sentinel| sentinel == *found)
            },
            _ => false,
        }
    }
}

/// An immutable operator definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// Behaviour tag, also the key of the evaluation dispatch.
    pub kind:          OperatorType,
    /// Human readable name used in diagnostics.
    pub name:          &'static str,
    /// Literal surface syntax.
    pub syntax:        &'static str,
    /// Precedence tier; higher binds tighter.
    pub precedence:    usize,
    /// Number of operands, 1 or 2.
    pub arity:         u8,
    /// Placement of the syntax relative to the operands.
    pub notation:      Notation,
    /// Grouping of repeated binary applications.
    pub associativity: Associativity,
    /// Symbols allowed to immediately precede this operator. `None` means the
    /// operator is legal after anything.
    pub context:       Option<&'static [ContextPattern]>,
}

impl Operator {
    /// Tests whether this operator may be lexed right after `previous`.
    #[must_use]
    pub fn permits(&self, previous: &Symbol<'_>) -> bool {
        self.context
            .is_none_or(|patterns| patterns.iter().any(|pattern| pattern.matches(previous)))
    }

    /// Binary left-associative operators are searched right to left so that
    /// the rightmost occurrence becomes the outermost split.
    #[must_use]
    pub fn is_left_associative_binary(&self) -> bool {
        self.arity == 2 && self.associativity == Associativity::Left
    }

    /// Checks that the arity and notation form a combination the evaluator
    /// knows how to apply.
    ///
    /// # Example
    /// ```
    /// use tiercalc::{catalog::Catalog, error::EvalError};
    ///
    /// let catalog = Catalog::standard();
    /// assert!(catalog.operators().iter().all(|op| op.check_shape().is_ok()));
    ///
    /// let mut broken = catalog.operators()[0].clone();
    /// broken.arity = 1;
    /// assert!(matches!(broken.check_shape(), Err(EvalError::InvalidNotation { .. })));
    /// ```
    pub fn check_shape(&self) -> ExprResult<()> {
        match (self.arity, self.notation) {
            (1, Notation::Prefix | Notation::Postfix) | (2, Notation::Infix) => Ok(()),
            (1 | 2, notation) => Err(EvalError::InvalidNotation { operator: self.name.to_string(),
                                                                  notation }),
            (arity, _) => Err(EvalError::InvalidArity { operator: self.name.to_string(),
                                                        arity }),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let notation = match self {
            Self::Prefix => "prefix",
            Self::Infix => "infix",
            Self::Postfix => "postfix",
        };
        write!(f, "{notation}")
    }
}

/// Symbols after which `-` means subtraction rather than negation.
const SUBTRACT_CONTEXT: &[ContextPattern] =
    &[ContextPattern::Number,
      ContextPattern::Grouping { kind:     None,
                                 sentinel: Some(Sentinel::End), },
      ContextPattern::Operation(Some(OperatorType::Factorial))];

/// Defines the standard operator table.
///
/// Each entry provides the display name followed by the definition fields; the
/// `context` field is optional. Declaration order matters: the tokenizer and
/// the evaluator both take the first matching entry.
macro_rules! standard_operators {
    (@context) => {
        None
    };
    (@context $context:expr) => {
        Some($context)
    };
    (
        $(
            $name:literal => {
                kind: $kind:ident,
                syntax: $syntax:literal,
                precedence: $precedence:literal,
                arity: $arity:literal,
                notation: $notation:ident,
                associativity: $associativity:ident
                $(, context: $context:expr)? $(,)?
            }
        ),* $(,)?
    ) => {
        /// The default operators, in declaration order.
        pub static STANDARD_OPERATORS: &[Operator] = &[
            $(
                Operator {
                    kind:          OperatorType::$kind,
                    name:          $name,
                    syntax:        $syntax,
                    precedence:    $precedence,
                    arity:         $arity,
                    notation:      Notation::$notation,
                    associativity: Associativity::$associativity,
                    context:       standard_operators!(@context $($context)?),
                },
            )*
        ];
    };
}

standard_operators! {
    "add"          => { kind: Add,          syntax: "+", precedence: 0, arity: 2, notation: Infix,   associativity: Left },
    "subtract"     => { kind: Subtract,     syntax: "-", precedence: 0, arity: 2, notation: Infix,   associativity: Left, context: SUBTRACT_CONTEXT },
    "negate"       => { kind: Negate,       syntax: "-", precedence: 0, arity: 1, notation: Prefix,  associativity: None },
    "multiply"     => { kind: Multiply,     syntax: "*", precedence: 1, arity: 2, notation: Infix,   associativity: Left },
    "divide"       => { kind: Divide,       syntax: "/", precedence: 1, arity: 2, notation: Infix,   associativity: Left },
    "exponentiate" => { kind: Exponentiate, syntax: "^", precedence: 2, arity: 2, notation: Infix,   associativity: Right },
    "factorial"    => { kind: Factorial,    syntax: "!", precedence: 3, arity: 1, notation: Postfix, associativity: None },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::grouping::STANDARD_GROUPINGS;

    const LEADING: &[ContextPattern] =
        &[ContextPattern::Start,
          ContextPattern::Grouping { kind:     Some(GroupingType::Parenthesis),
                                     sentinel: Some(Sentinel::Start), }];

    const AFTER_OPERATOR: &[ContextPattern] = &[ContextPattern::Operation(None)];

    fn operator(kind: OperatorType) -> &'static Operator {
        STANDARD_OPERATORS.iter().find(|op| op.kind == kind).unwrap()
    }

    fn restricted(kind: OperatorType, context: &'static [ContextPattern]) -> Operator {
        Operator { context: Some(context),
                   ..operator(kind).clone() }
    }

    #[test]
    fn subtract_context_accepts_operands_and_closers() {
        let subtract = operator(OperatorType::Subtract);
        let paren = &STANDARD_GROUPINGS[0];

        assert!(subtract.permits(&Symbol::Number { value: 1.0, length: 1 }));
        assert!(subtract.permits(&Symbol::Grouping { grouping: paren,
                                                      sentinel: Sentinel::End,
                                                      length:   1, }));
        assert!(subtract.permits(&Symbol::Operation { operator: operator(OperatorType::Factorial),
                                                       length:   1, }));
    }

    #[test]
    fn subtract_context_rejects_operator_positions() {
        let subtract = operator(OperatorType::Subtract);
        let paren = &STANDARD_GROUPINGS[0];

        assert!(!subtract.permits(&Symbol::Start));
        assert!(!subtract.permits(&Symbol::Grouping { grouping: paren,
                                                       sentinel: Sentinel::Start,
                                                       length:   1, }));
        assert!(!subtract.permits(&Symbol::Operation { operator: operator(OperatorType::Add),
                                                        length:   1, }));
    }

    #[test]
    fn missing_context_permits_everything() {
        let negate = operator(OperatorType::Negate);
        assert!(negate.permits(&Symbol::Start));
        assert!(negate.permits(&Symbol::Number { value: 3.0, length: 1 }));
    }

    #[test]
    fn shape_errors_name_the_operator() {
        let mut op = operator(OperatorType::Add).clone();
        op.arity = 3;
        assert_eq!(op.check_shape(),
                   Err(EvalError::InvalidArity { operator: "add".to_string(),
                                                 arity:    3, }));

        op.arity = 2;
        op.notation = Notation::Postfix;
        assert_eq!(op.check_shape(),
                   Err(EvalError::InvalidNotation { operator: "add".to_string(),
                                                    notation: Notation::Postfix, }));
    }

    #[test]
    fn leading_context_accepts_start_and_opening_bracket_only() {
        let plus = restricted(OperatorType::Add, LEADING);
        let paren = &STANDARD_GROUPINGS[0];

        assert!(plus.permits(&Symbol::Start));
        assert!(plus.permits(&Symbol::Grouping { grouping: paren,
                                                  sentinel: Sentinel::Start,
                                                  length:   1, }));
        assert!(!plus.permits(&Symbol::Grouping { grouping: paren,
                                                   sentinel: Sentinel::End,
                                                   length:   1, }));
        assert!(!plus.permits(&Symbol::Number { value: 1.0, length: 1 }));
        assert!(!plus.permits(&Symbol::End));
        assert!(!plus.permits(&Symbol::Operation { operator: operator(OperatorType::Multiply),
                                                    length:   1, }));
    }

    #[test]
    fn operation_wildcard_accepts_any_operator() {
        let negate = restricted(OperatorType::Negate, AFTER_OPERATOR);

        for previous in STANDARD_OPERATORS {
            assert!(negate.permits(&Symbol::Operation { operator: previous,
                                                         length:   1, }),
                    "{}",
                    previous.name);
        }
        assert!(!negate.permits(&Symbol::Start));
        assert!(!negate.permits(&Symbol::Number { value: 2.0, length: 1 }));
        assert!(!negate.permits(&Symbol::Grouping { grouping: &STANDARD_GROUPINGS[0],
                                                     sentinel: Sentinel::Start,
                                                     length:   1, }));
    }
}
