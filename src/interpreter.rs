/// The evaluator module reduces symbol sequences to numbers.
///
/// The evaluator splits a symbol slice around the operator that binds
/// loosest, evaluates the pieces recursively and combines them. Precedence,
/// associativity and notation all come from the catalog.
///
/// # Responsibilities
/// - Splits slices by precedence tier, honouring associativity.
/// - Treats bracketed spans as opaque and unwraps fully bracketed slices.
/// - Reports malformed sequences, catalog defects and domain errors.
pub mod evaluator;
/// The lexer module tokenizes source text into symbols.
///
/// The lexer reads raw text and produces a sequence of symbols: numbers,
/// operators and brackets framed by start and end sentinels. Operator lexing
/// is context sensitive, so the same syntax can stand for different operators
/// depending on the symbol before it.
///
/// # Responsibilities
/// - Converts the input into catalog-classified symbols.
/// - Resolves overloaded syntax such as `-` through context patterns.
/// - Reports unrecognized and ambiguous input with its byte offset.
pub mod lexer;
