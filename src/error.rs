/// Tokenization errors.
///
/// Defines the errors raised while turning raw text into symbols: characters
/// no catalog entry recognizes, and positions where several kinds of token
/// match at once.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains all errors that can be raised while reducing a symbol sequence to
/// a number. These include malformed sequences, catalog entries with an
/// unusable arity or notation, and domain errors such as a negative factorial.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
