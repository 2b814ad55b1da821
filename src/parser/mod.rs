mod formula_parser;
mod token;


pub use formula_parser::parse;
pub use token::{SyntaxError, SyntaxErrorKind, TokenKind, normalize_formula_text};
pub(crate) use token::{SPELLINGS, spelling_at};
