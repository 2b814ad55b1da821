use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// The type of a token in formula text.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum TokenKind {
    /// A propositional variable, `[A-Za-z][A-Za-z0-9_]*`
    Atom,
    /// `~`, `!` or `¬`
    Not,
    /// `&`, `^` or `∧`
    And,
    /// `|` or `∨`
    Or,
    /// `->`, `=>` or `→`
    Implies,
    /// `<->`, `<=>` or `↔`
    Iff,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// The end of the text
    EndOfInput,
    /// A character which does not start any token
    Unknown(char),
}

/// All spellings of connectives and parentheses with their token type and
/// canonical spelling. Longer spellings come first, so the first match of a
/// prefix is the maximal one.
pub(crate) const SPELLINGS: [(&str, TokenKind, &str); 16] = [
    ("<->", TokenKind::Iff, "↔"),
    ("<=>", TokenKind::Iff, "↔"),
    ("->", TokenKind::Implies, "→"),
    ("=>", TokenKind::Implies, "→"),
    ("↔", TokenKind::Iff, "↔"),
    ("→", TokenKind::Implies, "→"),
    ("~", TokenKind::Not, "¬"),
    ("!", TokenKind::Not, "¬"),
    ("¬", TokenKind::Not, "¬"),
    ("&", TokenKind::And, "∧"),
    ("^", TokenKind::And, "∧"),
    ("∧", TokenKind::And, "∧"),
    ("|", TokenKind::Or, "∨"),
    ("∨", TokenKind::Or, "∨"),
    ("(", TokenKind::LeftParen, "("),
    (")", TokenKind::RightParen, ")"),
];

pub(crate) fn spelling_at(text: &str) -> Option<(&'static str, TokenKind, &'static str)> {
    SPELLINGS.iter().copied().find(|(spelling, _, _)| text.starts_with(spelling))
}

impl TokenKind {
    /// Classifies the token starting at the byte `offset` of `input`, after
    /// skipping whitespace. Returns the token type and its start offset.
    pub(crate) fn scan(input: &str, offset: usize) -> (Self, usize) {
        let rest = input.get(offset..).unwrap_or_default();
        let trimmed = rest.trim_start();
        let start = offset + (rest.len() - trimmed.len());
        let kind = match trimmed.chars().next() {
            None => Self::EndOfInput,
            Some(c) if c.is_ascii_alphabetic() => Self::Atom,
            Some(c) => spelling_at(trimmed).map_or(Self::Unknown(c), |(_, kind, _)| kind),
        };
        (kind, start)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom => f.write_str("atom"),
            Self::Not => f.write_str("negation"),
            Self::And => f.write_str("conjunction"),
            Self::Or => f.write_str("disjunction"),
            Self::Implies => f.write_str("implication"),
            Self::Iff => f.write_str("biconditional"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::EndOfInput => f.write_str("end of input"),
            Self::Unknown(c) => write!(f, "unknown character '{c}'"),
        }
    }
}

/// The reason a formula text could not be parsed.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum SyntaxErrorKind {
    /// A character that is not part of the formula syntax.
    UnknownCharacter,
    /// A token that cannot appear at this point of the formula.
    UnexpectedToken,
    /// The text ended before the formula was complete.
    UnexpectedEnd,
    /// An opening parenthesis was never closed.
    UnclosedParenthesis,
    /// A complete formula was followed by more tokens.
    TrailingInput,
}

/// Error returned for malformed formula text.
///
/// `position` is the zero-based offset in characters of the offending token
/// and `token` its type. At the end of the text the token is
/// [`TokenKind::EndOfInput`] and the position equals the number of characters.
#[derive(Clone, Hash, Eq, PartialEq, Debug, Error)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// The type of the offending token.
    pub token: TokenKind,
    /// Character offset of the offending token.
    pub position: usize,
    /// A human-readable description.
    pub message: String,
}

/// Rewrites formula text into a canonical spelling: whitespace is removed and
/// every connective is replaced by its Unicode symbol. Unknown characters are
/// kept as they are. Whitespace separating two atoms is kept as a single
/// space, so `P Q` does not turn into the atom `PQ`.
///
/// Two texts with the same normalization parse to the same formula.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::parser::normalize_formula_text;
/// assert_eq!(normalize_formula_text("~P -> (Q & R)"), "¬P→(Q∧R)");
/// assert_eq!(normalize_formula_text("!P=>(Q^R)"), "¬P→(Q∧R)");
/// assert_eq!(normalize_formula_text(" P   Q "), "P Q");
/// ```
pub fn normalize_formula_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    let mut skipped_whitespace = false;
    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            skipped_whitespace = true;
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if skipped_whitespace && is_atom_char(c) && result.chars().next_back().is_some_and(is_atom_char) {
            result.push(' ');
        }
        skipped_whitespace = false;
        if let Some((spelling, _, canonical)) = spelling_at(rest) {
            result.push_str(canonical);
            rest = &rest[spelling.len()..];
        } else {
            result.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    result
}

const fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
