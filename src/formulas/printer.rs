use std::fmt::{self, Display, Formatter};

use super::{BinaryOperator, Formula};

/// The spelling used when writing formulas as text.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub enum Notation {
    /// `¬ ∧ ∨ → ↔`
    #[default]
    Unicode,
    /// `~ & | -> <->`
    Ascii,
}

impl Notation {
    /// Returns the spelling of the negation.
    pub const fn negation(self) -> &'static str {
        match self {
            Self::Unicode => "¬",
            Self::Ascii => "~",
        }
    }

    /// Returns the spelling of a binary connective.
    pub const fn operator(self, operator: BinaryOperator) -> &'static str {
        match (self, operator) {
            (Self::Unicode, BinaryOperator::And) => "∧",
            (Self::Unicode, BinaryOperator::Or) => "∨",
            (Self::Unicode, BinaryOperator::Implies) => "→",
            (Self::Unicode, BinaryOperator::Iff) => "↔",
            (Self::Ascii, BinaryOperator::And) => "&",
            (Self::Ascii, BinaryOperator::Or) => "|",
            (Self::Ascii, BinaryOperator::Implies) => "->",
            (Self::Ascii, BinaryOperator::Iff) => "<->",
        }
    }
}

/// A [`Formula`] together with the [`Notation`] it is displayed in.
///
/// Created by [`Formula::display`].
#[derive(Copy, Clone, Debug)]
pub struct NotationDisplay<'a> {
    formula: &'a Formula,
    notation: Notation,
}

impl<'a> NotationDisplay<'a> {
    pub(crate) const fn new(formula: &'a Formula, notation: Notation) -> Self {
        Self { formula, notation }
    }
}

impl Display for NotationDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rec(self.formula, self.notation, f)
    }
}

const ATOMIC_PRECEDENCE: u8 = u8::MAX;

const fn precedence(formula: &Formula) -> u8 {
    match formula {
        Formula::Binary(op, _, _) => op.precedence(),
        Formula::Atom(_) | Formula::Not(_) => ATOMIC_PRECEDENCE,
    }
}

fn write_rec(formula: &Formula, notation: Notation, f: &mut Formatter<'_>) -> fmt::Result {
    match formula {
        Formula::Atom(name) => f.write_str(name),
        Formula::Not(op) => {
            f.write_str(notation.negation())?;
            write_operand(op, notation, precedence(op) < ATOMIC_PRECEDENCE, f)
        }
        Formula::Binary(operator, left, right) => {
            let parent = operator.precedence();
            let left_parens = precedence(left) < parent || (precedence(left) == parent && operator.is_right_associative());
            let right_parens = precedence(right) <= parent;
            write_operand(left, notation, left_parens, f)?;
            write!(f, " {} ", notation.operator(*operator))?;
            write_operand(right, notation, right_parens, f)
        }
    }
}

fn write_operand(formula: &Formula, notation: Notation, parenthesize: bool, f: &mut Formatter<'_>) -> fmt::Result {
    if parenthesize {
        f.write_str("(")?;
        write_rec(formula, notation, f)?;
        f.write_str(")")
    } else {
        write_rec(formula, notation, f)
    }
}

/// Writes a formula with Unicode connectives and the minimal number of
/// parentheses needed to read it back unambiguously.
///
/// A left operand is parenthesised if it binds looser than its parent (or
/// equally loose below a right-associative implication), a right operand if it
/// binds looser or equally loose.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::formulas::formula_to_string;
/// # use logic_tutor::parser::parse;
/// let formula = parse("(a | b) & c -> ~(d <-> e)").unwrap();
/// assert_eq!(formula_to_string(&formula), "(a ∨ b) ∧ c → ¬(d ↔ e)");
/// ```
pub fn formula_to_string(formula: &Formula) -> String {
    write_formula(formula, Notation::Unicode)
}

/// Writes a formula with ASCII connectives. See [`formula_to_string`] for the
/// placement of parentheses.
pub fn formula_to_ascii_string(formula: &Formula) -> String {
    write_formula(formula, Notation::Ascii)
}

/// Writes a formula in the given notation.
pub fn write_formula(formula: &Formula, notation: Notation) -> String {
    formula.display(notation).to_string()
}
