use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::datastructures::Assignment;
use crate::parser::{SyntaxError, parse};

use super::printer::{Notation, NotationDisplay};

/// The binary connectives of propositional logic.
///
/// The order of the variants follows their binding strength, from the
/// tightest binding conjunction to the loosest binding biconditional.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinaryOperator {
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Implies,
    /// Biconditional
    Iff,
}

impl BinaryOperator {
    /// Returns the precedence of the connective. A higher value binds tighter:
    /// `IFF < IMPLIES < OR < AND`.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Iff => 1,
            Self::Implies => 2,
            Self::Or => 3,
            Self::And => 4,
        }
    }

    /// Returns `true` if chains of this connective group to the right. This
    /// is only the case for implications: `A → B → C` is `A → (B → C)`.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Implies)
    }

    /// Applies the connective to two truth values.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }
}

/// Specifies all types a [`Formula`] can have.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Biconditional
    Equiv,
    /// Implication
    Impl,
    /// Disjunction
    Or,
    /// Conjunction
    And,
    /// Negation
    Not,
    /// Propositional variable
    Atom,
}

/// A propositional formula.
///
/// A formula is an immutable tree which owns all of its sub-formulas. Atoms are
/// identified by their name only, so two atoms with the same name denote the
/// same variable everywhere in a formula.
///
/// Formulas are usually obtained by parsing text, but can also be built with
/// the constructor functions.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::formulas::Formula;
/// let parsed: Formula = "P -> Q & R".parse().unwrap();
/// let built = Formula::implication(
///     Formula::atom("P"),
///     Formula::and(Formula::atom("Q"), Formula::atom("R")),
/// );
///
/// assert_eq!(parsed, built);
/// assert_eq!(built.to_string(), "P → Q ∧ R");
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// A propositional variable
    Atom(String),
    /// Negation of the operand
    Not(Box<Formula>),
    /// A binary connective applied to a left and a right operand
    Binary(BinaryOperator, Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates a new propositional variable.
    pub fn atom<S: Into<String>>(name: S) -> Self {
        Self::Atom(name.into())
    }

    /// Creates the negation of `operand`.
    pub fn negation(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// Creates a new formula joining `left` and `right` with `operator`.
    pub fn binary(operator: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary(operator, Box::new(left), Box::new(right))
    }

    /// Creates the conjunction `left ∧ right`.
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    /// Creates the disjunction `left ∨ right`.
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    /// Creates the implication `left → right`.
    pub fn implication(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Implies, left, right)
    }

    /// Creates the biconditional `left ↔ right`.
    pub fn equivalence(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Iff, left, right)
    }

    /// Returns the type of the formula as a `FormulaType` enum.
    pub const fn formula_type(&self) -> FormulaType {
        match self {
            Self::Atom(_) => FormulaType::Atom,
            Self::Not(_) => FormulaType::Not,
            Self::Binary(BinaryOperator::And, _, _) => FormulaType::And,
            Self::Binary(BinaryOperator::Or, _, _) => FormulaType::Or,
            Self::Binary(BinaryOperator::Implies, _, _) => FormulaType::Impl,
            Self::Binary(BinaryOperator::Iff, _, _) => FormulaType::Equiv,
        }
    }

    /// Returns the binary connective at the root of this formula, if there is one.
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Binary(op, _, _) => Some(*op),
            Self::Atom(_) | Self::Not(_) => None,
        }
    }

    /// Returns `true` if this formula is an atom.
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns `true` if this formula is an atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) => true,
            Self::Not(op) => op.is_atomic(),
            Self::Binary(..) => false,
        }
    }

    /// Returns `true` if this formula is a negation.
    pub const fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }

    /// Returns `true` if this formula is a conjunction.
    pub const fn is_and(&self) -> bool {
        matches!(self, Self::Binary(BinaryOperator::And, _, _))
    }

    /// Returns `true` if this formula is a disjunction.
    pub const fn is_or(&self) -> bool {
        matches!(self, Self::Binary(BinaryOperator::Or, _, _))
    }

    /// Returns the direct operands of this formula. Atoms have no operands,
    /// negations one, and binary connectives two (left before right).
    pub fn operands(&self) -> Vec<&Self> {
        match self {
            Self::Atom(_) => Vec::new(),
            Self::Not(op) => vec![op.as_ref()],
            Self::Binary(_, left, right) => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Evaluates this formula under the given assignment.
    ///
    /// Variables missing from the assignment are treated as `false`, so a
    /// partial assignment never results in an error.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_tutor::datastructures::Assignment;
    /// # use logic_tutor::formulas::Formula;
    /// let formula: Formula = "P -> Q".parse().unwrap();
    ///
    /// let assignment = Assignment::from_pairs([("P", true), ("Q", false)]);
    /// assert!(!formula.evaluate(&assignment));
    ///
    /// let partial = Assignment::from_pairs([("Q", false)]);
    /// assert!(formula.evaluate(&partial));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        match self {
            Self::Atom(name) => assignment.value(name),
            Self::Not(op) => !op.evaluate(assignment),
            Self::Binary(operator, left, right) => operator.apply(left.evaluate(assignment), right.evaluate(assignment)),
        }
    }

    /// Returns a displayable view of this formula in the given notation.
    pub const fn display(&self, notation: Notation) -> NotationDisplay<'_> {
        NotationDisplay::new(self, notation)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.display(Notation::Unicode).fmt(f)
    }
}

impl FromStr for Formula {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
