use serde::Serialize;

use crate::formulas::{BinaryOperator, Formula};

/// The number of occurrences of each connective in a formula.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Serialize)]
pub struct ConnectiveProfile {
    /// Number of negations
    pub negations: usize,
    /// Number of conjunctions
    pub conjunctions: usize,
    /// Number of disjunctions
    pub disjunctions: usize,
    /// Number of implications
    pub implications: usize,
    /// Number of biconditionals
    pub equivalences: usize,
}

impl ConnectiveProfile {
    /// Returns the number of all connectives.
    pub const fn total(&self) -> usize {
        self.negations + self.conjunctions + self.disjunctions + self.implications + self.equivalences
    }

    /// Returns the number of occurrences of the given binary connective.
    pub const fn binary(&self, operator: BinaryOperator) -> usize {
        match operator {
            BinaryOperator::And => self.conjunctions,
            BinaryOperator::Or => self.disjunctions,
            BinaryOperator::Implies => self.implications,
            BinaryOperator::Iff => self.equivalences,
        }
    }
}

/// Counts the occurrences of every connective in `formula`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::functions::connective_profile;
/// # use logic_tutor::parser::parse;
/// let profile = connective_profile(&parse("~(a & b) -> ~a | ~b").unwrap());
///
/// assert_eq!(profile.negations, 3);
/// assert_eq!(profile.conjunctions, 1);
/// assert_eq!(profile.disjunctions, 1);
/// assert_eq!(profile.implications, 1);
/// assert_eq!(profile.total(), 6);
/// ```
pub fn connective_profile(formula: &Formula) -> ConnectiveProfile {
    let mut profile = ConnectiveProfile::default();
    count_rec(formula, &mut profile);
    profile
}

fn count_rec(formula: &Formula, profile: &mut ConnectiveProfile) {
    match formula {
        Formula::Atom(_) => {}
        Formula::Not(op) => {
            profile.negations += 1;
            count_rec(op, profile);
        }
        Formula::Binary(operator, left, right) => {
            match operator {
                BinaryOperator::And => profile.conjunctions += 1,
                BinaryOperator::Or => profile.disjunctions += 1,
                BinaryOperator::Implies => profile.implications += 1,
                BinaryOperator::Iff => profile.equivalences += 1,
            }
            count_rec(left, profile);
            count_rec(right, profile);
        }
    }
}

/// Returns the total number of connectives (negations and binary
/// connectives) in `formula`.
pub fn count_connectives(formula: &Formula) -> usize {
    connective_profile(formula).total()
}
