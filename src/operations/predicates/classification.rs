use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::datastructures::{Assignment, TruthTable};
use crate::formulas::Formula;
use crate::operations::functions::generate_truth_table;

/// The semantic class of a formula.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// True under some assignments and false under others.
    Contingent,
}

impl Classification {
    /// Classifies a formula by its truth table.
    pub fn of_table(table: &TruthTable) -> Self {
        if table.all_true() {
            Self::Tautology
        } else if table.all_false() {
            Self::Contradiction
        } else {
            Self::Contingent
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tautology => f.write_str("tautology"),
            Self::Contradiction => f.write_str("contradiction"),
            Self::Contingent => f.write_str("contingent"),
        }
    }
}

/// Classifies `formula` as [`Classification::Tautology`],
/// [`Classification::Contradiction`], or [`Classification::Contingent`].
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::{Classification, classify_formula};
/// # use logic_tutor::parser::parse;
/// assert_eq!(classify_formula(&parse("P | ~P").unwrap()), Classification::Tautology);
/// assert_eq!(classify_formula(&parse("P & ~P").unwrap()), Classification::Contradiction);
/// assert_eq!(classify_formula(&parse("P -> Q").unwrap()), Classification::Contingent);
/// ```
pub fn classify_formula(formula: &Formula) -> Classification {
    Classification::of_table(&generate_truth_table(formula))
}

/// A predicate indicating whether a given formula is a tautology, that is,
/// always holds, regardless of the assignment.
pub fn is_tautology(formula: &Formula) -> bool {
    classify_formula(formula) == Classification::Tautology
}

/// A predicate indicating whether a given formula is a contradiction, that is,
/// never holds, regardless of the assignment.
pub fn is_contradiction(formula: &Formula) -> bool {
    classify_formula(formula) == Classification::Contradiction
}

/// Tests whether two formulas are semantically equivalent, i.e. have the same
/// truth value under every assignment of the variables of both formulas.
///
/// The test checks whether `f1 ↔ f2` is a tautology. This is the only notion
/// of sameness used for grading; the shape of the formulas does not matter.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::are_equivalent;
/// # use logic_tutor::parser::parse;
/// let f1 = parse("P -> Q").unwrap();
/// let f2 = parse("~P | Q").unwrap();
///
/// assert!(are_equivalent(&f1, &f2));
/// assert!(!are_equivalent(&parse("P").unwrap(), &parse("P & Q").unwrap()));
/// ```
pub fn are_equivalent(f1: &Formula, f2: &Formula) -> bool {
    is_tautology(&Formula::equivalence(f1.clone(), f2.clone()))
}

/// Tests whether `f1` entails `f2`, i.e. `f2` is true under every
/// assignment making `f1` true. The test checks whether `f1 → f2` is a
/// tautology.
pub fn implies(f1: &Formula, f2: &Formula) -> bool {
    is_tautology(&Formula::implication(f1.clone(), f2.clone()))
}

/// Tests whether the conjunction of `premises` entails `conclusion`. Without
/// premises, the conclusion must be a tautology.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::entails;
/// # use logic_tutor::parser::parse;
/// let premises = [parse("P -> Q").unwrap(), parse("P").unwrap()];
///
/// assert!(entails(&premises, &parse("Q").unwrap()));
/// assert!(!entails(&premises[..1], &parse("Q").unwrap()));
/// ```
pub fn entails(premises: &[Formula], conclusion: &Formula) -> bool {
    premises.iter().cloned().reduce(Formula::and).map_or_else(|| is_tautology(conclusion), |premise| implies(&premise, conclusion))
}

/// Returns the first assignment, in truth table order, under which the two
/// formulas have different truth values, or `None` if they are equivalent.
///
/// The assignment covers the variables of both formulas.
pub fn distinguishing_assignment(f1: &Formula, f2: &Formula) -> Option<Assignment> {
    let table = generate_truth_table(&Formula::equivalence(f1.clone(), f2.clone()));
    table.rows.into_iter().find(|row| !row.result).map(|row| row.assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::util::test_util::F;

    fn p(text: &str) -> Formula {
        parse(text).unwrap()
    }

    #[test]
    fn test_classification() {
        let ff = F::new();
        assert_eq!(classify_formula(&p("P | ~P")), Classification::Tautology);
        assert_eq!(classify_formula(&p("P & ~P")), Classification::Contradiction);
        assert_eq!(classify_formula(&p("P -> (Q & R)")), Classification::Contingent);
        assert_eq!(classify_formula(&ff.AND1), Classification::Contingent);
        assert_eq!(classify_formula(&p("(a & b) | (~a & b) | (a & ~b) | (~a & ~b)")), Classification::Tautology);
        assert!(is_tautology(&p("(P -> Q) <-> (~Q -> ~P)")));
        assert!(is_contradiction(&p("~(a -> a)")));
        assert!(!is_tautology(&ff.IMP1));
        assert!(!is_contradiction(&ff.IMP1));
    }

    #[test]
    fn test_equivalence() {
        let ff = F::new();
        assert!(are_equivalent(&p("P -> Q"), &p("~P | Q")));
        assert!(are_equivalent(&p("P"), &p("P & P")));
        assert!(!are_equivalent(&p("P"), &p("P & Q")));
        assert!(are_equivalent(&ff.NOT1, &p("~a | ~b")));
        assert!(are_equivalent(&ff.EQ1, &ff.EQ2));
        assert!(are_equivalent(&p("P | (Q & ~Q)"), &p("P")));
        assert!(!are_equivalent(&ff.IMP1, &ff.IMP2));
    }

    #[test]
    fn test_equivalence_symmetry() {
        let ff = F::new();
        let formulas = [&ff.A, &ff.NA, &ff.OR3, &ff.AND3, &ff.IMP1, &ff.IMP2, &ff.EQ1, &ff.EQ2, &ff.EQ4];
        for f1 in formulas {
            for f2 in formulas {
                assert_eq!(are_equivalent(f1, f2), are_equivalent(f2, f1));
            }
        }
    }

    #[test]
    fn test_implies() {
        let ff = F::new();
        assert!(implies(&ff.AND1, &ff.A));
        assert!(!implies(&ff.A, &ff.AND1));
        assert!(implies(&p("P & (P -> Q)"), &p("Q")));
        assert!(implies(&p("P & ~P"), &p("Q")));
    }

    #[test]
    fn test_entails() {
        assert!(entails(&[], &p("a | ~a")));
        assert!(!entails(&[], &p("a")));
        assert!(entails(&[p("a | b"), p("~a")], &p("b")));
        assert!(!entails(&[p("a -> b"), p("b")], &p("a")));
    }

    #[test]
    fn test_distinguishing_assignment() {
        assert_eq!(distinguishing_assignment(&p("P -> Q"), &p("~P | Q")), None);
        assert_eq!(distinguishing_assignment(&p("P"), &p("P & Q")), Some(Assignment::from_pairs([("P", true), ("Q", false)])));
    }
}
