use crate::formulas::{BinaryOperator, Formula};

use super::to_nnf;

/// Distributes conjunctions over disjunctions until no conjunction has a
/// disjunction as an operand: `A ∧ (B ∨ C)` becomes `(A ∧ B) ∨ (A ∧ C)`.
///
/// The formula is expected to be in NNF. Only conjunctions and disjunctions
/// are descended into; other sub-formulas are kept as they are.
pub fn distribute_and_over_or(formula: &Formula) -> Formula {
    match formula {
        Formula::Binary(BinaryOperator::Or, left, right) => Formula::or(distribute_and_over_or(left), distribute_and_over_or(right)),
        Formula::Binary(BinaryOperator::And, left, right) => distribute(distribute_and_over_or(left), distribute_and_over_or(right)),
        Formula::Atom(_) | Formula::Not(_) | Formula::Binary(..) => formula.clone(),
    }
}

/// Joins two formulas in DNF with a conjunction, keeping the result in DNF.
fn distribute(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::Binary(BinaryOperator::Or, l1, l2), right) => Formula::or(distribute(*l1, right.clone()), distribute(*l2, right)),
        (left, Formula::Binary(BinaryOperator::Or, r1, r2)) => Formula::or(distribute(left.clone(), *r1), distribute(left, *r2)),
        (left, right) => Formula::and(left, right),
    }
}

/// Constructs the _DNF_ of the given formula by converting it to NNF and then
/// distributing conjunctions over disjunctions.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::transformations::to_dnf;
/// # use logic_tutor::parser::parse;
/// let formula = parse("a & (b | ~c)").unwrap();
///
/// assert_eq!(to_dnf(&formula).to_string(), "a ∧ b ∨ a ∧ ¬c");
/// ```
pub fn to_dnf(formula: &Formula) -> Formula {
    distribute_and_over_or(&to_nnf(formula))
}
