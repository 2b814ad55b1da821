use crate::formulas::{BinaryOperator, Formula};

use super::eliminate_implications;

/// Moves all negations of `formula` inward until they are applied directly to
/// atoms. Double negations are removed and De Morgan's laws are applied:
/// `¬(A ∧ B)` becomes `¬A ∨ ¬B` and `¬(A ∨ B)` becomes `¬A ∧ ¬B`.
///
/// The formula is expected to be free of implications and biconditionals (see
/// [`eliminate_implications`]). Any that remain are eliminated on the way.
pub fn push_negations_inward(formula: &Formula) -> Formula {
    push_rec(formula, true)
}

fn push_rec(formula: &Formula, polarity: bool) -> Formula {
    match formula {
        Formula::Atom(_) => {
            if polarity {
                formula.clone()
            } else {
                Formula::negation(formula.clone())
            }
        }
        Formula::Not(op) => push_rec(op, !polarity),
        Formula::Binary(operator @ (BinaryOperator::And | BinaryOperator::Or), left, right) => {
            let operator = match (operator, polarity) {
                (_, true) => *operator,
                (BinaryOperator::And, false) => BinaryOperator::Or,
                (_, false) => BinaryOperator::And,
            };
            Formula::binary(operator, push_rec(left, polarity), push_rec(right, polarity))
        }
        Formula::Binary(BinaryOperator::Implies | BinaryOperator::Iff, _, _) => push_rec(&eliminate_implications(formula), polarity),
    }
}

/// Constructs the _NNF_ form of `formula` by eliminating implications and
/// biconditionals and then pushing all negations inward.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::transformations::to_nnf;
/// # use logic_tutor::parser::parse;
/// let formula = parse("~(a => b)").unwrap();
///
/// assert_eq!(to_nnf(&formula).to_string(), "a ∧ ¬b");
/// ```
pub fn to_nnf(formula: &Formula) -> Formula {
    push_negations_inward(&eliminate_implications(formula))
}
