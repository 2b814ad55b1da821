use crate::formulas::{BinaryOperator, Formula};

/// Rewrites every implication `A → B` into `¬A ∨ B` and every biconditional
/// `A ↔ B` into `(¬A ∨ B) ∧ (¬B ∨ A)`. The operands are rewritten first, so
/// the result contains no implications and no biconditionals.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::transformations::eliminate_implications;
/// # use logic_tutor::parser::parse;
/// let formula = parse("a <-> (b -> c)").unwrap();
///
/// assert_eq!(eliminate_implications(&formula).to_string(), "(¬a ∨ (¬b ∨ c)) ∧ (¬(¬b ∨ c) ∨ a)");
/// ```
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),
        Formula::Not(op) => Formula::negation(eliminate_implications(op)),
        Formula::Binary(operator, left, right) => {
            let left = eliminate_implications(left);
            let right = eliminate_implications(right);
            match operator {
                BinaryOperator::And | BinaryOperator::Or => Formula::binary(*operator, left, right),
                BinaryOperator::Implies => Formula::or(Formula::negation(left), right),
                BinaryOperator::Iff => Formula::and(
                    Formula::or(Formula::negation(left.clone()), right.clone()),
                    Formula::or(Formula::negation(right), left),
                ),
            }
        }
    }
}
