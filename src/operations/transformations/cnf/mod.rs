use crate::formulas::{BinaryOperator, Formula};

use super::to_nnf;

/// Distributes disjunctions over conjunctions until no disjunction has a
/// conjunction as an operand: `A ∨ (B ∧ C)` becomes `(A ∨ B) ∧ (A ∨ C)`.
///
/// The formula is expected to be in NNF. Only conjunctions and disjunctions
/// are descended into; other sub-formulas are kept as they are.
pub fn distribute_or_over_and(formula: &Formula) -> Formula {
    match formula {
        Formula::Binary(BinaryOperator::And, left, right) => Formula::and(distribute_or_over_and(left), distribute_or_over_and(right)),
        Formula::Binary(BinaryOperator::Or, left, right) => distribute(distribute_or_over_and(left), distribute_or_over_and(right)),
        Formula::Atom(_) | Formula::Not(_) | Formula::Binary(..) => formula.clone(),
    }
}

/// Joins two formulas in CNF with a disjunction, keeping the result in CNF.
fn distribute(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::Binary(BinaryOperator::And, l1, l2), right) => Formula::and(distribute(*l1, right.clone()), distribute(*l2, right)),
        (left, Formula::Binary(BinaryOperator::And, r1, r2)) => Formula::and(distribute(left.clone(), *r1), distribute(left, *r2)),
        (left, right) => Formula::or(left, right),
    }
}

/// Constructs the _CNF_ of the given formula by converting it to NNF and then
/// distributing disjunctions over conjunctions.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::transformations::to_cnf;
/// # use logic_tutor::parser::parse;
/// let formula = parse("a | b & c").unwrap();
///
/// assert_eq!(to_cnf(&formula).to_string(), "(a ∨ b) ∧ (a ∨ c)");
/// ```
pub fn to_cnf(formula: &Formula) -> Formula {
    distribute_or_over_and(&to_nnf(formula))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::predicates::{are_equivalent, is_cnf};
    use crate::parser::parse;
    use crate::util::test_util::F;

    fn test_cnf(original: &str, expected: &str) {
        let cnf = to_cnf(&parse(original).unwrap());
        assert_eq!(cnf, parse(expected).unwrap());
        assert!(is_cnf(&cnf));
    }

    #[test]
    fn test_literals() {
        test_cnf("a", "a");
        test_cnf("~a", "~a");
        test_cnf("~~a", "a");
    }

    #[test]
    fn test_binary_operators() {
        test_cnf("a => b", "~a | b");
        test_cnf("~a => ~b", "a | ~b");
        test_cnf("a & b => x | y", "~a | ~b | (x | y)");
        test_cnf("a <=> b", "(~a | b) & (~b | a)");
        test_cnf("P -> (Q & R)", "(~P | Q) & (~P | R)");
    }

    #[test]
    fn test_distribution() {
        test_cnf("(a & b) | c", "(a | c) & (b | c)");
        test_cnf("(a & b) | (c & d)", "(a | c) & (a | d) & ((b | c) & (b | d))");
        test_cnf("a | (b | c & d)", "(a | (b | c)) & (a | (b | d))");
    }

    #[test]
    fn test_not() {
        test_cnf("~(a2 => b2)", "a2 & ~b2");
        test_cnf("~(a2 & b2 & ~x2 & ~y2)", "~a2 | ~b2 | x2 | y2");
        test_cnf("~(a2 | b2 | ~x2 | ~y2)", "~a2 & ~b2 & x2 & y2");
    }

    #[test]
    fn test_fixpoint_and_equivalence() {
        let ff = F::new();
        for formula in [&ff.OR3, &ff.AND3, &ff.NOT1, &ff.IMP3, &ff.IMP4, &ff.EQ2, &ff.EQ3, &ff.EQ4] {
            let cnf = to_cnf(formula);
            assert!(is_cnf(&cnf));
            assert!(are_equivalent(formula, &cnf));
            assert_eq!(to_cnf(&cnf), cnf);
        }
    }
}
