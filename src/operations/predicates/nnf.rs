use crate::formulas::{BinaryOperator, Formula};

/// A predicate indicating whether a formula is in negation normal form (NNF).
/// A formula is in NNF if it contains no implications and biconditionals, and
/// every negation is applied directly to an atom.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::is_nnf;
/// # use logic_tutor::parser::parse;
/// assert!(is_nnf(&parse("~a & (b | ~c)").unwrap()));
/// assert!(!is_nnf(&parse("~(a & b)").unwrap()));
/// assert!(!is_nnf(&parse("a -> b").unwrap()));
/// ```
pub fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(_) => true,
        Formula::Not(op) => op.is_atomic(),
        Formula::Binary(BinaryOperator::And | BinaryOperator::Or, left, right) => is_nnf(left) && is_nnf(right),
        Formula::Binary(BinaryOperator::Implies | BinaryOperator::Iff, _, _) => false,
    }
}
