use crate::formulas::Formula;
use crate::operations::functions::generate_truth_table;

/// A predicate tests whether a formula is satisfiable. A formula is satisfiable
/// if there exists at least one assignment such that the formula evaluates to
/// `true` with this assignment. Such an assignment is called *satisfying
/// assignment* or *model*. For example `A ∧ B ∨ C` is satisfiable for the
/// assignment `{A, B, ¬C}`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::is_satisfiable;
/// # use logic_tutor::parser::parse;
/// assert!(is_satisfiable(&parse("a & b | c").unwrap()));
/// assert!(!is_satisfiable(&parse("a & ~a").unwrap()));
/// ```
pub fn is_satisfiable(formula: &Formula) -> bool {
    generate_truth_table(formula).results().any(|result| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_satisfiable() {
        let ff = F::new();
        for formula in [&ff.A, &ff.NA, &ff.OR3, &ff.AND3, &ff.NOT1, &ff.IMP4, &ff.EQ3] {
            assert!(is_satisfiable(formula));
        }
        assert!(!is_satisfiable(&"(a | b) & ~a & ~b".parse().unwrap()));
        assert!(!is_satisfiable(&"x <-> ~x".parse().unwrap()));
    }
}
