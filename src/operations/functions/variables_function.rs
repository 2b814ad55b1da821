use std::collections::BTreeSet;

use crate::formulas::Formula;

/// Returns the names of all distinct variables occurring in `formula`, in
/// lexicographic order.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::functions::variables;
/// # use logic_tutor::parser::parse;
/// let formula = parse("(q -> p) & ~q | r").unwrap();
///
/// assert_eq!(variables(&formula).into_iter().collect::<Vec<_>>(), ["p", "q", "r"]);
/// ```
pub fn variables(formula: &Formula) -> BTreeSet<&str> {
    let mut result = BTreeSet::new();
    collect_variables(formula, &mut result);
    result
}

/// Returns the names of all distinct variables occurring in any of the given
/// formulas.
pub fn variables_of_all<'a, I>(formulas: I) -> BTreeSet<&'a str>
where I: IntoIterator<Item = &'a Formula> {
    let mut result = BTreeSet::new();
    for formula in formulas {
        collect_variables(formula, &mut result);
    }
    result
}

fn collect_variables<'a>(formula: &'a Formula, result: &mut BTreeSet<&'a str>) {
    match formula {
        Formula::Atom(name) => {
            result.insert(name);
        }
        Formula::Not(op) => collect_variables(op, result),
        Formula::Binary(_, left, right) => {
            collect_variables(left, result);
            collect_variables(right, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_variables() {
        let ff = F::new();
        assert_eq!(variables(&ff.A), BTreeSet::from(["a"]));
        assert_eq!(variables(&ff.NA), BTreeSet::from(["a"]));
        assert_eq!(variables(&ff.AND3), BTreeSet::from(["x", "y"]));
        assert_eq!(variables(&ff.IMP4), BTreeSet::from(["a", "b", "x", "y"]));
        assert_eq!(variables(&ff.EQ4), BTreeSet::from(["a", "b"]));
    }

    #[test]
    fn test_variables_of_all() {
        let ff = F::new();
        assert_eq!(variables_of_all([&ff.AND1, &ff.OR1]), BTreeSet::from(["a", "b", "x", "y"]));
        assert!(variables_of_all([]).is_empty());
    }
}
