use crate::formulas::Formula;

/// Returns all sub-formulas of `formula` in pre-order, starting with the
/// formula itself. For example, the sub-formulas of `A ∧ ¬B → A` are
///
/// - `A ∧ ¬B → A`
/// - `A ∧ ¬B`
/// - `A`
/// - `¬B`
/// - `B`
/// - `A`
///
/// Sub-formulas are identified by their position in the tree, so a formula
/// occurring in several places is listed once for every occurrence.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::functions::get_subformulas;
/// # use logic_tutor::parser::parse;
/// let formula = parse("a & ~b -> a").unwrap();
///
/// let result: Vec<String> = get_subformulas(&formula).iter().map(ToString::to_string).collect();
///
/// assert_eq!(result, ["a ∧ ¬b → a", "a ∧ ¬b", "a", "¬b", "b", "a"]);
/// ```
pub fn get_subformulas(formula: &Formula) -> Vec<&Formula> {
    let mut result = Vec::new();
    collect_subformulas(formula, &mut result);
    result
}

fn collect_subformulas<'a>(formula: &'a Formula, result: &mut Vec<&'a Formula>) {
    result.push(formula);
    for op in formula.operands() {
        collect_subformulas(op, result);
    }
}

/// Returns the number of nodes of the formula, i.e. the number of its
/// sub-formula occurrences.
pub fn number_of_nodes(formula: &Formula) -> usize {
    1 + formula.operands().into_iter().map(number_of_nodes).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_literals() {
        let ff = F::new();
        assert_eq!(get_subformulas(&ff.A), vec![&ff.A]);
        assert_eq!(get_subformulas(&ff.NA), vec![&ff.NA, &ff.A]);
    }

    #[test]
    fn test_pre_order() {
        let ff = F::new();
        assert_eq!(get_subformulas(&ff.IMP3), vec![&ff.IMP3, &ff.AND1, &ff.A, &ff.B, &ff.OR1, &ff.X, &ff.Y]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let ff = F::new();
        let subformulas = get_subformulas(&ff.EQ4);
        assert_eq!(subformulas.len(), 9);
        assert_eq!(subformulas.iter().filter(|&&sub| *sub == ff.A).count(), 2);
        assert_eq!(number_of_nodes(&ff.EQ4), 9);
    }

    #[test]
    fn test_number_of_nodes() {
        let ff = F::new();
        assert_eq!(number_of_nodes(&ff.A), 1);
        assert_eq!(number_of_nodes(&ff.OR3), 9);
    }
}
