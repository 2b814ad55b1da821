use crate::formulas::Formula;

/// A function that returns the depth of a formula's abstract syntax tree. The
/// depth of a formula indicates how many levels of nested sub-formulas a
/// formula has. For example,
///
/// - `A` has depth zero,
/// - `¬A` and `A ∧ B` have depth one,
/// - `(A ∧ B) ∨ C` has depth two,
/// - `(A ∧ B) ∨ C ∧ (E ∨ F)` has depth three.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::functions::formula_depth;
/// # use logic_tutor::parser::parse;
/// let formula1 = parse("a").unwrap();
/// let formula2 = parse("a & b").unwrap();
/// let formula3 = parse("(a & b) | c").unwrap();
/// let formula4 = parse("(a & b) | c & (e | f)").unwrap();
///
/// assert_eq!(formula_depth(&formula1), 0);
/// assert_eq!(formula_depth(&formula2), 1);
/// assert_eq!(formula_depth(&formula3), 2);
/// assert_eq!(formula_depth(&formula4), 3);
/// ```
pub fn formula_depth(formula: &Formula) -> usize {
    match formula {
        Formula::Atom(_) => 0,
        Formula::Not(op) => 1 + formula_depth(op),
        Formula::Binary(_, left, right) => 1 + formula_depth(left).max(formula_depth(right)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_atoms() {
        let ff = F::new();
        assert_eq!(0, formula_depth(&ff.A));
        assert_eq!(0, formula_depth(&ff.X));
        assert_eq!(1, formula_depth(&ff.NA));
    }

    #[test]
    fn test_deep_formulas() {
        let ff = F::new();
        assert_eq!(1, formula_depth(&ff.AND1));
        assert_eq!(2, formula_depth(&ff.AND2));
        assert_eq!(3, formula_depth(&ff.AND3));
        assert_eq!(1, formula_depth(&ff.OR1));
        assert_eq!(2, formula_depth(&ff.OR2));
        assert_eq!(3, formula_depth(&ff.OR3));
        assert_eq!(2, formula_depth(&ff.NOT1));
        assert_eq!(2, formula_depth(&ff.NOT2));
        assert_eq!(1, formula_depth(&ff.IMP1));
        assert_eq!(2, formula_depth(&ff.IMP2));
        assert_eq!(2, formula_depth(&ff.IMP3));
        assert_eq!(3, formula_depth(&ff.IMP4));
        assert_eq!(1, formula_depth(&ff.EQ1));
        assert_eq!(2, formula_depth(&ff.EQ2));
        assert_eq!(2, formula_depth(&ff.EQ3));
        assert_eq!(3, formula_depth(&ff.EQ4));
    }

    #[test]
    fn test_deeper_formulas() {
        let mut formula = Formula::atom("X");
        for i in 0..10 {
            let var = Formula::atom(format!("X{i}"));
            formula = if i % 2 == 0 { Formula::or(formula, var) } else { Formula::and(formula, var) }
        }
        assert_eq!(10, formula_depth(&formula));
    }
}
