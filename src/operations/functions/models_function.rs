use crate::datastructures::{Assignment, TruthTable};
use crate::formulas::Formula;

use super::generate_truth_table;

/// Returns all models of `formula`, i.e. all assignments over its variables
/// under which it is true, in truth table order.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::datastructures::Assignment;
/// # use logic_tutor::operations::functions::get_models;
/// # use logic_tutor::parser::parse;
/// let models = get_models(&parse("a & ~b").unwrap());
///
/// assert_eq!(models, [Assignment::from_pairs([("a", true), ("b", false)])]);
/// ```
pub fn get_models(formula: &Formula) -> Vec<Assignment> {
    rows_with_result(generate_truth_table(formula), true)
}

/// Returns all counter-models of `formula`, i.e. all assignments over its
/// variables under which it is false, in truth table order.
pub fn get_counter_models(formula: &Formula) -> Vec<Assignment> {
    rows_with_result(generate_truth_table(formula), false)
}

fn rows_with_result(table: TruthTable, result: bool) -> Vec<Assignment> {
    table.rows.into_iter().filter(|row| row.result == result).map(|row| row.assignment).collect()
}
