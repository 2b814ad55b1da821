use log::trace;

use crate::datastructures::{Assignment, TruthTable, TruthTableRow};
use crate::formulas::Formula;

use super::variables;

/// Computes the truth table of `formula`.
///
/// The variables are sorted lexicographically and all `2^n` assignments are
/// enumerated from "all true" to "all false", reading the variables as the
/// bits of a descending counter with the first variable as the most
/// significant bit. This order is stable, so row `i` always denotes the same
/// assignment. A formula without variables still yields a single row.
///
/// # Panics
///
/// Panics if the formula has as many variables as `usize` has bits, since
/// the rows could not be counted.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::functions::generate_truth_table;
/// # use logic_tutor::parser::parse;
/// let table = generate_truth_table(&parse("Q -> P").unwrap());
///
/// assert_eq!(table.variables, ["P", "Q"]);
/// assert_eq!(table.results().collect::<Vec<_>>(), [true, true, false, true]);
/// assert!(table.rows[0].assignment.value("P"));
/// assert!(!table.rows[3].assignment.value("Q"));
/// ```
pub fn generate_truth_table(formula: &Formula) -> TruthTable {
    let variables: Vec<String> = variables(formula).into_iter().map(String::from).collect();
    let n = variables.len();
    let row_count = u32::try_from(n)
        .ok()
        .and_then(|bits| 1_usize.checked_shl(bits))
        .unwrap_or_else(|| panic!("a truth table over {n} variables has too many rows to enumerate"));
    trace!("enumerating {row_count} rows over {n} variables");

    let rows = (0..row_count)
        .map(|index| {
            let counter = row_count - 1 - index;
            let assignment = variables
                .iter()
                .enumerate()
                .map(|(position, name)| (name.as_str(), (counter >> (n - 1 - position)) & 1 == 1))
                .collect::<Assignment>();
            let result = formula.evaluate(&assignment);
            TruthTableRow { assignment, result }
        })
        .collect();
    TruthTable { variables, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::util::test_util::F;

    #[test]
    fn test_row_order() {
        let table = generate_truth_table(&parse("P -> (Q & R)").unwrap());
        assert_eq!(table.variables, ["P", "Q", "R"]);
        assert_eq!(table.rows.len(), 8);
        let bits = table
            .rows
            .iter()
            .map(|row| table.variables.iter().map(|v| if row.assignment.value(v) { '1' } else { '0' }).collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(bits, ["111", "110", "101", "100", "011", "010", "001", "000"]);
        assert_eq!(table.results().collect::<Vec<_>>(), [true, false, false, false, true, true, true, true]);
    }

    #[test]
    fn test_every_row_assigns_every_variable() {
        let ff = F::new();
        let table = generate_truth_table(&ff.IMP4);
        assert_eq!(table.rows.len(), 16);
        assert!(table.rows.iter().all(|row| row.assignment.len() == 4));
    }

    #[test]
    fn test_single_variable() {
        let ff = F::new();
        let table = generate_truth_table(&ff.NA);
        assert_eq!(table.variables, ["a"]);
        assert_eq!(table.results().collect::<Vec<_>>(), [false, true]);
    }

    #[test]
    fn test_repeated_variable() {
        let table = generate_truth_table(&parse("a & a & ~a").unwrap());
        assert_eq!(table.variables, ["a"]);
        assert_eq!(table.rows.len(), 2);
        assert!(table.all_false());
    }

    #[test]
    fn test_cells() {
        let table = generate_truth_table(&parse("a | b").unwrap());
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(0, 0), Some(true));
        assert_eq!(table.cell(1, 1), Some(false));
        assert_eq!(table.cell(3, 2), Some(false));
        assert_eq!(table.cell(4, 0), None);
        assert_eq!(table.cell(0, 3), None);
        assert_eq!(table.to_grid(), vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![false, true, true],
            vec![false, false, false]
        ]);
    }

    #[test]
    fn test_json() {
        let table = generate_truth_table(&parse("~p").unwrap());
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "variables": ["p"],
                "rows": [
                    { "assignment": { "p": true }, "result": false },
                    { "assignment": { "p": false }, "result": true }
                ]
            })
        );
    }
}
