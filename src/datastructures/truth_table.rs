use serde::Serialize;

use super::Assignment;

/// One row of a [`TruthTable`]: an assignment and the result of the formula
/// under this assignment.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize)]
pub struct TruthTableRow {
    /// The assignment of this row, covering every variable of the table.
    pub assignment: Assignment,
    /// The truth value of the formula under the assignment.
    pub result: bool,
}

/// The truth table of a formula.
///
/// `variables` are sorted lexicographically and `rows` contains exactly
/// `2^n` rows for `n` variables. Row `i` is fixed: the variables are read as
/// the bits of a counter running down from "all true" to "all false", the
/// first variable being the most significant bit. For the variables `P, Q`
/// the rows are `TT`, `TF`, `FT`, `FF`.
///
/// Truth tables are computed by
/// [`generate_truth_table`](crate::operations::functions::generate_truth_table).
///
/// Cells are addressed by row and column, where the columns are the
/// variables in order followed by the result column.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize)]
pub struct TruthTable {
    /// The variables of the table in lexicographic order.
    pub variables: Vec<String>,
    /// All rows of the table.
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Returns the number of columns, i.e. the number of variables plus one for
    /// the result column.
    pub fn column_count(&self) -> usize {
        self.variables.len() + 1
    }

    /// Returns the index of the result column.
    pub fn result_column(&self) -> usize {
        self.variables.len()
    }

    /// Returns the value of the cell at `row` and `column`, or `None` if the
    /// cell lies outside the table.
    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        let row = self.rows.get(row)?;
        if column == self.result_column() {
            Some(row.result)
        } else {
            self.variables.get(column).map(|name| row.assignment.value(name))
        }
    }

    /// Returns the whole table as a grid of cells, row by row.
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| self.variables.iter().map(|name| row.assignment.value(name)).chain([row.result]).collect())
            .collect()
    }

    /// Iterates over the results of all rows.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Returns `true` if the formula is true in every row.
    pub fn all_true(&self) -> bool {
        self.results().all(|result| result)
    }

    /// Returns `true` if the formula is false in every row.
    pub fn all_false(&self) -> bool {
        self.results().all(|result| !result)
    }
}
