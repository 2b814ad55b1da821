use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ExerciseType, GradingError, ProofStep};

/// A value submitted for one cell of a truth table.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAnswer {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
    /// The submitted truth value
    pub value: bool,
}

/// A student's answer, decoded according to the type of the exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Formula text
    Formula(String),
    /// A sequence of symbols, arranged into a formula
    Symbols(Vec<String>),
    /// The ids of the selected options
    Selection(Vec<String>),
    /// Whether an argument is valid
    Validity(bool),
    /// Values for truth table cells
    Cells(Vec<CellAnswer>),
    /// The steps of a proof
    ProofSteps(Vec<ProofStep>),
}

impl Answer {
    /// Decodes the raw JSON answer of an exercise of the given type.
    ///
    /// | Type | Answer |
    /// |---|---|
    /// | `EQUIVALENCE`, `FORMULATION`, `NORMAL_FORM` | formula text |
    /// | `SYMBOL_ARRANGEMENT` | formula text or an array of symbols |
    /// | `MULTIPLE_CHOICE` | an option id or an array of ids |
    /// | `IDENTIFY_FALLACY` | an option id |
    /// | `VALIDATION` | a boolean |
    /// | `TRUTH_TABLE` | an array of `{row, column, value}` |
    /// | `PROOF` | an array of `{formula, rule, references}` |
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_tutor::grading::{Answer, ExerciseType};
    /// # use serde_json::json;
    /// let answer = Answer::decode(ExerciseType::MultipleChoice, &json!("b")).unwrap();
    ///
    /// assert_eq!(answer, Answer::Selection(vec![String::from("b")]));
    /// assert!(Answer::decode(ExerciseType::Validation, &json!("yes")).is_err());
    /// ```
    pub fn decode(exercise_type: ExerciseType, value: &Value) -> Result<Self, GradingError> {
        match exercise_type {
            ExerciseType::Equivalence | ExerciseType::Formulation | ExerciseType::NormalForm => {
                value.as_str().map(|text| Self::Formula(text.to_owned())).ok_or_else(|| GradingError::answer("formula text"))
            }
            ExerciseType::SymbolArrangement => match value {
                Value::String(text) => Ok(Self::Formula(text.clone())),
                _ => strings(value).map(Self::Symbols).ok_or_else(|| GradingError::answer("formula text or a list of symbols")),
            },
            ExerciseType::MultipleChoice => match value {
                Value::String(id) => Ok(Self::Selection(vec![id.clone()])),
                _ => strings(value).map(Self::Selection).ok_or_else(|| GradingError::answer("an option id or a list of option ids")),
            },
            ExerciseType::IdentifyFallacy => {
                value.as_str().map(|id| Self::Selection(vec![id.to_owned()])).ok_or_else(|| GradingError::answer("an option id"))
            }
            ExerciseType::Validation => value.as_bool().map(Self::Validity).ok_or_else(|| GradingError::answer("true or false")),
            ExerciseType::TruthTable => {
                Vec::<CellAnswer>::deserialize(value)
                    .map(Self::Cells)
                    .map_err(|error| GradingError::answer(format!("a list of cells with row, column, and value ({error})")))
            }
            ExerciseType::Proof => {
                Vec::<ProofStep>::deserialize(value)
                    .map(Self::ProofSteps)
                    .map_err(|error| GradingError::answer(format!("a list of proof steps ({error})")))
            }
        }
    }

    pub(crate) fn formula_text(&self) -> Result<&str, GradingError> {
        match self {
            Self::Formula(text) => Ok(text),
            _ => Err(GradingError::answer("formula text")),
        }
    }

    pub(crate) fn selection(&self) -> Result<&[String], GradingError> {
        match self {
            Self::Selection(ids) => Ok(ids),
            _ => Err(GradingError::answer("a selection of options")),
        }
    }

    pub(crate) fn validity(&self) -> Result<bool, GradingError> {
        match self {
            Self::Validity(valid) => Ok(*valid),
            _ => Err(GradingError::answer("true or false")),
        }
    }

    pub(crate) fn cells(&self) -> Result<&[CellAnswer], GradingError> {
        match self {
            Self::Cells(cells) => Ok(cells),
            _ => Err(GradingError::answer("a list of cells with row, column, and value")),
        }
    }

    pub(crate) fn proof_steps(&self) -> Result<&[ProofStep], GradingError> {
        match self {
            Self::ProofSteps(steps) => Ok(steps),
            _ => Err(GradingError::answer("a list of proof steps")),
        }
    }
}

fn strings(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(|item| item.as_str().map(str::to_owned)).collect()
}
