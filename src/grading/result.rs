use serde::{Deserialize, Serialize};

use crate::datastructures::Assignment;

use super::{CellPosition, GradingError};

/// The verdict on one submission.
///
/// `score` lies in `0.0..=1.0` and gives partial credit; `is_correct` is only
/// set for fully correct answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// Whether the answer is fully correct
    pub is_correct: bool,
    /// The score of the answer
    pub score: f64,
    /// Feedback for the student
    pub feedback: String,
    /// The teacher's explanation of the exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Structured information on how the answer was graded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<GradingDetails>,
}

/// Structured information about a grading result, depending on the exercise
/// type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GradingDetails {
    /// Counts of a multiple choice or fallacy selection
    Selection {
        /// Number of selected correct options
        correct_selected: usize,
        /// Number of selected incorrect options
        incorrect_selected: usize,
        /// Number of correct options
        total_correct: usize,
    },
    /// The outcome of comparing a formula to the accepted formulas
    Formula {
        /// The accepted formula the answer matched
        matched_formula: Option<String>,
        /// Whether the answer is written in the requested normal form
        #[serde(default, skip_serializing_if = "Option::is_none")]
        in_target_form: Option<bool>,
    },
    /// An assignment under which the answer and the target formula differ
    Counterexample {
        /// The distinguishing assignment
        assignment: Assignment,
    },
    /// The outcome of checking hidden truth table cells
    Cells {
        /// Number of correctly filled cells
        correct: usize,
        /// Number of hidden cells
        total: usize,
        /// Hidden cells which were filled incorrectly or not at all
        incorrect_cells: Vec<CellPosition>,
    },
    /// The stored verdict on an argument
    Validity {
        /// Whether the argument is valid
        is_valid: bool,
        /// A counterexample for an invalid argument
        #[serde(default, skip_serializing_if = "Option::is_none")]
        counterexample: Option<Assignment>,
    },
    /// A submitted proof awaiting review
    Proof {
        /// Number of submitted steps
        submitted_steps: usize,
        /// Number of steps of the reference proof
        reference_steps: usize,
        /// Indices of submitted steps whose formula cannot be parsed
        invalid_steps: Vec<usize>,
    },
}

impl GradingResult {
    /// A fully correct result with score `1.0`.
    pub fn correct<S: Into<String>>(feedback: S) -> Self {
        Self { is_correct: true, score: 1.0, feedback: feedback.into(), explanation: None, details: None }
    }

    /// An incorrect result with score `0.0`.
    pub fn incorrect<S: Into<String>>(feedback: S) -> Self {
        Self { is_correct: false, score: 0.0, feedback: feedback.into(), explanation: None, details: None }
    }

    /// A result with the given score, clamped to `0.0..=1.0`. Only a score of
    /// `1.0` is correct.
    pub fn partial<S: Into<String>>(score: f64, feedback: S) -> Self {
        let score = score.clamp(0.0, 1.0);
        #[allow(clippy::float_cmp)]
        let is_correct = score == 1.0;
        Self { is_correct, score, feedback: feedback.into(), explanation: None, details: None }
    }

    /// Attaches details to this result.
    #[must_use]
    pub fn with_details(mut self, details: GradingDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Attaches an explanation to this result.
    #[must_use]
    pub fn with_explanation(mut self, explanation: Option<String>) -> Self {
        self.explanation = explanation;
        self
    }
}

impl From<GradingError> for GradingResult {
    fn from(error: GradingError) -> Self {
        Self::incorrect(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(GradingResult::correct("yes").score, 1.0);
        assert!(!GradingResult::incorrect("no").is_correct);
        assert_eq!(GradingResult::partial(1.5, "").score, 1.0);
        assert!(GradingResult::partial(1.0, "").is_correct);
        assert_eq!(GradingResult::partial(-0.5, "").score, 0.0);
        assert!(!GradingResult::partial(0.5, "").is_correct);
    }

    #[test]
    fn test_json() {
        let result = GradingResult::partial(0.5, "Half of the cells are correct.").with_details(GradingDetails::Cells {
            correct: 1,
            total: 2,
            incorrect_cells: vec![CellPosition { row: 0, column: 1 }],
        });
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "isCorrect": false,
                "score": 0.5,
                "feedback": "Half of the cells are correct.",
                "details": {"kind": "cells", "correct": 1, "total": 2, "incorrectCells": [{"row": 0, "column": 1}]}
            })
        );
        let result = GradingResult::incorrect("no").with_explanation(Some(String::from("because")));
        assert_eq!(serde_json::to_value(&result).unwrap()["explanation"], json!("because"));
        let details = GradingDetails::Selection { correct_selected: 2, incorrect_selected: 1, total_correct: 3 };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({"kind": "selection", "correctSelected": 2, "incorrectSelected": 1, "totalCorrect": 3})
        );
    }

    #[test]
    fn test_from_error() {
        let result = GradingResult::from(GradingError::answer("true or false"));
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.feedback, "invalid answer: expected true or false");
    }
}
