use std::fmt::Display;

use thiserror::Error;

use crate::parser::SyntaxError;
use crate::symbols::LogicSystem;

use super::ExerciseType;

/// A failure while grading one submission.
///
/// Grading errors never reach the caller of [`grade`](super::grade). They are
/// turned into an incorrect [`GradingResult`](super::GradingResult) whose
/// feedback is the error message.
#[derive(Error, Debug)]
pub enum GradingError {
    /// A formula of the exercise or of the answer could not be parsed.
    #[error("syntax error in {field}: {source}")]
    Syntax {
        /// What the formula is, e.g. "your answer" or "the target formula"
        field: String,
        /// The underlying parser error
        source: SyntaxError,
    },
    /// The content or solution of an exercise does not have the shape its
    /// type requires.
    #[error("invalid {part} of {exercise_type} exercise: {reason}")]
    InvalidContent {
        /// The type of the exercise
        exercise_type: ExerciseType,
        /// Either "content" or "solution"
        part: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// The answer does not have the shape the exercise type requires.
    #[error("invalid answer: expected {expected}")]
    InvalidAnswer {
        /// A description of the expected answer
        expected: String,
    },
    /// A formula has more variables than the grader is configured to accept.
    #[error("{field} has {count} variables, but at most {limit} are supported")]
    TooManyVariables {
        /// What the formula is
        field: String,
        /// Number of variables of the formula
        count: usize,
        /// The configured limit
        limit: usize,
    },
    /// The answer uses a symbol of a logic system which is not evaluated.
    #[error("the symbol {symbol} belongs to {system} and cannot be evaluated")]
    UnsupportedSymbol {
        /// The symbol
        symbol: String,
        /// The logic system of the symbol
        system: LogicSystem,
    },
    /// The exercise record is not an object with a known type tag.
    #[error("invalid exercise: {0}")]
    InvalidExercise(#[from] serde_json::Error),
}

impl GradingError {
    pub(crate) fn syntax(field: impl Into<String>, source: SyntaxError) -> Self {
        Self::Syntax { field: field.into(), source }
    }

    pub(crate) fn content(exercise_type: ExerciseType, reason: impl Display) -> Self {
        Self::InvalidContent { exercise_type, part: "content", reason: reason.to_string() }
    }

    pub(crate) fn solution(exercise_type: ExerciseType, reason: impl Display) -> Self {
        Self::InvalidContent { exercise_type, part: "solution", reason: reason.to_string() }
    }

    pub(crate) fn answer(expected: impl Into<String>) -> Self {
        Self::InvalidAnswer { expected: expected.into() }
    }
}
