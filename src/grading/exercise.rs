use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::datastructures::Assignment;
use crate::operations::transformations::NormalForm;

use super::GradingError;

/// The nine kinds of exercises.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    /// Write a formula equivalent to a target formula.
    Equivalence,
    /// Select one or several options.
    MultipleChoice,
    /// Arrange the given symbols into a formula.
    SymbolArrangement,
    /// Formalize a natural language statement.
    Formulation,
    /// Convert a formula into NNF, CNF, or DNF.
    NormalForm,
    /// Decide whether an argument is valid.
    Validation,
    /// Fill in the hidden cells of a truth table.
    TruthTable,
    /// Name the fallacy of an argument.
    IdentifyFallacy,
    /// Write a proof. Proofs are reviewed by the teacher.
    Proof,
}

impl ExerciseType {
    /// All exercise types.
    pub const ALL: [Self; 9] = [
        Self::Equivalence,
        Self::MultipleChoice,
        Self::SymbolArrangement,
        Self::Formulation,
        Self::NormalForm,
        Self::Validation,
        Self::TruthTable,
        Self::IdentifyFallacy,
        Self::Proof,
    ];

    /// Returns the tag of this type as it appears in exercise records.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Equivalence => "EQUIVALENCE",
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::SymbolArrangement => "SYMBOL_ARRANGEMENT",
            Self::Formulation => "FORMULATION",
            Self::NormalForm => "NORMAL_FORM",
            Self::Validation => "VALIDATION",
            Self::TruthTable => "TRUTH_TABLE",
            Self::IdentifyFallacy => "IDENTIFY_FALLACY",
            Self::Proof => "PROOF",
        }
    }
}

impl Display for ExerciseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// An exercise record as it is stored: a type tag with untyped content and
/// solution objects.
///
/// Use [`Exercise::decode`] to check the content and solution against the
/// shape of the exercise type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawExercise {
    /// The type of the exercise
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// The type specific content shown to students
    #[serde(default)]
    pub content: Value,
    /// The type specific solution
    #[serde(default)]
    pub solution: Value,
    /// An optional explanation by the teacher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// An option of a multiple choice or fallacy exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// The identifier of the option
    pub id: String,
    /// The text shown for the option
    #[serde(default)]
    pub text: String,
}

/// The position of a cell in a truth table. Columns are the variables in
/// lexicographic order followed by the result column.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

/// One step of a proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// The formula derived in this step
    pub formula: String,
    /// The name of the rule applied
    #[serde(default)]
    pub rule: String,
    /// The steps the rule is applied to
    #[serde(default)]
    pub references: Vec<usize>,
}

/// The content of an [`ExerciseType::Equivalence`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquivalenceContent {
    /// The formula the answer must be equivalent to
    pub target_formula: String,
}

/// The content of an [`ExerciseType::MultipleChoice`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceContent {
    /// The question text
    #[serde(default)]
    pub question: String,
    /// The options to choose from
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// Whether several options may be selected
    #[serde(default)]
    pub allow_multiple: bool,
}

/// The solution of an [`ExerciseType::MultipleChoice`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceSolution {
    /// The ids of all correct options
    pub correct_option_ids: Vec<String>,
}

/// The content of an [`ExerciseType::SymbolArrangement`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolArrangementContent {
    /// The symbols students may arrange. If empty, any symbol may be used.
    #[serde(default)]
    pub available_symbols: Vec<String>,
}

/// The content of an [`ExerciseType::Formulation`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulationContent {
    /// The statement to formalize
    #[serde(default)]
    pub statement: String,
}

/// The content of an [`ExerciseType::NormalForm`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalFormContent {
    /// The formula to convert
    pub formula: String,
    /// The normal form to convert to
    pub target_form: NormalForm,
}

/// The solution of exercises answered with a formula: any formula matching or
/// equivalent to one of the accepted formulas is correct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedFormulas {
    /// The accepted formulas as text
    #[serde(default)]
    pub accepted_formulas: Vec<String>,
}

/// The content of [`ExerciseType::Validation`] and [`ExerciseType::Proof`]
/// exercises: an argument from premises to a conclusion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentContent {
    /// The premises as formula text
    #[serde(default)]
    pub premises: Vec<String>,
    /// The conclusion as formula text
    pub conclusion: String,
}

/// The solution of an [`ExerciseType::Validation`] exercise. The teacher's
/// verdict is authoritative and not derived again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSolution {
    /// Whether the argument is valid
    pub is_valid: bool,
    /// An assignment making all premises true and the conclusion false
    #[serde(default)]
    pub counterexample: Option<Assignment>,
}

/// The content of an [`ExerciseType::TruthTable`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruthTableContent {
    /// The formula of the table
    pub formula: String,
    /// The cells students have to fill in
    pub hidden_cells: Vec<CellPosition>,
}

/// The solution of an [`ExerciseType::TruthTable`] exercise. Without values,
/// the solution is the truth table of the formula.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruthTableSolution {
    /// All cells of the table, row by row
    #[serde(default)]
    pub values: Option<Vec<Vec<bool>>>,
}

/// The content of an [`ExerciseType::IdentifyFallacy`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallacyContent {
    /// The fallacious argument
    #[serde(default)]
    pub argument: String,
    /// The fallacies to choose from
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

/// The solution of an [`ExerciseType::IdentifyFallacy`] exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallacySolution {
    /// The id of the fallacy
    pub fallacy_id: String,
}

/// The reference proof of an [`ExerciseType::Proof`] exercise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofSolution {
    /// The steps of the reference proof
    #[serde(default)]
    pub steps: Vec<ProofStep>,
}

/// The typed content and solution of an exercise, one variant per
/// [`ExerciseType`].
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum ExerciseKind {
    Equivalence(EquivalenceContent),
    MultipleChoice(MultipleChoiceContent, MultipleChoiceSolution),
    SymbolArrangement(SymbolArrangementContent, AcceptedFormulas),
    Formulation(FormulationContent, AcceptedFormulas),
    NormalForm(NormalFormContent, AcceptedFormulas),
    Validation(ArgumentContent, ValidationSolution),
    TruthTable(TruthTableContent, TruthTableSolution),
    IdentifyFallacy(FallacyContent, FallacySolution),
    Proof(ArgumentContent, ProofSolution),
}

/// A decoded exercise.
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    /// Content and solution
    pub kind: ExerciseKind,
    /// An optional explanation by the teacher
    pub explanation: Option<String>,
}

impl Exercise {
    /// Decodes the content and solution of a raw exercise record according to
    /// its type.
    ///
    /// A missing or `null` content or solution is read as an empty object, so
    /// types without required fields accept it.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_tutor::grading::{Exercise, ExerciseKind, ExerciseType, RawExercise};
    /// # use serde_json::json;
    /// let raw: RawExercise = serde_json::from_value(json!({
    ///     "type": "FORMULATION",
    ///     "content": {"statement": "If it rains, the street is wet."},
    ///     "solution": {"acceptedFormulas": ["R -> W"]}
    /// }))
    /// .unwrap();
    /// let exercise = Exercise::decode(&raw).unwrap();
    ///
    /// assert_eq!(exercise.exercise_type(), ExerciseType::Formulation);
    /// assert!(matches!(exercise.kind, ExerciseKind::Formulation(_, _)));
    /// ```
    pub fn decode(raw: &RawExercise) -> Result<Self, GradingError> {
        let kind = match raw.exercise_type {
            ExerciseType::Equivalence => ExerciseKind::Equivalence(content(raw)?),
            ExerciseType::MultipleChoice => ExerciseKind::MultipleChoice(content(raw)?, solution(raw)?),
            ExerciseType::SymbolArrangement => ExerciseKind::SymbolArrangement(content(raw)?, solution(raw)?),
            ExerciseType::Formulation => ExerciseKind::Formulation(content(raw)?, solution(raw)?),
            ExerciseType::NormalForm => ExerciseKind::NormalForm(content(raw)?, solution(raw)?),
            ExerciseType::Validation => ExerciseKind::Validation(content(raw)?, solution(raw)?),
            ExerciseType::TruthTable => ExerciseKind::TruthTable(content(raw)?, solution(raw)?),
            ExerciseType::IdentifyFallacy => ExerciseKind::IdentifyFallacy(content(raw)?, solution(raw)?),
            ExerciseType::Proof => ExerciseKind::Proof(content(raw)?, solution(raw)?),
        };
        validate(&kind)?;
        Ok(Self { kind, explanation: raw.explanation.clone() })
    }

    /// Reads an exercise record from JSON and decodes it.
    pub fn from_json(value: &Value) -> Result<Self, GradingError> {
        let raw = RawExercise::deserialize(value)?;
        Self::decode(&raw)
    }

    /// Returns the type of this exercise.
    pub const fn exercise_type(&self) -> ExerciseType {
        self.kind.exercise_type()
    }
}

impl ExerciseKind {
    /// Returns the exercise type of this variant.
    pub const fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::Equivalence(_) => ExerciseType::Equivalence,
            Self::MultipleChoice(_, _) => ExerciseType::MultipleChoice,
            Self::SymbolArrangement(_, _) => ExerciseType::SymbolArrangement,
            Self::Formulation(_, _) => ExerciseType::Formulation,
            Self::NormalForm(_, _) => ExerciseType::NormalForm,
            Self::Validation(_, _) => ExerciseType::Validation,
            Self::TruthTable(_, _) => ExerciseType::TruthTable,
            Self::IdentifyFallacy(_, _) => ExerciseType::IdentifyFallacy,
            Self::Proof(_, _) => ExerciseType::Proof,
        }
    }
}

fn content<T: DeserializeOwned>(raw: &RawExercise) -> Result<T, GradingError> {
    decode_part(&raw.content).map_err(|e| GradingError::content(raw.exercise_type, e))
}

fn solution<T: DeserializeOwned>(raw: &RawExercise) -> Result<T, GradingError> {
    decode_part(&raw.solution).map_err(|e| GradingError::solution(raw.exercise_type, e))
}

fn decode_part<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    if value.is_null() { T::deserialize(&Value::Object(Map::new())) } else { T::deserialize(value) }
}

/// Checks what the shapes alone cannot express.
fn validate(kind: &ExerciseKind) -> Result<(), GradingError> {
    match kind {
        ExerciseKind::MultipleChoice(content, solution) => {
            let exercise_type = ExerciseType::MultipleChoice;
            if solution.correct_option_ids.is_empty() {
                return Err(GradingError::solution(exercise_type, "no correct option"));
            }
            if !content.allow_multiple && solution.correct_option_ids.iter().collect::<BTreeSet<_>>().len() > 1 {
                return Err(GradingError::solution(exercise_type, "several correct options, but only one may be selected"));
            }
            check_option_ids(exercise_type, &content.options, &solution.correct_option_ids)
        }
        ExerciseKind::IdentifyFallacy(content, solution) => {
            check_option_ids(ExerciseType::IdentifyFallacy, &content.options, std::slice::from_ref(&solution.fallacy_id))
        }
        ExerciseKind::SymbolArrangement(_, accepted) | ExerciseKind::Formulation(_, accepted) if accepted.accepted_formulas.is_empty() => {
            Err(GradingError::solution(kind.exercise_type(), "no accepted formulas"))
        }
        ExerciseKind::TruthTable(content, _) if content.hidden_cells.is_empty() => {
            Err(GradingError::content(ExerciseType::TruthTable, "no hidden cells"))
        }
        _ => Ok(()),
    }
}

fn check_option_ids(exercise_type: ExerciseType, options: &[ChoiceOption], ids: &[String]) -> Result<(), GradingError> {
    if options.is_empty() {
        return Ok(());
    }
    match ids.iter().find(|id| !options.iter().any(|option| option.id == **id)) {
        Some(id) => Err(GradingError::solution(exercise_type, format!("unknown option {id:?}"))),
        None => Ok(()),
    }
}
