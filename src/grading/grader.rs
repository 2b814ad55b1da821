use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::formulas::Formula;
use crate::operations::functions::{generate_truth_table, variables_of_all};
use crate::operations::predicates::{are_equivalent, distinguishing_assignment};
use crate::operations::transformations::{NormalForm, is_in_normal_form, to_normal_form};
use crate::parser::{normalize_formula_text, parse};
use crate::symbols::{find_foreign_symbol, foreign_symbol};

use super::{
    AcceptedFormulas, Answer, CellAnswer, Exercise, ExerciseKind, ExerciseType, FallacySolution, GraderConfig, GradingDetails, GradingError,
    GradingResult, MultipleChoiceContent, MultipleChoiceSolution, ProofSolution, ProofStep, RawExercise, SymbolArrangementContent,
    TruthTableContent, TruthTableSolution, ValidationSolution,
};

/// Grades answers to exercises.
///
/// Grading never fails: malformed exercises, malformed answers, and formulas
/// which cannot be parsed all lead to an incorrect result whose feedback
/// describes the problem.
#[derive(Copy, Clone, Debug, Default)]
pub struct Grader {
    config: GraderConfig,
}

impl Grader {
    /// Creates a new grader with the given configuration.
    pub const fn new(config: GraderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this grader.
    pub const fn config(&self) -> &GraderConfig {
        &self.config
    }

    /// Grades a raw answer to a raw exercise record.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logic_tutor::grading::{Grader, GraderConfig, RawExercise};
    /// # use serde_json::json;
    /// let exercise: RawExercise = serde_json::from_value(json!({
    ///     "type": "VALIDATION",
    ///     "content": {"premises": ["P -> Q", "P"], "conclusion": "Q"},
    ///     "solution": {"isValid": true},
    ///     "explanation": "Modus ponens."
    /// }))
    /// .unwrap();
    /// let grader = Grader::new(GraderConfig::default());
    ///
    /// let result = grader.grade(&exercise, &json!(true));
    /// assert!(result.is_correct);
    /// assert_eq!(result.explanation.as_deref(), Some("Modus ponens."));
    ///
    /// let result = grader.grade(&exercise, &json!("valid"));
    /// assert!(!result.is_correct);
    /// assert_eq!(result.feedback, "invalid answer: expected true or false");
    /// ```
    pub fn grade(&self, exercise: &RawExercise, answer: &Value) -> GradingResult {
        debug!("grading {} exercise", exercise.exercise_type);
        let result = Exercise::decode(exercise).and_then(|exercise| {
            let answer = Answer::decode(exercise.exercise_type(), answer)?;
            self.evaluate(&exercise, &answer)
        });
        self.finish(exercise.exercise_type.tag(), result, exercise.explanation.as_ref())
    }

    /// Grades a raw answer to an exercise given as JSON. Records which are not
    /// exercises yield an incorrect result as well.
    pub fn grade_json(&self, exercise: &Value, answer: &Value) -> GradingResult {
        match RawExercise::deserialize(exercise) {
            Ok(exercise) => self.grade(&exercise, answer),
            Err(error) => self.finish("unknown", Err(error.into()), None),
        }
    }

    /// Grades a decoded answer to a decoded exercise.
    pub fn grade_exercise(&self, exercise: &Exercise, answer: &Answer) -> GradingResult {
        let exercise_type = exercise.exercise_type();
        debug!("grading {exercise_type} exercise");
        self.finish(exercise_type.tag(), self.evaluate(exercise, answer), exercise.explanation.as_ref())
    }

    fn finish(&self, exercise_type: &str, result: Result<GradingResult, GradingError>, explanation: Option<&String>) -> GradingResult {
        let result = result.unwrap_or_else(|error| {
            debug!("grading {exercise_type} exercise failed: {error}");
            GradingResult::from(error)
        });
        debug!("graded {exercise_type} exercise: correct={}, score={:.3}", result.is_correct, result.score);
        let explanation = explanation.filter(|_| self.config.include_explanation).cloned();
        result.with_explanation(explanation)
    }

    fn evaluate(&self, exercise: &Exercise, answer: &Answer) -> Result<GradingResult, GradingError> {
        match &exercise.kind {
            ExerciseKind::Equivalence(content) => self.grade_equivalence(&content.target_formula, answer.formula_text()?),
            ExerciseKind::MultipleChoice(content, solution) => Ok(grade_multiple_choice(content, solution, answer.selection()?)),
            ExerciseKind::SymbolArrangement(content, solution) => {
                let text = arranged_formula(content, answer)?;
                self.grade_accepted_formulas(&solution.accepted_formulas, &text, None)
            }
            ExerciseKind::Formulation(_, solution) => self.grade_accepted_formulas(&solution.accepted_formulas, answer.formula_text()?, None),
            ExerciseKind::NormalForm(content, solution) => {
                let accepted = self.normal_form_solution(&content.formula, content.target_form, solution)?;
                self.grade_accepted_formulas(&accepted, answer.formula_text()?, Some(content.target_form))
            }
            ExerciseKind::Validation(_, solution) => Ok(grade_validation(solution, answer.validity()?)),
            ExerciseKind::TruthTable(content, solution) => self.grade_truth_table(content, solution, answer.cells()?),
            ExerciseKind::IdentifyFallacy(_, solution) => Ok(grade_fallacy(solution, answer.selection()?)),
            ExerciseKind::Proof(_, solution) => Ok(grade_proof(solution, answer.proof_steps()?)),
        }
    }

    fn parse_formula(&self, field: &str, text: &str) -> Result<Formula, GradingError> {
        let formula = parse(text).map_err(|error| GradingError::syntax(field, error))?;
        self.check_variables(field, [&formula])?;
        Ok(formula)
    }

    /// Truth tables are built over the variables of all given formulas, so
    /// their union must stay within the limit.
    fn check_variables<'a>(&self, field: &str, formulas: impl IntoIterator<Item = &'a Formula>) -> Result<(), GradingError> {
        let count = variables_of_all(formulas).len();
        if count > self.config.max_variables {
            Err(GradingError::TooManyVariables { field: field.to_owned(), count, limit: self.config.max_variables })
        } else {
            Ok(())
        }
    }

    fn grade_equivalence(&self, target: &str, submitted: &str) -> Result<GradingResult, GradingError> {
        let target = self.parse_formula("the target formula", target)?;
        let submitted = self.parse_formula("your answer", submitted)?;
        self.check_variables("your answer together with the target formula", [&target, &submitted])?;
        if are_equivalent(&target, &submitted) {
            return Ok(GradingResult::correct("Correct! Your formula is equivalent to the target formula."));
        }
        let result = GradingResult::incorrect("Your formula is not equivalent to the target formula.");
        Ok(match distinguishing_assignment(&target, &submitted) {
            Some(assignment) => result.with_details(GradingDetails::Counterexample { assignment }),
            None => result,
        })
    }

    /// Accepts an answer whose normalized text equals one of the accepted
    /// formulas or which is equivalent to one of them. Accepted formulas that
    /// cannot be parsed or that exceed the variable limit together with the
    /// answer are skipped. The limit is only reported when no accepted formula
    /// could be compared at all.
    fn grade_accepted_formulas(&self, accepted: &[String], text: &str, target_form: Option<NormalForm>) -> Result<GradingResult, GradingError> {
        let submitted = self.parse_formula("your answer", text)?;
        let in_target_form = target_form.map(|form| is_in_normal_form(&submitted, form));

        let candidates: Vec<(&String, Formula)> = accepted
            .iter()
            .filter_map(|candidate| match parse(candidate) {
                Ok(formula) => Some((candidate, formula)),
                Err(error) => {
                    warn!("skipping accepted formula {candidate:?}: {error}");
                    None
                }
            })
            .collect();

        let normalized = normalize_formula_text(text);
        let mut matched = candidates.iter().map(|(candidate, _)| *candidate).find(|candidate| normalize_formula_text(candidate) == normalized);
        if matched.is_none() {
            let mut compared = false;
            let mut over_limit = None;
            for (candidate, formula) in &candidates {
                if let Err(error) = self.check_variables("your answer together with an accepted formula", [&submitted, formula]) {
                    warn!("skipping accepted formula {candidate:?}: {error}");
                    over_limit.get_or_insert(error);
                    continue;
                }
                compared = true;
                if are_equivalent(formula, &submitted) {
                    matched = Some(*candidate);
                    break;
                }
            }
            if let (false, Some(error)) = (compared, over_limit) {
                return Err(error);
            }
        }

        let details = GradingDetails::Formula { matched_formula: matched.cloned(), in_target_form };
        let result = match (matched, target_form, in_target_form) {
            (None, _, _) => GradingResult::incorrect("Your formula does not match any of the accepted formulas."),
            (Some(_), Some(form), Some(false)) => {
                GradingResult::correct(format!("Correct! Your formula is equivalent, but it is not written in {form}."))
            }
            (Some(_), _, _) => GradingResult::correct("Correct!"),
        };
        Ok(result.with_details(details))
    }

    fn normal_form_solution(&self, formula: &str, form: NormalForm, solution: &AcceptedFormulas) -> Result<Vec<String>, GradingError> {
        if !solution.accepted_formulas.is_empty() {
            return Ok(solution.accepted_formulas.clone());
        }
        let formula = self.parse_formula("the exercise formula", formula)?;
        Ok(vec![to_normal_form(&formula, form).to_string()])
    }

    fn grade_truth_table(
        &self,
        content: &TruthTableContent,
        solution: &TruthTableSolution,
        answers: &[CellAnswer],
    ) -> Result<GradingResult, GradingError> {
        let grid = match &solution.values {
            Some(values) => values.clone(),
            None => generate_truth_table(&self.parse_formula("the table formula", &content.formula)?).to_grid(),
        };
        let submitted: BTreeMap<_, _> = answers.iter().map(|cell| ((cell.row, cell.column), cell.value)).collect();

        let mut incorrect_cells = Vec::new();
        for cell in &content.hidden_cells {
            let expected = grid.get(cell.row).and_then(|row| row.get(cell.column)).ok_or_else(|| {
                GradingError::content(ExerciseType::TruthTable, format!("hidden cell ({}, {}) lies outside the table", cell.row, cell.column))
            })?;
            if submitted.get(&(cell.row, cell.column)) != Some(expected) {
                incorrect_cells.push(*cell);
            }
        }

        let total = content.hidden_cells.len();
        let correct = total - incorrect_cells.len();
        let feedback = if incorrect_cells.is_empty() {
            String::from("Correct! All cells are filled in correctly.")
        } else {
            format!("{correct} of {total} cells are correct.")
        };
        Ok(GradingResult::partial(fraction(correct, total), feedback).with_details(GradingDetails::Cells { correct, total, incorrect_cells }))
    }
}

/// Grades an answer to an exercise record with the default configuration.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::grading::{RawExercise, grade};
/// # use serde_json::json;
/// let exercise: RawExercise = serde_json::from_value(json!({
///     "type": "EQUIVALENCE",
///     "content": {"targetFormula": "~(P & Q)"},
///     "solution": {}
/// }))
/// .unwrap();
///
/// assert!(grade(&exercise, &json!("~P | ~Q")).is_correct);
/// assert!(!grade(&exercise, &json!("~P & ~Q")).is_correct);
/// assert!(grade(&exercise, &json!("~P |")).feedback.starts_with("syntax error in your answer"));
/// ```
pub fn grade(exercise: &RawExercise, answer: &Value) -> GradingResult {
    Grader::default().grade(exercise, answer)
}

fn grade_multiple_choice(content: &MultipleChoiceContent, solution: &MultipleChoiceSolution, selection: &[String]) -> GradingResult {
    let selected: BTreeSet<&String> = selection.iter().collect();
    let correct: BTreeSet<&String> = solution.correct_option_ids.iter().collect();
    let correct_selected = selected.intersection(&correct).count();
    let incorrect_selected = selected.len() - correct_selected;
    let total_correct = correct.len();
    let details = GradingDetails::Selection { correct_selected, incorrect_selected, total_correct };

    let result = if correct_selected == total_correct && incorrect_selected == 0 {
        GradingResult::correct("Correct!")
    } else if content.allow_multiple {
        let score = fraction(correct_selected.saturating_sub(incorrect_selected), total_correct);
        GradingResult::partial(
            score,
            format!("You selected {correct_selected} of {total_correct} correct options and {incorrect_selected} incorrect ones."),
        )
    } else {
        GradingResult::incorrect("This is not the correct option.")
    };
    result.with_details(details)
}

/// The symbols are joined with spaces, so adjacent atoms stay apart.
fn arranged_formula(content: &SymbolArrangementContent, answer: &Answer) -> Result<String, GradingError> {
    let symbols: Vec<&str> = match answer {
        Answer::Symbols(symbols) => symbols.iter().map(String::as_str).collect(),
        _ => {
            let text = answer.formula_text()?;
            return match find_foreign_symbol(text) {
                Some(symbol) => Err(GradingError::UnsupportedSymbol { symbol: symbol.symbol.to_owned(), system: symbol.system }),
                None => Ok(text.to_owned()),
            };
        }
    };
    for symbol in &symbols {
        if let Some(foreign) = foreign_symbol(symbol) {
            return Err(GradingError::UnsupportedSymbol { symbol: foreign.symbol.to_owned(), system: foreign.system });
        }
        if !content.available_symbols.is_empty() && !content.available_symbols.iter().any(|available| available.as_str() == *symbol) {
            return Err(GradingError::answer(format!("only the available symbols, but {symbol:?} is not one of them")));
        }
    }
    Ok(symbols.join(" "))
}

fn grade_validation(solution: &ValidationSolution, submitted: bool) -> GradingResult {
    let verdict = if solution.is_valid { "valid" } else { "invalid" };
    let result = if submitted == solution.is_valid {
        GradingResult::correct(format!("Correct! The argument is {verdict}."))
    } else {
        GradingResult::incorrect(format!("Incorrect. The argument is {verdict}."))
    };
    result.with_details(GradingDetails::Validity { is_valid: solution.is_valid, counterexample: solution.counterexample.clone() })
}

fn grade_fallacy(solution: &FallacySolution, selection: &[String]) -> GradingResult {
    let is_correct = selection == std::slice::from_ref(&solution.fallacy_id);
    let correct_selected = usize::from(is_correct);
    let details = GradingDetails::Selection { correct_selected, incorrect_selected: selection.len() - correct_selected, total_correct: 1 };
    let result = if is_correct {
        GradingResult::correct("Correct! You identified the fallacy.")
    } else {
        GradingResult::incorrect("This is not the fallacy committed by the argument.")
    };
    result.with_details(details)
}

/// Proofs are not checked against inference rules. The formulas of the steps
/// are checked for syntax errors only and the proof is left to the teacher.
fn grade_proof(solution: &ProofSolution, steps: &[ProofStep]) -> GradingResult {
    let invalid_steps: Vec<usize> = steps.iter().enumerate().filter(|(_, step)| parse(&step.formula).is_err()).map(|(i, _)| i + 1).collect();
    let feedback = if invalid_steps.is_empty() {
        String::from("Your proof has been submitted and will be reviewed by your teacher.")
    } else {
        format!(
            "Your proof has been submitted and will be reviewed by your teacher. The formulas of steps {} cannot be parsed.",
            invalid_steps.iter().join(", ")
        )
    };
    GradingResult::incorrect(feedback).with_details(GradingDetails::Proof {
        submitted_steps: steps.len(),
        reference_steps: solution.steps.len(),
        invalid_steps,
    })
}

#[allow(clippy::cast_precision_loss)]
fn fraction(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 { 0.0 } else { numerator as f64 / denominator as f64 }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::datastructures::Assignment;
    use crate::grading::CellPosition;

    fn exercise(value: Value) -> RawExercise {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_equivalence() {
        let exercise = exercise(json!({"type": "EQUIVALENCE", "content": {"targetFormula": "P -> Q"}}));
        let result = grade(&exercise, &json!("~P | Q"));
        assert!(result.is_correct);
        assert_eq!(result.score, 1.0);
        assert!(grade(&exercise, &json!("~Q -> ~P")).is_correct);

        let result = grade(&exercise, &json!("Q -> P"));
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
        let expected = Assignment::from_pairs([("P", true), ("Q", false)]);
        assert_eq!(result.details, Some(GradingDetails::Counterexample { assignment: expected }));
    }

    #[test]
    fn test_equivalence_with_syntax_errors() {
        let exercise = exercise(json!({"type": "EQUIVALENCE", "content": {"targetFormula": "P -> Q"}}));
        let result = grade(&exercise, &json!("P ->"));
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
        assert!(result.feedback.starts_with("syntax error in your answer"));

        let broken = self::exercise(json!({"type": "EQUIVALENCE", "content": {"targetFormula": "P -> (Q"}}));
        let result = grade(&broken, &json!("P"));
        assert!(result.feedback.starts_with("syntax error in the target formula"));
    }

    #[test]
    fn test_variable_limit() {
        let exercise = exercise(json!({"type": "EQUIVALENCE", "content": {"targetFormula": "a & b"}}));
        let grader = Grader::new(GraderConfig::default().max_variables(3));
        assert!(grader.grade(&exercise, &json!("b & a")).is_correct);
        let result = grader.grade(&exercise, &json!("a & b & c & d"));
        assert!(!result.is_correct);
        assert_eq!(result.feedback, "your answer has 4 variables, but at most 3 are supported");
        let result = grader.grade(&exercise, &json!("c & d"));
        assert_eq!(result.feedback, "your answer together with the target formula has 4 variables, but at most 3 are supported");
    }

    #[test]
    fn test_multiple_choice_single() {
        let exercise = exercise(json!({
            "type": "MULTIPLE_CHOICE",
            "content": {"question": "Which formula is a tautology?", "options": [{"id": "a", "text": "P | ~P"}, {"id": "b", "text": "P & ~P"}]},
            "solution": {"correctOptionIds": ["a"]}
        }));
        assert!(grade(&exercise, &json!("a")).is_correct);
        assert!(grade(&exercise, &json!(["a"])).is_correct);
        let result = grade(&exercise, &json!("b"));
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
        assert!(!grade(&exercise, &json!(["a", "b"])).is_correct);
        assert_eq!(grade(&exercise, &json!(["a", "b"])).score, 0.0);
    }

    #[test]
    fn test_multiple_choice_partial_credit() {
        let exercise = exercise(json!({
            "type": "MULTIPLE_CHOICE",
            "content": {"options": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}, {"id": "e"}], "allowMultiple": true},
            "solution": {"correctOptionIds": ["a", "b", "c"]}
        }));
        let result = grade(&exercise, &json!(["a", "b", "d"]));
        assert!(!result.is_correct);
        assert!((result.score - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.details, Some(GradingDetails::Selection { correct_selected: 2, incorrect_selected: 1, total_correct: 3 }));

        assert!(grade(&exercise, &json!(["c", "b", "a"])).is_correct);
        assert_eq!(grade(&exercise, &json!(["a", "d", "e"])).score, 0.0);
        assert!((grade(&exercise, &json!(["a", "b"])).score - 2.0 / 3.0).abs() < 1e-9);
        assert!((grade(&exercise, &json!(["a", "a", "b"])).score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_formulation() {
        let exercise = exercise(json!({
            "type": "FORMULATION",
            "content": {"statement": "If it rains, the street is wet."},
            "solution": {"acceptedFormulas": ["R -> ", "R -> W"]}
        }));
        let result = grade(&exercise, &json!("R=>W"));
        assert!(result.is_correct);
        assert_eq!(result.details, Some(GradingDetails::Formula { matched_formula: Some(String::from("R -> W")), in_target_form: None }));
        assert!(grade(&exercise, &json!("~W -> ~R")).is_correct);
        assert!(!grade(&exercise, &json!("W -> R")).is_correct);
        assert!(grade(&exercise, &json!("W ->")).feedback.starts_with("syntax error"));
    }

    #[test]
    fn test_formulation_with_broken_accepted_formula() {
        let exercise = exercise(json!({
            "type": "FORMULATION",
            "content": {"statement": "If it rains, the street is wet."},
            "solution": {"acceptedFormulas": ["R -> ", "R -> W"]}
        }));
        let result = grade(&exercise, &json!("R->"));
        assert!(!result.is_correct);
        assert!(result.feedback.starts_with("syntax error"), "{}", result.feedback);
        assert!(!grade(&exercise, &json!("R -> ")).is_correct);
    }

    #[test]
    fn test_formulation_skips_accepted_formulas_over_the_limit() {
        let long_conjunction = (0..16).map(|i| format!("v{i}")).join(" & ");
        let exercise = exercise(json!({
            "type": "FORMULATION",
            "content": {"statement": "It is sunny."},
            "solution": {"acceptedFormulas": [&long_conjunction, "P"]}
        }));
        let result = grade(&exercise, &json!("P & P"));
        assert!(result.is_correct, "{}", result.feedback);
        assert_eq!(result.details, Some(GradingDetails::Formula { matched_formula: Some(String::from("P")), in_target_form: None }));

        let exercise = self::exercise(json!({
            "type": "FORMULATION",
            "content": {"statement": "All sixteen hold."},
            "solution": {"acceptedFormulas": [long_conjunction]}
        }));
        let result = grade(&exercise, &json!("P"));
        assert!(!result.is_correct);
        assert!(result.feedback.contains("variables, but at most"), "{}", result.feedback);
    }

    #[test]
    fn test_symbol_arrangement() {
        let exercise = exercise(json!({
            "type": "SYMBOL_ARRANGEMENT",
            "content": {"availableSymbols": ["P", "Q", "∧", "¬", "(", ")"]},
            "solution": {"acceptedFormulas": ["¬(P ∧ Q)"]}
        }));
        assert!(grade(&exercise, &json!(["¬", "(", "P", "∧", "Q", ")"])).is_correct);
        assert!(!grade(&exercise, &json!(["¬", "P", "∧", "Q"])).is_correct);
        assert!(grade(&exercise, &json!("~(Q & P)")).is_correct);

        let exercise = self::exercise(json!({
            "type": "SYMBOL_ARRANGEMENT",
            "content": {"availableSymbols": ["P", "Q", "→", "↔"]},
            "solution": {"acceptedFormulas": ["P -> Q", "P <-> Q"]}
        }));
        assert!(grade(&exercise, &json!("P => Q")).is_correct);
        assert!(grade(&exercise, &json!("P <=> Q")).is_correct);
        assert!(!grade(&exercise, &json!("Q => P")).is_correct);
        let result = grade(&exercise, &json!("P = Q"));
        assert!(result.feedback.contains("="), "{}", result.feedback);
        let exercise = self::exercise(json!({
            "type": "SYMBOL_ARRANGEMENT",
            "content": {"availableSymbols": ["¬", "(", "P", "∧", "Q", ")"]},
            "solution": {"acceptedFormulas": ["¬(P ∧ Q)"]}
        }));

        let result = grade(&exercise, &json!(["P", "∨", "Q"]));
        assert!(result.feedback.contains("\"∨\" is not one of them"));
        let result = grade(&exercise, &json!(["□", "P"]));
        assert_eq!(result.feedback, "the symbol □ belongs to modal logic and cannot be evaluated");
        let result = grade(&exercise, &json!("∀P"));
        assert_eq!(result.feedback, "the symbol ∀ belongs to first-order logic and cannot be evaluated");
    }

    #[test]
    fn test_normal_form() {
        let exercise = exercise(json!({
            "type": "NORMAL_FORM",
            "content": {"formula": "P -> (Q & R)", "targetForm": "CNF"},
            "solution": {"acceptedFormulas": []}
        }));
        let result = grade(&exercise, &json!("(~P | Q) & (~P | R)"));
        assert!(result.is_correct);
        assert_eq!(
            result.details,
            Some(GradingDetails::Formula { matched_formula: Some(String::from("(¬P ∨ Q) ∧ (¬P ∨ R)")), in_target_form: Some(true) })
        );

        let result = grade(&exercise, &json!("~P | Q & R"));
        assert!(result.is_correct);
        assert_eq!(result.feedback, "Correct! Your formula is equivalent, but it is not written in CNF.");
        assert!(matches!(result.details, Some(GradingDetails::Formula { in_target_form: Some(false), .. })));

        assert!(!grade(&exercise, &json!("~P | Q")).is_correct);
    }

    #[test]
    fn test_validation() {
        let exercise = exercise(json!({
            "type": "VALIDATION",
            "content": {"premises": ["P -> Q", "Q"], "conclusion": "P"},
            "solution": {"isValid": false, "counterexample": {"P": false, "Q": true}}
        }));
        let result = grade(&exercise, &json!(false));
        assert!(result.is_correct);
        assert_eq!(result.feedback, "Correct! The argument is invalid.");
        let result = grade(&exercise, &json!(true));
        assert!(!result.is_correct);
        assert_eq!(
            result.details,
            Some(GradingDetails::Validity { is_valid: false, counterexample: Some(Assignment::from_pairs([("P", false), ("Q", true)])) })
        );
    }

    #[test]
    fn test_truth_table() {
        let exercise = exercise(json!({
            "type": "TRUTH_TABLE",
            "content": {"formula": "P -> Q", "hiddenCells": [{"row": 0, "column": 2}, {"row": 1, "column": 2}, {"row": 3, "column": 0}]}
        }));
        let answer = json!([
            {"row": 0, "column": 2, "value": true},
            {"row": 1, "column": 2, "value": false},
            {"row": 3, "column": 0, "value": false}
        ]);
        let result = grade(&exercise, &answer);
        assert!(result.is_correct);
        assert_eq!(result.score, 1.0);

        let answer = json!([{"row": 0, "column": 2, "value": true}, {"row": 1, "column": 2, "value": true}]);
        let result = grade(&exercise, &answer);
        assert!(!result.is_correct);
        assert!((result.score - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            result.details,
            Some(GradingDetails::Cells {
                correct: 1,
                total: 3,
                incorrect_cells: vec![CellPosition { row: 1, column: 2 }, CellPosition { row: 3, column: 0 }]
            })
        );
    }

    #[test]
    fn test_truth_table_with_stored_values() {
        let exercise = exercise(json!({
            "type": "TRUTH_TABLE",
            "content": {"formula": "P", "hiddenCells": [{"row": 0, "column": 1}, {"row": 5, "column": 1}]},
            "solution": {"values": [[true, true], [false, false]]}
        }));
        let result = grade(&exercise, &json!([{"row": 0, "column": 1, "value": true}]));
        assert!(!result.is_correct);
        assert_eq!(result.feedback, "invalid content of TRUTH_TABLE exercise: hidden cell (5, 1) lies outside the table");
    }

    #[test]
    fn test_identify_fallacy() {
        let exercise = exercise(json!({
            "type": "IDENTIFY_FALLACY",
            "content": {"argument": "If P then Q. Q. So P.", "options": [{"id": "affirming_consequent"}, {"id": "denying_antecedent"}]},
            "solution": {"fallacyId": "affirming_consequent"}
        }));
        assert!(grade(&exercise, &json!("affirming_consequent")).is_correct);
        let result = grade(&exercise, &json!("denying_antecedent"));
        assert!(!result.is_correct);
        assert_eq!(result.details, Some(GradingDetails::Selection { correct_selected: 0, incorrect_selected: 1, total_correct: 1 }));
    }

    #[test]
    fn test_proof() {
        let exercise = exercise(json!({
            "type": "PROOF",
            "content": {"premises": ["P -> Q", "P"], "conclusion": "Q"},
            "solution": {"steps": [
                {"formula": "P -> Q", "rule": "premise"},
                {"formula": "P", "rule": "premise"},
                {"formula": "Q", "rule": "modus ponens", "references": [1, 2]}
            ]}
        }));
        let answer = json!([{"formula": "P -> Q", "rule": "premise"}, {"formula": "Q &", "rule": "modus ponens", "references": [1]}]);
        let result = grade(&exercise, &answer);
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
        assert!(result.feedback.contains("reviewed by your teacher"));
        assert!(result.feedback.ends_with("steps 2 cannot be parsed."));
        assert_eq!(result.details, Some(GradingDetails::Proof { submitted_steps: 2, reference_steps: 3, invalid_steps: vec![2] }));
    }

    #[test]
    fn test_invalid_records() {
        let grader = Grader::default();
        let result = grader.grade_json(&json!({"type": "ESSAY", "content": {}}), &json!("text"));
        assert!(!result.is_correct);
        assert!(result.feedback.starts_with("invalid exercise"));
        let result = grader.grade_json(&json!({"type": "VALIDATION", "content": {"conclusion": "P"}, "solution": {}}), &json!(true));
        assert!(result.feedback.starts_with("invalid solution of VALIDATION exercise"));
    }

    #[test]
    fn test_explanation() {
        let exercise = exercise(json!({
            "type": "VALIDATION",
            "content": {"conclusion": "P | ~P"},
            "solution": {"isValid": true},
            "explanation": "Excluded middle."
        }));
        assert_eq!(grade(&exercise, &json!(false)).explanation.as_deref(), Some("Excluded middle."));
        let grader = Grader::new(GraderConfig::default().include_explanation(false));
        assert_eq!(grader.grade(&exercise, &json!(true)).explanation, None);
    }

    #[test]
    fn test_grade_decoded() {
        let exercise = Exercise::from_json(&json!({"type": "EQUIVALENCE", "content": {"targetFormula": "P"}})).unwrap();
        let grader = Grader::default();
        assert!(grader.grade_exercise(&exercise, &Answer::Formula(String::from("P & P"))).is_correct);
        assert!(!grader.grade_exercise(&exercise, &Answer::Formula(String::from("P & Q"))).is_correct);
        assert_eq!(grader.grade_exercise(&exercise, &Answer::Validity(true)).feedback, "invalid answer: expected formula text");
    }
}
