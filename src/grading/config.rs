/// The default limit of distinct variables in a graded formula.
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// The configuration of a [`Grader`](super::Grader).
///
/// - `max_variables` is the maximal number of distinct variables of a formula
///   (or of a pair of compared formulas) before truth tables are built for it.
///   Truth tables grow exponentially, so larger formulas are rejected.
/// - `include_explanation` controls whether the teacher's explanation of an
///   exercise is attached to the results.
///
/// # Example
///
/// Basic usage:
/// ```
/// # use logic_tutor::grading::GraderConfig;
/// let config = GraderConfig::default().max_variables(8).include_explanation(false);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GraderConfig {
    pub(crate) max_variables: usize,
    pub(crate) include_explanation: bool,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self { max_variables: DEFAULT_MAX_VARIABLES, include_explanation: true }
    }
}

impl GraderConfig {
    /// Sets the maximal number of distinct variables of a graded formula.
    #[must_use]
    pub const fn max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    /// Sets whether the exercise's explanation is attached to results.
    #[must_use]
    pub const fn include_explanation(mut self, include_explanation: bool) -> Self {
        self.include_explanation = include_explanation;
        self
    }
}
