use fastrand::Rng;

use crate::formulas::Formula;

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed -- use a value `!= 0` to get deterministic results
/// - the variables -- this list of variables will be used. The probabilities of
///   being chosen are the same for all variables.
/// - weights for different formula types, defining how often a formula type is
///   generated compared to other types.
/// - maximum numbers of operands for conjunctions and disjunctions. Longer
///   chains are folded to the left, the same way the parser groups them.
///
/// Note that the weights can only be applied for inner nodes of the generated
/// formula, since the leaves of a formula are **always** literals. So the
/// weight of literals will effectively be higher and the weights of all other
/// formula types will be lower.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) weight_variable: f32,
    pub(crate) weight_negative_literal: f32,
    pub(crate) weight_or: f32,
    pub(crate) weight_and: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_impl: f32,
    pub(crate) weight_equiv: f32,
    pub(crate) maximum_operands_and: u32,
    pub(crate) maximum_operands_or: u32,
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given variables and with default
    /// settings.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![String::from("P"), String::from("Q")];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub const fn default_with_variables(variables: Vec<String>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            weight_variable: 1.0,
            weight_negative_literal: 1.0,
            weight_or: 10.0,
            weight_and: 10.0,
            weight_not: 3.0,
            weight_impl: 5.0,
            weight_equiv: 3.0,
            maximum_operands_and: 3,
            maximum_operands_or: 3,
        }
    }

    /// Builds a basic configuration with default settings. Additionally, it
    /// generates `num_vars` variables `v0`, `v1`, ... and adds them to the
    /// configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(4);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        Self::default_with_variables((0..num_vars).map(|n| format!("v{n}")).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(3)
    ///         // ...
    ///         .seed(24)
    ///         // ...
    ///         ;
    /// ```
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the relative weight of a variable/positive literal.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negative literal.
    #[must_use]
    pub const fn weight_negative_literal(mut self, weight_negative_literal: f32) -> Self {
        self.weight_negative_literal = weight_negative_literal;
        self
    }

    /// Sets the relative weight of a disjunction.
    #[must_use]
    pub const fn weight_or(mut self, weight_or: f32) -> Self {
        self.weight_or = weight_or;
        self
    }

    /// Sets the relative weight of a conjunction.
    #[must_use]
    pub const fn weight_and(mut self, weight_and: f32) -> Self {
        self.weight_and = weight_and;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of an implication.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(3)
    ///         // ...
    ///         .weight_impl(2.0)
    ///         // ...
    ///         ;
    /// ```
    #[must_use]
    pub const fn weight_impl(mut self, weight_impl: f32) -> Self {
        self.weight_impl = weight_impl;
        self
    }

    /// Sets the relative weight of a biconditional.
    #[must_use]
    pub const fn weight_equiv(mut self, weight_equiv: f32) -> Self {
        self.weight_equiv = weight_equiv;
        self
    }

    /// Sets the maximum number of operands in a chain of conjunctions.
    #[must_use]
    pub const fn maximum_operands_and(mut self, maximum_operands_and: u32) -> Self {
        self.maximum_operands_and = maximum_operands_and;
        self
    }

    /// Sets the maximum number of operands in a chain of disjunctions.
    #[must_use]
    pub const fn maximum_operands_or(mut self, maximum_operands_or: u32) -> Self {
        self.maximum_operands_or = maximum_operands_or;
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_variable
            + self.weight_negative_literal
            + self.weight_or
            + self.weight_and
            + self.weight_not
            + self.weight_impl
            + self.weight_equiv;
        let literal = (self.weight_variable + self.weight_negative_literal) / total;
        let or = literal + self.weight_or / total;
        let and = or + self.weight_and / total;
        let not = and + self.weight_not / total;
        let implication = not + self.weight_impl / total;
        let phase = self.weight_variable / (self.weight_variable + self.weight_negative_literal);
        FormulaTypeProbabilities { literal, or, and, not, implication, phase }
    }
}

struct FormulaTypeProbabilities {
    literal: f32,
    or: f32,
    and: f32,
    not: f32,
    implication: f32,
    phase: f32,
}

/// A generator for random formulas.
///
/// The formula types included in the generated formulas can be configured with
/// a [`FormulaRandomizerConfig`]. Every formula built with a maximal depth `d`
/// has a [`formula_depth`](crate::operations::functions::formula_depth) of at
/// most `d`.
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    ///
    /// # Panics
    ///
    /// Panics if the configuration contains no variables.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_num_vars(5);
    /// let mut randomizer = FormulaRandomizer::new(config);
    /// ```
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        assert!(!config.variables.is_empty(), "a formula randomizer needs at least one variable");
        let random = if config.seed == 0 { Rng::new() } else { Rng::with_seed(config.seed) };
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random, formula_probs }
    }

    /// Returns a random name of a variable as a string.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_variables(vec![String::from("P"), String::from("Q")]);
    /// let mut randomizer = FormulaRandomizer::new(config);
    ///
    /// let variable = randomizer.var_string(); // "P" or "Q"
    /// ```
    pub fn var_string(&mut self) -> &str {
        &self.config.variables[self.random.usize(0..self.config.variables.len())]
    }

    /// Returns a random variable.
    pub fn variable(&mut self) -> Formula {
        Formula::atom(self.var_string())
    }

    /// Returns a random literal.
    ///
    /// The probability of whether it is positive or negative depends on the
    /// configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_variables(vec![String::from("P"), String::from("Q")]);
    /// let mut randomizer = FormulaRandomizer::new(config);
    ///
    /// let literal = randomizer.literal(); // P, Q, ¬P, or ¬Q
    /// assert!(literal.is_literal());
    /// ```
    pub fn literal(&mut self) -> Formula {
        let phase = self.random.f32() < self.formula_probs.phase;
        let variable = self.variable();
        if phase { variable } else { Formula::negation(variable) }
    }

    /// Returns a random negation with a given maximal depth.
    pub fn not(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            Formula::negation(self.formula(max_depth - 1))
        }
    }

    /// Returns a random implication with a given maximal depth.
    pub fn implication(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Formula::implication(left, right)
        }
    }

    /// Returns a random biconditional with a given maximal depth.
    pub fn equivalence(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Formula::equivalence(left, right)
        }
    }

    /// Returns a random conjunction with a given maximal depth.
    ///
    /// Chains of more than two operands are folded to the left, so they only
    /// add to the depth if `max_depth` leaves room for it.
    pub fn and(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let num_operands = self.num_operands(self.config.maximum_operands_and, max_depth);
            let first = self.formula(max_depth - (num_operands - 1));
            (1..num_operands).fold(first, |left, remaining| {
                let right = self.formula(max_depth - (num_operands - remaining));
                Formula::and(left, right)
            })
        }
    }

    /// Returns a random disjunction with a given maximal depth.
    pub fn or(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let num_operands = self.num_operands(self.config.maximum_operands_or, max_depth);
            let first = self.formula(max_depth - (num_operands - 1));
            (1..num_operands).fold(first, |left, remaining| {
                let right = self.formula(max_depth - (num_operands - remaining));
                Formula::or(left, right)
            })
        }
    }

    /// Returns a random formula with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logic_tutor::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # use logic_tutor::operations::functions::formula_depth;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(4);
    /// let mut randomizer = FormulaRandomizer::new(config);
    ///
    /// let formula = randomizer.formula(3);
    /// assert!(formula_depth(&formula) <= 3);
    /// ```
    pub fn formula(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let n = self.random.f32();
            if n < self.formula_probs.literal {
                self.literal()
            } else if n < self.formula_probs.or {
                self.or(max_depth)
            } else if n < self.formula_probs.and {
                self.and(max_depth)
            } else if n < self.formula_probs.not {
                self.not(max_depth)
            } else if n < self.formula_probs.implication {
                self.implication(max_depth)
            } else {
                self.equivalence(max_depth)
            }
        }
    }

    /// Returns a list of `num_formulas` random formulas with a given maximal
    /// depth.
    pub fn formulas(&mut self, num_formulas: u32, max_depth: u32) -> Vec<Formula> {
        (0..num_formulas).map(|_| self.formula(max_depth)).collect()
    }

    /// A chain of `n` operands folded to the left is `n - 1` levels deep, so
    /// the chain length is bounded by the depth still available.
    fn num_operands(&mut self, maximum: u32, max_depth: u32) -> u32 {
        let upper = maximum.min(max_depth + 1).max(2);
        self.random.u32(2..=upper)
    }
}
