use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::formulas::Formula;
use crate::operations::predicates::{is_cnf, is_dnf, is_nnf};

use super::{to_cnf, to_dnf, to_nnf};

/// The normal forms a formula can be converted to.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalForm {
    /// Negation normal form
    Nnf,
    /// Conjunctive normal form
    Cnf,
    /// Disjunctive normal form
    Dnf,
}

impl NormalForm {
    /// Converts `formula` into this normal form.
    pub fn transform(self, formula: &Formula) -> Formula {
        match self {
            Self::Nnf => to_nnf(formula),
            Self::Cnf => to_cnf(formula),
            Self::Dnf => to_dnf(formula),
        }
    }

    /// Returns `true` if `formula` is already in this normal form.
    pub fn holds_for(self, formula: &Formula) -> bool {
        match self {
            Self::Nnf => is_nnf(formula),
            Self::Cnf => is_cnf(formula),
            Self::Dnf => is_dnf(formula),
        }
    }
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Nnf => "NNF",
            Self::Cnf => "CNF",
            Self::Dnf => "DNF",
        };
        f.write_str(name)
    }
}

/// Converts `formula` into the given normal form.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::transformations::{NormalForm, to_normal_form};
/// # use logic_tutor::parser::parse;
/// let formula = parse("~(p | q)").unwrap();
///
/// assert_eq!(to_normal_form(&formula, NormalForm::Nnf).to_string(), "¬p ∧ ¬q");
/// ```
pub fn to_normal_form(formula: &Formula, form: NormalForm) -> Formula {
    form.transform(formula)
}

/// Returns `true` if `formula` is in the given normal form.
pub fn is_in_normal_form(formula: &Formula, form: NormalForm) -> bool {
    form.holds_for(formula)
}
