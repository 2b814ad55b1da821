use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// An `Assignment` maps variable names to truth values.
///
/// Names are unique and kept in lexicographic order. Variables which are not
/// assigned evaluate to `false` (see [`Assignment::value`]), so an assignment
/// covering only some variables of a formula is never an error.
///
/// An assignment serializes to a JSON object, e.g. `{"P": true, "Q": false}`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::datastructures::Assignment;
/// let mut assignment = Assignment::from_pairs([("P", true), ("Q", false)]);
/// assignment.assign("R", true);
///
/// assert!(assignment.value("P"));
/// assert!(!assignment.value("Q"));
/// assert!(!assignment.value("S"));
/// assert_eq!(assignment.get("S"), None);
/// assert_eq!(assignment.len(), 3);
/// ```
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    /// Creates a new, empty assignment.
    pub const fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Creates a new assignment from `(name, value)` pairs. If a name occurs
    /// more than once, the last value wins.
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, bool)>, {
        pairs.into_iter().collect()
    }

    /// Assigns `value` to the variable `name`, replacing a previous value.
    pub fn assign<S: Into<String>>(&mut self, name: S, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Returns the value of the variable `name`, or `false` if the variable is
    /// not assigned.
    pub fn value(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }

    /// Returns the value of the variable `name` if it is assigned.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Returns `true` if the variable `name` is assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all assigned variables and their values in lexicographic
    /// order of the names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Returns the names of all variables assigned to `true`.
    pub fn positive_variables(&self) -> Vec<&str> {
        self.iter().filter(|&(_, value)| value).map(|(name, _)| name).collect()
    }

    /// Returns the names of all variables assigned to `false`.
    pub fn negative_variables(&self) -> Vec<&str> {
        self.iter().filter(|&(_, value)| !value).map(|(name, _)| name).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self { values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}

impl IntoIterator for Assignment {
    type Item = (String, bool);
    type IntoIter = btree_map::IntoIter<String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
