#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Assignments and truth tables.
pub mod datastructures;
/// The formula tree and its printer.
pub mod formulas;
/// Grading of answers to formula-based exercises.
pub mod grading;
/// Functions, Predicates, and Transformations for formulas.
pub mod operations;
/// Parser for formula text.
pub mod parser;
/// The catalog of logic symbols shown in exercises.
pub mod symbols;
/// Additional utility.
pub mod util;
