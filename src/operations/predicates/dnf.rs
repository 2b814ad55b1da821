use crate::formulas::Formula;

/// A predicate indicating whether a formula is in disjunctive normal form
/// (DNF), i.e. a disjunction of terms where each term is a conjunction of
/// literals. A single term and a single literal are in DNF as well.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::is_dnf;
/// # use logic_tutor::parser::parse;
/// assert!(is_dnf(&parse("a & ~b | c").unwrap()));
/// assert!(is_dnf(&parse("a & b").unwrap()));
/// assert!(!is_dnf(&parse("(a | b) & c").unwrap()));
/// ```
pub fn is_dnf(formula: &Formula) -> bool {
    match formula {
        Formula::Binary(_, left, right) if formula.is_or() => is_dnf(left) && is_dnf(right),
        _ => is_term(formula),
    }
}

/// A predicate indicating whether a formula is a term, i.e. a conjunction of
/// literals.
pub fn is_term(formula: &Formula) -> bool {
    match formula {
        Formula::Binary(_, left, right) if formula.is_and() => is_term(left) && is_term(right),
        _ => formula.is_literal(),
    }
}
