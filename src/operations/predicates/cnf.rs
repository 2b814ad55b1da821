use crate::formulas::Formula;

/// A predicate indicating whether a formula is in conjunctive normal form
/// (CNF), i.e. a conjunction of clauses where each clause is a disjunction of
/// literals. A single clause and a single literal are in CNF as well.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::operations::predicates::is_cnf;
/// # use logic_tutor::parser::parse;
/// assert!(is_cnf(&parse("(a | ~b) & c").unwrap()));
/// assert!(is_cnf(&parse("a | b").unwrap()));
/// assert!(!is_cnf(&parse("a & b | c").unwrap()));
/// ```
pub fn is_cnf(formula: &Formula) -> bool {
    match formula {
        Formula::Binary(_, left, right) if formula.is_and() => is_cnf(left) && is_cnf(right),
        _ => is_clause(formula),
    }
}

/// A predicate indicating whether a formula is a clause, i.e. a disjunction of
/// literals.
pub fn is_clause(formula: &Formula) -> bool {
    match formula {
        Formula::Binary(_, left, right) if formula.is_or() => is_clause(left) && is_clause(right),
        _ => formula.is_literal(),
    }
}
