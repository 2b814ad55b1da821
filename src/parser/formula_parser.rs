use itertools::Itertools;
use pest::Parser;
use pest::error::{Error, ErrorVariant, InputLocation};
use pest::iterators::Pair;

use crate::formulas::{BinaryOperator, Formula};

use super::token::{SyntaxError, SyntaxErrorKind, TokenKind};

#[derive(Parser)]
#[grammar = "parser/propositional.pest"]
struct PropositionalParser;

/// Parses formula text into a [`Formula`].
///
/// Connectives can be written in ASCII or Unicode: `~ ! ¬` (not),
/// `& ^ ∧` (and), `| ∨` (or), `-> => →` (implies), `<-> <=> ↔` (iff).
/// From loosest to tightest binding, `↔` is left-associative, `→` is
/// right-associative, `∨` and `∧` are left-associative, and `¬` is a prefix
/// operator. Atoms start with a letter followed by letters, digits or
/// underscores.
///
/// If the text is malformed, a [`SyntaxError`] with the type and character
/// position of the offending token is returned.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::formulas::Formula;
/// # use logic_tutor::parser::{TokenKind, parse};
/// let formula = parse("A -> B -> C").unwrap();
/// let expected = Formula::implication(
///     Formula::atom("A"),
///     Formula::implication(Formula::atom("B"), Formula::atom("C")),
/// );
/// assert_eq!(formula, expected);
///
/// let error = parse("P ->").unwrap_err();
/// assert_eq!(error.token, TokenKind::EndOfInput);
/// assert_eq!(error.position, 4);
/// ```
pub fn parse<I: AsRef<str>>(input: I) -> Result<Formula, SyntaxError> {
    let input = input.as_ref();
    let mut parsed = PropositionalParser::parse(Rule::formula, input).map_err(|error| syntax_error(input, &error))?;
    match parsed.next().and_then(|formula| formula.into_inner().next()) {
        Some(equivalence) => Ok(build(equivalence)),
        None => unreachable!("a parsed formula always contains an equivalence"),
    }
}

fn build(pair: Pair<Rule>) -> Formula {
    match pair.as_rule() {
        Rule::equivalence => fold_left(BinaryOperator::Iff, pair),
        Rule::implication => fold_right(BinaryOperator::Implies, pair),
        Rule::disjunction => fold_left(BinaryOperator::Or, pair),
        Rule::conjunction => fold_left(BinaryOperator::And, pair),
        Rule::negation => {
            let operand = operands(pair).next().map(build);
            Formula::negation(operand.unwrap_or_else(|| unreachable!("a negation always has an operand")))
        }
        Rule::atom => Formula::atom(pair.as_str()),
        rule => unreachable!("rule {rule:?} cannot be an operand"),
    }
}

const fn is_operand(rule: Rule) -> bool {
    matches!(rule, Rule::equivalence | Rule::implication | Rule::disjunction | Rule::conjunction | Rule::negation | Rule::atom)
}

fn operands<'i>(pair: Pair<'i, Rule>) -> impl DoubleEndedIterator<Item = Pair<'i, Rule>> {
    pair.into_inner().filter(|inner| is_operand(inner.as_rule()))
}

fn fold_left(operator: BinaryOperator, pair: Pair<Rule>) -> Formula {
    operands(pair)
        .map(build)
        .reduce(|left, right| Formula::binary(operator, left, right))
        .unwrap_or_else(|| unreachable!("every level has at least one operand"))
}

fn fold_right(operator: BinaryOperator, pair: Pair<Rule>) -> Formula {
    operands(pair)
        .rev()
        .map(build)
        .reduce(|right, left| Formula::binary(operator, left, right))
        .unwrap_or_else(|| unreachable!("every level has at least one operand"))
}

fn syntax_error(input: &str, error: &Error<Rule>) -> SyntaxError {
    let offset = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let expected: &[Rule] = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } => positives.as_slice(),
        ErrorVariant::CustomError { .. } => &[],
    };
    let (token, start) = TokenKind::scan(input, offset);
    let position = input.get(..start).map_or(start, |prefix| prefix.chars().count());
    let expectation = describe_expected(expected);

    let (kind, message) = match token {
        TokenKind::Unknown(_) => (SyntaxErrorKind::UnknownCharacter, token.to_string()),
        TokenKind::EndOfInput if expected.contains(&Rule::close_paren) => {
            (SyntaxErrorKind::UnclosedParenthesis, format!("missing closing parenthesis, found {token}"))
        }
        TokenKind::EndOfInput => (SyntaxErrorKind::UnexpectedEnd, format!("unexpected {token}, expected {expectation}")),
        _ if expected.contains(&Rule::EOI) => (SyntaxErrorKind::TrailingInput, format!("unexpected {token} after a complete formula")),
        _ => (SyntaxErrorKind::UnexpectedToken, format!("unexpected {token}, expected {expectation}")),
    };
    SyntaxError { kind, token, position, message }
}

fn describe_expected(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return String::from("a formula");
    }
    rules
        .iter()
        .map(|rule| match rule {
            Rule::atom => "atom",
            Rule::negation | Rule::not_op => "'¬'",
            Rule::and_op => "'∧'",
            Rule::or_op => "'∨'",
            Rule::implies_op => "'→'",
            Rule::iff_op => "'↔'",
            Rule::close_paren => "')'",
            Rule::EOI => "end of input",
            _ => "a formula",
        })
        .unique()
        .join(", ")
}
