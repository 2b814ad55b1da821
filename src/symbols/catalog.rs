use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::parser::spelling_at;

/// The logic systems whose symbols can appear in exercises.
///
/// Only [`LogicSystem::Propositional`] formulas are parsed and evaluated. The
/// symbols of all other systems are known for display purposes only.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicSystem {
    /// Propositional logic
    Propositional,
    /// First-order predicate logic
    FirstOrder,
    /// Modal logic
    Modal,
    /// Linear temporal logic
    Temporal,
    /// Deontic logic
    Deontic,
    /// Epistemic logic
    Epistemic,
}

impl Display for LogicSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Propositional => "propositional logic",
            Self::FirstOrder => "first-order logic",
            Self::Modal => "modal logic",
            Self::Temporal => "temporal logic",
            Self::Deontic => "deontic logic",
            Self::Epistemic => "epistemic logic",
        };
        f.write_str(name)
    }
}

/// A symbol of the catalog.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize)]
pub struct LogicSymbol {
    /// The symbol as it is displayed
    pub symbol: &'static str,
    /// The name of the symbol
    pub name: &'static str,
    /// An ASCII spelling of the symbol, if there is one
    pub ascii: Option<&'static str>,
    /// The logic system the symbol belongs to
    pub system: LogicSystem,
}

impl LogicSymbol {
    const fn new(symbol: &'static str, name: &'static str, ascii: Option<&'static str>, system: LogicSystem) -> Self {
        Self { symbol, name, ascii, system }
    }

    /// Returns `true` if formulas using this symbol can be parsed and
    /// evaluated.
    pub fn is_evaluated(&self) -> bool {
        self.system == LogicSystem::Propositional
    }

    /// Returns `true` if `text` is the symbol itself or its ASCII spelling.
    pub fn matches(&self, text: &str) -> bool {
        self.symbol == text || self.ascii == Some(text)
    }
}

/// All symbols known to exercises, grouped by logic system. Propositional
/// symbols come first.
pub const SYMBOL_CATALOG: [LogicSymbol; 23] = {
    use LogicSystem::{Deontic, Epistemic, FirstOrder, Modal, Propositional, Temporal};
    [
        LogicSymbol::new("¬", "negation", Some("~"), Propositional),
        LogicSymbol::new("∧", "conjunction", Some("&"), Propositional),
        LogicSymbol::new("∨", "disjunction", Some("|"), Propositional),
        LogicSymbol::new("→", "implication", Some("->"), Propositional),
        LogicSymbol::new("↔", "biconditional", Some("<->"), Propositional),
        LogicSymbol::new("(", "left parenthesis", Some("("), Propositional),
        LogicSymbol::new(")", "right parenthesis", Some(")"), Propositional),
        LogicSymbol::new("∀", "universal quantifier", None, FirstOrder),
        LogicSymbol::new("∃", "existential quantifier", None, FirstOrder),
        LogicSymbol::new("=", "equality", None, FirstOrder),
        LogicSymbol::new("□", "necessity", Some("[]"), Modal),
        LogicSymbol::new("◇", "possibility", Some("<>"), Modal),
        LogicSymbol::new("G", "always", None, Temporal),
        LogicSymbol::new("F", "eventually", None, Temporal),
        LogicSymbol::new("X", "next", None, Temporal),
        LogicSymbol::new("U", "until", None, Temporal),
        LogicSymbol::new("O", "obligatory", None, Deontic),
        LogicSymbol::new("P", "permitted", None, Deontic),
        LogicSymbol::new("Fb", "forbidden", None, Deontic),
        LogicSymbol::new("K", "knows", None, Epistemic),
        LogicSymbol::new("B", "believes", None, Epistemic),
        LogicSymbol::new("M", "considers possible", None, Epistemic),
        LogicSymbol::new("C", "common knowledge", None, Epistemic),
    ]
};

/// Looks up a symbol of the catalog by its displayed form or its ASCII
/// spelling.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::symbols::{LogicSystem, lookup_symbol};
/// let symbol = lookup_symbol("->").unwrap();
///
/// assert_eq!(symbol.symbol, "→");
/// assert_eq!(lookup_symbol("□").unwrap().system, LogicSystem::Modal);
/// assert!(lookup_symbol("$").is_none());
/// ```
pub fn lookup_symbol(text: &str) -> Option<&'static LogicSymbol> {
    SYMBOL_CATALOG.iter().find(|symbol| symbol.matches(text))
}

/// Returns all symbols of the given logic system in catalog order.
pub fn symbols_for(system: LogicSystem) -> impl Iterator<Item = &'static LogicSymbol> {
    SYMBOL_CATALOG.iter().filter(move |symbol| symbol.system == system)
}

/// Returns the non-propositional symbol `text` stands for, if any.
///
/// Letters which name temporal, deontic or epistemic operators are valid
/// propositional variables as well, so only symbols that cannot be read as a
/// variable are reported.
pub fn foreign_symbol(text: &str) -> Option<&'static LogicSymbol> {
    let starts_like_atom = text.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    lookup_symbol(text).filter(|symbol| !symbol.is_evaluated() && !starts_like_atom)
}

/// Returns the first non-propositional symbol written in the formula text
/// `text`, scanning from left to right.
///
/// Connective spellings are skipped as a whole, so the `=` of `=>` or `<=>` is
/// not read as equality. Symbols with several characters, like the ASCII
/// spellings `[]` and `<>`, are found as well.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logic_tutor::symbols::find_foreign_symbol;
/// assert!(find_foreign_symbol("P => Q <=> R").is_none());
/// assert_eq!(find_foreign_symbol("P -> <>Q").unwrap().name, "possibility");
/// ```
pub fn find_foreign_symbol(text: &str) -> Option<&'static LogicSymbol> {
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some((spelling, _, _)) = spelling_at(rest) {
            rest = &rest[spelling.len()..];
            continue;
        }
        if !c.is_ascii_alphabetic() {
            let found = SYMBOL_CATALOG.iter().find(|symbol| {
                !symbol.is_evaluated() && (rest.starts_with(symbol.symbol) || symbol.ascii.is_some_and(|ascii| rest.starts_with(ascii)))
            });
            if found.is_some() {
                return found;
            }
        }
        rest = &rest[c.len_utf8()..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{SPELLINGS, parse};

    #[test]
    fn test_lookup() {
        assert_eq!(lookup_symbol("¬").unwrap().name, "negation");
        assert_eq!(lookup_symbol("~").unwrap().name, "negation");
        assert_eq!(lookup_symbol("∀").unwrap().system, LogicSystem::FirstOrder);
        assert_eq!(lookup_symbol("K").unwrap().system, LogicSystem::Epistemic);
        assert!(lookup_symbol("").is_none());
    }

    #[test]
    fn test_systems() {
        assert_eq!(symbols_for(LogicSystem::Propositional).count(), 7);
        assert!(symbols_for(LogicSystem::Propositional).all(LogicSymbol::is_evaluated));
        assert!(!symbols_for(LogicSystem::Modal).any(LogicSymbol::is_evaluated));
        assert_eq!(symbols_for(LogicSystem::Temporal).map(|s| s.symbol).collect::<Vec<_>>(), ["G", "F", "X", "U"]);
        assert_eq!(serde_json::to_string(&LogicSystem::FirstOrder).unwrap(), "\"FIRST_ORDER\"");
    }

    #[test]
    fn test_foreign_symbols() {
        assert_eq!(foreign_symbol("□").unwrap().name, "necessity");
        assert_eq!(foreign_symbol("∃").unwrap().name, "existential quantifier");
        assert!(foreign_symbol("K").is_none());
        assert!(foreign_symbol("∧").is_none());
        assert!(foreign_symbol("Q").is_none());
    }

    #[test]
    fn test_find_foreign_symbols() {
        assert!(find_foreign_symbol("P => Q").is_none());
        assert!(find_foreign_symbol("P <=> Q").is_none());
        assert!(find_foreign_symbol("P<->Q -> ~R").is_none());
        assert!(find_foreign_symbol("Fb & K | P").is_none());
        assert!(find_foreign_symbol("").is_none());
        assert_eq!(find_foreign_symbol("P = Q").unwrap().name, "equality");
        assert_eq!(find_foreign_symbol("[]P -> P").unwrap().name, "necessity");
        assert_eq!(find_foreign_symbol("P <=> <>P").unwrap().name, "possibility");
        assert_eq!(find_foreign_symbol("∀x P").unwrap().system, LogicSystem::FirstOrder);
    }

    #[test]
    fn test_propositional_symbols_are_parsed() {
        for symbol in symbols_for(LogicSystem::Propositional) {
            let ascii = symbol.ascii.unwrap();
            assert!(SPELLINGS.iter().any(|(spelling, _, canonical)| *spelling == ascii && *canonical == symbol.symbol));
        }
        for symbol in symbols_for(LogicSystem::Propositional).filter(|s| s.name != "negation" && !s.name.contains("parenthesis")) {
            let unicode = parse(format!("P {} Q", symbol.symbol)).unwrap();
            let ascii = parse(format!("P {} Q", symbol.ascii.unwrap())).unwrap();
            assert_eq!(unicode, ascii);
            assert_eq!(unicode.to_string(), format!("P {} Q", symbol.symbol));
        }
    }

    #[test]
    fn test_foreign_symbols_are_rejected_by_parser() {
        for symbol in SYMBOL_CATALOG.iter().filter(|s| foreign_symbol(s.symbol).is_some()) {
            assert!(parse(format!("{} P", symbol.symbol)).is_err());
        }
    }
}
