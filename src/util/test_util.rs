#![allow(non_snake_case)]
#![allow(dead_code)]

use crate::formulas::Formula;
use crate::parser::parse;

pub fn formula(text: &str) -> Formula {
    parse(text).unwrap()
}

pub fn formulas(texts: &[&str]) -> Vec<Formula> {
    texts.iter().map(|text| formula(text)).collect()
}

#[allow(clippy::struct_field_names)]
pub struct F {
    // Literals
    pub(crate) A: Formula,
    pub(crate) B: Formula,
    pub(crate) C: Formula,
    pub(crate) X: Formula,
    pub(crate) Y: Formula,
    pub(crate) NA: Formula,
    pub(crate) NB: Formula,
    pub(crate) NX: Formula,
    pub(crate) NY: Formula,

    // Disjunctions
    pub(crate) OR1: Formula,
    pub(crate) OR2: Formula,
    pub(crate) OR3: Formula,

    // Conjunctions
    pub(crate) AND1: Formula,
    pub(crate) AND2: Formula,
    pub(crate) AND3: Formula,

    // Negations
    pub(crate) NOT1: Formula,
    pub(crate) NOT2: Formula,

    // Implications
    pub(crate) IMP1: Formula,
    pub(crate) IMP2: Formula,
    pub(crate) IMP3: Formula,
    pub(crate) IMP4: Formula,

    // Biconditionals
    pub(crate) EQ1: Formula,
    pub(crate) EQ2: Formula,
    pub(crate) EQ3: Formula,
    pub(crate) EQ4: Formula,
}

impl F {
    pub fn new() -> Self {
        let A = Formula::atom("a");
        let B = Formula::atom("b");
        let C = Formula::atom("c");
        let X = Formula::atom("x");
        let Y = Formula::atom("y");
        let NA = Formula::negation(A.clone());
        let NB = Formula::negation(B.clone());
        let NX = Formula::negation(X.clone());
        let NY = Formula::negation(Y.clone());

        let OR1 = Formula::or(X.clone(), Y.clone());
        let OR2 = Formula::or(NX.clone(), NY.clone());
        let AND1 = Formula::and(A.clone(), B.clone());
        let AND2 = Formula::and(NA.clone(), NB.clone());
        let OR3 = Formula::or(AND1.clone(), AND2.clone());
        let AND3 = Formula::and(OR1.clone(), OR2.clone());

        let NOT1 = Formula::negation(AND1.clone());
        let NOT2 = Formula::negation(OR1.clone());

        let IMP1 = Formula::implication(A.clone(), B.clone());
        let IMP2 = Formula::implication(NA.clone(), NB.clone());
        let IMP3 = Formula::implication(AND1.clone(), OR1.clone());

        let EQ1 = Formula::equivalence(A.clone(), B.clone());
        let EQ2 = Formula::equivalence(NA.clone(), NB.clone());
        let EQ3 = Formula::equivalence(AND1.clone(), OR1.clone());
        let EQ4 = Formula::equivalence(IMP1.clone(), IMP2.clone());
        let IMP4 = Formula::implication(EQ1.clone(), Formula::equivalence(NX.clone(), NY.clone()));

        Self {
            A,
            B,
            C,
            X,
            Y,
            NA,
            NB,
            NX,
            NY,
            OR1,
            OR2,
            OR3,
            AND1,
            AND2,
            AND3,
            NOT1,
            NOT2,
            IMP1,
            IMP2,
            IMP3,
            IMP4,
            EQ1,
            EQ2,
            EQ3,
            EQ4,
        }
    }
}
