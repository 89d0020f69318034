use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::errors::{AiError, Result};

/// A truth assignment: symbol name -> value.
///
/// Ordered so that enumeration and debug output are deterministic.
pub type Model = BTreeMap<String, bool>;

/// Propositional logic sentence
///
/// Sentences are plain trees; conjunctions and disjunctions are n-ary so
/// that knowledge bases can grow one conjunct at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// A propositional variable
    Symbol(String),
    /// Negation
    Not(Box<Sentence>),
    /// Conjunction of zero or more sentences (empty is true)
    And(Vec<Sentence>),
    /// Disjunction of zero or more sentences (empty is false)
    Or(Vec<Sentence>),
    /// antecedent => consequent
    Implication(Box<Sentence>, Box<Sentence>),
    /// left <=> right
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    pub fn symbol(name: impl Into<String>) -> Self {
        Sentence::Symbol(name.into())
    }

    pub fn not(operand: Sentence) -> Self {
        Sentence::Not(Box::new(operand))
    }

    pub fn and(conjuncts: Vec<Sentence>) -> Self {
        Sentence::And(conjuncts)
    }

    pub fn or(disjuncts: Vec<Sentence>) -> Self {
        Sentence::Or(disjuncts)
    }

    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn biconditional(left: Sentence, right: Sentence) -> Self {
        Sentence::Biconditional(Box::new(left), Box::new(right))
    }

    /// Append a conjunct to an `And` sentence.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if `self` is not a conjunction.
    pub fn add_conjunct(&mut self, conjunct: Sentence) -> Result<()> {
        match self {
            Sentence::And(conjuncts) => {
                conjuncts.push(conjunct);
                Ok(())
            }
            other => Err(AiError::Internal {
                message: format!("cannot add a conjunct to {}", other),
            }),
        }
    }

    /// Evaluate the sentence under a truth assignment.
    ///
    /// # Errors
    ///
    /// Returns `SymbolNotInModel` when a symbol reached during evaluation has
    /// no value in `model`.
    pub fn evaluate(&self, model: &Model) -> Result<bool> {
        match self {
            Sentence::Symbol(name) => {
                model
                    .get(name)
                    .copied()
                    .ok_or_else(|| AiError::SymbolNotInModel {
                        symbol: name.clone(),
                    })
            }
            Sentence::Not(operand) => Ok(!operand.evaluate(model)?),
            Sentence::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Sentence::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Sentence::Implication(antecedent, consequent) => {
                Ok(!antecedent.evaluate(model)? || consequent.evaluate(model)?)
            }
            Sentence::Biconditional(left, right) => {
                Ok(left.evaluate(model)? == right.evaluate(model)?)
            }
        }
    }

    /// Render in symbolic notation, e.g. `(P ∧ Q) => R`.
    pub fn formula(&self) -> String {
        match self {
            Sentence::Symbol(name) => name.clone(),
            Sentence::Not(operand) => format!("¬{}", parenthesize(&operand.formula())),
            Sentence::And(conjuncts) => join_formulas(conjuncts, " ∧ "),
            Sentence::Or(disjuncts) => join_formulas(disjuncts, " ∨ "),
            Sentence::Implication(antecedent, consequent) => format!(
                "{} => {}",
                parenthesize(&antecedent.formula()),
                parenthesize(&consequent.formula())
            ),
            Sentence::Biconditional(left, right) => format!(
                "{} <=> {}",
                parenthesize(&left.formula()),
                parenthesize(&right.formula())
            ),
        }
    }

    /// All symbol names occurring in the sentence.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut BTreeSet<String>) {
        match self {
            Sentence::Symbol(name) => {
                out.insert(name.clone());
            }
            Sentence::Not(operand) => operand.collect_symbols(out),
            Sentence::And(parts) | Sentence::Or(parts) => {
                for part in parts {
                    part.collect_symbols(out);
                }
            }
            Sentence::Implication(a, b) | Sentence::Biconditional(a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
        }
    }
}

fn join_formulas(parts: &[Sentence], separator: &str) -> String {
    if let [only] = parts {
        return only.formula();
    }
    parts
        .iter()
        .map(|part| parenthesize(&part.formula()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Wrap `s` in parentheses unless it is empty, a bare word, or already
/// enclosed by one matching pair.
fn parenthesize(s: &str) -> String {
    let already_wrapped =
        s.len() >= 2 && s.starts_with('(') && s.ends_with(')') && balanced(&s[1..s.len() - 1]);
    if s.is_empty() || s.chars().all(char::is_alphabetic) || already_wrapped {
        s.to_string()
    } else {
        format!("({})", s)
    }
}

fn balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Constructor-style rendering, e.g. `And(P, Not(Q))`.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Symbol(name) => write!(f, "{}", name),
            Sentence::Not(operand) => write!(f, "Not({})", operand),
            Sentence::And(parts) => write!(f, "And({})", join_display(parts)),
            Sentence::Or(parts) => write!(f, "Or({})", join_display(parts)),
            Sentence::Implication(a, b) => write!(f, "Implication({}, {})", a, b),
            Sentence::Biconditional(a, b) => write!(f, "Biconditional({}, {})", a, b),
        }
    }
}

fn join_display(parts: &[Sentence]) -> String {
    parts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
