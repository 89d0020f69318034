//! Propositional logic commands: entailment and formula inspection.

#![allow(clippy::result_large_err)]

use cs50ai_core::errors::{ExError, ExErrorKind};
use cs50ai_core::logic::{model_check, parse, Sentence};
use cs50ai_core::{log_op_end, log_op_error, log_op_start};
use cs50ai_core_types::SessionId;
use cs50ai_store::errors::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntailsResult {
    pub session_id: SessionId,
    /// Each knowledge formula, re-rendered in symbolic notation
    pub knowledge: Vec<String>,
    pub query: String,
    pub symbols: Vec<String>,
    pub entailed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowResult {
    pub session_id: SessionId,
    pub formula: String,
    /// Constructor form, e.g. `And(P, Not(Q))`
    pub structure: String,
    pub symbols: Vec<String>,
}

/// Does the conjunction of `knowledge` entail `query`?
///
/// An empty knowledge list is the empty conjunction, which is true in every
/// model, so only tautologies are entailed.
pub fn logic_entails(knowledge: &[String], query: &str) -> Result<EntailsResult> {
    let session_id = SessionId::new();
    log_op_start!(
        "logic_entails",
        session_id = %session_id,
        formulas = knowledge.len() as u64
    );
    let start = std::time::Instant::now();

    let result = entails_impl(knowledge, query, session_id).map_err(|e| {
        log_op_error!(
            "logic_entails",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "logic_entails",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        symbols = result.symbols.len() as u64,
        entailed = result.entailed
    );
    Ok(result)
}

fn entails_impl(knowledge: &[String], query: &str, session_id: SessionId) -> Result<EntailsResult> {
    let sentences = knowledge
        .iter()
        .map(|text| parse_formula(text))
        .collect::<Result<Vec<_>>>()?;
    let query = parse_formula(query)?;
    let knowledge = sentences.iter().map(Sentence::formula).collect();

    let kb = Sentence::and(sentences);
    let entailed = model_check(&kb, &query).map_err(ExError::from)?;

    let mut symbols = kb.symbols();
    symbols.extend(query.symbols());

    Ok(EntailsResult {
        session_id,
        knowledge,
        query: query.formula(),
        symbols: symbols.into_iter().collect(),
        entailed,
    })
}

/// Parse a formula and describe it.
pub fn logic_show(text: &str) -> Result<ShowResult> {
    let session_id = SessionId::new();
    log_op_start!("logic_show", session_id = %session_id);
    let start = std::time::Instant::now();

    let result = show_impl(text, session_id).map_err(|e| {
        log_op_error!(
            "logic_show",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "logic_show",
        duration_ms = start.elapsed().as_millis() as u64,
        session_id = %result.session_id,
        symbols = result.symbols.len() as u64
    );
    Ok(result)
}

fn show_impl(text: &str, session_id: SessionId) -> Result<ShowResult> {
    let sentence = parse_formula(text)?;
    Ok(ShowResult {
        session_id,
        formula: sentence.formula(),
        structure: sentence.to_string(),
        symbols: sentence.symbols().into_iter().collect(),
    })
}

fn parse_formula(text: &str) -> Result<Sentence> {
    parse(text).map_err(|e| {
        ExError::new(ExErrorKind::ParseError)
            .with_op("parse_formula")
            .with_subject(text.to_string())
            .with_message("formula does not parse")
            .with_source(e.into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formulas(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_modus_ponens() {
        let result = logic_entails(&formulas(&["rain => wet", "rain"]), "wet").unwrap();
        assert!(result.entailed);
        assert_eq!(result.knowledge, vec!["rain => wet", "rain"]);
        assert_eq!(result.symbols, vec!["rain", "wet"]);
    }

    #[test]
    fn test_affirming_the_consequent_fails() {
        let result = logic_entails(&formulas(&["rain => wet", "wet"]), "rain").unwrap();
        assert!(!result.entailed);
    }

    #[test]
    fn test_empty_knowledge_entails_only_tautologies() {
        assert!(logic_entails(&[], "p or not p").unwrap().entailed);
        assert!(!logic_entails(&[], "p").unwrap().entailed);
    }

    #[test]
    fn test_parse_error_carries_formula() {
        let err = logic_entails(&formulas(&["rain =>"]), "wet").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::ParseError);
        assert_eq!(err.subject(), Some("rain =>"));
    }

    #[test]
    fn test_show_structure() {
        let shown = logic_show("p and not q").unwrap();
        assert_eq!(shown.formula, "p ∧ (¬q)");
        assert_eq!(shown.symbols, vec!["p", "q"]);
        assert!(shown.structure.starts_with("And("));
    }
}
