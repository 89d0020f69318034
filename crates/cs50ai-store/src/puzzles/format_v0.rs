//! Puzzle Format v0 schema
//!
//! Formulas use the `cs50ai_core::logic` text syntax. Role symbols are
//! written quoted, exactly as the solver names them:
//!
//! ```yaml
//! schema_version: 0
//! title: Puzzle 1
//! characters: [A, B]
//! statements:
//!   - speaker: A
//!     says: '"A is a Knave" and "B is a Knave"'
//! ```

use serde::{Deserialize, Serialize};

/// Top-level puzzle file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    pub title: String,

    /// Character names, in the order verdicts are reported
    pub characters: Vec<String>,

    #[serde(default)]
    pub statements: Vec<StatementV0>,

    /// Extra knowledge that holds regardless of who speaks
    #[serde(default)]
    pub facts: Vec<String>,
}

/// One thing a character says
///
/// Exactly one of `says` and `one_of` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementV0 {
    pub speaker: String,

    /// A single statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub says: Option<String>,

    /// One of several statements, without saying which
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_puzzle() {
        let yaml = r#"
schema_version: 0
title: "Lone"
characters: [A]
"#;

        let puzzle: PuzzleV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(puzzle.schema_version, 0);
        assert_eq!(puzzle.characters, vec!["A"]);
        assert!(puzzle.statements.is_empty());
        assert!(puzzle.facts.is_empty());
    }

    #[test]
    fn test_statement_forms() {
        let yaml = r#"
schema_version: 0
title: "Forms"
characters: [A, B]
statements:
  - speaker: A
    says: '"B is a Knave"'
  - speaker: B
    one_of: ['"A is a Knight"', '"A is a Knave"']
"#;

        let puzzle: PuzzleV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(puzzle.statements[0].says.as_deref(), Some("\"B is a Knave\""));
        assert!(puzzle.statements[0].one_of.is_none());
        assert_eq!(puzzle.statements[1].one_of.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
schema_version: 0
title: "Typo"
characters: [A]
statments: []
"#;

        assert!(serde_yaml::from_str::<PuzzleV0>(yaml).is_err());
    }
}
