use serde::Serialize;

use crate::errors::{AiError, Result};
use crate::logic::{model_check, Sentence};

/// Symbol name for "`name` is a knight".
pub fn knight_symbol(name: &str) -> String {
    format!("{} is a Knight", name)
}

/// Symbol name for "`name` is a knave".
pub fn knave_symbol(name: &str) -> String {
    format!("{} is a Knave", name)
}

/// One puzzle character with its two role symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    knight: Sentence,
    knave: Sentence,
}

impl Character {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            knight: Sentence::symbol(knight_symbol(name)),
            knave: Sentence::symbol(knave_symbol(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sentence "this character is a knight"
    pub fn knight(&self) -> &Sentence {
        &self.knight
    }

    /// Sentence "this character is a knave"
    pub fn knave(&self) -> &Sentence {
        &self.knave
    }

    /// What it means for this character to have said `statement`: a knight's
    /// words are true, a knave's are false.
    pub fn claim(&self, statement: Sentence) -> Sentence {
        Sentence::and(vec![
            Sentence::implication(self.knight.clone(), statement.clone()),
            Sentence::implication(self.knave.clone(), Sentence::not(statement)),
        ])
    }
}

/// A knights-and-knaves puzzle
///
/// Knights always tell the truth and knaves always lie. Every character is
/// exactly one of the two; that structure is added to the knowledge base
/// when the character is introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    title: String,
    characters: Vec<Character>,
    knowledge: Sentence,
}

impl Puzzle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            characters: Vec::new(),
            knowledge: Sentence::and(Vec::new()),
        }
    }

    /// Create a puzzle and introduce `names` in order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCharacter` if a name repeats.
    pub fn with_characters(title: impl Into<String>, names: &[&str]) -> Result<Self> {
        let mut puzzle = Self::new(title);
        for name in names {
            puzzle.add_character(name)?;
        }
        Ok(puzzle)
    }

    /// Introduce a character: exactly one of knight or knave.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCharacter` if the name is already present.
    pub fn add_character(&mut self, name: &str) -> Result<()> {
        if self.characters.iter().any(|c| c.name == name) {
            return Err(AiError::DuplicateCharacter {
                name: name.to_string(),
            });
        }
        let character = Character::new(name);
        self.knowledge.add_conjunct(Sentence::or(vec![
            character.knight.clone(),
            character.knave.clone(),
        ]))?;
        self.knowledge.add_conjunct(Sentence::not(Sentence::and(vec![
            character.knight.clone(),
            character.knave.clone(),
        ])))?;
        self.characters.push(character);
        Ok(())
    }

    /// Look up a character by name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCharacter` if the name was never introduced.
    pub fn character(&self, name: &str) -> Result<&Character> {
        self.characters
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AiError::UnknownCharacter {
                name: name.to_string(),
            })
    }

    /// Record that `speaker` said `statement`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCharacter` for an unknown speaker.
    pub fn says(&mut self, speaker: &str, statement: Sentence) -> Result<()> {
        let character = self.character(speaker)?;
        let knight = character.knight.clone();
        let knave = character.knave.clone();
        self.knowledge
            .add_conjunct(Sentence::implication(knight, statement.clone()))?;
        self.knowledge
            .add_conjunct(Sentence::implication(knave, Sentence::not(statement)))
    }

    /// Record that `speaker` said exactly one of `alternatives`, without
    /// knowing which.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCharacter` for an unknown speaker and `EmptyStatement`
    /// when no alternative is given.
    pub fn says_one_of(&mut self, speaker: &str, alternatives: Vec<Sentence>) -> Result<()> {
        if alternatives.is_empty() {
            return Err(AiError::EmptyStatement {
                speaker: speaker.to_string(),
            });
        }
        let character = self.character(speaker)?;
        let options = alternatives
            .into_iter()
            .map(|statement| character.claim(statement))
            .collect();
        self.knowledge.add_conjunct(Sentence::or(options))
    }

    /// Add a sentence known to hold regardless of who says what.
    ///
    /// # Errors
    ///
    /// Never fails for a puzzle built through this API.
    pub fn fact(&mut self, sentence: Sentence) -> Result<()> {
        self.knowledge.add_conjunct(sentence)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The accumulated knowledge base (a conjunction)
    pub fn knowledge(&self) -> &Sentence {
        &self.knowledge
    }
}

/// What the knowledge base says about one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Knight,
    Knave,
    /// Both roles remain possible
    Undetermined,
    /// Both roles are entailed: the knowledge base is unsatisfiable
    Contradiction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterVerdict {
    pub name: String,
    pub verdict: Verdict,
}

/// Outcome of solving a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub title: String,
    pub verdicts: Vec<CharacterVerdict>,
    /// Entailed role symbols, character order, knight before knave
    pub entailed: Vec<String>,
}

impl Solution {
    /// Verdict for one character, if present
    pub fn verdict(&self, name: &str) -> Option<Verdict> {
        self.verdicts
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.verdict)
    }
}

/// Model-check every role symbol of every character.
///
/// # Errors
///
/// Propagates model checking failures (`TooManySymbols` for very large
/// puzzles).
pub fn solve(puzzle: &Puzzle) -> Result<Solution> {
    let mut verdicts = Vec::with_capacity(puzzle.characters.len());
    let mut entailed = Vec::new();

    for character in &puzzle.characters {
        let is_knight = model_check(&puzzle.knowledge, &character.knight)?;
        let is_knave = model_check(&puzzle.knowledge, &character.knave)?;
        if is_knight {
            entailed.push(knight_symbol(&character.name));
        }
        if is_knave {
            entailed.push(knave_symbol(&character.name));
        }
        let verdict = match (is_knight, is_knave) {
            (true, false) => Verdict::Knight,
            (false, true) => Verdict::Knave,
            (false, false) => Verdict::Undetermined,
            (true, true) => Verdict::Contradiction,
        };
        verdicts.push(CharacterVerdict {
            name: character.name.clone(),
            verdict,
        });
    }

    tracing::debug!(puzzle = %puzzle.title, entailed = entailed.len(), "puzzle solved");
    Ok(Solution {
        title: puzzle.title.clone(),
        verdicts,
        entailed,
    })
}
