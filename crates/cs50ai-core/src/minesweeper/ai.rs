//! Knowledge-based minesweeper player.
//!
//! Each revealed cell contributes one [`Knowledge`] sentence about its
//! undetermined neighbours. After every addition the knowledge base is
//! saturated: mines and safes are marked until no sentence yields a new
//! conclusion, and subset inference (`A ⊂ B` gives `B - A = count(B) -
//! count(A)`) runs until no new sentence appears.

use std::collections::BTreeSet;

use crate::errors::{AiError, Result};
use crate::minesweeper::game::{neighbors, Cell};
use crate::minesweeper::knowledge::Knowledge;
use crate::rng::SimpleRng;

#[derive(Debug, Clone)]
pub struct MinesweeperAi {
    height: usize,
    width: usize,
    moves_made: BTreeSet<Cell>,
    mines: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    knowledge: Vec<Knowledge>,
}

impl MinesweeperAi {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: BTreeSet::new(),
            mines: BTreeSet::new(),
            safes: BTreeSet::new(),
            knowledge: Vec::new(),
        }
    }

    pub fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    pub fn knowledge(&self) -> &[Knowledge] {
        &self.knowledge
    }

    /// Record `cell` as a mine and remove it from every sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_mine(cell);
        }
    }

    /// Record `cell` as safe and remove it from every sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for sentence in &mut self.knowledge {
            sentence.mark_safe(cell);
        }
    }

    /// Learn that the safe cell `cell` shows `count` neighbouring mines.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a cell outside the board and
    /// `InconsistentKnowledge` when the reported count cannot be reconciled
    /// with what is already known. On error the player is left unchanged.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<()> {
        if cell.0 >= self.height || cell.1 >= self.width {
            return Err(AiError::OutOfBounds {
                row: cell.0,
                col: cell.1,
                height: self.height,
                width: self.width,
            });
        }
        if self.mines.contains(&cell) {
            return Err(AiError::InconsistentKnowledge {
                reason: format!("({}, {}) was revealed but is a known mine", cell.0, cell.1),
            });
        }

        // Work on a copy so a contradiction found midway leaves no trace.
        let mut next = self.clone();
        next.learn(cell, count)?;
        *self = next;

        tracing::debug!(
            row = cell.0,
            col = cell.1,
            count,
            sentences = self.knowledge.len(),
            mines = self.mines.len(),
            safes = self.safes.len(),
            "knowledge updated"
        );
        Ok(())
    }

    fn learn(&mut self, cell: Cell, count: usize) -> Result<()> {
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let mut undetermined = BTreeSet::new();
        let mut remaining = count;
        for neighbour in neighbors(cell, self.height, self.width) {
            if self.mines.contains(&neighbour) {
                remaining = remaining.checked_sub(1).ok_or_else(|| {
                    AiError::InconsistentKnowledge {
                        reason: format!(
                            "({}, {}) reports {} mines but more neighbours are known mines",
                            cell.0, cell.1, count
                        ),
                    }
                })?;
            } else if !self.safes.contains(&neighbour) {
                undetermined.insert(neighbour);
            }
        }

        let sentence = Knowledge::new(undetermined, remaining);
        if !sentence.is_empty() && !self.knowledge.contains(&sentence) {
            self.knowledge.push(sentence);
        } else if sentence.is_empty() && remaining > 0 {
            return Err(AiError::InconsistentKnowledge {
                reason: format!(
                    "({}, {}) reports {} mines but no undetermined neighbour is left",
                    cell.0, cell.1, count
                ),
            });
        }

        self.saturate()
    }

    /// Repeat marking and subset inference until nothing changes.
    fn saturate(&mut self) -> Result<()> {
        loop {
            let mut seen = Vec::with_capacity(self.knowledge.len());
            for sentence in self.knowledge.drain(..) {
                if !sentence.is_empty() && !seen.contains(&sentence) {
                    seen.push(sentence);
                }
            }
            self.knowledge = seen;
            if let Some(bad) = self.knowledge.iter().find(|s| !s.is_consistent()) {
                return Err(AiError::InconsistentKnowledge {
                    reason: format!("sentence {} has more mines than cells", bad),
                });
            }

            let mut new_mines = BTreeSet::new();
            let mut new_safes = BTreeSet::new();
            for sentence in &self.knowledge {
                new_mines.extend(sentence.known_mines());
                new_safes.extend(sentence.known_safes());
            }
            if let Some(cell) = new_mines.intersection(&new_safes).next() {
                return Err(AiError::InconsistentKnowledge {
                    reason: format!("({}, {}) is inferred both mine and safe", cell.0, cell.1),
                });
            }

            let mut changed = false;
            for cell in new_mines {
                if self.safes.contains(&cell) {
                    return Err(AiError::InconsistentKnowledge {
                        reason: format!("({}, {}) is known safe but inferred a mine", cell.0, cell.1),
                    });
                }
                if !self.mines.contains(&cell) {
                    self.mark_mine(cell);
                    changed = true;
                }
            }
            for cell in new_safes {
                if self.mines.contains(&cell) {
                    return Err(AiError::InconsistentKnowledge {
                        reason: format!("({}, {}) is known a mine but inferred safe", cell.0, cell.1),
                    });
                }
                if !self.safes.contains(&cell) {
                    self.mark_safe(cell);
                    changed = true;
                }
            }
            if changed {
                continue;
            }

            let inferred = self.infer_subsets()?;
            if inferred.is_empty() {
                return Ok(());
            }
            self.knowledge.extend(inferred);
        }
    }

    /// New sentences from every pair where one sentence's cells are a proper
    /// subset of another's.
    fn infer_subsets(&self) -> Result<Vec<Knowledge>> {
        let mut inferred: Vec<Knowledge> = Vec::new();
        for small in &self.knowledge {
            for large in &self.knowledge {
                if small.cells() == large.cells() {
                    if small.count() != large.count() {
                        return Err(AiError::InconsistentKnowledge {
                            reason: format!("sentences {} and {} disagree", small, large),
                        });
                    }
                    continue;
                }
                if !small.cells().is_subset(large.cells()) {
                    continue;
                }
                let count = large.count().checked_sub(small.count()).ok_or_else(|| {
                    AiError::InconsistentKnowledge {
                        reason: format!("sentence {} has more mines than {}", small, large),
                    }
                })?;
                let cells = large.cells().difference(small.cells()).copied();
                let candidate = Knowledge::new(cells, count);
                if !self.knowledge.contains(&candidate) && !inferred.contains(&candidate) {
                    inferred.push(candidate);
                }
            }
        }
        Ok(inferred)
    }

    /// First known-safe cell in row-major order that has not been played.
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.safes.difference(&self.moves_made).next().copied()
    }

    /// Uniformly random cell that has not been played and is not a known
    /// mine, or `None` when no such cell exists.
    pub fn make_random_move(&self, rng: &mut SimpleRng) -> Option<Cell> {
        let candidates: Vec<Cell> = (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .collect();
        rng.choose(&candidates).copied()
    }
}
