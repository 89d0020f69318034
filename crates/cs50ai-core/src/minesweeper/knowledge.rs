use std::collections::BTreeSet;
use std::fmt;

use crate::minesweeper::game::Cell;

/// "Exactly `count` of `cells` are mines."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Knowledge {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, when there are as many mines as cells.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.count > 0 && self.cells.len() == self.count {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// All cells, when there are no mines among them.
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Drop a cell now known to be a mine. Returns whether it was present.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Drop a cell now known to be safe. Returns whether it was present.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// More mines than cells cannot be satisfied.
    pub fn is_consistent(&self) -> bool {
        self.count <= self.cells.len()
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|(r, c)| format!("({}, {})", r, c))
            .collect();
        write!(f, "{{{}}} = {}", cells.join(", "), self.count)
    }
}
