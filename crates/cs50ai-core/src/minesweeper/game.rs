use std::collections::BTreeSet;

use crate::errors::{AiError, Result};
use crate::rng::SimpleRng;

/// (row, col), zero-based
pub type Cell = (usize, usize);

/// Largest board, in cells, that a game will allocate.
pub const MAX_CELLS: usize = 1 << 20;

/// `height * width` when it is non-zero and at most [`MAX_CELLS`].
pub fn board_cells(height: usize, width: usize) -> Option<usize> {
    height
        .checked_mul(width)
        .filter(|cells| (1..=MAX_CELLS).contains(cells))
}

/// In-bounds cells within one row and column of `cell`, excluding `cell`.
pub fn neighbors(cell: Cell, height: usize, width: usize) -> impl Iterator<Item = Cell> {
    let (row, col) = cell;
    let rows = row.saturating_sub(1)..=(row + 1).min(height.saturating_sub(1));
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(width.saturating_sub(1));
        cols.map(move |c| (r, c))
    })
    .filter(move |candidate| *candidate != cell)
}

/// Minesweeper board with hidden mines
#[derive(Debug, Clone)]
pub struct Minesweeper {
    height: usize,
    width: usize,
    board: Vec<Vec<bool>>,
    mines: BTreeSet<Cell>,
    mines_found: BTreeSet<Cell>,
}

impl Minesweeper {
    /// Board with `mines` distinct mines placed uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` when a side is zero, the board exceeds
    /// [`MAX_CELLS`] or there are more mines than cells.
    pub fn new(height: usize, width: usize, mines: usize, rng: &mut SimpleRng) -> Result<Self> {
        check_dimensions(height, width, mines)?;

        // Partial Fisher-Yates over all cells: the first `mines` are mines.
        let mut cells: Vec<Cell> = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r, c)))
            .collect();
        for i in 0..mines {
            let j = i + rng.below(cells.len() - i);
            cells.swap(i, j);
        }
        cells.truncate(mines);

        Self::with_mines(height, width, cells)
    }

    /// Board with mines at exactly the given cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero side or an oversized board and
    /// `OutOfBounds` for a mine outside the board.
    pub fn with_mines(
        height: usize,
        width: usize,
        mines: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        check_dimensions(height, width, 0)?;
        let mut board = vec![vec![false; width]; height];
        let mut placed = BTreeSet::new();
        for (row, col) in mines {
            if row >= height || col >= width {
                return Err(AiError::OutOfBounds {
                    row,
                    col,
                    height,
                    width,
                });
            }
            board[row][col] = true;
            placed.insert((row, col));
        }
        Ok(Self {
            height,
            width,
            board,
            mines: placed,
            mines_found: BTreeSet::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    /// Whether `cell` holds a mine.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a cell outside the board.
    pub fn is_mine(&self, cell: Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        Ok(self.board[cell.0][cell.1])
    }

    /// Number of mines among the neighbours of `cell`: the number shown when
    /// the cell is revealed.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a cell outside the board.
    pub fn nearby_mines(&self, cell: Cell) -> Result<usize> {
        self.check_bounds(cell)?;
        Ok(neighbors(cell, self.height, self.width)
            .filter(|(r, c)| self.board[*r][*c])
            .count())
    }

    /// Replace the set of flagged cells.
    pub fn flag_all(&mut self, cells: &BTreeSet<Cell>) {
        self.mines_found = cells.clone();
    }

    /// Won when exactly the mines are flagged.
    pub fn won(&self) -> bool {
        self.mines_found == self.mines
    }

    /// Text grid with `X` on mines.
    pub fn render(&self) -> String {
        let border = format!("{}-\n", "--".repeat(self.width));
        let mut out = String::new();
        for row in &self.board {
            out.push_str(&border);
            for mine in row {
                out.push_str(if *mine { "|X" } else { "| " });
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn check_bounds(&self, (row, col): Cell) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(AiError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}

fn check_dimensions(height: usize, width: usize, mines: usize) -> Result<()> {
    if !matches!(board_cells(height, width), Some(cells) if mines <= cells) {
        return Err(AiError::InvalidDimensions {
            height,
            width,
            mines,
        });
    }
    Ok(())
}
