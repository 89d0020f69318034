use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AiError, Result};

/// Side length of the board
pub const SIZE: usize = 3;

/// (row, col), zero-based
pub type Action = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A 3x3 tic-tac-toe grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Option<Player>; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[Option<Player>; SIZE]; SIZE] {
        &self.cells
    }

    /// Mark at `action`; `None` for an empty or out-of-range cell.
    pub fn get(&self, (row, col): Action) -> Option<Player> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Number of marks of `player` on the board
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Write `player` at `action` without validation.
    pub(crate) fn with_mark(mut self, (row, col): Action, player: Player) -> Self {
        self.cells[row][col] = Some(player);
        self
    }

    /// Parse a board from nine cells.
    ///
    /// `X`/`O` (any case) are marks, `.`, `_` and `-` are empty. Whitespace
    /// and `/` row separators are ignored, so `"X.O/.X./..O"` and `"X.O.X...O"`
    /// are the same board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` for the wrong number of cells, an unknown
    /// character, or a position that cannot arise from alternating play
    /// starting with X.
    pub fn parse(text: &str) -> Result<Self> {
        let mut marks = Vec::with_capacity(SIZE * SIZE);
        for c in text.chars() {
            match c {
                'x' | 'X' => marks.push(Some(Player::X)),
                'o' | 'O' => marks.push(Some(Player::O)),
                '.' | '_' | '-' => marks.push(None),
                '/' => {}
                c if c.is_whitespace() => {}
                other => {
                    return Err(AiError::InvalidBoard {
                        reason: format!("unexpected character `{}`", other),
                    })
                }
            }
        }
        if marks.len() != SIZE * SIZE {
            return Err(AiError::InvalidBoard {
                reason: format!("expected {} cells, found {}", SIZE * SIZE, marks.len()),
            });
        }

        let mut board = Board::empty();
        for (index, mark) in marks.into_iter().enumerate() {
            board.cells[index / SIZE][index % SIZE] = mark;
        }
        board.validate()?;
        Ok(board)
    }

    /// Check that the position is reachable by legal play.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        let xs = self.count(Player::X);
        let os = self.count(Player::O);
        if xs != os && xs != os + 1 {
            return Err(AiError::InvalidBoard {
                reason: format!("X has {} marks and O has {}; X moves first", xs, os),
            });
        }
        let x_line = self.has_line(Player::X);
        let o_line = self.has_line(Player::O);
        if x_line && o_line {
            return Err(AiError::InvalidBoard {
                reason: "both players have three in a row".to_string(),
            });
        }
        if x_line && xs != os + 1 {
            return Err(AiError::InvalidBoard {
                reason: "O moved after X had already won".to_string(),
            });
        }
        if o_line && xs != os {
            return Err(AiError::InvalidBoard {
                reason: "X moved after O had already won".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|cell| self.get(*cell) == Some(player)))
    }

    /// Single-line form, rows separated by `/`, e.g. `X.O/.X./..O`
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Player::mark))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Every row, column and diagonal
pub(crate) const LINES: [[Action; SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = row
                .iter()
                .map(|cell| format!(" {} ", cell.map_or(' ', Player::mark)))
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}
