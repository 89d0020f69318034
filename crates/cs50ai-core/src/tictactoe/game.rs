//! Game rules as free functions over an immutable `Board`.

use std::collections::BTreeSet;

use crate::errors::{AiError, Result};
use crate::tictactoe::board::{Action, Board, Player, SIZE};

/// Starting state: an empty board.
pub fn initial_state() -> Board {
    Board::empty()
}

/// Whose turn it is. X moves first, then the players alternate.
pub fn player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// All empty cells, in row-major order.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    empty_cells(board).collect()
}

pub(crate) fn empty_cells(board: &Board) -> impl Iterator<Item = Action> + '_ {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
        .filter(move |cell| board.get(*cell).is_none())
}

/// The board after the player to move marks `action`. The input is untouched.
///
/// # Errors
///
/// Returns `OutOfBounds` for coordinates outside the grid, `CellOccupied`
/// for a cell that already holds a mark and `GameOver` once someone has won.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    let (row, col) = action;
    if row >= SIZE || col >= SIZE {
        return Err(AiError::OutOfBounds {
            row,
            col,
            height: SIZE,
            width: SIZE,
        });
    }
    if board.get(action).is_some() {
        return Err(AiError::CellOccupied { row, col });
    }
    if winner(board).is_some() {
        return Err(AiError::GameOver);
    }
    Ok(board.with_mark(action, player(board)))
}

/// The player with three in a row, if any.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|p| board.has_line(*p))
}

/// The game is over when someone has won or no cell is left.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.occupied() == SIZE * SIZE
}

/// 1 if X has won, -1 if O has won, 0 otherwise.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty_and_x_moves() {
        let board = initial_state();
        assert_eq!(board.occupied(), 0);
        assert_eq!(player(&board), Player::X);
        assert_eq!(actions(&board).len(), 9);
    }

    #[test]
    fn test_players_alternate() {
        let board = result(&initial_state(), (1, 1)).unwrap();
        assert_eq!(board.get((1, 1)), Some(Player::X));
        assert_eq!(player(&board), Player::O);
        let board = result(&board, (0, 0)).unwrap();
        assert_eq!(board.get((0, 0)), Some(Player::O));
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let board = initial_state();
        let next = result(&board, (0, 0)).unwrap();
        assert_eq!(board, initial_state());
        assert_ne!(board, next);
    }

    #[test]
    fn test_result_rejects_invalid_actions() {
        let board = result(&initial_state(), (0, 0)).unwrap();
        assert_eq!(
            result(&board, (0, 0)).unwrap_err(),
            AiError::CellOccupied { row: 0, col: 0 }
        );
        assert!(matches!(
            result(&board, (3, 1)),
            Err(AiError::OutOfBounds { row: 3, col: 1, .. })
        ));
    }

    #[test]
    fn test_result_rejects_play_after_a_win() {
        let board = Board::parse("XXX/OO./...").unwrap();
        assert_eq!(result(&board, (2, 2)).unwrap_err(), AiError::GameOver);
    }

    #[test]
    fn test_actions_exclude_occupied_cells() {
        let board = Board::parse("X.O/.X./..O").unwrap();
        let available = actions(&board);
        assert_eq!(available.len(), 5);
        assert!(!available.contains(&(0, 0)));
        assert!(available.contains(&(0, 1)));
    }

    #[test]
    fn test_winner_rows_columns_diagonals() {
        assert_eq!(winner(&Board::parse("XXX/OO./...").unwrap()), Some(Player::X));
        assert_eq!(winner(&Board::parse("OX./OX./O.X").unwrap()), Some(Player::O));
        assert_eq!(winner(&Board::parse("XO./OX./..X").unwrap()), Some(Player::X));
        assert_eq!(winner(&Board::parse("XXO/XO./O..").unwrap()), Some(Player::O));
        assert_eq!(winner(&Board::parse("XO./.../...").unwrap()), None);
    }

    #[test]
    fn test_terminal_and_utility() {
        let draw = Board::parse("XOX/XOO/OXX").unwrap();
        assert!(terminal(&draw));
        assert_eq!(utility(&draw), 0);

        let x_won = Board::parse("XXX/OO./...").unwrap();
        assert!(terminal(&x_won));
        assert_eq!(utility(&x_won), 1);

        let o_won = Board::parse("OX./OX./O.X").unwrap();
        assert_eq!(utility(&o_won), -1);

        assert!(!terminal(&Board::parse("XO./.../...").unwrap()));
    }
}
