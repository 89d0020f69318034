//! Optimal play by exhaustive adversarial search.
//!
//! X maximises utility and O minimises it. Alpha-beta pruning only skips
//! branches that cannot change the decision, so the chosen move is always
//! the first optimal action in row-major order.

use crate::tictactoe::board::{Action, Board, Player};
use crate::tictactoe::game::{empty_cells, player, terminal, utility};

const WORST_FOR_X: i8 = -2;
const WORST_FOR_O: i8 = 2;

/// Best move for the player to move, or `None` when the game is over.
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }

    let mover = player(board);
    let mut nodes = 0u64;
    let mut alpha = WORST_FOR_X;
    let mut beta = WORST_FOR_O;
    let mut best: Option<(i8, Action)> = None;

    for action in empty_cells(board) {
        let value = alpha_beta(&board.with_mark(action, mover), alpha, beta, &mut nodes);
        let improves = match best {
            None => true,
            Some((current, _)) => match mover {
                Player::X => value > current,
                Player::O => value < current,
            },
        };
        if improves {
            best = Some((value, action));
        }
        match mover {
            Player::X => alpha = alpha.max(value),
            Player::O => beta = beta.min(value),
        }
        // A forced win cannot be improved on.
        if (mover == Player::X && value == 1) || (mover == Player::O && value == -1) {
            break;
        }
    }

    tracing::debug!(
        player = %mover,
        nodes,
        value = best.map(|(v, _)| v),
        "minimax search finished"
    );
    best.map(|(_, action)| action)
}

/// Game-theoretic value of `board` under optimal play by both sides.
pub fn value(board: &Board) -> i8 {
    let mut nodes = 0u64;
    alpha_beta(board, WORST_FOR_X, WORST_FOR_O, &mut nodes)
}

fn alpha_beta(board: &Board, mut alpha: i8, mut beta: i8, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if terminal(board) {
        return utility(board);
    }

    let mover = player(board);
    match mover {
        Player::X => {
            let mut best = WORST_FOR_X;
            for action in empty_cells(board) {
                let child = board.with_mark(action, mover);
                best = best.max(alpha_beta(&child, alpha, beta, nodes));
                if best >= beta {
                    break;
                }
                alpha = alpha.max(best);
            }
            best
        }
        Player::O => {
            let mut best = WORST_FOR_O;
            for action in empty_cells(board) {
                let child = board.with_mark(action, mover);
                best = best.min(alpha_beta(&child, alpha, beta, nodes));
                if best <= alpha {
                    break;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::game::{initial_state, result, winner};

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::parse("XXX/OO./...").unwrap();
        assert_eq!(minimax(&board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move, (0, 2) completes the top row
        let board = Board::parse("XX./OO./...").unwrap();
        assert_eq!(minimax(&board), Some((0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move and can finish the middle row
        let board = Board::parse("XX./OO./X..").unwrap();
        assert_eq!(minimax(&board), Some((1, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O to move, X threatens the top row
        let board = Board::parse("XX./.O./...").unwrap();
        assert_eq!(minimax(&board), Some((0, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw_and_first_move_is_corner() {
        let board = initial_state();
        assert_eq!(value(&board), 0);
        assert_eq!(minimax(&board), Some((0, 0)));
    }

    #[test]
    fn test_optimal_self_play_draws() {
        let mut board = initial_state();
        while let Some(action) = minimax(&board) {
            board = result(&board, action).unwrap();
        }
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_value_of_won_board() {
        assert_eq!(value(&Board::parse("OX./OX./O.X").unwrap()), -1);
    }
}
