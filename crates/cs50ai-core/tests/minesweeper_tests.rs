mod common;

use common::{autoplay, cells};
use cs50ai_core::minesweeper::{Minesweeper, MinesweeperAi};
use cs50ai_core::SimpleRng;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_inferred_mines_and_safes_are_correct(seed in any::<u64>()) {
        let mut rng = SimpleRng::new(seed);
        let game = Minesweeper::new(8, 8, 8, &mut rng).unwrap();
        let played = autoplay(game, &mut rng);

        for mine in played.ai.mines() {
            prop_assert!(played.game.is_mine(*mine).unwrap());
        }
        for safe in played.ai.safes() {
            prop_assert!(!played.game.is_mine(*safe).unwrap());
        }
    }

    #[test]
    fn prop_sentences_hold_on_the_real_board(seed in any::<u64>()) {
        let mut rng = SimpleRng::new(seed);
        let game = Minesweeper::new(6, 6, 5, &mut rng).unwrap();
        let played = autoplay(game, &mut rng);

        for sentence in played.ai.knowledge() {
            let mines = sentence
                .cells()
                .iter()
                .filter(|c| played.game.is_mine(**c).unwrap())
                .count();
            prop_assert_eq!(mines, sentence.count());
        }
    }
}

#[test]
fn test_safe_moves_never_hit_mines() {
    for seed in 0..50 {
        let mut rng = SimpleRng::new(seed);
        let game = Minesweeper::new(8, 8, 8, &mut rng).unwrap();
        let mut ai = MinesweeperAi::new(8, 8);

        // Reveal one guaranteed-safe cell to seed the knowledge base
        let start = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .find(|cell| !game.is_mine(*cell).unwrap())
            .unwrap();
        ai.add_knowledge(start, game.nearby_mines(start).unwrap())
            .unwrap();

        while let Some(cell) = ai.make_safe_move() {
            assert!(!game.is_mine(cell).unwrap(), "seed {} cell {:?}", seed, cell);
            ai.add_knowledge(cell, game.nearby_mines(cell).unwrap())
                .unwrap();
        }
    }
}

#[test]
fn test_winning_game_flags_every_mine() {
    // A single mine in the corner of an open board is always found once the
    // opposite corner is revealed.
    let game = Minesweeper::with_mines(4, 4, [(0, 0)]).unwrap();
    let mut ai = MinesweeperAi::new(4, 4);
    ai.add_knowledge((3, 3), 0).unwrap();
    while let Some(cell) = ai.make_safe_move() {
        ai.add_knowledge(cell, game.nearby_mines(cell).unwrap())
            .unwrap();
    }

    assert_eq!(ai.mines(), &cells(&[(0, 0)]));
    assert_eq!(ai.moves_made().len(), 15);

    let mut game = game;
    game.flag_all(ai.mines());
    assert!(game.won());
}

#[test]
fn test_autoplay_ends_with_all_safe_cells_or_a_mine() {
    let mut won = 0;
    for seed in 0..30 {
        let mut rng = SimpleRng::new(seed);
        let game = Minesweeper::new(8, 8, 8, &mut rng).unwrap();
        let played = autoplay(game, &mut rng);
        match played.hit_mine {
            Some(cell) => assert!(played.game.is_mine(cell).unwrap()),
            None => {
                assert_eq!(played.revealed.len(), 64 - 8);
                won += 1;
            }
        }
    }
    // The knowledge-based player wins most games on the standard board
    assert!(won > 0);
}
