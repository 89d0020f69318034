//! Knights and knaves: puzzles encoded as propositional knowledge and
//! solved by model checking.

pub mod builtin;
pub mod puzzle;

pub use builtin::builtin_puzzles;
pub use puzzle::{
    knave_symbol, knight_symbol, solve, Character, CharacterVerdict, Puzzle, Solution, Verdict,
};
