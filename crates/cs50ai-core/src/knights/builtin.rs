//! The four puzzles of the knights problem set.

use crate::errors::Result;
use crate::knights::puzzle::Puzzle;
use crate::logic::Sentence;

/// A says "I am both a knight and a knave."
pub fn puzzle0() -> Result<Puzzle> {
    let mut puzzle = Puzzle::with_characters("Puzzle 0", &["A"])?;
    let a = puzzle.character("A")?.clone();
    puzzle.says(
        "A",
        Sentence::and(vec![a.knight().clone(), a.knave().clone()]),
    )?;
    Ok(puzzle)
}

/// A says "We are both knaves." B says nothing.
pub fn puzzle1() -> Result<Puzzle> {
    let mut puzzle = Puzzle::with_characters("Puzzle 1", &["A", "B"])?;
    let a = puzzle.character("A")?.clone();
    let b = puzzle.character("B")?.clone();
    puzzle.says("A", Sentence::and(vec![a.knave().clone(), b.knave().clone()]))?;
    Ok(puzzle)
}

/// A says "We are the same kind." B says "We are of different kinds."
pub fn puzzle2() -> Result<Puzzle> {
    let mut puzzle = Puzzle::with_characters("Puzzle 2", &["A", "B"])?;
    let a = puzzle.character("A")?.clone();
    let b = puzzle.character("B")?.clone();
    let same = Sentence::or(vec![
        Sentence::and(vec![a.knight().clone(), b.knight().clone()]),
        Sentence::and(vec![a.knave().clone(), b.knave().clone()]),
    ]);
    let different = Sentence::or(vec![
        Sentence::and(vec![a.knight().clone(), b.knave().clone()]),
        Sentence::and(vec![a.knave().clone(), b.knight().clone()]),
    ]);
    puzzle.says("A", same)?;
    puzzle.says("B", different)?;
    Ok(puzzle)
}

/// A says either "I am a knight." or "I am a knave.", but you don't know which.
/// B says "A said 'I am a knave'." B then says "C is a knave."
/// C says "A is a knight."
pub fn puzzle3() -> Result<Puzzle> {
    let mut puzzle = Puzzle::with_characters("Puzzle 3", &["A", "B", "C"])?;
    let a = puzzle.character("A")?.clone();
    let c = puzzle.character("C")?.clone();

    puzzle.says_one_of("A", vec![a.knight().clone(), a.knave().clone()])?;
    puzzle.says("B", a.claim(a.knave().clone()))?;
    puzzle.says("B", c.knave().clone())?;
    puzzle.says("C", a.knight().clone())?;
    Ok(puzzle)
}

/// All built-in puzzles in order.
///
/// # Errors
///
/// Only fails if a puzzle definition above is malformed.
pub fn builtin_puzzles() -> Result<Vec<Puzzle>> {
    Ok(vec![puzzle0()?, puzzle1()?, puzzle2()?, puzzle3()?])
}
