pub mod knights;
pub mod logic;
pub mod minesweeper;
pub mod tictactoe;

/// Print a result as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
