//! CLI integration tests
//!
//! These run the built binary and check what it prints and its exit status.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cs50ai-cli"))
}

/// Run in an empty directory so no stray cs50ai.toml is picked up
fn run(dir: &TempDir, args: &[&str]) -> Output {
    cli()
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_best_move_text() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["tictactoe", "best-move", "XX./OO./..."]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Best move for X: 0 2"));
}

#[test]
fn test_best_move_json() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["tictactoe", "best-move", "XX./.O./...", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], serde_json::json!([0, 2]));
    assert_eq!(json["player"], "O");
}

#[test]
fn test_invalid_board_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["tictactoe", "best-move", "OOO/.../..."]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: [ERR_INVALID_BOARD]"));
}

#[test]
fn test_self_play_ends_in_tie() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["tictactoe", "self-play"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Game Over: Tie."));
}

#[test]
fn test_interactive_play_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = cli()
        .current_dir(dir.path())
        .args(["tictactoe", "play", "--human", "o"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Computer opens at (0, 0). Invalid and occupied moves are re-prompted.
    // O never blocks the top row, so X wins with input to spare.
    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin
            .write_all(b"nonsense\n0 0\n1 1\n0 1\n1 0\n2 2\n2 0\n0 2\n1 2\n2 1\n")
            .unwrap();
    }
    let output = child.wait_with_output().unwrap();
    let text = stdout(&output);

    assert!(text.contains("You play O."));
    assert!(text.contains("Computer plays 0 0"));
    assert!(text.contains("Enter a row and a column"));
    assert!(text.contains("already occupied"));
    assert!(text.contains("Game Over: X wins."));
}

#[test]
fn test_autoplay_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let args = [
        "minesweeper",
        "autoplay",
        "--seed",
        "17",
        "--games",
        "3",
        "--json",
    ];
    let first: serde_json::Value = serde_json::from_slice(&run(&dir, &args).stdout).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&run(&dir, &args).stdout).unwrap();

    assert_eq!(first["games"], second["games"]);
    assert_eq!(first["seed"], 17);
}

#[test]
fn test_autoplay_text_with_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cs50ai.toml"),
        "[minesweeper]\nheight = 4\nwidth = 4\nmines = 0\nseed = 2\n",
    )
    .unwrap();

    let output = run(&dir, &["minesweeper", "autoplay", "--show-board"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Won 1 of 1 games on a 4x4 board with 0 mines (seed 2)"));
    assert!(text.contains("| | | | |"));
}

#[test]
fn test_flags_override_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[minesweeper]\nheight = 3\nwidth = 3\nmines = 1\n").unwrap();

    let output = run(
        &dir,
        &[
            "--config",
            config.to_str().unwrap(),
            "minesweeper",
            "autoplay",
            "--mines",
            "2",
            "--seed",
            "1",
            "--json",
        ],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["height"], 3);
    assert_eq!(json["mines"], 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cs50ai.toml"), "[minesweeper]\nmines = 1000\n").unwrap();

    let output = run(&dir, &["logic", "show", "p"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}

#[test]
fn test_oversized_board_flags_are_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &dir,
        &[
            "minesweeper",
            "autoplay",
            "--height",
            "8589934592",
            "--width",
            "8589934592",
            "--seed",
            "1",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}

#[test]
fn test_knights_builtin_puzzles() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["knights", "solve"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Puzzle 0\n    A is a Knave\n"));
    assert!(text.contains("Puzzle 3\n    A is a Knight\n    B is a Knave\n    C is a Knight\n"));
}

#[test]
fn test_knights_from_file_json() {
    let dir = TempDir::new().unwrap();
    let puzzle = dir.path().join("pair.yaml");
    fs::write(
        &puzzle,
        "schema_version: 0\ntitle: Pair\ncharacters: [A, B]\nstatements:\n  - speaker: A\n    says: '\"A is a Knave\" and \"B is a Knave\"'\n",
    )
    .unwrap();

    let output = run(
        &dir,
        &["knights", "solve", "--file", puzzle.to_str().unwrap(), "--json"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["solutions"][0]["title"], "Pair");
    assert_eq!(
        json["solutions"][0]["entailed"],
        serde_json::json!(["A is a Knave", "B is a Knight"])
    );
}

#[test]
fn test_logic_entails() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &dir,
        &[
            "logic", "entails", "--kb", "rain => wet", "--kb", "rain", "--query", "wet",
        ],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("wet: entailed"));
}

#[test]
fn test_logic_show() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["logic", "show", "a <=> not b"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Biconditional(a, Not(b))"));
    assert!(text.contains("symbols: a, b"));
}
