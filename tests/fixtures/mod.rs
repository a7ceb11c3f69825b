//! Shared test fixtures for board and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::io::Write;
use tempfile::TempDir;

/// The two-category food/clothing board used throughout the docs.
pub const FOOD_AND_CLOTHING: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

/// A larger board with a re-declared category and multi-word text.
pub const FULL_BOARD: &str = "\
img/home.png home
>img/home/yes.png yes
>img/home/no.png no thank you
img/food/plate.png food
>img/food/fries.png french fries
img/drinks/cup.png drinks
>img/drinks/water.png a glass of water, please
img/food/plate.png food
>img/food/watermelon.png watermelon
";

/// Writes `content` to a board file inside a fresh temp directory.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn create_temp_board_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("board.txt");
    std::fs::write(&path, content).expect("Failed to write board file");
    (path, temp_dir)
}

/// Path to the aacboard binary (set by cargo at compile time)
pub fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

/// Builds a command isolated from the user's real configuration.
pub fn aacboard_command(config_home: &Path) -> Command {
    let mut command = Command::new(aacboard_bin());
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    command
}

/// Runs aacboard with `args` against an isolated config directory.
pub fn run_aacboard(config_home: &Path, args: &[&str]) -> Output {
    aacboard_command(config_home)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs aacboard with `args`, feeding `stdin` to the process.
pub fn run_aacboard_with_stdin(config_home: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = aacboard_command(config_home)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}
