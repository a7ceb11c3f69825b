//! AAC Board - command-line access to a two-level symbol board
//!
//! Loads a board file, navigates categories, speaks item text (printed to
//! stdout), and edits the board.

use aacboard::cli::{
    AddCategoryArgs, AddItemArgs, CheckArgs, CliResult, ConfigArgs, ExitCode, SelectArgs,
    SessionArgs, ShowArgs,
};
use aacboard::config::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AAC Board - navigate and edit two-level AAC symbol boards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current category (or all categories)
    Show(ShowArgs),
    /// Select symbols in order and print what they speak
    Select(SelectArgs),
    /// Add an item to a category
    Add(AddItemArgs),
    /// Add a category
    AddCategory(AddCategoryArgs),
    /// Verify a board file round-trips through the file format
    Check(CheckArgs),
    /// Interactive session reading selections from stdin
    Session(SessionArgs),
    /// Show or change the configuration file
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        match Config::load() {
            Ok(config) => config.logging.level,
            Err(e) => {
                eprintln!("Warning: Failed to load config: {e:#}");
                "warn".to_string()
            }
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Command) -> CliResult<()> {
    match command {
        Command::Show(args) => args.execute(),
        Command::Select(args) => args.execute(),
        Command::Add(args) => args.execute(),
        Command::AddCategory(args) => args.execute(),
        Command::Check(args) => args.execute(),
        Command::Session(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli.command) {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code.code());
        }
    }
}
