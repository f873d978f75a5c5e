//! Command-line interface for the trigrid console game.

use clap::Parser;

/// Trigrid — multi-player three-in-a-row for the terminal.
///
/// Anything not supplied as a flag is prompted for interactively.
#[derive(Parser, Debug)]
#[command(name = "trigrid")]
#[command(about = "Multi-player three-in-a-row for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of board rows.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=26))]
    pub rows: Option<u16>,

    /// Number of board columns.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=26))]
    pub cols: Option<u16>,

    /// Number of players (2-7).
    #[arg(long, value_parser = clap::value_parser!(u16).range(2..=7))]
    pub players: Option<u16>,
}
