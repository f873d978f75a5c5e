//! Trigrid console game.
//!
//! Line-based frontend over the `trigrid` core: prompts on stdout,
//! moves on stdin, logs on stderr.

#![warn(missing_docs)]

mod cli;
mod driver;
mod prompt;
mod render;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trigrid::{Roster, Session};

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let (rows, cols, players) = prompt::board_config(
        &mut input,
        &mut out,
        cli.rows.map(usize::from),
        cli.cols.map(usize::from),
        cli.players.map(usize::from),
    )?;

    let mut names = Vec::with_capacity(players);
    for number in 1..=players {
        names.push(prompt::player_name(&mut input, &mut out, number)?);
    }
    let roster = Roster::new(names)?;
    info!(rows, cols, players, "configuration complete");

    let mut session = Session::new(roster, rows, cols);
    driver::run(&mut session, &mut input, &mut out)
}
