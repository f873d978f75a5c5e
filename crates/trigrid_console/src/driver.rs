//! The blocking session loop.
//!
//! Wires prompts and rendering to the core: the round signals "retry"
//! through its error type and the loop re-solicits, so invalid input
//! never ends a game.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use trigrid::{RoundOutcome, RoundStatus, Session};

use crate::{prompt, render};

/// Plays rounds until the players decline to continue.
pub fn run(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        play_round(session, input, out)?;
        render::stats(out, session.ledger(), session.total_games())?;
        if !prompt::play_again(input, out)? {
            info!(total_games = session.total_games(), "session ended");
            return Ok(());
        }
    }
}

fn play_round(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut round = session.start_round();

    let outcome = loop {
        render::board(out, round.board(), session.roster())?;
        let player = session
            .roster()
            .get(round.current_player())
            .context("current player index outside roster")?;
        writeln!(out, "{}'s turn ({}):", player.name(), player.symbol())?;

        let candidate = prompt::candidate_move(input, out)?;
        match round.play(candidate) {
            Ok(RoundStatus::Won(index)) => break RoundOutcome::WonBy(index),
            Ok(RoundStatus::Draw) => break RoundOutcome::Draw,
            Ok(RoundStatus::InProgress) => {}
            Err(err) => {
                warn!(%err, "move rejected");
                writeln!(out, "Invalid move. Try again.")?;
            }
        }
    };

    render::board(out, round.board(), session.roster())?;
    match outcome {
        RoundOutcome::WonBy(index) => {
            let winner = session
                .roster()
                .get(index)
                .context("winner index outside roster")?;
            writeln!(out, "{} wins!", winner.name())?;
        }
        RoundOutcome::Draw => writeln!(out, "It's a draw!")?,
    }
    session.record(outcome);
    Ok(())
}
