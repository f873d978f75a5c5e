//! Interactive prompts with validation re-prompt loops.
//!
//! Every prompt loops until the line parses; the core types are the
//! judges of validity. Exhausted input is the one fatal condition.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::warn;
use trigrid::{Coord, PlayerName, Roster};

/// Rows are labeled A-Z in move input, which caps both dimensions.
pub const MAX_DIMENSION: usize = 26;

/// Reads one line, stripping the trailing newline.
fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input closed before the game finished");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Collects board dimensions and player count, prompting for whatever
/// the command line did not supply.
pub fn board_config(
    input: &mut impl BufRead,
    out: &mut impl Write,
    rows: Option<usize>,
    cols: Option<usize>,
    players: Option<usize>,
) -> Result<(usize, usize, usize)> {
    writeln!(out, "Board size will stay the same throughout the session.")?;
    let rows = match rows {
        Some(n) => n,
        None => dimension(input, out, "rows")?,
    };
    let cols = match cols {
        Some(n) => n,
        None => dimension(input, out, "columns")?,
    };
    let players = match players {
        Some(n) => n,
        None => player_count(input, out)?,
    };
    Ok((rows, cols, players))
}

fn dimension(input: &mut impl BufRead, out: &mut impl Write, what: &str) -> Result<usize> {
    loop {
        write!(out, "Enter the number of {what} (1-{MAX_DIMENSION}): ")?;
        out.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=MAX_DIMENSION).contains(&n) => return Ok(n),
            _ => {
                warn!(input = %line, what, "rejected board dimension");
                writeln!(out, "Please enter a number between 1 and {MAX_DIMENSION}.")?;
            }
        }
    }
}

fn player_count(input: &mut impl BufRead, out: &mut impl Write) -> Result<usize> {
    loop {
        write!(
            out,
            "Enter the number of players ({}-{}): ",
            Roster::MIN_PLAYERS,
            Roster::MAX_PLAYERS
        )?;
        out.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if (Roster::MIN_PLAYERS..=Roster::MAX_PLAYERS).contains(&n) => return Ok(n),
            _ => {
                warn!(input = %line, "rejected player count");
                writeln!(
                    out,
                    "Invalid number of players. Enter a value between {} and {}.",
                    Roster::MIN_PLAYERS,
                    Roster::MAX_PLAYERS
                )?;
            }
        }
    }
}

/// Prompts until a valid name is entered for the player at `number`
/// (1-based, as shown to the user).
pub fn player_name(input: &mut impl BufRead, out: &mut impl Write, number: usize) -> Result<PlayerName> {
    loop {
        write!(out, "Enter name for Player {number} (letters only): ")?;
        out.flush()?;
        let line = read_line(input)?;
        match PlayerName::parse(&line) {
            Ok(name) => return Ok(name),
            Err(err) => {
                warn!(input = %line, %err, "rejected player name");
                writeln!(out, "Invalid name. Please enter letters only.")?;
            }
        }
    }
}

/// Solicits a raw candidate move.
///
/// Only the line format is checked here; the board is the sole judge of
/// bounds and emptiness, so an unplayable coordinate still parses.
pub fn candidate_move(input: &mut impl BufRead, out: &mut impl Write) -> Result<Coord> {
    loop {
        write!(out, "Enter your move (e.g. A1): ")?;
        out.flush()?;
        let line = read_line(input)?;
        match parse_move(&line) {
            Some(coord) => return Ok(coord),
            None => {
                warn!(input = %line, "unparseable move");
                writeln!(out, "Moves look like A1: a row letter followed by a column number.")?;
            }
        }
    }
}

/// Parses `A1` (or `a 12`) into a zero-based coordinate.
fn parse_move(line: &str) -> Option<Coord> {
    let mut chars = line.trim().chars();
    let row = match chars.next()? {
        label @ 'A'..='Z' => label as usize - 'A' as usize,
        label @ 'a'..='z' => label as usize - 'a' as usize,
        _ => return None,
    };
    let col: usize = chars.as_str().trim().parse().ok()?;
    if col == 0 {
        return None;
    }
    Some(Coord::new(row, col - 1))
}

/// Asks whether to play another game; anything but a leading `y` ends
/// the session.
pub fn play_again(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "Do you want to play another game? (y/n): ")?;
    out.flush()?;
    let line = read_line(input)?;
    Ok(line
        .trim()
        .chars()
        .next()
        .is_some_and(|ch| ch.eq_ignore_ascii_case(&'y')))
}
