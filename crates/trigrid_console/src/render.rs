//! Board and statistics rendering.

use std::io::{self, Write};

use trigrid::{Board, Cell, Coord, Roster, StatisticsLedger};
use unicode_width::UnicodeWidthStr;

/// Renders the symbol legend and the lettered, numbered grid.
pub fn board(out: &mut impl Write, board: &Board, roster: &Roster) -> io::Result<()> {
    writeln!(out, "Players:")?;
    for player in roster.iter() {
        writeln!(out, "{} - {}", player.symbol(), player.name())?;
    }
    writeln!(out)?;

    column_numbers(out, board.cols())?;
    for row in 0..board.rows() {
        rule(out, board.cols())?;
        let label = row_label(row);
        write!(out, "{label} ")?;
        for col in 0..board.cols() {
            let mark = match board.get(Coord::new(row, col)) {
                Some(Cell::Occupied(symbol)) => symbol.as_char(),
                _ => ' ',
            };
            write!(out, "| {mark} ")?;
        }
        writeln!(out, "| {label}")?;
    }
    rule(out, board.cols())?;
    column_numbers(out, board.cols())?;
    Ok(())
}

fn column_numbers(out: &mut impl Write, cols: usize) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 1..=cols {
        write!(out, "{col:<4}")?;
    }
    writeln!(out)
}

fn rule(out: &mut impl Write, cols: usize) -> io::Result<()> {
    write!(out, "   ")?;
    for _ in 0..cols {
        write!(out, "----")?;
    }
    writeln!(out, "-")
}

// The frontend caps dimensions at 26, so a row label is always a letter.
fn row_label(row: usize) -> char {
    (b'A' + row as u8) as char
}

/// Renders the total and the per-name win/loss/draw table in ledger
/// (lexicographic) order.
pub fn stats(out: &mut impl Write, ledger: &StatisticsLedger, total_games: u32) -> io::Result<()> {
    const NAME_HEADER: &str = "Player Name";
    let name_width = ledger
        .iter()
        .map(|(name, _)| name.width())
        .fold(NAME_HEADER.width(), usize::max);
    let border = "-".repeat(name_width + 24);

    writeln!(out, "Total games played = {total_games}")?;
    writeln!(out, "{border}")?;
    writeln!(out, "| {} | WIN | LOSS | DRAW |", pad(NAME_HEADER, name_width))?;
    writeln!(out, "{border}")?;
    for (name, stats) in ledger.iter() {
        writeln!(
            out,
            "| {} | {:<3} | {:<4} | {:<4} |",
            pad(name, name_width),
            stats.wins(),
            stats.losses(),
            stats.draws()
        )?;
    }
    writeln!(out, "{border}")?;
    Ok(())
}

// Pads by display width rather than char count.
fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_owned();
    for _ in text.width()..width {
        padded.push(' ');
    }
    padded
}
