//! The round state machine.

use crate::board::{Board, Coord, MoveError};
use crate::rules::win::has_alignment;
use crate::symbol::Symbol;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The player at this index aligned three cells. Terminal.
    Won(usize),
    /// The board filled with no alignment. Terminal.
    Draw,
}

/// Terminal result of a round, reported to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Won by the player at this index.
    WonBy(usize),
    /// Nobody aligned; the board filled.
    Draw,
}

/// Why a submitted move did not advance the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum TurnError {
    /// The round already reached a terminal state.
    #[display("the round is already over")]
    Finished,
    /// Rejected placement; the same player retries.
    #[display("{_0}")]
    #[from]
    Invalid(MoveError),
}

/// One game from empty board to win or draw.
///
/// Turn order is round-robin over player indices; the symbol for a turn
/// is the alphabet entry at the current index. The round never blocks:
/// a rejected move surfaces as [`TurnError::Invalid`] and the caller
/// re-solicits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    player_count: usize,
    current: usize,
    status: RoundStatus,
}

impl Round {
    /// Starts a round on a fresh board with player index 0 to move.
    ///
    /// `player_count` comes from a validated roster and stays within the
    /// symbol alphabet.
    #[instrument]
    pub fn new(rows: usize, cols: usize, player_count: usize) -> Self {
        debug_assert!((1..=Symbol::ALL.len()).contains(&player_count));
        info!("round started");
        Self {
            board: Board::new(rows, cols),
            player_count,
            current: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the player to move.
    pub fn current_player(&self) -> usize {
        self.current
    }

    /// Symbol of the player to move.
    pub fn current_symbol(&self) -> Symbol {
        Symbol::ALL[self.current]
    }

    /// Current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// The terminal result, once one exists.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.status {
            RoundStatus::InProgress => None,
            RoundStatus::Won(index) => Some(RoundOutcome::WonBy(index)),
            RoundStatus::Draw => Some(RoundOutcome::Draw),
        }
    }

    /// Applies one move for the current player.
    ///
    /// On success the status reflects the transition: a completed
    /// alignment wins for the mover; otherwise a full board draws (win is
    /// checked first, so a move that does both is a win); otherwise the
    /// turn passes to the next index. Only the mover's symbol is checked,
    /// since a move cannot align another symbol.
    ///
    /// # Errors
    ///
    /// [`TurnError::Invalid`] leaves the round untouched and the same
    /// player retries; [`TurnError::Finished`] if the round is over.
    #[instrument(skip(self), fields(player = self.current))]
    pub fn play(&mut self, target: Coord) -> Result<RoundStatus, TurnError> {
        if self.status != RoundStatus::InProgress {
            warn!(status = ?self.status, "move submitted to a finished round");
            return Err(TurnError::Finished);
        }
        let symbol = self.current_symbol();
        self.board.place(target, symbol)?;

        if has_alignment(&self.board, symbol) {
            self.status = RoundStatus::Won(self.current);
            info!(winner = self.current, "round won");
        } else if self.board.is_full() {
            self.status = RoundStatus::Draw;
            info!("round drawn");
        } else {
            self.current = (self.current + 1) % self.player_count;
            debug!(next = self.current, "turn passed");
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_round_robin() {
        let mut round = Round::new(4, 4, 3);
        let mut seen = Vec::new();
        for col in 0..4 {
            seen.push(round.current_player());
            round.play(Coord::new(col, col)).unwrap();
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_rejected_move_keeps_the_turn() {
        let mut round = Round::new(3, 3, 2);
        round.play(Coord::new(0, 0)).unwrap();
        assert_eq!(round.current_player(), 1);
        let err = round.play(Coord::new(0, 0)).unwrap_err();
        assert!(matches!(err, TurnError::Invalid(MoveError::Occupied(_))));
        assert_eq!(round.current_player(), 1);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_finished_round_rejects_moves() {
        let mut round = Round::new(1, 3, 2);
        // A B A fills the board with no run, ending the round in a draw.
        round.play(Coord::new(0, 0)).unwrap();
        round.play(Coord::new(0, 1)).unwrap();
        let status = round.play(Coord::new(0, 2)).unwrap();
        assert_eq!(status, RoundStatus::Draw);
        assert_eq!(round.play(Coord::new(0, 0)), Err(TurnError::Finished));
    }
}
