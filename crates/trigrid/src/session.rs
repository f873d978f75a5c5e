//! Session state across repeated rounds.

use crate::ledger::StatisticsLedger;
use crate::roster::Roster;
use crate::round::{Round, RoundOutcome};
use tracing::{debug, info, instrument};

/// Roster, board dimensions and statistics shared by every round of a
/// sitting.
///
/// The session owns the ledger as a plain value; nothing here blocks.
/// The frontend runs each round to its terminal state, feeds the outcome
/// back through [`Session::record`], and decides whether to continue.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    rows: usize,
    cols: usize,
    ledger: StatisticsLedger,
    total_games: u32,
}

impl Session {
    /// Opens a session; dimensions hold for every round.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn new(roster: Roster, rows: usize, cols: usize) -> Self {
        info!(rows, cols, "session opened");
        Self {
            roster,
            rows,
            cols,
            ledger: StatisticsLedger::new(),
            total_games: 0,
        }
    }

    /// A fresh round on an empty board.
    pub fn start_round(&self) -> Round {
        debug!(game = self.total_games + 1, "starting round");
        Round::new(self.rows, self.cols, self.roster.len())
    }

    /// Books a finished round: ledger update plus the game counter,
    /// which advances once per completed round regardless of outcome.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.ledger.record(&self.roster, outcome);
        self.total_games += 1;
        info!(total_games = self.total_games, "round booked");
    }

    /// The players, in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Statistics accrued so far.
    pub fn ledger(&self) -> &StatisticsLedger {
        &self.ledger
    }

    /// Completed rounds this session.
    pub fn total_games(&self) -> u32 {
        self.total_games
    }
}
