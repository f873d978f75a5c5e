//! Pure game logic for trigrid — multi-player three-in-a-row on a grid
//! of arbitrary size.
//!
//! # Architecture
//!
//! - **Board**: grid storage with placement as the only mutation
//! - **Rules**: pure alignment and draw evaluation over a board
//! - **Round**: the turn state machine from empty board to win or draw
//! - **Roster / Ledger / Session**: players, cumulative statistics, and
//!   the state shared across rounds
//!
//! The crate performs no I/O and never blocks: rejected moves come back
//! as recoverable errors and the frontend re-solicits.
//!
//! # Example
//!
//! ```
//! use trigrid::{Coord, PlayerName, Roster, RoundStatus, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = Roster::new(vec![
//!     PlayerName::parse("Ada")?,
//!     PlayerName::parse("Grace")?,
//! ])?;
//! let session = Session::new(roster, 3, 3);
//!
//! let mut round = session.start_round();
//! round.play(Coord::new(0, 0))?;
//! assert_eq!(round.status(), RoundStatus::InProgress);
//! assert_eq!(round.current_player(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod ledger;
mod roster;
mod round;
mod rules;
mod session;
mod symbol;

pub use board::{Board, Cell, Coord, MoveError};
pub use ledger::{PlayerStats, StatisticsLedger};
pub use roster::{NameError, Player, PlayerName, Roster, RosterError};
pub use round::{Round, RoundOutcome, RoundStatus, TurnError};
pub use rules::draw::is_draw;
pub use rules::win::{WIN_LENGTH, has_alignment};
pub use session::Session;
pub use symbol::Symbol;
