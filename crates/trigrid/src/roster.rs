//! Player identity and the validated session roster.

use crate::symbol::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A validated display name: non-empty, letters and spaces only.
///
/// Construction is the proof of validity; soliciting input and looping on
/// rejects is the frontend's job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Parses a raw line into a valid name.
    ///
    /// # Errors
    ///
    /// [`NameError::Empty`] or [`NameError::InvalidCharacter`].
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(found) = raw.chars().find(|ch| !ch.is_alphabetic() && *ch != ' ') {
            return Err(NameError::InvalidCharacter(found));
        }
        Ok(Self(raw.to_owned()))
    }

    /// The name as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Why a raw name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// The line was empty.
    #[display("name must not be empty")]
    Empty,
    /// The line held something other than letters and spaces.
    #[display("name may contain only letters and spaces, found {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

/// A named participant and the symbol assigned by roster position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    symbol: Symbol,
}

/// Reasons a roster cannot be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RosterError {
    /// Fewer names than the smallest playable roster.
    #[display("at least {} players are required, got {_0}", Roster::MIN_PLAYERS)]
    TooFew(#[error(not(source))] usize),
    /// More names than the symbol alphabet can mark.
    #[display("at most {} players are supported, got {_0}", Roster::MAX_PLAYERS)]
    TooMany(#[error(not(source))] usize),
}

/// Turn-ordered players for one session.
///
/// Position determines both turn order and symbol. Names need not be
/// unique; duplicates share one statistics entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Smallest playable roster.
    pub const MIN_PLAYERS: usize = 2;

    /// Bounded by the symbol alphabet.
    pub const MAX_PLAYERS: usize = Symbol::ALL.len();

    /// Builds a roster, assigning symbols by position.
    ///
    /// # Errors
    ///
    /// [`RosterError::TooFew`] or [`RosterError::TooMany`].
    #[instrument(skip(names), fields(players = names.len()))]
    pub fn new(names: Vec<PlayerName>) -> Result<Self, RosterError> {
        if names.len() < Self::MIN_PLAYERS {
            return Err(RosterError::TooFew(names.len()));
        }
        if names.len() > Self::MAX_PLAYERS {
            return Err(RosterError::TooMany(names.len()));
        }
        let players = names
            .into_iter()
            .zip(Symbol::ALL)
            .map(|(name, symbol)| Player { name, symbol })
            .collect();
        info!("roster formed");
        Ok(Self { players })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a constructed roster; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player at `index` in turn order.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
