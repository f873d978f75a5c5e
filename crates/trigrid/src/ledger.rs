//! Cumulative per-name statistics across a session.

use std::collections::BTreeMap;

use crate::roster::Roster;
use crate::round::RoundOutcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win/loss/draw counters for one name.
///
/// Created zeroed the first time a name is recorded, never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerStats {
    wins: u32,
    losses: u32,
    draws: u32,
}

/// Name-keyed statistics held for the life of the process.
///
/// Keys are the exact name strings, compared and ordered as strings
/// (lexicographically). Two players sharing a name share one entry and
/// each contributes its own increment per round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsLedger {
    entries: BTreeMap<String, PlayerStats>,
}

impl StatisticsLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one completed round.
    ///
    /// `Draw` adds a draw for every listed player; `WonBy(i)` adds a win
    /// for the player at index `i` and a loss for everyone else.
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn record(&mut self, roster: &Roster, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Draw => {
                for player in roster.iter() {
                    self.entry(player.name().as_str()).draws += 1;
                }
            }
            RoundOutcome::WonBy(winner) => {
                for (index, player) in roster.iter().enumerate() {
                    let stats = self.entry(player.name().as_str());
                    if index == winner {
                        stats.wins += 1;
                    } else {
                        stats.losses += 1;
                    }
                }
            }
        }
        debug!(entries = self.entries.len(), "ledger updated");
    }

    fn entry(&mut self, name: &str) -> &mut PlayerStats {
        self.entries.entry(name.to_owned()).or_default()
    }

    /// Stats recorded under `name`, if any round has listed it.
    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.entries.get(name)
    }

    /// Entries in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before any round has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::PlayerName;

    fn roster(raw: &[&str]) -> Roster {
        let names = raw.iter().map(|n| PlayerName::parse(n).unwrap()).collect();
        Roster::new(names).unwrap()
    }

    #[test]
    fn test_win_increments_winner_and_losers() {
        let mut ledger = StatisticsLedger::new();
        let roster = roster(&["Ada", "Grace", "Edsger"]);
        ledger.record(&roster, RoundOutcome::WonBy(1));

        assert_eq!(*ledger.get("Grace").unwrap().wins(), 1);
        assert_eq!(*ledger.get("Grace").unwrap().losses(), 0);
        assert_eq!(*ledger.get("Ada").unwrap().losses(), 1);
        assert_eq!(*ledger.get("Edsger").unwrap().losses(), 1);
    }

    #[test]
    fn test_draw_increments_everyone() {
        let mut ledger = StatisticsLedger::new();
        let roster = roster(&["Ada", "Grace"]);
        ledger.record(&roster, RoundOutcome::Draw);

        for name in ["Ada", "Grace"] {
            let stats = ledger.get(name).unwrap();
            assert_eq!((*stats.wins(), *stats.losses(), *stats.draws()), (0, 0, 1));
        }
    }

    #[test]
    fn test_entries_created_lazily() {
        let ledger = StatisticsLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.get("Ada"), None);
    }

    #[test]
    fn test_duplicate_names_share_one_entry() {
        let mut ledger = StatisticsLedger::new();
        let roster = roster(&["Ada", "Ada"]);
        ledger.record(&roster, RoundOutcome::WonBy(0));

        assert_eq!(ledger.len(), 1);
        let stats = ledger.get("Ada").unwrap();
        // Index 0 wins, index 1 loses; the shared entry sees both.
        assert_eq!((*stats.wins(), *stats.losses()), (1, 1));
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut ledger = StatisticsLedger::new();
        let roster = roster(&["Grace", "Ada"]);
        ledger.record(&roster, RoundOutcome::Draw);

        let names: Vec<&str> = ledger.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }
}
