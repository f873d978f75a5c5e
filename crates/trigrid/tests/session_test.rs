//! Statistics accrual across repeated rounds.

use trigrid::{PlayerName, Roster, RoundOutcome, Session};

fn session(raw: &[&str]) -> Session {
    let names = raw.iter().map(|n| PlayerName::parse(n).unwrap()).collect();
    Session::new(Roster::new(names).unwrap(), 3, 3)
}

#[test]
fn test_total_games_counts_every_completed_round() {
    let mut session = session(&["Ada", "Grace"]);
    assert_eq!(session.total_games(), 0);

    session.record(RoundOutcome::WonBy(0));
    session.record(RoundOutcome::Draw);
    session.record(RoundOutcome::WonBy(1));

    assert_eq!(session.total_games(), 3);
}

#[test]
fn test_stats_accumulate_across_rounds() {
    let mut session = session(&["Ada", "Grace", "Edsger"]);
    session.record(RoundOutcome::WonBy(0));
    session.record(RoundOutcome::WonBy(0));
    session.record(RoundOutcome::Draw);

    let ada = session.ledger().get("Ada").unwrap();
    assert_eq!((*ada.wins(), *ada.losses(), *ada.draws()), (2, 0, 1));

    let grace = session.ledger().get("Grace").unwrap();
    assert_eq!((*grace.wins(), *grace.losses(), *grace.draws()), (0, 2, 1));
}

#[test]
fn test_fresh_rounds_share_dimensions_and_roster_size() {
    let session = session(&["Ada", "Grace"]);
    let round = session.start_round();
    assert_eq!(round.board().rows(), 3);
    assert_eq!(round.board().cols(), 3);
    assert_eq!(round.current_player(), 0);

    // A second round starts clean regardless of the first one's state.
    let again = session.start_round();
    assert!(!again.board().is_full());
    assert_eq!(again.current_player(), 0);
}

#[test]
fn test_duplicate_names_alias_one_ledger_entry() {
    let mut session = session(&["Ada", "Ada", "Grace"]);
    session.record(RoundOutcome::WonBy(1));

    // Both Adas write to the same entry: one win, one loss.
    assert_eq!(session.ledger().len(), 2);
    let ada = session.ledger().get("Ada").unwrap();
    assert_eq!((*ada.wins(), *ada.losses()), (1, 1));
}
