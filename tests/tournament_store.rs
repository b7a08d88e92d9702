mod common;

use common::{open_stores, open_stores_with, Stores};
use swiss_forum::errors::StoreError;
use swiss_forum::pairing::OddPlayerPolicy;

const DEFAULT: i64 = 1;

fn register_all(stores: &Stores, tournament_id: i64, names: &[&str]) -> Vec<i64> {
    names
        .iter()
        .map(|name| {
            stores
                .tournaments
                .register_player(tournament_id, name)
                .unwrap()
                .id
        })
        .collect()
}

#[test]
fn test_count_starts_at_zero() {
    let stores = open_stores();
    assert_eq!(stores.tournaments.count_players(DEFAULT).unwrap(), 0);
}

#[test]
fn test_count_after_registrations() {
    let stores = open_stores();

    register_all(&stores, DEFAULT, &["Chandra Nalaar", "Jace Beleren", "Liliana Vess"]);

    assert_eq!(stores.tournaments.count_players(DEFAULT).unwrap(), 3);
}

#[test]
fn test_count_of_unknown_tournament_is_no_data() {
    let stores = open_stores();

    let err = stores.tournaments.count_players(42).unwrap_err();

    assert!(matches!(err, StoreError::NoData(_)));
}

#[test]
fn test_registered_name_is_sanitized() {
    let stores = open_stores();

    let player = stores
        .tournaments
        .register_player(DEFAULT, "<script>x</script>Bob")
        .unwrap();

    assert_eq!(player.name, "Bob");
    let standings = stores.tournaments.player_standings(DEFAULT).unwrap();
    assert_eq!(standings[0].name, player.name);
}

#[test]
fn test_blank_name_rejected() {
    let stores = open_stores();

    let err = stores.tournaments.register_player(DEFAULT, "   ").unwrap_err();

    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert_eq!(stores.count_rows("players"), 0);
}

#[test]
fn test_name_that_cleans_to_nothing_is_rejected() {
    let stores = open_stores();

    let err = stores
        .tournaments
        .register_player(DEFAULT, "<script>alert(1)</script>")
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert_eq!(stores.count_rows("players"), 0);
}

#[test]
fn test_register_into_unknown_tournament() {
    let stores = open_stores();

    let err = stores.tournaments.register_player(99, "Nobody").unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(stores.count_rows("players"), 0);
}

#[test]
fn test_new_players_have_no_matches() {
    let stores = open_stores();
    register_all(&stores, DEFAULT, &["Melpomene Murray", "Randy Schwartz"]);

    let standings = stores.tournaments.player_standings(DEFAULT).unwrap();

    assert_eq!(standings.len(), 2);
    for row in &standings {
        assert_eq!((row.wins, row.matches), (0, 0));
    }
}

#[test]
fn test_report_match_updates_standings() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["Bruno Walton", "Boots O'Neal", "Cathy Burton", "Diane Grant"]);

    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();
    stores.tournaments.report_match(DEFAULT, ids[2], ids[3]).unwrap();

    let standings = stores.tournaments.player_standings(DEFAULT).unwrap();
    for row in &standings {
        assert_eq!(row.matches, 1);
        let expected_wins = if row.player_id == ids[0] || row.player_id == ids[2] { 1 } else { 0 };
        assert_eq!(row.wins, expected_wins, "wins of {}", row.name);
    }
    assert!(standings[0].wins >= standings[3].wins);
    assert_eq!(stores.count_rows("match_results"), 4);
}

#[test]
fn test_failed_result_insert_rolls_back_match() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["Winner", "Loser"]);
    stores
        .raw_tournament()
        .execute_batch(
            "CREATE TRIGGER reject_losses BEFORE INSERT ON match_results
                WHEN NEW.score = 0
                BEGIN SELECT RAISE(ABORT, 'losses are not accepted'); END;",
        )
        .unwrap();

    let result = stores.tournaments.report_match(DEFAULT, ids[0], ids[1]);

    assert!(result.is_err());
    assert_eq!(stores.count_rows("matches"), 0);
    assert_eq!(stores.count_rows("match_results"), 0);
}

#[test]
fn test_player_cannot_play_themselves() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["Solo"]);

    let err = stores.tournaments.report_match(DEFAULT, ids[0], ids[0]).unwrap_err();

    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[test]
fn test_report_with_unregistered_player() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["Known"]);

    let err = stores.tournaments.report_match(DEFAULT, ids[0], 12345).unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(stores.count_rows("matches"), 0);
}

#[test]
fn test_delete_matches_is_idempotent() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["A", "B"]);
    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();

    assert_eq!(stores.tournaments.delete_matches(DEFAULT).unwrap(), 1);
    assert_eq!(stores.tournaments.delete_matches(DEFAULT).unwrap(), 0);

    let standings = stores.tournaments.player_standings(DEFAULT).unwrap();
    assert!(standings.iter().all(|row| row.matches == 0 && row.wins == 0));
    assert_eq!(stores.count_rows("match_results"), 0);
}

#[test]
fn test_delete_players_leaves_no_orphans() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["A", "B", "C", "D"]);
    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();
    stores.tournaments.report_match(DEFAULT, ids[2], ids[3]).unwrap();

    assert_eq!(stores.tournaments.delete_players(DEFAULT).unwrap(), 4);
    assert_eq!(stores.tournaments.delete_players(DEFAULT).unwrap(), 0);

    assert_eq!(stores.tournaments.count_players(DEFAULT).unwrap(), 0);
    for table in ["players", "tournament_players", "matches", "match_results"] {
        assert_eq!(stores.count_rows(table), 0, "rows left in {}", table);
    }
}

#[test]
fn test_delete_players_keeps_other_tournaments() {
    let stores = open_stores();
    let other = stores.tournaments.create_tournament("Spring Open").unwrap().id;
    let ids = register_all(&stores, DEFAULT, &["A", "B"]);
    let other_ids = register_all(&stores, other, &["C", "D"]);
    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();
    stores.tournaments.report_match(other, other_ids[0], other_ids[1]).unwrap();

    stores.tournaments.delete_players(DEFAULT).unwrap();

    assert_eq!(stores.tournaments.count_players(other).unwrap(), 2);
    let standings = stores.tournaments.player_standings(other).unwrap();
    assert_eq!(standings[0].player_id, other_ids[0]);
    assert_eq!(standings[0].wins, 1);
    assert_eq!(stores.count_rows("matches"), 1);
}

#[test]
fn test_tournaments_are_scored_separately() {
    let stores = open_stores();
    let other = stores.tournaments.create_tournament("Winter Cup").unwrap().id;
    let ids = register_all(&stores, DEFAULT, &["A", "B"]);
    register_all(&stores, other, &["C", "D"]);

    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();
    let err = stores.tournaments.report_match(other, ids[0], ids[1]).unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    let standings = stores.tournaments.player_standings(other).unwrap();
    assert!(standings.iter().all(|row| row.matches == 0));
}

#[test]
fn test_pairings_follow_standings() {
    let stores = open_stores();
    let ids = register_all(&stores, DEFAULT, &["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"]);
    stores.tournaments.report_match(DEFAULT, ids[0], ids[1]).unwrap();
    stores.tournaments.report_match(DEFAULT, ids[2], ids[3]).unwrap();

    let pairings = stores.tournaments.swiss_pairings(DEFAULT).unwrap();

    assert_eq!(pairings.len(), 2);
    assert_eq!((pairings[0].id1, pairings[0].id2), (ids[0], ids[2]));
    assert_eq!((pairings[1].id1, pairings[1].id2), (ids[1], ids[3]));
    assert_eq!(pairings[0].name1, "Twilight Sparkle");
}

#[test]
fn test_pairings_reject_odd_field() {
    let stores = open_stores();
    register_all(&stores, DEFAULT, &["A", "B", "C"]);

    let err = stores.tournaments.swiss_pairings(DEFAULT).unwrap_err();

    assert!(matches!(err, StoreError::OddPlayerCount(3)));
}

#[test]
fn test_pairings_drop_last_player() {
    let stores = open_stores_with(OddPlayerPolicy::DropLast);
    let ids = register_all(&stores, DEFAULT, &["A", "B", "C"]);
    stores.tournaments.report_match(DEFAULT, ids[2], ids[0]).unwrap();

    let pairings = stores.tournaments.swiss_pairings(DEFAULT).unwrap();

    assert_eq!(pairings.len(), 1);
    assert_eq!((pairings[0].id1, pairings[0].id2), (ids[2], ids[0]));
}
