//! Round state integration tests
//!
//! Roster limits, scoring, ranking order and the Rolling-phase guards.

use dicearena::arena::{
    DieFace, GameSettings, PlayerId, RandomRolls, RoundError, RoundPhase, RoundState,
    ScriptedRolls,
};

fn scripted(values: &[u8]) -> RoundState<ScriptedRolls> {
    RoundState::new(
        &GameSettings::default(),
        ScriptedRolls::from_values(values).expect("valid faces"),
    )
}

fn face(v: u8) -> DieFace {
    DieFace::new(v).expect("valid face")
}

fn settle_all<S: dicearena::arena::RollSource>(round: &mut RoundState<S>) -> dicearena::arena::Ranking {
    let pending: Vec<PlayerId> = round.pending().collect();
    let mut ranking = None;
    for id in pending {
        ranking = round.animation_complete(id);
    }
    ranking.expect("last completion settles the round")
}

// ============================================================================
// Roster
// ============================================================================

#[test]
fn test_roster_never_exceeds_six() {
    let mut round = scripted(&[1]);
    for _ in 0..6 {
        round.add_player().expect("seat available");
    }
    assert_eq!(round.players().len(), 6);

    assert_eq!(round.add_player(), Err(RoundError::RosterFull { max: 6 }));
    assert_eq!(round.add_player(), Err(RoundError::RosterFull { max: 6 }));
    assert_eq!(round.players().len(), 6);
}

#[test]
fn test_default_names() {
    let mut round = scripted(&[1]);
    round.add_player().unwrap();
    round.add_player().unwrap();
    let names: Vec<&str> = round.players().iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(names, vec!["Player 1", "Player 2"]);
}

#[test]
fn test_custom_name_prefix() {
    let settings = GameSettings {
        name_prefix: "Pemain".to_string(),
        ..GameSettings::default()
    };
    let mut round = RoundState::new(&settings, ScriptedRolls::from_values(&[1]).unwrap());
    round.add_player().unwrap();
    assert_eq!(round.players()[0].display_name, "Pemain 1");
}

#[test]
fn test_rename_and_unknown_player() {
    let mut round = scripted(&[1]);
    let id = round.add_player().unwrap();
    round.rename_player(id, "Ana").unwrap();
    assert_eq!(round.player(id).unwrap().display_name, "Ana");

    assert_eq!(
        round.rename_player(PlayerId(99), "Ghost"),
        Err(RoundError::UnknownPlayer(PlayerId(99)))
    );
    assert_eq!(
        round.remove_player(PlayerId(99)).unwrap_err(),
        RoundError::UnknownPlayer(PlayerId(99))
    );
}

// ============================================================================
// Rolling and ranking
// ============================================================================

#[test]
fn test_two_players_seeded_draws() {
    let mut round = scripted(&[6, 3]);
    let p1 = round.add_player().unwrap();
    let p2 = round.add_player().unwrap();

    let orders = round.roll_all().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!((orders[0].player, orders[0].face), (p1, face(6)));
    assert_eq!((orders[1].player, orders[1].face), (p2, face(3)));
    assert_eq!(round.phase(), RoundPhase::Rolling);

    let ranking = settle_all(&mut round);
    assert_eq!(round.player(p1).unwrap().total_score(), 6);
    assert_eq!(round.player(p2).unwrap().total_score(), 3);
    assert_eq!(ranking.ids(), vec![p1, p2]);
    assert_eq!(round.phase(), RoundPhase::Settled);
}

#[test]
fn test_ties_keep_insertion_order() {
    let mut round = scripted(&[4]);
    let p1 = round.add_player().unwrap();
    let p2 = round.add_player().unwrap();
    let p3 = round.add_player().unwrap();

    round.roll_all().unwrap();
    let ranking = round.settle();
    assert_eq!(ranking.ids(), vec![p1, p2, p3]);
}

#[test]
fn test_ranking_sorted_and_stable_over_many_rounds() {
    let mut round = RoundState::new(&GameSettings::default(), RandomRolls::seeded(2024));
    let seats: Vec<PlayerId> = (0..6).map(|_| round.add_player().unwrap()).collect();

    for _ in 0..25 {
        round.roll_all().unwrap();
        let ranking = round.settle();
        for pair in ranking.entries.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
            if pair[0].total_score == pair[1].total_score {
                let first = seats.iter().position(|id| *id == pair[0].id).unwrap();
                let second = seats.iter().position(|id| *id == pair[1].id).unwrap();
                assert!(first < second, "tie broke seating order");
            }
        }
    }
    assert_eq!(round.rounds_played(), 25);
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut round = scripted(&[2, 5, 6]);
    let p1 = round.add_player().unwrap();

    for expected in [2, 7, 13] {
        round.roll_all().unwrap();
        round.settle();
        assert_eq!(round.player(p1).unwrap().total_score(), expected);
    }
    assert_eq!(round.player(p1).unwrap().last_roll(), Some(face(6)));
}

#[test]
fn test_roll_with_no_players_changes_nothing() {
    let mut round = scripted(&[1]);
    assert_eq!(round.roll_all(), Err(RoundError::NoPlayers));
    assert_eq!(round.phase(), RoundPhase::Idle);
    assert_eq!(round.pending().count(), 0);
    assert_eq!(round.rounds_played(), 0);
}

#[test]
fn test_removed_player_absent_from_later_rankings() {
    let mut round = scripted(&[5, 2, 6]);
    let p1 = round.add_player().unwrap();
    let p2 = round.add_player().unwrap();
    let p3 = round.add_player().unwrap();

    round.roll_all().unwrap();
    round.settle();
    round.remove_player(p2).unwrap();

    round.roll_all().unwrap();
    let ranking = round.settle();
    assert!(!ranking.ids().contains(&p2));
    assert_eq!(ranking.entries.len(), 2);
    assert!(ranking.ids().contains(&p1));
    assert!(ranking.ids().contains(&p3));
}

// ============================================================================
// Rolling-phase guards
// ============================================================================

#[test]
fn test_no_roll_remove_or_reset_while_rolling() {
    let mut round = scripted(&[3]);
    let p1 = round.add_player().unwrap();
    round.roll_all().unwrap();

    assert_eq!(round.roll_all(), Err(RoundError::RollInProgress));
    assert_eq!(round.remove_player(p1).unwrap_err(), RoundError::RollInProgress);
    assert_eq!(round.reset_scores(), Err(RoundError::RollInProgress));
    assert_eq!(round.player(p1).unwrap().total_score(), 3);

    // Renaming is harmless mid-roll.
    round.rename_player(p1, "Ana").unwrap();

    round.settle();
    assert!(round.roll_all().is_ok());
}

#[test]
fn test_reset_scores_keeps_last_roll() {
    let mut round = scripted(&[6, 1]);
    let p1 = round.add_player().unwrap();
    let p2 = round.add_player().unwrap();
    round.roll_all().unwrap();
    round.settle();

    round.reset_scores().unwrap();
    assert_eq!(round.player(p1).unwrap().total_score(), 0);
    assert_eq!(round.player(p2).unwrap().total_score(), 0);
    assert_eq!(round.player(p1).unwrap().last_roll(), Some(face(6)));
    assert_eq!(round.player(p2).unwrap().last_roll(), Some(face(1)));
}

// ============================================================================
// Ranking as JSON
// ============================================================================

#[test]
fn test_ranking_json_shape() {
    let mut round = scripted(&[2, 5]);
    let p1 = round.add_player().unwrap();
    let p2 = round.add_player().unwrap();
    round.rename_player(p2, "Budi").unwrap();
    round.roll_all().unwrap();
    let ranking = round.settle();

    let value = serde_json::to_value(&ranking).unwrap();
    assert_eq!(value["round"], 1);
    assert_eq!(value["entries"][0]["id"], p2.0);
    assert_eq!(value["entries"][0]["name"], "Budi");
    assert_eq!(value["entries"][0]["total_score"], 5);
    assert_eq!(value["entries"][0]["last_roll"], 5);
    assert_eq!(value["entries"][1]["id"], p1.0);

    let back: dicearena::arena::Ranking = serde_json::from_value(value).unwrap();
    assert_eq!(back, ranking);
}

#[test]
fn test_ranking_json_rejects_impossible_face() {
    let text = r#"{"round":1,"entries":[{"id":1,"name":"Ana","total_score":7,"last_roll":7}]}"#;
    assert!(serde_json::from_str::<dicearena::arena::Ranking>(text).is_err());
}
