//! Integration tests for the knockout bracket: construction and advancement.

use football_tournament_web::{
    create_bracket, record_knockout_result, KnockoutRounds, Slot, Team, TeamId, TournamentError,
};

fn registry(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n)).collect()
}

fn ids(teams: &[Team]) -> Vec<TeamId> {
    teams.iter().map(|t| t.id).collect()
}

fn four_team_bracket() -> (Vec<Team>, Vec<TeamId>, KnockoutRounds) {
    let teams = registry(&["A", "B", "C", "D"]);
    let seeds = ids(&teams);
    let rounds = create_bracket(4, &seeds, &teams).unwrap();
    (teams, seeds, rounds)
}

#[test]
fn rejects_non_power_of_two_sizes() {
    let teams = registry(&["A", "B"]);
    let seeds = ids(&teams);
    for bad in [0, 1, 3, 6, 12] {
        assert_eq!(
            create_bracket(bad, &seeds, &teams),
            Err(TournamentError::InvalidBracketSize { requested: bad })
        );
    }
}

#[test]
fn eight_team_bracket_has_three_rounds_plus_champion() {
    let teams = registry(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let rounds = create_bracket(8, &ids(&teams), &teams).unwrap();
    assert_eq!(rounds.len(), 4);
    assert_eq!(rounds[&0].len(), 4);
    assert_eq!(rounds[&1].len(), 2);
    assert_eq!(rounds[&2].len(), 1);
    assert_eq!(rounds[&3].len(), 1);

    let champion = &rounds[&3][0];
    assert_eq!(champion.slot2, None);
    assert_eq!(
        champion.slot1,
        Slot::Winner {
            round: 2,
            match_index: 0
        }
    );
    assert!(!champion.played);
    assert!(champion.waiting);
}

#[test]
fn two_team_bracket_is_its_own_final() {
    let teams = registry(&["A", "B"]);
    let seeds = ids(&teams);
    let rounds = create_bracket(2, &seeds, &teams).unwrap();
    assert_eq!(rounds.len(), 1);
    let m = &rounds[&0][0];
    assert_eq!(m.slot1, Slot::Team { id: seeds[0] });
    assert_eq!(m.slot2, Some(Slot::Team { id: seeds[1] }));
    assert!(!m.waiting);
}

#[test]
fn round_zero_pairs_consecutive_seeds() {
    let (_, seeds, rounds) = four_team_bracket();
    let r0 = &rounds[&0];
    assert_eq!(r0[0].slot1, Slot::Team { id: seeds[0] });
    assert_eq!(r0[0].slot2, Some(Slot::Team { id: seeds[1] }));
    assert_eq!(r0[1].slot1, Slot::Team { id: seeds[2] });
    assert_eq!(r0[1].slot2, Some(Slot::Team { id: seeds[3] }));
    assert_eq!(r0[0].team1_name.as_deref(), Some("A"));
    assert_eq!(r0[1].team2_name.as_deref(), Some("D"));
}

#[test]
fn later_rounds_pair_winner_placeholders() {
    let (_, _, rounds) = four_team_bracket();
    let r1 = &rounds[&1][0];
    assert_eq!(
        r1.slot1,
        Slot::Winner {
            round: 0,
            match_index: 0
        }
    );
    assert_eq!(
        r1.slot2,
        Some(Slot::Winner {
            round: 0,
            match_index: 1
        })
    );
    assert_eq!(r1.team1_name, None);
    assert!(r1.waiting);
}

#[test]
fn missing_seeds_become_byes() {
    let teams = registry(&["A", "B", "C", "D", "E"]);
    let rounds = create_bracket(8, &ids(&teams), &teams).unwrap();
    let r0 = &rounds[&0];
    assert!(!r0[0].waiting); // A vs B
    assert!(!r0[1].waiting); // C vs D
    assert_eq!(r0[2].slot2, Some(Slot::Bye)); // E vs bye
    assert!(r0[2].waiting);
    assert_eq!(r0[3].slot1, Slot::Bye); // bye vs bye
    assert_eq!(r0[3].slot2, Some(Slot::Bye));
    assert!(r0[3].waiting);
}

#[test]
fn tied_score_is_rejected_and_state_unchanged() {
    let (teams, _, mut rounds) = four_team_bracket();
    let before = rounds.clone();
    assert_eq!(
        record_knockout_result(&mut rounds, 0, 0, 2, 2, &teams),
        Err(TournamentError::TiedKnockoutScore)
    );
    assert_eq!(rounds, before);
}

#[test]
fn cannot_record_until_both_slots_are_concrete() {
    let (teams, _, mut rounds) = four_team_bracket();
    assert_eq!(
        record_knockout_result(&mut rounds, 1, 0, 1, 0, &teams),
        Err(TournamentError::SlotsNotFilled {
            round: 1,
            match_index: 0
        })
    );
    // The champion round has a single entrant, never a recordable result.
    assert_eq!(
        record_knockout_result(&mut rounds, 2, 0, 1, 0, &teams),
        Err(TournamentError::SlotsNotFilled {
            round: 2,
            match_index: 0
        })
    );
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let (teams, _, mut rounds) = four_team_bracket();
    assert_eq!(
        record_knockout_result(&mut rounds, 5, 0, 1, 0, &teams),
        Err(TournamentError::KnockoutMatchNotFound {
            round: 5,
            match_index: 0
        })
    );
    assert_eq!(
        record_knockout_result(&mut rounds, 0, 9, 1, 0, &teams),
        Err(TournamentError::KnockoutMatchNotFound {
            round: 0,
            match_index: 9
        })
    );
}

#[test]
fn winners_advance_even_to_slot1_odd_to_slot2() {
    let (teams, seeds, mut rounds) = four_team_bracket();

    // Round 0 match 0: A beats B 2-0 -> round 1 slot1.
    record_knockout_result(&mut rounds, 0, 0, 2, 0, &teams).unwrap();
    let r1 = &rounds[&1][0];
    assert_eq!(r1.slot1, Slot::Team { id: seeds[0] });
    assert_eq!(r1.team1_name.as_deref(), Some("A"));
    assert!(r1.waiting); // slot2 still pending

    // Round 0 match 1: D beats C 3-1 -> round 1 slot2.
    record_knockout_result(&mut rounds, 0, 1, 1, 3, &teams).unwrap();
    let r1 = &rounds[&1][0];
    assert_eq!(r1.slot2, Some(Slot::Team { id: seeds[3] }));
    assert_eq!(r1.team2_name.as_deref(), Some("D"));
    assert!(!r1.waiting);

    // Final: A beats D 4-2 -> champion slot is A, decided.
    record_knockout_result(&mut rounds, 1, 0, 4, 2, &teams).unwrap();
    let champion = &rounds[&2][0];
    assert_eq!(champion.slot1, Slot::Team { id: seeds[0] });
    assert_eq!(champion.team1_name.as_deref(), Some("A"));
    assert!(champion.played);
    assert!(!champion.waiting);
}

#[test]
fn rerecording_with_same_winner_just_overwrites() {
    let (teams, seeds, mut rounds) = four_team_bracket();
    record_knockout_result(&mut rounds, 0, 0, 2, 0, &teams).unwrap();
    record_knockout_result(&mut rounds, 0, 0, 5, 1, &teams).unwrap();

    let m = &rounds[&0][0];
    assert_eq!(m.team1_score, Some(5));
    assert_eq!(m.team2_score, Some(1));
    assert_eq!(rounds[&1][0].slot1, Slot::Team { id: seeds[0] });
}

#[test]
fn flipping_a_result_invalidates_downstream_results() {
    let (teams, seeds, mut rounds) = four_team_bracket();
    record_knockout_result(&mut rounds, 0, 0, 2, 0, &teams).unwrap();
    record_knockout_result(&mut rounds, 0, 1, 1, 3, &teams).unwrap();
    record_knockout_result(&mut rounds, 1, 0, 4, 2, &teams).unwrap();

    // Edit round 0 match 0 so B wins instead of A.
    record_knockout_result(&mut rounds, 0, 0, 0, 5, &teams).unwrap();

    let r1 = &rounds[&1][0];
    assert_eq!(r1.slot1, Slot::Team { id: seeds[1] });
    assert_eq!(r1.team1_name.as_deref(), Some("B"));
    assert_eq!(r1.slot2, Some(Slot::Team { id: seeds[3] })); // D untouched
    assert!(!r1.played);
    assert_eq!(r1.team1_score, None);
    assert_eq!(r1.team2_score, None);
    assert!(!r1.waiting); // both sides concrete, just unplayed again

    let champion = &rounds[&2][0];
    assert_eq!(
        champion.slot1,
        Slot::Winner {
            round: 1,
            match_index: 0
        }
    );
    assert!(!champion.played);
    assert!(champion.waiting);
}
