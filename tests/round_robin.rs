//! Integration tests for round-robin match generation.

use football_tournament_web::{generate_round_robin, Team, TeamId};
use std::collections::HashMap;

fn registry(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("Team {i}"))).collect()
}

fn ids(teams: &[Team]) -> Vec<TeamId> {
    teams.iter().map(|t| t.id).collect()
}

/// Unordered pair key for counting pairings.
fn pair(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn fewer_than_two_teams_yields_no_matches() {
    let teams = registry(1);
    assert!(generate_round_robin(&[], &teams, false).is_empty());
    assert!(generate_round_robin(&ids(&teams), &teams, false).is_empty());
    assert!(generate_round_robin(&ids(&teams), &teams, true).is_empty());
}

#[test]
fn single_round_has_n_choose_2_matches() {
    let teams = registry(5);
    let matches = generate_round_robin(&ids(&teams), &teams, false);
    assert_eq!(matches.len(), 10); // 5 * 4 / 2
    for m in &matches {
        assert!(!m.played);
        assert_eq!(m.team1_score, None);
        assert_eq!(m.team2_score, None);
    }
}

#[test]
fn doubled_round_has_n_times_n_minus_one_matches() {
    let teams = registry(4);
    let matches = generate_round_robin(&ids(&teams), &teams, true);
    assert_eq!(matches.len(), 12); // 4 * 3
}

#[test]
fn every_pair_appears_exactly_once() {
    let teams = registry(4);
    let matches = generate_round_robin(&ids(&teams), &teams, false);
    let mut counts: HashMap<(TeamId, TeamId), u32> = HashMap::new();
    for m in &matches {
        *counts.entry(pair(m.team1_id, m.team2_id)).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&c| c == 1));
}

#[test]
fn doubling_mirrors_every_pairing() {
    let teams = registry(3);
    let roster = ids(&teams);
    let matches = generate_round_robin(&roster, &teams, true);
    for (i, &a) in roster.iter().enumerate() {
        for &b in &roster[i + 1..] {
            assert_eq!(
                matches
                    .iter()
                    .filter(|m| m.team1_id == a && m.team2_id == b)
                    .count(),
                1
            );
            assert_eq!(
                matches
                    .iter()
                    .filter(|m| m.team1_id == b && m.team2_id == a)
                    .count(),
                1
            );
        }
    }
}

#[test]
fn names_are_cached_from_registry() {
    let teams = registry(2);
    let matches = generate_round_robin(&ids(&teams), &teams, false);
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    let name_of = |id: TeamId| teams.iter().find(|t| t.id == id).map(|t| t.name.clone());
    assert_eq!(m.team1_name, name_of(m.team1_id));
    assert_eq!(m.team2_name, name_of(m.team2_id));
}

#[test]
fn regeneration_replaces_matches_with_fresh_ids() {
    let teams = registry(4);
    let roster = ids(&teams);
    let first = generate_round_robin(&roster, &teams, false);
    let second = generate_round_robin(&roster, &teams, false);
    assert_eq!(first.len(), second.len());
    for m in &second {
        assert!(first.iter().all(|f| f.id != m.id));
    }
    // Same pairings both times.
    let pairs = |ms: &[football_tournament_web::Match]| {
        let mut ps: Vec<_> = ms.iter().map(|m| pair(m.team1_id, m.team2_id)).collect();
        ps.sort();
        ps
    };
    assert_eq!(pairs(&first), pairs(&second));
}
