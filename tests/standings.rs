//! Integration tests for the standings calculator.

use football_tournament_web::{compute_standings, Match, Team, TeamId};

fn played(t1: TeamId, t2: TeamId, s1: u32, s2: u32, teams: &[Team]) -> Match {
    let mut m = Match::new(t1, t2, teams);
    m.team1_score = Some(s1);
    m.team2_score = Some(s2);
    m.played = true;
    m
}

fn ids(teams: &[Team]) -> Vec<TeamId> {
    teams.iter().map(|t| t.id).collect()
}

#[test]
fn win_gives_three_points_loss_none() {
    let teams = vec![Team::new("Alpha"), Team::new("Beta")];
    let roster = ids(&teams);
    let matches = vec![played(roster[0], roster[1], 3, 1, &teams)];
    let table = compute_standings(&roster, &matches, &teams);

    assert_eq!(table[0].team_name, "Alpha");
    assert_eq!(table[0].played, 1);
    assert_eq!(table[0].won, 1);
    assert_eq!(table[0].points, 3);
    assert_eq!(table[0].goals_for, 3);
    assert_eq!(table[0].goals_against, 1);
    assert_eq!(table[0].goal_difference, 2);

    assert_eq!(table[1].team_name, "Beta");
    assert_eq!(table[1].lost, 1);
    assert_eq!(table[1].points, 0);
    assert_eq!(table[1].goal_difference, -2);
}

#[test]
fn draw_gives_one_point_each() {
    let teams = vec![Team::new("Alpha"), Team::new("Beta")];
    let roster = ids(&teams);
    let matches = vec![played(roster[0], roster[1], 2, 2, &teams)];
    let table = compute_standings(&roster, &matches, &teams);
    for row in &table {
        assert_eq!(row.drawn, 1);
        assert_eq!(row.points, 1);
        assert_eq!(row.goal_difference, 0);
    }
}

#[test]
fn equal_points_rank_by_goal_difference() {
    let teams = vec![
        Team::new("Alpha"),
        Team::new("Beta"),
        Team::new("Gamma"),
        Team::new("Delta"),
    ];
    let roster = ids(&teams);
    // Alpha and Beta both win (3 pts); Alpha by 3 goals, Beta by 1.
    // Gamma loses by 3, Delta loses by 1.
    let matches = vec![
        played(roster[0], roster[2], 3, 0, &teams),
        played(roster[1], roster[3], 1, 0, &teams),
    ];
    let table = compute_standings(&roster, &matches, &teams);
    let names: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Delta", "Gamma"]);
}

#[test]
fn equal_points_and_difference_rank_by_goals_for() {
    let teams = vec![
        Team::new("Alpha"),
        Team::new("Beta"),
        Team::new("Gamma"),
        Team::new("Delta"),
    ];
    let roster = ids(&teams);
    // Both winners +1 goal difference, Alpha with more goals scored.
    let matches = vec![
        played(roster[0], roster[2], 2, 1, &teams),
        played(roster[1], roster[3], 1, 0, &teams),
    ];
    let table = compute_standings(&roster, &matches, &teams);
    assert_eq!(table[0].team_name, "Alpha");
    assert_eq!(table[1].team_name, "Beta");
    // Same on the losing side: Gamma conceded as many but scored more.
    assert_eq!(table[2].team_name, "Gamma");
    assert_eq!(table[3].team_name, "Delta");
}

#[test]
fn full_tie_ranks_by_name_ascending() {
    let teams = vec![Team::new("Zebra"), Team::new("Alpha"), Team::new("Mango")];
    let roster = ids(&teams);
    let table = compute_standings(&roster, &[], &teams);
    let names: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Mango", "Zebra"]);
}

#[test]
fn unplayed_matches_are_ignored() {
    let teams = vec![Team::new("Alpha"), Team::new("Beta")];
    let roster = ids(&teams);
    let matches = vec![Match::new(roster[0], roster[1], &teams)];
    let table = compute_standings(&roster, &matches, &teams);
    assert!(table.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn matches_outside_the_roster_are_ignored() {
    let teams = vec![Team::new("Alpha"), Team::new("Beta"), Team::new("Ghost")];
    let roster = vec![teams[0].id, teams[1].id];
    // Ghost was removed from the roster but a recorded match survived.
    let matches = vec![played(teams[0].id, teams[2].id, 4, 0, &teams)];
    let table = compute_standings(&roster, &matches, &teams);
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn accumulates_over_multiple_matches() {
    let teams = vec![Team::new("Alpha"), Team::new("Beta"), Team::new("Gamma")];
    let roster = ids(&teams);
    let matches = vec![
        played(roster[0], roster[1], 2, 0, &teams),
        played(roster[1], roster[2], 1, 1, &teams),
        played(roster[2], roster[0], 0, 1, &teams),
    ];
    let table = compute_standings(&roster, &matches, &teams);
    assert_eq!(table[0].team_name, "Alpha");
    assert_eq!(table[0].points, 6);
    assert_eq!(table[0].played, 2);
    // Beta and Gamma tied on points (1 each); Gamma ahead on goal
    // difference (-1 vs -2).
    assert_eq!(table[1].team_name, "Gamma");
    assert_eq!(table[1].points, 1);
    assert_eq!(table[1].goal_difference, -1);
    assert_eq!(table[2].team_name, "Beta");
    assert_eq!(table[2].goal_difference, -2);
}
