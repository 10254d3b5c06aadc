//! Standings: fold played matches into a ranked table.

use crate::models::{GroupId, Match, Team, TeamId, TeamStats, TournamentState};
use std::collections::HashMap;

/// Fold `matches` into one ranked row per roster entry.
///
/// Only matches with `played == true` and both scores set count. Matches
/// referencing a team outside the roster are skipped; rosters and match lists
/// may briefly disagree after a team is removed.
///
/// Ordering: points desc, goal difference desc, goals for desc, then name
/// ascending. With unique names this is a strict total order.
pub fn compute_standings(team_ids: &[TeamId], matches: &[Match], teams: &[Team]) -> Vec<TeamStats> {
    let mut stats: HashMap<TeamId, TeamStats> = team_ids
        .iter()
        .map(|&id| {
            let name = teams
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown team".to_string());
            (id, TeamStats::for_team(id, name))
        })
        .collect();

    for m in matches.iter().filter(|m| m.played) {
        let (Some(score1), Some(score2)) = (m.team1_score, m.team2_score) else {
            continue;
        };
        if !(stats.contains_key(&m.team1_id) && stats.contains_key(&m.team2_id)) {
            continue;
        }
        if let Some(row) = stats.get_mut(&m.team1_id) {
            row.record_result(score1, score2);
        }
        if let Some(row) = stats.get_mut(&m.team2_id) {
            row.record_result(score2, score1);
        }
    }

    let mut table: Vec<TeamStats> = stats.into_values().collect();
    for row in &mut table {
        row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
    }
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    table
}

/// Ranked table for one group. Empty when the group does not exist.
pub fn group_standings(state: &TournamentState, group_id: GroupId) -> Vec<TeamStats> {
    match state.group(group_id) {
        Some(group) => compute_standings(&group.team_ids, &group.matches, &state.teams),
        None => Vec::new(),
    }
}

/// Ranked table for the league. Empty when no league is set up.
pub fn league_standings(state: &TournamentState) -> Vec<TeamStats> {
    match &state.league {
        Some(league) => compute_standings(&league.team_ids, &league.matches, &state.teams),
        None => Vec::new(),
    }
}
