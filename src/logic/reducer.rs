//! The tournament state reducer: a closed action vocabulary over one
//! immutable state snapshot.

use crate::logic::knockout::{create_bracket, record_knockout_result};
use crate::logic::round_robin::generate_round_robin;
use crate::models::{
    Group, GroupId, League, Match, MatchId, Slot, Team, TeamId, TournamentError, TournamentState,
    ZoneId, ZoneSetting,
};
use rand::seq::SliceRandom;

/// Which entity a zone action applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZoneScope {
    Group(GroupId),
    League,
}

/// The closed set of state transitions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replace the whole state with a hydrated snapshot.
    Initialize { snapshot: TournamentState },
    AddTeam { name: String },
    RenameTeam { team_id: TeamId, new_name: String },
    DeleteTeam { team_id: TeamId },
    CreateGroup { name: String },
    DeleteGroup { group_id: GroupId },
    AddTeamToGroup { group_id: GroupId, team_id: TeamId },
    RemoveTeamFromGroup { group_id: GroupId, team_id: TeamId },
    GenerateGroupMatches { group_id: GroupId },
    RecordGroupResult {
        group_id: GroupId,
        match_id: MatchId,
        team1_score: u32,
        team2_score: u32,
    },
    /// Shuffle all teams into `group_count` fresh groups (sizes differing by
    /// at most one) and generate each group's matches.
    RandomGroups {
        group_count: usize,
        name_prefix: String,
    },
    CreateKnockoutStage {
        team_count: usize,
        team_ids: Vec<TeamId>,
    },
    RecordKnockoutResult {
        round_index: usize,
        match_index: usize,
        team1_score: u32,
        team2_score: u32,
    },
    /// Replaces any existing league.
    SetupLeague {
        name: String,
        team_ids: Vec<TeamId>,
        play_each_team_twice: bool,
    },
    RegenerateLeagueMatches,
    RecordLeagueResult {
        match_id: MatchId,
        team1_score: u32,
        team2_score: u32,
    },
    ClearLeague,
    AddZone {
        scope: ZoneScope,
        name: String,
        start_position: usize,
        end_position: usize,
        color: String,
    },
    EditZone { scope: ZoneScope, zone: ZoneSetting },
    DeleteZone { scope: ZoneScope, zone_id: ZoneId },
    SetAdminMode { enabled: bool },
    Reset,
}

/// Apply `action` to `state` and return the next snapshot.
///
/// The input is never mutated. On rejection the error says why and the caller
/// keeps the old state; on success the returned state is structurally new, so
/// consumers can detect change by identity.
pub fn reduce(state: &TournamentState, action: Action) -> Result<TournamentState, TournamentError> {
    let mut next = state.clone();
    match action {
        Action::Initialize { snapshot } => {
            next = snapshot;
            next.is_initialized = true;
        }
        Action::AddTeam { name } => add_team(&mut next, &name)?,
        Action::RenameTeam { team_id, new_name } => rename_team(&mut next, team_id, &new_name)?,
        Action::DeleteTeam { team_id } => delete_team(&mut next, team_id)?,
        Action::CreateGroup { name } => {
            let name = valid_name(&name)?;
            next.groups.push(Group::new(name));
        }
        Action::DeleteGroup { group_id } => {
            if next.group(group_id).is_none() {
                return Err(TournamentError::GroupNotFound(group_id));
            }
            next.groups.retain(|g| g.id != group_id);
        }
        Action::AddTeamToGroup { group_id, team_id } => {
            if next.team(team_id).is_none() {
                return Err(TournamentError::TeamNotFound(team_id));
            }
            let group = next
                .group_mut(group_id)
                .ok_or(TournamentError::GroupNotFound(group_id))?;
            if !group.team_ids.contains(&team_id) {
                group.team_ids.push(team_id);
            }
        }
        Action::RemoveTeamFromGroup { group_id, team_id } => {
            let group = next
                .group_mut(group_id)
                .ok_or(TournamentError::GroupNotFound(group_id))?;
            group.team_ids.retain(|&id| id != team_id);
        }
        Action::GenerateGroupMatches { group_id } => generate_group_matches(&mut next, group_id)?,
        Action::RecordGroupResult {
            group_id,
            match_id,
            team1_score,
            team2_score,
        } => {
            let group = next
                .group_mut(group_id)
                .ok_or(TournamentError::GroupNotFound(group_id))?;
            record_result(&mut group.matches, match_id, team1_score, team2_score)?;
        }
        Action::RandomGroups {
            group_count,
            name_prefix,
        } => random_groups(&mut next, group_count, &name_prefix)?,
        Action::CreateKnockoutStage {
            team_count,
            team_ids,
        } => create_knockout_stage(&mut next, team_count, &team_ids)?,
        Action::RecordKnockoutResult {
            round_index,
            match_index,
            team1_score,
            team2_score,
        } => {
            let teams = next.teams.clone();
            record_knockout_result(
                &mut next.knockout_rounds,
                round_index,
                match_index,
                team1_score,
                team2_score,
                &teams,
            )?;
        }
        Action::SetupLeague {
            name,
            team_ids,
            play_each_team_twice,
        } => setup_league(&mut next, &name, team_ids, play_each_team_twice)?,
        Action::RegenerateLeagueMatches => {
            let teams = next.teams.clone();
            let league = next.league.as_mut().ok_or(TournamentError::NoLeague)?;
            league.matches =
                generate_round_robin(&league.team_ids, &teams, league.play_each_team_twice);
        }
        Action::RecordLeagueResult {
            match_id,
            team1_score,
            team2_score,
        } => {
            let league = next.league.as_mut().ok_or(TournamentError::NoLeague)?;
            record_result(&mut league.matches, match_id, team1_score, team2_score)?;
        }
        Action::ClearLeague => next.league = None,
        Action::AddZone {
            scope,
            name,
            start_position,
            end_position,
            color,
        } => {
            let name = valid_name(&name)?;
            valid_zone_range(start_position, end_position)?;
            let zones = zones_mut(&mut next, scope)?;
            zones.push(ZoneSetting::new(name, start_position, end_position, color));
        }
        Action::EditZone { scope, zone } => {
            valid_name(&zone.name)?;
            valid_zone_range(zone.start_position, zone.end_position)?;
            let zones = zones_mut(&mut next, scope)?;
            let existing = zones
                .iter_mut()
                .find(|z| z.id == zone.id)
                .ok_or(TournamentError::ZoneNotFound(zone.id))?;
            *existing = zone;
        }
        Action::DeleteZone { scope, zone_id } => {
            let zones = zones_mut(&mut next, scope)?;
            if !zones.iter().any(|z| z.id == zone_id) {
                return Err(TournamentError::ZoneNotFound(zone_id));
            }
            zones.retain(|z| z.id != zone_id);
        }
        Action::SetAdminMode { enabled } => next.is_admin_mode = enabled,
        Action::Reset => {
            next = TournamentState {
                is_initialized: true,
                ..TournamentState::default()
            };
        }
    }
    Ok(next)
}

/// Trimmed, non-empty name or `EmptyName`.
fn valid_name(name: &str) -> Result<String, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn valid_zone_range(start: usize, end: usize) -> Result<(), TournamentError> {
    if start < 1 || end < start {
        return Err(TournamentError::InvalidZoneRange { start, end });
    }
    Ok(())
}

/// Add a team. Names must be unique (case-insensitive); unique names keep the
/// standings tie-break a strict total order.
fn add_team(state: &mut TournamentState, name: &str) -> Result<(), TournamentError> {
    let name = valid_name(name)?;
    let duplicate = state
        .teams
        .iter()
        .any(|t| t.name.eq_ignore_ascii_case(&name));
    if duplicate {
        return Err(TournamentError::DuplicateTeamName);
    }
    state.teams.push(Team::new(name));
    Ok(())
}

/// Rename a team and refresh every cached display name in the same transition.
fn rename_team(
    state: &mut TournamentState,
    team_id: TeamId,
    new_name: &str,
) -> Result<(), TournamentError> {
    let name = valid_name(new_name)?;
    let duplicate = state
        .teams
        .iter()
        .any(|t| t.id != team_id && t.name.eq_ignore_ascii_case(&name));
    if duplicate {
        return Err(TournamentError::DuplicateTeamName);
    }
    let team = state
        .teams
        .iter_mut()
        .find(|t| t.id == team_id)
        .ok_or(TournamentError::TeamNotFound(team_id))?;
    team.name = name.clone();
    propagate_team_name(state, team_id, &name);
    Ok(())
}

/// Single reindex pass for the denormalized name caches: groups, league, and
/// every knockout round, in one sweep.
fn propagate_team_name(state: &mut TournamentState, team_id: TeamId, name: &str) {
    let group_matches = state.groups.iter_mut().flat_map(|g| g.matches.iter_mut());
    let league_matches = state.league.iter_mut().flat_map(|l| l.matches.iter_mut());
    for m in group_matches.chain(league_matches) {
        if m.team1_id == team_id {
            m.team1_name = Some(name.to_string());
        }
        if m.team2_id == team_id {
            m.team2_name = Some(name.to_string());
        }
    }
    for m in state.knockout_rounds.values_mut().flatten() {
        if m.slot1.team_id() == Some(team_id) {
            m.team1_name = Some(name.to_string());
        }
        if m.slot2.and_then(|s| s.team_id()) == Some(team_id) {
            m.team2_name = Some(name.to_string());
        }
    }
}

/// Delete a team and cascade in one transition: group rosters shrink and the
/// team's matches drop (emptied groups dissolve), the league shrinks or
/// dissolves below two participants, and bracket slots are vacated in place
/// (bracket topology is structural, so match records stay).
fn delete_team(state: &mut TournamentState, team_id: TeamId) -> Result<(), TournamentError> {
    if state.team(team_id).is_none() {
        return Err(TournamentError::TeamNotFound(team_id));
    }
    state.teams.retain(|t| t.id != team_id);

    for group in &mut state.groups {
        group.team_ids.retain(|&id| id != team_id);
        group.matches.retain(|m| !m.involves(team_id));
    }
    state.groups.retain(|g| !g.team_ids.is_empty());

    let dissolve = match &mut state.league {
        Some(league) if league.team_ids.contains(&team_id) => {
            league.team_ids.retain(|&id| id != team_id);
            league.matches.retain(|m| !m.involves(team_id));
            league.team_ids.len() < 2
        }
        _ => false,
    };
    if dissolve {
        state.league = None;
    }

    for m in state.knockout_rounds.values_mut().flatten() {
        let mut vacated = false;
        if m.slot1.team_id() == Some(team_id) {
            m.slot1 = Slot::Bye;
            m.team1_name = None;
            vacated = true;
        }
        if m.slot2.and_then(|s| s.team_id()) == Some(team_id) {
            m.slot2 = Some(Slot::Bye);
            m.team2_name = None;
            vacated = true;
        }
        if vacated {
            m.team1_score = None;
            m.team2_score = None;
            m.played = false;
            m.waiting = match m.slot2 {
                None => true,
                Some(slot2) => !(m.slot1.is_concrete() && slot2.is_concrete()),
            };
        }
    }
    Ok(())
}

/// Regenerate a group's matches from its roster. Destructive: the previous
/// match list (results included) is replaced wholesale.
fn generate_group_matches(
    state: &mut TournamentState,
    group_id: GroupId,
) -> Result<(), TournamentError> {
    let teams = state.teams.clone();
    let group = state
        .group_mut(group_id)
        .ok_or(TournamentError::GroupNotFound(group_id))?;
    if group.team_ids.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            required: 2,
            available: group.team_ids.len(),
        });
    }
    group.matches = generate_round_robin(&group.team_ids, &teams, false);
    Ok(())
}

/// Set scores on a match. Re-recording overwrites.
fn record_result(
    matches: &mut [Match],
    match_id: MatchId,
    team1_score: u32,
    team2_score: u32,
) -> Result<(), TournamentError> {
    let m = matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.team1_score = Some(team1_score);
    m.team2_score = Some(team2_score);
    m.played = true;
    Ok(())
}

fn random_groups(
    state: &mut TournamentState,
    group_count: usize,
    name_prefix: &str,
) -> Result<(), TournamentError> {
    if group_count == 0 {
        return Err(TournamentError::InvalidGroupCount {
            requested: group_count,
        });
    }
    if state.teams.is_empty() || state.teams.len() < group_count {
        return Err(TournamentError::NotEnoughTeams {
            required: group_count,
            available: state.teams.len(),
        });
    }

    let mut shuffled: Vec<TeamId> = state.teams.iter().map(|t| t.id).collect();
    shuffled.shuffle(&mut rand::thread_rng());

    let base = shuffled.len() / group_count;
    let remainder = shuffled.len() % group_count;
    let mut offset = 0;
    for i in 0..group_count {
        let size = base + usize::from(i < remainder);
        let mut group = Group::new(format!("{} {}", name_prefix, group_letter(i)));
        group.team_ids = shuffled[offset..offset + size].to_vec();
        group.matches = generate_round_robin(&group.team_ids, &state.teams, false);
        offset += size;
        state.groups.push(group);
    }
    Ok(())
}

/// A, B, ... Z, then AA, AB, ... for absurdly many groups.
fn group_letter(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    if index < 26 {
        letter.to_string()
    } else {
        format!("{}{}", char::from(b'A' + (index / 26 - 1) as u8), letter)
    }
}

fn create_knockout_stage(
    state: &mut TournamentState,
    team_count: usize,
    team_ids: &[TeamId],
) -> Result<(), TournamentError> {
    let mut seen: Vec<TeamId> = Vec::with_capacity(team_ids.len());
    for &id in team_ids {
        if state.team(id).is_none() {
            return Err(TournamentError::TeamNotFound(id));
        }
        if seen.contains(&id) {
            return Err(TournamentError::DuplicateBracketEntrant(id));
        }
        seen.push(id);
    }
    state.knockout_rounds = create_bracket(team_count, team_ids, &state.teams)?;
    Ok(())
}

/// Replace any existing league with a fresh one, matches generated up front.
fn setup_league(
    state: &mut TournamentState,
    name: &str,
    team_ids: Vec<TeamId>,
    play_each_team_twice: bool,
) -> Result<(), TournamentError> {
    let name = valid_name(name)?;
    if team_ids.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            required: 2,
            available: team_ids.len(),
        });
    }
    for &id in &team_ids {
        if state.team(id).is_none() {
            return Err(TournamentError::TeamNotFound(id));
        }
    }
    let mut league = League::new(name, team_ids, play_each_team_twice);
    league.matches = generate_round_robin(&league.team_ids, &state.teams, play_each_team_twice);
    state.league = Some(league);
    Ok(())
}

fn zones_mut(
    state: &mut TournamentState,
    scope: ZoneScope,
) -> Result<&mut Vec<ZoneSetting>, TournamentError> {
    match scope {
        ZoneScope::Group(group_id) => state
            .group_mut(group_id)
            .map(|g| &mut g.zone_settings)
            .ok_or(TournamentError::GroupNotFound(group_id)),
        ZoneScope::League => state
            .league
            .as_mut()
            .map(|l| &mut l.zone_settings)
            .ok_or(TournamentError::NoLeague),
    }
}
