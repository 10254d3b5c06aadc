//! Groups, the league, the aggregate TournamentState, and errors.

use crate::models::game::{KnockoutRounds, Match, MatchId};
use crate::models::team::{Team, TeamId};
use crate::models::zone::{ZoneId, ZoneSetting};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A name was empty after trimming.
    EmptyName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Bracket size must be a power of two and at least 2.
    InvalidBracketSize { requested: usize },
    /// Not enough teams for the operation.
    NotEnoughTeams { required: usize, available: usize },
    /// The same team was selected more than once for a bracket.
    DuplicateBracketEntrant(TeamId),
    /// Knockout matches cannot end in a tie.
    TiedKnockoutScore,
    /// Both sides of a knockout match must be concrete teams before a result
    /// can be recorded.
    SlotsNotFilled { round: usize, match_index: usize },
    /// No knockout match exists at these coordinates.
    KnockoutMatchNotFound { round: usize, match_index: usize },
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
    GroupNotFound(GroupId),
    ZoneNotFound(ZoneId),
    /// Zone positions must satisfy 1 <= start <= end.
    InvalidZoneRange { start: usize, end: usize },
    /// No league has been set up.
    NoLeague,
    /// Cannot partition teams into this many groups.
    InvalidGroupCount { requested: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DuplicateTeamName => {
                write!(f, "A team with this name already exists")
            }
            TournamentError::InvalidBracketSize { requested } => {
                write!(
                    f,
                    "Bracket size must be a power of two (2, 4, 8, 16, ...), got {}",
                    requested
                )
            }
            TournamentError::NotEnoughTeams {
                required,
                available,
            } => {
                write!(f, "Need at least {} teams (have {})", required, available)
            }
            TournamentError::DuplicateBracketEntrant(_) => {
                write!(f, "The same team was selected more than once")
            }
            TournamentError::TiedKnockoutScore => {
                write!(f, "Knockout matches cannot end in a tie")
            }
            TournamentError::SlotsNotFilled { round, match_index } => {
                write!(
                    f,
                    "Match {} of round {} is still waiting for opponents",
                    match_index, round
                )
            }
            TournamentError::KnockoutMatchNotFound { round, match_index } => {
                write!(f, "No knockout match {} in round {}", match_index, round)
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::GroupNotFound(_) => write!(f, "Group not found"),
            TournamentError::ZoneNotFound(_) => write!(f, "Zone not found"),
            TournamentError::InvalidZoneRange { start, end } => {
                write!(
                    f,
                    "Zone range must satisfy 1 <= start <= end, got {}..={}",
                    start, end
                )
            }
            TournamentError::NoLeague => write!(f, "No league has been set up"),
            TournamentError::InvalidGroupCount { requested } => {
                write!(f, "Cannot split teams into {} groups", requested)
            }
        }
    }
}

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Unique identifier for the league.
pub type LeagueId = Uuid;

/// A round-robin group: a roster and its generated matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Unique, ordered roster. Pairing enumeration follows this order.
    pub team_ids: Vec<TeamId>,
    pub matches: Vec<Match>,
    pub zone_settings: Vec<ZoneSetting>,
}

impl Group {
    /// Create an empty group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            team_ids: Vec::new(),
            matches: Vec::new(),
            zone_settings: Vec::new(),
        }
    }
}

/// The single league (at most one exists per tournament).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub team_ids: Vec<TeamId>,
    pub matches: Vec<Match>,
    /// Home and away: every pairing is played twice, mirrored.
    pub play_each_team_twice: bool,
    pub zone_settings: Vec<ZoneSetting>,
}

impl League {
    pub fn new(name: impl Into<String>, team_ids: Vec<TeamId>, play_each_team_twice: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            team_ids,
            matches: Vec::new(),
            play_each_team_twice,
            zone_settings: Vec::new(),
        }
    }
}

/// Aggregate tournament state: the single snapshot owned by the reducer.
///
/// Constructed empty, hydrated once from storage, mutated exclusively through
/// [`crate::logic::reduce`], cleared by the reset action.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentState {
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    pub league: Option<League>,
    pub knockout_rounds: KnockoutRounds,
    /// Session flag: snapshot has been hydrated. Never persisted.
    #[serde(skip)]
    pub is_initialized: bool,
    /// Session flag: admin gestures enabled. Never persisted.
    #[serde(skip)]
    pub is_admin_mode: bool,
}

impl TournamentState {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Current display name for a team, if it still exists.
    pub fn team_name(&self, id: TeamId) -> Option<String> {
        self.team(id).map(|t| t.name.clone())
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }
}
