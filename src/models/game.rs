//! Match, Slot, and KnockoutMatch for round-robin and bracket play.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A round-robin match (group or league play).
///
/// Invariant: `played == true` iff both scores are `Some`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub id: MatchId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    /// Display cache filled at generation time; refreshed on rename.
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    pub played: bool,
}

impl Match {
    /// New unplayed match; names are cached from the registry at creation time.
    pub fn new(team1_id: TeamId, team2_id: TeamId, teams: &[Team]) -> Self {
        let name_of = |id: TeamId| teams.iter().find(|t| t.id == id).map(|t| t.name.clone());
        Self {
            id: Uuid::new_v4(),
            team1_id,
            team2_id,
            team1_name: name_of(team1_id),
            team2_name: name_of(team2_id),
            team1_score: None,
            team2_score: None,
            played: false,
        }
    }

    /// True when the given team plays on either side.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// One side of a knockout match: a concrete team, the winner of an earlier
/// match, or an unfilled bye seat.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Team { id: TeamId },
    Winner { round: usize, match_index: usize },
    #[default]
    Bye,
}

impl Slot {
    /// True only for a concrete team id.
    pub fn is_concrete(&self) -> bool {
        matches!(self, Slot::Team { .. })
    }

    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            Slot::Team { id } => Some(*id),
            _ => None,
        }
    }
}

/// A bracket match. `slot2` is `None` only in the champion round, the
/// degenerate one-entrant round displaying the tournament winner.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockoutMatch {
    pub id: MatchId,
    pub round_index: usize,
    pub match_index: usize,
    pub slot1: Slot,
    pub slot2: Option<Slot>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    pub played: bool,
    /// Set while either side is not yet a concrete team; consumers use it to
    /// suppress score entry.
    pub waiting: bool,
}

/// Bracket storage: round index -> ordered matches of that round.
/// Round 0 is the first round; the highest key may be the champion round.
pub type KnockoutRounds = BTreeMap<usize, Vec<KnockoutMatch>>;
