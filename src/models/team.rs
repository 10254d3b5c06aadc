//! Team and TeamStats data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in rosters, matches, and lookups).
pub type TeamId = Uuid;

/// A team in the tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a new team with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// One ranked row of a standings table (group or league).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Derived after aggregation: `goals_for - goals_against`.
    pub goal_difference: i32,
    pub points: u32,
}

impl TeamStats {
    /// Blank row for a team (everything zero).
    pub fn for_team(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            ..Self::default()
        }
    }

    /// Fold one played match into this row, seen from this team's side.
    /// 3 points for a win, 1 for a draw, 0 for a loss.
    pub fn record_result(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        if goals_for > goals_against {
            self.won += 1;
            self.points += 3;
        } else if goals_for < goals_against {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += 1;
        }
    }
}
