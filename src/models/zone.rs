//! Classification zones: named rank ranges highlighted on a standings table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a zone setting.
pub type ZoneId = Uuid;

/// An inclusive 1-based rank range with a display color (e.g. promotion,
/// relegation). Attached to a group or the league; display-only.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneSetting {
    pub id: ZoneId,
    pub name: String,
    pub start_position: usize,
    pub end_position: usize,
    /// CSS color string.
    pub color: String,
}

impl ZoneSetting {
    pub fn new(
        name: impl Into<String>,
        start_position: usize,
        end_position: usize,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_position,
            end_position,
            color: color.into(),
        }
    }

    /// True when `rank` falls inside the inclusive range.
    pub fn contains(&self, rank: usize) -> bool {
        rank >= self.start_position && rank <= self.end_position
    }
}
