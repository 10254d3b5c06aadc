//! Data structures for the tournament: teams, matches, groups, league, bracket.

mod game;
mod team;
mod tournament;
mod zone;

pub use game::{KnockoutMatch, KnockoutRounds, Match, MatchId, Slot};
pub use team::{Team, TeamId, TeamStats};
pub use tournament::{Group, GroupId, League, LeagueId, TournamentError, TournamentState};
pub use zone::{ZoneId, ZoneSetting};
