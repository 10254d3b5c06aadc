//! Football tournament organizer: library with models and tournament logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    compute_standings, create_bracket, generate_round_robin, group_standings, league_standings,
    record_knockout_result, reduce, zone_for_rank, Action, ZoneScope,
};
pub use models::{
    Group, GroupId, KnockoutMatch, KnockoutRounds, League, LeagueId, Match, MatchId, Slot, Team,
    TeamId, TeamStats, TournamentError, TournamentState, ZoneId, ZoneSetting,
};
