//! Tournament logic: match generation, standings, knockout bracket, reducer.

mod knockout;
mod reducer;
mod round_robin;
mod standings;
mod zones;

pub use knockout::{create_bracket, record_knockout_result};
pub use reducer::{reduce, Action, ZoneScope};
pub use round_robin::generate_round_robin;
pub use standings::{compute_standings, group_standings, league_standings};
pub use zones::zone_for_rank;
