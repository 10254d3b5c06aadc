//! Round-robin match generation for groups and the league.

use crate::models::{Match, Team, TeamId};
use rand::seq::SliceRandom;

/// Generate one match per unordered pair of roster entries (both orders when
/// `play_twice`), in shuffled match-day order.
///
/// Pairing enumeration is deterministic over the roster order; only the final
/// list order is randomized. Names are cached from the registry at generation
/// time. Fewer than two teams yields no matches. Calling again with the same
/// roster is a full replacement: same pairs, fresh ids, new order.
pub fn generate_round_robin(team_ids: &[TeamId], teams: &[Team], play_twice: bool) -> Vec<Match> {
    let mut matches = Vec::new();
    if team_ids.len() < 2 {
        return matches;
    }
    for i in 0..team_ids.len() {
        for j in (i + 1)..team_ids.len() {
            matches.push(Match::new(team_ids[i], team_ids[j], teams));
            if play_twice {
                matches.push(Match::new(team_ids[j], team_ids[i], teams));
            }
        }
    }
    matches.shuffle(&mut rand::thread_rng());
    matches
}
