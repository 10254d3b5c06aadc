//! Zone lookup for standings-table highlighting.

use crate::models::ZoneSetting;

/// The zone highlighting a given 1-based rank, if any.
///
/// Zones are considered in ascending `(start_position, end_position)` order
/// and the first containing range wins, so overlapping zones resolve
/// deterministically.
pub fn zone_for_rank(zones: &[ZoneSetting], rank: usize) -> Option<&ZoneSetting> {
    let mut ordered: Vec<&ZoneSetting> = zones.iter().collect();
    ordered.sort_by_key(|z| (z.start_position, z.end_position));
    ordered.into_iter().find(|z| z.contains(rank))
}
