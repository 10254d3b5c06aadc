//! Knockout bracket: construction and result advancement.

use crate::models::{KnockoutMatch, KnockoutRounds, Slot, Team, TeamId, TournamentError};
use uuid::Uuid;

/// Construction stops after this many halving rounds. A 1024-entrant bracket
/// is far beyond any realistic tournament, so exceeding the bound is a logic
/// defect, not an input error.
const MAX_ROUNDS: usize = 10;

fn display_name(slot: &Slot, teams: &[Team]) -> Option<String> {
    match slot {
        Slot::Team { id } => teams.iter().find(|t| t.id == *id).map(|t| t.name.clone()),
        Slot::Winner { .. } | Slot::Bye => None,
    }
}

/// Build the full bracket for `team_count` participants.
///
/// `team_count` must be a power of two and at least 2. The first `team_count`
/// entries of `selected` seed round 0 as consecutive pairs (slot 2i vs 2i+1);
/// missing seats become byes. Each later round pairs the winner placeholders
/// of the previous one, halving until a single final remains. Brackets with
/// more than one round get a trailing one-entrant champion round fed by the
/// final; a 2-team bracket is its own final and gets none.
pub fn create_bracket(
    team_count: usize,
    selected: &[TeamId],
    teams: &[Team],
) -> Result<KnockoutRounds, TournamentError> {
    if team_count < 2 || !team_count.is_power_of_two() {
        return Err(TournamentError::InvalidBracketSize {
            requested: team_count,
        });
    }

    let mut seeds: Vec<Slot> = selected
        .iter()
        .take(team_count)
        .map(|&id| Slot::Team { id })
        .collect();
    seeds.resize(team_count, Slot::Bye);

    let mut rounds = KnockoutRounds::new();
    let mut current = seeds;
    let mut round_index = 0;

    while current.len() >= 2 {
        assert!(
            round_index < MAX_ROUNDS,
            "bracket construction exceeded {} rounds",
            MAX_ROUNDS
        );
        let match_count = current.len() / 2;
        let mut matches = Vec::with_capacity(match_count);
        for i in 0..match_count {
            let slot1 = current[2 * i];
            let slot2 = current[2 * i + 1];
            matches.push(KnockoutMatch {
                id: Uuid::new_v4(),
                round_index,
                match_index: i,
                slot1,
                slot2: Some(slot2),
                team1_name: display_name(&slot1, teams),
                team2_name: display_name(&slot2, teams),
                team1_score: None,
                team2_score: None,
                played: false,
                waiting: !(slot1.is_concrete() && slot2.is_concrete()),
            });
        }
        rounds.insert(round_index, matches);
        current = (0..match_count)
            .map(|i| Slot::Winner {
                round: round_index,
                match_index: i,
            })
            .collect();
        round_index += 1;
    }

    if round_index > 1 {
        // Champion round: a single one-entrant record fed by the final.
        rounds.insert(
            round_index,
            vec![KnockoutMatch {
                id: Uuid::new_v4(),
                round_index,
                match_index: 0,
                slot1: Slot::Winner {
                    round: round_index - 1,
                    match_index: 0,
                },
                slot2: None,
                team1_name: None,
                team2_name: None,
                team1_score: None,
                team2_score: None,
                played: false,
                waiting: true,
            }],
        );
    }

    Ok(rounds)
}

/// Record a result for the match at `(round_index, match_index)` and advance
/// the winner into the next round.
///
/// Ties are rejected, as are results for matches whose sides are not both
/// concrete teams. Re-recording an already-played match overwrites its scores
/// and re-propagates; if the winner changed, every downstream result that
/// depended on the old winner is invalidated (scores cleared, placeholders
/// restored) so no stale advancement survives the edit.
pub fn record_knockout_result(
    rounds: &mut KnockoutRounds,
    round_index: usize,
    match_index: usize,
    team1_score: u32,
    team2_score: u32,
    teams: &[Team],
) -> Result<(), TournamentError> {
    if team1_score == team2_score {
        return Err(TournamentError::TiedKnockoutScore);
    }

    let target = rounds
        .get_mut(&round_index)
        .and_then(|matches| matches.get_mut(match_index))
        .ok_or(TournamentError::KnockoutMatchNotFound {
            round: round_index,
            match_index,
        })?;

    let slot2 = target.slot2.ok_or(TournamentError::SlotsNotFilled {
        round: round_index,
        match_index,
    })?;
    if !(target.slot1.is_concrete() && slot2.is_concrete()) {
        return Err(TournamentError::SlotsNotFilled {
            round: round_index,
            match_index,
        });
    }

    target.team1_score = Some(team1_score);
    target.team2_score = Some(team2_score);
    target.played = true;
    let winner = if team1_score > team2_score {
        target.slot1
    } else {
        slot2
    };

    advance(rounds, round_index, match_index, winner, teams);
    Ok(())
}

/// Fill the slot fed by match `(round_index, match_index)` with `winner`:
/// destination is match `floor(i / 2)` of the next round, slot1 for an even
/// source index, slot2 for an odd one. Also used with a `Winner` placeholder
/// to vacate a slot whose source result was invalidated; the cascade then
/// continues downstream as far as results had been recorded.
fn advance(
    rounds: &mut KnockoutRounds,
    round_index: usize,
    match_index: usize,
    winner: Slot,
    teams: &[Team],
) {
    let next_round = round_index + 1;
    let dest_index = match_index / 2;
    let name = display_name(&winner, teams);

    let invalidated = {
        let Some(dest) = rounds
            .get_mut(&next_round)
            .and_then(|matches| matches.get_mut(dest_index))
        else {
            return;
        };

        match dest.slot2 {
            None => {
                // Champion slot: decided once a concrete winner lands,
                // vacated again when a placeholder does.
                dest.slot1 = winner;
                dest.team1_name = name;
                dest.played = winner.is_concrete();
                dest.waiting = !winner.is_concrete();
                false
            }
            Some(_) => {
                let changed = if match_index % 2 == 0 {
                    let changed = dest.slot1 != winner;
                    dest.slot1 = winner;
                    dest.team1_name = name;
                    changed
                } else {
                    let changed = dest.slot2 != Some(winner);
                    dest.slot2 = Some(winner);
                    dest.team2_name = name;
                    changed
                };
                dest.waiting = !(dest.slot1.is_concrete()
                    && dest.slot2.is_some_and(|s| s.is_concrete()));
                if changed && dest.played {
                    dest.team1_score = None;
                    dest.team2_score = None;
                    dest.played = false;
                    true
                } else {
                    false
                }
            }
        }
    };

    if invalidated {
        let placeholder = Slot::Winner {
            round: next_round,
            match_index: dest_index,
        };
        advance(rounds, next_round, dest_index, placeholder, teams);
    }
}
