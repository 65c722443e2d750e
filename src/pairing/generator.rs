use anyhow::Result;
use log::debug;

use super::types::{Pairing, StandingRow, TournamentId};
use crate::errors::{TournamentError, TournamentResult};

/// Source of ranked standings, best-ranked first.
///
/// `Ok(None)` means the tournament has no standings sequence at all
/// (it does not exist), which is distinct from an empty field.
pub trait StandingsProvider {
    fn ranked_standings(&self, tournament_id: TournamentId) -> Result<Option<Vec<StandingRow>>>;
}

pub struct PairingGenerator<P> {
    provider: P,
}

impl<P: StandingsProvider> PairingGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Reads fresh standings and pairs the next round.
    pub fn next_round(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Pairing>> {
        let standings = self
            .provider
            .ranked_standings(tournament_id)?
            .ok_or_else(|| {
                TournamentError::invalid(format!(
                    "no standings available for tournament {}",
                    tournament_id
                ))
            })?;

        let pairings = generate_pairings(&standings);
        debug!(
            "Paired {} players into {} pairings for tournament {}",
            standings.len(),
            pairings.len(),
            tournament_id
        );
        Ok(pairings)
    }
}

/// Pairs adjacent players in rank order.
///
/// With an odd field the first player holding the fewest byes sits out with a
/// bye and is skipped by the pairing buffer. Every input row lands in exactly
/// one pairing, so the output has `ceil(n / 2)` entries.
pub fn generate_pairings(standings: &[StandingRow]) -> Vec<Pairing> {
    let mut pairings = Vec::with_capacity(standings.len().div_ceil(2));
    let mut bye_needed = standings.len() % 2 != 0;
    let bye_eligible_count = fewest_byes(standings);
    let mut pending: Option<&StandingRow> = None;

    for row in standings {
        if bye_needed && row.bye_count == bye_eligible_count {
            pairings.push(bye_for(row));
            bye_needed = false;
            continue;
        }

        match pending.take() {
            Some(first) => pairings.push(match_between(first, row)),
            None => pending = Some(row),
        }
    }

    debug_assert!(pending.is_none() && !bye_needed);
    pairings
}

fn fewest_byes(standings: &[StandingRow]) -> i64 {
    standings.iter().map(|row| row.bye_count).min().unwrap_or(0)
}

fn bye_for(row: &StandingRow) -> Pairing {
    Pairing::Bye {
        player_id: row.player_id,
        player_name: row.player_name.clone(),
    }
}

fn match_between(first: &StandingRow, second: &StandingRow) -> Pairing {
    Pairing::Match {
        player1_id: first.player_id,
        player1_name: first.player_name.clone(),
        player2_id: second.player_id,
        player2_name: second.player_name.clone(),
    }
}
