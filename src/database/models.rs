use chrono::NaiveDateTime;
use serde::Serialize;

use crate::pairing::{PlayerId, TournamentId};

pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A recorded match; `player2 == None` is a bye, `winner == None` a tie
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    pub created_at: Option<NaiveDateTime>,
}

impl Match {
    pub fn is_bye(&self) -> bool {
        self.player2.is_none()
    }
}

// Row of the standings view joined with opponent_standings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    pub player_name: String,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub matches: i64,
    pub byes: i64,
    pub opponent_wins: i64,
    pub opponent_losses: i64,
}
