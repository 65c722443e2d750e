use serde::{Deserialize, Serialize};

use crate::pairing::{PairingRecord, PlayerId, TournamentId};

#[derive(Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub winner: Option<PlayerId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCountResponse {
    pub count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingsResponse {
    pub tournament_id: TournamentId,
    pub pairings: Vec<PairingRecord>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
