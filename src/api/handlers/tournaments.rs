use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{NameRequest, PairingsResponse, ReportMatchRequest};
use crate::database::{Match, Standing, Tournament};
use crate::pairing::{PairingRecord, TournamentId};

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Tournament>>> {
    Ok(Json(state.service.tournaments()?))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> ApiResult<(StatusCode, Json<Tournament>)> {
    let tournament = state.service.create_tournament(&request.name)?;
    Ok((StatusCode::CREATED, Json(tournament)))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<Tournament>> {
    Ok(Json(state.service.tournament(tournament_id)?))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<Vec<Standing>>> {
    Ok(Json(state.service.standings(tournament_id)?))
}

pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<PairingsResponse>> {
    let pairings = state.service.swiss_pairings(tournament_id)?;
    Ok(Json(PairingsResponse {
        tournament_id,
        pairings: pairings.iter().map(PairingRecord::from).collect(),
    }))
}

pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<Vec<Match>>> {
    Ok(Json(state.service.matches(tournament_id)?))
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(request): Json<ReportMatchRequest>,
) -> ApiResult<(StatusCode, Json<Match>)> {
    let recorded = state.service.report_match(
        tournament_id,
        request.player1,
        request.player2,
        request.winner,
    )?;
    Ok((StatusCode::CREATED, Json(recorded)))
}
