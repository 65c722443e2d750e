use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{ApiResult, AppState};
use crate::api::models::{NameRequest, PlayerCountResponse};
use crate::database::Player;

pub async fn list_players(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Player>>> {
    Ok(Json(state.service.players()?))
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let player = state.service.register_player(&request.name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn count_players(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PlayerCountResponse>> {
    let count = state.service.count_players()?;
    Ok(Json(PlayerCountResponse { count }))
}
