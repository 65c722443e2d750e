use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    players::{count_players, list_players, register_player},
    tournaments::{
        create_tournament, get_pairings, get_standings, get_tournament, list_matches,
        list_tournaments, report_match,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tournaments", get(list_tournaments).post(create_tournament))
        .route("/api/tournaments/:id", get(get_tournament))
        .route("/api/tournaments/:id/standings", get(get_standings))
        .route("/api/tournaments/:id/pairings", get(get_pairings))
        .route("/api/tournaments/:id/matches", get(list_matches).post(report_match))
        .route("/api/players", get(list_players).post(register_player))
        .route("/api/players/count", get(count_players))
        .with_state(state)
}
