use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorResponse;
use crate::errors::TournamentError;
use crate::services::TournamentService;

pub mod players;
pub mod tournaments;

pub struct AppState {
    pub service: TournamentService,
}

/// Maps service failures onto HTTP status codes
pub struct ApiError(TournamentError);

impl From<TournamentError> for ApiError {
    fn from(error: TournamentError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TournamentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TournamentError::NotFound { .. } => StatusCode::NOT_FOUND,
            TournamentError::Storage(e) => {
                log::error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
