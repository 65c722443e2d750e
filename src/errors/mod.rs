use thiserror::Error;

pub type TournamentResult<T> = Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Connectivity or SQL failure surfaced from the data-access layer
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for TournamentError {
    fn from(error: anyhow::Error) -> Self {
        TournamentError::Storage(error)
    }
}

impl TournamentError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TournamentError::InvalidInput(message.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        TournamentError::NotFound { entity, id }
    }
}

/// Context message for a failed query on a single row
pub fn lookup_context(entity: &str, id: i64) -> String {
    format!("Failed to query {} by id {}", entity, id)
}

/// Context message for a failed bulk delete
pub fn delete_context(table: &str) -> String {
    format!("Failed to delete rows from {}", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_keeps_context_chain() {
        let error: TournamentError = anyhow::anyhow!("disk I/O error")
            .context("Failed to insert player")
            .into();

        assert_eq!(
            error.to_string(),
            "storage error: Failed to insert player: disk I/O error"
        );
    }

    #[test]
    fn not_found_names_entity() {
        let error = TournamentError::not_found("tournament", 7);
        assert_eq!(error.to_string(), "tournament 7 not found");
    }
}
