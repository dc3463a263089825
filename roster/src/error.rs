use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
}
