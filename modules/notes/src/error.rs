use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notes_types::DetailResponse;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Invalid token")]
    Forbidden,

    #[error("Note not found: {0}")]
    NotFound(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt note {id}: {source}")]
    Corrupt {
        id: u64,
        #[source]
        source: serde_json::Error,
    },
}

pub type NoteResult<T> = Result<T, NoteError>;

impl NoteError {
    pub fn status(&self) -> StatusCode {
        match self {
            NoteError::Forbidden => StatusCode::FORBIDDEN,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteError::Io(_) | NoteError::Corrupt { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client; internal details stay in the log
    fn detail(&self) -> &'static str {
        match self {
            NoteError::Forbidden => "Invalid token",
            NoteError::NotFound(_) => "Note not found",
            NoteError::Io(_) | NoteError::Corrupt { .. } => "Internal Server Error",
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("[NOTES] {}", self);
        }
        (status, Json(DetailResponse::new(self.detail()))).into_response()
    }
}
