use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("HOME not set; set MINIMAL_NOTES_DIR explicitly")]
    HomeNotSet,

    #[error("Note {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),

    #[error("Could not generate a unique note id")]
    IdExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<String> for NotesError {
    fn from(msg: String) -> Self {
        NotesError::Usage(msg)
    }
}

impl From<&str> for NotesError {
    fn from(msg: &str) -> Self {
        NotesError::Usage(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
