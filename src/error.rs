use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Grade must be >= 0 (got {0})")]
    InvalidGrade(f64),

    #[error("Student \"{0}\" already exists. Use a different name or update existing.")]
    DuplicateStudent(String),

    #[error("Student \"{0}\" not found.")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, RosterError>;
