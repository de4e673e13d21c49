use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Why a filename could not be split into participant, test, and timestamp.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("No participant prefix in \"{0}\"")]
    MissingParticipant(String),

    #[error("Unable to detect time: {0}")]
    UnableToDetectTime(String),
}
