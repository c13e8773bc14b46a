use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The sentiment oracle failed to produce a usable score.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// The dataset file could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Terminal I/O failed (stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sentiment oracle errors
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle returned a score outside the polarity range.
    #[error("Polarity score {score} outside [-1.0, 1.0]")]
    ScoreOutOfRange {
        /// The offending score.
        score: f64,
    },

    /// The underlying analysis failed.
    #[error("Polarity computation failed: {message}")]
    Analysis {
        /// Human-readable failure description.
        message: String,
    },
}

/// Dataset storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The dataset file could not be opened for appending.
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        /// The dataset path that failed to open.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A record could not be serialized into a CSV row.
    #[error("Failed to write dataset row: {0}")]
    Write(#[from] csv::Error),

    /// Any other filesystem failure (metadata, flush).
    #[error("Dataset I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
