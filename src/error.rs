//! Error types for eventplan.
//!
//! The timeline generator itself cannot fail. Everything here belongs to the
//! boundary: parsing form input, reading config, and the saved timeline store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by commands, storage and request parsing.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Event date was not a valid `YYYY-MM-DD` string
    #[error("Invalid event date '{input}': {source}. Use YYYY-MM-DD.")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Answer label is not a recognized option (strict mode only)
    #[error("Unknown answer option '{0}'")]
    UnknownOption(String),

    #[error("Timeline '{0}' not found")]
    TimelineNotFound(String),

    #[error("Task {task_id} not found in timeline '{timeline}'")]
    TaskNotFound { timeline: String, task_id: String },

    #[error("Failed to read config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
