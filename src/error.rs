use std::path::PathBuf;

use thiserror::Error;

/// Rejections produced by the activity store and the signup service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,
    #[error("Participant is not signed up for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Invalid email address")]
    InvalidEmail,
}

pub type ActivityResult<T> = Result<T, ActivityError>;

/// Problems found while building a catalog, either the baseline or a seed file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("activity name must not be blank")]
    BlankName,
    #[error("activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("activity {name:?} has {count} participants but allows only {max}")]
    OverCapacity {
        name: String,
        count: usize,
        max: usize,
    },
    #[error("activity {name:?} lists {email:?} more than once")]
    DuplicateParticipant { name: String, email: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}")]
    Invalid { key: &'static str, value: String },
}
