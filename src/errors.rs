use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop an operation, as opposed to a single bad line.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("The file '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read the file '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{input}' is not a valid year")]
    InvalidYear { input: String },

    #[error("input ended before '{prompt}' was answered")]
    UnexpectedEof { prompt: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

// Why a line from one of the input files was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} '{value}' is not an integer")]
    NotAnInteger { field: &'static str, value: String },

    #[error("land area must be positive, got {0}")]
    NonPositiveLandArea(i64),

    #[error("unknown label '{0}'")]
    UnknownLabel(String),

    #[error("no region named '{0}'")]
    UnknownRegion(String),

    #[error("line is not valid UTF-8")]
    Encoding,
}

pub type Result<T> = std::result::Result<T, StatsError>;
