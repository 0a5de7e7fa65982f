use std::{io, path::PathBuf};
use thiserror::Error;

/// Lets callers tell bad input data apart from a bad input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputData,
    InputSource,
    Config,
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("package max weight constraint violation: {weight_limit} is outside [{min}, {max}]")]
    ConstraintViolation { weight_limit: i64, min: i64, max: i64 },
    #[error("line needs {cells} table cells, more than the allowed {limit}")]
    TableTooLarge { cells: u64, limit: u64 },
    #[error("malformed line: {reason}")]
    MalformedLine { reason: String },
    #[error("invalid input path: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<PackError>,
    },
}

impl PackError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        PackError::MalformedLine {
            reason: reason.into(),
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        match self {
            e @ PackError::Line { .. } => e,
            e => PackError::Line {
                line,
                source: Box::new(e),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::ConstraintViolation { .. }
            | PackError::TableTooLarge { .. }
            | PackError::MalformedLine { .. } => ErrorKind::InputData,
            PackError::NotFound { .. } | PackError::Io(_) => ErrorKind::InputSource,
            PackError::InvalidConfig { .. } => ErrorKind::Config,
            PackError::Line { source, .. } => source.kind(),
        }
    }
}
