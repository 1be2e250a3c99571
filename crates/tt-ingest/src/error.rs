use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use tt_network::NetworkError;

/// Which of the two input streams a record came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stream {
    Segments,
    Schedules,
}

impl Stream {
    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Segments  => "segments",
            Stream::Schedules => "schedules",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that could not be parsed, with its raw text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{stream} line {line}: {reason} in record {record:?}")]
pub struct MalformedRecord {
    pub stream: Stream,
    /// 1-based line number in the input.
    pub line:   u64,
    pub record: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),

    #[error("{what} input not found: {}", path.display())]
    MissingSource { what: Stream, path: PathBuf },

    #[error("{stream} line {line}: {source}")]
    Rejected {
        stream: Stream,
        line:   u64,
        #[source]
        source: NetworkError,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// The build-rule violation behind this error, if it is one.
    pub fn network_error(&self) -> Option<&NetworkError> {
        match self {
            IngestError::Rejected { source, .. } => Some(source),
            IngestError::Network(e) => Some(e),
            _ => None,
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;
