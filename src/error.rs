// src/error.rs
use thiserror::Error;

use crate::data::Direction;

/// Everything that can stop a run. Malformed anchors and duplicate rows are
/// absorbed where they happen and never show up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {url} response code {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not set up HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("{direction} vocabulary download problem")]
    Direction {
        direction: Direction,
        #[source]
        source: Box<Error>,
    },

    #[error("unknown direction: {0} (expected rus-bel, bel-rus or bel-def)")]
    UnknownDirection(String),

    #[error("database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach the direction whose download failed.
    pub fn in_direction(self, direction: Direction) -> Self {
        Error::Direction { direction, source: Box::new(self) }
    }

    /// The page URL behind a transport failure, looking through direction wrappers.
    pub fn failed_url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } | Error::Transport { url, .. } => Some(url),
            Error::Direction { source, .. } => source.failed_url(),
            _ => None,
        }
    }
}
