// src/error.rs
use thiserror::Error;

use crate::config::consts::{MSG_BLOCKED, MSG_EXHAUSTED, MSG_NO_URL};

/// Every way a scrape can end without rows.
///
/// `Display` is the user-facing status line; frontends show it verbatim.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{}", MSG_NO_URL)]
    NoUrl,

    #[error("Error fetching URL: {0}")]
    Transport(String),

    #[error("{}", MSG_BLOCKED)]
    Blocked,

    #[error("{}", MSG_EXHAUSTED)]
    Exhausted,

    #[error("Invalid site profile: {0}")]
    Profile(String),

    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export failed: {0}")]
    Csv(#[from] ::csv::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Transport(e.to_string())
    }
}
