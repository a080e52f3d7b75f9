// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A roster row is missing cells or a required link/image child.
    #[error("malformed roster row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// A required fragment is absent from an entity page.
    #[error("profile incomplete: missing {slot}")]
    ProfileIncomplete { slot: &'static str },

    /// Upgrade rows must line up with ability levels 2..N.
    #[error("upgrade table has {upgrades} rows but ability has {levels} levels")]
    UpgradeMergeMismatch { upgrades: usize, levels: usize },

    #[error("bad selector for {slot} ({selector}): {reason}")]
    BadSelector {
        slot: &'static str,
        selector: &'static str,
        reason: String,
    },

    /// Static layout tables disagree with themselves.
    #[error("layout: {0}")]
    Layout(String),

    #[error("fetch {locator} from {}: {source}", .path.display())]
    Fetch {
        locator: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        ScrapeError::MalformedRow { row, reason: reason.into() }
    }

    pub(crate) fn missing(slot: &'static str) -> Self {
        ScrapeError::ProfileIncomplete { slot }
    }
}
