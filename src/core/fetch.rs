// src/core/fetch.rs
//
// Page sources. The pipeline only needs page markup for a locator; how it is
// obtained (browser, HTTP, saved files) is the fetcher's business, including
// timeouts and retries.

use std::{fs, path::PathBuf};

use crate::config::consts::PAGE_EXT;
use crate::error::{Result, ScrapeError};
use super::sanitize::page_file_stem;

pub trait Fetcher {
    /// Markup of the roster (list) page.
    fn fetch_roster(&mut self, locator: &str) -> Result<String>;

    /// Markup of one entity page.
    fn fetch_entity(&mut self, locator: &str) -> Result<String>;
}

/// Reads pages saved to a directory, one `<stem>.html` per locator, where
/// the stem is the locator's last path segment (see `page_file_stem`).
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, locator: &str) -> PathBuf {
        self.root.join(format!("{}.{}", page_file_stem(locator), PAGE_EXT))
    }

    fn read(&self, locator: &str) -> Result<String> {
        let path = self.path_for(locator);
        logd!("reading {} from {}", locator, path.display());
        fs::read_to_string(&path).map_err(|source| ScrapeError::Fetch {
            locator: s!(locator),
            path,
            source,
        })
    }
}

impl Fetcher for DirFetcher {
    fn fetch_roster(&mut self, locator: &str) -> Result<String> {
        self.read(locator)
    }

    fn fetch_entity(&mut self, locator: &str) -> Result<String> {
        self.read(locator)
    }
}
