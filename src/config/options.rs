// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Handed to `Fetcher::fetch_roster` as-is.
    pub roster_locator: String,
    /// Prefix limit on the roster; `None` processes every entry.
    pub max_entities: Option<usize>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            roster_locator: s!(ROSTER_LOCATOR),
            max_entities: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            pretty: false,
        }
    }
}

impl ScrapeOptions {
    /// How many of `available` roster entries a batch should visit.
    pub fn limit(&self, available: usize) -> usize {
        self.max_entities.map_or(available, |n| n.min(available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_a_prefix_cap() {
        let mut opts = ScrapeOptions::default();
        assert_eq!(opts.limit(10), 10);
        opts.max_entities = Some(3);
        assert_eq!(opts.limit(10), 3);
        assert_eq!(opts.limit(2), 2);
        opts.max_entities = Some(0);
        assert_eq!(opts.limit(10), 0);
    }

    #[test]
    fn default_export_lands_in_out_dir() {
        let export = ExportOptions::default();
        assert!(export.out_path.ends_with("students.json"));
        assert!(!export.pretty);
    }
}
