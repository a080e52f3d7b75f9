// src/scrape.rs
use scraper::Html;

use crate::{
    config::options::ScrapeOptions,
    core::{Fetcher, FragmentBag, SelectorMap},
    error::{Result, ScrapeError},
    model::{RosterEntry, StudentProfile},
    progress::Progress,
    specs::{profile, roster},
};

/// A student (or roster row) that didn't make it into the output.
#[derive(Debug)]
pub struct Failure {
    /// Student name, or `row <n>` for undecodable roster rows.
    pub entity: String,
    pub error: ScrapeError,
}

/// Assembled profiles in roster order, plus what was skipped and why.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub profiles: Vec<StudentProfile>,
    pub failures: Vec<Failure>,
}

/// Fetch and decode the roster page.
pub fn collect_roster(
    fetcher: &mut dyn Fetcher,
    selectors: &SelectorMap,
    locator: &str,
) -> Result<(Vec<RosterEntry>, Vec<Failure>)> {
    let markup = fetcher.fetch_roster(locator)?;
    let doc = Html::parse_document(&markup);
    let (entries, bad_rows) = roster::parse_roster(&doc, selectors)?;
    let failures = bad_rows
        .into_iter()
        .map(|f| Failure { entity: format!("row {}", f.row), error: f.error })
        .collect();
    Ok((entries, failures))
}

/// Build one student from their page.
pub fn collect_student(
    fetcher: &mut dyn Fetcher,
    selectors: &SelectorMap,
    entry: &RosterEntry,
) -> Result<StudentProfile> {
    let markup = fetcher.fetch_entity(&entry.link)?;
    let doc = Html::parse_document(&markup);
    profile::assemble(entry, &FragmentBag::new(&doc, selectors))
}

/// Whole run: roster, then each student in roster order, one at a time.
///
/// Only a roster failure (or a broken selector table) aborts the batch.
/// Per-student failures are logged, reported and skipped.
pub fn collect_students(
    fetcher: &mut dyn Fetcher,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BatchReport> {
    let selectors = SelectorMap::new()?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading roster…");
    }
    let (entries, mut failures) = collect_roster(fetcher, &selectors, &opts.roster_locator)?;
    for f in &failures {
        if let Some(p) = progress.as_deref_mut() {
            p.item_failed(&f.entity, &f.error.to_string());
        }
    }

    let take = opts.limit(entries.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(take);
    }

    let mut profiles = Vec::with_capacity(take);
    for entry in entries.iter().take(take) {
        match collect_student(fetcher, &selectors, entry) {
            Ok(student) => {
                logd!("assembled {}", student.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&entry.name);
                }
                profiles.push(student);
            }
            Err(error) => {
                loge!("{}: {error}", entry.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&entry.name, &error.to_string());
                }
                failures.push(Failure { entity: entry.name.clone(), error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("assembled {} students, {} failures", profiles.len(), failures.len());

    Ok(BatchReport { profiles, failures })
}
