// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::options::{AppOptions, ExportOptions, ScrapeOptions};
use crate::config::consts::ROSTER_LOCATOR;
use crate::core::DirFetcher;
use crate::file::{JsonSink, Sink};
use crate::progress::Progress;
use crate::scrape::collect_students;

/// Turn saved Blue Archive wiki pages into one JSON file of students.
#[derive(Debug, Parser)]
#[command(name = "ba_scrape", version, about)]
pub struct Args {
    /// Directory of saved pages, one `<Name>.html` per wiki page
    #[arg(long, value_name = "DIR")]
    pub pages: PathBuf,

    /// Roster page locator
    #[arg(long, default_value = ROSTER_LOCATOR)]
    pub roster: String,

    /// Output file (or directory ending in '/')
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Stop after this many students
    #[arg(short = 'n', long = "max", value_name = "COUNT")]
    pub max: Option<usize>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut export = ExportOptions { pretty: self.pretty, ..ExportOptions::default() };
        if let Some(out) = &self.out {
            export.out_path = out.clone();
        }
        AppOptions {
            scrape: ScrapeOptions { roster_locator: self.roster.clone(), max_entities: self.max },
            export,
        }
    }
}

/// Prints one line per student to stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        eprintln!("skipped {name}: {reason}");
    }
}

pub fn run(args: Args) -> crate::error::Result<()> {
    crate::log::init(args.verbose);
    let opts = args.options();

    let mut fetcher = DirFetcher::new(&args.pages);
    let mut progress = ConsoleProgress { total: 0, done: 0 };
    let report = collect_students(&mut fetcher, &opts.scrape, Some(&mut progress))?;

    let mut sink = JsonSink::from_options(&opts.export);
    let path = sink.write(&report.profiles)?;
    eprintln!(
        "Wrote {} students to {} ({} skipped)",
        report.profiles.len(),
        path.display(),
        report.failures.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from(["ba_scrape", "--pages", "saved", "-n", "5", "--pretty", "-o", "x.json"]);
        let opts = args.options();
        assert_eq!(opts.scrape.max_entities, Some(5));
        assert_eq!(opts.scrape.roster_locator, ROSTER_LOCATOR);
        assert_eq!(opts.export.out_path, PathBuf::from("x.json"));
        assert!(opts.export.pretty);
    }
}
