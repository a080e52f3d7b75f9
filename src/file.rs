// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;
use crate::config::options::ExportOptions;
use crate::error::{Result, ScrapeError};
use crate::model::StudentProfile;

/// Where finished profiles go.
pub trait Sink {
    /// Persist the whole batch; returns the path written.
    fn write(&mut self, profiles: &[StudentProfile]) -> Result<PathBuf>;
}

/// One JSON array of profiles.
pub struct JsonSink {
    path: PathBuf,
    pretty: bool,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self { path: path.into(), pretty }
    }

    pub fn from_options(export: &ExportOptions) -> Self {
        Self::new(resolve_out_path(&export.out_path), export.pretty)
    }
}

impl Sink for JsonSink {
    fn write(&mut self, profiles: &[StudentProfile]) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let mut out = BufWriter::new(File::create(&self.path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut out, profiles)?;
        } else {
            serde_json::to_writer(&mut out, profiles)?;
        }
        out.write_all(b"\n")?;
        out.flush()?;
        logf!("wrote {} students to {}", profiles.len(), self.path.display());
        Ok(self.path.clone())
    }
}

/// A path that is, or looks like, a directory gets the default file name.
pub fn resolve_out_path(p: &Path) -> PathBuf {
    if p.is_dir() || looks_like_dir_hint(p) {
        p.join(DEFAULT_FILE)
    } else {
        p.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Layout(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_gets_default_file() {
        assert_eq!(resolve_out_path(Path::new("out/")), PathBuf::from("out/").join(DEFAULT_FILE));
        assert_eq!(resolve_out_path(Path::new("out/x.json")), PathBuf::from("out/x.json"));
    }

    #[test]
    fn empty_batch_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/students.json");
        let mut sink = JsonSink::new(&target, false);
        let written = sink.write(&[]).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap().trim(), "[]");
    }

    #[test]
    fn refuses_file_as_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(ensure_directory(&blocker).is_err());
    }
}
