use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{AssetEntry, CopyInfo};

/// Outcome of processing one asset entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CopyStatus {
  Copied {
    #[serde(flatten)]
    entry: AssetEntry,
    #[serde(flatten)]
    info: CopyInfo,
  },
  Missing {
    #[serde(flatten)]
    entry: AssetEntry,
    source: PathBuf,
  },
  /// Only produced when the run keeps going past copy faults.
  Failed {
    #[serde(flatten)]
    entry: AssetEntry,
    error: String,
  },
}

impl CopyStatus {

  pub fn copied(entry: AssetEntry, info: CopyInfo) -> Self {
    CopyStatus::Copied { entry, info }
  }

  pub fn missing<P: AsRef<Path>>(entry: AssetEntry, source: P) -> Self {
    CopyStatus::Missing { entry, source: source.as_ref().to_path_buf() }
  }

  pub fn failed(entry: AssetEntry, error: String) -> Self {
    CopyStatus::Failed { entry, error }
  }
}

/// Counts of each outcome over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  copied: u64,
  missing: u64,
  failed: u64,
}

impl RunSummary {

  pub fn record(&mut self, status: &CopyStatus) {
    match status {
      CopyStatus::Copied { .. } => self.copied += 1,
      CopyStatus::Missing { .. } => self.missing += 1,
      CopyStatus::Failed { .. } => self.failed += 1,
    }
  }

  pub fn copied(&self) -> u64 {
    self.copied
  }

  pub fn missing(&self) -> u64 {
    self.missing
  }

  pub fn failed(&self) -> u64 {
    self.failed
  }
}
