use std::path::{Path, PathBuf};

use serde::Serialize;

/// Details of a completed copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyInfo {
  #[serde(rename = "source")]
  source_file: PathBuf,
  #[serde(rename = "destination")]
  destination_file: PathBuf,
  bytes: u64,
}

impl CopyInfo {
  pub fn new<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D, bytes: u64) -> Self {
    Self {
      source_file: source.as_ref().to_path_buf(),
      destination_file: destination.as_ref().to_path_buf(),
      bytes
    }
  }
}
