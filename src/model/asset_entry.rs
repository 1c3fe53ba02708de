use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single file to copy: its name in the source directory and the name it gets in the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
  source_name: &'static str,
  dest_name: &'static str,
}

impl AssetEntry {
  pub const fn new(source_name: &'static str, dest_name: &'static str) -> Self {
    Self {
      source_name,
      dest_name
    }
  }

  pub fn source_name(&self) -> &'static str {
    self.source_name
  }

  pub fn dest_name(&self) -> &'static str {
    self.dest_name
  }

  pub fn is_renamed(&self) -> bool {
    self.source_name != self.dest_name
  }
}

/// Assets copied on every run, in the order their status lines are printed.
pub const ASSET_ENTRIES: [AssetEntry; 6] = [
  AssetEntry::new("logo.png", "logo.png"),
  AssetEntry::new("favicon.ico", "favicon.ico"),
  AssetEntry::new("apple-touch-icon.png", "apple-touch-icon.png"),
  AssetEntry::new("favicon.svg", "favicon.svg"),
  AssetEntry::new("web-app-manifest-192x192.png", "icon-192.png"),
  AssetEntry::new("web-app-manifest-512x512.png", "icon-512.png"),
];

/// Where assets are read from and written to.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyLayout {
  source_dir: PathBuf,
  destination_dir: PathBuf,
}

impl CopyLayout {

  pub const DEFAULT_SOURCE_DIR: &'static str = "docs";
  pub const DEFAULT_DESTINATION_DIR: &'static str = "public";

  pub fn new<S: AsRef<Path>, D: AsRef<Path>>(source_dir: S, destination_dir: D) -> Self {
    Self {
      source_dir: source_dir.as_ref().to_path_buf(),
      destination_dir: destination_dir.as_ref().to_path_buf(),
    }
  }

  pub fn source_dir(&self) -> &Path {
    self.source_dir.as_path()
  }

  pub fn destination_dir(&self) -> &Path {
    self.destination_dir.as_path()
  }

  pub fn source_path(&self, entry: &AssetEntry) -> PathBuf {
    self.source_dir.join(entry.source_name())
  }

  pub fn destination_path(&self, entry: &AssetEntry) -> PathBuf {
    self.destination_dir.join(entry.dest_name())
  }
}

impl Default for CopyLayout {
  fn default() -> Self {
    Self::new(Self::DEFAULT_SOURCE_DIR, Self::DEFAULT_DESTINATION_DIR)
  }
}
