use std::fs::{self, File, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::model::{AssetCopyError, AssetEntry, CopyInfo, CopyLayout, CopyStatus, R};

/// Copies one asset entry from the source directory to the destination directory.
#[derive(Debug, Clone)]
pub struct AssetCopy {
  entry: AssetEntry,
  source_path: PathBuf,
  destination_path: PathBuf,
}

impl AssetCopy {

  pub fn new(entry: AssetEntry, layout: &CopyLayout) -> Self {
    Self {
      entry,
      source_path: layout.source_path(&entry),
      destination_path: layout.destination_path(&entry),
    }
  }

  /// Copies bytes, permissions and timestamps when the source is a regular file.
  ///
  /// A missing source is reported as [CopyStatus::Missing] and leaves the destination untouched.
  /// Any other fault is returned as an error.
  pub fn copy(self) -> R<CopyStatus> {
    debug!(
      source = %self.source_path.display(),
      destination = %self.destination_path.display(),
      renamed = self.entry.is_renamed(),
      "resolved asset paths"
    );

    if !self.source_path.is_file() {
      debug!(source = %self.source_path.display(), "source asset not found");
      return Ok(CopyStatus::missing(self.entry, &self.source_path))
    }

    let bytes = self.copy_bytes()?;
    self.preserve_times()?;

    debug!(bytes, destination = %self.destination_path.display(), "copied asset");

    let info = CopyInfo::new(&self.source_path, &self.destination_path, bytes);
    Ok(CopyStatus::copied(self.entry, info))
  }

  fn copy_bytes(&self) -> R<u64> {
    // Overwrites the destination; also carries over permission bits.
    fs::copy(&self.source_path, &self.destination_path)
      .map_err(|e| AssetCopyError::CopyFailed {
        source_path: self.source_path.clone(),
        destination_path: self.destination_path.clone(),
        source: e
      })
  }

  fn preserve_times(&self) -> R<()> {
    let preserve_failed = |e: io::Error| AssetCopyError::PreserveTimesFailed {
      destination_path: self.destination_path.clone(),
      source: e
    };

    let meta = fs::metadata(&self.source_path).map_err(preserve_failed)?;
    let modified = meta.modified().map_err(preserve_failed)?;

    let mut times = FileTimes::new().set_modified(modified);
    // Not every platform tracks access times.
    if let Ok(accessed) = meta.accessed() {
      times = times.set_accessed(accessed);
    }

    Self::open_for_times(&self.destination_path)
      .and_then(|f| f.set_times(times))
      .map_err(preserve_failed)?;

    debug!(modified = %Self::local_time(modified), destination = %self.destination_path.display(), "preserved timestamps");
    Ok(())
  }

  fn open_for_times(path: &Path) -> io::Result<File> {
    // Windows needs write access to change times, unix only needs ownership.
    if cfg!(windows) {
      OpenOptions::new().write(true).open(path)
    } else {
      File::open(path)
    }
  }

  fn local_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
      .format("%Y-%m-%d %H:%M:%S")
      .to_string()
  }
}
