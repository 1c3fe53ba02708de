use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetCopyError {
  #[error("Could not copy {} to {}: {source}", source_path.display(), destination_path.display())]
  CopyFailed {
    source_path: PathBuf,
    destination_path: PathBuf,
    source: io::Error,
  },

  #[error("Could not preserve timestamps on {}: {source}", destination_path.display())]
  PreserveTimesFailed {
    destination_path: PathBuf,
    source: io::Error,
  },

  #[error("Could not write status output: {0}")]
  Output(#[from] io::Error),

  #[error("Could not serialize status output: {0}")]
  Json(#[from] serde_json::Error),
}
