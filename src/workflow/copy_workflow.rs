use std::io::Write;

use tracing::{debug, info, warn};

use crate::args::cli::Args;
use crate::status::StatusConsole;
use crate::copy::AssetCopy;
use crate::model::{AssetEntry, CopyLayout, CopyStatus, RunSummary, ASSET_ENTRIES, R};

/// A single sequential pass over the asset table.
pub struct AssetCopyWorkflow {
  layout: CopyLayout,
  entries: Vec<AssetEntry>,
  keep_going: bool,
}

impl AssetCopyWorkflow {

  pub fn new(layout: CopyLayout, keep_going: bool) -> Self {
    Self {
      layout,
      entries: ASSET_ENTRIES.to_vec(),
      keep_going
    }
  }

  pub fn from_args(args: &Args) -> Self {
    Self::new(CopyLayout::default(), args.keep_going)
  }

  #[cfg(test)]
  pub fn with_entries(self, entries: &[AssetEntry]) -> Self {
    Self {
      entries: entries.to_vec(),
      ..self
    }
  }

  /// Copies every entry in order, writing a status line for each and a done line at the end.
  ///
  /// Without keep going, the first copy fault is returned straight away: later entries are not
  /// processed and the done line is not written. Files already copied stay in place.
  pub fn run<W: Write>(&self, console: &mut StatusConsole<W>) -> R<RunSummary> {
    debug!(
      source_dir = %self.layout.source_dir().display(),
      destination_dir = %self.layout.destination_dir().display(),
      entries = self.entries.len(),
      "starting asset copy"
    );

    let mut summary = RunSummary::default();

    for entry in self.entries.iter() {
      let status = match AssetCopy::new(*entry, &self.layout).copy() {
        Ok(status) => status,
        Err(e) if self.keep_going => {
          warn!(source = entry.source_name(), "{e}");
          CopyStatus::failed(*entry, e.to_string())
        },
        Err(e) => return Err(e)
      };

      summary.record(&status);
      console.show_status(&status)?;
    }

    info!(copied = summary.copied(), missing = summary.missing(), failed = summary.failed(), "asset copy complete");
    console.show_done(self.layout.destination_dir(), &summary)?;

    Ok(summary)
  }
}
