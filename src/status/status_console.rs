use std::io::Write;
use std::path::Path;

use console::{style, Emoji};
use serde_json::json;

use crate::args::OutputFormat;
use crate::model::{CopyStatus, RunSummary, R};

static COPIED: Emoji = Emoji("✓", "+");
static MISSING: Emoji = Emoji("✗", "x");

/// Writes one line per copy status, and a closing line once the run completes.
pub struct StatusConsole<W> {
  out: W,
  format: OutputFormat,
}

impl<W: Write> StatusConsole<W> {

  pub fn new(out: W, format: OutputFormat) -> Self {
    Self {
      out,
      format
    }
  }

  pub fn show_status(&mut self, status: &CopyStatus) -> R<()> {
    match self.format {
      OutputFormat::Human => self.show_human_status(status),
      OutputFormat::Json => self.show_json(status),
    }
  }

  pub fn show_done(&mut self, destination_dir: &Path, summary: &RunSummary) -> R<()> {
    match self.format {
      OutputFormat::Human => {
        writeln!(self.out)?;
        writeln!(self.out, "Done! Files copied to {}/", destination_dir.display())?;
      },
      OutputFormat::Json => {
        let done = json!({
          "status": "done",
          "destination_dir": destination_dir.display().to_string(),
          "copied": summary.copied(),
          "missing": summary.missing(),
          "failed": summary.failed(),
        });
        self.show_json(&done)?
      }
    }

    self.out.flush()?;
    Ok(())
  }

  #[cfg(test)]
  pub fn into_inner(self) -> W {
    self.out
  }

  fn show_human_status(&mut self, status: &CopyStatus) -> R<()> {
    match status {
      CopyStatus::Copied { entry, .. } =>
        writeln!(self.out, "{} Copied {} -> {}", style(&COPIED).green(), entry.source_name(), entry.dest_name())?,

      CopyStatus::Missing { entry, .. } =>
        writeln!(self.out, "{} Missing: {}", style(&MISSING).yellow(), entry.source_name())?,

      CopyStatus::Failed { entry, error } =>
        writeln!(self.out, "{} Failed to copy {}: {}", style(&MISSING).red(), entry.source_name(), error)?,
    }

    Ok(())
  }

  fn show_json<T: serde::Serialize>(&mut self, value: &T) -> R<()> {
    serde_json::to_writer(&mut self.out, value)?;
    writeln!(self.out)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetEntry, CopyInfo};
    use pretty_assertions::assert_eq;

    const ICON_512: AssetEntry = AssetEntry::new("web-app-manifest-512x512.png", "icon-512.png");

    fn output(console: StatusConsole<Vec<u8>>) -> String {
      String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn shows_source_and_destination_names_for_a_copy() {
      let mut console = StatusConsole::new(Vec::new(), OutputFormat::Human);
      let info = CopyInfo::new("docs/web-app-manifest-512x512.png", "public/icon-512.png", 4);

      console.show_status(&CopyStatus::copied(ICON_512, info)).unwrap();

      let out = output(console);
      assert!(out.contains("Copied web-app-manifest-512x512.png -> icon-512.png"), "unexpected output: {out}");
      assert_eq!(out.lines().count(), 1)
    }

    #[test]
    fn shows_source_name_for_a_missing_asset() {
      let mut console = StatusConsole::new(Vec::new(), OutputFormat::Human);

      console.show_status(&CopyStatus::missing(ICON_512, "docs/web-app-manifest-512x512.png")).unwrap();

      let out = output(console);
      assert!(out.contains("Missing: web-app-manifest-512x512.png"), "unexpected output: {out}");
      assert!(!out.contains("icon-512.png"), "missing line should not name the destination: {out}")
    }

    #[test]
    fn shows_error_for_a_failed_copy() {
      let mut console = StatusConsole::new(Vec::new(), OutputFormat::Human);

      console.show_status(&CopyStatus::failed(ICON_512, "Permission denied".to_owned())).unwrap();

      assert!(output(console).contains("Failed to copy web-app-manifest-512x512.png: Permission denied"))
    }

    #[test]
    fn shows_done_after_a_blank_line() {
      let mut console = StatusConsole::new(Vec::new(), OutputFormat::Human);

      console.show_done(Path::new("public"), &RunSummary::default()).unwrap();

      assert_eq!(output(console), "\nDone! Files copied to public/\n")
    }

    #[test]
    fn writes_one_json_object_per_line() {
      let mut console = StatusConsole::new(Vec::new(), OutputFormat::Json);
      let missing = CopyStatus::missing(ICON_512, "docs/web-app-manifest-512x512.png");
      let mut summary = RunSummary::default();
      summary.record(&missing);

      console.show_status(&missing).unwrap();
      console.show_done(Path::new("public"), &summary).unwrap();

      let lines: Vec<serde_json::Value> =
        output(console)
          .lines()
          .map(|l| serde_json::from_str(l).unwrap())
          .collect();

      assert_eq!(
        lines,
        vec![
          json!({
            "status": "missing",
            "source_name": "web-app-manifest-512x512.png",
            "dest_name": "icon-512.png",
            "source": "docs/web-app-manifest-512x512.png"
          }),
          json!({
            "status": "done",
            "destination_dir": "public",
            "copied": 0,
            "missing": 1,
            "failed": 0
          }),
        ]
      )
    }
}
