use clap::ValueEnum;

/// How status lines are written to stdout.
#[derive(Debug, PartialEq, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  /// One readable line per asset
  #[default]
  Human,
  /// One JSON object per asset
  Json
}
