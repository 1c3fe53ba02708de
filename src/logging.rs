use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout only carries status lines.
pub fn init_logger(verbose: bool) {
  let default_filter =
    if verbose {
      "copy_assets=debug"
    } else {
      "copy_assets=warn"
    };

  let filter =
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new(default_filter));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact(),
    )
    .init();
}
