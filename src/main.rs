use std::io;
use std::process::ExitCode;

use args::cli;
use status::StatusConsole;
use workflow::AssetCopyWorkflow;

mod args;
mod model;
mod copy;
mod status;
mod workflow;
mod logging;

fn main() -> ExitCode {
  let args = cli::get_cli_args();
  logging::init_logger(args.verbose);

  let workflow = AssetCopyWorkflow::from_args(&args);
  let mut console = StatusConsole::new(io::stdout().lock(), args.output);

  match workflow.run(&mut console) {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{} {e}", ::console::style("error:").red().bold().for_stderr());
      ExitCode::FAILURE
    }
  }
}
