use clap::Parser;

use super::OutputFormat;

/// Copies the site's logo and icon assets from docs/ into public/
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
   /// Verbose debug logging
   #[arg(long)]
   pub verbose: bool,

   /// Report copy failures per asset and carry on, instead of stopping at the first one.
   ///
   /// Missing source assets never stop the run.
   #[arg(long)]
   pub keep_going: bool,

   /// Format of the status lines written to stdout
   #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
   pub output: OutputFormat,
}

pub fn get_cli_args() -> Args {
  Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
      Args::command().debug_assert()
    }

    #[test]
    fn runs_without_arguments() {
      let args = Args::try_parse_from(["copy-assets"]).unwrap();

      assert_eq!((args.verbose, args.keep_going, args.output), (false, false, OutputFormat::Human))
    }

    #[test]
    fn accepts_json_output() {
      let args = Args::try_parse_from(["copy-assets", "--output", "json", "--keep-going"]).unwrap();

      assert_eq!((args.keep_going, args.output), (true, OutputFormat::Json))
    }

    #[test]
    fn rejects_unknown_output_format() {
      assert!(Args::try_parse_from(["copy-assets", "--output", "yaml"]).is_err())
    }

    #[test]
    fn rejects_positional_arguments() {
      assert!(Args::try_parse_from(["copy-assets", "docs"]).is_err())
    }
}
