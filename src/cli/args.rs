//! Command-line argument parsing
//!
//! Defined with clap derive macros. Each run-configuration flag has an
//! environment-variable counterpart (see [`crate::config`]); flags take
//! precedence. Help exits 0, an unrecognized flag prints usage and exits
//! 2, clap's conventional behavior.

use clap::Parser;

/// OSF Fetcher - bootstrap the dataset analysis environment
#[derive(Parser, Debug)]
#[command(
    name = "osf_fetcher",
    version,
    about = "Download and extract the study datasets into ./env",
    long_about = "Downloads the original and expansion study dataset archives from OSF \
and extracts them into a local ./env directory: tabular data under env/data, \
documentation and renamed licenses at the env root."
)]
pub struct Cli {
    /// Store the downloaded archives under env/raw instead of the working directory
    #[arg(short = 'z', long = "raw-zip")]
    pub raw_zip: bool,

    /// Skip extraction of documentation and license files
    #[arg(short = 'n', long = "no-docs")]
    pub no_docs: bool,

    /// Set up the two datasets concurrently
    #[arg(short = 'm', long = "multiprocess")]
    pub multiprocess: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["osf_fetcher", "-z", "--no-docs", "-m"]).unwrap();
        assert!(cli.raw_zip);
        assert!(cli.no_docs);
        assert!(cli.multiprocess);

        let cli = Cli::try_parse_from(["osf_fetcher"]).unwrap();
        assert!(!cli.raw_zip);
        assert!(!cli.no_docs);
        assert!(!cli.multiprocess);
    }

    #[test]
    fn test_help_exits_zero() {
        let err = Cli::try_parse_from(["osf_fetcher", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_unknown_flag_exits_two() {
        let err = Cli::try_parse_from(["osf_fetcher", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_log_level() {
        let quiet = Cli::try_parse_from(["osf_fetcher", "-q"]).unwrap();
        let verbose = Cli::try_parse_from(["osf_fetcher", "-v"]).unwrap();
        let default = Cli::try_parse_from(["osf_fetcher"]).unwrap();
        assert_eq!(quiet.log_level(), tracing::Level::ERROR);
        assert_eq!(verbose.log_level(), tracing::Level::DEBUG);
        assert_eq!(default.log_level(), tracing::Level::WARN);
    }
}
