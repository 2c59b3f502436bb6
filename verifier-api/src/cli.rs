//! Command-line interface
//!
//! - `check`: verify one headline and print the report
//! - `serve`: run the HTTP API

use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand};

/// Headline Verifier - checks whether trusted outlets report a headline
#[derive(Parser)]
#[command(name = "headline-verifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify a single headline and print the result
    Check(CheckArgs),

    /// Run the HTTP API server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// News headline to verify
    #[arg(required = true, num_args = 1..)]
    pub headline: Vec<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Number of search results to classify (overrides MAX_RESULTS, at least 1)
    #[arg(long)]
    pub max_results: Option<NonZeroUsize>,
}

impl CheckArgs {
    /// Words given on the command line joined into one headline
    pub fn headline(&self) -> String {
        self.headline.join(" ")
    }
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = 3001)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_joins_headline_words() {
        let cli = Cli::try_parse_from([
            "headline-verifier",
            "check",
            "Rover",
            "lands",
            "--json",
            "--max-results",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.headline(), "Rover lands");
                assert!(args.json);
                assert_eq!(args.max_results.map(NonZeroUsize::get), Some(3));
            }
            Command::Serve(_) => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_requires_headline() {
        assert!(Cli::try_parse_from(["headline-verifier", "check"]).is_err());
    }

    #[test]
    fn test_check_rejects_zero_max_results() {
        let result = Cli::try_parse_from([
            "headline-verifier",
            "check",
            "Rover",
            "--max-results",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_port_flag() {
        let cli = Cli::try_parse_from(["headline-verifier", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, 8080),
            Command::Check(_) => panic!("expected serve"),
        }
    }
}
