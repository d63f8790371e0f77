//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Classify HTTP User-Agent headers by client, device and operating system.
#[derive(Parser, Debug)]
#[command(name = "ua-analyze")]
#[command(author, version, about)]
pub struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a sample file of observed headers and report counts per category
    Analyze {
        /// Sample file (JSON, or YAML with a .yml/.yaml extension)
        #[arg(short, long, default_value = "sample_data/user_agents.json")]
        input: PathBuf,

        /// Report file listing every classified header
        #[arg(short, long, default_value = "sample_data/user_agents.txt")]
        output: PathBuf,
    },
    /// Classify headers given on the command line
    Parse {
        /// Print each result as a JSON document
        #[arg(long)]
        json: bool,

        /// User-Agent header values
        #[arg(required = true)]
        headers: Vec<String>,
    },
}

impl Args {
    /// Default log filter; RUST_LOG takes priority when set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_defaults() {
        let args = Args::try_parse_from(["ua-analyze", "analyze"]).unwrap();
        match args.command {
            Command::Analyze { input, output } => {
                assert_eq!(input, PathBuf::from("sample_data/user_agents.json"));
                assert_eq!(output, PathBuf::from("sample_data/user_agents.txt"));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn parse_collects_headers() {
        let args =
            Args::try_parse_from(["ua-analyze", "parse", "--json", "pa11y/6.1.1", "facebookexternalhit/1.1"])
                .unwrap();
        match args.command {
            Command::Parse { json, headers } => {
                assert!(json);
                assert_eq!(headers, vec!["pa11y/6.1.1", "facebookexternalhit/1.1"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_requires_a_header() {
        assert!(Args::try_parse_from(["ua-analyze", "parse"]).is_err());
    }

    #[test]
    fn log_level_follows_flags() {
        let args = Args::try_parse_from(["ua-analyze", "-vv", "analyze"]).unwrap();
        assert_eq!(args.log_level(), "trace");

        let args = Args::try_parse_from(["ua-analyze", "analyze", "-v"]).unwrap();
        assert_eq!(args.log_level(), "debug");

        let args = Args::try_parse_from(["ua-analyze", "-q", "-v", "analyze"]).unwrap();
        assert_eq!(args.log_level(), "error");
    }
}
