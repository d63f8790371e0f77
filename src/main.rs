//! CLI entry point for the user-agent analyzer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use user_agent::report::{classify_samples, load_samples, write_observations, Tally};
use user_agent::Classifier;

mod cli;

use cli::{Args, Command};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only results.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let result = match &args.command {
        Command::Analyze { input, output } => analyze(input, output),
        Command::Parse { json, headers } => parse(headers, *json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "ua-analyze failed");
            ExitCode::FAILURE
        }
    }
}

fn analyze(input: &Path, output: &Path) -> user_agent::Result<()> {
    let groups = load_samples(input)?;
    let observations = classify_samples(Classifier::shared(), &groups);

    let mut report = BufWriter::new(File::create(output)?);
    write_observations(&mut report, &observations)?;
    report.flush()?;
    info!(path = %output.display(), headers = observations.len(), "wrote report");

    let tally = Tally::new(groups.len(), &observations);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    tally.write_summary(&mut out)?;
    Ok(())
}

fn parse(headers: &[String], json: bool) -> user_agent::Result<()> {
    let classifier = Classifier::shared();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for header in headers {
        let ua = classifier.parse(header);
        if json {
            serde_json::to_writer(&mut out, &ua)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", ua)?;
        }
    }
    Ok(())
}
