//! # langtour
//!
//! A CLI that runs guided tours of Rust language and library features.
//!
//! ## Overview
//!
//! langtour is built on top of langtourlib. Each suite runs a handful of
//! small demos and prints their results as an aligned report, framed by a
//! banner with the suite title and the current time.
//!
//! ## Usage
//!
//! ```bash
//! # Run every suite, in tour order
//! langtour
//!
//! # Run selected suites
//! langtour option iterators
//!
//! # List suite names
//! langtour --list
//!
//! # Show diagnostics on stderr
//! RUST_LOG=langtourlib=debug langtour datetime
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use langtourlib::{run_suites, Suite};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("langtour")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Guided tours of Rust language and library features")
        .arg(
            Arg::new("suite")
                .action(ArgAction::Append)
                .help(format!(
                    "Suites to run, in order (default: all). One of: {}",
                    Suite::names().join(", ")
                )),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List suite names and exit"),
        )
}

/// Extract the suites to run from matches, defaulting to the full tour
fn extract_suites(matches: &ArgMatches) -> Result<Vec<Suite>, anyhow::Error> {
    let Some(names) = matches.get_many::<String>("suite") else {
        return Ok(Suite::ALL.to_vec());
    };
    let suites = names
        .map(|name| name.parse::<Suite>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(suites)
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    if matches.get_flag("list") {
        for name in Suite::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let suites = extract_suites(matches)?;
    tracing::debug!(?suites, "running tour");
    run_suites(&suites).context("tour stopped")?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults_to_all_suites() {
        let matches = build_command().get_matches_from(["langtour"]);
        assert_eq!(extract_suites(&matches).unwrap(), Suite::ALL);
    }

    #[test]
    fn test_selected_suites_keep_order() {
        let matches = build_command().get_matches_from(["langtour", "iterators", "option"]);
        assert_eq!(
            extract_suites(&matches).unwrap(),
            [Suite::Iterators, Suite::Option]
        );
    }

    #[test]
    fn test_unknown_suite_is_rejected() {
        let matches = build_command().get_matches_from(["langtour", "streams"]);
        let err = extract_suites(&matches).unwrap_err();
        assert!(err.to_string().contains("unknown suite 'streams'"));
    }
}
