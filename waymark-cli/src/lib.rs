//! Command-line interface for planning Waymark routes from JSON exports.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod route;

pub use error::CliError;
use route::{RouteArgs, run_route};

pub(crate) const ARG_PLACES: &str = "places";
pub(crate) const ARG_DISTANCES: &str = "distances";
pub(crate) const ARG_SELECTION: &str = "selection";
pub(crate) const ARG_START_ID: &str = "start-id";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_SELECT: &str = "select";
pub(crate) const ARG_EXACT_THRESHOLD: &str = "exact-threshold";
pub(crate) const ARG_MIN_STOPS: &str = "min-stops";
pub(crate) const ENV_PLACES: &str = "WAYMARK_CMDS_ROUTE_PLACES";
pub(crate) const ENV_DISTANCES: &str = "WAYMARK_CMDS_ROUTE_DISTANCES";

/// Run the Waymark CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Plan short visiting orders through selected places",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Order places into a short route from a start point.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
