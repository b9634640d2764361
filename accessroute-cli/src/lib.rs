//! Command-line interface for exploring accessible routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod catalog_file;
mod error;
mod pois;
mod routes;

pub use error::CliError;

use pois::{PoisArgs, run_pois};
use routes::{RoutesArgs, run_routes};

const ARG_PROFILE: &str = "profile";
const ARG_CATALOG: &str = "catalog";
const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ENV_POIS_PROFILE: &str = "ACCESSROUTE_CMDS_POIS_PROFILE";
const ENV_ROUTES_PROFILE: &str = "ACCESSROUTE_CMDS_ROUTES_PROFILE";
const ENV_ROUTES_ORIGIN: &str = "ACCESSROUTE_CMDS_ROUTES_ORIGIN";
const ENV_ROUTES_DESTINATION: &str = "ACCESSROUTE_CMDS_ROUTES_DESTINATION";

/// Run the AccessRoute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Pois(args) => run_pois(args),
        Command::Routes(args) => run_routes(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "accessroute",
    about = "Plan accessible walking routes between points of interest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List points of interest rated for an accessibility profile.
    Pois(PoisArgs),
    /// Compute ranked routes between two points of interest.
    Routes(RoutesArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
