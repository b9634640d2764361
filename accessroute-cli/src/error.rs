//! Error types emitted by the AccessRoute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use accessroute_core::{CatalogError, SessionError, UnknownProfile};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the AccessRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The profile option did not name a known profile.
    #[error(transparent)]
    UnknownProfile(#[from] UnknownProfile),
    /// A point of interest name did not match the catalogue.
    #[error("no point of interest named '{name}' for --{field}")]
    UnknownPoi { field: &'static str, name: String },
    /// Opening or reading the catalogue file failed.
    #[error("failed to read catalogue at {path:?}: {source}")]
    ReadCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalogue file was not a valid catalogue.
    #[error("invalid catalogue at {path:?}: {source}")]
    InvalidCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The navigation session rejected the request.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
