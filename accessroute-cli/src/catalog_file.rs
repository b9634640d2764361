//! Catalogue loading for CLI commands.

use std::io::Read;

use accessroute_core::StaticCatalog;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::info;

use crate::CliError;

/// Load the catalogue at `path`, or the built-in Trieste catalogue when no
/// path is given.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<StaticCatalog, CliError> {
    let Some(path) = path else {
        return Ok(StaticCatalog::trieste());
    };
    let json = read_utf8_file(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog =
        StaticCatalog::from_json_str(&json).map_err(|source| CliError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded {} points of interest from {path}", catalog.len());
    Ok(catalog)
}

fn read_utf8_file(path: &Utf8Path) -> std::io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
