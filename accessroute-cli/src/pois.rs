//! `pois` command: list the catalogue rated for a profile.

use std::io::Write;

use accessroute_core::{AccessibilityProfile, PoiCatalog, PoiCategory, PointOfInterest};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog_file::load_catalog;
use crate::{ARG_CATALOG, ARG_PROFILE, CliError, ENV_POIS_PROFILE, write_json};

/// CLI arguments for the `pois` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List every point of interest in the catalogue, best rated \
                 first for the chosen accessibility profile. Options can come \
                 from CLI flags, configuration files, or environment variables.",
    about = "List points of interest rated for a profile"
)]
#[ortho_config(prefix = "ACCESSROUTE")]
pub(crate) struct PoisArgs {
    /// Accessibility profile (wheelchair, stroller, visual-impairment, hearing-impairment).
    #[arg(long = ARG_PROFILE, value_name = "profile")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// JSON catalogue to use instead of the built-in Trieste catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl PoisArgs {
    fn into_config(self) -> Result<PoisConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PoisConfig::try_from(merged)
    }
}

/// Resolved `pois` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PoisConfig {
    pub(crate) profile: AccessibilityProfile,
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl TryFrom<PoisArgs> for PoisConfig {
    type Error = CliError;

    fn try_from(args: PoisArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_POIS_PROFILE,
        })?;
        Ok(Self {
            profile: profile.parse()?,
            catalog: args.catalog,
        })
    }
}

/// One line of `pois` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RatedPoi {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) category: PoiCategory,
    pub(crate) rating: f32,
}

impl RatedPoi {
    fn new(poi: &PointOfInterest, profile: AccessibilityProfile) -> Self {
        Self {
            id: poi.id,
            name: poi.name.clone(),
            category: poi.category,
            rating: poi.rating(profile),
        }
    }
}

pub(crate) fn run_pois(args: PoisArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_pois_with(args, &mut stdout)
}

pub(crate) fn run_pois_with(args: PoisArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let rated = rated_pois(&config)?;
    write_json(writer, &rated)
}

fn rated_pois(config: &PoisConfig) -> Result<Vec<RatedPoi>, CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    Ok(catalog
        .rated_points_of_interest(config.profile)
        .iter()
        .map(|poi| RatedPoi::new(poi, config.profile))
        .collect())
}
