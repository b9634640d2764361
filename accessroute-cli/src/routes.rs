//! `routes` command: rank candidate routes between two points of interest.

use std::io::Write;

use accessroute_core::labels::format_distance;
use accessroute_core::{
    AccessibilityProfile, ArchetypeSynthesizer, ColorBand, NavigationSession, PoiCatalog,
    PointOfInterest, Route, RouteSynthesizer, StaticCatalog, color_band,
};
use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog_file::load_catalog;
use crate::{
    ARG_CATALOG, ARG_FROM, ARG_PROFILE, ARG_TO, CliError, ENV_ROUTES_DESTINATION,
    ENV_ROUTES_ORIGIN, ENV_ROUTES_PROFILE, write_json,
};

/// CLI arguments for the `routes` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute candidate walking routes between two points of \
                 interest, ranked by accessibility score, and report whether \
                 each suits the chosen profile. Points are matched by name, \
                 ignoring case.",
    about = "Rank accessible routes between two points of interest"
)]
#[ortho_config(prefix = "ACCESSROUTE")]
pub(crate) struct RoutesArgs {
    /// Accessibility profile (wheelchair, stroller, visual-impairment, hearing-impairment).
    #[arg(long = ARG_PROFILE, value_name = "profile")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Name of the starting point.
    #[arg(long = ARG_FROM, value_name = "name")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Name of the end point.
    #[arg(long = ARG_TO, value_name = "name")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// JSON catalogue to use instead of the built-in Trieste catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RoutesArgs {
    fn into_config(self) -> Result<RoutesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RoutesConfig::try_from(merged)
    }
}

/// Resolved `routes` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoutesConfig {
    pub(crate) profile: AccessibilityProfile,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl TryFrom<RoutesArgs> for RoutesConfig {
    type Error = CliError;

    fn try_from(args: RoutesArgs) -> Result<Self, Self::Error> {
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_ROUTES_PROFILE,
        })?;
        let origin = args.origin.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_ROUTES_ORIGIN,
        })?;
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_ROUTES_DESTINATION,
        })?;
        Ok(Self {
            profile: profile.parse()?,
            origin,
            destination,
            catalog: args.catalog,
        })
    }
}

/// One ranked route in `routes` output.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RankedRoute {
    #[serde(flatten)]
    pub(crate) route: Route,
    pub(crate) suitable: bool,
    pub(crate) color_band: ColorBand,
    pub(crate) distance_label: String,
}

impl RankedRoute {
    fn new(route: &Route, profile: AccessibilityProfile) -> Self {
        Self {
            suitable: route.is_suitable_for(profile),
            color_band: color_band(route.accessibility_score()),
            distance_label: format_distance(route.distance_meters()),
            route: route.clone(),
        }
    }
}

/// Builds the route synthesizer for the current routes invocation.
pub(crate) trait SynthesizerBuilder {
    fn build(&self, config: &RoutesConfig) -> Box<dyn RouteSynthesizer>;
}

pub(crate) struct DefaultSynthesizerBuilder;

impl SynthesizerBuilder for DefaultSynthesizerBuilder {
    fn build(&self, _config: &RoutesConfig) -> Box<dyn RouteSynthesizer> {
        Box::new(ArchetypeSynthesizer)
    }
}

pub(crate) fn run_routes(args: RoutesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_routes_with(args, &DefaultSynthesizerBuilder, &mut stdout)
}

pub(crate) fn run_routes_with(
    args: RoutesArgs,
    builder: &dyn SynthesizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let ranked = ranked_routes(&config, builder)?;
    write_json(writer, &ranked)
}

fn ranked_routes(
    config: &RoutesConfig,
    builder: &dyn SynthesizerBuilder,
) -> Result<Vec<RankedRoute>, CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let origin = find_poi(&catalog, &config.origin, ARG_FROM)?;
    let destination = find_poi(&catalog, &config.destination, ARG_TO)?;

    let mut session = NavigationSession::with_synthesizer(builder.build(config));
    session.select_profile(config.profile);
    session.select_origin(origin);
    session.select_destination(destination);
    let routes = session.request_routes()?;
    debug!("ranked {} routes for {}", routes.len(), config.profile);
    Ok(routes
        .iter()
        .map(|route| RankedRoute::new(route, config.profile))
        .collect())
}

fn find_poi(
    catalog: &StaticCatalog,
    name: &str,
    field: &'static str,
) -> Result<PointOfInterest, CliError> {
    catalog
        .find_by_name(name)
        .cloned()
        .ok_or_else(|| CliError::UnknownPoi {
            field,
            name: name.to_owned(),
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RoutesConfig, CliError> {
    let merged = RoutesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RoutesConfig::try_from(merged)
}
