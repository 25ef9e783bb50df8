//! Route command implementation for the Waymark CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{OptimizeRequest, OptimizeResponse, Optimizer, Strategy, Waypoint};
use waymark_data::{apply_selection, fs, load_distances, load_places, load_selection};
use waymark_solver::{OptimizerConfig, RouteOptimizer};

use crate::{
    ARG_DISTANCES, ARG_EXACT_THRESHOLD, ARG_LATITUDE, ARG_LONGITUDE, ARG_MIN_STOPS, ARG_PLACES,
    ARG_SELECT, ARG_SELECTION, ARG_START_ID, CliError, ENV_DISTANCES, ENV_PLACES,
};

/// Latitude used when no start place or coordinates are given.
pub(crate) const DEFAULT_LATITUDE: f64 = 47.0105;
/// Longitude used when no start place or coordinates are given.
pub(crate) const DEFAULT_LONGITUDE: f64 = 28.8638;
/// Stops required unless configured otherwise.
pub(crate) const DEFAULT_MIN_STOPS: usize = 1;

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the selected places into a short open route. Places \
                 and distances are read from JSON exports; paths and tuning \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Plan a route through selected places"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct RouteArgs {
    /// Path to the places JSON document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to the distances JSON document.
    #[arg(long = ARG_DISTANCES, value_name = "path")]
    #[serde(default)]
    pub(crate) distances: Option<Utf8PathBuf>,
    /// Path to a JSON array of place ids to visit.
    #[arg(long = ARG_SELECTION, value_name = "path")]
    #[serde(default)]
    pub(crate) selection: Option<Utf8PathBuf>,
    /// Comma-separated place ids to visit.
    #[arg(long = ARG_SELECT, value_name = "ids", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) select: Option<Vec<u64>>,
    /// Start at this place instead of the current location.
    #[arg(long = ARG_START_ID, value_name = "id", conflicts_with_all = [ARG_LATITUDE, ARG_LONGITUDE])]
    #[serde(default)]
    pub(crate) start_id: Option<u64>,
    /// Latitude of the current location.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the current location.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Largest number of stops solved exactly.
    #[arg(long = ARG_EXACT_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) exact_threshold: Option<usize>,
    /// Fewest stops a route must contain.
    #[arg(long = ARG_MIN_STOPS, value_name = "count")]
    #[serde(default)]
    pub(crate) min_stops: Option<usize>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Where the route begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StartPoint {
    /// A place from the places document.
    Place(u64),
    /// The visitor's current position.
    Location {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the places document.
    pub(crate) places: Utf8PathBuf,
    /// Path to the distances document.
    pub(crate) distances: Utf8PathBuf,
    /// Optional path to a selection document.
    pub(crate) selection: Option<Utf8PathBuf>,
    /// Ids selected on the command line.
    pub(crate) select: Vec<u64>,
    /// Start of the route.
    pub(crate) start: StartPoint,
    /// Optimizer tuning.
    pub(crate) optimizer: OptimizerConfig,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.places, ARG_PLACES)?;
        Self::require_existing(&self.distances, ARG_DISTANCES)?;
        if let Some(selection) = &self.selection {
            Self::require_existing(selection, ARG_SELECTION)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Whether any selection was requested, from a file or the command line.
    fn has_selection(&self) -> bool {
        self.selection.is_some() || !self.select.is_empty()
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        let distances = args.distances.ok_or(CliError::MissingArgument {
            field: ARG_DISTANCES,
            env: ENV_DISTANCES,
        })?;
        let start = match (args.start_id, args.latitude, args.longitude) {
            (Some(id), _, _) => StartPoint::Place(id),
            (None, Some(latitude), Some(longitude)) => StartPoint::Location {
                latitude,
                longitude,
            },
            (None, None, None) => StartPoint::Location {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
            },
            (None, _, _) => return Err(CliError::PartialLocation),
        };
        let defaults = OptimizerConfig::default();
        let optimizer = OptimizerConfig {
            exact_threshold: args.exact_threshold.unwrap_or(defaults.exact_threshold),
            min_stops: args.min_stops.unwrap_or(DEFAULT_MIN_STOPS),
        };
        Ok(Self {
            places,
            distances,
            selection: args.selection,
            select: args.select.unwrap_or_default(),
            start,
            optimizer,
        })
    }
}

/// Builds an optimizer for the current route invocation.
pub(crate) trait RouteOptimizerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Optimizer>, CliError>;
}

pub(crate) struct DefaultRouteOptimizerBuilder;

impl RouteOptimizerBuilder for DefaultRouteOptimizerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Optimizer>, CliError> {
        let optimizer = RouteOptimizer::with_config(config.optimizer.clone())?;
        Ok(Box::new(optimizer))
    }
}

/// JSON document printed by the `route` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteOutput {
    /// Waypoints in visiting order, starting with the start.
    pub(crate) route: Vec<Waypoint>,
    /// Length of the route in kilometres.
    pub(crate) total_distance_km: f64,
    /// Algorithm that produced the route.
    pub(crate) strategy: Strategy,
    /// Time spent optimizing, in milliseconds.
    pub(crate) solve_time_ms: u128,
}

impl From<OptimizeResponse> for RouteOutput {
    fn from(response: OptimizeResponse) -> Self {
        Self {
            total_distance_km: response.route.total_distance_km(),
            route: response.route.into_waypoints(),
            strategy: response.strategy,
            solve_time_ms: response.diagnostics.solve_time.as_millis(),
        }
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRouteOptimizerBuilder;
    run_route_with(args, &builder, &mut stdout)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteOptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_route_config(args)?;
    let output = execute_route(&config, builder)?;
    write_route_output(writer, &output)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    builder: &dyn RouteOptimizerBuilder,
) -> Result<RouteOutput, CliError> {
    let places = load_places(&config.places)?;
    let total_places = places
        .iter()
        .map(|place| place.id)
        .max()
        .and_then(|id| usize::try_from(id).ok())
        .unwrap_or(places.len());
    let table = load_distances(&config.distances, total_places)?;
    let start = resolve_start(config.start, &places)?;

    let stops = if config.has_selection() {
        let mut selected = config.select.clone();
        if let Some(path) = &config.selection {
            selected.extend(load_selection(path)?);
        }
        apply_selection(places, &selected)
    } else {
        places
    };
    log::info!(
        "routing {} place(s) from {} (id {})",
        stops.len(),
        start.name,
        start.id
    );

    let optimizer = builder.build(config)?;
    let response = optimizer.optimize(&OptimizeRequest::new(&stops, &start, &table))?;
    Ok(RouteOutput::from(response))
}

fn resolve_start(start: StartPoint, places: &[Waypoint]) -> Result<Waypoint, CliError> {
    match start {
        StartPoint::Place(id) => places
            .iter()
            .find(|place| place.id == id)
            .cloned()
            .ok_or(CliError::UnknownStart { id }),
        StartPoint::Location {
            latitude,
            longitude,
        } => Ok(Waypoint::current_location(latitude, longitude)),
    }
}

fn write_route_output(writer: &mut dyn Write, output: &RouteOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerializeRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}
