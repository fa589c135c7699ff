use crate::error::RoutesResult;
use crate::itinerary::{Itinerary, ItineraryBuilder};
use crate::network::Network;
use crate::report;
use crate::request::RouteRequest;
use crate::search::RouteFinder;
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub struct Settings {
    pub output_dir: PathBuf,
    pub all: bool,
    pub max_flights: usize,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Written {
        request: RouteRequest,
        itineraries: Vec<Itinerary>,
        optimal: usize,
    },
    Unsupported {
        request: RouteRequest,
        reason: String,
    },
}

fn plan(
    network: &Network,
    settings: &Settings,
    request: &RouteRequest,
    rng: impl Rng,
) -> RoutesResult<Vec<Itinerary>> {
    let origin = network.locate(&request.origin.city, &request.origin.country)?;
    let destination = network.locate(&request.destination.city, &request.destination.country)?;
    info!(
        target: "app",
        "{}: {} ({}) -> {} ({})",
        request.name,
        request.origin,
        origin,
        request.destination,
        destination
    );

    let routes = RouteFinder::new(network)
        .with_max_flights(settings.max_flights)
        .find(&origin, &destination)?;

    let mut builder = ItineraryBuilder::new(network, rng);
    Ok(routes.iter().map(|route| builder.build(route)).collect())
}

/// Reads one request file, finds its routes and appends the report.
pub fn process_file(
    network: &Network,
    settings: &Settings,
    path: &Path,
    rng: impl Rng,
) -> RoutesResult<Outcome> {
    let request = RouteRequest::from_path(path)?;
    let mut out = report::open_output(&settings.output_dir, &request.name)?;

    match plan(network, settings, &request, rng) {
        Ok(itineraries) => {
            let optimal = match Itinerary::optimal(&itineraries) {
                Some(best) => itineraries.iter().position(|it| std::ptr::eq(it, best)).unwrap_or(0),
                None => {
                    warn!(target: "app", "{}: no route with known coordinates, using the first one", request.name);
                    0
                }
            };

            if settings.all {
                report::write_all_routes(&mut out, &itineraries)?;
            }
            report::write_optimal_route(&mut out, &itineraries[optimal])?;
            Ok(Outcome::Written {
                request,
                itineraries,
                optimal,
            })
        }
        Err(err) if err.is_unsupported() => {
            warn!(target: "app", "{}: {}", request.name, err);
            report::write_unsupported(&mut out)?;
            Ok(Outcome::Unsupported {
                request,
                reason: err.to_string(),
            })
        }
        Err(err) => Err(err),
    }
}

pub fn is_unsupported(result: &RoutesResult<Outcome>) -> bool {
    match result {
        Ok(Outcome::Unsupported { .. }) => true,
        Err(err) => err.is_unsupported(),
        _ => false,
    }
}

pub fn render_json(outcomes: &[Outcome]) -> RoutesResult<String> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}

/// Tracks how a run over several request files went.
#[derive(Debug, Default)]
pub struct RunStatus {
    unsupported: bool,
    failed: bool,
}

impl RunStatus {
    pub fn record(&mut self, result: &RoutesResult<Outcome>) {
        if is_unsupported(result) {
            self.unsupported = true;
        } else if result.is_err() {
            self.failed = true;
        }
    }

    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// 2 if any request was unsupported, else 1 if anything failed, else 0.
    pub fn exit_code(&self) -> u8 {
        if self.unsupported {
            2
        } else if self.failed {
            1
        } else {
            0
        }
    }
}
