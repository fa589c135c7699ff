use crate::app::{Outcome, RunStatus, Settings};
use crate::itinerary::Itinerary;
use crate::network::Network;
use clap::Parser;
use colored::Colorize;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::Tabled;
use tabled::settings::Style;

mod airline;
mod airport;
mod app;
mod error;
mod flight;
mod itinerary;
mod logging;
mod network;
mod report;
mod request;
mod search;

/// Finds the airline routes with the fewest flights between two cities.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Request files (.csv or .txt) naming the start city and the destination city
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Write all possible routes as well as the optimal one
    #[arg(long)]
    all: bool,

    /// Directory holding airports.csv, routes.csv and airlines.csv
    #[arg(long, value_name = "DIR", env = "AIRLINE_ROUTES_DATA_DIR", default_value = "CSVFiles")]
    data_dir: PathBuf,

    /// Directory the reports are appended to
    #[arg(long, value_name = "DIR", env = "AIRLINE_ROUTES_OUTPUT_DIR", default_value = "OutputFiles")]
    output_dir: PathBuf,

    /// Give up on routes needing more flights than this
    #[arg(long, default_value_t = search::DEFAULT_MAX_FLIGHTS)]
    max_flights: usize,

    /// Seed for picking among airlines serving the same leg
    #[arg(long)]
    seed: Option<u64>,

    /// Print the itineraries as JSON on stdout
    #[arg(long)]
    json: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Flights")]
    flights: usize,
    #[tabled(rename = "Stops")]
    stops: u32,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Optimal")]
    optimal: String,
}

fn print_routes(itineraries: &[Itinerary], optimal: usize) {
    let rows: Vec<RouteRow> = itineraries
        .iter()
        .enumerate()
        .map(|(i, it)| RouteRow {
            index: i + 1,
            route: it.route.to_string(),
            flights: it.total_flights,
            stops: it.total_stops,
            distance: it.distance_km.map(|d| format!("{:.2}", d)).unwrap_or_else(|| "-".to_string()),
            optimal: if i == optimal { "*".green().to_string() } else { String::new() },
        })
        .collect();

    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    println!("{}", table);
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize_logging(logging::level_from_verbosity(args.verbose));

    let network = match Network::load(&args.data_dir) {
        Ok(network) => network,
        Err(err) => {
            error!(target: "main", "Cannot load flight data: {}", err);
            eprintln!("{} {}", "Error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings {
        output_dir: args.output_dir.clone(),
        all: args.all,
        max_flights: args.max_flights,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut status = RunStatus::default();
    let mut outcomes = vec![];
    for path in &args.files {
        let result = app::process_file(&network, &settings, path, &mut rng);
        status.record(&result);
        match result {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Written { request, itineraries, optimal } => {
                        println!(
                            "{} {} -> {}: {} route(s), report in {}",
                            "OK".green().bold(),
                            request.origin,
                            request.destination,
                            itineraries.len(),
                            report::output_path(&settings.output_dir, &request.name).display()
                        );
                        if !args.json {
                            print_routes(itineraries, *optimal);
                        }
                    }
                    Outcome::Unsupported { request, reason } => {
                        println!("{} {}: {}", report::UNSUPPORTED.yellow().bold(), request.name, reason);
                    }
                }
                outcomes.push(outcome);
            }
            Err(err) => {
                error!(target: "main", "{}: {}", path.display(), err);
                eprintln!("{} {}", "Error:".red().bold(), err);
            }
        }
    }

    if args.json {
        match app::render_json(&outcomes) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!(target: "main", "Cannot serialize results: {}", err);
                status.fail();
            }
        }
    }

    ExitCode::from(status.exit_code())
}
