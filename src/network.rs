use crate::airline::{Airline, AirlineId};
use crate::airport::{Airport, AirportCode};
use crate::error::{RoutesError, RoutesResult};
use crate::flight::FlightLeg;
use csv::StringRecord;
use log::{debug, info, warn};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::{Direction, Incoming, Outgoing};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const AIRPORTS_FILE: &str = "airports.csv";
pub const ROUTES_FILE: &str = "routes.csv";
pub const AIRLINES_FILE: &str = "airlines.csv";

/// Airports are nodes, and every edge carries all the legs flown between its two airports.
type RouteGraph = DiGraph<AirportCode, Vec<FlightLeg>>;

/// Directed route graph between airports, with the lookup tables needed to describe a trip.
pub struct Network {
    airports: Vec<Airport>,
    airports_index: HashMap<AirportCode, usize>,
    airlines: HashMap<AirlineId, Airline>,
    graph: RouteGraph,
    nodes: HashMap<AirportCode, NodeIndex>,
}

impl Network {
    pub fn new(airports: Vec<Airport>, legs: Vec<FlightLeg>, airlines: Vec<Airline>) -> Network {
        let mut airports_index = HashMap::new();
        for (i, airport) in airports.iter().enumerate() {
            if let Some(code) = &airport.code {
                airports_index.entry(code.clone()).or_insert(i);
            }
        }

        let mut graph = RouteGraph::new();
        let mut nodes = HashMap::<AirportCode, NodeIndex>::new();
        let mut node_of = |graph: &mut RouteGraph, code: &AirportCode| {
            *nodes
                .entry(code.clone())
                .or_insert_with(|| graph.add_node(code.clone()))
        };
        for leg in legs {
            let from = node_of(&mut graph, &leg.origin);
            let to = node_of(&mut graph, &leg.destination);
            // duplicate rows for the same pair collapse onto one edge
            match graph.find_edge(from, to) {
                Some(edge) => graph[edge].push(leg),
                None => {
                    graph.add_edge(from, to, vec![leg]);
                }
            }
        }

        Network {
            airports,
            airports_index,
            airlines: airlines.into_iter().map(|a| (a.id, a)).collect(),
            graph,
            nodes,
        }
    }

    pub fn load(data_dir: &Path) -> RoutesResult<Self> {
        info!(target: "network", "Loading network from {}", data_dir.display());
        let open = |name: &str| {
            let path = data_dir.join(name);
            File::open(&path).inspect_err(|e| warn!(target: "network", "Cannot open {}: {}", path.display(), e))
        };
        Self::from_readers(open(AIRPORTS_FILE)?, open(ROUTES_FILE)?, open(AIRLINES_FILE)?)
    }

    pub fn from_readers(airports: impl Read, routes: impl Read, airlines: impl Read) -> RoutesResult<Self> {
        let airports = read_records(airports, AIRPORTS_FILE, Airport::from_record)?;
        let legs = read_records(routes, ROUTES_FILE, FlightLeg::from_record)?;
        let airlines = read_records(airlines, AIRLINES_FILE, Airline::from_record)?;
        info!(
            target: "network",
            "Loaded {} airports, {} route rows, {} airlines",
            airports.len(),
            legs.len(),
            airlines.len()
        );
        Ok(Network::new(airports, legs, airlines))
    }

    /// First usable airport code for the city, in data set order.
    pub fn locate(&self, city: &str, country: &str) -> RoutesResult<AirportCode> {
        self.airports
            .iter()
            .filter(|a| a.is_in(city, country))
            .find(|a| a.code.is_some())
            .inspect(|a| debug!(target: "network", "{}, {} is airport #{} {}", city, country, a.id, a))
            .and_then(|a| a.code.clone())
            .ok_or_else(|| RoutesError::UnsupportedRequest {
                city: city.to_string(),
                country: country.to_string(),
            })
    }

    pub fn airport(&self, code: &AirportCode) -> Option<&Airport> {
        self.airports_index.get(code).map(|i| &self.airports[*i])
    }

    pub fn airline(&self, id: AirlineId) -> Option<&Airline> {
        self.airlines.get(&id)
    }

    pub fn index_of(&self, code: &AirportCode) -> Option<NodeIndex> {
        self.nodes.get(code).copied()
    }

    #[cfg(test)]
    pub(crate) fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    fn neighbours(&self, code: &AirportCode, direction: Direction) -> Vec<AirportCode> {
        let mut codes: Vec<AirportCode> = self
            .index_of(code)
            .map(|node| {
                self.graph
                    .neighbors_directed(node, direction)
                    .map(|n| self.graph[n].clone())
                    .collect()
            })
            .unwrap_or_default();
        codes.sort();
        codes
    }

    /// Airports served directly from `code`, sorted.
    pub fn destinations(&self, code: &AirportCode) -> Vec<AirportCode> {
        self.neighbours(code, Outgoing)
    }

    /// Airports with a direct flight into `code`, sorted.
    pub fn origins(&self, code: &AirportCode) -> Vec<AirportCode> {
        self.neighbours(code, Incoming)
    }

    pub fn legs(&self, origin: &AirportCode, destination: &AirportCode) -> &[FlightLeg] {
        self.index_of(origin)
            .zip(self.index_of(destination))
            .and_then(|(from, to)| self.graph.find_edge(from, to))
            .map(|edge| self.graph[edge].as_slice())
            .unwrap_or(&[])
    }
}

/// Rows that fail to decode or parse are skipped; only I/O errors abort the load.
fn read_records<T>(
    source: impl Read,
    name: &str,
    parse: impl Fn(&StringRecord) -> Option<T>,
) -> RoutesResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut parsed = vec![];
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                skipped += 1;
                debug!(target: "network", "Skipping {} row: {}", name, err);
                continue;
            }
        };
        match parse(&record) {
            Some(item) => parsed.push(item),
            None => {
                skipped += 1;
                debug!(target: "network", "Skipping {} row {:?}", name, record);
            }
        }
    }
    if skipped > 0 {
        warn!(target: "network", "Skipped {} unusable rows in {}", skipped, name);
    }
    Ok(parsed)
}
