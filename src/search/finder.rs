use crate::airport::AirportCode;
use crate::error::{RoutesError, RoutesResult};
use crate::network::Network;
use crate::search::{NodeId, Route, SearchTree};
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap, HashSet};

pub const DEFAULT_MAX_FLIGHTS: usize = 5;

/// Enumerates the routes with the fewest flights between two airports.
///
/// One tree grows forward from the origin and another backward from the
/// destination. Each round the two frontiers are matched by airport; the first
/// round with a match yields every shortest route, since each one splits into a
/// forward prefix and a backward suffix of exactly the current heights.
pub struct RouteFinder<'a> {
    network: &'a Network,
    max_flights: usize,
}

impl<'a> RouteFinder<'a> {
    pub fn new(network: &'a Network) -> RouteFinder<'a> {
        RouteFinder {
            network,
            max_flights: DEFAULT_MAX_FLIGHTS,
        }
    }

    pub fn with_max_flights(mut self, max_flights: usize) -> Self {
        self.max_flights = max_flights;
        self
    }

    pub fn find(&self, origin: &AirportCode, destination: &AirportCode) -> RoutesResult<Vec<Route>> {
        if origin == destination {
            return Err(RoutesError::SameEndpoints(origin.to_string()));
        }

        let mut forward = SearchTree::new(origin.clone());
        let mut backward = SearchTree::new(destination.clone());

        loop {
            let routes = Self::join(&forward, &backward);
            if !routes.is_empty() {
                debug!(
                    target: "search",
                    "Found {} route(s) {} -> {} with {} flight(s), {} tree nodes",
                    routes.len(),
                    origin,
                    destination,
                    forward.height() + backward.height(),
                    forward.node_count() + backward.node_count()
                );
                return Ok(routes);
            }

            if forward.height() + backward.height() >= self.max_flights
                || forward.is_exhausted()
                || backward.is_exhausted()
            {
                return Err(RoutesError::NoRoute {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    max_flights: self.max_flights,
                });
            }

            if forward.height() <= backward.height() {
                forward.grow(|code| self.network.destinations(code));
            } else {
                backward.grow(|code| self.network.origins(code));
            }
            trace!(
                target: "search",
                "Frontiers: {} forward at height {}, {} backward at height {}",
                forward.leaves().len(),
                forward.height(),
                backward.leaves().len(),
                backward.height()
            );
        }
    }

    fn join(forward: &SearchTree, backward: &SearchTree) -> Vec<Route> {
        let mut meeting = HashMap::<&AirportCode, Vec<NodeId>>::new();
        for node in backward.leaves() {
            meeting.entry(backward.code(*node)).or_default().push(*node);
        }

        let mut routes = BTreeSet::new();
        for f in forward.leaves() {
            let Some(matches) = meeting.get(forward.code(*f)) else {
                continue;
            };
            for b in matches {
                let mut airports = forward.path(*f);
                airports.extend(backward.path(*b).into_iter().rev().skip(1));

                let distinct: HashSet<&AirportCode> = airports.iter().collect();
                if distinct.len() == airports.len() {
                    routes.insert(Route::new(airports));
                }
            }
        }
        routes.into_iter().collect()
    }
}
