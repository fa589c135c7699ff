use crate::airport::{Airport, AirportCode};
use crate::flight::FlightLeg;
use crate::network::Network;
use crate::search::Route;
use petgraph::algo;
use petgraph::algo::dijkstra;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::BTreeSet;
use std::sync::Arc;

pub fn id(s: &str) -> AirportCode {
    Arc::from(s)
}

pub fn route(codes: &[&str]) -> Route {
    Route::new(codes.iter().map(|c| id(c)).collect())
}

pub fn add_leg(legs: &mut Vec<FlightLeg>, origin: &str, destination: &str) {
    legs.push(FlightLeg {
        airline_id: None,
        origin: id(origin),
        destination: id(destination),
        stops: 0,
    });
}

pub fn network(edges: &[(&str, &str)]) -> Network {
    let mut legs = vec![];
    for (origin, destination) in edges {
        add_leg(&mut legs, origin, destination);
    }
    network_from_legs(legs)
}

pub fn network_from_legs(legs: Vec<FlightLeg>) -> Network {
    let codes: BTreeSet<AirportCode> = legs
        .iter()
        .flat_map(|l| [l.origin.clone(), l.destination.clone()])
        .collect();
    let airports = codes
        .into_iter()
        .enumerate()
        .map(|(i, code)| Airport {
            id: i as u32 + 1,
            name: format!("{} Airport", code),
            city: code.to_string(),
            country: "Testland".to_string(),
            code: Some(code),
            coordinates: None,
        })
        .collect();
    Network::new(airports, legs, vec![])
}

pub fn arb_code() -> impl Strategy<Value = AirportCode> {
    prop_oneof![
        Just(id("AP_1")),
        Just(id("AP_2")),
        Just(id("AP_3")),
        Just(id("AP_4")),
        Just(id("AP_5")),
        Just(id("AP_6")),
    ]
}

/// Fewest flights between two airports, by unit-weight Dijkstra over the route graph.
pub fn fewest_flights(network: &Network, origin: &AirportCode, destination: &AirportCode) -> Option<usize> {
    let from = network.index_of(origin)?;
    let to = network.index_of(destination)?;
    dijkstra(network.graph(), from, Some(to), |_| 1usize).get(&to).copied()
}

/// Every simple path with exactly `flights` flights, by exhaustive enumeration.
pub fn all_simple_paths(
    network: &Network,
    origin: &AirportCode,
    destination: &AirportCode,
    flights: usize,
) -> BTreeSet<Vec<AirportCode>> {
    let (Some(from), Some(to)) = (network.index_of(origin), network.index_of(destination)) else {
        return BTreeSet::new();
    };
    let graph = network.graph();
    let intermediate = flights.saturating_sub(1);
    algo::all_simple_paths::<Vec<_>, _>(graph, from, to, intermediate, Some(intermediate))
        .map(|path| path.into_iter().map(|n| graph[n].clone()).collect())
        .collect()
}
