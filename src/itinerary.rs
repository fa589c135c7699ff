use crate::airport::AirportCode;
use crate::network::Network;
use crate::search::Route;
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegDetail {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub airline: Option<String>,
    pub stops: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub route: Route,
    pub legs: Vec<LegDetail>,
    pub total_flights: usize,
    pub total_stops: u32,
    pub distance_km: Option<f64>,
}

impl Itinerary {
    /// Smallest known distance wins; the earliest itinerary keeps ties.
    pub fn optimal(itineraries: &[Itinerary]) -> Option<&Itinerary> {
        itineraries
            .iter()
            .filter_map(|it| it.distance_km.map(|d| (it, d)))
            .fold(None, |best: Option<(&Itinerary, f64)>, (it, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((it, d)),
            })
            .map(|(it, _)| it)
    }
}

pub struct ItineraryBuilder<'a, R: Rng> {
    network: &'a Network,
    rng: R,
}

impl<'a, R: Rng> ItineraryBuilder<'a, R> {
    pub fn new(network: &'a Network, rng: R) -> Self {
        ItineraryBuilder { network, rng }
    }

    pub fn build(&mut self, route: &Route) -> Itinerary {
        let legs: Vec<LegDetail> = route
            .legs()
            .map(|(origin, destination)| self.pick_leg(origin, destination))
            .collect();

        Itinerary {
            route: route.clone(),
            total_flights: route.flights(),
            total_stops: legs.iter().map(|l| l.stops).sum(),
            distance_km: self.distance_km(route),
            legs,
        }
    }

    /// Any operating airline with a printable code serving the leg, chosen at random.
    fn pick_leg(&mut self, origin: &AirportCode, destination: &AirportCode) -> LegDetail {
        let network = self.network;
        let candidates: Vec<(&str, u32)> = network
            .legs(origin, destination)
            .iter()
            .filter_map(|leg| {
                leg.airline_id
                    .and_then(|id| network.airline(id))
                    .filter(|airline| airline.active)
                    .inspect(|airline| trace!(target: "itinerary", "{} -> {} flown by {}", origin, destination, airline.name))
                    .and_then(|airline| airline.designator())
                    .map(|code| (code, leg.stops))
            })
            .collect();

        let chosen = candidates.choose(&mut self.rng);
        LegDetail {
            origin: origin.clone(),
            destination: destination.clone(),
            airline: chosen.map(|(code, _)| code.to_string()),
            stops: chosen.map(|(_, stops)| *stops).unwrap_or(0),
        }
    }

    fn distance_km(&self, route: &Route) -> Option<f64> {
        route
            .legs()
            .map(|(origin, destination)| {
                let from = self.network.airport(origin)?.coordinates?;
                let to = self.network.airport(destination)?.coordinates?;
                Some(from.distance_km(&to))
            })
            .sum()
    }
}
