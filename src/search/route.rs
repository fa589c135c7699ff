use crate::airport::AirportCode;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;

/// Airports visited in order, origin first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<AirportCode>);

impl Route {
    pub fn new(airports: Vec<AirportCode>) -> Route {
        debug_assert!(!airports.is_empty(), "Route needs at least one airport");
        Route(airports)
    }

    pub fn airports(&self) -> &[AirportCode] {
        &self.0
    }

    pub fn origin(&self) -> &AirportCode {
        &self.0[0]
    }

    pub fn destination(&self) -> &AirportCode {
        &self.0[self.0.len() - 1]
    }

    pub fn flights(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn legs(&self) -> impl Iterator<Item = (&AirportCode, &AirportCode)> {
        self.0.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.airports().iter().map(|c| c.as_ref()).collect();
        write!(f, "{}", codes.join(" -> "))
    }
}
