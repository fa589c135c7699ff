use crate::airline::AirlineId;
use crate::airport::{AirportCode, code, present};
use csv::StringRecord;

/// One row of routes.csv: a direct service between two airports.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLeg {
    pub airline_id: Option<AirlineId>,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub stops: u32,
}

impl FlightLeg {
    /// airline, airline id, source, source id, destination, destination id, codeshare, stops, ...
    pub fn from_record(record: &StringRecord) -> Option<FlightLeg> {
        Some(FlightLeg {
            airline_id: record.get(1).and_then(present).and_then(|id| id.parse().ok()),
            origin: record.get(2).and_then(code)?,
            destination: record.get(4).and_then(code)?,
            stops: record
                .get(7)
                .and_then(present)
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_from_record() {
        let record = StringRecord::from(vec!["LO", "3", "KRK", "1", "WAW", "2", "", "0", "E75"]);
        let leg = FlightLeg::from_record(&record).unwrap();
        assert_eq!(Some(3), leg.airline_id);
        assert_eq!(Arc::from("KRK"), leg.origin);
        assert_eq!(Arc::from("WAW"), leg.destination);
        assert_eq!(0, leg.stops);
    }

    #[test]
    fn test_null_airline_id() {
        let record = StringRecord::from(vec!["XX", "\\N", "KRK", "1", "WAW", "2", "Y", "1"]);
        let leg = FlightLeg::from_record(&record).unwrap();
        assert_eq!(None, leg.airline_id);
        assert_eq!(1, leg.stops);
    }

    #[test]
    fn test_missing_endpoint() {
        let record = StringRecord::from(vec!["LO", "3", "\\N", "1", "WAW", "2", "", "0"]);
        assert!(FlightLeg::from_record(&record).is_none());
    }
}
