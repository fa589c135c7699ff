use csv::StringRecord;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type AirportCode = Arc<str>;

/// OpenFlights writes `\N` for missing values.
pub const NULL_FIELD: &str = "\\N";

const EARTH_RADIUS_KM: f64 = 6371.0;

pub(crate) fn present(field: &str) -> Option<&str> {
    let field = field.trim();
    if field.is_empty() || field == NULL_FIELD {
        None
    } else {
        Some(field)
    }
}

pub(crate) fn code(field: &str) -> Option<AirportCode> {
    present(field).map(Arc::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Great-circle distance using the haversine formula.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub code: Option<AirportCode>,
    pub coordinates: Option<Coordinates>,
}

impl Airport {
    /// Parses an airports.csv row: id, name, city, country, IATA, ICAO, latitude, longitude, ...
    pub fn from_record(record: &StringRecord) -> Option<Airport> {
        let id = record.get(0)?.trim().parse::<u32>().ok()?;
        let latitude = record.get(6).and_then(present).and_then(|v| v.parse::<f64>().ok());
        let longitude = record.get(7).and_then(present).and_then(|v| v.parse::<f64>().ok());
        Some(Airport {
            id,
            name: record.get(1)?.trim().to_string(),
            city: record.get(2)?.trim().to_string(),
            country: record.get(3)?.trim().to_string(),
            code: record.get(4).and_then(code),
            coordinates: match (latitude, longitude) {
                (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
                _ => None,
            },
        })
    }

    pub fn is_in(&self, city: &str, country: &str) -> bool {
        self.city == city && self.country == country
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.name, code),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KRK: Coordinates = Coordinates { latitude: 50.077702, longitude: 19.7848 };
    const WAW: Coordinates = Coordinates { latitude: 52.165699, longitude: 20.967100 };

    #[test]
    fn test_distance_is_symmetric() {
        let there = KRK.distance_km(&WAW);
        let back = WAW.distance_km(&KRK);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 240.0 && there < 250.0, "KRK-WAW was {there}");
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(0.0, KRK.distance_km(&KRK));
    }

    #[test]
    fn test_quarter_meridian() {
        let pole = Coordinates { latitude: 90.0, longitude: 0.0 };
        let equator = Coordinates { latitude: 0.0, longitude: 0.0 };
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!((equator.distance_km(&pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_from_record() {
        let record = StringRecord::from(vec![
            "1", "Krakow Airport", "Krakow", "Poland", "KRK", "EPKK", "50.077702", "19.7848", "791",
        ]);
        let airport = Airport::from_record(&record).unwrap();
        assert_eq!(Some(Arc::from("KRK")), airport.code);
        assert_eq!(Some(KRK), airport.coordinates);
        assert!(airport.is_in("Krakow", "Poland"));
        assert_eq!("Krakow Airport (KRK)", airport.to_string());
    }

    #[test]
    fn test_from_record_null_code() {
        let record = StringRecord::from(vec![
            "2", "Strip", "Nowhere", "Poland", "\\N", "\\N", "\\N", "19.0",
        ]);
        let airport = Airport::from_record(&record).unwrap();
        assert_eq!(None, airport.code);
        assert_eq!(None, airport.coordinates);
    }

    #[test]
    fn test_from_record_rejects_bad_id() {
        let record = StringRecord::from(vec!["x", "Strip", "Nowhere", "Poland"]);
        assert!(Airport::from_record(&record).is_none());
    }
}
