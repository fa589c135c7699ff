use crate::airport::present;
use csv::StringRecord;

pub type AirlineId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    pub id: AirlineId,
    pub name: String,
    pub iata: String,
    pub icao: String,
    pub active: bool,
}

impl Airline {
    /// Parses an airlines.csv row: id, name, alias, IATA, ICAO, callsign, country, active.
    pub fn from_record(record: &StringRecord) -> Option<Airline> {
        Some(Airline {
            id: record.get(0)?.trim().parse().ok()?,
            name: record.get(1)?.trim().to_string(),
            iata: record.get(3).unwrap_or_default().trim().to_string(),
            icao: record.get(4).unwrap_or_default().trim().to_string(),
            active: record.get(7).map(|a| a.trim() == "Y").unwrap_or(false),
        })
    }

    /// IATA code, falling back to ICAO.
    pub fn designator(&self) -> Option<&str> {
        present(&self.iata).or_else(|| present(&self.icao))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airline(iata: &str, icao: &str) -> Airline {
        Airline {
            id: 1,
            name: "LOT Polish Airlines".to_string(),
            iata: iata.to_string(),
            icao: icao.to_string(),
            active: true,
        }
    }

    #[test]
    fn test_designator_prefers_iata() {
        assert_eq!(Some("LO"), airline("LO", "LOT").designator());
    }

    #[test]
    fn test_designator_falls_back_to_icao() {
        assert_eq!(Some("LOT"), airline("", "LOT").designator());
        assert_eq!(Some("LOT"), airline("\\N", "LOT").designator());
        assert_eq!(None, airline("\\N", "").designator());
    }

    #[test]
    fn test_from_record() {
        let record = StringRecord::from(vec![
            "3", "LOT Polish Airlines", "\\N", "LO", "LOT", "POLLOT", "Poland", "Y",
        ]);
        let parsed = Airline::from_record(&record).unwrap();
        assert_eq!(3, parsed.id);
        assert!(parsed.active);
        assert_eq!(Some("LO"), parsed.designator());
    }

    #[test]
    fn test_from_record_inactive() {
        let record = StringRecord::from(vec!["4", "Gone Air", "", "GA", "GNA", "", "Poland", "N"]);
        assert!(!Airline::from_record(&record).unwrap().active);
    }
}
