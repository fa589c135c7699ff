use crate::error::{RoutesError, RoutesResult};
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const EXTENSIONS: [&str; 2] = [".csv", ".txt"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub city: String,
    pub country: String,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Origin and destination read from a request file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    /// File name without extension, used to name the report.
    pub name: String,
    pub origin: Place,
    pub destination: Place,
}

impl RouteRequest {
    pub fn from_path(path: &Path) -> RoutesResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !EXTENSIONS.iter().any(|ext| file_name.contains(ext)) {
            return Err(RoutesError::UnsupportedExtension(path.to_path_buf()));
        }

        let name = file_name
            .get(..file_name.len().saturating_sub(4))
            .unwrap_or_default()
            .trim()
            .to_string();
        Self::from_reader(name, File::open(path)?)
    }

    pub fn from_reader(name: String, source: impl Read) -> RoutesResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        let malformed = |reason: &str| RoutesError::MalformedRequest {
            name: name.clone(),
            reason: reason.to_string(),
        };

        let mut places = vec![];
        for record in reader.records().take(2) {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(city), Some(country)) => places.push(Place {
                    city: city.trim().to_string(),
                    country: country.trim().to_string(),
                }),
                _ => return Err(malformed("expected a 'city, country' row")),
            }
        }

        let mut places = places.into_iter();
        match (places.next(), places.next()) {
            (Some(origin), Some(destination)) => Ok(RouteRequest {
                name,
                origin,
                destination,
            }),
            _ => Err(malformed("expected an origin row and a destination row")),
        }
    }
}
