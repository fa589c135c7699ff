use std::io;
use std::path::PathBuf;

pub type RoutesResult<T> = Result<T, RoutesError>;

#[derive(thiserror::Error, Debug)]
pub enum RoutesError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("File must be a .csv or .txt file: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("Malformed request file {name}: {reason}")]
    MalformedRequest { name: String, reason: String },
    #[error("No airport found for {city}, {country}")]
    UnsupportedRequest { city: String, country: String },
    #[error("Origin and destination are both {0}")]
    SameEndpoints(String),
    #[error("No route from {origin} to {destination} within {max_flights} flights")]
    NoRoute {
        origin: String,
        destination: String,
        max_flights: usize,
    },
}

impl RoutesError {
    /// Errors reported to the user as an unsupported request rather than a failure.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            RoutesError::UnsupportedRequest { .. }
                | RoutesError::SameEndpoints(_)
                | RoutesError::NoRoute { .. }
        )
    }
}
