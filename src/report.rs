use crate::itinerary::Itinerary;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const RULE: &str = "------------------------------";
const UNKNOWN_AIRLINE: &str = "Unknown airline";
pub const UNSUPPORTED: &str = "Unsupported request!";

pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}_output.txt", name))
}

/// Appends to `<output_dir>/<name>_output.txt`, creating the directory if needed.
pub fn open_output(output_dir: &Path, name: &str) -> io::Result<File> {
    fs::create_dir_all(output_dir)?;
    let path = output_path(output_dir, name);
    debug!(target: "report", "Appending to {}", path.display());
    OpenOptions::new().create(true).append(true).open(path)
}

fn write_legs(out: &mut impl Write, itinerary: &Itinerary) -> io::Result<()> {
    for (i, leg) in itinerary.legs.iter().enumerate() {
        writeln!(
            out,
            "{}. {} from {} to {} {} stops",
            i + 1,
            leg.airline.as_deref().unwrap_or(UNKNOWN_AIRLINE),
            leg.origin,
            leg.destination,
            leg.stops
        )?;
    }
    writeln!(out, "Total flights: {}", itinerary.total_flights)?;
    writeln!(out, "Total additional stops: {}", itinerary.total_stops)
}

pub fn write_all_routes(out: &mut impl Write, itineraries: &[Itinerary]) -> io::Result<()> {
    writeln!(out, "All Routes")?;
    writeln!(out, "{}\n", RULE)?;
    for itinerary in itineraries {
        writeln!(
            out,
            "Route from {} to {}",
            itinerary.route.origin(),
            itinerary.route.destination()
        )?;
        writeln!(out, "{}", RULE)?;
        write_legs(out, itinerary)?;
        writeln!(out, "\n")?;
    }
    Ok(())
}

pub fn write_optimal_route(out: &mut impl Write, itinerary: &Itinerary) -> io::Result<()> {
    writeln!(
        out,
        "Optimal route from {} to {}",
        itinerary.route.origin(),
        itinerary.route.destination()
    )?;
    writeln!(out, "{}", RULE)?;
    write_legs(out, itinerary)?;
    if let Some(distance) = itinerary.distance_km {
        writeln!(out, "Total distance: {:.2} km", distance)?;
    }
    writeln!(out, "Optimality criteria: flights and distance\n\n")
}

pub fn write_unsupported(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", UNSUPPORTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::LegDetail;
    use crate::search::Route;
    use std::sync::Arc;

    fn itinerary() -> Itinerary {
        Itinerary {
            route: Route::new(vec![Arc::from("KRK"), Arc::from("WAW"), Arc::from("GDN")]),
            legs: vec![
                LegDetail {
                    origin: Arc::from("KRK"),
                    destination: Arc::from("WAW"),
                    airline: Some("LO".to_string()),
                    stops: 0,
                },
                LegDetail {
                    origin: Arc::from("WAW"),
                    destination: Arc::from("GDN"),
                    airline: None,
                    stops: 1,
                },
            ],
            total_flights: 2,
            total_stops: 1,
            distance_km: Some(540.126),
        }
    }

    fn render(write: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = vec![];
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_optimal_route_format() {
        let text = render(|out| write_optimal_route(out, &itinerary()));
        assert_eq!(
            "Optimal route from KRK to GDN\n\
             ------------------------------\n\
             1. LO from KRK to WAW 0 stops\n\
             2. Unknown airline from WAW to GDN 1 stops\n\
             Total flights: 2\n\
             Total additional stops: 1\n\
             Total distance: 540.13 km\n\
             Optimality criteria: flights and distance\n\n\n",
            text
        );
    }

    #[test]
    fn test_all_routes_format() {
        let text = render(|out| write_all_routes(out, &[itinerary()]));
        assert_eq!(
            "All Routes\n\
             ------------------------------\n\n\
             Route from KRK to GDN\n\
             ------------------------------\n\
             1. LO from KRK to WAW 0 stops\n\
             2. Unknown airline from WAW to GDN 1 stops\n\
             Total flights: 2\n\
             Total additional stops: 1\n\n\n",
            text
        );
    }

    #[test]
    fn test_unsupported_line() {
        assert_eq!("Unsupported request!\n", render(|out| write_unsupported(out)));
    }

    #[test]
    fn test_output_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("OutputFiles");
        for _ in 0..2 {
            let mut out = open_output(&output_dir, "trip").unwrap();
            write_unsupported(&mut out).unwrap();
        }
        let text = fs::read_to_string(output_path(&output_dir, "trip")).unwrap();
        assert_eq!("Unsupported request!\nUnsupported request!\n", text);
    }
}
