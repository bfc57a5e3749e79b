//! Core types for the tour catalog.

use serde::Serialize;
use std::fmt;

/// A point of interest with panoramic camera orientation hints.
///
/// Text fields are `&'static str` so the whole catalog can live in a
/// `const` slice with no allocation at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Stable identifier, unique within the catalog.
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Initial compass bearing for the panorama camera, degrees [0, 360).
    pub heading: f64,
    /// Vertical camera angle offset from horizontal, degrees [-90, 90].
    pub pitch: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Location {
    /// Check the entry's literal values against the catalog contract.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id == 0 {
            return Err(CatalogError::InvalidId(self.id));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.id));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CatalogError::InvalidLatitude(self.id, self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CatalogError::InvalidLongitude(self.id, self.lng));
        }
        if !(0.0..360.0).contains(&self.heading) {
            return Err(CatalogError::InvalidHeading(self.id, self.heading));
        }
        if !(-90.0..=90.0).contains(&self.pitch) {
            return Err(CatalogError::InvalidPitch(self.id, self.pitch));
        }
        if let Some(desc) = self.description {
            if desc.trim().is_empty() {
                return Err(CatalogError::EmptyDescription(self.id));
            }
        }
        Ok(())
    }

    /// Human banner for the CLI.
    pub fn display_line(&self) -> String {
        let desc_part = match self.description {
            Some(d) => format!("\n  {}", d),
            None => String::new(),
        };
        format!(
            "\u{1F4CD} {} (#{}){}\n  \u{1F4D0} {}\n  \u{1F9ED} camera {}\u{00B0} ({}), pitch {}\u{00B0}",
            self.name,
            self.id,
            desc_part,
            format_coords(self.lat, self.lng),
            self.heading,
            cardinal(self.heading),
            self.pitch,
        )
    }
}

/// Hemisphere-suffixed coordinate string, e.g. "23.8496°N, 120.9153°E".
pub fn format_coords(lat: f64, lng: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lng >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.4}\u{00B0}{}, {:.4}\u{00B0}{}",
        lat.abs(),
        ns,
        lng.abs(),
        ew
    )
}

/// Compass point name for a heading in degrees [0, 360).
pub fn cardinal(heading: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = ((heading + 22.5) / 45.0) as usize % 8;
    POINTS[sector]
}

/// Catalog contract violations.
///
/// These only arise from malformed literals or a missed lookup; no runtime
/// computation in this crate can produce them from valid data.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    InvalidId(u32),
    EmptyName(u32),
    InvalidLatitude(u32, f64),
    InvalidLongitude(u32, f64),
    InvalidHeading(u32, f64),
    InvalidPitch(u32, f64),
    EmptyDescription(u32),
    DuplicateId(u32),
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Entry id must be positive (got {})", id),
            Self::EmptyName(id) => write!(f, "Entry #{} has an empty name", id),
            Self::InvalidLatitude(id, v) => {
                write!(f, "Entry #{}: latitude {} outside [-90, 90]", id, v)
            }
            Self::InvalidLongitude(id, v) => {
                write!(f, "Entry #{}: longitude {} outside [-180, 180]", id, v)
            }
            Self::InvalidHeading(id, v) => {
                write!(f, "Entry #{}: heading {} outside [0, 360)", id, v)
            }
            Self::InvalidPitch(id, v) => {
                write!(f, "Entry #{}: pitch {} outside [-90, 90]", id, v)
            }
            Self::EmptyDescription(id) => {
                write!(f, "Entry #{} has an empty description; omit the field instead", id)
            }
            Self::DuplicateId(id) => write!(f, "Duplicate entry id {}", id),
            Self::NotFound(q) => write!(f, "No location matches '{}'", q),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Location {
        Location {
            id: 9,
            name: "Test Point",
            lat: 23.5,
            lng: 121.0,
            heading: 45.0,
            pitch: 5.0,
            description: Some("A test"),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_id() {
        let loc = Location { id: 0, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidId(0)));
    }

    #[test]
    fn test_validate_rejects_bad_latitude() {
        let loc = Location { lat: 91.0, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidLatitude(9, 91.0)));
    }

    #[test]
    fn test_validate_rejects_bad_longitude() {
        let loc = Location { lng: -180.5, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidLongitude(9, -180.5)));
    }

    #[test]
    fn test_validate_heading_upper_bound_exclusive() {
        let loc = Location { heading: 360.0, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidHeading(9, 360.0)));
        let loc = Location { heading: 359.9, ..sample() };
        assert!(loc.validate().is_ok());
        let loc = Location { heading: 0.0, ..sample() };
        assert!(loc.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_pitch() {
        let loc = Location { pitch: 90.5, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidPitch(9, 90.5)));
        let loc = Location { pitch: -91.0, ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::InvalidPitch(9, -91.0)));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let loc = Location { name: "", ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::EmptyName(9)));
        let loc = Location { name: "   ", ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::EmptyName(9)));
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let loc = Location { description: Some("  "), ..sample() };
        assert_eq!(loc.validate(), Err(CatalogError::EmptyDescription(9)));
        let loc = Location { description: None, ..sample() };
        assert!(loc.validate().is_ok());
    }

    #[test]
    fn test_format_coords_hemispheres() {
        assert_eq!(format_coords(23.8496, 120.9153), "23.8496\u{00B0}N, 120.9153\u{00B0}E");
        assert_eq!(format_coords(-33.8688, -70.6693), "33.8688\u{00B0}S, 70.6693\u{00B0}W");
    }

    #[test]
    fn test_cardinal_sectors() {
        assert_eq!(cardinal(0.0), "N");
        assert_eq!(cardinal(55.0), "NE");
        assert_eq!(cardinal(90.0), "E");
        assert_eq!(cardinal(180.0), "S");
        assert_eq!(cardinal(270.0), "W");
        assert_eq!(cardinal(337.5), "N");
    }

    #[test]
    fn test_serialize_omits_absent_description() {
        let loc = Location { description: None, ..sample() };
        let json = serde_json::to_value(loc).unwrap();
        assert!(json.get("description").is_none());
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["description"], "A test");
    }
}
