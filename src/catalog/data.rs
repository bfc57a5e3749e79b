//! The built-in tour catalog.
//!
//! A fixed, ordered list of Taiwan points of interest. Declaration order is
//! the intended tour order and is part of the contract. The slice is `const`,
//! so it is immutable and freely shared across threads.

use super::types::{CatalogError, Location};

pub const TAIWAN_LOCATIONS: &[Location] = &[
    Location {
        id: 1,
        name: "Jiufen Old Street",
        lat: 25.1091,
        lng: 121.8443,
        heading: 55.0,
        pitch: 0.0,
        description: Some("Famous mountainside town that inspired Spirited Away"),
    },
    Location {
        id: 2,
        name: "Taroko Gorge",
        lat: 24.1587,
        lng: 121.6219,
        heading: 90.0,
        pitch: 0.0,
        description: Some("Spectacular marble canyon with winding roads"),
    },
    Location {
        id: 3,
        name: "Sun Moon Lake",
        lat: 23.8496,
        lng: 120.9153,
        heading: 180.0,
        pitch: 0.0,
        description: Some("Taiwan's largest natural lake surrounded by mountains"),
    },
    Location {
        id: 4,
        name: "Taipei 101 View",
        lat: 25.0336,
        lng: 121.5644,
        heading: 270.0,
        pitch: 10.0,
        description: Some("View of Taiwan's iconic skyscraper"),
    },
    Location {
        id: 5,
        name: "Alishan Forest Railway",
        lat: 23.5118,
        lng: 120.8039,
        heading: 0.0,
        pitch: 0.0,
        description: Some("Historic mountain railway through cypress forests"),
    },
];

/// Check every entry and the uniqueness of ids.
///
/// Run by `formosa --check` and by the test suite; a failure means a bad
/// literal was committed, not a runtime fault.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for (i, loc) in TAIWAN_LOCATIONS.iter().enumerate() {
        loc.validate()?;
        for earlier in &TAIWAN_LOCATIONS[..i] {
            if earlier.id == loc.id {
                return Err(CatalogError::DuplicateId(loc.id));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalog_is_valid() {
        assert!(validate_catalog().is_ok());
    }

    #[test]
    fn test_five_entries_in_tour_order() {
        let names: Vec<&str> = TAIWAN_LOCATIONS.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec![
                "Jiufen Old Street",
                "Taroko Gorge",
                "Sun Moon Lake",
                "Taipei 101 View",
                "Alishan Forest Railway",
            ]
        );
        let ids: Vec<u32> = TAIWAN_LOCATIONS.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_positive_and_distinct() {
        for (i, a) in TAIWAN_LOCATIONS.iter().enumerate() {
            assert!(a.id > 0);
            for b in &TAIWAN_LOCATIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_all_entries_within_ranges() {
        for loc in TAIWAN_LOCATIONS {
            assert!((-90.0..=90.0).contains(&loc.lat), "{}", loc.name);
            assert!((-180.0..=180.0).contains(&loc.lng), "{}", loc.name);
            assert!((0.0..360.0).contains(&loc.heading), "{}", loc.name);
            assert!((-90.0..=90.0).contains(&loc.pitch), "{}", loc.name);
        }
    }

    #[test]
    fn test_sun_moon_lake_literals() {
        let loc = &TAIWAN_LOCATIONS[2];
        assert_eq!(loc.id, 3);
        assert_eq!(loc.name, "Sun Moon Lake");
        assert_relative_eq!(loc.lat, 23.8496);
        assert_relative_eq!(loc.lng, 120.9153);
        assert_relative_eq!(loc.heading, 180.0);
        assert_relative_eq!(loc.pitch, 0.0);
    }

    #[test]
    fn test_all_descriptions_populated() {
        // The source marks description optional but every current entry
        // carries one.
        for loc in TAIWAN_LOCATIONS {
            assert!(loc.description.is_some(), "{}", loc.name);
        }
    }

    #[test]
    fn test_repeated_reads_identical() {
        let first: Vec<Location> = TAIWAN_LOCATIONS.to_vec();
        let second: Vec<Location> = TAIWAN_LOCATIONS.to_vec();
        assert_eq!(first, second);
    }
}
