//! Tour catalog for Formosa Vista.
//!
//! A fixed, ordered, in-memory list of Taiwan points of interest with
//! panoramic camera hints, plus read-only lookup and validation helpers.

pub mod data;
pub mod lookup;
pub mod types;

pub use data::{validate_catalog, TAIWAN_LOCATIONS};
pub use lookup::{find_by_id, find_by_name};
pub use types::{cardinal, format_coords, CatalogError, Location};
