//! Formosa Vista — Taiwan panorama tour catalog.
//!
//! A fixed, ordered, in-memory catalog of five Taiwan points of interest,
//! each with coordinates and panoramic camera orientation hints, exposed to
//! a viewer frontend over a small HTTP API and to the terminal via the
//! `formosa` CLI.

pub mod catalog;
pub mod server;

pub use catalog::{find_by_id, find_by_name, CatalogError, Location, TAIWAN_LOCATIONS};
