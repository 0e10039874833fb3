//! Shared value types: world coordinates, projected points, regions.
//!
//! # Invariants
//! - Every type is a plain `Copy` value with no identity beyond its fields.
//! - Off-world coordinates are representable; validity is checked elsewhere.

mod types;

pub use types::{GeoPoint, LocalCoordinate, ProjectedPoint, Region, WorldCoordinate, WorldPosition};

pub fn crate_info() -> &'static str {
    "worldmap-common v0.1.0"
}
