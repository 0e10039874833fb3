//! Coordinate kernel: world geometry, the world <-> projected transform,
//! the region codec and bounds utilities.
//!
//! # Invariants
//! - Every operation is pure and total; nothing here panics on numeric input.
//! - Projecting a tile's centre and resolving it returns the same tile.
//! - Plane is always supplied by the caller, never derived from pixels.
//! - Region bases are multiples of 64 and local offsets lie in `0..64`.

pub mod bounds;
pub mod geometry;
pub mod region;
pub mod surface;
pub mod transform;

pub use bounds::{clamp, distance, is_valid};
pub use geometry::{GeometryError, WorldGeometry};
pub use region::{local_coordinate, region_from_id, region_id, region_indices, region_of};
pub use surface::MapSurface;
pub use transform::{projected_to_world, world_to_projected, world_to_projected_centered};
pub use worldmap_common::{
    GeoPoint, LocalCoordinate, ProjectedPoint, Region, WorldCoordinate, WorldPosition,
};
