//! Streaming helpers: region grouping of positions and per-plane tile layers.
//!
//! # Invariants
//! - A position is filed under exactly one region, whatever its plane.
//! - Tile layers differ only by plane; zoom and grid indices come from the surface.

mod index;
mod tiles;

pub use index::RegionIndex;
pub use tiles::{DEFAULT_TILE_URL, TileError, TileLayer, TileSource};

pub fn crate_info() -> &'static str {
    "worldmap-stream v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("stream"));
    }
}
