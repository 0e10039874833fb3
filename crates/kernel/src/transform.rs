//! World <-> projected coordinate transform.
//!
//! Tile images are laid out top-left-origin in pixel space while world y grows
//! northward, so y is flipped against the map height. The quarter-tile and
//! whole-tile nudges line a pixel up with the tile drawn under it in the tile
//! source. These constants come from the tile imagery and must not be changed.
//!
//! The inverse is lossy: pixels collapse to whole tiles. A tile projected with
//! [`WorldGeometry::world_to_projected_centered`] resolves back to itself; the
//! corner from [`WorldGeometry::world_to_projected`] sits on the tile's
//! south-west edge and resolves to the diagonal neighbour.

use worldmap_common::{GeoPoint, ProjectedPoint, WorldPosition};

use crate::geometry::WorldGeometry;
use crate::surface::MapSurface;

impl WorldGeometry {
    /// Pixel position of a world coordinate at maximum zoom. No bounds check.
    pub fn world_to_projected(&self, x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint {
            x: (x - f64::from(self.offset_x)) * self.tile_width_px + self.tile_width_px / 4.0,
            y: self.map_height_px - (y - f64::from(self.offset_y)) * self.tile_height_px,
        }
    }

    /// Pixel position of the centre of tile `(x, y)`.
    pub fn world_to_projected_centered(&self, x: f64, y: f64) -> ProjectedPoint {
        self.world_to_projected(x + 0.5, y + 0.5)
    }

    /// Resolve a pixel at maximum zoom to the tile under it on plane `z`.
    ///
    /// The plane cannot be derived from pixels and is passed through as given.
    /// Non-finite input saturates (NaN becomes the offset).
    pub fn projected_to_world(&self, point: ProjectedPoint, z: i32) -> WorldPosition {
        let tw = self.tile_width_px;
        let th = self.tile_height_px;

        let y = round_half_up((self.map_height_px - point.y + th / 4.0 - th) / th);
        let x = round_half_up((point.x - tw) / tw);

        WorldPosition {
            x: (x as i32).saturating_add(self.offset_x),
            y: (y as i32).saturating_add(self.offset_y),
            z,
        }
    }

    /// Surface coordinate of a world coordinate.
    pub fn world_to_geo<S: MapSurface + ?Sized>(&self, surface: &S, x: f64, y: f64) -> GeoPoint {
        surface.unproject(self.world_to_projected(x, y), surface.max_zoom())
    }

    /// Surface coordinate of the centre of tile `(x, y)`.
    pub fn world_to_geo_centered<S: MapSurface + ?Sized>(
        &self,
        surface: &S,
        x: f64,
        y: f64,
    ) -> GeoPoint {
        surface.unproject(self.world_to_projected_centered(x, y), surface.max_zoom())
    }

    /// Tile under a surface coordinate, on plane `z`.
    pub fn geo_to_world<S: MapSurface + ?Sized>(
        &self,
        surface: &S,
        geo: GeoPoint,
        z: i32,
    ) -> WorldPosition {
        self.projected_to_world(surface.project(geo, surface.max_zoom()), z)
    }
}

/// Round with ties toward positive infinity, so -0.5 rounds to 0.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// [`WorldGeometry::world_to_projected`] on the built-in world.
pub fn world_to_projected(x: f64, y: f64) -> ProjectedPoint {
    WorldGeometry::OSRS.world_to_projected(x, y)
}

/// [`WorldGeometry::world_to_projected_centered`] on the built-in world.
pub fn world_to_projected_centered(x: f64, y: f64) -> ProjectedPoint {
    WorldGeometry::OSRS.world_to_projected_centered(x, y)
}

/// [`WorldGeometry::projected_to_world`] on the built-in world.
pub fn projected_to_world(point: ProjectedPoint, z: i32) -> WorldPosition {
    WorldGeometry::OSRS.projected_to_world(point, z)
}
