use worldmap_common::WorldCoordinate;

use crate::geometry::WorldGeometry;

impl WorldGeometry {
    /// Whether `(x, y)` lies inside the world box, edges included.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Clamp each axis into the world box independently.
    pub fn clamp(&self, x: i32, y: i32) -> WorldCoordinate {
        WorldCoordinate {
            x: x.min(self.max_x).max(self.min_x),
            y: y.min(self.max_y).max(self.min_y),
        }
    }
}

/// [`WorldGeometry::is_valid`] on the built-in world.
pub fn is_valid(x: i32, y: i32) -> bool {
    WorldGeometry::OSRS.is_valid(x, y)
}

/// [`WorldGeometry::clamp`] on the built-in world.
pub fn clamp(x: i32, y: i32) -> WorldCoordinate {
    WorldGeometry::OSRS.clamp(x, y)
}

/// Euclidean distance in tiles, ignoring plane.
pub fn distance(a: WorldCoordinate, b: WorldCoordinate) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}
