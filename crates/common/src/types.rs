use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile coordinate in game-world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldCoordinate {
    pub x: i32,
    pub y: i32,
}

impl WorldCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Attach a plane index.
    pub const fn with_plane(self, z: i32) -> WorldPosition {
        WorldPosition {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

impl From<(i32, i32)> for WorldCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for WorldCoordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<WorldPosition> for WorldCoordinate {
    fn from(p: WorldPosition) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A world coordinate on a specific plane (floor level).
///
/// The plane is not bounded here; the game uses 0..=3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drop the plane.
    pub const fn coordinate(self) -> WorldCoordinate {
        WorldCoordinate {
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

/// Pixel coordinates in the surface's projection space at maximum zoom.
/// The y axis grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The mapping surface's native coordinate. Opaque to the transform core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A 64x64-tile block of the world.
///
/// `x` and `y` are the south-west corner and always multiples of 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub x: i32,
    pub y: i32,
}

impl Region {
    /// South-west corner as a coordinate.
    pub const fn base(self) -> WorldCoordinate {
        WorldCoordinate {
            x: self.x,
            y: self.y,
        }
    }
}

/// Offset of a tile from its region's south-west corner, each axis in `0..64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoordinate {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display_matches_overlay_format() {
        let p = WorldPosition::new(3222, 3218, 0);
        assert_eq!(p.to_string(), "X: 3222, Y: 3218, Z: 0");
    }

    #[test]
    fn coordinate_from_pair_and_array() {
        assert_eq!(WorldCoordinate::from((3200, 3200)), WorldCoordinate::new(3200, 3200));
        assert_eq!(WorldCoordinate::from([3200, 3201]), WorldCoordinate::new(3200, 3201));
    }

    #[test]
    fn plane_attach_and_drop() {
        let c = WorldCoordinate::new(10, 20);
        let p = c.with_plane(2);
        assert_eq!(p, WorldPosition::new(10, 20, 2));
        assert_eq!(p.coordinate(), c);
        assert_eq!(WorldCoordinate::from(p), c);
    }

    #[test]
    fn position_serde_shape() {
        let p = WorldPosition::new(1, 2, 3);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"z":3}"#);
    }
}
