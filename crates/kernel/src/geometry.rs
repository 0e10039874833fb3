//! World geometry: extents, tile size, projection offset, zoom range.
//!
//! The built-in values describe the game world as rendered by the tile source.
//! Other worlds can be described in a YAML or JSON file; anything omitted falls
//! back to the built-in value.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::region::{REGION_SIZE, REGION_X_INDEX_LIMIT, REGION_Y_INDEX_LIMIT, region_index};

/// Projected pixel height of the whole world at maximum zoom.
pub const MAP_HEIGHT_MAX_ZOOM_PX: f64 = 364_544.0;
/// Projected pixel width of the whole world at maximum zoom.
pub const MAP_WIDTH_MAX_ZOOM_PX: f64 = 104_448.0;

pub const TILE_WIDTH_PX: f64 = 32.0;
pub const TILE_HEIGHT_PX: f64 = 32.0;

/// World coordinate that lands on projected x = 0.
pub const OFFSET_X: i32 = 1024;
/// World coordinate that lands on projected y = MAP_HEIGHT_MAX_ZOOM_PX.
pub const OFFSET_Y: i32 = 6208;

pub const MIN_X: i32 = 1024;
pub const MAX_X: i32 = 4224;
pub const MIN_Y: i32 = 1216;
pub const MAX_Y: i32 = 12608;

pub const MIN_ZOOM: u8 = 4;
pub const MAX_ZOOM: u8 = 11;
pub const DEFAULT_ZOOM: u8 = 8;

/// Errors from loading or validating a geometry description.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tile size must be positive and finite, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },
    #[error("map height must be positive and finite, got {0}")]
    InvalidMapHeight(f64),
    #[error("map width must be positive and finite, got {0}")]
    InvalidMapWidth(f64),
    #[error("region size {0} is not supported, the region codec packs 64-tile regions")]
    UnsupportedRegionSize(i32),
    #[error("empty bounds: x {min_x}..={max_x}, y {min_y}..={max_y}")]
    EmptyBounds {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
    #[error("x bounds project to {px_min}..{px_max} px, outside the map width {width} px")]
    BoundsOutsideMap { px_min: f64, px_max: f64, width: f64 },
    #[error("zoom range invalid: min {min}, default {default}, max {max}")]
    ZoomRange { min: u8, default: u8, max: u8 },
    #[error("bounds produce region index {index} on the {axis} axis, outside 0..{limit}")]
    RegionIndexOverflow {
        axis: &'static str,
        index: i32,
        limit: i32,
    },
}

/// Immutable description of the world's coordinate space.
///
/// `WorldGeometry::OSRS` is the built-in world; `Default` returns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGeometry {
    pub map_height_px: f64,
    pub map_width_px: f64,
    pub tile_width_px: f64,
    pub tile_height_px: f64,
    pub offset_x: i32,
    pub offset_y: i32,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub region_size: i32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub default_zoom: u8,
}

impl WorldGeometry {
    pub const OSRS: WorldGeometry = WorldGeometry {
        map_height_px: MAP_HEIGHT_MAX_ZOOM_PX,
        map_width_px: MAP_WIDTH_MAX_ZOOM_PX,
        tile_width_px: TILE_WIDTH_PX,
        tile_height_px: TILE_HEIGHT_PX,
        offset_x: OFFSET_X,
        offset_y: OFFSET_Y,
        min_x: MIN_X,
        max_x: MAX_X,
        min_y: MIN_Y,
        max_y: MAX_Y,
        region_size: REGION_SIZE,
        min_zoom: MIN_ZOOM,
        max_zoom: MAX_ZOOM,
        default_zoom: DEFAULT_ZOOM,
    };

    /// Parse a YAML description and validate it.
    pub fn from_yaml_str(s: &str) -> Result<Self, GeometryError> {
        let geometry: Self = serde_yaml::from_str(s)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Parse a JSON description and validate it.
    pub fn from_json_str(s: &str) -> Result<Self, GeometryError> {
        let geometry: Self = serde_json::from_str(s)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Load a description from disk. `.yaml` and `.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_geometry", path = %path.display()).entered();

        let data = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        let geometry = if is_yaml {
            Self::from_yaml_str(&data)?
        } else {
            Self::from_json_str(&data)?
        };

        tracing::debug!(
            min_x = geometry.min_x,
            max_x = geometry.max_x,
            min_y = geometry.min_y,
            max_y = geometry.max_y,
            "geometry loaded"
        );
        Ok(geometry)
    }

    /// Check that the geometry is usable by the transform and the region codec.
    ///
    /// Region ids pack the y region index into 8 bits, so bounds whose region
    /// indices fall outside `0..256` would alias and are rejected here. The x
    /// bounds, tile edges included, must project inside `0..=map_width_px`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let tile_ok = |v: f64| v.is_finite() && v > 0.0;
        if !tile_ok(self.tile_width_px) || !tile_ok(self.tile_height_px) {
            return Err(GeometryError::InvalidTileSize {
                width: self.tile_width_px,
                height: self.tile_height_px,
            });
        }
        if !tile_ok(self.map_height_px) {
            return Err(GeometryError::InvalidMapHeight(self.map_height_px));
        }
        if !tile_ok(self.map_width_px) {
            return Err(GeometryError::InvalidMapWidth(self.map_width_px));
        }
        if self.region_size != REGION_SIZE {
            return Err(GeometryError::UnsupportedRegionSize(self.region_size));
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(GeometryError::EmptyBounds {
                min_x: self.min_x,
                max_x: self.max_x,
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        let px_min = (f64::from(self.min_x) - f64::from(self.offset_x)) * self.tile_width_px;
        let px_max = (f64::from(self.max_x) - f64::from(self.offset_x) + 1.0) * self.tile_width_px;
        if px_min < 0.0 || px_max > self.map_width_px {
            return Err(GeometryError::BoundsOutsideMap {
                px_min,
                px_max,
                width: self.map_width_px,
            });
        }
        if !(self.min_zoom <= self.default_zoom && self.default_zoom <= self.max_zoom) {
            return Err(GeometryError::ZoomRange {
                min: self.min_zoom,
                default: self.default_zoom,
                max: self.max_zoom,
            });
        }

        for (axis, value, limit) in [
            ("x", self.min_x, REGION_X_INDEX_LIMIT),
            ("x", self.max_x, REGION_X_INDEX_LIMIT),
            ("y", self.min_y, REGION_Y_INDEX_LIMIT),
            ("y", self.max_y, REGION_Y_INDEX_LIMIT),
        ] {
            let index = region_index(value);
            if !(0..limit).contains(&index) {
                return Err(GeometryError::RegionIndexOverflow { axis, index, limit });
            }
        }
        Ok(())
    }
}

impl Default for WorldGeometry {
    fn default() -> Self {
        Self::OSRS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_geometry_is_valid() {
        WorldGeometry::OSRS.validate().unwrap();
        assert_eq!(WorldGeometry::default(), WorldGeometry::OSRS);
    }

    #[test]
    fn builtin_values() {
        let g = WorldGeometry::OSRS;
        assert_eq!(g.map_height_px, 364_544.0);
        assert_eq!((g.tile_width_px, g.tile_height_px), (32.0, 32.0));
        assert_eq!((g.offset_x, g.offset_y), (1024, 6208));
        assert_eq!((g.min_x, g.max_x, g.min_y, g.max_y), (1024, 4224, 1216, 12608));
        assert_eq!(g.region_size, 64);
        assert_eq!((g.min_zoom, g.max_zoom, g.default_zoom), (4, 11, 8));
    }

    #[test]
    fn builtin_region_indices_fit_packing() {
        assert!(region_index(MAX_Y) < REGION_Y_INDEX_LIMIT);
        assert_eq!(region_index(MAX_Y), 197);
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let g = WorldGeometry::from_yaml_str("max_x: 4000\ndefault_zoom: 9\n").unwrap();
        assert_eq!(g.max_x, 4000);
        assert_eq!(g.default_zoom, 9);
        assert_eq!(g.min_x, MIN_X);
        assert_eq!(g.tile_width_px, TILE_WIDTH_PX);
    }

    #[test]
    fn builtin_x_bounds_fit_map_width() {
        // East edge of the last tile column.
        let right_edge = f64::from(MAX_X + 1 - OFFSET_X) * TILE_WIDTH_PX;
        assert_eq!(right_edge, 102_432.0);
        assert!(right_edge <= MAP_WIDTH_MAX_ZOOM_PX);
        assert_eq!(MIN_X, OFFSET_X);
    }

    #[test]
    fn rejects_x_bounds_outside_map_width() {
        let err = WorldGeometry::from_yaml_str("max_x: 5000\n").unwrap_err();
        assert!(matches!(
            err,
            GeometryError::BoundsOutsideMap { px_max, width, .. }
                if px_max == 127_264.0 && width == MAP_WIDTH_MAX_ZOOM_PX
        ));

        let err = WorldGeometry::from_yaml_str("min_x: 1000\n").unwrap_err();
        assert!(matches!(err, GeometryError::BoundsOutsideMap { px_min, .. } if px_min < 0.0));

        // 3264 tiles of 32 px fill the width exactly.
        let g = WorldGeometry::from_yaml_str("max_x: 4287\n").unwrap();
        assert_eq!(g.max_x, 4287);
        assert!(WorldGeometry::from_yaml_str("max_x: 4288\n").is_err());
    }

    #[test]
    fn rejects_bad_map_width() {
        for yaml in ["map_width_px: 0\n", "map_width_px: -1\n", "map_width_px: .nan\n"] {
            let err = WorldGeometry::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidMapWidth(_)), "{yaml}");
        }
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::to_string(&WorldGeometry::OSRS).unwrap();
        let g = WorldGeometry::from_json_str(&json).unwrap();
        assert_eq!(g, WorldGeometry::OSRS);
    }

    #[test]
    fn rejects_aliasing_y_bounds() {
        let err = WorldGeometry::from_yaml_str("max_y: 16384\n").unwrap_err();
        assert!(matches!(
            err,
            GeometryError::RegionIndexOverflow { axis: "y", index: 256, .. }
        ));

        let err = WorldGeometry::from_yaml_str("min_y: -1\n").unwrap_err();
        assert!(matches!(err, GeometryError::RegionIndexOverflow { axis: "y", .. }));
    }

    #[test]
    fn rejects_bad_tile_size_and_region_size() {
        let err = WorldGeometry::from_yaml_str("tile_width_px: 0\n").unwrap_err();
        assert!(matches!(err, GeometryError::InvalidTileSize { .. }));

        let err = WorldGeometry::from_yaml_str("region_size: 32\n").unwrap_err();
        assert!(matches!(err, GeometryError::UnsupportedRegionSize(32)));
    }

    #[test]
    fn rejects_empty_bounds_and_zoom_range() {
        let err = WorldGeometry::from_yaml_str("min_x: 5000\n").unwrap_err();
        assert!(matches!(err, GeometryError::EmptyBounds { .. }));

        let err = WorldGeometry::from_yaml_str("default_zoom: 12\n").unwrap_err();
        assert!(matches!(err, GeometryError::ZoomRange { .. }));
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("world.yaml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(f, "max_zoom: 12").unwrap();
        assert_eq!(WorldGeometry::load(&yaml_path).unwrap().max_zoom, 12);

        let json_path = dir.path().join("world.json");
        std::fs::write(&json_path, r#"{"max_zoom": 10}"#).unwrap();
        assert_eq!(WorldGeometry::load(&json_path).unwrap().max_zoom, 10);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorldGeometry::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, GeometryError::Io(_)));
    }
}
