use worldmap_common::{GeoPoint, ProjectedPoint};
use worldmap_kernel::{MapSurface, WorldGeometry};

/// Flat-plane surface: geo coordinates are pixels at zoom 0, doubling per level.
///
/// `project(geo, z) = (lng * 2^z, -lat * 2^z)`; the y axis is flipped so that
/// pixel y grows downward while lat grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCrs {
    min_zoom: u8,
    max_zoom: u8,
    zoom: u8,
}

impl SimpleCrs {
    /// Build a surface; `zoom` is clamped into the range and the range is
    /// reordered if given backwards.
    pub fn new(min_zoom: u8, max_zoom: u8, zoom: u8) -> Self {
        let (min_zoom, max_zoom) = (min_zoom.min(max_zoom), min_zoom.max(max_zoom));
        Self {
            min_zoom,
            max_zoom,
            zoom: zoom.clamp(min_zoom, max_zoom),
        }
    }

    /// Surface with the geometry's zoom range, at its default zoom.
    pub fn for_geometry(geometry: &WorldGeometry) -> Self {
        Self::new(geometry.min_zoom, geometry.max_zoom, geometry.default_zoom)
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    /// Set the current zoom, clamped into range. Returns the zoom applied.
    pub fn set_zoom(&mut self, zoom: u8) -> u8 {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        tracing::trace!(requested = zoom, applied = self.zoom, "zoom set");
        self.zoom
    }

    fn scale(zoom: u8) -> f64 {
        2f64.powi(i32::from(zoom))
    }
}

impl Default for SimpleCrs {
    fn default() -> Self {
        Self::for_geometry(&WorldGeometry::OSRS)
    }
}

impl MapSurface for SimpleCrs {
    fn project(&self, geo: GeoPoint, zoom: u8) -> ProjectedPoint {
        let s = Self::scale(zoom);
        ProjectedPoint::new(geo.lng * s, -geo.lat * s)
    }

    fn unproject(&self, point: ProjectedPoint, zoom: u8) -> GeoPoint {
        let s = Self::scale(zoom);
        GeoPoint::new(-point.y / s, point.x / s)
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}
