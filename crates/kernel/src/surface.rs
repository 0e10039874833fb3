use worldmap_common::{GeoPoint, ProjectedPoint};

/// The mapping surface the viewer draws on.
///
/// The surface owns the pixel <-> geo arithmetic; the kernel only supplies and
/// consumes projected points at the surface's maximum zoom.
pub trait MapSurface {
    /// Geo point to pixel space at `zoom`.
    fn project(&self, geo: GeoPoint, zoom: u8) -> ProjectedPoint;

    /// Pixel space at `zoom` to geo point.
    fn unproject(&self, point: ProjectedPoint, zoom: u8) -> GeoPoint;

    /// Current zoom level.
    fn zoom(&self) -> u8;

    /// Highest zoom level. Projected points exchanged with the kernel use this.
    fn max_zoom(&self) -> u8;
}
