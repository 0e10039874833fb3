use worldmap_common::{GeoPoint, WorldCoordinate, WorldPosition};
use worldmap_kernel::{MapSurface, WorldGeometry};

/// A raw event from the mapping surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// Pointer moved over the surface.
    PointerMoved(GeoPoint),
    /// Surface was clicked.
    Clicked(GeoPoint),
    /// The viewer switched to another plane's tile layer.
    PlaneChanged(i32),
    /// Pointer left the surface.
    PointerLeft,
}

/// What the viewer should react to after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerUpdate {
    /// The hovered tile changed.
    Hover(WorldPosition),
    /// A tile was clicked.
    Click(WorldPosition),
    /// The active plane changed.
    Plane(i32),
    /// Nothing is hovered any more.
    Cleared,
}

/// Turns surface events into world positions on the active plane.
///
/// Hover updates are only emitted when the tile under the pointer changes.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    geometry: WorldGeometry,
    plane: i32,
    current: Option<WorldPosition>,
}

impl PointerTracker {
    pub fn new(geometry: WorldGeometry, plane: i32) -> Self {
        Self {
            geometry,
            plane,
            current: None,
        }
    }

    /// Active plane.
    pub fn plane(&self) -> i32 {
        self.plane
    }

    /// Tile last seen under the pointer.
    pub fn current(&self) -> Option<WorldPosition> {
        self.current
    }

    /// Apply one event. Returns `None` when nothing observable changed.
    pub fn handle<S: MapSurface + ?Sized>(
        &mut self,
        surface: &S,
        event: MapEvent,
    ) -> Option<PointerUpdate> {
        match event {
            MapEvent::PointerMoved(geo) => {
                let pos = self.geometry.geo_to_world(surface, geo, self.plane);
                if self.current == Some(pos) {
                    return None;
                }
                tracing::trace!(%pos, "hover");
                self.current = Some(pos);
                Some(PointerUpdate::Hover(pos))
            }
            MapEvent::Clicked(geo) => {
                let pos = self.geometry.geo_to_world(surface, geo, self.plane);
                tracing::debug!(%pos, "click");
                Some(PointerUpdate::Click(pos))
            }
            MapEvent::PlaneChanged(plane) => {
                if plane == self.plane {
                    return None;
                }
                tracing::debug!(from = self.plane, to = plane, "plane changed");
                self.plane = plane;
                if let Some(pos) = self.current.as_mut() {
                    pos.z = plane;
                }
                Some(PointerUpdate::Plane(plane))
            }
            MapEvent::PointerLeft => self.current.take().map(|_| PointerUpdate::Cleared),
        }
    }

    /// Surface coordinate to centre the view on tile `coordinate`.
    pub fn center_on<S: MapSurface + ?Sized>(
        &self,
        surface: &S,
        coordinate: impl Into<WorldCoordinate>,
    ) -> GeoPoint {
        let c = coordinate.into();
        self.geometry
            .world_to_geo_centered(surface, f64::from(c.x), f64::from(c.y))
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(WorldGeometry::OSRS, 0)
    }
}
