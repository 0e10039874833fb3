//! Tile layer addressing.
//!
//! Each plane has its own tile pyramid. A [`TileSource`] holds a URL template
//! with `{plane}`, `{z}`, `{x}` and `{y}` placeholders; selecting a plane fixes
//! `{plane}` and leaves the rest to the mapping surface.

use serde::{Deserialize, Serialize};
use worldmap_kernel::WorldGeometry;

/// Public tile pyramid for the built-in world.
pub const DEFAULT_TILE_URL: &str =
    "https://raw.githubusercontent.com/Explv/osrs_map_tiles/master/{plane}/{z}/{x}/{y}.png";

const PLACEHOLDERS: [&str; 4] = ["{plane}", "{z}", "{x}", "{y}"];

/// Errors from tile addressing.
#[derive(Debug, thiserror::Error)]
pub enum TileError {
    #[error("tile template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
    #[error("zoom {zoom} outside layer range {min}..={max}")]
    ZoomOutOfRange { zoom: u8, min: u8, max: u8 },
}

/// Template and options shared by every plane's layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSource {
    pub template: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Tile rows are numbered bottom-up.
    pub tms: bool,
    pub no_wrap: bool,
    pub attribution: String,
}

impl TileSource {
    /// Source with the geometry's zoom range. The template must contain all
    /// four placeholders.
    pub fn new(template: impl Into<String>, geometry: &WorldGeometry) -> Result<Self, TileError> {
        let template = template.into();
        if let Some(missing) = PLACEHOLDERS.into_iter().find(|p| !template.contains(p)) {
            return Err(TileError::MissingPlaceholder(missing));
        }
        Ok(Self {
            template,
            min_zoom: geometry.min_zoom,
            max_zoom: geometry.max_zoom,
            tms: true,
            no_wrap: true,
            attribution: "OSRS Map Data".into(),
        })
    }

    /// Layer for one plane.
    pub fn for_plane(&self, plane: i32) -> TileLayer {
        tracing::debug!(plane, "tile layer selected");
        TileLayer {
            plane,
            template: self.template.replace("{plane}", &plane.to_string()),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            tms: self.tms,
            no_wrap: self.no_wrap,
        }
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            template: DEFAULT_TILE_URL.into(),
            min_zoom: WorldGeometry::OSRS.min_zoom,
            max_zoom: WorldGeometry::OSRS.max_zoom,
            tms: true,
            no_wrap: true,
            attribution: "OSRS Map Data".into(),
        }
    }
}

/// A tile source bound to one plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub plane: i32,
    /// Template with `{plane}` filled in.
    pub template: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tms: bool,
    pub no_wrap: bool,
}

impl TileLayer {
    /// URL of one tile. `x` and `y` are grid indices as the surface numbers
    /// them (already flipped when `tms` is set).
    pub fn url(&self, zoom: u8, x: i64, y: i64) -> Result<String, TileError> {
        if !(self.min_zoom..=self.max_zoom).contains(&zoom) {
            return Err(TileError::ZoomOutOfRange {
                zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(self
            .template
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string()))
    }
}
