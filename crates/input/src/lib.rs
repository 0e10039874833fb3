//! Surface input: the flat mapping surface and pointer events mapped to world positions.
//!
//! # Invariants
//! - Pointer positions are resolved at the surface's maximum zoom.
//! - The active plane is owned by the tracker and never inferred from pixels.

pub mod pointer;
pub mod surface;

pub use pointer::{MapEvent, PointerTracker, PointerUpdate};
pub use surface::SimpleCrs;
pub use worldmap_kernel::MapSurface;
