//! Region codec: 64x64-tile blocks addressed by a packed integer id.
//!
//! `id = (x >> 6) * 256 + (y >> 6)`. The y region index occupies the low 8 bits,
//! so a y index outside `0..256` aliases onto another region. The built-in world
//! tops out at index 197; `WorldGeometry::validate` rejects bounds that would
//! alias, but the codec itself does not check.

use worldmap_common::{LocalCoordinate, Region, WorldCoordinate};

/// Tiles per region edge.
pub const REGION_SIZE: i32 = 64;
/// Number of distinguishable y region indices in a packed id.
pub const REGION_Y_INDEX_LIMIT: i32 = 256;
/// x region indices an id can carry lie in `-REGION_X_INDEX_LIMIT..REGION_X_INDEX_LIMIT`;
/// ids from non-negative coordinates stay in `0..REGION_X_INDEX_LIMIT`.
pub const REGION_X_INDEX_LIMIT: i32 = 1 << (i32::BITS - 1 - Y_INDEX_BITS);

const REGION_SHIFT: u32 = 6;
const Y_INDEX_BITS: u32 = 8;
const Y_INDEX_MASK: i32 = 0xFF;

/// Region index along one axis (floor division by 64).
pub const fn region_index(v: i32) -> i32 {
    v >> REGION_SHIFT
}

/// Pack a pair of region indices into an id. Wraps instead of overflowing.
pub const fn region_id_from_indices(rx: i32, ry: i32) -> i32 {
    rx.wrapping_mul(REGION_Y_INDEX_LIMIT).wrapping_add(ry)
}

/// Packed id of the region containing `(x, y)`.
pub const fn region_id(x: i32, y: i32) -> i32 {
    region_id_from_indices(region_index(x), region_index(y))
}

/// The region containing `(x, y)`, with its south-west base coordinates.
///
/// A coordinate on a multiple of 64 belongs to the region starting there.
pub const fn region_of(x: i32, y: i32) -> Region {
    let id = region_id(x, y);
    let base = region_from_id(id);
    Region {
        id,
        x: base.x,
        y: base.y,
    }
}

/// Split an id into its `(x, y)` region indices. Inverse of
/// [`region_id_from_indices`] for y indices in `0..256`.
pub const fn region_indices(id: i32) -> (i32, i32) {
    (id >> Y_INDEX_BITS, id & Y_INDEX_MASK)
}

/// Unpack an id into its region's south-west base coordinates.
pub const fn region_from_id(id: i32) -> WorldCoordinate {
    let (rx, ry) = region_indices(id);
    WorldCoordinate {
        x: rx << REGION_SHIFT,
        y: ry << REGION_SHIFT,
    }
}

/// Position of `(x, y)` relative to its region's base; both axes in `0..64`.
///
/// Equal to subtracting `region_of(x, y)`'s base wherever the id does not alias.
pub const fn local_coordinate(x: i32, y: i32) -> LocalCoordinate {
    LocalCoordinate {
        x: x & (REGION_SIZE - 1),
        y: y & (REGION_SIZE - 1),
    }
}

/// Whether `(x, y)` lies inside `region`.
pub const fn region_contains(region: Region, x: i32, y: i32) -> bool {
    region_index(x) == region_index(region.x) && region_index(y) == region_index(region.y)
}
