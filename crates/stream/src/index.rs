use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use worldmap_common::{Region, WorldPosition};
use worldmap_kernel::region::{
    REGION_X_INDEX_LIMIT, REGION_Y_INDEX_LIMIT, region_id_from_indices,
};
use worldmap_kernel::{region_indices, region_of};

/// Groups keyed positions by the region they fall in.
///
/// Positions on every plane of a region share its bucket. Regions are queried
/// by id or by a square radius (in regions) around a centre region.
#[derive(Debug, Clone)]
pub struct RegionIndex<K> {
    regions: HashMap<i32, HashSet<K>>,
}

impl<K: Eq + Hash + Clone> RegionIndex<K> {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
        }
    }

    /// Rebuild the whole index from `items`.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, WorldPosition)>,
    {
        let _span = tracing::debug_span!("region_index_rebuild").entered();
        self.regions.clear();
        for (key, pos) in items {
            self.insert(key, pos);
        }
        tracing::trace!(
            regions = self.regions.len(),
            placements = self.total_placements(),
            "region index rebuilt"
        );
    }

    /// Add `key` at `pos`. Returns the region it was filed under.
    pub fn insert(&mut self, key: K, pos: WorldPosition) -> Region {
        let region = region_of(pos.x, pos.y);
        self.regions.entry(region.id).or_default().insert(key);
        region
    }

    /// Remove `key` from the region containing `pos`. Empty regions are dropped.
    pub fn remove(&mut self, key: &K, pos: WorldPosition) -> bool {
        let id = region_of(pos.x, pos.y).id;
        let Some(keys) = self.regions.get_mut(&id) else {
            return false;
        };
        let removed = keys.remove(key);
        if keys.is_empty() {
            self.regions.remove(&id);
        }
        removed
    }

    /// Keys filed under region `id`.
    pub fn in_region(&self, id: i32) -> HashSet<K> {
        self.regions.get(&id).cloned().unwrap_or_default()
    }

    /// Keys within `radius` regions of region `center` on both axes.
    ///
    /// Neighbours whose y index would leave the id's packing width are skipped
    /// rather than aliased onto another column. A negative radius matches nothing.
    pub fn in_radius(&self, center: i32, radius: i32) -> HashSet<K> {
        let mut result = HashSet::new();
        if radius < 0 {
            return result;
        }
        let (rx, ry) = region_indices(center);
        let x_lo = rx.saturating_sub(radius).max(-REGION_X_INDEX_LIMIT);
        let x_hi = rx.saturating_add(radius).min(REGION_X_INDEX_LIMIT - 1);
        let y_lo = ry.saturating_sub(radius).max(0);
        let y_hi = ry.saturating_add(radius).min(REGION_Y_INDEX_LIMIT - 1);

        // Walk whichever is smaller: the id window or the occupied regions.
        let window = i64::from(x_hi - x_lo + 1) * i64::from(y_hi - y_lo + 1);
        if window > self.regions.len() as i64 {
            for (&id, keys) in &self.regions {
                let (nx, ny) = region_indices(id);
                if (x_lo..=x_hi).contains(&nx) && (y_lo..=y_hi).contains(&ny) {
                    result.extend(keys.iter().cloned());
                }
            }
            return result;
        }
        for nx in x_lo..=x_hi {
            for ny in y_lo..=y_hi {
                if let Some(keys) = self.regions.get(&region_id_from_indices(nx, ny)) {
                    result.extend(keys.iter().cloned());
                }
            }
        }
        result
    }

    /// Ids of all non-empty regions.
    pub fn region_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.regions.keys().copied()
    }

    /// Number of non-empty regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Total number of keys across all regions.
    pub fn total_placements(&self) -> usize {
        self.regions.values().map(|s| s.len()).sum()
    }
}

impl<K: Eq + Hash + Clone> Default for RegionIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
