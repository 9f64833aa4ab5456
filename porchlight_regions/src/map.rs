// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region storage, updates, and point queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::{Region, RegionFlags, RegionId, RegionKind};

/// Result of a hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionHit {
    /// The matched region.
    pub id: RegionId,
    /// Trigger or panel.
    pub kind: RegionKind,
    /// Index of the owning menu item.
    pub owner: usize,
}

/// Filters applied during point queries.
///
/// Used by [`RegionMap::hit_test_point`] and [`RegionMap::any_contains`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider regions marked [`RegionFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider regions marked [`RegionFlags::PICKABLE`].
    pub pickable_only: bool,
    /// If true, only consider regions marked [`RegionFlags::GUARD`].
    pub guard_only: bool,
}

impl QueryFilter {
    /// Visible, pickable regions: what a pointer can hover.
    pub const HOVER: Self = Self {
        visible_only: true,
        pickable_only: true,
        guard_only: false,
    };

    /// Visible guard regions: what protects open menus from dismissal.
    pub const GUARD: Self = Self {
        visible_only: true,
        pickable_only: false,
        guard_only: true,
    };

    fn admits(self, flags: RegionFlags) -> bool {
        (!self.visible_only || flags.contains(RegionFlags::VISIBLE))
            && (!self.pickable_only || flags.contains(RegionFlags::PICKABLE))
            && (!self.guard_only || flags.contains(RegionFlags::GUARD))
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    region: Region,
}

/// Flat registry of interactive regions.
///
/// Regions are registered explicitly by the host once their geometry is known,
/// so containment checks never need to walk a document tree.
#[derive(Default)]
pub struct RegionMap {
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for RegionMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("RegionMap")
            .field("regions_total", &total)
            .field("regions_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl RegionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region and return its id.
    pub fn insert(&mut self, region: Region) -> RegionId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot { generation, region });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot { generation, region }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        id_at(idx, generation)
    }

    /// Remove a region. Stale ids are ignored.
    pub fn remove(&mut self, id: RegionId) -> Option<Region> {
        if !self.is_alive(id) {
            return None;
        }
        let slot = self.slots[id.idx()].take()?;
        self.free_list.push(id.idx());
        Some(slot.region)
    }

    /// Returns true if `id` refers to a live region.
    pub fn is_alive(&self, id: RegionId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .is_some_and(|s| s.generation == id.generation())
    }

    /// Look up a live region.
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        let slot = self.slots.get(id.idx())?.as_ref()?;
        (slot.generation == id.generation()).then_some(&slot.region)
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if no region is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live regions.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.as_ref().map(|s| (id_at(i, s.generation), &s.region))
        })
    }

    /// Update a region's bounds.
    pub fn set_bounds(&mut self, id: RegionId, bounds: Rect) {
        if let Some(r) = self.region_mut(id) {
            r.bounds = bounds;
        }
    }

    /// Show or hide a region.
    pub fn set_visible(&mut self, id: RegionId, visible: bool) {
        if let Some(r) = self.region_mut(id) {
            r.flags.set(RegionFlags::VISIBLE, visible);
        }
    }

    /// Show or hide every region of `kind` owned by `owner`.
    pub fn set_owner_visible(&mut self, owner: usize, kind: RegionKind, visible: bool) {
        for slot in self.slots.iter_mut().flatten() {
            if slot.region.owner == owner && slot.region.kind == kind {
                slot.region.flags.set(RegionFlags::VISIBLE, visible);
            }
        }
    }

    /// Show regions of `kind` owned by `owner` and hide the rest of that kind.
    ///
    /// Passing `None` hides every region of `kind`.
    pub fn show_only(&mut self, kind: RegionKind, owner: Option<usize>) {
        for slot in self.slots.iter_mut().flatten() {
            if slot.region.kind == kind {
                let on = owner == Some(slot.region.owner);
                slot.region.flags.set(RegionFlags::VISIBLE, on);
            }
        }
    }

    /// Hit test a point. Returns the topmost region.
    ///
    /// Higher `z_index` wins; equal `z_index` falls back to the newer [`RegionId`].
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<RegionHit> {
        let mut best: Option<(RegionId, &Region)> = None;
        for (id, region) in self.iter() {
            if !filter.admits(region.flags) || !region.bounds.contains(pt) {
                continue;
            }
            match best {
                None => best = Some((id, region)),
                Some((best_id, best_region)) => {
                    let z = region.z_index;
                    if z > best_region.z_index
                        || (z == best_region.z_index && id.is_newer_than(best_id))
                    {
                        best = Some((id, region));
                    }
                }
            }
        }
        best.map(|(id, region)| RegionHit {
            id,
            kind: region.kind,
            owner: region.owner,
        })
    }

    /// Returns true if any admitted region contains `pt`.
    pub fn any_contains(&self, pt: Point, filter: QueryFilter) -> bool {
        self.iter().any(|(_, r)| filter.admits(r.flags) && r.bounds.contains(pt))
    }

    fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        let slot = self.slots.get_mut(id.idx())?.as_mut()?;
        if slot.generation != id.generation() {
            return None;
        }
        Some(&mut slot.region)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "RegionId uses 32-bit indices by design."
)]
fn id_at(idx: usize, generation: u32) -> RegionId {
    RegionId::new(idx as u32, generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }

    #[test]
    fn insert_and_hit_test() {
        let mut map = RegionMap::new();
        let a = map.insert(Region::trigger(0, rect(0.0, 0.0, 100.0, 40.0)));
        let b = map.insert(Region::trigger(1, rect(100.0, 0.0, 200.0, 40.0)));

        let hit = map.hit_test_point(Point::new(50.0, 20.0), QueryFilter::HOVER);
        assert_eq!(hit.map(|h| h.id), Some(a));
        let hit = map.hit_test_point(Point::new(150.0, 20.0), QueryFilter::HOVER);
        assert_eq!(hit.map(|h| (h.id, h.owner)), Some((b, 1)));
        assert!(
            map.hit_test_point(Point::new(250.0, 20.0), QueryFilter::HOVER)
                .is_none()
        );
    }

    #[test]
    fn bounds_are_half_open() {
        let mut map = RegionMap::new();
        map.insert(Region::trigger(0, rect(0.0, 0.0, 100.0, 40.0)));
        assert!(map.any_contains(Point::new(0.0, 0.0), QueryFilter::GUARD));
        assert!(!map.any_contains(Point::new(100.0, 20.0), QueryFilter::GUARD));
    }

    #[test]
    fn higher_z_wins_then_newer() {
        let mut map = RegionMap::new();
        let r = rect(0.0, 0.0, 100.0, 100.0);
        let low = map.insert(Region::trigger(0, r).with_z_index(5));
        let _older = map.insert(Region::trigger(1, r));
        let newer = map.insert(Region::trigger(2, r));
        let pt = Point::new(10.0, 10.0);
        assert_eq!(
            map.hit_test_point(pt, QueryFilter::HOVER).map(|h| h.id),
            Some(low)
        );
        map.set_visible(low, false);
        assert_eq!(
            map.hit_test_point(pt, QueryFilter::HOVER).map(|h| h.id),
            Some(newer)
        );
    }

    #[test]
    fn hidden_panels_do_not_guard_until_shown() {
        let mut map = RegionMap::new();
        map.insert(Region::trigger(0, rect(0.0, 0.0, 100.0, 40.0)));
        map.insert(Region::panel(0, rect(0.0, 48.0, 600.0, 300.0)));
        map.insert(Region::panel(1, rect(0.0, 48.0, 900.0, 300.0)));
        let in_panel = Point::new(300.0, 100.0);
        let in_wide_panel = Point::new(800.0, 100.0);
        assert!(!map.any_contains(in_panel, QueryFilter::GUARD));

        map.show_only(RegionKind::Panel, Some(0));
        assert!(map.any_contains(in_panel, QueryFilter::GUARD));
        assert!(!map.any_contains(in_wide_panel, QueryFilter::GUARD));

        map.show_only(RegionKind::Panel, None);
        assert!(!map.any_contains(in_panel, QueryFilter::GUARD));

        map.set_owner_visible(1, RegionKind::Panel, true);
        assert!(map.any_contains(in_wide_panel, QueryFilter::GUARD));
    }

    #[test]
    fn stale_ids_do_not_alias() {
        let mut map = RegionMap::new();
        let a = map.insert(Region::trigger(0, rect(0.0, 0.0, 10.0, 10.0)));
        assert!(map.remove(a).is_some());
        assert!(!map.is_alive(a));
        assert!(map.remove(a).is_none());
        let b = map.insert(Region::trigger(1, rect(0.0, 0.0, 20.0, 20.0)));
        assert_ne!(a, b);
        assert!(map.get(a).is_none());
        assert_eq!(map.get(b).map(|r| r.owner), Some(1));
        map.set_bounds(a, rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(map.get(b).map(|r| r.bounds), Some(rect(0.0, 0.0, 20.0, 20.0)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn unguarded_regions_are_ignored_by_guard_queries() {
        let mut map = RegionMap::new();
        let mut region = Region::trigger(0, rect(0.0, 0.0, 10.0, 10.0));
        region.flags.remove(RegionFlags::GUARD);
        map.insert(region);
        let pt = Point::new(5.0, 5.0);
        assert!(!map.any_contains(pt, QueryFilter::GUARD));
        assert!(map.hit_test_point(pt, QueryFilter::HOVER).is_some());
    }
}
