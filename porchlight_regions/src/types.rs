// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region map: identifiers, flags, kinds, and geometry.

use kurbo::Rect;

/// Identifier for a region in a [`RegionMap`](crate::RegionMap).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed and any `RegionId` pointing at it becomes stale.
/// - Reusing a freed slot bumps its generation, so a stale id never aliases the new region.
///
/// A `RegionId` is newer than another when it has a higher generation, or the
/// same generation and a higher slot. That order only breaks z-index ties in
/// [hit testing](crate::RegionMap::hit_test_point).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32, pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }

    pub(crate) fn is_newer_than(self, other: Self) -> bool {
        (self.1 > other.1) || (self.1 == other.1 && self.0 > other.0)
    }
}

bitflags::bitflags! {
    /// Region flags controlling visibility, picking, and outside-click guarding.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is currently shown.
        const VISIBLE  = 0b0000_0001;
        /// Region takes part in pointer hit testing.
        const PICKABLE = 0b0000_0010;
        /// Presses inside this region do not dismiss open menus.
        const GUARD    = 0b0000_0100;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE | Self::GUARD
    }
}

/// What part of a menu a region covers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RegionKind {
    /// The always-visible item that reveals a panel.
    Trigger,
    /// The transient overlay holding the entries.
    Panel,
}

/// A registered region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// World-space bounds. Containment is half-open, as in [`Rect::contains`].
    pub bounds: Rect,
    /// Trigger or panel.
    pub kind: RegionKind,
    /// Index of the owning menu item.
    pub owner: usize,
    /// Stacking order. Higher is on top.
    pub z_index: i32,
    /// Visibility, picking, and guard flags.
    pub flags: RegionFlags,
}

impl Region {
    /// A visible, pickable, guarding trigger region.
    pub fn trigger(owner: usize, bounds: Rect) -> Self {
        Self {
            bounds,
            kind: RegionKind::Trigger,
            owner,
            z_index: 0,
            flags: RegionFlags::default(),
        }
    }

    /// A pickable, guarding panel region.
    ///
    /// Panels start hidden and sit above triggers.
    pub fn panel(owner: usize, bounds: Rect) -> Self {
        Self {
            bounds,
            kind: RegionKind::Panel,
            owner,
            z_index: 1,
            flags: RegionFlags::PICKABLE | RegionFlags::GUARD,
        }
    }

    /// Set the z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns true if the region is flagged visible.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(RegionFlags::VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_prefers_generation_then_slot() {
        assert!(RegionId::new(0, 2).is_newer_than(RegionId::new(5, 1)));
        assert!(RegionId::new(3, 1).is_newer_than(RegionId::new(2, 1)));
        assert!(!RegionId::new(2, 1).is_newer_than(RegionId::new(2, 1)));
    }

    #[test]
    fn panels_start_hidden_above_triggers() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let t = Region::trigger(0, r);
        let p = Region::panel(0, r);
        assert!(t.is_visible());
        assert!(!p.is_visible());
        assert!(p.z_index > t.z_index);
        assert!(p.flags.contains(RegionFlags::GUARD));
    }
}
