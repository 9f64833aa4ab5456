// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: turn raw pointer positions into enter/leave transitions.
//!
//! Hosts that cannot deliver per-element enter/leave events (a canvas, a native
//! window) can feed pointer positions to
//! [`NavController::on_pointer_move`](crate::controller::NavController::on_pointer_move).
//! The controller hit-tests its regions, builds a [`HoverNode`] path with
//! [`hover_path`], and lets [`HoverState`] work out what was left and entered.
//!
//! Moving from a trigger into its own panel keeps the shared `Item` node, so the
//! only transitions are `Leave(Trigger)` then `Enter(Panel)`:
//!
//! ```
//! use porchlight_nav::hover::{HoverEvent, HoverNode, HoverState};
//!
//! let mut h = HoverState::new();
//! h.update_path(&[HoverNode::Item(0), HoverNode::Trigger(0)]);
//! assert_eq!(
//!     h.update_path(&[HoverNode::Item(0), HoverNode::Panel(0)]),
//!     vec![HoverEvent::Leave(HoverNode::Trigger(0)), HoverEvent::Enter(HoverNode::Panel(0))]
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;

use porchlight_regions::{RegionHit, RegionKind};

/// Node in a hover path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverNode {
    /// The container grouping an item's trigger and panel.
    Item(usize),
    /// An item's trigger.
    Trigger(usize),
    /// An item's dropdown panel.
    Panel(usize),
}

/// Root→target hover path for a hit, or an empty path for no hit.
pub fn hover_path(hit: Option<RegionHit>) -> Vec<HoverNode> {
    match hit {
        None => Vec::new(),
        Some(hit) => {
            let leaf = match hit.kind {
                RegionKind::Trigger => HoverNode::Trigger(hit.owner),
                RegionKind::Panel => HoverNode::Panel(hit.owner),
            };
            vec![HoverNode::Item(hit.owner), leaf]
        }
    }
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered this node.
    Enter(K),
    /// The pointer left this node.
    Leave(K),
}

/// Current hover path plus the diffing needed to move to the next one.
///
/// Leaves are reported inner→outer, then enters outer→inner, so a handler never
/// sees a child entered before its stale sibling has been left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> HoverState<K> {
    /// Start with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The hovered path, root first.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Forget the hovered path and return the leaves for it.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update_path(&[])
    }

    /// Replace the hovered path with `path` and return the transitions.
    pub fn update_path(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();

        let leaves = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k));
        let enters = path[shared..].iter().map(|&k| HoverEvent::Enter(k));
        let out: Vec<_> = leaves.chain(enters).collect();

        self.current.clear();
        self.current.extend_from_slice(path);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use porchlight_regions::{QueryFilter, Region, RegionMap};

    use super::HoverEvent::{Enter, Leave};
    use super::HoverNode::{Item, Panel, Trigger};

    #[test]
    fn entering_from_nothing() {
        let mut h = HoverState::new();
        assert_eq!(
            h.update_path(&[Item(2), Trigger(2)]),
            vec![Enter(Item(2)), Enter(Trigger(2))]
        );
        assert_eq!(h.current_path(), &[Item(2), Trigger(2)]);
    }

    #[test]
    fn crossing_to_another_item_leaves_the_whole_branch() {
        let mut h = HoverState::new();
        let _ = h.update_path(&[Item(0), Panel(0)]);
        assert_eq!(
            h.update_path(&[Item(1), Trigger(1)]),
            vec![
                Leave(Panel(0)),
                Leave(Item(0)),
                Enter(Item(1)),
                Enter(Trigger(1)),
            ]
        );
    }

    #[test]
    fn clear_leaves_inner_first() {
        let mut h = HoverState::new();
        let _ = h.update_path(&[Item(0), Trigger(0)]);
        assert_eq!(h.clear(), vec![Leave(Trigger(0)), Leave(Item(0))]);
        assert!(h.current_path().is_empty());
    }

    #[test]
    fn unchanged_path_is_silent() {
        let mut h = HoverState::new();
        let _ = h.update_path(&[Item(0), Trigger(0)]);
        assert!(h.update_path(&[Item(0), Trigger(0)]).is_empty());
    }

    #[test]
    fn path_from_region_hits() {
        let mut map = RegionMap::new();
        map.insert(Region::trigger(3, kurbo::Rect::new(0.0, 0.0, 10.0, 10.0)));
        let hit = map.hit_test_point(kurbo::Point::new(5.0, 5.0), QueryFilter::HOVER);
        assert_eq!(hover_path(hit), vec![Item(3), Trigger(3)]);
        assert!(hover_path(None).is_empty());
    }
}
