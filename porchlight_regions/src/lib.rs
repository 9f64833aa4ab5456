// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Porchlight Regions: a Kurbo-native registry of interactive hit regions.
//!
//! Menus need to answer two geometric questions on every pointer event:
//! which trigger or panel is under the pointer, and whether a press landed
//! inside anything that should keep the open menu alive.
//! This crate answers both over regions that the host registers explicitly once
//! it knows their world-space bounds.
//!
//! - [`RegionId`] is a generational handle; stale ids never alias a newer region.
//! - [`RegionFlags`] control visibility, picking, and outside-click guarding.
//! - [`RegionMap::hit_test_point`] returns the topmost region (z-index, then newest).
//! - [`RegionMap::any_contains`] answers containment against every admitted region.
//!
//! ## Not a layout engine
//!
//! Upstream code computes positions and sizes and keeps the map up to date with
//! [`RegionMap::set_bounds`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use porchlight_regions::{QueryFilter, Region, RegionKind, RegionMap};
//!
//! let mut map = RegionMap::new();
//! let trigger = map.insert(Region::trigger(0, Rect::new(0.0, 0.0, 120.0, 40.0)));
//! map.insert(Region::panel(0, Rect::new(0.0, 48.0, 600.0, 320.0)));
//!
//! let hit = map.hit_test_point(Point::new(10.0, 10.0), QueryFilter::HOVER).unwrap();
//! assert_eq!(hit.id, trigger);
//!
//! // Panels guard only while shown.
//! let inside_panel = Point::new(300.0, 100.0);
//! assert!(!map.any_contains(inside_panel, QueryFilter::GUARD));
//! map.show_only(RegionKind::Panel, Some(0));
//! assert!(map.any_contains(inside_panel, QueryFilter::GUARD));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod map;
mod types;

pub use map::{QueryFilter, RegionHit, RegionMap};
pub use types::{Region, RegionFlags, RegionId, RegionKind};
