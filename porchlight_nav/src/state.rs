// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state and the per-item menu phase derived from it.

use crate::timer::TimerId;

/// Which rendering the viewport calls for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Inline triggers with floating panels.
    #[default]
    Desktop,
    /// Collapsed behind a menu button, panels stacked inline.
    Mobile,
}

/// Phase of one item's dropdown.
///
/// Only one item is ever outside [`MenuPhase::Closed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuPhase {
    /// Panel hidden.
    Closed,
    /// Panel shown.
    Open,
    /// Panel shown, with a delayed close scheduled.
    PendingClose,
}

/// Everything the controller tracks about user interaction.
///
/// Owned by [`NavController`](crate::controller::NavController); the view layer
/// only ever sees it through a shared reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub(crate) open_menu: Option<usize>,
    pub(crate) mobile_menu_open: bool,
    pub(crate) scrolled: bool,
    pub(crate) pending_close: Option<TimerId>,
    pub(crate) layout: Layout,
}

impl InteractionState {
    /// Index of the item whose panel is shown.
    pub fn open_menu(&self) -> Option<usize> {
        self.open_menu
    }

    /// Returns true if the mobile menu is expanded.
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Returns true if the page is scrolled past the threshold.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// The outstanding delayed close, if any.
    pub fn pending_close(&self) -> Option<TimerId> {
        self.pending_close
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Phase of the item at `index`.
    pub fn phase(&self, index: usize) -> MenuPhase {
        match (self.open_menu, self.pending_close) {
            (Some(open), Some(_)) if open == index => MenuPhase::PendingClose,
            (Some(open), None) if open == index => MenuPhase::Open,
            _ => MenuPhase::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_all_closed() {
        let s = InteractionState::default();
        assert_eq!(s.open_menu(), None);
        assert!(!s.mobile_menu_open());
        assert!(!s.scrolled());
        assert_eq!(s.layout(), Layout::Desktop);
        assert_eq!(s.phase(0), MenuPhase::Closed);
    }

    #[test]
    fn phase_follows_open_item_and_timer() {
        let mut s = InteractionState {
            open_menu: Some(1),
            ..Default::default()
        };
        assert_eq!(s.phase(1), MenuPhase::Open);
        assert_eq!(s.phase(0), MenuPhase::Closed);
        s.pending_close = Some(TimerId(4));
        assert_eq!(s.phase(1), MenuPhase::PendingClose);
        assert_eq!(s.phase(0), MenuPhase::Closed);
    }
}
