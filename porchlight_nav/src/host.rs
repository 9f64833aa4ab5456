// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators the controller calls out to.
//!
//! The controller owns no routing, theming, or event plumbing. A host supplies
//! those through the traits below; a web binding would back them with the
//! history API, a theme context, and document listeners.

/// Current theme and a way to flip it.
///
/// Persisting the choice is the provider's business.
pub trait ThemeProvider {
    /// Returns true if the dark theme is active.
    fn is_dark_mode(&self) -> bool;
    /// Switch between light and dark.
    fn toggle_theme(&mut self);
}

/// Page transitions and in-page scrolling.
pub trait Navigator {
    /// Path of the page currently shown, e.g. `/` or `/pensions`.
    fn current_path(&self) -> &str;
    /// Perform a full navigation to `path`.
    fn navigate_to(&mut self, path: &str);
    /// Smooth-scroll to the element matching `selector`.
    ///
    /// Returns `false` when nothing matches; that is an expected condition
    /// (the section may not exist on the current view), not an error.
    fn scroll_to_element(&mut self, selector: &str) -> bool;
}

bitflags::bitflags! {
    /// Process-wide listeners the controller needs while mounted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Viewport scroll, for the header style.
        const SCROLL       = 0b0000_0001;
        /// Pointer press anywhere, for outside-click dismissal.
        const POINTER_DOWN = 0b0000_0010;
        /// Viewport resize, for the desktop/mobile switch.
        const RESIZE       = 0b0000_0100;
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::empty()
    }
}

/// The top-level input surface listeners attach to.
pub trait EventSurface {
    /// Start delivering `listeners` to the controller.
    fn add_listeners(&mut self, listeners: Listeners);
    /// Stop delivering `listeners`.
    fn remove_listeners(&mut self, listeners: Listeners);
}
