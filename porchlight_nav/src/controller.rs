// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation interaction controller.
//!
//! ## Overview
//!
//! [`NavController`] owns the [`InteractionState`] and is the only thing that
//! mutates it. Hosts forward raw input (pointer enter/leave, clicks, scroll,
//! resize, timer callbacks) and read the state back to render.
//!
//! ## Dropdown lifecycle
//!
//! - `Closed --(pointer enter | click)--> Open`
//! - `Open --(pointer leaves trigger)--> PendingClose`
//! - `PendingClose --(timer elapses)--> Closed`
//! - `PendingClose --(pointer enters trigger or panel)--> Open`
//! - `Open --(pointer leaves panel | outside click | navigation)--> Closed`
//!
//! At most one item is ever open, and at most one close timer is ever
//! outstanding: scheduling a new one cancels the old one first.
//!
//! ## Teardown
//!
//! [`NavController::unmount`] and `Drop` both cancel any pending close, so a
//! late timer can never touch a controller that has gone away.

use alloc::string::String;
use core::time::Duration;

use kurbo::{Point, Rect};
use porchlight_regions::{QueryFilter, Region, RegionId, RegionKind, RegionMap};

use crate::config::NavConfig;
use crate::hover::{HoverEvent, HoverNode, HoverState, hover_path};
use crate::host::{EventSurface, Listeners, Navigator, ThemeProvider};
use crate::resolve::{Resolution, apply, resolve_href};
use crate::state::{InteractionState, Layout, MenuPhase};
use crate::timer::{Scheduler, TimerId, TimerQueue};
use crate::types::NavMenu;

/// Translates input events into one consistent [`InteractionState`].
///
/// ## Usage
///
/// - Build with [`NavController::new`] from a [`NavMenu`], a [`NavConfig`], and
///   the three collaborators.
/// - Call [`NavController::mount`] once the host's input surface exists and
///   [`NavController::unmount`] when it goes away.
/// - Forward input: either per-element (`on_pointer_enter`, `on_pointer_leave`,
///   `on_panel_pointer_enter`, `on_panel_pointer_leave`) or raw positions via
///   [`NavController::on_pointer_move`] after registering regions.
/// - Deliver each fired timer to [`NavController::on_timer`].
///
/// ```
/// use core::time::Duration;
/// use porchlight_nav::config::NavConfig;
/// use porchlight_nav::controller::NavController;
/// use porchlight_nav::host::{Navigator, ThemeProvider};
/// use porchlight_nav::state::MenuPhase;
/// use porchlight_nav::timer::TimerQueue;
/// use porchlight_nav::types::{DropdownEntry, Icon, NavItem, NavMenu};
///
/// struct Page(String);
/// impl Navigator for Page {
///     fn current_path(&self) -> &str { &self.0 }
///     fn navigate_to(&mut self, path: &str) { self.0 = path.into(); }
///     fn scroll_to_element(&mut self, _selector: &str) -> bool { true }
/// }
/// struct Light;
/// impl ThemeProvider for Light {
///     fn is_dark_mode(&self) -> bool { false }
///     fn toggle_theme(&mut self) {}
/// }
///
/// let menu = NavMenu::new(vec![
///     NavItem::link("Properties", "#properties", Icon::Building)
///         .with_dropdown([DropdownEntry::new("Office", "/office", "Offices", "/office.jpg")]),
/// ])
/// .unwrap();
/// let mut nav = NavController::new(menu, NavConfig::default(), Page("/".into()), Light, TimerQueue::new());
///
/// nav.on_pointer_enter("Properties");
/// nav.on_pointer_leave("Properties");
/// assert_eq!(nav.menu_phase("Properties"), MenuPhase::PendingClose);
/// nav.advance(Duration::from_millis(150));
/// assert_eq!(nav.menu_phase("Properties"), MenuPhase::Closed);
/// ```
pub struct NavController<N: Navigator, T: ThemeProvider, S: Scheduler = TimerQueue> {
    menu: NavMenu,
    config: NavConfig,
    state: InteractionState,
    regions: RegionMap,
    hover: HoverState<HoverNode>,
    navigator: N,
    theme: T,
    scheduler: S,
    mounted: bool,
}

impl<N: Navigator, T: ThemeProvider, S: Scheduler> core::fmt::Debug for NavController<N, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavController")
            .field("state", &self.state)
            .field("regions", &self.regions)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<N: Navigator, T: ThemeProvider, S: Scheduler> NavController<N, T, S> {
    /// Create a controller with everything closed.
    pub fn new(menu: NavMenu, config: NavConfig, navigator: N, theme: T, scheduler: S) -> Self {
        Self {
            menu,
            config,
            state: InteractionState::default(),
            regions: RegionMap::new(),
            hover: HoverState::new(),
            navigator,
            theme,
            scheduler,
            mounted: false,
        }
    }

    // --- lifecycle ---

    /// Attach the scroll, pointer-down, and resize listeners.
    ///
    /// Does nothing if already mounted, so remounts never double-register.
    pub fn mount(&mut self, surface: &mut (impl EventSurface + ?Sized)) {
        if self.mounted {
            return;
        }
        surface.add_listeners(Listeners::all());
        self.mounted = true;
        tracing::debug!("navigation mounted");
    }

    /// Detach listeners, cancel any pending close, and reset interaction state.
    ///
    /// Does nothing if not mounted.
    pub fn unmount(&mut self, surface: &mut (impl EventSurface + ?Sized)) {
        if !self.mounted {
            return;
        }
        surface.remove_listeners(Listeners::all());
        self.mounted = false;
        self.cancel_pending_close();
        let layout = self.state.layout;
        self.state = InteractionState {
            layout,
            ..InteractionState::default()
        };
        self.hover.clear();
        self.regions.show_only(RegionKind::Panel, None);
        tracing::debug!("navigation unmounted");
    }

    /// Returns true between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // --- pointer input ---

    /// The pointer entered an item's trigger.
    ///
    /// Dropdown items open immediately and any pending close is canceled.
    pub fn on_pointer_enter(&mut self, item: &str) {
        if let Some(index) = self.dropdown_index(item) {
            self.trigger_entered(index);
        }
    }

    /// The pointer left an item's trigger.
    ///
    /// Schedules a close after [`NavConfig::close_delay`] instead of closing,
    /// so the pointer can cross the gap into the panel.
    pub fn on_pointer_leave(&mut self, item: &str) {
        if self.dropdown_index(item).is_some() {
            self.trigger_left();
        }
    }

    /// The pointer entered the open panel.
    pub fn on_panel_pointer_enter(&mut self) {
        self.cancel_pending_close();
    }

    /// The pointer left the open panel. Closes without a grace period.
    pub fn on_panel_pointer_leave(&mut self) {
        self.close_menu();
    }

    /// Route a raw pointer position through the registered regions.
    ///
    /// Region changes are replayed as the matching enter/leave calls, leaves first.
    pub fn on_pointer_move(&mut self, pt: Point) {
        let hit = self.regions.hit_test_point(pt, QueryFilter::HOVER);
        let transitions = self.hover.update_path(&hover_path(hit));
        for transition in transitions {
            match transition {
                HoverEvent::Enter(HoverNode::Trigger(i)) => {
                    if self.has_dropdown(i) {
                        self.trigger_entered(i);
                    }
                }
                HoverEvent::Leave(HoverNode::Trigger(i)) => {
                    if self.has_dropdown(i) {
                        self.trigger_left();
                    }
                }
                HoverEvent::Enter(HoverNode::Panel(_)) => self.on_panel_pointer_enter(),
                HoverEvent::Leave(HoverNode::Panel(i)) => {
                    // Only the panel that is still open may close the menu.
                    if self.state.open_menu == Some(i) {
                        self.close_menu();
                    }
                }
                HoverEvent::Enter(HoverNode::Item(_)) | HoverEvent::Leave(HoverNode::Item(_)) => {}
            }
        }
    }

    /// A press landed somewhere on the page.
    ///
    /// Closes the open menu unless `pt` is inside a trigger or the open panel.
    pub fn on_outside_click(&mut self, pt: Point) {
        if self.regions.any_contains(pt, QueryFilter::GUARD) {
            return;
        }
        self.close_menu();
    }

    // --- clicks ---

    /// An item's trigger was clicked or tapped.
    ///
    /// Dropdown items toggle; other items navigate to their `href`.
    pub fn on_trigger_click(&mut self, item: &str) {
        let Some(index) = self.index_of(item) else {
            return;
        };
        if self.has_dropdown(index) {
            self.cancel_pending_close();
            let next = if self.state.open_menu == Some(index) {
                None
            } else {
                Some(index)
            };
            self.set_open(next);
        } else {
            let href = self.menu.items()[index].href.clone();
            self.resolve_navigation(&href);
        }
    }

    /// An item in the stacked mobile list was tapped. Same rules as a trigger click.
    pub fn on_mobile_item_click(&mut self, item: &str) {
        self.on_trigger_click(item);
    }

    /// The logo was clicked: always go to the home page.
    pub fn on_logo_click(&mut self) {
        let home = self.config.home_path.clone();
        apply(&mut self.navigator, &Resolution::Navigate(home));
        self.reset_menus();
    }

    /// Expand or collapse the mobile menu.
    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
        tracing::debug!(open = self.state.mobile_menu_open, "mobile menu toggled");
    }

    /// Flip the theme.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
    }

    /// Returns true if the dark theme is active.
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark_mode()
    }

    /// Follow `href` and collapse every menu.
    ///
    /// See [`resolve_href`] for the rules. Returns what was done.
    pub fn resolve_navigation(&mut self, href: &str) -> Resolution {
        let resolution = resolve_href(href, self.navigator.current_path(), &self.config);
        apply(&mut self.navigator, &resolution);
        self.reset_menus();
        resolution
    }

    // --- viewport ---

    /// The viewport scrolled to `vertical_offset`.
    pub fn on_scroll(&mut self, vertical_offset: f64) {
        let scrolled = vertical_offset > self.config.scroll_threshold;
        if scrolled != self.state.scrolled {
            tracing::debug!(scrolled, "header style changed");
            self.state.scrolled = scrolled;
        }
    }

    /// The viewport was resized to `width`.
    ///
    /// Growing into the desktop layout collapses the mobile menu.
    pub fn on_resize(&mut self, width: f64) {
        let layout = if width < self.config.mobile_breakpoint {
            Layout::Mobile
        } else {
            Layout::Desktop
        };
        if layout == self.state.layout {
            return;
        }
        tracing::debug!(?layout, "layout changed");
        self.state.layout = layout;
        if layout == Layout::Desktop {
            self.state.mobile_menu_open = false;
        }
    }

    // --- timers ---

    /// A scheduled timer fired.
    ///
    /// Only the current pending close has any effect; anything else is stale.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.state.pending_close != Some(id) {
            tracing::trace!(?id, "ignoring stale timer");
            return;
        }
        self.state.pending_close = None;
        self.set_open(None);
    }

    // --- regions ---

    /// Register the trigger bounds for `item`. Returns `None` for unknown items.
    pub fn register_trigger(&mut self, item: &str, bounds: Rect) -> Option<RegionId> {
        let index = self.index_of(item)?;
        Some(self.regions.insert(Region::trigger(index, bounds)))
    }

    /// Register the panel bounds for `item`.
    ///
    /// Returns `None` for unknown items and items without a dropdown. The panel
    /// only counts for hovering and guarding while its item is open.
    pub fn register_panel(&mut self, item: &str, bounds: Rect) -> Option<RegionId> {
        let index = self.dropdown_index(item)?;
        let id = self.regions.insert(Region::panel(index, bounds));
        self.regions.set_visible(id, self.state.open_menu == Some(index));
        Some(id)
    }

    /// Move a registered region.
    pub fn set_region_bounds(&mut self, id: RegionId, bounds: Rect) {
        self.regions.set_bounds(id, bounds);
    }

    /// Forget a registered region.
    pub fn unregister(&mut self, id: RegionId) {
        self.regions.remove(id);
    }

    // --- rendering surface ---

    /// Read-only interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Name of the item whose panel is shown.
    pub fn open_menu(&self) -> Option<&str> {
        let index = self.state.open_menu?;
        self.menu.get(index).map(|item| item.name.as_str())
    }

    /// Phase of the named item's dropdown. Unknown items are [`MenuPhase::Closed`].
    pub fn menu_phase(&self, item: &str) -> MenuPhase {
        self.menu
            .position(item)
            .map_or(MenuPhase::Closed, |i| self.state.phase(i))
    }

    /// Returns true if the mobile menu is expanded.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    /// Returns true if the header should use its scrolled style.
    pub fn is_scrolled(&self) -> bool {
        self.state.scrolled
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        self.state.layout
    }

    /// The menu being driven.
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// Active configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Registered regions.
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// The navigator collaborator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the navigator, e.g. to sync the current path.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// The theme collaborator.
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// The scheduler collaborator.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // --- internals ---

    fn index_of(&self, item: &str) -> Option<usize> {
        let index = self.menu.position(item);
        if index.is_none() {
            tracing::trace!(item, "ignoring unknown navigation item");
        }
        index
    }

    fn dropdown_index(&self, item: &str) -> Option<usize> {
        self.index_of(item).filter(|&i| self.has_dropdown(i))
    }

    fn has_dropdown(&self, index: usize) -> bool {
        self.menu.get(index).is_some_and(|item| item.has_dropdown())
    }

    fn trigger_entered(&mut self, index: usize) {
        self.cancel_pending_close();
        self.set_open(Some(index));
    }

    fn trigger_left(&mut self) {
        if self.state.open_menu.is_some() {
            self.schedule_close(self.config.close_delay);
        }
    }

    fn schedule_close(&mut self, delay: Duration) {
        self.cancel_pending_close();
        let id = self.scheduler.schedule(delay);
        tracing::debug!(?id, ?delay, "close scheduled");
        self.state.pending_close = Some(id);
    }

    fn cancel_pending_close(&mut self) {
        if let Some(id) = self.state.pending_close.take() {
            tracing::debug!(?id, "close canceled");
            self.scheduler.cancel(id);
        }
    }

    fn close_menu(&mut self) {
        self.cancel_pending_close();
        self.set_open(None);
    }

    fn reset_menus(&mut self) {
        self.close_menu();
        self.state.mobile_menu_open = false;
    }

    fn set_open(&mut self, next: Option<usize>) {
        if self.state.open_menu == next {
            return;
        }
        match next.and_then(|i| self.menu.get(i)) {
            Some(item) => tracing::debug!(item = %item.name, "dropdown opened"),
            None => tracing::debug!("dropdown closed"),
        }
        self.state.open_menu = next;
        self.regions.show_only(RegionKind::Panel, next);
    }
}

impl<N: Navigator, T: ThemeProvider> NavController<N, T, TimerQueue> {
    /// Advance the virtual clock and deliver every timer that fires.
    pub fn advance(&mut self, by: Duration) {
        for id in self.scheduler.advance(by) {
            self.on_timer(id);
        }
    }
}

impl<N: Navigator, T: ThemeProvider, S: Scheduler> Drop for NavController<N, T, S> {
    fn drop(&mut self) {
        self.cancel_pending_close();
    }
}

/// A [`Navigator`] that only remembers the current path.
///
/// Handy for hosts that perform navigation themselves from the returned
/// [`Resolution`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathOnly(pub String);

impl Navigator for PathOnly {
    fn current_path(&self) -> &str {
        &self.0
    }

    fn navigate_to(&mut self, path: &str) {
        self.0 = path.into();
    }

    fn scroll_to_element(&mut self, _selector: &str) -> bool {
        false
    }
}
