// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent on a virtual clock.
//!
//! Opens a dropdown on pointer enter, leaves the trigger, and re-enters before
//! the grace period runs out, so the panel never flickers. Then leaves for good
//! and lets the close timer fire.
//!
//! Run:
//! - `cargo run -p porchlight_demos --example nav_hover`
//! - `RUST_LOG=trace cargo run -p porchlight_demos --example nav_hover`

use std::time::Duration;

use porchlight_demos::{ConsoleNavigator, ConsoleSurface, ConsoleTheme, init_tracing, site_menu};
use porchlight_nav::config::NavConfig;
use porchlight_nav::controller::NavController;
use porchlight_nav::state::MenuPhase;
use porchlight_nav::timer::TimerQueue;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut surface = ConsoleSurface::default();
    let mut nav = NavController::new(
        site_menu()?,
        NavConfig::default(),
        ConsoleNavigator::home(),
        ConsoleTheme::default(),
        TimerQueue::new(),
    );
    nav.mount(&mut surface);

    println!("== Enter, leave, re-enter within 150ms ==");
    nav.on_pointer_enter("Properties");
    nav.on_pointer_leave("Properties");
    nav.advance(Duration::from_millis(120));
    nav.on_pointer_enter("Properties");
    nav.advance(Duration::from_millis(200));
    println!("  Properties: {:?}", nav.menu_phase("Properties"));
    assert_eq!(nav.menu_phase("Properties"), MenuPhase::Open);

    println!("== Cross into the panel, then out ==");
    nav.on_pointer_leave("Properties");
    nav.on_panel_pointer_enter();
    nav.advance(Duration::from_millis(500));
    println!("  Properties: {:?}", nav.menu_phase("Properties"));
    nav.on_panel_pointer_leave();
    println!("  Properties: {:?}", nav.menu_phase("Properties"));
    assert_eq!(nav.open_menu(), None);

    println!("== Leave for good ==");
    nav.on_pointer_enter("People");
    nav.on_pointer_leave("People");
    nav.advance(Duration::from_millis(149));
    println!("  at 149ms People: {:?}", nav.menu_phase("People"));
    nav.advance(Duration::from_millis(1));
    println!("  at 150ms People: {:?}", nav.menu_phase("People"));
    assert_eq!(nav.menu_phase("People"), MenuPhase::Closed);

    println!("== Teardown with a close pending ==");
    nav.on_pointer_enter("Financials");
    nav.on_pointer_leave("Financials");
    nav.unmount(&mut surface);
    println!("  outstanding timers: {}", nav.scheduler().pending());
    assert_eq!(nav.scheduler().pending(), 0);
    assert!(surface.listeners.is_empty());

    Ok(())
}
