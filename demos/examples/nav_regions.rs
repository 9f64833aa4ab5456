// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer positions and outside clicks over registered regions.
//!
//! A host without per-element events (a canvas, a native window) registers the
//! trigger and panel rectangles once they are laid out, then forwards raw
//! pointer positions and presses.
//!
//! Run:
//! - `cargo run -p porchlight_demos --example nav_regions`

use std::time::Duration;

use kurbo::{Point, Rect};
use porchlight_demos::{ConsoleNavigator, ConsoleTheme, init_tracing, site_menu};
use porchlight_nav::config::NavConfig;
use porchlight_nav::controller::NavController;
use porchlight_nav::timer::TimerQueue;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut nav = NavController::new(
        site_menu()?,
        NavConfig::default(),
        ConsoleNavigator::home(),
        ConsoleTheme::default(),
        TimerQueue::new(),
    );

    // Triggers sit in a 64px bar; panels drop 8px below it.
    let names: Vec<String> = nav.menu().items().iter().map(|i| i.name.clone()).collect();
    for (i, name) in names.iter().enumerate() {
        let x = 200.0 + 140.0 * i as f64;
        nav.register_trigger(name, Rect::new(x, 12.0, x + 120.0, 52.0));
        let width = match nav.menu().get(i).map(|item| item.entries().len()) {
            Some(2) => 600.0,
            _ => 900.0,
        };
        nav.register_panel(name, Rect::new(x - width / 2.0, 60.0, x + width / 2.0, 360.0));
    }
    println!("registered: {:?}", nav.regions());

    let path = [
        ("over Properties", Point::new(250.0, 30.0)),
        ("in the gap", Point::new(250.0, 56.0)),
        ("inside the panel", Point::new(250.0, 200.0)),
        ("over People", Point::new(400.0, 30.0)),
    ];
    for (label, pt) in path {
        nav.on_pointer_move(pt);
        nav.advance(Duration::from_millis(40));
        println!("{label:>18}: open={:?} state={:?}", nav.open_menu(), nav.state());
    }

    println!("== Press inside the open panel ==");
    nav.on_outside_click(Point::new(400.0, 300.0));
    println!("  open={:?}", nav.open_menu());

    println!("== Press on another trigger ==");
    nav.on_outside_click(Point::new(800.0, 30.0));
    println!("  open={:?}", nav.open_menu());

    println!("== Press on the hero banner ==");
    nav.on_outside_click(Point::new(400.0, 700.0));
    println!("  open={:?}", nav.open_menu());
    assert_eq!(nav.open_menu(), None);

    Ok(())
}
