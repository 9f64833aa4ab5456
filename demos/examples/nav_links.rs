// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link resolution from different pages, plus the mobile menu and theme switch.
//!
//! The config is loaded from JSON to show the `serde` feature.
//!
//! Run:
//! - `cargo run -p porchlight_demos --example nav_links`

use porchlight_demos::{ConsoleNavigator, ConsoleTheme, init_tracing, site_menu};
use porchlight_nav::config::NavConfig;
use porchlight_nav::controller::NavController;
use porchlight_nav::resolve::{follow_footer_link, resolve_href};
use porchlight_nav::timer::TimerQueue;

const CONFIG_JSON: &str = r#"{ "close_delay_ms": 150, "scroll_threshold": 50.0 }"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config: NavConfig = serde_json::from_str(CONFIG_JSON)?;

    println!("== Resolution table ==");
    for page in ["/", "/index.html", "/pensions"] {
        for href in ["#properties", "/contact", "/office"] {
            println!("  on {page:<12} {href:<12} -> {:?}", resolve_href(href, page, &config));
        }
    }

    println!("== From the home page ==");
    let mut home = NavController::new(
        site_menu()?,
        config.clone(),
        ConsoleNavigator::home(),
        ConsoleTheme::default(),
        TimerQueue::new(),
    );
    home.on_trigger_click("Properties");
    home.resolve_navigation("#properties");
    home.on_trigger_click("Contact Us");
    home.resolve_navigation("#missing-section");

    println!("== From a sub-page, on a phone ==");
    let mut sub = NavController::new(
        site_menu()?,
        config,
        ConsoleNavigator::at("/pensions"),
        ConsoleTheme::default(),
        TimerQueue::new(),
    );
    sub.on_resize(390.0);
    sub.toggle_mobile_menu();
    sub.on_mobile_item_click("People");
    println!("  mobile open={} dropdown={:?}", sub.is_mobile_menu_open(), sub.open_menu());
    sub.resolve_navigation("#people");
    println!("  mobile open={} dropdown={:?}", sub.is_mobile_menu_open(), sub.open_menu());
    assert!(!sub.is_mobile_menu_open());

    println!("== Logo, scroll, and theme ==");
    sub.on_logo_click();
    sub.on_scroll(120.0);
    sub.toggle_theme();
    println!(
        "  path={} scrolled={} dark={}",
        sub.navigator().path,
        sub.is_scrolled(),
        sub.is_dark_mode()
    );

    println!("== Footer ==");
    let mut footer = ConsoleNavigator::at("/residential");
    follow_footer_link(&mut footer, "#privacy");
    follow_footer_link(&mut footer, "/financials-2023");

    Ok(())
}
