// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the demos: a sample site menu and console collaborators.

use porchlight_nav::host::{EventSurface, Listeners, Navigator, ThemeProvider};
use porchlight_nav::types::{DropdownEntry, Icon, NavItem, NavMenu};
use tracing_subscriber::EnvFilter;

/// Sample site table, stored the way a host would ship it.
pub const SITE_JSON: &str = r##"[
  { "name": "Properties", "href": "#properties", "icon": "Building",
    "dropdown": [
      { "name": "Office", "href": "/office", "description": "Commercial office spaces", "image": "/office.jpg" },
      { "name": "Residential", "href": "/residential", "description": "Homes and residential developments", "image": "/residential.jpg" }
    ] },
  { "name": "People", "href": "#people", "icon": "Users",
    "dropdown": [
      { "name": "Directors", "href": "/directors", "description": "Board of directors", "image": "/director.jpg" },
      { "name": "Executive Team", "href": "/executive", "description": "Senior management", "image": "/executive.jpg" },
      { "name": "Management Team", "href": "/management", "description": "Department heads", "image": "/management.jpg" }
    ] },
  { "name": "Financials", "href": "#financials", "icon": "TrendingUp",
    "dropdown": [
      { "name": "Financial Results 2024", "href": "/financials-2024", "description": "Annual report", "image": "/2024.png" },
      { "name": "Financial Results 2023", "href": "/financials-2023", "description": "Previous year", "image": "/2023.png" }
    ] },
  { "name": "Pensions", "href": "/pensions", "icon": "Scroll" },
  { "name": "Contact Us", "href": "/contact", "icon": "Phone" }
]"##;

/// Parse [`SITE_JSON`] into a validated menu.
pub fn site_menu() -> Result<NavMenu, Box<dyn std::error::Error>> {
    let items: Vec<NavItem> = serde_json::from_str(SITE_JSON)?;
    Ok(NavMenu::new(items)?)
}

/// The same menu built in code.
pub fn site_menu_in_code() -> NavMenu {
    let e = DropdownEntry::new;
    NavMenu::new(vec![
        NavItem::link("Properties", "#properties", Icon::Building).with_dropdown([
            e("Office", "/office", "Commercial office spaces", "/office.jpg"),
            e(
                "Residential",
                "/residential",
                "Homes and residential developments",
                "/residential.jpg",
            ),
        ]),
        NavItem::link("Pensions", "/pensions", Icon::Scroll),
        NavItem::link("Contact Us", "/contact", Icon::Phone),
    ])
    .expect("static menu is valid")
}

/// Install a `tracing` subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Navigator that prints and records every call.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    /// Path of the page being shown.
    pub path: String,
    /// Sections present on the current page.
    pub sections: Vec<String>,
    /// Every call, in order.
    pub log: Vec<String>,
}

impl ConsoleNavigator {
    /// The home page with its usual sections.
    pub fn home() -> Self {
        Self {
            path: "/".into(),
            sections: ["#properties", "#people", "#financials", "#contact"]
                .map(String::from)
                .to_vec(),
            log: Vec::new(),
        }
    }

    /// A sub-page without sections.
    pub fn at(path: &str) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    fn record(&mut self, line: String) {
        println!("  navigator: {line}");
        self.log.push(line);
    }
}

impl Navigator for ConsoleNavigator {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate_to(&mut self, path: &str) {
        self.record(format!("navigate_to({path})"));
        self.path = path.into();
        self.sections.clear();
    }

    fn scroll_to_element(&mut self, selector: &str) -> bool {
        let found = self.sections.iter().any(|s| s == selector);
        self.record(format!("scroll_to_element({selector}) -> {found}"));
        found
    }
}

/// In-memory theme switch.
#[derive(Debug, Default)]
pub struct ConsoleTheme {
    /// Whether the dark theme is on.
    pub dark: bool,
}

impl ThemeProvider for ConsoleTheme {
    fn is_dark_mode(&self) -> bool {
        self.dark
    }

    fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        println!("  theme: dark={}", self.dark);
    }
}

/// Listener registry that prints changes.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    /// Listeners currently attached.
    pub listeners: Listeners,
}

impl EventSurface for ConsoleSurface {
    fn add_listeners(&mut self, listeners: Listeners) {
        self.listeners |= listeners;
        println!("  surface: +{listeners:?}");
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        self.listeners.remove(listeners);
        println!("  surface: -{listeners:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_and_code_tables_agree_on_shared_items() {
        let json = site_menu().unwrap();
        let code = site_menu_in_code();
        assert_eq!(json.len(), 5);
        for item in code.items() {
            let i = json.position(&item.name).unwrap();
            assert_eq!(json.get(i).unwrap().href, item.href);
            assert_eq!(json.get(i).unwrap().has_dropdown(), item.has_dropdown());
        }
    }
}
