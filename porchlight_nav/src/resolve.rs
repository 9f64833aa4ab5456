// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link resolution: decide whether a link scrolls in place or navigates.
//!
//! ## Rules
//!
//! - The contact link scrolls to the contact section on the home page and
//!   navigates to the contact page everywhere else.
//! - `#anchor` links scroll on the home page. Elsewhere they navigate to the
//!   home page with the anchor appended (`/#anchor`), since the sections only
//!   exist there.
//! - Anything else is a full navigation.
//!
//! ```
//! use porchlight_nav::config::NavConfig;
//! use porchlight_nav::resolve::{Resolution, resolve_href};
//!
//! let c = NavConfig::default();
//! assert_eq!(resolve_href("#properties", "/", &c), Resolution::ScrollTo("#properties".into()));
//! assert_eq!(resolve_href("#properties", "/pensions", &c), Resolution::Navigate("/#properties".into()));
//! assert_eq!(resolve_href("/contact", "/", &c), Resolution::ScrollTo("#contact".into()));
//! assert_eq!(resolve_href("/contact", "/residential", &c), Resolution::Navigate("/contact".into()));
//! ```

use alloc::format;
use alloc::string::String;

use crate::config::NavConfig;
use crate::host::Navigator;

/// What following a link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Smooth-scroll to the element matching this selector.
    ScrollTo(String),
    /// Full navigation to this path.
    Navigate(String),
}

/// Classify `href` given the page currently shown.
pub fn resolve_href(href: &str, current_path: &str, config: &NavConfig) -> Resolution {
    let on_home = config.is_home(current_path);
    if href == config.contact_href {
        if on_home {
            Resolution::ScrollTo(config.contact_anchor.clone())
        } else {
            Resolution::Navigate(href.into())
        }
    } else if href.starts_with('#') {
        if on_home {
            Resolution::ScrollTo(href.into())
        } else {
            Resolution::Navigate(format!("/{href}"))
        }
    } else {
        Resolution::Navigate(href.into())
    }
}

/// Carry out a resolution against a navigator.
///
/// A scroll target that does not exist is silently skipped.
pub fn apply<N: Navigator + ?Sized>(navigator: &mut N, resolution: &Resolution) {
    match resolution {
        Resolution::ScrollTo(selector) => {
            if !navigator.scroll_to_element(selector) {
                tracing::trace!(%selector, "scroll target not present; ignoring");
            }
        }
        Resolution::Navigate(path) => {
            tracing::debug!(%path, "navigating");
            navigator.navigate_to(path);
        }
    }
}

/// Follow a footer link.
///
/// Footer anchors (privacy, terms, and the like) always scroll in place, with no
/// home-page check; everything else navigates.
pub fn follow_footer_link<N: Navigator + ?Sized>(navigator: &mut N, href: &str) {
    let resolution = if href.starts_with('#') {
        Resolution::ScrollTo(href.into())
    } else {
        Resolution::Navigate(href.into())
    };
    apply(navigator, &resolution);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        path: String,
        sections: Vec<&'static str>,
        calls: Vec<String>,
    }

    impl Navigator for Recorder {
        fn current_path(&self) -> &str {
            &self.path
        }
        fn navigate_to(&mut self, path: &str) {
            self.calls.push(format!("navigate {path}"));
        }
        fn scroll_to_element(&mut self, selector: &str) -> bool {
            self.calls.push(format!("scroll {selector}"));
            self.sections.iter().any(|s| *s == selector)
        }
    }

    #[test]
    fn anchors_scroll_on_any_home_path() {
        let c = NavConfig::default();
        for home in ["/", "/index.html"] {
            assert_eq!(
                resolve_href("#people", home, &c),
                Resolution::ScrollTo("#people".to_string())
            );
        }
    }

    #[test]
    fn contact_navigates_from_sub_pages() {
        let c = NavConfig::default();
        assert_eq!(
            resolve_href("/contact", "/pensions", &c),
            Resolution::Navigate("/contact".to_string())
        );
        assert_eq!(
            resolve_href("/contact", "/index.html", &c),
            Resolution::ScrollTo("#contact".to_string())
        );
    }

    #[test]
    fn absolute_paths_always_navigate() {
        let c = NavConfig::default();
        assert_eq!(
            resolve_href("/office", "/", &c),
            Resolution::Navigate("/office".to_string())
        );
        assert_eq!(
            resolve_href("/office", "/residential", &c),
            Resolution::Navigate("/office".to_string())
        );
    }

    #[test]
    fn custom_contact_link() {
        let c = NavConfig::default().with_contact("/get-in-touch", "#reach-us");
        assert_eq!(
            resolve_href("/get-in-touch", "/", &c),
            Resolution::ScrollTo("#reach-us".to_string())
        );
        assert_eq!(
            resolve_href("/contact", "/", &c),
            Resolution::Navigate("/contact".to_string())
        );
    }

    #[test]
    fn footer_anchors_scroll_in_place_even_off_home() {
        let mut nav = Recorder {
            path: "/pensions".into(),
            ..Default::default()
        };
        follow_footer_link(&mut nav, "#privacy");
        follow_footer_link(&mut nav, "/financials-2024");
        assert_eq!(nav.calls, ["scroll #privacy", "navigate /financials-2024"]);
    }

    #[test]
    fn missing_scroll_target_is_a_no_op() {
        let mut nav = Recorder {
            path: "/".into(),
            sections: alloc::vec!["#properties"],
            ..Default::default()
        };
        apply(&mut nav, &Resolution::ScrollTo("#missing".into()));
        apply(&mut nav, &Resolution::ScrollTo("#properties".into()));
        assert_eq!(nav.calls, ["scroll #missing", "scroll #properties"]);
    }
}
