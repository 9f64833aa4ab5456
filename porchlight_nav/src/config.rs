// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.
//!
//! [`NavConfig::default`] matches the stock navigation bar: a 150 ms hover
//! grace period, a 50 unit scroll threshold, a 768 unit mobile breakpoint, and
//! a home page reachable as `/` or `/index.html`.
//!
//! With the `serde` feature the config can be loaded from any serde format.
//! Durations are expressed in milliseconds. When `home_path` is absent, the
//! first entry of `home_paths` is used, as with [`NavConfig::with_home_paths`].

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

/// Tunables and site paths used by [`NavController`](crate::controller::NavController).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavConfig {
    /// Grace period between leaving a trigger and closing its panel.
    #[cfg_attr(feature = "serde", serde(rename = "close_delay_ms", with = "millis"))]
    pub close_delay: Duration,
    /// Vertical offset above which the header counts as scrolled.
    pub scroll_threshold: f64,
    /// Viewport widths below this use the mobile layout.
    pub mobile_breakpoint: f64,
    /// Path the logo navigates to.
    pub home_path: String,
    /// Paths on which in-page anchors exist.
    pub home_paths: Vec<String>,
    /// Link that scrolls to the contact section on the home page.
    pub contact_href: String,
    /// Selector of the contact section.
    pub contact_anchor: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(150),
            scroll_threshold: 50.0,
            mobile_breakpoint: 768.0,
            home_path: "/".into(),
            home_paths: vec!["/".into(), "/index.html".into()],
            contact_href: "/contact".into(),
            contact_anchor: "#contact".into(),
        }
    }
}

impl NavConfig {
    /// Set the hover grace period.
    #[must_use]
    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    /// Set the scroll threshold.
    #[must_use]
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Set the mobile breakpoint.
    #[must_use]
    pub fn with_mobile_breakpoint(mut self, width: f64) -> Self {
        self.mobile_breakpoint = width;
        self
    }

    /// Replace the set of paths treated as the home page.
    ///
    /// The first path also becomes the logo target.
    #[must_use]
    pub fn with_home_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.home_paths = paths.into_iter().map(Into::into).collect();
        if let Some(first) = self.home_paths.first() {
            self.home_path = first.clone();
        }
        self
    }

    /// Set the contact link and the section it scrolls to.
    #[must_use]
    pub fn with_contact(mut self, href: impl Into<String>, anchor: impl Into<String>) -> Self {
        self.contact_href = href.into();
        self.contact_anchor = anchor.into();
        self
    }

    /// Returns true if `path` is one of the home paths.
    pub fn is_home(&self, path: &str) -> bool {
        self.home_paths.iter().any(|p| p == path)
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    pub(super) fn serialize<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Delays are far below u64::MAX milliseconds."
        )]
        let ms = d.as_millis() as u64;
        s.serialize_u64(ms)
    }

    pub(super) fn deserialize<'de, D: serde::Deserializer<'de>>(
        d: D,
    ) -> Result<Duration, D::Error> {
        let ms = <u64 as serde::Deserialize>::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}

/// Wire form of [`NavConfig`]; `home_path` is optional here.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct NavConfigRepr {
    #[serde(rename = "close_delay_ms", with = "millis")]
    close_delay: Duration,
    scroll_threshold: f64,
    mobile_breakpoint: f64,
    home_path: Option<String>,
    home_paths: Vec<String>,
    contact_href: String,
    contact_anchor: String,
}

#[cfg(feature = "serde")]
impl Default for NavConfigRepr {
    fn default() -> Self {
        let c = NavConfig::default();
        Self {
            close_delay: c.close_delay,
            scroll_threshold: c.scroll_threshold,
            mobile_breakpoint: c.mobile_breakpoint,
            home_path: None,
            home_paths: c.home_paths,
            contact_href: c.contact_href,
            contact_anchor: c.contact_anchor,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NavConfig {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let repr = <NavConfigRepr as serde::Deserialize>::deserialize(d)?;
        let home_path = repr
            .home_path
            .or_else(|| repr.home_paths.first().cloned())
            .unwrap_or_else(|| "/".into());
        Ok(Self {
            close_delay: repr.close_delay,
            scroll_threshold: repr.scroll_threshold,
            mobile_breakpoint: repr.mobile_breakpoint,
            home_path,
            home_paths: repr.home_paths,
            contact_href: repr.contact_href,
            contact_anchor: repr.contact_anchor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_navbar() {
        let c = NavConfig::default();
        assert_eq!(c.close_delay, Duration::from_millis(150));
        assert!(c.is_home("/"));
        assert!(c.is_home("/index.html"));
        assert!(!c.is_home("/pensions"));
        assert_eq!(c.contact_href, "/contact");
        assert_eq!(c.contact_anchor, "#contact");
    }

    #[test]
    fn home_paths_override_logo_target() {
        let c = NavConfig::default().with_home_paths(["/en/", "/en/index.html"]);
        assert_eq!(c.home_path, "/en/");
        assert!(c.is_home("/en/index.html"));
        assert!(!c.is_home("/"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_partial_json_with_millisecond_delay() {
        let c: NavConfig =
            serde_json::from_str(r#"{ "close_delay_ms": 300, "scroll_threshold": 80.0 }"#)
                .unwrap();
        assert_eq!(c.close_delay, Duration::from_millis(300));
        assert_eq!(c.scroll_threshold, 80.0);
        assert_eq!(c.mobile_breakpoint, 768.0);
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["close_delay_ms"], 300);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loaded_home_paths_set_logo_target_unless_given() {
        let c: NavConfig = serde_json::from_str(r#"{ "home_paths": ["/en/"] }"#).unwrap();
        assert_eq!(c.home_path, "/en/");
        assert!(c.is_home(&c.home_path));
        assert_eq!(c, NavConfig::default().with_home_paths(["/en/"]));

        let c: NavConfig =
            serde_json::from_str(r#"{ "home_path": "/start", "home_paths": ["/en/"] }"#).unwrap();
        assert_eq!(c.home_path, "/start");

        let c: NavConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, NavConfig::default());
    }
}
