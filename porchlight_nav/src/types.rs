// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu model: items, dropdown entries, icons, and the validated menu.
//!
//! Everything here is static once built. The controller only ever refers to
//! items by their index in a [`NavMenu`], and exposes names to the view layer.

use alloc::string::String;
use alloc::vec::Vec;

/// Symbolic icon reference. Rendering the glyph is up to the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    /// House glyph.
    Home,
    /// Office building glyph.
    Building,
    /// Group of people glyph.
    Users,
    /// Rising chart glyph.
    TrendingUp,
    /// Document scroll glyph.
    Scroll,
    /// Telephone glyph.
    Phone,
    /// Any other host-defined icon.
    Named(String),
}

/// One card inside a dropdown panel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropdownEntry {
    /// Display name.
    pub name: String,
    /// Link target, resolved by [`resolve_href`](crate::resolve::resolve_href).
    pub href: String,
    /// Short blurb shown under the name.
    pub description: String,
    /// Image reference.
    pub image: String,
}

impl DropdownEntry {
    /// Create an entry.
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

/// A top-level navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavItem {
    /// Display name; unique within a [`NavMenu`].
    pub name: String,
    /// Link target used when the item has no dropdown.
    pub href: String,
    /// Symbolic icon.
    pub icon: Icon,
    /// Optional dropdown entries, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dropdown: Option<Vec<DropdownEntry>>,
}

impl NavItem {
    /// A plain link item.
    pub fn link(name: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon,
            dropdown: None,
        }
    }

    /// Attach dropdown entries.
    #[must_use]
    pub fn with_dropdown(mut self, entries: impl IntoIterator<Item = DropdownEntry>) -> Self {
        self.dropdown = Some(entries.into_iter().collect());
        self
    }

    /// Returns true if the item reveals a non-empty panel.
    pub fn has_dropdown(&self) -> bool {
        self.dropdown.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Dropdown entries, or an empty slice.
    pub fn entries(&self) -> &[DropdownEntry] {
        self.dropdown.as_deref().unwrap_or(&[])
    }
}

/// Errors raised while assembling a [`NavMenu`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// Two items share a name.
    #[error("duplicate navigation item `{0}`")]
    DuplicateItem(String),
    /// An item has an empty name.
    #[error("navigation item at position {0} has an empty name")]
    EmptyName(usize),
}

/// An ordered, validated set of navigation items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    items: Vec<NavItem>,
}

impl NavMenu {
    /// Validate and wrap `items`.
    ///
    /// ```
    /// use porchlight_nav::types::{Icon, MenuError, NavItem, NavMenu};
    ///
    /// let dup = NavMenu::new(vec![
    ///     NavItem::link("Pensions", "/pensions", Icon::Scroll),
    ///     NavItem::link("Pensions", "/pensions-2", Icon::Scroll),
    /// ]);
    /// assert_eq!(dup, Err(MenuError::DuplicateItem("Pensions".into())));
    /// ```
    pub fn new(items: Vec<NavItem>) -> Result<Self, MenuError> {
        for (i, item) in items.iter().enumerate() {
            if item.name.is_empty() {
                return Err(MenuError::EmptyName(i));
            }
            if items[..i].iter().any(|other| other.name == item.name) {
                return Err(MenuError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Items in display order.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    /// Index of the item called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn entry(name: &str) -> DropdownEntry {
        DropdownEntry::new(name, "/x", "", "/x.jpg")
    }

    #[test]
    fn empty_dropdown_is_not_a_dropdown() {
        let plain = NavItem::link("Pensions", "/pensions", Icon::Scroll);
        let empty = NavItem::link("Empty", "#empty", Icon::Home).with_dropdown([]);
        let full = NavItem::link("Properties", "#properties", Icon::Building)
            .with_dropdown([entry("Office"), entry("Residential")]);
        assert!(!plain.has_dropdown());
        assert!(!empty.has_dropdown());
        assert!(full.has_dropdown());
        assert_eq!(full.entries().len(), 2);
        assert!(plain.entries().is_empty());
    }

    #[test]
    fn menu_rejects_empty_names() {
        let err = NavMenu::new(vec![
            NavItem::link("Home", "/", Icon::Home),
            NavItem::link("", "/nowhere", Icon::Home),
        ]);
        assert_eq!(err, Err(MenuError::EmptyName(1)));
    }

    #[test]
    fn menu_lookup_by_name() {
        let menu = NavMenu::new(vec![
            NavItem::link("Pensions", "/pensions", Icon::Scroll),
            NavItem::link("Contact Us", "/contact", Icon::Phone),
        ])
        .unwrap();
        assert_eq!(menu.position("Contact Us"), Some(1));
        assert_eq!(menu.position("Careers"), None);
        assert_eq!(menu.get(0).map(|i| i.href.as_str()), Some("/pensions"));
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn error_messages_name_the_item() {
        let msg = alloc::format!("{}", MenuError::DuplicateItem("People".into()));
        assert_eq!(msg, "duplicate navigation item `People`");
    }
}
