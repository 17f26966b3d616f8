// SPDX-License-Identifier: MPL-2.0
//! Responsive navigation menu state and active-link resolution.
//!
//! One state bit: whether the collapsed menu is expanded. The host maps
//! the bit onto its `aria-expanded` attribute and open/closed styling.

/// Expanded/collapsed state of the responsive navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    /// Creates a collapsed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the expanded state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Sets the expanded state directly.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Returns whether the menu is expanded.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }
}

/// Resolves which of `hrefs` is the active navigation link for the page at
/// `current_path`.
///
/// Matches the final path segment against each href; an empty final
/// segment (a path ending in `/`) falls back to `index.html`, mirroring
/// how the site treats its directory index.
#[must_use]
pub fn active_link<'a>(current_path: &str, hrefs: &[&'a str]) -> Option<&'a str> {
    let name = current_path.rsplit('/').next().unwrap_or("");
    let name = if name.is_empty() { "index.html" } else { name };
    hrefs.iter().copied().find(|href| *href == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_collapsed() {
        assert!(!NavMenu::new().is_expanded());
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_expanded());
        assert!(!menu.toggle());
        assert!(!menu.is_expanded());
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.toggle();
        assert_eq!(menu, NavMenu::new());
    }

    #[test]
    fn set_expanded_overrides_state() {
        let mut menu = NavMenu::new();
        menu.set_expanded(true);
        assert!(menu.is_expanded());
        menu.set_expanded(true);
        assert!(menu.is_expanded());
    }

    #[test]
    fn active_link_matches_final_segment() {
        let hrefs = ["index.html", "about.html", "gallery.html"];
        assert_eq!(active_link("/site/about.html", &hrefs), Some("about.html"));
        assert_eq!(active_link("gallery.html", &hrefs), Some("gallery.html"));
    }

    #[test]
    fn empty_segment_falls_back_to_index() {
        let hrefs = ["index.html", "about.html"];
        assert_eq!(active_link("/site/", &hrefs), Some("index.html"));
        assert_eq!(active_link("", &hrefs), Some("index.html"));
    }

    #[test]
    fn unknown_page_has_no_active_link() {
        let hrefs = ["index.html", "about.html"];
        assert_eq!(active_link("/site/missing.html", &hrefs), None);
    }
}
