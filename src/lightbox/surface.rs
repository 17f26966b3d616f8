// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port.
//!
//! This module defines the [`PresentationSurface`] trait the host page
//! implements so the lightbox can drive its three observable side effects:
//! the displayed image, the overlay's visibility, and the document-level
//! scroll lock. The session pushes the full surface state after every
//! transition; implementations only need to apply, not interpret.

/// Port through which the lightbox drives the host's presentation.
///
/// In a browser-backed host the implementation writes to the overlay
/// element, its `<img>` child, and the document body's overflow style. In
/// tests, [`RecordingSurface`] captures the same calls for assertions.
pub trait PresentationSurface {
    /// Displays the image identified by `source` with the given alt text.
    fn set_displayed_image(&mut self, source: &str, alt_text: &str);

    /// Shows or hides the lightbox overlay.
    fn set_visible(&mut self, visible: bool);

    /// Engages or releases the document scroll lock.
    ///
    /// The lock is process-wide state owned by the host document; the
    /// session guarantees it is true exactly while the lightbox is open
    /// and never leaks true after close.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// In-memory surface that records the state it was driven to.
///
/// Useful for unit tests, benches, and headless hosts.
///
/// # Example
///
/// ```
/// use sitebox::lightbox::{PresentationSurface, RecordingSurface};
///
/// let mut surface = RecordingSurface::new();
/// surface.set_displayed_image("a.jpg", "First");
/// surface.set_visible(true);
///
/// assert_eq!(surface.displayed_source(), Some("a.jpg"));
/// assert!(surface.is_visible());
/// assert!(!surface.is_scroll_locked());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    displayed: Option<(String, String)>,
    visible: bool,
    scroll_locked: bool,
    display_updates: usize,
}

impl RecordingSurface {
    /// Creates a surface with nothing displayed, hidden, and unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the source of the last displayed image, if any.
    #[must_use]
    pub fn displayed_source(&self) -> Option<&str> {
        self.displayed.as_ref().map(|(source, _)| source.as_str())
    }

    /// Returns the alt text of the last displayed image, if any.
    #[must_use]
    pub fn displayed_alt_text(&self) -> Option<&str> {
        self.displayed.as_ref().map(|(_, alt)| alt.as_str())
    }

    /// Returns whether the overlay is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether the scroll lock is currently engaged.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Returns how many display updates have been applied.
    #[must_use]
    pub fn display_updates(&self) -> usize {
        self.display_updates
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_displayed_image(&mut self, source: &str, alt_text: &str) {
        self.displayed = Some((source.to_string(), alt_text.to_string()));
        self.display_updates += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_blank() {
        let surface = RecordingSurface::new();
        assert_eq!(surface.displayed_source(), None);
        assert_eq!(surface.displayed_alt_text(), None);
        assert!(!surface.is_visible());
        assert!(!surface.is_scroll_locked());
        assert_eq!(surface.display_updates(), 0);
    }

    #[test]
    fn records_last_displayed_image() {
        let mut surface = RecordingSurface::new();
        surface.set_displayed_image("a.jpg", "First");
        surface.set_displayed_image("b.jpg", "Second");

        assert_eq!(surface.displayed_source(), Some("b.jpg"));
        assert_eq!(surface.displayed_alt_text(), Some("Second"));
        assert_eq!(surface.display_updates(), 2);
    }

    #[test]
    fn records_visibility_and_lock() {
        let mut surface = RecordingSurface::new();
        surface.set_visible(true);
        surface.set_scroll_locked(true);
        assert!(surface.is_visible());
        assert!(surface.is_scroll_locked());

        surface.set_visible(false);
        surface.set_scroll_locked(false);
        assert!(!surface.is_visible());
        assert!(!surface.is_scroll_locked());
    }
}
