// SPDX-License-Identifier: MPL-2.0
//! Blog "load more" reveal.
//!
//! The post list renders an initial page of posts with the rest hidden
//! behind a load-more control. Activating the control reveals everything
//! at once and retires the control; it is a one-shot.

/// Visibility state of a paginated post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostList {
    total: usize,
    visible: usize,
    control_present: bool,
}

impl PostList {
    /// Creates a list of `total` posts with `initially_visible` shown.
    ///
    /// The load-more control is only present when some posts are hidden.
    #[must_use]
    pub fn new(total: usize, initially_visible: usize) -> Self {
        let visible = initially_visible.min(total);
        Self {
            total,
            visible,
            control_present: visible < total,
        }
    }

    /// Reveals all remaining posts and retires the control.
    ///
    /// Returns the number of posts revealed; 0 when the control is
    /// already gone (further activations are no-ops).
    pub fn load_more(&mut self) -> usize {
        if !self.control_present {
            return 0;
        }
        let revealed = self.total - self.visible;
        self.visible = self.total;
        self.control_present = false;
        revealed
    }

    /// Returns how many posts are currently visible.
    #[must_use]
    pub fn visible_count(self) -> usize {
        self.visible
    }

    /// Returns the total number of posts.
    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Returns whether the load-more control is still present.
    #[must_use]
    pub fn has_more(self) -> bool {
        self.control_present
    }
}
