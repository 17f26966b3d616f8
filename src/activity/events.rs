// SPDX-License-Identifier: MPL-2.0
//! Interaction event types.
//!
//! Events are serde-serializable so a host can export the log alongside a
//! bug report.

use serde::{Deserialize, Serialize};

/// A user interaction worth reconstructing after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InteractionEvent {
    // ==========================================================================
    // Lightbox
    // ==========================================================================
    /// The lightbox was opened at the given gallery index.
    LightboxOpened {
        /// Index of the item that was opened.
        index: usize,
    },

    /// The lightbox was closed (close control, overlay click, or Escape).
    LightboxClosed,

    /// Navigated to the next image.
    NavigateNext,

    /// Navigated to the previous image.
    NavigatePrevious,

    // ==========================================================================
    // Excluded-component collaborators
    // ==========================================================================
    /// The navigation menu was toggled.
    MenuToggled {
        /// Resulting expanded state.
        expanded: bool,
    },

    /// The hero slider advanced to a new slide.
    SlideAdvanced {
        /// Index of the slide now active.
        index: usize,
    },

    /// The contact form was submitted.
    ContactSubmitted {
        /// Whether the submission passed validation.
        accepted: bool,
    },

    /// A service table row was toggled.
    RowToggled {
        /// Index of the summary row.
        index: usize,
        /// Resulting expanded state of its detail row.
        expanded: bool,
    },

    /// Hidden blog posts were revealed via the load-more control.
    PostsRevealed {
        /// Number of posts revealed.
        count: usize,
    },
}
