// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox: a modal overlay that displays one enlarged image from
//! a gallery, with wraparound navigation to adjacent images.
//!
//! The module is split along the seam between state and platform:
//!
//! - [`controller`] — the pure state machine (open/closed, current index).
//!   Unit-testable with no platform dependency.
//! - [`surface`] — the [`PresentationSurface`] port the host implements to
//!   receive display, visibility, and scroll-lock updates.
//! - [`input`] — the input triggers (pointer, keyboard, focus) and their
//!   mapping onto the controller's four operations.
//! - [`session`] — the adapter tying the three together: events in,
//!   surface updates out, strictly serialized.

pub mod controller;
pub mod input;
pub mod session;
pub mod surface;

pub use controller::LightboxController;
pub use input::{InputEvent, Key, Operation};
pub use session::LightboxSession;
pub use surface::{PresentationSurface, RecordingSurface};
