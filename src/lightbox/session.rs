// SPDX-License-Identifier: MPL-2.0
//! Lightbox session: events in, surface updates out.
//!
//! The session is the adapter between the platform and the pure
//! [`LightboxController`]. Dispatch is synchronous and runs to completion
//! before returning, matching the host's cooperative event loop: two rapid
//! triggers are strictly serialized, so no internal locking is needed.
//! After every transition the full surface state (displayed image,
//! visibility, scroll lock) is re-derived from the controller state rather
//! than patched incrementally; the scroll lock is therefore true exactly
//! while the lightbox is open.

use crate::activity::{ActivityLog, InteractionEvent};
use crate::domain::gallery::GallerySequence;
use crate::lightbox::controller::LightboxController;
use crate::lightbox::input::{InputEvent, Operation};
use crate::lightbox::surface::PresentationSurface;

/// Drives a [`PresentationSurface`] from lightbox input events.
#[derive(Debug)]
pub struct LightboxSession<S: PresentationSurface> {
    controller: LightboxController,
    surface: S,
    log: Option<ActivityLog>,
}

impl<S: PresentationSurface> LightboxSession<S> {
    /// Creates a session over the given gallery and surface.
    ///
    /// The surface is immediately synchronized to the initial (closed)
    /// state, so a host that starts with a visible overlay is corrected.
    pub fn new(items: GallerySequence, surface: S) -> Self {
        let mut session = Self {
            controller: LightboxController::new(items),
            surface,
            log: None,
        };
        session.render();
        session
    }

    /// Attaches an activity log; lightbox transitions are recorded into it.
    #[must_use]
    pub fn with_activity_log(mut self, log: ActivityLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Translates one input event into a controller operation, applies it,
    /// and pushes the resulting state to the surface.
    ///
    /// Events that carry no meaning in the current state (a key press
    /// while closed, an unmapped key) are discarded without touching the
    /// surface.
    pub fn dispatch(&mut self, event: InputEvent) {
        let Some(operation) = event.operation(self.controller.is_open()) else {
            return;
        };
        self.apply(operation);
    }

    /// Applies a controller operation directly.
    ///
    /// Hosts with input channels beyond the built-in triggers (touch
    /// swipes, custom shortcuts) call this with their own mapping.
    pub fn apply(&mut self, operation: Operation) {
        let was_open = self.controller.is_open();

        match operation {
            Operation::Open(index) => self.controller.open(index),
            Operation::Close => self.controller.close(),
            Operation::Advance(offset) => self.controller.advance(offset),
        }

        self.record(operation, was_open);
        self.render();
    }

    /// Re-derives the full surface state from the controller state.
    fn render(&mut self) {
        if let Some(item) = self.controller.current_item() {
            self.surface.set_displayed_image(item.source(), item.alt_text());
            self.surface.set_visible(true);
            self.surface.set_scroll_locked(true);
        } else {
            self.surface.set_visible(false);
            self.surface.set_scroll_locked(false);
        }
    }

    fn record(&mut self, operation: Operation, was_open: bool) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        match operation {
            Operation::Open(_) if self.controller.is_open() => {
                log.record(InteractionEvent::LightboxOpened {
                    index: self.controller.current_index(),
                });
            }
            Operation::Close if was_open => log.record(InteractionEvent::LightboxClosed),
            Operation::Advance(offset) if was_open && !self.controller.is_empty() => {
                if offset >= 0 {
                    log.record(InteractionEvent::NavigateNext);
                } else {
                    log.record(InteractionEvent::NavigatePrevious);
                }
            }
            _ => {}
        }
    }

    /// Returns the underlying controller for state inspection.
    #[must_use]
    pub fn controller(&self) -> &LightboxController {
        &self.controller
    }

    /// Returns the driven surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the attached activity log, if any.
    #[must_use]
    pub fn activity_log(&self) -> Option<&ActivityLog> {
        self.log.as_ref()
    }

    /// Consumes the session, returning the surface and activity log.
    #[must_use]
    pub fn into_parts(self) -> (S, Option<ActivityLog>) {
        (self.surface, self.log)
    }
}
