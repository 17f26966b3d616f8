// SPDX-License-Identifier: MPL-2.0
//! Input triggers and their mapping onto controller operations.
//!
//! The host delivers already-filtered events (it distinguishes a click on
//! the overlay background from a click on the image or controls, and
//! attaches the item index to gallery-item events). Each trigger resolves
//! to at most one [`Operation`]; no trigger touches controller state
//! directly, so adding a new trigger (a touch swipe, say) is just one more
//! caller of [`Operation::Advance`].

/// Keyboard keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    /// Any other key; always ignored.
    Other,
}

/// One of the four named controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open(usize),
    Close,
    Advance(isize),
}

/// A platform event, translated by the host into lightbox terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Click or tap activating the gallery item at `index`.
    ItemActivated { index: usize },

    /// Key pressed while the gallery item at `index` has input focus.
    /// Only Enter and Space activate the item.
    ItemKeyPressed { index: usize, key: Key },

    /// The dedicated close control.
    CloseControl,

    /// Click on the overlay background (not on the image or controls).
    OverlayClicked,

    /// The "previous" control.
    PrevControl,

    /// The "next" control.
    NextControl,

    /// Document-level key press. Only meaningful while the lightbox is
    /// open; discarded otherwise.
    KeyPressed(Key),
}

impl InputEvent {
    /// Resolves this event to a controller operation, or `None` if the
    /// event carries no meaning in the current open/closed state.
    #[must_use]
    pub fn operation(self, is_open: bool) -> Option<Operation> {
        match self {
            InputEvent::ItemActivated { index } => Some(Operation::Open(index)),
            InputEvent::ItemKeyPressed { index, key } => match key {
                Key::Enter | Key::Space => Some(Operation::Open(index)),
                _ => None,
            },
            InputEvent::CloseControl | InputEvent::OverlayClicked => Some(Operation::Close),
            InputEvent::PrevControl => Some(Operation::Advance(-1)),
            InputEvent::NextControl => Some(Operation::Advance(1)),
            InputEvent::KeyPressed(key) => {
                if !is_open {
                    return None;
                }
                match key {
                    Key::Escape => Some(Operation::Close),
                    Key::ArrowRight => Some(Operation::Advance(1)),
                    Key::ArrowLeft => Some(Operation::Advance(-1)),
                    _ => None,
                }
            }
        }
    }
}
