// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! This module provides the [`LightboxController`], the single owner of the
//! lightbox's open/closed flag and current image index. Every input channel
//! (pointer, keyboard, focus) funnels into the four operations defined
//! here; no event handler mutates state directly. That funneling is what
//! keeps the invariants checkable: tests drive the controller through
//! operation sequences without simulating any platform events.
//!
//! Invariants:
//!
//! - While closed, the current index has no display meaning (it may be
//!   stale); [`LightboxController::current_item`] returns `None` so a view
//!   driven through it can never read the stale value.
//! - While open, `current_index < len()`. Opening an empty gallery is a
//!   no-op, so an open controller always has at least one item.
//! - Navigation always wraps; it never clamps or errors at the ends.

use crate::domain::gallery::{GalleryItem, GallerySequence};

/// Returns the index following `index` in a gallery of `len` items,
/// wrapping past the end.
///
/// # Panics
///
/// Panics in debug builds if `len == 0`; callers gate on emptiness first.
#[must_use]
pub fn next_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "next_index on empty gallery");
    (index + 1) % len
}

/// Returns the index preceding `index` in a gallery of `len` items,
/// wrapping past the start.
///
/// # Panics
///
/// Panics in debug builds if `len == 0`; callers gate on emptiness first.
#[must_use]
pub fn prev_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "prev_index on empty gallery");
    (index + len - 1) % len
}

/// Applies an arbitrary signed offset to `index`, wrapping via true
/// Euclidean modulo. Correct for any offset, including multi-step jumps
/// and magnitudes larger than `len`.
#[must_use]
fn wrap_offset(index: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_offset on empty gallery");
    let len = len as isize;
    // Reduce the offset first so the sum cannot overflow.
    let step = offset.rem_euclid(len);
    ((index as isize + step).rem_euclid(len)) as usize
}

/// Mediates all transitions of the lightbox state.
///
/// The controller reads an immutable [`GallerySequence`] supplied at
/// construction and exposes exactly four operations ([`open`], [`close`],
/// [`advance`]) plus pure observers. Side effects (displayed image,
/// visibility, scroll lock) are derived from the post-transition state by
/// [`super::session::LightboxSession`], never interleaved with the
/// transition itself.
///
/// [`open`]: LightboxController::open
/// [`close`]: LightboxController::close
/// [`advance`]: LightboxController::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxController {
    items: GallerySequence,
    is_open: bool,
    current_index: usize,
}

impl LightboxController {
    /// Creates a closed controller over the given gallery.
    #[must_use]
    pub fn new(items: GallerySequence) -> Self {
        Self {
            items,
            is_open: false,
            current_index: 0,
        }
    }

    /// Opens the lightbox at `index`.
    ///
    /// On an empty gallery this is a no-op: there is nothing to show, and
    /// that is not an error. Passing an index outside `0..len()` is a
    /// contract violation at the call site (indices must come from
    /// enumerating the gallery); it asserts in debug builds and degrades
    /// to a no-op in release builds, never corrupting state.
    pub fn open(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        debug_assert!(
            index < self.items.len(),
            "open({index}) out of range for gallery of {}",
            self.items.len()
        );
        if index >= self.items.len() {
            return;
        }
        self.is_open = true;
        self.current_index = index;
    }

    /// Closes the lightbox.
    ///
    /// Idempotent: closing an already-closed controller has no observable
    /// effect. The current index is left as-is (it is stale and carries no
    /// display meaning while closed).
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Moves the current index by `offset`, wrapping in either direction.
    ///
    /// A no-op while closed; offsets are only meaningful while viewing.
    /// `offset` is typically `+1` or `-1` but any integer wraps correctly.
    pub fn advance(&mut self, offset: isize) {
        if !self.is_open {
            return;
        }
        self.current_index = wrap_offset(self.current_index, offset, self.items.len());
    }

    /// Returns whether the lightbox is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the current index.
    ///
    /// While closed the value is stale and must not drive a view; prefer
    /// [`LightboxController::current_item`], which is `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the item being viewed, or `None` while closed.
    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem> {
        if self.is_open {
            self.items.get(self.current_index)
        } else {
            None
        }
    }

    /// Returns the gallery the controller navigates.
    #[must_use]
    pub fn items(&self) -> &GallerySequence {
        &self.items
    }

    /// Returns the number of items in the gallery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the gallery is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GallerySequence {
        (0..n)
            .map(|i| GalleryItem::new(format!("img-{i}.jpg"), format!("Image {i}")))
            .collect()
    }

    #[test]
    fn new_controller_starts_closed() {
        let ctrl = LightboxController::new(gallery(3));
        assert!(!ctrl.is_open());
        assert_eq!(ctrl.current_item(), None);
    }

    #[test]
    fn open_sets_index_and_opens() {
        let mut ctrl = LightboxController::new(gallery(4));
        for i in 0..4 {
            ctrl.open(i);
            assert!(ctrl.is_open());
            assert_eq!(ctrl.current_index(), i);
        }
    }

    #[test]
    fn open_on_empty_gallery_is_noop() {
        let mut ctrl = LightboxController::new(gallery(0));
        ctrl.open(0);
        assert!(!ctrl.is_open());
        ctrl.open(7);
        assert!(!ctrl.is_open());
        assert_eq!(ctrl.current_item(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut ctrl = LightboxController::new(gallery(3));
        ctrl.open(1);
        ctrl.close();
        let after_one = ctrl.clone();
        ctrl.close();
        assert_eq!(ctrl, after_one);
        assert!(!ctrl.is_open());
    }

    #[test]
    fn advance_while_closed_is_noop() {
        let mut ctrl = LightboxController::new(gallery(3));
        ctrl.advance(1);
        assert!(!ctrl.is_open());
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn advance_wraps_forward_past_end() {
        let mut ctrl = LightboxController::new(gallery(3));
        ctrl.open(2);
        ctrl.advance(1);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn advance_wraps_backward_past_start() {
        let mut ctrl = LightboxController::new(gallery(2));
        ctrl.open(1);
        ctrl.advance(-1);
        assert_eq!(ctrl.current_index(), 0);
        ctrl.advance(-1);
        assert_eq!(ctrl.current_index(), 1); // wraps to last
    }

    #[test]
    fn advance_full_cycle_returns_to_start() {
        for n in 1..6 {
            let mut ctrl = LightboxController::new(gallery(n));
            ctrl.open(n / 2);
            let start = ctrl.current_index();
            for _ in 0..n {
                ctrl.advance(1);
            }
            assert_eq!(ctrl.current_index(), start, "cycle law failed for n={n}");
        }
    }

    #[test]
    fn advance_is_inverted_by_opposite_step() {
        for n in 1..6 {
            for i in 0..n {
                let mut ctrl = LightboxController::new(gallery(n));
                ctrl.open(i);
                ctrl.advance(-1);
                ctrl.advance(1);
                assert_eq!(ctrl.current_index(), i);
                ctrl.advance(1);
                ctrl.advance(-1);
                assert_eq!(ctrl.current_index(), i);
            }
        }
    }

    #[test]
    fn advance_handles_large_offsets() {
        let mut ctrl = LightboxController::new(gallery(5));
        ctrl.open(3);
        ctrl.advance(12); // 3 + 12 = 15 ≡ 0 (mod 5)
        assert_eq!(ctrl.current_index(), 0);
        ctrl.advance(-7); // 0 - 7 = -7 ≡ 3 (mod 5)
        assert_eq!(ctrl.current_index(), 3);
        ctrl.advance(isize::MIN);
        assert!(ctrl.current_index() < 5);
    }

    #[test]
    fn current_item_tracks_navigation() {
        let mut ctrl = LightboxController::new(gallery(3));
        ctrl.open(2);
        assert_eq!(ctrl.current_item().map(GalleryItem::source), Some("img-2.jpg"));
        ctrl.advance(1);
        assert_eq!(ctrl.current_item().map(GalleryItem::source), Some("img-0.jpg"));
        ctrl.advance(-1);
        assert_eq!(ctrl.current_item().map(GalleryItem::source), Some("img-2.jpg"));
        ctrl.close();
        assert_eq!(ctrl.current_item(), None);
    }

    #[test]
    fn reopen_after_close_shows_requested_index() {
        let mut ctrl = LightboxController::new(gallery(4));
        ctrl.open(3);
        ctrl.close();
        ctrl.open(1);
        assert!(ctrl.is_open());
        assert_eq!(ctrl.current_index(), 1);
    }

    #[test]
    fn next_and_prev_index_wrap() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn prev_then_next_restores_index() {
        for len in 1..8 {
            for i in 0..len {
                assert_eq!(next_index(prev_index(i, len), len), i);
                assert_eq!(prev_index(next_index(i, len), len), i);
            }
        }
    }

    // Deterministic pseudo-random operation sequences. After every single
    // operation the controller must satisfy: open implies index in range,
    // and an empty gallery is never open.
    #[test]
    fn random_operation_sequences_preserve_invariants() {
        let mut seed: u64 = 0x5DEECE66D;
        let mut rand = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for n in [0usize, 1, 2, 3, 7] {
            let mut ctrl = LightboxController::new(gallery(n));
            for _ in 0..2000 {
                match rand() % 3 {
                    0 => {
                        // Valid index when possible; open() tolerates any
                        // argument on an empty gallery.
                        let index = if n == 0 { rand() % 5 } else { rand() % n };
                        ctrl.open(index);
                    }
                    1 => ctrl.close(),
                    _ => {
                        let offset = (rand() % 21) as isize - 10;
                        ctrl.advance(offset);
                    }
                }

                if n == 0 {
                    assert!(!ctrl.is_open());
                }
                if ctrl.is_open() {
                    assert!(ctrl.current_index() < n);
                    assert!(ctrl.current_item().is_some());
                } else {
                    assert!(ctrl.current_item().is_none());
                }
            }
        }
    }
}
