// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! A gallery is an ordered, read-only sequence of image references
//! enumerated by the host page at load time. The set of items is fixed for
//! the page's lifetime; controllers never add or remove items.

/// A single gallery entry: an opaque image locator plus its alt text.
///
/// The locator is whatever the host uses to address the image (a URL, a
/// path, an asset key); this crate never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    source: String,
    alt_text: String,
}

impl GalleryItem {
    /// Creates a new gallery item.
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Returns the opaque image locator.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the alt text (may be empty).
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Ordered, immutable sequence of gallery items, indexed `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySequence {
    items: Vec<GalleryItem>,
}

impl GallerySequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Returns the number of items in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

impl From<Vec<GalleryItem>> for GallerySequence {
    fn from(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<GalleryItem> for GallerySequence {
    fn from_iter<I: IntoIterator<Item = GalleryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
