// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the interaction controllers.

pub mod gallery;

pub use gallery::{GalleryItem, GallerySequence};
