// SPDX-License-Identifier: MPL-2.0
//! `sitebox` packages the interaction behaviors of a static multi-page
//! site as platform-free, unit-testable controllers.
//!
//! The centerpiece is the gallery [`lightbox`]: a modal image viewer with
//! wraparound navigation driven by pointer, keyboard, and focus input.
//! Around it sit the site's smaller behaviors (navigation menu, hero
//! slider, contact form, collapsible rows, load-more), each a state
//! struct with named transitions. The host page owns the DOM, timers,
//! and event wiring; this crate owns state and transitions.

#![doc(html_root_url = "https://docs.rs/sitebox/0.1.0")]

pub mod activity;
pub mod blog;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod nav;
pub mod paths;
pub mod services;
pub mod slider;
