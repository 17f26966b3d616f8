// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for user-visible feedback text.
//!
//! This module provides localization using the Fluent localization system.
//! Controllers return stable message keys (see
//! [`crate::contact::FormFeedback::i18n_key`]); the host resolves them
//! here before rendering.
//!
//! # Features
//!
//! - Locale detection from a host override, the config file, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;

pub use fluent::I18n;
