// SPDX-License-Identifier: MPL-2.0
//! Persistence of the last-entered contact identity.
//!
//! The site remembers the visitor's name and email after an accepted
//! submission and prefills the form on the next visit. Browser-local
//! key/value storage becomes a CBOR state file here, and storage failures
//! are reported as optional warning keys rather than errors: a missing or
//! unreadable file just means an empty form, exactly like a blocked
//! `localStorage`.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `SITEBOX_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const IDENTITY_FILE: &str = "identity.cbor";

/// The visitor identity remembered between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactIdentity {
    /// Name as last accepted by the contact form (trimmed).
    #[serde(default)]
    pub name: String,

    /// Email as last accepted by the contact form (trimmed).
    #[serde(default)]
    pub email: String,
}

impl ContactIdentity {
    /// Loads the identity from the default location.
    ///
    /// Returns a tuple of (identity, optional_warning). If loading fails,
    /// returns the default (empty) identity with a warning key the host
    /// can localize and surface, or ignore.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the identity from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default
    ///   path resolution (see [`paths::get_app_data_dir`]).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::identity_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(identity) => (identity, None),
                    Err(_) => (
                        Self::default(),
                        Some("contact-warning-identity-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("contact-warning-identity-read-error".to_string()),
            ),
        }
    }

    /// Saves the identity to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the identity to a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default
    ///   path resolution (see [`paths::get_app_data_dir`]).
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::identity_file_path_with_override(base_dir) else {
            return Some("contact-warning-identity-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("contact-warning-identity-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("contact-warning-identity-write-error".to_string());
                }
                None
            }
            Err(_) => Some("contact-warning-identity-create-error".to_string()),
        }
    }

    /// Returns true if there is nothing to prefill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    /// Returns the full path to the identity file with optional override.
    fn identity_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(IDENTITY_FILE);
            path
        })
    }
}
