// SPDX-License-Identifier: MPL-2.0
//! Interaction activity tracking.
//!
//! Controllers in this crate have no user-visible failure modes, so when a
//! behavior report does come in ("the lightbox stopped navigating") the
//! most useful artifact is the sequence of interactions that led there.
//! This module provides typed interaction events and a memory-bounded log
//! that keeps the most recent ones.

pub mod events;
pub mod log;

pub use events::InteractionEvent;
pub use log::{ActivityLog, LogCapacity};
