// SPDX-License-Identifier: MPL-2.0
//! Bounded activity log.
//!
//! A ring buffer over [`InteractionEvent`]: when full, recording a new
//! event evicts the oldest. Events are kept in chronological order.

use std::collections::VecDeque;

use crate::activity::events::InteractionEvent;
use crate::config::{
    DEFAULT_ACTIVITY_LOG_CAPACITY, MAX_ACTIVITY_LOG_CAPACITY, MIN_ACTIVITY_LOG_CAPACITY,
};

/// Activity log capacity, guaranteed to be within valid range (10–10 000).
///
/// The newtype enforces validity at construction, so the log itself never
/// has to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity(usize);

impl LogCapacity {
    /// Creates a new capacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_ACTIVITY_LOG_CAPACITY, MAX_ACTIVITY_LOG_CAPACITY))
    }

    /// Returns the raw capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum capacity.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ACTIVITY_LOG_CAPACITY
    }

    /// Returns true if this is the maximum capacity.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ACTIVITY_LOG_CAPACITY
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self(DEFAULT_ACTIVITY_LOG_CAPACITY)
    }
}

/// Memory-bounded log of the most recent interaction events.
///
/// # Example
///
/// ```
/// use sitebox::activity::{ActivityLog, InteractionEvent, LogCapacity};
///
/// let mut log = ActivityLog::new(LogCapacity::default());
/// log.record(InteractionEvent::LightboxOpened { index: 0 });
/// log.record(InteractionEvent::LightboxClosed);
///
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    events: VecDeque<InteractionEvent>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}

impl ActivityLog {
    /// Creates an empty log with the given capacity.
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Records an event, evicting the oldest if at capacity.
    pub fn record(&mut self, event: InteractionEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns an iterator over the events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &InteractionEvent> {
        self.events.iter()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all recorded events. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_to_valid_range() {
        assert_eq!(LogCapacity::new(0).value(), MIN_ACTIVITY_LOG_CAPACITY);
        assert_eq!(LogCapacity::new(1_000_000).value(), MAX_ACTIVITY_LOG_CAPACITY);
        assert_eq!(LogCapacity::new(500).value(), 500);
    }

    #[test]
    fn capacity_default_returns_expected_value() {
        assert_eq!(LogCapacity::default().value(), DEFAULT_ACTIVITY_LOG_CAPACITY);
    }

    #[test]
    fn capacity_boundary_detection() {
        assert!(LogCapacity::new(MIN_ACTIVITY_LOG_CAPACITY).is_min());
        assert!(LogCapacity::new(MAX_ACTIVITY_LOG_CAPACITY).is_max());
        assert!(!LogCapacity::new(500).is_min());
        assert!(!LogCapacity::new(500).is_max());
    }

    #[test]
    fn record_and_iterate_in_order() {
        let mut log = ActivityLog::new(LogCapacity::default());
        log.record(InteractionEvent::LightboxOpened { index: 0 });
        log.record(InteractionEvent::NavigateNext);
        log.record(InteractionEvent::LightboxClosed);

        let events: Vec<_> = log.iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                InteractionEvent::LightboxOpened { index: 0 },
                InteractionEvent::NavigateNext,
                InteractionEvent::LightboxClosed,
            ]
        );
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut log = ActivityLog::new(LogCapacity::new(MIN_ACTIVITY_LOG_CAPACITY));
        for i in 0..MIN_ACTIVITY_LOG_CAPACITY + 3 {
            log.record(InteractionEvent::SlideAdvanced { index: i });
        }

        assert_eq!(log.len(), MIN_ACTIVITY_LOG_CAPACITY);
        let first = log.iter().next().cloned();
        assert_eq!(first, Some(InteractionEvent::SlideAdvanced { index: 3 }));
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut log = ActivityLog::new(LogCapacity::new(100));
        log.record(InteractionEvent::NavigateNext);
        log.record(InteractionEvent::NavigatePrevious);
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 100);
    }
}
