// SPDX-License-Identifier: MPL-2.0
//! Hero slider state.
//!
//! The host owns the timer; this module owns the wrapping slide index and
//! the validated interval. On each tick the host calls
//! [`HeroSlider::advance`] and applies the returned index to its slides.
//! Timing design itself (easing, pause-on-hover) is out of scope.

use crate::config::{DEFAULT_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS, MIN_SLIDE_INTERVAL_MS};
use std::time::Duration;

/// Slide interval in milliseconds, guaranteed to be within valid range
/// (500 ms – 60 s).
///
/// [`SlideInterval::from_attribute`] mirrors the site's handling of the
/// slider's `data-interval` attribute: a missing, unparseable, or zero
/// value falls back to the 5000 ms default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInterval(u64);

impl SlideInterval {
    /// Creates a new interval, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS))
    }

    /// Parses a host attribute value, falling back to the default when the
    /// attribute is absent, unparseable, or zero.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(millis) if millis > 0 => Self::new(millis),
            _ => Self::default(),
        }
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideInterval {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_INTERVAL_MS)
    }
}

/// Auto-advancing hero slider: a fixed number of slides and the index of
/// the one currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlider {
    slide_count: usize,
    current: usize,
    interval: SlideInterval,
}

impl HeroSlider {
    /// Creates a slider over `slide_count` slides, starting at slide 0.
    #[must_use]
    pub fn new(slide_count: usize, interval: SlideInterval) -> Self {
        Self {
            slide_count,
            current: 0,
            interval,
        }
    }

    /// Advances to the next slide, wrapping past the last, and returns the
    /// new index. A slider with no slides stays at 0 and never advances.
    pub fn advance(&mut self) -> usize {
        if self.slide_count > 0 {
            self.current = (self.current + 1) % self.slide_count;
        }
        self.current
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn slide_count(self) -> usize {
        self.slide_count
    }

    /// Returns the tick interval the host timer should use.
    #[must_use]
    pub fn interval(self) -> SlideInterval {
        self.interval
    }
}
