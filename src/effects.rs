//! Decorative effects: the celebration after a win and the Christmas Eve
//! snowfall.
//!
//! Effects are plain values owned by the app. Each one carries its own
//! expiry, and clearing an effect that is already gone is a no-op.

use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};

/// How long fireworks stay on screen after a winner is announced
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started: Instant,
}

impl Celebration {
    /// Fraction of the celebration elapsed, in [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / CELEBRATION_DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= CELEBRATION_DURATION
    }
}

#[derive(Debug, Clone)]
pub struct Effects {
    enabled: bool,
    snow: bool,
    celebration: Option<Celebration>,
}

impl Effects {
    pub fn new(enabled: bool, today: NaiveDate) -> Self {
        Self {
            enabled,
            snow: enabled && is_christmas_eve(today),
            celebration: None,
        }
    }

    /// Start (or restart) the celebration
    pub fn celebrate(&mut self, now: Instant) {
        if self.enabled {
            self.celebration = Some(Celebration { started: now });
        }
    }

    /// Remove the celebration if it is still showing. Returns whether
    /// anything was removed.
    pub fn clear_celebration(&mut self) -> bool {
        self.celebration.take().is_some()
    }

    /// Expire the celebration once its time is up
    pub fn tick(&mut self, now: Instant) {
        if self.celebration.is_some_and(|c| c.expired(now)) {
            self.clear_celebration();
        }
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    pub fn snow(&self) -> bool {
        self.snow
    }
}

pub fn is_christmas_eve(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 24
}
