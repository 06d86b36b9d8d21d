//! Spin lifecycle: `Idle -> Spinning -> Announcing -> Idle`.
//!
//! The winner is drawn when the spin starts. The animation is then solved
//! backwards from that winner: the wheel always turns `FULL_TURNS` times
//! plus whatever offset puts the winning slice under the pointer, over a
//! fixed duration. Rotation is measured in turns, clockwise, with the
//! pointer at the top (turn 0).

use std::time::{Duration, Instant};

use rand::Rng;
use thiserror::Error;

use super::draw::{Draw, Slot, draw};

/// Whole turns made before the wheel settles
pub const FULL_TURNS: f64 = 5.0;

/// How far inside the winning slice the pointer may stop (fraction of slice)
const LANDING_MARGIN: f64 = 0.15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("no eligible names to spin")]
    NoEligible,
    #[error("the wheel is already busy")]
    Busy,
}

/// An in-flight spin
#[derive(Debug, Clone)]
pub struct Spin {
    winner: Draw,
    started: Instant,
    start_angle: f64,
    travel: f64,
}

#[derive(Debug, Clone)]
pub enum SpinState {
    Idle,
    Spinning(Spin),
    Announcing(Draw),
}

pub struct Wheel {
    state: SpinState,
    duration: Duration,
    /// Resting rotation in turns, in [0, 1)
    rest_angle: f64,
}

impl Wheel {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: SpinState::Idle,
            duration,
            rest_angle: 0.0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SpinState::Idle)
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    /// Winner being announced, if any
    pub fn winner(&self) -> Option<&Draw> {
        match &self.state {
            SpinState::Announcing(draw) => Some(draw),
            _ => None,
        }
    }

    /// Whether the spin trigger should be enabled
    pub fn can_spin(&self, slots: &[Slot]) -> bool {
        self.is_idle() && !slots.is_empty()
    }

    /// Draw a winner and start the animation towards it
    pub fn start_spin<R: Rng + ?Sized>(
        &mut self,
        slots: &[Slot],
        now: Instant,
        rng: &mut R,
    ) -> Result<(), SpinError> {
        if !self.is_idle() {
            return Err(SpinError::Busy);
        }
        let winner = draw(slots, rng).ok_or(SpinError::NoEligible)?;

        let slot_width = 1.0 / slots.len() as f64;
        let offset = rng.random_range(LANDING_MARGIN..(1.0 - LANDING_MARGIN));
        // Wheel position that must end up under the pointer
        let target = (winner.slot as f64 + offset) * slot_width;
        let settle = (-target - self.rest_angle).rem_euclid(1.0);

        self.state = SpinState::Spinning(Spin {
            winner,
            started: now,
            start_angle: self.rest_angle,
            travel: FULL_TURNS + settle,
        });
        Ok(())
    }

    /// Advance the timer. Returns the winner exactly once, on the tick that
    /// ends the spin.
    pub fn tick(&mut self, now: Instant) -> Option<Draw> {
        let SpinState::Spinning(spin) = &self.state else {
            return None;
        };
        if now.saturating_duration_since(spin.started) < self.duration {
            return None;
        }
        let winner = spin.winner.clone();
        self.rest_angle = (spin.start_angle + spin.travel).rem_euclid(1.0);
        self.state = SpinState::Announcing(winner.clone());
        Some(winner)
    }

    /// Close the announcement, returning the winner that was shown
    pub fn dismiss(&mut self) -> Option<Draw> {
        match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Announcing(draw) => Some(draw),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drop any pending spin without announcing it
    pub fn cancel(&mut self) {
        self.state = SpinState::Idle;
    }

    /// Current rotation in turns (not wrapped)
    pub fn angle_at(&self, now: Instant) -> f64 {
        match &self.state {
            SpinState::Spinning(spin) => {
                spin.start_angle + spin.travel * ease_out_cubic(self.progress(now))
            }
            _ => self.rest_angle,
        }
    }

    /// Fraction of the spin completed, 0.0 when not spinning
    pub fn progress(&self, now: Instant) -> f64 {
        match &self.state {
            SpinState::Spinning(spin) => {
                let elapsed = now.saturating_duration_since(spin.started);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Slice currently under the pointer for a wheel of `slot_count` slices
    pub fn pointer_slot(&self, now: Instant, slot_count: usize) -> Option<usize> {
        slot_under_pointer(self.angle_at(now), slot_count)
    }
}

pub fn slot_under_pointer(angle: f64, slot_count: usize) -> Option<usize> {
    if slot_count == 0 {
        return None;
    }
    let position = (-angle).rem_euclid(1.0);
    let slot = (position * slot_count as f64).floor() as usize;
    Some(slot.min(slot_count - 1))
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
