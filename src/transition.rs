//! Timed transitions between two states
//!
//! A [`TransitionSpec`] samples the interpolated state for a given elapsed
//! time. It keeps no counters: the caller owns the elapsed time and may
//! sample the same point any number of times.

use core::fmt;

use embassy_time::Duration;

use crate::logging::trace;
use crate::math::{lerp, progress, smoothstep};

/// Values that can be blended between two endpoints
pub trait Interpolate: Clone {
    /// Blend towards `end` by `t` (0.0 = `self`, 1.0 = `end`)
    #[must_use]
    fn interpolate(&self, end: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        lerp(*self, *end, t)
    }
}

/// Shaping curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
}

impl Easing {
    /// Map linear progress to eased progress
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => smoothstep(t),
        }
    }
}

/// Error returned when a transition is given a zero duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDuration;

impl fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("transition duration must be greater than zero")
    }
}

impl core::error::Error for InvalidDuration {}

/// A state sampled from a transition
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<S> {
    pub state: S,
    /// Set once the transition reached its end state
    pub done: bool,
}

/// Immutable description of a transition from `start` to `end`
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSpec<S> {
    start: S,
    end: S,
    duration: Duration,
    easing: Easing,
}

impl<S: Interpolate> TransitionSpec<S> {
    /// Create a linear transition
    ///
    /// Fails with [`InvalidDuration`] when `duration` is zero.
    pub fn new(start: S, end: S, duration: Duration) -> Result<Self, InvalidDuration> {
        if duration.as_ticks() == 0 {
            trace!("[TransitionSpec.new] rejected zero duration");
            return Err(InvalidDuration);
        }

        Ok(Self {
            start,
            end,
            duration,
            easing: Easing::Linear,
        })
    }

    /// Use a different easing curve
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn start(&self) -> &S {
        &self.start
    }

    pub const fn end(&self) -> &S {
        &self.end
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress `clamp(elapsed / duration, 0, 1)`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        progress(elapsed, self.duration)
    }

    /// Check if the transition has reached its end at `elapsed`
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Sample the transition at `elapsed` time since it began
    ///
    /// Endpoints are returned as exact copies: `start` at zero elapsed time
    /// and `end` from `duration` on.
    pub fn advance(&self, elapsed: Duration) -> Sample<S> {
        if self.is_done(elapsed) {
            return Sample {
                state: self.end.clone(),
                done: true,
            };
        }
        if elapsed.as_ticks() == 0 {
            return Sample {
                state: self.start.clone(),
                done: false,
            };
        }

        let t = self.easing.apply(self.progress(elapsed));
        Sample {
            state: self.start.interpolate(&self.end, t),
            done: false,
        }
    }
}
