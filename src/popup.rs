//! Timed popup messages
//!
//! A popup shows a label for a fixed duration. Showing a new label replaces
//! the visible one and restarts the timer.

use core::fmt;

use embassy_time::{Duration, Instant};

/// Day caption shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    /// Shown before the first cycle starts
    PressStart,
    /// "Day N" caption of a day/night cycle
    Day(u32),
    /// "Day: N" caption of the day clock
    Counter(u32),
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::PressStart => f.write_str("Press Start"),
            DayLabel::Day(day) => write!(f, "Day {day}"),
            DayLabel::Counter(day) => write!(f, "Day: {day}"),
        }
    }
}

/// Visibility change reported by a [`Popup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupChange {
    Shown(DayLabel),
    /// A visible popup was replaced before it expired
    Replaced(DayLabel),
    Hidden(DayLabel),
}

/// Label that hides itself after a fixed duration
#[derive(Debug, Clone)]
pub struct Popup {
    duration: Duration,
    shown: Option<(DayLabel, Instant)>,
}

impl Popup {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown: None,
        }
    }

    /// Show `label` from `now`, replacing any visible popup
    pub fn show(&mut self, now: Instant, label: DayLabel) -> PopupChange {
        let replaced = self.shown.replace((label, now)).is_some();
        if replaced {
            PopupChange::Replaced(label)
        } else {
            PopupChange::Shown(label)
        }
    }

    /// Currently visible label
    pub fn visible(&self) -> Option<DayLabel> {
        self.shown.map(|(label, _)| label)
    }

    /// Expire the popup once its duration has elapsed
    ///
    /// Reports `Hidden` exactly once per shown label.
    pub fn tick(&mut self, now: Instant) -> Option<PopupChange> {
        let (label, shown_at) = self.shown?;
        if now.saturating_duration_since(shown_at) < self.duration {
            return None;
        }

        self.shown = None;
        Some(PopupChange::Hidden(label))
    }
}
