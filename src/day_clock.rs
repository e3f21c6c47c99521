//! Continuous day clock
//!
//! Rotates the sun around its local X axis once per in-game day and counts
//! days. Each new day shows a "Day: N" popup for a few seconds.

use core::mem;

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::logging::trace;
use crate::math::{Quat, Vec3, progress};
use crate::popup::{DayLabel, Popup, PopupChange};
use crate::transition::InvalidDuration;

/// Maximum number of events reported by a single tick
pub const MAX_CLOCK_EVENTS: usize = 4;

pub type ClockEvents = Vec<ClockEvent, MAX_CLOCK_EVENTS>;

/// Configuration for the day clock
#[derive(Debug, Clone)]
pub struct DayClockConfig {
    /// Length of one full day
    pub day_length: Duration,
    /// How long the day caption stays visible
    pub popup: Duration,
    /// Day number shown when the clock starts
    pub first_day: u32,
    /// Sun orientation at the start of each day
    pub sunrise: Quat,
}

impl Default for DayClockConfig {
    fn default() -> Self {
        Self {
            day_length: Duration::from_secs(10 * 60),
            popup: Duration::from_secs(3),
            first_day: 1,
            sunrise: Quat::IDENTITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Started(u32),
    NewDay(u32),
    PopupHidden(u32),
}

/// Output of a single clock tick
#[derive(Debug, Clone)]
pub struct DayClockFrame {
    pub day: u32,
    /// Fraction of the current day that has passed (0.0-1.0)
    pub time_of_day: f32,
    pub sun_rotation: Quat,
    pub popup: Option<DayLabel>,
    pub events: ClockEvents,
}

/// Day counter with a rotating sun
#[derive(Debug, Clone)]
pub struct DayClock {
    config: DayClockConfig,
    active: bool,
    day: u32,
    /// Time elapsed within the current day
    time_in_day: Duration,
    last_tick: Instant,
    popup: Popup,
    pending: ClockEvents,
}

impl DayClock {
    /// Create an inactive clock
    pub fn new(config: DayClockConfig) -> Result<Self, InvalidDuration> {
        if config.day_length.as_ticks() == 0 {
            return Err(InvalidDuration);
        }

        Ok(Self {
            active: false,
            day: config.first_day,
            time_in_day: Duration::from_ticks(0),
            last_tick: Instant::from_ticks(0),
            popup: Popup::new(config.popup),
            pending: ClockEvents::new(),
            config,
        })
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Fraction of the current day that has passed (0.0-1.0)
    pub fn time_of_day(&self) -> f32 {
        progress(self.time_in_day, self.config.day_length)
    }

    /// Sun orientation for the current time of day
    pub fn sun_rotation(&self) -> Quat {
        let angle = 360.0 * self.time_of_day();
        self.config.sunrise * Quat::from_axis_angle(Vec3::RIGHT, angle)
    }

    /// Start the clock at `now`
    ///
    /// Returns false if the clock is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.active {
            trace!("[DayClock.start] already active on day {}", self.day);
            return false;
        }

        self.active = true;
        self.last_tick = now;
        self.show_popup(now);
        self.emit(ClockEvent::Started(self.day));
        trace!("[DayClock.start] day {} cycle is now active", self.day);
        true
    }

    /// Advance the clock to `now`
    pub fn tick(&mut self, now: Instant) -> DayClockFrame {
        if self.active {
            self.advance_time(now);
        }

        if let Some(PopupChange::Hidden(label)) = self.popup.tick(now) {
            trace!("[DayClock.tick] popup '{}' hidden", label);
            self.emit(ClockEvent::PopupHidden(self.day_of(label)));
        }

        DayClockFrame {
            day: self.day,
            time_of_day: self.time_of_day(),
            sun_rotation: self.sun_rotation(),
            popup: self.popup.visible(),
            events: mem::take(&mut self.pending),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn advance_time(&mut self, now: Instant) {
        if now > self.last_tick {
            self.time_in_day += now.duration_since(self.last_tick);
            self.last_tick = now;
        }

        let day_ticks = self.config.day_length.as_ticks();
        let elapsed_ticks = self.time_in_day.as_ticks();
        if elapsed_ticks < day_ticks {
            return;
        }

        let days_passed = (elapsed_ticks / day_ticks).min(u64::from(u32::MAX)) as u32;
        self.time_in_day = Duration::from_ticks(elapsed_ticks % day_ticks);
        self.day = self.day.saturating_add(days_passed);
        self.show_popup(now);
        trace!("[DayClock.tick] day {} has begun", self.day);
        self.emit(ClockEvent::NewDay(self.day));
    }

    /// Show the caption for the current day, replacing a visible one
    fn show_popup(&mut self, now: Instant) {
        let change = self.popup.show(now, DayLabel::Counter(self.day));
        if matches!(change, PopupChange::Replaced(_)) {
            trace!("[DayClock] day {} caption replaced a visible one", self.day);
        }
    }

    fn day_of(&self, label: DayLabel) -> u32 {
        match label {
            DayLabel::Day(day) | DayLabel::Counter(day) => day,
            DayLabel::PressStart => self.day,
        }
    }

    fn emit(&mut self, event: ClockEvent) {
        if self.pending.push(event).is_err() {
            trace!("[DayClock] event queue full, dropped {:?}", event);
        }
    }
}
