//! Day/night cycle session
//!
//! Drives a directional light through one full cycle per start request:
//!
//! 1. `Dawn` - night to day transition
//! 2. `Popup` - the day caption is visible
//! 3. `Day` - light holds the day settings
//! 4. `Dusk` - day to night transition
//! 5. `Complete`
//!
//! Each phase starts exactly where the previous one ended, so a late tick
//! may cross several phases at once.

use core::mem;

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::light::LightState;
use crate::logging::trace;
use crate::popup::DayLabel;
use crate::transition::{Easing, InvalidDuration, TransitionSpec};

/// Maximum number of events reported by a single tick
pub const MAX_CYCLE_EVENTS: usize = 8;

/// Events reported by one tick
pub type CycleEvents = Vec<CycleEvent, MAX_CYCLE_EVENTS>;

/// Configuration for the day/night cycle
#[derive(Debug, Clone)]
pub struct DayNightConfig {
    /// Light settings at night (start and end of every cycle)
    pub night: LightState,
    /// Light settings during the day
    pub day: LightState,
    /// Duration of each transition (night to day and back)
    pub transition: Duration,
    /// How long the day caption stays visible after dawn
    pub popup: Duration,
    /// How long the light stays in the day state after the popup
    pub day_hold: Duration,
    pub easing: Easing,
}

impl Default for DayNightConfig {
    fn default() -> Self {
        Self {
            night: LightState::night(),
            day: LightState::day(),
            transition: Duration::from_secs(10),
            popup: Duration::from_secs(5),
            day_hold: Duration::from_secs(120),
            easing: Easing::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Waiting for the first start request
    Idle,
    Dawn,
    Popup,
    Day,
    Dusk,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// A running cycle was abandoned by a new start request
    Restarted,
    DayStarted(u32),
    DawnComplete,
    PopupShown,
    PopupHidden,
    DuskStarted,
    CycleComplete,
    Cancelled,
}

/// Output of a single cycle tick
#[derive(Debug, Clone)]
pub struct CycleFrame {
    pub light: LightState,
    pub phase: CyclePhase,
    pub popup_visible: bool,
    pub label: DayLabel,
    pub events: CycleEvents,
}

/// Day/night cycle session
///
/// Owns the day counter and the running transition; the caller drives it
/// by calling [`DayNightCycle::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    config: DayNightConfig,
    phase: CyclePhase,
    /// Time at which the current phase began
    phase_started: Instant,
    transition: Option<TransitionSpec<LightState>>,
    light: LightState,
    day_count: u32,
    label: DayLabel,
    pending: CycleEvents,
}

impl DayNightCycle {
    /// Create an idle cycle showing the night light
    pub fn new(config: DayNightConfig) -> Result<Self, InvalidDuration> {
        if config.transition.as_ticks() == 0 {
            return Err(InvalidDuration);
        }

        Ok(Self {
            light: config.night,
            config,
            phase: CyclePhase::Idle,
            phase_started: Instant::from_ticks(0),
            transition: None,
            day_count: 0,
            label: DayLabel::PressStart,
            pending: CycleEvents::new(),
        })
    }

    pub const fn config(&self) -> &DayNightConfig {
        &self.config
    }

    pub const fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub const fn day_count(&self) -> u32 {
        self.day_count
    }

    pub const fn label(&self) -> DayLabel {
        self.label
    }

    pub const fn light(&self) -> &LightState {
        &self.light
    }

    /// Check if a cycle is in progress
    pub const fn is_running(&self) -> bool {
        !matches!(self.phase, CyclePhase::Idle | CyclePhase::Complete)
    }

    /// Start a new cycle at `now`
    ///
    /// A running cycle is abandoned. The day counter advances and the light
    /// snaps back to the night settings before dawn begins. Several starts
    /// before the next tick report a single `Restarted` and the latest
    /// `DayStarted`.
    pub fn start(&mut self, now: Instant) {
        let queued = self.pending.len();
        self.pending.retain(|event| {
            !matches!(
                event,
                CycleEvent::Restarted | CycleEvent::DayStarted(_) | CycleEvent::Cancelled
            )
        });
        let superseded = self.pending.len() != queued;

        if self.is_running() {
            trace!(
                "[DayNightCycle.start] abandoning cycle in phase {:?}",
                self.phase
            );
            self.close_popup();
        }
        if self.is_running() || superseded {
            self.emit(CycleEvent::Restarted);
        }

        self.day_count = self.day_count.saturating_add(1);
        self.label = DayLabel::Day(self.day_count);
        self.light = self.config.night;
        self.transition = self.transition_between(self.config.night, self.config.day);
        self.phase = CyclePhase::Dawn;
        self.phase_started = now;

        trace!("[DayNightCycle.start] day {} begins", self.day_count);
        self.emit(CycleEvent::DayStarted(self.day_count));
    }

    /// Stop the running cycle, keeping the current light
    pub fn cancel(&mut self) {
        if !self.is_running() {
            return;
        }
        trace!("[DayNightCycle.cancel] cancelled in phase {:?}", self.phase);
        self.close_popup();
        self.transition = None;
        self.phase = CyclePhase::Idle;
        self.emit(CycleEvent::Cancelled);
    }

    /// Advance the cycle to `now`
    pub fn tick(&mut self, now: Instant) -> CycleFrame {
        loop {
            let elapsed = now.saturating_duration_since(self.phase_started);
            match self.phase {
                CyclePhase::Idle | CyclePhase::Complete => break,
                CyclePhase::Dawn => {
                    if !self.sample_transition(elapsed) {
                        break;
                    }
                    self.emit(CycleEvent::DawnComplete);
                    self.emit(CycleEvent::PopupShown);
                    self.enter(CyclePhase::Popup, self.config.transition);
                }
                CyclePhase::Popup => {
                    if elapsed < self.config.popup {
                        break;
                    }
                    self.emit(CycleEvent::PopupHidden);
                    self.enter(CyclePhase::Day, self.config.popup);
                }
                CyclePhase::Day => {
                    if elapsed < self.config.day_hold {
                        break;
                    }
                    self.emit(CycleEvent::DuskStarted);
                    self.transition =
                        self.transition_between(self.config.day, self.config.night);
                    self.enter(CyclePhase::Dusk, self.config.day_hold);
                }
                CyclePhase::Dusk => {
                    if !self.sample_transition(elapsed) {
                        break;
                    }
                    trace!("[DayNightCycle.tick] day {} complete", self.day_count);
                    self.emit(CycleEvent::CycleComplete);
                    self.transition = None;
                    self.phase = CyclePhase::Complete;
                }
            }
        }

        CycleFrame {
            light: self.light,
            phase: self.phase,
            popup_visible: self.phase == CyclePhase::Popup,
            label: self.label,
            events: mem::take(&mut self.pending),
        }
    }

    /// Move to `phase`, which starts `after` the current phase began
    fn enter(&mut self, phase: CyclePhase, after: Duration) {
        self.phase_started += after;
        self.phase = phase;
    }

    /// Sample the running transition into the light
    ///
    /// Returns true once the transition has finished.
    fn sample_transition(&mut self, elapsed: Duration) -> bool {
        let Some(transition) = &self.transition else {
            return true;
        };
        let sample = transition.advance(elapsed);
        self.light = sample.state;
        sample.done
    }

    fn transition_between(
        &self,
        from: LightState,
        to: LightState,
    ) -> Option<TransitionSpec<LightState>> {
        TransitionSpec::new(from, to, self.config.transition)
            .ok()
            .map(|spec| spec.with_easing(self.config.easing))
    }

    /// Report the popup as hidden when its phase ends early
    fn close_popup(&mut self) {
        if self.phase == CyclePhase::Popup {
            self.emit(CycleEvent::PopupHidden);
        }
    }

    fn emit(&mut self, event: CycleEvent) {
        if self.pending.push(event).is_err() {
            trace!("[DayNightCycle] event queue full, dropped {:?}", event);
        }
    }
}
