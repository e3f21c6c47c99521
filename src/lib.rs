#![no_std]

mod logging;

pub mod color;
pub mod command;
pub mod cycle;
pub mod day_clock;
pub mod follow;
pub mod frame_scheduler;
pub mod light;
pub mod mailbox;
pub mod math;
pub mod popup;
pub mod scene;
pub mod transition;

pub use command::{CommandCollector, CommandMailbox, CommandPoster, SceneCommand};
pub use cycle::{CycleEvent, CycleFrame, CyclePhase, DayNightConfig, DayNightCycle};
pub use day_clock::{ClockEvent, DayClock, DayClockConfig, DayClockFrame};
pub use follow::{AgentStatus, FollowConfig, FollowDecision, FollowPlanner};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use light::LightState;
pub use popup::{DayLabel, Popup, PopupChange};
pub use scene::{Scene, SceneConfig, SceneFrame};
pub use transition::{Easing, Interpolate, InvalidDuration, Sample, TransitionSpec};

pub use color::Rgb;
pub use math::{Quat, Vec3};
pub use embassy_time::{Duration, Instant};

/// Abstract scene output trait
///
/// Implement this trait to push rendered frames into a host: a game
/// engine's light component, a desktop preview, a physical lamp.
pub trait SceneOutput {
    /// Apply a rendered frame
    fn apply(&mut self, frame: &SceneFrame);
}
