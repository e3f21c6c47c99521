//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{Scene, SceneOutput};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration =
    Duration::from_micros(1_000_000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that paces scene updates.
///
/// Each tick renders the scene, hands the frame to the output and returns
/// timing info so the caller can sleep. Falling more than two frames behind
/// resets the schedule instead of catching up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(scene, output);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: SceneOutput, const COMMAND_QUEUE_SIZE: usize> {
    output: O,
    scene: Scene<'a, COMMAND_QUEUE_SIZE>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<'a, O: SceneOutput, const COMMAND_QUEUE_SIZE: usize>
    FrameScheduler<'a, O, COMMAND_QUEUE_SIZE>
{
    /// Create a new frame scheduler running at `DEFAULT_FPS`.
    pub fn new(scene: Scene<'a, COMMAND_QUEUE_SIZE>, output: O) -> Self {
        Self::with_frame_duration(scene, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        scene: Scene<'a, COMMAND_QUEUE_SIZE>,
        output: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            scene,
            next_frame: None,
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration + self.frame_duration;
        let scheduled = match self.next_frame {
            Some(deadline) if now.saturating_duration_since(deadline) <= max_drift => deadline,
            _ => now,
        };

        let frame = self.scene.render(now);
        self.output.apply(&frame);

        let next_deadline = scheduled + self.frame_duration;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    pub fn scene(&self) -> &Scene<'a, COMMAND_QUEUE_SIZE> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<'a, COMMAND_QUEUE_SIZE> {
        &mut self.scene
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
