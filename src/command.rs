//! Scene commands
//!
//! Button presses and other host input are posted as [`SceneCommand`]s and
//! applied to the scene sessions at the start of the next frame.

use embassy_time::Instant;

use crate::cycle::DayNightCycle;
use crate::day_clock::DayClock;
use crate::logging::trace;
use crate::mailbox::{Collector, Mailbox, Poster};

/// Request from the host to change the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Start (or restart) the day/night cycle
    StartDayNightCycle,
    /// Stop the day/night cycle where it is
    CancelDayNightCycle,
    /// Start the day clock; ignored while it runs
    StartDayClock,
}

pub type CommandMailbox<const SIZE: usize> = Mailbox<SceneCommand, SIZE>;

pub type CommandPoster<'a, const SIZE: usize> = Poster<'a, SceneCommand, SIZE>;

pub type CommandCollector<'a, const SIZE: usize> = Collector<'a, SceneCommand, SIZE>;

/// Applies queued commands to the scene sessions
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandCollector<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandCollector<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply all pending commands (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_pending(
        &mut self,
        now: Instant,
        cycle: &mut DayNightCycle,
        clock: &mut DayClock,
    ) -> usize {
        let mut applied = 0;
        for command in self.commands.drain() {
            trace!("[CommandProcessor] applying {:?}", command);
            match command {
                SceneCommand::StartDayNightCycle => cycle.start(now),
                SceneCommand::CancelDayNightCycle => cycle.cancel(),
                SceneCommand::StartDayClock => {
                    clock.start(now);
                }
            }
            applied += 1;
        }
        applied
    }
}
