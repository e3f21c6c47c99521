use embassy_time::Instant;

use crate::command::{CommandCollector, CommandProcessor};
use crate::cycle::{CycleFrame, DayNightConfig, DayNightCycle};
use crate::day_clock::{DayClock, DayClockConfig, DayClockFrame};
use crate::transition::InvalidDuration;

/// Configuration for a scene
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub cycle: DayNightConfig,
    pub clock: DayClockConfig,
}

/// Everything the host needs to present one frame
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub cycle: CycleFrame,
    pub clock: DayClockFrame,
}

/// Scene - owns the lighting sessions and applies host commands
pub struct Scene<'a, const COMMAND_QUEUE_SIZE: usize> {
    commands: CommandProcessor<'a, COMMAND_QUEUE_SIZE>,
    cycle: DayNightCycle,
    clock: DayClock,
}

impl<'a, const COMMAND_QUEUE_SIZE: usize> Scene<'a, COMMAND_QUEUE_SIZE> {
    /// Create a new scene reading commands from `commands`
    pub fn new(
        commands: CommandCollector<'a, COMMAND_QUEUE_SIZE>,
        config: &SceneConfig,
    ) -> Result<Self, InvalidDuration> {
        Ok(Self {
            commands: CommandProcessor::new(commands),
            cycle: DayNightCycle::new(config.cycle.clone())?,
            clock: DayClock::new(config.clock.clone())?,
        })
    }

    /// Process one frame
    ///
    /// Applies pending commands, then advances both sessions to `now`.
    pub fn render(&mut self, now: Instant) -> SceneFrame {
        self.commands
            .process_pending(now, &mut self.cycle, &mut self.clock);

        SceneFrame {
            cycle: self.cycle.tick(now),
            clock: self.clock.tick(now),
        }
    }

    pub const fn cycle(&self) -> &DayNightCycle {
        &self.cycle
    }

    pub const fn clock(&self) -> &DayClock {
        &self.clock
    }

    pub fn cycle_mut(&mut self) -> &mut DayNightCycle {
        &mut self.cycle
    }

    pub fn clock_mut(&mut self) -> &mut DayClock {
        &mut self.clock
    }
}
