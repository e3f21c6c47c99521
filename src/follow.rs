//! Follow-target re-planning
//!
//! Decides when an agent following a moving target should be given a new
//! destination, and whether its walking animation should play. Path
//! planning itself belongs to the host's navigation system; the planner only
//! sees the agent's reported path status.

use crate::logging::trace;
use crate::math::Vec3;

/// Default distance the target must move before re-planning
pub const DEFAULT_MOVE_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct FollowConfig {
    /// Distance the target must move before a new destination is issued
    pub move_threshold: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
        }
    }
}

/// Path status reported by the host's navigation agent
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentStatus {
    pub enabled: bool,
    pub on_nav_mesh: bool,
    pub has_path: bool,
    /// A path request is still being computed
    pub path_pending: bool,
    pub remaining_distance: f32,
    pub stopping_distance: f32,
}

/// What the host should do this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowDecision {
    /// New destination to hand to the navigation agent
    pub destination: Option<Vec3>,
    pub walking: bool,
    /// The walking flag differs from the previous frame
    pub walking_changed: bool,
    /// The agent fell off the nav mesh and should be snapped back onto it
    pub resample_nav_mesh: bool,
}

/// Threshold-gated follow planner
#[derive(Debug, Clone)]
pub struct FollowPlanner {
    config: FollowConfig,
    /// Target position at the last issued destination
    last_destination: Option<Vec3>,
    walking: bool,
}

impl FollowPlanner {
    pub fn new(config: FollowConfig) -> Self {
        Self {
            config: FollowConfig {
                move_threshold: config.move_threshold.max(0.0),
            },
            last_destination: None,
            walking: false,
        }
    }

    pub const fn is_walking(&self) -> bool {
        self.walking
    }

    pub const fn last_destination(&self) -> Option<Vec3> {
        self.last_destination
    }

    /// Forget the last destination so the next update re-plans
    pub fn retarget(&mut self) {
        self.last_destination = None;
    }

    /// Plan one frame for `target` given the agent's status
    pub fn update(&mut self, target: Option<Vec3>, agent: &AgentStatus) -> FollowDecision {
        let Some(target) = target.filter(|_| agent.enabled && agent.on_nav_mesh) else {
            let resample = target.is_some() && agent.enabled && !agent.on_nav_mesh;
            if resample {
                trace!("[FollowPlanner.update] agent left the nav mesh");
            }
            return FollowDecision {
                destination: None,
                resample_nav_mesh: resample,
                ..self.set_walking(false)
            };
        };

        let destination = self.needs_replan(target, agent).then(|| {
            self.last_destination = Some(target);
            target
        });

        let walking = !agent.path_pending
            && agent.has_path
            && agent.remaining_distance > agent.stopping_distance;

        FollowDecision {
            destination,
            ..self.set_walking(walking)
        }
    }

    fn needs_replan(&self, target: Vec3, agent: &AgentStatus) -> bool {
        if !agent.has_path {
            return true;
        }
        match self.last_destination {
            Some(last) => target.distance(last) > self.config.move_threshold,
            None => true,
        }
    }

    fn set_walking(&mut self, walking: bool) -> FollowDecision {
        let walking_changed = self.walking != walking;
        self.walking = walking;
        FollowDecision {
            destination: None,
            walking,
            walking_changed,
            resample_nav_mesh: false,
        }
    }
}

impl Default for FollowPlanner {
    fn default() -> Self {
        Self::new(FollowConfig::default())
    }
}
