//! Runner: picks its fights.
//!
//! Engages only enemies already inside its forward cone, and among those
//! only the ones that look beatable; a high-energy or shielded enemy is
//! steered back out of the cone instead. Enemies off to the side are
//! faced away from rather than chased.

use serde::{Deserialize, Serialize};

use starduel_core::{Action, ShipId, WorldSnapshot};

use crate::config::{check_cone, check_order, check_positive, ConfigError};
use crate::policy::{run_policy, Engagement, EngagementView, ShieldRules, ShipBrain};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Enemy distance that flips us to shielding.
    pub close_range: f32,
    /// Maximum shooting distance.
    pub engage_range: f32,
    /// Half-angle of the cone an enemy must be inside to be engaged.
    pub forward_cone_deg: f32,
    /// Fine aim tolerance while lining up a shot.
    pub fine_turn_deg: f32,
    /// Bearing beyond which a nearby enemy is turned away from.
    pub coarse_turn_deg: f32,
    /// Enemy energy at or above which we disengage instead of trading.
    pub flee_energy: f32,
    /// Forward cone treated as our own outgoing fire in threat checks.
    pub own_shot_cone_deg: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            close_range: 3.0,
            engage_range: 10.0,
            forward_cone_deg: 45.0,
            fine_turn_deg: 10.0,
            coarse_turn_deg: 30.0,
            flee_energy: 100.0,
            own_shot_cone_deg: 10.0,
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("close_range", self.close_range)?;
        check_positive("engage_range", self.engage_range)?;
        check_positive("flee_energy", self.flee_energy)?;
        check_order("close_range", self.close_range, "engage_range", self.engage_range)?;
        check_cone("forward_cone_deg", self.forward_cone_deg)?;
        check_cone("fine_turn_deg", self.fine_turn_deg)?;
        check_cone("coarse_turn_deg", self.coarse_turn_deg)?;
        check_cone("own_shot_cone_deg", self.own_shot_cone_deg)?;
        check_order("fine_turn_deg", self.fine_turn_deg, "coarse_turn_deg", self.coarse_turn_deg)?;
        check_order(
            "coarse_turn_deg",
            self.coarse_turn_deg,
            "forward_cone_deg",
            self.forward_cone_deg,
        )
    }
}

pub struct RunnerBrain {
    config: RunnerConfig,
}

impl RunnerBrain {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self { config }
    }
}

impl Default for RunnerBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Engagement for RunnerBrain {
    fn engage(&self, view: &EngagementView<'_>) -> Action {
        let cfg = &self.config;
        let angle = view.angle_deg;
        let in_cone = angle.abs() < cfg.forward_cone_deg;

        if in_cone && view.me.can_shoot && view.distance < cfg.engage_range {
            if view.enemy.energy >= cfg.flee_energy || view.enemy.is_shield_up {
                // Not a fight worth taking: steer the enemy out of the cone.
                return if angle > 0.0 {
                    Action::TurnRight
                } else {
                    Action::TurnLeft
                };
            }
            if angle > cfg.fine_turn_deg {
                Action::TurnLeft
            } else if angle < -cfg.fine_turn_deg {
                Action::TurnRight
            } else {
                Action::Shoot
            }
        } else if view.distance < cfg.engage_range && angle >= cfg.coarse_turn_deg {
            Action::TurnRight
        } else if view.distance < cfg.engage_range && angle <= -cfg.coarse_turn_deg {
            Action::TurnLeft
        } else {
            Action::DoNothing
        }
    }
}

impl ShipBrain for RunnerBrain {
    fn id(&self) -> &'static str {
        "runner"
    }

    fn description(&self) -> &'static str {
        "Avoids stronger or shielded ships and only engages targets it can beat."
    }

    fn next_action(&self, world: &WorldSnapshot, me: ShipId) -> Action {
        let rules = ShieldRules {
            close_range: self.config.close_range,
            own_shot_cone_deg: self.config.own_shot_cone_deg,
        };
        run_policy(world, me, &rules, self)
    }
}
