//! Basher: closes distance and shoots.
//!
//! Turns until the nearest enemy sits inside the aim tolerance, then
//! shoots whenever it is in range and shooting is allowed. Shield
//! handling comes entirely from the shared skeleton; with a live enemy
//! in range the Basher never idles except on cooldown.

use serde::{Deserialize, Serialize};

use starduel_core::{Action, ShipId, WorldSnapshot};

use crate::config::{check_cone, check_order, check_positive, ConfigError};
use crate::policy::{run_policy, Engagement, EngagementView, ShieldRules, ShipBrain};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BasherConfig {
    /// Enemy distance that flips us to shielding.
    pub close_range: f32,
    /// Maximum shooting distance.
    pub engage_range: f32,
    /// Bearing tolerance before we stop turning and shoot.
    pub aim_tolerance_deg: f32,
    /// Forward cone treated as our own outgoing fire in threat checks.
    pub own_shot_cone_deg: f32,
}

impl Default for BasherConfig {
    fn default() -> Self {
        Self {
            close_range: 2.0,
            engage_range: 10.0,
            aim_tolerance_deg: 10.0,
            own_shot_cone_deg: 10.0,
        }
    }
}

impl BasherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("close_range", self.close_range)?;
        check_positive("engage_range", self.engage_range)?;
        check_order("close_range", self.close_range, "engage_range", self.engage_range)?;
        check_cone("aim_tolerance_deg", self.aim_tolerance_deg)?;
        check_cone("own_shot_cone_deg", self.own_shot_cone_deg)
    }
}

pub struct BasherBrain {
    config: BasherConfig,
}

impl BasherBrain {
    pub fn new() -> Self {
        Self::with_config(BasherConfig::default())
    }

    pub fn with_config(config: BasherConfig) -> Self {
        Self { config }
    }
}

impl Default for BasherBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Engagement for BasherBrain {
    fn engage(&self, view: &EngagementView<'_>) -> Action {
        if view.angle_deg >= self.config.aim_tolerance_deg {
            Action::TurnLeft
        } else if view.angle_deg <= -self.config.aim_tolerance_deg {
            Action::TurnRight
        } else if view.me.can_shoot && view.distance < self.config.engage_range {
            Action::Shoot
        } else {
            Action::DoNothing
        }
    }
}

impl ShipBrain for BasherBrain {
    fn id(&self) -> &'static str {
        "basher"
    }

    fn description(&self) -> &'static str {
        "Closes on the nearest ship and shoots it down, shielding when crowded or shot at."
    }

    fn next_action(&self, world: &WorldSnapshot, me: ShipId) -> Action {
        let rules = ShieldRules {
            close_range: self.config.close_range,
            own_shot_cone_deg: self.config.own_shot_cone_deg,
        };
        run_policy(world, me, &rules, self)
    }
}
