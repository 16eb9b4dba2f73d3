//! Sentinel: shield management and nothing else.
//!
//! The smallest possible archetype; its engagement sub-policy always
//! idles, leaving only the shared guard chain. Useful as a sparring
//! baseline and as the reference for the degraded no-enemy behavior
//! every brain shares.

use starduel_core::{Action, ShipId, WorldSnapshot};

use crate::policy::{run_policy, Engagement, EngagementView, ShieldRules, ShipBrain};

pub struct SentinelBrain {
    rules: ShieldRules,
}

impl SentinelBrain {
    pub fn new() -> Self {
        Self {
            rules: ShieldRules {
                close_range: 2.0,
                own_shot_cone_deg: 10.0,
            },
        }
    }
}

impl Default for SentinelBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Engagement for SentinelBrain {
    fn engage(&self, _view: &EngagementView<'_>) -> Action {
        Action::DoNothing
    }
}

impl ShipBrain for SentinelBrain {
    fn id(&self) -> &'static str {
        "sentinel"
    }

    fn description(&self) -> &'static str {
        "Holds position and manages its shield; never attacks."
    }

    fn next_action(&self, world: &WorldSnapshot, me: ShipId) -> Action {
        run_policy(world, me, &self.rules, self)
    }
}
