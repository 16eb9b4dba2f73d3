//! Combat brains for the toroidal arena.
//!
//! Each brain turns a read-only [`WorldSnapshot`](starduel_core::WorldSnapshot)
//! into exactly one [`Action`](starduel_core::Action) per tick. All of
//! them share one shield/threat guard chain ([`policy::run_policy`]) and
//! differ only in the engagement sub-policy plugged into it.

pub mod basher;
pub mod config;
pub mod policy;
pub mod runner;
pub mod sentinel;

pub use basher::{BasherBrain, BasherConfig};
pub use config::ConfigError;
pub use policy::{Engagement, EngagementView, ShieldRules, ShipBrain};
pub use runner::{RunnerBrain, RunnerConfig};
pub use sentinel::SentinelBrain;

pub fn brain_ids() -> Vec<&'static str> {
    vec!["basher", "runner", "sentinel"]
}

pub fn describe_brains() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "basher",
            "Closes on the nearest ship and shoots it down, shielding when crowded or shot at.",
        ),
        (
            "runner",
            "Avoids stronger or shielded ships and only engages targets it can beat.",
        ),
        (
            "sentinel",
            "Holds position and manages its shield; never attacks.",
        ),
    ]
}

pub fn create_brain(id: &str) -> Option<Box<dyn ShipBrain>> {
    match id {
        "basher" => Some(Box::new(BasherBrain::new())),
        "runner" => Some(Box::new(RunnerBrain::new())),
        "sentinel" => Some(Box::new(SentinelBrain::new())),
        _ => None,
    }
}
