//! The shared decision skeleton every archetype runs on.
//!
//! An archetype is a parameterization, not a new algorithm: shield and
//! threat handling (steps shared by every brain) live in [`run_policy`],
//! and an archetype only supplies the [`Engagement`] sub-policy invoked
//! once those guards fall through. Adding a brain means implementing
//! `Engagement` and wiring it into the roster in `lib.rs`.

use tracing::trace;

use starduel_core::query::{is_under_threat, nearest_enemy};
use starduel_core::torus::toroidal_displacement;
use starduel_core::{Action, ShipId, ShipSnapshot, WorldSnapshot};

/// A combat brain: one decision per tick, pure in the snapshot.
///
/// Repeated calls with an identical snapshot return an identical action;
/// no state is carried between ticks, so brains for different ships can
/// run in parallel without coordination.
pub trait ShipBrain {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn next_action(&self, world: &WorldSnapshot, me: ShipId) -> Action;
}

/// What an engagement sub-policy gets to look at once the shared shield
/// guards have passed: the acting ship, its nearest enemy, and the
/// geometry between them.
pub struct EngagementView<'a> {
    pub me: &'a ShipSnapshot,
    pub enemy: &'a ShipSnapshot,
    /// Toroidal distance to the enemy.
    pub distance: f32,
    /// Signed bearing to the enemy relative to our forward, in degrees.
    /// Positive means the enemy is to the left.
    pub angle_deg: f32,
    pub under_threat: bool,
}

pub trait Engagement {
    fn engage(&self, view: &EngagementView<'_>) -> Action;
}

/// Thresholds for the shared guards.
#[derive(Clone, Copy, Debug)]
pub struct ShieldRules {
    /// Enemy distance below which the shield goes up.
    pub close_range: f32,
    /// Half-angle of the forward cone inside which a shot is treated as
    /// one of our own still leaving the barrel.
    pub own_shot_cone_deg: f32,
}

/// The shared guard chain. First matching guard wins; the chain is
/// exhaustive, so exactly one action always comes back.
///
/// 1. Acting ship missing or dead: `DoNothing`.
/// 2. No live enemy: drop the shield if it is up, else `DoNothing`.
/// 3. Enemy close or a shot incoming, and the shield can rise: `ShieldUp`.
/// 4. Shield up with no remaining reason: `ShieldDown`.
/// 5. Otherwise the archetype's engagement sub-policy decides.
pub fn run_policy(
    world: &WorldSnapshot,
    me: ShipId,
    rules: &ShieldRules,
    engagement: &dyn Engagement,
) -> Action {
    let Some(me) = world.ship(me).filter(|ship| ship.is_alive) else {
        return Action::DoNothing;
    };

    let under_threat = is_under_threat(world, me, rules.own_shot_cone_deg);

    let Some(enemy) = nearest_enemy(world, me) else {
        return if me.is_shield_up {
            Action::ShieldDown
        } else {
            Action::DoNothing
        };
    };

    let relative = toroidal_displacement(enemy.position, me.position, world.config.size);
    let distance = relative.magnitude();
    let angle_deg = relative.angle_to_deg(me.forward);

    let action = if (distance < rules.close_range || under_threat) && me.can_raise_shield {
        Action::ShieldUp
    } else if me.is_shield_up && distance >= rules.close_range && !under_threat {
        Action::ShieldDown
    } else {
        engagement.engage(&EngagementView {
            me,
            enemy,
            distance,
            angle_deg,
            under_threat,
        })
    };

    trace!(
        ship = me.id.0,
        enemy = enemy.id.0,
        distance,
        angle_deg,
        under_threat,
        ?action,
        "decision"
    );
    action
}
