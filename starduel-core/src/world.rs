//! Read-only world snapshot types.
//!
//! The external tick driver rebuilds one [`WorldSnapshot`] per tick and
//! hands it to each brain together with the acting ship's [`ShipId`].
//! Snapshots are frozen for the duration of the decision phase; the
//! decision core never writes back into them.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, SHIP_SPEED_PER_TICK, SHOT_SPEED_PER_TICK,
};
use crate::vec2::Vec2;

/// Opaque ship identity. Shot ownership carries one of these as a plain
/// back-reference: relation only, never lifetime-controlling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

/// The one discrete action a brain returns each tick. Selecting an
/// action does not apply it; legality, cooldowns, and energy costs
/// belong to the external action applicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    DoNothing,
    TurnLeft,
    TurnRight,
    Shoot,
    ShieldUp,
    ShieldDown,
}

/// Moving, alive, circular body: the capability set the geometry kernel
/// and queries consume, so ships and shots go through the same code.
pub trait Body {
    fn position(&self) -> Vec2;
    /// Unit heading. Callers may `debug_assert` unit length; a non-unit
    /// forward is an upstream contract violation, not a runtime error.
    fn forward(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn is_alive(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    pub id: ShipId,
    pub position: Vec2,
    pub forward: Vec2,
    /// Heading angle in degrees; kept consistent with `forward` by the
    /// driver. The decision core only reads `forward`.
    pub rotation_deg: f32,
    pub radius: f32,
    pub energy: f32,
    pub is_alive: bool,
    pub is_shield_up: bool,
    pub can_raise_shield: bool,
    pub can_shoot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShotSnapshot {
    pub position: Vec2,
    pub forward: Vec2,
    pub radius: f32,
    pub is_alive: bool,
    pub owner: ShipId,
}

/// Arena geometry and per-type speeds. Part of the snapshot so a driver
/// can run a different arena without recompiling the core.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Torus extents; coordinates live in `[-size/2, size/2)` per axis.
    pub size: Vec2,
    pub ship_speed: f32,
    pub shot_speed: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            ship_speed: SHIP_SPEED_PER_TICK,
            shot_speed: SHOT_SPEED_PER_TICK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub config: ArenaConfig,
    pub ships: Vec<ShipSnapshot>,
    pub shots: Vec<ShotSnapshot>,
}

impl WorldSnapshot {
    pub fn ship(&self, id: ShipId) -> Option<&ShipSnapshot> {
        self.ships.iter().find(|ship| ship.id == id)
    }
}

impl Body for ShipSnapshot {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn forward(&self) -> Vec2 {
        self.forward
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn is_alive(&self) -> bool {
        self.is_alive
    }
}

impl Body for ShotSnapshot {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn forward(&self) -> Vec2 {
        self.forward
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn is_alive(&self) -> bool {
        self.is_alive
    }
}
