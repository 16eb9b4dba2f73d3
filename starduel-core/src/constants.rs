//! Arena constants, in world units (1 unit ~ one small-ship radius).
//!
//! These feed [`crate::ArenaConfig::default`]; drivers that run a
//! different arena pass their own config inside the snapshot instead of
//! editing these.

// World dimensions
pub const ARENA_WIDTH: f32 = 40.0;
pub const ARENA_HEIGHT: f32 = 24.0;

// Per-tick forward speeds
pub const SHIP_SPEED_PER_TICK: f32 = 0.5;
pub const SHOT_SPEED_PER_TICK: f32 = 1.0;

// Body radii
pub const SHIP_RADIUS: f32 = 0.7;
pub const SHOT_RADIUS: f32 = 0.2;

// Energy scale (spent by the action applicator, read by evasive brains)
pub const MAX_ENERGY: f32 = 120.0;
