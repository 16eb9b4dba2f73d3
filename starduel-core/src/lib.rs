//! Deterministic decision-core primitives for toroidal arena combat:
//! no rendering, no IO, no randomness.
//!
//! The crate holds the three read-only layers every brain builds on:
//! the world snapshot types ([`world`]), the toroidal geometry and
//! one-tick prediction kernel ([`torus`]), and the nearest/threat
//! queries ([`query`]). Applying an [`Action`] to the game state is the
//! caller's job; nothing here mutates anything.

pub mod constants;
pub mod query;
pub mod torus;
pub mod vec2;
pub mod world;

pub use vec2::Vec2;
pub use world::{Action, ArenaConfig, Body, ShipId, ShipSnapshot, ShotSnapshot, WorldSnapshot};
