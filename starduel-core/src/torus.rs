//! Toroidal geometry and one-tick prediction kernel.
//!
//! Pure free functions; every call is independent and order-insensitive.
//! All "future" answers are exactly one tick ahead: the collision test is
//! a point-in-time circle overlap at t+1, not a swept test, so bodies
//! faster than their combined radius per tick can tunnel through each
//! other. That matches the one-tick decision horizon of the brains.

use crate::vec2::Vec2;
use crate::world::Body;

// ── Wrapping ────────────────────────────────────────────────────────

/// Wrap one coordinate into `[-extent/2, extent/2)`.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let half = extent / 2.0;
    (value + half).rem_euclid(extent) - half
}

/// Wrap a position into arena bounds. Idempotent, and the identity for
/// positions already in bounds.
#[inline]
pub fn wrap_position(p: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(p.x, size.x), wrap_coord(p.y, size.y))
}

// ── Shortest separation ─────────────────────────────────────────────

/// Minimal signed toroidal difference `a - b` on a single axis, in
/// `[-extent/2, extent/2)`.
#[inline]
pub fn shortest_delta(a: f32, b: f32, extent: f32) -> f32 {
    wrap_coord(a - b, extent)
}

/// Shortest displacement from `b` to `a` on the torus, per axis. This is
/// the exact minimum of the direct and wrapped separations on each axis,
/// so it never misclassifies near-edge bodies regardless of their radii.
#[inline]
pub fn toroidal_displacement(a: Vec2, b: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        shortest_delta(a.x, b.x, size.x),
        shortest_delta(a.y, b.y, size.y),
    )
}

#[inline]
pub fn toroidal_distance(a: Vec2, b: Vec2, size: Vec2) -> f32 {
    toroidal_displacement(a, b, size).magnitude()
}

// ── One-tick prediction ─────────────────────────────────────────────

/// Position of `body` after moving forward for exactly one tick.
pub fn step_forward<B: Body + ?Sized>(body: &B, speed: f32, size: Vec2) -> Vec2 {
    let forward = body.forward();
    debug_assert!(
        (forward.magnitude_sq() - 1.0).abs() < 1e-3,
        "forward must be unit length"
    );
    wrap_position(body.position() + forward.with_magnitude(speed), size)
}

/// Will the two bodies' circles overlap one tick from now, with both
/// moving forward at their given speeds? Symmetric in its arguments.
pub fn will_collide_next_tick<A, B>(a: &A, speed_a: f32, b: &B, speed_b: f32, size: Vec2) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    let future_a = step_forward(a, speed_a, size);
    let future_b = step_forward(b, speed_b, size);
    let separation = toroidal_displacement(future_a, future_b, size);
    let combined = a.radius() + b.radius();
    separation.magnitude_sq() <= combined * combined
}
