//! Nearest-object and threat queries over a world snapshot.

use crate::torus::{toroidal_displacement, toroidal_distance, will_collide_next_tick};
use crate::vec2::Vec2;
use crate::world::{Body, ShipSnapshot, WorldSnapshot};

/// Nearest live object satisfying `predicate`, by toroidal distance from
/// `origin`. Ties keep the first-encountered candidate, so the result is
/// stable for a given input iteration order.
pub fn find_nearest<'a, B, I, P>(objects: I, origin: Vec2, size: Vec2, mut predicate: P) -> Option<&'a B>
where
    B: Body,
    I: IntoIterator<Item = &'a B>,
    P: FnMut(&B) -> bool,
{
    let mut nearest: Option<&B> = None;
    let mut min_distance = f32::MAX;
    for object in objects {
        if !object.is_alive() || !predicate(object) {
            continue;
        }
        let distance = toroidal_distance(object.position(), origin, size);
        if distance < min_distance {
            nearest = Some(object);
            min_distance = distance;
        }
    }
    nearest
}

/// Nearest live ship other than `me`.
pub fn nearest_enemy<'a>(world: &'a WorldSnapshot, me: &ShipSnapshot) -> Option<&'a ShipSnapshot> {
    find_nearest(
        &world.ships,
        me.position,
        world.config.size,
        |ship: &ShipSnapshot| ship.id != me.id,
    )
}

/// Is any hostile shot predicted to hit `me` one tick from now?
///
/// A shot counts as hostile when it is not owned by `me` and lies outside
/// the `own_shot_cone_deg` cone around `me`'s forward (measured on the
/// toroidal relative-position vector from `me` to the shot). The cone
/// filters shots still travelling out along the ship's own firing line;
/// ownership alone misses nothing, but the cone keeps the heuristic
/// symmetric for drivers that recycle shot owner ids.
///
/// Short-circuits on the first predicted hit; iteration order only
/// affects how early, never the answer.
pub fn is_under_threat(world: &WorldSnapshot, me: &ShipSnapshot, own_shot_cone_deg: f32) -> bool {
    let size = world.config.size;
    world.shots.iter().any(|shot| {
        if !shot.is_alive || shot.owner == me.id {
            return false;
        }
        let to_shot = toroidal_displacement(shot.position, me.position, size);
        let angle = to_shot.angle_to_deg(me.forward);
        if angle.abs() <= own_shot_cone_deg {
            return false;
        }
        will_collide_next_tick(shot, world.config.shot_speed, me, world.config.ship_speed, size)
    })
}
