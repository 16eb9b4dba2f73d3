//! Scenario coverage for the shipped archetypes: the shared shield
//! skeleton, each engagement sub-policy, and totality/determinism over
//! the reachable input grid.

use starduel_brains::{brain_ids, create_brain, BasherBrain, RunnerBrain, SentinelBrain, ShipBrain};
use starduel_core::{Action, ArenaConfig, ShipId, ShipSnapshot, ShotSnapshot, Vec2, WorldSnapshot};

fn ship(id: u32, position: Vec2, heading_deg: f32) -> ShipSnapshot {
    ShipSnapshot {
        id: ShipId(id),
        position,
        forward: Vec2::from_angle_deg(heading_deg),
        rotation_deg: heading_deg,
        radius: 0.7,
        energy: 50.0,
        is_alive: true,
        is_shield_up: false,
        can_raise_shield: true,
        can_shoot: true,
    }
}

/// Enemy placed at the given bearing and range from a ship at the origin
/// facing +x.
fn enemy_at(id: u32, bearing_deg: f32, distance: f32) -> ShipSnapshot {
    let offset = Vec2::from_angle_deg(bearing_deg) * distance;
    ship(id, offset, 0.0)
}

fn world(ships: Vec<ShipSnapshot>, shots: Vec<ShotSnapshot>) -> WorldSnapshot {
    WorldSnapshot {
        config: ArenaConfig::default(),
        ships,
        shots,
    }
}

/// A shot one tick from hitting a ship that sits at the origin facing +x,
/// approaching from the side so the own-fire cone cannot absorb it.
fn incoming_shot(owner: u32) -> ShotSnapshot {
    ShotSnapshot {
        position: Vec2::new(0.5, 1.4),
        forward: Vec2::new(0.0, -1.0),
        radius: 0.2,
        is_alive: true,
        owner: ShipId(owner),
    }
}

fn all_brains() -> Vec<Box<dyn ShipBrain>> {
    brain_ids()
        .into_iter()
        .map(|id| create_brain(id).expect("roster id"))
        .collect()
}

#[test]
fn no_enemies_means_shield_management_only() {
    for brain in all_brains() {
        let w = world(vec![ship(0, Vec2::ZERO, 0.0)], vec![]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);

        let mut shielded = ship(0, Vec2::ZERO, 0.0);
        shielded.is_shield_up = true;
        let w = world(vec![shielded], vec![]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::ShieldDown);
    }
}

#[test]
fn no_enemies_ignores_incoming_fire() {
    // Step 1 outranks the threat check: with nobody to fight, the policy
    // only manages the shield it already has.
    for brain in all_brains() {
        let w = world(vec![ship(0, Vec2::ZERO, 0.0)], vec![incoming_shot(7)]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);
    }
}

#[test]
fn close_enemy_raises_shield() {
    for brain in all_brains() {
        let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 120.0, 1.0)], vec![]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::ShieldUp);
    }
}

#[test]
fn incoming_shot_raises_shield_at_any_range() {
    for brain in all_brains() {
        let w = world(
            vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 160.0, 8.0)],
            vec![incoming_shot(1)],
        );
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::ShieldUp);
    }
}

#[test]
fn shield_comes_down_once_clear() {
    for brain in all_brains() {
        let mut me = ship(0, Vec2::ZERO, 0.0);
        me.is_shield_up = true;
        let w = world(vec![me, enemy_at(1, 170.0, 8.0)], vec![]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::ShieldDown);
    }
}

#[test]
fn dead_or_missing_ship_idles() {
    for brain in all_brains() {
        let mut corpse = ship(0, Vec2::ZERO, 0.0);
        corpse.is_alive = false;
        let w = world(vec![corpse, enemy_at(1, 0.0, 5.0)], vec![]);
        assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);
        assert_eq!(brain.next_action(&w, ShipId(99)), Action::DoNothing);
    }
}

#[test]
fn basher_shoots_aligned_target_in_range() {
    let brain = BasherBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 0.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::Shoot);
}

#[test]
fn basher_turns_toward_offset_target() {
    let brain = BasherBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 20.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnLeft);

    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, -20.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnRight);
}

#[test]
fn basher_keeps_turning_toward_out_of_range_target() {
    let brain = BasherBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 90.0, 11.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnLeft);
}

#[test]
fn basher_holds_fire_out_of_range_and_on_cooldown() {
    let brain = BasherBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 0.0, 15.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);

    let mut me = ship(0, Vec2::ZERO, 0.0);
    me.can_shoot = false;
    let w = world(vec![me, enemy_at(1, 0.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);
}

#[test]
fn basher_engages_when_shield_unavailable_under_fire() {
    // Threat with no shield available falls through to the engagement
    // rules rather than stalling.
    let brain = BasherBrain::new();
    let mut me = ship(0, Vec2::ZERO, 0.0);
    me.can_raise_shield = false;
    let w = world(vec![me, enemy_at(1, 0.0, 5.0)], vec![incoming_shot(1)]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::Shoot);
}

#[test]
fn runner_flees_strong_enemy_in_cone() {
    let brain = RunnerBrain::new();
    let mut strong = enemy_at(1, 15.0, 5.0);
    strong.energy = 100.0;
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), strong], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnRight);

    let mut strong = enemy_at(1, -15.0, 5.0);
    strong.energy = 130.0;
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), strong], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnLeft);
}

#[test]
fn runner_flees_shielded_enemy_in_cone() {
    let brain = RunnerBrain::new();
    let mut shielded = enemy_at(1, 5.0, 5.0);
    shielded.is_shield_up = true;
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), shielded], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnRight);
}

#[test]
fn runner_lines_up_and_shoots_weak_enemy() {
    let brain = RunnerBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 0.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::Shoot);

    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 15.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnLeft);

    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, -15.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnRight);
}

#[test]
fn runner_turns_away_from_flankers() {
    let brain = RunnerBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 60.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnRight);

    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, -60.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::TurnLeft);
}

#[test]
fn runner_ignores_distant_flankers() {
    let brain = RunnerBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 60.0, 12.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);
}

#[test]
fn sentinel_never_attacks() {
    let brain = SentinelBrain::new();
    let w = world(vec![ship(0, Vec2::ZERO, 0.0), enemy_at(1, 0.0, 5.0)], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::DoNothing);
}

#[test]
fn nearest_enemy_wins_through_the_seam() {
    // An enemy two units away through the wrap beats one four units away
    // in the open, and it is close enough to trip the shield.
    let brain = BasherBrain::new();
    let me = ship(0, Vec2::new(19.0, 0.0), 0.0);
    let mid = ship(1, Vec2::new(15.0, 0.0), 0.0);
    let seam = ship(2, Vec2::new(-19.5, 0.0), 0.0);
    let w = world(vec![me, mid, seam], vec![]);
    assert_eq!(brain.next_action(&w, ShipId(0)), Action::ShieldUp);
}

#[test]
fn every_brain_is_total_and_deterministic() {
    let brains = all_brains();
    let mut cases = 0u32;
    for enemy_present in [false, true] {
        for distance in [1.0, 2.5, 5.0, 12.0] {
            for bearing in [-150.0, -60.0, -35.0, -15.0, 0.0, 15.0, 35.0, 60.0, 150.0] {
                for shield_up in [false, true] {
                    for can_shoot in [false, true] {
                        for can_raise in [false, true] {
                            for threatened in [false, true] {
                                for enemy_shielded in [false, true] {
                                    let mut me = ship(0, Vec2::ZERO, 0.0);
                                    me.is_shield_up = shield_up;
                                    me.can_shoot = can_shoot;
                                    me.can_raise_shield = can_raise;
                                    let mut ships = vec![me];
                                    if enemy_present {
                                        let mut enemy = enemy_at(1, bearing, distance);
                                        enemy.is_shield_up = enemy_shielded;
                                        ships.push(enemy);
                                    }
                                    let shots =
                                        if threatened { vec![incoming_shot(1)] } else { vec![] };
                                    let w = world(ships, shots);
                                    for brain in &brains {
                                        let first = brain.next_action(&w, ShipId(0));
                                        let second = brain.next_action(&w, ShipId(0));
                                        assert_eq!(first, second, "{} not pure", brain.id());
                                    }
                                    cases += 1;
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    assert!(cases > 1000);
}
