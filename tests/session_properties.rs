//! Whole-session properties under random joystick input

use glam::Vec2;
use proptest::prelude::*;

use jet_dodge::consts::*;
use jet_dodge::sim::arena::spawn_clearance;
use jet_dodge::sim::{
    EXPLOSION_NOT_STARTED, Enemy, GameEvent, GamePhase, GameSession, TickInput, TrailMode, tick,
};

/// Ticks each random input is held for
const HOLD_TICKS: usize = 8;

fn started(seed: u64, width: f32, height: f32) -> GameSession {
    let mut session = GameSession::new(seed);
    session.resize(width, height);
    tick(&mut session, &TickInput::default());
    assert_eq!(session.phase, GamePhase::Playing);
    session
}

fn stick() -> impl Strategy<Value = TickInput> {
    (-150.0f32..150.0, -150.0f32..150.0, any::<bool>()).prop_map(|(x, y, active)| TickInput {
        offset: Vec2::new(x, y),
        active,
        ..Default::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn agents_stay_in_bounds(
        seed in any::<u64>(),
        width in 300.0f32..1200.0,
        height in 300.0f32..1200.0,
        inputs in prop::collection::vec(stick(), 1..200),
    ) {
        let mut session = started(seed, width, height);
        let bounds = session.bounds;

        for input in &inputs {
            for _ in 0..HOLD_TICKS {
                if session.phase != GamePhase::Playing {
                    break;
                }
                tick(&mut session, input);
                prop_assert!(bounds.contains(session.player.coords));
                for enemy in &session.enemies.enemies {
                    prop_assert!(bounds.contains(enemy.coords), "{:?} left {:?}", enemy, bounds);
                }
            }
        }
    }

    #[test]
    fn turns_never_exceed_half_circle(
        seed in any::<u64>(),
        inputs in prop::collection::vec(stick(), 1..200),
    ) {
        let mut session = started(seed, 800.0, 600.0);
        session.enemies.enemies.clear();

        for input in &inputs {
            let before = session.player.angle;
            tick(&mut session, input);
            let turned = session.player.angle - before;
            prop_assert!(turned.abs() <= std::f32::consts::PI + 1e-4);

            let offset = input.effective_offset();
            if offset != Vec2::ZERO {
                let target = offset.y.atan2(offset.x) + std::f32::consts::FRAC_PI_2;
                let off = jet_dodge::normalize_angle(session.player.angle - target);
                prop_assert!(off.abs() < 1e-3);
            }
        }
    }

    #[test]
    fn score_only_grows_and_respawns_keep_clear(
        seed in any::<u64>(),
        inputs in prop::collection::vec(stick(), 1..300),
    ) {
        let mut session = started(seed, 800.0, 600.0);
        // No enemies, so the run never ends and the food cycle keeps going
        session.enemies.enemies.clear();
        let mut last_score = 0;

        for input in &inputs {
            for _ in 0..HOLD_TICKS {
                tick(&mut session, input);
                prop_assert!(session.score >= last_score);
                last_score = session.score;

                let respawned = session.take_events().iter().any(|e| {
                    matches!(e, GameEvent::FoodEaten { .. } | GameEvent::FoodExpired)
                });
                if respawned {
                    let dist = session.food.coords.distance(session.player.coords);
                    prop_assert!(dist >= spawn_clearance());
                }
            }
        }
    }

    #[test]
    fn restart_resets_everything(
        seed in any::<u64>(),
        width in 300.0f32..1200.0,
        height in 300.0f32..1200.0,
    ) {
        let mut session = started(seed, width, height);
        session.score = 1234;
        session.enemies.enemies = vec![Enemy {
            coords: session.player.coords + Vec2::new(OBJECT_RADIUS, 0.0),
            velocity: Vec2::ZERO,
        }];

        let mut guard = 0;
        while session.phase != GamePhase::GameOver {
            tick(&mut session, &TickInput::default());
            guard += 1;
            prop_assert!(guard < 10_000);
        }

        prop_assert!(session.restart());
        prop_assert_eq!(session.phase, GamePhase::Playing);
        prop_assert_eq!(session.score, 0);
        prop_assert_eq!(session.death_enemy, None);
        prop_assert_eq!(session.explosion_radius, EXPLOSION_NOT_STARTED);
        prop_assert_eq!(session.enemies.len(), ENEMY_COUNT);
        prop_assert_eq!(session.trail.mode(), TrailMode::Trailing);
        prop_assert!(session.trail.samples().iter().all(|s| s.fade == 0.0));
    }
}

#[test]
fn collision_just_inside_contact_range() {
    let mut session = started(5, 800.0, 600.0);
    session.enemies.enemies = vec![Enemy {
        coords: Vec2::new(2.0 * OBJECT_RADIUS - 1e-3, 0.0),
        velocity: Vec2::ZERO,
    }];
    tick(&mut session, &TickInput::default());
    assert_eq!(session.phase, GamePhase::Dying);
    assert_eq!(session.death_enemy, Some(0));
}

#[test]
fn explosion_ends_in_bounded_ticks() {
    let mut session = started(5, 800.0, 600.0);
    session.enemies.enemies = vec![Enemy {
        coords: Vec2::new(OBJECT_RADIUS, 0.0),
        velocity: Vec2::ZERO,
    }];
    tick(&mut session, &TickInput::default());
    assert_eq!(session.explosion_radius, EXPLOSION_NOT_STARTED);

    // First dying tick starts the burst at 0
    tick(&mut session, &TickInput::default());
    assert_eq!(session.explosion_radius, 0.0);

    let limit = session.bounds.explosion_limit();
    let expected = (limit / EXPLOSION_STEP).ceil() as u32;
    let mut ticks = 0;
    while session.phase == GamePhase::Dying {
        tick(&mut session, &TickInput::default());
        ticks += 1;
    }
    assert_eq!(ticks, expected);
    assert_eq!(session.phase, GamePhase::GameOver);
    assert!(session.take_events().contains(&GameEvent::GameOver { score: 0 }));
}

#[test]
fn trail_sample_fades_out_after_twenty_cycles() {
    let mut session = started(8, 800.0, 600.0);
    session.enemies.enemies.clear();
    let push = TickInput {
        offset: Vec2::new(0.0, 40.0),
        active: true,
        ..Default::default()
    };

    // One write cycle with the stick held
    for _ in 0..TAIL_COUNT {
        tick(&mut session, &push);
    }
    let slot = session.trail.index();
    assert_eq!(session.trail.samples()[slot].fade, 1.0);

    // Then idle: the sample only fades
    let cycles = (1.0 / TAIL_FADE_SPEED).round() as u32;
    for _ in 0..(cycles - 1) * TAIL_COUNT {
        tick(&mut session, &TickInput::default());
    }
    assert!(session.trail.samples()[slot].fade > 0.0);
    for _ in 0..TAIL_COUNT {
        tick(&mut session, &TickInput::default());
    }
    assert!(session.trail.samples()[slot].fade <= 0.0);
}
