use shared::{Engine, SparkleConfig, TickOutcome};

const FRAME: f64 = 16.67;

fn engine() -> Engine {
    Engine::new(SparkleConfig::default(), 0x5eed, 0.0)
}

/// Whole-number timings so every time factor is exactly one.
fn stepped(size_decay: f64, life_rate: f64) -> Engine {
    let config = SparkleConfig {
        frame_ms: 10.0,
        size_decay,
        life_rate,
        ..SparkleConfig::default()
    };

    Engine::new(config, 1, 0.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn pool_never_exceeds_capacity() {
    let mut engine = engine();

    for i in 0..500 {
        engine.on_pointer_move(i as f64, i as f64, i as f64 * 100.0);
        assert!(engine.stars().len() <= 50);
    }

    assert_eq!(engine.stars().len(), 50);
    assert_eq!(engine.on_pointer_move(0.0, 0.0, 1_000_000.0), None);
}

#[test]
fn pointer_moves_inside_throttle_window_spawn_once() {
    let mut engine = engine();

    assert!(engine.on_pointer_move(10.0, 10.0, 1_000.0).is_some());
    assert!(engine.on_pointer_move(12.0, 12.0, 1_050.0).is_none());
    assert!(engine.on_pointer_move(14.0, 14.0, 1_099.0).is_none());
    assert_eq!(engine.stars().len(), 1);

    assert!(engine.on_pointer_move(16.0, 16.0, 1_100.0).is_some());
    assert_eq!(engine.stars().len(), 2);
}

#[test]
fn ticks_inside_frame_interval_change_nothing() {
    let mut engine = engine();
    engine.push_star(0.0, 0.0, (1.0, 1.0));

    assert!(matches!(engine.tick(FRAME), TickOutcome::Advanced { .. }));
    let snapshot = engine.stars().to_vec();

    assert_eq!(engine.tick(FRAME + 10.0), TickOutcome::FrameCapped);
    assert_eq!(engine.stars(), snapshot.as_slice());
}

#[test]
fn size_decays_and_life_grows() {
    let mut engine = engine();

    for i in 0..5 {
        engine.on_pointer_move(i as f64, 0.0, i as f64 * 100.0);
    }

    let mut now = 500.0;
    let mut previous = engine.stars().to_vec();

    for delta in [16.67, 20.0, 33.0, 17.5, 100.0, 16.67, 250.0] {
        now += delta;
        assert!(matches!(engine.tick(now), TickOutcome::Advanced { .. }));

        for star in engine.stars() {
            if let Some(before) = previous.iter().find(|p| p.id == star.id) {
                assert!(star.size <= before.size);
                assert!(star.life > before.life);
                assert!(star.size >= 2.0);
            }
        }

        previous = engine.stars().to_vec();
    }
}

#[test]
fn star_retires_when_small_and_old() {
    let mut engine = stepped(1.0, 25.0);
    engine.push_star(0.0, 0.0, (0.0, 0.0));

    for (tick, now) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        engine.tick(now);
        assert_eq!(engine.stars().len(), 1, "tick {}", tick + 1);
    }

    let star = &engine.stars()[0];
    assert_eq!(star.size, 2.0);
    assert!(!star.visible);

    engine.tick(40.0);
    assert!(engine.stars().is_empty());
    assert!(engine.is_idle());
}

#[test]
fn old_star_survives_until_it_shrinks() {
    let mut engine = stepped(0.5, 25.0);
    engine.push_star(0.0, 0.0, (0.0, 0.0));

    for now in [10.0, 20.0, 30.0, 40.0, 50.0] {
        engine.tick(now);
    }

    let star = &engine.stars()[0];
    assert!(star.life >= 100.0);
    assert_eq!(star.size, 2.5);

    engine.tick(60.0);
    assert!(engine.stars().is_empty());
}

#[test]
fn dot_retires_on_life_alone() {
    let mut engine = stepped(0.0, 25.0);
    engine.push_dot(3.0, 4.0);

    for now in [10.0, 20.0, 30.0] {
        engine.tick(now);
    }

    let dot = &engine.dots()[0];
    assert_eq!(dot.position, (3.0, 4.0));
    assert_eq!(dot.life, 75.0);
    assert_eq!(dot.size, 5.0);
    assert!(dot.size > SparkleConfig::default().size_floor);

    engine.tick(40.0);
    assert!(engine.dots().is_empty());
}

#[test]
fn resuming_with_particles_requests_frames() {
    let mut engine = stepped(0.0, 1.0);

    assert!(!engine.set_active(true, 0.0));

    engine.push_star(0.0, 0.0, (0.0, 1.0));
    assert!(!engine.set_active(false, 5.0));
    assert!(engine.set_active(true, 1_000.0));

    assert_eq!(engine.tick(1_005.0), TickOutcome::FrameCapped);
    assert_eq!(
        engine.tick(1_010.0),
        TickOutcome::Advanced {
            delta: 10.0,
            time_factor: 1.0
        }
    );
    assert_eq!(engine.stars()[0].position, (0.0, 1.0));
}

#[test]
fn background_time_is_not_credited_on_resume() {
    let mut engine = engine();
    engine.push_star(0.0, 0.0, (0.0, 1.0));
    engine.tick(FRAME);

    engine.set_active(false, 20.0);
    assert_eq!(engine.tick(5_000.0), TickOutcome::Hidden);
    assert_eq!(engine.on_pointer_move(1.0, 1.0, 6_000.0), None);

    engine.set_active(true, 60_000.0);

    match engine.tick(60_000.0 + FRAME) {
        TickOutcome::Advanced { delta, time_factor } => {
            assert!(approx(delta, FRAME));
            assert!(approx(time_factor, 1.0));
        }
        outcome => panic!("expected an advance, got {outcome:?}"),
    }

    assert!(approx(engine.stars()[0].life, 1.0));
}

#[test]
fn same_seed_same_motion() {
    let run = || {
        let mut engine = engine();
        let mut now = 0.0;

        for i in 0..20 {
            now += 37.0;
            engine.on_pointer_move(i as f64 * 3.0, 50.0, now * 3.0);
            engine.tick(now * 3.0);
        }

        engine.stars().to_vec()
    };

    assert_eq!(run(), run());
}

#[test]
fn single_star_after_six_frames() {
    let mut engine = engine();
    engine.push_star(100.0, 100.0, (0.0, 2.0));

    for frame in 1..=6 {
        assert!(matches!(
            engine.tick(frame as f64 * FRAME),
            TickOutcome::Advanced { .. }
        ));
    }

    let star = &engine.stars()[0];
    assert!(approx(star.position.0, 100.0));
    assert!(approx(star.position.1, 112.0));
    assert!(approx(star.size, 4.7));
    assert!(approx(star.life, 3.0));
    assert!(star.visible);
}
