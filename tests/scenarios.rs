//! End-to-end runs through `GameCore` with scripted randomness and a manual clock

use glam::Vec2;

use space_shooter::consts::ENEMY_COLOR;
use space_shooter::sim::{
    Bullet, Direction, Enemy, GameCore, GameEvent, GamePhase, ManualClock, PowerUpKind,
    ScriptedRandom, SeededRandom, TickInput,
};
use space_shooter::GameConfig;

const FRAME: f64 = 16.0;

fn scripted(value: f32) -> (GameCore<ScriptedRandom, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let core = GameCore::new(
        GameConfig::default(),
        ScriptedRandom::constant(value),
        clock.clone(),
    );
    (core, clock)
}

/// Advance the clock one frame and run it
fn step<R: space_shooter::sim::RandomSource>(
    core: &mut GameCore<R, ManualClock>,
    clock: &ManualClock,
    input: &TickInput,
) -> bool {
    use space_shooter::sim::Clock;
    clock.advance(FRAME);
    core.frame(clock.now_ms(), input)
}

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy {
        pos: Vec2::new(x, y),
        size: Vec2::new(40.0, 40.0),
        speed: 1.2,
        color: ENEMY_COLOR,
    }
}

#[test]
fn shot_enemy_drops_power_up_that_gets_collected() {
    let (mut core, clock) = scripted(0.1);
    core.start();
    core.state_mut().enemies = vec![enemy_at(380.0, 300.0)];

    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    step(&mut core, &clock, &fire);
    assert_eq!(core.state().player_bullets.len(), 1);

    let mut events = core.drain_events();
    for _ in 0..150 {
        step(&mut core, &clock, &TickInput::default());
        events.extend(core.drain_events());
    }

    let state = core.state();
    assert_eq!(state.score, 100);
    assert!(events.contains(&GameEvent::PowerUpDropped {
        kind: PowerUpKind::Speed
    }));
    assert!(events.contains(&GameEvent::PowerUpCollected {
        kind: PowerUpKind::Speed
    }));
    assert!(state.power_ups.is_empty());
    assert_eq!(state.player.fire_cooldown_ms, 250.0);
    assert_eq!(state.lives, 3);
}

#[test]
fn losing_every_life_ends_the_run_and_restart_recovers() {
    let (mut core, clock) = scripted(0.5);
    core.start();

    for expected_lives in [2, 1] {
        let at = core.state().player.center();
        core.state_mut().enemy_bullets.push(Bullet {
            pos: at,
            size: Vec2::new(6.0, 16.0),
            speed: 5.0,
            direction: Direction::Down,
        });
        assert!(step(&mut core, &clock, &TickInput::default()));
        assert_eq!(core.state().lives, expected_lives);
    }

    core.state_mut().score = 1200;
    let at = core.state().player.center();
    core.state_mut().enemy_bullets.push(Bullet {
        pos: at,
        size: Vec2::new(6.0, 16.0),
        speed: 5.0,
        direction: Direction::Down,
    });
    assert!(!step(&mut core, &clock, &TickInput::default()));
    assert_eq!(core.phase(), GamePhase::GameOver);
    assert_eq!(core.state().lives, 0);

    let events = core.drain_events();
    let overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(overs, vec![&GameEvent::GameOver { score: 1200, level: 1 }]);

    // Frozen until restarted
    let time = core.state().time_ms;
    assert!(!step(&mut core, &clock, &TickInput::default()));
    assert_eq!(core.state().time_ms, time);

    core.start();
    assert_eq!(core.phase(), GamePhase::Running);
    assert_eq!(core.state().lives, 3);
    assert_eq!(core.state().score, 0);
    assert_eq!(core.state().enemies.len(), 6);
}

#[test]
fn paused_wall_time_is_not_simulated() {
    let (mut core, clock) = scripted(0.5);
    core.start();
    step(&mut core, &clock, &TickInput::default());
    let before: Vec<_> = core.state().enemies.iter().map(|e| e.pos).collect();

    core.toggle_pause();
    for _ in 0..100 {
        assert!(!step(&mut core, &clock, &TickInput::default()));
    }
    clock.advance(30_000.0);
    let frozen: Vec<_> = core.state().enemies.iter().map(|e| e.pos).collect();
    assert_eq!(before, frozen);

    core.toggle_pause();
    let time = core.state().time_ms;
    step(&mut core, &clock, &TickInput::default());
    assert_eq!(core.state().time_ms, time + FRAME);
}

#[test]
fn reaching_the_threshold_levels_up() {
    let (mut core, clock) = scripted(0.5);
    core.start();
    core.state_mut().score = 1000;
    step(&mut core, &clock, &TickInput::default());

    let state = core.state();
    assert_eq!(state.level, 2);
    assert_eq!(state.player.speed, 6.5);
    assert!(core.drain_events().contains(&GameEvent::LevelUp { level: 2 }));

    // Replenishment now targets 5 + 2 × 2 enemies, one per frame
    for _ in 0..10 {
        step(&mut core, &clock, &TickInput::default());
    }
    assert_eq!(core.state().enemies.len(), 9);
}

#[test]
fn same_seed_same_inputs_same_state() {
    let run = |seed: u64| {
        let clock = ManualClock::new();
        let mut core = GameCore::new(GameConfig::default(), SeededRandom::new(seed), clock.clone());
        core.start();
        for i in 0..400 {
            let input = TickInput {
                move_left: i % 90 < 45,
                move_right: i % 90 >= 45,
                fire: true,
            };
            if !step(&mut core, &clock, &input) {
                break;
            }
        }
        serde_json::to_string(core.state()).unwrap()
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn reset_from_any_phase_returns_to_idle() {
    let (mut core, clock) = scripted(0.5);
    core.reset();
    assert_eq!(core.phase(), GamePhase::Idle);

    core.start();
    step(&mut core, &clock, &TickInput::default());
    core.toggle_pause();
    core.reset();
    assert_eq!(core.phase(), GamePhase::Idle);
    assert!(!step(&mut core, &clock, &TickInput::default()));

    core.start();
    core.state_mut().game_over();
    core.reset();
    assert_eq!(core.phase(), GamePhase::Idle);
    assert_eq!(core.state().last_run, None);
}
