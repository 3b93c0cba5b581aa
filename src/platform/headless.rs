//! Headless run: seeded game, autopilot input, simulated 60 Hz frames

use serde::Serialize;

use super::autopilot;
use crate::config::GameConfig;
use crate::sim::{Clock, GameCore, GameEvent, GamePhase, ManualClock, SeededRandom};

/// Display refresh interval being simulated
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSummary {
    pub seed: u64,
    pub frames: u32,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub shots_fired: u32,
    pub enemies_destroyed: u32,
    pub power_ups_collected: u32,
    pub lives_lost: u32,
    pub simulated_ms: f64,
}

/// Play up to `max_frames` frames (stopping early on game over)
pub fn run_demo(config: GameConfig, seed: u64, max_frames: u32) -> DemoSummary {
    let clock = ManualClock::new();
    let mut core = GameCore::new(config, SeededRandom::new(seed), clock.clone());
    core.start();

    let mut summary = DemoSummary {
        seed,
        frames: 0,
        phase: core.phase(),
        score: 0,
        level: 1,
        lives: core.state().lives,
        shots_fired: 0,
        enemies_destroyed: 0,
        power_ups_collected: 0,
        lives_lost: 0,
        simulated_ms: 0.0,
    };

    while summary.frames < max_frames && core.is_active() {
        clock.advance(FRAME_MS);
        let input = autopilot(core.state(), core.config());
        core.frame(clock.now_ms(), &input);
        summary.frames += 1;

        for event in core.drain_events() {
            match event {
                GameEvent::PlayerShot => summary.shots_fired += 1,
                GameEvent::EnemyDestroyed { .. } => summary.enemies_destroyed += 1,
                GameEvent::PowerUpCollected { .. } => summary.power_ups_collected += 1,
                GameEvent::PlayerHit { .. } => summary.lives_lost += 1,
                GameEvent::LevelUp { level } => log::info!("Demo reached level {level}"),
                _ => {}
            }
        }
    }

    let state = core.state();
    summary.phase = state.phase;
    summary.score = state.score;
    summary.level = state.level;
    summary.lives = state.lives;
    summary.simulated_ms = state.time_ms;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_run() {
        let a = run_demo(GameConfig::default(), 7, 600);
        let b = run_demo(GameConfig::default(), 7, 600);
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_accounting() {
        let summary = run_demo(GameConfig::default(), 11, 900);
        assert!(summary.frames <= 900);
        assert_eq!(summary.score, summary.enemies_destroyed as u64 * 100);
        assert!(summary.shots_fired > 0);
        assert!(summary.lives_lost <= 3 + summary.power_ups_collected);
        if summary.phase == GamePhase::GameOver {
            assert_eq!(summary.lives, 0);
        } else {
            assert_eq!(summary.frames, 900);
        }
    }

    #[test]
    fn test_zero_frames() {
        let summary = run_demo(GameConfig::default(), 1, 0);
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.phase, GamePhase::Running);
        assert_eq!(summary.simulated_ms, 0.0);
    }
}
