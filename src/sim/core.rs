//! Game lifecycle
//!
//! [`GameCore`] owns the state and drives the phase machine:
//!
//! ```text
//! Idle ──start──▶ Running ◀──toggle_pause──▶ Paused
//!                    │
//!                    └──last life lost──▶ GameOver ──start──▶ Running
//! (any) ──reset──▶ Idle
//! ```
//!
//! The platform layer calls [`GameCore::frame`] once per display refresh and
//! drains [`GameEvent`]s afterwards for audio and HUD updates.

use super::clock::{Clock, SystemClock};
use super::rng::{RandomSource, SeededRandom};
use super::spawn::{spawn_player_bullet, spawn_wave};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, advance};
use crate::config::GameConfig;
use crate::renderer::{self, Renderer};

/// The game: configuration, state, randomness and the frame timer
pub struct GameCore<R = SeededRandom, C = SystemClock> {
    config: GameConfig,
    state: GameState,
    rng: R,
    clock: C,
    /// Timestamp of the previous frame, `None` until the first frame after (re)start
    last_frame_ms: Option<f64>,
}

impl GameCore {
    /// Production setup: seeded PCG stream and the platform clock
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SeededRandom::new(seed), SystemClock::new())
    }
}

impl<R: RandomSource, C: Clock> GameCore<R, C> {
    pub fn new(config: GameConfig, rng: R, clock: C) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng,
            clock,
            last_frame_ms: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access (test setups, debug tooling)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether frames should keep being scheduled
    pub fn is_active(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    /// Begin a run (from Idle or GameOver) or resume a paused one
    pub fn start(&mut self) {
        match self.state.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.rebuild_state();
                spawn_wave(
                    &mut self.state.enemies,
                    self.state.level,
                    &self.config,
                    &mut self.rng,
                );
                self.state.phase = GamePhase::Running;
                self.anchor_frame_timer();
                self.state.events.push(GameEvent::Started);
                log::info!("Run started with {} enemies", self.state.enemies.len());
            }
            GamePhase::Paused => self.resume(),
            GamePhase::Running => {}
        }
    }

    /// Running ⇄ Paused; no effect in Idle or GameOver
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                self.state.events.push(GameEvent::Paused);
                log::debug!("Paused at score {}", self.state.score);
            }
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Pause only if running (used when the page loses focus)
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.toggle_pause();
        }
    }

    /// Back to a fresh Idle state from any phase
    pub fn reset(&mut self) {
        self.rebuild_state();
        self.last_frame_ms = None;
        self.state.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Flip the sound flag, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.state.sound_enabled = !self.state.sound_enabled;
        log::debug!("Sound enabled: {}", self.state.sound_enabled);
        self.state.sound_enabled
    }

    /// Fire immediately, ignoring the cooldown (on-screen shoot button)
    ///
    /// Returns false when no run is active.
    pub fn shoot(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let bullet = spawn_player_bullet(&self.state.player);
        self.state.player_bullets.push(bullet);
        self.state.events.push(GameEvent::PlayerShot);
        true
    }

    /// Advance the simulation by one step of `dt_ms` (no-op unless running)
    pub fn advance(&mut self, input: &TickInput, dt_ms: f64) {
        advance(&mut self.state, input, dt_ms, &self.config, &mut self.rng);
    }

    /// Per-display-frame entry point
    ///
    /// Derives the elapsed time from consecutive timestamps (clamped to
    /// `[0, max_frame_delta_ms]`), advances one step and reports whether
    /// another frame should be scheduled.
    pub fn frame(&mut self, timestamp_ms: f64, input: &TickInput) -> bool {
        if !self.is_active() {
            return false;
        }
        let last = self.last_frame_ms.unwrap_or(timestamp_ms);
        let dt = (timestamp_ms - last)
            .max(0.0)
            .min(self.config.max_frame_delta_ms);
        self.last_frame_ms = Some(timestamp_ms);

        self.advance(input, dt);
        self.is_active()
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Draw the current state
    pub fn render<T: Renderer>(&self, target: &mut T) -> Result<(), T::Error> {
        renderer::render(target, &self.state, &self.config)
    }

    fn resume(&mut self) {
        self.state.phase = GamePhase::Running;
        self.anchor_frame_timer();
        self.state.events.push(GameEvent::Resumed);
        log::debug!("Resumed");
    }

    /// Paused wall time must not count as elapsed simulation time
    fn anchor_frame_timer(&mut self) {
        self.last_frame_ms = Some(self.clock.now_ms());
    }

    /// Fresh state keeping the sound preference and undrained events
    fn rebuild_state(&mut self) {
        let sound_enabled = self.state.sound_enabled;
        let events = std::mem::take(&mut self.state.events);
        self.state = GameState::new(&self.config);
        self.state.sound_enabled = sound_enabled;
        self.state.events = events;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::clock::ManualClock;
    use crate::sim::rng::ScriptedRandom;

    fn core() -> (GameCore<ScriptedRandom, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let core = GameCore::new(
            GameConfig::default(),
            ScriptedRandom::constant(0.5),
            clock.clone(),
        );
        (core, clock)
    }

    #[test]
    fn test_start_spawns_wave() {
        let (mut core, _) = core();
        assert_eq!(core.phase(), GamePhase::Idle);
        core.start();
        assert_eq!(core.phase(), GamePhase::Running);
        assert_eq!(core.state().enemies.len(), 6);
        assert_eq!(core.state().score, 0);
        assert_eq!(core.state().lives, 3);
        assert!(core.drain_events().contains(&GameEvent::Started));
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let (mut core, _) = core();
        core.start();
        core.state_mut().score = 400;
        core.start();
        assert_eq!(core.state().score, 400);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let (mut core, _) = core();
        core.start();
        core.toggle_pause();
        assert_eq!(core.phase(), GamePhase::Paused);

        let enemies: Vec<_> = core.state().enemies.iter().map(|e| e.pos).collect();
        let input = TickInput {
            move_left: true,
            fire: true,
            ..Default::default()
        };
        assert!(!core.frame(1000.0, &input));
        core.advance(&input, 16.0);

        let after: Vec<_> = core.state().enemies.iter().map(|e| e.pos).collect();
        assert_eq!(enemies, after);
        assert!(core.state().player_bullets.is_empty());
        assert_eq!(core.state().player.pos.x, 375.0);

        core.toggle_pause();
        assert_eq!(core.phase(), GamePhase::Running);
    }

    #[test]
    fn test_resume_reanchors_frame_timer() {
        let (mut core, clock) = core();
        clock.set(1000.0);
        core.start();
        assert!(core.frame(1016.0, &TickInput::default()));
        assert_eq!(core.state().time_ms, 16.0);

        core.toggle_pause();
        clock.set(60_000.0);
        core.toggle_pause();
        core.frame(60_016.0, &TickInput::default());
        assert_eq!(core.state().time_ms, 32.0);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let (mut core, clock) = core();
        clock.set(0.0);
        core.start();
        core.frame(5000.0, &TickInput::default());
        assert_eq!(core.state().time_ms, 100.0);
        // Timestamps going backwards count as zero
        core.frame(4000.0, &TickInput::default());
        assert_eq!(core.state().time_ms, 100.0);
    }

    #[test]
    fn test_toggle_pause_outside_run_is_ignored() {
        let (mut core, _) = core();
        core.toggle_pause();
        assert_eq!(core.phase(), GamePhase::Idle);
        core.pause();
        assert_eq!(core.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_reset_then_start_matches_fresh_run() {
        let (mut fresh, _) = core();
        fresh.start();

        let (mut core, _) = core();
        core.start();
        {
            let state = core.state_mut();
            state.score = 2500;
            state.lives = 1;
            state.level = 3;
            state.player.speed = 7.0;
            state.player.fire_cooldown_ms = 150.0;
            state.player.pos.x = 10.0;
        }
        core.advance(
            &TickInput {
                fire: true,
                ..Default::default()
            },
            16.0,
        );
        core.reset();
        assert_eq!(core.phase(), GamePhase::Idle);
        assert!(core.state().enemies.is_empty());
        core.start();

        let (a, b) = (fresh.state(), core.state());
        assert_eq!(b.score, 0);
        assert_eq!(b.lives, 3);
        assert_eq!(b.level, 1);
        assert_eq!(b.enemies.len(), 6);
        assert!(b.player_bullets.is_empty());
        assert!(b.enemy_bullets.is_empty());
        assert!(b.power_ups.is_empty());
        assert!(b.particles.is_empty());
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.speed, b.player.speed);
        assert_eq!(a.player.fire_cooldown_ms, b.player.fire_cooldown_ms);
        assert_eq!(b.player.last_shot_ms, None);
        assert_eq!(b.time_ms, 0.0);
    }

    #[test]
    fn test_reset_keeps_sound_preference() {
        let (mut core, _) = core();
        assert!(!core.toggle_sound());
        core.start();
        core.reset();
        assert!(!core.state().sound_enabled);
        core.start();
        assert!(!core.state().sound_enabled);
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut core, _) = core();
        core.start();
        core.state_mut().score = 900;
        core.state_mut().game_over();
        assert_eq!(core.phase(), GamePhase::GameOver);
        assert!(!core.frame(16.0, &TickInput::default()));

        core.start();
        assert_eq!(core.phase(), GamePhase::Running);
        assert_eq!(core.state().score, 0);
        assert_eq!(core.state().lives, 3);
        assert_eq!(core.state().enemies.len(), 6);
    }

    #[test]
    fn test_shoot_ignores_cooldown() {
        let (mut core, _) = core();
        assert!(!core.shoot());
        core.start();
        assert!(core.shoot());
        assert!(core.shoot());
        assert_eq!(core.state().player_bullets.len(), 2);
        let x = core.state().player_bullets[0].center().x;
        assert_eq!(x, core.state().player.center().x);
    }

    #[test]
    fn test_events_survive_restart() {
        let (mut core, _) = core();
        core.start();
        core.reset();
        core.start();
        let events = core.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Started, GameEvent::Reset, GameEvent::Started]
        );
        assert!(core.drain_events().is_empty());
    }
}
