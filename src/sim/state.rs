//! Game state and core simulation types
//!
//! Everything the renderer and HUD read lives here. Positions are in canvas
//! pixels with y pointing down; speeds are pixels per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded};
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress (initial state, or after reset)
    Idle,
    /// Active gameplay
    Running,
    /// Run suspended, resumes without resetting
    Paused,
    /// Lives ran out
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick
    pub speed: f32,
    pub fire_cooldown_ms: f64,
    /// Simulation time of the last shot (`None` until the first one)
    pub last_shot_ms: Option<f64>,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                Self::spawn_x(config),
                config.canvas_height - PLAYER_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: config.player_speed,
            fire_cooldown_ms: config.fire_cooldown_ms,
            last_shot_ms: None,
            moving_left: false,
            moving_right: false,
        }
    }

    /// Horizontally centered x for a fresh ship
    pub fn spawn_x(config: &GameConfig) -> f32 {
        config.canvas_width / 2.0 - PLAYER_WIDTH / 2.0
    }

    /// Largest x that keeps the ship on the canvas
    pub fn max_x(&self, config: &GameConfig) -> f32 {
        (config.canvas_width - self.size.x).max(0.0)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move back to the horizontal center (after losing a life)
    pub fn recenter(&mut self, config: &GameConfig) {
        self.pos.x = Self::spawn_x(config);
    }

    /// Whether the cooldown has elapsed at simulation time `now_ms`
    pub fn can_fire(&self, now_ms: f64) -> bool {
        self.last_shot_ms
            .is_none_or(|last| now_ms - last >= self.fire_cooldown_ms)
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// RGB hex
    pub color: u32,
}

impl Enemy {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Vertical travel direction of a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Decreasing y (player shots)
    Up,
    /// Increasing y (enemy shots)
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// A projectile fired by the player or an enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub direction: Direction,
}

impl Bullet {
    pub fn step(&mut self) {
        self.pos.y += self.speed * self.direction.sign();
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shortens the fire cooldown
    Speed,
    /// Extra life
    Life,
}

impl PowerUpKind {
    /// RGB hex used for the pickup and its collect burst
    pub fn color(self) -> u32 {
        match self {
            PowerUpKind::Speed => 0xffff00,
            PowerUpKind::Life => 0xff00ff,
        }
    }
}

/// A falling pickup dropped by a destroyed enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub kind: PowerUpKind,
    pub color: u32,
}

impl Bounded for PowerUp {
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

/// A particle for visual effects (no gameplay effect)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
    /// Ticks left before removal
    pub life: i32,
}

/// Something that happened during a transition or a tick (drained by the driver)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    PlayerShot,
    EnemyFired,
    EnemyDestroyed { pos: Vec2 },
    PlayerHit { lives_left: u32 },
    PowerUpDropped { kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    LevelUp { level: u32 },
    GameOver { score: u64, level: u32 },
}

/// Final numbers of a finished run (shown on the game-over panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub level: u32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// 1-based
    pub level: u32,
    pub sound_enabled: bool,
    /// Simulated milliseconds since the run started
    pub time_ms: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Set when the last run ended
    pub last_run: Option<RunSummary>,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh idle state
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: config.starting_lives,
            level: 1,
            sound_enabled: true,
            time_ms: 0.0,
            player: Player::new(config),
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            last_run: None,
            events: Vec::new(),
        }
    }

    /// A run is in progress (possibly paused)
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Drop every entity (player excluded)
    pub fn clear_entities(&mut self) {
        self.enemies.clear();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.power_ups.clear();
        self.particles.clear();
    }

    /// End the run: freeze the simulation and record the final numbers
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let summary = RunSummary {
            score: self.score,
            level: self.level,
        };
        self.last_run = Some(summary);
        self.events.push(GameEvent::GameOver {
            score: summary.score,
            level: summary.level,
        });
        log::info!("Game over: score {} at level {}", summary.score, summary.level);
    }
}
