//! Space Shooter - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `renderer`: Scene building and WebGPU rendering pipeline
//! - `audio`: Procedural sound effects driven by simulation events
//! - `config`: Data-driven game balance
//! - `platform`: Input mapping and the headless autopilot

pub mod audio;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameCore, GamePhase, GameState, TickInput};

/// Fixed entity geometry and effect recipes
pub mod consts {
    /// Player ship dimensions
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Distance from the bottom of the canvas to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Enemy ship dimensions
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    /// Enemies enter from this band above the canvas
    pub const ENEMY_SPAWN_BAND: f32 = 200.0;
    pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;
    pub const ENEMY_COLOR: u32 = 0xff5555;

    /// Bullet hitbox (both owners)
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 16.0;
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_BULLET_SPEED: f32 = 5.0;

    /// Power-up defaults
    pub const POWER_UP_RADIUS: f32 = 10.0;
    pub const POWER_UP_SPEED: f32 = 2.0;

    /// Score for destroying an enemy with a bullet
    pub const ENEMY_KILL_SCORE: u64 = 100;

    /// Base wave size; the initial wave adds `level`, replenishment adds `2 × level`
    pub const BASE_ENEMY_COUNT: usize = 5;

    /// Explosion burst (enemy destroyed, player hit)
    pub const EXPLOSION_PARTICLES: usize = 15;
    pub const EXPLOSION_SPREAD: f32 = 4.0;
    pub const EXPLOSION_SIZE: (f32, f32) = (2.0, 6.0);
    pub const EXPLOSION_LIFE: i32 = 30;
    pub const EXPLOSION_COLOR: u32 = 0xffaa00;

    /// Power-up pickup burst
    pub const COLLECT_PARTICLES: usize = 20;
    pub const COLLECT_SPREAD: f32 = 2.0;
    pub const COLLECT_SIZE: (f32, f32) = (2.0, 5.0);
    pub const COLLECT_LIFE: i32 = 50;

    /// Level-up sparkle
    pub const LEVEL_UP_PARTICLES: usize = 30;
    pub const LEVEL_UP_SPREAD: f32 = 1.0;
    pub const LEVEL_UP_SIZE: (f32, f32) = (2.0, 7.0);
    pub const LEVEL_UP_LIFE: i32 = 60;
    pub const LEVEL_UP_COLOR: u32 = 0x00ffff;
}
