//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Randomness only through [`RandomSource`]
//! - Wall time only through [`Clock`]
//! - Stable iteration order (entity list order)
//! - No rendering or audio dependencies

pub mod clock;
pub mod collision;
pub mod core;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::{Aabb, Bounded, collides, overlaps};
pub use self::core::GameCore;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use state::{
    Bullet, Direction, Enemy, GameEvent, GamePhase, GameState, Particle, Player, PowerUp,
    PowerUpKind, RunSummary,
};
pub use tick::{TickInput, advance};
