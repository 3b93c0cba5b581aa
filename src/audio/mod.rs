//! Sound effects
//!
//! Procedurally generated; no external files needed. Each effect is a short
//! list of oscillator [`Tone`]s. The simulation never plays sound itself: the
//! driver maps drained [`GameEvent`]s through [`SoundEffect::for_event`] and
//! plays the result when sound is enabled.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::state::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Run started or resumed from scratch
    Start,
    /// Player fired
    Shoot,
    /// Enemy destroyed by a bullet
    EnemyExplode,
    /// Player lost a life
    PlayerHit,
    /// Power-up collected
    PowerUpCollect,
    /// New level reached
    LevelUp,
    /// Game over
    GameOver,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One oscillator with an exponential decay envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Exponential pitch sweep target, if any
    pub sweep_to: Option<f32>,
    pub wave: Waveform,
    /// Peak gain before the master volume
    pub gain: f32,
    /// Seconds from the effect start
    pub delay: f64,
    /// Seconds until the envelope has decayed
    pub decay: f64,
}

impl Tone {
    const fn new(freq: f32, wave: Waveform, gain: f32, decay: f64) -> Self {
        Self {
            freq,
            sweep_to: None,
            wave,
            gain,
            delay: 0.0,
            decay,
        }
    }

    const fn sweep(mut self, to: f32) -> Self {
        self.sweep_to = Some(to);
        self
    }

    const fn after(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Seconds until the oscillator stops
    pub fn end(&self) -> f64 {
        self.delay + self.decay + 0.05
    }
}

const START: &[Tone] = &[
    Tone::new(200.0, Waveform::Triangle, 0.3, 0.2).sweep(600.0),
];

const SHOOT: &[Tone] = &[
    Tone::new(900.0, Waveform::Square, 0.08, 0.08).sweep(300.0),
];

const ENEMY_EXPLODE: &[Tone] = &[
    Tone::new(100.0, Waveform::Sawtooth, 0.4, 0.3).sweep(30.0),
    Tone::new(1500.0, Waveform::Square, 0.12, 0.08),
];

const PLAYER_HIT: &[Tone] = &[
    Tone::new(300.0, Waveform::Sine, 0.5, 0.5).sweep(40.0),
    Tone::new(80.0, Waveform::Sawtooth, 0.3, 0.3),
];

const POWER_UP_COLLECT: &[Tone] = &[
    Tone::new(600.0, Waveform::Sine, 0.25, 0.15),
    Tone::new(800.0, Waveform::Sine, 0.25, 0.15).after(0.08),
    Tone::new(1000.0, Waveform::Sine, 0.25, 0.15).after(0.16),
];

const LEVEL_UP: &[Tone] = &[
    Tone::new(400.0, Waveform::Triangle, 0.3, 0.4),
    Tone::new(500.0, Waveform::Triangle, 0.3, 0.4).after(0.1),
    Tone::new(600.0, Waveform::Triangle, 0.3, 0.4).after(0.2),
    Tone::new(800.0, Waveform::Triangle, 0.3, 0.4).after(0.3),
];

const GAME_OVER: &[Tone] = &[
    Tone::new(400.0, Waveform::Sine, 0.3, 0.3),
    Tone::new(350.0, Waveform::Sine, 0.3, 0.3).after(0.2),
    Tone::new(300.0, Waveform::Sine, 0.3, 0.3).after(0.4),
    Tone::new(200.0, Waveform::Sine, 0.3, 0.3).after(0.6),
];

impl SoundEffect {
    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(Self::Start),
            GameEvent::PlayerShot => Some(Self::Shoot),
            GameEvent::EnemyDestroyed { .. } => Some(Self::EnemyExplode),
            GameEvent::PlayerHit { .. } => Some(Self::PlayerHit),
            GameEvent::PowerUpCollected { .. } => Some(Self::PowerUpCollect),
            GameEvent::LevelUp { .. } => Some(Self::LevelUp),
            GameEvent::GameOver { .. } => Some(Self::GameOver),
            GameEvent::Paused
            | GameEvent::Resumed
            | GameEvent::Reset
            | GameEvent::EnemyFired
            | GameEvent::PowerUpDropped { .. } => None,
        }
    }

    pub fn tones(self) -> &'static [Tone] {
        match self {
            Self::Start => START,
            Self::Shoot => SHOOT,
            Self::EnemyExplode => ENEMY_EXPLODE,
            Self::PlayerHit => PLAYER_HIT,
            Self::PowerUpCollect => POWER_UP_COLLECT,
            Self::LevelUp => LEVEL_UP,
            Self::GameOver => GAME_OVER,
        }
    }
}

/// Effects to play for a batch of events, in order (empty when muted)
pub fn effects_for(events: &[GameEvent], sound_enabled: bool) -> Vec<SoundEffect> {
    if !sound_enabled {
        return Vec::new();
    }
    events.iter().filter_map(SoundEffect::for_event).collect()
}
