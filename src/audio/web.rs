//! Web Audio playback

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::{SoundEffect, Tone, Waveform};

/// Output gain applied on top of each tone's own volume
const MASTER_VOLUME: f32 = 0.8;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some(ctx) = &self.ctx else { return };

        // Browsers start the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        for tone in effect.tones() {
            self.play_tone(ctx, tone, MASTER_VOLUME);
        }
    }

    fn play_tone(&self, ctx: &AudioContext, tone: &Tone, vol: f32) {
        let Some((osc, gain)) = create_osc(ctx, tone.freq, oscillator_type(tone.wave)) else {
            return;
        };
        let t = ctx.current_time() + tone.delay;

        gain.gain().set_value_at_time(vol * tone.gain, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + tone.decay)
            .ok();
        if let Some(to) = tone.sweep_to {
            osc.frequency().set_value_at_time(tone.freq, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + tone.decay)
                .ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(ctx.current_time() + tone.end()).ok();
    }
}

fn oscillator_type(wave: Waveform) -> OscillatorType {
    match wave {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

/// Create an oscillator routed through a gain node to the speakers
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
