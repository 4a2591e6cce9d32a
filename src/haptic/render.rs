//! Waveform rendering of haptic events
//!
//! Turns an event descriptor into an actuator drive signal at the engine
//! sample rate. The carrier is a sine whose frequency tracks sharpness
//! across the voice-coil actuator band; intensity and the envelope
//! parameters shape the amplitude:
//!
//! - Transient: a fixed short pulse with an exponential decay.
//! - Continuous: linear attack ramp, then either hold-and-release
//!   (sustained) or immediate decay (unsustained), all scaled by the
//!   event duration.

use crate::haptic::event::{EventKind, HapticEvent, ParameterId};
use crate::haptic::pattern::Pattern;

/// Length of a transient pulse in seconds
pub const TRANSIENT_PULSE_SECS: f32 = 0.03;

/// Carrier frequency at sharpness 0 (low end of the actuator band)
pub const CARRIER_BASE_HZ: f32 = 80.0;

/// Carrier frequency span across the sharpness range
pub const CARRIER_SPAN_HZ: f32 = 150.0;

/// Map sharpness [0,1] to a carrier frequency in the actuator band
pub fn carrier_hz(sharpness: f32) -> f32 {
    CARRIER_BASE_HZ + sharpness.clamp(0.0, 1.0) * CARRIER_SPAN_HZ
}

fn secs_to_samples(secs: f32, sample_rate: u32) -> usize {
    (secs as f64 * sample_rate as f64).round() as usize
}

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Amplitude envelope for a continuous event, all times in seconds
///
/// Normalized attack/release/decay values are clamped to [0,1] and scaled
/// by the event duration; negative values mean "instant". An unsustained
/// event with no decay parameter decays over the remainder of its duration.
#[derive(Debug, Clone, Copy)]
struct Envelope {
    attack: f32,
    duration: f32,
    sustained: bool,
    release: f32,
    decay: f32,
}

impl Envelope {
    fn for_event(event: &HapticEvent) -> Option<Self> {
        let duration = event.duration()?;
        let attack = clamp01(event.value_of(ParameterId::AttackTime).unwrap_or(0.0)) * duration;
        let sustained = event.value_of(ParameterId::Sustained).unwrap_or(1.0) >= 0.5;
        let release = clamp01(event.value_of(ParameterId::ReleaseTime).unwrap_or(0.0)) * duration;
        // An absent decayTime defaults to the remainder of the duration;
        // an explicit value <= 0 means instant, like attack and release.
        let decay = match event.value_of(ParameterId::DecayTime) {
            Some(v) => clamp01(v) * duration,
            None => (duration - attack).max(0.0),
        };
        Some(Self {
            attack,
            duration,
            sustained,
            release,
            decay,
        })
    }

    /// Rendered length in seconds; the release tail extends past the duration
    fn total_secs(&self) -> f32 {
        if self.sustained {
            self.duration + self.release
        } else {
            self.duration
        }
    }

    /// Envelope level at `t` seconds, in [0, 1]
    fn level(&self, t: f32) -> f32 {
        let rise = if self.attack <= 0.0 {
            1.0
        } else {
            (t / self.attack).min(1.0)
        };

        if self.sustained {
            if t < self.duration {
                rise
            } else {
                // Release from whatever level the attack reached by the end
                let peak = if self.attack <= 0.0 {
                    1.0
                } else {
                    (self.duration / self.attack).min(1.0)
                };
                if self.release <= 0.0 {
                    0.0
                } else {
                    peak * (1.0 - (t - self.duration) / self.release).max(0.0)
                }
            }
        } else if t < self.attack {
            rise
        } else if self.decay <= 0.0 {
            0.0
        } else {
            (1.0 - (t - self.attack) / self.decay).max(0.0)
        }
    }
}

fn body_secs(event: &HapticEvent) -> f32 {
    match event.kind() {
        EventKind::Transient => TRANSIENT_PULSE_SECS,
        EventKind::Continuous => Envelope::for_event(event)
            .map(|e| e.total_secs())
            .unwrap_or(0.0),
    }
}

/// Total rendered length of an event in seconds, silence prefix included
pub fn event_total_secs(event: &HapticEvent) -> f32 {
    event.relative_time() + body_secs(event)
}

/// Render one event to mono samples, including its silence prefix
pub fn render_event(event: &HapticEvent, sample_rate: u32) -> Vec<f32> {
    let prefix = secs_to_samples(event.relative_time(), sample_rate);
    let body_len = secs_to_samples(body_secs(event), sample_rate);
    let mut out = vec![0.0f32; prefix + body_len];

    let intensity = event.value_of(ParameterId::Intensity).unwrap_or(1.0);
    let freq = carrier_hz(event.value_of(ParameterId::Sharpness).unwrap_or(0.5));
    let dt = 1.0 / sample_rate as f32;

    match event.kind() {
        EventKind::Transient => {
            for i in 0..body_len {
                let t = i as f32 * dt;
                let level = (-4.0 * t / TRANSIENT_PULSE_SECS).exp();
                out[prefix + i] =
                    intensity * level * (std::f32::consts::TAU * freq * t).sin();
            }
        }
        EventKind::Continuous => {
            if let Some(envelope) = Envelope::for_event(event) {
                for i in 0..body_len {
                    let t = i as f32 * dt;
                    out[prefix + i] = intensity
                        * envelope.level(t)
                        * (std::f32::consts::TAU * freq * t).sin();
                }
            }
        }
    }

    out
}

/// Render a pattern by mixing its events at their relative offsets
pub fn render_pattern(pattern: &Pattern, sample_rate: u32) -> Vec<f32> {
    let mut out: Vec<f32> = Vec::new();
    for event in pattern.events() {
        let rendered = render_event(event, sample_rate);
        if rendered.len() > out.len() {
            out.resize(rendered.len(), 0.0);
        }
        for (mixed, sample) in out.iter_mut().zip(rendered.iter()) {
            *mixed += sample;
        }
    }
    out
}
