//! Hapticlab - interactive haptic-feedback parameter explorer
//!
//! This library provides the haptic event model, the waveform renderer that
//! turns events into actuator drive signals, and the cpal-backed engine that
//! plays them through the system audio output. The egui screens in [`ui`]
//! are thin wrappers that translate slider and toggle state into events.

pub mod config;
pub mod haptic;
pub mod ui;

pub use haptic::{
    DeviceInfo, EngineState, EventKind, EventParameter, HapticClient, HapticEngine, HapticError,
    HapticEvent, ParameterId, Pattern, PatternPlayer,
};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default sample rate for actuator output (48kHz, the common device default)
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Default parameter values shared by every screen.
///
/// A screen varies one or two of these and sends the rest unchanged.
pub mod defaults {
    /// Event intensity (amplitude scale)
    pub const INTENSITY: f32 = 0.8;
    /// Event sharpness (carrier pitch within the actuator band)
    pub const SHARPNESS: f32 = 0.5;
    /// Start offset in seconds relative to the play request
    pub const RELATIVE_TIME: f32 = 0.0;
    /// Continuous event duration in seconds
    pub const DURATION: f32 = 1.0;
    /// Normalized attack time
    pub const ATTACK_TIME: f32 = 0.5;
    /// Normalized release time (sustained) or decay time (unsustained)
    pub const RELEASE_OR_DECAY_TIME: f32 = 0.5;
}
