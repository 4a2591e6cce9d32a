//! Haptic event model, rendering, and playback
//!
//! This module contains everything between the UI and the audio device:
//! - Event descriptors and parameter validation ([`event`])
//! - Single-shot pattern containers ([`pattern`])
//! - Waveform rendering of events to actuator drive signals ([`render`])
//! - The cpal-backed engine and one-shot players ([`engine`])
//! - The thin client the screens talk to ([`client`])

use thiserror::Error;

pub mod client;
pub mod engine;
pub mod event;
pub mod pattern;
pub mod render;

pub use client::HapticClient;
pub use engine::{DeviceInfo, EngineState, HapticEngine, PatternPlayer};
pub use event::{EventKind, EventParameter, HapticEvent, ParameterId};
pub use pattern::Pattern;

/// Errors that can occur while opening the engine or playing events
#[derive(Error, Debug)]
pub enum HapticError {
    /// The output device could not be opened or started. Fatal at
    /// construction time; there is no retry or degraded mode.
    #[error("haptic engine unavailable: {0}")]
    EngineUnavailable(String),

    /// An event parameter value is outside its documented range
    #[error("parameter {id} out of range: {value}")]
    InvalidParameter { id: ParameterId, value: f32 },

    /// A pattern could not be constructed from the given events
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A player could not be created or started. Callers treat this as
    /// best-effort and discard it after logging.
    #[error("playback failed: {0}")]
    PlaybackFailed(String),
}
