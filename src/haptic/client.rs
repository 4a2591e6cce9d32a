//! Thin haptic client
//!
//! The screens talk to this and nothing else: it owns the engine and offers
//! one operation - wrap a single event in a pattern, make a player, start
//! it. Construction opens and starts the engine; there is no retry or
//! degraded mode, callers treat a failure here as fatal.

use crate::haptic::engine::HapticEngine;
use crate::haptic::event::HapticEvent;
use crate::haptic::pattern::Pattern;
use crate::haptic::HapticError;

/// Process-wide handle to the haptic engine
pub struct HapticClient {
    engine: HapticEngine,
}

impl HapticClient {
    /// Open and start the engine
    ///
    /// `device` selects an output device by name (default device if `None`);
    /// `sample_rate` is the preferred rate, subject to device fallback.
    /// Fails with `EngineUnavailable` if the device cannot be opened or the
    /// stream cannot be started.
    pub fn connect(device: Option<&str>, sample_rate: u32) -> Result<Self, HapticError> {
        let mut engine = HapticEngine::new();
        engine.set_sample_rate(sample_rate);
        if let Some(name) = device {
            engine.select_device(name)?;
        }
        engine.start()?;
        Ok(Self { engine })
    }

    /// Wrap an already-started engine; used by tests and headless tools
    pub fn with_engine(engine: HapticEngine) -> Self {
        Self { engine }
    }

    /// Play a single event immediately
    pub fn play(&self, event: &HapticEvent) -> Result<(), HapticError> {
        self.play_at(event, 0.0)
    }

    /// Play a single event `at` seconds from now
    ///
    /// Wraps the event in a one-event pattern with no global parameters,
    /// requests a player, and starts it. Returns once playback has been
    /// initiated, never when the effect finishes.
    pub fn play_at(&self, event: &HapticEvent, at: f32) -> Result<(), HapticError> {
        let pattern = Pattern::single(event.clone());
        let player = self.engine.make_player(&pattern)?;
        player.start(at)
    }

    /// Effective engine sample rate
    pub fn sample_rate(&self) -> u32 {
        self.engine.sample_rate()
    }

    /// Name of the device the engine is driving
    pub fn device_name(&self) -> Option<&str> {
        self.engine.device_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_on_stopped_engine_is_playback_failed() {
        // An engine that was never started refuses players but never panics
        let client = HapticClient::with_engine(HapticEngine::new());
        let event = HapticEvent::transient(vec![], 0.0).unwrap();
        assert!(matches!(
            client.play(&event),
            Err(HapticError::PlaybackFailed(_))
        ));
    }
}
