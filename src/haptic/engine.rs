//! cpal-backed haptic engine and one-shot players
//!
//! Provides high-level interface for:
//! - Enumerating output devices that can drive an actuator
//! - Opening and starting the output stream
//! - Creating one-shot players that enqueue rendered voices
//!
//! The output callback owns the active voice list; players hand it new
//! voices through a bounded lock-free channel, so playback never takes a
//! lock on the audio thread. An atomic frame counter shared with the
//! callback gives `start(at)` a sample-accurate notion of "now".

use crate::haptic::pattern::Pattern;
use crate::haptic::render;
use crate::haptic::HapticError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host, SampleRate, Stream, StreamConfig};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Maximum voices queued between a `start` call and the next callback
const VOICE_QUEUE_DEPTH: usize = 32;

/// Output device information
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Device name
    pub name: String,
    /// Whether this is the default output device
    pub is_default: bool,
    /// Supported sample rates
    pub sample_rates: Vec<u32>,
    /// Number of output channels
    pub output_channels: u16,
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Engine is stopped
    Stopped,
    /// Engine is running and mixing voices
    Running,
}

/// A rendered pattern scheduled at an absolute output frame
struct Voice {
    start_frame: u64,
    samples: Vec<f32>,
}

/// Haptic engine driving actuator waveforms through an output stream
pub struct HapticEngine {
    state: EngineState,
    sample_rate: u32,
    device_name: Option<String>,
    host: Option<Host>,
    device: Option<Device>,
    output_stream: Option<Stream>,
    voice_tx: Option<crossbeam_channel::Sender<Voice>>,
    running: Option<Arc<AtomicBool>>,
    frame_counter: Option<Arc<AtomicU64>>,
}

impl HapticEngine {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        Self {
            state: EngineState::Stopped,
            sample_rate: crate::DEFAULT_SAMPLE_RATE,
            device_name: None,
            host: None,
            device: None,
            output_stream: None,
            voice_tx: None,
            running: None,
            frame_counter: None,
        }
    }

    /// Get current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Get configured sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Whether the engine will accept a sample rate
    pub fn is_valid_sample_rate(rate: u32) -> bool {
        (8000..=192000).contains(&rate)
    }

    /// Set sample rate (must be called before start)
    pub fn set_sample_rate(&mut self, rate: u32) {
        if Self::is_valid_sample_rate(rate) {
            self.sample_rate = rate;
        } else {
            tracing::warn!("Ignoring out-of-range sample rate: {} Hz", rate);
        }
    }

    /// Get the selected device name
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// List available output devices
    pub fn list_devices() -> Result<Vec<DeviceInfo>, HapticError> {
        let host = cpal::default_host();
        let mut devices = Vec::new();

        let default_output = host.default_output_device().map(|d| d.name().ok());

        let output_devices = host
            .output_devices()
            .map_err(|e| HapticError::EngineUnavailable(e.to_string()))?;

        for device in output_devices {
            let name = device.name().unwrap_or_else(|_| "Unknown".to_string());

            let is_default = default_output
                .as_ref()
                .map(|d| d.as_ref() == Some(&name))
                .unwrap_or(false);

            let output_channels = device
                .default_output_config()
                .map(|c| c.channels())
                .unwrap_or(0);

            // Common sample rates to check
            let common_rates = [44100, 48000, 88200, 96000, 176400, 192000];
            let mut sample_rates = Vec::new();

            if let Ok(configs) = device.supported_output_configs() {
                for config in configs {
                    for &rate in &common_rates {
                        if (config.min_sample_rate().0..=config.max_sample_rate().0).contains(&rate)
                            && !sample_rates.contains(&rate)
                        {
                            sample_rates.push(rate);
                        }
                    }
                }
            }

            sample_rates.sort();

            devices.push(DeviceInfo {
                name,
                is_default,
                sample_rates,
                output_channels,
            });
        }

        Ok(devices)
    }

    /// Select an output device by name
    pub fn select_device(&mut self, name: &str) -> Result<(), HapticError> {
        let host = cpal::default_host();

        let mut output_devices = host
            .output_devices()
            .map_err(|e| HapticError::EngineUnavailable(e.to_string()))?;

        let device = output_devices
            .find(|d| d.name().map(|n| n == name).unwrap_or(false))
            .ok_or_else(|| {
                HapticError::EngineUnavailable(format!("output device not found: {name}"))
            })?;

        self.host = Some(host);
        self.device = Some(device);
        self.device_name = Some(name.to_string());

        Ok(())
    }

    /// Start the engine
    ///
    /// Opens the output stream on the selected device (or the default
    /// output device if none was selected) and begins mixing voices.
    pub fn start(&mut self) -> Result<(), HapticError> {
        if self.device.is_none() {
            let host = cpal::default_host();
            let device = host.default_output_device().ok_or_else(|| {
                HapticError::EngineUnavailable("no output device available".to_string())
            })?;
            self.device_name = device.name().ok();
            self.host = Some(host);
            self.device = Some(device);
        }
        let device = self
            .device
            .as_ref()
            .ok_or_else(|| HapticError::EngineUnavailable("no output device".to_string()))?;

        let default_output = device.default_output_config();
        tracing::info!(
            "Device default output config: {:?}",
            default_output
                .as_ref()
                .map(|c| (c.sample_rate().0, c.channels()))
        );

        let device_rate = default_output
            .as_ref()
            .map(|c| c.sample_rate().0)
            .unwrap_or(self.sample_rate);
        let channels = default_output.as_ref().map(|c| c.channels()).unwrap_or(2);

        // Try the configured rate first, fall back to the device default
        let rates_to_try = if device_rate != self.sample_rate {
            vec![self.sample_rate, device_rate]
        } else {
            vec![self.sample_rate]
        };

        let mut effective_rate = self.sample_rate;
        let mut output_config = StreamConfig {
            channels,
            sample_rate: SampleRate(self.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        for &rate in &rates_to_try {
            output_config.sample_rate = SampleRate(rate);
            match device.build_output_stream(
                &output_config,
                |_: &mut [f32], _: &cpal::OutputCallbackInfo| {},
                |_| {},
                None,
            ) {
                Ok(_stream) => {
                    effective_rate = rate;
                    if rate != self.sample_rate {
                        tracing::warn!(
                            "Configured rate {} Hz failed, using device default {} Hz",
                            self.sample_rate,
                            rate
                        );
                    }
                    break;
                }
                Err(e) => {
                    tracing::warn!("Sample rate {} Hz failed: {}", rate, e);
                    continue;
                }
            }
        }

        output_config.sample_rate = SampleRate(effective_rate);
        tracing::info!("Effective sample rate: {} Hz", effective_rate);

        // Voices travel to the callback over a bounded lock-free channel;
        // the active voice list is owned by the closure.
        let (voice_tx, voice_rx) = crossbeam_channel::bounded::<Voice>(VOICE_QUEUE_DEPTH);
        let mut voices: Vec<Voice> = Vec::new();

        let running = Arc::new(AtomicBool::new(true));
        let frame_counter = Arc::new(AtomicU64::new(0));

        let output_running = Arc::clone(&running);
        let output_frames = Arc::clone(&frame_counter);
        let num_channels = channels as usize;

        let output_stream = device
            .build_output_stream(
                &output_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !output_running.load(Ordering::Relaxed) {
                        data.fill(0.0);
                        return;
                    }

                    while let Ok(voice) = voice_rx.try_recv() {
                        voices.push(voice);
                    }

                    let start = output_frames.load(Ordering::Acquire);
                    let frame_count = data.len() / num_channels;

                    for (i, frame) in data.chunks_mut(num_channels).enumerate() {
                        let n = start + i as u64;
                        let mut sample = 0.0f32;
                        for voice in &voices {
                            if n >= voice.start_frame {
                                let idx = (n - voice.start_frame) as usize;
                                if idx < voice.samples.len() {
                                    sample += voice.samples[idx];
                                }
                            }
                        }
                        // Overlapping voices mix freely; saturate at full scale
                        let sample = sample.clamp(-1.0, 1.0);
                        for ch in frame.iter_mut() {
                            *ch = sample;
                        }
                    }

                    let end = start + frame_count as u64;
                    voices.retain(|v| v.start_frame + v.samples.len() as u64 > end);

                    output_frames.fetch_add(frame_count as u64, Ordering::Release);
                },
                move |err| {
                    tracing::error!("Output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| HapticError::EngineUnavailable(e.to_string()))?;

        output_stream
            .play()
            .map_err(|e| HapticError::EngineUnavailable(e.to_string()))?;

        self.output_stream = Some(output_stream);
        self.voice_tx = Some(voice_tx);
        self.running = Some(running);
        self.frame_counter = Some(frame_counter);
        self.state = EngineState::Running;
        self.sample_rate = effective_rate;

        tracing::info!(
            "Haptic engine started: {} @ {}Hz, {} channels",
            self.device_name.as_deref().unwrap_or("unknown"),
            effective_rate,
            channels
        );

        Ok(())
    }

    /// Stop the engine and drop the output stream
    pub fn stop(&mut self) {
        if let Some(ref running) = self.running {
            running.store(false, Ordering::Relaxed);
        }

        self.output_stream = None;
        self.voice_tx = None;
        self.running = None;
        self.frame_counter = None;
        self.state = EngineState::Stopped;

        tracing::info!("Haptic engine stopped");
    }

    /// Create a one-shot player for a pattern
    ///
    /// Renders the pattern to samples at the engine rate. Fails with
    /// `PlaybackFailed` if the engine is not running.
    pub fn make_player(&self, pattern: &Pattern) -> Result<PatternPlayer, HapticError> {
        let (voice_tx, running, frame_counter) =
            match (&self.voice_tx, &self.running, &self.frame_counter) {
                (Some(tx), Some(running), Some(frames)) if self.state == EngineState::Running => {
                    (tx.clone(), Arc::clone(running), Arc::clone(frames))
                }
                _ => {
                    return Err(HapticError::PlaybackFailed(
                        "engine is not running".to_string(),
                    ))
                }
            };

        let samples = render::render_pattern(pattern, self.sample_rate);

        Ok(PatternPlayer {
            samples,
            sample_rate: self.sample_rate,
            voice_tx,
            running,
            frame_counter,
        })
    }
}

impl Default for HapticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HapticEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One-shot playback handle for a rendered pattern
///
/// `start` consumes the player: a player is used exactly once and then
/// discarded, matching the fire-and-forget playback model.
pub struct PatternPlayer {
    samples: Vec<f32>,
    sample_rate: u32,
    voice_tx: crossbeam_channel::Sender<Voice>,
    running: Arc<AtomicBool>,
    frame_counter: Arc<AtomicU64>,
}

impl PatternPlayer {
    /// Rendered length of the pattern in samples
    pub fn len_samples(&self) -> usize {
        self.samples.len()
    }

    /// Start playback `at` seconds from now
    ///
    /// Returns once the voice is queued; it never waits for the effect to
    /// finish. Negative offsets are treated as "now".
    pub fn start(self, at: f32) -> Result<(), HapticError> {
        if !self.running.load(Ordering::Relaxed) {
            return Err(HapticError::PlaybackFailed("engine stopped".to_string()));
        }

        let offset = (at.max(0.0) as f64 * self.sample_rate as f64).round() as u64;
        let start_frame = self.frame_counter.load(Ordering::Acquire) + offset;

        self.voice_tx
            .try_send(Voice {
                start_frame,
                samples: self.samples,
            })
            .map_err(|_| HapticError::PlaybackFailed("voice queue full".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptic::event::HapticEvent;

    #[test]
    fn test_engine_creation() {
        let engine = HapticEngine::new();
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.sample_rate(), crate::DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn test_engine_default() {
        let engine = HapticEngine::default();
        assert_eq!(engine.state(), EngineState::Stopped);
    }

    #[test]
    fn test_sample_rate_bounds() {
        let mut engine = HapticEngine::new();
        engine.set_sample_rate(44100);
        assert_eq!(engine.sample_rate(), 44100);

        engine.set_sample_rate(1); // out of range, ignored
        assert_eq!(engine.sample_rate(), 44100);
    }

    #[test]
    fn test_sample_rate_validity() {
        assert!(HapticEngine::is_valid_sample_rate(8000));
        assert!(HapticEngine::is_valid_sample_rate(48000));
        assert!(HapticEngine::is_valid_sample_rate(192000));
        assert!(!HapticEngine::is_valid_sample_rate(1000));
        assert!(!HapticEngine::is_valid_sample_rate(384000));
    }

    #[test]
    fn test_make_player_requires_running_engine() {
        let engine = HapticEngine::new();
        let event = HapticEvent::transient(vec![], 0.0).unwrap();
        let pattern = Pattern::single(event);
        let result = engine.make_player(&pattern);
        assert!(matches!(result, Err(HapticError::PlaybackFailed(_))));
    }

    #[test]
    fn test_list_devices() {
        // This may fail on CI without audio devices, but shouldn't panic
        match HapticEngine::list_devices() {
            Ok(devices) => {
                for device in &devices {
                    println!("  - {} (out:{})", device.name, device.output_channels);
                }
            }
            Err(e) => {
                println!("No output devices available: {}", e);
            }
        }
    }
}
