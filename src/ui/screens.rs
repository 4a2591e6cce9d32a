//! Parameter exploration screens
//!
//! Each screen owns its local slider/toggle state, renders the controls,
//! and builds one event descriptor per Play press from its live values and
//! the shared defaults. The `build_*` methods are pure so the descriptors
//! can be checked without a running engine or a UI.

use crate::defaults;
use crate::haptic::event::{EventParameter, HapticEvent, ParameterId};
use crate::haptic::{HapticClient, HapticError};

fn param(id: ParameterId, value: f32) -> EventParameter {
    EventParameter::new(id, value)
}

/// Play an event, log-and-discard any failure
///
/// Playback is best-effort by design: a failed play is a warning in the
/// log, never a user-visible error.
fn trigger(client: &HapticClient, event: Result<HapticEvent, HapticError>) {
    if let Err(e) = event.and_then(|e| client.play(&e)) {
        tracing::warn!("Playback discarded: {}", e);
    }
}

/// EventType screen: transient vs continuous, all defaults
#[derive(Default)]
pub struct EventTypeScreen;

impl EventTypeScreen {
    pub fn build_transient(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::transient(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
            ],
            defaults::RELATIVE_TIME,
        )
    }

    pub fn build_continuous(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::continuous(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
            ],
            defaults::RELATIVE_TIME,
            0.5,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.horizontal(|ui| {
            if ui.button("Transient").clicked() {
                trigger(client, self.build_transient());
            }
            if ui.button("Continuous").clicked() {
                trigger(client, self.build_continuous());
            }
        });
    }
}

/// Intensity screen: transient event with a live intensity value
pub struct IntensityScreen {
    pub intensity: f32,
}

impl Default for IntensityScreen {
    fn default() -> Self {
        Self {
            intensity: defaults::INTENSITY,
        }
    }
}

impl IntensityScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::transient(
            vec![
                param(ParameterId::Intensity, self.intensity),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
            ],
            defaults::RELATIVE_TIME,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("Intensity: {:.2}", self.intensity));
        ui.add(egui::Slider::new(&mut self.intensity, 0.0..=1.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// Sharpness screen: transient event with a live sharpness value
pub struct SharpnessScreen {
    pub sharpness: f32,
}

impl Default for SharpnessScreen {
    fn default() -> Self {
        Self {
            sharpness: defaults::SHARPNESS,
        }
    }
}

impl SharpnessScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::transient(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, self.sharpness),
            ],
            defaults::RELATIVE_TIME,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("Sharpness: {:.2}", self.sharpness));
        ui.add(egui::Slider::new(&mut self.sharpness, 0.0..=1.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// RelativeTime screen: transient event with a live start offset
pub struct RelativeTimeScreen {
    pub relative_time: f32,
}

impl Default for RelativeTimeScreen {
    fn default() -> Self {
        Self {
            relative_time: defaults::RELATIVE_TIME,
        }
    }
}

impl RelativeTimeScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::transient(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
            ],
            self.relative_time,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("relativeTime: {:.2} sec", self.relative_time));
        ui.add(egui::Slider::new(&mut self.relative_time, 0.0..=1.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// Duration screen: continuous event with a live duration
pub struct DurationScreen {
    pub duration: f32,
}

impl Default for DurationScreen {
    fn default() -> Self {
        Self {
            duration: defaults::DURATION,
        }
    }
}

impl DurationScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::continuous(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
            ],
            defaults::RELATIVE_TIME,
            self.duration,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("Duration: {:.2} sec", self.duration));
        ui.add(egui::Slider::new(&mut self.duration, 0.0..=30.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// Sustained screen: continuous event with a live sustain flag
///
/// The sustain flag also decides which ramp-out parameter is sent:
/// releaseTime when sustained, decayTime otherwise, never both.
pub struct SustainedScreen {
    pub sustained: bool,
}

impl Default for SustainedScreen {
    fn default() -> Self {
        Self { sustained: true }
    }
}

impl SustainedScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        let ramp_out = if self.sustained {
            ParameterId::ReleaseTime
        } else {
            ParameterId::DecayTime
        };
        HapticEvent::continuous(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
                param(ParameterId::Sustained, if self.sustained { 1.0 } else { 0.0 }),
                param(ParameterId::AttackTime, defaults::ATTACK_TIME),
                param(ramp_out, defaults::RELEASE_OR_DECAY_TIME),
            ],
            defaults::RELATIVE_TIME,
            defaults::DURATION,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("sustained: {}", self.sustained));
        ui.checkbox(&mut self.sustained, "Sustained");
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// Attack screen: unsustained continuous event with a live attack time
pub struct AttackScreen {
    pub attack_time: f32,
}

impl Default for AttackScreen {
    fn default() -> Self {
        Self {
            attack_time: defaults::ATTACK_TIME,
        }
    }
}

impl AttackScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        HapticEvent::continuous(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
                param(ParameterId::Sustained, 0.0),
                param(ParameterId::AttackTime, self.attack_time),
            ],
            defaults::RELATIVE_TIME,
            10.0,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("Attack: {:.2}", self.attack_time));
        ui.add(egui::Slider::new(&mut self.attack_time, 0.0..=1.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}

/// Release/decay screen: sustain flag plus a live ramp-out value
pub struct ReleaseDecayScreen {
    pub sustained: bool,
    pub release_or_decay_time: f32,
}

impl Default for ReleaseDecayScreen {
    fn default() -> Self {
        Self {
            sustained: true,
            release_or_decay_time: defaults::RELEASE_OR_DECAY_TIME,
        }
    }
}

impl ReleaseDecayScreen {
    pub fn build_event(&self) -> Result<HapticEvent, HapticError> {
        let ramp_out = if self.sustained {
            ParameterId::ReleaseTime
        } else {
            ParameterId::DecayTime
        };
        HapticEvent::continuous(
            vec![
                param(ParameterId::Intensity, defaults::INTENSITY),
                param(ParameterId::Sharpness, defaults::SHARPNESS),
                param(ParameterId::Sustained, if self.sustained { 1.0 } else { 0.0 }),
                param(ParameterId::AttackTime, defaults::ATTACK_TIME),
                param(ramp_out, self.release_or_decay_time),
            ],
            defaults::RELATIVE_TIME,
            defaults::DURATION,
        )
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &HapticClient) {
        ui.label(format!("sustained: {}", self.sustained));
        ui.checkbox(&mut self.sustained, "Sustained");
        if self.sustained {
            ui.label(format!("Release: {:.2}", self.release_or_decay_time));
        } else {
            ui.label(format!("Decay: {:.2}", self.release_or_decay_time));
        }
        ui.add(egui::Slider::new(&mut self.release_or_decay_time, 0.0..=1.0));
        if ui.button("Play").clicked() {
            trigger(client, self.build_event());
        }
    }
}
