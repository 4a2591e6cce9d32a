//! Haptic event descriptors
//!
//! An event is an immutable value built fresh per play action: a kind
//! (transient pulse or continuous hold), an ordered list of named float
//! parameters, a relative start offset, and - for continuous events only -
//! a duration. All range validation happens at construction so that `play`
//! never rejects an in-range descriptor.

use crate::haptic::HapticError;
use std::fmt;

/// Event kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Short pulse; ignores duration and envelope shaping
    Transient,
    /// Holds over a duration; supports sustain/attack/release/decay shaping
    Continuous,
}

/// Recognized event parameter identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterId {
    /// Amplitude scale, [0, 1]
    Intensity,
    /// Carrier pitch within the actuator band, [0, 1]
    Sharpness,
    /// Hold-at-level flag, {0, 1}
    Sustained,
    /// Normalized ramp-in time, [-1, 1]
    AttackTime,
    /// Normalized ramp-out time after the duration ends, [-1, 1]
    ReleaseTime,
    /// Normalized ramp-out time after the attack, [-1, 1]
    DecayTime,
}

impl ParameterId {
    /// Boundary identifier as the engine recognizes it
    pub fn name(&self) -> &'static str {
        match self {
            ParameterId::Intensity => "intensity",
            ParameterId::Sharpness => "sharpness",
            ParameterId::Sustained => "sustained",
            ParameterId::AttackTime => "attackTime",
            ParameterId::ReleaseTime => "releaseTime",
            ParameterId::DecayTime => "decayTime",
        }
    }

    /// Check a value against the identifier's legal range
    pub fn is_valid(&self, value: f32) -> bool {
        match self {
            ParameterId::Intensity | ParameterId::Sharpness => (0.0..=1.0).contains(&value),
            ParameterId::Sustained => value == 0.0 || value == 1.0,
            ParameterId::AttackTime | ParameterId::ReleaseTime | ParameterId::DecayTime => {
                (-1.0..=1.0).contains(&value)
            }
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single named parameter attached to an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventParameter {
    /// Parameter identifier
    pub id: ParameterId,
    /// Parameter value
    pub value: f32,
}

impl EventParameter {
    /// Create a parameter (validated when the owning event is constructed)
    pub fn new(id: ParameterId, value: f32) -> Self {
        Self { id, value }
    }
}

/// A single haptic event descriptor
///
/// Immutable once constructed. The constructors tie the duration field to
/// the kind: transient events never carry one, continuous events always do.
#[derive(Debug, Clone, PartialEq)]
pub struct HapticEvent {
    kind: EventKind,
    parameters: Vec<EventParameter>,
    relative_time: f32,
    duration: Option<f32>,
}

impl HapticEvent {
    /// Create a transient event starting `relative_time` seconds into playback
    pub fn transient(
        parameters: Vec<EventParameter>,
        relative_time: f32,
    ) -> Result<Self, HapticError> {
        Self::validate(&parameters, relative_time)?;
        Ok(Self {
            kind: EventKind::Transient,
            parameters,
            relative_time,
            duration: None,
        })
    }

    /// Create a continuous event holding for `duration` seconds
    pub fn continuous(
        parameters: Vec<EventParameter>,
        relative_time: f32,
        duration: f32,
    ) -> Result<Self, HapticError> {
        Self::validate(&parameters, relative_time)?;
        if !duration.is_finite() || duration < 0.0 {
            return Err(HapticError::InvalidPattern(format!(
                "continuous event duration must be >= 0, got {duration}"
            )));
        }
        Ok(Self {
            kind: EventKind::Continuous,
            parameters,
            relative_time,
            duration: Some(duration),
        })
    }

    fn validate(parameters: &[EventParameter], relative_time: f32) -> Result<(), HapticError> {
        for p in parameters {
            if !p.value.is_finite() || !p.id.is_valid(p.value) {
                return Err(HapticError::InvalidParameter {
                    id: p.id,
                    value: p.value,
                });
            }
        }
        if !relative_time.is_finite() || relative_time < 0.0 {
            return Err(HapticError::InvalidPattern(format!(
                "relative time must be >= 0, got {relative_time}"
            )));
        }
        Ok(())
    }

    /// Event kind tag
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Parameters in construction order
    pub fn parameters(&self) -> &[EventParameter] {
        &self.parameters
    }

    /// Start offset in seconds relative to the play request
    pub fn relative_time(&self) -> f32 {
        self.relative_time
    }

    /// Duration in seconds; `Some` iff the event is continuous
    pub fn duration(&self) -> Option<f32> {
        self.duration
    }

    /// Value of the first parameter with the given id, if present
    pub fn value_of(&self, id: ParameterId) -> Option<f32> {
        self.parameters.iter().find(|p| p.id == id).map(|p| p.value)
    }

    /// Whether a parameter with the given id is present
    pub fn has(&self, id: ParameterId) -> bool {
        self.parameters.iter().any(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(id: ParameterId, value: f32) -> EventParameter {
        EventParameter::new(id, value)
    }

    #[test]
    fn test_transient_has_no_duration() {
        let event = HapticEvent::transient(
            vec![param(ParameterId::Intensity, 0.8)],
            0.0,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::Transient);
        assert_eq!(event.duration(), None);
    }

    #[test]
    fn test_continuous_carries_duration() {
        let event = HapticEvent::continuous(
            vec![param(ParameterId::Intensity, 0.8)],
            0.0,
            0.5,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::Continuous);
        assert_eq!(event.duration(), Some(0.5));
    }

    #[test]
    fn test_intensity_range() {
        assert!(ParameterId::Intensity.is_valid(0.0));
        assert!(ParameterId::Intensity.is_valid(1.0));
        assert!(!ParameterId::Intensity.is_valid(1.1));
        assert!(!ParameterId::Intensity.is_valid(-0.1));
    }

    #[test]
    fn test_sustained_is_binary() {
        assert!(ParameterId::Sustained.is_valid(0.0));
        assert!(ParameterId::Sustained.is_valid(1.0));
        assert!(!ParameterId::Sustained.is_valid(0.5));
    }

    #[test]
    fn test_envelope_times_allow_negative() {
        assert!(ParameterId::AttackTime.is_valid(-1.0));
        assert!(ParameterId::ReleaseTime.is_valid(1.0));
        assert!(!ParameterId::DecayTime.is_valid(1.5));
    }

    #[test]
    fn test_out_of_range_parameter_rejected() {
        let result = HapticEvent::transient(vec![param(ParameterId::Intensity, 2.0)], 0.0);
        assert!(matches!(
            result,
            Err(HapticError::InvalidParameter {
                id: ParameterId::Intensity,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_relative_time_rejected() {
        let result = HapticEvent::transient(vec![], -0.5);
        assert!(matches!(result, Err(HapticError::InvalidPattern(_))));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = HapticEvent::continuous(vec![], 0.0, -1.0);
        assert!(matches!(result, Err(HapticError::InvalidPattern(_))));
    }

    #[test]
    fn test_value_lookup() {
        let event = HapticEvent::transient(
            vec![
                param(ParameterId::Intensity, 0.8),
                param(ParameterId::Sharpness, 0.5),
            ],
            0.0,
        )
        .unwrap();
        assert_eq!(event.value_of(ParameterId::Intensity), Some(0.8));
        assert_eq!(event.value_of(ParameterId::DecayTime), None);
        assert!(event.has(ParameterId::Sharpness));
        assert!(!event.has(ParameterId::Sustained));
    }

    #[test]
    fn test_boundary_names() {
        assert_eq!(ParameterId::AttackTime.name(), "attackTime");
        assert_eq!(ParameterId::ReleaseTime.name(), "releaseTime");
        assert_eq!(ParameterId::DecayTime.name(), "decayTime");
        assert_eq!(ParameterId::Sustained.to_string(), "sustained");
    }
}
