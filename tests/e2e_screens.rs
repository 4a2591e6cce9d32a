//! E2E tests for the screens' event builders
//!
//! Each screen exposes a pure `build_*` method; these tests check every
//! screen's constructed descriptor against the documented defaults without
//! a running engine or a UI.

use hapticlab::defaults;
use hapticlab::ui::screens::{
    AttackScreen, DurationScreen, EventTypeScreen, IntensityScreen, RelativeTimeScreen,
    ReleaseDecayScreen, SharpnessScreen, SustainedScreen,
};
use hapticlab::{EventKind, HapticEvent, ParameterId};

/// The duration invariant holds for every screen's descriptor
fn assert_duration_matches_kind(event: &HapticEvent) {
    match event.kind() {
        EventKind::Transient => assert_eq!(event.duration(), None),
        EventKind::Continuous => assert!(event.duration().is_some()),
    }
}

#[test]
fn test_event_type_screen() {
    let screen = EventTypeScreen;

    let transient = screen.build_transient().unwrap();
    assert_eq!(transient.kind(), EventKind::Transient);
    assert_eq!(transient.value_of(ParameterId::Intensity), Some(defaults::INTENSITY));
    assert_eq!(transient.value_of(ParameterId::Sharpness), Some(defaults::SHARPNESS));
    assert_duration_matches_kind(&transient);

    let continuous = screen.build_continuous().unwrap();
    assert_eq!(continuous.kind(), EventKind::Continuous);
    assert_eq!(continuous.duration(), Some(0.5));
    assert_duration_matches_kind(&continuous);
}

#[test]
fn test_intensity_screen_varies_intensity_only() {
    let screen = IntensityScreen { intensity: 0.33 };
    let event = screen.build_event().unwrap();
    assert_eq!(event.kind(), EventKind::Transient);
    assert_eq!(event.value_of(ParameterId::Intensity), Some(0.33));
    assert_eq!(event.value_of(ParameterId::Sharpness), Some(defaults::SHARPNESS));
    assert_eq!(event.relative_time(), defaults::RELATIVE_TIME);
    assert_duration_matches_kind(&event);
}

#[test]
fn test_sharpness_screen_varies_sharpness_only() {
    let screen = SharpnessScreen { sharpness: 0.9 };
    let event = screen.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::Intensity), Some(defaults::INTENSITY));
    assert_eq!(event.value_of(ParameterId::Sharpness), Some(0.9));
    assert_duration_matches_kind(&event);
}

#[test]
fn test_relative_time_screen_varies_offset() {
    let screen = RelativeTimeScreen {
        relative_time: 0.25,
    };
    let event = screen.build_event().unwrap();
    assert_eq!(event.kind(), EventKind::Transient);
    assert_eq!(event.relative_time(), 0.25);
    assert_duration_matches_kind(&event);
}

#[test]
fn test_duration_screen_varies_duration() {
    let screen = DurationScreen { duration: 2.0 };
    let event = screen.build_event().unwrap();
    assert_eq!(event.kind(), EventKind::Continuous);
    assert_eq!(event.duration(), Some(2.0));
    assert_duration_matches_kind(&event);
}

/// Scenario: sustained=true, attackTime=0.5, releaseOrDecayTime=0.5 ->
/// sustained=1.0, attackTime=0.5, releaseTime=0.5, decayTime omitted
#[test]
fn test_sustained_screen_release_branch() {
    let screen = SustainedScreen { sustained: true };
    let event = screen.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::Sustained), Some(1.0));
    assert_eq!(event.value_of(ParameterId::AttackTime), Some(0.5));
    assert_eq!(event.value_of(ParameterId::ReleaseTime), Some(0.5));
    assert!(!event.has(ParameterId::DecayTime));
    assert_eq!(event.duration(), Some(defaults::DURATION));
}

/// Scenario: sustained=false, same inputs -> sustained=0.0, decayTime=0.5,
/// releaseTime omitted
#[test]
fn test_sustained_screen_decay_branch() {
    let screen = SustainedScreen { sustained: false };
    let event = screen.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::Sustained), Some(0.0));
    assert_eq!(event.value_of(ParameterId::AttackTime), Some(0.5));
    assert_eq!(event.value_of(ParameterId::DecayTime), Some(0.5));
    assert!(!event.has(ParameterId::ReleaseTime));
}

#[test]
fn test_attack_screen() {
    let screen = AttackScreen { attack_time: 0.7 };
    let event = screen.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::Sustained), Some(0.0));
    assert_eq!(event.value_of(ParameterId::AttackTime), Some(0.7));
    assert!(!event.has(ParameterId::ReleaseTime));
    assert!(!event.has(ParameterId::DecayTime));
    assert_eq!(event.duration(), Some(10.0));
}

#[test]
fn test_release_decay_screen_chooses_exactly_one_ramp_out() {
    let release = ReleaseDecayScreen {
        sustained: true,
        release_or_decay_time: 0.4,
    };
    let event = release.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::ReleaseTime), Some(0.4));
    assert!(!event.has(ParameterId::DecayTime));

    let decay = ReleaseDecayScreen {
        sustained: false,
        release_or_decay_time: 0.4,
    };
    let event = decay.build_event().unwrap();
    assert_eq!(event.value_of(ParameterId::DecayTime), Some(0.4));
    assert!(!event.has(ParameterId::ReleaseTime));
}

/// Sliding a control across its whole range never produces a rejected
/// descriptor on any screen
#[test]
fn test_full_slider_sweep_stays_valid() {
    for step in 0..=10 {
        let v = step as f32 / 10.0;
        assert!(IntensityScreen { intensity: v }.build_event().is_ok());
        assert!(SharpnessScreen { sharpness: v }.build_event().is_ok());
        assert!(RelativeTimeScreen { relative_time: v }.build_event().is_ok());
        assert!(DurationScreen { duration: v * 30.0 }.build_event().is_ok());
        assert!(AttackScreen { attack_time: v }.build_event().is_ok());
        assert!(ReleaseDecayScreen {
            sustained: step % 2 == 0,
            release_or_decay_time: v,
        }
        .build_event()
        .is_ok());
    }
}
