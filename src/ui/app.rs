//! Root application view
//!
//! A side panel lists the eight parameter screens; the central panel shows
//! the selected one. The client handle is shared read-only by every screen.

use crate::haptic::HapticClient;
use crate::ui::screens::{
    AttackScreen, DurationScreen, EventTypeScreen, IntensityScreen, RelativeTimeScreen,
    ReleaseDecayScreen, SharpnessScreen, SustainedScreen,
};

/// Screen selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    EventType,
    Intensity,
    Sharpness,
    RelativeTime,
    Duration,
    Sustained,
    Attack,
    ReleaseDecay,
}

impl Screen {
    /// Screens in navigation order
    pub const ALL: [Screen; 8] = [
        Screen::EventType,
        Screen::Intensity,
        Screen::Sharpness,
        Screen::RelativeTime,
        Screen::Duration,
        Screen::Sustained,
        Screen::Attack,
        Screen::ReleaseDecay,
    ];

    /// Navigation title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::EventType => "EventType",
            Screen::Intensity => "intensity",
            Screen::Sharpness => "sharpness",
            Screen::RelativeTime => "relativeTime",
            Screen::Duration => "duration",
            Screen::Sustained => "sustained",
            Screen::Attack => "attack",
            Screen::ReleaseDecay => "release/decay",
        }
    }
}

/// Main application state
pub struct HapticLabApp {
    client: HapticClient,
    selected: Screen,
    event_type: EventTypeScreen,
    intensity: IntensityScreen,
    sharpness: SharpnessScreen,
    relative_time: RelativeTimeScreen,
    duration: DurationScreen,
    sustained: SustainedScreen,
    attack: AttackScreen,
    release_decay: ReleaseDecayScreen,
}

impl HapticLabApp {
    /// Create the app around an already-connected client
    pub fn new(client: HapticClient) -> Self {
        Self {
            client,
            selected: Screen::EventType,
            event_type: EventTypeScreen,
            intensity: IntensityScreen::default(),
            sharpness: SharpnessScreen::default(),
            relative_time: RelativeTimeScreen::default(),
            duration: DurationScreen::default(),
            sustained: SustainedScreen::default(),
            attack: AttackScreen::default(),
            release_decay: ReleaseDecayScreen::default(),
        }
    }
}

impl eframe::App for HapticLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("screen_list")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Hapticlab");
                ui.separator();
                for screen in Screen::ALL {
                    if ui
                        .selectable_label(self.selected == screen, screen.title())
                        .clicked()
                    {
                        self.selected = screen;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.selected.title());
            ui.separator();
            match self.selected {
                Screen::EventType => self.event_type.ui(ui, &self.client),
                Screen::Intensity => self.intensity.ui(ui, &self.client),
                Screen::Sharpness => self.sharpness.ui(ui, &self.client),
                Screen::RelativeTime => self.relative_time.ui(ui, &self.client),
                Screen::Duration => self.duration.ui(ui, &self.client),
                Screen::Sustained => self.sustained.ui(ui, &self.client),
                Screen::Attack => self.attack.ui(ui, &self.client),
                Screen::ReleaseDecay => self.release_decay.ui(ui, &self.client),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_order() {
        assert_eq!(Screen::ALL.len(), 8);
        assert_eq!(Screen::ALL[0].title(), "EventType");
        assert_eq!(Screen::ALL[7].title(), "release/decay");
    }
}
