//! egui presentation layer
//!
//! A navigable list of parameter screens, each translating one or two
//! pieces of local widget state into a haptic event on "Play".

pub mod app;
pub mod screens;

pub use app::HapticLabApp;
