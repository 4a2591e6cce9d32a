//! Single-shot pattern containers
//!
//! A pattern is a thin, transient grouping of one or more events plus
//! pattern-wide global parameters. This application only ever builds
//! one-event patterns with empty globals, but the container validates the
//! general shape.

use crate::haptic::event::{EventParameter, HapticEvent};
use crate::haptic::HapticError;

/// An ordered collection of events submitted together for playback
#[derive(Debug, Clone)]
pub struct Pattern {
    events: Vec<HapticEvent>,
    global_parameters: Vec<EventParameter>,
}

impl Pattern {
    /// Build a pattern from events and pattern-wide parameters
    ///
    /// Fails with `InvalidPattern` if no events are given or a global
    /// parameter value is out of range.
    pub fn new(
        events: Vec<HapticEvent>,
        global_parameters: Vec<EventParameter>,
    ) -> Result<Self, HapticError> {
        if events.is_empty() {
            return Err(HapticError::InvalidPattern(
                "pattern must contain at least one event".to_string(),
            ));
        }
        for p in &global_parameters {
            if !p.value.is_finite() || !p.id.is_valid(p.value) {
                return Err(HapticError::InvalidPattern(format!(
                    "global parameter {} out of range: {}",
                    p.id, p.value
                )));
            }
        }
        Ok(Self {
            events,
            global_parameters,
        })
    }

    /// Build the common case: one event, no global parameters
    pub fn single(event: HapticEvent) -> Self {
        Self {
            events: vec![event],
            global_parameters: Vec::new(),
        }
    }

    /// Events in submission order
    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    /// Pattern-wide parameters (always empty in this application)
    pub fn global_parameters(&self) -> &[EventParameter] {
        &self.global_parameters
    }
}
