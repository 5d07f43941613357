use std::time::{Duration, Instant};

use crate::windowing::registry::ControlId;

/// Pairs consecutive clicks on the same control into double clicks.
///
/// A recognized double click consumes the pairing, so a third rapid click
/// starts over as a single click instead of chaining.
#[derive(Debug, Default)]
pub struct ClickDetector {
    last_control: Option<ControlId>,
    last_time: Option<Instant>,
}

impl ClickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a click on `target` at `now`; returns whether it is a double.
    pub fn resolve(&mut self, target: ControlId, now: Instant, interval: Duration) -> bool {
        let is_double = self.last_control == Some(target)
            && self
                .last_time
                .is_some_and(|t| now.saturating_duration_since(t) < interval);

        self.last_time = Some(now);
        self.last_control = if is_double { None } else { Some(target) };
        is_double
    }

    pub fn last_control(&self) -> Option<ControlId> {
        self.last_control
    }
}
