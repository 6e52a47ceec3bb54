//! Host-to-session input delivery.
//!
//! Pointer, keyboard, and scan-based switch frontends all reduce their raw
//! input to the same handful of discrete events before the session ever
//! sees them, so the core stays agnostic about input devices.

/// One discrete control action.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Rotate the current player's aim by a signed angle in radians.
    AimDelta { radians: f32 },
    /// Begin charging shot power.
    ChargeStart,
    /// Release the charge: take the shot at the accumulated power.
    ChargeEnd,
    /// Short-circuit a pending hole intro/outro transition.
    SkipTransition,
    /// Toggle pause.
    Pause,
}

/// Events accumulated by the host between frames. The session walks the
/// queue once per `update`; the host clears it afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Queue an event for the next frame.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every queued event, leaving the queue empty for the next frame.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Walk the queued events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
