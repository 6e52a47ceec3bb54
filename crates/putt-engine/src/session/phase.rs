//! Shot phases and scheduled transitions.
//!
//! Delayed state advances (hole intro/outro banners, course restart) are
//! explicit `PendingTransition` values checked each tick rather than timer
//! callbacks. Firing takes the value, which rules out double fire.

/// Where the shot state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball stationary, current player aiming.
    Aiming,
    /// Power accumulating while the charge input is held.
    Charging,
    /// A shot is in flight; input is ignored until every ball stops.
    BallsMoving,
    /// A hole intro/outro banner; a pending transition will advance it.
    HoleTransition,
    /// Final summary. Terminal.
    GameOver,
}

/// What a fired transition does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// Intro banner done: begin aiming on the current hole.
    StartHole,
    /// Outro done: load the next hole.
    AdvanceHole,
    /// Outro of the final hole done: show the game-over summary.
    FinishCourse,
    /// Challenge failure: reset scores and restart from hole 1.
    RestartCourse,
}

/// A scheduled state advance, fired when the session clock passes
/// `fires_at`, or immediately via the skip input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    pub fires_at: f64,
    pub action: TransitionAction,
}

impl PendingTransition {
    pub fn new(fires_at: f64, action: TransitionAction) -> Self {
        Self { fires_at, action }
    }

    pub fn due(&self, now: f64) -> bool {
        now >= self.fires_at
    }
}
