//! Frame timing: the fixed-substep policy and the session clock.
//!
//! Physics runs 5 substeps per rendered frame for stability. Each substep
//! integrates by `frame_dt * 60 / 5`, so a nominal 60 fps frame yields a
//! substep scale of 0.2 and velocities stay in units-per-frame.

/// Number of physics substeps per rendered frame.
pub const SUBSTEPS_PER_FRAME: u32 = 5;

/// Nominal frame delta assumed when the reported delta is unusable.
pub const NOMINAL_FRAME_DT: f32 = 1.0 / 60.0;

/// Frame deltas above this (a backgrounded tab catching up) are clamped.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Substep scale for a nominal 60 fps frame.
pub const NOMINAL_SUBSTEP_SCALE: f32 = NOMINAL_FRAME_DT * 60.0 / SUBSTEPS_PER_FRAME as f32;

/// Session clock. Accumulates clamped frame deltas; pending transitions and
/// the alligator idle timer compare against this, never against wall-clock
/// time, so the whole state machine is deterministic under test.
#[derive(Debug, Default)]
pub struct FrameClock {
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Clamp a reported frame delta to something safe to integrate.
    /// NaN, non-positive, and absurdly large deltas all become the nominal
    /// 1/60 s frame, preventing velocity/position explosions.
    pub fn clamp_dt(frame_dt: f32) -> f32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 || frame_dt > MAX_FRAME_DT {
            NOMINAL_FRAME_DT
        } else {
            frame_dt
        }
    }

    /// Per-substep integration scale for the given (already clamped) delta.
    pub fn substep_scale(frame_dt: f32) -> f32 {
        Self::clamp_dt(frame_dt) * 60.0 / SUBSTEPS_PER_FRAME as f32
    }

    /// Advance the session clock by a clamped frame delta.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }

    /// Elapsed session time in seconds.
    pub fn now(&self) -> f64 {
        self.elapsed
    }
}
