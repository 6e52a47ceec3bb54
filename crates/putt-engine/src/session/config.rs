//! Session configuration.
//!
//! Everything tunable is carried on an explicitly constructed config object
//! owned by the session; no module-level singletons anywhere in the crate.

use crate::physics::step::PhysicsTuning;

/// Alligator hazard tuning.
#[derive(Debug, Clone)]
pub struct AlligatorConfig {
    /// Seconds of idle time near water before an alligator may spawn.
    pub idle_secs: f64,
    /// How close to a water edge (without overlapping) counts as "near".
    pub proximity: f32,
    pub emerge_secs: f64,
    pub bite_secs: f64,
    pub submerge_secs: f64,
}

impl Default for AlligatorConfig {
    fn default() -> Self {
        Self {
            idle_secs: 30.0,
            proximity: 48.0,
            emerge_secs: 1.2,
            bite_secs: 0.6,
            submerge_secs: 1.0,
        }
    }
}

/// Top-level session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub tuning: PhysicsTuning,
    pub timing: TimingConfig,
    pub alligator: AlligatorConfig,
}

/// Charge and banner timing.
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Shot power gained per second of holding the charge.
    pub charge_rate: f32,
    /// Hole intro banner duration before aiming begins.
    pub hole_intro_secs: f64,
    /// Hole outro banner duration before the next hole loads.
    pub hole_outro_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            charge_rate: 10.0,
            hole_intro_secs: 2.5,
            hole_outro_secs: 3.0,
        }
    }
}
