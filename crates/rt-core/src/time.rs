//! Scaled wall-clock time model.
//!
//! # Design
//!
//! This simulator runs in real wall-clock time rather than a counted tick:
//! one simulated hour is `TimeScale` milliseconds of actual sleep.
//! `TimeScale` plays the role a `tick_duration_secs` constant would in a
//! tick-based design, but the unit conversion happens at the call site
//! (`scaled(hours)`) rather than through a tick counter, since there is no
//! global tick to advance — every actor sleeps independently.

use std::time::Duration;

/// Converts simulated hours into real sleep durations.
///
/// `ms_per_hour` is the `config.TimeScale` value from the topology file:
/// milliseconds of real time per simulated hour.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeScale {
    pub ms_per_hour: f64,
}

impl TimeScale {
    pub fn new(ms_per_hour: f64) -> Self {
        Self { ms_per_hour }
    }

    /// Convert `hours` of simulated time into a real sleep `Duration`.
    #[inline]
    pub fn scaled(&self, hours: f64) -> Duration {
        Duration::from_secs_f64((hours.max(0.0) * self.ms_per_hour / 1000.0).max(0.0))
    }

    /// One simulated hour, as a `Duration` — the failure ticker's period.
    #[inline]
    pub fn one_hour(&self) -> Duration {
        self.scaled(1.0)
    }
}

/// A scaled, randomized back-off used when a Take is refused because the
/// Location is busy.
///
/// Uniform in `[10, 39)` minutes of simulated time, scaled to real time.
pub fn wait_time(scale: &TimeScale, rng: &mut crate::rng::ActorRng) -> Duration {
    let minutes = rng.gen_range(10u32..39) as f64;
    scale.scaled(minutes / 60.0)
}

/// The "offline" back-off: `2 × waitTime()`, used when `Check` reveals the
/// Location is failing rather than merely busy.
pub fn offline_wait_time(scale: &TimeScale, rng: &mut crate::rng::ActorRng) -> Duration {
    wait_time(scale, rng) * 2
}

/// How long an actual repair takes.
pub fn repair_time(scale: &TimeScale, repair_time_hours: f64) -> Duration {
    scale.scaled(repair_time_hours)
}
