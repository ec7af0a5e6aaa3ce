//! `SimConfig` — the configuration record the core consumes. Field names
//! are `#[serde(rename)]`d to the on-disk JSON spelling so `demos/loader`
//! can deserialize the topology file's `config` object straight into this
//! type with `serde_json`.

use rt_core::TimeScale;
use serde::Deserialize;

/// Milliseconds per simulated hour, repair duration in simulated hours, and
/// the per-hour failure probability, plus the optional task generator.
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    #[serde(rename = "TimeScale")]
    pub time_scale_ms_per_hour: f64,
    #[serde(rename = "RepairTime")]
    pub repair_time_hours: f64,
    #[serde(rename = "FailureRate")]
    pub failure_rate: f64,
    #[serde(rename = "Tasks", default)]
    pub tasks: Option<TaskConfig>,
}

impl SimConfig {
    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.time_scale_ms_per_hour)
    }
}

/// Configuration for the optional per-station task generator: a Bernoulli
/// trial plus uniform-scaled worker count and duration.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TaskConfig {
    #[serde(rename = "Rate")]
    pub rate: f64,
    #[serde(rename = "BaseWorkerCount")]
    pub base_worker_count: u32,
    #[serde(rename = "WorkerScaleRange")]
    pub worker_scale_range: f64,
    #[serde(rename = "BaseDuration")]
    pub base_duration_hours: f64,
    #[serde(rename = "DurationScaleRange")]
    pub duration_scale_range: f64,
}

impl TaskConfig {
    /// Sample one random task — both worker count and duration are scaled
    /// by an independent uniform factor in `[1 - range, 1 + range]`.
    pub fn random_task(&self, rng: &mut rt_core::ActorRng) -> GeneratedTask {
        let worker_scale =
            rng.gen_range((1.0 - self.worker_scale_range)..(1.0 + self.worker_scale_range));
        let duration_scale =
            rng.gen_range((1.0 - self.duration_scale_range)..(1.0 + self.duration_scale_range));
        GeneratedTask {
            worker_count: ((self.base_worker_count as f64) * worker_scale).floor().max(0.0) as u32,
            duration_hours: self.base_duration_hours * duration_scale,
        }
    }
}

/// One sampled, purely informational task. Touches no `Location`/`Vehicle`
/// state.
#[derive(Clone, Copy, Debug)]
pub struct GeneratedTask {
    pub worker_count: u32,
    pub duration_hours: f64,
}
