//! The (optional) per-Station task generator: every scaled hour, a
//! Bernoulli trial against `TaskConfig::rate`, emitting
//! `Event::TaskGenerated` on success.
//!
//! Purely informational — touches no `Location`/`Vehicle` state.

use rt_core::{ActorRng, TimeScale};
use rt_output::{Event, EventKind, SharedSink};
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::config::TaskConfig;

/// Spawn one task-generator loop for a single Station.
pub fn spawn(
    station_name: String,
    config: TaskConfig,
    time_scale: TimeScale,
    seed: u64,
    station_index: u64,
    sink: SharedSink,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = ActorRng::new(seed, station_index);
        let mut ticker = interval(time_scale.one_hour());
        ticker.tick().await;
        let mut seq: u64 = 0;

        loop {
            ticker.tick().await;
            if !rng.gen_bool(config.rate) {
                continue;
            }
            let task = config.random_task(&mut rng);
            seq += 1;
            tracing::debug!(
                station = %station_name,
                workers = task.worker_count,
                duration = task.duration_hours,
                "task generated",
            );
            sink.emit(Event {
                source: station_name.clone(),
                seq,
                kind: EventKind::TaskGenerated {
                    worker_count: task.worker_count,
                    duration_hours: task.duration_hours,
                },
            });
        }
    })
}
