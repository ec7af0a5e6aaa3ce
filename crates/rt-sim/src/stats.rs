//! The stats task: owns the active-emergencies set and publishes the
//! canonical `EmergencyRaised`/`EmergencyCleared` events derived from the
//! `Report` stream.

use std::collections::HashSet;

use rt_output::{Event, EventKind, SharedSink};
use rt_protocol::Report;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn the stats task. Consumes `report_rx` until every `Report` sender
/// (every Location and Vehicle) has been dropped.
///
/// Reports are idempotent w.r.t. key presence: a duplicate `+1` on an
/// already-active key is absorbed and does not re-emit `EmergencyRaised`;
/// a `-1` on a key that isn't active is likewise absorbed.
pub fn spawn(mut report_rx: mpsc::Receiver<Report>, sink: SharedSink) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut active: HashSet<String> = HashSet::new();
        let mut seq: u64 = 0;

        while let Some(report) = report_rx.recv().await {
            seq += 1;
            if report.delta > 0 {
                if active.insert(report.key.clone()) {
                    tracing::info!(key = %report.key, active = active.len(), "emergency raised");
                    sink.emit(Event {
                        source: "stats".to_string(),
                        seq,
                        kind: EventKind::EmergencyRaised { key: report.key },
                    });
                }
            } else if report.delta < 0 && active.remove(&report.key) {
                tracing::info!(key = %report.key, active = active.len(), "emergency cleared");
                sink.emit(Event {
                    source: "stats".to_string(),
                    seq,
                    kind: EventKind::EmergencyCleared { key: report.key },
                });
            }
        }
    })
}
