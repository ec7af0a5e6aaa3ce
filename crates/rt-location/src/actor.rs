//! The per-Location `tokio::spawn`ed task: mailbox loop plus failure ticker,
//! selected with `tokio::select!`.

use rt_core::{ActorRng, LocationId, TimeScale};
use rt_output::{Event, EventKind, SharedSink};
use rt_protocol::{new_mailbox, Emergency, EmergencyTarget, Mailbox, Report, RequestKind};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::state::LocationState;

/// Handles needed to spawn a Location actor.
pub struct LocationHandles {
    pub emergency_tx: mpsc::Sender<Emergency>,
    pub report_tx: mpsc::Sender<Report>,
    pub sink: SharedSink,
}

/// Spawn a Location actor and return the mailbox callers send requests to.
///
/// `name` is this Location's display name, used as its event-stream and
/// emergency/report key. `failure_rate` is the per-hour
/// Bernoulli probability of a self-inflicted failure; `rng` must already be
/// seeded per-actor (`rt_core::ActorRng::new(global_seed, location_index)`).
pub fn spawn(
    id: LocationId,
    name: String,
    failure_rate: f64,
    time_scale: TimeScale,
    mut rng: ActorRng,
    handles: LocationHandles,
) -> Mailbox {
    let (mailbox, mut rx) = new_mailbox();
    let self_mailbox = mailbox.clone();

    tokio::spawn(async move {
        let mut state = LocationState::default();
        let mut ticker = interval(time_scale.one_hour());
        // `interval` fires immediately on first poll; consume that tick so
        // the first real trial happens one scaled hour in, not at t=0.
        ticker.tick().await;

        loop {
            tokio::select! {
                maybe_request = rx.recv() => {
                    let Some(request) = maybe_request else {
                        // Every sender (every vehicle holding this mailbox)
                        // has been dropped; nothing left to serve.
                        break;
                    };
                    state.request_counter += 1;
                    let seq = state.request_counter;
                    let kind = request.kind;
                    let sender = request.sender;
                    let accepted = state.apply(kind, sender);

                    tracing::debug!(location = %name, ?kind, %sender, accepted, "location request");
                    handles.sink.emit(Event {
                        source: name.clone(),
                        seq,
                        kind: EventKind::LocationRequest { kind, sender, accepted },
                    });

                    if kind == RequestKind::RepairDone && accepted {
                        tracing::info!(location = %name, "repair completed, failure ticker re-armed");
                        handles.sink.emit(Event {
                            source: name.clone(),
                            seq,
                            kind: EventKind::LocationRepaired,
                        });
                        let _ = handles.report_tx.send(Report::cleared(name.clone())).await;
                    }

                    request.respond(accepted);
                }
                // Suspended while failing: the branch guard means this arm is
                // simply never polled, so no trial runs and the ticker
                // doesn't advance its own period mid-failure — it resumes
                // counting from the next poll after RepairDone.
                _ = ticker.tick(), if !state.failing => {
                    if rng.gen_bool(failure_rate) {
                        state.failing = true;
                        state.request_counter += 1;
                        let seq = state.request_counter;

                        tracing::warn!(location = %name, "failure injected");
                        handles.sink.emit(Event {
                            source: name.clone(),
                            seq,
                            kind: EventKind::LocationFailed,
                        });

                        // The `EmergencyRaised`/`EmergencyCleared` domain
                        // events are the stats task's responsibility,
                        // derived from this `Report` — not emitted
                        // redundantly here.
                        let _ = handles.report_tx.send(Report::raised(name.clone())).await;
                        let _ = handles.emergency_tx.send(Emergency {
                            key: name.clone(),
                            location: id,
                            target: EmergencyTarget::Location(id),
                            request_handler: self_mailbox.clone(),
                        }).await;
                    }
                }
            }
        }
    });

    mailbox
}
