//! The Train agent: drives itself around a cyclic Route, using the
//! two-phase Take-next/Free-previous Move protocol, and freezes into
//! `awaitRepair` on its own failure.
//!
//! Task-resident rather than tick-polled: the agent owns its own tokio
//! task and drives its round directly, with a `tracing::info_span!`
//! standing in for a per-agent log prefix.

use rt_core::{ActorRng, LocationId, StationId, VehicleId};
use rt_output::{Event, EventKind};
use rt_protocol::{new_mailbox, Emergency, EmergencyTarget, Mailbox, MailboxReceiver, Report, RequestKind};
use tokio::time::interval;

use crate::error::VehicleError;
use crate::movement::{enter, enter_one_of, free_with_retries};
use crate::world::World;

/// Static configuration for one Train, resolved by the caller (`rt-sim`'s
/// builder) before spawning.
pub struct TrainConfig {
    pub number: u32,
    pub max_speed_kph: f64,
    /// Carried for JSON round-tripping only; never read.
    pub capacity: Option<u32>,
    pub route: Vec<StationId>,
    pub start_location: LocationId,
    pub failure_rate: f64,
}

impl TrainConfig {
    /// Checked once at simulation construction, before `spawn`: an empty
    /// route would spin forever recomputing a zero-length lap.
    pub fn validate(&self) -> Result<(), VehicleError> {
        if self.route.is_empty() {
            return Err(VehicleError::EmptyRoute);
        }
        Ok(())
    }
}

/// Spawn a Train agent and return the mailbox used to address it directly
/// (repair requests arrive here once it has failed).
pub fn spawn(world: World, config: TrainConfig, seed: u64, actor_index: u64) -> Mailbox {
    let (inbox, mut inbox_rx) = new_mailbox();
    let self_inbox = inbox.clone();
    let id = VehicleId::Train(config.number);

    tokio::spawn(async move {
        let span = tracing::info_span!("train", id = config.number);
        let _enter = span.enter();

        let mut rng = ActorRng::new(seed, actor_index);
        let mut ticker = interval(world.time_scale.one_hour());
        ticker.tick().await;

        let mut current = config.start_location;
        let mut route_idx = 0usize;
        let mut lap: u64 = 0;
        let mut seq: u64 = 0;
        let mut event_seq: u64 = 0;

        assert!(!config.route.is_empty(), "train route must be non-empty");

        loop {
            let next_idx = (route_idx + 1) % config.route.len();
            let current_station = world.topology.station_by_id(config.route[route_idx]);
            let next_station = world.topology.station_by_id(config.route[next_idx]);
            let hop = current_station
                .route_to(&world.topology, next_station)
                .expect("train route validated at simulation construction");

            // Step 3: move to the entry junction.
            let (entered, hop_failed) = move_and_wait(
                &world, id, &mut rng, &mut ticker, config.failure_rate, config.max_speed_kph,
                current, |_| hop.entry_junction, &mut event_seq,
            ).await;
            current = entered;
            if hop_failed {
                seq += 1;
                await_repair(&world, id, current, &self_inbox, &mut inbox_rx, &mut seq).await;
            }

            // Step 4: one of the parallel candidate tracks.
            let (entered, track_failed) = move_and_wait_candidates(
                &world, id, &mut rng, &mut ticker, config.failure_rate, config.max_speed_kph,
                current, &hop.candidate_tracks, &mut event_seq,
            ).await;
            current = entered;
            if track_failed {
                seq += 1;
                await_repair(&world, id, current, &self_inbox, &mut inbox_rx, &mut seq).await;
            }

            // Step 5: the opposite junction.
            let (entered, hop_failed) = move_and_wait(
                &world, id, &mut rng, &mut ticker, config.failure_rate, config.max_speed_kph,
                current, |_| hop.exit_junction, &mut event_seq,
            ).await;
            current = entered;
            if hop_failed {
                seq += 1;
                await_repair(&world, id, current, &self_inbox, &mut inbox_rx, &mut seq).await;
            }

            // Step 6: a randomly chosen platform at the next station.
            let platforms = next_station.platforms().to_vec();
            let (entered, platform_failed) = move_and_wait_candidates(
                &world, id, &mut rng, &mut ticker, config.failure_rate, config.max_speed_kph,
                current, &platforms, &mut event_seq,
            ).await;
            current = entered;
            if platform_failed {
                seq += 1;
                await_repair(&world, id, current, &self_inbox, &mut inbox_rx, &mut seq).await;
            }

            route_idx = next_idx;
            if route_idx == 0 {
                lap += 1;
                tracing::debug!(lap, "completed a lap");
            }
        }
    });

    inbox
}

/// Move to a single fixed target, race the failure ticker during the
/// subsequent travel sleep, and report whether the ticker won.
async fn move_and_wait(
    world: &World,
    id: VehicleId,
    rng: &mut ActorRng,
    ticker: &mut tokio::time::Interval,
    failure_rate: f64,
    max_speed_kph: f64,
    previous: LocationId,
    pick: impl FnMut(&mut ActorRng) -> LocationId,
    event_seq: &mut u64,
) -> (LocationId, bool) {
    let entered = enter(world, id, rng, pick).await;
    free_with_retries(world, id, rng, previous).await;
    emit_arrived(world, id, entered, event_seq);
    let failed = race_travel_against_failure(world, rng, ticker, failure_rate, entered, max_speed_kph).await;
    (entered, failed)
}

async fn move_and_wait_candidates(
    world: &World,
    id: VehicleId,
    rng: &mut ActorRng,
    ticker: &mut tokio::time::Interval,
    failure_rate: f64,
    max_speed_kph: f64,
    previous: LocationId,
    candidates: &[LocationId],
    event_seq: &mut u64,
) -> (LocationId, bool) {
    let entered = enter_one_of(world, id, rng, candidates).await;
    free_with_retries(world, id, rng, previous).await;
    emit_arrived(world, id, entered, event_seq);
    let failed = race_travel_against_failure(world, rng, ticker, failure_rate, entered, max_speed_kph).await;
    (entered, failed)
}

fn emit_arrived(world: &World, id: VehicleId, location: LocationId, event_seq: &mut u64) {
    *event_seq += 1;
    world.sink.emit(Event {
        source: id.report_key(),
        seq: *event_seq,
        kind: EventKind::VehicleArrived { location: world.topology.name(location) },
    });
}

async fn race_travel_against_failure(
    world: &World,
    rng: &mut ActorRng,
    ticker: &mut tokio::time::Interval,
    failure_rate: f64,
    entered: LocationId,
    max_speed_kph: f64,
) -> bool {
    let travel = world.time_scale.scaled(world.topology.travel_time(entered, max_speed_kph));
    let sleep_fut = tokio::time::sleep(travel);
    tokio::pin!(sleep_fut);
    loop {
        tokio::select! {
            _ = &mut sleep_fut => return false,
            _ = ticker.tick() => {
                if rng.gen_bool(failure_rate) {
                    return true;
                }
            }
        }
    }
}

/// The train becomes a trivial location-like actor over its own inbox:
/// reject everything but RepairStart, then reject everything but
/// RepairDone.
async fn await_repair(
    world: &World,
    id: VehicleId,
    location: LocationId,
    self_inbox: &Mailbox,
    inbox_rx: &mut MailboxReceiver,
    seq: &mut u64,
) {
    tracing::warn!(train = %id, "failure ticker fired; entering awaitRepair");
    world.sink.emit(Event {
        source: id.report_key(),
        seq: *seq,
        kind: EventKind::TrainFailed { train: id },
    });
    let _ = world.report_tx.send(Report::raised(id.report_key())).await;
    let _ = world
        .emergency_tx
        .send(Emergency {
            key: id.report_key(),
            location,
            target: EmergencyTarget::Train(id),
            request_handler: self_inbox.clone(),
        })
        .await;

    loop {
        let req = inbox_rx.recv().await.expect("train inbox outlives the train");
        if req.kind == RequestKind::RepairStart {
            req.respond(true);
            break;
        }
        req.respond(false);
    }
    loop {
        let req = inbox_rx.recv().await.expect("train inbox outlives the train");
        if req.kind == RequestKind::RepairDone {
            req.respond(true);
            break;
        }
        req.respond(false);
    }

    *seq += 1;
    let _ = world.report_tx.send(Report::cleared(id.report_key())).await;
    world.sink.emit(Event {
        source: id.report_key(),
        seq: *seq,
        kind: EventKind::TrainRepaired { train: id },
    });
    tracing::info!(train = %id, "repaired, resuming route");
}
