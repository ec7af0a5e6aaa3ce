//! The RepairVehicle agent: drains the emergency queue, plans a path with
//! `rt_topology::plan`, reserves and traverses it hop by hop, and runs the
//! RepairStart/sleep/RepairDone cycle on arrival.
//!
//! The vehicle reserves its planned path ahead of itself and blacklists a
//! blocked Location before replanning around it, rather than leaving the
//! path unprotected and always planning with an empty blacklist.

use std::collections::HashSet;
use std::sync::Arc;

use rt_core::{time, ActorRng, LocationId, VehicleId};
use rt_location::client::{check, free, release, repair_done, repair_start, reserve, take};
use rt_output::{Event, EventKind};
use rt_protocol::{Emergency, Mailbox};
use rt_topology::plan;
use tokio::sync::{mpsc, Mutex};

use crate::world::World;

/// Static configuration for one repair vehicle.
pub struct RepairVehicleConfig {
    pub number: u32,
    pub max_speed_kph: f64,
    pub base: LocationId,
}

/// Bound on Take attempts for one hop of the repair vehicle's path
/// traversal before it gives up on that hop, blacklists it, and replans.
/// Applies only here — a Train's ordinary Move retries indefinitely
/// (see `movement::enter`).
const MAX_MOVE_ATTEMPTS: u32 = 5;

/// Spawn a RepairVehicle agent.
///
/// `shared_emergency_rx` is the graph-owned emergency bus, shared (via
/// `Mutex`) among every repair vehicle so each emergency report is consumed
/// by exactly one of them, whichever happens to be holding the lock when
/// it arrives.
pub fn spawn(
    world: World,
    config: RepairVehicleConfig,
    seed: u64,
    actor_index: u64,
    shared_emergency_rx: Arc<Mutex<mpsc::Receiver<Emergency>>>,
) {
    let id = VehicleId::Repair(config.number);
    let (local_tx, mut local_rx) = mpsc::channel::<Emergency>(16);

    tokio::spawn(async move {
        loop {
            let next = {
                let mut rx = shared_emergency_rx.lock().await;
                rx.recv().await
            };
            match next {
                Some(emergency) => {
                    if local_tx.send(emergency).await.is_err() {
                        return;
                    }
                }
                None => return,
            }
        }
    });

    tokio::spawn(async move {
        let span = tracing::info_span!("repair_vehicle", id = config.number);
        let _enter = span.enter();
        let mut rng = ActorRng::new(seed, actor_index);
        let mut current = config.base;
        let mut event_seq: u64 = 0;

        loop {
            let accident = match local_rx.recv().await {
                Some(a) => a,
                None => return,
            };
            tracing::info!(key = %accident.key, "received emergency report");

            if accident.location == config.base {
                tracing::info!(key = %accident.key, "already close enough for repairs");
                repair_cycle(&world, id, &accident.request_handler, &accident.key).await;
                continue;
            }

            current = travel_to(&world, id, &mut rng, current, accident.location, config.max_speed_kph, &mut event_seq).await;
            tracing::info!(key = %accident.key, "arrived, beginning repair");
            repair_cycle(&world, id, &accident.request_handler, &accident.key).await;

            current = travel_to(&world, id, &mut rng, current, config.base, config.max_speed_kph, &mut event_seq).await;
            tracing::info!("returned to base");
        }
    });
}

/// Repeatedly plan and traverse a path from `current` to `target`, replanning
/// around any Location that unexpectedly refuses the vehicle after
/// `MAX_MOVE_ATTEMPTS` retries. Returns the vehicle's final position — this
/// is `target` unless the vehicle gave up because it is already adjacent
/// (`plan` returns empty for a reachable-in-zero-hops target).
async fn travel_to(
    world: &World,
    id: VehicleId,
    rng: &mut ActorRng,
    mut current: LocationId,
    target: LocationId,
    max_speed_kph: f64,
    event_seq: &mut u64,
) -> LocationId {
    let mut blacklist: HashSet<LocationId> = HashSet::new();

    loop {
        let path = plan(&world.topology, current, target, &blacklist, max_speed_kph);
        if path.is_empty() {
            return current;
        }

        reserve_path(world, id, &path).await;
        match traverse(world, id, rng, current, &path, max_speed_kph, event_seq).await {
            Ok(()) => {
                release_path(world, id, &path).await;
                return target;
            }
            Err((reached, blocked)) => {
                release_path(world, id, &path).await;
                tracing::warn!(
                    location = %world.topology.name(blocked),
                    "path blocked, retrying from",
                );
                blacklist.insert(blocked);
                current = reached;
            }
        }
    }
}

async fn reserve_path(world: &World, id: VehicleId, path: &[LocationId]) {
    for &hop in path {
        reserve(world.location_mailbox(hop), id).await;
    }
}

async fn release_path(world: &World, id: VehicleId, path: &[LocationId]) {
    for &hop in path {
        release(world.location_mailbox(hop), id).await;
    }
}

/// Walk `path` hop by hop. On success returns `Ok(())`; on an unbounded
/// refusal returns `Err((last_successfully_entered, blocking_location))` so
/// the caller can blacklist the blocker and replan.
async fn traverse(
    world: &World,
    id: VehicleId,
    rng: &mut ActorRng,
    start: LocationId,
    path: &[LocationId],
    max_speed_kph: f64,
    event_seq: &mut u64,
) -> Result<(), (LocationId, LocationId)> {
    let mut previous = start;

    for &hop in path {
        let mailbox = world.location_mailbox(hop);
        let mut attempts = 0u32;
        loop {
            if take(mailbox, id).await {
                break;
            }
            if !check(mailbox, id).await {
                tracing::warn!(location = %world.topology.name(hop), "unexpected failure blocking path; repairing inline");
                repair_cycle(world, id, mailbox, &world.topology.name(hop)).await;
                continue;
            }
            attempts += 1;
            if attempts >= MAX_MOVE_ATTEMPTS {
                return Err((previous, hop));
            }
            tokio::time::sleep(time::wait_time(&world.time_scale, rng)).await;
        }

        *event_seq += 1;
        world.sink.emit(Event {
            source: id.report_key(),
            seq: *event_seq,
            kind: EventKind::VehicleArrived { location: world.topology.name(hop) },
        });

        let travel = world.time_scale.scaled(world.topology.travel_time(hop, max_speed_kph));
        tokio::time::sleep(travel).await;

        if !free(mailbox, id).await {
            tracing::warn!(location = %world.topology.name(hop), "could not free location after arrival");
        }
        previous = hop;
    }

    Ok(())
}

/// The RepairStart/sleep(repairTime)/RepairDone retry loop. The actor on
/// the other end of `mailbox` (a Location or a failing Train) owns its own
/// `-1` report
/// and repaired-event emission once RepairDone is accepted, so this function
/// has nothing further to publish.
async fn repair_cycle(world: &World, id: VehicleId, mailbox: &Mailbox, label: &str) {
    loop {
        repair_start(mailbox, id).await;
        tracing::info!(key = label, "repair started");
        tokio::time::sleep(time::repair_time(&world.time_scale, world.repair_time_hours)).await;
        if repair_done(mailbox, id).await {
            break;
        }
    }
    tracing::info!(key = label, "repair complete");
}
