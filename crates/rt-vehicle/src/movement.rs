//! The shared Take/Check/back-off entry loop both Train and RepairVehicle
//! drive against a Location.
//!
//! A Take→Check→wait retry shape: repeatedly attempt Take, and back off
//! with `waitTime`/`offlineWaitTime` depending on what `Check` reveals.
//! Unbounded — every caller here retries until accepted, relying on a
//! repair vehicle to eventually clear the Location. The repair vehicle's
//! own path traversal (`repair.rs`) is the one place that gives up after a
//! bounded number of attempts, since it needs to detect a blocked hop and
//! replan around it; it does not go through this module.

use rt_core::{time, ActorRng, LocationId, VehicleId};
use rt_location::client::{check, free, take};

use crate::world::World;

/// Repeatedly pick a target via `pick` and attempt Take, backing off on
/// denial with `waitTime`/`offlineWaitTime` depending on what `Check`
/// reveals. Loops until accepted.
pub async fn enter(
    world: &World,
    who: VehicleId,
    rng: &mut ActorRng,
    mut pick: impl FnMut(&mut ActorRng) -> LocationId,
) -> LocationId {
    loop {
        let target = pick(rng);
        let mailbox = world.location_mailbox(target);

        if take(mailbox, who).await {
            return target;
        }

        let offline = !check(mailbox, who).await;
        let wait = if offline {
            time::offline_wait_time(&world.time_scale, rng)
        } else {
            time::wait_time(&world.time_scale, rng)
        };
        tokio::time::sleep(wait).await;
    }
}

/// Enter one of several parallel candidate tracks, reselecting uniformly at
/// random on each denial (used for both parallel-track and platform
/// selection).
pub async fn enter_one_of(
    world: &World,
    who: VehicleId,
    rng: &mut ActorRng,
    candidates: &[LocationId],
) -> LocationId {
    enter(world, who, rng, |r| {
        *r.choose(candidates).expect("candidate bundle is non-empty")
    })
    .await
}

/// Free `from`, retrying indefinitely until accepted.
///
/// A Free is rejected while `from` is still failing; the vehicle is
/// effectively stuck there until a repair vehicle clears it. This keeps
/// backing off and retrying for as long as that takes — it never abandons
/// the Free, so every Take a vehicle issues is eventually paired with a
/// matching Free by the same holder.
pub async fn free_with_retries(world: &World, who: VehicleId, rng: &mut ActorRng, from: LocationId) {
    let mailbox = world.location_mailbox(from);
    loop {
        if free(mailbox, who).await {
            return;
        }
        let offline = !check(mailbox, who).await;
        let wait = if offline {
            time::offline_wait_time(&world.time_scale, rng)
        } else {
            time::wait_time(&world.time_scale, rng)
        };
        tokio::time::sleep(wait).await;
    }
}
