use rt_core::{ActorRng, LocationId, TimeScale, VehicleId};
use rt_output::NoopSink;
use rt_protocol::{Emergency, Mailbox, Report};
use tokio::sync::mpsc;

use crate::actor::{spawn, LocationHandles};
use crate::client::{check, free, release, repair_done, repair_start, reserve, take};

fn spawn_test_location(
    failure_rate: f64,
) -> (Mailbox, mpsc::Receiver<Emergency>, mpsc::Receiver<Report>) {
    let (emergency_tx, emergency_rx) = mpsc::channel(16);
    let (report_tx, report_rx) = mpsc::channel(16);
    let handles = LocationHandles {
        emergency_tx,
        report_tx,
        sink: std::sync::Arc::new(NoopSink),
    };
    let mailbox = spawn(
        LocationId(0),
        "Test Location".to_string(),
        failure_rate,
        TimeScale::new(1000.0),
        ActorRng::new(1, 0),
        handles,
    );
    (mailbox, emergency_rx, report_rx)
}

// P1 / R1: occupant is none-or-one, and repeated Take by the same holder is
// idempotently accepted.
#[tokio::test]
async fn take_is_idempotent_for_the_same_holder() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let v = VehicleId::Train(1);
    assert!(take(&mailbox, v).await);
    assert!(take(&mailbox, v).await); // R1: second Take by same holder still accepted
}

#[tokio::test]
async fn take_is_rejected_for_a_different_vehicle_while_occupied() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let a = VehicleId::Train(1);
    let b = VehicleId::Train(2);
    assert!(take(&mailbox, a).await);
    assert!(!take(&mailbox, b).await);
}

// P4: Free accepted only for the current occupant, and not while failing.
#[tokio::test]
async fn free_is_rejected_for_a_non_occupant() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let a = VehicleId::Train(1);
    let b = VehicleId::Train(2);
    assert!(take(&mailbox, a).await);
    assert!(!free(&mailbox, b).await);
    assert!(free(&mailbox, a).await);
}

#[tokio::test]
async fn free_without_a_prior_take_is_rejected() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    assert!(!free(&mailbox, VehicleId::Train(1)).await);
}

// P2 / R2: at most one reservation holder; re-Reserve by the same holder is
// rejected (no idempotence contract for Reserve, unlike Take).
#[tokio::test]
async fn reserve_is_exclusive_and_not_idempotent_for_the_same_holder() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let a = VehicleId::Train(1);
    assert!(reserve(&mailbox, a).await);
    assert!(!reserve(&mailbox, a).await, "R2: second Reserve by same holder rejected");
    assert!(!reserve(&mailbox, VehicleId::Train(2)).await);
    assert!(release(&mailbox, a).await);
    assert!(reserve(&mailbox, VehicleId::Train(2)).await);
}

#[tokio::test]
async fn release_is_rejected_for_a_non_holder() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let a = VehicleId::Train(1);
    let b = VehicleId::Train(2);
    assert!(reserve(&mailbox, a).await);
    assert!(!release(&mailbox, b).await);
}

// Check is a pure probe: it never mutates state.
#[tokio::test]
async fn check_does_not_mutate_state() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    assert!(check(&mailbox, VehicleId::Train(1)).await);
    assert!(check(&mailbox, VehicleId::Train(1)).await);
    // Occupancy is still free afterwards.
    assert!(take(&mailbox, VehicleId::Train(1)).await);
}

// P5 / P6: RepairDone only succeeds after RepairStart, and clears both flags.
#[tokio::test]
async fn repair_done_requires_a_preceding_repair_start() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let repairer = VehicleId::Repair(1);
    assert!(!repair_done(&mailbox, repairer).await);
    assert!(repair_start(&mailbox, repairer).await);
    assert!(repair_done(&mailbox, repairer).await);
}

#[tokio::test]
async fn repair_start_is_idempotent_but_repair_done_is_not_repeatable() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let repairer = VehicleId::Repair(1);
    assert!(repair_start(&mailbox, repairer).await);
    assert!(!repair_start(&mailbox, repairer).await, "already started");
    assert!(repair_done(&mailbox, repairer).await);
    assert!(!repair_done(&mailbox, repairer).await, "no repair in progress anymore");
}

// Reservation is advisory only while the Location is healthy: it does not
// block a non-reserving Train's Take. The case where reservation does bite
// (once failing) is covered by
// `failure_ticker_is_suppressed_once_failing_until_repair_done` below.
#[tokio::test]
async fn reservation_does_not_block_takes_on_a_healthy_location() {
    let (mailbox, _e, _r) = spawn_test_location(0.0);
    let train = VehicleId::Train(1);
    let repairer = VehicleId::Repair(1);

    assert!(reserve(&mailbox, repairer).await);
    assert!(take(&mailbox, train).await);
    assert!(free(&mailbox, train).await);
    assert!(release(&mailbox, repairer).await);
}

#[tokio::test]
async fn failure_ticker_is_suppressed_once_failing_until_repair_done() {
    // failure_rate = 1.0 guarantees the very first scaled hour fails the
    // location; the ticker is then suppressed (select! guard) until
    // RepairDone, matching invariant 4.
    let (mailbox, mut emergency_rx, mut report_rx) = spawn_test_location(1.0);
    let repairer = VehicleId::Repair(1);

    let emergency = emergency_rx.recv().await.expect("failure emergency published");
    assert_eq!(emergency.key, "Test Location");
    let report = report_rx.recv().await.expect("stats +1 report published");
    assert_eq!(report.delta, 1);

    // The now-failing location admits only its reservation holder.
    assert!(!take(&mailbox, VehicleId::Train(1)).await);
    assert!(reserve(&mailbox, repairer).await);
    assert!(take(&mailbox, repairer).await);

    assert!(repair_start(&mailbox, repairer).await);
    assert!(repair_done(&mailbox, repairer).await);

    let cleared = report_rx.recv().await.expect("stats -1 report published");
    assert_eq!(cleared.delta, -1);

    assert!(free(&mailbox, repairer).await);
    // Healthy again: any train may now enter.
    assert!(take(&mailbox, VehicleId::Train(2)).await);
}
