use std::sync::Arc;
use std::time::Duration;

use rt_core::{LocationId, TimeScale};
use rt_location::LocationHandles;
use rt_output::{ChannelSink, Event, EventKind, NoopSink};
use rt_protocol::{Emergency, EmergencyTarget, Report};
use rt_topology::TopologyBuilder;
use tokio::sync::{mpsc, Mutex};

use crate::repair::{spawn as spawn_repair_vehicle, RepairVehicleConfig};
use crate::train::{spawn as spawn_train, TrainConfig};
use crate::world::World;

/// The scenario-1 topology: junctions 1..4, WaitTracks w1 (1↔2) / w2 (3↔4),
/// TransitTrack t1 (2↔3), stations S1(1,2) / S2(3,4). Travel times are tiny
/// so a whole lap finishes well inside a test timeout.
fn shuttle_topology() -> (rt_topology::Topology, LocationId, LocationId, LocationId) {
    let mut b = TopologyBuilder::new();
    b.add_junction(1, 0.001);
    b.add_junction(2, 0.001);
    b.add_junction(3, 0.001);
    b.add_junction(4, 0.001);
    let w1 = b.add_wait_track("w1", 1, 2, 0.001).unwrap();
    let w2 = b.add_wait_track("w2", 3, 4, 0.001).unwrap();
    let t1 = b.add_transit_track("t1", 2, 3, 1.0, 6000.0).unwrap();
    b.add_station("S1", 1, 2);
    b.add_station("S2", 3, 4);
    let topo = b.build().unwrap();
    (topo, w1, w2, t1)
}

/// Spawns every Location actor in `topo` and assembles a `World` around them.
fn spawn_world(
    topo: rt_topology::Topology,
    sink: rt_output::SharedSink,
) -> (World, mpsc::Receiver<Emergency>, mpsc::Receiver<Report>) {
    let (emergency_tx, emergency_rx) = mpsc::channel(16);
    let (report_tx, report_rx) = mpsc::channel(16);

    let mut locations = Vec::new();
    for (id, location) in topo.locations() {
        let handles = LocationHandles {
            emergency_tx: emergency_tx.clone(),
            report_tx: report_tx.clone(),
            sink: sink.clone(),
        };
        let mailbox = rt_location::spawn(
            id,
            location.name(),
            0.0, // no spontaneous failures; tests trigger emergencies directly
            TimeScale::new(1.0),
            rt_core::ActorRng::new(42, id.0 as u64),
            handles,
        );
        locations.push(mailbox);
    }

    let world = World {
        topology: Arc::new(topo),
        locations: Arc::new(locations),
        time_scale: TimeScale::new(1.0),
        repair_time_hours: 0.001,
        emergency_tx,
        report_tx,
        sink,
    };
    (world, emergency_rx, report_rx)
}

#[tokio::test]
async fn train_completes_a_lap_and_emits_arrival_events() {
    let (topo, _w1, _w2, _t1) = shuttle_topology();
    let (sink, mut events) = ChannelSink::new();
    let (world, _emergency_rx, _report_rx) = spawn_world(topo, Arc::new(sink));

    let s1 = world.topology.station_id("S1").unwrap();
    let s2 = world.topology.station_id("S2").unwrap();
    let start = world.topology.station("S1").unwrap().platforms()[0];

    let config = TrainConfig {
        number: 1,
        max_speed_kph: 6000.0,
        capacity: None,
        route: vec![s1, s2],
        start_location: start,
        failure_rate: 0.0,
    };
    config.validate().unwrap();
    let _mailbox = spawn_train(world, config, 1, 0);

    // A full lap is 4 hops (entry junction, transit track, exit junction,
    // platform); collect arrivals across most of two laps.
    let mut arrived_names = Vec::new();
    let collected = tokio::time::timeout(Duration::from_secs(5), async {
        while arrived_names.len() < 8 {
            let event: Event = events.recv().await.expect("train emits arrival events");
            if let EventKind::VehicleArrived { location } = event.kind {
                arrived_names.push(location);
            }
        }
    })
    .await;

    assert!(collected.is_ok(), "train did not complete two laps in time: {arrived_names:?}");
    assert!(arrived_names.iter().any(|n| n == "t1"), "train should cross the transit track");
}

#[tokio::test]
async fn repair_vehicle_repairs_a_base_emergency_in_place() {
    let (topo, w1, _w2, _t1) = shuttle_topology();
    let (world, _emergency_rx, mut report_rx) = spawn_world(topo, Arc::new(NoopSink));
    let w1_mailbox = world.location_mailbox(w1).clone();

    let (shared_tx, shared_rx) = mpsc::channel(4);
    let repair_config = RepairVehicleConfig { number: 1, max_speed_kph: 6000.0, base: w1 };
    spawn_repair_vehicle(world, repair_config, 7, 0, Arc::new(Mutex::new(shared_rx)));

    shared_tx
        .send(Emergency {
            key: "w1".to_string(),
            location: w1,
            target: EmergencyTarget::Location(w1),
            request_handler: w1_mailbox,
        })
        .await
        .unwrap();

    // The emergency's location equals the vehicle's own base, so it repairs
    // in place without planning a path (the "already close enough for
    // repairs" branch).
    let cleared = tokio::time::timeout(Duration::from_secs(5), report_rx.recv())
        .await
        .expect("repair vehicle completes the cycle in time")
        .expect("a -1 report is published once the location accepts RepairDone");
    assert_eq!(cleared.delta, -1);
    assert_eq!(cleared.key, "w1");
}
