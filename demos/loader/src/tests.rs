//! Exercises the JSON → `LoadedSimulation` path directly, without going
//! through a file on disk.

use crate::load::{load_from_str, LoadError};

const SHUTTLE_JSON: &str = r#"
{
  "config": { "TimeScale": 1.0, "RepairTime": 0.5, "FailureRate": 0.01 },
  "junctions": [
    { "id": 1, "waitTime": 0.06 },
    { "id": 2, "waitTime": 0.06 },
    { "id": 3, "waitTime": 0.06 },
    { "id": 4, "waitTime": 0.06 }
  ],
  "tracks": [
    { "id": "w1", "type": "wait", "a": 1, "b": 2, "waitTime": 0.06 },
    { "id": "w2", "type": "wait", "a": 3, "b": 4, "waitTime": 0.06 },
    { "id": "t1", "type": "transit", "a": 2, "b": 3, "length": 1.0, "maxSpeed": 80.0 }
  ],
  "stations": [
    { "name": "S1", "a": 1, "b": 2 },
    { "name": "S2", "a": 3, "b": 4 }
  ],
  "vehicles": [
    { "type": "train", "id": 1, "maxSpeed": 80.0, "capacity": 200, "route": ["S1", "S2"] },
    { "type": "repair", "id": 1, "maxSpeed": 60.0, "base": "w1" }
  ]
}
"#;

#[test]
fn loads_a_well_formed_topology_into_trains_and_repair_vehicles() {
    let loaded = load_from_str(SHUTTLE_JSON).expect("valid topology should load");

    assert_eq!(loaded.topology.location_count(), 7); // 4 junctions + 3 tracks
    assert_eq!(loaded.topology.stations().len(), 2);
    assert_eq!(loaded.trains.len(), 1);
    assert_eq!(loaded.repair_vehicles.len(), 1);

    let train = &loaded.trains[0];
    assert_eq!(train.number, 1);
    assert_eq!(train.capacity, Some(200));
    assert_eq!(train.route.len(), 2);
    assert_eq!(train.failure_rate, loaded.config.failure_rate);

    let repair = &loaded.repair_vehicles[0];
    assert_eq!(repair.number, 1);
    assert_eq!(repair.base, loaded.topology.station("S1").unwrap().platforms()[0]);
}

#[test]
fn unknown_junction_on_a_track_is_a_load_error() {
    let json = SHUTTLE_JSON.replace(r#""a": 2, "b": 3"#, r#""a": 2, "b": 99"#);
    let err = load_from_str(&json).unwrap_err();
    assert!(matches!(err, LoadError::UnknownJunctionOnTrack(id) if id == "t1"));
}

#[test]
fn train_route_referencing_an_unknown_station_is_a_load_error() {
    let json = SHUTTLE_JSON.replace(r#""route": ["S1", "S2"]"#, r#""route": ["S1", "S3"]"#);
    let err = load_from_str(&json).unwrap_err();
    assert!(matches!(err, LoadError::UnknownStation(1, name) if name == "S3"));
}

#[test]
fn repair_vehicle_base_referencing_an_unknown_track_is_a_load_error() {
    let json = SHUTTLE_JSON.replace(r#""base": "w1""#, r#""base": "nonexistent""#);
    let err = load_from_str(&json).unwrap_err();
    assert!(matches!(err, LoadError::UnknownTrack(1, track) if track == "nonexistent"));
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = load_from_str("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}
