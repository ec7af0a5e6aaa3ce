//! `TrackingSink` — wraps the caller's `SharedSink` and additionally
//! maintains a `vehicle name -> last known Location name` table from the
//! `VehicleArrived` events every Train and RepairVehicle already publishes,
//! so the (optional, `demos/loader`-only) operator `list` command has
//! something to read without `rt-vehicle` needing any request/reply surface
//! of its own.
//!
//! A bridging-observer pattern: compose behaviour around an inner sink
//! rather than modifying the publishers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rt_output::{Event, EventKind, EventSink, SharedSink};

#[derive(Clone)]
pub struct VehiclePositions {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl VehiclePositions {
    fn new() -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// A sorted snapshot of `(vehicle, location)` pairs for the `list`
    /// operator command.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let map = self.inner.lock().expect("position table mutex poisoned");
        let mut rows: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        rows.sort();
        rows
    }
}

pub struct TrackingSink {
    inner: SharedSink,
    positions: VehiclePositions,
}

impl TrackingSink {
    /// Wrap `inner`; returns the sink (to hand to every actor) and a handle
    /// the simulation root keeps to answer `list` queries.
    pub fn new(inner: SharedSink) -> (Self, VehiclePositions) {
        let positions = VehiclePositions::new();
        (Self { inner, positions: positions.clone() }, positions)
    }
}

impl EventSink for TrackingSink {
    fn emit(&self, event: Event) {
        if let EventKind::VehicleArrived { location } = &event.kind {
            let mut map = self.positions.inner.lock().expect("position table mutex poisoned");
            map.insert(event.source.clone(), location.clone());
        }
        self.inner.emit(event);
    }
}
