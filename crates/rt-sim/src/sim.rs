//! The [`Simulation`] handle returned by [`crate::SimBuilder::build`].
//!
//! There is no tick loop to drive: every actor is already running as its
//! own `tokio::spawn`ed task by the time `build` returns. `Simulation` is a
//! thin, live handle `demos/loader` holds onto — for the optional operator
//! surface's `list` command — and to keep the `Arc<Topology>` alive for as
//! long as the run.

use std::sync::Arc;

use rt_topology::Topology;

use crate::tracking::VehiclePositions;

pub struct Simulation {
    topology: Arc<Topology>,
    positions: VehiclePositions,
}

impl Simulation {
    pub(crate) fn new(topology: Arc<Topology>, positions: VehiclePositions) -> Self {
        Self { topology, positions }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Every vehicle's last-known Location name, sorted by vehicle name —
    /// backs the operator `list` command. Empty until each vehicle has
    /// completed its first hop.
    pub fn vehicle_locations(&self) -> Vec<(String, String)> {
        self.positions.snapshot()
    }
}
