//! Shared read-only context every Vehicle agent needs: the topology, every
//! Location's mailbox, and the channels onto the graph-owned emergency bus
//! and stats reporter. A failing Train is addressed directly through the
//! `Emergency.request_handler`
//! mailbox the train publishes on its own failure, so `World` needs no
//! separate train-mailbox table.

use std::sync::Arc;

use rt_core::{LocationId, TimeScale};
use rt_output::SharedSink;
use rt_protocol::{Emergency, Mailbox, Report};
use rt_topology::Topology;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct World {
    pub topology: Arc<Topology>,
    /// Indexed by `LocationId`.
    pub locations: Arc<Vec<Mailbox>>,
    pub time_scale: TimeScale,
    /// How long a repair takes, in simulated hours, before scaling.
    pub repair_time_hours: f64,
    pub emergency_tx: mpsc::Sender<Emergency>,
    pub report_tx: mpsc::Sender<Report>,
    pub sink: SharedSink,
}

impl World {
    pub fn location_mailbox(&self, id: LocationId) -> &Mailbox {
        &self.locations[id.index()]
    }
}
