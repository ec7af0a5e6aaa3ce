//! The observable event stream: every Location, Vehicle, and the stats task
//! publish tagged, sequenced events that external monitors (and the test
//! suite) consume. This is separate from `tracing`'s operational log lines
//! — `Event` is data, not prose.

use rt_core::VehicleId;
use rt_protocol::RequestKind;

/// A single observable occurrence, tagged with its source actor's name and a
/// monotonically increasing per-actor counter.
#[derive(Clone, Debug)]
pub struct Event {
    pub source: String,
    pub seq: u64,
    pub kind: EventKind,
}

#[derive(Clone, Debug)]
pub enum EventKind {
    /// A Location actor answered a request.
    LocationRequest { kind: RequestKind, sender: VehicleId, accepted: bool },
    /// A Location's own per-hour failure trial succeeded.
    LocationFailed,
    /// A Location finished a RepairStart/RepairDone cycle.
    LocationRepaired,
    /// A Train's own failure ticker fired.
    TrainFailed { train: VehicleId },
    /// A Train's RepairStart/RepairDone cycle completed.
    TrainRepaired { train: VehicleId },
    /// Published onto the emergency bus.
    EmergencyRaised { key: String },
    /// The stats task observed a `Report` clearing `key`.
    EmergencyCleared { key: String },
    /// A Station's (optional, informational) task generator fired.
    TaskGenerated { worker_count: u32, duration_hours: f64 },
    /// A vehicle finished a hop into a new Location.
    VehicleArrived { location: String },
}
