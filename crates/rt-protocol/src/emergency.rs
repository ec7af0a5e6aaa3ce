//! Emergency and stats-report records published on the graph-owned buses.

use rt_core::{LocationId, VehicleId};

use crate::mailbox::Mailbox;

/// Published when a Location or Train enters the Failing state.
///
/// `location` is where the repair vehicle must travel to — for a failed
/// Location that is the Location itself; for a failed Train it is the
/// Location the train was occupying at the moment of failure. `target` and
/// `request_handler` identify who actually answers RepairStart/RepairDone
/// once the repair vehicle arrives there, which for a Train is the train's
/// own mailbox rather than the Location's (a failing train becomes a trivial
/// location-like actor over its own inbox).
#[derive(Clone)]
pub struct Emergency {
    pub key: String,
    pub location: LocationId,
    pub target: EmergencyTarget,
    pub request_handler: Mailbox,
}

/// What failed: a Location (identified for logging/blacklist use) or a
/// Train (identified by its `VehicleId` for the "Train #N" report key).
#[derive(Clone, Copy, Debug)]
pub enum EmergencyTarget {
    Location(rt_core::LocationId),
    Train(VehicleId),
}

/// A delta to the active-emergencies set, consumed by the stats task.
/// `+1` inserts `key`; `-1` removes it; duplicate `+1` is absorbed
/// (idempotent w.r.t. key presence).
#[derive(Clone, Debug)]
pub struct Report {
    pub delta: i8,
    pub key: String,
}

impl Report {
    pub fn raised(key: impl Into<String>) -> Self {
        Report { delta: 1, key: key.into() }
    }

    pub fn cleared(key: impl Into<String>) -> Self {
        Report { delta: -1, key: key.into() }
    }
}
