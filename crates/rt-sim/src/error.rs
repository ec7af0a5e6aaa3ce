//! Simulation-root error type: construction-time failures only. Runtime
//! protocol rejections never reach here — they are plain `bool`s handled
//! inside `rt-location`/`rt-vehicle`.

use rt_topology::TopologyError;
use rt_vehicle::VehicleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("train route is invalid: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("topology error building simulation: {0}")]
    Topology(#[from] TopologyError),

    #[error("train route references stations that are not directly connected: {0}")]
    RouteNotAdjacent(#[source] TopologyError),
}

pub type SimResult<T> = Result<T, SimError>;
