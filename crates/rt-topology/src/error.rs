//! Topology-subsystem error type.

use rt_core::LocationId;
use thiserror::Error;

/// Errors produced building or querying a [`crate::Topology`].
///
/// Configuration errors (malformed adjacency, dangling references) are
/// concentrated here; they are fatal only at the loader boundary — this
/// crate only ever returns `Result`, never exits.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("junction {0} referenced but never added")]
    UnknownJunction(u32),

    #[error("location {0} not found in topology")]
    UnknownLocation(LocationId),

    #[error("duplicate track id {0:?}")]
    DuplicateTrackId(String),

    #[error("station {name:?} junctions are not directly connected by any track")]
    StationNotAdjacent { name: String },

    #[error("station {0:?} has no platforms")]
    StationHasNoPlatforms(String),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
