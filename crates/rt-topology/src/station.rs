//! Station: a named pair of junctions joined by platform WaitTracks.
//!
//! A station is not a [`crate::Location`] itself — it is a lookup/helper
//! over the immutable topology.

use rt_core::LocationId;

use crate::error::{TopologyError, TopologyResult};
use crate::topology::Topology;

#[derive(Clone, Debug)]
pub struct Station {
    pub name: String,
    pub a: LocationId,
    pub b: LocationId,
    /// WaitTracks between `a` and `b` that a train can terminate on.
    pub platforms: Vec<LocationId>,
}

/// A computed hop between two adjacent stations: the junction a train must
/// reach first, the parallel bundle of tracks it may choose among, and the
/// junction on the far side.
#[derive(Clone, Debug)]
pub struct Hop {
    pub entry_junction: LocationId,
    pub candidate_tracks: Vec<LocationId>,
    pub exit_junction: LocationId,
}

impl Station {
    /// Candidate platform tracks a train may terminate on at this station.
    pub fn platforms(&self) -> &[LocationId] {
        &self.platforms
    }

    /// Find the junction pairing connecting this station to `other`, and the
    /// parallel track bundle between that pairing.
    ///
    /// The two stations must be directly connected by one or more tracks at
    /// one of the four `(self.a | self.b) x (other.a | other.b)` junction
    /// pairings; otherwise the configuration is malformed.
    pub fn route_to(&self, topology: &Topology, other: &Station) -> TopologyResult<Hop> {
        for &entry in &[self.a, self.b] {
            for &exit in &[other.a, other.b] {
                let candidates = topology.tracks_between(entry, exit);
                if !candidates.is_empty() {
                    return Ok(Hop {
                        entry_junction: entry,
                        candidate_tracks: candidates,
                        exit_junction: exit,
                    });
                }
            }
        }
        Err(TopologyError::StationNotAdjacent { name: other.name.clone() })
    }
}
