//! Immutable transport-network graph: junctions, tracks, stations, and the
//! Dijkstra path planner.
//!
//! | module      | contents                                              |
//! |-------------|--------------------------------------------------------|
//! | [`location`]| `Location`, `LocationKind`, `JunctionData`, `TrackData` |
//! | [`topology`]| `Topology`, `TopologyBuilder`                          |
//! | [`station`] | `Station`, `Hop`                                        |
//! | [`planner`] | `plan` — shortest-travel-time path with blacklist       |
//! | [`error`]   | `TopologyError`, `TopologyResult<T>`                    |

pub mod error;
pub mod location;
pub mod planner;
pub mod station;
pub mod topology;

pub use error::{TopologyError, TopologyResult};
pub use location::{JunctionData, Location, LocationKind, TrackData, TrackKind};
pub use planner::plan;
pub use station::{Hop, Station};
pub use topology::{Topology, TopologyBuilder};
