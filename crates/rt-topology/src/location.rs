//! The polymorphic [`Location`]: a junction or a track, both sharing one
//! contract.

use rt_core::LocationId;

/// Discriminant for a [`Location`] without borrowing its data — used by
/// callers that need to branch on shape without matching the full enum.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LocationKind {
    Junction,
    WaitTrack,
    TransitTrack,
}

#[derive(Clone, Debug)]
pub struct JunctionData {
    /// The 1-based id from the topology file, kept only for display.
    pub numeric_id: u32,
    pub wait_time_hours: f64,
    /// All tracks incident to this junction.
    pub incident_tracks: Vec<LocationId>,
}

#[derive(Clone, Debug)]
pub struct TrackData {
    /// The globally-unique id from the topology file.
    pub label: String,
    pub endpoints: [LocationId; 2],
    pub kind: TrackKind,
}

#[derive(Copy, Clone, Debug)]
pub enum TrackKind {
    Wait { wait_time_hours: f64 },
    Transit { length_km: f64, max_speed_kph: f64 },
}

/// A graph vertex (junction) or edge (track); the unit of exclusivity that a
/// `rt-location` actor governs.
#[derive(Clone, Debug)]
pub enum Location {
    Junction(JunctionData),
    Track(TrackData),
}

impl Location {
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Junction(_) => LocationKind::Junction,
            Location::Track(TrackData { kind: TrackKind::Wait { .. }, .. }) => {
                LocationKind::WaitTrack
            }
            Location::Track(TrackData { kind: TrackKind::Transit { .. }, .. }) => {
                LocationKind::TransitTrack
            }
        }
    }

    /// Human-readable name, used as the `Event`/emergency-report key.
    pub fn name(&self) -> String {
        match self {
            Location::Junction(j) => format!("Junction {}", j.numeric_id),
            Location::Track(t) => t.label.clone(),
        }
    }

    /// Travel time in hours for a vehicle with the given max speed (km/h).
    ///
    /// A junction's wait time is constant, independent of speed. A
    /// `WaitTrack`'s wait time is likewise constant. A
    /// `TransitTrack`'s travel time is `length / min(track.max_speed,
    /// vehicle.max_speed)`.
    pub fn travel_time(&self, vehicle_max_speed_kph: f64) -> f64 {
        match self {
            Location::Junction(j) => j.wait_time_hours,
            Location::Track(TrackData { kind: TrackKind::Wait { wait_time_hours }, .. }) => {
                *wait_time_hours
            }
            Location::Track(TrackData {
                kind: TrackKind::Transit { length_km, max_speed_kph },
                ..
            }) => length_km / max_speed_kph.min(vehicle_max_speed_kph),
        }
    }

    /// Neighbours used by the path planner: for a junction, its incident
    /// tracks; for a track, its two endpoint junctions.
    pub fn neighbours(&self) -> &[LocationId] {
        match self {
            Location::Junction(j) => &j.incident_tracks,
            Location::Track(t) => &t.endpoints,
        }
    }
}
