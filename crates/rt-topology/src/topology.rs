//! The immutable [`Topology`]: an arena of [`Location`]s plus a builder.
//!
//! Actors hold `LocationId` handles, never owning references, so the graph
//! has no reference cycles despite being logically bidirectional. There is
//! no spatial index here — the graph is small and explicit.

use std::collections::HashMap;

use rt_core::{LocationId, StationId};

use crate::error::{TopologyError, TopologyResult};
use crate::location::{JunctionData, Location, TrackData, TrackKind};
use crate::station::Station;

/// Immutable graph of Locations and Stations, built once at load time and
/// shared (read-only) by every actor for the lifetime of the simulation.
pub struct Topology {
    locations: Vec<Location>,
    stations: Vec<Station>,
}

impl Topology {
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i as u32), l))
    }

    pub fn name(&self, id: LocationId) -> String {
        self.location(id).name()
    }

    pub fn travel_time(&self, id: LocationId, vehicle_max_speed_kph: f64) -> f64 {
        self.location(id).travel_time(vehicle_max_speed_kph)
    }

    pub fn neighbours(&self, id: LocationId) -> &[LocationId] {
        self.location(id).neighbours()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .position(|s| s.name == name)
            .map(|i| StationId(i as u32))
    }

    pub fn station_by_id(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    /// All tracks directly connecting junctions `a` and `b`, in either
    /// endpoint order. Used by [`Station::route_to`].
    pub(crate) fn tracks_between(&self, a: LocationId, b: LocationId) -> Vec<LocationId> {
        self.locations
            .iter()
            .enumerate()
            .filter_map(|(i, loc)| match loc {
                Location::Track(TrackData { endpoints, .. })
                    if (endpoints[0] == a && endpoints[1] == b)
                        || (endpoints[0] == b && endpoints[1] == a) =>
                {
                    Some(LocationId(i as u32))
                }
                _ => None,
            })
            .collect()
    }
}

/// Incrementally constructs a [`Topology`], then [`build`](Self::build)s it.
///
/// An add-then-build shape: junctions and tracks may be added in any order;
/// `build()` resolves cross-references (station adjacency, incident-track
/// lists) once at the end.
pub struct TopologyBuilder {
    junctions: HashMap<u32, LocationId>,
    locations: Vec<Location>,
    track_labels: HashMap<String, LocationId>,
    pending_stations: Vec<(String, u32, u32)>,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self {
            junctions: HashMap::new(),
            locations: Vec::new(),
            track_labels: HashMap::new(),
            pending_stations: Vec::new(),
        }
    }

    /// Add a junction keyed by its on-disk 1-based numeric id.
    pub fn add_junction(&mut self, numeric_id: u32, wait_time_hours: f64) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location::Junction(JunctionData {
            numeric_id,
            wait_time_hours,
            incident_tracks: Vec::new(),
        }));
        self.junctions.insert(numeric_id, id);
        id
    }

    fn resolve_junction(&self, numeric_id: u32) -> TopologyResult<LocationId> {
        self.junctions
            .get(&numeric_id)
            .copied()
            .ok_or(TopologyError::UnknownJunction(numeric_id))
    }

    /// Add a WaitTrack between two junctions (by their numeric ids).
    pub fn add_wait_track(
        &mut self,
        label: impl Into<String>,
        a: u32,
        b: u32,
        wait_time_hours: f64,
    ) -> TopologyResult<LocationId> {
        let label = label.into();
        if self.track_labels.contains_key(&label) {
            return Err(TopologyError::DuplicateTrackId(label));
        }
        let ja = self.resolve_junction(a)?;
        let jb = self.resolve_junction(b)?;
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location::Track(TrackData {
            label: label.clone(),
            endpoints: [ja, jb],
            kind: TrackKind::Wait { wait_time_hours },
        }));
        self.link_incident(ja, id);
        self.link_incident(jb, id);
        self.track_labels.insert(label, id);
        Ok(id)
    }

    /// Add a TransitTrack between two junctions (by their numeric ids).
    pub fn add_transit_track(
        &mut self,
        label: impl Into<String>,
        a: u32,
        b: u32,
        length_km: f64,
        max_speed_kph: f64,
    ) -> TopologyResult<LocationId> {
        let label = label.into();
        if self.track_labels.contains_key(&label) {
            return Err(TopologyError::DuplicateTrackId(label));
        }
        let ja = self.resolve_junction(a)?;
        let jb = self.resolve_junction(b)?;
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location::Track(TrackData {
            label: label.clone(),
            endpoints: [ja, jb],
            kind: TrackKind::Transit { length_km, max_speed_kph },
        }));
        self.link_incident(ja, id);
        self.link_incident(jb, id);
        self.track_labels.insert(label, id);
        Ok(id)
    }

    fn link_incident(&mut self, junction: LocationId, track: LocationId) {
        if let Location::Junction(j) = &mut self.locations[junction.index()] {
            j.incident_tracks.push(track);
        }
    }

    /// Register a station; its platform tracks are resolved at [`build`].
    pub fn add_station(&mut self, name: impl Into<String>, a: u32, b: u32) {
        self.pending_stations.push((name.into(), a, b));
    }

    pub fn build(self) -> TopologyResult<Topology> {
        let mut stations = Vec::with_capacity(self.pending_stations.len());
        for (name, a, b) in self.pending_stations {
            let ja = self.resolve_junction(a)?;
            let jb = self.resolve_junction(b)?;
            let platforms = self
                .locations
                .iter()
                .enumerate()
                .filter_map(|(i, loc)| match loc {
                    Location::Track(TrackData {
                        kind: TrackKind::Wait { .. },
                        endpoints,
                        ..
                    }) if (endpoints[0] == ja && endpoints[1] == jb)
                        || (endpoints[0] == jb && endpoints[1] == ja) =>
                    {
                        Some(LocationId(i as u32))
                    }
                    _ => None,
                })
                .collect::<Vec<_>>();
            if platforms.is_empty() {
                return Err(TopologyError::StationHasNoPlatforms(name));
            }
            stations.push(Station { name, a: ja, b: jb, platforms });
        }
        Ok(Topology { locations: self.locations, stations })
    }
}
