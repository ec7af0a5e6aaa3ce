//! Builds a `rt_topology::Topology`, a `rt_sim::SimConfig`, and the vehicle
//! fleet out of a parsed [`crate::dto::TopologyFile`] — the one place in
//! this workspace where on-disk JSON meets the core's typed API. A
//! two-phase "collect then build" loader: gather junctions and tracks
//! first, then resolve vehicles against the fully built topology.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rt_core::LocationId;
use rt_sim::SimConfig;
use rt_topology::{Topology, TopologyBuilder, TopologyError};
use rt_vehicle::{RepairVehicleConfig, TrainConfig};
use thiserror::Error;

use crate::dto::{StationDto, TrackDto, TrackKindDto, TopologyFile, VehicleDto};

/// Failures possible only at this boundary — fatal at `main`, never
/// propagated into a `rt-*` crate.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading topology file {path:?}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("parsing topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("track {0:?} references unknown junction")]
    UnknownJunctionOnTrack(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("train {0} route references unknown station {1:?}")]
    UnknownStation(u32, String),

    #[error("repair vehicle {0} base references unknown track {1:?}")]
    UnknownTrack(u32, String),

    #[error("train {0} has an empty route")]
    EmptyRoute(u32),
}

/// Everything the core needs to run one simulation, assembled from a
/// topology file.
pub struct LoadedSimulation {
    pub topology: Topology,
    pub config: SimConfig,
    pub trains: Vec<TrainConfig>,
    pub repair_vehicles: Vec<RepairVehicleConfig>,
}

pub fn load_from_path(path: &Path) -> Result<LoadedSimulation, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&text)
}

pub fn load_from_str(text: &str) -> Result<LoadedSimulation, LoadError> {
    let file: TopologyFile = serde_json::from_str(text)?;
    build(file)
}

fn build(file: TopologyFile) -> Result<LoadedSimulation, LoadError> {
    let mut builder = TopologyBuilder::new();
    for junction in &file.junctions {
        builder.add_junction(junction.id, junction.wait_time_minutes / 60.0);
    }

    let mut track_ids: HashMap<String, LocationId> = HashMap::with_capacity(file.tracks.len());
    for track in &file.tracks {
        let location = add_track(&mut builder, track)?;
        track_ids.insert(track.id.clone(), location);
    }

    for station in &file.stations {
        add_station(&mut builder, station);
    }

    let topology = builder.build()?;

    let mut trains = Vec::new();
    let mut repair_vehicles = Vec::new();
    for vehicle in file.vehicles {
        match vehicle {
            VehicleDto::Train { id, max_speed, capacity, route } => {
                trains.push(build_train(&topology, id, max_speed, capacity, route, file.config.failure_rate)?);
            }
            VehicleDto::Repair { id, max_speed, base } => {
                let base_location = track_ids
                    .get(&base)
                    .copied()
                    .ok_or_else(|| LoadError::UnknownTrack(id, base))?;
                repair_vehicles.push(RepairVehicleConfig {
                    number: id,
                    max_speed_kph: max_speed,
                    base: base_location,
                });
            }
        }
    }

    Ok(LoadedSimulation { topology, config: file.config, trains, repair_vehicles })
}

fn add_track(
    builder: &mut TopologyBuilder, track: &TrackDto,
) -> Result<LocationId, LoadError> {
    let id = match track.kind {
        TrackKindDto::Wait => {
            let wait_time_hours = track.wait_time_minutes.unwrap_or(0.0) / 60.0;
            builder.add_wait_track(track.id.clone(), track.a, track.b, wait_time_hours)
        }
        TrackKindDto::Transit => {
            let length_km = track.length.unwrap_or(0.0);
            let max_speed_kph = track.max_speed.unwrap_or(0.0);
            builder.add_transit_track(track.id.clone(), track.a, track.b, length_km, max_speed_kph)
        }
    };
    id.map_err(|err| match err {
        TopologyError::UnknownJunction(_) => LoadError::UnknownJunctionOnTrack(track.id.clone()),
        other => LoadError::Topology(other),
    })
}

fn add_station(builder: &mut TopologyBuilder, station: &StationDto) {
    builder.add_station(station.name.clone(), station.a, station.b);
}

fn build_train(
    topology: &Topology, id: u32, max_speed: f64, capacity: Option<u32>, route: Vec<String>,
    failure_rate: f64,
) -> Result<TrainConfig, LoadError> {
    let mut station_route = Vec::with_capacity(route.len());
    for name in &route {
        let station_id = topology
            .station_id(name)
            .ok_or_else(|| LoadError::UnknownStation(id, name.clone()))?;
        station_route.push(station_id);
    }

    let start_location = station_route
        .first()
        .map(|&first| topology.station_by_id(first).platforms()[0])
        .ok_or(LoadError::EmptyRoute(id))?;

    Ok(TrainConfig {
        number: id,
        max_speed_kph: max_speed,
        capacity,
        route: station_route,
        start_location,
        failure_rate,
    })
}
