//! Fluent builder for constructing a [`Simulation`]: required inputs up
//! front via `new`, optional inputs via chained setters, validation
//! concentrated in `build`.

use std::sync::Arc;

use rt_core::ActorRng;
use rt_location::LocationHandles;
use rt_output::{NoopSink, SharedSink};
use rt_protocol::{Emergency, Report};
use rt_topology::Topology;
use rt_vehicle::{RepairVehicleConfig, TrainConfig, World};
use tokio::sync::{mpsc, Mutex};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::sim::Simulation;
use crate::tracking::TrackingSink;
use crate::{stats, tasks};

// Disjoint RNG index namespaces so two actors of different kinds never
// share a seed even if their position within their own collection matches
// (`rt_core::ActorRng`'s seed is `global_seed ^ (index * MIXING_CONSTANT)`,
// not a cryptographic hash, so aliasing index spaces would correlate their
// streams).
const TRAIN_INDEX_BASE: u64 = 1_000_000;
const REPAIR_INDEX_BASE: u64 = 2_000_000;
const STATION_INDEX_BASE: u64 = 3_000_000;

pub struct SimBuilder {
    topology: Topology,
    config: SimConfig,
    seed: u64,
    trains: Vec<TrainConfig>,
    repair_vehicles: Vec<RepairVehicleConfig>,
    sink: SharedSink,
}

impl SimBuilder {
    pub fn new(topology: Topology, config: SimConfig, seed: u64) -> Self {
        Self {
            topology,
            config,
            seed,
            trains: Vec::new(),
            repair_vehicles: Vec::new(),
            sink: Arc::new(NoopSink),
        }
    }

    pub fn train(mut self, config: TrainConfig) -> Self {
        self.trains.push(config);
        self
    }

    pub fn repair_vehicle(mut self, config: RepairVehicleConfig) -> Self {
        self.repair_vehicles.push(config);
        self
    }

    /// Supply the sink every actor publishes `Event`s through. Defaults to
    /// `NoopSink` if never called.
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Validate every train's route, spawn every Location and Vehicle
    /// actor, and return a live [`Simulation`] handle.
    pub fn build(self) -> SimResult<Simulation> {
        for train in &self.trains {
            train.validate()?;
            self.validate_route_adjacency(train)?;
        }

        let (sink, positions) = TrackingSink::new(self.sink);
        let sink: SharedSink = Arc::new(sink);

        let (emergency_tx, emergency_rx) = mpsc::channel::<Emergency>(16);
        let (report_tx, report_rx) = mpsc::channel::<Report>(64);

        let mut locations = Vec::with_capacity(self.topology.location_count());
        for (id, location) in self.topology.locations() {
            let handles = LocationHandles {
                emergency_tx: emergency_tx.clone(),
                report_tx: report_tx.clone(),
                sink: sink.clone(),
            };
            let mailbox = rt_location::spawn(
                id,
                location.name(),
                self.config.failure_rate,
                self.config.time_scale(),
                ActorRng::new(self.seed, id.index() as u64),
                handles,
            );
            locations.push(mailbox);
        }

        let topology = Arc::new(self.topology);
        let world = World {
            topology: topology.clone(),
            locations: Arc::new(locations),
            time_scale: self.config.time_scale(),
            repair_time_hours: self.config.repair_time_hours,
            emergency_tx,
            report_tx: report_tx.clone(),
            sink: sink.clone(),
        };

        for (i, train) in self.trains.into_iter().enumerate() {
            rt_vehicle::spawn_train(world.clone(), train, self.seed, TRAIN_INDEX_BASE + i as u64);
        }

        let shared_emergency_rx = Arc::new(Mutex::new(emergency_rx));
        for (i, repair_vehicle) in self.repair_vehicles.into_iter().enumerate() {
            rt_vehicle::spawn_repair_vehicle(
                world.clone(),
                repair_vehicle,
                self.seed,
                REPAIR_INDEX_BASE + i as u64,
                shared_emergency_rx.clone(),
            );
        }

        stats::spawn(report_rx, sink.clone());

        if let Some(task_config) = self.config.tasks {
            for (i, station) in topology.stations().iter().enumerate() {
                tasks::spawn(
                    station.name.clone(),
                    task_config,
                    self.config.time_scale(),
                    self.seed,
                    STATION_INDEX_BASE + i as u64,
                    sink.clone(),
                );
            }
        }

        Ok(Simulation::new(topology, positions))
    }

    /// Every consecutive pair of stations on the route (wrapping around to
    /// the first) must be directly connected by a track bundle; this is
    /// checked once here rather than discovered mid-run.
    /// Called after `TrainConfig::validate`, so `route` is already known
    /// non-empty.
    fn validate_route_adjacency(&self, train: &TrainConfig) -> SimResult<()> {
        let len = train.route.len();
        for i in 0..len {
            let current = self.topology.station_by_id(train.route[i]);
            let next = self.topology.station_by_id(train.route[(i + 1) % len]);
            current.route_to(&self.topology, next).map_err(SimError::RouteNotAdjacent)?;
        }
        Ok(())
    }
}
