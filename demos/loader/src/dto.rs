//! On-disk JSON shape of a topology file. Deserialized with `serde_json`
//! straight at this boundary — nothing in any `rt-*` crate ever sees these
//! types or the string ids they carry.

use serde::Deserialize;

use rt_sim::SimConfig;

#[derive(Deserialize)]
pub struct TopologyFile {
    pub config: SimConfig,
    pub junctions: Vec<JunctionDto>,
    pub tracks: Vec<TrackDto>,
    #[serde(default)]
    pub stations: Vec<StationDto>,
    #[serde(default)]
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Deserialize)]
pub struct JunctionDto {
    pub id: u32,
    #[serde(rename = "waitTime")]
    pub wait_time_minutes: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKindDto {
    Wait,
    Transit,
}

#[derive(Deserialize)]
pub struct TrackDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TrackKindDto,
    pub a: u32,
    pub b: u32,
    #[serde(rename = "waitTime", default)]
    pub wait_time_minutes: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(rename = "maxSpeed", default)]
    pub max_speed: Option<f64>,
}

#[derive(Deserialize)]
pub struct StationDto {
    pub name: String,
    pub a: u32,
    pub b: u32,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleDto {
    Train {
        id: u32,
        #[serde(rename = "maxSpeed")]
        max_speed: f64,
        capacity: Option<u32>,
        #[serde(default)]
        route: Vec<String>,
    },
    Repair {
        id: u32,
        #[serde(rename = "maxSpeed")]
        max_speed: f64,
        base: String,
    },
}
