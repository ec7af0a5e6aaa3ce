//! Train and RepairVehicle agents, each its own `tokio::spawn`ed task driven
//! against the Location actors in `rt-location` over the request/reply
//! protocol in `rt-protocol`.
//!
//! | module     | contents                                              |
//! |------------|--------------------------------------------------------|
//! | [`world`]    | `World` — shared read-only context every agent needs  |
//! | [`movement`] | the shared Take/Check/back-off entry loop              |
//! | [`train`]    | `Train` — route loop, two-phase move, `awaitRepair`    |
//! | [`repair`]   | `RepairVehicle` — emergency relay, plan+reserve+travel |
//! | [`error`]    | `VehicleError`                                         |

pub mod error;
pub mod movement;
pub mod repair;
pub mod train;
pub mod world;

pub use error::VehicleError;
pub use repair::{spawn as spawn_repair_vehicle, RepairVehicleConfig};
pub use train::{spawn as spawn_train, TrainConfig};
pub use world::World;

#[cfg(test)]
mod tests;
