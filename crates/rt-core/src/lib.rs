//! Primitives shared across the simulator: typed IDs, scaled wall-clock
//! time, per-actor deterministic RNG, and the core error type.
//!
//! | module   | contents                                            |
//! |----------|------------------------------------------------------|
//! | [`ids`]  | `LocationId`, `StationId`, `VehicleId`                |
//! | [`time`] | `TimeScale` and the `waitTime`/`repairTime` helpers   |
//! | [`rng`]  | `ActorRng`, deterministic per-actor seeding           |
//! | [`error`]| `CoreError`                                           |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

pub use error::CoreError;
pub use ids::{LocationId, StationId, VehicleId};
pub use rng::ActorRng;
pub use time::TimeScale;

#[cfg(test)]
mod tests;
