//! The Location actor: one `tokio::spawn`ed task per junction/track, a
//! serial mailbox loop, and a per-hour failure ticker.
//!
//! | module   | contents                                           |
//! |----------|-------------------------------------------------------|
//! | [`state`] | `LocationState` — the request transition table        |
//! | [`actor`] | `spawn`, `LocationHandles`                             |
//! | [`client`]| `take`/`free`/`reserve`/`release`/`repair_start`/`repair_done`/`check` |
//! | [`error`] | `LocationError`                                        |

pub mod actor;
pub mod client;
pub mod error;
pub mod state;

pub use actor::{spawn, LocationHandles};
pub use error::LocationError;
pub use state::LocationState;

#[cfg(test)]
mod tests;
