//! Location-subsystem error type.
//!
//! Most rejections are ordinary `bool` replies, not `Err` — this enum is for
//! the rarer structural failures around spawning and wiring actors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location actor for {0} terminated unexpectedly")]
    ActorTerminated(String),
}
