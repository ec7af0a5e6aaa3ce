//! Vehicle-crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("train route must contain at least one station")]
    EmptyRoute,
}
