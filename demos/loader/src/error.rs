//! Top-level error wrapping everything that can go wrong before the
//! simulation is live. Fatal only at this boundary.

use thiserror::Error;

use crate::load::LoadError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("building simulation: {0}")]
    Sim(#[from] rt_sim::SimError),
}
