//! Error type shared by every crate that builds directly on `rt-core`.

use thiserror::Error;

/// Failures that can arise from the primitives in this crate.
///
/// Most `rt-core` operations are infallible (ID construction, RNG sampling),
/// so this enum stays small; it exists mainly so downstream crates have a
/// `From<CoreError>` target instead of reaching for `anyhow` at the lowest
/// layer.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("id {0} out of range for arena of size {1}")]
    IdOutOfRange(u32, usize),

    #[error("invalid time scale: ms_per_hour must be positive, got {0}")]
    InvalidTimeScale(f64),
}
