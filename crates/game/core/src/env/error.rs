//! Oracle availability errors.

/// Returned when a command needs an oracle the environment does not carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("Content oracle not available")]
    ContentNotAvailable,

    #[error("RNG oracle not available")]
    RngNotAvailable,

    #[error("Clock oracle not available")]
    ClockNotAvailable,
}
