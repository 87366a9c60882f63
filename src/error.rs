use thiserror::Error;

/// Errors raised while configuring or running a swarm.
///
/// Both kinds are fatal: there are no retries, and a failed particle
/// construction aborts the whole run.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// The position vector length is not divisible by the number of bound
    /// pairs, so the vector cannot be matched against the search boundaries.
    #[error("position vector of length {position_len} does not match {bounds_len} search bound pair(s)")]
    StructureMismatch {
        position_len: usize,
        bounds_len: usize,
    },

    /// A numeric configuration value is malformed.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
