use thiserror::Error;

/// A configuration that can never produce a valid round.
///
/// Detected by the upfront feasibility check over the whole target range,
/// before any sampling happens — the generator contains no unbounded
/// rejection loops that could hang on an empty acceptance set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("target range {min}..={max} is empty")]
    EmptyTargetRange { min: u32, max: u32 },

    #[error("target minimum {0} is below 2; both addends must be at least 1")]
    TargetTooSmall(u32),

    #[error("pool size {0} cannot hold an addend pair")]
    PoolTooSmall(usize),

    #[error("target {target} has no addend split with both addends in 1..={max_addend}")]
    NoFeasibleSplit { target: u32, max_addend: u32 },

    #[error(
        "target {target} needs {needed} distractors but at most {available} \
         are available under the configured constraints"
    )]
    NotEnoughDistractors {
        target: u32,
        needed: usize,
        available: usize,
    },
}

/// Caller contract violation: a pick referenced a position outside the
/// current pool. Reported immediately rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pick position {position} is out of range for a pool of {pool_size} cards")]
pub struct OutOfRangePick {
    pub position: usize,
    pub pool_size: usize,
}
