use thiserror::Error;

/// Errors reported by the counter and carousel engines.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The options describe a state the engine cannot represent (e.g. zero slides).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// Counter targets must be finite.
    #[error("invalid counter target: {0}")]
    InvalidTarget(f64),
}

pub type Result<T> = core::result::Result<T, Error>;
