//! Errors that can be returned by the registry and the seed parser.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No algorithm is registered under the requested name.
    #[error("no generator algorithm named `{0}`")]
    NotFound(String),

    /// Seed text that isn't an integer in `i64::MIN..=u64::MAX`.  The driver recovers from this by drawing a random
    /// seed instead, so it never escapes a generation run.
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
