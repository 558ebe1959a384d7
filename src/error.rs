//! Crate-level error.

use thiserror::Error;

use crate::config::ConfigurationError;
use crate::engine::RoutingError;

/// Either phase's error, for callers that build and serve in one place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
