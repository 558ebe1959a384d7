//! Sources of route collections.

use crate::config::{validate_config, ConfigurationError, RestConfig};
use crate::routing::collection::RouteCollection;
use crate::routing::generator::RouteCollectionGenerator;

/// Something that contributes routes to a [`RouteRegistry`](crate::routing::RouteRegistry).
pub trait RouteCollectionProvider {
    fn route_collection(&self) -> Result<RouteCollection, ConfigurationError>;
}

/// Provides the CRUD routes declared by a [`RestConfig`].
#[derive(Debug, Clone)]
pub struct EntityRouteProvider {
    config: RestConfig,
}

impl EntityRouteProvider {
    pub fn new(config: RestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RestConfig {
        &self.config
    }
}

impl RouteCollectionProvider for EntityRouteProvider {
    fn route_collection(&self) -> Result<RouteCollection, ConfigurationError> {
        if !self.config.enabled {
            tracing::info!(
                entities = self.config.entities.len(),
                "REST routes disabled, contributing no routes"
            );
            return Ok(RouteCollection::new());
        }

        validate_config(&self.config)?;

        let mut generator = RouteCollectionGenerator::new();
        if let Some(prefix) = &self.config.path_prefix {
            generator = generator.with_path_prefix(prefix);
        }
        generator.build(&self.config.entities)
    }
}

/// A fixed collection, e.g. hand-written routes.
impl RouteCollectionProvider for RouteCollection {
    fn route_collection(&self) -> Result<RouteCollection, ConfigurationError> {
        Ok(self.clone())
    }
}
