//! Aggregation of provider collections into one master collection.
//!
//! # Responsibilities
//! - Merge provider collections in registration order
//! - Reject name collisions across providers
//!
//! # Design Decisions
//! - A failed merge leaves the registry untouched
//! - Providers are asked for their routes once, at registration

use crate::config::ConfigurationError;
use crate::routing::collection::RouteCollection;
use crate::routing::provider::RouteCollectionProvider;

#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    collection: RouteCollection,
    providers: usize,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the provider's routes into the master collection.
    pub fn add_provider(&mut self, provider: &dyn RouteCollectionProvider) -> Result<(), ConfigurationError> {
        let routes = provider.route_collection()?;

        match self.collection.merge(routes) {
            Ok(added) => {
                self.providers += 1;
                tracing::info!(
                    provider = self.providers,
                    added,
                    total = self.collection.len(),
                    "Route collection provider registered"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(provider = self.providers + 1, error = %e, "Route collection provider rejected");
                Err(e)
            }
        }
    }

    /// The merged view of every registered provider.
    pub fn collection(&self) -> &RouteCollection {
        &self.collection
    }

    pub fn provider_count(&self) -> usize {
        self.providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Action, EntityDeclaration, RestConfig};
    use crate::routing::provider::EntityRouteProvider;

    fn provider(entities: Vec<EntityDeclaration>) -> EntityRouteProvider {
        EntityRouteProvider::new(RestConfig::new(entities))
    }

    #[test]
    fn test_merge_in_registration_order() {
        let mut registry = RouteRegistry::new();
        registry
            .add_provider(&provider(vec![EntityDeclaration::new("user").with_only([Action::Index])]))
            .unwrap();
        registry
            .add_provider(&provider(vec![EntityDeclaration::new("model").with_only([Action::Index])]))
            .unwrap();

        assert_eq!(registry.provider_count(), 2);
        assert_eq!(
            registry.collection().names().collect::<Vec<_>>(),
            vec!["user_index", "model_index"]
        );
    }

    #[test]
    fn test_collision_across_providers() {
        let mut registry = RouteRegistry::new();
        registry
            .add_provider(&provider(vec![EntityDeclaration::new("model").with_alias("app.model")]))
            .unwrap();

        let err = registry
            .add_provider(&provider(vec![
                EntityDeclaration::new("widget"),
                EntityDeclaration::new("thing").with_alias("app.model"),
            ]))
            .unwrap_err();

        assert!(matches!(err, ConfigurationError::DuplicateRoute { .. }));
        assert_eq!(registry.provider_count(), 1);
        assert_eq!(registry.collection().len(), 5);
        assert!(!registry.collection().contains("widget_index"));
    }

    #[test]
    fn test_provider_error_propagates() {
        let mut registry = RouteRegistry::new();
        let err = registry
            .add_provider(&provider(vec![EntityDeclaration::new("model").with_alias("appmodel")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidAlias { .. }));
        assert!(registry.collection().is_empty());
    }
}
