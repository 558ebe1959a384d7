//! Route collection generation.
//!
//! # Responsibilities
//! - Turn entity declarations into one route per surviving action
//! - Derive route names (`<prefix>_<action>`) and paths (`/{entities}[/{id}]`)
//! - Reject the whole configuration on any invalid entity or name collision
//!
//! # Design Decisions
//! - Every entity is validated before the first route is built
//! - Routes are built into a local collection; nothing escapes on error
//! - Pure: same declarations always yield the same collection

use crate::config::{validate_entity, Action, ConfigurationError, EntityDeclaration};
use crate::routing::collection::RouteCollection;
use crate::routing::route::Route;

/// Builds [`RouteCollection`]s from entity declarations.
#[derive(Debug, Clone, Default)]
pub struct RouteCollectionGenerator {
    path_prefix: String,
}

impl RouteCollectionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every generated path. Leading and trailing
    /// slashes are normalized, so `api/v1/` becomes `/api/v1`.
    pub fn with_path_prefix(mut self, prefix: &str) -> Self {
        let trimmed = prefix.trim_matches('/');
        self.path_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Generate the routes for `entities`, in declaration order.
    pub fn generate(&self, entities: &[EntityDeclaration]) -> Result<RouteCollection, ConfigurationError> {
        for entity in entities {
            validate_entity(entity)?;
        }
        self.build(entities)
    }

    /// Build routes for declarations that already passed validation.
    pub(crate) fn build(&self, entities: &[EntityDeclaration]) -> Result<RouteCollection, ConfigurationError> {
        let mut collection = RouteCollection::new();
        for entity in entities {
            let prefix = entity.route_prefix();
            let actions = entity.effective_actions();

            for action in &actions {
                let route = self.route_for(entity, &prefix, *action)?;
                if let Err(e) = collection.insert(route) {
                    tracing::warn!(entity = %entity.name, error = %e, "Route name collision");
                    return Err(e);
                }
            }

            tracing::debug!(
                entity = %entity.name,
                prefix = %prefix,
                routes = actions.len(),
                "Generated entity routes"
            );
        }

        Ok(collection)
    }

    fn route_for(
        &self,
        entity: &EntityDeclaration,
        prefix: &str,
        action: Action,
    ) -> Result<Route, ConfigurationError> {
        let collection_path = format!("{}/{}", self.path_prefix, entity.path_segment());
        let path = if action.requires_id() {
            format!("{}/{{id}}", collection_path)
        } else {
            collection_path
        };

        Route::new(
            format!("{}_{}", prefix, action),
            action.method(),
            &path,
            entity.name.clone(),
            action,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    fn names(collection: &RouteCollection) -> Vec<&str> {
        collection.names().collect()
    }

    #[test]
    fn test_full_action_set() {
        let routes = RouteCollectionGenerator::new()
            .generate(&[EntityDeclaration::new("model").with_alias("app.model")])
            .unwrap();

        assert_eq!(
            names(&routes),
            vec![
                "app_model_index",
                "app_model_create",
                "app_model_update",
                "app_model_show",
                "app_model_delete",
            ]
        );

        let show = routes.get("app_model_show").unwrap();
        assert_eq!(show.method(), &Method::GET);
        assert_eq!(show.path(), "/models/{id}");
        assert_eq!(show.entity(), "model");

        let create = routes.get("app_model_create").unwrap();
        assert_eq!(create.method(), &Method::POST);
        assert_eq!(create.path(), "/models");
    }

    #[test]
    fn test_name_without_alias() {
        let routes = RouteCollectionGenerator::new()
            .generate(&[EntityDeclaration::new("user").with_only([Action::Show])])
            .unwrap();
        assert_eq!(names(&routes), vec!["user_show"]);
        assert_eq!(routes.get("user_show").unwrap().path(), "/users/{id}");
    }

    #[test]
    fn test_path_prefix() {
        let generator = RouteCollectionGenerator::new().with_path_prefix("api/v1/");
        assert_eq!(generator.path_prefix(), "/api/v1");

        let routes = generator
            .generate(&[EntityDeclaration::new("model").with_only([Action::Index, Action::Delete])])
            .unwrap();
        assert_eq!(routes.get("model_index").unwrap().path(), "/api/v1/models");
        assert_eq!(routes.get("model_delete").unwrap().path(), "/api/v1/models/{id}");
    }

    #[test]
    fn test_empty_prefix_is_ignored() {
        let generator = RouteCollectionGenerator::new().with_path_prefix("/");
        assert_eq!(generator.path_prefix(), "");
    }

    #[test]
    fn test_collision_fails() {
        let result = RouteCollectionGenerator::new().generate(&[
            EntityDeclaration::new("model").with_alias("app.model"),
            EntityDeclaration::new("other").with_alias("app.model"),
        ]);
        assert_eq!(
            result,
            Err(ConfigurationError::DuplicateRoute {
                name: "app_model_index".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_later_entity_fails_whole_call() {
        let result = RouteCollectionGenerator::new().generate(&[
            EntityDeclaration::new("model"),
            EntityDeclaration::new("user")
                .with_only([Action::Index])
                .with_except([Action::Delete]),
        ]);
        assert!(matches!(result, Err(ConfigurationError::ConflictingFilters { .. })));
    }
}
