//! Ordered, uniquely keyed route storage.
//!
//! # Design Decisions
//! - Insertion order is preserved; matching walks routes in this order
//! - Names are unique; a second route with the same name is an error
//! - Merges are all-or-nothing

use indexmap::IndexMap;

use crate::config::ConfigurationError;
use crate::routing::route::Route;

/// Ordered mapping from route name to [`Route`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCollection {
    routes: IndexMap<String, Route>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Fails if the name is already taken.
    pub fn insert(&mut self, route: Route) -> Result<(), ConfigurationError> {
        if self.routes.contains_key(route.name()) {
            return Err(ConfigurationError::DuplicateRoute {
                name: route.name().to_string(),
            });
        }
        self.routes.insert(route.name().to_string(), route);
        Ok(())
    }

    /// Append every route of `other`, keeping its order.
    ///
    /// Nothing is added when any name collides. Returns the number of
    /// routes added.
    pub fn merge(&mut self, other: RouteCollection) -> Result<usize, ConfigurationError> {
        if let Some(name) = other.names().find(|name| self.contains(name)) {
            return Err(ConfigurationError::DuplicateRoute {
                name: name.to_string(),
            });
        }

        let added = other.len();
        self.routes.extend(other.routes);
        Ok(added)
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a Route;
    type IntoIter = indexmap::map::Values<'a, String, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Action;
    use http::Method;

    fn route(name: &str, path: &str) -> Route {
        Route::new(name, Method::GET, path, "model", Action::Index).unwrap()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut collection = RouteCollection::new();
        collection.insert(route("b", "/b")).unwrap();
        collection.insert(route("a", "/a")).unwrap();
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut collection = RouteCollection::new();
        collection.insert(route("a", "/a")).unwrap();
        assert_eq!(
            collection.insert(route("a", "/other")),
            Err(ConfigurationError::DuplicateRoute {
                name: "a".to_string()
            })
        );
        assert_eq!(collection.get("a").unwrap().path(), "/a");
    }

    #[test]
    fn test_merge_is_atomic() {
        let mut first = RouteCollection::new();
        first.insert(route("a", "/a")).unwrap();

        let mut second = RouteCollection::new();
        second.insert(route("b", "/b")).unwrap();
        second.insert(route("a", "/a2")).unwrap();

        assert!(first.merge(second).is_err());
        assert_eq!(first.len(), 1);
        assert!(!first.contains("b"));
    }

    #[test]
    fn test_merge_appends() {
        let mut first = RouteCollection::new();
        first.insert(route("a", "/a")).unwrap();
        let mut second = RouteCollection::new();
        second.insert(route("b", "/b")).unwrap();

        assert_eq!(first.merge(second), Ok(1));
        assert_eq!(first.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
