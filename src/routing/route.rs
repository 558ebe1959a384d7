//! A single named routing rule.

use http::Method;

use crate::config::{Action, ConfigurationError};
use crate::engine::pattern::PathPattern;

/// A named (method, path pattern) pair plus the entity/action it serves.
///
/// The path is compiled when the route is created, so a `Route` always holds
/// a valid pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    method: Method,
    pattern: PathPattern,
    entity: String,
    action: Action,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        method: Method,
        path: &str,
        entity: impl Into<String>,
        action: Action,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            name: name.into(),
            method,
            pattern: PathPattern::parse(path)?,
            entity: entity.into(),
            action,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The raw path pattern, e.g. `/models/{id}`.
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Whether the pattern carries an `{id}` placeholder.
    pub fn requires_id(&self) -> bool {
        self.parameters().any(|name| name == "id")
    }

    /// Placeholder names in path order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.pattern.placeholders()
    }

    /// Whether a request with this method may be served by the route.
    /// `HEAD` is accepted wherever `GET` is.
    pub fn accepts(&self, method: &Method) -> bool {
        self.method == *method || (self.method == Method::GET && *method == Method::HEAD)
    }
}
