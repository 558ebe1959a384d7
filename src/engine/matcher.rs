//! Path → route resolution.
//!
//! # Responsibilities
//! - Find the route serving a request path under the current context method
//! - Extract placeholder values
//! - Distinguish "no such path" from "path exists for other methods"
//!
//! # Design Decisions
//! - Routes are tried in collection order; first match wins
//! - O(n) scan over routes (acceptable for typical route counts)

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Action;
use crate::engine::context::RequestContext;
use crate::engine::error::{RouteLookup, RoutingError};
use crate::routing::RouteCollection;

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the matched route.
    pub route: String,
    pub entity: String,
    pub action: Action,
    /// Placeholder values, percent-decoded.
    pub params: BTreeMap<String, String>,
}

/// Resolves request paths to routes.
pub trait UrlMatcher: Send + Sync + std::fmt::Debug {
    fn match_path(&self, path: &str) -> Result<RouteMatch, RoutingError>;
}

/// Default matcher walking a [`RouteCollection`] in order.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    routes: Arc<RouteCollection>,
    context: RequestContext,
}

impl PatternMatcher {
    pub fn new(routes: Arc<RouteCollection>, context: RequestContext) -> Self {
        Self { routes, context }
    }
}

impl UrlMatcher for PatternMatcher {
    fn match_path(&self, path: &str) -> Result<RouteMatch, RoutingError> {
        let method = self.context.method();
        let mut allowed: Vec<String> = Vec::new();

        for route in self.routes.iter() {
            let Some(params) = route.pattern().matches(path) else {
                continue;
            };

            if route.accepts(method) {
                tracing::trace!(path, route = route.name(), "Route matched");
                return Ok(RouteMatch {
                    route: route.name().to_string(),
                    entity: route.entity().to_string(),
                    action: route.action(),
                    params,
                });
            }

            let candidate = route.method().to_string();
            if !allowed.contains(&candidate) {
                allowed.push(candidate);
            }
        }

        tracing::trace!(path, method = %method, "No route matched");
        if allowed.is_empty() {
            Err(RoutingError::RouteNotFound(RouteLookup::Path(path.to_string())))
        } else {
            Err(RoutingError::MethodNotAllowed {
                path: path.to_string(),
                method: method.to_string(),
                allowed,
            })
        }
    }
}
