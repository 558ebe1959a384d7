//! Matching and URL generation engine.
//!
//! # Data Flow
//! ```text
//! Binding (on first query after a change):
//!     Arc<RouteCollection> + RequestContext
//!     → RoutingEngine::matcher / RoutingEngine::generator
//!     → cached by the router facade
//!
//! Matching:   path → matcher.rs → RouteMatch | RoutingError
//! Generation: name + params → generator.rs → URL | RoutingError
//! ```
//!
//! # Design Decisions
//! - The facade only talks to the `UrlMatcher` / `UrlGenerator` traits
//! - Patterns are compiled when routes are created (pattern.rs)
//! - Matchers and generators are immutable once bound

pub mod context;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod pattern;

use std::sync::Arc;

pub use context::{ReferenceType, RequestContext};
pub use error::{RouteLookup, RoutingError};
pub use generator::{Parameters, PatternGenerator, UrlGenerator};
pub use matcher::{PatternMatcher, RouteMatch, UrlMatcher};
pub use pattern::PathPattern;

use crate::routing::RouteCollection;

/// Factory binding a route collection and a context to a matcher and a
/// generator.
pub trait RoutingEngine: Send + Sync + std::fmt::Debug {
    fn matcher(&self, routes: Arc<RouteCollection>, context: RequestContext) -> Box<dyn UrlMatcher>;

    fn generator(&self, routes: Arc<RouteCollection>, context: RequestContext) -> Box<dyn UrlGenerator>;
}

/// The built-in segment matching engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEngine;

impl RoutingEngine for PatternEngine {
    fn matcher(&self, routes: Arc<RouteCollection>, context: RequestContext) -> Box<dyn UrlMatcher> {
        Box::new(PatternMatcher::new(routes, context))
    }

    fn generator(&self, routes: Arc<RouteCollection>, context: RequestContext) -> Box<dyn UrlGenerator> {
        Box::new(PatternGenerator::new(routes, context))
    }
}
