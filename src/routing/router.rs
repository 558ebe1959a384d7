//! Router facade: route lookup and URL generation.
//!
//! # Responsibilities
//! - Own the registry of provider collections
//! - Hold the request context
//! - Delegate `match_path` / `generate` to the bound engine
//!
//! # Design Decisions
//! - Registration and context changes take `&mut self`; queries take `&self`,
//!   so a router shared behind `Arc` is frozen
//! - Engine bindings are built on first query and dropped on every change
//! - Before `set_context` the default `RequestContext` applies

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::ConfigurationError;
use crate::engine::{
    Parameters, PatternEngine, ReferenceType, RequestContext, RouteMatch, RoutingEngine, RoutingError,
    UrlGenerator, UrlMatcher,
};
use crate::routing::collection::RouteCollection;
use crate::routing::provider::RouteCollectionProvider;
use crate::routing::registry::RouteRegistry;

/// Matcher and generator bound to one collection snapshot and context.
struct Bindings {
    matcher: Box<dyn UrlMatcher>,
    generator: Box<dyn UrlGenerator>,
}

/// Facade answering match and generate queries over all registered routes.
pub struct ModularRouter {
    registry: RouteRegistry,
    context: RequestContext,
    engine: Box<dyn RoutingEngine>,
    bindings: OnceLock<Bindings>,
}

impl Default for ModularRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModularRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModularRouter")
            .field("routes", &self.registry.collection().len())
            .field("context", &self.context)
            .field("engine", &self.engine)
            .field("bound", &self.bindings.get().is_some())
            .finish()
    }
}

impl ModularRouter {
    /// Router on the built-in [`PatternEngine`].
    pub fn new() -> Self {
        Self::with_engine(Box::new(PatternEngine))
    }

    pub fn with_engine(engine: Box<dyn RoutingEngine>) -> Self {
        Self {
            registry: RouteRegistry::new(),
            context: RequestContext::default(),
            engine,
            bindings: OnceLock::new(),
        }
    }

    /// Merge a provider's routes. Fails without changes on name collision.
    pub fn add_route_collection_provider(
        &mut self,
        provider: &dyn RouteCollectionProvider,
    ) -> Result<(), ConfigurationError> {
        self.registry.add_provider(provider)?;
        self.invalidate();
        Ok(())
    }

    pub fn route_collection(&self) -> &RouteCollection {
        self.registry.collection()
    }

    pub fn set_context(&mut self, context: RequestContext) {
        self.context = context;
        self.invalidate();
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Resolve a path to a route under the current context method.
    pub fn match_path(&self, path: &str) -> Result<RouteMatch, RoutingError> {
        self.bindings().matcher.match_path(path)
    }

    /// Build a URL for the named route.
    pub fn generate(
        &self,
        name: &str,
        params: &Parameters,
        reference_type: ReferenceType,
    ) -> Result<String, RoutingError> {
        self.bindings().generator.generate(name, params, reference_type)
    }

    /// Whether matcher and generator are currently bound.
    pub fn is_bound(&self) -> bool {
        self.bindings.get().is_some()
    }

    fn bindings(&self) -> &Bindings {
        self.bindings.get_or_init(|| {
            let routes = Arc::new(self.registry.collection().clone());
            tracing::debug!(
                routes = routes.len(),
                host = %self.context.host(),
                method = %self.context.method(),
                "Binding routing engine"
            );
            Bindings {
                matcher: self.engine.matcher(Arc::clone(&routes), self.context.clone()),
                generator: self.engine.generator(routes, self.context.clone()),
            }
        })
    }

    fn invalidate(&mut self) {
        if self.bindings.take().is_some() {
            tracing::debug!("Routing engine bindings invalidated");
        }
    }
}
