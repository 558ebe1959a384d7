//! REST route generation and resolution.
//!
//! Entity declarations are expanded into named CRUD routes
//! (`<prefix>_index|create|update|show|delete`), merged from any number of
//! providers, and resolved both ways: path → route + parameters, and
//! route name + parameters → URL.
//!
//! ```text
//! config (EntityDeclaration[])
//!     → routing::generator
//!     → routing::registry
//!     → routing::router (ModularRouter)
//!     → engine (match / generate)
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod routing;

pub use config::{Action, ConfigurationError, EntityDeclaration, RestConfig};
pub use engine::{Parameters, ReferenceType, RequestContext, RouteMatch, RoutingError};
pub use error::{Error, Result};
pub use routing::{
    EntityRouteProvider, ModularRouter, Route, RouteCollection, RouteCollectionGenerator,
    RouteCollectionProvider, RouteRegistry,
};
