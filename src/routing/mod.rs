//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Build phase (at startup):
//!     EntityDeclaration[]
//!     → generator.rs (validate, synthesize CRUD routes)
//!     → RouteCollection per provider
//!     → registry.rs (merge in registration order)
//!
//! Serve phase:
//!     router.rs (facade)
//!     → engine (match path / generate URL)
//!     → RouteMatch or URL, or explicit RoutingError
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Deterministic: same declarations always produce the same routes
//! - First match wins (collection order)
//! - Route names are the addressing key; collisions are fatal

pub mod collection;
pub mod generator;
pub mod provider;
pub mod registry;
pub mod route;
pub mod router;

pub use collection::RouteCollection;
pub use generator::RouteCollectionGenerator;
pub use provider::{EntityRouteProvider, RouteCollectionProvider};
pub use registry::RouteRegistry;
pub use route::Route;
pub use router::ModularRouter;
