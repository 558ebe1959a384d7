//! Configuration model subsystem.
//!
//! # Data Flow
//! ```text
//! embedding loader (any serde format, or built in code)
//!     → schema.rs (RestConfig, EntityDeclaration, Action)
//!     → validation.rs (semantic checks)
//!     → routing::generator (route synthesis)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; changes require a fresh generation
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Reading config files is left to the embedder

pub mod error;
pub mod schema;
pub mod validation;

pub use error::ConfigurationError;
pub use schema::{Action, EntityDeclaration, RestConfig};
pub use validation::{validate_alias, validate_config, validate_entity};
