//! Build-phase errors.

use thiserror::Error;

/// A configuration that cannot be turned into a route collection.
///
/// Raised while routes are generated or merged. A configuration that fails
/// with one of these is rejected as a whole; no partial route set survives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An entity declared both `only` and `except`.
    #[error("You can configure only one of \"except\" & \"only\" options.")]
    ConflictingFilters { entity: String },

    /// The alias is not of the form `<applicationName>.<name>`.
    #[error("Invalid alias supplied, it should conform to the following format \"<applicationName>.<name>\".")]
    InvalidAlias { alias: String },

    #[error("Entity name must not be empty.")]
    EmptyEntityName,

    #[error("Unknown action \"{action}\", expected one of: index, create, update, show, delete.")]
    UnknownAction { action: String },

    /// Two routes resolved to the same name.
    #[error("Route \"{name}\" is already defined; route names must be unique.")]
    DuplicateRoute { name: String },

    #[error("Invalid route pattern \"{pattern}\": {reason}.")]
    InvalidPattern { pattern: String, reason: String },
}
