//! Serve-phase errors.

use std::fmt;

use thiserror::Error;

/// What was being looked up when no route was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLookup {
    /// A request path given to the matcher.
    Path(String),
    /// A route name given to the generator.
    Name(String),
}

impl fmt::Display for RouteLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLookup::Path(path) => write!(f, "No routes found for \"{}\".", path),
            RouteLookup::Name(name) => write!(
                f,
                "Unable to generate a URL for the named route \"{}\" as such route does not exist.",
                name
            ),
        }
    }
}

/// Errors returned by matching and URL generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("{0}")]
    RouteNotFound(RouteLookup),

    /// The path matched, but only for other methods.
    #[error("No route found for \"{method} {path}\": Method Not Allowed (Allow: {})", .allowed.join(", "))]
    MethodNotAllowed {
        path: String,
        method: String,
        allowed: Vec<String>,
    },

    #[error("Some mandatory parameters are missing (\"{}\") to generate a URL for route \"{route}\".", .missing.join("\", \""))]
    MissingParameters { route: String, missing: Vec<String> },

    #[error("Parameter \"{parameter}\" for route \"{route}\" must be a non-empty path segment without \"/\" (\"{value}\" given) to generate a corresponding URL.")]
    InvalidParameter {
        route: String,
        parameter: String,
        value: String,
    },

    #[error("Invalid request context: {0}")]
    InvalidContext(String),
}

impl RoutingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RoutingError::RouteNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RoutingError::RouteNotFound(RouteLookup::Name("does_not_exist".into())).to_string(),
            "Unable to generate a URL for the named route \"does_not_exist\" as such route does not exist."
        );
        assert_eq!(
            RoutingError::MissingParameters {
                route: "app_model_show".into(),
                missing: vec!["id".into()],
            }
            .to_string(),
            "Some mandatory parameters are missing (\"id\") to generate a URL for route \"app_model_show\"."
        );
        assert_eq!(
            RoutingError::MethodNotAllowed {
                path: "/models".into(),
                method: "PATCH".into(),
                allowed: vec!["GET".into(), "POST".into()],
            }
            .to_string(),
            "No route found for \"PATCH /models\": Method Not Allowed (Allow: GET, POST)"
        );
    }
}
