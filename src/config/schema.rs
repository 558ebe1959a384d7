//! Configuration schema definitions.
//!
//! This module defines the in-memory configuration the route generator
//! consumes. All types derive Serde traits so an embedder can deserialize
//! them from whatever format it loads.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use convert_case::{Case, Casing};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::config::error::ConfigurationError;

/// Root configuration for generated REST routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RestConfig {
    /// When false the configuration contributes no routes at all.
    pub enabled: bool,

    /// Path prepended to every generated route (e.g. "/api/v1").
    pub path_prefix: Option<String>,

    /// Entities to expose, in declaration order.
    pub entities: Vec<EntityDeclaration>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path_prefix: None,
            entities: Vec::new(),
        }
    }
}

impl RestConfig {
    /// Create an enabled configuration for the given entities.
    pub fn new(entities: Vec<EntityDeclaration>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One resource type exposed as REST routes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntityDeclaration {
    /// Entity name. Source of the default route prefix and the URL segment.
    pub name: String,

    /// Route prefix override, `<applicationName>.<name>`.
    #[serde(default)]
    pub alias: Option<String>,

    /// Generate only these actions.
    #[serde(default)]
    pub only: Option<BTreeSet<Action>>,

    /// Generate every action but these.
    #[serde(default)]
    pub except: Option<BTreeSet<Action>>,
}

impl EntityDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            only: None,
            except: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_only(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.only = Some(actions.into_iter().collect());
        self
    }

    pub fn with_except(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.except = Some(actions.into_iter().collect());
        self
    }

    /// Prefix used for route names: the alias if set, else the name,
    /// with `.` replaced by `_`.
    pub fn route_prefix(&self) -> String {
        self.alias
            .as_deref()
            .unwrap_or(&self.name)
            .replace('.', "_")
    }

    /// URL segment for the collection, e.g. `BlogPost` → `blog-posts`.
    pub fn path_segment(&self) -> String {
        pluralize(&self.name.to_case(Case::Kebab))
    }

    /// Actions that survive the `only`/`except` filters, in fixed order.
    ///
    /// Empty filter sets count as absent. Callers are expected to have
    /// rejected declarations carrying both filters.
    pub fn effective_actions(&self) -> Vec<Action> {
        let only = self.only.as_ref().filter(|set| !set.is_empty());
        let except = self.except.as_ref().filter(|set| !set.is_empty());

        Action::ALL
            .into_iter()
            .filter(|action| match (only, except) {
                (Some(only), _) => only.contains(action),
                (None, Some(except)) => !except.contains(action),
                (None, None) => true,
            })
            .collect()
    }

    pub(crate) fn has_conflicting_filters(&self) -> bool {
        let non_empty = |set: &Option<BTreeSet<Action>>| set.as_ref().is_some_and(|s| !s.is_empty());
        non_empty(&self.only) && non_empty(&self.except)
    }
}

fn pluralize(s: &str) -> String {
    if s.ends_with('s') || s.ends_with("sh") || s.ends_with("ch") || s.ends_with('x') {
        format!("{}es", s)
    } else if s.ends_with('y') && !s.ends_with("ay") && !s.ends_with("ey") && !s.ends_with("oy") {
        format!("{}ies", &s[..s.len() - 1])
    } else {
        format!("{}s", s)
    }
}

/// The five CRUD operations, ordered as routes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Action {
    Index,
    Create,
    Update,
    Show,
    Delete,
}

impl Action {
    /// Every action in emission order.
    pub const ALL: [Action; 5] = [
        Action::Index,
        Action::Create,
        Action::Update,
        Action::Show,
        Action::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Create => "create",
            Action::Update => "update",
            Action::Show => "show",
            Action::Delete => "delete",
        }
    }

    /// HTTP method the action is served on.
    pub fn method(self) -> Method {
        match self {
            Action::Index | Action::Show => Method::GET,
            Action::Create => Method::POST,
            Action::Update => Method::PUT,
            Action::Delete => Method::DELETE,
        }
    }

    /// Whether the action addresses a single item (`/{entities}/{id}`).
    pub fn requires_id(self) -> bool {
        matches!(self, Action::Update | Action::Show | Action::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownAction {
                action: s.to_string(),
            })
    }
}

impl TryFrom<String> for Action {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
