//! Route name + parameters → URL.
//!
//! # Responsibilities
//! - Substitute placeholders with percent-encoded values
//! - Append unused parameters as a query string
//! - Render the requested reference type against the request context
//!
//! # Design Decisions
//! - Every missing placeholder is reported at once, in path order
//! - Values must fit in one path segment: non-empty, no "/", not a dot-segment
//! - Query parameters are emitted in key order

use std::collections::BTreeMap;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;
use url::{Position, Url};

use crate::engine::context::{ReferenceType, RequestContext};
use crate::engine::error::{RouteLookup, RoutingError};
use crate::engine::pattern::Segment;
use crate::routing::RouteCollection;

/// Parameters passed to [`UrlGenerator::generate`].
pub type Parameters = BTreeMap<String, String>;

/// Characters escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds URLs for named routes.
pub trait UrlGenerator: Send + Sync + std::fmt::Debug {
    fn generate(
        &self,
        name: &str,
        params: &Parameters,
        reference_type: ReferenceType,
    ) -> Result<String, RoutingError>;
}

/// Default generator over a [`RouteCollection`].
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    routes: Arc<RouteCollection>,
    context: RequestContext,
}

impl PatternGenerator {
    pub fn new(routes: Arc<RouteCollection>, context: RequestContext) -> Self {
        Self { routes, context }
    }

    fn render(&self, path: &str, reference_type: ReferenceType) -> Result<String, RoutingError> {
        let ctx = &self.context;
        match reference_type {
            ReferenceType::AbsolutePath => Ok(format!("{}{}", ctx.base_url(), path)),
            ReferenceType::RelativePath => Ok(relative_path(ctx.path_info(), path)),
            ReferenceType::AbsoluteUrl | ReferenceType::NetworkPath => {
                if ctx.host().is_empty() {
                    return Ok(format!("{}{}", ctx.base_url(), path));
                }

                let mut url = Url::parse(&format!("{}://{}", ctx.scheme(), ctx.host()))
                    .map_err(|e| RoutingError::InvalidContext(e.to_string()))?;
                url.set_port(Some(ctx.port()))
                    .map_err(|_| RoutingError::InvalidContext(format!("scheme \"{}\" cannot carry a port", ctx.scheme())))?;
                url.set_path(&format!("{}{}", ctx.base_url(), path));

                if reference_type == ReferenceType::NetworkPath {
                    Ok(format!("//{}", &url[Position::BeforeUsername..]))
                } else {
                    Ok(url.to_string())
                }
            }
        }
    }
}

impl UrlGenerator for PatternGenerator {
    fn generate(
        &self,
        name: &str,
        params: &Parameters,
        reference_type: ReferenceType,
    ) -> Result<String, RoutingError> {
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| RoutingError::RouteNotFound(RouteLookup::Name(name.to_string())))?;

        let missing: Vec<String> = route
            .parameters()
            .filter(|placeholder| !params.contains_key(*placeholder))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(RoutingError::MissingParameters {
                route: name.to_string(),
                missing,
            });
        }

        let mut path = String::new();
        for segment in route.pattern().segments() {
            path.push('/');
            match segment {
                Segment::Static(part) => path.push_str(part),
                Segment::Placeholder(placeholder) => {
                    let value = params.get(placeholder).map(String::as_str).unwrap_or_default();
                    if value.is_empty() || value.contains('/') || value == "." || value == ".." {
                        return Err(RoutingError::InvalidParameter {
                            route: name.to_string(),
                            parameter: placeholder.clone(),
                            value: value.to_string(),
                        });
                    }
                    path.extend(utf8_percent_encode(value, PATH_SEGMENT));
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }

        let mut url = self.render(&path, reference_type)?;

        let extra: Vec<(&str, &str)> = params
            .iter()
            .filter(|(key, _)| !route.parameters().any(|p| p == key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if !extra.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(extra)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        tracing::trace!(route = name, url = %url, "URL generated");
        Ok(url)
    }
}

/// Path of `target` relative to `base`, both absolute paths.
fn relative_path(base: &str, target: &str) -> String {
    if base == target {
        return String::new();
    }

    let mut source_dirs: Vec<&str> = base.strip_prefix('/').unwrap_or(base).split('/').collect();
    let mut target_dirs: Vec<&str> = target.strip_prefix('/').unwrap_or(target).split('/').collect();
    source_dirs.pop();
    let target_file = target_dirs.pop().unwrap_or_default();

    let common = source_dirs
        .iter()
        .zip(&target_dirs)
        .take_while(|(source, target)| source == target)
        .count();

    let mut rest: Vec<&str> = target_dirs[common..].to_vec();
    rest.push(target_file);

    let path = format!("{}{}", "../".repeat(source_dirs.len() - common), rest.join("/"));

    // A leading "/" or a colon in the first segment would be read as
    // absolute or as a scheme.
    let colon_in_first_segment = match (path.find(':'), path.find('/')) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    };
    if path.is_empty() || path.starts_with('/') || colon_in_first_segment {
        format!("./{}", path)
    } else {
        path
    }
}
