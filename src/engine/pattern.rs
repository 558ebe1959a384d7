//! Route path patterns.
//!
//! # Responsibilities
//! - Parse `/models/{id}` style patterns into segments
//! - Match request paths segment by segment, extracting placeholders
//!
//! # Design Decisions
//! - Placeholders span a whole segment; no regex, no partial segments
//! - Static segments compare case-sensitively
//! - A single trailing slash on the request path is ignored
//! - Extracted values are percent-decoded; invalid UTF-8 never matches

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

use crate::config::ConfigurationError;

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Placeholder(String),
}

/// A compiled route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/api/models/{id}`.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let Some(rest) = raw.strip_prefix('/') else {
            return Err(invalid("pattern must start with \"/\""));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(invalid("empty path segment"));
                }

                let segment = match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                    Some(name) => {
                        if !is_placeholder_name(name) {
                            return Err(invalid("placeholder names must be identifiers"));
                        }
                        if segments
                            .iter()
                            .any(|s| matches!(s, Segment::Placeholder(n) if n == name))
                        {
                            return Err(invalid("placeholder used twice"));
                        }
                        Segment::Placeholder(name.to_string())
                    }
                    None if part.contains(['{', '}']) => {
                        return Err(invalid("placeholders must span a whole segment"));
                    }
                    None => Segment::Static(part.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in pattern order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a request path, returning the extracted placeholder values.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let rest = path.strip_prefix('/')?;
        let rest = match rest.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => rest,
        };

        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Placeholder(_) if part.is_empty() => return None,
                Segment::Placeholder(name) => {
                    let value = percent_decode_str(part).decode_utf8().ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
