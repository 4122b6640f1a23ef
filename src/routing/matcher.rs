//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse server route paths into segment patterns
//! - Match request paths segment by segment
//!
//! # Design Decisions
//! - Leading and trailing slashes are not significant
//! - Path matching is case-sensitive
//! - `**` is only allowed as the final segment, so matching stays O(n)

use thiserror::Error;

/// Error produced when a route path cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("empty segment in path '{0}'")]
    EmptySegment(String),

    #[error("'**' must be the final segment in path '{0}'")]
    CatchAllNotFinal(String),

    #[error("parameter without a name in path '{0}'")]
    UnnamedParam(String),

    #[error("'*' and '**' must form a whole segment in path '{0}'")]
    PartialWildcard(String),
}

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// `:name`, matches any single segment.
    Param(String),
    /// `*`, matches any single segment.
    Any,
    /// `**`, matches zero or more trailing segments.
    CatchAll,
}

/// A compiled server route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a route path such as `login`, `users/:id` or `**`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_matches('/');
        let mut segments = Vec::new();

        if !trimmed.is_empty() {
            let raw: Vec<&str> = trimmed.split('/').collect();
            for (i, part) in raw.iter().enumerate() {
                let segment = match *part {
                    "" => return Err(RouteError::EmptySegment(path.to_string())),
                    "**" if i + 1 != raw.len() => {
                        return Err(RouteError::CatchAllNotFinal(path.to_string()))
                    }
                    "**" => Segment::CatchAll,
                    "*" => Segment::Any,
                    ":" => return Err(RouteError::UnnamedParam(path.to_string())),
                    p if p.contains('*') => {
                        return Err(RouteError::PartialWildcard(path.to_string()))
                    }
                    p => match p.strip_prefix(':') {
                        Some(name) => Segment::Param(name.to_string()),
                        None => Segment::Literal(p.to_string()),
                    },
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: trimmed.to_string(),
            segments,
        })
    }

    /// True for the bare `**` fallback entry.
    pub fn is_wildcard(&self) -> bool {
        self.segments == [Segment::CatchAll]
    }

    /// True when the pattern names exactly one concrete path.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Returns true if the request path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let trimmed = path.trim_matches('/');
        let parts: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return true,
                _ if i >= parts.len() => return false,
                Segment::Literal(lit) => {
                    if parts[i] != lit.as_str() {
                        return false;
                    }
                }
                Segment::Param(_) | Segment::Any => {
                    if parts[i].is_empty() {
                        return false;
                    }
                }
            }
        }

        parts.len() == self.segments.len()
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.source.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.source)
        }
    }
}
