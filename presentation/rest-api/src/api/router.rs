//! Method-qualified path router.
//!
//! Routes are registered as `"<method> <pattern>"`, e.g.
//! `"put hermes_foods/product/{id}"`. Patterns and paths are split on `/`;
//! a `{name}` segment binds exactly one non-empty path segment, every other
//! segment must match literally and both sides must have the same number of
//! segments. Methods compare case-insensitively. No regex, no prefix matching:
//! trailing-slash normalization is the caller's job.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
            Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

#[derive(Debug)]
struct RouteEntry<H> {
    method: String,
    segments: Vec<Segment>,
    handler: H,
}

impl<H> RouteEntry<H> {
    fn bind(&self, path: &[&str]) -> Option<PathParams> {
        if self.segments.len() != path.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal == value => {}
                Segment::Param(name) if !value.is_empty() => {
                    params.0.insert(name.clone(), value.to_string());
                }
                _ => return None,
            }
        }
        Some(params)
    }
}

/// Placeholder values bound by a match, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub handler: &'a H,
    pub params: PathParams,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route not found")]
    NotFound,
    /// The path matched, but only under other methods (upper-cased).
    #[error("method not allowed")]
    MethodNotAllowed { allowed: Vec<String> },
}

#[derive(Debug)]
pub struct PathRouter<H> {
    routes: Vec<RouteEntry<H>>,
}

impl<H> Default for PathRouter<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> PathRouter<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `"<method> <pattern>"`.
    pub fn route(mut self, route: &str, handler: H) -> Self {
        debug_assert!(
            route.trim().contains(' '),
            "route must be '<method> <pattern>': {route}"
        );
        let (method, pattern) = route.trim().split_once(' ').unwrap_or(("", route));

        self.routes.push(RouteEntry {
            method: method.to_lowercase(),
            segments: split_path(pattern.trim())
                .into_iter()
                .map(Segment::parse)
                .collect(),
            handler,
        });
        self
    }

    /// Finds the handler registered for `method` whose pattern matches `path`.
    pub fn find(&self, method: &str, path: &str) -> Result<RouteMatch<'_, H>, RouteError> {
        let method = method.to_lowercase();
        let path = split_path(path);
        let mut allowed = Vec::new();

        for entry in &self.routes {
            let Some(params) = entry.bind(&path) else {
                continue;
            };
            if entry.method == method {
                return Ok(RouteMatch {
                    handler: &entry.handler,
                    params,
                });
            }
            allowed.push(entry.method.to_uppercase());
        }

        if allowed.is_empty() {
            Err(RouteError::NotFound)
        } else {
            Err(RouteError::MethodNotAllowed { allowed })
        }
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}
