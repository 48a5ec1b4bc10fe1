//! Route matching.
//!
//! Paths coming from the browser and from the content API differ in trailing
//! slashes, query strings and the deployment base path, so everything is
//! normalised before comparison. Matching is total and returns `Option`.

use crate::content::{Location, LocationId};

/// Where a browser path points, relative to a map page mounted at `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Any other page, by normalised path
    Page(String),
    /// A single location below the map page
    Detail { base: String, key: String },
}

impl Route {
    pub fn parse(path: &str, base: &str) -> Self {
        let path = normalize(path);
        if path == "/" {
            return Route::Home;
        }
        match detail_key(&path, base) {
            Some(key) if normalize(base) != "/" => Route::Detail {
                base: normalize(base),
                key,
            },
            _ => Route::Page(path),
        }
    }

    /// Route key of a detail route.
    pub fn key(&self) -> Option<&str> {
        match self {
            Route::Detail { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Normalise a path: leading slash, no trailing slash (except root),
/// no query string or fragment, no empty segments.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Remove the deployment base (router basename) from a browser path.
pub fn strip_base(path: &str, base: &str) -> String {
    let path = normalize(path);
    let base = normalize(base);
    if base == "/" {
        return path;
    }
    match path.strip_prefix(&base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path,
    }
}

/// Prefix an app path with the deployment base.
pub fn with_base(path: &str, base: &str) -> String {
    let path = normalize(path);
    let base = normalize(base);
    match (base.as_str(), path.as_str()) {
        ("/", _) => path,
        (_, "/") => base,
        _ => format!("{base}{path}"),
    }
}

/// Whether two paths name the same route.
pub fn same_route(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether `path` is `base` itself or lies below it.
pub fn is_within(path: &str, base: &str) -> bool {
    detail_key(path, base).is_some() || same_route(path, base)
}

/// The `:id` segment of `base/:id`, if `path` has exactly that shape.
pub fn detail_key(path: &str, base: &str) -> Option<String> {
    let path = normalize(path);
    let base = normalize(base);
    let rest = if base == "/" {
        path.strip_prefix('/')?
    } else {
        path.strip_prefix(&base)?.strip_prefix('/')?
    };
    (!rest.is_empty() && !rest.contains('/')).then(|| rest.to_string())
}

/// Location focused by the current path, matched by route key or id.
pub fn focus_from_path(path: &str, base: &str, locations: &[Location]) -> Option<LocationId> {
    let route = Route::parse(path, base);
    let key = route.key()?;
    locations
        .iter()
        .find(|l| l.name == key || l.id.to_string() == key)
        .map(|l| l.id)
}

/// Path that focuses a location under `base`.
pub fn detail_path(base: &str, location: &Location) -> String {
    let base = normalize(base);
    if base == "/" {
        format!("/{}", location.name)
    } else {
        format!("{base}/{}", location.name)
    }
}
