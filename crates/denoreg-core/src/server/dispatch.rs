//! Decide what to do with an inbound request before any I/O happens.

use crate::package::Resolver;
use crate::user_agent;

/// Outcome of routing one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Browser asked for `/`: 301 to the project homepage.
    Homepage(String),
    /// Browser asked for a repository root: 301 to the repository page.
    Repository(String),
    /// Nothing resolved: 404.
    NotFound,
    /// Fetch this raw-content URL and relay the response.
    Proxy(String),
}

/// Routes `path` for a client identified by `user_agent`.
///
/// The root-path check runs before parsing and the empty-file check after
/// it; both only apply to browsers.
pub fn decide(path: &str, user_agent: &str, resolver: &Resolver, homepage: &str) -> Dispatch {
    let browser = user_agent::is_browser(user_agent);

    if browser && path == "/" {
        return Dispatch::Homepage(homepage.to_string());
    }

    let Some(package) = resolver.parse(path) else {
        return Dispatch::NotFound;
    };

    if browser && package.file.is_empty() {
        if let Some(url) = resolver.repository_url(&package) {
            return Dispatch::Repository(url);
        }
    }

    match resolver.raw_url(&package) {
        Some(url) => Dispatch::Proxy(url),
        None => Dispatch::NotFound,
    }
}
