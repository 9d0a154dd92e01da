//! Request path shapes and their rewrite into the canonical shape.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/std(@version)?/<file>`
static STD_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/std(?:@([^/]+))?/(.+)$").expect("std path regex"));

/// `/x/<name>(@version)?/<file>`
static LEGACY_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/x/([^/@]+)(?:@([^/]+))?/(.+)$").expect("legacy path regex"));

/// Owner and repository the `/std` shorthand points at on GitHub.
pub(crate) const STD_DOMAIN: &str = "github.com";
pub(crate) const STD_OWNER: &str = "denoland";
pub(crate) const STD_REPOSITORY: &str = "deno_std";

/// Version used when a path does not pin one.
pub const DEFAULT_VERSION: &str = "master";

/// Which of the accepted path shapes a request path has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    StdLib {
        version: Option<&'a str>,
        file: &'a str,
    },
    LegacyPackage {
        name: &'a str,
        version: Option<&'a str>,
        file: &'a str,
    },
    Canonical,
}

impl<'a> Shape<'a> {
    pub(crate) fn classify(path: &'a str) -> Self {
        if let Some(caps) = STD_PATH.captures(path) {
            return Shape::StdLib {
                version: caps.get(1).map(|m| m.as_str()),
                file: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
        if let Some(caps) = LEGACY_PATH.captures(path) {
            return Shape::LegacyPackage {
                name: caps.get(1).map_or("", |m| m.as_str()),
                version: caps.get(2).map(|m| m.as_str()),
                file: caps.get(3).map_or("", |m| m.as_str()),
            };
        }
        Shape::Canonical
    }
}

/// Builds `/<domain>/<owner>/<repository>[@version]/<file>`.
pub(crate) fn canonical_path(
    domain: &str,
    owner: &str,
    repository: &str,
    version: Option<&str>,
    file: &str,
) -> String {
    match version {
        Some(v) => format!("/{domain}/{owner}/{repository}@{v}/{file}"),
        None => format!("/{domain}/{owner}/{repository}/{file}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_without_version() {
        assert_eq!(
            Shape::classify("/std/fs/mod.ts"),
            Shape::StdLib {
                version: None,
                file: "fs/mod.ts"
            }
        );
    }

    #[test]
    fn std_with_version() {
        assert_eq!(
            Shape::classify("/std@v0.25.0/http/server.ts"),
            Shape::StdLib {
                version: Some("v0.25.0"),
                file: "http/server.ts"
            }
        );
    }

    #[test]
    fn std_needs_a_file() {
        assert_eq!(Shape::classify("/std/"), Shape::Canonical);
        assert_eq!(Shape::classify("/std"), Shape::Canonical);
        assert_eq!(Shape::classify("/std@/mod.ts"), Shape::Canonical);
    }

    #[test]
    fn standard_prefix_is_not_std() {
        assert_eq!(Shape::classify("/stdlib/mod.ts"), Shape::Canonical);
    }

    #[test]
    fn legacy_package() {
        assert_eq!(
            Shape::classify("/x/oak@v1/mod.ts"),
            Shape::LegacyPackage {
                name: "oak",
                version: Some("v1"),
                file: "mod.ts"
            }
        );
        assert_eq!(
            Shape::classify("/x/oak/middleware/cors.ts"),
            Shape::LegacyPackage {
                name: "oak",
                version: None,
                file: "middleware/cors.ts"
            }
        );
    }

    #[test]
    fn legacy_package_needs_a_file() {
        assert_eq!(Shape::classify("/x/oak"), Shape::Canonical);
        assert_eq!(Shape::classify("/x/oak/"), Shape::Canonical);
    }

    #[test]
    fn canonical() {
        assert_eq!(
            Shape::classify("/github.com/denoland/deno/cli/main.ts"),
            Shape::Canonical
        );
    }

    #[test]
    fn canonical_path_with_and_without_version() {
        assert_eq!(
            canonical_path("github.com", "a", "b", Some("v1"), "c.ts"),
            "/github.com/a/b@v1/c.ts"
        );
        assert_eq!(
            canonical_path("github.com", "a", "b", None, "c.ts"),
            "/github.com/a/b/c.ts"
        );
    }
}
