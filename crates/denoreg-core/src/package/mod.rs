//! Path normalizer: turns a request path into a [`Package`] descriptor.
//!
//! Three path shapes are accepted:
//! - `/std(@version)?/<file>` (standard library shorthand)
//! - `/x/<name>(@version)?/<file>` (legacy package name)
//! - `/<domain>/<owner>/<repository>(@version)?/<file...>` (canonical)
//!
//! The first two are rewritten into the canonical shape, then a single
//! extraction step produces the descriptor. Every failure (unknown legacy
//! package, too few segments, unknown domain) yields `None`.

mod shape;

pub use shape::DEFAULT_VERSION;

use serde::Serialize;
use std::borrow::Cow;

use crate::generator;
use crate::legacy::LegacyResolver;
use crate::provider::ProviderRegistry;

use shape::Shape;

/// A fully identified file (or repository root) on a hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Hosting provider key, always present in the registry that parsed it.
    pub domain: String,
    pub owner: String,
    pub repository: String,
    /// Never empty; `"master"` when the path pins no version.
    pub version: String,
    /// Path inside the repository. Empty means the repository root.
    pub file: String,
}

/// Parser and URL generator over an immutable provider table and legacy dataset.
pub struct Resolver {
    providers: ProviderRegistry,
    legacy: Box<dyn LegacyResolver>,
}

impl Resolver {
    pub fn new(providers: ProviderRegistry, legacy: impl LegacyResolver + 'static) -> Self {
        Self {
            providers,
            legacy: Box::new(legacy),
        }
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Parses a request path (no query string) into a package descriptor.
    pub fn parse(&self, path: &str) -> Option<Package> {
        let canonical = self.canonicalize(path)?;
        extract(&canonical, &self.providers)
    }

    /// Raw-content URL for a package parsed by this resolver.
    pub fn raw_url(&self, package: &Package) -> Option<String> {
        let entry = self.providers.lookup(&package.domain)?;
        Some(generator::raw_url(entry, package))
    }

    /// Repository page URL for a package parsed by this resolver.
    pub fn repository_url(&self, package: &Package) -> Option<String> {
        let entry = self.providers.lookup(&package.domain)?;
        Some(generator::repository_url(entry, package))
    }

    /// Rewrites the std and legacy shapes into the canonical shape.
    /// `None` when a legacy package cannot be resolved.
    fn canonicalize<'a>(&self, path: &'a str) -> Option<Cow<'a, str>> {
        match Shape::classify(path) {
            Shape::StdLib { version, file } => Some(Cow::Owned(shape::canonical_path(
                shape::STD_DOMAIN,
                shape::STD_OWNER,
                shape::STD_REPOSITORY,
                Some(version.unwrap_or(DEFAULT_VERSION)),
                file,
            ))),
            Shape::LegacyPackage {
                name,
                version,
                file,
            } => {
                let Some(target) = self.legacy.resolve(name) else {
                    tracing::debug!(package = name, "legacy package not found");
                    return None;
                };
                Some(Cow::Owned(shape::canonical_path(
                    &target.domain,
                    &target.owner,
                    &target.repository,
                    version,
                    file,
                )))
            }
            Shape::Canonical => Some(Cow::Borrowed(path)),
        }
    }
}

/// Splits a canonical path into the five descriptor fields.
fn extract(path: &str, providers: &ProviderRegistry) -> Option<Package> {
    let mut segments = path.split('/');
    // Leading empty segment before the first `/`.
    segments.next();

    let domain = segments.next()?;
    let owner = segments.next()?;
    let project = segments.next()?;
    let file = segments.collect::<Vec<_>>().join("/");

    let (repository, version) = match project.split_once('@') {
        Some((repo, v)) if !v.is_empty() => (repo, v),
        Some((repo, _)) => (repo, DEFAULT_VERSION),
        None => (project, DEFAULT_VERSION),
    };

    if !providers.contains(domain) {
        return None;
    }

    Some(Package {
        domain: domain.to_string(),
        owner: owner.to_string(),
        repository: repository.to_string(),
        version: version.to_string(),
        file,
    })
}
