//! Legacy dataset records and repository URL decomposition.

use serde::Deserialize;

/// One entry of the legacy package dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    /// Base URL the package used to be served from. Kept for completeness.
    #[serde(default)]
    pub url: String,
    /// Full repository URL, e.g. `https://github.com/oakserver/oak`.
    pub repo: String,
}

/// Where a legacy package lives today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTarget {
    pub domain: String,
    pub owner: String,
    pub repository: String,
}

/// Splits a repository URL into host and the first two non-empty path segments.
///
/// The host keeps an explicit port (`git.local:8080`). Returns `None` when the
/// URL cannot be parsed, has no host, or has fewer than two path segments.
pub(crate) fn decompose_repo_url(repo: &str) -> Option<LegacyTarget> {
    let parsed = url::Url::parse(repo.trim()).ok()?;
    let host = parsed.host_str()?;
    let domain = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?.to_string();
    let repository = segments.next()?.to_string();

    Some(LegacyTarget {
        domain,
        owner,
        repository,
    })
}
