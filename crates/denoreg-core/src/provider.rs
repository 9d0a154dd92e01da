//! Provider registry: hosting domain -> repository page and raw file templates.
//!
//! Each provider lays out raw-content URLs differently (`/raw/` vs
//! `/git/raw/`, `u/<owner>/p/<repo>` vs `<owner>/<repo>`), so the templates
//! are kept exactly as the providers serve them.

use std::collections::HashMap;

/// Built-in providers as `(domain, repository template, raw template)`.
const BUILTIN_PROVIDERS: &[(&str, &str, &str)] = &[
    (
        "github.com",
        "https://github.com/${owner}/${repository}",
        "https://raw.githubusercontent.com/${owner}/${repository}/${version}/${file}",
    ),
    (
        "gitlab.com",
        "https://gitlab.com/${owner}/${repository}",
        "https://gitlab.com/${owner}/${repository}/raw/${version}/${file}",
    ),
    (
        "bitbucket.org",
        "https://bitbucket.org/${owner}/${repository}",
        "https://bitbucket.org/${owner}/${repository}/raw/${version}/${file}",
    ),
    (
        "gitee.com",
        "https://gitee.com/${owner}/${repository}",
        "https://gitee.com/${owner}/${repository}/raw/${version}/${file}",
    ),
    (
        "coding.net",
        "https://coding.net/u/${owner}/p/${repository}",
        "https://coding.net/u/${owner}/p/${repository}/raw/${version}/${file}",
    ),
    (
        "code.aliyun.com",
        "https://code.aliyun.com/${owner}/${repository}",
        "https://code.aliyun.com/${owner}/${repository}/raw/${version}/${file}",
    ),
    (
        "dev.tencent.com",
        "https://dev.tencent.com/u/${owner}/p/${repository}",
        "https://dev.tencent.com/u/${owner}/p/${repository}/git/raw/${version}/${file}",
    ),
    (
        "git.code.tencent.com",
        "https://git.code.tencent.com/${owner}/${repository}",
        "https://git.code.tencent.com/${owner}/${repository}/raw/${version}/${file}",
    ),
];

/// URL templates for one hosting provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    /// Human-facing repository page, with `${owner}` and `${repository}`.
    pub repository: String,
    /// Raw file URL, with `${owner}`, `${repository}`, `${version}` and `${file}`.
    pub raw: String,
}

impl ProviderEntry {
    pub fn new(repository: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            raw: raw.into(),
        }
    }
}

/// Read-only lookup table built once at startup.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    entries: HashMap<String, ProviderEntry>,
}

impl ProviderRegistry {
    /// The providers served by default.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_PROVIDERS
                .iter()
                .map(|(domain, repo, raw)| (domain.to_string(), ProviderEntry::new(*repo, *raw))),
        )
    }

    /// Build a registry from arbitrary `(domain, entry)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ProviderEntry)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, domain: &str) -> Option<&ProviderEntry> {
        self.entries.get(domain)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    /// Domains in sorted order.
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        domains.sort_unstable();
        domains
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
