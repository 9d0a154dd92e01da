//! URL generation from a package descriptor and its provider templates.

use crate::package::Package;
use crate::provider::ProviderEntry;
use crate::template;

/// Raw-content URL: substitutes owner, repository, version and file.
pub fn raw_url(entry: &ProviderEntry, package: &Package) -> String {
    template::render(
        &entry.raw,
        &[
            ("owner", package.owner.as_str()),
            ("repository", package.repository.as_str()),
            ("version", package.version.as_str()),
            ("file", package.file.as_str()),
        ],
    )
}

/// Repository page URL: substitutes owner and repository only.
pub fn repository_url(entry: &ProviderEntry, package: &Package) -> String {
    template::render(
        &entry.repository,
        &[("owner", package.owner.as_str()), ("repository", package.repository.as_str())],
    )
}
