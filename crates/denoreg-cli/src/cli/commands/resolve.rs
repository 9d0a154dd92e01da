//! `denoreg resolve <path>` – show the package descriptor and URLs for a path.

use anyhow::{bail, Result};
use denoreg_core::legacy::LegacyDatabase;
use denoreg_core::provider::ProviderRegistry;
use denoreg_core::Resolver;
use serde_json::json;
use std::path::Path;

pub fn run_resolve(path: &str, database: Option<&Path>, as_json: bool) -> Result<()> {
    let legacy = LegacyDatabase::load_or_bundled(database)?;
    let resolver = Resolver::new(ProviderRegistry::builtin(), legacy);

    let Some(package) = resolver.parse(path) else {
        bail!("no package resolved for {path}");
    };
    let raw = resolver.raw_url(&package).unwrap_or_default();
    let repository = resolver.repository_url(&package).unwrap_or_default();

    if as_json {
        let out = json!({
            "package": package,
            "raw_url": raw,
            "repository_url": repository,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("domain:     {}", package.domain);
    println!("owner:      {}", package.owner);
    println!("repository: {}", package.repository);
    println!("version:    {}", package.version);
    println!("file:       {}", package.file);
    println!("raw:        {}", raw);
    println!("page:       {}", repository);
    Ok(())
}
