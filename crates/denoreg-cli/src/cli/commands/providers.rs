//! `denoreg providers` – list supported hosting providers.

use denoreg_core::provider::ProviderRegistry;

pub fn run_providers() {
    let registry = ProviderRegistry::builtin();
    for domain in registry.domains() {
        if let Some(entry) = registry.lookup(domain) {
            println!("{domain}");
            println!("  page: {}", entry.repository);
            println!("  raw:  {}", entry.raw);
        }
    }
}
