//! Legacy package resolver: `/x/<name>` package names to repository coordinates.
//!
//! The path normalizer only depends on the [`LegacyResolver`] trait and does
//! not know where the dataset comes from.

mod parse;

pub use parse::{LegacyRecord, LegacyTarget};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Dataset compiled into the binary, used when no database file is configured.
const BUNDLED_DATABASE: &str = include_str!("../../data/database.json");

/// Resolves a legacy package name to its hosting coordinates.
pub trait LegacyResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<LegacyTarget>;
}

/// Read-only name -> record table loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct LegacyDatabase {
    records: HashMap<String, LegacyRecord>,
}

impl LegacyDatabase {
    pub fn from_records(records: HashMap<String, LegacyRecord>) -> Self {
        Self { records }
    }

    /// Parses a JSON object of `{"name": {"url": ..., "repo": ...}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: HashMap<String, LegacyRecord> =
            serde_json::from_str(json).context("parse legacy package database")?;
        Ok(Self { records })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read legacy package database: {}", path.display()))?;
        let db = Self::from_json(&data)
            .with_context(|| format!("load legacy package database: {}", path.display()))?;
        tracing::info!(
            "loaded {} legacy package(s) from {}",
            db.len(),
            path.display()
        );
        Ok(db)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATABASE)
    }

    /// Loads `path` when given, the bundled dataset otherwise.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::bundled(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LegacyRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LegacyResolver for LegacyDatabase {
    fn resolve(&self, name: &str) -> Option<LegacyTarget> {
        let record = self.records.get(name)?;
        let target = parse::decompose_repo_url(&record.repo);
        if target.is_none() {
            tracing::warn!(package = name, repo = %record.repo, "malformed legacy repository URL");
        }
        target
    }
}
