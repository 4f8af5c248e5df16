//! Runtime configuration
//!
//! Read from environment variables; CLI flags override individual fields.
//! - `CROP_CATALOG`: path to a JSON catalog replacing the built-in data
//! - `CROP_ALTERNATIVES`: alternative diagnoses to show (default 2)

use anyhow::Result;
use std::path::PathBuf;

use crate::catalog::Catalog;

pub const CATALOG_ENV: &str = "CROP_CATALOG";
pub const ALTERNATIVES_ENV: &str = "CROP_ALTERNATIVES";
pub const DEFAULT_ALTERNATIVES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Runner-up diagnoses listed after the top pick
    pub alternatives: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            alternatives: DEFAULT_ALTERNATIVES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (unparseable values fall back to defaults)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let alternatives = lookup(ALTERNATIVES_ENV)
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or(DEFAULT_ALTERNATIVES);

        Self {
            catalog_path,
            alternatives,
        }
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
