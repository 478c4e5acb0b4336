#[cfg(feature = "cli")]
pub mod cli;
pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const GRADLE_PATH_VAR: &str = "GRADLE_PATH";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Run configuration, resolved once at startup and handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub gradle_path: PathBuf,
    pub repository: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Builds the config from any key lookup. An empty `GRADLE_PATH` counts as
    /// unset; `GITHUB_REPOSITORY` is taken as given, and dropped if not UTF-8.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let gradle_path = lookup(GRADLE_PATH_VAR).filter(|value| !value.is_empty());
        let gradle_path = validate_required_field(GRADLE_PATH_VAR, &gradle_path)?;

        let config = Self {
            gradle_path: PathBuf::from(gradle_path),
            repository: lookup(REPOSITORY_VAR).and_then(|value| value.into_string().ok()),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_path(GRADLE_PATH_VAR, &self.gradle_path)?;
        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

impl ConfigProvider for CatalogConfig {
    fn gradle_path(&self) -> &Path {
        &self.gradle_path
    }

    fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }
}
