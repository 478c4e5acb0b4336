use crate::core::{PluginDeclaration, Storage};
use crate::utils::error::{CatalogError, Result};
use regex::Regex;
use std::path::Path;

/// `id '<plugin>' version '<version>'`, either quote style, any whitespace between clauses.
pub const PLUGIN_PATTERN: &str = r#"id\s+['"]([^'"]+)['"]\s+version\s+['"]([^'"]+)['"]"#;

pub struct PluginExtractor {
    pattern: Regex,
}

impl PluginExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(PLUGIN_PATTERN)?,
        })
    }

    /// All declarations in `content`, in order of appearance.
    pub fn parse_plugins(&self, content: &str) -> Vec<PluginDeclaration> {
        self.pattern
            .captures_iter(content)
            .map(|caps| PluginDeclaration::new(&caps[1], &caps[2]))
            .collect()
    }

    /// Reads and scans one descriptor. Missing files surface as `FileNotFound`,
    /// unreadable or non-UTF-8 files as `ReadError`.
    pub fn extract_from<S: Storage>(
        &self,
        storage: &S,
        path: &Path,
    ) -> Result<Vec<PluginDeclaration>> {
        let bytes = storage.read_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| CatalogError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let plugins = self.parse_plugins(&content);
        tracing::debug!("Matched {} plugin declarations in {}", plugins.len(), path.display());
        Ok(plugins)
    }
}
