use crate::core::extract::PluginExtractor;
use crate::core::{emit, mapper};
use crate::core::{CatalogDocument, ConfigProvider, Pipeline, PluginDeclaration, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct GradlePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: PluginExtractor,
}

impl<S: Storage, C: ConfigProvider> GradlePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            extractor: PluginExtractor::new()?,
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GradlePipeline<S, C> {
    fn extract(&self) -> Result<Vec<PluginDeclaration>> {
        let path = self.config.gradle_path();
        tracing::debug!("Reading Gradle file: {}", path.display());

        match self.extractor.extract_from(&self.storage, path) {
            Ok(plugins) => Ok(plugins),
            Err(e) if e.is_recoverable() => {
                tracing::error!("{}", e);
                tracing::warn!("Continuing with no plugins. {}", e.recovery_suggestion());
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn transform(&self, plugins: Vec<PluginDeclaration>) -> Result<CatalogDocument> {
        Ok(mapper::map_entities(plugins, self.config.repository()))
    }

    fn load<W: Write>(&self, document: &CatalogDocument, out: &mut W) -> Result<()> {
        emit::emit(document, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    struct MockStorage {
        files: HashMap<PathBuf, Vec<u8>>,
        fail_with: Option<String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
                fail_with: None,
            }
        }

        fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files
                .insert(PathBuf::from(path), content.as_bytes().to_vec());
            self
        }

        fn failing(message: &str) -> Self {
            Self {
                files: HashMap::new(),
                fail_with: Some(message.to_string()),
            }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            if let Some(message) = &self.fail_with {
                return Err(CatalogError::ReadError {
                    path: path.display().to_string(),
                    message: message.clone(),
                });
            }
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| CatalogError::FileNotFound {
                    path: path.display().to_string(),
                })
        }
    }

    struct MockConfig {
        gradle_path: PathBuf,
        repository: Option<String>,
    }

    impl MockConfig {
        fn new(gradle_path: &str, repository: Option<&str>) -> Self {
            Self {
                gradle_path: PathBuf::from(gradle_path),
                repository: repository.map(str::to_string),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn gradle_path(&self) -> &Path {
            &self.gradle_path
        }

        fn repository(&self) -> Option<&str> {
            self.repository.as_deref()
        }
    }

    #[test]
    fn test_extract_reads_configured_path() {
        let storage = MockStorage::new().with_file(
            "app/build.gradle",
            "plugins {\n  id 'org.a' version '1'\n  id \"org.b\" version \"2\"\n}\n",
        );
        let pipeline =
            GradlePipeline::new(storage, MockConfig::new("app/build.gradle", None)).unwrap();

        let plugins = pipeline.extract().unwrap();
        assert_eq!(
            plugins,
            vec![
                PluginDeclaration::new("org.a", "1"),
                PluginDeclaration::new("org.b", "2"),
            ]
        );
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let pipeline =
            GradlePipeline::new(MockStorage::new(), MockConfig::new("build.gradle", None))
                .unwrap();
        assert!(pipeline.extract().unwrap().is_empty());
    }

    #[test]
    fn test_read_error_degrades_to_empty() {
        let pipeline = GradlePipeline::new(
            MockStorage::failing("permission denied"),
            MockConfig::new("build.gradle", None),
        )
        .unwrap();
        assert!(pipeline.extract().unwrap().is_empty());
    }

    #[test]
    fn test_transform_uses_configured_repository() {
        let pipeline = GradlePipeline::new(
            MockStorage::new(),
            MockConfig::new("build.gradle", Some("acme/ledger")),
        )
        .unwrap();

        let document = pipeline
            .transform(vec![PluginDeclaration::new("org.a", "1")])
            .unwrap();
        assert_eq!(document.service.identifier, "ledger");
        assert_eq!(document.service.relations.dependencies, vec!["org.a"]);
        assert_eq!(document.packages.len(), 1);
    }

    #[test]
    fn test_load_writes_json_array() {
        let pipeline =
            GradlePipeline::new(MockStorage::new(), MockConfig::new("build.gradle", None))
                .unwrap();
        let document = pipeline.transform(Vec::new()).unwrap();

        let mut out = Vec::new();
        pipeline.load(&document, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["identifier"], "default-repo");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
