use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Gradle file not found at {path}")]
    FileNotFound { path: String },

    #[error("Error parsing file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Extraction failures degrade to an empty result; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::ReadError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } => "Set GRADLE_PATH to the build script to scan",
            Self::InvalidConfigValue { .. } => "Check the environment values passed to the run",
            Self::FileNotFound { .. } => "Verify GRADLE_PATH points at an existing file",
            Self::ReadError { .. } => "Make sure the file is readable and UTF-8 encoded",
            Self::Pattern(_) => "The plugin pattern failed to compile; this is a bug",
            Self::SerializationError(_) => "Entity serialization failed; this is a bug",
            Self::Io(_) => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
