pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::{local::LocalStorage, CatalogConfig};

pub use crate::core::{etl::EtlEngine, extract::PluginExtractor, pipeline::GradlePipeline};
pub use crate::domain::model::{CatalogDocument, Entity, PackageEntity, PluginDeclaration, ServiceEntity};
pub use crate::utils::error::{CatalogError, Result};
