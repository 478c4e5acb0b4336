pub mod emit;
pub mod etl;
pub mod extract;
pub mod mapper;
pub mod pipeline;

pub use crate::domain::model::{
    CatalogDocument, Entity, PackageEntity, PluginDeclaration, ServiceEntity,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
