use crate::domain::model::{CatalogDocument, PluginDeclaration};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub trait Storage {
    /// Implementations report a missing file as `FileNotFound` and any other
    /// failure as `ReadError`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn gradle_path(&self) -> &Path;
    fn repository(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<PluginDeclaration>>;
    fn transform(&self, plugins: Vec<PluginDeclaration>) -> Result<CatalogDocument>;
    fn load<W: Write>(&self, document: &CatalogDocument, out: &mut W) -> Result<()>;
}
