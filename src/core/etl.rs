use crate::core::{CatalogDocument, Pipeline};
use crate::utils::error::Result;
use std::io::Write;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load, writing the document to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CatalogDocument> {
        tracing::info!("Extracting plugin declarations...");
        let plugins = self.pipeline.extract()?;
        tracing::info!("Extracted {} plugins", plugins.len());

        let document = self.pipeline.transform(plugins)?;
        tracing::debug!(
            "Mapped service '{}' with {} dependencies",
            document.service.identifier,
            document.service.relations.dependencies.len()
        );

        self.pipeline.load(&document, out)?;
        tracing::info!("Emitted {} entities", document.packages.len() + 1);

        Ok(document)
    }
}
