use crate::core::{CatalogDocument, Entity};
use crate::utils::error::Result;
use std::io::Write;

/// Pretty JSON array (2-space indent), service first.
pub fn render(document: &CatalogDocument) -> Result<String> {
    render_entities(&document.entities())
}

pub fn render_entities(entities: &[Entity]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entities)?)
}

/// Renders fully before touching `out`, so a failed render writes nothing.
pub fn emit<W: Write>(document: &CatalogDocument, out: &mut W) -> Result<()> {
    let json = render(document)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
