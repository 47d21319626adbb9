use anyhow::{Context, Result};
use autocord_core::dialog::{DialogDefinition, DialogPayload};
use std::path::Path;

use super::read_json;

pub fn build(path: &Path) -> Result<()> {
    let payload = build_payload(path)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn build_payload(path: &Path) -> Result<DialogPayload> {
    let definition: DialogDefinition = serde_json::from_value(read_json(path)?)
        .with_context(|| format!("{} is not a modal definition", path.display()))?;

    let payload = definition
        .build()
        .with_context(|| format!("Invalid modal in {}", path.display()))?;
    Ok(payload)
}
