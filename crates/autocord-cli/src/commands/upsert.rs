use anyhow::{Context, Result, bail};
use autocord_core::sheets::{SheetsUpsert, UpsertOutcome, UpsertParams};
use autocord_infrastructure::{HttpSheetsQuery, SheetsConfig};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub async fn run(
    range: String,
    bounds: Option<String>,
    filter: &str,
    fields: &str,
    config_path: Option<&Path>,
) -> Result<()> {
    let params = parse_params(range, bounds, filter, fields)?;

    let config = match config_path {
        Some(path) => SheetsConfig::load_from(path)?,
        None => SheetsConfig::load()?,
    };
    let upsert = SheetsUpsert::new(Arc::new(HttpSheetsQuery::from_config(&config)));

    let outcome = upsert.upsert(&params).await?;
    println!(
        "{}",
        match outcome {
            UpsertOutcome::Updated => "updated",
            UpsertOutcome::Inserted => "inserted",
        }
    );
    Ok(())
}

fn parse_params(
    range: String,
    bounds: Option<String>,
    filter: &str,
    fields: &str,
) -> Result<UpsertParams> {
    let filter: Value = serde_json::from_str(filter).context("--where is not valid JSON")?;
    let fields: Value = serde_json::from_str(fields).context("--fields is not valid JSON")?;

    let Value::Object(fields) = fields else {
        bail!("--fields must be a JSON object of column names to values");
    };

    let mut params = UpsertParams::new(range, filter, fields);
    params.bounds = bounds;
    Ok(params)
}
