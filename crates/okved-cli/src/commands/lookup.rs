use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use okved_config::{self as config, AppConfig};
use okved_core::{flatten_codes, match_phone, CanonicalPhone, MatchReportDto};
use okved_sync::{DatasetSource, FetchOptions, FileSource, HttpSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub fn dataset_source(
    app_config: &AppConfig,
    url: Option<String>,
    file: Option<PathBuf>,
) -> Result<Box<dyn DatasetSource>> {
    if let Some(path) = file {
        return Ok(Box::new(FileSource::new(path)));
    }

    let url = match url {
        Some(raw) => config::validate_dataset_url(&raw)?,
        None => app_config.dataset.url.clone(),
    };
    let options = FetchOptions {
        connect_timeout: Duration::from_secs(app_config.dataset.connect_timeout_secs),
        read_timeout: Duration::from_secs(app_config.dataset.read_timeout_secs),
        user_agent: app_config.dataset.user_agent.clone(),
    };
    Ok(Box::new(HttpSource::new(url, options)))
}

pub fn lookup(ctx: &Context, phone: &CanonicalPhone, source: &dyn DatasetSource) -> Result<()> {
    info!(source = source.source_name(), "loading OKVED dataset");
    let tree = source
        .fetch_tree()
        .with_context(|| format!("load OKVED dataset ({})", source.source_name()))?;

    let codes = flatten_codes(&tree);
    debug!(count = codes.len(), "OKVED codes collected");

    let result = match_phone(phone, &codes).with_context(|| "match phone against OKVED codes")?;
    debug!(
        code = %result.entry.code,
        match_length = result.match_length,
        "OKVED code selected"
    );

    if ctx.json {
        return print_json(&MatchReportDto::new(phone, &result));
    }

    println!("Phone: {}", phone);
    println!("OKVED code: {}", result.entry.code);
    println!("Name: {}", result.entry.name);
    println!("Match length: {} digits", result.match_length);
    if result.is_fallback() {
        println!("No suffix match found; code chosen by fallback");
    }
    Ok(())
}
