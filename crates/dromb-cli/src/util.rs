use anyhow::{Context, Result};
use std::path::Path;

use dromb_containers::config::DemoConfig;

pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load `path` when given, otherwise fall back to the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(p) => {
            log::info!("[dromb] Using config: {:?}", p);
            load_demo_config(p)
        }
        None => {
            log::debug!("[dromb] No config provided; using defaults.");
            Ok(DemoConfig::default())
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
