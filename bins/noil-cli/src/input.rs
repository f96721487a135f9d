//! JSON input files.

use std::path::Path;

use anyhow::{Context, Result};
use noil_core::DailyLogEntry;
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Log rows: `[{"date": "2026-03-01", "amount_ml": 40.0}, ...]`.
pub fn load_log(path: &Path) -> Result<Vec<DailyLogEntry>> {
    read_json(path)
}

/// Per-person averages: `[12.5, 30.0, ...]`.
pub fn load_population(path: &Path) -> Result<Vec<f64>> {
    read_json(path)
}
