use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use galaxy_control::StrategyConfig;

const VALID_KEYS: &[&str] = &[
    "reserve_buffer",
    "safety_margin",
    "min_commitment",
    "lookahead_ticks",
    "long_shot_horizon",
    "min_defense_contribution",
    "min_helper_garrison",
    "defense_growth_weight",
    "attack_rival_planets",
];

/// Reads a JSON strategy config. Keys the file leaves out keep their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<StrategyConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file: {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing config file: {}", path.display()))
}

/// Splits a `key=value` override. The value is read as JSON when it parses,
/// otherwise kept as a string so the type check can report it.
pub fn parse_override(raw: &str) -> Result<(String, serde_json::Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("override '{raw}' is not of the form key=value");
    };
    let value = serde_json::from_str(value.trim())
        .unwrap_or_else(|_| serde_json::Value::String(value.trim().to_string()));
    Ok((key.trim().to_string(), value))
}

pub fn apply_overrides(
    config: &mut StrategyConfig,
    overrides: &BTreeMap<String, serde_json::Value>,
) -> Result<()> {
    for (key, value) in overrides {
        match key.as_str() {
            "reserve_buffer" => config.reserve_buffer = as_i32(key, value)?,
            "safety_margin" => config.safety_margin = as_i32(key, value)?,
            "min_commitment" => config.min_commitment = as_i32(key, value)?,
            "lookahead_ticks" => config.lookahead_ticks = as_u32(key, value)?,
            "long_shot_horizon" => config.long_shot_horizon = as_u32(key, value)?,
            "min_defense_contribution" => config.min_defense_contribution = as_i32(key, value)?,
            "min_helper_garrison" => config.min_helper_garrison = as_i32(key, value)?,
            "defense_growth_weight" => config.defense_growth_weight = as_i32(key, value)?,
            "attack_rival_planets" => config.attack_rival_planets = as_bool(key, value)?,
            _ => bail!(
                "unknown override key '{key}'. Valid keys: {}",
                VALID_KEYS.join(", ")
            ),
        }
    }
    Ok(())
}

fn as_i32(key: &str, value: &serde_json::Value) -> Result<i32> {
    let val = value
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("override '{key}': expected an integer, got {value}"))?;
    i32::try_from(val)
        .map_err(|_| anyhow::anyhow!("override '{key}': value {val} exceeds i32 range"))
}

fn as_u32(key: &str, value: &serde_json::Value) -> Result<u32> {
    let val = value.as_u64().ok_or_else(|| {
        anyhow::anyhow!("override '{key}': expected a non-negative integer, got {value}")
    })?;
    u32::try_from(val)
        .map_err(|_| anyhow::anyhow!("override '{key}': value {val} exceeds u32 range"))
}

fn as_bool(key: &str, value: &serde_json::Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| anyhow::anyhow!("override '{key}': expected true or false, got {value}"))
}
