use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

use super::types::ClockOptions;

const PRESETS_JSON: &str = include_str!("presets.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockPreset {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: ClockOptions,
}

/// Presets shown in the gallery. A malformed document yields no presets.
pub fn clock_presets() -> Vec<ClockPreset> {
    parse_presets(PRESETS_JSON)
}

fn parse_presets(json: &str) -> Vec<ClockPreset> {
    serde_json::from_str(json).unwrap_or_else(|err| {
        warn!("[presets] failed to parse presets: {err}");
        Vec::new()
    })
}
