// =============================================================================
// Engine configuration — window lengths and fallback policy
// =============================================================================
//
// Every field carries a serde default so that loading an older JSON file
// missing new fields never breaks. The config is plain data handed to the
// engine per call; there is no runtime mutation or persistence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_momentum_window() -> usize {
    125
}

fn default_strength_window() -> usize {
    252
}

fn default_safe_haven_window() -> usize {
    125
}

fn default_neutral_strength() -> f64 {
    50.0
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Tunable parameters for the sentiment index engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trailing window (trading days) for the momentum sub-indicator.
    #[serde(default = "default_momentum_window")]
    pub momentum_window: usize,

    /// Trailing window for the strength sub-indicator ("52-week" range).
    #[serde(default = "default_strength_window")]
    pub strength_window: usize,

    /// Trailing window for the safe-haven-demand sub-indicator.
    #[serde(default = "default_safe_haven_window")]
    pub safe_haven_window: usize,

    /// Strength value emitted when the trailing window has zero price range
    /// (window high equals window low). Midpoint of the 0-100 scale.
    #[serde(default = "default_neutral_strength")]
    pub neutral_strength: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            momentum_window: default_momentum_window(),
            strength_window: default_strength_window(),
            safe_haven_window: default_safe_haven_window(),
            neutral_strength: default_neutral_strength(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// Returns an error if the file is missing or unparseable so the caller
    /// can fall back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            momentum_window = config.momentum_window,
            strength_window = config.strength_window,
            safe_haven_window = config.safe_haven_window,
            "engine config loaded"
        );

        Ok(config)
    }
}
