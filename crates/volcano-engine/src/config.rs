//! Engine configuration loaded from JSON.
//!
//! Every field has a default, so a config file only needs the settings it
//! changes:
//!
//! ```json
//! {
//!   "default_model": "nano_banana_pro",
//!   "lint": { "gates": { "too_few_descriptors": { "min": "standard", "max": "thorough" } } },
//!   "suggest": { "limit": 5 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::learning::LearningMode;
use crate::lint::LintConfig;
use crate::model::ModelId;
use crate::suggest::SuggestConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Model selected for a fresh studio. Default: `chatgpt_image_1_5`.
    pub default_model: ModelId,
    /// Learning mode for a fresh studio. Default: `beginner`.
    pub default_learning_mode: LearningMode,
    pub lint: LintConfig,
    pub suggest: SuggestConfig,
}

impl EngineConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&data)
            .map_err(|e| format!("failed to parse config {}: {e}", path.display()))?;
        debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, String> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
