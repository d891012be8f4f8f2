//! Learning modes: lint strictness and UI disclosure presets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selected learning preset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LearningMode {
    #[default]
    Beginner,
    Intermediate,
    Pro,
}

/// Ordinal controlling which lint rules are active.
///
/// Higher values surface more warnings: `Minimal < Standard < Thorough`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Minimal,
    Standard,
    Thorough,
}

/// Display density hint. Only the UI reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UiDensity {
    Comfortable,
    Balanced,
    Compact,
}

/// Table entry for a [`LearningMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LearningModeSettings {
    pub lint_strictness: Strictness,
    pub ui_density: UiDensity,
    /// Gates the prompt-explain panel.
    pub show_explain: bool,
}

impl LearningMode {
    pub const ALL: [LearningMode; 3] = [
        LearningMode::Beginner,
        LearningMode::Intermediate,
        LearningMode::Pro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LearningMode::Beginner => "beginner",
            LearningMode::Intermediate => "intermediate",
            LearningMode::Pro => "pro",
        }
    }

    /// Beginners see the most (educational) warnings, pros the fewest.
    pub fn settings(self) -> LearningModeSettings {
        match self {
            LearningMode::Beginner => LearningModeSettings {
                lint_strictness: Strictness::Thorough,
                ui_density: UiDensity::Comfortable,
                show_explain: true,
            },
            LearningMode::Intermediate => LearningModeSettings {
                lint_strictness: Strictness::Standard,
                ui_density: UiDensity::Balanced,
                show_explain: true,
            },
            LearningMode::Pro => LearningModeSettings {
                lint_strictness: Strictness::Minimal,
                ui_density: UiDensity::Compact,
                show_explain: false,
            },
        }
    }

    pub fn strictness(self) -> Strictness {
        self.settings().lint_strictness
    }
}

impl fmt::Display for LearningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LearningMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!("unknown learning mode '{s}' (expected beginner, intermediate, or pro)")
            })
    }
}
