//! Target image models and their formatting profiles.
//!
//! Every [`ModelId`] maps to exactly one [`ModelProfile`] through an
//! exhaustive `match`, so adding a model without a profile entry is a
//! compile error rather than a runtime lookup failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a supported image-generation model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ModelId {
    /// ChatGPT Image 1.5. Prose-friendly, no negative prompt block.
    #[default]
    #[serde(rename = "chatgpt_image_1_5")]
    ChatgptImage15,
    /// Nano Banana Pro. Comma-dense token lists with a negative block.
    #[serde(rename = "nano_banana_pro")]
    NanoBananaPro,
}

impl ModelId {
    /// Every supported model, in display order.
    pub const ALL: [ModelId; 2] = [ModelId::ChatgptImage15, ModelId::NanoBananaPro];

    /// Wire name used in serialized state and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::ChatgptImage15 => "chatgpt_image_1_5",
            ModelId::NanoBananaPro => "nano_banana_pro",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelId::ChatgptImage15 => "ChatGPT Image 1.5",
            ModelId::NanoBananaPro => "Nano Banana Pro",
        }
    }

    /// Formatting profile for this model.
    pub fn profile(self) -> ModelProfile {
        match self {
            ModelId::ChatgptImage15 => ModelProfile {
                prefers_sentences: true,
                supports_negative: false,
            },
            ModelId::NanoBananaPro => ModelProfile {
                prefers_sentences: false,
                supports_negative: true,
            },
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = ModelId::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown model '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// How a model expects prompt text to be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelProfile {
    /// Prose assembly (`". "` joins) instead of a comma-dense token list.
    pub prefers_sentences: bool,
    /// Whether a `Negative:` block may be emitted.
    pub supports_negative: bool,
}

/// Assembly style selected by [`ModelProfile::prefers_sentences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Sentence,
    Dense,
}

impl ModelProfile {
    pub fn style(&self) -> PromptStyle {
        if self.prefers_sentences {
            PromptStyle::Sentence
        } else {
            PromptStyle::Dense
        }
    }

    /// Whether compiled output for this profile can carry negative tokens.
    ///
    /// Sentence-style models never receive a negative block, even when the
    /// profile claims support.
    pub fn emits_negative(&self) -> bool {
        self.style() == PromptStyle::Dense && self.supports_negative
    }
}
