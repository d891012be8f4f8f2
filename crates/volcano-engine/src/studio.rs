//! Studio state and the derived report a frontend renders.
//!
//! [`StudioState`] holds the structured input a user edits (subject,
//! descriptors, negatives, model, learning mode). Every token, whether typed,
//! accepted from a suggestion, or applied from a [`StylePack`], goes
//! through [`push_token`], so the list a frontend shows always matches
//! what the compiler sees.
//!
//! [`StudioState::report`] recomputes all four engine outputs. They are pure
//! functions of the state, so callers may cache reports by state if they like.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisor::tips_for;
use crate::compiler::compile;
use crate::config::EngineConfig;
use crate::learning::{LearningMode, LearningModeSettings};
use crate::lint::{Linter, Warning};
use crate::model::ModelId;
use crate::normalize::push_token;
use crate::suggest::Suggester;

/// Structured prompt input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StudioState {
    pub model: ModelId,
    pub learning_mode: LearningMode,
    /// Main subject, kept as typed. Trimmed at compile time.
    pub subject: String,
    /// Ordered, deduplicated descriptor tokens.
    pub descriptors: Vec<String>,
    /// Ordered, deduplicated negative tokens.
    pub negatives: Vec<String>,
}

/// Bundle of descriptor tokens applied in one step.
///
/// Tokens are added field by field in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StylePack {
    pub core: Vec<String>,
    pub motifs: Vec<String>,
    pub lighting: Vec<String>,
    pub camera: Vec<String>,
    pub materials: Vec<String>,
    pub color_bias: Vec<String>,
    pub bridge: Vec<String>,
}

impl StylePack {
    /// All tokens in application order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        [
            &self.core,
            &self.motifs,
            &self.lighting,
            &self.camera,
            &self.materials,
            &self.color_bias,
            &self.bridge,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
    }
}

impl StudioState {
    /// Start from the configured default model and learning mode.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            model: config.default_model,
            learning_mode: config.default_learning_mode,
            ..Default::default()
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    pub fn set_learning_mode(&mut self, mode: LearningMode) {
        self.learning_mode = mode;
    }

    /// Returns `true` if the token was new.
    pub fn add_descriptor(&mut self, token: &str) -> bool {
        push_token(&mut self.descriptors, token)
    }

    /// Returns `true` if the token was new.
    pub fn add_negative(&mut self, token: &str) -> bool {
        push_token(&mut self.negatives, token)
    }

    /// Add several descriptors in order; returns how many were new.
    pub fn add_descriptors<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> usize {
        tokens
            .into_iter()
            .filter(|t| self.add_descriptor(t))
            .count()
    }

    /// Returns the removed token, or `None` if `idx` is out of range.
    pub fn remove_descriptor(&mut self, idx: usize) -> Option<String> {
        (idx < self.descriptors.len()).then(|| self.descriptors.remove(idx))
    }

    /// Returns the removed token, or `None` if `idx` is out of range.
    pub fn remove_negative(&mut self, idx: usize) -> Option<String> {
        (idx < self.negatives.len()).then(|| self.negatives.remove(idx))
    }

    /// Returns how many tokens were new.
    pub fn apply_style_pack(&mut self, pack: &StylePack) -> usize {
        let added = self.add_descriptors(pack.tokens());
        debug!("Applied style pack: {added} new descriptor(s)");
        added
    }

    /// Recompute every engine output for the current state.
    pub fn report(&self, engine: &Engine) -> StudioReport {
        let ui = self.learning_mode.settings();
        StudioReport {
            compiled: compile(self.model, &self.subject, &self.descriptors, &self.negatives),
            warnings: engine.linter.lint(
                self.model,
                &self.subject,
                &self.descriptors,
                &self.negatives,
                ui.lint_strictness,
            ),
            tips: tips_for(self.model).iter().map(|t| (*t).to_string()).collect(),
            suggestions: engine.suggester.suggest(&self.subject, &self.descriptors),
            ui,
        }
    }
}

/// Everything a frontend renders for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioReport {
    pub compiled: String,
    pub warnings: Vec<Warning>,
    pub tips: Vec<String>,
    pub suggestions: Vec<String>,
    pub ui: LearningModeSettings,
}

/// Configured linter and suggester.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub linter: Linter,
    pub suggester: Suggester,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            linter: Linter::new(config.lint.clone()),
            suggester: Suggester::new(config.suggest.clone()),
        }
    }
}
