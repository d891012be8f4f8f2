//! Model-aware prompt compilation and advice for image-generation models.
//!
//! `volcano-engine` turns structured prompt input (a subject, an ordered
//! descriptor list, an ordered negative list, a target model, and a learning
//! mode) into the four things a prompt studio shows:
//!
//! - the **compiled prompt** shaped for the selected model ([`compile`]),
//! - **lint warnings** filtered by learning-mode strictness ([`lint()`]),
//! - **model tips** ([`tips_for`]),
//! - **modifier suggestions** for missing descriptor categories ([`suggest()`]).
//!
//! All four are pure and synchronous. The same input always gives the same
//! output, so a frontend can recompute them on every keystroke.
//!
//! # Getting started
//!
//! ```
//! use volcano_engine::{Engine, ModelId, StudioState};
//!
//! let mut state = StudioState::default();
//! state.set_model(ModelId::NanoBananaPro);
//! state.set_subject("a fox");
//! state.add_descriptor("running");
//! state.add_descriptor("forest");
//! state.add_negative("blurry");
//!
//! let report = state.report(&Engine::default());
//! assert_eq!(report.compiled, "a fox, running, forest\n\nNegative: blurry");
//! ```
//!
//! # Where to find things
//!
//! - **Model formatting rules:** [`ModelId`] and [`ModelProfile`] in [`model`].
//!   Profiles come from an exhaustive `match`, so a new model cannot ship
//!   without one.
//! - **Learning modes:** [`LearningMode`] maps to a [`Strictness`], a UI
//!   density hint, and the explain toggle in [`learning`].
//! - **Token hygiene:** [`normalize()`] and [`push_token`] in [`normalize`]
//!   (trim, drop blanks, case-insensitive dedup, first casing wins).
//! - **Lint rules and their strictness gates:** [`lint::Linter`] and
//!   [`lint::LintConfig`].
//! - **Suggestion categories:** [`suggest::CATEGORIES`] and
//!   [`suggest::Suggester`].
//! - **Editing state:** [`StudioState`] with [`StylePack`] application and
//!   [`StudioReport`] for the derived outputs.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Closed set of target models and their profiles |
//! | [`learning`] | Learning modes, strictness ordering, UI hints |
//! | [`normalize`] | Trim and case-insensitive dedup shared by every list |
//! | [`compiler`] | Sentence and dense prompt assembly |
//! | [`lint`] | Ordered, strictness-gated quality rules |
//! | [`advisor`] | Per-model best-practice tips |
//! | [`suggest`] | Category-driven descriptor suggestions |
//! | [`studio`] | Editable state and the combined report |
//! | [`config`] | JSON engine configuration |

pub mod advisor;
pub mod compiler;
pub mod config;
pub mod learning;
pub mod lint;
pub mod model;
pub mod normalize;
pub mod studio;
pub mod suggest;

use schemars::JsonSchema;

pub use advisor::tips_for;
pub use compiler::{compile, compile_with_profile};
pub use config::EngineConfig;
pub use learning::{LearningMode, LearningModeSettings, Strictness, UiDensity};
pub use lint::{Warning, lint};
pub use model::{ModelId, ModelProfile, PromptStyle};
pub use normalize::{contains_token, normalize, push_token};
pub use studio::{Engine, StudioReport, StudioState, StylePack};
pub use suggest::suggest;

// Re-export schemars for downstream crates.
pub use schemars;

/// Generate a JSON Schema `serde_json::Value` for a type, e.g. [`StudioState`]
/// so a frontend can validate the documents it sends.
///
/// ```
/// use volcano_engine::{StudioState, json_schema_for};
///
/// let schema = json_schema_for::<StudioState>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["properties"]["descriptors"].is_object());
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}
