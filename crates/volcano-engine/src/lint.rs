//! Rule-based prompt quality checks gated by strictness.
//!
//! Rules run in the fixed order of [`RuleId::ALL`] so the warning list stays
//! stable between recomputations. Each rule carries a [`RuleGate`]: it only
//! fires when the active [`Strictness`] falls inside the gate. Lower learning
//! modes run at higher strictness and see the educational rules; pro mode
//! sees a smaller, more technical set.
//!
//! Gates and thresholds are plain configuration ([`LintConfig`]) and can be
//! overridden per rule without touching the rule bodies.
//!
//! # Example
//!
//! ```
//! use volcano_engine::lint::{Linter, LintConfig, RuleId};
//! use volcano_engine::{ModelId, Strictness};
//!
//! let linter = Linter::new(LintConfig::default());
//! let warnings = linter.lint(ModelId::ChatgptImage15, "", &["neon"], &["blurry"], Strictness::Minimal);
//! let rules: Vec<RuleId> = warnings.iter().map(|w| w.rule).collect();
//! assert_eq!(rules, vec![RuleId::EmptySubject, RuleId::NegativesIgnored]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::learning::Strictness;
use crate::model::{ModelId, ModelProfile, PromptStyle};
use crate::normalize::{contains_phrase, normalize};

/// Identifier of a lint rule. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    EmptySubject,
    SubjectTooShort,
    TooFewDescriptors,
    TooManyDescriptors,
    NegativesIgnored,
    DescriptorRepeatsSubject,
    ProseInDenseModel,
}

impl RuleId {
    pub const ALL: [RuleId; 7] = [
        RuleId::EmptySubject,
        RuleId::SubjectTooShort,
        RuleId::TooFewDescriptors,
        RuleId::TooManyDescriptors,
        RuleId::NegativesIgnored,
        RuleId::DescriptorRepeatsSubject,
        RuleId::ProseInDenseModel,
    ];

    /// Strictness range at which the rule fires unless overridden.
    pub fn default_gate(self) -> RuleGate {
        use Strictness::*;
        match self {
            RuleId::EmptySubject => RuleGate::new(Minimal, Thorough),
            RuleId::SubjectTooShort => RuleGate::new(Standard, Thorough),
            RuleId::TooFewDescriptors => RuleGate::new(Thorough, Thorough),
            RuleId::TooManyDescriptors => RuleGate::new(Standard, Thorough),
            RuleId::NegativesIgnored => RuleGate::new(Minimal, Thorough),
            RuleId::DescriptorRepeatsSubject => RuleGate::new(Standard, Thorough),
            RuleId::ProseInDenseModel => RuleGate::new(Minimal, Standard),
        }
    }
}

/// Inclusive strictness range for a rule. A gate with `min > max` admits
/// nothing and disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGate {
    pub min: Strictness,
    pub max: Strictness,
}

impl RuleGate {
    pub fn new(min: Strictness, max: Strictness) -> Self {
        Self { min, max }
    }

    pub fn admits(&self, strictness: Strictness) -> bool {
        self.min <= strictness && strictness <= self.max
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub rule: RuleId,
    pub message: String,
}

/// Numeric thresholds used by the heuristic rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintThresholds {
    /// Subjects with fewer words than this are "too short". Default: `2`.
    pub min_subject_words: usize,
    /// Subjects with fewer characters than this are "too short". Default: `4`.
    pub min_subject_chars: usize,
    /// Default: `2`.
    pub min_descriptors: usize,
    /// Descriptor limit for sentence-style models. Default: `12`.
    pub max_sentence_descriptors: usize,
    /// Descriptor limit for dense models. Default: `30`.
    pub max_dense_descriptors: usize,
    /// Words per descriptor before a dense model treats it as prose. Default: `6`.
    pub max_dense_descriptor_words: usize,
}

impl Default for LintThresholds {
    fn default() -> Self {
        Self {
            min_subject_words: 2,
            min_subject_chars: 4,
            min_descriptors: 2,
            max_sentence_descriptors: 12,
            max_dense_descriptors: 30,
            max_dense_descriptor_words: 6,
        }
    }
}

/// Authorable linter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub thresholds: LintThresholds,
    /// Per-rule gate overrides. Rules not listed use [`RuleId::default_gate`].
    pub gates: BTreeMap<RuleId, RuleGate>,
}

impl LintConfig {
    /// Override the gate for one rule (builder pattern).
    pub fn with_gate(mut self, rule: RuleId, gate: RuleGate) -> Self {
        self.gates.insert(rule, gate);
        self
    }

    pub fn with_thresholds(mut self, thresholds: LintThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn gate(&self, rule: RuleId) -> RuleGate {
        self.gates
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_gate())
    }
}

/// Normalized view of the structured input shared by every rule.
struct LintInput<'a> {
    model: ModelId,
    profile: ModelProfile,
    subject: &'a str,
    descriptors: Vec<String>,
    negatives: Vec<String>,
}

/// Stateless linter over a [`LintConfig`].
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Run every rule admitted at `strictness`, in rule order.
    pub fn lint<S: AsRef<str>>(
        &self,
        model: ModelId,
        subject: &str,
        descriptors: &[S],
        negatives: &[S],
        strictness: Strictness,
    ) -> Vec<Warning> {
        let input = LintInput {
            model,
            profile: model.profile(),
            subject: subject.trim(),
            descriptors: normalize(descriptors),
            negatives: normalize(negatives),
        };

        let mut warnings = Vec::new();
        for rule in RuleId::ALL {
            if !self.config.gate(rule).admits(strictness) {
                trace!("Lint rule {rule:?} gated off at {strictness:?}");
                continue;
            }
            for message in self.check(rule, &input) {
                warnings.push(Warning { rule, message });
            }
        }

        debug!(
            "Lint produced {} warning(s) for {} at {strictness:?}",
            warnings.len(),
            model
        );
        warnings
    }

    fn check(&self, rule: RuleId, input: &LintInput<'_>) -> Vec<String> {
        let t = &self.config.thresholds;
        let subject = input.subject;

        match rule {
            RuleId::EmptySubject => {
                if subject.is_empty() {
                    vec!["Add a subject: say who or what the image is about.".into()]
                } else {
                    Vec::new()
                }
            }
            RuleId::SubjectTooShort => {
                if subject.is_empty() {
                    return Vec::new();
                }
                let minimum = if subject.split_whitespace().count() < t.min_subject_words {
                    format!("{} words", t.min_subject_words)
                } else if subject.chars().count() < t.min_subject_chars {
                    format!("{} characters", t.min_subject_chars)
                } else {
                    return Vec::new();
                };
                vec![format!(
                    "Subject \"{subject}\" is very short. Describe the main subject \
                     in more detail (at least {minimum})."
                )]
            }
            RuleId::TooFewDescriptors => {
                if !subject.is_empty() && input.descriptors.len() < t.min_descriptors {
                    vec![format!(
                        "Only {} descriptor(s). Add style, lighting, or composition \
                         details for more control.",
                        input.descriptors.len()
                    )]
                } else {
                    Vec::new()
                }
            }
            RuleId::TooManyDescriptors => {
                let limit = match input.profile.style() {
                    PromptStyle::Sentence => t.max_sentence_descriptors,
                    PromptStyle::Dense => t.max_dense_descriptors,
                };
                if input.descriptors.len() > limit {
                    vec![format!(
                        "{} descriptors exceeds the {limit} that {} handles well. \
                         Trim overlapping or low-impact ones.",
                        input.descriptors.len(),
                        input.model.display_name()
                    )]
                } else {
                    Vec::new()
                }
            }
            RuleId::NegativesIgnored => {
                if !input.negatives.is_empty() && !input.profile.emits_negative() {
                    vec![format!(
                        "{} does not use a negative prompt; {} negative token(s) will be \
                         ignored. Rephrase them as positive descriptions instead.",
                        input.model.display_name(),
                        input.negatives.len()
                    )]
                } else {
                    Vec::new()
                }
            }
            RuleId::DescriptorRepeatsSubject => {
                if subject.is_empty() {
                    return Vec::new();
                }
                input
                    .descriptors
                    .iter()
                    .filter(|d| contains_phrase(subject, d))
                    .map(|d| format!("Descriptor \"{d}\" repeats the subject and adds nothing."))
                    .collect()
            }
            RuleId::ProseInDenseModel => {
                if input.profile.style() != PromptStyle::Dense {
                    return Vec::new();
                }
                input
                    .descriptors
                    .iter()
                    .filter(|d| d.split_whitespace().count() > t.max_dense_descriptor_words)
                    .map(|d| {
                        format!(
                            "Descriptor \"{d}\" reads as prose; {} weights short comma \
                             tokens more reliably. Split it into shorter tokens.",
                            input.model.display_name()
                        )
                    })
                    .collect()
            }
        }
    }
}

/// Lint with the default configuration.
pub fn lint<S: AsRef<str>>(
    model: ModelId,
    subject: &str,
    descriptors: &[S],
    negatives: &[S],
    strictness: Strictness,
) -> Vec<Warning> {
    Linter::default().lint(model, subject, descriptors, negatives, strictness)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn rules(warnings: &[Warning]) -> Vec<RuleId> {
        warnings.iter().map(|w| w.rule).collect()
    }

    #[test]
    fn empty_subject_fires_in_every_mode() {
        for s in [Strictness::Minimal, Strictness::Standard, Strictness::Thorough] {
            let w = lint(ModelId::NanoBananaPro, "  ", &["neon"], &NONE, s);
            assert_eq!(w[0].rule, RuleId::EmptySubject);
        }
    }

    #[test]
    fn short_subject_needs_standard() {
        let minimal = lint(ModelId::NanoBananaPro, "cat", &["a", "b"], &NONE, Strictness::Minimal);
        assert!(minimal.is_empty());

        let standard =
            lint(ModelId::NanoBananaPro, "cat", &["a", "b"], &NONE, Strictness::Standard);
        assert_eq!(rules(&standard), vec![RuleId::SubjectTooShort]);
    }

    #[test]
    fn short_subject_message_names_the_failed_threshold() {
        let by_words = lint(ModelId::NanoBananaPro, "lighthouse", &["a", "b"], &NONE, Strictness::Standard);
        assert_eq!(rules(&by_words), vec![RuleId::SubjectTooShort]);
        assert!(by_words[0].message.contains("at least 2 words"));

        let by_chars = lint(ModelId::NanoBananaPro, "a b", &["x", "y"], &NONE, Strictness::Standard);
        assert_eq!(rules(&by_chars), vec![RuleId::SubjectTooShort]);
        assert!(by_chars[0].message.contains("at least 4 characters"));
        assert!(!by_chars[0].message.contains("words"));
    }

    #[test]
    fn too_few_descriptors_is_beginner_only() {
        let thorough = lint(ModelId::ChatgptImage15, "a red fox", &NONE, &NONE, Strictness::Thorough);
        assert_eq!(rules(&thorough), vec![RuleId::TooFewDescriptors]);

        let standard = lint(ModelId::ChatgptImage15, "a red fox", &NONE, &NONE, Strictness::Standard);
        assert!(standard.is_empty());
    }

    #[test]
    fn too_many_descriptors_uses_model_style_limit() {
        let many: Vec<String> = (0..13).map(|i| format!("tag{i}")).collect();
        let sentence = lint(
            ModelId::ChatgptImage15,
            "a red fox",
            &many,
            &[],
            Strictness::Standard,
        );
        assert_eq!(rules(&sentence), vec![RuleId::TooManyDescriptors]);

        let dense = lint(ModelId::NanoBananaPro, "a red fox", &many, &[], Strictness::Standard);
        assert!(dense.is_empty());
    }

    #[test]
    fn negatives_ignored_for_sentence_model() {
        let w = lint(
            ModelId::ChatgptImage15,
            "a red fox",
            &["snow", "dusk"],
            &["blurry"],
            Strictness::Minimal,
        );
        assert_eq!(rules(&w), vec![RuleId::NegativesIgnored]);
        assert!(w[0].message.contains("ChatGPT Image 1.5"));

        let dense = lint(
            ModelId::NanoBananaPro,
            "a red fox",
            &["snow", "dusk"],
            &["blurry"],
            Strictness::Minimal,
        );
        assert!(dense.is_empty());
    }

    #[test]
    fn descriptor_repeating_subject_is_flagged_per_descriptor() {
        let w = lint(
            ModelId::NanoBananaPro,
            "A red fox in snow",
            &["Red Fox", "snow", "foxglove", "dusk"],
            &NONE,
            Strictness::Standard,
        );
        let messages: Vec<&str> = w.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(w.len(), 2);
        assert!(messages[0].contains("Red Fox"));
        assert!(messages[1].contains("\"snow\""));
    }

    #[test]
    fn prose_descriptor_hidden_from_beginners() {
        let long = "a very long descriptor that reads like a sentence";
        let pro = lint(ModelId::NanoBananaPro, "a red fox", &[long, "dusk"], &NONE, Strictness::Minimal);
        assert_eq!(rules(&pro), vec![RuleId::ProseInDenseModel]);

        let beginner =
            lint(ModelId::NanoBananaPro, "a red fox", &[long, "dusk"], &NONE, Strictness::Thorough);
        assert!(!rules(&beginner).contains(&RuleId::ProseInDenseModel));
    }

    #[test]
    fn warnings_follow_rule_order() {
        let w = lint(ModelId::ChatgptImage15, "fox", &NONE, &["blurry"], Strictness::Thorough);
        assert_eq!(
            rules(&w),
            vec![
                RuleId::SubjectTooShort,
                RuleId::TooFewDescriptors,
                RuleId::NegativesIgnored
            ]
        );
    }

    #[test]
    fn gate_override_changes_active_rules() {
        let config = LintConfig::default().with_gate(
            RuleId::TooFewDescriptors,
            RuleGate::new(Strictness::Minimal, Strictness::Thorough),
        );
        let linter = Linter::new(config);
        let w = linter.lint(ModelId::ChatgptImage15, "a red fox", &NONE, &NONE, Strictness::Minimal);
        assert_eq!(rules(&w), vec![RuleId::TooFewDescriptors]);
    }

    #[test]
    fn threshold_override_applies() {
        let config = LintConfig::default().with_thresholds(LintThresholds {
            min_subject_words: 4,
            ..Default::default()
        });
        let w = Linter::new(config).lint(
            ModelId::NanoBananaPro,
            "a red fox",
            &["snow", "dusk"],
            &NONE,
            Strictness::Standard,
        );
        assert_eq!(rules(&w), vec![RuleId::SubjectTooShort]);
    }

    #[test]
    fn config_deserializes_partial_json() {
        let json = r#"{"gates":{"empty_subject":{"min":"standard","max":"thorough"}}}"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.thresholds, LintThresholds::default());
        assert!(!config.gate(RuleId::EmptySubject).admits(Strictness::Minimal));
    }
}
