//! Final prompt assembly.
//!
//! Sentence-style models get `". "`-joined prose with a trailing period.
//! Dense models get a `", "`-joined token list, optionally followed by a
//! blank line and a `Negative:` block.

use tracing::debug;

use crate::model::{ModelId, ModelProfile, PromptStyle};
use crate::normalize::normalize;

/// Label that introduces the negative block in dense output.
pub const NEGATIVE_LABEL: &str = "Negative: ";

/// Compile the prompt for `model` from structured input.
///
/// Returns an empty string when both the subject and the descriptor list are
/// empty after normalization.
pub fn compile<S: AsRef<str>>(
    model: ModelId,
    subject: &str,
    descriptors: &[S],
    negatives: &[S],
) -> String {
    compile_with_profile(&model.profile(), subject, descriptors, negatives)
}

/// Compile against an explicit profile instead of a table entry.
pub fn compile_with_profile<S: AsRef<str>>(
    profile: &ModelProfile,
    subject: &str,
    descriptors: &[S],
    negatives: &[S],
) -> String {
    let subject = subject.trim();
    let descriptors = normalize(descriptors);
    let negatives = normalize(negatives);

    if subject.is_empty() && descriptors.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = std::iter::once(subject)
        .chain(descriptors.iter().map(String::as_str))
        .filter(|p| !p.is_empty())
        .collect();

    match profile.style() {
        PromptStyle::Sentence => {
            debug!(
                "Compiling sentence prompt ({} parts, {} negatives dropped)",
                parts.len(),
                negatives.len()
            );
            let mut prompt = parts.join(". ");
            if !parts.is_empty() {
                prompt.push('.');
            }
            prompt
        }
        PromptStyle::Dense => {
            let mut prompt = parts.join(", ");
            if profile.supports_negative && !negatives.is_empty() {
                prompt.push_str("\n\n");
                prompt.push_str(NEGATIVE_LABEL);
                prompt.push_str(&negatives.join(", "));
            }
            debug!(
                "Compiling dense prompt ({} parts, {} negatives, negative block: {})",
                parts.len(),
                negatives.len(),
                profile.supports_negative
            );
            prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn empty_input_short_circuits() {
        for model in ModelId::ALL {
            assert_eq!(compile(model, "   ", &NONE, &["blurry"]), "");
        }
    }

    #[test]
    fn sentence_mode_joins_with_periods() {
        let out = compile(
            ModelId::ChatgptImage15,
            "a fox",
            &["running", "forest"],
            &["blurry"],
        );
        assert_eq!(out, "a fox. running. forest.");
    }

    #[test]
    fn dense_mode_appends_negative_block() {
        let out = compile(
            ModelId::NanoBananaPro,
            "a fox",
            &["running", "forest"],
            &["blurry"],
        );
        assert_eq!(out, "a fox, running, forest\n\nNegative: blurry");
    }

    #[test]
    fn dense_without_negative_support_drops_negatives() {
        let profile = ModelProfile {
            prefers_sentences: false,
            supports_negative: false,
        };
        let out = compile_with_profile(&profile, "a fox", &["forest"], &["blurry", "text"]);
        assert_eq!(out, "a fox, forest");
    }

    #[test]
    fn sentence_mode_ignores_claimed_negative_support() {
        let profile = ModelProfile {
            prefers_sentences: true,
            supports_negative: true,
        };
        let out = compile_with_profile(&profile, "a fox", &NONE, &["blurry"]);
        assert_eq!(out, "a fox.");
    }

    #[test]
    fn descriptors_only_without_subject() {
        assert_eq!(
            compile(ModelId::NanoBananaPro, "", &["watercolor", "pastel"], &NONE),
            "watercolor, pastel"
        );
        assert_eq!(
            compile(ModelId::ChatgptImage15, "", &["watercolor"], &NONE),
            "watercolor."
        );
    }

    #[test]
    fn input_is_normalized_before_assembly() {
        let out = compile(
            ModelId::NanoBananaPro,
            "  castle  ",
            &[" Fog", "fog", "", "moonlight "],
            &["Text", " text"],
        );
        assert_eq!(out, "castle, Fog, moonlight\n\nNegative: Text");
    }

    #[test]
    fn empty_negatives_add_no_block() {
        assert_eq!(compile(ModelId::NanoBananaPro, "castle", &NONE, &NONE), "castle");
    }
}
