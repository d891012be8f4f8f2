//! Hand-authored best-practice tips per model.

use crate::model::ModelId;

const CHATGPT_IMAGE_TIPS: &[&str] = &[
    "Write in natural sentences: describe the scene as you would to an illustrator.",
    "Lead with the subject, then add setting, lighting, and style as short clauses.",
    "State what you want instead of what to avoid; negative prompts are not used.",
    "Name a medium or art style explicitly (e.g. \"oil painting\", \"product photo\").",
    "Put any text that must appear in the image in quotes and keep it short.",
];

const NANO_BANANA_PRO_TIPS: &[&str] = &[
    "Use short, comma-separated tokens; the most important ones go first.",
    "Keep each token to a few words so it carries clear weight.",
    "Move unwanted elements (blurry, watermark, extra fingers) into the negative list.",
    "Combine a lighting token, a camera or lens token, and a medium token for consistency.",
    "Avoid repeating the subject in descriptors; it dilutes token weight.",
];

/// Ordered tips for `model`.
pub fn tips_for(model: ModelId) -> &'static [&'static str] {
    match model {
        ModelId::ChatgptImage15 => CHATGPT_IMAGE_TIPS,
        ModelId::NanoBananaPro => NANO_BANANA_PRO_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_has_tips() {
        for model in ModelId::ALL {
            assert!(!tips_for(model).is_empty(), "{model} has no tips");
        }
    }

    #[test]
    fn tips_reflect_model_style() {
        assert!(tips_for(ModelId::ChatgptImage15)[0].contains("sentences"));
        assert!(tips_for(ModelId::NanoBananaPro)[0].contains("comma-separated"));
    }

    #[test]
    fn repeated_lookups_are_identical() {
        assert_eq!(
            tips_for(ModelId::NanoBananaPro),
            tips_for(ModelId::NanoBananaPro)
        );
    }
}
