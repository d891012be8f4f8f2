//! Cross-module properties of the four engine entry points.

use std::collections::HashSet;

use volcano_engine::lint::RuleId;
use volcano_engine::{
    LearningMode, ModelId, ModelProfile, Strictness, compile, compile_with_profile, lint,
    normalize, suggest, tips_for,
};

const NONE: [&str; 0] = [];

#[test]
fn normalize_is_idempotent_on_messy_input() {
    let inputs: [&[&str]; 4] = [
        &["Cat", "cat", "Dog"],
        &["  ", "", "x"],
        &[" Golden Hour", "golden hour ", "GOLDEN HOUR", "bokeh"],
        &[],
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn normalize_keeps_first_casing_and_order() {
    assert_eq!(normalize(["Cat", "cat", "Dog"]), vec!["Cat", "Dog"]);
}

#[test]
fn compile_empty_input_is_empty_for_every_model() {
    for model in ModelId::ALL {
        assert_eq!(compile(model, "", &NONE, &["blurry", "lowres"]), "");
    }
}

#[test]
fn compile_matches_documented_examples() {
    assert_eq!(
        compile(ModelId::ChatgptImage15, "a fox", &["running", "forest"], &NONE),
        "a fox. running. forest."
    );
    assert_eq!(
        compile(
            ModelId::NanoBananaPro,
            "a fox",
            &["running", "forest"],
            &["blurry"]
        ),
        "a fox, running, forest\n\nNegative: blurry"
    );
}

#[test]
fn dense_model_without_negative_support_never_leaks_negatives() {
    let profile = ModelProfile {
        prefers_sentences: false,
        supports_negative: false,
    };
    let out = compile_with_profile(&profile, "a fox", &["forest"], &["watermark", "blurry"]);
    assert!(!out.contains("watermark"));
    assert!(!out.contains("Negative"));
}

#[test]
fn compiled_output_has_no_trailing_whitespace() {
    for model in ModelId::ALL {
        let out = compile(model, " a fox ", &[" forest "], &[" blurry "]);
        assert_eq!(out, out.trim_end());
    }
}

#[test]
fn lint_strictness_changes_rule_set_deterministically() {
    let subject = "fox";
    let descriptors = ["fox", "a very long descriptor that keeps going on and on"];
    for model in ModelId::ALL {
        let by_mode: Vec<HashSet<RuleId>> = LearningMode::ALL
            .iter()
            .map(|m| {
                lint(model, subject, &descriptors, &["blurry"], m.strictness())
                    .into_iter()
                    .map(|w| w.rule)
                    .collect()
            })
            .collect();

        for set in &by_mode {
            assert!(!set.is_empty());
        }
        // Beginner sees at least everything intermediate sees, minus the
        // pro-oriented prose rule.
        let beginner = &by_mode[0];
        let intermediate = &by_mode[1];
        for rule in intermediate {
            if *rule != RuleId::ProseInDenseModel {
                assert!(beginner.contains(rule), "{model}: beginner missing {rule:?}");
            }
        }

        let again = lint(model, subject, &descriptors, &["blurry"], Strictness::Thorough);
        assert_eq!(
            again,
            lint(model, subject, &descriptors, &["blurry"], Strictness::Thorough)
        );
    }
}

#[test]
fn suggest_never_repeats_descriptors_or_subject() {
    let cases: [(&str, &[&str]); 4] = [
        ("", &[]),
        ("a fox", &["Golden Hour", "CLOSE-UP"]),
        ("shallow depth of field macro of a beetle", &["photorealistic"]),
        ("a castle", &["rule of thirds", "35mm lens", "serene mood"]),
    ];
    for (subject, descriptors) in cases {
        let subject_lower = subject.to_lowercase();
        for s in suggest(subject, descriptors) {
            assert!(
                !descriptors.iter().any(|d| d.eq_ignore_ascii_case(&s)),
                "{s} already a descriptor"
            );
            assert!(!subject_lower.contains(&s.to_lowercase()), "{s} in subject");
        }
    }
}

#[test]
fn tips_and_suggestions_are_deterministic() {
    for model in ModelId::ALL {
        assert_eq!(tips_for(model), tips_for(model));
    }
    assert_eq!(suggest("a fox", &["forest"]), suggest("a fox", &["forest"]));
}
