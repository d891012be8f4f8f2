//! Table-driven suggestions for descriptors the prompt is missing.
//!
//! Candidates are grouped into [`ModifierCategory`] entries in priority
//! order. A category already covered by the subject or an existing
//! descriptor (any of its keywords appears as a whole word or phrase)
//! contributes nothing; otherwise
//! its candidates are offered unless the user already has them or the
//! subject already says them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{contains_phrase, contains_token, normalize};

/// A group of related modifier candidates.
#[derive(Debug, Clone, Copy)]
pub struct ModifierCategory {
    pub name: &'static str,
    /// Words whose presence means the category is already addressed.
    pub keywords: &'static [&'static str],
    /// Candidates in the order they are offered.
    pub candidates: &'static [&'static str],
}

/// Built-in categories in priority order.
pub const CATEGORIES: &[ModifierCategory] = &[
    ModifierCategory {
        name: "lighting",
        keywords: &["light", "glow", "sunset", "golden hour", "shadow", "backlit"],
        candidates: &["soft natural lighting", "golden hour", "dramatic rim light"],
    },
    ModifierCategory {
        name: "composition",
        keywords: &["shot", "close-up", "composition", "framing", "angle", "view"],
        candidates: &["rule of thirds", "close-up", "wide establishing shot"],
    },
    ModifierCategory {
        name: "medium",
        keywords: &[
            "photo",
            "painting",
            "illustration",
            "render",
            "watercolor",
            "sketch",
            "3d",
        ],
        candidates: &["photorealistic", "digital painting", "watercolor illustration"],
    },
    ModifierCategory {
        name: "camera",
        keywords: &[
            "lens",
            "35mm",
            "50mm",
            "85mm",
            "depth of field",
            "bokeh",
            "aperture",
            "camera",
        ],
        candidates: &["35mm lens", "shallow depth of field", "85mm portrait lens"],
    },
    ModifierCategory {
        name: "mood",
        keywords: &["mood", "atmosphere", "cinematic", "serene", "moody", "dreamy"],
        candidates: &["cinematic atmosphere", "serene mood", "moody tones"],
    },
];

/// Limits applied to the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum candidates taken from one category. Default: `2`.
    pub per_category: usize,
    /// Maximum total suggestions. Default: `8`.
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            per_category: 2,
            limit: 8,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Suggester {
    config: SuggestConfig,
}

impl Suggester {
    pub fn new(config: SuggestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Suggested descriptor tokens not yet present, in category-priority order.
    pub fn suggest<S: AsRef<str>>(&self, subject: &str, descriptors: &[S]) -> Vec<String> {
        let subject = subject.trim();
        let subject_lower = subject.to_lowercase();
        let descriptors = normalize(descriptors);

        let mentions = |keyword: &str| {
            contains_phrase(subject, keyword)
                || descriptors.iter().any(|d| contains_phrase(d, keyword))
        };

        let mut out = Vec::new();
        for category in CATEGORIES {
            if out.len() >= self.config.limit {
                break;
            }
            if category.keywords.iter().any(|&k| mentions(k)) {
                debug!("Modifier category '{}' already covered", category.name);
                continue;
            }
            let picked = category
                .candidates
                .iter()
                .filter(|c| !contains_token(&descriptors, c))
                .filter(|c| !subject_lower.contains(&c.to_lowercase()))
                .take(self.config.per_category);
            for candidate in picked {
                if out.len() >= self.config.limit {
                    break;
                }
                out.push((*candidate).to_string());
            }
        }
        out
    }
}

/// Suggest with the default limits.
pub fn suggest<S: AsRef<str>>(subject: &str, descriptors: &[S]) -> Vec<String> {
    Suggester::default().suggest(subject, descriptors)
}
