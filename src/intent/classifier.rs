//! UI-014: Intent classification.
//!
//! Steps run in strict order and the first that fires wins:
//!
//! 1. prior plan + resynthesis vocabulary → `regenerate`
//! 2. prior plan + mutation vocabulary → `edit` (extraction only)
//! 3. final-directive minimality
//! 4. general minimality
//! 5. title extraction for a minimal plan
//! 6. negation-aware feature flags
//!
//! Classification never fails; text with no recognizable intent falls
//! through to an empty feature set, which selects the default template.

use super::edits::{self, EditRequest};
use super::fields::{self, FormField};
use super::minimality::{self, MinimalitySource};
use super::vocabulary::{self, Concept};
use crate::core::config::Config;
use crate::core::types::{ModificationType, Plan};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RESYNTHESIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(start(ing)?\s+(over|again|fresh)|from\s+scratch|completely|regenerate|redo|brand[\s-]+new|rebuild)\b",
    )
    .expect("static resynthesis pattern")
});

static MUTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(add|modify|change|update|remove|delete)\b").expect("static mutation pattern")
});

/// Resolved structural feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    pub required: BTreeSet<Concept>,
    /// Concepts the text explicitly excludes.
    pub negated: BTreeSet<Concept>,
}

impl Features {
    pub fn resolve(text: &str) -> Self {
        let mut features = Self::default();
        for concept in Concept::ALL.into_iter().filter(|c| vocabulary::mentioned(*c, text)) {
            if vocabulary::negated(concept, text) {
                features.negated.insert(concept);
            } else {
                features.required.insert(concept);
            }
        }
        features
    }

    pub fn from_concepts(concepts: &[Concept]) -> Self {
        Self {
            required: concepts.iter().copied().collect(),
            negated: BTreeSet::new(),
        }
    }

    pub fn has(&self, concept: Concept) -> bool {
        self.required.contains(&concept)
    }

    pub fn excludes(&self, concept: Concept) -> bool {
        self.negated.contains(&concept)
    }
}

/// What the instruction asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Minimal {
        title: String,
        source: MinimalitySource,
    },
    Structured {
        features: Features,
        fields: Vec<FormField>,
    },
    Edit(EditRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub modification_type: ModificationType,
    #[serde(flatten)]
    pub intent: Intent,
}

/// Classify sanitized instruction text against an optional prior plan.
pub fn classify(text: &str, previous: Option<&Plan>, config: &Config) -> Classification {
    let classification = match previous {
        Some(_) if RESYNTHESIS.is_match(text) => Classification {
            modification_type: ModificationType::Regenerate,
            intent: synthesis_intent(text, config),
        },
        Some(_) if MUTATION.is_match(text) => Classification {
            modification_type: ModificationType::Edit,
            intent: Intent::Edit(edits::extract(text, &config.limits)),
        },
        _ => Classification {
            modification_type: ModificationType::Create,
            intent: synthesis_intent(text, config),
        },
    };
    tracing::debug!(
        modification_type = %classification.modification_type,
        intent = ?classification.intent,
        "classified instruction"
    );
    classification
}

fn synthesis_intent(text: &str, config: &Config) -> Intent {
    if let Some(source) = minimality::detect(text) {
        let title = minimality::extract_title(text)
            .unwrap_or_else(|| config.placeholders.minimal_title.clone());
        return Intent::Minimal { title, source };
    }
    Intent::Structured {
        features: Features::resolve(text),
        fields: fields::detect_fields(text),
    }
}
