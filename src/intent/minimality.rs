//! UI-011: Minimality detection and title extraction.
//!
//! A minimality directive in the last one or two clauses overrides earlier
//! structural requests in the same instruction. Anywhere in the text, a
//! narrower set of phrases ("only one card", "nothing else", "minimal")
//! also triggers it. Both are suppressed when the instruction requires
//! complex structure; "minimal" then means "simplify what was asked for".

use super::vocabulary;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Where minimality was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimalitySource {
    FinalDirective,
    General,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static minimality pattern"))
        .collect()
}

static CLAUSE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;\n]+").expect("static pattern"));

static FINAL_DIRECTIVES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bnothing\s+else\b",
        r"(?i)\b(only|just)\s+(one|a\s+single|a|1)\s+card\b",
        r"(?i)\bsingle\s+card\b",
        r"(?i)\bminimal(ist|istic|ly)?\b",
        r"(?i)\bkeep\s+it\s+(simple|minimal|clean|basic)\b",
        r"(?i)\bthat['’]?s\s+(it|all)\b",
    ])
});

static GENERAL_DIRECTIVES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\bonly\s+(one|a\s+single|1)\s+card\b",
        r"(?i)\bone\s+card\b.*\bnothing\s+else\b",
        r"(?i)\bnothing\s+else\b",
        r"(?i)\bminimal(ist|istic|ly)?\b",
    ])
});

/// Each opening quote only closes on its own partner.
const QUOTED: &str = r#"(?:"([^"]+)"|“([^”]+)”|'([^']+)'|‘([^’]+)’)"#;

/// Title patterns, first match wins: quoted-after-titled, bare-after-titled,
/// quoted-after-title, bare-after-title, quoted-after-card.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let bare = r"([A-Za-z0-9][\w-]*)";
    compile(&[
        &format!(r"(?i)\btitled\s*[:=]?\s*{}", QUOTED),
        &format!(r"(?i)\btitled\s*[:=]?\s*{}", bare),
        &format!(r"(?i)\btitle\b\s*[:=]?\s*{}", QUOTED),
        &format!(r"(?i)\btitle\b\s*[:=]?\s*{}", bare),
        r#"(?i)\bcard\s*[:=]?\s*(?:"([^"]+)"|“([^”]+)”)"#,
    ])
});

const TITLE_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "with", "of", "that", "which", "is", "for", "to", "nothing", "only",
];

/// Split text into trimmed, non-empty sentence-level clauses.
pub fn clauses(text: &str) -> Vec<&str> {
    CLAUSE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Detect minimality, honoring final-directive precedence and the
/// complex-structure override.
pub fn detect(text: &str) -> Option<MinimalitySource> {
    if vocabulary::has_complex_structure(text) {
        return None;
    }

    let parts = clauses(text);
    let tail = &parts[parts.len().saturating_sub(2)..];
    if tail
        .iter()
        .any(|clause| FINAL_DIRECTIVES.iter().any(|re| re.is_match(clause)))
    {
        return Some(MinimalitySource::FinalDirective);
    }

    if GENERAL_DIRECTIVES.iter().any(|re| re.is_match(text)) {
        return Some(MinimalitySource::General);
    }

    None
}

/// Extract a card title, first pattern match wins.
pub fn extract_title(text: &str) -> Option<String> {
    for re in TITLE_PATTERNS.iter() {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let Some(m) = caps.iter().skip(1).flatten().next() else {
            continue;
        };
        let title = m.as_str().trim();
        if title.is_empty() || TITLE_STOPWORDS.contains(&title.to_ascii_lowercase().as_str()) {
            continue;
        }
        return Some(title.to_string());
    }
    None
}
