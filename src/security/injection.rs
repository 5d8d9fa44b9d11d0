//! UI-009: Injection deny patterns.
//!
//! A fixed, ordered set of patterns over the raw instruction: rule-override
//! phrasing, whitelist bypass, style/markup injection and code execution.
//! Any match fails closed; the first matching pattern's reason is reported.

use crate::core::error::PlanError;
use regex::Regex;
use std::sync::LazyLock;

/// Category of a deny pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionCategory {
    RuleOverride,
    WhitelistBypass,
    StyleInjection,
    Execution,
}

struct DenyPattern {
    category: InjectionCategory,
    reason: &'static str,
    regex: Regex,
}

const PATTERNS: &[(InjectionCategory, &str, &str)] = &[
    (
        InjectionCategory::RuleOverride,
        "attempt to override system rules",
        r"(?i)\b(ignore|disregard|forget|override|bypass)\b(\s+\w+){0,3}\s+(rules?|instructions?|prompts?|constraints?|guidelines?|restrictions?)\b",
    ),
    (
        InjectionCategory::RuleOverride,
        "attempt to override system rules",
        r"(?i)\b(you are now|act as|pretend (to be|you are)|system prompt)\b|\bnew instructions?\s*:",
    ),
    (
        InjectionCategory::WhitelistBypass,
        "attempt to use components outside the whitelist",
        r"(?i)\b(custom|arbitrary|unlisted|unsupported|any other|new)\s+(component|element|widget)s?\s+(type|kind)s?\b",
    ),
    (
        InjectionCategory::WhitelistBypass,
        "attempt to use components outside the whitelist",
        r"(?i)\b(outside|beyond|not in|ignore|skip|bypass)\s+(of\s+)?(the\s+)?(component\s+)?(whitelist|allow[- ]?list|allowed components)\b",
    ),
    (
        InjectionCategory::StyleInjection,
        "attempt to inject styles or markup",
        r#"(?i)(\bstyle\s*=|\bclass(name)?\s*=|\bclassname\b|<\s*(style|script|iframe|link)\b|\binline\s+(css|styles?)\b|\bdangerouslysetinnerhtml\b|\binnerhtml\b|\btailwind\b|\bcustom\s+css\b)"#,
    ),
    (
        InjectionCategory::Execution,
        "attempt to execute code",
        r#"(?i)(\b(eval|exec|setTimeout|Function)\s*\(|\brequire\s*\(\s*['"]|\bimport\s*\(|javascript\s*:|\bprocess\.env\b|\bdocument\.cookie\b|\b(execute|run)\s+(this\s+|the\s+|arbitrary\s+|some\s+)?(code|script|shell|command)s?\b)"#,
    ),
];

static DENY_PATTERNS: LazyLock<Vec<DenyPattern>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(category, reason, pattern)| DenyPattern {
            category: *category,
            reason: *reason,
            regex: Regex::new(pattern).expect("static deny pattern"),
        })
        .collect()
});

/// Verdict of an injection check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionCheck {
    pub safe: bool,
    pub reason: Option<String>,
    pub category: Option<InjectionCategory>,
}

/// Test raw text against every deny pattern, in order.
pub fn check_injection(text: &str) -> InjectionCheck {
    for p in DENY_PATTERNS.iter() {
        if p.regex.is_match(text) {
            return InjectionCheck {
                safe: false,
                reason: Some(p.reason.to_string()),
                category: Some(p.category),
            };
        }
    }
    InjectionCheck {
        safe: true,
        reason: None,
        category: None,
    }
}

/// Fail closed on any match.
pub fn ensure_safe(text: &str) -> Result<(), PlanError> {
    let check = check_injection(text);
    match check.reason {
        Some(reason) if !check.safe => {
            tracing::warn!(category = ?check.category, %reason, "instruction rejected");
            Err(PlanError::InjectionDetected { reason })
        }
        _ => Ok(()),
    }
}
