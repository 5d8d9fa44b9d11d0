//! UI-022: Instruction → validated plan.
//!
//! injection check → sanitation → injection check → classification →
//! synthesis or patching → validation. Nothing half-built is ever returned.

use super::config::Config;
use super::error::PlanError;
use super::patcher;
use super::types::Plan;
use super::validator;
use crate::intent::classifier::{self, Intent};
use crate::security::{injection, input};
use crate::templates;
use serde::Serialize;

pub use super::differ::diff_plans;

/// Compile an instruction, optionally against a prior plan.
pub fn plan_from_intent(
    text: &str,
    previous: Option<&Plan>,
    config: &Config,
) -> Result<Plan, PlanError> {
    injection::ensure_safe(text)?;
    let clean = input::sanitize(text, &config.limits)?;
    injection::ensure_safe(&clean)?;

    let classification = classifier::classify(&clean, previous, config);
    let plan = match (&classification.intent, previous) {
        (Intent::Edit(request), Some(prior)) => {
            patcher::apply_edits(request, prior, &config.placeholders)
        }
        (intent, _) => Plan::new(
            classification.modification_type,
            templates::synthesize(intent, &config.placeholders)?,
        ),
    };

    validator::validate_plan(plan, &config.whitelist).inspect_err(|e| {
        tracing::warn!(code = e.code(), error = %e, "generated plan rejected");
    })
}

/// Boundary view of a planning result: plan XOR error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<Result<Plan, PlanError>> for PlanResponse {
    fn from(result: Result<Plan, PlanError>) -> Self {
        match result {
            Ok(plan) => Self {
                plan: Some(plan),
                error: None,
                code: None,
            },
            Err(e) => Self {
                plan: None,
                error: Some(e.to_string()),
                code: Some(e.code().to_string()),
            },
        }
    }
}

/// [`plan_from_intent`] in boundary form.
pub fn respond(text: &str, previous: Option<&Plan>, config: &Config) -> PlanResponse {
    plan_from_intent(text, previous, config).into()
}
