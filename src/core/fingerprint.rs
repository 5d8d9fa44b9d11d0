//! UI-021: BLAKE3 plan fingerprints.

use super::error::PlanError;
use super::types::Plan;

/// Hash a string. Returns `"blake3:{hex}"`.
pub fn hash_string(s: &str) -> String {
    format!("blake3:{}", blake3::hash(s.as_bytes()).to_hex())
}

/// Fingerprint of a plan's compact JSON form. Equal plans hash equal.
pub fn fingerprint(plan: &Plan) -> Result<String, PlanError> {
    let json = serde_json::to_string(plan).map_err(|e| PlanError::PlanGenerationFailure {
        message: format!("cannot serialize plan: {}", e),
    })?;
    Ok(hash_string(&json))
}
