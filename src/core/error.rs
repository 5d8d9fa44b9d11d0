//! UI-002: Error taxonomy.
//!
//! Every failure is terminal for the current call. Public entry points
//! return `Result<_, PlanError>`; callers map [`PlanError::http_status`]
//! onto their transport.

use std::fmt;
use thiserror::Error;

/// Structural invariant that a tree broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    InvalidId,
    EmptyLayoutChildren,
    LayoutNestedInComponent,
    DuplicateId,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "invalid id"),
            Self::EmptyLayoutChildren => write!(f, "layout has no children"),
            Self::LayoutNestedInComponent => write!(f, "layout nested inside a component"),
            Self::DuplicateId => write!(f, "duplicate id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("injection detected: {reason}")]
    InjectionDetected { reason: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("schema violation at {path}: {message}")]
    SchemaViolation { path: String, message: String },

    #[error("forbidden prop '{key}' on {kind} '{node_id}'")]
    ForbiddenProp {
        key: String,
        kind: String,
        node_id: String,
    },

    #[error("unknown component '{kind}' at '{node_id}'")]
    UnknownComponent { kind: String, node_id: String },

    #[error("{violation} on {kind} '{node_id}'")]
    StructuralInvariantViolation {
        violation: Violation,
        kind: String,
        node_id: String,
    },

    #[error("plan generation failed: {message}")]
    PlanGenerationFailure { message: String },
}

impl PlanError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn structural(violation: Violation, kind: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self::StructuralInvariantViolation {
            violation,
            kind: kind.into(),
            node_id: node_id.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InjectionDetected { .. } => "INJECTION_DETECTED",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::SchemaViolation { .. } => "SCHEMA_VIOLATION",
            Self::ForbiddenProp { .. } => "FORBIDDEN_PROP",
            Self::UnknownComponent { .. } => "UNKNOWN_COMPONENT",
            Self::StructuralInvariantViolation { .. } => "STRUCTURAL_INVARIANT_VIOLATION",
            Self::PlanGenerationFailure { .. } => "PLAN_GENERATION_FAILURE",
        }
    }

    /// Only generation failures are server-side; everything else is the caller's input.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InjectionDetected { .. } | Self::InvalidInput { .. } => 400,
            Self::SchemaViolation { .. }
            | Self::ForbiddenProp { .. }
            | Self::UnknownComponent { .. }
            | Self::StructuralInvariantViolation { .. } => 422,
            Self::PlanGenerationFailure { .. } => 500,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.http_status() >= 500
    }
}
