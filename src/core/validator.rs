//! UI-006: Plan validation.
//!
//! Enforces the whitelist and structural invariants on a typed tree:
//! - ids are id-safe and globally unique
//! - every kind is whitelisted for the position it occupies
//! - no forbidden (style-bearing or markup-injecting) prop keys, at any depth
//! - layouts hold at least one child
//!
//! Layout-in-component is unrepresentable in the typed tree; [`super::schema`]
//! reports it while converting untyped input.

use super::config::Whitelist;
use super::error::{PlanError, Violation};
use super::ids;
use super::schema;
use super::types::*;
use serde::Serialize;
use std::collections::HashSet;

/// Prop keys rejected on every kind (compared case-insensitively).
pub const FORBIDDEN_PROP_KEYS: &[&str] = &[
    "style",
    "styles",
    "classname",
    "class",
    "css",
    "sx",
    "tw",
    "dangerouslysetinnerhtml",
    "innerhtml",
    "outerhtml",
    "__html",
];

/// True when `key` is a forbidden prop key.
pub fn is_forbidden_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    FORBIDDEN_PROP_KEYS.contains(&lower.as_str())
}

/// Reject forbidden keys anywhere inside a JSON object, including nested
/// mappings and arrays of mappings.
pub fn check_forbidden_keys(
    map: &serde_json::Map<String, serde_json::Value>,
    kind: NodeKind,
    node_id: &str,
) -> Result<(), PlanError> {
    for (key, value) in map {
        if is_forbidden_key(key) {
            return Err(forbidden(key, kind, node_id));
        }
        check_forbidden_value(value, kind, node_id)?;
    }
    Ok(())
}

fn check_forbidden_value(
    value: &serde_json::Value,
    kind: NodeKind,
    node_id: &str,
) -> Result<(), PlanError> {
    match value {
        serde_json::Value::Object(m) => check_forbidden_keys(m, kind, node_id),
        serde_json::Value::Array(items) => items
            .iter()
            .try_for_each(|v| check_forbidden_value(v, kind, node_id)),
        _ => Ok(()),
    }
}

fn forbidden(key: &str, kind: NodeKind, node_id: &str) -> PlanError {
    PlanError::ForbiddenProp {
        key: key.to_string(),
        kind: kind.to_string(),
        node_id: node_id.to_string(),
    }
}

/// Reject any forbidden prop key, regardless of component kind.
pub fn validate_props(props: &Props, kind: NodeKind, node_id: &str) -> Result<(), PlanError> {
    for (key, value) in props {
        if is_forbidden_key(key) {
            return Err(forbidden(key, kind, node_id));
        }
        check_forbidden_value(value, kind, node_id)?;
    }
    Ok(())
}

/// Recursively check one subtree against the whitelist and structural invariants.
pub fn validate_structure(node: NodeRef<'_>, whitelist: &Whitelist) -> Result<(), PlanError> {
    let kind = node.kind();
    if !ids::is_valid_id(node.id()) {
        return Err(PlanError::structural(Violation::InvalidId, kind.as_str(), node.id()));
    }
    if !whitelist.allows(kind) {
        return Err(PlanError::UnknownComponent {
            kind: kind.to_string(),
            node_id: node.id().to_string(),
        });
    }
    match node {
        NodeRef::Layout(layout) => {
            if layout.children.is_empty() {
                return Err(PlanError::structural(
                    Violation::EmptyLayoutChildren,
                    kind.as_str(),
                    &layout.id,
                ));
            }
            for child in &layout.children {
                validate_structure(child.view(), whitelist)?;
            }
        }
        NodeRef::Component(component) => {
            validate_props(&component.props, kind, &component.id)?;
            for child in &component.children {
                validate_structure(NodeRef::Component(child), whitelist)?;
            }
        }
    }
    Ok(())
}

/// Validate a typed plan. Idempotent: a valid plan passes unchanged.
pub fn validate_plan(plan: Plan, whitelist: &Whitelist) -> Result<Plan, PlanError> {
    validate_structure(NodeRef::Layout(&plan.root), whitelist)?;

    let mut seen = HashSet::new();
    for node in plan.nodes() {
        if !seen.insert(node.id()) {
            return Err(PlanError::structural(
                Violation::DuplicateId,
                node.kind().as_str(),
                node.id(),
            ));
        }
    }

    Ok(plan)
}

/// Validate an untyped value: schema conversion then structural checks.
pub fn validate_plan_value(value: &serde_json::Value, whitelist: &Whitelist) -> Result<Plan, PlanError> {
    let plan = schema::plan_from_value(value)?;
    validate_plan(plan, whitelist).inspect_err(|e| {
        tracing::warn!(code = e.code(), error = %e, "plan rejected");
    })
}

/// Boundary view of a validation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Plan>,
}

impl From<Result<Plan, PlanError>> for ValidationReport {
    fn from(result: Result<Plan, PlanError>) -> Self {
        match result {
            Ok(plan) => Self {
                valid: true,
                error: None,
                code: None,
                data: Some(plan),
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
                code: Some(e.code().to_string()),
                data: None,
            },
        }
    }
}

/// Validate an arbitrary value and report in boundary form.
pub fn report(value: &serde_json::Value, whitelist: &Whitelist) -> ValidationReport {
    validate_plan_value(value, whitelist).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(id: &str) -> ComponentNode {
        ComponentNode {
            id: id.to_string(),
            kind: ComponentKind::Card,
            props: Props::from([("title".to_string(), json!("T"))]),
            children: vec![],
        }
    }

    fn plan_with(children: Vec<Node>) -> Plan {
        Plan::new(
            ModificationType::Create,
            LayoutNode {
                id: "column-0".to_string(),
                kind: LayoutKind::Column,
                props: LayoutProps::default(),
                children,
            },
        )
    }

    #[test]
    fn test_ui006_valid_plan() {
        let plan = plan_with(vec![Node::Component(card("column-0.card-0"))]);
        let out = validate_plan(plan.clone(), &Whitelist::default()).unwrap();
        assert_eq!(out, plan);
    }

    #[test]
    fn test_ui006_empty_layout() {
        let plan = plan_with(vec![]);
        let err = validate_plan(plan, &Whitelist::default()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::StructuralInvariantViolation {
                violation: Violation::EmptyLayoutChildren,
                ..
            }
        ));
    }

    #[test]
    fn test_ui006_invalid_id() {
        let plan = plan_with(vec![Node::Component(card("bad id!"))]);
        let err = validate_plan(plan, &Whitelist::default()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::StructuralInvariantViolation {
                violation: Violation::InvalidId,
                ..
            }
        ));
    }

    #[test]
    fn test_ui006_duplicate_id() {
        let plan = plan_with(vec![
            Node::Component(card("column-0.card-0")),
            Node::Component(card("column-0.card-0")),
        ]);
        let err = validate_plan(plan, &Whitelist::default()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::StructuralInvariantViolation {
                violation: Violation::DuplicateId,
                ..
            }
        ));
    }

    #[test]
    fn test_ui006_whitelist_enforced() {
        let plan = plan_with(vec![Node::Component(card("column-0.card-0"))]);
        let err = validate_plan(plan, &Whitelist::only(&["Column"])).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnknownComponent {
                kind: "Card".into(),
                node_id: "column-0.card-0".into()
            }
        );
    }

    #[test]
    fn test_ui006_forbidden_prop_typed() {
        let mut c = card("column-0.card-0");
        c.props.insert("className".to_string(), json!("p-4"));
        let err = validate_plan(plan_with(vec![Node::Component(c)]), &Whitelist::default()).unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN_PROP");
    }

    #[test]
    fn test_ui006_forbidden_prop_nested() {
        let mut c = card("column-0.card-0");
        c.props
            .insert("data".to_string(), json!([{"label": "a", "STYLE": "x"}]));
        let err = validate_props(&c.props, NodeKind::Component(ComponentKind::Card), &c.id).unwrap_err();
        assert!(matches!(err, PlanError::ForbiddenProp { ref key, .. } if key == "STYLE"));
    }

    #[test]
    fn test_ui006_forbidden_in_grandchild() {
        let mut inner = card("column-0.card-0.text-0");
        inner.kind = ComponentKind::Text;
        inner
            .props
            .insert("dangerouslySetInnerHTML".to_string(), json!({"__html": "<b>"}));
        let mut outer = card("column-0.card-0");
        outer.children.push(inner);
        let err = validate_plan(plan_with(vec![Node::Component(outer)]), &Whitelist::default()).unwrap_err();
        assert!(matches!(err, PlanError::ForbiddenProp { ref node_id, .. } if node_id == "column-0.card-0.text-0"));
    }

    #[test]
    fn test_ui006_report_valid_and_invalid() {
        let plan = plan_with(vec![Node::Component(card("column-0.card-0"))]);
        let value = serde_json::to_value(&plan).unwrap();
        let r = report(&value, &Whitelist::default());
        assert!(r.valid);
        assert_eq!(r.data, Some(plan));

        let r = report(&json!({"root": 1}), &Whitelist::default());
        assert!(!r.valid);
        assert_eq!(r.code.as_deref(), Some("SCHEMA_VIOLATION"));
        assert!(r.data.is_none());
    }

    #[test]
    fn test_ui006_report_json_shape() {
        let r = report(&json!(null), &Whitelist::default());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("data").is_none());
        assert!(json["error"].as_str().unwrap().contains("object"));
    }

    #[test]
    fn test_ui006_forbidden_keys_case_insensitive() {
        assert!(is_forbidden_key("Style"));
        assert!(is_forbidden_key("CLASSNAME"));
        assert!(!is_forbidden_key("title"));
        assert!(!is_forbidden_key("styleguide"));
    }
}
