//! UI-005: Schema-level conversion of untyped JSON into a typed [`Plan`].
//!
//! Plans arriving from outside (a caller-supplied prior plan, a file handed to
//! `uiplan validate`) are plain JSON. Conversion walks the value with a path so
//! every mismatch carries its location, and reports unknown kinds, forbidden
//! props and layouts nested in components with their own error classes.

use super::error::{PlanError, Violation};
use super::types::*;
use super::validator;
use serde_json::{Map, Value};

/// Parse a plan from JSON text.
pub fn parse_plan(json: &str) -> Result<Plan, PlanError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PlanError::schema("$", format!("invalid JSON: {}", e)))?;
    plan_from_value(&value)
}

/// Serialize a plan to pretty JSON.
pub fn plan_to_json(plan: &Plan) -> Result<String, PlanError> {
    serde_json::to_string_pretty(plan)
        .map_err(|e| PlanError::schema("$", format!("serialize error: {}", e)))
}

/// Convert an untyped value into a plan.
pub fn plan_from_value(value: &Value) -> Result<Plan, PlanError> {
    let obj = value
        .as_object()
        .ok_or_else(|| PlanError::schema("$", "plan must be an object"))?;

    for key in obj.keys() {
        if key != "modificationType" && key != "root" {
            return Err(PlanError::schema(key.as_str(), "unexpected field"));
        }
    }

    let modification_type = match obj.get("modificationType") {
        Some(Value::String(s)) => match s.as_str() {
            "create" => ModificationType::Create,
            "edit" => ModificationType::Edit,
            "regenerate" => ModificationType::Regenerate,
            other => {
                return Err(PlanError::schema(
                    "modificationType",
                    format!("expected create, edit or regenerate, got '{}'", other),
                ))
            }
        },
        Some(_) => return Err(PlanError::schema("modificationType", "expected a string")),
        None => return Err(PlanError::schema("modificationType", "missing field")),
    };

    let root_value = obj
        .get("root")
        .ok_or_else(|| PlanError::schema("root", "missing field"))?;
    let root = match node_from_value(root_value, "root")? {
        Node::Layout(layout) => layout,
        Node::Component(c) => {
            return Err(PlanError::schema(
                "root",
                format!("root must be a layout, got {}", c.kind),
            ))
        }
    };

    Ok(Plan::new(modification_type, root))
}

impl TryFrom<Value> for Plan {
    type Error = PlanError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        plan_from_value(&value)
    }
}

struct RawNode<'a> {
    id: String,
    kind: NodeKind,
    props: Map<String, Value>,
    children: Option<&'a Vec<Value>>,
}

fn raw_node<'a>(value: &'a Value, path: &str) -> Result<RawNode<'a>, PlanError> {
    let obj = value
        .as_object()
        .ok_or_else(|| PlanError::schema(path, "node must be an object"))?;

    let id = match obj.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(PlanError::schema(format!("{}.id", path), "expected a string")),
        None => return Err(PlanError::schema(format!("{}.id", path), "missing field")),
    };

    let kind_name = match obj.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(PlanError::schema(format!("{}.type", path), "expected a string")),
        None => return Err(PlanError::schema(format!("{}.type", path), "missing field")),
    };
    let kind = NodeKind::parse(kind_name).ok_or_else(|| PlanError::UnknownComponent {
        kind: kind_name.to_string(),
        node_id: id.clone(),
    })?;

    for key in obj.keys() {
        match key.as_str() {
            "id" | "type" | "props" | "children" => {}
            other if validator::is_forbidden_key(other) => {
                return Err(PlanError::ForbiddenProp {
                    key: other.to_string(),
                    kind: kind.to_string(),
                    node_id: id,
                })
            }
            other => {
                return Err(PlanError::schema(
                    format!("{}.{}", path, other),
                    "unexpected field",
                ))
            }
        }
    }

    let props = match obj.get("props") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(m)) => m.clone(),
        Some(_) => return Err(PlanError::schema(format!("{}.props", path), "expected an object")),
    };
    validator::check_forbidden_keys(&props, kind, &id)?;

    let children = match obj.get("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            return Err(PlanError::schema(
                format!("{}.children", path),
                "expected an array",
            ))
        }
    };

    Ok(RawNode {
        id,
        kind,
        props,
        children,
    })
}

fn node_from_value(value: &Value, path: &str) -> Result<Node, PlanError> {
    let raw = raw_node(value, path)?;
    match raw.kind {
        NodeKind::Layout(kind) => {
            let props = layout_props(&raw.props, &format!("{}.props", path))?;
            let items = raw.children.ok_or_else(|| {
                PlanError::schema(format!("{}.children", path), "layout requires children")
            })?;
            let children = items
                .iter()
                .enumerate()
                .map(|(i, v)| node_from_value(v, &format!("{}.children[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Layout(LayoutNode {
                id: raw.id,
                kind,
                props,
                children,
            }))
        }
        NodeKind::Component(kind) => {
            let children = match raw.children {
                None => Vec::new(),
                Some(items) => items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| component_from_value(v, &format!("{}.children[{}]", path, i)))
                    .collect::<Result<Vec<_>, _>>()?,
            };
            Ok(Node::Component(ComponentNode {
                id: raw.id,
                kind,
                props: raw.props.into_iter().collect(),
                children,
            }))
        }
    }
}

fn component_from_value(value: &Value, path: &str) -> Result<ComponentNode, PlanError> {
    match node_from_value(value, path)? {
        Node::Component(c) => Ok(c),
        Node::Layout(l) => Err(PlanError::structural(
            Violation::LayoutNestedInComponent,
            l.kind.as_str(),
            l.id,
        )),
    }
}

fn layout_props(props: &Map<String, Value>, path: &str) -> Result<LayoutProps, PlanError> {
    let mut out = LayoutProps::default();
    for (key, value) in props {
        let slot = match key.as_str() {
            "gap" => &mut out.gap,
            "padding" => &mut out.padding,
            "columns" => &mut out.columns,
            other => {
                return Err(PlanError::schema(
                    format!("{}.{}", path, other),
                    "unknown layout prop (allowed: gap, padding, columns)",
                ))
            }
        };
        if value.is_null() {
            continue;
        }
        let n = value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                PlanError::schema(
                    format!("{}.{}", path, key),
                    "expected a non-negative integer",
                )
            })?;
        *slot = Some(n);
    }
    Ok(out)
}
