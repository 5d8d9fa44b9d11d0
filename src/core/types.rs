//! UI-001: Plan data model.
//!
//! Defines layout and component nodes, plans, and the diff records produced
//! when two plans are compared. Everything serializes to the plain nested
//! JSON form consumed by code emission and rendering; deserialization of
//! untrusted plans goes through [`crate::core::schema`] so every shape error
//! is reported with its precise error class.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Component props, insertion-ordered, JSON-valued.
pub type Props = IndexMap<String, serde_json::Value>;

// ============================================================================
// Kinds
// ============================================================================

/// Container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    Column,
    Row,
    Grid,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 3] = [Self::Column, Self::Row, Self::Grid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "Column",
            Self::Row => "Row",
            Self::Grid => "Grid",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Leaf-bearing UI element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Card,
    Button,
    Input,
    Table,
    Chart,
    Modal,
    Sidebar,
    Navbar,
    Text,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        Self::Card,
        Self::Button,
        Self::Input,
        Self::Table,
        Self::Chart,
        Self::Modal,
        Self::Sidebar,
        Self::Navbar,
        Self::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Table => "Table",
            Self::Chart => "Chart",
            Self::Modal => "Modal",
            Self::Sidebar => "Sidebar",
            Self::Navbar => "Navbar",
            Self::Text => "Text",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Positional role of a kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Layout,
    Component,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::Component => write!(f, "component"),
        }
    }
}

/// Any node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Layout(LayoutKind),
    Component(ComponentKind),
}

impl NodeKind {
    pub fn parse(name: &str) -> Option<Self> {
        LayoutKind::parse(name)
            .map(Self::Layout)
            .or_else(|| ComponentKind::parse(name).map(Self::Component))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout(k) => k.as_str(),
            Self::Component(k) => k.as_str(),
        }
    }

    pub fn role(&self) -> NodeRole {
        match self {
            Self::Layout(_) => NodeRole::Layout,
            Self::Component(_) => NodeRole::Component,
        }
    }

    /// Lower-case kind name used inside node ids.
    pub fn slug(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<LayoutKind> for NodeKind {
    fn from(k: LayoutKind) -> Self {
        Self::Layout(k)
    }
}

impl From<ComponentKind> for NodeKind {
    fn from(k: ComponentKind) -> Self {
        Self::Component(k)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Layout props. Only spacing and grid geometry; no styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
}

/// A container. Must hold at least one child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: LayoutKind,

    pub props: LayoutProps,

    pub children: Vec<Node>,
}

/// A UI element. May only nest further components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentNode {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    pub props: Props,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

/// Either node variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Layout(LayoutNode),
    Component(ComponentNode),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Self::Layout(n) => &n.id,
            Self::Component(n) => &n.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Layout(n) => NodeKind::Layout(n.kind),
            Self::Component(n) => NodeKind::Component(n.kind),
        }
    }

    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Self::Layout(n) => NodeRef::Layout(n),
            Self::Component(n) => NodeRef::Component(n),
        }
    }
}

/// Borrowed view over either node variant, used by every traversal.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Layout(&'a LayoutNode),
    Component(&'a ComponentNode),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Layout(n) => &n.id,
            Self::Component(n) => &n.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Layout(n) => NodeKind::Layout(n.kind),
            Self::Component(n) => NodeKind::Component(n.kind),
        }
    }

    /// Props as a JSON value (the form compared by the diff engine).
    pub fn props_value(&self) -> serde_json::Value {
        let value = match self {
            Self::Layout(n) => serde_json::to_value(&n.props),
            Self::Component(n) => serde_json::to_value(&n.props),
        };
        value.unwrap_or(serde_json::Value::Null)
    }

    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match self {
            Self::Layout(n) => n.children.iter().map(Node::view).collect(),
            Self::Component(n) => n.children.iter().map(NodeRef::Component).collect(),
        }
    }

    /// Depth-first, parent before children, children in array order.
    pub fn walk(&self, out: &mut Vec<NodeRef<'a>>) {
        out.push(*self);
        for child in self.children() {
            child.walk(out);
        }
    }
}

// ============================================================================
// Plan
// ============================================================================

/// How a plan relates to the plan it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationType {
    Create,
    Edit,
    Regenerate,
}

impl fmt::Display for ModificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Edit => write!(f, "edit"),
            Self::Regenerate => write!(f, "regenerate"),
        }
    }
}

/// A UI plan. The root is always a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Plan {
    pub modification_type: ModificationType,
    pub root: LayoutNode,
}

impl Plan {
    pub fn new(modification_type: ModificationType, root: LayoutNode) -> Self {
        Self {
            modification_type,
            root,
        }
    }

    /// All nodes, depth-first pre-order.
    pub fn nodes(&self) -> Vec<NodeRef<'_>> {
        let mut out = Vec::new();
        NodeRef::Layout(&self.root).walk(&mut out);
        out
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes().into_iter().map(|n| n.id()).collect()
    }

    pub fn find(&self, id: &str) -> Option<NodeRef<'_>> {
        self.nodes().into_iter().find(|n| n.id() == id)
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes().iter().filter(|n| n.kind() == kind).count()
    }
}

// ============================================================================
// Diff
// ============================================================================

/// Classification of one node across two plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffType {
    Added,
    Removed,
    Updated,
    Unchanged,
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "ADDED"),
            Self::Removed => write!(f, "REMOVED"),
            Self::Updated => write!(f, "UPDATED"),
            Self::Unchanged => write!(f, "UNCHANGED"),
        }
    }
}

/// Per-node diff record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDiff {
    #[serde(rename = "type")]
    pub diff_type: DiffType,

    pub node_id: String,

    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_props: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_props: Option<serde_json::Value>,
}

impl NodeDiff {
    /// One-line human-readable description.
    pub fn describe(&self) -> String {
        match self.diff_type {
            DiffType::Added => format!("{} ({}): added", self.node_id, self.kind),
            DiffType::Removed => format!("{} ({}): removed", self.node_id, self.kind),
            DiffType::Updated => {
                let keys = changed_prop_keys(self.old_props.as_ref(), self.new_props.as_ref());
                if keys.is_empty() {
                    format!("{} ({}): props changed", self.node_id, self.kind)
                } else {
                    format!("{} ({}): {} changed", self.node_id, self.kind, keys.join(", "))
                }
            }
            DiffType::Unchanged => format!("{} ({}): no changes", self.node_id, self.kind),
        }
    }
}

fn changed_prop_keys(
    old: Option<&serde_json::Value>,
    new: Option<&serde_json::Value>,
) -> Vec<String> {
    let empty = serde_json::Map::new();
    let old = old.and_then(|v| v.as_object()).unwrap_or(&empty);
    let new = new.and_then(|v| v.as_object()).unwrap_or(&empty);
    let mut keys: Vec<String> = old
        .keys()
        .chain(new.keys())
        .filter(|k| old.get(*k) != new.get(*k))
        .cloned()
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Full structural comparison of two plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDiff {
    pub modification_type: ModificationType,
    pub changed_node_ids: IndexSet<String>,
    pub diffs: IndexMap<String, NodeDiff>,
}

/// Summary counts over a [`PlanDiff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: u32,
    pub removed: u32,
    pub updated: u32,
    pub unchanged: u32,
}

impl PlanDiff {
    pub fn summary(&self) -> DiffSummary {
        let mut s = DiffSummary::default();
        for d in self.diffs.values() {
            match d.diff_type {
                DiffType::Added => s.added += 1,
                DiffType::Removed => s.removed += 1,
                DiffType::Updated => s.updated += 1,
                DiffType::Unchanged => s.unchanged += 1,
            }
        }
        s
    }

    pub fn of_type(&self, diff_type: DiffType) -> Vec<&NodeDiff> {
        self.diffs
            .values()
            .filter(|d| d.diff_type == diff_type)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(id: &str, title: &str) -> ComponentNode {
        let mut props = Props::new();
        props.insert("title".to_string(), json!(title));
        ComponentNode {
            id: id.to_string(),
            kind: ComponentKind::Card,
            props,
            children: vec![],
        }
    }

    fn sample_plan() -> Plan {
        Plan::new(
            ModificationType::Create,
            LayoutNode {
                id: "column-0".to_string(),
                kind: LayoutKind::Column,
                props: LayoutProps {
                    gap: Some(16),
                    ..LayoutProps::default()
                },
                children: vec![
                    Node::Component(card("column-0.card-0", "A")),
                    Node::Layout(LayoutNode {
                        id: "column-0.row-1".to_string(),
                        kind: LayoutKind::Row,
                        props: LayoutProps::default(),
                        children: vec![Node::Component(card("column-0.row-1.card-0", "B"))],
                    }),
                ],
            },
        )
    }

    #[test]
    fn test_ui001_kind_parse() {
        assert_eq!(NodeKind::parse("Row"), Some(NodeKind::Layout(LayoutKind::Row)));
        assert_eq!(
            NodeKind::parse("Navbar"),
            Some(NodeKind::Component(ComponentKind::Navbar))
        );
        assert_eq!(NodeKind::parse("navbar"), None);
        assert_eq!(NodeKind::parse("Iframe"), None);
    }

    #[test]
    fn test_ui001_kind_slug_and_role() {
        let k = NodeKind::Component(ComponentKind::Sidebar);
        assert_eq!(k.slug(), "sidebar");
        assert_eq!(k.role(), NodeRole::Component);
        assert_eq!(NodeKind::Layout(LayoutKind::Grid).role(), NodeRole::Layout);
    }

    #[test]
    fn test_ui001_plan_json_shape() {
        let json = serde_json::to_value(sample_plan()).unwrap();
        assert_eq!(json["modificationType"], "create");
        assert_eq!(json["root"]["type"], "Column");
        assert_eq!(json["root"]["props"]["gap"], 16);
        assert!(json["root"]["props"].get("padding").is_none());
        assert_eq!(json["root"]["children"][0]["type"], "Card");
        // leaf components omit empty children
        assert!(json["root"]["children"][0].get("children").is_none());
    }

    #[test]
    fn test_ui001_walk_order() {
        let plan = sample_plan();
        assert_eq!(
            plan.node_ids(),
            vec![
                "column-0",
                "column-0.card-0",
                "column-0.row-1",
                "column-0.row-1.card-0"
            ]
        );
        assert_eq!(plan.count_kind(NodeKind::Component(ComponentKind::Card)), 2);
        assert!(plan.find("column-0.row-1").is_some());
        assert!(plan.find("ghost").is_none());
    }

    #[test]
    fn test_ui001_modification_type_display() {
        assert_eq!(ModificationType::Create.to_string(), "create");
        assert_eq!(ModificationType::Regenerate.to_string(), "regenerate");
        assert_eq!(DiffType::Unchanged.to_string(), "UNCHANGED");
    }

    #[test]
    fn test_ui001_node_diff_describe() {
        let d = NodeDiff {
            diff_type: DiffType::Updated,
            node_id: "column-0.card-0".to_string(),
            kind: "Card".to_string(),
            old_props: Some(json!({"title": "A"})),
            new_props: Some(json!({"title": "B", "subtitle": "x"})),
        };
        assert_eq!(d.describe(), "column-0.card-0 (Card): subtitle, title changed");
    }

    #[test]
    fn test_ui001_diff_json_shape() {
        let mut diffs = IndexMap::new();
        diffs.insert(
            "column-0".to_string(),
            NodeDiff {
                diff_type: DiffType::Added,
                node_id: "column-0".to_string(),
                kind: "Column".to_string(),
                old_props: None,
                new_props: Some(json!({})),
            },
        );
        let diff = PlanDiff {
            modification_type: ModificationType::Create,
            changed_node_ids: IndexSet::from(["column-0".to_string()]),
            diffs,
        };
        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["changedNodeIds"], json!(["column-0"]));
        assert_eq!(json["diffs"]["column-0"]["type"], "added");
        assert_eq!(json["diffs"]["column-0"]["nodeId"], "column-0");
        assert!(json["diffs"]["column-0"].get("oldProps").is_none());
        assert_eq!(diff.summary().added, 1);
    }
}
