//! UI-007: Structural diff of a previous plan against the current one.
//!
//! Both trees are flattened to id → node maps in depth-first order; the
//! classification itself is keyed by id and does not depend on order.

use super::types::*;
use indexmap::{IndexMap, IndexSet};

struct FlatNode {
    kind: NodeKind,
    props: serde_json::Value,
}

fn flatten(plan: &Plan) -> IndexMap<String, FlatNode> {
    plan.nodes()
        .into_iter()
        .map(|n| {
            (
                n.id().to_string(),
                FlatNode {
                    kind: n.kind(),
                    props: n.props_value(),
                },
            )
        })
        .collect()
}

/// Diff two plans.
pub fn diff_plans(previous: Option<&Plan>, current: &Plan) -> PlanDiff {
    let mut changed = IndexSet::new();
    let mut diffs = IndexMap::new();

    if current.modification_type == ModificationType::Regenerate {
        for id in current.node_ids() {
            changed.insert(id.to_string());
        }
        return PlanDiff {
            modification_type: current.modification_type,
            changed_node_ids: changed,
            diffs,
        };
    }

    let after = flatten(current);
    let before = match previous {
        Some(p) => flatten(p),
        None => IndexMap::new(),
    };

    for (id, node) in &after {
        let diff = match before.get(id) {
            None => NodeDiff {
                diff_type: DiffType::Added,
                node_id: id.clone(),
                kind: node.kind.to_string(),
                old_props: None,
                new_props: Some(node.props.clone()),
            },
            Some(old) => {
                let diff_type = if serialized(&old.props) == serialized(&node.props) {
                    DiffType::Unchanged
                } else {
                    DiffType::Updated
                };
                NodeDiff {
                    diff_type,
                    node_id: id.clone(),
                    kind: node.kind.to_string(),
                    old_props: Some(old.props.clone()),
                    new_props: Some(node.props.clone()),
                }
            }
        };
        if diff.diff_type != DiffType::Unchanged {
            changed.insert(id.clone());
        }
        diffs.insert(id.clone(), diff);
    }

    for (id, node) in &before {
        if after.contains_key(id) {
            continue;
        }
        changed.insert(id.clone());
        diffs.insert(
            id.clone(),
            NodeDiff {
                diff_type: DiffType::Removed,
                node_id: id.clone(),
                kind: node.kind.to_string(),
                old_props: Some(node.props.clone()),
                new_props: None,
            },
        );
    }

    PlanDiff {
        modification_type: current.modification_type,
        changed_node_ids: changed,
        diffs,
    }
}

fn serialized(v: &serde_json::Value) -> String {
    serde_json::to_string(v).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(id: &str, kind: ComponentKind, title: &str) -> Node {
        Node::Component(ComponentNode {
            id: id.to_string(),
            kind,
            props: Props::from([("title".to_string(), json!(title))]),
            children: vec![],
        })
    }

    fn make_plan(mt: ModificationType, children: Vec<Node>) -> Plan {
        Plan::new(
            mt,
            LayoutNode {
                id: "column-0".to_string(),
                kind: LayoutKind::Column,
                props: LayoutProps::default(),
                children,
            },
        )
    }

    #[test]
    fn test_ui007_no_previous_all_added() {
        let p = make_plan(
            ModificationType::Create,
            vec![leaf("column-0.card-0", ComponentKind::Card, "A")],
        );
        let d = diff_plans(None, &p);
        assert_eq!(d.summary().added, 2);
        assert_eq!(d.changed_node_ids.len(), 2);
        assert_eq!(
            d.changed_node_ids.iter().collect::<Vec<_>>(),
            vec!["column-0", "column-0.card-0"]
        );
    }

    #[test]
    fn test_ui007_regenerate_marks_everything() {
        let prev = make_plan(
            ModificationType::Create,
            vec![leaf("column-0.card-0", ComponentKind::Card, "A")],
        );
        let cur = make_plan(
            ModificationType::Regenerate,
            vec![leaf("column-0.card-0", ComponentKind::Card, "A")],
        );
        let d = diff_plans(Some(&prev), &cur);
        assert_eq!(d.changed_node_ids.len(), 2);
        assert!(d.diffs.is_empty());
        assert_eq!(d.modification_type, ModificationType::Regenerate);
    }

    #[test]
    fn test_ui007_classification() {
        let prev = make_plan(
            ModificationType::Create,
            vec![
                leaf("column-0.card-0", ComponentKind::Card, "A"),
                leaf("column-0.sidebar-1", ComponentKind::Sidebar, "Nav"),
            ],
        );
        let cur = make_plan(
            ModificationType::Edit,
            vec![
                leaf("column-0.card-0", ComponentKind::Card, "B"),
                leaf("column-0.modal-2", ComponentKind::Modal, "Settings"),
            ],
        );
        let d = diff_plans(Some(&prev), &cur);
        assert_eq!(d.diffs["column-0"].diff_type, DiffType::Unchanged);
        assert_eq!(d.diffs["column-0.card-0"].diff_type, DiffType::Updated);
        assert_eq!(d.diffs["column-0.modal-2"].diff_type, DiffType::Added);
        assert_eq!(d.diffs["column-0.sidebar-1"].diff_type, DiffType::Removed);
        assert_eq!(d.diffs["column-0.sidebar-1"].kind, "Sidebar");
        assert!(!d.changed_node_ids.contains("column-0"));
        let s = d.summary();
        assert_eq!((s.added, s.removed, s.updated, s.unchanged), (1, 1, 1, 1));
    }

    #[test]
    fn test_ui007_identical_plans_unchanged() {
        let p = make_plan(
            ModificationType::Edit,
            vec![leaf("column-0.card-0", ComponentKind::Card, "A")],
        );
        let d = diff_plans(Some(&p), &p);
        assert!(d.changed_node_ids.is_empty());
        assert_eq!(d.of_type(DiffType::Unchanged).len(), 2);
    }

    #[test]
    fn test_ui007_order_independent_classification() {
        let a = leaf("column-0.card-0", ComponentKind::Card, "A");
        let b = leaf("column-0.card-1", ComponentKind::Card, "B");
        let prev = make_plan(ModificationType::Create, vec![a.clone(), b.clone()]);
        let cur = make_plan(ModificationType::Edit, vec![b, a]);
        let d = diff_plans(Some(&prev), &cur);
        assert!(d.changed_node_ids.is_empty());
    }

    #[test]
    fn test_ui007_deterministic() {
        let prev = make_plan(
            ModificationType::Create,
            vec![leaf("column-0.card-0", ComponentKind::Card, "A")],
        );
        let cur = make_plan(
            ModificationType::Edit,
            vec![leaf("column-0.table-0", ComponentKind::Table, "T")],
        );
        let d1 = serde_json::to_string(&diff_plans(Some(&prev), &cur)).unwrap();
        let d2 = serde_json::to_string(&diff_plans(Some(&prev), &cur)).unwrap();
        assert_eq!(d1, d2);
    }
}
