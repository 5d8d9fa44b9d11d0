//! UI-020: Edit-mode patching.
//!
//! Builds a new plan from the prior one; the caller's plan is only read.
//! Nodes that are neither removed nor added keep their id, props and
//! children. Output is always tagged `edit`, even for a no-op request.

use super::config::Placeholders;
use super::differ::diff_plans;
use super::ids;
use super::types::*;
use crate::intent::edits::{Addition, EditRequest};
use crate::templates::builder::{self, ComponentDraft};
use std::collections::HashSet;

/// Apply an edit request to a prior plan.
pub fn apply_edits(request: &EditRequest, prior: &Plan, placeholders: &Placeholders) -> Plan {
    let mut root = without_kinds(&prior.root, &request.removals);

    if !request.removals.is_empty() {
        let stripped = Plan::new(ModificationType::Edit, root.clone());
        if let Some(collapsed) = elide_wrapper(prior, &stripped) {
            tracing::debug!(from = %root.id, to = %collapsed.id, "collapsed wrapper");
            root = collapsed;
        }
    }

    if !request.additions.is_empty() {
        let mut taken: HashSet<String> = Plan::new(ModificationType::Edit, root.clone())
            .node_ids()
            .into_iter()
            .map(String::from)
            .collect();
        for addition in &request.additions {
            let draft = addition_draft(addition, placeholders);
            let kind = NodeKind::Component(draft.kind);
            let id = ids::next_free_id(&root.id, kind, root.children.len(), &taken);
            tracing::debug!(%id, kind = %kind, "appending node");
            taken.insert(id.clone());
            root.children.push(Node::Component(draft.build_with_id(id)));
        }
    }

    Plan::new(ModificationType::Edit, root)
}

/// Copy of `layout` with every component of the given kinds dropped, at any depth.
fn without_kinds(layout: &LayoutNode, kinds: &[ComponentKind]) -> LayoutNode {
    LayoutNode {
        id: layout.id.clone(),
        kind: layout.kind,
        props: layout.props.clone(),
        children: layout
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Layout(l) => Some(Node::Layout(without_kinds(l, kinds))),
                Node::Component(c) if kinds.contains(&c.kind) => None,
                Node::Component(c) => Some(Node::Component(component_without(c, kinds))),
            })
            .collect(),
    }
}

fn component_without(node: &ComponentNode, kinds: &[ComponentKind]) -> ComponentNode {
    ComponentNode {
        id: node.id.clone(),
        kind: node.kind,
        props: node.props.clone(),
        children: node
            .children
            .iter()
            .filter(|c| !kinds.contains(&c.kind))
            .map(|c| component_without(c, kinds))
            .collect(),
    }
}

/// When a removal took one of the root's direct children and left a single
/// layout behind, that layout becomes the root.
fn elide_wrapper(prior: &Plan, stripped: &Plan) -> Option<LayoutNode> {
    if prior.root.children.len() < 2 || stripped.root.children.len() != 1 {
        return None;
    }
    let diff = diff_plans(Some(prior), stripped);
    let lost_direct_child = prior.root.children.iter().any(|c| {
        diff.diffs
            .get(c.id())
            .is_some_and(|d| d.diff_type == DiffType::Removed)
    });
    if !lost_direct_child {
        return None;
    }
    match &stripped.root.children[0] {
        Node::Layout(survivor) => Some(survivor.clone()),
        Node::Component(_) => None,
    }
}

fn addition_draft(addition: &Addition, p: &Placeholders) -> ComponentDraft {
    match addition {
        Addition::Modal { title, inputs } => inputs
            .iter()
            .fold(builder::modal(title), |m, field| m.child(builder::input(field))),
        Addition::Chart => builder::chart_card(p),
        Addition::Table => builder::table_card(p),
    }
}
