//! UI-015: Node construction with deterministic ids.
//!
//! Templates describe trees as id-less drafts. [`LayoutDraft::build`] then
//! assigns every id root-down from (parent id, kind, sibling index), so
//! the same draft always yields the same tree.

use crate::core::config::Placeholders;
use crate::core::ids;
use crate::core::types::*;
use crate::intent::fields::FormField;
use serde_json::{json, Value};

/// An id-less layout.
#[derive(Debug, Clone)]
pub struct LayoutDraft {
    pub kind: LayoutKind,
    pub props: LayoutProps,
    pub children: Vec<Draft>,
}

/// An id-less component.
#[derive(Debug, Clone)]
pub struct ComponentDraft {
    pub kind: ComponentKind,
    pub props: Props,
    pub children: Vec<ComponentDraft>,
}

#[derive(Debug, Clone)]
pub enum Draft {
    Layout(LayoutDraft),
    Component(ComponentDraft),
}

impl From<LayoutDraft> for Draft {
    fn from(d: LayoutDraft) -> Self {
        Self::Layout(d)
    }
}

impl From<ComponentDraft> for Draft {
    fn from(d: ComponentDraft) -> Self {
        Self::Component(d)
    }
}

impl LayoutDraft {
    pub fn new(kind: LayoutKind, children: Vec<Draft>) -> Self {
        Self {
            kind,
            props: LayoutProps::default(),
            children,
        }
    }

    pub fn gap(mut self, gap: u32) -> Self {
        self.props.gap = Some(gap);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.props.padding = Some(padding);
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.props.columns = Some(columns);
        self
    }

    /// Build as the plan root.
    pub fn build(self) -> LayoutNode {
        let id = ids::node_id(None, NodeKind::Layout(self.kind), 0);
        self.build_with_id(id)
    }

    pub fn build_with_id(self, id: String) -> LayoutNode {
        let children = self
            .children
            .into_iter()
            .enumerate()
            .map(|(i, child)| match child {
                Draft::Layout(l) => {
                    let child_id = ids::node_id(Some(&id), NodeKind::Layout(l.kind), i);
                    Node::Layout(l.build_with_id(child_id))
                }
                Draft::Component(c) => {
                    let child_id = ids::node_id(Some(&id), NodeKind::Component(c.kind), i);
                    Node::Component(c.build_with_id(child_id))
                }
            })
            .collect();
        LayoutNode {
            id,
            kind: self.kind,
            props: self.props,
            children,
        }
    }
}

impl ComponentDraft {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn child(mut self, child: ComponentDraft) -> Self {
        self.children.push(child);
        self
    }

    pub fn build_with_id(self, id: String) -> ComponentNode {
        let children = self
            .children
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let child_id = ids::node_id(Some(&id), NodeKind::Component(c.kind), i);
                c.build_with_id(child_id)
            })
            .collect();
        ComponentNode {
            id,
            kind: self.kind,
            props: self.props,
            children,
        }
    }
}

// ============================================================================
// Layout shorthands
// ============================================================================

pub fn column(children: Vec<Draft>) -> LayoutDraft {
    LayoutDraft::new(LayoutKind::Column, children)
}

pub fn row(children: Vec<Draft>) -> LayoutDraft {
    LayoutDraft::new(LayoutKind::Row, children)
}

pub fn grid(columns: u32, children: Vec<Draft>) -> LayoutDraft {
    LayoutDraft::new(LayoutKind::Grid, children).columns(columns)
}

/// Spacing every template root carries.
pub fn root(draft: LayoutDraft, p: &Placeholders) -> LayoutDraft {
    draft.gap(p.gap).padding(p.padding)
}

// ============================================================================
// Component shorthands
// ============================================================================

pub fn card(title: &str) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Card).prop("title", title)
}

pub fn text(content: &str) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Text).prop("content", content)
}

pub fn button(label: &str, variant: &str) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Button)
        .prop("label", label)
        .prop("variant", variant)
}

pub fn input(field: &FormField) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Input)
        .prop("label", field.label.as_str())
        .prop("type", field.input_type.as_str())
        .prop("placeholder", field.placeholder.as_str())
}

pub fn modal(title: &str) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Modal)
        .prop("title", title)
        .prop("open", false)
}

pub fn sidebar(p: &Placeholders) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Sidebar).prop("items", json!(p.sidebar_items))
}

pub fn navbar(p: &Placeholders) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Navbar)
        .prop("title", p.app_title.as_str())
        .prop("links", json!(p.navbar_links))
}

pub fn chart(title: &str, p: &Placeholders) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Chart)
        .prop("chartType", "line")
        .prop("title", title)
        .prop("data", json!(p.chart_series))
}

pub fn table(p: &Placeholders) -> ComponentDraft {
    ComponentDraft::new(ComponentKind::Table)
        .prop("columns", json!(p.table_columns))
        .prop("rows", json!(p.table_rows))
}

/// A card wrapping a chart.
pub fn chart_card(p: &Placeholders) -> ComponentDraft {
    card("Analytics").child(chart("Trend", p))
}

/// A card wrapping a table.
pub fn table_card(p: &Placeholders) -> ComponentDraft {
    card("Records").child(table(p))
}
