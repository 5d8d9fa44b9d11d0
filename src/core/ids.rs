//! UI-004: Deterministic node ids.
//!
//! An id is a pure function of (parent id, kind, sibling index):
//! `<parent>.<kind>-<index>`, or `<kind>-<index>` at the root. No clocks, no
//! randomness, so equal structures always get byte-identical ids.

use super::types::NodeKind;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,255}$").expect("static id pattern")
});

/// Compute a node id.
pub fn node_id(parent: Option<&str>, kind: NodeKind, index: usize) -> String {
    match parent {
        Some(p) => format!("{}.{}-{}", p, kind.slug(), index),
        None => format!("{}-{}", kind.slug(), index),
    }
}

/// Id for a node appended under `parent`, starting at `index` and moving
/// past any id already present in `taken`.
pub fn next_free_id(parent: &str, kind: NodeKind, index: usize, taken: &HashSet<String>) -> String {
    let mut i = index;
    loop {
        let candidate = node_id(Some(parent), kind, i);
        if !taken.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// True when `id` is within the id-safe character class.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ComponentKind, LayoutKind};

    #[test]
    fn test_ui004_root_and_child() {
        let root = node_id(None, NodeKind::Layout(LayoutKind::Row), 0);
        assert_eq!(root, "row-0");
        let child = node_id(Some(&root), NodeKind::Component(ComponentKind::Sidebar), 0);
        assert_eq!(child, "row-0.sidebar-0");
    }

    #[test]
    fn test_ui004_pure() {
        let a = node_id(Some("row-0"), NodeKind::Component(ComponentKind::Card), 3);
        let b = node_id(Some("row-0"), NodeKind::Component(ComponentKind::Card), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ui004_next_free_skips_taken() {
        let taken: HashSet<String> = ["row-0.card-1".to_string()].into_iter().collect();
        let id = next_free_id("row-0", NodeKind::Component(ComponentKind::Card), 1, &taken);
        assert_eq!(id, "row-0.card-2");
        let id = next_free_id("row-0", NodeKind::Component(ComponentKind::Modal), 1, &taken);
        assert_eq!(id, "row-0.modal-1");
    }

    #[test]
    fn test_ui004_valid_ids() {
        assert!(is_valid_id("row-0.column-1.card-0"));
        assert!(is_valid_id("hero_1"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id(".row-0"));
        assert!(!is_valid_id("row 0"));
        assert!(!is_valid_id("<script>"));
        assert!(!is_valid_id(&"a".repeat(300)));
    }
}
