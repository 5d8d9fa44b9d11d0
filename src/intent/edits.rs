//! UI-013: Edit-mode request extraction.
//!
//! The instruction is cut into clauses at punctuation and at conjunctions
//! ("and", "then", "also", "plus"). Each clause carries a verb, either its
//! own or the one inherited from the clause before it, so "remove the
//! sidebar and the navbar" removes both while "remove the sidebar and add a
//! modal" keeps the two operations apart. A kind that is both removed and
//! added in the same instruction is only removed.

use super::fields::{self, FormField};
use super::vocabulary::{self, Concept};
use crate::core::config::Limits;
use crate::core::types::ComponentKind;
use regex::Regex;
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::LazyLock;

/// A node to append to the prior plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Addition {
    Modal { title: String, inputs: Vec<FormField> },
    Chart,
    Table,
}

impl Addition {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Modal { .. } => ComponentKind::Modal,
            Self::Chart => ComponentKind::Chart,
            Self::Table => ComponentKind::Table,
        }
    }
}

/// Removals and additions, in instruction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    pub removals: Vec<ComponentKind>,
    pub additions: Vec<Addition>,
}

impl EditRequest {
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Remove,
    Add,
}

static CLAUSE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.;:!?,\n]+|\b(?:and|then|also|plus)\b").expect("static clause pattern")
});

static REMOVE_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:remove|delete|drop|hide|get\s+rid\s+of|take\s+out|eliminate)\b")
        .expect("static verb pattern")
});

static ADD_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:add|insert|include|append|put|show|create)\b").expect("static verb pattern")
});

static INPUT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+|one|two|three|four|five|six)\s+(?:[a-z]+\s+)?(?:inputs?|fields?)\b")
        .expect("static count pattern")
});

static INPUT_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:inputs?|fields?)\b").expect("static pattern"));

/// Kinds that can be named for removal, with their keywords.
fn target_keywords(kind: ComponentKind) -> &'static [&'static str] {
    match kind {
        ComponentKind::Sidebar => Concept::Sidebar.keywords(),
        ComponentKind::Navbar => Concept::Navbar.keywords(),
        ComponentKind::Chart => Concept::Chart.keywords(),
        ComponentKind::Table => Concept::Table.keywords(),
        ComponentKind::Modal => Concept::Modal.keywords(),
        ComponentKind::Button => &["button", "cta"],
        ComponentKind::Input => &["input", "field", "text field", "text input"],
        ComponentKind::Card => &["card", "panel"],
        ComponentKind::Text => &["text", "paragraph", "text block", "copy"],
    }
}

const ADDABLE: [ComponentKind; 3] = [ComponentKind::Modal, ComponentKind::Chart, ComponentKind::Table];

static TARGETS: LazyLock<Vec<(ComponentKind, Regex)>> = LazyLock::new(|| {
    ComponentKind::ALL
        .into_iter()
        .map(|kind| {
            let pattern = format!(r"(?i)\b{}s?\b", vocabulary::alternation(target_keywords(kind)));
            (kind, Regex::new(&pattern).expect("static target pattern"))
        })
        .collect()
});

/// Earliest target in a clause; on a tie the longer keyword wins
/// ("text field" is an input, not text).
fn earliest_target(clause: &str, allowed: &[ComponentKind]) -> Option<ComponentKind> {
    TARGETS
        .iter()
        .filter(|(kind, _)| allowed.contains(kind))
        .filter_map(|(kind, re)| re.find(clause).map(|m| (m.start(), Reverse(m.len()), *kind)))
        .min_by_key(|(start, len, _)| (*start, *len))
        .map(|(_, _, kind)| kind)
}

fn clause_verb(clause: &str) -> Option<Verb> {
    let remove = REMOVE_VERB.find(clause).map(|m| m.start());
    let add = ADD_VERB.find(clause).map(|m| m.start());
    match (remove, add) {
        (Some(r), Some(a)) if a < r => Some(Verb::Add),
        (Some(_), _) => Some(Verb::Remove),
        (None, Some(_)) => Some(Verb::Add),
        (None, None) => None,
    }
}

fn number_word(word: &str) -> usize {
    match word.to_ascii_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        // digit runs too long for usize saturate, then hit the cap
        digits => digits.parse().unwrap_or(usize::MAX),
    }
}

/// Inputs requested for an added dialog: an explicit count, else 2 when
/// inputs are mentioned at all, else none. Capped at `max_modal_inputs`.
pub fn input_count(text: &str, limits: &Limits) -> usize {
    let requested = match INPUT_COUNT.captures(text).and_then(|c| c.get(1)) {
        Some(m) => number_word(m.as_str()),
        None if INPUT_MENTION.is_match(text) => 2,
        None => 0,
    };
    requested.min(limits.max_modal_inputs)
}

fn modal_inputs(text: &str, limits: &Limits) -> Vec<FormField> {
    let count = input_count(text, limits);
    let mut inputs: Vec<FormField> = fields::detect_fields(text).into_iter().take(count).collect();
    for i in inputs.len()..count {
        inputs.push(FormField::new(
            &format!("Field {}", i + 1),
            "text",
            "Enter a value",
        ));
    }
    inputs
}

/// Extract an edit request from sanitized text.
pub fn extract(text: &str, limits: &Limits) -> EditRequest {
    let mut request = EditRequest::default();
    let mut verb = None;

    for clause in CLAUSE_SPLIT.split(text).map(str::trim).filter(|c| !c.is_empty()) {
        verb = clause_verb(clause).or(verb);
        match verb {
            Some(Verb::Remove) => {
                if let Some(kind) = earliest_target(clause, &ComponentKind::ALL) {
                    if !request.removals.contains(&kind) {
                        request.removals.push(kind);
                    }
                }
            }
            Some(Verb::Add) => {
                let Some(kind) = earliest_target(clause, &ADDABLE) else {
                    continue;
                };
                if request.additions.iter().any(|a| a.kind() == kind) {
                    continue;
                }
                let addition = match kind {
                    ComponentKind::Modal => Addition::Modal {
                        title: if vocabulary::mentioned(Concept::Settings, clause) {
                            "Settings".to_string()
                        } else {
                            "Dialog".to_string()
                        },
                        inputs: modal_inputs(text, limits),
                    },
                    ComponentKind::Chart => Addition::Chart,
                    _ => Addition::Table,
                };
                request.additions.push(addition);
            }
            None => {}
        }
    }

    let removed = request.removals.clone();
    request.additions.retain(|a| !removed.contains(&a.kind()));
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> Limits {
        Limits::default()
    }

    #[test]
    fn test_ui013_remove_and_add() {
        let req = extract(
            "Remove the sidebar and add a settings modal with two inputs.",
            &limits(),
        );
        assert_eq!(req.removals, vec![ComponentKind::Sidebar]);
        assert_eq!(req.additions.len(), 1);
        match &req.additions[0] {
            Addition::Modal { title, inputs } => {
                assert_eq!(title, "Settings");
                assert_eq!(inputs.len(), 2);
                assert_eq!(inputs[0].label, "Field 1");
            }
            other => panic!("expected modal, got {:?}", other),
        }
    }

    #[test]
    fn test_ui013_verb_inherited_across_conjunction() {
        let req = extract("remove the sidebar and the navbar", &limits());
        assert_eq!(req.removals, vec![ComponentKind::Sidebar, ComponentKind::Navbar]);
        let req = extract("add a chart, then a table", &limits());
        assert_eq!(req.additions, vec![Addition::Chart, Addition::Table]);
    }

    #[test]
    fn test_ui013_remove_beats_add() {
        let req = extract("add a chart. actually delete the chart", &limits());
        assert_eq!(req.removals, vec![ComponentKind::Chart]);
        assert!(req.additions.is_empty());
    }

    #[test]
    fn test_ui013_unaddable_kind_ignored() {
        let req = extract("add a sidebar", &limits());
        assert!(req.is_empty());
    }

    #[test]
    fn test_ui013_no_verb_is_noop() {
        assert!(extract("the chart looks great", &limits()).is_empty());
    }

    #[test]
    fn test_ui013_longest_keyword_on_tie() {
        let req = extract("remove the text field", &limits());
        assert_eq!(req.removals, vec![ComponentKind::Input]);
    }

    #[test]
    fn test_ui013_input_counts() {
        assert_eq!(input_count("a modal with 3 inputs", &limits()), 3);
        assert_eq!(input_count("a modal with four text fields", &limits()), 4);
        assert_eq!(input_count("a modal with some inputs", &limits()), 2);
        assert_eq!(input_count("a modal", &limits()), 0);
        assert_eq!(input_count("a modal with 40 inputs", &limits()), 6);
        assert_eq!(
            input_count("a modal with 99999999999999999999999 inputs", &limits()),
            6
        );
    }

    #[test]
    fn test_ui013_modal_inputs_use_detected_fields() {
        let req = extract("add a dialog with email and password fields", &limits());
        match &req.additions[0] {
            Addition::Modal { title, inputs } => {
                assert_eq!(title, "Dialog");
                let labels: Vec<&str> = inputs.iter().map(|f| f.label.as_str()).collect();
                assert_eq!(labels, vec!["Email", "Password"]);
            }
            other => panic!("expected modal, got {:?}", other),
        }
    }

    #[test]
    fn test_ui013_serializes_tagged() {
        let req = extract("add a table", &limits());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["additions"][0]["kind"], "table");
    }
}
