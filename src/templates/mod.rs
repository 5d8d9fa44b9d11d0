//! Template synthesis: an ordered decision table of (predicate, constructor)
//! rules. Flags overlap (a dashboard request usually names a sidebar too),
//! so rules run most-specific first and the first match builds the tree.

pub mod builder;
pub mod cards;
pub mod forms;
pub mod shell;

use crate::core::config::Placeholders;
use crate::core::error::PlanError;
use crate::core::types::LayoutNode;
use crate::intent::classifier::{Features, Intent};
use crate::intent::fields::FormField;
use crate::intent::vocabulary::Concept;

/// Inputs a template constructor may read.
pub struct Context<'a> {
    pub features: &'a Features,
    pub fields: &'a [FormField],
    pub placeholders: &'a Placeholders,
}

/// One row of the decision table.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Features) -> bool,
    pub build: fn(&Context<'_>) -> builder::LayoutDraft,
}

/// Rules in priority order. The last one always applies.
pub const RULES: &[Rule] = &[
    Rule {
        name: "sidebar_navbar_split",
        applies: |f| f.has(Concept::Sidebar) && f.has(Concept::Navbar) && f.has(Concept::TwoColumns),
        build: shell::sidebar_navbar_split,
    },
    Rule {
        name: "dashboard",
        applies: |f| f.has(Concept::Dashboard),
        build: shell::dashboard,
    },
    Rule {
        name: "sidebar_navbar",
        applies: |f| f.has(Concept::Sidebar) && f.has(Concept::Navbar),
        build: shell::sidebar_navbar,
    },
    Rule {
        name: "sidebar_split",
        applies: |f| f.has(Concept::Sidebar) && f.has(Concept::TwoColumns),
        build: shell::sidebar_split,
    },
    Rule {
        name: "sidebar",
        applies: |f| f.has(Concept::Sidebar),
        build: shell::sidebar_only,
    },
    Rule {
        name: "navbar_split",
        applies: |f| f.has(Concept::Navbar) && f.has(Concept::TwoColumns),
        build: shell::navbar_split,
    },
    Rule {
        name: "navbar",
        applies: |f| f.has(Concept::Navbar),
        build: shell::navbar_only,
    },
    Rule {
        name: "split",
        applies: |f| f.has(Concept::TwoColumns),
        build: shell::split,
    },
    Rule {
        name: "login",
        applies: |f| f.has(Concept::Login),
        build: forms::login,
    },
    Rule {
        name: "signup",
        applies: |f| f.has(Concept::Signup),
        build: forms::signup,
    },
    Rule {
        name: "contact",
        applies: |f| f.has(Concept::Contact),
        build: forms::contact,
    },
    Rule {
        name: "settings",
        applies: |f| f.has(Concept::Settings),
        build: forms::settings,
    },
    Rule {
        name: "form",
        applies: |f| f.has(Concept::Form),
        build: forms::generic,
    },
    Rule {
        name: "kanban",
        applies: |f| f.has(Concept::Kanban),
        build: cards::kanban,
    },
    Rule {
        name: "pricing",
        applies: |f| f.has(Concept::Pricing),
        build: cards::pricing,
    },
    Rule {
        name: "gallery",
        applies: |f| f.has(Concept::Gallery),
        build: cards::gallery,
    },
    Rule {
        name: "stats",
        applies: |f| f.has(Concept::Stats),
        build: cards::stats,
    },
    Rule {
        name: "landing",
        applies: |f| f.has(Concept::Landing),
        build: cards::landing,
    },
    Rule {
        name: "table_chart",
        applies: |f| f.has(Concept::Table) && f.has(Concept::Chart),
        build: cards::table_chart,
    },
    Rule {
        name: "table",
        applies: |f| f.has(Concept::Table),
        build: cards::table_only,
    },
    Rule {
        name: "chart",
        applies: |f| f.has(Concept::Chart),
        build: cards::chart_only,
    },
    Rule {
        name: "modal",
        applies: |f| f.has(Concept::Modal),
        build: cards::modal_only,
    },
    Rule {
        name: "profile",
        applies: |f| f.has(Concept::Profile),
        build: cards::profile,
    },
    Rule {
        name: "default",
        applies: |_| true,
        build: cards::default_plan,
    },
];

/// First rule whose predicate holds.
pub fn select(features: &Features) -> Option<&'static Rule> {
    RULES.iter().find(|r| (r.applies)(features))
}

/// Build the root layout for a create or regenerate intent.
pub fn synthesize(intent: &Intent, placeholders: &Placeholders) -> Result<LayoutNode, PlanError> {
    let draft = match intent {
        Intent::Minimal { title, .. } => {
            tracing::debug!(template = "minimal", %title, "synthesizing");
            cards::minimal(title)
        }
        Intent::Structured { features, fields } => {
            let rule = select(features).ok_or_else(|| PlanError::PlanGenerationFailure {
                message: "no template matched".to_string(),
            })?;
            tracing::debug!(template = rule.name, "synthesizing");
            let ctx = Context {
                features,
                fields,
                placeholders,
            };
            (rule.build)(&ctx)
        }
        Intent::Edit(_) => {
            return Err(PlanError::PlanGenerationFailure {
                message: "edit intent has no prior plan to patch".to_string(),
            })
        }
    };
    Ok(builder::root(draft, placeholders).build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LayoutKind;
    use crate::intent::edits::EditRequest;

    fn rule_for(concepts: &[Concept]) -> &'static str {
        select(&Features::from_concepts(concepts))
            .map(|r| r.name)
            .unwrap_or("none")
    }

    #[test]
    fn test_ui019_priority_order() {
        assert_eq!(
            rule_for(&[Concept::Sidebar, Concept::Navbar, Concept::TwoColumns, Concept::Dashboard]),
            "sidebar_navbar_split"
        );
        assert_eq!(rule_for(&[Concept::Dashboard, Concept::Sidebar]), "dashboard");
        assert_eq!(rule_for(&[Concept::Sidebar, Concept::TwoColumns]), "sidebar_split");
        assert_eq!(rule_for(&[Concept::Navbar, Concept::Login]), "navbar");
        assert_eq!(rule_for(&[Concept::Login, Concept::Modal]), "login");
        assert_eq!(rule_for(&[Concept::Table, Concept::Chart]), "table_chart");
        assert_eq!(rule_for(&[Concept::Profile]), "profile");
        assert_eq!(rule_for(&[]), "default");
    }

    #[test]
    fn test_ui019_every_rule_reachable() {
        // each rule's own concepts select it, so no rule is shadowed
        let cases: &[(&[Concept], &str)] = &[
            (&[Concept::Sidebar], "sidebar"),
            (&[Concept::Navbar, Concept::TwoColumns], "navbar_split"),
            (&[Concept::TwoColumns], "split"),
            (&[Concept::Signup], "signup"),
            (&[Concept::Contact], "contact"),
            (&[Concept::Settings], "settings"),
            (&[Concept::Form], "form"),
            (&[Concept::Kanban], "kanban"),
            (&[Concept::Pricing], "pricing"),
            (&[Concept::Gallery], "gallery"),
            (&[Concept::Stats], "stats"),
            (&[Concept::Landing], "landing"),
            (&[Concept::Table], "table"),
            (&[Concept::Chart], "chart"),
            (&[Concept::Modal], "modal"),
        ];
        for (concepts, name) in cases {
            assert_eq!(rule_for(concepts), *name);
        }
    }

    #[test]
    fn test_ui019_root_spacing() {
        let p = Placeholders::default();
        let intent = Intent::Structured {
            features: Features::default(),
            fields: vec![],
        };
        let root = synthesize(&intent, &p).unwrap();
        assert_eq!(root.kind, LayoutKind::Column);
        assert_eq!(root.props.gap, Some(p.gap));
        assert_eq!(root.props.padding, Some(p.padding));
    }

    #[test]
    fn test_ui019_edit_intent_cannot_synthesize() {
        let err = synthesize(&Intent::Edit(EditRequest::default()), &Placeholders::default())
            .unwrap_err();
        assert_eq!(err.code(), "PLAN_GENERATION_FAILURE");
        assert!(err.is_server_error());
    }
}
