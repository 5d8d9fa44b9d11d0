//! UI-010: Concept vocabulary and negation-aware requirement resolution.
//!
//! `requirement(c, text) = mentioned(c) && !negated(c)`. Negation is a fixed
//! set of phrasings directly governing a concept keyword: "remove X",
//! "without X", "no X", "don't/do not add/use/include X". The two-way split
//! keyword is multi-word, so it is negated coarsely by any "remove"/"without"
//! in the instruction.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A structural concept the classifier can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Sidebar,
    Navbar,
    TwoColumns,
    Chart,
    Table,
    Form,
    Modal,
    Dashboard,
    Login,
    Signup,
    Contact,
    Settings,
    Profile,
    Pricing,
    Landing,
    Gallery,
    Kanban,
    Stats,
}

impl Concept {
    pub const ALL: [Concept; 18] = [
        Self::Sidebar,
        Self::Navbar,
        Self::TwoColumns,
        Self::Chart,
        Self::Table,
        Self::Form,
        Self::Modal,
        Self::Dashboard,
        Self::Login,
        Self::Signup,
        Self::Contact,
        Self::Settings,
        Self::Profile,
        Self::Pricing,
        Self::Landing,
        Self::Gallery,
        Self::Kanban,
        Self::Stats,
    ];

    /// Concepts whose presence means the user asked for real structure.
    pub const COMPLEX: [Concept; 6] = [
        Self::Dashboard,
        Self::Sidebar,
        Self::Navbar,
        Self::TwoColumns,
        Self::Chart,
        Self::Table,
    ];

    /// Lower-case keywords, matched on word boundaries (plural `s` allowed).
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Sidebar => &["sidebar", "side bar", "side panel", "side nav", "side navigation", "navigation panel", "drawer"],
            Self::Navbar => &["navbar", "nav bar", "top bar", "topbar", "header", "navigation bar", "app bar", "menu bar"],
            Self::TwoColumns => &["two columns", "two column", "2 columns", "two cards", "2 cards", "side by side", "split view"],
            Self::Chart => &["chart", "graph", "plot", "visualization"],
            Self::Table => &["table", "data grid", "spreadsheet"],
            Self::Form => &["form", "input field", "text field"],
            Self::Modal => &["modal", "dialog", "popup", "pop-up"],
            Self::Dashboard => &["dashboard", "admin panel"],
            Self::Login => &["login", "log in", "sign in", "signin"],
            Self::Signup => &["signup", "sign up", "register", "registration"],
            Self::Contact => &["contact"],
            Self::Settings => &["settings", "preferences"],
            Self::Profile => &["profile", "user card"],
            Self::Pricing => &["pricing", "price plan", "subscription tier"],
            Self::Landing => &["landing", "hero", "homepage", "home page"],
            Self::Gallery => &["gallery", "photo grid", "image grid", "portfolio"],
            Self::Kanban => &["kanban", "task board"],
            Self::Stats => &["stats", "statistics", "metrics", "kpi"],
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sidebar => "sidebar",
            Self::Navbar => "navbar",
            Self::TwoColumns => "two_columns",
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Form => "form",
            Self::Modal => "modal",
            Self::Dashboard => "dashboard",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::Pricing => "pricing",
            Self::Landing => "landing",
            Self::Gallery => "gallery",
            Self::Kanban => "kanban",
            Self::Stats => "stats",
        };
        write!(f, "{}", name)
    }
}

/// Regex alternation for a keyword list: `(?:a|b c|...)`.
pub fn alternation(keywords: &[&str]) -> String {
    let escaped: Vec<String> = keywords
        .iter()
        .map(|k| regex::escape(k).replace(' ', r"[\s-]+"))
        .collect();
    format!("(?:{})", escaped.join("|"))
}

struct ConceptPatterns {
    mention: Regex,
    negation: Regex,
}

static PATTERNS: LazyLock<HashMap<Concept, ConceptPatterns>> = LazyLock::new(|| {
    Concept::ALL
        .into_iter()
        .map(|c| {
            let kw = alternation(c.keywords());
            let mention = format!(r"(?i)\b{}s?\b", kw);
            let negation = format!(
                r"(?i)\b(?:remove|without|no|(?:don['’]?t|do\s+not)\s+(?:add|use|include|want|need))\s+(?:(?:the|a|an|any)\s+)?{}s?\b",
                kw
            );
            (
                c,
                ConceptPatterns {
                    mention: Regex::new(&mention).expect("static concept pattern"),
                    negation: Regex::new(&negation).expect("static negation pattern"),
                },
            )
        })
        .collect()
});

static COARSE_NEGATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(remove|without)\b").expect("static pattern"));

/// Concept keyword present anywhere in the text.
pub fn mentioned(concept: Concept, text: &str) -> bool {
    PATTERNS
        .get(&concept)
        .is_some_and(|p| p.mention.is_match(text))
}

/// Concept keyword governed by a negation phrase.
pub fn negated(concept: Concept, text: &str) -> bool {
    if concept == Concept::TwoColumns {
        return COARSE_NEGATION.is_match(text);
    }
    PATTERNS
        .get(&concept)
        .is_some_and(|p| p.negation.is_match(text))
}

/// Mentioned and not negated.
pub fn requirement(concept: Concept, text: &str) -> bool {
    mentioned(concept, text) && !negated(concept, text)
}

/// Any complex-structure concept required by the text.
pub fn has_complex_structure(text: &str) -> bool {
    Concept::COMPLEX.into_iter().any(|c| requirement(c, text))
}
