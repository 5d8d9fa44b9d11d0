//! UI-003: Configuration of the kind whitelist, template placeholders and limits.
//!
//! Loaded from `uiplan.yaml`. Every field has a default, so an empty file
//! (or no file at all) yields the built-in whitelist and sample content.
//! Templates read sample rows, chart series and labels only from
//! [`Placeholders`], so tests can swap in fixtures without touching synthesis.

use super::types::{ComponentKind, LayoutKind, NodeKind, NodeRole};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration error.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Permitted node kinds and their positional role
    #[serde(default)]
    pub whitelist: Whitelist,

    /// Sample content used by templates
    #[serde(default)]
    pub placeholders: Placeholders,

    /// Input and edit limits
    #[serde(default)]
    pub limits: Limits,
}

// ============================================================================
// Whitelist
// ============================================================================

/// Authoritative kind whitelist: name → role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Whitelist {
    pub kinds: IndexMap<String, NodeRole>,
}

impl Default for Whitelist {
    fn default() -> Self {
        let mut kinds = IndexMap::new();
        for k in LayoutKind::ALL {
            kinds.insert(k.as_str().to_string(), NodeRole::Layout);
        }
        for k in ComponentKind::ALL {
            kinds.insert(k.as_str().to_string(), NodeRole::Component);
        }
        Self { kinds }
    }
}

impl Whitelist {
    /// True when `kind` is listed with the role it occupies.
    pub fn allows(&self, kind: NodeKind) -> bool {
        self.kinds.get(kind.as_str()) == Some(&kind.role())
    }

    /// Restrict to the given names (test and embedding convenience).
    pub fn only(names: &[&str]) -> Self {
        let full = Self::default();
        Self {
            kinds: full
                .kinds
                .into_iter()
                .filter(|(name, _)| names.contains(&name.as_str()))
                .collect(),
        }
    }
}

// ============================================================================
// Placeholders
// ============================================================================

/// One point of a sample chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: i64,
}

/// A headline metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

/// A pricing tier card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Sample content synthesized into templates. Identical on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub card_title: String,
    pub minimal_title: String,
    pub app_title: String,
    pub body_text: String,
    pub sidebar_items: Vec<String>,
    pub navbar_links: Vec<String>,
    pub table_columns: Vec<String>,
    pub table_rows: Vec<Vec<String>>,
    pub chart_series: Vec<ChartPoint>,
    pub stat_cards: Vec<StatCard>,
    pub pricing_tiers: Vec<PricingTier>,
    pub kanban_lanes: Vec<String>,
    pub gallery_size: u32,
    pub gallery_columns: u32,
    pub gap: u32,
    pub padding: u32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            card_title: "Card".to_string(),
            minimal_title: "Untitled".to_string(),
            app_title: "Dashboard".to_string(),
            body_text: "Content goes here.".to_string(),
            sidebar_items: strings(&["Home", "Analytics", "Reports", "Settings"]),
            navbar_links: strings(&["Overview", "Reports", "Account"]),
            table_columns: strings(&["Name", "Status", "Amount"]),
            table_rows: vec![
                strings(&["Alpha", "Active", "$1,200"]),
                strings(&["Beta", "Pending", "$860"]),
                strings(&["Gamma", "Closed", "$2,430"]),
            ],
            chart_series: [("Jan", 120), ("Feb", 180), ("Mar", 150), ("Apr", 210), ("May", 260), ("Jun", 240)]
                .into_iter()
                .map(|(label, value)| ChartPoint {
                    label: label.to_string(),
                    value,
                })
                .collect(),
            stat_cards: [("Revenue", "$48,200"), ("Users", "1,284"), ("Conversion", "3.6%")]
                .into_iter()
                .map(|(label, value)| StatCard {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            pricing_tiers: vec![
                PricingTier {
                    name: "Starter".to_string(),
                    price: "$9/mo".to_string(),
                    features: strings(&["1 project", "Email support"]),
                },
                PricingTier {
                    name: "Pro".to_string(),
                    price: "$29/mo".to_string(),
                    features: strings(&["10 projects", "Priority support"]),
                },
                PricingTier {
                    name: "Enterprise".to_string(),
                    price: "Contact us".to_string(),
                    features: strings(&["Unlimited projects", "Dedicated support"]),
                },
            ],
            kanban_lanes: strings(&["To Do", "In Progress", "Done"]),
            gallery_size: 6,
            gallery_columns: 3,
            gap: 16,
            padding: 24,
        }
    }
}

// ============================================================================
// Limits
// ============================================================================

/// Input and edit limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum instruction length in characters (after trimming)
    pub max_input_chars: usize,

    /// Upper bound on inputs pre-populated into an added dialog
    pub max_modal_inputs: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            max_modal_inputs: 6,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse a uiplan.yaml file from disk.
pub fn parse_config_file(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_config(&content)
}

/// Parse a uiplan.yaml from a string.
pub fn parse_config(yaml: &str) -> Result<Config, String> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
}

/// Load a config file if given, otherwise the defaults; reject invalid configs.
pub fn load(path: Option<&Path>) -> Result<Config, String> {
    let config = match path {
        Some(p) => parse_config_file(p)?,
        None => Config::default(),
    };
    let errors = validate_config(&config);
    if errors.is_empty() {
        return Ok(config);
    }
    let joined: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
    Err(format!("invalid config: {}", joined.join("; ")))
}

/// Validate a parsed config. Returns a list of errors (empty = valid).
pub fn validate_config(config: &Config) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for (name, role) in &config.whitelist.kinds {
        match NodeKind::parse(name) {
            None => errors.push(ConfigError {
                message: format!("whitelist entry '{}' is not a known kind", name),
            }),
            Some(kind) if kind.role() != *role => errors.push(ConfigError {
                message: format!(
                    "whitelist entry '{}' is a {} kind, not {}",
                    name,
                    kind.role(),
                    role
                ),
            }),
            Some(_) => {}
        }
    }

    if !config
        .whitelist
        .kinds
        .values()
        .any(|r| *r == NodeRole::Layout)
    {
        errors.push(ConfigError {
            message: "whitelist must permit at least one layout kind".to_string(),
        });
    }

    let p = &config.placeholders;
    if p.table_columns.is_empty() {
        errors.push(ConfigError {
            message: "placeholders.table_columns must not be empty".to_string(),
        });
    }
    for (i, row) in p.table_rows.iter().enumerate() {
        if row.len() != p.table_columns.len() {
            errors.push(ConfigError {
                message: format!(
                    "placeholders.table_rows[{}] has {} cells, expected {}",
                    i,
                    row.len(),
                    p.table_columns.len()
                ),
            });
        }
    }
    if p.chart_series.is_empty() {
        errors.push(ConfigError {
            message: "placeholders.chart_series must not be empty".to_string(),
        });
    }
    for (field, list) in [
        ("sidebar_items", &p.sidebar_items),
        ("kanban_lanes", &p.kanban_lanes),
    ] {
        if list.is_empty() {
            errors.push(ConfigError {
                message: format!("placeholders.{} must not be empty", field),
            });
        }
    }
    if p.stat_cards.is_empty() || p.pricing_tiers.is_empty() {
        errors.push(ConfigError {
            message: "placeholders.stat_cards and pricing_tiers must not be empty".to_string(),
        });
    }
    if p.gallery_size == 0 || p.gallery_columns == 0 {
        errors.push(ConfigError {
            message: "placeholders.gallery_size and gallery_columns must be positive".to_string(),
        });
    }

    if config.limits.max_input_chars == 0 {
        errors.push(ConfigError {
            message: "limits.max_input_chars must be positive".to_string(),
        });
    }
    if config.limits.max_modal_inputs == 0 {
        errors.push(ConfigError {
            message: "limits.max_modal_inputs must be positive".to_string(),
        });
    }

    errors
}

/// Render the default config as YAML (used by `uiplan init`).
pub fn default_config_yaml() -> Result<String, String> {
    let body = serde_yaml_ng::to_string(&Config::default())
        .map_err(|e| format!("serialize error: {}", e))?;
    Ok(format!(
        "# uiplan configuration\n# whitelist: permitted node kinds (layout | component)\n{}",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui003_defaults_valid() {
        let errors = validate_config(&Config::default());
        assert!(
            errors.is_empty(),
            "unexpected errors: {:?}",
            errors.iter().map(|e| &e.message).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ui003_empty_yaml_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_ui003_default_whitelist() {
        let w = Whitelist::default();
        assert!(w.allows(NodeKind::Layout(LayoutKind::Column)));
        assert!(w.allows(NodeKind::Component(ComponentKind::Modal)));
        assert_eq!(w.kinds.len(), 12);
    }

    #[test]
    fn test_ui003_whitelist_restriction() {
        let yaml = r#"
whitelist:
  Column: layout
  Card: component
"#;
        let config = parse_config(yaml).unwrap();
        assert!(config.whitelist.allows(NodeKind::Component(ComponentKind::Card)));
        assert!(!config.whitelist.allows(NodeKind::Component(ComponentKind::Table)));
        assert!(!config.whitelist.allows(NodeKind::Layout(LayoutKind::Row)));
        // untouched sections keep defaults
        assert_eq!(config.limits.max_input_chars, 2000);
    }

    #[test]
    fn test_ui003_unknown_whitelist_kind() {
        let yaml = r#"
whitelist:
  Column: layout
  Iframe: component
"#;
        let config = parse_config(yaml).unwrap();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.message.contains("not a known kind")));
    }

    #[test]
    fn test_ui003_wrong_role() {
        let yaml = r#"
whitelist:
  Column: component
"#;
        let config = parse_config(yaml).unwrap();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.message.contains("is a layout kind")));
        assert!(errors.iter().any(|e| e.message.contains("at least one layout")));
    }

    #[test]
    fn test_ui003_ragged_table_rows() {
        let yaml = r#"
placeholders:
  table_columns: [A, B]
  table_rows: [[x, y], [z]]
"#;
        let config = parse_config(yaml).unwrap();
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.message.contains("table_rows[1]")));
    }

    #[test]
    fn test_ui003_placeholder_override() {
        let yaml = r#"
placeholders:
  minimal_title: Hello
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.placeholders.minimal_title, "Hello");
        assert_eq!(config.placeholders.card_title, "Card");
    }

    #[test]
    fn test_ui003_parse_file_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uiplan.yaml");
        std::fs::write(&path, "limits:\n  max_input_chars: 10\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.limits.max_input_chars, 10);
        assert_eq!(load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_ui003_load_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uiplan.yaml");
        std::fs::write(&path, "limits:\n  max_input_chars: 0\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(err.contains("max_input_chars"));
    }

    #[test]
    fn test_ui003_invalid_yaml() {
        assert!(parse_config("whitelist: [valid: yaml: {{").is_err());
    }

    #[test]
    fn test_ui003_default_yaml_roundtrip() {
        let yaml = default_config_yaml().unwrap();
        assert!(yaml.starts_with("# uiplan configuration"));
        let config = parse_config(&yaml).unwrap();
        assert_eq!(config, Config::default());
    }
}
