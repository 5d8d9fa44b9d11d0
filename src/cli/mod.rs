//! UI-023: CLI subcommands: init, plan, validate, diff, classify, check.

use crate::core::config::{self, Config};
use crate::core::types::{DiffType, Plan, PlanDiff};
use crate::core::{fingerprint, pipeline, schema, validator};
use crate::intent::classifier;
use crate::security::{injection, input};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default uiplan.yaml
    Init {
        /// Directory to initialize (default: current)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Compile an instruction into a validated plan
    Plan {
        /// Instruction text
        #[arg(short, long)]
        text: String,

        /// Prior plan (JSON) to edit or regenerate
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Path to uiplan.yaml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the plan here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate a plan file against the whitelist and structural invariants
    Validate {
        /// Plan JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Path to uiplan.yaml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the structural diff between two plans
    Diff {
        /// Previous plan JSON
        #[arg(long)]
        previous: PathBuf,

        /// Current plan JSON
        #[arg(long)]
        current: PathBuf,
    },

    /// Show how an instruction is classified
    Classify {
        /// Instruction text
        #[arg(short, long)]
        text: String,

        /// Prior plan (JSON)
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Path to uiplan.yaml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the input checks only (injection + sanitation)
    Check {
        /// Instruction text
        #[arg(short, long)]
        text: String,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Init { path } => cmd_init(&path),
        Commands::Plan {
            text,
            previous,
            config,
            out,
        } => cmd_plan(&text, previous.as_deref(), config.as_deref(), out.as_deref()),
        Commands::Validate { file, config } => cmd_validate(&file, config.as_deref()),
        Commands::Diff { previous, current } => cmd_diff(&previous, &current),
        Commands::Classify {
            text,
            previous,
            config,
        } => cmd_classify(&text, previous.as_deref(), config.as_deref()),
        Commands::Check { text } => cmd_check(&text),
    }
}

fn cmd_init(path: &Path) -> Result<(), String> {
    let config_path = path.join("uiplan.yaml");
    if config_path.exists() {
        return Err(format!("{} already exists", config_path.display()));
    }
    std::fs::create_dir_all(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;

    let yaml = config::default_config_yaml()?;
    std::fs::write(&config_path, yaml)
        .map_err(|e| format!("cannot write {}: {}", config_path.display(), e))?;

    println!("Initialized uiplan config at {}", config_path.display());
    Ok(())
}

/// Read and validate a plan file.
fn load_plan(path: &Path, config: &Config) -> Result<Plan, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let plan = schema::parse_plan(&json).map_err(|e| format!("{}: {}", path.display(), e))?;
    validator::validate_plan(plan, &config.whitelist).map_err(|e| format!("{}: {}", path.display(), e))
}

fn load_previous(path: Option<&Path>, config: &Config) -> Result<Option<Plan>, String> {
    path.map(|p| load_plan(p, config)).transpose()
}

fn cmd_plan(
    text: &str,
    previous: Option<&Path>,
    config_path: Option<&Path>,
    out: Option<&Path>,
) -> Result<(), String> {
    let config = config::load(config_path)?;
    let prior = load_previous(previous, &config)?;

    let plan = pipeline::plan_from_intent(text, prior.as_ref(), &config)
        .map_err(|e| format!("{} ({})", e, e.code()))?;
    let json = schema::plan_to_json(&plan).map_err(|e| e.to_string())?;
    let fp = fingerprint::fingerprint(&plan).map_err(|e| e.to_string())?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
            println!(
                "Wrote {} ({}, {} nodes)",
                path.display(),
                plan.modification_type,
                plan.nodes().len()
            );
            println!("  Fingerprint: {}", fp);
        }
        None => {
            println!("{}", json);
            eprintln!("fingerprint: {}", fp);
        }
    }

    if let Some(prior) = &prior {
        let diff = pipeline::diff_plans(Some(prior), &plan);
        let s = diff.summary();
        eprintln!(
            "Diff: {} added, {} updated, {} removed, {} unchanged.",
            s.added, s.updated, s.removed, s.unchanged
        );
    }
    Ok(())
}

fn cmd_validate(file: &Path, config_path: Option<&Path>) -> Result<(), String> {
    let config = config::load(config_path)?;
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| format!("invalid JSON in {}: {}", file.display(), e))?;

    let report = validator::report(&value, &config.whitelist);
    match &report.data {
        Some(plan) => {
            println!("OK: {} ({} nodes)", file.display(), plan.nodes().len());
            Ok(())
        }
        None => {
            let code = report.code.as_deref().unwrap_or("UNKNOWN");
            let error = report.error.as_deref().unwrap_or("invalid plan");
            eprintln!("  ERROR [{}]: {}", code, error);
            Err(format!("{} is not a valid plan", file.display()))
        }
    }
}

fn cmd_diff(previous: &Path, current: &Path) -> Result<(), String> {
    let config = Config::default();
    let before = load_plan(previous, &config)?;
    let after = load_plan(current, &config)?;
    let diff = pipeline::diff_plans(Some(&before), &after);
    print_diff(&diff);
    Ok(())
}

/// Display a diff to stdout.
fn print_diff(diff: &PlanDiff) {
    println!("Diff ({}): {} changed node(s)", diff.modification_type, diff.changed_node_ids.len());
    println!();

    if diff.diffs.is_empty() {
        for id in &diff.changed_node_ids {
            println!("  ! {}", id);
        }
    }
    for d in diff.diffs.values() {
        let symbol = match d.diff_type {
            DiffType::Added => "+",
            DiffType::Updated => "~",
            DiffType::Removed => "-",
            DiffType::Unchanged => " ",
        };
        println!("  {} {}", symbol, d.describe());
    }

    let s = diff.summary();
    println!();
    println!(
        "Diff: {} added, {} updated, {} removed, {} unchanged.",
        s.added, s.updated, s.removed, s.unchanged
    );
}

fn cmd_classify(text: &str, previous: Option<&Path>, config_path: Option<&Path>) -> Result<(), String> {
    let config = config::load(config_path)?;
    let prior = load_previous(previous, &config)?;
    injection::ensure_safe(text).map_err(|e| e.to_string())?;
    let clean = input::sanitize(text, &config.limits).map_err(|e| e.to_string())?;

    let classification = classifier::classify(&clean, prior.as_ref(), &config);
    let json = serde_json::to_string_pretty(&classification)
        .map_err(|e| format!("serialize error: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn cmd_check(text: &str) -> Result<(), String> {
    let check = injection::check_injection(text);
    if let Some(reason) = check.reason {
        println!("REJECTED: {}", reason);
        return Err("instruction rejected".to_string());
    }
    let clean = input::sanitize(text, &config::Limits::default()).map_err(|e| e.to_string())?;
    println!("OK: {} characters", clean.chars().count());
    Ok(())
}
