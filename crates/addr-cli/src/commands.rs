use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use addr_core::{Canonicalizer, run_pipeline};
use addr_ingest::write_output;
use addr_model::{CleanupRule, RunConfig};

use crate::cli::{NormalizeArgs, RulesArgs, RunArgs};
use crate::summary::{RunReport, apply_table_style};

/// Execute the batch pipeline. Returns `None` when no partition file was
/// found and there is nothing to report.
pub fn run_run(args: &RunArgs) -> Result<Option<RunReport>> {
    let mut config = load_config(&args.config)?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }

    let Some(mut run) = run_pipeline(&config)? else {
        return Ok(None);
    };

    let output = if args.dry_run {
        info!(rows = run.frame.height(), "dry run, skipping output write");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| config.data_dir.join("canonical_addresses.csv"));
        write_output(&mut run.frame, &path)
            .with_context(|| format!("write output to {}", path.display()))?;
        Some(path)
    };

    Ok(Some(RunReport {
        summary: run.summary,
        output,
    }))
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    println!("{}", Canonicalizer::new().canonicalize_lossy(&args.address));
    Ok(())
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    if config.rules.is_empty() {
        println!("No cleanup rules configured.");
        return Ok(());
    }
    println!("{}", rules_table(&config));
    Ok(())
}

fn rules_table(config: &RunConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Kind", "Field", "Match", "Replacement"]);
    apply_table_style(&mut table);
    for (index, rule) in config.rules.iter().enumerate() {
        let row = match rule {
            CleanupRule::Replace {
                field,
                matches,
                replacement,
            } => vec![
                (index + 1).to_string(),
                "replace".to_string(),
                field.clone(),
                matches.clone(),
                replacement.clone(),
            ],
            CleanupRule::Exclude { field, matches } => vec![
                (index + 1).to_string(),
                "exclude".to_string(),
                field.clone(),
                matches.clone(),
                String::new(),
            ],
        };
        table.add_row(row);
    }
    table
}

fn load_config(path: &Path) -> Result<RunConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse configuration {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_table_keeps_declared_order() {
        let config = RunConfig::new("data").with_rules([
            CleanupRule::replace("PlaceName", "SPRINGS", "Springs"),
            CleanupRule::exclude("PlaceName", "Springs"),
        ]);
        let rendered = rules_table(&config).to_string();
        let replace_at = rendered.find("replace").expect("replace row");
        let exclude_at = rendered.find("exclude").expect("exclude row");
        assert!(replace_at < exclude_at);
        assert!(rendered.contains("SPRINGS"));
    }

    #[test]
    fn normalize_output_matches_known_form() {
        let canonical =
            Canonicalizer::new().canonicalize_lossy("22959 E SMOKY HILL RD, BLDG E APT E101");
        insta::assert_snapshot!(canonical, @"22959 E Smoky Hill Rd, Bldg E Apt E101");
    }

    #[test]
    fn config_overrides_apply() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("run.json");
        fs::write(&path, r#"{"data_dir": "data", "partitions": ["80015"]}"#)
            .expect("write config");
        let config = load_config(&path).expect("load config");
        assert_eq!(config.partitions, vec!["80015"]);
    }
}
