use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use dvw_ingest::{read_play_log_csv, read_roster_csv, read_source_lines};
use dvw_model::{FileType, Roster, ValidateOptions};
use dvw_validate::{RuleId, ValidationReport, validator};

use crate::cli::ValidateArgs;
use crate::summary::apply_table_style;

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Category", "Severity", "Level", "Scope", "Description"]);
    apply_table_style(&mut table);
    for rule in RuleId::ALL {
        let scope = if rule.indoor_only() {
            "indoor"
        } else {
            "all"
        };
        table.add_row(vec![
            rule.id().to_string(),
            rule.category().label().to_string(),
            rule.severity().label().to_string(),
            rule.min_level().as_level().to_string(),
            scope.to_string(),
            rule.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("check", plays = %args.plays.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = load_options(args)?;
    let source_lines = match &args.source {
        Some(path) => read_source_lines(path)
            .with_context(|| format!("read scout file {}", path.display()))?,
        None => Vec::new(),
    };
    let log = read_play_log_csv(&args.plays, source_lines)
        .with_context(|| format!("load play log {}", args.plays.display()))?;
    debug!(rows = log.len(), "play log loaded");

    let roster = match &args.roster {
        Some(path) => read_roster_csv(path, &log.home_team, &log.visiting_team)
            .with_context(|| format!("load roster {}", path.display()))?,
        None => Roster::default(),
    };

    let file_type = FileType::from(args.file_type);
    let validator =
        validator(args.level, &options, file_type.label()).context("configure validation")?;
    let report = validator.run(&log, &roster);

    info!(
        diagnostics = report.len(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(report)
}

/// Options file first, then `--setter-tip-code` overrides.
pub fn load_options(args: &ValidateArgs) -> Result<ValidateOptions> {
    let mut options = match &args.options {
        Some(path) => read_options(path)?,
        None => ValidateOptions::default(),
    };
    if !args.setter_tip_codes.is_empty() {
        options = options.with_setter_tip_codes(args.setter_tip_codes.iter().cloned());
    }
    Ok(options)
}

fn read_options(path: &Path) -> Result<ValidateOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read options {}", path.display()))?;
    ValidateOptions::from_json(&json).with_context(|| format!("parse options {}", path.display()))
}
