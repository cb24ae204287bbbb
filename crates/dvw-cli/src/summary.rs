use anyhow::Result;
use chrono::TimeDelta;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dvw_model::Severity;
use dvw_validate::{Diagnostic, ValidationReport};

use crate::cli::ReportFormatArg;

pub fn print_report(report: &ValidationReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Json => println!("{}", render_json(report)?),
        ReportFormatArg::Table => print_tables(report),
    }
    Ok(())
}

pub fn render_json(report: &ValidationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn print_tables(report: &ValidationReport) {
    if report.is_empty() {
        println!("No problems found.");
        return;
    }
    println!("{}", diagnostic_table(&report.diagnostics));
    println!();
    println!("{}", rule_table(report));
}

fn diagnostic_table(diagnostics: &[Diagnostic]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Video"),
        header_cell("Message"),
        header_cell("Scout line"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for diagnostic in diagnostics {
        table.add_row(vec![
            match diagnostic.file_line_number {
                Some(line) => Cell::new(line),
                None => dim_cell("-"),
            },
            match diagnostic.video_time {
                Some(time) => Cell::new(format_video_time(time)),
                None => dim_cell("-"),
            },
            Cell::new(&diagnostic.message),
            match &diagnostic.file_line {
                Some(line) => dim_cell(line),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

fn rule_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Reported"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for count in report.rule_counts.iter().filter(|count| count.reported > 0) {
        let severity = count.rule.severity();
        table.add_row(vec![
            Cell::new(count.rule.id()),
            Cell::new(count.rule.category().label()),
            severity_cell(severity),
            Cell::new(count.reported).fg(severity_color(severity)),
        ]);
    }
    let totals = report.severity_counts;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} major, {} moderate, {} minor",
            totals.major, totals.moderate, totals.minor
        )),
        dim_cell("-"),
        Cell::new(report.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// `m:ss`, or `h:mm:ss` past the hour.
pub fn format_video_time(time: TimeDelta) -> String {
    let total = time.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Major => Cell::new("MAJOR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Moderate => Cell::new("MODERATE").fg(Color::Yellow),
        Severity::Minor => Cell::new("MINOR").fg(Color::DarkGrey),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Major => Color::Red,
        Severity::Moderate => Color::Yellow,
        Severity::Minor => Color::DarkGrey,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvw_validate::{RuleCount, RuleId, SeverityCounts};

    #[test]
    fn video_times_read_as_clock() {
        assert_eq!(format_video_time(TimeDelta::seconds(7)), "0:07");
        assert_eq!(format_video_time(TimeDelta::seconds(1327)), "22:07");
        assert_eq!(format_video_time(TimeDelta::seconds(3725)), "1:02:05");
    }

    #[test]
    fn rule_table_lists_only_rules_that_reported() {
        let report = ValidationReport {
            diagnostics: Vec::new(),
            rule_counts: vec![
                RuleCount {
                    rule: RuleId::AceCoding,
                    reported: 2,
                },
                RuleCount {
                    rule: RuleId::DuplicateRows,
                    reported: 0,
                },
            ],
            severity_counts: SeverityCounts {
                major: 2,
                moderate: 0,
                minor: 0,
            },
        };
        let rendered = rule_table(&report).to_string();
        assert!(rendered.contains(RuleId::AceCoding.id()));
        assert!(!rendered.contains(RuleId::DuplicateRows.id()));
        assert!(rendered.contains("TOTAL"));
    }

    #[test]
    fn json_report_carries_counts() {
        let report = ValidationReport {
            diagnostics: vec![Diagnostic {
                message: "Winning serve not coded as an ace".to_string(),
                file_line_number: Some(12),
                video_time: Some(TimeDelta::seconds(95)),
                file_line: None,
            }],
            rule_counts: vec![RuleCount {
                rule: RuleId::AceCoding,
                reported: 1,
            }],
            severity_counts: SeverityCounts {
                major: 1,
                moderate: 0,
                minor: 0,
            },
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["diagnostics"][0]["file_line_number"], 12);
        assert_eq!(json["diagnostics"][0]["video_time"], 95);
        assert_eq!(json["severity_counts"]["major"], 1);
    }
}
