//! Diagnostics and the reporter that produces them.

use std::collections::HashSet;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize, Serializer};

use dvw_model::{PlayLog, Severity, ValidationLevel, VideoTimeSource};

use crate::context::Finding;
use crate::rules::RuleId;

/// One reported problem, located in the scout file where possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub message: String,
    /// 1-based line of the scout file.
    pub file_line_number: Option<usize>,
    /// Video offset, serialized as whole seconds.
    #[serde(serialize_with = "serialize_seconds")]
    pub video_time: Option<TimeDelta>,
    /// Raw scout file text of that line.
    pub file_line: Option<String>,
}

fn serialize_seconds<S: Serializer>(
    value: &Option<TimeDelta>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(delta) => serializer.serialize_some(&delta.num_seconds()),
        None => serializer.serialize_none(),
    }
}

/// Number of findings one rule reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCount {
    pub rule: RuleId,
    pub reported: usize,
}

/// Result of a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Reported findings per rule that ran, in run order.
    pub rule_counts: Vec<RuleCount>,
    /// Reported findings per severity.
    pub severity_counts: SeverityCounts,
}

/// Reported findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub major: usize,
    pub moderate: usize,
    pub minor: usize,
}

impl SeverityCounts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Major => self.major += 1,
            Severity::Moderate => self.moderate += 1,
            Severity::Minor => self.minor += 1,
        }
    }
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Turns findings into diagnostics.
///
/// Findings below the run's level are dropped. A finding with the same
/// message at the same row as an earlier one is dropped too, so two rules
/// that flag the same problem produce a single diagnostic.
pub struct Reporter<'a> {
    log: &'a PlayLog,
    video: &'a dyn VideoTimeSource,
    level: ValidationLevel,
    seen: HashSet<(String, Option<usize>)>,
    report: ValidationReport,
}

impl<'a> Reporter<'a> {
    pub fn new(log: &'a PlayLog, video: &'a dyn VideoTimeSource, level: ValidationLevel) -> Self {
        Self {
            log,
            video,
            level,
            seen: HashSet::new(),
            report: ValidationReport::default(),
        }
    }

    /// Record the findings of one rule.
    pub fn add_rule(&mut self, rule: RuleId, findings: Vec<Finding>) {
        let mut reported = 0;
        for finding in findings {
            if self.add(finding) {
                reported += 1;
            }
        }
        self.report.rule_counts.push(RuleCount { rule, reported });
    }

    /// Record one finding; returns whether it became a diagnostic.
    pub fn add(&mut self, finding: Finding) -> bool {
        let severity = finding.issue.severity();
        if !self.level.includes(severity) {
            return false;
        }
        let message = finding.issue.message();
        if !self.seen.insert((message.clone(), finding.row)) {
            return false;
        }

        let file_line_number = finding
            .row
            .and_then(|row| self.log.get(row))
            .and_then(|record| record.file_line_number);
        let file_line = file_line_number
            .and_then(|n| self.log.source_line(n))
            .map(str::to_string);
        let video_time = file_line
            .as_deref()
            .and_then(|line| self.video.video_time(line));

        self.report.severity_counts.add(severity);
        self.report.diagnostics.push(Diagnostic {
            message,
            file_line_number,
            video_time,
            file_line,
        });
        true
    }

    pub fn finish(self) -> ValidationReport {
        self.report
    }
}
